// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含检索模型、查询构建、相关性评分、仓库接口与搜索服务
pub mod domain;

/// 基础设施模块
///
/// 提供数据库连接、实体、仓库实现与指标
pub mod infrastructure;

/// 工具模块
///
/// 提供错误类型与日志初始化
pub mod utils;
