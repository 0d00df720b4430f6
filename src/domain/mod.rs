// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含搜索的核心业务逻辑，包括：
/// - 领域模型（models）：搜索选项、结果与响应
/// - 仓库接口（repositories）：页面、标签、公司权限和更新的数据访问抽象
/// - 搜索（search）：查询规范化、谓词构造、评分与结果合并
/// - 服务（services）：编排一次完整的搜索
///
/// 领域层只依赖仓库接口，具体的数据库访问由基础设施层实现。
pub mod models;
pub mod repositories;
pub mod search;
pub mod services;
