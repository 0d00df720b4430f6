// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 具体实现由基础设施层提供，测试中可以替换为内存实现。
///
/// 包含的仓库接口：
/// - 页面仓库（page_repository）：加权页面查询与批量标签查询
/// - 公司权限仓库（company_permission_repository）：匹配公司的权限规则
/// - 更新仓库（update_repository）：匹配已发布的产品更新
pub mod company_permission_repository;
pub mod page_repository;
pub mod update_repository;
