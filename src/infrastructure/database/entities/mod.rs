// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// 搜索读取的表对应的 SeaORM 实体：
/// 页面与标签来自 Wiki 主库，tbdc_* 为公司权限和产品更新
pub mod page;
pub mod page_tag;
pub mod tag;
pub mod tbdc_company;
pub mod tbdc_module;
pub mod tbdc_permission;
pub mod tbdc_update;
