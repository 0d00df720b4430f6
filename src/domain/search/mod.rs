// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索领域模块
///
/// 查询规范化、按数据库后端构造谓词、加权评分表达式，
/// 以及页面、公司和更新三个数据源的合并
pub mod engine;
pub mod fan_in;
pub mod page_query;
pub mod predicate;
pub mod query;
pub mod scoring;
pub mod sql;
