// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 搜索服务（search_service）：规范化查询、执行各数据源查询、
///   合并截断结果并批量补充页面标签
pub mod search_service;
