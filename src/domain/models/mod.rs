// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了搜索的输入和输出：
/// - 搜索选项（search_options）：语言、路径前缀和数据源开关
/// - 搜索结果（search_result）：结果标识、标签和响应结构
///
/// 这些模型只在单次查询期间存在，不做持久化。
pub mod search_options;
pub mod search_result;
