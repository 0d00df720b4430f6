// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram, Unit};

pub const SEARCH_QUERIES_TOTAL: &str = "search_queries_total";
pub const SEARCH_SHORT_QUERIES_TOTAL: &str = "search_short_queries_total";
pub const SEARCH_AUXILIARY_FAILURES_TOTAL: &str = "search_auxiliary_failures_total";
pub const SEARCH_DURATION_SECONDS: &str = "search_duration_seconds";

/// 注册搜索相关指标的描述
///
/// 没有安装 recorder 时调用是空操作
pub fn describe_search_metrics() {
    describe_counter!(
        SEARCH_QUERIES_TOTAL,
        "Total number of searches that reached the database"
    );
    describe_counter!(
        SEARCH_SHORT_QUERIES_TOTAL,
        "Total number of searches rejected for being shorter than the minimum length"
    );
    describe_counter!(
        SEARCH_AUXILIARY_FAILURES_TOTAL,
        "Total number of company or update lookups that failed and were skipped"
    );
    describe_histogram!(
        SEARCH_DURATION_SECONDS,
        Unit::Seconds,
        "Duration of a full search including the tag lookup"
    );
}
