// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::PageTag;
use crate::domain::search::page_query::PageSearchQuery;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use std::collections::HashMap;

/// 页面搜索命中行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHit {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub path: String,
    pub locale: String,
}

/// 页面搜索仓库特质
///
/// 执行已构造好的加权查询，结果按相关度降序、标题升序排列
#[async_trait]
pub trait PageSearchRepository: Send + Sync {
    async fn search_pages(&self, query: &PageSearchQuery) -> Result<Vec<PageHit>, RepositoryError>;
}

/// 页面标签仓库特质
#[async_trait]
pub trait PageTagRepository: Send + Sync {
    /// 一次批量查询给定页面的全部标签
    async fn find_tags_by_page_ids(
        &self,
        page_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<PageTag>>, RepositoryError>;
}
