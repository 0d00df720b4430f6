// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateMatch {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub summary: Option<String>,
}

/// 产品更新仓库特质
#[async_trait]
pub trait UpdateRepository: Send + Sync {
    /// 在标题、内容和摘要中匹配 `like_pattern`，只返回已发布的更新，最新的在前
    async fn find_matching_updates(
        &self,
        like_pattern: &str,
        limit: u64,
    ) -> Result<Vec<UpdateMatch>, RepositoryError>;
}
