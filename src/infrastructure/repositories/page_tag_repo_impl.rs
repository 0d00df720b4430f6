// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::models::search_result::PageTag;
use crate::domain::repositories::page_repository::PageTagRepository;
use crate::infrastructure::database::entities::{page_tag, tag};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::*;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, FromQueryResult)]
struct PageTagRow {
    page_id: i32,
    tag: Option<String>,
}

/// 页面标签仓库实现
#[derive(Clone)]
pub struct PageTagRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl PageTagRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PageTagRepository for PageTagRepositoryImpl {
    async fn find_tags_by_page_ids(
        &self,
        page_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<PageTag>>, RepositoryError> {
        if page_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = page_tag::Entity::find()
            .select_only()
            .column_as(page_tag::Column::PageId, "page_id")
            .column_as(tag::Column::Tag, "tag")
            .left_join(tag::Entity)
            .filter(page_tag::Column::PageId.is_in(page_ids.iter().copied()))
            .order_by_asc(page_tag::Column::PageId)
            .order_by_asc(tag::Column::Tag)
            .into_model::<PageTagRow>()
            .all(self.db.as_ref())
            .await?;

        let mut tags: HashMap<i32, Vec<PageTag>> = HashMap::new();
        for row in rows {
            // 关联到已删除标签的行没有标签文本
            if let Some(tag) = row.tag {
                tags.entry(row.page_id).or_default().push(PageTag { tag });
            }
        }
        Ok(tags)
    }
}
