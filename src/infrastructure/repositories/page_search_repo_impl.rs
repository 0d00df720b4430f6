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

use crate::domain::repositories::page_repository::{PageHit, PageSearchRepository};
use crate::domain::search::page_query::PageSearchQuery;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, FromQueryResult)]
struct PageHitRow {
    id: i32,
    title: Option<String>,
    description: Option<String>,
    path: String,
    locale: String,
}

impl From<PageHitRow> for PageHit {
    fn from(row: PageHitRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            path: row.path,
            locale: row.locale,
        }
    }
}

/// 页面检索仓库实现
///
/// 语句由 [`PageSearchQuery::build_statement`] 按连接方言生成
#[derive(Clone)]
pub struct PageSearchRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl PageSearchRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PageSearchRepository for PageSearchRepositoryImpl {
    async fn search_pages(&self, query: &PageSearchQuery) -> Result<Vec<PageHit>, RepositoryError> {
        let stmt = query.build_statement(self.db.get_database_backend());
        debug!(sql = %stmt.sql, "page search statement");

        let rows = PageHitRow::find_by_statement(stmt)
            .all(self.db.as_ref())
            .await?;

        Ok(rows.into_iter().map(PageHit::from).collect())
    }
}
