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

use crate::domain::repositories::update_repository::{UpdateMatch, UpdateRepository};
use crate::infrastructure::database::entities::tbdc_update;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::*;
use std::sync::Arc;

/// `LOWER(COALESCE(col, '')) LIKE pattern ESCAPE '\'`
fn lower_like(column: tbdc_update::Column, like_pattern: &str) -> SimpleExpr {
    let args: [SimpleExpr; 2] = [
        Expr::col((tbdc_update::Entity, column)).into(),
        Expr::val("").into(),
    ];
    let coalesced = Func::coalesce(args);
    Expr::expr(Func::lower(coalesced)).like(LikeExpr::new(like_pattern).escape('\\'))
}

impl From<tbdc_update::Model> for UpdateMatch {
    fn from(model: tbdc_update::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            summary: model.summary,
        }
    }
}

/// 产品更新仓库实现
#[derive(Clone)]
pub struct UpdateRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl UpdateRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn matching_query(like_pattern: &str, limit: u64) -> Select<tbdc_update::Entity> {
        tbdc_update::Entity::find()
            .filter(tbdc_update::Column::IsPublished.eq(true))
            .filter(
                Condition::any()
                    .add(lower_like(tbdc_update::Column::Title, like_pattern))
                    .add(lower_like(tbdc_update::Column::Content, like_pattern))
                    .add(lower_like(tbdc_update::Column::Summary, like_pattern)),
            )
            .order_by_desc(tbdc_update::Column::PublishedAt)
            .order_by_desc(tbdc_update::Column::Id)
            .limit(limit)
    }
}

#[async_trait]
impl UpdateRepository for UpdateRepositoryImpl {
    async fn find_matching_updates(
        &self,
        like_pattern: &str,
        limit: u64,
    ) -> Result<Vec<UpdateMatch>, RepositoryError> {
        let models = Self::matching_query(like_pattern, limit)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(UpdateMatch::from).collect())
    }
}
