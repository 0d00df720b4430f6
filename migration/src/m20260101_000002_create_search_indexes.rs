// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::m20260101_000001_create_search_tables::{PageTags, Pages};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DbBackend};

/// 搜索加速索引
///
/// 所有后端都创建 (isPublished, localeCode, path) 复合索引和 pageTags(pageId) 索引；
/// PostgreSQL 额外创建拼接文档上的 pg_trgm GIN 索引，MySQL/MariaDB 创建 FULLTEXT 索引。
#[derive(DeriveMigrationName)]
pub struct Migration;

const PG_TRIGRAM_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS pages_search_doc_trgm_idx
ON pages
USING GIN (
  LOWER(
    COALESCE(title, '') || ' ' ||
    COALESCE(description, '') || ' ' ||
    COALESCE(content, '') || ' ' ||
    COALESCE(render, '') || ' ' ||
    COALESCE(path, '')
  ) gin_trgm_ops
)
WHERE "isPublished" = true
"#;

const MYSQL_FULLTEXT_INDEX: &str =
    "CREATE FULLTEXT INDEX pages_search_fulltext_idx ON pages (title, description, content, render, path)";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("pages_search_pub_locale_path_idx")
                    .table(Pages::Table)
                    .col(Pages::IsPublished)
                    .col(Pages::LocaleCode)
                    .col(Pages::Path)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("pagetags_pageid_idx")
                    .table(PageTags::Table)
                    .col(PageTags::PageId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        let db = manager.get_connection();
        match manager.get_database_backend() {
            DbBackend::Postgres => {
                db.execute_unprepared("CREATE EXTENSION IF NOT EXISTS pg_trgm")
                    .await?;
                db.execute_unprepared(PG_TRIGRAM_INDEX).await?;
            }
            DbBackend::MySql => {
                db.execute_unprepared(MYSQL_FULLTEXT_INDEX).await?;
            }
            DbBackend::Sqlite => {}
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        match manager.get_database_backend() {
            DbBackend::Postgres => {
                db.execute_unprepared("DROP INDEX IF EXISTS pages_search_doc_trgm_idx")
                    .await?;
            }
            DbBackend::MySql => {
                db.execute_unprepared("DROP INDEX pages_search_fulltext_idx ON pages")
                    .await?;
            }
            DbBackend::Sqlite => {}
        }

        manager
            .drop_index(
                Index::drop()
                    .name("pagetags_pageid_idx")
                    .table(PageTags::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("pages_search_pub_locale_path_idx")
                    .table(Pages::Table)
                    .to_owned(),
            )
            .await
    }
}
