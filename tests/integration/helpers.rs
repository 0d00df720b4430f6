// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{FixedOffset, TimeZone};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use std::sync::Arc;
use wikisearch::config::settings::DatabaseKind;
use wikisearch::domain::services::search_service::SearchServiceConfig;
use wikisearch::infrastructure::database::entities::{
    page, page_tag, tag, tbdc_company, tbdc_module, tbdc_permission, tbdc_update,
};
use wikisearch::infrastructure::repositories::{build_search_service, DbSearchService};

/// 迁移后的 SQLite 内存库
///
/// 单连接池，保证整个测试期间看到同一个内存库
pub async fn setup_db() -> Arc<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await.expect("connect sqlite memory db");
    Migrator::up(&db, None).await.expect("run migrations");
    Arc::new(db)
}

pub fn service(db: Arc<DatabaseConnection>, max_hits: u64) -> DbSearchService {
    build_search_service(
        db,
        SearchServiceConfig {
            max_hits,
            database_kind: DatabaseKind::Sqlite,
            auxiliary_locale: "en".to_string(),
        },
    )
}

pub struct PageSeed<'a> {
    pub id: i32,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub content: Option<&'a str>,
    pub path: &'a str,
    pub locale: &'a str,
    pub published: bool,
}

impl<'a> PageSeed<'a> {
    pub fn new(id: i32, title: &'a str) -> Self {
        Self {
            id,
            title,
            description: None,
            content: None,
            path: "",
            locale: "en",
            published: true,
        }
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn content(mut self, content: &'a str) -> Self {
        self.content = Some(content);
        self
    }

    pub fn path(mut self, path: &'a str) -> Self {
        self.path = path;
        self
    }

    pub fn locale(mut self, locale: &'a str) -> Self {
        self.locale = locale;
        self
    }

    pub fn unpublished(mut self) -> Self {
        self.published = false;
        self
    }

    pub async fn insert(self, db: &DatabaseConnection) {
        let path = if self.path.is_empty() {
            format!("page-{}", self.id)
        } else {
            self.path.to_string()
        };

        page::ActiveModel {
            id: Set(self.id),
            path: Set(path),
            title: Set(self.title.to_string()),
            description: Set(self.description.map(str::to_string)),
            content: Set(self.content.map(str::to_string)),
            render: Set(None),
            locale_code: Set(self.locale.to_string()),
            is_published: Set(self.published),
        }
        .insert(db)
        .await
        .expect("insert page");
    }
}

pub async fn insert_tag(db: &DatabaseConnection, id: i32, name: &str) {
    tag::ActiveModel {
        id: Set(id),
        tag: Set(name.to_string()),
        title: Set(Some(name.to_string())),
    }
    .insert(db)
    .await
    .expect("insert tag");
}

pub async fn tag_page(db: &DatabaseConnection, page_id: i32, tag_id: i32) {
    page_tag::ActiveModel {
        page_id: Set(page_id),
        tag_id: Set(tag_id),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert page tag");
}

pub async fn insert_company(db: &DatabaseConnection, id: i32, name: &str) {
    insert_company_with_status(db, id, name, true).await;
}

pub async fn insert_company_with_status(db: &DatabaseConnection, id: i32, name: &str, active: bool) {
    tbdc_company::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        is_active: Set(active),
    }
    .insert(db)
    .await
    .expect("insert company");
}

pub async fn insert_module(db: &DatabaseConnection, id: i32, name: &str) {
    tbdc_module::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        product_id: Set(None),
    }
    .insert(db)
    .await
    .expect("insert module");
}

pub async fn insert_permission(
    db: &DatabaseConnection,
    company_id: i32,
    module_id: i32,
    rule: &str,
    description: Option<&str>,
    active: bool,
) {
    tbdc_permission::ActiveModel {
        company_id: Set(company_id),
        module_id: Set(module_id),
        rule_name: Set(rule.to_string()),
        level: Set("read".to_string()),
        description: Set(description.map(str::to_string)),
        is_active: Set(active),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("insert permission");
}

pub async fn insert_update(
    db: &DatabaseConnection,
    id: i32,
    title: &str,
    content: &str,
    summary: Option<&str>,
    published_day: Option<u32>,
) {
    let offset = FixedOffset::east_opt(0).expect("utc offset");
    let published_at = published_day.map(|day| {
        offset
            .with_ymd_and_hms(2026, 3, day, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    });

    tbdc_update::ActiveModel {
        id: Set(id),
        title: Set(title.to_string()),
        content: Set(content.to_string()),
        summary: Set(summary.map(str::to_string)),
        category_id: Set(None),
        is_published: Set(published_day.is_some()),
        published_at: Set(published_at),
    }
    .insert(db)
    .await
    .expect("insert update");
}
