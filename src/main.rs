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

use clap::Parser;
use std::sync::Arc;
use tracing::info;
use wikisearch::config::settings::Settings;
use wikisearch::domain::models::search_options::SearchOptions;
use wikisearch::domain::services::search_service::SearchServiceConfig;
use wikisearch::infrastructure::database::connection;
use wikisearch::infrastructure::observability::metrics::describe_search_metrics;
use wikisearch::infrastructure::repositories::build_search_service;
use wikisearch::utils::telemetry;

use migration::{Migrator, MigratorTrait};

/// Search wiki pages, company permissions and product updates
#[derive(Parser, Debug, Clone)]
#[command(name = "wikisearch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
struct Args {
    /// Search query; multiple words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,

    /// Only return pages in this locale
    #[arg(long)]
    locale: Option<String>,

    /// Only return pages whose path starts with this prefix
    #[arg(long)]
    path: Option<String>,

    /// Include companies matched through their permission rules
    #[arg(long)]
    companies: bool,

    /// Include published product updates
    #[arg(long)]
    updates: bool,

    /// Skip wiki pages
    #[arg(long)]
    no_pages: bool,
}

impl Args {
    fn query_text(&self) -> String {
        self.query.join(" ")
    }

    fn search_options(&self) -> SearchOptions {
        SearchOptions {
            locale: self.locale.clone(),
            path: self.path.clone(),
            filter_pages: self.no_pages.then_some(false),
            filter_company_permissions: self.companies.then_some(true),
            filter_permissions: None,
            filter_updates: self.updates.then_some(true),
        }
    }
}

/// 主函数
///
/// 初始化日志与配置，连接数据库并执行迁移，运行一次搜索并输出 JSON
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 1. Initialize logging
    telemetry::init_telemetry();
    describe_search_metrics();

    let query = args.query_text();
    let opts = args.search_options();

    // 2. Load configuration
    let settings = Settings::new()?;
    info!(db_type = %settings.database.kind(), "Configuration loaded");

    // 3. Connect to database
    let db = Arc::new(connection::create_pool(&settings.database).await?);

    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Search
    let service = build_search_service(db, SearchServiceConfig::from(&settings));
    let response = service.search(&query, &opts).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
