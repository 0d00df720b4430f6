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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::fmt;

/// 未配置或配置为 0 时使用的最大结果数
pub const DEFAULT_MAX_HITS: u64 = 50;

/// 应用程序配置设置
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 搜索配置
    pub search: SearchSettings,
}

/// 数据库配置设置
#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 数据库类型 (sqlite, mysql, mariadb, postgres)
    pub db_type: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 搜索配置设置
#[derive(Debug, Deserialize)]
pub struct SearchSettings {
    /// 单次查询返回的最大结果数
    pub max_hits: u64,
    /// 合成结果（公司、更新）使用的固定语言标记
    pub auxiliary_locale: String,
}

/// 数据库后端类型
///
/// 决定搜索谓词使用的 SQL 方言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatabaseKind {
    #[default]
    Sqlite,
    MySql,
    MariaDb,
    Postgres,
}

impl DatabaseKind {
    /// 解析配置中的数据库类型
    ///
    /// 无法识别的值回退到 SQLite 分支
    pub fn from_config_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "sqlite" | "sqlite3" => Self::Sqlite,
            "mysql" | "mysql2" => Self::MySql,
            "mariadb" => Self::MariaDb,
            "postgres" | "postgresql" | "pg" => Self::Postgres,
            other => {
                tracing::warn!(db_type = %other, "unknown database type, using sqlite search strategy");
                Self::Sqlite
            }
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sqlite => "sqlite",
            Self::MySql => "mysql",
            Self::MariaDb => "mariadb",
            Self::Postgres => "postgres",
        };
        f.write_str(name)
    }
}

impl DatabaseSettings {
    pub fn kind(&self) -> DatabaseKind {
        DatabaseKind::from_config_value(&self.db_type)
    }
}

impl SearchSettings {
    /// 有效的最大结果数，0 视为未配置
    pub fn effective_max_hits(&self) -> u64 {
        if self.max_hits == 0 {
            DEFAULT_MAX_HITS
        } else {
            self.max_hits
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `WIKISEARCH__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default DB settings
            .set_default("database.url", "sqlite://wiki.sqlite?mode=rwc")?
            .set_default("database.db_type", "sqlite")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default search settings
            .set_default("search.max_hits", DEFAULT_MAX_HITS)?
            .set_default("search.auxiliary_locale", "en")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("WIKISEARCH").separator("__"));

        builder.build()?.try_deserialize()
    }
}
