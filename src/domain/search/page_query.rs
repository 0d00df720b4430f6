// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::predicate::SearchStrategy;
use super::query::{escape_like, NormalizedQuery};
use super::scoring::ScoreExpression;
use super::sql::SqlWriter;
use crate::domain::models::search_options::SearchOptions;
use sea_orm::{DbBackend, Statement};

/// Everything needed to run the ranked page query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSearchQuery {
    pub query: NormalizedQuery,
    pub strategy: SearchStrategy,
    pub locale: Option<String>,
    pub path_prefix: Option<String>,
    pub limit: u64,
}

impl PageSearchQuery {
    pub fn new(
        query: NormalizedQuery,
        strategy: SearchStrategy,
        opts: &SearchOptions,
        limit: u64,
    ) -> Self {
        Self {
            query,
            strategy,
            locale: opts.locale_filter().map(str::to_string),
            path_prefix: opts.path_filter().map(str::to_string),
            limit,
        }
    }

    /// Renders the filtered, scored and limited `SELECT` for `backend`.
    ///
    /// Placeholder order is the textual order: filters, score, limit.
    pub fn build_statement(&self, backend: DbBackend) -> Statement {
        let mut w = SqlWriter::new(backend);

        w.push("SELECT ")
            .ident("id")
            .push(", ")
            .ident("title")
            .push(", ")
            .ident("description")
            .push(", ")
            .ident("path")
            .push(", ")
            .ident("localeCode")
            .push(" AS ")
            .ident("locale")
            .push(" FROM ")
            .ident("pages")
            .push(" WHERE ")
            .ident("isPublished")
            .push(" = ")
            .param(true);

        if let Some(locale) = &self.locale {
            w.push(" AND ").ident("localeCode").push(" = ").param(locale.as_str());
        }

        if let Some(prefix) = &self.path_prefix {
            let pattern = format!("{}%", escape_like(prefix));
            w.push(" AND ").ident("path").like_param(&pattern);
        }

        w.push(" AND ");
        self.strategy.write_match(&mut w, &self.query);

        w.push(" ORDER BY ");
        ScoreExpression::build(&self.query).write_sql(&mut w);
        w.push(" DESC, ").ident("title").push(" ASC LIMIT ");
        w.param(self.limit as i64);

        w.into_statement()
    }
}
