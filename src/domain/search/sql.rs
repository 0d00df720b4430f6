// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::{DbBackend, Statement, Value};

/// Text columns of the `pages` table that participate in matching and scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageColumn {
    Title,
    Description,
    Content,
    Render,
    Path,
}

impl PageColumn {
    pub const SEARCHABLE: [PageColumn; 5] = [
        PageColumn::Title,
        PageColumn::Description,
        PageColumn::Content,
        PageColumn::Render,
        PageColumn::Path,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Content => "content",
            Self::Render => "render",
            Self::Path => "path",
        }
    }
}

/// Incremental SQL text plus bound values for one backend.
///
/// Placeholders are numbered `$n` on PostgreSQL and `?` elsewhere, so
/// fragments must be written in the same order they appear in the query.
#[derive(Debug)]
pub struct SqlWriter {
    backend: DbBackend,
    sql: String,
    values: Vec<Value>,
}

impl SqlWriter {
    pub fn new(backend: DbBackend) -> Self {
        Self {
            backend,
            sql: String::new(),
            values: Vec::new(),
        }
    }

    pub fn push(&mut self, fragment: &str) -> &mut Self {
        self.sql.push_str(fragment);
        self
    }

    pub fn param<V: Into<Value>>(&mut self, value: V) -> &mut Self {
        self.values.push(value.into());
        match self.backend {
            DbBackend::Postgres => {
                let n = self.values.len();
                self.sql.push('$');
                self.sql.push_str(&n.to_string());
            }
            _ => self.sql.push('?'),
        }
        self
    }

    pub fn ident(&mut self, name: &str) -> &mut Self {
        let quoted = quote_ident(self.backend, name);
        self.sql.push_str(&quoted);
        self
    }

    /// `alias.column`, both parts quoted.
    pub fn qualified(&mut self, alias: &str, name: &str) -> &mut Self {
        self.ident(alias).push(".").ident(name)
    }

    /// `LOWER(COALESCE(<column>, ''))`
    pub fn lower_text(&mut self, column: &str) -> &mut Self {
        self.push("LOWER(COALESCE(").ident(column).push(", ''))")
    }

    /// `LOWER(COALESCE(alias.column, ''))`
    pub fn lower_qualified(&mut self, alias: &str, column: &str) -> &mut Self {
        self.push("LOWER(COALESCE(").qualified(alias, column).push(", ''))")
    }

    /// ` LIKE <param> ESCAPE '\'`, with the escape literal spelled for the backend.
    pub fn like_param(&mut self, pattern: &str) -> &mut Self {
        let clause = escape_clause(self.backend);
        self.push(" LIKE ").param(pattern).push(clause)
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_statement(self) -> Statement {
        Statement::from_sql_and_values(self.backend, self.sql, self.values)
    }
}

pub fn quote_ident(backend: DbBackend, name: &str) -> String {
    match backend {
        DbBackend::MySql => format!("`{}`", name.replace('`', "``")),
        _ => format!("\"{}\"", name.replace('"', "\"\"")),
    }
}

/// MySQL treats backslash as an escape inside string literals, so the
/// single-backslash escape character has to be written twice there.
pub fn escape_clause(backend: DbBackend) -> &'static str {
    match backend {
        DbBackend::MySql => " ESCAPE '\\\\'",
        _ => " ESCAPE '\\'",
    }
}
