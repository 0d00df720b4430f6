// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::query::NormalizedQuery;
use super::sql::{PageColumn, SqlWriter};
use crate::config::settings::DatabaseKind;

/// Characters with meaning in MySQL boolean-mode full-text queries.
const BOOLEAN_MODE_OPERATORS: &[char] = &['+', '-', '<', '>', '(', ')', '~', '*', '"', '@'];

/// How the text-match part of the page filter is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStrategy {
    /// OR-chain of `LIKE` over every searchable column.
    GenericLike,
    /// `MATCH(...) AGAINST (? IN BOOLEAN MODE)` with prefix terms.
    MySqlFulltext,
    /// One `LIKE` over the lowercase concatenation of every searchable column.
    PostgresConcatLike,
}

impl SearchStrategy {
    pub fn for_kind(kind: DatabaseKind) -> Self {
        match kind {
            DatabaseKind::MySql | DatabaseKind::MariaDb => Self::MySqlFulltext,
            DatabaseKind::Postgres => Self::PostgresConcatLike,
            DatabaseKind::Sqlite => Self::GenericLike,
        }
    }

    /// Writes the text-match predicate (without the published/locale/path filters).
    pub fn write_match(&self, w: &mut SqlWriter, query: &NormalizedQuery) {
        match self {
            Self::GenericLike => write_generic_match(w, query),
            Self::MySqlFulltext => match boolean_mode_query(query) {
                Some(against) => {
                    w.push("MATCH(");
                    for (i, column) in PageColumn::SEARCHABLE.iter().enumerate() {
                        if i > 0 {
                            w.push(", ");
                        }
                        w.ident(column.name());
                    }
                    w.push(") AGAINST (").param(against).push(" IN BOOLEAN MODE)");
                }
                // Nothing usable for the full-text parser.
                None => write_generic_match(w, query),
            },
            Self::PostgresConcatLike => {
                w.push("LOWER(");
                for (i, column) in PageColumn::SEARCHABLE.iter().enumerate() {
                    if i > 0 {
                        w.push(" || ' ' || ");
                    }
                    w.push("COALESCE(").ident(column.name()).push(", '')");
                }
                w.push(")").like_param(&query.like);
            }
        }
    }
}

/// `(whole-query group) OR ((term1 group) AND (term2 group) ...)`.
///
/// The per-term conjunction only applies with more than one term.
fn write_generic_match(w: &mut SqlWriter, query: &NormalizedQuery) {
    if !query.has_multiple_terms() {
        write_column_group(w, &query.like);
        return;
    }

    w.push("(");
    write_column_group(w, &query.like);
    w.push(" OR (");
    for (i, term) in query.terms.iter().enumerate() {
        if i > 0 {
            w.push(" AND ");
        }
        write_column_group(w, &term.like);
    }
    w.push("))");
}

/// `(LOWER(title) LIKE ? OR LOWER(description) LIKE ? OR ...)`
fn write_column_group(w: &mut SqlWriter, pattern: &str) {
    w.push("(");
    for (i, column) in PageColumn::SEARCHABLE.iter().enumerate() {
        if i > 0 {
            w.push(" OR ");
        }
        w.lower_text(column.name()).like_param(pattern);
    }
    w.push(")");
}

/// `+term1* +term2*` with boolean operators stripped from each term.
pub fn boolean_mode_query(query: &NormalizedQuery) -> Option<String> {
    let parts: Vec<String> = query
        .terms
        .iter()
        .filter_map(|term| {
            let cleaned: String = term
                .text
                .chars()
                .filter(|c| !BOOLEAN_MODE_OPERATORS.contains(c))
                .collect();
            if cleaned.is_empty() {
                None
            } else {
                Some(format!("+{}*", cleaned))
            }
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
