// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::query::NormalizedQuery;
use super::sql::{PageColumn, SqlWriter};

pub const TITLE_EXACT_WEIGHT: u32 = 120;
pub const TITLE_PREFIX_WEIGHT: u32 = 80;

/// Weights for the whole query contained in each column.
pub const QUERY_CONTAINS_WEIGHTS: [(PageColumn, u32); 5] = [
    (PageColumn::Title, 55),
    (PageColumn::Description, 30),
    (PageColumn::Content, 20),
    (PageColumn::Render, 15),
    (PageColumn::Path, 10),
];

/// Weights for each extracted term contained in each column.
pub const TERM_CONTAINS_WEIGHTS: [(PageColumn, u32); 5] = [
    (PageColumn::Title, 16),
    (PageColumn::Description, 8),
    (PageColumn::Content, 5),
    (PageColumn::Render, 4),
    (PageColumn::Path, 3),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// `LOWER(col) = ?`
    Equals,
    /// `LOWER(col) LIKE ? ESCAPE '\'`
    Like,
}

/// One `CASE WHEN <predicate> THEN <weight> ELSE 0 END` summand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTerm {
    pub column: PageColumn,
    pub matcher: Matcher,
    pub pattern: String,
    pub weight: u32,
}

/// Additive relevance expression evaluated per row.
///
/// Backend agnostic; every strategy orders by the same expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreExpression {
    terms: Vec<ScoreTerm>,
}

impl ScoreExpression {
    pub fn build(query: &NormalizedQuery) -> Self {
        let mut terms = Vec::with_capacity(7 + query.terms.len() * TERM_CONTAINS_WEIGHTS.len());

        terms.push(ScoreTerm {
            column: PageColumn::Title,
            matcher: Matcher::Equals,
            pattern: query.lower.clone(),
            weight: TITLE_EXACT_WEIGHT,
        });
        terms.push(ScoreTerm {
            column: PageColumn::Title,
            matcher: Matcher::Like,
            pattern: query.starts_with.clone(),
            weight: TITLE_PREFIX_WEIGHT,
        });
        for (column, weight) in QUERY_CONTAINS_WEIGHTS {
            terms.push(ScoreTerm {
                column,
                matcher: Matcher::Like,
                pattern: query.like.clone(),
                weight,
            });
        }

        for term in &query.terms {
            for (column, weight) in TERM_CONTAINS_WEIGHTS {
                terms.push(ScoreTerm {
                    column,
                    matcher: Matcher::Like,
                    pattern: term.like.clone(),
                    weight,
                });
            }
        }

        Self { terms }
    }

    pub fn terms(&self) -> &[ScoreTerm] {
        &self.terms
    }

    /// Writes `(CASE ... END + CASE ... END + ...)`.
    pub fn write_sql(&self, w: &mut SqlWriter) {
        w.push("(");
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                w.push(" + ");
            }
            w.push("CASE WHEN ").lower_text(term.column.name());
            match term.matcher {
                Matcher::Equals => {
                    w.push(" = ").param(term.pattern.as_str());
                }
                Matcher::Like => {
                    w.like_param(&term.pattern);
                }
            }
            w.push(" THEN ").push(&term.weight.to_string()).push(" ELSE 0 END");
        }
        w.push(")");
    }
}
