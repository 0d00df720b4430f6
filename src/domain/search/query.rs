// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Queries shorter than this (after trimming) return no results.
pub const MIN_QUERY_LENGTH: usize = 2;

/// Upper bound on scored/filtered terms per query.
pub const MAX_SEARCH_TERMS: usize = 8;

/// Escape `\`, `%` and `_` so user input matches literally inside `LIKE ... ESCAPE '\'`.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// A lowercase query token with its `%term%` pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub text: String,
    pub like: String,
}

impl Term {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            like: format!("%{}%", escape_like(text)),
        }
    }
}

/// The normalized forms of a raw query used by predicates and scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    /// Trimmed, lowercased query.
    pub lower: String,
    /// `%query%` with LIKE metacharacters escaped.
    pub like: String,
    /// `query%` with LIKE metacharacters escaped.
    pub starts_with: String,
    pub terms: Vec<Term>,
}

impl NormalizedQuery {
    /// Returns `None` when the trimmed query is below [`MIN_QUERY_LENGTH`].
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < MIN_QUERY_LENGTH {
            return None;
        }

        let lower = trimmed.to_lowercase();
        let escaped = escape_like(&lower);
        let terms = extract_terms(&lower).iter().map(|t| Term::new(t)).collect();

        Some(Self {
            like: format!("%{}%", escaped),
            starts_with: format!("{}%", escaped),
            lower,
            terms,
        })
    }

    pub fn has_multiple_terms(&self) -> bool {
        self.terms.len() > 1
    }
}

/// Split on whitespace, drop single-character tokens, de-duplicate in
/// first-seen order and keep at most [`MAX_SEARCH_TERMS`].
pub fn extract_terms(query: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for token in query.to_lowercase().split_whitespace() {
        let token = token.trim();
        if token.chars().count() <= 1 || terms.iter().any(|t| t == token) {
            continue;
        }
        terms.push(token.to_string());
        if terms.len() == MAX_SEARCH_TERMS {
            break;
        }
    }
    terms
}
