// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Serialize, Serializer};
use std::fmt;

/// Identity of a search hit.
///
/// Pages keep their native integer id; company and update hits get a
/// prefixed string id only when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultId {
    Page(i32),
    Company(i32),
    Update(i32),
}

impl ResultId {
    pub fn page_id(&self) -> Option<i32> {
        match self {
            Self::Page(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(id) => write!(f, "{}", id),
            Self::Company(id) => write!(f, "tbdc-company-{}", id),
            Self::Update(id) => write!(f, "update-{}", id),
        }
    }
}

impl Serialize for ResultId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(id) => serializer.serialize_i32(*id),
            other => serializer.collect_str(other),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageTag {
    pub tag: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchResult {
    pub id: ResultId,
    pub title: String,
    pub description: String,
    pub path: String,
    pub locale: String,
    pub tags: Vec<PageTag>,
}

impl SearchResult {
    pub fn new(id: ResultId, title: String, description: String, path: String, locale: String) -> Self {
        Self {
            id,
            title,
            description,
            path,
            locale,
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    /// Always empty; kept for clients that render suggestions.
    pub suggestions: Vec<String>,
    pub total_hits: usize,
}

impl SearchResponse {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_results(results: Vec<SearchResult>) -> Self {
        let total_hits = results.len();
        Self {
            results,
            suggestions: Vec::new(),
            total_hits,
        }
    }
}
