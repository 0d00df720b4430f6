// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::{PageTag, ResultId, SearchResult};
use crate::domain::repositories::company_permission_repository::PermissionMatch;
use crate::domain::repositories::page_repository::PageHit;
use crate::domain::repositories::update_repository::UpdateMatch;
use std::collections::{HashMap, HashSet};

/// Maximum length of snippets synthesized from free text.
pub const SNIPPET_MAX_CHARS: usize = 160;

pub fn page_result(hit: PageHit) -> SearchResult {
    SearchResult::new(
        ResultId::Page(hit.id),
        hit.title.unwrap_or_default(),
        hit.description.unwrap_or_default(),
        hit.path,
        hit.locale,
    )
}

/// Groups permission rows by company, keeping the order in which
/// companies first appear.
pub fn company_results(rows: Vec<PermissionMatch>, locale: &str) -> Vec<SearchResult> {
    struct Summary {
        company_id: i32,
        name: String,
        modules: Vec<String>,
        rules: Vec<String>,
        snippet: Option<String>,
    }

    let mut order: Vec<Summary> = Vec::new();
    let mut index: HashMap<i32, usize> = HashMap::new();

    for row in rows {
        let slot = *index.entry(row.company_id).or_insert_with(|| {
            order.push(Summary {
                company_id: row.company_id,
                name: row.company_name.clone(),
                modules: Vec::new(),
                rules: Vec::new(),
                snippet: None,
            });
            order.len() - 1
        });
        let summary = &mut order[slot];

        if let Some(module) = row.module_name.filter(|m| !m.is_empty()) {
            if !summary.modules.contains(&module) {
                summary.modules.push(module);
            }
        }
        if !summary.rules.contains(&row.rule_name) {
            summary.rules.push(row.rule_name);
        }
        if summary.snippet.is_none() {
            summary.snippet = row
                .rule_description
                .filter(|d| !d.trim().is_empty())
                .map(|d| snippet(&d));
        }
    }

    order
        .into_iter()
        .map(|s| {
            let mut description = String::new();
            if !s.modules.is_empty() {
                description.push_str("Modules: ");
                description.push_str(&s.modules.join(", "));
            }
            if !s.rules.is_empty() {
                if !description.is_empty() {
                    description.push_str(" · ");
                }
                description.push_str("Rules: ");
                description.push_str(&s.rules.join(", "));
            }
            if let Some(text) = s.snippet {
                if !description.is_empty() {
                    description.push_str(" · ");
                }
                description.push_str(&text);
            }

            SearchResult::new(
                ResultId::Company(s.company_id),
                s.name,
                description,
                format!("tbdc/companies/{}", s.company_id),
                locale.to_string(),
            )
        })
        .collect()
}

pub fn update_result(row: UpdateMatch, locale: &str) -> SearchResult {
    let description = match row.summary.filter(|s| !s.trim().is_empty()) {
        Some(summary) => summary,
        None => snippet(&row.content),
    };

    SearchResult::new(
        ResultId::Update(row.id),
        row.title,
        description,
        format!("tbdc/updates/{}", row.id),
        locale.to_string(),
    )
}

/// Concatenate sources in order, drop repeated ids and cap the list.
pub fn merge_sources(sources: Vec<Vec<SearchResult>>, max_hits: usize) -> Vec<SearchResult> {
    let mut seen: HashSet<ResultId> = HashSet::new();
    sources
        .into_iter()
        .flatten()
        .filter(|r| seen.insert(r.id))
        .take(max_hits)
        .collect()
}

/// Page ids of the taggable results, in result order.
pub fn taggable_page_ids(results: &[SearchResult]) -> Vec<i32> {
    results.iter().filter_map(|r| r.id.page_id()).collect()
}

/// Attach tags to page results; every other result gets an empty list.
pub fn attach_tags(results: &mut [SearchResult], mut tags: HashMap<i32, Vec<PageTag>>) {
    for result in results.iter_mut() {
        result.tags = match result.id {
            ResultId::Page(id) => tags.remove(&id).unwrap_or_default(),
            ResultId::Company(_) | ResultId::Update(_) => Vec::new(),
        };
    }
}

fn snippet(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= SNIPPET_MAX_CHARS {
        return collapsed;
    }
    let mut cut: String = collapsed.chars().take(SNIPPET_MAX_CHARS).collect();
    cut.push('…');
    cut
}
