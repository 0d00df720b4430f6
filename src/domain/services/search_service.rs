// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{DatabaseKind, Settings, DEFAULT_MAX_HITS};
use crate::domain::models::search_options::SearchOptions;
use crate::domain::models::search_result::{SearchResponse, SearchResult};
use crate::domain::repositories::company_permission_repository::CompanyPermissionRepository;
use crate::domain::repositories::page_repository::{PageSearchRepository, PageTagRepository};
use crate::domain::repositories::update_repository::UpdateRepository;
use crate::domain::search::engine::{SearchEngine, SearchError};
use crate::domain::search::fan_in;
use crate::domain::search::page_query::PageSearchQuery;
use crate::domain::search::predicate::SearchStrategy;
use crate::domain::search::query::NormalizedQuery;
use crate::infrastructure::observability::metrics::{
    SEARCH_AUXILIARY_FAILURES_TOTAL, SEARCH_DURATION_SECONDS, SEARCH_QUERIES_TOTAL,
    SEARCH_SHORT_QUERIES_TOTAL,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Permission rows fetched per requested hit; several rules usually
/// collapse into one company result.
const PERMISSION_ROWS_PER_HIT: u64 = 10;

#[derive(Debug, Clone)]
pub struct SearchServiceConfig {
    pub max_hits: u64,
    pub database_kind: DatabaseKind,
    /// Locale reported for company and update results.
    pub auxiliary_locale: String,
}

impl Default for SearchServiceConfig {
    fn default() -> Self {
        Self {
            max_hits: DEFAULT_MAX_HITS,
            database_kind: DatabaseKind::default(),
            auxiliary_locale: "en".to_string(),
        }
    }
}

impl From<&Settings> for SearchServiceConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            max_hits: settings.search.effective_max_hits(),
            database_kind: settings.database.kind(),
            auxiliary_locale: settings.search.auxiliary_locale.clone(),
        }
    }
}

/// Relevance-weighted search over pages, company permissions and updates.
///
/// Holds no mutable state; share it behind an `Arc` across tasks.
pub struct SearchService<P, T, C, U> {
    page_repo: Arc<P>,
    tag_repo: Arc<T>,
    company_repo: Arc<C>,
    update_repo: Arc<U>,
    config: SearchServiceConfig,
}

impl<P, T, C, U> SearchService<P, T, C, U>
where
    P: PageSearchRepository + 'static,
    T: PageTagRepository + 'static,
    C: CompanyPermissionRepository + 'static,
    U: UpdateRepository + 'static,
{
    pub fn new(
        page_repo: Arc<P>,
        tag_repo: Arc<T>,
        company_repo: Arc<C>,
        update_repo: Arc<U>,
        config: SearchServiceConfig,
    ) -> Self {
        Self {
            page_repo,
            tag_repo,
            company_repo,
            update_repo,
            config,
        }
    }

    fn max_hits(&self) -> u64 {
        if self.config.max_hits == 0 {
            DEFAULT_MAX_HITS
        } else {
            self.config.max_hits
        }
    }

    pub async fn search(
        &self,
        q: &str,
        opts: &SearchOptions,
    ) -> Result<SearchResponse, SearchError> {
        let Some(query) = NormalizedQuery::parse(q) else {
            metrics::counter!(SEARCH_SHORT_QUERIES_TOTAL).increment(1);
            return Ok(SearchResponse::empty());
        };

        let started = Instant::now();
        metrics::counter!(SEARCH_QUERIES_TOTAL).increment(1);

        let max_hits = self.max_hits();
        let strategy = SearchStrategy::for_kind(self.config.database_kind);
        debug!(
            strategy = ?strategy,
            terms = query.terms.len(),
            max_hits,
            pages = opts.include_pages(),
            companies = opts.include_companies(),
            updates = opts.include_updates(),
            "running search"
        );

        let mut sources: Vec<Vec<SearchResult>> = Vec::with_capacity(3);

        // 1. Ranked pages
        if opts.include_pages() {
            let page_query = PageSearchQuery::new(query.clone(), strategy, opts, max_hits);
            let hits = self.page_repo.search_pages(&page_query).await?;
            sources.push(hits.into_iter().map(fan_in::page_result).collect());
        }

        // 2. Companies; a failure here only drops this source
        if opts.include_companies() {
            let row_limit = max_hits.saturating_mul(PERMISSION_ROWS_PER_HIT);
            match self
                .company_repo
                .find_matching_permissions(&query.like, row_limit)
                .await
            {
                Ok(rows) => sources.push(fan_in::company_results(rows, &self.config.auxiliary_locale)),
                Err(err) => {
                    warn!(source = "companies", error = %err, "auxiliary search source failed, skipping");
                    metrics::counter!(SEARCH_AUXILIARY_FAILURES_TOTAL, "source" => "companies")
                        .increment(1);
                }
            }
        }

        // 3. Updates; same degradation rule
        if opts.include_updates() {
            match self
                .update_repo
                .find_matching_updates(&query.like, max_hits)
                .await
            {
                Ok(rows) => sources.push(
                    rows.into_iter()
                        .map(|row| fan_in::update_result(row, &self.config.auxiliary_locale))
                        .collect(),
                ),
                Err(err) => {
                    warn!(source = "updates", error = %err, "auxiliary search source failed, skipping");
                    metrics::counter!(SEARCH_AUXILIARY_FAILURES_TOTAL, "source" => "updates")
                        .increment(1);
                }
            }
        }

        let mut results = fan_in::merge_sources(sources, max_hits as usize);

        // 4. One batched tag lookup for the pages that survived truncation
        let page_ids = fan_in::taggable_page_ids(&results);
        let tags = if page_ids.is_empty() {
            HashMap::new()
        } else {
            self.tag_repo.find_tags_by_page_ids(&page_ids).await?
        };
        fan_in::attach_tags(&mut results, tags);

        metrics::histogram!(SEARCH_DURATION_SECONDS).record(started.elapsed().as_secs_f64());
        debug!(hits = results.len(), "search finished");

        Ok(SearchResponse::from_results(results))
    }
}

#[async_trait]
impl<P, T, C, U> SearchEngine for SearchService<P, T, C, U>
where
    P: PageSearchRepository + 'static,
    T: PageTagRepository + 'static,
    C: CompanyPermissionRepository + 'static,
    U: UpdateRepository + 'static,
{
    async fn query(&self, q: &str, opts: &SearchOptions) -> Result<SearchResponse, SearchError> {
        self.search(q, opts).await
    }

    fn name(&self) -> &'static str {
        "db"
    }
}
