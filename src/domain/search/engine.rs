// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_options::SearchOptions;
use crate::domain::models::search_result::SearchResponse;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Run a search query.
    ///
    /// Queries shorter than two characters return an empty response
    /// instead of an error.
    async fn query(&self, q: &str, opts: &SearchOptions) -> Result<SearchResponse, SearchError>;

    /// Get the name of the search engine
    fn name(&self) -> &'static str;
}
