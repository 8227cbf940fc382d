// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Typed catalog calls on top of a [`CatalogSource`].

use holocron_app_core::prefs::ClientPrefs;
use serde::de::DeserializeOwned;

use crate::error::SourceError;
use crate::fanout::try_map_ordered;
use crate::record::{Page, Record, Related};
use crate::source::{CatalogSource, HttpSource};

/// Catalog endpoint plus the source used to reach it.
#[derive(Debug, Clone)]
pub struct CatalogClient<S> {
    source: S,
    base_url: String,
}

impl<S> CatalogClient<S> {
    /// Client for the catalog rooted at `base_url` (e.g. `https://swapi.dev/api/`).
    pub fn new(source: S, base_url: impl Into<String>) -> Self {
        Self {
            source,
            base_url: base_url.into(),
        }
    }

    /// Underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// List endpoint URL for 1-indexed `page`.
    pub fn page_url(&self, page: u32) -> String {
        format!("{}/people/?page={page}", self.root())
    }

    /// Detail endpoint URL for record `id`.
    pub fn record_url(&self, id: &str) -> String {
        format!("{}/people/{id}/", self.root())
    }

    fn root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl CatalogClient<HttpSource> {
    /// HTTP client built from saved preferences.
    pub fn from_prefs(prefs: &ClientPrefs) -> Result<Self, SourceError> {
        Ok(Self::new(HttpSource::new(prefs)?, prefs.base_url.clone()))
    }
}

impl<S> CatalogClient<S>
where
    S: CatalogSource,
{
    /// Fetch one page of records.
    pub async fn fetch_page(&self, page: u32) -> Result<Page, SourceError> {
        self.get(&self.page_url(page)).await
    }

    /// Fetch one record by id.
    pub async fn fetch_record(&self, id: &str) -> Result<Record, SourceError> {
        self.get(&self.record_url(id)).await
    }

    /// Display label (`name` or `title`) of the resource at `url`.
    pub async fn fetch_label(&self, url: &str) -> Result<String, SourceError> {
        let related: Related = self.get(url).await?;
        related
            .into_label()
            .ok_or_else(|| SourceError::MissingLabel(url.to_owned()))
    }

    /// Labels for every URL, fetched concurrently, in source order.
    pub async fn fetch_labels(&self, urls: &[String]) -> Result<Vec<String>, SourceError> {
        try_map_ordered(urls, |url| self.fetch_label(url)).await
    }

    async fn get<T>(&self, url: &str) -> Result<T, SourceError>
    where
        T: DeserializeOwned,
    {
        let value = self.source.get_json(url).await?;
        Ok(serde_json::from_value(value)?)
    }
}
