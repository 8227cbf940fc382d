// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Paginated record table.

use holocron_app_core::config::{ConfigError, ConfigStore};
use holocron_app_core::favorites::FavoritesStore;
use tracing::{debug, warn};

use crate::client::CatalogClient;
use crate::pagination::{total_pages, PageButton, PageState};
use crate::record::Record;
use crate::route::record_id;
use crate::source::CatalogSource;

/// One table row as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow<'a> {
    /// Listed record.
    pub record: &'a Record,
    /// Detail route id, when the record URL carries one.
    pub id: Option<&'a str>,
    /// Whether the record's name is a favorite.
    pub favorite: bool,
}

/// Listing state: the current page of records and where we are.
#[derive(Debug, Clone)]
pub struct Listing {
    records: Vec<Record>,
    page: PageState,
    loading: bool,
}

impl Default for Listing {
    fn default() -> Self {
        Self::new()
    }
}

impl Listing {
    /// Empty listing, loading page 1.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            page: PageState::default(),
            loading: true,
        }
    }

    /// Select page `page` and load it, replacing the current rows.
    ///
    /// On failure the rows are cleared and the page count is left as it was.
    /// Returns whether the fetch succeeded.
    pub async fn fetch_page<S>(&mut self, client: &CatalogClient<S>, page: u32) -> bool
    where
        S: CatalogSource,
    {
        self.page.current_page = page;
        self.loading = true;
        let ok = match client.fetch_page(page).await {
            Ok(fetched) => {
                self.page.total_pages = total_pages(fetched.count);
                self.records = fetched.results;
                debug!(
                    page,
                    rows = self.records.len(),
                    total_pages = self.page.total_pages,
                    "page loaded"
                );
                true
            }
            Err(err) => {
                warn!(page, %err, "error fetching records");
                self.records.clear();
                false
            }
        };
        self.loading = false;
        ok
    }

    /// Press a pagination button. Disabled buttons do nothing.
    pub async fn select<S>(&mut self, client: &CatalogClient<S>, button: PageButton) -> bool
    where
        S: CatalogSource,
    {
        match button.select() {
            Some(page) => self.fetch_page(client, page).await,
            None => false,
        }
    }

    /// Records on the current page.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Current page position.
    pub fn page(&self) -> PageState {
        self.page
    }

    /// True while a fetch is outstanding (and before the first one).
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Pagination buttons for the current state.
    pub fn controls(&self) -> Vec<PageButton> {
        self.page.controls()
    }

    /// Rows with favorite flags taken from the shared store.
    pub fn rows<'a, F>(&'a self, favorites: &FavoritesStore<F>) -> Vec<ListingRow<'a>>
    where
        F: ConfigStore,
    {
        self.records
            .iter()
            .map(|record| ListingRow {
                record,
                id: record_id(&record.url),
                favorite: favorites.contains(&record.name),
            })
            .collect()
    }

    /// Toggle the favorite on row `index`. Returns the new membership, or `None` for a bad index.
    pub fn toggle_favorite<F>(
        &self,
        index: usize,
        favorites: &FavoritesStore<F>,
    ) -> Result<Option<bool>, ConfigError>
    where
        F: ConfigStore,
    {
        match self.records.get(index) {
            Some(record) => favorites.toggle(&record.name).map(Some),
            None => Ok(None),
        }
    }
}
