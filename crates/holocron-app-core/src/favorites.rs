// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Write-through favorites store.
//!
//! One instance per process, shared as [`SharedFavorites`] by every view that
//! shows or toggles favorites. Each mutation re-serializes the whole set under
//! [`FAVORITES_KEY`] before it returns; when that write fails the in-memory set
//! is left untouched, so memory and the durable copy never disagree.
//!
//! Favorites are keyed by record display name. Two records sharing a name
//! share one favorite.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::config::{ConfigError, ConfigService, ConfigStore};

/// Storage key holding the JSON array of favorite names.
pub const FAVORITES_KEY: &str = "favorites";

/// Handle passed to every view that needs favorites.
pub type SharedFavorites<S> = Arc<FavoritesStore<S>>;

/// Insertion-ordered set of favorite record names backed by a `ConfigStore`.
pub struct FavoritesStore<S> {
    config: ConfigService<S>,
    names: Mutex<Vec<String>>,
}

impl<S> FavoritesStore<S>
where
    S: ConfigStore,
{
    /// Rehydrate from `store`. Absent or malformed data yields an empty set.
    pub fn load(store: S) -> Self {
        let config = ConfigService::new(store);
        let names = match config.load::<Vec<String>>(FAVORITES_KEY) {
            Ok(Some(stored)) => dedupe(stored),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(%err, "favorites unreadable, starting empty");
                Vec::new()
            }
        };
        debug!(count = names.len(), "favorites loaded");
        Self {
            config,
            names: Mutex::new(names),
        }
    }

    /// Load and wrap in an `Arc` for sharing between views.
    pub fn shared(store: S) -> SharedFavorites<S> {
        Arc::new(Self::load(store))
    }

    /// Membership test.
    pub fn contains(&self, name: &str) -> bool {
        self.lock().iter().any(|n| n == name)
    }

    /// Insert `name` if absent. Returns whether the set changed.
    pub fn add(&self, name: &str) -> Result<bool, ConfigError> {
        self.mutate(|names| {
            if names.iter().any(|n| n == name) {
                false
            } else {
                names.push(name.to_owned());
                true
            }
        })
    }

    /// Remove `name` if present. Returns whether the set changed.
    pub fn remove(&self, name: &str) -> Result<bool, ConfigError> {
        self.mutate(|names| {
            let before = names.len();
            names.retain(|n| n != name);
            names.len() != before
        })
    }

    /// Flip membership of `name`. Returns whether `name` is a favorite afterwards.
    pub fn toggle(&self, name: &str) -> Result<bool, ConfigError> {
        let mut now_favorite = false;
        self.mutate(|names| {
            if let Some(pos) = names.iter().position(|n| n == name) {
                names.remove(pos);
            } else {
                names.push(name.to_owned());
                now_favorite = true;
            }
            true
        })?;
        Ok(now_favorite)
    }

    /// Snapshot of the favorite names in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Number of favorites.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when nothing is favorited.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Borrow the underlying storage service.
    pub fn config(&self) -> &ConfigService<S> {
        &self.config
    }

    // The lock is held across the durable write so two togglers cannot
    // persist interleaved snapshots.
    fn mutate(&self, apply: impl FnOnce(&mut Vec<String>) -> bool) -> Result<bool, ConfigError> {
        let mut names = self.lock();
        let mut next = names.clone();
        let changed = apply(&mut next);
        self.config.save(FAVORITES_KEY, &next)?;
        *names = next;
        Ok(changed)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.names.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn dedupe(stored: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(stored.len());
    for name in stored {
        if !out.contains(&name) {
            out.push(name);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::MemoryStore;

    fn persisted(store: &FavoritesStore<MemoryStore>) -> Vec<String> {
        let raw = store.config().store().raw(FAVORITES_KEY).unwrap();
        serde_json::from_slice(&raw).unwrap()
    }

    struct FailingStore;

    impl ConfigStore for FailingStore {
        fn load_raw(&self, _key: &str) -> Result<Vec<u8>, ConfigError> {
            Ok(br#"["Leia Organa"]"#.to_vec())
        }

        fn save_raw(&self, _key: &str, _data: &[u8]) -> Result<(), ConfigError> {
            Err(ConfigError::Other("disk full".into()))
        }
    }

    #[test]
    fn empty_store_loads_empty_set() {
        let favs = FavoritesStore::load(MemoryStore::new());
        assert!(favs.is_empty());
    }

    #[test]
    fn invalid_json_loads_empty_set() {
        let favs = FavoritesStore::load(MemoryStore::with_raw(FAVORITES_KEY, "not valid json"));
        assert!(favs.is_empty());
    }

    #[test]
    fn wrong_shape_loads_empty_set() {
        let favs = FavoritesStore::load(MemoryStore::with_raw(FAVORITES_KEY, r#"{"a":1}"#));
        assert!(favs.is_empty());
    }

    #[test]
    fn stored_duplicates_collapse() {
        let favs = FavoritesStore::load(MemoryStore::with_raw(
            FAVORITES_KEY,
            r#"["Yoda","Han Solo","Yoda"]"#,
        ));
        assert_eq!(favs.names(), vec!["Yoda", "Han Solo"]);
    }

    #[test]
    fn add_is_idempotent_and_persists() {
        let favs = FavoritesStore::load(MemoryStore::new());
        assert!(favs.add("Luke Skywalker").unwrap());
        assert!(!favs.add("Luke Skywalker").unwrap());
        assert_eq!(favs.names(), vec!["Luke Skywalker"]);
        assert_eq!(persisted(&favs), vec!["Luke Skywalker"]);
    }

    #[test]
    fn remove_absent_is_noop() {
        let favs = FavoritesStore::load(MemoryStore::new());
        favs.add("C-3PO").unwrap();
        assert!(!favs.remove("R2-D2").unwrap());
        assert!(favs.remove("C-3PO").unwrap());
        assert!(favs.is_empty());
        assert!(persisted(&favs).is_empty());
    }

    #[test]
    fn toggle_reports_membership_after() {
        let favs = FavoritesStore::load(MemoryStore::new());
        assert!(favs.toggle("Darth Vader").unwrap());
        assert!(favs.contains("Darth Vader"));
        assert!(!favs.toggle("Darth Vader").unwrap());
        assert!(!favs.contains("Darth Vader"));
    }

    #[test]
    fn failed_write_leaves_memory_unchanged() {
        let favs = FavoritesStore::load(FailingStore);
        assert_eq!(favs.names(), vec!["Leia Organa"]);
        assert!(favs.toggle("Leia Organa").is_err());
        assert!(favs.add("Chewbacca").is_err());
        assert_eq!(favs.names(), vec!["Leia Organa"]);
    }

    #[test]
    fn shared_handle_is_seen_by_every_view() {
        let favs = FavoritesStore::shared(MemoryStore::new());
        let listing_view = Arc::clone(&favs);
        let detail_view = Arc::clone(&favs);
        detail_view.toggle("Obi-Wan Kenobi").unwrap();
        assert!(listing_view.contains("Obi-Wan Kenobi"));
    }
}
