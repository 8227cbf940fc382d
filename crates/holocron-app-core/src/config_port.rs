// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Prefs port shared by Holocron front ends.

use tracing::warn;

use crate::config::{ConfigError, ConfigService, ConfigStore};
use crate::prefs::{ClientPrefs, PREFS_KEY};

/// Config-facing port for loading/saving client preferences.
pub trait PrefsPort {
    /// Load client preferences (returns None if missing or unreadable).
    fn load_prefs(&self) -> Option<ClientPrefs>;
    /// Persist client preferences.
    fn save_prefs(&self, prefs: &ClientPrefs) -> Result<(), ConfigError>;

    /// Stored preferences, or defaults when nothing usable is stored.
    fn prefs_or_default(&self) -> ClientPrefs {
        self.load_prefs().unwrap_or_default()
    }
}

impl<S> PrefsPort for ConfigService<S>
where
    S: ConfigStore,
{
    fn load_prefs(&self) -> Option<ClientPrefs> {
        match self.load::<ClientPrefs>(PREFS_KEY) {
            Ok(prefs) => prefs,
            Err(err) => {
                warn!(%err, "ignoring unreadable prefs");
                None
            }
        }
    }

    fn save_prefs(&self, prefs: &ClientPrefs) -> Result<(), ConfigError> {
        self.save(PREFS_KEY, prefs)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::MemoryStore;

    #[test]
    fn garbage_prefs_fall_back_to_defaults() {
        let svc = ConfigService::new(MemoryStore::with_raw(PREFS_KEY, "{{{"));
        assert_eq!(svc.load_prefs(), None);
        assert_eq!(svc.prefs_or_default(), ClientPrefs::default());
    }

    #[test]
    fn saved_prefs_round_trip_through_the_store() {
        let svc = ConfigService::new(MemoryStore::new());
        let prefs = ClientPrefs {
            base_url: "http://127.0.0.1:9000/api/".into(),
            ..ClientPrefs::default()
        };
        svc.save_prefs(&prefs).unwrap();
        assert_eq!(svc.load_prefs(), Some(prefs));
    }
}
