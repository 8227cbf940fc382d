// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Saved client preferences (catalog endpoint + HTTP knobs).

use serde::{Deserialize, Serialize};

/// Storage key the preferences live under.
pub const PREFS_KEY: &str = "prefs";

/// Default catalog endpoint.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api/";

/// Saved preferences for the catalog client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientPrefs {
    /// Base catalog endpoint; list and detail paths are joined onto it.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ClientPrefs {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout_secs: 10,
            user_agent: concat!("holocron/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}
