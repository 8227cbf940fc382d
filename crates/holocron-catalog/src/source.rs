// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Data-source port and its HTTP adapter.

use std::future::Future;
use std::time::Duration;

use holocron_app_core::prefs::ClientPrefs;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

use crate::error::SourceError;

/// Read-only port to the remote catalog: fetch one JSON document by URL.
pub trait CatalogSource: Send + Sync {
    /// GET `url` and return its JSON body.
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value, SourceError>> + Send;
}

/// `CatalogSource` over HTTP via reqwest.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    /// Build a client honouring the timeout and user agent from `prefs`.
    pub fn new(prefs: &ClientPrefs) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(prefs.request_timeout_secs))
            .user_agent(prefs.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }
}

impl CatalogSource for HttpSource {
    async fn get_json(&self, url: &str) -> Result<Value, SourceError> {
        debug!(url, "GET");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(url.to_owned()));
        }
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }
        Ok(resp.json::<Value>().await?)
    }
}
