// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Error types for catalog access.

use thiserror::Error;

/// Failure fetching or decoding one resource.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport-level failure (DNS, connect, timeout, body read).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// Non-success status other than 404.
    #[error("unexpected status {status} for {url}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// Body was not the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// Related resource carried neither `name` nor `title`.
    #[error("{0} has no name or title")]
    MissingLabel(String),
}

/// Terminal failure of detail resolution.
#[derive(Debug, Error)]
pub enum DetailError {
    /// The primary record could not be fetched.
    #[error("record {id} not found")]
    NotFound {
        /// Requested record id.
        id: String,
        /// Underlying fetch failure.
        #[source]
        source: SourceError,
    },
}
