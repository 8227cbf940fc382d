// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Catalog client for Holocron.
//!
//! The remote catalog is reached through [`CatalogSource`]; [`HttpSource`] is
//! the reqwest adapter, tests script their own. On top of it sit the listing
//! table with its pagination control and detail resolution with its
//! concurrent fan-out over related resources.

pub mod client;
pub mod detail;
pub mod error;
pub mod fanout;
pub mod listing;
pub mod pagination;
pub mod record;
pub mod route;
pub mod source;

pub use client::CatalogClient;
pub use detail::{
    fan_out, load_detail, resolve_detail, DetailSink, DetailUpdate, DetailView, Field,
};
pub use error::{DetailError, SourceError};
pub use listing::{Listing, ListingRow};
pub use pagination::{PageButton, PageState, PAGE_SIZE};
pub use record::{Page, Record, RelationKind};
pub use route::{record_id, Route};
pub use source::{CatalogSource, HttpSource};
