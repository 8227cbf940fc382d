// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Detail resolution: primary record, then a fan-out over its relations.
//!
//! [`load_detail`] fetches the record and returns a view whose populated
//! relation fields are [`Field::Pending`]. [`fan_out`] then runs one batch per non-empty
//! relation list plus the homeworld lookup, all concurrently, and hands each
//! result to a [`DetailSink`] as soon as it lands. A sink that reports itself
//! gone stops delivery; nothing is applied to a view that no longer exists.
//!
//! Within a batch labels keep the record's URL order. Across batches there is
//! no ordering. A failed sub-fetch fails its whole batch and only that field.

use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::client::CatalogClient;
use crate::error::DetailError;
use crate::record::{Record, RelationKind};
use crate::source::CatalogSource;

/// Resolution state of one detail field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// Fetch still in flight.
    Pending,
    /// Resolved value.
    Ready(T),
    /// Fetch failed or there is nothing to fetch.
    Unavailable,
}

impl<T> Field<T> {
    /// Resolved value, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Pending | Self::Unavailable => None,
        }
    }

    /// True while the fetch is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// One merge into a [`DetailView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailUpdate {
    /// A relation batch resolved, labels in source order.
    Relation {
        /// Which relation.
        kind: RelationKind,
        /// Labels in the record's URL order.
        labels: Vec<String>,
    },
    /// A relation batch failed.
    RelationFailed(RelationKind),
    /// Homeworld name resolved.
    Homeworld(String),
    /// Homeworld lookup failed.
    HomeworldFailed,
}

/// Displayable detail state for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// Primary record with raw relation URLs.
    pub record: Record,
    /// Homeworld display name.
    pub homeworld: Field<String>,
    films: Field<Vec<String>>,
    species: Field<Vec<String>>,
    vehicles: Field<Vec<String>>,
    starships: Field<Vec<String>>,
}

impl DetailView {
    /// Initial view: relations with URLs are pending, empty ones are already resolved.
    pub fn new(record: Record) -> Self {
        let initial = |kind: RelationKind| -> Field<Vec<String>> {
            if record.relation(kind).is_empty() {
                Field::Ready(Vec::new())
            } else {
                Field::Pending
            }
        };
        let films = initial(RelationKind::Films);
        let species = initial(RelationKind::Species);
        let vehicles = initial(RelationKind::Vehicles);
        let starships = initial(RelationKind::Starships);
        let homeworld = if record.homeworld_url().is_some() {
            Field::Pending
        } else {
            Field::Unavailable
        };
        Self {
            record,
            homeworld,
            films,
            species,
            vehicles,
            starships,
        }
    }

    /// Merge one update; touches exactly the field the update names.
    pub fn apply(&mut self, update: DetailUpdate) {
        match update {
            DetailUpdate::Relation { kind, labels } => {
                *self.relation_mut(kind) = Field::Ready(labels);
            }
            DetailUpdate::RelationFailed(kind) => *self.relation_mut(kind) = Field::Unavailable,
            DetailUpdate::Homeworld(name) => self.homeworld = Field::Ready(name),
            DetailUpdate::HomeworldFailed => self.homeworld = Field::Unavailable,
        }
    }

    /// Resolution state of a relation list.
    pub fn relation(&self, kind: RelationKind) -> &Field<Vec<String>> {
        match kind {
            RelationKind::Films => &self.films,
            RelationKind::Species => &self.species,
            RelationKind::Vehicles => &self.vehicles,
            RelationKind::Starships => &self.starships,
        }
    }

    /// Labels to display for a relation; empty until (and unless) its batch resolves.
    pub fn labels(&self, kind: RelationKind) -> &[String] {
        self.relation(kind)
            .ready()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Homeworld text: the name once resolved, the raw URL while pending.
    pub fn homeworld_label(&self) -> &str {
        match &self.homeworld {
            Field::Ready(name) => name,
            Field::Pending => self.record.homeworld_url().unwrap_or_default(),
            Field::Unavailable => "unknown",
        }
    }

    /// True once no field is pending.
    pub fn is_settled(&self) -> bool {
        !self.homeworld.is_pending()
            && RelationKind::ALL
                .iter()
                .all(|kind| !self.relation(*kind).is_pending())
    }

    fn relation_mut(&mut self, kind: RelationKind) -> &mut Field<Vec<String>> {
        match kind {
            RelationKind::Films => &mut self.films,
            RelationKind::Species => &mut self.species,
            RelationKind::Vehicles => &mut self.vehicles,
            RelationKind::Starships => &mut self.starships,
        }
    }
}

/// Receiver of fan-out results.
pub trait DetailSink {
    /// Whether the view is still around to receive updates.
    fn is_live(&self) -> bool {
        true
    }

    /// Deliver one update. Returns false once the view is gone.
    fn deliver(&mut self, update: DetailUpdate) -> bool;
}

impl DetailSink for DetailView {
    fn deliver(&mut self, update: DetailUpdate) -> bool {
        self.apply(update);
        true
    }
}

impl DetailSink for mpsc::UnboundedSender<DetailUpdate> {
    fn is_live(&self) -> bool {
        !self.is_closed()
    }

    fn deliver(&mut self, update: DetailUpdate) -> bool {
        self.send(update).is_ok()
    }
}

/// Fetch the primary record for `id`. Failure is terminal: no retry.
pub async fn load_detail<S>(client: &CatalogClient<S>, id: &str) -> Result<DetailView, DetailError>
where
    S: CatalogSource,
{
    match client.fetch_record(id).await {
        Ok(record) => Ok(DetailView::new(record)),
        Err(source) => {
            warn!(id, %source, "error fetching record");
            Err(DetailError::NotFound {
                id: id.to_owned(),
                source,
            })
        }
    }
}

enum Job<'a> {
    Relation(RelationKind, &'a [String]),
    Homeworld(&'a str),
}

async fn run_job<S>(client: &CatalogClient<S>, job: Job<'_>) -> DetailUpdate
where
    S: CatalogSource,
{
    match job {
        Job::Relation(kind, urls) => match client.fetch_labels(urls).await {
            Ok(labels) => DetailUpdate::Relation { kind, labels },
            Err(err) => {
                warn!(%kind, %err, "relation batch failed");
                DetailUpdate::RelationFailed(kind)
            }
        },
        Job::Homeworld(url) => match client.fetch_label(url).await {
            Ok(name) => DetailUpdate::Homeworld(name),
            Err(err) => {
                warn!(url, %err, "homeworld lookup failed");
                DetailUpdate::HomeworldFailed
            }
        },
    }
}

/// Resolve every relation of `record` concurrently, delivering each result as it completes.
///
/// Returns the number of updates delivered.
pub async fn fan_out<S, K>(client: &CatalogClient<S>, record: &Record, sink: &mut K) -> usize
where
    S: CatalogSource,
    K: DetailSink + ?Sized,
{
    if !sink.is_live() {
        return 0;
    }
    let jobs = RelationKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let urls = record.relation(kind);
            (!urls.is_empty()).then_some(Job::Relation(kind, urls))
        })
        .chain(record.homeworld_url().map(Job::Homeworld));
    let mut inflight: FuturesUnordered<_> = jobs.map(|job| run_job(client, job)).collect();

    let mut delivered = 0;
    while let Some(update) = inflight.next().await {
        if !sink.deliver(update) {
            debug!(name = %record.name, "detail view gone, dropping late updates");
            break;
        }
        delivered += 1;
    }
    delivered
}

/// Load `id` and run the full fan-out into the returned view.
pub async fn resolve_detail<S>(client: &CatalogClient<S>, id: &str) -> Result<DetailView, DetailError>
where
    S: CatalogSource,
{
    let mut view = load_detail(client, id).await?;
    let record = view.record.clone();
    fan_out(client, &record, &mut view).await;
    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn luke() -> Record {
        Record {
            name: "Luke Skywalker".into(),
            height: "172".into(),
            homeworld: Some("https://swapi.dev/api/planets/1/".into()),
            films: vec!["https://swapi.dev/api/films/1/".into()],
            vehicles: vec!["https://swapi.dev/api/vehicles/14/".into()],
            url: "https://swapi.dev/api/people/1/".into(),
            ..Record::default()
        }
    }

    #[test]
    fn new_view_marks_only_populated_relations_pending() {
        let view = DetailView::new(luke());
        assert!(view.relation(RelationKind::Films).is_pending());
        assert!(view.relation(RelationKind::Vehicles).is_pending());
        assert_eq!(view.relation(RelationKind::Species), &Field::Ready(vec![]));
        assert!(view.homeworld.is_pending());
        assert_eq!(view.homeworld_label(), "https://swapi.dev/api/planets/1/");
        assert!(!view.is_settled());
    }

    #[test]
    fn homeworld_merge_leaves_other_fields_alone() {
        let mut view = DetailView::new(luke());
        view.apply(DetailUpdate::Relation {
            kind: RelationKind::Films,
            labels: vec!["A New Hope".into()],
        });
        let before = view.clone();
        view.apply(DetailUpdate::Homeworld("Tatooine".into()));

        assert_eq!(view.homeworld_label(), "Tatooine");
        assert_eq!(view.record, before.record);
        for kind in RelationKind::ALL {
            assert_eq!(view.relation(kind), before.relation(kind));
        }
    }

    #[test]
    fn failed_relation_displays_empty() {
        let mut view = DetailView::new(luke());
        view.apply(DetailUpdate::RelationFailed(RelationKind::Vehicles));
        assert_eq!(view.relation(RelationKind::Vehicles), &Field::Unavailable);
        assert!(view.labels(RelationKind::Vehicles).is_empty());
    }

    #[test]
    fn settles_once_every_field_lands() {
        let mut view = DetailView::new(luke());
        view.apply(DetailUpdate::HomeworldFailed);
        view.apply(DetailUpdate::RelationFailed(RelationKind::Films));
        assert!(!view.is_settled());
        view.apply(DetailUpdate::Relation {
            kind: RelationKind::Vehicles,
            labels: vec!["Snowspeeder".into()],
        });
        assert!(view.is_settled());
        assert_eq!(view.homeworld_label(), "unknown");
    }

    #[test]
    fn closed_channel_is_not_live() {
        let (mut tx, rx) = mpsc::unbounded_channel::<DetailUpdate>();
        assert!(tx.is_live());
        drop(rx);
        assert!(!tx.is_live());
        assert!(!tx.deliver(DetailUpdate::HomeworldFailed));
    }
}
