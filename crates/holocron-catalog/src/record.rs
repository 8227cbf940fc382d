// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Wire records returned by the catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One catalog entity (a character).
///
/// Relation fields hold URLs; they become display names only after detail
/// resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    /// Display name; also the favorites key.
    pub name: String,
    /// Height in centimetres, as reported.
    pub height: String,
    /// Mass in kilograms, as reported.
    pub mass: String,
    /// Hair color.
    pub hair_color: String,
    /// Skin color.
    pub skin_color: String,
    /// Eye color.
    pub eye_color: String,
    /// Birth year (e.g. `19BBY`).
    pub birth_year: String,
    /// Gender.
    pub gender: String,
    /// Homeworld resource URL.
    pub homeworld: Option<String>,
    /// Film resource URLs.
    pub films: Vec<String>,
    /// Species resource URLs.
    pub species: Vec<String>,
    /// Vehicle resource URLs.
    pub vehicles: Vec<String>,
    /// Starship resource URLs.
    pub starships: Vec<String>,
    /// Canonical resource URL of this record.
    pub url: String,
}

impl Record {
    /// URLs held by a list-valued relation field.
    pub fn relation(&self, kind: RelationKind) -> &[String] {
        match kind {
            RelationKind::Films => &self.films,
            RelationKind::Species => &self.species,
            RelationKind::Vehicles => &self.vehicles,
            RelationKind::Starships => &self.starships,
        }
    }

    /// Homeworld URL, ignoring a blank value.
    pub fn homeworld_url(&self) -> Option<&str> {
        self.homeworld.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// The four list-valued relation fields of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// `films`
    Films,
    /// `species`
    Species,
    /// `vehicles`
    Vehicles,
    /// `starships`
    Starships,
}

impl RelationKind {
    /// Every relation kind, in display order.
    pub const ALL: [Self; 4] = [Self::Films, Self::Species, Self::Vehicles, Self::Starships];

    /// Section heading.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Films => "Films",
            Self::Species => "Species",
            Self::Vehicles => "Vehicles",
            Self::Starships => "Starships",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One page of the list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    /// Total records across all pages.
    pub count: u64,
    /// Records on this page.
    pub results: Vec<Record>,
    /// Next page URL, if any.
    pub next: Option<String>,
    /// Previous page URL, if any.
    pub previous: Option<String>,
}

/// Related resource (film, species, vehicle, starship, planet); only the label matters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Related {
    pub(crate) name: Option<String>,
    pub(crate) title: Option<String>,
}

impl Related {
    /// `name`, falling back to `title` (films carry only a title).
    pub(crate) fn into_label(self) -> Option<String> {
        self.name.or(self.title)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn decodes_swapi_person() {
        let json = r#"{
            "name": "Luke Skywalker",
            "height": "172",
            "mass": "77",
            "hair_color": "blond",
            "skin_color": "fair",
            "eye_color": "blue",
            "birth_year": "19BBY",
            "gender": "male",
            "homeworld": "https://swapi.dev/api/planets/1/",
            "films": ["https://swapi.dev/api/films/1/", "https://swapi.dev/api/films/2/"],
            "species": [],
            "vehicles": ["https://swapi.dev/api/vehicles/14/"],
            "starships": ["https://swapi.dev/api/starships/12/"],
            "created": "2014-12-09T13:50:51.644000Z",
            "url": "https://swapi.dev/api/people/1/"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Luke Skywalker");
        assert_eq!(record.relation(RelationKind::Films).len(), 2);
        assert!(record.relation(RelationKind::Species).is_empty());
        assert_eq!(record.homeworld_url(), Some("https://swapi.dev/api/planets/1/"));
    }

    #[test]
    fn missing_relations_default_to_empty() {
        let record: Record = serde_json::from_str(r#"{"name":"Nobody","homeworld":""}"#).unwrap();
        assert!(record.films.is_empty());
        assert_eq!(record.homeworld_url(), None);
    }

    #[test]
    fn related_label_prefers_name_then_title() {
        let film: Related = serde_json::from_str(r#"{"title":"A New Hope"}"#).unwrap();
        assert_eq!(film.into_label().as_deref(), Some("A New Hope"));
        let planet: Related = serde_json::from_str(r#"{"name":"Tatooine"}"#).unwrap();
        assert_eq!(planet.into_label().as_deref(), Some("Tatooine"));
    }
}
