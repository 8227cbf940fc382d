// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Plain-text rendering of the listing and detail views.

use std::fmt::Write as _;

use comfy_table::{presets::UTF8_FULL, Table};
use holocron_catalog::{DetailView, ListingRow, PageButton, RelationKind, Route};

const STAR_ON: &str = "★";
const STAR_OFF: &str = "☆";

fn star(favorite: bool) -> &'static str {
    if favorite {
        STAR_ON
    } else {
        STAR_OFF
    }
}

/// Character table for one page.
pub fn listing_table(rows: &[ListingRow<'_>]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec![
            "#",
            "Name",
            "Height",
            "Mass",
            "Hair Color",
            "Skin Color",
            "Eye Color",
            "Birth Year",
            "Gender",
            "Favorite",
            "Route",
        ]);
    for (index, row) in rows.iter().enumerate() {
        let r = row.record;
        let route = row
            .id
            .map(|id| Route::Detail(id.to_owned()).path())
            .unwrap_or_default();
        table.add_row(vec![
            (index + 1).to_string(),
            r.name.clone(),
            r.height.clone(),
            r.mass.clone(),
            r.hair_color.clone(),
            r.skin_color.clone(),
            r.eye_color.clone(),
            r.birth_year.clone(),
            r.gender.clone(),
            star(row.favorite).to_owned(),
            route,
        ]);
    }
    table
}

/// Page buttons; the page on display is bracketed.
pub fn page_controls(buttons: &[PageButton]) -> String {
    buttons
        .iter()
        .map(|b| {
            if b.enabled {
                format!(" {} ", b.number)
            } else {
                format!("[{}]", b.number)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Detail card. Empty, pending, and failed relation lists all read `None`.
pub fn detail(view: &DetailView, favorite: bool) -> String {
    let r = &view.record;
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", r.name, star(favorite));
    let _ = writeln!(out, "{}", "-".repeat(40));
    let _ = writeln!(out, "Height:     {} cm", r.height);
    let _ = writeln!(out, "Mass:       {} kg", r.mass);
    let _ = writeln!(out, "Hair Color: {}", r.hair_color);
    let _ = writeln!(out, "Skin Color: {}", r.skin_color);
    let _ = writeln!(out, "Eye Color:  {}", r.eye_color);
    let _ = writeln!(out, "Birth Year: {}", r.birth_year);
    let _ = writeln!(out, "Gender:     {}", r.gender);
    let _ = writeln!(out, "Homeworld:  {}", view.homeworld_label());
    for kind in RelationKind::ALL {
        let _ = writeln!(out, "\n{kind}");
        let labels = view.labels(kind);
        if labels.is_empty() {
            let _ = writeln!(out, "  None");
        }
        for label in labels {
            let _ = writeln!(out, "  - {label}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocron_catalog::{DetailUpdate, Record};

    fn leia() -> Record {
        Record {
            name: "Leia Organa".into(),
            height: "150".into(),
            mass: "49".into(),
            homeworld: Some("https://swapi.dev/api/planets/2/".into()),
            films: vec!["https://swapi.dev/api/films/1/".into()],
            vehicles: vec!["https://swapi.dev/api/vehicles/30/".into()],
            url: "https://swapi.dev/api/people/5/".into(),
            ..Record::default()
        }
    }

    #[test]
    fn current_page_is_bracketed() {
        let buttons = holocron_catalog::pagination::controls(3, 2);
        assert_eq!(page_controls(&buttons), " 1  [2]  3 ");
    }

    #[test]
    fn table_links_rows_to_detail_routes() {
        let record = leia();
        let rows = [ListingRow {
            record: &record,
            id: Some("5"),
            favorite: true,
        }];
        let text = listing_table(&rows).to_string();
        assert!(text.contains("Leia Organa"));
        assert!(text.contains("/character/5"));
        assert!(text.contains(STAR_ON));
    }

    #[test]
    fn unresolved_relations_read_none() {
        let mut view = DetailView::new(leia());
        view.apply(DetailUpdate::Relation {
            kind: RelationKind::Films,
            labels: vec!["A New Hope".into()],
        });
        view.apply(DetailUpdate::Homeworld("Alderaan".into()));
        let text = detail(&view, false);
        assert!(text.starts_with("Leia Organa ☆"));
        assert!(text.contains("Height:     150 cm"));
        assert!(text.contains("Homeworld:  Alderaan"));
        assert!(text.contains("Films\n  - A New Hope"));
        assert!(text.contains("Vehicles\n  None"));
        assert!(text.contains("Species\n  None"));
    }
}
