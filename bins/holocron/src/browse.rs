// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Interactive browser: a listing view and a detail view over one shared
//! favorites store.

use std::io::Write as _;

use anyhow::{Context, Result};
use holocron_app_core::config::ConfigStore;
use holocron_app_core::favorites::SharedFavorites;
use holocron_catalog::{
    fan_out, load_detail, CatalogClient, CatalogSource, DetailUpdate, Listing,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

use crate::render;

const HELP: &str = "commands: p N (page)  s N (show row)  f N (toggle row)  f (toggle shown)  l (list)  q (quit)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Page(u32),
    Show(usize),
    Favorite(Option<usize>),
    List,
    Quit,
    Help,
}

impl Input {
    fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let cmd = words.next()?;
        let arg = words.next();
        if words.next().is_some() {
            return None;
        }
        match (cmd, arg) {
            ("p" | "page", Some(n)) => n.parse().ok().map(Self::Page),
            ("s" | "show", Some(n)) => n.parse().ok().map(Self::Show),
            ("f" | "fav", Some(n)) => n.parse().ok().map(|n| Self::Favorite(Some(n))),
            ("f" | "fav", None) => Some(Self::Favorite(None)),
            ("l" | "list", None) => Some(Self::List),
            ("q" | "quit", None) => Some(Self::Quit),
            ("h" | "help" | "?", None) => Some(Self::Help),
            _ => None,
        }
    }
}

/// Run the read-eval-print loop until `q` or end of input.
pub async fn run<S, F>(client: &CatalogClient<S>, favorites: &SharedFavorites<F>) -> Result<()>
where
    S: CatalogSource,
    F: ConfigStore,
{
    let mut listing = Listing::new();
    listing.fetch_page(client, 1).await;
    print_listing(&listing, favorites);
    println!("{HELP}");

    let mut shown: Option<String> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().context("flush stdout")?;
        let Some(line) = lines.next_line().await.context("read stdin")? else {
            break;
        };
        match Input::parse(&line) {
            Some(Input::Page(n)) => {
                match listing.controls().into_iter().find(|b| b.number == n) {
                    Some(button) if button.enabled => {
                        listing.select(client, button).await;
                    }
                    Some(_) => {}
                    None => println!("no page {n}"),
                }
                print_listing(&listing, favorites);
            }
            Some(Input::Favorite(Some(row))) => {
                let toggled = match row_index(row) {
                    Some(index) => listing
                        .toggle_favorite(index, favorites)
                        .context("save favorites")?,
                    None => None,
                };
                if toggled.is_none() {
                    println!("no row {row}");
                }
                print_listing(&listing, favorites);
            }
            Some(Input::Favorite(None)) => match &shown {
                Some(name) => {
                    let now = favorites.toggle(name).context("save favorites")?;
                    println!("{} {name}", if now { "★" } else { "☆" });
                }
                None => println!("nothing shown yet"),
            },
            Some(Input::Show(row)) => {
                let rows = listing.rows(favorites);
                match row_index(row).and_then(|i| rows.get(i)) {
                    Some(listed) => match listed.id {
                        Some(id) => {
                            let id = id.to_owned();
                            shown = show_live(client, favorites, &id).await;
                        }
                        None => println!("row {row} has no detail route"),
                    },
                    None => println!("no row {row}"),
                }
            }
            Some(Input::List) => print_listing(&listing, favorites),
            Some(Input::Quit) => break,
            Some(Input::Help) | None => println!("{HELP}"),
        }
    }
    Ok(())
}

// Rows are numbered from 1 on screen.
const fn row_index(row: usize) -> Option<usize> {
    row.checked_sub(1)
}

fn print_listing<F>(listing: &Listing, favorites: &SharedFavorites<F>)
where
    F: ConfigStore,
{
    println!("{}", render::listing_table(&listing.rows(favorites)));
    println!("{}", render::page_controls(&listing.controls()));
}

// Applies fan-out results through a channel as they land; returns the shown name.
async fn show_live<S, F>(
    client: &CatalogClient<S>,
    favorites: &SharedFavorites<F>,
    id: &str,
) -> Option<String>
where
    S: CatalogSource,
    F: ConfigStore,
{
    let Ok(mut view) = load_detail(client, id).await else {
        println!("Character not found");
        return None;
    };
    let record = view.record.clone();
    let (tx, mut rx) = mpsc::unbounded_channel::<DetailUpdate>();
    let producer = async move {
        let mut tx = tx;
        fan_out(client, &record, &mut tx).await
    };
    let consumer = async {
        while let Some(update) = rx.recv().await {
            debug!(?update, "detail update");
            view.apply(update);
        }
    };
    tokio::join!(producer, consumer);

    let favorite = favorites.contains(&view.record.name);
    print!("{}", render::detail(&view, favorite));
    Some(view.record.name)
}
