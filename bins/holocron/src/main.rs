// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Holocron CLI
//!
//! Lists the character catalog page by page, resolves a character's detail
//! view (films, species, vehicles, starships, homeworld), and keeps a local
//! favorites list. One favorites store is opened per run and shared by every
//! view.

// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod browse;
mod render;
mod storage;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use holocron_app_core::config::{ConfigService, ConfigStore};
use holocron_app_core::config_port::PrefsPort;
use holocron_app_core::favorites::{FavoritesStore, SharedFavorites};
use holocron_catalog::{
    record_id, resolve_detail, CatalogClient, CatalogSource, DetailError, Listing, Route,
};
use tracing_subscriber::EnvFilter;

use crate::storage::Storage;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse the character catalog and keep favorites")]
struct Args {
    /// Catalog endpoint (overrides the saved preference)
    #[arg(long, global = true)]
    base_url: Option<String>,
    /// Directory for favorites.json and prefs.json (default: platform config dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Keep favorites and prefs in memory for this run only
    #[arg(long, global = true)]
    ephemeral: bool,
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Command to execute
    #[command(subcommand)]
    cmd: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Show one page of characters
    List {
        /// 1-indexed page number
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show one character with its related resources resolved
    Show {
        /// Record id, detail route (/character/ID), or record URL
        target: String,
    },
    /// Manage favorites
    Fav {
        #[command(subcommand)]
        action: FavAction,
    },
    /// Inspect or change saved preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
    /// Interactive list/detail browser
    Browse,
}

#[derive(clap::Subcommand, Debug)]
enum FavAction {
    /// Print favorite names
    List,
    /// Mark a name as favorite
    Add {
        /// Character name
        name: String,
    },
    /// Unmark a name
    Remove {
        /// Character name
        name: String,
    },
    /// Flip a name's favorite state
    Toggle {
        /// Character name
        name: String,
    },
}

#[derive(clap::Subcommand, Debug)]
enum PrefsAction {
    /// Print effective preferences
    Show,
    /// Persist a new catalog endpoint
    SetBaseUrl {
        /// Endpoint, e.g. https://swapi.dev/api/
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), args.verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let storage =
        Storage::open(args.data_dir.as_deref(), args.ephemeral).context("open local storage")?;
    let config = ConfigService::new(&storage);
    let mut prefs = config.prefs_or_default();
    if let Some(base_url) = args.base_url {
        prefs.base_url = base_url;
    }
    let favorites = FavoritesStore::shared(&storage);

    match args.cmd {
        Command::List { page } => {
            let client = CatalogClient::from_prefs(&prefs).context("build http client")?;
            list(&client, &favorites, page).await;
        }
        Command::Show { target } => {
            let client = CatalogClient::from_prefs(&prefs).context("build http client")?;
            let id = parse_target(&target)
                .with_context(|| format!("cannot read a record id from {target:?}"))?;
            show(&client, &favorites, &id).await;
        }
        Command::Fav { action } => fav(&favorites, action)?,
        Command::Prefs { action } => match action {
            PrefsAction::Show => {
                println!("base_url             = {}", prefs.base_url);
                println!("request_timeout_secs = {}", prefs.request_timeout_secs);
                println!("user_agent           = {}", prefs.user_agent);
                println!("storage              = {}", storage.describe());
            }
            PrefsAction::SetBaseUrl { url } => {
                prefs.base_url = url;
                config.save_prefs(&prefs).context("save prefs")?;
                println!("base_url = {}", prefs.base_url);
            }
        },
        Command::Browse => {
            let client = CatalogClient::from_prefs(&prefs).context("build http client")?;
            browse::run(&client, &favorites).await?;
        }
    }

    Ok(())
}

/// `RUST_LOG` when it parses, else `debug` with `--verbose` or `warn`.
fn log_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "warn" };
    rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// Record id from a bare id, a `/character/{id}` route, or a record URL.
fn parse_target(target: &str) -> Option<String> {
    if target.contains("://") {
        return record_id(target).map(str::to_owned);
    }
    if target.starts_with('/') {
        return match Route::parse(target)? {
            Route::Detail(id) => Some(id),
            Route::List => None,
        };
    }
    let id = target.trim();
    (!id.is_empty()).then(|| id.to_owned())
}

async fn list<S, F>(client: &CatalogClient<S>, favorites: &SharedFavorites<F>, page: u32)
where
    S: CatalogSource,
    F: ConfigStore,
{
    let mut listing = Listing::new();
    listing.fetch_page(client, page).await;
    println!("{}", render::listing_table(&listing.rows(favorites)));
    println!("{}", render::page_controls(&listing.controls()));
}

async fn show<S, F>(client: &CatalogClient<S>, favorites: &SharedFavorites<F>, id: &str)
where
    S: CatalogSource,
    F: ConfigStore,
{
    match resolve_detail(client, id).await {
        Ok(view) => {
            let favorite = favorites.contains(&view.record.name);
            print!("{}", render::detail(&view, favorite));
        }
        Err(DetailError::NotFound { .. }) => println!("Character not found"),
    }
}

fn fav<F>(favorites: &SharedFavorites<F>, action: FavAction) -> Result<()>
where
    F: ConfigStore,
{
    match action {
        FavAction::List => {
            for name in favorites.names() {
                println!("{name}");
            }
        }
        FavAction::Add { name } => {
            favorites.add(&name).context("save favorites")?;
            println!("★ {name}");
        }
        FavAction::Remove { name } => {
            favorites.remove(&name).context("save favorites")?;
            println!("☆ {name}");
        }
        FavAction::Toggle { name } => {
            let now = favorites.toggle(&name).context("save favorites")?;
            println!("{} {name}", if now { "★" } else { "☆" });
        }
    }
    Ok(())
}
