// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code, clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use holocron_catalog::{CatalogClient, CatalogSource, SourceError};
use serde_json::{json, Value};

pub const BASE: &str = "https://swapi.test/api/";

enum Reply {
    Json(Value),
    Fail,
}

struct Scripted {
    delay: Duration,
    reply: Reply,
}

/// Canned responses keyed by URL, each with an optional delay (use paused time).
#[derive(Default)]
pub struct ScriptedSource {
    routes: HashMap<String, Scripted>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok(self, url: &str, body: Value) -> Self {
        self.ok_after(url, 0, body)
    }

    pub fn ok_after(mut self, url: &str, ms: u64, body: Value) -> Self {
        self.routes.insert(
            url.to_owned(),
            Scripted {
                delay: Duration::from_millis(ms),
                reply: Reply::Json(body),
            },
        );
        self
    }

    pub fn fail_after(mut self, url: &str, ms: u64) -> Self {
        self.routes.insert(
            url.to_owned(),
            Scripted {
                delay: Duration::from_millis(ms),
                reply: Reply::Fail,
            },
        );
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn into_client(self) -> CatalogClient<Self> {
        CatalogClient::new(self, BASE)
    }
}

impl CatalogSource for ScriptedSource {
    async fn get_json(&self, url: &str) -> Result<Value, SourceError> {
        self.calls.lock().unwrap().push(url.to_owned());
        let Some(scripted) = self.routes.get(url) else {
            return Err(SourceError::NotFound(url.to_owned()));
        };
        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        match &scripted.reply {
            Reply::Json(body) => Ok(body.clone()),
            Reply::Fail => Err(SourceError::Status {
                url: url.to_owned(),
                status: 500,
            }),
        }
    }
}

pub fn url(path: &str) -> String {
    format!("https://swapi.test/api/{path}")
}

pub fn person(id: u32, name: &str) -> Value {
    json!({
        "name": name,
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY",
        "gender": "male",
        "homeworld": url("planets/1/"),
        "films": [],
        "species": [],
        "vehicles": [],
        "starships": [],
        "url": url(&format!("people/{id}/")),
    })
}

pub fn named(name: &str) -> Value {
    json!({ "name": name })
}

pub fn titled(title: &str) -> Value {
    json!({ "title": title })
}
