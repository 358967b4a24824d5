//! In-memory stand-in for the PokéAPI, served over real HTTP.
//!
//! Routes mirror the upstream layout under `/api/v2`:
//! `/{resource}` and `/{resource}/{name}`. Each path is answered from a
//! `Fixtures` table; unknown paths get the same plain-text 404 PokéAPI sends.

mod fixtures;

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tokio::net::TcpListener;
use tracing::debug;

pub use fixtures::sample;

/// How the server answers one path.
#[derive(Clone, Debug)]
pub enum Fixture {
    /// 200 with this JSON body.
    Json(Value),
    /// 200 with this body as-is, for non-JSON responses.
    Raw(String),
    /// Bare status code, e.g. a 503 during maintenance.
    Status(StatusCode),
    /// Sleep before answering with the inner fixture.
    Delayed(Duration, Box<Fixture>),
}

/// Path-to-response table. Paths are relative to `/api/v2`, without
/// leading or trailing slashes: `type`, `type/electric`, `pokemon/pikachu`.
#[derive(Clone, Debug, Default)]
pub struct Fixtures {
    entries: HashMap<String, Fixture>,
}

impl Fixtures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(mut self, path: &str, fixture: Fixture) -> Self {
        self.entries.insert(path.trim_matches('/').to_string(), fixture);
        self
    }

    pub fn json(self, path: &str, body: Value) -> Self {
        self.insert(path, Fixture::Json(body))
    }

    pub fn get(&self, path: &str) -> Option<&Fixture> {
        self.entries.get(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub type Db = Arc<Fixtures>;

pub fn app(fixtures: Fixtures) -> Router {
    let db: Db = Arc::new(fixtures);
    Router::new()
        .route("/api/v2/{resource}", get(list_resource))
        .route("/api/v2/{resource}/{name}", get(get_resource))
        .with_state(db)
}

pub async fn run(listener: TcpListener, fixtures: Fixtures) -> Result<(), std::io::Error> {
    axum::serve(listener, app(fixtures)).await
}

async fn list_resource(State(db): State<Db>, Path(resource): Path<String>) -> Response {
    respond(&db, resource).await
}

async fn get_resource(State(db): State<Db>, Path((resource, name)): Path<(String, String)>) -> Response {
    respond(&db, format!("{resource}/{name}")).await
}

async fn respond(db: &Fixtures, path: String) -> Response {
    let Some(fixture) = db.get(&path) else {
        debug!(%path, "no fixture");
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    };
    debug!(%path, "serving fixture");
    render(fixture.clone()).await
}

async fn render(mut fixture: Fixture) -> Response {
    loop {
        match fixture {
            Fixture::Json(body) => return Json(body).into_response(),
            Fixture::Raw(body) => return body.into_response(),
            Fixture::Status(status) => return status.into_response(),
            Fixture::Delayed(delay, inner) => {
                tokio::time::sleep(delay).await;
                fixture = *inner;
            }
        }
    }
}
