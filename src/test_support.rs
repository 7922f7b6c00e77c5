//! In-process manifest host used by the test suites.

use std::{collections::HashMap, net::SocketAddr, sync::Arc};

use async_trait::async_trait;
use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use parking_lot::Mutex;
use serde_json::{Value, json};
use tokio::{net::TcpListener, task::JoinHandle};

use crate::media::{FetchError, ManifestResponse, ManifestSource, VideoFormat};

#[derive(Default)]
struct Recorded {
    hits: Vec<String>,
    bodies: HashMap<String, String>,
    fail_status: Option<u16>,
}

type SharedRecorded = Arc<Mutex<Recorded>>;

/// Serves `/media/<format>.json` and records every request path.
pub struct ManifestServer {
    addr: SocketAddr,
    recorded: SharedRecorded,
    task: JoinHandle<()>,
}

impl ManifestServer {
    pub async fn start() -> Self {
        let recorded = SharedRecorded::default();
        let app = Router::new()
            .fallback(serve_manifest)
            .with_state(recorded.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            addr,
            recorded,
            task,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/media/", self.addr)
    }

    pub fn respond(&self, format: VideoFormat, body: Value) {
        self.respond_raw(format, &body.to_string());
    }

    pub fn respond_raw(&self, format: VideoFormat, body: &str) {
        self.recorded
            .lock()
            .bodies
            .insert(format.manifest_file().to_string(), body.to_string());
    }

    pub fn fail_with(&self, status: u16) {
        self.recorded.lock().fail_status = Some(status);
    }

    pub fn hits(&self) -> Vec<String> {
        self.recorded.lock().hits.clone()
    }

    pub fn reset(&self) {
        self.recorded.lock().hits.clear();
    }
}

impl Drop for ManifestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn serve_manifest(State(recorded): State<SharedRecorded>, uri: Uri) -> Response {
    let mut recorded = recorded.lock();
    let path = uri.path().to_string();
    recorded.hits.push(path.clone());

    if let Some(status) = recorded.fail_status {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, "manifest host failure").into_response();
    }

    let Some(file) = path.strip_prefix("/media/") else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let body = match recorded.bodies.get(file) {
        Some(body) => body.clone(),
        None if file.ends_with(".json") => json!({ "sources": [] }).to_string(),
        None => return StatusCode::NOT_FOUND.into_response(),
    };

    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// A base URL whose port had a listener a moment ago and now refuses connections.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/media/")
}

/// Manifest source that answers from memory and counts calls.
#[derive(Default)]
pub struct StubSource {
    pub calls: Mutex<Vec<VideoFormat>>,
    pub fail: bool,
}

#[async_trait]
impl ManifestSource for StubSource {
    async fn fetch(&self, format: VideoFormat) -> Result<ManifestResponse, FetchError> {
        self.calls.lock().push(format);
        if self.fail {
            return Err(FetchError::InvalidBaseUrl {
                url: "stub://".to_string(),
                reason: "stub failure".to_string(),
            });
        }
        Ok(json!({ "stub": format.as_str() }))
    }
}
