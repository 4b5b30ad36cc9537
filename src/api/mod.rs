//! REST surface: liveness and build identity.

use std::time::Instant;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    started: Instant,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AppStatus {
    pub version: String,
    #[serde(default)]
    pub git_sha: String,
    pub uptime_secs: u64,
}

/// GET /status - health check
pub async fn status_handler(State(state): State<AppState>) -> Json<AppStatus> {
    Json(AppStatus {
        version: env!("NIGHTSWITCH_VERSION").to_string(),
        git_sha: env!("NIGHTSWITCH_GIT_SHA").to_string(),
        uptime_secs: state.started.elapsed().as_secs(),
    })
}
