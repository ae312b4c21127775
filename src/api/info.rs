//! Root informational endpoint

use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use crate::api::types::Json;

use super::state::{AppInfo, AppState};

const BANNER: &str = "Built with Love. Run with Ruk Com.";

#[derive(Debug, Default, Deserialize)]
pub struct InfoQuery {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub message: String,
    pub environment: String,
    pub version: String,
}

/// GET /
pub async fn root_info(
    State(state): State<AppState>,
    Query(query): Query<InfoQuery>,
) -> Json<InfoResponse> {
    Json(InfoResponse {
        message: build_message(&state.info, query.message.as_deref()),
        environment: state.info.environment.clone(),
        version: state.info.version.clone(),
    })
}

fn build_message(info: &AppInfo, extra: Option<&str>) -> String {
    let mut message = BANNER.to_string();

    for part in [info.test_message.as_deref(), extra].into_iter().flatten() {
        if !part.is_empty() {
            message.push(' ');
            message.push_str(part);
        }
    }

    message
}
