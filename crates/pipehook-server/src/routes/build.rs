//! Task build route.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::post,
};
use pipehook_core::{Error, Hook};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::state::AppState;

/// Create build router
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/hooks/{name}/build", post(build_hook))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequest {
    /// User-supplied variable values. Keys the hook does not recognize are
    /// ignored.
    #[serde(default)]
    pub user_vars: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildError {
    pub kind: &'static str,
    pub hook: String,
    pub message: String,
}

/// POST /api/hooks/{name}/build - Synthesize the task for one hook
pub async fn build_hook(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(req): Json<BuildRequest>,
) -> Result<Json<Hook>, (StatusCode, Json<BuildError>)> {
    state
        .catalog
        .build_hook(&name, &req.user_vars)
        .map(Json)
        .map_err(|err| {
            let (status, kind) = match &err {
                Error::UnknownHook(_) => (StatusCode::NOT_FOUND, "unknownHook"),
                Error::Serialization(_) => (StatusCode::INTERNAL_SERVER_ERROR, "serializationFailure"),
                Error::Catalog(_) => (StatusCode::INTERNAL_SERVER_ERROR, "catalogUnavailable"),
            };
            (
                status,
                Json(BuildError {
                    kind,
                    hook: name,
                    message: err.to_string(),
                }),
            )
        })
}
