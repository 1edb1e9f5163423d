//! Capability discovery routes.
//!
//! Discovery is side-effect free and may be called any number of times, in
//! any order relative to build. The orchestrator uses it to validate a
//! pipeline configuration before ever invoking synthesis.

use axum::{Json, Router, extract::State, routing::get};
use pipehook_core::HookMetadata;
use serde::Serialize;
use std::sync::Arc;

use crate::state::AppState;

/// Create discovery router
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/pipeline-type", get(get_pipeline_type))
        .route("/hooks", get(list_hooks))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTypeResponse {
    pub pipeline_type: String,
}

/// GET /api/pipeline-type - Identifier of the target pipeline engine
pub async fn get_pipeline_type(State(state): State<Arc<AppState>>) -> Json<PipelineTypeResponse> {
    Json(PipelineTypeResponse {
        pipeline_type: state.catalog.pipeline_type().to_string(),
    })
}

/// GET /api/hooks - Capability records for every hook, in declaration order
pub async fn list_hooks(State(state): State<Arc<AppState>>) -> Json<Vec<HookMetadata>> {
    Json(state.catalog.metadata().to_vec())
}
