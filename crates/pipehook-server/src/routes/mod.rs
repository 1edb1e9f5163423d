//! API route modules.

pub mod build;
pub mod discovery;
pub mod health;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .merge(discovery::router())
        .merge(build::router());

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use pipehook_core::{Hook, HookCatalog, HookMetadata};
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let config = Config {
            config_path: PathBuf::from("config.toml"),
            socket_path: PathBuf::from("plugin.sock"),
            pid_file: PathBuf::from("plugin.pid"),
            log_filter: "debug".to_string(),
        };
        let catalog = HookCatalog::builtin().unwrap();
        create_router(AppState::new(config, catalog))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["hooks"], 1);
    }

    #[tokio::test]
    async fn test_get_pipeline_type() {
        let response = test_router()
            .oneshot(Request::get("/api/pipeline-type").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["pipelineType"], "tekton");
    }

    #[tokio::test]
    async fn test_list_hooks() {
        let response = test_router()
            .oneshot(Request::get("/api/hooks").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let hooks: Vec<HookMetadata> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(hooks.len(), 1);
        assert_eq!(hooks[0].name, "ls");
        assert!(hooks[0].variable_schema.declares("printPath"));
    }

    #[tokio::test]
    async fn test_list_hooks_is_stable_across_calls() {
        let router = test_router();

        let first = router
            .clone()
            .oneshot(Request::get("/api/hooks").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let second = router
            .oneshot(Request::get("/api/hooks").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let a = first.into_body().collect().await.unwrap().to_bytes();
        let b = second.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(a, b);
    }

    async fn post_build(router: Router, name: &str, body: &str) -> axum::response::Response {
        router
            .oneshot(
                Request::post(format!("/api/hooks/{name}/build"))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_build_with_defaults() {
        let response = post_build(test_router(), "ls", r#"{"userVars":{}}"#).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let hook: Hook = serde_json::from_slice(&bytes).unwrap();
        assert!(hook.request_vars.is_none());
        assert!(hook.request_resources.is_none());

        let task: serde_json::Value = serde_json::from_slice(&hook.resource).unwrap();
        assert_eq!(task["name"], "ls");
        assert_eq!(task["taskSpec"]["steps"][0]["image"], "bash:4.4");
    }

    #[tokio::test]
    async fn test_build_with_overrides() {
        let body = r#"{"userVars":{"printPath":"/tmp","imageName":"alpine:3.18"}}"#;
        let response = post_build(test_router(), "ls", body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let hook: Hook = serde_json::from_slice(&bytes).unwrap();
        let task: serde_json::Value = serde_json::from_slice(&hook.resource).unwrap();
        assert_eq!(task["params"][0]["value"], "/tmp");
        assert_eq!(task["taskSpec"]["steps"][0]["image"], "alpine:3.18");
    }

    #[tokio::test]
    async fn test_build_unknown_hook_is_404() {
        let response = post_build(test_router(), "mystery", r#"{"userVars":{}}"#).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["kind"], "unknownHook");
        assert_eq!(json["hook"], "mystery");
    }

    #[tokio::test]
    async fn test_build_accepts_missing_user_vars() {
        let response = post_build(test_router(), "ls", "{}").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
