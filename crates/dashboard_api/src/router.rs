use axum::{routing::{get, post}, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{handlers, state::SharedState};

/// Create the main application router with all API endpoints
pub fn create_router(state: SharedState) -> Router {
    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = state.static_dir.clone();

    // Build the router
    let router = Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Dashboard computations
        .route("/api/dashboard/balance", post(handlers::calculate_balance))
        .route("/api/dashboard/months", post(handlers::generate_months))
        .route("/api/dashboard/chart", post(handlers::build_chart))
        // Add shared state
        .with_state(state);

    // Dashboard page and scripts
    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    // Add middleware
    router.layer(cors).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::state::AppState;

    fn router() -> Router {
        create_router(Arc::new(AppState::default()))
    }

    async fn post_json(router: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let resp = router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let resp = router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_balance_consumption_and_generation() {
        let body = json!([
            {"resourceValue": "100", "requirementValue": "80", "monthLabel": "01/2023", "computationType": "Consumo"},
            {"resourceValue": "50", "requirementValue": "90", "monthLabel": "02/2023", "computationType": "Geracao"}
        ]);
        let (status, json) = post_json(&router(), "/api/dashboard/balance", &body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["labels"], json!(["01/2023", "02/2023"]));
        assert_eq!(json["data"][0]["balance"], 20.0);
        assert_eq!(json["data"][0]["monthIndex"], 1);
        assert_eq!(json["data"][1]["balance"], 40.0);
        assert_eq!(json["data"][1]["monthIndex"], 2);
    }

    #[tokio::test]
    async fn test_balance_accepts_wrapped_legacy_body() {
        let body = r#"{"data": [{"Recurso": 10, "Requisito": 4, "TxMes": "03/2023", "Tipo": "Consumo"}]}"#;
        let (_, json) = post_json(&router(), "/api/dashboard/balance", body).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"][0]["balance"], 6.0);
    }

    #[tokio::test]
    async fn test_balance_empty_list() {
        let (_, json) = post_json(&router(), "/api/dashboard/balance", "[]").await;
        assert_eq!(json, json!({"data": [], "labels": [], "success": true}));
    }

    #[tokio::test]
    async fn test_balance_non_numeric_fails_batch() {
        let body = json!([
            {"resourceValue": "100", "requirementValue": "80", "computationType": "Consumo"},
            {"resourceValue": "abc", "requirementValue": "80", "computationType": "Consumo"}
        ]);
        let (status, json) = post_json(&router(), "/api/dashboard/balance", &body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["kind"], "parse_error");
        assert!(json.get("data").is_none());
    }

    #[tokio::test]
    async fn test_balance_null_body_is_structured_failure() {
        let (status, json) = post_json(&router(), "/api/dashboard/balance", "null").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["kind"], "invalid_request");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_structured_failure() {
        let req = Request::builder()
            .method("POST")
            .uri("/api/dashboard/months")
            .body(Body::from(r#"{"start": "01/2023", "end": "03/2023"}"#))
            .unwrap();
        let resp = router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["kind"], "invalid_request");
    }

    #[tokio::test]
    async fn test_months_accepted() {
        let (_, json) = post_json(
            &router(),
            "/api/dashboard/months",
            r#"{"start": "01/2023", "end": "03/2023"}"#,
        )
        .await;
        assert_eq!(
            json,
            json!({"data": ["01/2023", "02/2023", "03/2023"], "success": true})
        );
    }

    #[tokio::test]
    async fn test_months_legacy_names_and_range_errors() {
        let (_, json) = post_json(
            &router(),
            "/api/dashboard/months",
            r#"{"Inicio": "2023-01-01", "Fim": "2023-02-01"}"#,
        )
        .await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["kind"], "range_error");

        let (_, json) = post_json(
            &router(),
            "/api/dashboard/months",
            r#"{"start": "01/2023", "end": "01/2024"}"#,
        )
        .await;
        assert_eq!(json["error"]["kind"], "range_error");
    }

    #[tokio::test]
    async fn test_months_bad_date() {
        let (_, json) = post_json(
            &router(),
            "/api/dashboard/months",
            r#"{"start": "yesterday", "end": "03/2023"}"#,
        )
        .await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["kind"], "date_parse_error");
    }

    #[tokio::test]
    async fn test_chart_config() {
        let body = json!([
            {"resourceValue": "100", "requirementValue": "80", "computationType": "Consumo"}
        ]);
        let (_, json) = post_json(&router(), "/api/dashboard/chart", &body.to_string()).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["categories"], json!(["Janeiro"]));
        assert_eq!(json["data"]["series"][2]["name"], "Balanço");
        assert_eq!(json["data"]["series"][2]["type"], "bar");
        assert_eq!(json["data"]["series"][2]["data"], json!([20.0]));
    }

    #[tokio::test]
    async fn test_static_dir_served_as_fallback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>dashboard</html>").unwrap();
        let state = AppState {
            static_dir: Some(dir.path().to_path_buf()),
            ..AppState::default()
        };
        let req = Request::builder().uri("/index.html").body(Body::empty()).unwrap();
        let resp = create_router(Arc::new(state)).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
