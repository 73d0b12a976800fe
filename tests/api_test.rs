//! Router-level integration tests.
//!
//! These drive the real router through `tower::ServiceExt::oneshot` over a
//! lazily-connected pool; every covered path is rejected or answered
//! before any database I/O happens, so no live PostgreSQL is required.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use assethub_api::state::AppState;
use assethub_core::config::app::{CorsConfig, ServerConfig};
use assethub_core::config::logging::LoggingConfig;
use assethub_core::config::{AppConfig, DatabaseConfig};
use assethub_database::connection::connect_options;
use assethub_database::repositories::machine::MachineRepository;
use assethub_service::machine::MachineService;
use assethub_service::report::ReportService;

fn test_router() -> Router {
    let config = AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            secret_key: "test".to_string(),
            cors: CorsConfig::default(),
        },
        database: DatabaseConfig {
            host: "localhost".to_string(),
            port: 5432,
            username: "test".to_string(),
            password: "test".to_string(),
            database: "test".to_string(),
            max_connections: 1,
            min_connections: 0,
            connect_timeout_seconds: 1,
            idle_timeout_seconds: 1,
        },
        logging: LoggingConfig::default(),
    };

    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy_with(connect_options(&config.database));
    let machine_repo = Arc::new(MachineRepository::new(pool));

    let state = AppState {
        config: Arc::new(config),
        machine_service: Arc::new(MachineService::new(Arc::clone(&machine_repo))),
        report_service: Arc::new(ReportService::new(machine_repo)),
    };

    assethub_api::build_router(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn health_answers_ok() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["status"], json!("ok"));
}

#[tokio::test]
async fn unknown_route_answers_json_404() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/relatorio")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!("NOT_FOUND"));
}

#[tokio::test]
async fn invalid_submission_collects_every_field_violation() {
    let payload = json!({
        "name": "",
        "department": "Jurídico",
        "ip_address": "999.0.0.1",
        "mac_address": "not-a-mac",
        "hostname": "ab"
    });

    let response = test_router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/machines")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], json!("VALIDATION_ERROR"));

    let details = body["details"].as_array().expect("details array");
    let fields: Vec<&str> = details
        .iter()
        .map(|v| v["field"].as_str().expect("field name"))
        .collect();
    assert_eq!(
        fields,
        vec![
            "name",
            "department",
            "ip_address",
            "mac_address",
            "hostname",
            "ram_gb",
            "storage_gb",
            "extension"
        ]
    );
}

#[tokio::test]
async fn malformed_machine_id_is_rejected() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/api/machines/not-a-uuid")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
