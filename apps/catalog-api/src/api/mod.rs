//! API routes module

pub mod health;
pub mod products;

use axum::{middleware, routing::get, Router};
use axum_helpers::{health_router, server::create_router};
use tower_http::services::ServeDir;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Full application router: `/api`, docs, operational routes and middleware
pub fn app(state: &AppState) -> Router {
    create_router::<ApiDoc>(routes(state), root_routes(state), state.config.cors.clone())
}

/// Routes nested under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/product", products::router(state))
        .route_layer(middleware::from_fn(observability::metrics_middleware))
}

/// Top-level routes: health, readiness, metrics and uploaded images
pub fn root_routes(state: &AppState) -> Router {
    Router::new()
        .merge(health_router(state.config.app))
        .merge(health::router(state.clone()))
        .route("/metrics", get(observability::metrics_handler))
        .nest_service("/static", ServeDir::new(&state.config.upload_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use core_config::{app_info, cors::CorsConfig, server::ServerConfig};
    use database::postgres::PostgresConfig;
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use serde_json::Value;
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn state_with(db: MockDatabase, upload_dir: PathBuf) -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                database: PostgresConfig::new("postgres://catalog@localhost/products"),
                server: ServerConfig::default(),
                cors: CorsConfig::parse("http://localhost:3000"),
                environment: Environment::Development,
                upload_dir,
            },
            db: db.into_connection(),
        }
    }

    fn test_app() -> Router {
        let db = MockDatabase::new(DatabaseBackend::Postgres);
        app(&state_with(db, std::env::temp_dir()))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_name_and_version() {
        let response = test_app().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["name"], "catalog_api");
    }

    #[tokio::test]
    async fn test_ready_is_unavailable_when_database_fails() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".into())]);
        let app = app(&state_with(db, std::env::temp_dir()));

        let response = app.oneshot(get("/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = json_body(response).await;
        assert_eq!(body["database"], "disconnected");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let response = test_app().oneshot(get("/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_product_types_are_served_under_api() {
        let response = test_app().oneshot(get("/api/product/type")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["types"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_invalid_product_id_under_api() {
        let response = test_app().oneshot(get("/api/product/abc")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"], "Invalid product id");
    }

    #[tokio::test]
    async fn test_preflight_is_answered_without_routing() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/api/product/42")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();

        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn test_uploaded_files_are_served_statically() {
        let dir = std::env::temp_dir().join(format!("catalog-static-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("20240101_120000_photo.png"), b"png").unwrap();

        let db = MockDatabase::new(DatabaseBackend::Postgres);
        let app = app(&state_with(db, dir.clone()));

        let response = app
            .oneshot(get("/static/20240101_120000_photo.png"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
