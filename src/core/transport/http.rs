//! HTTP transport implementation.
//!
//! Serves the prompts resource plus the health and info endpoints with axum.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::ApiServer;
use crate::domains::prompts;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Run the HTTP transport until Ctrl-C.
    pub async fn run(self, server: ApiServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server, &self.config);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Prompts: GET|POST /prompts, PATCH|DELETE /prompts/{{id}}");
        info!("  → Health:  GET /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the full application router.
pub fn build_router(server: ApiServer, config: &HttpConfig) -> Router {
    let prompt_routes = prompts::router(server.prompt_service().clone());

    let mut app = Router::new()
        .route("/health", get(health_check))
        .route("/", get(root_handler))
        .with_state(server)
        .merge(prompt_routes)
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Root handler - provides API info.
async fn root_handler(State(server): State<ApiServer>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": server.name(),
        "version": server.version(),
        "transport": "HTTP",
        "endpoints": {
            "prompts": "/prompts",
            "health": "/health"
        }
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::core::config::AuthConfig;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app() -> Router {
        let mut config = Config::default();
        config.auth = AuthConfig::parse_tokens("token-u1:U1,token-u2:U2");
        let http = config.http.clone();
        build_router(ApiServer::new(config), &http)
    }

    async fn body_json(resp: axum::response::Response) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let resp = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["status"], json!("healthy"));
    }

    #[tokio::test]
    async fn test_root_reports_name() {
        let resp = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(resp).await["name"], json!("prompts-api"));
    }

    #[tokio::test]
    async fn test_create_then_list_through_full_router() {
        let app = app();

        let create = Request::post("/prompts")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, "Bearer token-u1")
            .body(Body::from(json!({"prompt": {"title": "x"}}).to_string()))
            .unwrap();
        let resp = app.clone().oneshot(create).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = app
            .oneshot(Request::get("/prompts").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert_eq!(body["prompts"][0]["owner"], json!("U1"));
        assert_eq!(body["prompts"][0]["title"], json!("x"));
    }
}
