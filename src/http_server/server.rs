//! # HTTP Server
//!
//! Combines all endpoint routers into the fake registry API server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::account_routes::account_routes;
use super::ai_review_routes::ai_review_routes;
use super::config::HttpServerConfig;
use super::datasheet_routes::datasheet_routes;
use super::fake_routes::fake_routes;
use super::org_routes::org_routes;
use super::order_quote_routes::{order_quote_create_routes, order_quote_routes};
use super::package_routes::package_routes;
use super::release_routes::{build_routes, deployment_routes, release_routes};
use super::session_routes::session_routes;
use super::snippet_routes::snippet_routes;
use super::state::AppState;
use crate::observability::Logger;
use crate::store::StoreResult;

/// HTTP server for the fake registry backend.
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration and a seeded store.
    pub fn new() -> StoreResult<Self> {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a server with custom configuration and a seeded store.
    pub fn with_config(config: HttpServerConfig) -> StoreResult<Self> {
        let state = Arc::new(AppState::seeded()?);
        Ok(Self::with_state(config, state))
    }

    /// Create a server over existing application state.
    pub fn with_state(config: HttpServerConfig, state: Arc<AppState>) -> Self {
        let cors = if config.cors_origins.is_empty() {
            // Permissive for local dev tooling and test runners.
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let router = api_router(state).layer(ServiceBuilder::new().layer(cors));
        Self { config, router }
    }

    /// The socket address string this server will bind to.
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Take the router (for driving the server in tests without binding).
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
        let listener = TcpListener::bind(addr).await?;
        Logger::info(
            "SERVER_STARTED",
            &[
                ("host", &self.config.host),
                ("port", &self.config.port.to_string()),
            ],
        );
        axum::serve(listener, self.router).await
    }
}

/// Assemble every endpoint router over shared state.
///
/// Exposed so tests can drive the full route table in-process.
pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health_routes())
        .nest("/api/_fake", fake_routes(state.clone()))
        .nest("/api/accounts", account_routes(state.clone()))
        .nest("/api/sessions", session_routes(state.clone()))
        .nest("/api/orgs", org_routes(state.clone()))
        .nest("/api/packages", package_routes(state.clone()))
        .nest("/api/package_releases", release_routes(state.clone()))
        .nest("/api/package_builds", build_routes(state.clone()))
        .nest("/api/package_deployments", deployment_routes(state.clone()))
        .nest("/api/snippets", snippet_routes(state.clone()))
        .nest("/api/datasheets", datasheet_routes(state.clone()))
        .nest("/api/ai_reviews", ai_review_routes(state.clone()))
        .nest("/api/order_quote", order_quote_create_routes(state.clone()))
        .nest("/api/order_quotes", order_quote_routes(state))
}

/// Health check at the root level.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}
