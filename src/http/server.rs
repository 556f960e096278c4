//! # HTTP Server
//!
//! Combines the planet routes with a health probe and CORS into the served
//! application.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::domain::PlanetService;
use crate::observability::{Logger, Severity};
use crate::store::PlanetStore;

use super::config::HttpConfig;
use super::routes::{planet_routes, AppState};

/// HTTP server for the planet API
pub struct HttpServer {
    config: HttpConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server for the given service.
    pub fn new<S: PlanetStore + 'static>(config: HttpConfig, service: PlanetService<S>) -> Self {
        let state = Arc::new(AppState { service });
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    fn build_router<S: PlanetStore + 'static>(
        config: &HttpConfig,
        state: Arc<AppState<S>>,
    ) -> Router {
        // Permissive CORS unless origins are configured
        let cors = if config.cors_origins.is_empty() {
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

        Router::new()
            .route("/health", get(health_handler))
            .merge(planet_routes(state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address: {e}"),
            )
        })?;

        Logger::log(
            Severity::Info,
            "http_server_started",
            &[("addr", &addr.to_string())],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Liveness probe handler
async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
