//! HTTP binding for the search pipeline.
//!
//! ## Endpoints
//!
//! - `POST /api/search` — run the provider fallback chain and compare
//! - `GET /api/health` — liveness probe

use assistant_search::{FallbackOrchestrator, SearchError, SearchRequest, SearchResponse};
use axum::Router;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// JSON error body: `{ "error": "<message>" }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Response from `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: String,
    /// Server time in RFC 3339.
    pub timestamp: String,
}

/// Shared state for axum handlers.
#[derive(Clone)]
struct AppState {
    orchestrator: Arc<FallbackOrchestrator>,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::Search(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match &self {
            ServerError::Search(SearchError::Validation(msg)) | ServerError::BadRequest(msg) => {
                msg.clone()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Build the router over `orchestrator`.
///
/// CORS is permissive: the assistant UI is served from a different origin.
pub fn router(orchestrator: FallbackOrchestrator) -> Router {
    let state = AppState {
        orchestrator: Arc::new(orchestrator),
    };

    Router::new()
        .route("/api/search", post(handle_search))
        .route("/api/health", get(handle_health))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Search HTTP server running in a background task.
pub struct SearchServer {
    /// The address the server is listening on.
    addr: SocketAddr,
    /// Handle to the background server task.
    handle: JoinHandle<()>,
}

impl SearchServer {
    /// Start the server.
    ///
    /// Binds to `{config.host}:{config.port}` (use port `0` for auto-assign)
    /// and begins serving in a background tokio task.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot bind.
    pub async fn start(config: &ServerConfig) -> crate::error::Result<Self> {
        let app = router(FallbackOrchestrator::new(&config.search));

        let bind_addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| ServerError::Bind(format!("failed to bind {bind_addr}: {e}")))?;

        let addr = listener
            .local_addr()
            .map_err(|e| ServerError::Bind(format!("failed to get local addr: {e}")))?;

        info!("search server listening on http://{addr}/api");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("search server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    /// Returns the address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Abort the server task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for SearchServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// `POST /api/search`
async fn handle_search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ServerError> {
    let request = match payload {
        Ok(Json(request)) => request,
        // A body that is not JSON carries no query.
        Err(JsonRejection::MissingJsonContentType(_)) => SearchRequest::default(),
        Err(rejection) => return Err(ServerError::BadRequest(rejection.body_text())),
    };
    info!(engine = request.engine.as_deref().unwrap_or("default"), "search request");

    let response = assistant_search::search_and_compare(&request, &state.orchestrator)
        .await
        .inspect_err(|e| {
            if !e.is_client_error() {
                tracing::error!(error = %e, "search failed");
            }
        })?;

    info!(count = response.results.len(), "search complete");
    Ok(Json(response))
}

/// `GET /api/health`
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
