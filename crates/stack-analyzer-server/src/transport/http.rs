//! HTTP transport — JSON analyze endpoint and /health.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::{get, post},
    Router,
};
use stack_analyzer::{AnalysisResult, AnalyzerError, StackAnalyzer};
use tower_http::cors::{Any, CorsLayer};
use tracing::Instrument;

use crate::types::{AnalyzeRequest, ApiError, ApiResult};

/// Shared server state passed to all handlers via axum State.
pub struct ServerState {
    pub analyzer: StackAnalyzer,
}

/// Build the axum Router with all endpoints.
pub fn router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/analyze", post(handle_analyze))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state)
}

/// HTTP transport serving the analyzer.
pub struct HttpTransport {
    state: Arc<ServerState>,
}

impl HttpTransport {
    pub fn new(analyzer: StackAnalyzer) -> Self {
        Self {
            state: Arc::new(ServerState { analyzer }),
        }
    }

    /// Run the HTTP server on the given address until Ctrl-C.
    pub async fn run(&self, addr: &str) -> ApiResult<()> {
        for issue in self.state.analyzer.catalog().validate() {
            tracing::warn!("catalog: {issue}");
        }

        let app = router(self.state.clone());
        let listener = tokio::net::TcpListener::bind(addr).await?;

        tracing::info!("HTTP transport listening on {addr}");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        tracing::info!("HTTP transport stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

/// Analyze the URL in the request body.
///
/// Dropping the connection drops this future and with it any in-flight
/// upstream fetch.
async fn handle_analyze(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ApiResult<Json<AnalysisResult>> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let url = request
        .url
        .ok_or_else(|| AnalyzerError::InvalidUrl("missing url".to_string()))?;

    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("analyze", %request_id);

    let result = state.analyzer.analyze(&url).instrument(span).await?;
    Ok(Json(result))
}

/// Health check endpoint.
async fn handle_health(State(state): State<Arc<ServerState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "components": state.analyzer.catalog().len(),
    }))
}
