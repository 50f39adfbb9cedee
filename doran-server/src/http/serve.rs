//! Router assembly and the bind/serve entry point.

use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use storage::{ChatMessageRepository, MoodRecordRepository, SqlitePoolManager};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::http::handlers::{chat, health, records};
use crate::http::metrics::{metrics_handler, metrics_middleware};
use crate::http::rate_limit::{rate_limit_middleware, IpRateLimiter};
use crate::pipeline::ChatPipeline;

/// Shared handler state. Repositories are pool handles, cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ChatPipeline>,
    pub chat_repo: ChatMessageRepository,
    pub mood_repo: MoodRecordRepository,
    pub pool_manager: SqlitePoolManager,
    pub started_at: Instant,
}

pub fn api_router(state: AppState, limiter: Arc<IpRateLimiter>) -> Router {
    Router::new()
        .route("/chat", post(chat::chat))
        .route("/chat/history", get(chat::history))
        .route("/record", get(records::list).post(records::create))
        .route("/record/:record_id", delete(records::remove))
        .route("/health", get(health::health))
        .route("/metrics", get(metrics_handler))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(limiter, rate_limit_middleware))
        // Bounds the whole pipeline, model calls included.
        .layer(TimeoutLayer::new(Duration::from_secs(60)))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not found",
            "endpoints": [
                "POST /chat",
                "GET /chat/history",
                "GET /record",
                "POST /record",
                "DELETE /record/:record_id",
                "GET /health",
                "GET /metrics",
            ],
        })),
    )
}

/// Binds the listener and serves until the process exits.
pub async fn serve(router: Router, port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
