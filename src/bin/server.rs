use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use deadlock_item_bot::{
    error::ItemBotError, stats::StatsSnapshot, Comment, CommentOutcome, EngineConfig, ReplyEngine,
};

#[derive(Clone)]
struct AppState {
    engine: Arc<ReplyEngine>,
}

#[derive(Debug, Deserialize)]
struct ReplyRequest {
    text: String,
}

#[derive(Debug, Deserialize)]
struct BatchRequest {
    comments: Vec<Comment>,
}

#[derive(Debug, Serialize)]
struct BatchResponse {
    summary: String,
    report: deadlock_item_bot::BatchReport,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    items: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "item_bot_server=debug,deadlock_item_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = EngineConfig::from_env()?;
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8090);

    tracing::info!("🚀 Starting Deadlock item bot server");
    tracing::info!("📦 Catalog: {}", config.catalog_path.display());
    tracing::info!("🔌 Port: {}", port);

    let engine = ReplyEngine::load(&config)?;

    let state = AppState {
        engine: Arc::new(engine),
    };

    // Build router
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/v1/reply", post(reply_handler))
        .route("/v1/batch", post(batch_handler))
        .route("/v1/stats", get(stats_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("🎮 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: deadlock_item_bot::VERSION.to_string(),
        items: state.engine.catalog().len(),
    })
}

async fn reply_handler(
    State(state): State<AppState>,
    Json(req): Json<ReplyRequest>,
) -> Result<Json<CommentOutcome>, AppError> {
    let outcome = state.engine.process_comment(&req.text);

    if let CommentOutcome::Reply { matches, .. } = &outcome {
        tracing::info!("✅ {} item(s) matched", matches.len());
    }

    Ok(Json(outcome))
}

async fn batch_handler(
    State(state): State<AppState>,
    Json(req): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, AppError> {
    if req.comments.is_empty() {
        return Err(AppError(ItemBotError::Other("Empty comment batch".to_string())));
    }

    let engine = state.engine.clone();
    let report = tokio::task::spawn_blocking(move || engine.process_batch(&req.comments))
        .await
        .map_err(|e| AppError(ItemBotError::Other(format!("Batch task failed: {}", e))))?;

    Ok(Json(BatchResponse {
        summary: report.summary(),
        report,
    }))
}

async fn stats_handler(State(state): State<AppState>) -> Json<StatsSnapshot> {
    Json(state.engine.stats())
}

// Error handling
struct AppError(ItemBotError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            ItemBotError::UnknownItem(name) => {
                (StatusCode::NOT_FOUND, format!("Unknown item: {}", name))
            }
            ItemBotError::Other(message) => (StatusCode::BAD_REQUEST, message),
            e => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        tracing::error!("❌ Error: {} - {}", status, message);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
