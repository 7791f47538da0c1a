use std::{
    net::SocketAddr,
    sync::{Arc, Mutex, MutexGuard},
};

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use calc::{evaluate_into, CalculationRecord, HistoryLedger, Value};
use serde::{Deserialize, Serialize};
use tracing::info;

mod config;

use config::load_settings;

#[derive(Clone, Default)]
struct AppState {
    // Axum serves requests concurrently; the mutex serializes ledger
    // mutation so each successful evaluation appends exactly one record.
    ledger: Arc<Mutex<HistoryLedger>>,
}

impl AppState {
    fn ledger(&self) -> MutexGuard<'_, HistoryLedger> {
        // The ledger holds no invariants a panic could break, so a
        // poisoned lock is still usable.
        self.ledger
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[derive(Debug, Deserialize)]
struct CalculateRequest {
    #[serde(default)]
    expression: String,
}

#[derive(Debug, Serialize)]
struct CalculateResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    history: Option<Vec<CalculationRecord>>,
}

#[derive(Debug, Serialize)]
struct HistoryResponse {
    history: Vec<CalculationRecord>,
}

#[derive(Debug, Serialize)]
struct ClearHistoryResponse {
    success: bool,
    message: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let app = build_router(AppState::default());

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "calculator server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(home))
        .route("/calculate", post(calculate))
        .route("/history", get(history))
        .route("/clear-history", post(clear_history))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn home(State(state): State<AppState>) -> Html<String> {
    // Ledger entries only ever contain text the restricted grammar
    // accepted, so there is nothing to escape.
    let entries: String = state
        .ledger()
        .all()
        .iter()
        .map(|record| format!("<li>{record}</li>"))
        .collect();
    Html(format!(
        "<!doctype html><html><head><title>Calculator with History</title></head>\
         <body><h1>Calculator with History</h1>\
         <p>POST /calculate with {{\"expression\": \"...\"}} to calculate.</p>\
         <h2>History</h2><ul>{entries}</ul></body></html>"
    ))
}

async fn calculate(
    State(state): State<AppState>,
    Json(req): Json<CalculateRequest>,
) -> Json<CalculateResponse> {
    let mut ledger = state.ledger();
    match evaluate_into(&mut ledger, &req.expression) {
        Ok(result) => Json(CalculateResponse {
            success: true,
            result: Some(result),
            error: None,
            history: Some(ledger.all().to_vec()),
        }),
        Err(error) => Json(CalculateResponse {
            success: false,
            result: None,
            error: Some(error.to_string()),
            history: None,
        }),
    }
}

async fn history(State(state): State<AppState>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        history: state.ledger().all().to_vec(),
    })
}

async fn clear_history(State(state): State<AppState>) -> Json<ClearHistoryResponse> {
    state.ledger().clear();
    Json(ClearHistoryResponse {
        success: true,
        message: "History cleared!".to_string(),
    })
}
