//! HTTP endpoint for submissions
//!
//! `POST /submit` takes the survey payload as JSON, checks the shared
//! secret, normalizes the payload against the sheet's authoritative header
//! row, and appends one row. Responses mirror the row store's contract:
//! always JSON, always HTTP 200, with a `status` of "success" or "error".
//! Processing failures are reported only in the response body; the server
//! keeps serving.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use chrono::Utc;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::record::{default_headers, normalize};
use crate::sheet::{SheetError, SheetStore};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SheetStore>,
    pub sheet_name: String,
    secret: String,
}

impl AppState {
    pub fn new(store: SheetStore, config: &Config) -> Self {
        Self {
            store: Arc::new(store),
            sheet_name: config.sheet_name.clone(),
            secret: config.secret.clone(),
        }
    }
}

/// Wire response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }
}

/// Build the router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/submit", post(submit))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}

/// POST /submit
///
/// The body is taken as a raw string so that malformed JSON is reported in
/// the store's own error shape rather than by the framework.
async fn submit(State(state): State<AppState>, body: String) -> Json<ApiResponse> {
    Json(handle_submission(&state, &body))
}

/// Full submission pipeline, separated from axum for direct testing
pub fn handle_submission(state: &AppState, body: &str) -> ApiResponse {
    let payload: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Rejected unparseable submission");
            return ApiResponse::error(format!("invalid JSON body: {e}"));
        }
    };

    // Secret values never reach the logs
    if payload.get("_secret").and_then(Value::as_str) != Some(state.secret.as_str()) {
        warn!("Rejected submission with bad or missing token");
        return ApiResponse::error("Invalid token");
    }

    match append_response(state, &payload) {
        Ok(()) => {
            info!(sheet = %state.sheet_name, "Appended submission");
            ApiResponse::success()
        }
        Err(e) => {
            warn!(error = %e, "Failed to append submission");
            ApiResponse::error(e.to_string())
        }
    }
}

fn append_response(state: &AppState, payload: &Value) -> Result<(), SheetError> {
    state.store.ensure_sheet(&state.sheet_name, &default_headers())?;
    // The sheet's existing header row decides the row's shape
    let headers = state.store.headers(&state.sheet_name)?;
    let row = normalize(&headers, payload, Utc::now());
    state.store.append(&state.sheet_name, &row)
}

/// Bind and serve until shutdown
pub async fn serve(state: AppState, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind listen address")?;
    let local = listener.local_addr().context("Failed to read local address")?;
    info!(addr = %local, "sheetstore endpoint listening");
    debug!(sheet = %state.sheet_name, "serving");
    axum::serve(listener, router(state)).await.context("Server error")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn state(temp: &TempDir) -> AppState {
        let store = SheetStore::open(temp.path()).unwrap();
        let mut config = Config::default();
        config.secret = "testsecret".to_string();
        AppState::new(store, &config)
    }

    fn body(value: Value) -> String {
        value.to_string()
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let temp = TempDir::new().unwrap();
        let state = state(&temp);

        let response = handle_submission(&state, &body(json!({"_secret": "wrong", "age": "18"})));
        assert_eq!(response.status, "error");
        assert_eq!(response.message.as_deref(), Some("Invalid token"));

        // Nothing was created, let alone appended
        assert!(matches!(
            state.store.headers("Responses"),
            Err(SheetError::NotFound(_))
        ));
    }

    #[test]
    fn test_missing_secret_is_rejected() {
        let temp = TempDir::new().unwrap();
        let state = state(&temp);
        let response = handle_submission(&state, &body(json!({"age": "18"})));
        assert_eq!(response.status, "error");
    }

    #[test]
    fn test_valid_submission_creates_sheet_and_appends() {
        let temp = TempDir::new().unwrap();
        let state = state(&temp);

        let response = handle_submission(
            &state,
            &body(json!({
                "_secret": "testsecret",
                "age": "18",
                "mission": ["cleanup", "feed"],
                "prizeDrawEntry": true,
                "badge": "Trailblazer",
            })),
        );
        assert_eq!(response.status, "success");
        assert!(response.message.is_none());

        let headers = state.store.headers("Responses").unwrap();
        assert_eq!(headers.len(), 18);

        let rows = state.store.rows("Responses").unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.len(), headers.len());
        assert_eq!(row[1], "18"); // age
        assert_eq!(row[8], "cleanup, feed"); // mission
        assert_eq!(row[16], "Yes"); // prizeDrawEntry
        assert_eq!(row[17], "Trailblazer"); // badge
        assert!(!row[0].is_empty()); // Timestamp filled server-side
    }

    #[test]
    fn test_secret_never_lands_in_a_cell() {
        let temp = TempDir::new().unwrap();
        let state = state(&temp);
        handle_submission(&state, &body(json!({"_secret": "testsecret"})));

        for row in state.store.rows("Responses").unwrap() {
            assert!(row.iter().all(|cell| cell != "testsecret"));
        }
    }

    #[test]
    fn test_older_sheet_header_stays_authoritative() {
        let temp = TempDir::new().unwrap();
        let state = state(&temp);
        // Pre-create a sheet from before the badge column existed
        let old: Vec<String> = ["Timestamp", "age"].iter().map(|s| s.to_string()).collect();
        state.store.ensure_sheet("Responses", &old).unwrap();

        let response = handle_submission(
            &state,
            &body(json!({"_secret": "testsecret", "age": "21", "badge": "Builder"})),
        );
        assert_eq!(response.status, "success");

        let rows = state.store.rows("Responses").unwrap();
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0][1], "21");
    }

    #[test]
    fn test_malformed_body_reports_in_store_shape() {
        let temp = TempDir::new().unwrap();
        let state = state(&temp);
        let response = handle_submission(&state, "{definitely not json");
        assert_eq!(response.status, "error");
        assert!(response.message.unwrap().contains("invalid JSON body"));
    }
}
