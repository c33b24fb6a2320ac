use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::RelayError;
use crate::mock;
use crate::record::AnalysisRecord;
use crate::sheets::SheetsClient;
use crate::validator::{self, INVALID_URL_MESSAGE};

pub struct AppState {
    sheets: SheetsClient,
}

impl AppState {
    pub fn new(sheets: SheetsClient) -> Self {
        AppState { sheets }
    }
}

#[derive(Deserialize)]
struct AnalyzeRequest {
    url: String,
}

#[derive(Serialize)]
struct AnalyzeError {
    error: String,
}

/// Body returned by the relay
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(RelayResponse {
                success: false,
                error: Some(self.to_string()),
            }),
        )
            .into_response()
    }
}

/// Build the application router around `state`
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/api/analyze", post(analyze))
        .route("/api/add-to-sheet", post(add_to_sheet))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    if config.sheets.client_email.is_none() || config.sheets.private_key.is_none() {
        warn!("Google service account credentials are not configured; relay calls will fail");
    }

    let app_state = Arc::new(AppState::new(SheetsClient::new(config.sheets)?));
    let app = router(app_state);

    let listener = TcpListener::bind(&config.bind).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn serve_index() -> Html<&'static str> {
    Html(include_str!("./static/index.html"))
}

fn invalid_url() -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(AnalyzeError {
            error: INVALID_URL_MESSAGE.to_string(),
        }),
    )
        .into_response()
}

async fn analyze(payload: Result<Json<AnalyzeRequest>, JsonRejection>) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "rejected analyze request");
            return invalid_url();
        }
    };

    if !validator::is_valid_post_url(&payload.url) {
        warn!(url = %payload.url, "rejected url");
        return invalid_url();
    }

    Json(mock::pick_record()).into_response()
}

async fn add_to_sheet(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalysisRecord>, JsonRejection>,
) -> Result<Json<RelayResponse>, RelayError> {
    let Json(record) = payload.map_err(|rejection| {
        let err = RelayError::MalformedBody(rejection.body_text());
        error!(error = %err, "relay failed");
        err
    })?;

    match state.sheets.append_record(&record).await {
        Ok(_) => Ok(Json(RelayResponse {
            success: true,
            error: None,
        })),
        Err(err) => {
            error!(error = %err, username = %record.username, "relay failed");
            Err(err)
        }
    }
}
