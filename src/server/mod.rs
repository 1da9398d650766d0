//! HTTP request bridge: static page, analyze, save.
//!
//! Every handler recovers its own failures and answers with a structured JSON
//! body; `/analyze` always replies HTTP 200 with success or failure encoded in
//! the body, matching what the browser form expects.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::error::AppError;
use crate::llm::client::CompletionClient;
use crate::llm::prompts;
use crate::store::{self, AnalysisRecord};
use crate::util::SecretString;

/// Output-length cap passed on every model call.
pub const MAX_OUTPUT_TOKENS: u32 = 4000;

const INDEX_HTML: &str = include_str!("../../static/index.html");
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn CompletionClient>,
    pub log_dir: PathBuf,
}

/// Body of `POST /analyze`. Fields default to `None` so a missing field is a
/// validation error, not an extractor rejection.
#[derive(Debug, Deserialize, Default)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub api_key: Option<SecretString>,
    #[serde(default)]
    pub old_description: Option<String>,
    #[serde(default)]
    pub new_description: Option<String>,
}

/// Result envelope returned by `/analyze`. Exactly one of `analysis` and
/// `error` is populated; never mutated after creation.
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: String,
}

impl AnalysisResult {
    fn ok(analysis: String) -> Self {
        Self {
            success: true,
            analysis: Some(analysis),
            error: None,
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            analysis: None,
            error: Some(error.into()),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Body of `POST /save_analysis`.
#[derive(Debug, Deserialize, Default)]
pub struct SaveRequest {
    #[serde(default)]
    pub old_description: Option<String>,
    #[serde(default)]
    pub new_description: Option<String>,
    #[serde(default)]
    pub analysis_result: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SaveResponse {
    fn ok(message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            error: None,
        }
    }

    fn failure(error: AppError) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.to_string()),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/analyze", post(analyze))
        .route("/save_analysis", post(save_analysis))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Json<AnalysisResult> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return Json(AnalysisResult::failure(format!(
                "分析過程中發生錯誤: {}",
                rejection.body_text()
            )));
        }
    };
    Json(run_analysis(&state, request).await)
}

async fn run_analysis(state: &AppState, request: AnalyzeRequest) -> AnalysisResult {
    let (api_key, old_description, new_description) = match validate(&request) {
        Ok(fields) => fields,
        Err(err) => return AnalysisResult::failure(err.to_string()),
    };

    let input = prompts::full_input(&old_description, &new_description);
    match state
        .client
        .complete(api_key.expose(), &input, MAX_OUTPUT_TOKENS)
        .await
    {
        Ok(analysis) => AnalysisResult::ok(analysis),
        Err(err) => {
            // The error text never contains the key; request bodies are not
            // logged anywhere.
            error!("model call failed: {:#}", err);
            AnalysisResult::failure(AppError::Call(format!("{:#}", err)).to_string())
        }
    }
}

/// Validation order mirrors the form: credential first, then the two
/// descriptions (both trimmed; whitespace-only counts as missing).
fn validate(request: &AnalyzeRequest) -> Result<(SecretString, String, String), AppError> {
    let api_key = match &request.api_key {
        Some(key) if !key.is_empty() => key.clone(),
        _ => return Err(AppError::Validation("請輸入OpenAI API Key".to_string())),
    };

    let old_description = request
        .old_description
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_string();
    let new_description = request
        .new_description
        .as_deref()
        .unwrap_or("")
        .trim()
        .to_string();
    if old_description.is_empty() || new_description.is_empty() {
        return Err(AppError::Validation(
            "請輸入舊版本和新版本的技能描述".to_string(),
        ));
    }

    Ok((api_key, old_description, new_description))
}

async fn save_analysis(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Json<SaveResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return Json(SaveResponse::failure(AppError::Persistence(
                rejection.body_text(),
            )));
        }
    };

    let now = Local::now();
    let record = AnalysisRecord {
        timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
        old_description: request.old_description,
        new_description: request.new_description,
        analysis_result: request.analysis_result,
    };

    match store::save_record(&state.log_dir, &record, now) {
        Ok(filename) => Json(SaveResponse::ok(format!("分析結果已保存到 {}", filename))),
        Err(err) => {
            error!("save failed: {:#}", err);
            Json(SaveResponse::failure(AppError::Persistence(format!(
                "{:#}",
                err
            ))))
        }
    }
}
