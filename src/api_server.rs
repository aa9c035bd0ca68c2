// Axum API Server Module
//
// Purpose: form surface backend. Holds one live editing session, serves the
// field registry, answers, validation, the live preview and snapshot exports.

#[cfg(feature = "api")]
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};

#[cfg(feature = "api")]
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

#[cfg(feature = "api")]
use std::sync::Arc;

#[cfg(feature = "api")]
use tokio::sync::RwLock;

#[cfg(feature = "api")]
use serde::Deserialize;

#[cfg(feature = "api")]
use serde_json::{json, Value};

#[cfg(feature = "api")]
use crate::answers::fields::{self, Section, FIELDS};
#[cfg(feature = "api")]
use crate::answers::{validation, AnswerSet, ValidationIssue};
#[cfg(feature = "api")]
use crate::config::GeneratorConfig;
#[cfg(feature = "api")]
use crate::render::{ExportFormat, HtmlFormatter};
#[cfg(feature = "api")]
use crate::session::Session;

// ============================================================================
// Application State
// ============================================================================

#[cfg(feature = "api")]
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<Session>>,
    pub config: Arc<GeneratorConfig>,
}

#[cfg(feature = "api")]
impl AppState {
    pub fn new(config: GeneratorConfig) -> Self {
        tracing::info!("Initializing editing session with registry defaults...");
        let session = Session::with_config(config.clone());
        Self {
            session: Arc::new(RwLock::new(session)),
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

#[cfg(feature = "api")]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // Field registry
        .route("/api/fields", get(list_fields))
        .route("/api/fields/visible", get(visible_fields))

        // Answer Set
        .route("/api/answers", get(get_answers).put(replace_answers))
        .route("/api/answers/:field", get(get_answer).patch(set_answer))

        // Derived views, rebuilt on every request
        .route("/api/validate", get(validate_answers))
        .route("/api/document", get(get_document))
        .route("/api/preview", get(get_preview))
        .route("/preview", get(preview_html))

        // Export of a snapshot
        .route("/api/export", post(export_document))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

#[cfg(feature = "api")]
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(feature = "api")]
async fn list_fields() -> Json<Value> {
    let sections: Vec<Value> = Section::ALL
        .iter()
        .map(|&s| {
            let ids: Vec<&str> = fields::fields_in(s).map(|f| f.id).collect();
            json!({ "id": s.id(), "title": s.title(), "fields": ids })
        })
        .collect();

    Json(json!({
        "sections": sections,
        "fields": FIELDS,
        "count": FIELDS.len(),
    }))
}

/// Field ids shown for the current answers (conditional fields resolved).
#[cfg(feature = "api")]
async fn visible_fields(State(state): State<AppState>) -> Json<Value> {
    let session = state.session.read().await;
    let ids: Vec<&str> = fields::visible_fields(session.answers()).iter().map(|f| f.id).collect();
    Json(json!({ "fields": ids, "count": ids.len() }))
}

#[cfg(feature = "api")]
async fn get_answers(State(state): State<AppState>) -> Json<AnswerSet> {
    Json(state.session.read().await.answers().clone())
}

#[cfg(feature = "api")]
async fn get_answer(
    State(state): State<AppState>,
    Path(field): Path<String>,
) -> Result<Json<Value>, AppError> {
    let spec = fields::field(&field)
        .ok_or_else(|| AppError::NotFound(format!("Field {} not found", field)))?;
    let value = state.session.read().await.get(spec.id).unwrap_or(Value::Null);
    Ok(Json(json!({ "field": spec.id, "value": value })))
}

/// Replace the whole Answer Set and return the refreshed preview.
#[cfg(feature = "api")]
async fn replace_answers(
    State(state): State<AppState>,
    Json(answers): Json<AnswerSet>,
) -> Json<Value> {
    let mut session = state.session.write().await;
    session.replace(answers);
    tracing::debug!("Answer Set replaced ({} stored values)", session.answers().len());
    Json(json!({ "preview": session.preview() }))
}

/// Set one field. Body is the raw JSON value; `null` clears the field.
#[cfg(feature = "api")]
async fn set_answer(
    State(state): State<AppState>,
    Path(field): Path<String>,
    Json(value): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let spec = fields::field(&field)
        .ok_or_else(|| AppError::NotFound(format!("Field {} not found", field)))?;

    let mut session = state.session.write().await;
    session.set(spec.id, value);
    Ok(Json(json!({ "field": spec.id, "preview": session.preview() })))
}

#[cfg(feature = "api")]
async fn validate_answers(State(state): State<AppState>) -> Json<Value> {
    let session = state.session.read().await;
    let issues = session.validate();
    Json(json!({
        "valid": !validation::has_errors(&issues),
        "messages": validation::messages(&issues),
        "issues": issues,
        "suggestedSurplus": validation::suggested_surplus(session.answers()),
    }))
}

#[cfg(feature = "api")]
async fn get_document(State(state): State<AppState>) -> Json<Value> {
    let document = state.session.read().await.document();
    Json(json!({ "clauses": document.clauses, "count": document.len() }))
}

#[cfg(feature = "api")]
async fn get_preview(State(state): State<AppState>) -> Json<Value> {
    Json(json!(state.session.read().await.preview()))
}

#[cfg(feature = "api")]
async fn preview_html(State(state): State<AppState>) -> Html<String> {
    let preview = state.session.read().await.preview();
    Html(HtmlFormatter::format(&preview))
}

#[cfg(feature = "api")]
#[derive(Debug, Deserialize, Default)]
struct ExportParams {
    confirm: Option<bool>,
    format: Option<String>,
}

/// Export a snapshot of the current answers.
///
/// Error-level validation issues answer 409 with the issue list unless
/// `confirm=true`. The artifact is built off the request task.
#[cfg(feature = "api")]
async fn export_document(
    State(state): State<AppState>,
    Query(params): Query<ExportParams>,
) -> Result<Response, AppError> {
    let format = match params.format.as_deref() {
        Some(token) => ExportFormat::from_token(token)
            .ok_or_else(|| AppError::BadRequest(format!("Unsupported export format: {}", token)))?,
        None => ExportFormat::Markdown,
    };

    let today = chrono::Local::now().date_naive();
    let (job, issues) = {
        let session = state.session.read().await;
        (session.begin_export(today).with_format(format), session.validate())
    };

    let errors: Vec<ValidationIssue> = issues.into_iter().filter(ValidationIssue::is_error).collect();
    if !errors.is_empty() {
        if !params.confirm.unwrap_or(false) {
            return Err(AppError::ValidationPending(errors));
        }
        tracing::warn!("Exporting despite {} validation error(s)", errors.len());
    }

    let artifact = tokio::task::spawn_blocking(move || job.build())
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Export error: {}", e)))?;

    let disposition = format!(
        "attachment; filename*=UTF-8''{}",
        urlencoding::encode(&artifact.filename)
    );

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, artifact.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        artifact.bytes,
    )
        .into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

#[cfg(feature = "api")]
#[derive(Debug)]
enum AppError {
    Internal(String),
    NotFound(String),
    BadRequest(String),
    ValidationPending(Vec<ValidationIssue>),
}

#[cfg(feature = "api")]
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": msg })),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::ValidationPending(issues) => (
                StatusCode::CONFLICT,
                json!({
                    "error": "Validation issues must be resolved or confirmed before export",
                    "messages": validation::messages(&issues),
                    "issues": issues,
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
