//! HTTP surface for the document store.
//!
//! This module exposes a compact Axum router:
//!
//! - `GET /health` – Liveness plus the number of stored documents.
//! - `POST /upload` – Multipart upload (repeatable `files` field); PDFs are extracted and
//!   stored, everything else is skipped. Returns `[{ "id", "name" }]` for stored documents.
//! - `GET /analyze/phrases` – Documents connected by identical sentences.
//! - `GET /analyze/people` – Documents connected by people they both mention.
//! - `GET /analyze/sentiment` – Polarity in `[-1, 1]` per document id.
//! - `GET /analyze/chronology` – Dated sentences across all documents, oldest first.
//! - `GET /metrics` – Upload counters.
//! - `GET /commands` – Machine-readable command catalog for quick discovery by tools/hosts.
//!
//! Errors are returned as `{ "error": message }`: 400 for client mistakes, 500 (with a
//! `Server error:` prefix) for everything else. The entity extraction routes live in [`ner`].

pub mod ner;

use crate::analysis::{AnalysisError, DocumentApi, PeopleReport, PhraseReport, UploadedFile};
use crate::config::get_config;
use crate::metrics::MetricsSnapshot;
use crate::store::{DocumentId, DocumentSummary};
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Multipart field carrying uploaded files.
pub const UPLOAD_FIELD: &str = "files";

/// Build the HTTP router exposing the document store and analysis endpoints.
pub fn create_router<S>(service: Arc<S>) -> Router
where
    S: DocumentApi + 'static,
{
    let max_upload_bytes = get_config().max_upload_bytes;
    Router::new()
        .route("/health", get(health::<S>))
        .route(
            "/upload",
            post(upload_documents::<S>).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/analyze/phrases", get(analyze_phrases::<S>))
        .route("/analyze/people", get(analyze_people::<S>))
        .route("/analyze/sentiment", get(analyze_sentiment::<S>))
        .route("/analyze/chronology", get(analyze_chronology::<S>))
        .route("/metrics", get(get_metrics::<S>))
        .route("/commands", get(get_commands))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// CORS policy shared by both services: any origin, method, and header.
pub(crate) fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    documents: usize,
}

async fn health<S>(State(service): State<Arc<S>>) -> Json<HealthResponse>
where
    S: DocumentApi,
{
    Json(HealthResponse {
        status: "healthy",
        documents: service.document_count().await,
    })
}

/// Accept a multipart upload and store every PDF it carries.
///
/// Parts other than `files`, and `files` parts without a filename, are ignored. A request that
/// is not multipart at all is treated as carrying no files.
async fn upload_documents<S>(
    State(service): State<Arc<S>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Vec<DocumentSummary>>, AppError>
where
    S: DocumentApi,
{
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Upload request is not multipart");
            return Err(AnalysisError::NoFilesUploaded.into());
        }
    };

    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AnalysisError::InvalidUpload(err.body_text()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|err| AnalysisError::InvalidUpload(err.body_text()))?;
        files.push(UploadedFile {
            filename,
            bytes: bytes.to_vec(),
        });
    }

    let received = files.len();
    let stored = service.upload(files).await?;
    tracing::info!(received, stored = stored.len(), "Upload request completed");
    Ok(Json(stored))
}

async fn analyze_phrases<S>(State(service): State<Arc<S>>) -> Result<Json<PhraseReport>, AppError>
where
    S: DocumentApi,
{
    Ok(Json(service.shared_phrases().await?))
}

async fn analyze_people<S>(State(service): State<Arc<S>>) -> Result<Json<PeopleReport>, AppError>
where
    S: DocumentApi,
{
    Ok(Json(service.shared_people().await?))
}

/// Polarity per document; ids become JSON object keys.
async fn analyze_sentiment<S>(
    State(service): State<Arc<S>>,
) -> Result<Json<BTreeMap<DocumentId, f64>>, AppError>
where
    S: DocumentApi,
{
    Ok(Json(service.sentiment().await?))
}

/// Response body for `GET /analyze/chronology`.
#[derive(Serialize)]
struct ChronologyResponse {
    chronology: String,
}

async fn analyze_chronology<S>(
    State(service): State<Arc<S>>,
) -> Result<Json<ChronologyResponse>, AppError>
where
    S: DocumentApi,
{
    Ok(Json(ChronologyResponse {
        chronology: service.chronology().await?,
    }))
}

async fn get_metrics<S>(State(service): State<Arc<S>>) -> Json<MetricsSnapshot>
where
    S: DocumentApi,
{
    Json(service.metrics_snapshot().await)
}

/// Descriptor for a single command in the discovery catalog.
#[derive(Serialize)]
struct CommandDescriptor {
    name: &'static str,
    method: &'static str,
    path: &'static str,
    description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_example: Option<serde_json::Value>,
}

/// Response body for `GET /commands`.
#[derive(Serialize)]
struct CommandsResponse {
    commands: Vec<CommandDescriptor>,
}

/// Enumerate supported HTTP commands for discovery/UX in hosts and tools.
async fn get_commands() -> Json<CommandsResponse> {
    Json(CommandsResponse {
        commands: vec![
            CommandDescriptor {
                name: "health",
                method: "GET",
                path: "/health",
                description: "Report liveness and the number of stored documents.",
                request_example: None,
            },
            CommandDescriptor {
                name: "upload",
                method: "POST",
                path: "/upload",
                description: "Upload PDFs as multipart/form-data under the repeatable \"files\" field. Response returns [{ \"id\": number, \"name\": string }] for stored documents.",
                request_example: Some(json!({
                    "files": ["report.pdf", "minutes.pdf"]
                })),
            },
            CommandDescriptor {
                name: "shared_phrases",
                method: "GET",
                path: "/analyze/phrases",
                description: "Connect documents that contain identical sentences.",
                request_example: None,
            },
            CommandDescriptor {
                name: "shared_people",
                method: "GET",
                path: "/analyze/people",
                description: "Connect documents that mention the same people.",
                request_example: None,
            },
            CommandDescriptor {
                name: "sentiment",
                method: "GET",
                path: "/analyze/sentiment",
                description: "Return sentiment polarity in [-1, 1] keyed by document id.",
                request_example: None,
            },
            CommandDescriptor {
                name: "chronology",
                method: "GET",
                path: "/analyze/chronology",
                description: "Return dated sentences from every document, oldest first, one per line.",
                request_example: None,
            },
            CommandDescriptor {
                name: "metrics",
                method: "GET",
                path: "/metrics",
                description: "Return upload counters useful for observability dashboards.",
                request_example: None,
            },
        ],
    })
}

struct AppError(AnalysisError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        if self.0.is_client_error() {
            return (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response();
        }
        tracing::error!(error = %message, "Request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("Server error: {message}") })),
        )
            .into_response()
    }
}

impl From<AnalysisError> for AppError {
    fn from(inner: AnalysisError) -> Self {
        Self(inner)
    }
}
