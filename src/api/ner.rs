//! HTTP surface for entity extraction.
//!
//! - `POST /api/ner` – `{ "text", "entityTypes"? }` → `{ "success": true, "entities": [...] }`.
//! - `POST /api/ner-bulk` – `{ "pages": [{ "text", "docIndex"?, "pageNum"? }], "entityTypes"? }`
//!   → `{ "success": true, "results": [{ "docIndex", "pageNum", "entities" }] }`.
//! - `GET /api/health` – `{ "status": "ok", "model" }`.
//!
//! Malformed bodies get `{ "error" }` with 400; recognizer failures get
//! `{ "success": false, "error" }` with 500.

use super::cors_layer;
use crate::entities::{
    BulkNerRequest, EntityApi, EntityError, EntityFilter, EntityOccurrence, NerRequest,
    PageEntities,
};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the HTTP router exposing the entity extraction endpoints.
pub fn create_ner_router<S>(service: Arc<S>) -> Router
where
    S: EntityApi + 'static,
{
    Router::new()
        .route("/api/ner", post(extract_entities::<S>))
        .route("/api/ner-bulk", post(extract_entities_bulk::<S>))
        .route("/api/health", get(health::<S>))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

#[derive(Serialize)]
struct EntitiesResponse {
    success: bool,
    entities: Vec<EntityOccurrence>,
}

#[derive(Serialize)]
struct BulkResponse {
    success: bool,
    results: Vec<PageEntities>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    model: String,
}

async fn extract_entities<S>(
    State(service): State<Arc<S>>,
    payload: Result<Json<NerRequest>, JsonRejection>,
) -> Result<Json<EntitiesResponse>, NerError>
where
    S: EntityApi,
{
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected entity request");
        NerError::MissingText
    })?;
    let filter = EntityFilter::from_names(request.entity_types);
    let entities = service.extract(request.text, filter).await?;
    Ok(Json(EntitiesResponse {
        success: true,
        entities,
    }))
}

async fn extract_entities_bulk<S>(
    State(service): State<Arc<S>>,
    payload: Result<Json<BulkNerRequest>, JsonRejection>,
) -> Result<Json<BulkResponse>, NerError>
where
    S: EntityApi,
{
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected bulk entity request");
        NerError::MissingPages
    })?;
    let filter = EntityFilter::from_names(request.entity_types);
    let results = service.extract_bulk(request.pages, filter).await?;
    Ok(Json(BulkResponse {
        success: true,
        results,
    }))
}

async fn health<S>(State(service): State<Arc<S>>) -> Json<HealthResponse>
where
    S: EntityApi,
{
    Json(HealthResponse {
        status: "ok",
        model: service.model_name(),
    })
}

enum NerError {
    MissingText,
    MissingPages,
    Extraction(EntityError),
}

impl IntoResponse for NerError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingText => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "No text provided" })),
            )
                .into_response(),
            Self::MissingPages => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "No pages provided" })),
            )
                .into_response(),
            Self::Extraction(err) => {
                tracing::error!(error = %err, "Entity extraction failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

impl From<EntityError> for NerError {
    fn from(inner: EntityError) -> Self {
        Self::Extraction(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::create_ner_router;
    use crate::entities::{
        EntityApi, EntityError, EntityFilter, EntityOccurrence, EntityService, PageEntities,
        PageInput,
    };
    use crate::nlp::RecognitionError;
    use crate::nlp::heuristic::HEURISTIC_MODEL_NAME;
    use async_trait::async_trait;
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tokio::sync::Mutex;
    use tower::ServiceExt;

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.expect("router response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let json = serde_json::from_slice(&body).expect("json body");
        (status, json)
    }

    fn app() -> Router {
        create_ner_router(Arc::new(EntityService::default()))
    }

    #[tokio::test]
    async fn ner_returns_located_entities() {
        let (status, json) = send(
            app(),
            post_json("/api/ner", r#"{"text": "Harry Truman arrived in Paris."}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], json!(true));
        assert_eq!(
            json["entities"][0],
            json!({
                "text": "Harry Truman",
                "entityType": "people",
                "start": 0,
                "end": 12,
                "sentence": "Harry Truman arrived in Paris.",
                "label": "PERSON"
            })
        );
        assert_eq!(json["entities"][1]["entityType"], json!("places"));
    }

    #[tokio::test]
    async fn ner_applies_entity_type_filter() {
        let (_, json) = send(
            app(),
            post_json(
                "/api/ner",
                r#"{"text": "Harry Truman arrived in Paris.", "entityTypes": ["places"]}"#,
            ),
        )
        .await;
        let entities = json["entities"].as_array().expect("entities");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0]["text"], json!("Paris"));
    }

    #[tokio::test]
    async fn ner_without_text_is_rejected() {
        let (status, json) = send(app(), post_json("/api/ner", r#"{"body": "x"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({"error": "No text provided"}));

        let (status, _) = send(app(), post_json("/api/ner", "not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn bulk_tags_entities_with_page_coordinates() {
        let body = json!({
            "pages": [
                {"text": "Paris was calm.", "docIndex": 2, "pageNum": 5},
                {"docIndex": 3},
                {"text": "Nothing to see."}
            ]
        });
        let (status, json) = send(app(), post_json("/api/ner-bulk", &body.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], json!(true));
        let results = json["results"].as_array().expect("results");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["docIndex"], json!(2));
        assert_eq!(results[0]["pageNum"], json!(5));
        assert_eq!(results[0]["entities"][0]["docIndex"], json!(2));
        assert_eq!(results[0]["entities"][0]["pageNum"], json!(5));
        assert_eq!(results[1]["docIndex"], json!(0));
        assert_eq!(results[1]["pageNum"], json!(1));
    }

    #[tokio::test]
    async fn bulk_without_pages_is_rejected() {
        let (status, json) = send(app(), post_json("/api/ner-bulk", r#"{"text": "x"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({"error": "No pages provided"}));
    }

    #[tokio::test]
    async fn health_reports_model() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/health")
            .body(Body::empty())
            .expect("request");
        let (status, json) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"status": "ok", "model": HEURISTIC_MODEL_NAME}));
    }

    #[derive(Clone, Default)]
    struct FailingEntityService {
        calls: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl EntityApi for FailingEntityService {
        fn model_name(&self) -> String {
            "failing".into()
        }

        async fn extract(
            &self,
            text: String,
            _filter: EntityFilter,
        ) -> Result<Vec<EntityOccurrence>, EntityError> {
            self.calls.lock().await.push(text);
            Err(RecognitionError::Failed("model crashed".into()).into())
        }

        async fn extract_bulk(
            &self,
            _pages: Vec<PageInput>,
            _filter: EntityFilter,
        ) -> Result<Vec<PageEntities>, EntityError> {
            Err(RecognitionError::Failed("model crashed".into()).into())
        }
    }

    #[tokio::test]
    async fn recognizer_failures_return_unsuccessful_responses() {
        let service = Arc::new(FailingEntityService::default());
        let app = create_ner_router(service.clone());
        let (status, json) = send(app, post_json("/api/ner", r#"{"text": "abc"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["success"], json!(false));
        assert!(
            json["error"]
                .as_str()
                .expect("error")
                .contains("model crashed")
        );
        assert_eq!(service.calls.lock().await.clone(), vec!["abc".to_string()]);
    }
}
