//! End-to-end tests driving both routers with real PDFs through `pdf-extract`.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use doclens::analysis::{AnalysisSettings, DocumentService};
use doclens::api::{create_router, ner::create_ner_router};
use doclens::entities::EntityService;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

const BOUNDARY: &str = "doclens-integration-boundary";

/// Single-page PDF showing `text` in Helvetica, with a correct xref table.
fn minimal_pdf_with_text(text: &str) -> Vec<u8> {
    let content = format!("BT /F1 12 Tf 72 700 Td ({text}) Tj ET");
    let mut out = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n");
    let o1 = out.len();
    out.extend_from_slice(b"1 0 obj << /Type /Catalog /Pages 2 0 R >> endobj\n");
    let o2 = out.len();
    out.extend_from_slice(b"2 0 obj << /Type /Pages /Kids [3 0 R] /Count 1 >> endobj\n");
    let o3 = out.len();
    out.extend_from_slice(b"3 0 obj << /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R /Resources << /Font << /F1 5 0 R >> >> >> endobj\n");
    let o4 = out.len();
    out.extend_from_slice(
        format!(
            "4 0 obj << /Length {} >> stream\n{content}\nendstream endobj\n",
            content.len()
        )
        .as_bytes(),
    );
    let o5 = out.len();
    out.extend_from_slice(
        b"5 0 obj << /Type /Font /Subtype /Type1 /BaseFont /Helvetica >> endobj\n",
    );
    let xref_start = out.len();
    out.extend_from_slice(b"xref\n0 6\n");
    out.extend_from_slice(format!("{:010} 65535 f \n", 0).as_bytes());
    for offset in [o1, o2, o3, o4, o5] {
        out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
    }
    out.extend_from_slice(b"trailer << /Size 6 /Root 1 0 R >>\nstartxref\n");
    out.extend_from_slice(format!("{xref_start}\n").as_bytes());
    out.extend_from_slice(b"%%EOF\n");
    out
}

fn upload_request(files: &[(&str, Vec<u8>)]) -> Request<Body> {
    let mut body = Vec::new();
    for (filename, content) in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"files\"; filename=\"{filename}\"\r\nContent-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    Request::builder()
        .method(Method::POST)
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .expect("request")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("router response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    (status, serde_json::from_slice(&body).expect("json body"))
}

fn document_app() -> Router {
    create_router(Arc::new(DocumentService::new(AnalysisSettings::default())))
}

#[tokio::test]
async fn uploaded_pdfs_are_connected_by_shared_sentences() {
    let app = document_app();
    let treaty = minimal_pdf_with_text("The treaty was signed in 1950.");
    let (status, json) = send(
        &app,
        upload_request(&[
            ("first.pdf", treaty.clone()),
            ("notes.txt", b"plain text".to_vec()),
            ("second.pdf", treaty),
        ]),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!([{"id": 0, "name": "first.pdf"}, {"id": 1, "name": "second.pdf"}])
    );

    let (_, health) = send(&app, get_request("/health")).await;
    assert_eq!(health, json!({"status": "healthy", "documents": 2}));

    let (status, phrases) = send(&app, get_request("/analyze/phrases")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(phrases["connections"], json!([[0, 1]]));
    let shared = phrases["shared_sentences"]
        .as_object()
        .expect("shared sentences");
    let (sentence, ids) = shared
        .iter()
        .find(|(sentence, _)| sentence.contains("treaty was signed in 1950"))
        .expect("treaty sentence shared");
    assert!(sentence.ends_with('.'));
    assert_eq!(ids, &json!([0, 1]));

    let (_, sentiment) = send(&app, get_request("/analyze/sentiment")).await;
    for id in ["0", "1"] {
        let polarity = sentiment[id].as_f64().expect("polarity");
        assert!((-1.0..=1.0).contains(&polarity));
    }

    let (_, chronology) = send(&app, get_request("/analyze/chronology")).await;
    assert_eq!(chronology, json!({"chronology": "No dated events found."}));

    let (_, metrics) = send(&app, get_request("/metrics")).await;
    assert_eq!(metrics["files_accepted"], json!(2));
    assert_eq!(metrics["files_skipped"], json!(1));
}

#[tokio::test]
async fn corrupt_pdfs_are_skipped() {
    let app = document_app();
    let (status, json) = send(
        &app,
        upload_request(&[("broken.pdf", b"%PDF-1.4 truncated".to_vec())]),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"error": "No valid PDFs processed"}));

    let (_, health) = send(&app, get_request("/health")).await;
    assert_eq!(health["documents"], json!(0));
}

#[tokio::test]
async fn dated_pdfs_build_a_chronology() {
    let app = document_app();
    let (status, _) = send(
        &app,
        upload_request(&[
            ("late.pdf", minimal_pdf_with_text("The wall fell on 1989-11-09.")),
            ("early.pdf", minimal_pdf_with_text("The talks opened on 1950-03-14.")),
        ]),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, json) = send(&app, get_request("/analyze/chronology")).await;
    let chronology = json["chronology"].as_str().expect("chronology");
    let lines: Vec<&str> = chronology.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("1950-03-14: "));
    assert!(lines[0].ends_with("(Source: early.pdf)"));
    assert!(lines[1].starts_with("1989-11-09: "));
}

#[tokio::test]
async fn entity_service_answers_alongside() {
    let app = create_ner_router(Arc::new(EntityService::default()));
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/ner")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"text": "Harry Truman met advisers in Boston on March 14, 1950."}).to_string(),
        ))
        .expect("request");
    let (status, json) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    let types: Vec<&str> = json["entities"]
        .as_array()
        .expect("entities")
        .iter()
        .filter_map(|entity| entity["entityType"].as_str())
        .collect();
    assert_eq!(types, vec!["people", "places", "dates"]);
}
