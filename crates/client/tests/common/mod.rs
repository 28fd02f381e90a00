//! Shared mock backend for the client integration tests.
//!
//! Spins up a real axum server on an ephemeral port so the tests exercise
//! the actual HTTP stack (status codes, multipart bodies, JSON parsing)
//! rather than stubbed transports.

use axum::extract::{Multipart, Path};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

/// Hash of the 4-step manual in the canned catalog.
pub const TABLE_HASH: &str = "2aae6c35c94f";
/// Hash of the 0-step manual in the canned catalog.
pub const EMPTY_HASH: &str = "da39a3ee5e6b";

/// Bind the given router on an ephemeral local port and return its base URL.
pub async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock backend");
    });

    format!("http://{addr}")
}

/// Spawn a mock backend with the canned two-manual catalog.
pub async fn spawn_default_backend() -> String {
    spawn_backend(default_router()).await
}

/// Router emulating the backend surface over a fixed catalog:
/// a 4-step table manual and an empty manual.
pub fn default_router() -> Router {
    Router::new()
        .route("/pdfs", get(list_pdfs))
        .route("/upload-and-process", post(upload_and_process))
        .route("/pdf/{hash}", get(serve_pdf))
        .route("/instruction/{hash}/{step}", get(serve_instruction))
        .route("/step-position/{hash}/{step}", get(serve_step_position))
}

async fn list_pdfs() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "pdfs": [
            { "hash": TABLE_HASH, "pdf_filename": "sandsberg-table.pdf", "step_count": 4 },
            { "hash": EMPTY_HASH, "pdf_filename": "nordli-dresser.pdf", "step_count": 0 },
        ],
        "total_count": 2,
    }))
}

/// Accepts the multipart upload and echoes the generation flags back as
/// artifact counts: a skipped pass reports `null`, matching the backend.
async fn upload_and_process(mut multipart: Multipart) -> impl IntoResponse {
    let mut file_len = 0usize;
    let mut generate_tts = String::new();
    let mut generate_3d = String::new();

    while let Some(field) = multipart.next_field().await.expect("read multipart field") {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => file_len = field.bytes().await.expect("file bytes").len(),
            Some("generate_tts") => generate_tts = field.text().await.expect("tts flag"),
            Some("generate_3d") => generate_3d = field.text().await.expect("3d flag"),
            _ => {}
        }
    }

    if file_len == 0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Uploaded file is empty" })),
        );
    }

    let tts_count = (generate_tts == "true").then_some(4);
    let model_count = (generate_3d == "true").then_some(4);

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Processed 4 steps",
            "pdf_hash": TABLE_HASH,
            "steps_processed": 4,
            "tts_files_generated": tts_count,
            "models_generated": model_count,
        })),
    )
}

async fn serve_pdf(Path(hash): Path<String>) -> impl IntoResponse {
    if hash == TABLE_HASH {
        (StatusCode::OK, b"%PDF-1.7 mock".to_vec()).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn serve_instruction(Path((hash, step)): Path<(String, u32)>) -> impl IntoResponse {
    if hash != TABLE_HASH {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    }
    match step {
        0 => "Prepare Workspace\n\nPlace the table frame upside down on a soft surface."
            .into_response(),
        // Step 1 never got a title line; clients synthesize one.
        1 => "Push the plastic corner brackets into the metal frame slots.".into_response(),
        2 => "Secure Frame\n\nAlign the frame holes.\n\nUse the Allen key to tighten."
            .into_response(),
        3 => "Attach Legs\n\nScrew the four legs into the corner brackets.".into_response(),
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

/// Only step 0 has position data; every other step is a 404, which clients
/// must treat as "no enrichment", not an error.
async fn serve_step_position(Path((hash, step)): Path<(String, u32)>) -> impl IntoResponse {
    if hash == TABLE_HASH && step == 0 {
        Json(json!({
            "page_number": 1,
            "y_coordinate": 220.5,
            "bbox": {
                "x0": 36.0, "y0": 180.0, "x1": 560.0, "y1": 320.0,
                "width": 524.0, "height": 140.0,
            },
        }))
        .into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}
