//! Response types for the tridocs backend REST API.
//!
//! Pure value objects deserialized from each response; the client never
//! caches or mutates them. Field names match the backend's JSON exactly.

use serde::Deserialize;

/// One processed manual known to the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct PdfInfo {
    /// Content hash identifying the manual (short SHA-1 of the PDF bytes).
    pub hash: String,
    /// Original filename of the uploaded PDF.
    pub pdf_filename: String,
    /// Number of assembly steps extracted from the manual.
    pub step_count: u32,
}

/// Response of `GET /pdfs`.
#[derive(Debug, Clone, Deserialize)]
pub struct PdfListResponse {
    pub success: bool,
    /// All processed manuals, in backend order.
    pub pdfs: Vec<PdfInfo>,
    /// Total number of manuals; equals `pdfs.len()` on success.
    pub total_count: u32,
}

/// Outcome of `POST /upload-and-process`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessResponse {
    pub success: bool,
    /// Human-readable summary from the backend.
    pub message: String,
    /// Content hash assigned to the processed manual.
    pub pdf_hash: String,
    /// Number of steps extracted.
    pub steps_processed: u32,
    /// Speech clips generated; `None` when TTS generation was skipped.
    pub tts_files_generated: Option<u32>,
    /// 3D models generated; `None` when model generation was skipped.
    pub models_generated: Option<u32>,
}

/// Location of a step within the source PDF, for highlighting the region
/// of the original document a step came from.
#[derive(Debug, Clone, Deserialize)]
pub struct StepPosition {
    /// 1-based page number in the source PDF.
    pub page_number: u32,
    /// Vertical coordinate of the step on that page.
    pub y_coordinate: f64,
    /// Bounding box of the step's region.
    pub bbox: BoundingBox,
}

/// Axis-aligned bounding box in PDF page coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct BoundingBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    /// Derived `x1 - x0`, precomputed by the backend.
    pub width: f64,
    /// Derived `y1 - y0`, precomputed by the backend.
    pub height: f64,
}

/// JSON error envelope the backend returns on failure.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: String,
}
