//! REST API client for the tridocs backend HTTP endpoints.
//!
//! Wraps the backend HTTP API (manual listing, upload-and-process,
//! per-step instruction and artifact retrieval) using [`reqwest`].

use std::path::Path;

use reqwest::multipart;
use tridocs_core::artifact::ArtifactKind;
use tridocs_core::instruction::Instruction;
use tridocs_core::steps;

use crate::config::ClientConfig;
use crate::models::{ErrorBody, PdfInfo, PdfListResponse, ProcessResponse, StepPosition};

/// HTTP client for a single tridocs backend.
pub struct ManualsApi {
    client: reqwest::Client,
    base_url: String,
}

/// Generation flags for [`ManualsApi::upload_and_process`].
///
/// Both passes are on by default; turning one off makes the backend skip
/// that artifact type and report `None` for its count.
#[derive(Debug, Clone, Copy)]
pub struct UploadOptions {
    /// Generate per-step speech audio.
    pub generate_tts: bool,
    /// Generate per-step 3D models.
    pub generate_3d: bool,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            generate_tts: true,
            generate_3d: true,
        }
    }
}

/// Errors from the backend REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code. `detail` carries the
    /// server's error detail when the body was parseable JSON, otherwise
    /// the HTTP status text.
    #[error("Backend error ({status}): {detail}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-supplied detail or status text.
        detail: String,
    },

    /// A manual with the given hash is not known to the backend.
    #[error("Manual not found: {hash}")]
    ManualNotFound { hash: String },

    /// Reading a local file for upload failed.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ManualsApi {
    /// Create a new API client for a backend instance.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:8000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across clients).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Create an API client from a [`ClientConfig`], applying the
    /// configured request timeout.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config.api_url.clone()))
    }

    /// Backend base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ---- listing & lookup ----

    /// Fetch all processed manuals.
    ///
    /// Sends a `GET /pdfs` request. On success `total_count` equals the
    /// number of returned entries.
    pub async fn list_manuals(&self) -> Result<PdfListResponse, ApiError> {
        let response = self
            .client
            .get(format!("{}/pdfs", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Look up a manual by content hash.
    ///
    /// Returns `Ok(None)` for an unknown hash -- absence is not an error.
    /// The backend has no point-lookup endpoint, so this fetches the full
    /// list and scans it linearly; fine for the small catalogs this serves,
    /// a known limitation beyond that.
    pub async fn find_manual(&self, hash: &str) -> Result<Option<PdfInfo>, ApiError> {
        let list = self.list_manuals().await?;
        Ok(list.pdfs.into_iter().find(|pdf| pdf.hash == hash))
    }

    /// Enumerate the 0-based step indices of a manual.
    ///
    /// Resolves the manual's step count via [`find_manual`](Self::find_manual)
    /// and returns `[0, step_count)`. Unlike lookup, an unknown hash here is
    /// an error ([`ApiError::ManualNotFound`]): callers asking for steps
    /// cannot proceed without the manual.
    pub async fn step_indices(&self, hash: &str) -> Result<Vec<u32>, ApiError> {
        let info = self
            .find_manual(hash)
            .await?
            .ok_or_else(|| ApiError::ManualNotFound {
                hash: hash.to_string(),
            })?;

        Ok(steps::step_indices(info.step_count))
    }

    // ---- upload ----

    /// Upload a PDF from disk and run the processing pipeline.
    ///
    /// Reads the file, then defers to [`upload_bytes`](Self::upload_bytes)
    /// with the file's name.
    pub async fn upload_and_process(
        &self,
        path: impl AsRef<Path>,
        options: UploadOptions,
    ) -> Result<ProcessResponse, ApiError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| ApiError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "manual.pdf".to_string());

        self.upload_bytes(filename, bytes, options).await
    }

    /// Upload PDF bytes and run the processing pipeline.
    ///
    /// Sends a `POST /upload-and-process` multipart request with the file
    /// plus `generate_tts` / `generate_3d` as string-encoded booleans. On a
    /// non-2xx response the error detail comes from the server's JSON error
    /// body when present, else the HTTP status text.
    pub async fn upload_bytes(
        &self,
        filename: impl Into<String>,
        bytes: Vec<u8>,
        options: UploadOptions,
    ) -> Result<ProcessResponse, ApiError> {
        let file_part = multipart::Part::bytes(bytes)
            .file_name(filename.into())
            .mime_str("application/pdf")?;

        let form = multipart::Form::new()
            .part("file", file_part)
            .text("generate_tts", options.generate_tts.to_string())
            .text("generate_3d", options.generate_3d.to_string());

        let response = self
            .client
            .post(format!("{}/upload-and-process", self.base_url))
            .multipart(form)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- URL builders ----

    /// Build the URL an artifact is served under.
    ///
    /// Pure and deterministic: no validation, no network access. The PDF is
    /// addressed per manual, every other kind per step.
    pub fn artifact_url(&self, kind: ArtifactKind, hash: &str, step: u32) -> String {
        if kind.is_per_step() {
            format!("{}/{}/{hash}/{step}", self.base_url, kind.path_segment())
        } else {
            format!("{}/{}/{hash}", self.base_url, kind.path_segment())
        }
    }

    /// URL of the original PDF.
    pub fn pdf_url(&self, hash: &str) -> String {
        self.artifact_url(ArtifactKind::Pdf, hash, 0)
    }

    /// URL of a step's rendered image.
    pub fn image_url(&self, hash: &str, step: u32) -> String {
        self.artifact_url(ArtifactKind::Image, hash, step)
    }

    /// URL of a step's 3D model (GLB).
    pub fn model_url(&self, hash: &str, step: u32) -> String {
        self.artifact_url(ArtifactKind::Model, hash, step)
    }

    /// URL of a step's speech clip (MP3).
    pub fn audio_url(&self, hash: &str, step: u32) -> String {
        self.artifact_url(ArtifactKind::Audio, hash, step)
    }

    /// URL of a step's instruction text file.
    pub fn instruction_url(&self, hash: &str, step: u32) -> String {
        self.artifact_url(ArtifactKind::Instruction, hash, step)
    }

    // ---- per-step content ----

    /// Fetch the raw instruction text for a step.
    pub async fn instruction_text(&self, hash: &str, step: u32) -> Result<String, ApiError> {
        let response = self
            .client
            .get(self.instruction_url(hash, step))
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.text().await?)
    }

    /// Fetch and parse a step's instruction into title + description.
    pub async fn instruction(&self, hash: &str, step: u32) -> Result<Instruction, ApiError> {
        let text = self.instruction_text(hash, step).await?;
        Ok(Instruction::parse(&text, step))
    }

    /// Fetch the position of a step within the source PDF.
    ///
    /// Optional enrichment: every failure -- non-2xx, transport error,
    /// malformed body -- is logged and collapsed to `None` so callers can
    /// render a degraded view. This asymmetry with the other fetchers is
    /// deliberate and load-bearing.
    pub async fn step_position(&self, hash: &str, step: u32) -> Option<StepPosition> {
        let url = format!("{}/step-position/{hash}/{step}", self.base_url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(hash, step, error = %e, "Step position request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!(hash, step, status = %response.status(), "No step position available");
            return None;
        }

        match response.json::<StepPosition>().await {
            Ok(position) => Some(position),
            Err(e) => {
                tracing::warn!(hash, step, error = %e, "Malformed step position body");
                None
            }
        }
    }

    /// Download an artifact URL as raw bytes.
    ///
    /// Use with the URL builders above for the binary endpoints (PDF,
    /// image, GLB, MP3).
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.client.get(url).send().await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or an [`ApiError::Api`] whose detail is the
    /// server's JSON `detail` field when the error body parses, else the
    /// status' canonical reason.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let fallback = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.to_string());

        let detail = match response.text().await {
            Ok(body) => serde_json::from_str::<ErrorBody>(&body)
                .map(|parsed| parsed.detail)
                .unwrap_or(fallback),
            Err(_) => fallback,
        };

        Err(ApiError::Api {
            status: status.as_u16(),
            detail,
        })
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
