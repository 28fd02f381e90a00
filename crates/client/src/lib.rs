//! `tridocs-client` -- typed asynchronous client for the tridocs backend.
//!
//! The backend turns an uploaded PDF assembly manual into numbered steps
//! with per-step instruction text, images, 3D models, and speech audio,
//! keyed by a short content hash. [`ManualsApi`] binds that HTTP surface
//! 1:1: every method issues one independent request, with no caching,
//! retries, or coordination between concurrent calls.
//!
//! Two failure policies coexist and callers are expected to branch on
//! them: required operations (listing, upload, instruction text, artifact
//! bytes) return [`ApiError`] on any failure, while the optional
//! [`step_position`](ManualsApi::step_position) enrichment collapses every
//! failure to `None` so a degraded view can still render.

pub mod api;
pub mod config;
pub mod models;

pub use api::{ApiError, ManualsApi, UploadOptions};
pub use config::ClientConfig;
pub use models::{BoundingBox, PdfInfo, PdfListResponse, ProcessResponse, StepPosition};
