//! Artifact kinds, naming, and input validation.
//!
//! The backend serves one PDF per manual plus four per-step artifacts, each
//! under its own URL path segment. This module maps those kinds to path
//! segments and local filenames, and validates user-supplied hashes before
//! they reach the network layer.

use crate::error::CoreError;
use crate::hashing::HASH_LEN;

/// One kind of file the backend serves for a processed manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// The original uploaded PDF (one per manual).
    Pdf,
    /// Rendered step image.
    Image,
    /// 3D model (GLB) for a step.
    Model,
    /// Speech audio (MP3) for a step.
    Audio,
    /// Plain-text instruction for a step.
    Instruction,
}

/// All per-step artifact kinds, in download order.
pub const STEP_ARTIFACT_KINDS: &[ArtifactKind] = &[
    ArtifactKind::Image,
    ArtifactKind::Model,
    ArtifactKind::Audio,
    ArtifactKind::Instruction,
];

impl ArtifactKind {
    /// URL path segment the backend serves this kind under.
    pub fn path_segment(&self) -> &'static str {
        match self {
            ArtifactKind::Pdf => "pdf",
            ArtifactKind::Image => "image",
            ArtifactKind::Model => "glb",
            ArtifactKind::Audio => "mp3",
            ArtifactKind::Instruction => "instruction",
        }
    }

    /// File extension for saving this kind locally.
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactKind::Pdf => "pdf",
            ArtifactKind::Image => "png",
            ArtifactKind::Model => "glb",
            ArtifactKind::Audio => "mp3",
            ArtifactKind::Instruction => "txt",
        }
    }

    /// Whether this kind is addressed per step (everything except the PDF).
    pub fn is_per_step(&self) -> bool {
        !matches!(self, ArtifactKind::Pdf)
    }

    /// Local filename for a downloaded artifact.
    ///
    /// Per-step kinds use the backend's `{hash}-{step}.{ext}` convention;
    /// the PDF is just `{hash}.pdf`.
    pub fn local_filename(&self, hash: &str, step: u32) -> String {
        if self.is_per_step() {
            format!("{hash}-{step}.{}", self.extension())
        } else {
            format!("{hash}.{}", self.extension())
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Validate that a string looks like a manual hash: exactly [`HASH_LEN`]
/// lowercase hex characters.
pub fn validate_hash(hash: &str) -> Result<(), CoreError> {
    if hash.len() != HASH_LEN {
        return Err(CoreError::Validation(format!(
            "Manual hash must be {HASH_LEN} characters, got {}: '{hash}'",
            hash.len()
        )));
    }
    if !hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()) {
        return Err(CoreError::Validation(format!(
            "Manual hash must be lowercase hex: '{hash}'"
        )));
    }
    Ok(())
}
