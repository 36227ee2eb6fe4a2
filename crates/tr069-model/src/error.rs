// ── Model error types ──
//
// Errors surface only at the document boundary: decoding or encoding a
// whole parameter tree. Building and mutating objects in memory never
// fails, and declared ranges are not checked here.

use thiserror::Error;

/// Unified error type for the model crate.
#[derive(Debug, Error)]
pub enum ModelError {
    // ── Document errors ──────────────────────────────────────────────
    #[error("Unknown root element '{element}' (expected Device, FAPService or STBService)")]
    UnknownRoot { element: String },

    #[error("Document contains no root element")]
    EmptyDocument,

    #[error("Cannot detect document format from '{path}'")]
    UnknownFormat { path: String },

    // ── Parameter errors ─────────────────────────────────────────────
    #[error("Invalid {parameter} value '{value}'")]
    InvalidEnumValue {
        parameter: &'static str,
        value: String,
    },

    #[error("Invalid list item '{item}': {reason}")]
    InvalidListItem { item: String, reason: String },

    // ── Codec errors (wrapped) ───────────────────────────────────────
    #[error("XML read error: {0}")]
    XmlRead(#[from] quick_xml::DeError),

    #[error("XML write error: {0}")]
    XmlWrite(#[from] quick_xml::SeError),

    #[error("XML syntax error: {0}")]
    XmlSyntax(#[from] quick_xml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ModelError {
    /// True for errors caused by the content of a document rather than
    /// by the request made on it.
    pub fn is_invalid_document(&self) -> bool {
        matches!(
            self,
            Self::EmptyDocument
                | Self::UnknownRoot { .. }
                | Self::InvalidEnumValue { .. }
                | Self::InvalidListItem { .. }
                | Self::XmlRead(_)
                | Self::XmlSyntax(_)
                | Self::Json(_)
                | Self::Yaml(_)
        )
    }
}
