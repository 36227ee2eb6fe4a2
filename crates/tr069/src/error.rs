//! CLI error types with miette diagnostics.
//!
//! Maps `ModelError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use tr069_config::ConfigError;
use tr069_model::ModelError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const INVALID_DOCUMENT: i32 = 5;
    pub const CONFIG: i32 = 6;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Input ────────────────────────────────────────────────────────

    #[error("Input file '{path}' not found")]
    #[diagnostic(code(tr069::not_found), help("Pass `-` to read the document from stdin."))]
    FileNotFound { path: String },

    #[error("Cannot tell the format of '{path}'")]
    #[diagnostic(
        code(tr069::unknown_format),
        help("Use a .xml, .json, .yaml or .yml extension, or pass --from.")
    )]
    UnknownFormat { path: String },

    #[error("'{path}' is not a valid data model document")]
    #[diagnostic(
        code(tr069::invalid_document),
        help(
            "JSON and YAML documents wrap the root in a single key, e.g. {{\"Device\": {{...}}}}.\n\
             For a bare root object pass --model."
        )
    )]
    InvalidDocument {
        path: String,
        #[source]
        source: ModelError,
    },

    // ── Output ───────────────────────────────────────────────────────

    #[error("Failed to encode document: {0}")]
    #[diagnostic(code(tr069::encode))]
    Encode(#[source] ModelError),

    #[error("Invalid JSON output: {0}")]
    #[diagnostic(code(tr069::json))]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML output: {0}")]
    #[diagnostic(code(tr069::yaml))]
    Yaml(#[from] serde_yaml::Error),

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(tr069::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Configuration file already exists")]
    #[diagnostic(
        code(tr069::config_exists),
        help("Found at: {path}\nPass --force to overwrite it.")
    )]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(
        code(tr069::config),
        help("Check the config file (tr069 config path) and TR069_* environment variables.")
    )]
    Config(#[from] ConfigError),

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Attach the input path to a decode failure.
    pub fn decode(path: &str, err: ModelError) -> Self {
        match err {
            ModelError::UnknownFormat { path } => Self::UnknownFormat { path },
            err if err.is_invalid_document() => Self::InvalidDocument {
                path: path.to_owned(),
                source: err,
            },
            err => Self::Encode(err),
        }
    }

    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } => exit_code::NOT_FOUND,
            Self::UnknownFormat { .. } | Self::Validation { .. } | Self::ConfigExists { .. } => {
                exit_code::USAGE
            }
            Self::InvalidDocument { .. } => exit_code::INVALID_DOCUMENT,
            Self::Config(_) => exit_code::CONFIG,
            _ => exit_code::GENERAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_map_to_exit_codes() {
        let unknown = CliError::decode("a.txt", ModelError::UnknownFormat { path: "a.txt".into() });
        assert_eq!(unknown.exit_code(), exit_code::USAGE);

        let empty = CliError::decode("a.xml", ModelError::EmptyDocument);
        assert_eq!(empty.exit_code(), exit_code::INVALID_DOCUMENT);
    }

    #[test]
    fn config_errors_use_config_exit_code() {
        let err = CliError::from(ConfigError::Validation {
            field: "defaults.output".into(),
            reason: "bad".into(),
        });
        assert_eq!(err.exit_code(), exit_code::CONFIG);
    }
}
