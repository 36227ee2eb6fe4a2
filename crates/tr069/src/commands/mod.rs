//! Command handlers and the document I/O they share.

pub mod config_cmd;
pub mod convert;
pub mod man;
pub mod summary;
pub mod template;

use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use tracing::debug;

use tr069_config::Config;
use tr069_model::{DataModel, Document, EncodeOptions, Format};

use crate::cli::{ColorMode, Command, DocFormat, GlobalOpts, InputArgs, ModelArg, OutputFormat};
use crate::error::CliError;

// ── Resolved settings ────────────────────────────────────────────────

/// Global flags merged over config defaults.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub output: OutputFormat,
    pub color: ColorMode,
    pub indent: usize,
    pub quiet: bool,
}

impl Settings {
    pub fn resolve(global: &GlobalOpts, cfg: &Config) -> Self {
        Self {
            output: global.output.unwrap_or_else(|| {
                OutputFormat::from_str(&cfg.defaults.output, true).unwrap_or(OutputFormat::Table)
            }),
            color: global.color.unwrap_or_else(|| {
                ColorMode::from_str(&cfg.defaults.color, true).unwrap_or(ColorMode::Auto)
            }),
            indent: cfg.defaults.indent,
            quiet: global.quiet,
        }
    }

    /// Document format and options for `--to`, falling back to `--output`.
    pub fn document_target(&self, to: Option<DocFormat>) -> (Format, EncodeOptions) {
        let format = to.map_or_else(
            || match self.output {
                OutputFormat::Json | OutputFormat::JsonCompact => Format::Json,
                OutputFormat::Yaml => Format::Yaml,
                OutputFormat::Table | OutputFormat::Xml => Format::Xml,
            },
            Format::from,
        );
        let options = EncodeOptions {
            pretty: self.output != OutputFormat::JsonCompact,
            indent: self.indent,
        };
        (format, options)
    }
}

// ── Dispatch ─────────────────────────────────────────────────────────

/// Route a document command to its handler.
pub fn dispatch(cmd: Command, settings: &Settings) -> Result<(), CliError> {
    match cmd {
        Command::Convert(args) => convert::handle(&args, settings),
        Command::Template(args) => template::handle(&args, settings),
        Command::Summary(args) => summary::handle(&args, settings),
        Command::Config(_) | Command::Completions(_) | Command::Man(_) => {
            unreachable!("handled before config is loaded")
        }
    }
}

// ── Document I/O ─────────────────────────────────────────────────────

impl From<DocFormat> for Format {
    fn from(format: DocFormat) -> Self {
        match format {
            DocFormat::Xml => Self::Xml,
            DocFormat::Json => Self::Json,
            DocFormat::Yaml => Self::Yaml,
        }
    }
}

impl From<ModelArg> for DataModel {
    fn from(model: ModelArg) -> Self {
        match model {
            ModelArg::Device => Self::Device,
            ModelArg::FapService => Self::FapService,
            ModelArg::StbService => Self::StbService,
        }
    }
}

/// Read and decode the document named by `input`.
pub fn read_document(input: &InputArgs) -> Result<Document, CliError> {
    let path = input.file.as_path();
    let shown = path.display().to_string();
    let from_stdin = path == Path::new("-");

    let format = match input.from {
        Some(format) => Format::from(format),
        None if from_stdin => {
            return Err(CliError::Validation {
                field: "--from".into(),
                reason: "required when reading from stdin".into(),
            });
        }
        None => Format::from_path(path).map_err(|e| CliError::decode(&shown, e))?,
    };

    let text = if from_stdin {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        if !path.is_file() {
            return Err(CliError::FileNotFound { path: shown });
        }
        std::fs::read_to_string(path)?
    };
    debug!(path = %shown, %format, bytes = text.len(), "read input");

    let decoded = match input.model {
        Some(model) => Document::decode_as(&text, format, model.into()),
        None => Document::decode(&text, format),
    };
    decoded.map_err(|e| CliError::decode(&shown, e))
}

/// Encode `doc` and print it, or write it to `out` when given.
pub fn write_document(
    doc: &Document,
    format: Format,
    options: &EncodeOptions,
    out: Option<&Path>,
    quiet: bool,
) -> Result<(), CliError> {
    let text = doc.encode(format, options).map_err(CliError::Encode)?;
    match out {
        Some(path) => {
            std::fs::write(path, &text)?;
            debug!(path = %path.display(), %format, "wrote document");
            Ok(())
        }
        None => {
            crate::output::print_output(&text, quiet);
            Ok(())
        }
    }
}
