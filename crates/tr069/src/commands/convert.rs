//! `tr069 convert`: re-encode a document in another format.

use tracing::info;

use crate::cli::ConvertArgs;
use crate::error::CliError;

use super::{Settings, read_document, write_document};

pub fn handle(args: &ConvertArgs, settings: &Settings) -> Result<(), CliError> {
    let doc = read_document(&args.input)?;
    let (format, options) = settings.document_target(args.to);
    info!(model = %doc.model(), to = %format, "converting document");
    write_document(&doc, format, &options, args.out.as_deref(), settings.quiet)
}
