//! `tr069 template`: print an empty skeleton for a data model.

use tr069_model::Document;

use crate::cli::TemplateArgs;
use crate::error::CliError;

use super::{Settings, write_document};

pub fn handle(args: &TemplateArgs, settings: &Settings) -> Result<(), CliError> {
    let doc = Document::template(args.model.into());
    let (format, options) = settings.document_target(args.to);
    write_document(&doc, format, &options, None, settings.quiet)
}
