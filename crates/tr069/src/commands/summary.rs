//! `tr069 summary`: object census of a document.

use tabled::Tabled;

use tr069_model::ObjectCount;

use crate::cli::SummaryArgs;
use crate::error::CliError;
use crate::output;

use super::{Settings, read_document};

#[derive(Tabled)]
struct CountRow {
    #[tabled(rename = "Object")]
    object: &'static str,
    #[tabled(rename = "Instances")]
    instances: usize,
}

fn to_row(c: &ObjectCount) -> CountRow {
    CountRow {
        object: c.object,
        instances: c.instances,
    }
}

pub fn handle(args: &SummaryArgs, settings: &Settings) -> Result<(), CliError> {
    let doc = read_document(&args.input)?;
    let counts = if args.tables {
        doc.table_summary()
    } else {
        doc.object_counts()
    };
    tracing::debug!(model = %doc.model(), objects = counts.len(), "counted objects");

    let out = output::render_list(settings.output, &counts, to_row)?;
    output::print_output(&out, settings.quiet);
    Ok(())
}
