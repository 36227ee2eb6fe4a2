//! Clap derive structures for the `tr069` CLI.
//!
//! Kept free of crate-internal imports: `build.rs` includes this file
//! directly to render man pages.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// tr069 -- work with TR-069 data model documents
#[derive(Debug, Parser)]
#[command(
    name = "tr069",
    version,
    about = "Convert, inspect and scaffold TR-069 data model documents",
    long_about = "Reads and writes parameter trees of the TR-181 Device (IPsec),\n\
        TR-196 FAPService (UMTS cell configuration) and TR-135 STBService\n\
        (DVB-T front end) data models as XML, JSON or YAML.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "TR069_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table for summaries; XML for documents
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Data-model XML
    Xml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

/// Document serialization format; mirrors `tr069_model::Format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocFormat {
    Xml,
    Json,
    Yaml,
}

/// Data-model root; mirrors `tr069_model::DataModel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelArg {
    /// TR-181 Device
    Device,
    /// TR-196 FAPService
    FapService,
    /// TR-135 STBService
    StbService,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a document between XML, JSON and YAML
    #[command(alias = "conv")]
    Convert(ConvertArgs),

    /// Print an empty document skeleton for a data model
    #[command(alias = "tpl")]
    Template(TemplateArgs),

    /// Count the objects and table rows in a document
    #[command(alias = "sum")]
    Summary(SummaryArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Print the manual page for tr069 or one of its commands
    Man(ManArgs),
}

// ── Document Arguments ───────────────────────────────────────────────

/// How to read an input document.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Input document, or `-` for stdin
    pub file: PathBuf,

    /// Input format [default: from the file extension]
    #[arg(long)]
    pub from: Option<DocFormat>,

    /// Data-model root of the input; skips root detection and, for JSON
    /// and YAML, expects the bare root object
    #[arg(long, short = 'm')]
    pub model: Option<ModelArg>,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format [default: derived from --output, xml for table]
    #[arg(long)]
    pub to: Option<DocFormat>,

    /// Write to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Data model to scaffold
    pub model: ModelArg,

    /// Output format [default: derived from --output, xml for table]
    #[arg(long)]
    pub to: Option<DocFormat>,
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Only list multi-instance table rows
    #[arg(long, short = 't')]
    pub tables: bool,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Display current resolved configuration
    Show,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Args)]
pub struct ManArgs {
    /// Command path, e.g. `config init`; omit for the top-level page
    pub command: Vec<String>,
}
