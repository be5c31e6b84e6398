use std::path::PathBuf;

use capsift::TableKind;
use clap::{ArgAction, Parser, ValueEnum};

/// Output format for the rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}

/// Command-line arguments accepted by the `capsift` binary.
#[derive(Parser, Debug)]
#[command(
    name = "capsift",
    version,
    about = "Filter, sort and highlight the tables of a website capture result"
)]
pub(crate) struct CliArgs {
    /// Capture result JSON, as returned by the capture service.
    #[arg(value_name = "FILE")]
    pub(crate) file: PathBuf,

    #[arg(
        short,
        long,
        env = "CAPSIFT_TABLE",
        default_value = "network",
        help = "Table to show: network, clickable, hidden, forms, popups, external-scripts, inline-scripts, html"
    )]
    pub(crate) table: TableKind,

    #[arg(
        short,
        long,
        env = "CAPSIFT_QUERY",
        default_value = "",
        help = "Search terms separated by |, prefix with ! to exclude (e.g. \"error | 200 | !image\")"
    )]
    pub(crate) query: String,

    #[arg(
        short,
        long = "sort",
        value_name = "COLUMN",
        action = ArgAction::Append,
        help = "Click a column header; repeat to cycle ascending, descending, unsorted"
    )]
    pub(crate) sort: Vec<String>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub(crate) format: OutputFormat,

    /// Highlight matches with reverse video instead of brackets.
    #[arg(long)]
    pub(crate) color: bool,

    /// Raise log verbosity (stderr). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub(crate) verbose: u8,
}

pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}
