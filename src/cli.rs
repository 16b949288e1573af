use clap::Parser;
use std::path::PathBuf;

/// Calculates the page order for printing an A6 PDF as a booklet: 4x A6 per A4,
/// front and back. Cut the printed stack horizontally, put the top halves into
/// the centre of the bottom halves, and fold.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Cli {
    /// Input PDF with A6 pages
    #[arg(long = "in", value_name = "PATH", env = "A6_BOOKLET_IN")]
    pub input: Option<PathBuf>,

    /// Output PDF path
    #[arg(long = "out", value_name = "PATH", env = "A6_BOOKLET_OUT")]
    pub output: Option<PathBuf>,

    /// Number of pages - must be a multiple of 8
    #[arg(
        long,
        value_name = "COUNT",
        env = "A6_BOOKLET_PAGES",
        allow_negative_numbers = true
    )]
    pub pages: Option<i64>,

    /// Page reordering tool to emit the command line for
    #[arg(long, value_name = "TOOL", env = "A6_BOOKLET_TOOL")]
    pub tool: Option<String>,

    /// TOML file to read defaults from (a6-booklet.toml is used if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Give detailed event output on stderr
    #[arg(long)]
    pub debug: bool,

    /// Print cutting and folding instructions on stderr
    #[arg(long)]
    pub instructions: bool,
}
