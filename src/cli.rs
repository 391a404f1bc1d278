use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "jgj59",
    version,
    about = "JGJ59-2011 construction safety inspection scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the inspection categories, weights and sub-items
    Categories(CategoriesCommand),
    /// Write a fresh evaluation sheet
    Init(InitCommand),
    /// Clear an existing evaluation sheet back to the fresh state
    Reset(ResetCommand),
    /// Compute the composite score of an evaluation sheet
    Score(ScoreCommand),
}

#[derive(Clone, Debug, ValueEnum)]
pub enum CatalogFormat {
    Text,
    Json,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Summary,
    Md,
    Json,
}

#[derive(Args)]
pub struct CategoriesCommand {
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: CatalogFormat,
}

#[derive(Args)]
pub struct InitCommand {
    pub path: PathBuf,
    /// Overwrite the sheet if it already exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ResetCommand {
    pub path: PathBuf,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub path: PathBuf,

    /// Report format; defaults to [report].format from jgj59.toml, then summary
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Mark a category as not applicable (repeatable)
    #[arg(long, value_name = "CATEGORY")]
    pub inactive: Vec<String>,

    /// Enter a score: <category>=<score> or <category>/<sub-item>=<score> (repeatable)
    #[arg(long, value_name = "FIELD=SCORE")]
    pub set: Vec<String>,

    /// Exclude a sub-item from its category average (repeatable)
    #[arg(long, value_name = "CATEGORY/SUB-ITEM")]
    pub uncheck: Vec<String>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
