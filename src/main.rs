mod cli;
mod config;
mod engine;
mod error;
mod input;
mod report;
mod sheet;
mod types;

use crate::error::ScoreError;
use crate::types::catalog::{list_categories, CategoryKind};
use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const BELOW_PASS: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<i32, ScoreError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    info!(version = env!("CARGO_PKG_VERSION"), "jgj59 starting");

    match cli.command {
        cli::Commands::Categories(cmd) => {
            match cmd.format {
                cli::CatalogFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(list_categories())?);
                }
                cli::CatalogFormat::Text => {
                    for category in list_categories() {
                        let kind = match category.kind {
                            CategoryKind::Simple => "simple",
                            CategoryKind::Composite => "composite",
                        };
                        println!(
                            "{:<10} {:>3}  {:<9}  {}",
                            category.key, category.max_weight, kind, category.display_name
                        );
                        for name in category.sub_item_names {
                            println!("    - {name}");
                        }
                    }
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Init(cmd) => {
            let state = types::state::reset(list_categories());
            sheet::write_sheet(&cmd.path, &state, cmd.force)?;
            println!("sheet written: {}", cmd.path.display());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Reset(cmd) => {
            if !cmd.path.exists() {
                return Err(ScoreError::SheetNotFound(cmd.path.display().to_string()));
            }
            let state = types::state::reset(list_categories());
            sheet::write_sheet(&cmd.path, &state, true)?;
            println!("sheet reset: {}", cmd.path.display());
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Score(cmd) => {
            let mut state = sheet::load_sheet(&cmd.path)?;
            let sheet_dir = cmd
                .path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let loaded = config::load_config(sheet_dir)?;

            input::apply_edits(
                &mut state,
                &input::Edits {
                    inactive: &cmd.inactive,
                    set: &cmd.set,
                    uncheck: &cmd.uncheck,
                },
            )?;

            let result = match engine::compute(list_categories(), &state) {
                Ok(result) => result,
                Err(err @ ScoreError::InvalidInput { .. }) => {
                    eprintln!("error: {err}");
                    return Ok(exit_code::INVALID_INPUT);
                }
                Err(err) => return Err(err),
            };
            info!(
                final_score = result.final_score,
                effective_weight_base = result.effective_weight_base,
                "score computed"
            );

            let output_format = match cmd.format {
                Some(cli::ReportFormat::Summary) => report::OutputFormat::Summary,
                Some(cli::ReportFormat::Md) => report::OutputFormat::Md,
                Some(cli::ReportFormat::Json) => report::OutputFormat::Json,
                None => loaded.report_format().unwrap_or_default(),
            };
            let context = report::ReportContext {
                project: loaded.project_name().map(str::to_string),
                organization: loaded.organization().map(str::to_string),
            };
            let rendered = report::render(&result, &context, output_format)?;

            match &cmd.output {
                Some(path) => {
                    std::fs::write(path, format!("{rendered}\n"))?;
                    println!("report written: {}", path.display());
                }
                None => println!("{rendered}"),
            }

            if result.tier() == types::scoring::SafetyTier::Fail {
                Ok(exit_code::BELOW_PASS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
