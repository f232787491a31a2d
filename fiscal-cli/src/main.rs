use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use fiscal_cli::app::{self, OutputFormat, ScenarioArgs};
use fiscal_cli::logging;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Fiscal burden simulator for the gross-receipts, property and vehicle taxes.
///
/// Projects the yearly burden, the compliance discounts on offer and the
/// bracket and compliance recommendations that follow from them.
#[derive(Debug, Parser)]
#[command(name = "fiscal-sim", version)]
struct Cli {
    /// Log filter: a bare level ("debug") or any RUST_LOG directive.
    /// Overrides RUST_LOG when given.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Project the burden of a single taxpayer.
    Calculate {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// TOML parameter file; the 2026 values are used when omitted.
        #[arg(long)]
        params: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Project every taxpayer listed in a CSV file.
    Batch {
        /// CSV file with one taxpayer per row.
        #[arg(long)]
        file: PathBuf,

        /// TOML parameter file; the 2026 values are used when omitted.
        #[arg(long)]
        params: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the effective parameter set.
    Params {
        /// TOML parameter file; the 2026 values are used when omitted.
        #[arg(long)]
        params: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;
    debug!(command = ?cli.command, "starting");

    let output = match &cli.command {
        Command::Calculate {
            scenario,
            params,
            format,
        } => {
            let params = app::load_parameters(params.as_deref())?;
            app::run_calculate(params, scenario, *format)?
        }
        Command::Batch {
            file,
            params,
            format,
        } => {
            let params = app::load_parameters(params.as_deref())?;
            app::run_batch(params, file, *format)?
        }
        Command::Params { params, format } => {
            let params = app::load_parameters(params.as_deref())?;
            app::render_params(&params, *format)?
        }
    };

    println!("{}", output.trim_end());
    Ok(())
}
