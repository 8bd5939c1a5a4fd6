use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use notary_core::{DocumentType, brackets_for, quote};
use notary_cli::batch;
use notary_cli::config::Config;
use notary_cli::input::resolve_amount;
use notary_cli::report::{self, OutputFormat};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Spanish notary fee estimator.
///
/// Prices a deed from its type and transaction value, adds folios and
/// copies, and applies IVA.
#[derive(Debug, Parser)]
#[command(name = "notary-fees", version, about, long_about = None)]
struct Cli {
    /// Optional TOML file with default quantities and log level.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate the fees for a single deed.
    Quote(QuoteArgs),

    /// List the supported document types.
    Types,

    /// Show the fee schedule for a document type.
    Brackets {
        #[arg(short = 't', long = "type")]
        doc_type: DocumentType,
    },

    /// Price every row of a CSV file and write the results as CSV.
    Batch {
        /// Path to the CSV file of quote requests.
        #[arg(short, long)]
        file: PathBuf,
    },
}

#[derive(Debug, Args)]
struct QuoteArgs {
    /// Document type, e.g. `sale` or `compraventa`.
    #[arg(short = 't', long = "type")]
    doc_type: DocumentType,

    /// Transaction value in euros. Ignored for powers of attorney.
    #[arg(short, long)]
    amount: Option<String>,

    /// Number of folios (defaults to the configured value).
    #[arg(long)]
    folios: Option<u32>,

    /// Number of simple copies (defaults to the configured value).
    #[arg(long)]
    simple_copies: Option<u32>,

    /// Number of authorized copies (defaults to the configured value).
    #[arg(long)]
    authorized_copies: Option<u32>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to the configured level so normal runs are quiet.
/// * Writes to stderr so quotes on stdout stay clean for piping.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── commands ────────────────────────────────────────────────────────────────

fn run_quote(
    args: QuoteArgs,
    config: &Config,
) -> anyhow::Result<()> {
    let amount = resolve_amount(args.doc_type, args.amount.as_deref()).inspect_err(|error| {
        warn!(doc_type = %args.doc_type, %error, "rejected amount");
    })?;
    let quantities = config
        .defaults
        .resolve(args.folios, args.simple_copies, args.authorized_copies);

    let estimate = quote(args.doc_type, amount, quantities);
    info!(doc_type = %args.doc_type, total = %estimate.total, "quote ready");

    match args.format {
        OutputFormat::Text => print!("{}", report::render_text(&estimate)),
        OutputFormat::Csv => {
            report::write_csv([&estimate], io::stdout()).context("Failed to write CSV")?;
        }
    }

    Ok(())
}

fn run_types() {
    for doc_type in DocumentType::ALL {
        println!("{:<24}{}", doc_type.as_str(), doc_type.display_name());
    }
}

fn run_brackets(doc_type: DocumentType) {
    println!("{} ({})", doc_type.display_name(), doc_type);
    println!("  {:>14}  {:>10}  {:>8}", "up to", "base fee", "rate");

    for bracket in brackets_for(doc_type) {
        let limit = bracket
            .upper_limit
            .map_or_else(|| "unbounded".to_string(), |l| l.to_string());
        let rate = bracket
            .marginal_rate
            .map_or_else(|| "-".to_string(), |r| format!("{r}%"));
        println!(
            "  {:>14}  {:>10}  {:>8}",
            limit,
            report::money(bracket.base_fee),
            rate
        );
    }
}

fn run_batch(
    file: PathBuf,
    config: &Config,
) -> anyhow::Result<()> {
    let requests = batch::load_from_file(&file, &config.defaults)
        .with_context(|| format!("Failed to load batch file: {}", file.display()))?;

    let quotes: Vec<_> = requests.iter().map(batch::QuoteRequest::quote).collect();
    info!(count = quotes.len(), "priced batch");

    report::write_csv(&quotes, io::stdout()).context("Failed to write CSV")?;
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    init_tracing(&config.log_level);
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Quote(args) => run_quote(args, &config)?,
        Command::Types => run_types(),
        Command::Brackets { doc_type } => run_brackets(doc_type),
        Command::Batch { file } => run_batch(file, &config)?,
    }

    Ok(())
}
