use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use pricecalc::application::batch::{self, BatchSummary};
use pricecalc::application::session::{self, Console};
use pricecalc::interfaces::csv::record_writer::{OutputFormat, RecordWriter};
use pricecalc::logging;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug details to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply a discount of 20% or more to a price
    #[command(alias = "d")]
    Discount {
        /// CSV file with `price,discount_percent` rows. Prompts on stdin when omitted.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output format for batch results
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Add, subtract, multiply or divide two numbers
    #[command(alias = "c")]
    Calc {
        /// CSV file with `a,b,operator` rows. Prompts on stdin when omitted.
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output format for batch results
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,

        /// Keep prompting until end of input
        #[arg(long, conflicts_with = "input")]
        repl: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();

    match cli.command {
        Command::Discount {
            input: Some(path),
            format,
        } => {
            let file = File::open(path).into_diagnostic()?;
            let writer = RecordWriter::new(stdout.lock(), format);
            report(batch::run_discounts(file, writer).into_diagnostic()?);
        }
        Command::Discount { input: None, .. } => {
            let mut console = Console::new(stdin.lock(), stdout.lock());
            session::run_discount(&mut console).into_diagnostic()?;
        }
        Command::Calc {
            input: Some(path),
            format,
            ..
        } => {
            let file = File::open(path).into_diagnostic()?;
            let writer = RecordWriter::new(stdout.lock(), format);
            report(batch::run_operations(file, writer).into_diagnostic()?);
        }
        Command::Calc {
            input: None, repl, ..
        } => {
            let mut console = Console::new(stdin.lock(), stdout.lock());
            if repl {
                session::run_calculator_repl(&mut console).into_diagnostic()?;
            } else {
                session::run_calculator(&mut console).into_diagnostic()?;
            }
        }
    }

    Ok(())
}

fn report(summary: BatchSummary) {
    if summary.skipped > 0 {
        eprintln!("Skipped {} unreadable row(s)", summary.skipped);
    }
}
