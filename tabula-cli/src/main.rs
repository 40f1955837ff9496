use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tabula_cli::{logging, render, CliError, TableDocument};

/// Resolve a JSON table document into a render plan.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Table document to read. Reads stdin when omitted or `-`.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Container width, overriding the document's.
    #[arg(short, long)]
    width: Option<u16>,

    /// Pretty-print the plan.
    #[arg(long)]
    pretty: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(args: Args) -> Result<(), CliError> {
    logging::init(args.verbose, args.log_file.as_deref())?;

    let mut document = TableDocument::read(args.input.as_deref())?;
    if args.width.is_some() {
        document.width = args.width;
    }

    let model = document.into_model()?;
    println!("{}", render(&model, args.pretty)?);
    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
