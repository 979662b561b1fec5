use clap::{CommandFactory, Parser};
use colored::Colorize;
use errors::prelude::*;
use save_converter::{
    convert::{check_file, convert_file, ConvertReport, SAVE_CHUNK_SIZE},
    error::ConvertError,
};
use std::{path::PathBuf, process::ExitCode};

#[derive(Parser)]
#[clap(name = "save-converter")]
#[clap(about = "Reorder a save file's bytes to be linear", long_about = None)]
struct Cli {
    /// Save file to convert
    #[clap(value_name = "in.sav")]
    input: PathBuf,

    /// Converted save file, must not exist yet
    #[clap(value_name = "out.sav", required_unless_present = "check")]
    output: Option<PathBuf>,

    /// Only check that the input can be converted, write nothing
    #[clap(long)]
    check: bool,

    /// Print a summary of the conversion
    #[clap(short, long)]
    verbose: bool,
}

// Console output --------------------------------------------------------------

// Pretty prints the converter status.
macro_rules! log {
    ($header:ident, $fmt:literal $(, $args:expr)* $(,)?) => {
        println!("{} {}", $header, format!($fmt $(, $args)*).green())
    };
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        println!("{}", format!($fmt $(, $args)*).green())
    };
}

macro_rules! log_error {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        eprintln!("{}", format!($fmt $(, $args)*).red().bold())
    };
}

fn print_usage() {
    eprintln!();
    eprintln!("{}", Cli::command().render_usage());
}

fn print_summary(report: &ConvertReport) {
    let header = "[CONVERT]".blue().bold();
    log!(
        header,
        "{} bytes, {} chunks of {} bytes reversed",
        report.bytes,
        report.chunks,
        report.chunk_size
    );
}

// -----------------------------------------------------------------------------

fn run(args: &Cli) -> AnyResult<()> {
    if args.check {
        let report = check_file::<SAVE_CHUNK_SIZE, _>(&args.input)?;
        log!(
            "{} can be converted: {} chunks of {} bytes.",
            args.input.display(),
            report.chunks,
            report.chunk_size
        );
        return Ok(());
    }

    let output = args.output.as_ref().context("missing output file")?;
    let report = convert_file::<SAVE_CHUNK_SIZE, _, _>(&args.input, output)?;
    if args.verbose {
        print_summary(&report);
    }
    log!("Done.");

    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_error!("{}", err);

            let typed = err.downcast_ref::<ConvertError>();
            if typed.map_or(false, |err| err.wants_usage()) {
                print_usage();
            }
            ExitCode::from(typed.map_or(GENERIC_FAILURE, |err| err.exit_code()))
        }
    }
}
