//! sagenote: render a notebook as a static HTML page with live SageCells.
#![allow(clippy::multiple_crate_versions)]

use clap::error::ErrorKind;
use clap::Parser;
use sagenote::{assemble, config, default_output_path, logging};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sagenote")]
#[command(about = "Render a notebook as an HTML page with live SageCells", long_about = None)]
struct Args {
    /// Notebook to convert
    #[arg(value_name = "NOTEBOOK")]
    input: PathBuf,

    /// Page to write (defaults to the notebook path with an .html extension)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Page title, overriding the heading of the first cell
    #[arg(long)]
    title: Option<String>,

    /// Let markdown passes run inside TeX math
    #[arg(long)]
    no_math_guard: bool,

    /// Log conversion decisions to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    logging::init(args.verbose);
    let cfg = config::Config::load();

    // Override config with command line args
    let mut options = assemble::Options::from(&cfg);
    options.title = args.title;
    if args.no_math_guard {
        options.preserve_math = false;
    }

    if !args.input.exists() {
        eprintln!("Error: File {} not found", args.input.display());
        return ExitCode::FAILURE;
    }

    let output = args
        .output
        .unwrap_or_else(|| default_output_path(&args.input));

    if let Err(e) = sagenote::convert_file(&args.input, &output, &options) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    println!(
        "Successfully converted {} to {}",
        args.input.display(),
        output.display()
    );
    ExitCode::SUCCESS
}
