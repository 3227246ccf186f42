use std::io;
use std::process::ExitCode;

use clap::Parser;

use lwjgl3_meta_patch::commands::run_component_filter;
use lwjgl3_meta_patch::init_tracing;

/// Pins the `org.lwjgl3` dependency of a component descriptor read on stdin.
#[derive(Debug, Parser)]
#[command(name = "patch-lwjgl3-component", version, about)]
struct Cli {
    /// Enable debug logging on standard error.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Requests: `version=<version>`.
    #[arg(value_name = "REQUEST")]
    requests: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run_component_filter(&cli.requests, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
