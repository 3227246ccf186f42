use std::io;
use std::process::ExitCode;

use clap::Parser;

use lwjgl3_meta_patch::commands::run_config_filter;
use lwjgl3_meta_patch::core::downloader::HttpFetcher;
use lwjgl3_meta_patch::{init_tracing, PatchResult};

/// Reads an LWJGL3 component descriptor on stdin, writes the patched one to stdout.
#[derive(Debug, Parser)]
#[command(name = "patch-lwjgl3-config", version, about)]
struct Cli {
    /// Enable debug logging on standard error.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Requests: `urls`, `natives=<platform>`, `url-prefix=<url>`,
    /// `linux-arch=<arch>`, `version=<version>`, `build-type=<type>`.
    #[arg(value_name = "REQUEST")]
    requests: Vec<String>,
}

async fn run(cli: Cli) -> PatchResult<()> {
    let fetcher = HttpFetcher::new()?;
    run_config_filter(&cli.requests, io::stdin().lock(), io::stdout().lock(), &fetcher).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
