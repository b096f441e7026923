use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use tracing_log::LogTracer;

mod config;
mod delimited;
mod run;
mod status_page;

/// Checks that the status page shows the expected release for each cookie.
///
/// Settings are read from the environment variables listed below, flags
/// override them.
#[derive(Parser)]
struct Args {
    #[command(flatten)]
    config: config::Config,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    LogTracer::init_with_filter(args.verbose.log_level_filter())?;

    let client =
        status_page::Client::new(&args.config).context("error creating status page client")?;
    let outcome = run::run(&args.config, &client).await;

    println!("{}", outcome.status_code());
    Ok(outcome.into())
}
