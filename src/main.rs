use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod probe;
mod target;

use cli::Cli;
use probe::Prober;
use target::Target;

#[tokio::main]
async fn main() {
    // Silent unless RUST_LOG is set; the contract is empty stdout/stderr
    // on every path except an invalid argument.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("block-until-url: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let raw = cli.url.ok_or_else(|| anyhow!("invalid url: missing <URL> argument"))?;
    let target = Target::parse(&raw)?;

    let prober = Prober::new(cli.request_timeout)?;
    let status = prober.wait_until_up(&target, cli.interval).await;
    tracing::debug!("{target} is up ({status})");

    Ok(())
}
