use clap::Parser;
use std::time::Duration;

/// Block until a URL starts answering.
///
/// Repeatedly probes the target and exits 0 on the first HTTP response,
/// whatever its status code. Runs until then or until killed.
#[derive(Debug, Parser)]
#[command(name = "block-until-url", version)]
pub struct Cli {
    /// Absolute http:// or https:// URL to wait on.
    ///
    /// Optional at the parser level: a missing argument is reported as an
    /// invalid url (exit 1), not as a usage error.
    pub url: Option<String>,

    /// Fixed delay between failed attempts (no backoff growth).
    #[arg(long, value_parser = humantime::parse_duration, default_value = "500ms")]
    pub interval: Duration,

    /// Network timeout for each individual probe request.
    #[arg(long, value_parser = humantime::parse_duration, default_value = "5s")]
    pub request_timeout: Duration,
}
