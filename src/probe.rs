use crate::target::Target;
use anyhow::Result;
use reqwest::{redirect, Client, StatusCode};
use std::time::Duration;
use tokio::time::sleep;
use url::Url;

/// Issues lightweight reachability probes against a [`Target`].
pub struct Prober {
    client: Client,
}

impl Prober {
    /// Build a probe client with a bounded per-attempt timeout.
    ///
    /// Redirects are disabled: a 3xx status line is already a response, so
    /// the first status observed ends the wait instead of the redirect chain.
    pub fn new(request_timeout: Duration) -> Result<Prober> {
        let client = Client::builder()
            .timeout(request_timeout)
            .redirect(redirect::Policy::none())
            .build()?;
        Ok(Prober { client })
    }

    /// One probe attempt. HEAD first; if that fails at the transport level,
    /// try a single GET before giving up on the attempt (some servers
    /// mishandle HEAD). The response body is never read.
    async fn probe(&self, url: &Url) -> reqwest::Result<StatusCode> {
        match self.client.head(url.clone()).send().await {
            Ok(resp) => Ok(resp.status()),
            Err(head_err) => {
                tracing::debug!("HEAD probe failed: {head_err}");
                let resp = self.client.get(url.clone()).send().await?;
                Ok(resp.status())
            }
        }
    }

    /// Block until the target answers with any HTTP response, retrying
    /// failed attempts forever at a fixed interval.
    ///
    /// There is deliberately no retry cap and no backoff growth; the only
    /// exits are a response or external process termination. Transient
    /// failures are traced at debug level and never surfaced.
    pub async fn wait_until_up(&self, target: &Target, interval: Duration) -> StatusCode {
        let mut attempt: u64 = 0;
        loop {
            attempt += 1;
            match self.probe(target.url()).await {
                Ok(status) => {
                    tracing::debug!("{target} answered {status} on attempt {attempt}");
                    return status;
                }
                Err(err) => {
                    tracing::debug!("attempt {attempt} against {target} failed: {err}");
                    sleep(interval).await;
                }
            }
        }
    }
}
