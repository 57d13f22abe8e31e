use anyhow::{anyhow, Result};
use std::fmt;
use url::Url;

/// The URL being waited on. Parsed and validated once at startup;
/// anything that fails validation never reaches the network.
#[derive(Debug, Clone)]
pub struct Target {
    url: Url,
}

impl Target {
    /// Parse a command-line argument into a probe target.
    ///
    /// Only absolute http/https URLs with a host are accepted. Every
    /// rejection renders as an `invalid url` message so the caller can
    /// report it uniformly.
    pub fn parse(raw: &str) -> Result<Target> {
        let url = Url::parse(raw).map_err(|e| anyhow!("invalid url {raw:?}: {e}"))?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(anyhow!("invalid url {raw:?}: unsupported scheme {other:?}"));
            }
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(anyhow!("invalid url {raw:?}: missing host"));
        }

        Ok(Target { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.url.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() -> Result<()> {
        let t = Target::parse("http://localhost:8080/ok")?;
        assert_eq!(t.url().scheme(), "http");
        assert_eq!(t.url().host_str(), Some("localhost"));
        assert_eq!(t.url().port(), Some(8080));
        assert_eq!(t.url().path(), "/ok");

        let t = Target::parse("https://example.com")?;
        assert_eq!(t.url().scheme(), "https");

        Ok(())
    }

    #[test]
    fn test_rejects_non_urls() {
        for raw in ["", "fooshizzle", "not a url", "/just/a/path", "host:8080"] {
            let err = Target::parse(raw).unwrap_err();
            assert!(
                err.to_string().contains("invalid url"),
                "message for {raw:?} was: {err}"
            );
        }
    }

    #[test]
    fn test_rejects_unsupported_schemes() {
        for raw in ["ftp://example.com/file", "file:///etc/hosts", "gopher://x"] {
            let err = Target::parse(raw).unwrap_err();
            assert!(err.to_string().contains("invalid url"));
        }
    }

    #[test]
    fn test_rejects_missing_host() {
        let err = Target::parse("http://").unwrap_err();
        assert!(err.to_string().contains("invalid url"));
    }

    #[test]
    fn test_display_is_the_parsed_url() -> Result<()> {
        let t = Target::parse("http://example.com/health")?;
        assert_eq!(t.to_string(), "http://example.com/health");
        Ok(())
    }
}
