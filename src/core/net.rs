// src/core/net.rs
// Blocking HTTP GET for documentation pages.

use std::time::Duration;

use rand::seq::SliceRandom;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use reqwest::redirect;
use thiserror::Error;

use crate::config::consts::{DOC_HOST, HTTP_TIMEOUT_SECS, MAX_REDIRECT_HOPS, USER_AGENTS};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
}

impl FetchError {
    /// URL of the page that failed, when there was one.
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchError::Client(_) => None,
            FetchError::Transport { url, .. } | FetchError::Status { url, .. } => Some(url),
        }
    }
}

/// Anything that can turn a URL into a page body.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build the client once per run.
    ///
    /// With `same_origin_only`, redirects are followed only while they stay on the
    /// documentation host, and at most one hop.
    pub fn new(same_origin_only: bool) -> Result<Self, FetchError> {
        let policy = if same_origin_only {
            redirect::Policy::custom(|attempt| {
                if follow_redirect(attempt.url().host_str(), attempt.previous().len()) {
                    attempt.follow()
                } else {
                    attempt.stop()
                }
            })
        } else {
            redirect::Policy::default()
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .redirect(policy)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        let agent = random_user_agent();
        logd!("GET {} (ua: {})", url, agent);

        let resp = self
            .client
            .get(url)
            .header(USER_AGENT, agent)
            .send()
            .map_err(|source| FetchError::Transport { url: s!(url), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }
        resp.text().map_err(|source| FetchError::Transport { url: s!(url), source })
    }
}

/// Same-origin redirect rule. `hops` counts the URLs already visited,
/// so the first redirect arrives with `hops == 1`.
fn follow_redirect(host: Option<&str>, hops: usize) -> bool {
    host == Some(DOC_HOST) && hops <= MAX_REDIRECT_HOPS
}

pub fn random_user_agent() -> &'static str {
    USER_AGENTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("Mozilla/5.0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_comes_from_pool() {
        for _ in 0..20 {
            assert!(USER_AGENTS.contains(&random_user_agent()));
        }
    }

    #[test]
    fn first_redirect_on_doc_host_is_followed() {
        assert!(follow_redirect(Some(DOC_HOST), 1));
    }

    #[test]
    fn second_redirect_is_stopped() {
        assert!(!follow_redirect(Some(DOC_HOST), 2));
    }

    #[test]
    fn redirect_off_doc_host_is_stopped() {
        assert!(!follow_redirect(Some("example.com"), 1));
        assert!(!follow_redirect(None, 1));
    }

    #[test]
    fn status_error_names_url() {
        let err = FetchError::Status { url: s!("https://example.test/x"), status: 404 };
        assert_eq!(err.url(), Some("https://example.test/x"));
        assert_eq!(err.to_string(), "HTTP 404 from https://example.test/x");
    }
}
