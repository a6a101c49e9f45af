use std::time::Duration;

use tracing::debug;

use crate::PREFIX_LEN;
use crate::error::Error;
use crate::matching::CandidateSet;

/// Base URL of the public Pwned Passwords range API.
pub const DEFAULT_RANGE_URL: &str = "https://api.pwnedpasswords.com/range";

/// Sent with every request; the range API rejects empty user agents.
pub const USER_AGENT: &str = concat!("pwncheck/", env!("CARGO_PKG_VERSION"));

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A prefix-indexed lookup over a breach corpus.
///
/// [`RangeClient`] is the implementation that talks to a real corpus; the
/// trait exists so checks can run against test doubles.
pub trait RangeLookup {
    /// Returns every known breached digest sharing `prefix`.
    fn query(&self, prefix: &str) -> Result<CandidateSet, Error>;
}

/// Blocking HTTP client for the k-anonymity range endpoint.
///
/// Each call performs a fresh round trip; the protocol's privacy rests on
/// prefix-level anonymity, not on minimizing requests, so nothing is cached
/// and nothing is retried.
pub struct RangeClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl RangeClient {
    /// Creates a client against the public range API with the given timeout.
    pub fn new(timeout: Duration) -> Self {
        Self::with_base_url(DEFAULT_RANGE_URL, timeout)
    }

    /// Creates a client against a custom range endpoint, e.g. a self-hosted
    /// mirror of the corpus.
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::blocking::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    fn fetch_range(&self, prefix: &str) -> Result<String, Error> {
        debug_assert_eq!(prefix.len(), PREFIX_LEN);

        let url = format!("{}/{}", self.base_url, prefix);
        let response = self.client.get(&url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::RemoteStatus {
                prefix: prefix.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text()?)
    }
}

impl RangeLookup for RangeClient {
    fn query(&self, prefix: &str) -> Result<CandidateSet, Error> {
        let body = self.fetch_range(prefix)?;
        let candidates = CandidateSet::parse(&body)?;
        debug!(prefix, candidates = candidates.len(), "range query complete");
        Ok(candidates)
    }
}

impl Default for RangeClient {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}
