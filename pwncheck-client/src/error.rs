#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced an HTTP response: DNS failure, connection
    /// refused, TLS failure, or timeout.
    #[error("range request failed: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// The range API answered with a non-2xx status. Surfaced verbatim;
    /// retrying is the caller's decision.
    #[error("range API returned HTTP {status} for prefix {prefix}")]
    RemoteStatus { prefix: String, status: u16 },

    /// A response line violated the `SUFFIX:COUNT` record format. The whole
    /// response is rejected rather than partially parsed, since this
    /// indicates a contract change on the remote side.
    #[error("malformed range response at line {line}: {reason}")]
    Protocol { line: usize, reason: String },
}
