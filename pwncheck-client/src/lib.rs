//! Privacy-preserving password breach checking against the Have I Been Pwned
//! range API.
//!
//! This library implements the k-anonymity query protocol: the password's
//! SHA1 digest is split into a 5-character prefix and a 35-character suffix,
//! and only the prefix is sent to the range endpoint. The endpoint returns
//! every breached digest sharing that prefix, and the suffix is matched
//! locally. The remote service never learns the password, its digest, or
//! even which of the returned candidates (if any) was the one being checked.
//!
//! See <https://www.troyhunt.com/ive-just-launched-pwned-passwords-version-2/>
//! for the protocol's background.
//!
//! # Usage
//!
//! ```no_run
//! use pwncheck_client::{check_password, MatchResult, RangeClient, Secret};
//!
//! let client = RangeClient::default();
//! let secret = Secret::new("hunter2".to_string());
//!
//! match check_password(secret, &client)? {
//!     MatchResult::Found(count) => println!("breached {count} times"),
//!     MatchResult::NotFound => println!("not in the breach corpus"),
//! }
//! # Ok::<(), pwncheck_client::Error>(())
//! ```
//!
//! # Secret hygiene
//!
//! [`check_password`] zeroizes the password buffer and the full digest
//! before the network round trip begins, so by the time any I/O (and its
//! attendant buffering) happens, the only sensitive material still alive is
//! the withheld suffix. This is a best-effort window reduction, not an
//! erasure guarantee.

pub mod client;
pub mod digest;
pub mod error;
pub mod matching;
pub mod secret;

pub use client::{DEFAULT_RANGE_URL, DEFAULT_TIMEOUT, RangeClient, RangeLookup, USER_AGENT};
pub use digest::{SplitDigest, split};
pub use error::Error;
pub use matching::{Candidate, CandidateSet, MatchResult, evaluate};
pub use secret::Secret;

/// Length of the disclosed digest prefix (5 hex characters = 20 bits).
pub const PREFIX_LEN: usize = 5;

/// Length of the withheld digest suffix in hex characters.
pub const SUFFIX_LEN: usize = 35;

/// Checks a secret against the breach corpus behind `lookup`.
///
/// Consumes the secret: its buffer and the full digest are zeroized before
/// any network I/O begins. Only the 5-character prefix leaves the process.
///
/// Returns [`MatchResult::NotFound`] for a clean password; lookup failures
/// surface as [`Error`] without any retry.
pub fn check_password<L: RangeLookup>(secret: Secret, lookup: &L) -> Result<MatchResult, Error> {
    let digest = digest::split(&secret);
    drop(secret);

    let candidates = lookup.query(digest.prefix())?;
    Ok(matching::evaluate(digest.suffix(), &candidates))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;

    /// Lookup double that records whether the secret's buffer had already
    /// been zeroized at the moment the query was issued.
    struct RecordingLookup {
        body: &'static str,
        secret_wiped: Arc<AtomicBool>,
        wiped_before_query: Arc<AtomicBool>,
    }

    impl RangeLookup for RecordingLookup {
        fn query(&self, _prefix: &str) -> Result<CandidateSet, Error> {
            self.wiped_before_query
                .store(self.secret_wiped.load(Ordering::SeqCst), Ordering::SeqCst);
            CandidateSet::parse(self.body)
        }
    }

    // Range response for prefix 5BAA6; the second line is the suffix of
    // "password" with its real occurrence count.
    const RANGE_5BAA6: &str = "0018A45C4D1DEF81644B54AB7F969B88D65:4\n\
                               1E4C9B93F3F0682250B6CF8331B7EE68FD2:3861493\n\
                               1F2B668E8AABEF1C59E9D6BCA0BB1F74671:2\n";

    fn recording_lookup(body: &'static str) -> (RecordingLookup, Arc<AtomicBool>) {
        let wiped_before_query = Arc::new(AtomicBool::new(false));
        let lookup = RecordingLookup {
            body,
            secret_wiped: Arc::new(AtomicBool::new(false)),
            wiped_before_query: Arc::clone(&wiped_before_query),
        };
        (lookup, wiped_before_query)
    }

    #[test]
    fn found_password_reports_occurrence_count() {
        let (lookup, _) = recording_lookup(RANGE_5BAA6);
        let secret = Secret::new("password".to_string());

        let result = check_password(secret, &lookup).unwrap();

        assert_eq!(result, MatchResult::Found(3861493));
    }

    #[test]
    fn unbreached_password_is_not_found() {
        let (lookup, _) = recording_lookup(RANGE_5BAA6);
        // Shares no suffix with the canned response.
        let secret = Secret::new("hAwT?}cuC:r#kW5".to_string());

        let result = check_password(secret, &lookup).unwrap();

        assert_eq!(result, MatchResult::NotFound);
    }

    #[test]
    fn secret_is_wiped_before_the_lookup_runs() {
        let (mut lookup, wiped_before_query) = recording_lookup(RANGE_5BAA6);
        let secret_wiped = Arc::new(AtomicBool::new(false));
        lookup.secret_wiped = Arc::clone(&secret_wiped);

        let secret = Secret::with_wipe_witness("password", secret_wiped);
        check_password(secret, &lookup).unwrap();

        assert!(
            wiped_before_query.load(Ordering::SeqCst),
            "secret must be zeroized before network I/O starts"
        );
    }

    #[test]
    fn lookup_errors_propagate_unchanged() {
        struct FailingLookup;
        impl RangeLookup for FailingLookup {
            fn query(&self, prefix: &str) -> Result<CandidateSet, Error> {
                Err(Error::RemoteStatus { prefix: prefix.to_string(), status: 503 })
            }
        }

        let secret = Secret::new("password".to_string());
        let err = check_password(secret, &FailingLookup).unwrap_err();

        assert!(matches!(
            err,
            Error::RemoteStatus { ref prefix, status: 503 } if prefix == "5BAA6"
        ));
    }
}
