use crate::SUFFIX_LEN;
use crate::error::Error;

/// One `SUFFIX:COUNT` record returned for a queried prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    suffix: [u8; SUFFIX_LEN],
    count: u64,
}

impl Candidate {
    /// The 35-character uppercase-hex suffix field.
    pub fn suffix(&self) -> &str {
        // Validated as ASCII hex by `CandidateSet::parse`.
        std::str::from_utf8(&self.suffix).unwrap()
    }

    /// Occurrence count of this digest in the breach corpus.
    pub fn count(&self) -> u64 {
        self.count
    }
}

/// Every breach-corpus digest sharing one 5-character prefix, in response
/// order. Built per query and discarded after evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateSet {
    entries: Vec<Candidate>,
}

impl CandidateSet {
    /// Parses a range-API response body, one `SUFFIX:COUNT` record per line.
    ///
    /// Fail-closed: the first malformed line rejects the whole body with
    /// [`Error::Protocol`]. CRLF and LF endings are both accepted, and blank
    /// lines are skipped.
    pub fn parse(body: &str) -> Result<Self, Error> {
        let mut entries = Vec::new();

        for (idx, line) in body.lines().enumerate() {
            if line.is_empty() {
                continue;
            }

            let Some((suffix, count)) = line.split_once(':') else {
                return Err(Error::Protocol {
                    line: idx + 1,
                    reason: "missing ':' separator".to_string(),
                });
            };

            if suffix.len() != SUFFIX_LEN || !suffix.bytes().all(is_upper_hex) {
                return Err(Error::Protocol {
                    line: idx + 1,
                    reason: format!("suffix field is not {SUFFIX_LEN} uppercase hex characters"),
                });
            }

            if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::Protocol {
                    line: idx + 1,
                    reason: "count field is not a decimal integer".to_string(),
                });
            }
            let count: u64 = count.parse().map_err(|_| Error::Protocol {
                line: idx + 1,
                reason: "count field overflows u64".to_string(),
            })?;

            let mut entry = Candidate { suffix: [0u8; SUFFIX_LEN], count };
            entry.suffix.copy_from_slice(suffix.as_bytes());
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.entries.iter()
    }
}

/// Outcome of one breach check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// The digest appears in the breach corpus with this occurrence count.
    Found(u64),
    /// The digest is not in the corpus slice for its prefix.
    NotFound,
}

impl MatchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, MatchResult::Found(_))
    }
}

/// Scans `candidates` for an exact match on the withheld suffix and returns
/// the matching record's count.
///
/// Equality is on the parsed suffix field, both sides uppercase hex. A
/// well-formed range response never repeats a suffix, but if one did, the
/// last matching record's count wins.
pub fn evaluate(suffix: &str, candidates: &CandidateSet) -> MatchResult {
    let mut result = MatchResult::NotFound;
    for candidate in candidates.iter() {
        if candidate.suffix() == suffix {
            result = MatchResult::Found(candidate.count);
        }
    }
    result
}

fn is_upper_hex(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'A'..=b'F')
}
