//! Comma-separated address lists (`To:`, `Cc:`-style header values).
//!
//! Splitting is quote-aware: `"Last, First" <a@b.com>, other@c.com` is two
//! addresses, not three. Each candidate is then matched on its own, so one
//! bad entry never hides the others.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::AddressError;
use crate::model::address::EmailAddress;

/// A double quote plus any whitespace right before it.
static QUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s*""#).expect("valid quote regex"));

/// One raw address specification cut out of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// A regular candidate, quotes removed.
    Complete(String),
    /// Text of a quoted span that was still open at the end of the input.
    Unterminated(String),
}

impl Candidate {
    /// The candidate text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Complete(s) | Self::Unterminated(s) => s,
        }
    }

    /// Match this candidate against the supported address forms.
    pub fn parse(&self) -> Result<EmailAddress, AddressError> {
        match self {
            Self::Complete(s) => EmailAddress::parse(s),
            Self::Unterminated(s) => Err(AddressError::UnterminatedQuote {
                raw_input: s.clone(),
            }),
        }
    }
}

/// Split an address list on commas, keeping commas that sit inside a
/// double-quoted display name.
///
/// A piece containing a `"` opens a quoted span, or closes the one already
/// open. Quotes are removed from the returned candidates. Standalone
/// candidates are trimmed; a quoted span is returned exactly as rejoined.
/// Empty input yields a single empty candidate.
pub fn split_address_list(input: &str) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    // Text of the open quoted span; empty when no span is open.
    let mut open = String::new();

    for piece in input.split(',') {
        let quoted = piece.contains('"');
        let piece = strip_quotes(piece);

        if quoted {
            if open.is_empty() {
                open = piece.into_owned();
            } else {
                let head = std::mem::take(&mut open);
                candidates.push(Candidate::Complete(format!("{head},{piece}")));
            }
        } else if !open.is_empty() {
            open.push(',');
            open.push_str(&piece);
        } else {
            candidates.push(Candidate::Complete(piece.trim().to_string()));
        }
    }

    if !open.is_empty() {
        debug!(fragment = %open, "Unterminated quoted span in address list");
        candidates.push(Candidate::Unterminated(open));
    }

    candidates
}

/// Parse an address list into one result per candidate, in input order.
///
/// ```
/// use mailbits::parse_address_list;
///
/// let results = parse_address_list("\"Doe, Jane\" <jane@example.com>, nobody");
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].as_ref().unwrap().personal_name, "Doe, Jane");
/// assert!(results[1].is_err());
/// ```
pub fn parse_address_list(input: &str) -> Vec<Result<EmailAddress, AddressError>> {
    split_address_list(input)
        .iter()
        .map(|candidate| {
            let result = candidate.parse();
            if let Err(ref e) = result {
                debug!(candidate = candidate.as_str(), error = %e, "Rejected address candidate");
            }
            result
        })
        .collect()
}

/// Parse an address list into the successfully parsed addresses and the
/// errors, each kept in input order.
///
/// Failures never suppress successes: callers decide whether a non-empty
/// error list should fail the whole input.
pub fn partition_address_list(input: &str) -> (Vec<EmailAddress>, Vec<AddressError>) {
    let mut addresses = Vec::new();
    let mut errors = Vec::new();
    for result in parse_address_list(input) {
        match result {
            Ok(addr) => addresses.push(addr),
            Err(e) => errors.push(e),
        }
    }
    (addresses, errors)
}

fn strip_quotes(piece: &str) -> Cow<'_, str> {
    QUOTE_RE.replace_all(piece, "")
}
