//! Email address parsing for a single address specification.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::AddressError;

/// `Display Name <user@domain>`; the name may be absent (` <user@domain>`).
static NAMED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A(.*\S)?\s+<(.+@.+)>\z").expect("valid named address regex"));

/// `user@domain` or `<user@domain>`.
static BARE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A<?(.+@[^>]+)>?\z").expect("valid bare address regex"));

/// A parsed email address.
///
/// # Examples
/// - `"Juan García <juan@ejemplo.com>"` → `personal_name = "Juan García"`, `address = "juan@ejemplo.com"`
/// - `"user@example.com"` → `personal_name = ""`, `address = "user@example.com"`
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    /// Human-readable display name (may be empty).
    pub personal_name: String,
    /// The bare email address (`user@domain`). Never empty once parsed.
    pub address: String,
}

impl EmailAddress {
    /// Parse one address candidate, as produced by
    /// [`split_address_list`](crate::parser::address_list::split_address_list).
    ///
    /// Supported formats, tried in this order:
    /// - `"Display Name <user@domain.com>"`
    /// - `"<user@domain.com>"`
    /// - `"user@domain.com"`
    ///
    /// Quotes are expected to have been removed by the splitter already.
    pub fn parse(candidate: &str) -> Result<Self, AddressError> {
        if let Some(caps) = NAMED_RE.captures(candidate) {
            return Ok(Self {
                personal_name: caps.get(1).map_or("", |m| m.as_str()).to_string(),
                address: caps[2].to_string(),
            });
        }

        if let Some(caps) = BARE_RE.captures(candidate) {
            return Ok(Self {
                personal_name: String::new(),
                address: caps[1].to_string(),
            });
        }

        Err(AddressError::NoMatch {
            raw_input: candidate.to_string(),
        })
    }

    /// Format for display: `"Display Name <address>"` or just `"address"`.
    ///
    /// A name containing a comma is double-quoted so that the output can be
    /// fed back into a list parser.
    pub fn display(&self) -> String {
        if self.personal_name.is_empty() {
            self.address.clone()
        } else if self.personal_name.contains(',') {
            format!("\"{}\" <{}>", self.personal_name, self.address)
        } else {
            format!("{} <{}>", self.personal_name, self.address)
        }
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl std::str::FromStr for EmailAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_address() {
        let addr = EmailAddress::parse("user@example.com").unwrap();
        assert_eq!(addr.address, "user@example.com");
        assert_eq!(addr.personal_name, "");
    }

    #[test]
    fn test_parse_angle_address() {
        let addr = EmailAddress::parse("<user@example.com>").unwrap();
        assert_eq!(addr.address, "user@example.com");
        assert_eq!(addr.personal_name, "");
    }

    #[test]
    fn test_parse_angle_address_with_leading_space() {
        let addr = EmailAddress::parse(" <user@example.com>").unwrap();
        assert_eq!(addr.address, "user@example.com");
        assert_eq!(addr.personal_name, "");
    }

    #[test]
    fn test_parse_name_and_address() {
        let addr = EmailAddress::parse("User One <user1@example.com>").unwrap();
        assert_eq!(addr.address, "user1@example.com");
        assert_eq!(addr.personal_name, "User One");
    }

    #[test]
    fn test_named_form_wins_over_bare_form() {
        // Also a valid bare match (`Me <me` + `@x.com>`), must not be taken as one.
        let addr = EmailAddress::parse("Me <me@x.com>").unwrap();
        assert_eq!(addr.personal_name, "Me");
        assert_eq!(addr.address, "me@x.com");
    }

    #[test]
    fn test_name_with_commas() {
        let addr = EmailAddress::parse("Me, of, course. <me@domain.tld>").unwrap();
        assert_eq!(addr.personal_name, "Me, of, course.");
        assert_eq!(addr.address, "me@domain.tld");
    }

    #[test]
    fn test_extra_spaces_before_bracket_are_not_part_of_name() {
        let addr = EmailAddress::parse("Some Body   <sb@example.com>").unwrap();
        assert_eq!(addr.personal_name, "Some Body");
    }

    #[test]
    fn test_parse_without_at_fails() {
        let err = EmailAddress::parse("not-an-email").unwrap_err();
        assert_eq!(
            err,
            AddressError::NoMatch {
                raw_input: "not-an-email".to_string()
            }
        );
    }

    #[test]
    fn test_parse_empty_fails() {
        assert!(EmailAddress::parse("").is_err());
    }

    #[test]
    fn test_parse_group_syntax_fails() {
        let err = EmailAddress::parse("undisclosed-recipients:;").unwrap_err();
        assert_eq!(err.raw_input(), "undisclosed-recipients:;");
    }

    #[test]
    fn test_from_str() {
        let addr: EmailAddress = "Alice <alice@example.com>".parse().unwrap();
        assert_eq!(addr.personal_name, "Alice");
    }

    #[test]
    fn test_display_with_name() {
        let addr = EmailAddress {
            personal_name: "Alice".to_string(),
            address: "alice@example.com".to_string(),
        };
        assert_eq!(addr.display(), "Alice <alice@example.com>");
        assert_eq!(addr.to_string(), "Alice <alice@example.com>");
    }

    #[test]
    fn test_display_quotes_name_with_comma() {
        let addr = EmailAddress {
            personal_name: "Doe, Jane".to_string(),
            address: "jane@example.com".to_string(),
        };
        assert_eq!(addr.display(), "\"Doe, Jane\" <jane@example.com>");
    }

    #[test]
    fn test_display_without_name() {
        let addr = EmailAddress {
            personal_name: String::new(),
            address: "alice@example.com".to_string(),
        };
        assert_eq!(addr.display(), "alice@example.com");
    }
}
