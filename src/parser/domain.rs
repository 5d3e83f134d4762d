//! Domain extraction from a bare email address.

use crate::error::DomainError;

/// Return the last `n` labels of the domain part of `address`.
///
/// Everything after the first `@` is the domain. When `n` exceeds the
/// number of labels, the whole domain is returned.
///
/// ```
/// use mailbits::parser::domain::domain_from_address;
///
/// assert_eq!(domain_from_address("me@sub.domain.tld", 2).unwrap(), "domain.tld");
/// ```
pub fn domain_from_address(address: &str, n: i64) -> Result<String, DomainError> {
    let (_, domain) = address
        .split_once('@')
        .ok_or_else(|| DomainError::NotAnAddress(address.to_string()))?;
    if n < 1 {
        return Err(DomainError::InvalidCount(n));
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let keep = usize::try_from(n).unwrap_or(usize::MAX).min(labels.len());
    Ok(labels[labels.len() - keep..].join("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_labels() {
        assert_eq!(domain_from_address("me@domain.tld", 2).unwrap(), "domain.tld");
        assert_eq!(domain_from_address("yes.me@domain.tld", 2).unwrap(), "domain.tld");
    }

    #[test]
    fn test_subdomain_trimmed() {
        assert_eq!(domain_from_address("me@sub.domain.tld", 2).unwrap(), "domain.tld");
        assert_eq!(
            domain_from_address("me@sub.domain.tld", 3).unwrap(),
            "sub.domain.tld"
        );
    }

    #[test]
    fn test_count_larger_than_labels() {
        assert_eq!(domain_from_address("me@domain.tld", 10).unwrap(), "domain.tld");
    }

    #[test]
    fn test_not_an_address() {
        assert_eq!(
            domain_from_address("not-an-email", 1),
            Err(DomainError::NotAnAddress("not-an-email".to_string()))
        );
    }

    #[test]
    fn test_invalid_count() {
        assert_eq!(
            domain_from_address("me@domain.tld", -1),
            Err(DomainError::InvalidCount(-1))
        );
        assert!(domain_from_address("me@domain.tld", 0).is_err());
    }
}
