//! Label normalization.

/// Turn a free-form label into lowercase words joined by `sep`.
///
/// Word boundaries are runs of non-alphanumeric characters and
/// lowercase-to-uppercase transitions (`UpperCase` → `upper-case`).
///
/// ```
/// use mailbits::text::parameterize;
///
/// assert_eq!(parameterize("a label with UpperCase", '-'), "a-label-with-upper-case");
/// ```
pub fn parameterize(input: &str, sep: char) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev: Option<char> = None;
    let mut pending_sep = false;

    for ch in input.chars() {
        if !ch.is_alphanumeric() {
            pending_sep = true;
            prev = None;
            continue;
        }
        let camel_break = ch.is_uppercase()
            && prev.is_some_and(|p| p.is_lowercase() || p.is_numeric());
        if (pending_sep || camel_break) && !out.is_empty() {
            out.push(sep);
        }
        pending_sep = false;
        out.extend(ch.to_lowercase());
        prev = Some(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterize() {
        let cases = [
            ("a small label", "a-small-label"),
            ("a label with UpperCase", "a-label-with-upper-case"),
            ("downCaseUp_underscore", "down-case-up-underscore"),
            ("multiple  Spaces", "multiple-spaces"),
        ];
        for (input, expected) in cases {
            assert_eq!(parameterize(input, '-'), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_no_leading_or_trailing_separator() {
        assert_eq!(parameterize("  --Hello World!! ", '_'), "hello_world");
    }

    #[test]
    fn test_acronym_stays_together() {
        assert_eq!(parameterize("HTTPServer", '-'), "httpserver");
    }

    #[test]
    fn test_empty() {
        assert_eq!(parameterize("", '-'), "");
    }
}
