//! Input predicates for target URLs and short codes.
//!
//! Both checks are pure and never touch the network or the store.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Compiled short code shape: 6 to 8 ASCII letters or digits.
pub static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").expect("valid code regex"));

/// Returns `true` if `s` is an absolute URL with a scheme and an authority.
///
/// Relative references (`/path`, `example.com`), authority-less URIs
/// (`mailto:me@example.com`) and strings containing control characters are
/// rejected; the last would not survive as a `Location` header.
///
/// # Examples
///
/// ```
/// use quicklink::utils::validation::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/path?q=1"));
/// assert!(!is_valid_url("not-a-url"));
/// ```
pub fn is_valid_url(s: &str) -> bool {
    if s.chars().any(char::is_control) {
        return false;
    }

    match Url::parse(s) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}

/// Returns `true` if `s` matches `^[A-Za-z0-9]{6,8}$`.
///
/// # Examples
///
/// ```
/// use quicklink::utils::validation::is_valid_code;
///
/// assert!(is_valid_code("abc123"));
/// assert!(!is_valid_code("abc"));
/// ```
pub fn is_valid_code(s: &str) -> bool {
    CODE_REGEX.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        for url in [
            "https://example.com",
            "http://example.com:8080/path",
            "https://sub.example.co.uk/a/b?c=d#frag",
            "ftp://files.example.com/pub",
            "http://127.0.0.1:3000",
        ] {
            assert!(is_valid_url(url), "{url} should be valid");
        }
    }

    #[test]
    fn test_invalid_urls() {
        for url in [
            "",
            "not-a-url",
            "example.com",
            "/relative/path",
            "mailto:someone@example.com",
            "https://",
            "http://exa mple.com",
            "https://example.com/a\nb",
        ] {
            assert!(!is_valid_url(url), "{url:?} should be invalid");
        }
    }

    #[test]
    fn test_valid_codes() {
        for code in ["abc123", "ABCdef1", "a1B2c3D4", "000000", "zzzzzzzz"] {
            assert!(is_valid_code(code), "{code} should be valid");
        }
    }

    #[test]
    fn test_invalid_codes() {
        for code in [
            "",
            "abc12",
            "abcdefghi",
            "abc-123",
            "abc_123",
            "abc 123",
            "abc123\n",
            "ñandú12",
            "ab.c123",
        ] {
            assert!(!is_valid_code(code), "{code:?} should be invalid");
        }
    }
}
