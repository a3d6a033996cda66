// random_order: convert the size argument to an integer
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use crate::error::FixtureError;
use tracing::warn;

/// How to treat a size argument that is not a clean decimal integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeMode {
    /// read the leading integer and ignore the rest; no digits means 0
    #[default]
    Lenient,
    /// the whole argument must be a non-negative decimal integer
    Strict,
}

// convert size argument text to a permutation length
pub fn parse_size(text: &str, mode: SizeMode) -> Result<usize, FixtureError> {
    match mode {
        SizeMode::Lenient => parse_lenient(text),
        SizeMode::Strict => parse_strict(text),
    }
}

fn too_large(text: &str) -> FixtureError {
    FixtureError::InvalidSize {
        text: text.to_owned(),
        reason: "too large",
    }
}

fn parse_strict(text: &str) -> Result<usize, FixtureError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FixtureError::InvalidSize {
            text: text.to_owned(),
            reason: "not a non-negative decimal integer",
        });
    }
    trimmed.parse::<usize>().map_err(|_| too_large(text))
}

// whitespace skipped before a number, matching C isspace in the "C" locale
fn is_leading_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

// leading whitespace, optional sign, digits with single underscores between them
fn parse_lenient(text: &str) -> Result<usize, FixtureError> {
    let rest = text.trim_start_matches(is_leading_space);
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    // None once the digits no longer fit
    let mut value: Option<usize> = Some(0);
    let mut digits = 0;
    let mut consumed = 0;
    let bytes = rest.as_bytes();
    while consumed < bytes.len() {
        let b = bytes[consumed];
        if b.is_ascii_digit() {
            value = value
                .and_then(|v| v.checked_mul(10))
                .and_then(|v| v.checked_add(usize::from(b - b'0')));
            digits += 1;
        } else if b == b'_'
            && digits > 0
            && bytes.get(consumed + 1).is_some_and(u8::is_ascii_digit)
        {
            // separator, as in "1_000"
        } else {
            break;
        }
        consumed += 1;
    }

    if consumed < bytes.len() || digits == 0 {
        warn!(argument = text, size = ?value, "ignoring non-numeric size text");
    }

    // an empty range 1..N for negative N, however large
    if negative {
        return Ok(0);
    }
    value.ok_or_else(|| too_large(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_reads_plain_integers() {
        assert_eq!(parse_size("3", SizeMode::Lenient), Ok(3));
        assert_eq!(parse_size("0", SizeMode::Lenient), Ok(0));
        assert_eq!(parse_size("  42", SizeMode::Lenient), Ok(42));
        assert_eq!(parse_size("+7", SizeMode::Lenient), Ok(7));
    }

    #[test]
    fn lenient_turns_garbage_into_zero() {
        assert_eq!(parse_size("abc", SizeMode::Lenient), Ok(0));
        assert_eq!(parse_size("", SizeMode::Lenient), Ok(0));
        assert_eq!(parse_size("-", SizeMode::Lenient), Ok(0));
    }

    #[test]
    fn lenient_keeps_leading_digits() {
        assert_eq!(parse_size("12abc", SizeMode::Lenient), Ok(12));
        assert_eq!(parse_size("5 6", SizeMode::Lenient), Ok(5));
        assert_eq!(parse_size("1_000", SizeMode::Lenient), Ok(1000));
        assert_eq!(parse_size("1__0", SizeMode::Lenient), Ok(1));
        assert_eq!(parse_size("2_", SizeMode::Lenient), Ok(2));
    }

    #[test]
    fn lenient_clamps_negative_to_empty() {
        assert_eq!(parse_size("-5", SizeMode::Lenient), Ok(0));
        assert_eq!(parse_size("-1a", SizeMode::Lenient), Ok(0));
        assert_eq!(
            parse_size("-99999999999999999999999", SizeMode::Lenient),
            Ok(0)
        );
    }

    #[test]
    fn lenient_skips_only_ascii_whitespace() {
        assert_eq!(parse_size(" \t\n\x0b\x0c\r8", SizeMode::Lenient), Ok(8));
        assert_eq!(parse_size("\u{3000}5", SizeMode::Lenient), Ok(0));
        assert_eq!(parse_size("\u{a0}5", SizeMode::Lenient), Ok(0));
    }

    #[test]
    fn strict_rejects_non_numeric() {
        assert_eq!(parse_size(" 9 ", SizeMode::Strict), Ok(9));
        for text in ["abc", "12abc", "-5", "", "1_000"] {
            assert!(
                matches!(
                    parse_size(text, SizeMode::Strict),
                    Err(FixtureError::InvalidSize { .. })
                ),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn overflow_is_rejected_in_both_modes() {
        let huge = "99999999999999999999999999999999";
        assert!(parse_size(huge, SizeMode::Lenient).is_err());
        assert!(parse_size(huge, SizeMode::Strict).is_err());
    }
}
