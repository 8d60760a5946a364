//! Reads emitted values back into [`Rational`]s.
//!
//! The accepted grammar is exactly what [emit](crate::emit) produces for values:
//!
//! ```text
//! value   ::= frac | slashed | int
//! frac    ::= "\frac{" int "}{" int "}"
//! slashed ::= int "/" int
//! int     ::= "-"? [0-9]+
//! ```
//!
//! Surrounding whitespace is ignored.

use crate::errors::ParseError;
use crate::math::Rational;

/// Parses a value emitted in either [emit format](crate::EmitFormat).
pub fn parse_value(text: &str) -> Result<Rational, ParseError> {
    let text = text.trim();
    let malformed = || ParseError::MalformedValueText(text.to_owned());

    if let Some(args) = text.strip_prefix("\\frac") {
        let (numer, rest) = parse_group(args).ok_or_else(malformed)?;
        let (denom, rest) = parse_group(rest).ok_or_else(malformed)?;
        if !rest.is_empty() {
            return Err(malformed());
        }
        return Ok(Rational::new(numer, denom)?);
    }

    if let Some((numer, denom)) = text.split_once('/') {
        let numer = parse_int(numer).ok_or_else(malformed)?;
        let denom = parse_int(denom).ok_or_else(malformed)?;
        return Ok(Rational::new(numer, denom)?);
    }

    parse_int(text).map(Rational::from).ok_or_else(malformed)
}

/// Parses a braced integer like `{-3}`, returning it and the remaining input.
fn parse_group(s: &str) -> Option<(i64, &str)> {
    let s = s.strip_prefix('{')?;
    let end = s.find('}')?;
    Some((parse_int(&s[..end])?, &s[end + 1..]))
}

/// Parses `-?[0-9]+`. Unlike `str::parse`, a leading `+` is rejected.
fn parse_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
