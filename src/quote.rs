// src/quote.rs

//! Decoding of double-quoted string literals
//!
//! Lock file field values are written as double-quoted literals with
//! backslash escapes. [`unquote`] decodes the standard escape forms and
//! rejects malformed input; callers attach file/line context to failures.

use thiserror::Error;

/// Errors from decoding a double-quoted literal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    /// Missing quote delimiters, or a backslash with nothing after it
    #[error("unterminated literal")]
    Unterminated,

    /// An unescaped `"` closed the literal before the end of the value
    #[error("trailing characters after closing quote")]
    Trailing,

    /// A raw newline inside the quotes
    #[error("newline in literal")]
    RawNewline,

    /// An unknown escape character
    #[error("invalid escape '\\{0}'")]
    InvalidEscape(char),

    /// An escape sequence cut short by the end of the literal
    #[error("truncated escape sequence")]
    TruncatedEscape,

    /// A numeric escape outside the valid Unicode scalar range
    #[error("invalid code point {0:#x} in escape")]
    InvalidCodepoint(u32),
}

/// Decode a double-quoted string literal, surrounding quotes included
///
/// Supported escapes: `\a \b \f \n \r \t \v \\ \' \"`, two-digit hex
/// (`\x41`), three-digit octal (`\101`), and the four and eight digit
/// Unicode forms (`\u0041`, `\U00000041`).
pub fn unquote(lit: &str) -> Result<String, QuoteError> {
    let inner = lit
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or(QuoteError::Unterminated)?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return Err(QuoteError::Trailing),
            '\n' => return Err(QuoteError::RawNewline),
            '\\' => out.push(escape(&mut chars)?),
            _ => out.push(c),
        }
    }
    Ok(out)
}

/// Decode one escape sequence; the leading backslash is already consumed
fn escape(chars: &mut std::str::Chars<'_>) -> Result<char, QuoteError> {
    // A backslash as the last character means it escaped the quote we
    // treated as the terminator, so the literal never actually closed
    let c = chars.next().ok_or(QuoteError::Unterminated)?;
    match c {
        'a' => Ok('\x07'),
        'b' => Ok('\x08'),
        'f' => Ok('\x0c'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        't' => Ok('\t'),
        'v' => Ok('\x0b'),
        '\\' => Ok('\\'),
        '\'' => Ok('\''),
        '"' => Ok('"'),
        'x' => hex_escape(chars, 2),
        'u' => hex_escape(chars, 4),
        'U' => hex_escape(chars, 8),
        '0'..='7' => {
            // Octal: three digits total, the first already in hand
            let mut value = c as u32 - '0' as u32;
            for _ in 0..2 {
                let d = chars.next().ok_or(QuoteError::TruncatedEscape)?;
                let d = d.to_digit(8).ok_or(QuoteError::InvalidEscape(d))?;
                value = value * 8 + d;
            }
            char::from_u32(value).ok_or(QuoteError::InvalidCodepoint(value))
        }
        other => Err(QuoteError::InvalidEscape(other)),
    }
}

/// Read a fixed number of hex digits and convert them to a character
fn hex_escape(chars: &mut std::str::Chars<'_>, digits: u32) -> Result<char, QuoteError> {
    let mut value: u32 = 0;
    for _ in 0..digits {
        let d = chars.next().ok_or(QuoteError::TruncatedEscape)?;
        let d = d.to_digit(16).ok_or(QuoteError::InvalidEscape(d))?;
        value = value * 16 + d;
    }
    char::from_u32(value).ok_or(QuoteError::InvalidCodepoint(value))
}
