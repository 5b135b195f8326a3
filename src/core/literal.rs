//! Decoding of double-quoted string literal tokens.
//!
//! Tokens are decoded with a fixed escape table rather than by evaluating them
//! as code, so the result only depends on the characters in the token:
//!
//! | Escape     | Value                                         |
//! |------------|-----------------------------------------------|
//! | `\n`       | line feed                                     |
//! | `\r`       | carriage return                               |
//! | `\t`       | tab                                           |
//! | `\\`       | backslash                                     |
//! | `\0`       | NUL                                           |
//! | `\'`       | single quote                                  |
//! | `\"`       | double quote                                  |
//! | `\xNN`     | ASCII character, two hex digits, at most `7F` |
//! | `\u{NNNN}` | Unicode scalar value, 1 to 6 hex digits       |

use std::str::CharIndices;

use thiserror::Error;

/// Why a quoted token could not be decoded.
///
/// Offsets are byte offsets into the token, quotes included.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("string literal must be wrapped in double quotes")]
    MissingQuotes,
    #[error("unescaped double quote at offset {0}")]
    UnescapedQuote(usize),
    #[error("unterminated escape sequence at offset {0}")]
    UnterminatedEscape(usize),
    #[error("unknown character escape `\\{escape}` at offset {offset}")]
    UnknownEscape { escape: char, offset: usize },
    #[error("invalid `\\x` escape at offset {0}: expected two hex digits up to 7F")]
    InvalidHexEscape(usize),
    #[error("invalid `\\u{{...}}` escape at offset {0}")]
    InvalidUnicodeEscape(usize),
}

/// Decode a quoted token such as `"she said \"hi\""` into its string value.
pub fn decode(token: &str) -> Result<String, LiteralError> {
    let body = token
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(LiteralError::MissingQuotes)?;

    let mut out = String::with_capacity(body.len());
    let mut chars = body.char_indices();

    while let Some((i, c)) = chars.next() {
        // +1 for the opening quote
        let offset = i + 1;
        match c {
            '"' => return Err(LiteralError::UnescapedQuote(offset)),
            '\\' => out.push(decode_escape(&mut chars, offset)?),
            _ => out.push(c),
        }
    }

    Ok(out)
}

fn decode_escape(chars: &mut CharIndices<'_>, offset: usize) -> Result<char, LiteralError> {
    let Some((_, escape)) = chars.next() else {
        return Err(LiteralError::UnterminatedEscape(offset));
    };

    match escape {
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        't' => Ok('\t'),
        '\\' => Ok('\\'),
        '0' => Ok('\0'),
        '\'' => Ok('\''),
        '"' => Ok('"'),
        'x' => decode_hex(chars, offset),
        'u' => decode_unicode(chars, offset),
        _ => Err(LiteralError::UnknownEscape { escape, offset }),
    }
}

fn decode_hex(chars: &mut CharIndices<'_>, offset: usize) -> Result<char, LiteralError> {
    let mut value = 0u32;
    for _ in 0..2 {
        let digit = chars
            .next()
            .and_then(|(_, c)| c.to_digit(16))
            .ok_or(LiteralError::InvalidHexEscape(offset))?;
        value = value * 16 + digit;
    }

    if value > 0x7F {
        return Err(LiteralError::InvalidHexEscape(offset));
    }
    char::from_u32(value).ok_or(LiteralError::InvalidHexEscape(offset))
}

fn decode_unicode(chars: &mut CharIndices<'_>, offset: usize) -> Result<char, LiteralError> {
    let invalid = LiteralError::InvalidUnicodeEscape(offset);

    if !matches!(chars.next(), Some((_, '{'))) {
        return Err(invalid);
    }

    let mut value = 0u32;
    let mut digits = 0;
    loop {
        match chars.next() {
            Some((_, '}')) => break,
            // Underscores are allowed between digits, never first
            Some((_, '_')) if digits > 0 => {}
            Some((_, c)) => {
                let digit = c.to_digit(16).ok_or_else(|| invalid.clone())?;
                digits += 1;
                if digits > 6 {
                    return Err(invalid);
                }
                value = value * 16 + digit;
            }
            None => return Err(invalid),
        }
    }

    if digits == 0 {
        return Err(invalid);
    }
    // Rejects surrogates and values above 10FFFF
    char::from_u32(value).ok_or(invalid)
}
