use std::borrow::Cow;
use std::fmt;

use super::EscapePolicy;

#[derive(Debug, Clone, PartialEq)]
pub(super) enum EscapeError {
    Unknown { sequence: char, offset: usize },
    Trailing { offset: usize },
    BadUnicode { digits: String, offset: usize },
}

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EscapeError::Unknown { sequence, offset } =>
                write!(f, "Unknown escape '\\{}' at offset {}", sequence, offset),
            EscapeError::Trailing { offset } =>
                write!(f, "Dangling backslash at offset {}", offset),
            EscapeError::BadUnicode { digits, offset } =>
                write!(f, "Invalid unicode escape '\\u{}' at offset {}", digits, offset),
        }
    }
}

/// Rewrite backslash escapes in one left-to-right pass.
///
/// Text produced by a substitution is never rescanned, so `\\n` becomes a
/// backslash followed by `n`.
pub(super) fn unescape(raw: &str, policy: EscapePolicy) -> Result<Cow<'_, str>, EscapeError> {
    if !raw.contains('\\') {
        return Ok(Cow::Borrowed(raw));
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.char_indices();

    while let Some((offset, ch)) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        let Some((_, next)) = chars.next() else {
            match policy {
                EscapePolicy::Strict => return Err(EscapeError::Trailing { offset }),
                EscapePolicy::Lenient => {
                    out.push('\\');
                    break;
                }
            }
        };

        match next {
            'b' => out.push('\u{0008}'),
            't' => out.push('\t'),
            'n' => out.push('\n'),
            'f' => out.push('\u{000C}'),
            'r' => out.push('\r'),
            '"' => out.push('"'),
            '/' => out.push('/'),
            '\\' => out.push('\\'),
            'u' => {
                let digits: String = chars.by_ref().take(4).map(|(_, c)| c).collect();
                out.push(decode_unicode(&digits, offset)?);
            }
            other => match policy {
                EscapePolicy::Strict => {
                    return Err(EscapeError::Unknown { sequence: other, offset });
                }
                EscapePolicy::Lenient => {
                    out.push('\\');
                    out.push(other);
                }
            },
        }
    }

    Ok(Cow::Owned(out))
}

fn decode_unicode(digits: &str, offset: usize) -> Result<char, EscapeError> {
    let bad = || EscapeError::BadUnicode { digits: digits.to_string(), offset };

    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(bad());
    }

    u32::from_str_radix(digits, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(bad)
}
