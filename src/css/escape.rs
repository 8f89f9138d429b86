//! CSS identifier and string serialization.
//!
//! # Responsibilities
//! - Turn arbitrary text into a token usable as a CSS identifier
//!   (custom property names, e.g. `--<name>`)
//! - Quote arbitrary text as a CSS string (font-family list values)
//!
//! # Design Decisions
//! - Identifier rules follow the CSSOM "serialize an identifier" algorithm
//! - The two escapers are independent: identifiers are never quoted and
//!   strings never get the digit/hyphen rules

/// Quote character used by [`escape_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quote {
    #[default]
    Single,
    Double,
}

impl Quote {
    fn as_char(self) -> char {
        match self {
            Quote::Single => '\'',
            Quote::Double => '"',
        }
    }
}

/// Backslash, lowercase hex code point, one trailing space.
fn push_code_point(out: &mut String, c: char) {
    out.push_str(&format!("\\{:x} ", c as u32));
}

/// Serialize `input` as a CSS identifier.
///
/// Rules are evaluated per character, first match wins:
/// 1. NUL becomes U+FFFD.
/// 2. Control characters (U+0001..=U+001F, U+007F) are escaped as code points.
/// 3. A leading ASCII digit is escaped as a code point.
/// 4. An ASCII digit in second position after a leading `-` is escaped as a code point.
/// 5. A lone `-` is escaped as a code point.
/// 6. Non-ASCII, `-`, `_` and ASCII alphanumerics pass through.
/// 7. Everything else gets a backslash prefix.
pub fn escape_identifier(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '\0' => out.push('\u{FFFD}'),
            '\u{1}'..='\u{1f}' | '\u{7f}' => push_code_point(&mut out, c),
            _ if i == 0 && c.is_ascii_digit() => push_code_point(&mut out, c),
            _ if i == 1 && c.is_ascii_digit() && chars[0] == '-' => push_code_point(&mut out, c),
            '-' if chars.len() == 1 => push_code_point(&mut out, c),
            _ if c as u32 >= 0x80 || c == '-' || c == '_' || c.is_ascii_alphanumeric() => {
                out.push(c)
            }
            _ => {
                out.push('\\');
                out.push(c);
            }
        }
    }

    out
}

/// Serialize `input` as a quoted CSS string using `quote`.
pub fn escape_string(input: &str, quote: Quote) -> String {
    let q = quote.as_char();
    let mut out = String::with_capacity(input.len() + 2);
    out.push(q);

    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\r' | '\n' => push_code_point(&mut out, c),
            _ if c == q => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    out.push(q);
    out
}
