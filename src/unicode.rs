//! Character classes shared by the constant-case stages.
//!
//! Everything here is either a `const fn` or a compile-time `phf` table, so
//! there is nothing to initialise and nothing to tear down.

use phf::{Set, phf_set};

/// Punctuation and symbols that separate words.
///
/// Note the en-dash (U+2013) next to the ASCII hyphen, and that `_` itself is
/// a member: an existing separator is re-derived, never kept verbatim.
pub static SYMBOLS: Set<char> = phf_set! {
    '-', '!', '"', '\'', '(', ')', ',', '\u{2013}', '.', ':', ';', '<', '>', '?',
    '`', '{', '}', '|', '~', '/', '\\', '[', ']', '_', '#', '$', '*', '&', '^',
    '@', '%',
};

#[inline(always)]
pub fn is_symbol(c: char) -> bool {
    // Every member except the en-dash is ASCII.
    if c.is_ascii() || c == '\u{2013}' {
        SYMBOLS.contains(&c)
    } else {
        false
    }
}

/// Whitespace recognised by trimming and collapsing.
///
/// This is the classic ECMAScript set: ASCII whitespace (including vertical
/// tab), the `Zs` space separators, the line/paragraph separators and the
/// zero-width no-break space U+FEFF. Unlike [`char::is_whitespace`] it does
/// **not** include U+0085 (NEL).
#[inline(always)]
pub const fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Left side of a camel-case boundary: `[a-z0-9]`.
#[inline(always)]
pub const fn is_camel_head(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Right side of a camel-case boundary: `[A-Z]`.
#[inline(always)]
pub const fn is_camel_tail(c: char) -> bool {
    c.is_ascii_uppercase()
}

/// `true` when upper-casing `c` yields anything other than `c` itself.
#[inline(always)]
pub fn changes_on_uppercase(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_lowercase();
    }
    let mut upper = c.to_uppercase();
    !(upper.next() == Some(c) && upper.next().is_none())
}

#[inline]
pub fn contains_symbol(text: &str) -> bool {
    text.chars().any(is_symbol)
}

#[inline]
pub fn contains_whitespace(text: &str) -> bool {
    text.chars().any(is_whitespace)
}
