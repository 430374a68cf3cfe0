use crate::{stage::Stage, testing::stage_contract::StageTestConfig, unicode::is_whitespace};
use std::borrow::Cow;

/// Remove leading and trailing whitespace (see [`is_whitespace`]).
///
/// Interior whitespace is left alone. Trimming a borrowed string re-borrows a
/// sub-slice; only an owned string is re-allocated.
pub struct TrimWhitespace;

impl Stage for TrimWhitespace {
    fn name(&self) -> &'static str {
        "trim_ws"
    }

    fn needs_apply(&self, text: &str) -> bool {
        // Fast path for ASCII; a trailing 0xA0/0x85 byte is a continuation byte, not NBSP/NEL
        let b = text.as_bytes();
        let ascii_ws = |byte: &u8| byte.is_ascii() && is_whitespace(*byte as char);
        if b.first().is_some_and(ascii_ws) || b.last().is_some_and(ascii_ws) {
            return true;
        }
        text.chars().next().is_some_and(is_whitespace)
            || text.chars().next_back().is_some_and(is_whitespace)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        match text {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim_matches(is_whitespace)),
            Cow::Owned(s) => {
                let trimmed = s.trim_matches(is_whitespace);
                if trimmed.len() == s.len() {
                    Cow::Owned(s)
                } else {
                    Cow::Owned(trimmed.to_owned())
                }
            }
        }
    }
}

impl StageTestConfig for TrimWhitespace {
    fn samples() -> &'static [&'static str] {
        &["  hello  ", "\t\nx\r\n", "\u{3000}こんにちは\u{3000}", "\u{FEFF}bom", "", "a b"]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "a b", "x\u{0085}", "IS_MOBILE", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            (" \t\n hello \r\n ", "hello"),
            ("Hello World ", "Hello World"),
            (" ", ""),
            ("\u{00A0}\u{2009}x\u{202F}", "x"),
            ("\u{FEFF}bom", "bom"),
        ]
    }
}
