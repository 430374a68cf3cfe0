use crate::{
    stage::Stage,
    testing::stage_contract::StageTestConfig,
    unicode::{is_camel_head, is_camel_tail},
};
use std::borrow::Cow;

/// Insert a space at every lower-to-upper camel-case boundary.
///
/// A boundary is an ASCII lowercase letter or digit immediately followed by an
/// ASCII uppercase letter. Both characters are kept:
///
/// - `isMobile` → `is Mobile`
/// - `ABCdefGHI` → `ABCdef GHI`
/// - `v2Beta` → `v2 Beta`
///
/// Runs of capitals are never split, so `HTTPServer` stays `HTTPServer`.
pub struct SplitCamelCase;

#[inline(always)]
fn has_boundary(text: &str) -> bool {
    text.as_bytes()
        .windows(2)
        .any(|w| is_camel_head(w[0] as char) && is_camel_tail(w[1] as char))
}

impl Stage for SplitCamelCase {
    fn name(&self) -> &'static str {
        "split_camel_case"
    }

    // Both sides of a boundary are ASCII, and an ASCII byte inside a UTF-8
    // string is always a whole character, so scanning bytes is exact.
    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        has_boundary(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !has_boundary(&text) {
            return text;
        }
        let mut out = String::with_capacity(text.len() + 4);
        let mut prev: Option<char> = None;
        for c in text.chars() {
            if prev.is_some_and(is_camel_head) && is_camel_tail(c) {
                out.push(' ');
            }
            out.push(c);
            prev = Some(c);
        }
        Cow::Owned(out)
    }
}

impl StageTestConfig for SplitCamelCase {
    fn samples() -> &'static [&'static str] {
        &["isMobile", "ABCdefGHI", "HTTPServer", "v2Beta", "", "aBcDeF"]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "HTTPServer", "ALREADY_DONE", "Hello World", "éA", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("isMobile", "is Mobile"),
            ("ABCdefGHI", "ABCdef GHI"),
            ("v2Beta", "v2 Beta"),
            ("aBcDeF", "a Bc De F"),
            ("x1Y", "x1 Y"),
        ]
    }
}
