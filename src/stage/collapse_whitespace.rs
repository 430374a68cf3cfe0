use crate::{
    stage::Stage,
    testing::stage_contract::StageTestConfig,
    unicode::{contains_whitespace, is_whitespace},
};
use std::borrow::Cow;

/// Replace every run of whitespace with a single separator character.
///
/// The constant-case pipeline uses [`COLLAPSE_TO_UNDERSCORE`]. Any run, however
/// long and whatever mix of ASCII/Unicode spaces it holds, emits exactly one
/// `separator`. Leading and trailing runs are collapsed too, so trim first if
/// they should disappear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapseWhitespace {
    pub separator: char,
}

pub const COLLAPSE_TO_UNDERSCORE: CollapseWhitespace = CollapseWhitespace { separator: '_' };

impl Stage for CollapseWhitespace {
    fn name(&self) -> &'static str {
        "collapse_ws"
    }

    // A whitespace separator can already be in place: only runs or other
    // whitespace characters count as a change then.
    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if is_whitespace(self.separator) {
            return collapse_would_change(text, self.separator);
        }
        contains_whitespace(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        let mut in_run = false;
        for c in text.chars() {
            if is_whitespace(c) {
                if !in_run {
                    out.push(self.separator);
                    in_run = true;
                }
            } else {
                out.push(c);
                in_run = false;
            }
        }
        Cow::Owned(out)
    }
}

fn collapse_would_change(text: &str, separator: char) -> bool {
    let mut prev_ws = false;
    for c in text.chars() {
        let ws = is_whitespace(c);
        if ws && (prev_ws || c != separator) {
            return true;
        }
        prev_ws = ws;
    }
    false
}

impl StageTestConfig for CollapseWhitespace {
    fn samples() -> &'static [&'static str] {
        &["Hello World", "a   b\t\tc", "is Mobile", "x\u{3000}y", "", "nospace"]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "IS_MOBILE", "a_b", "x\u{0085}y", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("beep boop", "beep_boop"),
            ("a   b\t\tc\n\nd", "a_b_c_d"),
            ("x\u{00A0}\u{2003}\u{3000}y", "x_y"),
            (" lead", "_lead"),
            ("Hello World", "Hello_World"),
        ]
    }
}
