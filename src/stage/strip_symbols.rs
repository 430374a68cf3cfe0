use crate::{
    stage::Stage,
    testing::stage_contract::StageTestConfig,
    unicode::{contains_symbol, is_symbol},
};
use std::borrow::Cow;

/// Replace every run of punctuation/symbols with a single space.
///
/// The recognised set is [`SYMBOLS`](crate::unicode::SYMBOLS). A run of any
/// length, mixing any members, collapses to exactly one `' '`:
///
/// | Input            | Output           |
/// |------------------|------------------|
/// | `"foo-bar"`      | `"foo bar"`      |
/// | `"a--__..b"`     | `"a b"`          |
/// | `"Hello World!"` | `"Hello World "` |
/// | `"!!!"`          | `" "`            |
///
/// `+`, `=` and every other character pass through untouched.
pub struct StripSymbols;

impl Stage for StripSymbols {
    fn name(&self) -> &'static str {
        "strip_symbols"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        contains_symbol(text)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        let mut out = String::with_capacity(text.len());
        let mut in_run = false;
        for c in text.chars() {
            if is_symbol(c) {
                if !in_run {
                    out.push(' ');
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

impl StageTestConfig for StripSymbols {
    fn samples() -> &'static [&'static str] {
        &["Hello World!", "foo-bar_baz", "a–b", "(x)", "!!!", "", "plain"]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "isMobile", "a+b=c", "   ", "ALREADY DONE", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("Hello World!", "Hello World "),
            ("foo-bar", "foo bar"),
            ("a--__..b", "a b"),
            ("!!!", " "),
            ("a–b", "a b"),
            ("ALREADY_DONE", "ALREADY DONE"),
            ("[x]{y}", " x y "),
            ("a - b", "a   b"),
        ]
    }
}
