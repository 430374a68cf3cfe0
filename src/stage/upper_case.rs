use crate::{stage::Stage, testing::stage_contract::StageTestConfig, unicode::changes_on_uppercase};
use std::borrow::Cow;

/// Upper-case the whole string with the full Unicode mapping of `str`.
///
/// Locale-independent: `ß` becomes `SS`, `i` becomes `I` (never `İ`).
/// Zero-copy when nothing changes.
pub struct UpperCase;

impl Stage for UpperCase {
    fn name(&self) -> &'static str {
        "upper_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str) -> bool {
        if text.is_ascii() {
            return text.bytes().any(|b| b.is_ascii_lowercase());
        }
        text.chars().any(changes_on_uppercase)
    }

    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str> {
        if !self.needs_apply(&text) {
            return text;
        }
        if text.is_ascii() {
            let mut owned = text.into_owned();
            owned.make_ascii_uppercase();
            return Cow::Owned(owned);
        }
        Cow::Owned(text.to_uppercase())
    }
}

impl StageTestConfig for UpperCase {
    fn samples() -> &'static [&'static str] {
        &["beep_boop", "Hello_World", "straße", "déjà_vu", "", "IS_MOBILE"]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["BEEP", "IS_MOBILE", "ABC123", "世界", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("beep", "BEEP"),
            ("is_Mobile", "IS_MOBILE"),
            ("straße", "STRASSE"),
            ("déjà_vu", "DÉJÀ_VU"),
            ("istanbul", "ISTANBUL"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract() {
        assert_stage_contract!(UpperCase);
    }

    #[test]
    fn ascii_fast_path_allocates_once() {
        let out = UpperCase.apply(Cow::Borrowed("hello world"));
        assert!(matches!(out, Cow::Owned(_)));
        assert_eq!(out, "HELLO WORLD");
    }

    #[test]
    fn length_expansion() {
        let out = UpperCase.apply(Cow::Borrowed("ß"));
        assert_eq!(out.len(), 2);
        assert_eq!(out, "SS");
    }
}
