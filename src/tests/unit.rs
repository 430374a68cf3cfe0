#[cfg(test)]
mod unit_tests {

    use crate::{ConstantCaseError, constant_case, try_constant_case};
    use std::borrow::Cow;

    #[test]
    fn documented_examples() {
        assert_eq!(constant_case("beep"), "BEEP");
        assert_eq!(constant_case("beep boop"), "BEEP_BOOP");
        assert_eq!(constant_case("isMobile"), "IS_MOBILE");
        assert_eq!(constant_case("Hello World!"), "HELLO_WORLD");
        assert_eq!(constant_case(""), "");
    }

    #[test]
    fn non_string_is_rejected() {
        let err = try_constant_case(&42).unwrap_err();
        assert_eq!(err, ConstantCaseError::InvalidArgument("42".into()));
        assert_eq!(
            err.to_string(),
            "invalid argument. Must provide a string. Value: `42`."
        );
    }

    #[test]
    fn only_symbols_becomes_empty() {
        assert_eq!(constant_case("!!!"), "");
        assert_eq!(constant_case(" -_- "), "");
        assert_eq!(constant_case("()[]{}"), "");
    }

    #[test]
    fn already_constant_case_is_unchanged() {
        assert_eq!(constant_case("ALREADY_DONE"), "ALREADY_DONE");
        assert_eq!(constant_case("MAX_RETRY_COUNT"), "MAX_RETRY_COUNT");
    }

    #[test]
    fn zero_copy_when_already_constant() {
        let input = "BEEP42";
        let result = constant_case(input);
        assert!(matches!(result, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn only_lower_to_upper_transitions_split() {
        assert_eq!(constant_case("ABCdefGHI"), "ABCDEF_GHI");
    }

    #[test]
    fn acronym_runs_are_not_split() {
        assert_eq!(constant_case("HTTPServer"), "HTTPSERVER");
        assert_eq!(constant_case("parseHTTPServer"), "PARSE_HTTPSERVER");
    }

    #[test]
    fn digit_before_capital_is_a_boundary() {
        assert_eq!(constant_case("0A"), "0_A");
        assert_eq!(constant_case("V2BETA"), "V2_BETA");
        assert!(matches!(constant_case("0A"), Cow::Owned(_)));
        let input = "BETA2";
        assert!(matches!(constant_case(input), Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn digits_start_a_boundary() {
        assert_eq!(constant_case("v2Beta"), "V2_BETA");
        assert_eq!(constant_case("base64Encode"), "BASE64_ENCODE");
    }

    #[test]
    fn separators_of_every_kind() {
        assert_eq!(constant_case("foo-bar"), "FOO_BAR");
        assert_eq!(constant_case("foo_bar"), "FOO_BAR");
        assert_eq!(constant_case("foo.bar"), "FOO_BAR");
        assert_eq!(constant_case("foo/bar\\baz"), "FOO_BAR_BAZ");
        assert_eq!(constant_case("foo – bar"), "FOO_BAR");
        assert_eq!(constant_case("foo  --  bar"), "FOO_BAR");
        assert_eq!(constant_case("foo\t\nbar"), "FOO_BAR");
    }

    #[test]
    fn unlisted_punctuation_survives() {
        assert_eq!(constant_case("a+b=c"), "A+B=C");
        assert_eq!(constant_case("a—b"), "A—B");
    }

    #[test]
    fn padding_never_becomes_underscore() {
        assert_eq!(constant_case("   beep boop   "), "BEEP_BOOP");
        assert_eq!(constant_case("\u{FEFF}\u{3000}beep\u{00A0}"), "BEEP");
        assert_eq!(constant_case("--beep--"), "BEEP");
    }

    #[test]
    fn next_line_is_not_whitespace() {
        assert_eq!(constant_case("a\u{0085}b"), "A\u{0085}B");
    }

    #[test]
    fn unicode_upper_casing_is_best_effort() {
        assert_eq!(constant_case("straße"), "STRASSE");
        assert_eq!(constant_case("déjà vu"), "DÉJÀ_VU");
        assert_eq!(constant_case("caféBar"), "CAFÉBAR");
    }

    #[test]
    fn digit_then_lowercase_is_not_a_fixed_point() {
        // `1a` upper-cases to `1A`, which is itself a camel-case boundary.
        let once = constant_case("x1y").into_owned();
        assert_eq!(once, "X1Y");
        assert_eq!(constant_case(&once), "X1_Y");
    }
}
