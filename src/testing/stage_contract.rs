use crate::stage::Stage;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes)
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " déjà-vu ", "TEST", ""]
    }

    /// Samples that should pass through unchanged (zero-copy test).
    fn should_pass_through() -> &'static [&'static str] {
        &["HELLO", "WORLD", "TEST123", ""]
    }

    /// Input/output pairs that verify correct transformations.
    ///
    /// Return empty slice if stage doesn't have predictable transformations.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }
}

/// Assert that a stage satisfies every universal contract.
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `stage_is_idempotent` → applying twice yields same result as once
/// 3. `needs_apply_is_accurate` → correctly predicts whether apply() would change text
/// 4. `handles_empty_string` → `""` in, `""` out
/// 5. `no_panic_on_mixed_scripts` → survives pathological real-world input
/// 6. `transforms_as_documented` → every `should_transform` pair holds
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::handles_empty_string($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
        $crate::testing::stage_contract::transforms_as_documented($stage);
    };
}

#[cfg(test)]
use std::borrow::Cow;

#[cfg(test)]
fn run<'a, S: Stage>(stage: &S, text: Cow<'a, str>) -> Cow<'a, str> {
    if stage.needs_apply(&text) {
        stage.apply(text)
    } else {
        text
    }
}

#[cfg(test)]
pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &input in S::samples() {
        // Second pass must never allocate again (idempotency + zero-copy)
        let once = run(&stage, Cow::Borrowed(input)).into_owned();
        let twice = run(&stage, Cow::Borrowed(once.as_str()));
        assert!(
            matches!(twice, Cow::Borrowed(s) if std::ptr::eq(s, once.as_str())),
            "zero-copy violated on second pass of `{}` (input: `{input}`)",
            stage.name()
        );
    }

    for &pass_through in S::should_pass_through() {
        let out = run(&stage, Cow::Borrowed(pass_through));
        assert_eq!(out.as_ref(), pass_through);
        assert!(
            matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, pass_through)),
            "zero-copy violated on pass-through sample of `{}` (input: `{pass_through}`)",
            stage.name()
        );
        // apply() alone must also hand a no-op back untouched
        let direct = stage.apply(Cow::Borrowed(pass_through));
        assert!(matches!(direct, Cow::Borrowed(s) if std::ptr::eq(s, pass_through)));
    }
}

#[cfg(test)]
pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    let inputs = S::samples()
        .iter()
        .chain(S::should_pass_through())
        .chain(S::should_transform().iter().map(|(i, _)| i));
    for &input in inputs {
        let once = stage.apply(Cow::Borrowed(input));
        let twice = stage.apply(Cow::Owned(once.to_string()));
        assert_eq!(
            once,
            twice,
            "apply() of `{}` not idempotent on `{input}`",
            stage.name()
        );
    }
}

#[cfg(test)]
pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    let inputs = S::samples()
        .iter()
        .chain(S::should_pass_through())
        .chain(S::should_transform().iter().map(|(i, _)| i));
    for &input in inputs {
        check_accuracy(&stage, input);
    }
}

#[cfg(test)]
#[inline(always)]
fn check_accuracy<S: Stage>(stage: &S, input: &str) {
    let predicted = stage.needs_apply(input);
    // Owned input so the comparison is purely semantic.
    let output = stage.apply(Cow::Owned(input.to_owned()));
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
    );
}

#[cfg(test)]
pub fn handles_empty_string<S: StageTestConfig>(stage: S) {
    assert!(!stage.needs_apply(""), "`{}` wants to touch \"\"", stage.name());
    assert_eq!(stage.apply(Cow::Borrowed("")).as_ref(), "");
}

#[cfg(test)]
pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    let _ = stage.apply(Cow::Borrowed(
        "Hello 世界 русский Türkçe العربية 简体中文 ﬁ ǅ ŉ\u{FEFF}\u{0085}",
    ));
}

#[cfg(test)]
pub fn transforms_as_documented<S: StageTestConfig>(stage: S) {
    for &(input, expected) in S::should_transform() {
        let out = run(&stage, Cow::Borrowed(input));
        assert_eq!(
            out.as_ref(),
            expected,
            "`{}` on `{input}`",
            stage.name()
        );
    }
}
