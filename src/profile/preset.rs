use crate::{
    COLLAPSE_TO_UNDERSCORE, SplitCamelCase, StripSymbols, TrimWhitespace, UpperCase,
    process::{DynamicProcess, Process},
    profile::Profile,
};

/// `isMobile` → `IS_MOBILE`. The stage order is load-bearing:
///
/// 1. symbols → space
/// 2. camel-case boundaries → space
/// 3. trim
/// 4. whitespace runs → `_`
/// 5. upper-case
pub fn constant_case() -> Profile<impl Process> {
    Profile::builder("constant_case")
        .add_stage(StripSymbols)
        .add_stage(SplitCamelCase)
        .add_stage(TrimWhitespace)
        .add_stage(COLLAPSE_TO_UNDERSCORE)
        .add_stage(UpperCase)
        .build()
}

/// Same stages as [`constant_case`], assembled at runtime.
pub fn constant_case_dynamic() -> Profile<DynamicProcess> {
    Profile::plugin_builder("constant_case_dynamic")
        .add_stage(StripSymbols)
        .add_stage(SplitCamelCase)
        .add_stage(TrimWhitespace)
        .add_stage(COLLAPSE_TO_UNDERSCORE)
        .add_stage(UpperCase)
        .build()
}
