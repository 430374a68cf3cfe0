use crate::{profile::preset, value::as_string_value};
use std::{any::Any, borrow::Cow, fmt::Debug};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstantCaseError {
    /// The value is not string-typed. Holds the value's `Debug` rendering.
    #[error("invalid argument. Must provide a string. Value: `{0}`.")]
    InvalidArgument(String),
}

/// Convert `text` to constant case.
///
/// ```
/// use constcase::constant_case;
///
/// assert_eq!(constant_case("beep"), "BEEP");
/// assert_eq!(constant_case("beep boop"), "BEEP_BOOP");
/// assert_eq!(constant_case("isMobile"), "IS_MOBILE");
/// assert_eq!(constant_case("Hello World!"), "HELLO_WORLD");
/// ```
///
/// Returns the input borrowed when it holds no lower-case ASCII letter, no
/// symbol, no whitespace and no digit directly before an upper-case letter
/// (`0A` is itself a boundary and becomes `0_A`).
#[inline]
pub fn constant_case(text: &str) -> Cow<'_, str> {
    preset::constant_case().run(Cow::Borrowed(text))
}

/// Type-guarded variant of [`constant_case`] for values only known as `Any`.
///
/// Any primitive or boxed string (see [`crate::value`]) is converted; anything
/// else fails before a single stage runs.
///
/// ```
/// use constcase::{ConstantCaseError, try_constant_case};
///
/// assert_eq!(try_constant_case(&"isMobile").unwrap(), "IS_MOBILE");
/// assert_eq!(
///     try_constant_case(&42).unwrap_err(),
///     ConstantCaseError::InvalidArgument("42".into()),
/// );
/// ```
pub fn try_constant_case<T: Any + Debug>(value: &T) -> Result<Cow<'_, str>, ConstantCaseError> {
    let Some(text) = as_string_value(value) else {
        return Err(ConstantCaseError::InvalidArgument(format!("{value:?}")));
    };
    Ok(constant_case(text.as_str()))
}
