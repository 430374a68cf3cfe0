//! Constant-case conversion: `isMobile` → `IS_MOBILE`.
//!
//! The conversion is a fixed chain of five [`Stage`](stage::Stage)s, run by
//! [`profile::preset::constant_case`]. Use [`constant_case`] for `&str` input
//! and [`try_constant_case`] when the value's type is only known at runtime.

pub mod constant_case;
pub mod process;
pub mod profile;
pub mod stage;
#[doc(hidden)]
pub mod testing;
pub mod unicode;
pub mod value;

pub use constant_case::{ConstantCaseError, constant_case, try_constant_case};
pub use profile::Profile;
pub use stage::collapse_whitespace::{COLLAPSE_TO_UNDERSCORE, CollapseWhitespace};
pub use stage::split_camel_case::SplitCamelCase;
pub use stage::strip_symbols::StripSymbols;
pub use stage::trim_whitespace::TrimWhitespace;
pub use stage::upper_case::UpperCase;
pub use value::{StringValue, is_string};
