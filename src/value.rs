//! Runtime "is this a string?" check for values whose type is only known
//! through [`Any`].
//!
//! Two representations count as a string:
//!
//! - **primitive**: `&'static str`, `String`
//! - **boxed**: `Box<str>`, `Rc<str>`, `Arc<str>`, `Cow<'static, str>`
//!
//! The set is closed; everything else is rejected.

use std::{any::Any, borrow::Cow, rc::Rc, sync::Arc};

/// A string-typed value, tagged with the representation it arrived in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringValue<'a> {
    Primitive(&'a str),
    Boxed(&'a str),
}

impl<'a> StringValue<'a> {
    #[inline]
    pub fn as_str(&self) -> &'a str {
        match *self {
            StringValue::Primitive(s) | StringValue::Boxed(s) => s,
        }
    }

    #[inline]
    pub fn is_primitive(&self) -> bool {
        matches!(self, StringValue::Primitive(_))
    }
}

/// Classify `value`, or `None` when it is not string-typed.
pub fn as_string_value(value: &dyn Any) -> Option<StringValue<'_>> {
    if let Some(s) = value.downcast_ref::<&'static str>() {
        return Some(StringValue::Primitive(s));
    }
    if let Some(s) = value.downcast_ref::<String>() {
        return Some(StringValue::Primitive(s));
    }
    if let Some(s) = value.downcast_ref::<Box<str>>() {
        return Some(StringValue::Boxed(s));
    }
    if let Some(s) = value.downcast_ref::<Rc<str>>() {
        return Some(StringValue::Boxed(s));
    }
    if let Some(s) = value.downcast_ref::<Arc<str>>() {
        return Some(StringValue::Boxed(s));
    }
    if let Some(s) = value.downcast_ref::<Cow<'static, str>>() {
        return Some(StringValue::Boxed(s));
    }
    None
}

#[inline]
pub fn is_string(value: &dyn Any) -> bool {
    as_string_value(value).is_some()
}

#[inline]
pub fn is_primitive_string(value: &dyn Any) -> bool {
    as_string_value(value).is_some_and(|v| v.is_primitive())
}

#[inline]
pub fn is_boxed_string(value: &dyn Any) -> bool {
    as_string_value(value).is_some_and(|v| !v.is_primitive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_representations() {
        assert!(is_primitive_string(&"beep"));
        assert!(is_primitive_string(&String::from("beep")));
        assert!(!is_boxed_string(&"beep"));
    }

    #[test]
    fn boxed_representations() {
        let boxed: Box<str> = "beep".into();
        let rc: Rc<str> = "beep".into();
        let arc: Arc<str> = "beep".into();
        let cow: Cow<'static, str> = Cow::Borrowed("beep");
        for v in [&boxed as &dyn Any, &rc, &arc, &cow] {
            assert!(is_string(v));
            assert!(is_boxed_string(v));
            assert_eq!(as_string_value(v).map(|s| s.as_str()), Some("beep"));
        }
    }

    #[test]
    fn everything_else_is_rejected() {
        assert!(!is_string(&42));
        assert!(!is_string(&2.5_f64));
        assert!(!is_string(&true));
        assert!(!is_string(&'c'));
        assert!(!is_string(&()));
        assert!(!is_string(&vec!["beep"]));
        assert!(!is_string(&Some("beep")));
        assert!(!is_string(&b"beep".to_vec()));
    }
}
