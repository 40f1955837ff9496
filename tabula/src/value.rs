//! Cell values as seen by the default comparator.
//!
//! The engine never inspects cell contents except to order them. A value
//! exposes a sort text; the default comparator treats it as a number when
//! both sides parse, and as case-insensitive text otherwise.

use std::borrow::Cow;

/// A value that can sit in a table cell.
pub trait CellValue {
    /// Text used by the default comparator, `None` when the cell is empty.
    fn sort_text(&self) -> Option<Cow<'_, str>>;

    /// Whether the default comparator should place this value last.
    fn is_empty_cell(&self) -> bool {
        self.sort_text().is_none_or(|text| text.trim().is_empty())
    }
}

impl CellValue for String {
    fn sort_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl CellValue for &str {
    fn sort_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl CellValue for Cow<'_, str> {
    fn sort_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(&**self))
    }
}

macro_rules! impl_display_cell {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CellValue for $ty {
                fn sort_text(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(self.to_string()))
                }
            }
        )*
    };
}

impl_display_cell!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool);

impl CellValue for f32 {
    fn sort_text(&self) -> Option<Cow<'_, str>> {
        (!self.is_nan()).then(|| Cow::Owned(self.to_string()))
    }
}

impl CellValue for f64 {
    fn sort_text(&self) -> Option<Cow<'_, str>> {
        (!self.is_nan()).then(|| Cow::Owned(self.to_string()))
    }
}

impl<T: CellValue> CellValue for Option<T> {
    fn sort_text(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(CellValue::sort_text)
    }
}

impl CellValue for serde_json::Value {
    fn sort_text(&self) -> Option<Cow<'_, str>> {
        use serde_json::Value;

        match self {
            Value::Null => None,
            Value::String(s) => Some(Cow::Borrowed(s)),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            // Structured values have no natural ordering
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_detection() {
        assert!("".is_empty_cell());
        assert!("   ".is_empty_cell());
        assert!(None::<String>.is_empty_cell());
        assert!(f64::NAN.is_empty_cell());
        assert!(serde_json::Value::Null.is_empty_cell());
        assert!(!"x".is_empty_cell());
        assert!(!0i32.is_empty_cell());
    }

    #[test]
    fn test_json_sort_text() {
        let value = serde_json::json!(12.5);
        assert_eq!(value.sort_text().as_deref(), Some("12.5"));
        assert_eq!(serde_json::json!([1, 2]).sort_text(), None);
    }
}
