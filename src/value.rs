use std::borrow::Cow;
use std::fmt;

/// The value of one column of a [`Record`](crate::traits::Record).
///
/// Capture results mix strings, numbers and absent fields in the same column
/// (a network entry with no response has no `status`). `FieldValue` keeps
/// that distinction for sorting and coerces to text for everything else.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// A textual value.
    Text(Cow<'a, str>),

    /// A numeric value. Two numbers sort numerically.
    Number(f64),

    /// Absent or null. Coerces to the empty string.
    Missing,
}

impl<'a> FieldValue<'a> {
    /// Borrowed text value.
    pub fn text(s: &'a str) -> Self {
        Self::Text(Cow::Borrowed(s))
    }

    /// The textual form used for matching and string comparison.
    ///
    /// `Missing` is `""`; numbers print without a trailing `.0` when integral.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s)   => Cow::Borrowed(s.as_ref()),
            Self::Number(n) => Cow::Owned(format_number(*n)),
            Self::Missing   => Cow::Borrowed(""),
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(s: &'a str) -> Self {
        Self::text(s)
    }
}

impl From<String> for FieldValue<'_> {
    fn from(s: String) -> Self {
        Self::Text(Cow::Owned(s))
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(s: &'a String) -> Self {
        Self::text(s)
    }
}

macro_rules! number_from {
    ($($t:ty),*) => {
        $(impl From<$t> for FieldValue<'_> {
            fn from(n: $t) -> Self {
                Self::Number(n as f64)
            }
        })*
    };
}

number_from!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

impl<'a, T> From<Option<T>> for FieldValue<'a>
where
    T: Into<FieldValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Integral values print as integers (`200`, not `200.0`).
fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
