use std::borrow::Cow;

use crate::matcher::matches_any;
use crate::query::ParsedQuery;
use crate::value::FieldValue;

/// A row of a review table.
///
/// Implement this to make any record shape filterable and sortable. The core
/// never looks inside a record beyond these two methods: `search_fields` is
/// the caller's field-extraction function for matching, `column` is the
/// lookup used by the column sorter.
///
/// # Example
///
/// ```rust
/// use std::borrow::Cow;
/// use capsift::{FieldValue, ParsedQuery, Record};
///
/// struct Request {
///     url:    String,
///     status: Option<u16>,
/// }
///
/// impl Record for Request {
///     fn search_fields(&self) -> Vec<Cow<'_, str>> {
///         vec![
///             Cow::Borrowed(self.url.as_str()),
///             self.status.map(|s| s.to_string()).unwrap_or_default().into(),
///         ]
///     }
///
///     fn column(&self, key: &str) -> FieldValue<'_> {
///         match key {
///             "url"    => FieldValue::text(&self.url),
///             "status" => self.status.into(),
///             _        => FieldValue::Missing,
///         }
///     }
/// }
///
/// let request = Request { url: "/api/error".into(), status: Some(500) };
/// assert!(request.matches(&ParsedQuery::parse("500 | !image")));
/// ```
pub trait Record {
    /// Ordered textual fields searched by a query. Absent values should be
    /// returned as empty strings rather than skipped.
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// Value of the named column. Unknown columns are [`FieldValue::Missing`].
    fn column(&self, key: &str) -> FieldValue<'_>;

    /// Whether this record passes `query` (see [`matches_any`]).
    fn matches(&self, query: &ParsedQuery) -> bool {
        matches_any(&self.search_fields(), query)
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        (**self).search_fields()
    }

    fn column(&self, key: &str) -> FieldValue<'_> {
        (**self).column(key)
    }
}
