//! Include/exclude matching of single values and whole records.
//!
//! Matching is plain substring containment. A term matches when the
//! lower-cased value contains the lower-cased term, or the value contains
//! the term as typed.

use crate::query::ParsedQuery;

/// Whether `value` contains `term`, case-insensitively or verbatim.
///
/// The verbatim branch is implied by the lower-cased one for text with
/// stable case folding. It stays so that no folding edge case can make a
/// literal occurrence miss.
pub fn contains_term(value: &str, term: &str) -> bool {
    value.to_lowercase().contains(&term.to_lowercase()) || value.contains(term)
}

/// Whether a single value satisfies `query`.
///
/// Exclusions are checked first and reject immediately. With no include
/// terms the value is accepted; otherwise at least one include term must
/// occur in it.
///
/// ```rust
/// use capsift::{matches, ParsedQuery};
///
/// let query = ParsedQuery::parse("error | !debug");
/// assert!(matches("Fatal ERROR", &query));
/// assert!(!matches("debug error", &query));
/// assert!(!matches("all good", &query));
/// ```
pub fn matches(value: &str, query: &ParsedQuery) -> bool {
    matches_any(&[value], query)
}

/// Whether a record, given as its ordered fields, satisfies `query`.
///
/// Any exclude term found in any field vetoes the whole record. Otherwise
/// the record is accepted when there are no include terms, or when some
/// field contains some include term.
pub fn matches_any<S: AsRef<str>>(fields: &[S], query: &ParsedQuery) -> bool {
    if query.is_empty() {
        return true;
    }

    let excluded = fields.iter().any(|field| {
        query
            .exclude()
            .iter()
            .any(|term| contains_term(field.as_ref(), term))
    });
    if excluded {
        return false;
    }

    if query.include().is_empty() {
        return true;
    }

    fields.iter().any(|field| {
        query
            .include()
            .iter()
            .any(|term| contains_term(field.as_ref(), term))
    })
}
