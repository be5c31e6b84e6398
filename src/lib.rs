//! # capsift
//!
//! Include/exclude search, match highlighting and column sorting for the
//! tables of a website capture review (network log, DOM inventory, scripts,
//! HTML source).
//!
//! The core is generic: any type implementing [`Record`] can be filtered,
//! highlighted and sorted. The [`capture`] module provides the record types of
//! a capture result; [`Review`] bundles one [`TableState`] per table.
//!
//! # Query syntax
//!
//! Terms are separated by `|` and matched as case-insensitive substrings. A
//! term prefixed with `!` excludes every record that contains it in any
//! field. A record is kept when it contains at least one include term (or
//! there are none) and no exclude term.
//!
//! # Quick Start
//!
//! ```rust
//! use capsift::{CaptureResult, TableState};
//!
//! let capture = CaptureResult::from_json(r#"{
//!     "network_logs": [
//!         { "method": "GET", "url": "/x.png",     "type": "image", "status": 200 },
//!         { "method": "GET", "url": "/api/error", "type": "fetch", "status": 500 },
//!         { "method": "GET", "url": "/y.jpg",     "type": "image", "status": 200 }
//!     ]
//! }"#).unwrap();
//!
//! let state = TableState::default()
//!     .with_query("error | 200 | !image")
//!     .sorted_by("status");
//!
//! let view = state.apply(&capture.network_logs);
//! assert_eq!(view.summary(), "1 / 3");
//! assert_eq!(view.rows[0].record.url, "/api/error");
//! ```
//!
//! # Custom records
//!
//! Implement [`Record`] to put any row type behind the same engine:
//!
//! ```rust
//! use std::borrow::Cow;
//! use capsift::{FieldValue, Record, TableState};
//!
//! struct Cookie { name: String, size: u32 }
//!
//! impl Record for Cookie {
//!     fn search_fields(&self) -> Vec<Cow<'_, str>> {
//!         vec![Cow::Borrowed(self.name.as_str())]
//!     }
//!
//!     fn column(&self, key: &str) -> FieldValue<'_> {
//!         match key {
//!             "name" => FieldValue::text(&self.name),
//!             "size" => self.size.into(),
//!             _      => FieldValue::Missing,
//!         }
//!     }
//! }
//!
//! let cookies = vec![
//!     Cookie { name: "session".into(), size: 120 },
//!     Cookie { name: "_ga".into(),     size: 30 },
//! ];
//! let view = TableState::default().sorted_by("size").apply(&cookies);
//! assert_eq!(view.rows[0].record.name, "_ga");
//! ```

#![forbid(unsafe_code)]

pub mod capture;

mod error;
mod highlight;
mod matcher;
mod query;
mod review;
mod sort;
mod table;
mod traits;
mod value;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use capture::CaptureResult;
pub use error::CapsiftError;
pub use highlight::{concat, highlight, Span};
pub use matcher::{contains_term, matches, matches_any};
pub use query::{parse, ParsedQuery, EXCLUDE_PREFIX, TERM_SEPARATOR};
pub use review::{Review, Section, TableKind};
pub use sort::{advance, compare_values, natural_cmp, sort, sort_indexed, SortDirection, SortState};
pub use table::{Row, TableState, TableView};
pub use traits::Record;
pub use value::FieldValue;
