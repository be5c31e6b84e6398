//! Column sorting and the three-state header click cycle.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

use icu_collator::{Collator, CollatorOptions, Numeric, Strength};

use crate::traits::Record;
use crate::value::FieldValue;

// ---------------------------------------------------------------------------
// SortState
// ---------------------------------------------------------------------------

/// Direction of an active column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,

    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Orient a natural ordering for this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending  => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// The column and direction applied to a table.
///
/// A table with no sort holds `None` (insertion order). Values are replaced,
/// never mutated: see [`advance`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortState {
    pub column:    String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self { column: column.into(), direction: SortDirection::Ascending }
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self { column: column.into(), direction: SortDirection::Descending }
    }

    /// Header glyph for this state.
    pub fn indicator(&self) -> &'static str {
        match self.direction {
            SortDirection::Ascending  => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

/// Next sort state after a click on the `column` header.
///
/// A new column always starts ascending. Clicking the active column goes
/// ascending, then descending, then back to unsorted.
///
/// ```rust
/// use capsift::{advance, SortState};
///
/// let asc = advance(None, "status");
/// assert_eq!(asc, Some(SortState::ascending("status")));
/// let desc = advance(asc.as_ref(), "status");
/// assert_eq!(desc, Some(SortState::descending("status")));
/// assert_eq!(advance(desc.as_ref(), "status"), None);
/// ```
pub fn advance(current: Option<&SortState>, column: &str) -> Option<SortState> {
    match current {
        Some(state) if state.column == column => match state.direction {
            SortDirection::Ascending  => Some(SortState::descending(column)),
            SortDirection::Descending => None,
        },
        _ => Some(SortState::ascending(column)),
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Return `records` ordered by `column`, leaving the input untouched.
///
/// The sort is stable in both directions: records that compare equal keep
/// their relative order.
pub fn sort<'a, R: Record>(records: &'a [R], column: &str, direction: SortDirection) -> Vec<&'a R> {
    let mut sorted: Vec<&R> = records.iter().collect();
    sort_by_column::<_, R, _>(&mut sorted, |r| *r, column, direction);
    sorted
}

/// [`sort`] for rows that carry their position in an unfiltered input.
///
/// ```rust
/// use capsift::{capture::HtmlLine, sort_indexed, SortDirection};
///
/// let lines = [HtmlLine { number: 1, text: "<body>" }, HtmlLine { number: 2, text: "<a>" }];
/// let rows: Vec<_> = lines.iter().enumerate().collect();
/// let sorted = sort_indexed(&rows, "text", SortDirection::Ascending);
/// assert_eq!(sorted[0].0, 1);
/// ```
pub fn sort_indexed<'a, R: Record>(
    rows: &[(usize, &'a R)],
    column: &str,
    direction: SortDirection,
) -> Vec<(usize, &'a R)> {
    let mut sorted = rows.to_vec();
    sort_by_column::<_, R, _>(&mut sorted, |row| row.1, column, direction);
    sorted
}

/// Stable in-place sort of arbitrary items by a column of the record each
/// one projects to.
pub(crate) fn sort_by_column<T, R, F>(items: &mut [T], project: F, column: &str, direction: SortDirection)
where
    R: Record + ?Sized,
    F: Fn(&T) -> &R,
{
    items.sort_by(|a, b| {
        let ordering = compare_values(&project(a).column(column), &project(b).column(column));
        direction.apply(ordering)
    });
}

/// Ascending comparison of two column values.
///
/// Two numbers compare numerically. Any other pairing compares the values'
/// text with [`natural_cmp`]; missing values are the empty string.
pub fn compare_values(a: &FieldValue<'_>, b: &FieldValue<'_>) -> Ordering {
    match (a, b) {
        (FieldValue::Number(x), FieldValue::Number(y)) => x.total_cmp(y),
        _ => natural_cmp(&a.as_text(), &b.as_text()),
    }
}

thread_local! {
    static COLLATOR: Option<Collator> = root_collator();
}

/// Root-locale collator at primary strength with numeric ordering.
fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Primary);
    options.numeric = Some(Numeric::On);

    Collator::try_new(&Default::default(), options)
        .map_err(|err| tracing::warn!(?err, "collation data unavailable, comparing by code point"))
        .ok()
}

/// Locale-aware comparison that ignores case and accents and orders runs of
/// digits by their numeric value, so `"img2"` sorts before `"img10"`.
///
/// Uses the root collation order: punctuation before digits before letters,
/// `"école"` equal to `"ecole"` and before `"fichier"`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => codepoint_cmp(a, b),
    })
}

/// Case-folded code point order with numeric digit runs. Only used when no
/// collation data can be loaded.
fn codepoint_cmp(a: &str, b: &str) -> Ordering {
    let mut a = a.chars().peekable();
    let mut b = b.chars().peekable();

    loop {
        match (a.peek().copied(), b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let ordering = compare_digit_runs(&take_digits(&mut a), &take_digits(&mut b));
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(x), Some(y)) => {
                a.next();
                b.next();
                let ordering = x.to_lowercase().cmp(y.to_lowercase());
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(ch) = chars.next_if(char::is_ascii_digit) {
        run.push(ch);
    }
    run
}

/// Compare two digit strings by value without parsing (runs can exceed u64).
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
