use crate::highlight::{highlight, Span};
use crate::query::ParsedQuery;
use crate::sort::{advance, sort_by_column, SortState};
use crate::traits::Record;

// ---------------------------------------------------------------------------
// TableState
// ---------------------------------------------------------------------------

/// Interactive state of one review table.
///
/// Every interaction consumes the state and returns the next one, so a host
/// can keep the previous value around or swap it in atomically.
///
/// # Example
///
/// ```rust,ignore
/// let state = TableState::default()
///     .toggled()
///     .with_query("error | 200 | !image")
///     .sorted_by("status");
///
/// let view = state.apply(&capture.network_logs);
/// println!("Network Logs ({})", view.summary());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    open:  bool,
    query: String,
    sort:  Option<SortState>,
}

impl TableState {
    // ── Interactions ──────────────────────────────────────────────────────

    /// Flip the collapsed/expanded flag.
    pub fn toggled(mut self) -> Self {
        self.open = !self.open;
        self
    }

    /// Replace the raw search text.
    pub fn with_query(mut self, raw: impl Into<String>) -> Self {
        self.query = raw.into();
        self
    }

    /// Register a click on the `column` header (see [`advance`]).
    pub fn sorted_by(mut self, column: &str) -> Self {
        self.sort = advance(self.sort.as_ref(), column);
        self
    }

    /// Drop any active sort, back to insertion order.
    pub fn reset_sort(mut self) -> Self {
        self.sort = None;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The raw search text as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Header glyph for `column`, empty unless it is the active sort column.
    pub fn indicator(&self, column: &str) -> &'static str {
        match &self.sort {
            Some(state) if state.column == column => state.indicator(),
            _ => "",
        }
    }

    // ── Evaluation ────────────────────────────────────────────────────────

    /// Filter `records` with the current query, then order them with the
    /// current sort. Without a sort, matching rows keep their input order.
    pub fn apply<'a, R: Record>(&self, records: &'a [R]) -> TableView<'a, R> {
        let query = ParsedQuery::parse(&self.query);
        let mut rows: Vec<Row<'a, R>> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.matches(&query))
            .map(|(index, record)| Row { index, record })
            .collect();

        if let Some(state) = &self.sort {
            sort_by_column::<_, R, _>(&mut rows, |row| row.record, &state.column, state.direction);
        }

        tracing::trace!(
            total    = records.len(),
            matched  = rows.len(),
            include  = query.include().len(),
            exclude  = query.exclude().len(),
            "table view computed"
        );

        TableView {
            total: records.len(),
            rows,
            query,
        }
    }

    /// Number of `records` passing the current query, without sorting.
    pub fn count<R: Record>(&self, records: &[R]) -> usize {
        let query = ParsedQuery::parse(&self.query);
        records.iter().filter(|r| r.matches(&query)).count()
    }
}

// ---------------------------------------------------------------------------
// TableView
// ---------------------------------------------------------------------------

/// One record of a [`TableView`], with its position in the unfiltered input.
#[derive(Debug)]
pub struct Row<'a, R> {
    /// Zero-based index into the records the view was computed from.
    pub index:  usize,
    pub record: &'a R,
}

impl<R> Clone for Row<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Row<'_, R> {}

/// The filtered and ordered rows of a table, ready for rendering.
#[derive(Debug)]
pub struct TableView<'a, R> {
    /// Matching rows in display order.
    pub rows: Vec<Row<'a, R>>,

    /// Size of the unfiltered input.
    pub total: usize,

    query: ParsedQuery,
}

impl<'a, R> TableView<'a, R> {
    /// Number of matching rows.
    pub fn matched(&self) -> usize {
        self.rows.len()
    }

    /// `"matched / total"`, as shown next to a table title.
    pub fn summary(&self) -> String {
        format!("{} / {}", self.matched(), self.total)
    }

    /// Highlight `text` with this view's include terms.
    pub fn highlight<'t>(&self, text: &'t str) -> Vec<Span<'t>> {
        highlight(text, &self.query)
    }

    /// The records in display order.
    pub fn records(&self) -> impl Iterator<Item = &'a R> + '_ {
        self.rows.iter().map(|row| row.record)
    }
}
