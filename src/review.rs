//! Per-capture review session: one table state per table, one query per
//! section.

use std::fmt;
use std::mem;
use std::str::FromStr;

use crate::capture::CaptureResult;
use crate::error::CapsiftError;
use crate::table::TableState;
use crate::traits::Record;

// ---------------------------------------------------------------------------
// TableKind
// ---------------------------------------------------------------------------

/// The tables a capture result is reviewed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Network,
    Clickable,
    Hidden,
    Forms,
    Popups,
    ExternalScripts,
    InlineScripts,
    Html,
}

impl TableKind {
    pub const ALL: [TableKind; 8] = [
        Self::Network,
        Self::Clickable,
        Self::Hidden,
        Self::Forms,
        Self::Popups,
        Self::ExternalScripts,
        Self::InlineScripts,
        Self::Html,
    ];

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Network         => "network",
            Self::Clickable       => "clickable",
            Self::Hidden          => "hidden",
            Self::Forms           => "forms",
            Self::Popups          => "popups",
            Self::ExternalScripts => "external-scripts",
            Self::InlineScripts   => "inline-scripts",
            Self::Html            => "html",
        }
    }

    /// Heading shown above the table.
    pub fn title(self) -> &'static str {
        match self {
            Self::Network         => "Network Logs",
            Self::Clickable       => "Clickable Elements",
            Self::Hidden          => "Hidden Elements",
            Self::Forms           => "Forms",
            Self::Popups          => "Popups/Modals/Cookie Banners",
            Self::ExternalScripts => "External Scripts",
            Self::InlineScripts   => "Inline Scripts",
            Self::Html            => "HTML Source",
        }
    }

    /// Displayed columns, in order. Every key is understood by the matching
    /// record's `column` lookup and can be sorted on.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Network         => &["status", "method", "type", "url"],
            Self::Clickable       => &["label", "text"],
            Self::Hidden          => &["label", "text"],
            Self::Forms           => &["method", "action", "id"],
            Self::Popups          => &["id", "classes", "text", "buttons"],
            Self::ExternalScripts => &["src", "type"],
            Self::InlineScripts   => &["type", "content"],
            Self::Html            => &["line", "text"],
        }
    }

    /// Columns whose cells show highlighted query matches. Numbers and
    /// secondary details are printed as-is.
    pub fn highlighted_columns(self) -> &'static [&'static str] {
        match self {
            Self::Network         => &["method", "type", "url"],
            Self::Clickable       => &["label", "text"],
            Self::Hidden          => &["label", "text"],
            Self::Forms           => &["method", "action"],
            Self::Popups          => &[],
            Self::ExternalScripts => &["src"],
            Self::InlineScripts   => &["type", "content"],
            Self::Html            => &["text"],
        }
    }

    /// The search section this table belongs to. Tables in one section share
    /// a single query box.
    pub fn section(self) -> Section {
        match self {
            Self::Network => Section::Network,
            Self::Clickable | Self::Hidden | Self::Forms | Self::Popups => Section::Dom,
            Self::ExternalScripts | Self::InlineScripts => Section::Scripts,
            Self::Html => Section::Html,
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TableKind {
    type Err = CapsiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CapsiftError::UnknownTable(s.to_owned()))
    }
}

/// A group of tables sharing one search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Network,
    Dom,
    Scripts,
    Html,
}

impl Section {
    /// Tables listed under this section.
    pub fn tables(self) -> impl Iterator<Item = TableKind> {
        TableKind::ALL.into_iter().filter(move |kind| kind.section() == self)
    }
}

// ---------------------------------------------------------------------------
// Review
// ---------------------------------------------------------------------------

/// A loaded capture result together with the state of every table.
///
/// Each table has its own open flag and sort. The query is per section: every
/// table of a section always holds the same search text.
#[derive(Debug, Clone, Default)]
pub struct Review {
    result: CaptureResult,
    tables: [TableState; TableKind::ALL.len()],
}

impl Review {
    /// Start reviewing `result` with every table closed, unfiltered and
    /// unsorted.
    pub fn new(result: CaptureResult) -> Self {
        Self {
            result,
            ..Self::default()
        }
    }

    pub fn result(&self) -> &CaptureResult {
        &self.result
    }

    pub fn state(&self, kind: TableKind) -> &TableState {
        &self.tables[kind as usize]
    }

    /// Replace the state of `kind` with `f(state)`. A changed query is copied
    /// to the other tables of the same section.
    pub fn update(&mut self, kind: TableKind, f: impl FnOnce(TableState) -> TableState) {
        let slot = &mut self.tables[kind as usize];
        *slot = f(mem::take(slot));
        let query = slot.query().to_owned();

        for sibling in kind.section().tables().filter(|&other| other != kind) {
            let slot = &mut self.tables[sibling as usize];
            if slot.query() != query {
                *slot = mem::take(slot).with_query(query.as_str());
            }
        }
    }

    /// Swap in a new capture result. Sorts no longer refer to the same rows
    /// and are reset; queries and open flags are kept.
    pub fn replace_result(&mut self, result: CaptureResult) {
        self.result = result;
        for slot in &mut self.tables {
            *slot = mem::take(slot).reset_sort();
        }
        tracing::debug!("capture result replaced, sort states reset");
    }

    /// `"matched / total"` for `kind`, as shown in a collapsed table header.
    pub fn summary(&self, kind: TableKind) -> String {
        let dom = &self.result.dom_elements;
        match kind {
            TableKind::Network         => self.counter(kind, &self.result.network_logs),
            TableKind::Clickable       => self.counter(kind, &dom.clickable_elements),
            TableKind::Hidden          => self.counter(kind, &dom.hidden_elements),
            TableKind::Forms           => self.counter(kind, &dom.forms),
            TableKind::Popups          => self.counter(kind, &dom.popups),
            TableKind::ExternalScripts => self.counter(kind, &self.result.external_scripts()),
            TableKind::InlineScripts   => self.counter(kind, &self.result.inline_scripts()),
            TableKind::Html            => self.counter(kind, &self.result.html_lines()),
        }
    }

    /// `"matched / total"` over every script, whatever its kind.
    pub fn scripts_summary(&self) -> String {
        self.counter(TableKind::ExternalScripts, &self.result.dom_elements.scripts)
    }

    fn counter<R: Record>(&self, kind: TableKind, records: &[R]) -> String {
        format!("{} / {}", self.state(kind).count(records), records.len())
    }
}
