use anyhow::Result;
use capsift::{Record, Review, Span, TableKind, TableView};
use serde_json::{json, Map, Value};

use crate::cli::OutputFormat;

const MARK_OPEN: &str = "[";
const MARK_CLOSE: &str = "]";
const ANSI_REVERSE: &str = "\x1b[7m";
const ANSI_RESET: &str = "\x1b[0m";

/// Rendering switches taken from the command line.
pub(crate) struct RenderOptions {
    pub(crate) format: OutputFormat,
    pub(crate) color:  bool,
}

/// Render the table `kind` of `review` with its current state.
pub(crate) fn render_table(review: &Review, kind: TableKind, opts: &RenderOptions) -> Result<String> {
    let state = review.state(kind);
    let result = review.result();
    let dom = &result.dom_elements;

    match kind {
        TableKind::Network         => render(kind, review, &state.apply(&result.network_logs), opts),
        TableKind::Clickable       => render(kind, review, &state.apply(&dom.clickable_elements), opts),
        TableKind::Hidden          => render(kind, review, &state.apply(&dom.hidden_elements), opts),
        TableKind::Forms           => render(kind, review, &state.apply(&dom.forms), opts),
        TableKind::Popups          => render(kind, review, &state.apply(&dom.popups), opts),
        TableKind::ExternalScripts => {
            let scripts = result.external_scripts();
            render(kind, review, &state.apply(&scripts), opts)
        }
        TableKind::InlineScripts => {
            let scripts = result.inline_scripts();
            render(kind, review, &state.apply(&scripts), opts)
        }
        TableKind::Html => {
            let lines = result.html_lines();
            render(kind, review, &state.apply(&lines), opts)
        }
    }
}

fn render<R: Record>(
    kind: TableKind,
    review: &Review,
    view: &TableView<'_, R>,
    opts: &RenderOptions,
) -> Result<String> {
    match opts.format {
        OutputFormat::Plain => Ok(render_plain(kind, review, view, opts.color)),
        OutputFormat::Json  => render_json(kind, review, view),
    }
}

// ---------------------------------------------------------------------------
// Plain
// ---------------------------------------------------------------------------

fn render_plain<R: Record>(kind: TableKind, review: &Review, view: &TableView<'_, R>, color: bool) -> String {
    let state = review.state(kind);
    let mut out = format!("{} ({})\n", kind.title(), view.summary());

    let header: Vec<String> = kind
        .columns()
        .iter()
        .map(|col| format!("{col}{}", state.indicator(col)))
        .collect();
    out.push_str(&header.join("\t"));
    out.push('\n');

    for row in &view.rows {
        let cells: Vec<String> = kind
            .columns()
            .iter()
            .map(|col| paint(&cell_spans(kind, view, &row.record.column(col).as_text(), col), color))
            .collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }

    out
}

/// Spans for one cell: highlighted when the column shows matches, one plain
/// span otherwise.
fn cell_spans<'t, R>(kind: TableKind, view: &TableView<'_, R>, text: &'t str, column: &str) -> Vec<Span<'t>> {
    if kind.highlighted_columns().contains(&column) {
        view.highlight(text)
    } else {
        vec![Span::plain(text)]
    }
}

/// Join spans, wrapping highlighted runs in markers.
fn paint(spans: &[Span<'_>], color: bool) -> String {
    let (open, close) = if color {
        (ANSI_REVERSE, ANSI_RESET)
    } else {
        (MARK_OPEN, MARK_CLOSE)
    };

    spans
        .iter()
        .map(|span| {
            if span.highlighted {
                format!("{open}{}{close}", span.text)
            } else {
                span.text.to_owned()
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

fn render_json<R: Record>(kind: TableKind, review: &Review, view: &TableView<'_, R>) -> Result<String> {
    let state = review.state(kind);

    let rows: Vec<Value> = view
        .rows
        .iter()
        .map(|row| {
            let mut cells = Map::new();
            for col in kind.columns() {
                let value = row.record.column(col);
                let text = value.as_text();
                cells.insert((*col).to_owned(), json!(cell_spans(kind, view, &text, col)));
            }
            json!({ "index": row.index, "cells": cells })
        })
        .collect();

    let sort = state.sort().map(|s| {
        json!({
            "column": s.column,
            "direction": format!("{:?}", s.direction).to_lowercase(),
        })
    });

    let payload = json!({
        "table": kind.name(),
        "query": state.query(),
        "matched": view.matched(),
        "total": view.total,
        "sort": sort,
        "rows": rows,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_wraps_highlighted_runs() {
        let spans = [Span::plain("GET /api/"), Span::marked("error")];
        assert_eq!(paint(&spans, false), "GET /api/[error]");
        assert_eq!(paint(&spans, true), "GET /api/\x1b[7merror\x1b[0m");
    }

    #[test]
    fn numeric_columns_are_not_highlighted() {
        let json = r#"{ "network_logs": [ { "method": "GET", "url": "/200.png", "type": "image", "status": 200 } ] }"#;
        let capture = capsift::CaptureResult::from_json(json).unwrap();
        let mut review = Review::new(capture);
        review.update(TableKind::Network, |s| s.with_query("200"));

        let opts = RenderOptions { format: OutputFormat::Plain, color: false };
        let out = render_table(&review, TableKind::Network, &opts).unwrap();
        let row = out.lines().nth(2).unwrap();
        assert_eq!(row, "200\tGET\timage\t/[200].png");
    }
}
