//! Splitting text into plain and highlighted runs for rendering.

use serde::Serialize;

use crate::query::ParsedQuery;

/// A contiguous run of text, highlighted or plain.
///
/// Spans borrow from the highlighted text; concatenating them in order
/// gives back the original string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span<'a> {
    pub text:        &'a str,
    pub highlighted: bool,
}

impl<'a> Span<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self { text, highlighted: false }
    }

    pub fn marked(text: &'a str) -> Self {
        Self { text, highlighted: true }
    }
}

/// Join span texts back into one string.
pub fn concat(spans: &[Span<'_>]) -> String {
    spans.iter().map(|s| s.text).collect()
}

/// Split `text` into spans marking every occurrence of the query's include
/// terms. Exclude terms never highlight anything.
///
/// Terms are applied in order, each pass only scanning the plain spans left by
/// the previous ones, so where two terms overlap the earlier term wins.
/// Matching is case-insensitive and non-overlapping, left to right; the
/// highlighted text keeps its original case.
///
/// ```rust
/// use capsift::{highlight, ParsedQuery, Span};
///
/// let spans = highlight("GET /api/Error", &ParsedQuery::parse("error"));
/// assert_eq!(spans, [Span::plain("GET /api/"), Span::marked("Error")]);
/// ```
pub fn highlight<'a>(text: &'a str, query: &ParsedQuery) -> Vec<Span<'a>> {
    if text.is_empty() || query.include().is_empty() {
        return vec![Span::plain(text)];
    }

    query
        .include()
        .iter()
        .fold(vec![Span::plain(text)], |spans, term| {
            let needle: Vec<char> = term.to_lowercase().chars().collect();
            let mut out = Vec::with_capacity(spans.len());
            for span in spans {
                if span.highlighted {
                    out.push(span);
                } else {
                    split_plain(span.text, &needle, &mut out);
                }
            }
            out
        })
}

/// Split one plain run around every match of `needle`.
fn split_plain<'a>(text: &'a str, needle: &[char], out: &mut Vec<Span<'a>>) {
    let mut last = 0;

    while let Some((start, end)) = find_folded(text, needle, last) {
        if start > last {
            out.push(Span::plain(&text[last..start]));
        }
        out.push(Span::marked(&text[start..end]));
        last = end;
    }

    if last < text.len() {
        out.push(Span::plain(&text[last..]));
    }
}

/// Byte range of the first case-insensitive occurrence of `needle` in
/// `haystack` at or after byte offset `from`.
///
/// `needle` is already lower-cased. Each haystack char is compared through
/// its own lower-case expansion, so a match always starts and ends on a char
/// boundary of the original text.
fn find_folded(haystack: &str, needle: &[char], from: usize) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return None;
    }

    let tail = haystack.get(from..)?;
    tail.char_indices()
        .find_map(|(offset, _)| {
            let start = from + offset;
            match_len(&haystack[start..], needle).map(|len| (start, start + len))
        })
}

/// Length in bytes of the prefix of `text` whose lower-case form is exactly
/// `needle`, if any.
fn match_len(text: &str, needle: &[char]) -> Option<usize> {
    let mut pos = 0;
    let mut consumed = 0;

    for ch in text.chars() {
        for folded in ch.to_lowercase() {
            if pos == needle.len() || needle[pos] != folded {
                return None;
            }
            pos += 1;
        }
        consumed += ch.len_utf8();
        if pos == needle.len() {
            return Some(consumed);
        }
    }

    None
}
