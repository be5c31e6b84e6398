//! Property-based tests for query parsing, matching and highlighting.

use std::collections::BTreeSet;

use capsift::{advance, concat, highlight, matches, ParsedQuery, Span};
use proptest::prelude::*;

/// Raw query strings built from short terms, separators, bangs and spaces.
fn raw_query() -> impl Strategy<Value = String> {
    prop::collection::vec("[ !]{0,2}[a-zA-Z0-9 ._-]{0,6}", 0..6).prop_map(|terms| terms.join("|"))
}

/// A single non-empty term with no separator, bang or surrounding space.
fn term() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9._-]{0,5}"
}

fn as_set(terms: &[String]) -> BTreeSet<&str> {
    terms.iter().map(String::as_str).collect()
}

proptest! {
    #[test]
    fn parsed_terms_are_trimmed_and_non_empty(raw in raw_query()) {
        let query = ParsedQuery::parse(&raw);
        for t in query.include().iter().chain(query.exclude()) {
            prop_assert!(!t.is_empty());
            prop_assert_eq!(t.trim(), t.as_str());
            prop_assert!(!t.contains('|'));
        }
        for t in query.include() {
            prop_assert!(!t.starts_with('!'));
        }
    }

    #[test]
    fn parse_is_idempotent_through_display(raw in raw_query()) {
        let query = ParsedQuery::parse(&raw);
        let reparsed = ParsedQuery::parse(&query.to_string());
        prop_assert_eq!(as_set(reparsed.include()), as_set(query.include()));
        prop_assert_eq!(as_set(reparsed.exclude()), as_set(query.exclude()));
    }

    #[test]
    fn exclude_only_query_accepts_non_matching_text(text in "[a-m ]{0,20}", excluded in "[n-z]{1,4}") {
        let query = ParsedQuery::from_terms(Vec::<String>::new(), [excluded]);
        prop_assert!(matches(&text, &query));
    }

    #[test]
    fn exclusion_takes_precedence(
        prefix in "[a-z ]{0,8}",
        include in term(),
        exclude in term(),
        suffix in "[a-z ]{0,8}",
    ) {
        let text = format!("{prefix}{include} {exclude}{suffix}");
        let query = ParsedQuery::from_terms([include], [exclude]);
        prop_assert!(!matches(&text, &query));
    }

    #[test]
    fn highlight_is_lossless(text in "\\PC{0,40}", raw in raw_query()) {
        let query = ParsedQuery::parse(&raw);
        let spans = highlight(&text, &query);
        prop_assert_eq!(concat(&spans), text);
    }

    #[test]
    fn highlight_without_occurrence_is_identity(text in "[a-m ]{0,30}", t in "[n-z]{1,5}") {
        let query = ParsedQuery::from_terms([t], Vec::<String>::new());
        prop_assert_eq!(highlight(&text, &query), vec![Span::plain(&text)]);
    }

    #[test]
    fn highlighted_runs_match_some_term(text in "[a-cA-C ]{0,30}", raw in "[a-c]{1,3}(\\|[a-cA-C]{1,3}){0,2}") {
        let query = ParsedQuery::parse(&raw);
        let terms: Vec<String> = query.include().iter().map(|t| t.to_lowercase()).collect();
        for span in highlight(&text, &query).into_iter().filter(|s| s.highlighted) {
            prop_assert!(terms.contains(&span.text.to_lowercase()));
        }
    }

    #[test]
    fn three_clicks_return_to_unsorted(column in "[a-z_]{1,10}") {
        let first = advance(None, &column);
        let second = advance(first.as_ref(), &column);
        prop_assert!(first.is_some() && second.is_some());
        prop_assert_eq!(advance(second.as_ref(), &column), None);
    }
}
