use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Term separator in a raw query string.
pub const TERM_SEPARATOR: char = '|';

/// Prefix that turns a term into an exclusion.
pub const EXCLUDE_PREFIX: char = '!';

// ---------------------------------------------------------------------------
// ParsedQuery
// ---------------------------------------------------------------------------

/// A raw query split into include and exclude terms.
///
/// Produced by [`ParsedQuery::parse`]. Both lists hold trimmed, non-empty
/// terms in the order they were typed; duplicates are kept.
///
/// # Example
///
/// ```rust
/// use capsift::ParsedQuery;
///
/// let query = ParsedQuery::parse("error | 200 | !image");
/// assert_eq!(query.include(), ["error", "200"]);
/// assert_eq!(query.exclude(), ["image"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedQuery {
    include: Vec<String>,
    exclude: Vec<String>,
}

impl ParsedQuery {
    /// Parse `raw` into include and exclude terms. Never fails.
    ///
    /// A lone `!` has nothing left to exclude and is dropped.
    pub fn parse(raw: &str) -> Self {
        let mut query = Self::default();

        for term in raw.split(TERM_SEPARATOR).map(str::trim).filter(|t| !t.is_empty()) {
            match term.strip_prefix(EXCLUDE_PREFIX) {
                Some(rest) => {
                    let rest = rest.trim();
                    if !rest.is_empty() {
                        query.exclude.push(rest.to_owned());
                    }
                }
                None => query.include.push(term.to_owned()),
            }
        }

        query
    }

    /// Build a query from already-split term lists.
    ///
    /// Terms go through the same trimming and empty-dropping as [`parse`](Self::parse).
    pub fn from_terms<I, E>(include: I, exclude: E) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        let clean = |t: &str| {
            let t = t.trim();
            (!t.is_empty()).then(|| t.to_owned())
        };
        Self {
            include: include.into_iter().filter_map(|t| clean(t.as_ref())).collect(),
            exclude: exclude.into_iter().filter_map(|t| clean(t.as_ref())).collect(),
        }
    }

    /// Terms a record must contain (at least one of them).
    pub fn include(&self) -> &[String] {
        &self.include
    }

    /// Terms that veto a record wherever they appear.
    pub fn exclude(&self) -> &[String] {
        &self.exclude
    }

    /// `true` when there is nothing to include or exclude.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
}

/// Shorthand for [`ParsedQuery::parse`].
pub fn parse(raw: &str) -> ParsedQuery {
    ParsedQuery::parse(raw)
}

impl FromStr for ParsedQuery {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// Re-serializes the query: include terms first, then `!`-prefixed exclusions,
/// joined by `" | "`. Parsing the output yields the same query.
impl fmt::Display for ParsedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let terms = self
            .include
            .iter()
            .map(|t| (false, t))
            .chain(self.exclude.iter().map(|t| (true, t)));

        for (excluded, term) in terms {
            if !first {
                write!(f, " {TERM_SEPARATOR} ")?;
            }
            first = false;
            if excluded {
                write!(f, "{EXCLUDE_PREFIX}")?;
            }
            f.write_str(term)?;
        }
        Ok(())
    }
}
