// polarview-core/src/domain/legislature/term.rs

use serde::Serialize;

/// Number of complete terms kept in scope.
pub const SCOPE_TERMS: u32 = 15;

// Year anchor: the 100th Congress convened in 1987.
const ANCHOR_TERM: i64 = 100;
const ANCHOR_START_YEAR: i64 = 1987;

/// The inclusive range of terms in scope: the most recent complete terms
/// before the newest one present in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermWindow {
    pub first: u32,
    pub last: u32,
}

impl TermWindow {
    /// Derives the scope window from the terms present in the *unfiltered*
    /// load. The maximum term is treated as incomplete and excluded; up to
    /// `SCOPE_TERMS` terms before it are kept. Returns `None` when the
    /// input carries no terms at all.
    pub fn from_terms<I>(terms: I) -> Option<Self>
    where
        I: IntoIterator<Item = u32>,
    {
        let newest = terms.into_iter().max()?;
        let last = newest.checked_sub(1)?;
        let first = newest.saturating_sub(SCOPE_TERMS);
        Some(TermWindow { first, last })
    }

    pub fn contains(&self, term: u32) -> bool {
        self.first <= term && term <= self.last
    }
}

/// Calendar years of a term, derived purely from its index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermYears {
    pub start: i64,
    pub end: i64,
    /// Display label, e.g. "1987-89".
    pub label: String,
}

impl TermYears {
    pub fn from_term(term: u32) -> Self {
        let start = ANCHOR_START_YEAR + 2 * (i64::from(term) - ANCHOR_TERM);
        let end = start + 2;
        let label = format!("{}-{:02}", start, end.rem_euclid(100));
        TermYears { start, end, label }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_window_excludes_newest_term() {
        let window = TermWindow::from_terms([113, 114, 115]).unwrap();
        assert_eq!(window, TermWindow { first: 100, last: 114 });
        assert!(window.contains(100));
        assert!(window.contains(114));
        assert!(!window.contains(115));
        assert!(!window.contains(99));
    }

    #[test]
    fn test_window_empty_input() {
        assert_eq!(TermWindow::from_terms(Vec::<u32>::new()), None);
    }

    #[test]
    fn test_window_sparse_input_yields_fewer_terms() {
        // Only three terms exist: the window still spans 15 back, the
        // missing ones simply contribute no rows.
        let window = TermWindow::from_terms([5, 6, 7]).unwrap();
        assert_eq!(window, TermWindow { first: 0, last: 6 });
    }

    #[test]
    fn test_years_anchor_term() {
        let years = TermYears::from_term(100);
        assert_eq!(years.start, 1987);
        assert_eq!(years.end, 1989);
        assert_eq!(years.label, "1987-89");
    }

    #[test]
    fn test_years_modern_term() {
        let years = TermYears::from_term(115);
        assert_eq!(years.start, 2017);
        assert_eq!(years.end, 2019);
        assert_eq!(years.label, "2017-19");
    }

    #[test]
    fn test_years_before_anchor() {
        // The formula extrapolates backwards: the 1st Congress sat in 1789.
        let years = TermYears::from_term(1);
        assert_eq!(years.start, 1789);
        assert_eq!(years.label, "1789-91");
    }

    #[test]
    fn test_label_pads_two_digit_year() {
        let years = TermYears::from_term(106);
        assert_eq!(years.start, 1999);
        assert_eq!(years.end, 2001);
        assert_eq!(years.label, "1999-01");
    }
}
