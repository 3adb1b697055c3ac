// SPDX-License-Identifier: MPL-2.0
//! Row search and filtering shared by the portal tables.
//!
//! Every table in the portal combines two predicates with AND logic:
//!
//! - a free-text query, matched case-insensitively as a substring of a
//!   fixed set of fields ([`Searchable`])
//! - a dropdown selection, matched by equality on one category field
//!   ([`Categorized`])
//!
//! An empty query and [`Selection::All`] both match every row.

/// A record that exposes the fields the free-text search looks at.
pub trait Searchable {
    /// Fields matched against the search query, in display order.
    fn search_fields(&self) -> Vec<&str>;
}

/// A record with a single category used by the dropdown filter.
pub trait Categorized {
    type Category: Copy + Eq;

    fn category(&self) -> Self::Category;
}

/// Dropdown selection: either every category or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: Copy + Eq> Selection<T> {
    /// Returns `true` if `category` passes this selection.
    #[must_use]
    pub fn accepts(&self, category: T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => *expected == category,
        }
    }

    /// Returns `true` if this selection narrows the rows (not `All`).
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Selection::Only(_))
    }
}

/// Returns `true` if `needle` occurs in `haystack`, ignoring case.
///
/// An empty needle matches everything.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Combined search query and dropdown selection for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFilter<T> {
    /// Raw query as typed by the user.
    pub query: String,
    /// Dropdown selection.
    pub selection: Selection<T>,
}

impl<T> Default for RowFilter<T> {
    fn default() -> Self {
        Self {
            query: String::new(),
            selection: Selection::All,
        }
    }
}

impl<T: Copy + Eq> RowFilter<T> {
    /// Creates a filter that matches every row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the row passes both the query and the selection.
    pub fn matches<R>(&self, row: &R) -> bool
    where
        R: Searchable + Categorized<Category = T>,
    {
        self.matches_query(row) && self.selection.accepts(row.category())
    }

    /// Returns `true` if the row passes the query alone.
    pub fn matches_query<R: Searchable>(&self, row: &R) -> bool {
        self.query.is_empty()
            || row
                .search_fields()
                .iter()
                .any(|field| contains_ignore_case(field, &self.query))
    }

    /// Returns the rows passing the filter, preserving their order.
    pub fn apply<'a, R>(&self, rows: &'a [R]) -> Vec<&'a R>
    where
        R: Searchable + Categorized<Category = T>,
    {
        rows.iter().filter(|row| self.matches(*row)).collect()
    }

    /// Returns `true` if either predicate narrows the rows.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.selection.is_active()
    }

    /// Resets both predicates.
    pub fn clear(&mut self) {
        self.query.clear();
        self.selection = Selection::All;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Colour {
        Red,
        Blue,
    }

    struct Row {
        code: &'static str,
        label: &'static str,
        hidden: &'static str,
        colour: Colour,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.code, self.label]
        }
    }

    impl Categorized for Row {
        type Category = Colour;

        fn category(&self) -> Colour {
            self.colour
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                code: "AB-1",
                label: "Steel Pipes",
                hidden: "warehouse",
                colour: Colour::Red,
            },
            Row {
                code: "AB-2",
                label: "Copper Wire",
                hidden: "warehouse",
                colour: Colour::Blue,
            },
            Row {
                code: "CD-3",
                label: "Steel Beams",
                hidden: "yard",
                colour: Colour::Blue,
            },
        ]
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = RowFilter::<Colour>::new();
        assert_eq!(filter.apply(&rows()).len(), 3);
        assert!(!filter.is_active());
    }

    #[test]
    fn query_is_case_insensitive() {
        let filter = RowFilter::<Colour> {
            query: "sTEEL".into(),
            selection: Selection::All,
        };
        let codes: Vec<_> = filter.apply(&rows()).iter().map(|r| r.code).collect();
        assert_eq!(codes, vec!["AB-1", "CD-3"]);
    }

    #[test]
    fn query_only_looks_at_designated_fields() {
        let rows = rows();
        assert_eq!(rows[0].hidden, "warehouse");
        let filter = RowFilter::<Colour> {
            query: "warehouse".into(),
            selection: Selection::All,
        };
        assert!(filter.apply(&rows).is_empty());
    }

    #[test]
    fn query_matches_any_designated_field() {
        let filter = RowFilter::<Colour> {
            query: "ab-".into(),
            selection: Selection::All,
        };
        assert_eq!(filter.apply(&rows()).len(), 2);
    }

    #[test]
    fn selection_and_query_are_conjunctive() {
        let filter = RowFilter {
            query: "steel".into(),
            selection: Selection::Only(Colour::Blue),
        };
        let codes: Vec<_> = filter.apply(&rows()).iter().map(|r| r.code).collect();
        assert_eq!(codes, vec!["CD-3"]);
    }

    #[test]
    fn selection_without_query_filters_by_category() {
        let filter = RowFilter {
            query: String::new(),
            selection: Selection::Only(Colour::Red),
        };
        assert_eq!(filter.apply(&rows()).len(), 1);
        assert!(filter.is_active());
    }

    #[test]
    fn clear_resets_both_predicates() {
        let mut filter = RowFilter {
            query: "x".into(),
            selection: Selection::Only(Colour::Red),
        };
        filter.clear();
        assert_eq!(filter, RowFilter::new());
    }

    #[test]
    fn query_matching_follows_contains_ignore_case() {
        let filter = RowFilter::<Colour> {
            query: "PIPES".into(),
            selection: Selection::All,
        };
        for row in &rows() {
            let expected = row
                .search_fields()
                .iter()
                .any(|field| contains_ignore_case(field, &filter.query));
            assert_eq!(filter.matches_query(row), expected, "{}", row.code);
        }
        assert_eq!(filter.apply(&rows()).len(), 1);
    }

    #[test]
    fn contains_ignore_case_handles_empty_needle() {
        assert!(contains_ignore_case("anything", ""));
        assert!(contains_ignore_case("Rotterdam, NL", "rotter"));
        assert!(!contains_ignore_case("Rotterdam, NL", "berlin"));
    }
}
