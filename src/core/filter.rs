// src/core/filter.rs

//! The filter/sort engine shared by every list screen.
//!
//! A screen owns a [`Criteria`] value; every time it changes the screen calls
//! [`apply`] over the full collection and renders whatever comes back. There is
//! no caching and no incremental diffing: the derived view is rebuilt from
//! scratch each time.

use chrono::{DateTime, NaiveDate, Utc};
use std::cmp::Ordering;
use std::str::FromStr;
use tracing::debug;

/// A single enum filter. `All` is the sentinel that disables the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }
}

impl<T: Clone + PartialEq> Selection<T> {
    /// Steps through `All`, then each option in order, then back to `All`.
    ///
    /// A selection that is no longer among `options` restarts at `All`.
    pub fn cycle(&self, options: &[T]) -> Selection<T> {
        let next_index = match self {
            Selection::All => 0,
            Selection::Only(current) => match options.iter().position(|o| o == current) {
                Some(i) => i + 1,
                None => return Selection::All,
            },
        };
        options
            .get(next_index)
            .cloned()
            .map(Selection::Only)
            .unwrap_or(Selection::All)
    }
}

/// A record type that can be narrowed and ordered by the engine.
pub trait Record {
    /// The enum selections a screen offers for this record type.
    type Filters: Default + PartialEq;
    /// The orderings a screen offers. `Default` is the screen's initial sort.
    type SortKey: Copy + Default + PartialEq + FromStr;

    /// Fields the free-text query is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Whether the record satisfies every active enum selection.
    fn passes(&self, filters: &Self::Filters) -> bool;

    /// Ordering of `self` relative to `other` in the derived view.
    fn compare(&self, other: &Self, key: Self::SortKey) -> Ordering;
}

/// Everything a list screen can narrow or order by.
pub struct Criteria<R: Record> {
    pub query: String,
    pub filters: R::Filters,
    /// `None` keeps input order.
    pub sort: Option<R::SortKey>,
}

impl<R: Record> Default for Criteria<R> {
    fn default() -> Self {
        Self {
            query: String::new(),
            filters: R::Filters::default(),
            sort: Some(R::SortKey::default()),
        }
    }
}

impl<R: Record> Criteria<R> {
    /// Restores every criterion to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        self.query.is_empty()
            && self.filters == R::Filters::default()
            && self.sort == Some(R::SortKey::default())
    }

    /// Selects a sort by its wire name (`"date"`, `"cvssScore"`, ...).
    ///
    /// Unknown names fall back to input order rather than failing.
    pub fn sort_by_name(&mut self, name: &str) {
        self.sort = R::SortKey::from_str(name).ok();
        if self.sort.is_none() {
            debug!(sort = name, "Unknown sort key, keeping input order.");
        }
    }
}

/// Derives the ordered view of `records` under `criteria`.
///
/// Filtering is conjunctive across the query and every enum selection. The
/// sort is stable, so records that compare equal keep their input order.
pub fn apply<'a, R: Record + 'a>(
    records: impl IntoIterator<Item = &'a R>,
    criteria: &Criteria<R>,
) -> Vec<&'a R> {
    let needle = criteria.query.to_lowercase();
    let mut view: Vec<&'a R> = records
        .into_iter()
        .filter(|record| matches_query(*record, &needle) && record.passes(&criteria.filters))
        .collect();

    if let Some(key) = criteria.sort {
        view.sort_by(|a, b| a.compare(b, key));
    }
    view
}

/// Case-insensitive substring test over the record's searchable fields.
/// `needle` must already be lowercase; an empty needle matches everything.
fn matches_query<R: Record>(record: &R, needle: &str) -> bool {
    needle.is_empty()
        || record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Parses an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Newest first. Missing or unparseable dates count as the earliest possible.
pub fn newest_first(a: &str, b: &str) -> Ordering {
    parse_timestamp(b).cmp(&parse_timestamp(a))
}

/// Largest first.
pub fn descending<T: Ord>(a: T, b: T) -> Ordering {
    b.cmp(&a)
}

/// Distinct values in first-seen order, used for data-driven option lists.
pub fn distinct<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&'a str> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, PartialEq)]
    struct Note {
        title: &'static str,
        date: &'static str,
        rank: u8,
    }

    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    enum NoteSort {
        #[default]
        Date,
        Rank,
    }

    impl FromStr for NoteSort {
        type Err = ();
        fn from_str(s: &str) -> Result<Self, ()> {
            match s {
                "date" => Ok(NoteSort::Date),
                "rank" => Ok(NoteSort::Rank),
                _ => Err(()),
            }
        }
    }

    impl Record for Note {
        type Filters = Selection<u8>;
        type SortKey = NoteSort;

        fn search_fields(&self) -> Vec<&str> {
            vec![self.title]
        }

        fn passes(&self, filters: &Self::Filters) -> bool {
            filters.admits(&self.rank)
        }

        fn compare(&self, other: &Self, key: NoteSort) -> Ordering {
            match key {
                NoteSort::Date => newest_first(self.date, other.date),
                NoteSort::Rank => descending(self.rank, other.rank),
            }
        }
    }

    fn notes() -> Vec<Note> {
        vec![
            Note { title: "alpha", date: "2024-01-02", rank: 1 },
            Note { title: "Beta", date: "not a date", rank: 2 },
            Note { title: "gamma", date: "2024-01-03T08:00:00Z", rank: 1 },
            Note { title: "delta", date: "", rank: 2 },
        ]
    }

    fn titles(view: &[&Note]) -> Vec<&'static str> {
        view.iter().map(|n| n.title).collect()
    }

    #[test]
    fn selection_cycles_through_options_and_back_to_all() {
        let options = ["a", "b"];
        let s = Selection::All;
        let s = s.cycle(&options);
        assert_eq!(s, Selection::Only("a"));
        let s = s.cycle(&options);
        assert_eq!(s, Selection::Only("b"));
        assert_eq!(s.cycle(&options), Selection::All);
        assert_eq!(Selection::Only("zzz").cycle(&options), Selection::All);
    }

    #[test]
    fn unparseable_dates_sort_as_earliest_and_keep_input_order() {
        let notes = notes();
        let view = apply(&notes, &Criteria::default());
        assert_eq!(titles(&view), vec!["gamma", "alpha", "Beta", "delta"]);
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let notes = notes();
        let mut criteria = Criteria::<Note>::default();
        criteria.query = "BET".into();
        assert_eq!(titles(&apply(&notes, &criteria)), vec!["Beta"]);
    }

    #[test]
    fn filters_and_query_are_conjunctive() {
        let notes = notes();
        let mut criteria = Criteria::<Note>::default();
        criteria.filters = Selection::Only(1);
        criteria.query = "a".into();
        assert_eq!(titles(&apply(&notes, &criteria)), vec!["gamma", "alpha"]);
        criteria.query = "beta".into();
        assert!(apply(&notes, &criteria).is_empty());
    }

    #[test]
    fn unknown_sort_name_keeps_input_order() {
        let notes = notes();
        let mut criteria = Criteria::<Note>::default();
        criteria.sort_by_name("popularity");
        assert_eq!(criteria.sort, None);
        assert_eq!(titles(&apply(&notes, &criteria)), vec!["alpha", "Beta", "gamma", "delta"]);

        criteria.sort_by_name("rank");
        assert_eq!(titles(&apply(&notes, &criteria)), vec!["Beta", "delta", "alpha", "gamma"]);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut criteria = Criteria::<Note>::default();
        assert!(criteria.is_default());
        criteria.query = "x".into();
        criteria.filters = Selection::Only(2);
        criteria.sort = None;
        assert!(!criteria.is_default());
        criteria.reset();
        assert!(criteria.is_default());
    }

    #[test]
    fn timestamps_accept_rfc3339_and_plain_dates() {
        assert!(parse_timestamp("2024-01-15T10:30:00Z").is_some());
        assert_eq!(
            parse_timestamp("2024-01-15"),
            parse_timestamp("2024-01-15T00:00:00Z")
        );
        assert!(parse_timestamp("15/01/2024").is_none());
    }

    #[test]
    fn distinct_keeps_first_seen_order() {
        assert_eq!(distinct(["b", "a", "b", "c", "a"]), vec!["b", "a", "c"]);
    }
}
