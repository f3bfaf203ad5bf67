//! Free-text search and categorical filtering over a store.
//!
//! Filtering is synchronous and recomputed from scratch on every call; no
//! debounce or caching sits between input changes and results.

use shared_types::FILTER_ALL;

/// A record kind that can be searched and filtered.
pub trait Filterable {
    /// Categorical axes this kind can be filtered on.
    type Axis: Copy + Eq + std::fmt::Debug;

    /// Text fields consulted by free-text search.
    fn search_fields(&self) -> Vec<&str>;

    /// Whether the record passes the categorical filter `axis == value`.
    fn matches_category(&self, axis: Self::Axis, value: &str) -> bool;
}

/// Axis type for kinds without categorical filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoAxis {}

/// True when a categorical value means "no filtering on this axis".
pub fn is_pass_through(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case(FILTER_ALL)
}

/// Case-insensitive substring match.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Current query plus categorical selections for one list.
#[derive(Debug, Clone)]
pub struct Filter<T: Filterable> {
    query: String,
    categories: Vec<(T::Axis, String)>,
}

impl<T: Filterable> Default for Filter<T> {
    fn default() -> Self {
        Self {
            query: String::new(),
            categories: Vec::new(),
        }
    }
}

impl<T: Filterable> Filter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Selected value for `axis`, or `""` when unset.
    pub fn category(&self, axis: T::Axis) -> &str {
        self.categories
            .iter()
            .find(|(a, _)| *a == axis)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// Select `value` on `axis`. Pass-through values clear the axis.
    pub fn set_category(&mut self, axis: T::Axis, value: impl Into<String>) {
        let value = value.into();
        self.categories.retain(|(a, _)| *a != axis);
        if !is_pass_through(&value) {
            self.categories.push((axis, value));
        }
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.categories.clear();
    }

    /// Whether any axis or the query narrows the result.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.categories.is_empty()
    }

    /// Whether `record` passes, with `related` supplying extra searchable
    /// text resolved from other stores.
    pub fn matches(&self, record: &T, related: &[String]) -> bool {
        let text_ok = self.query.is_empty() || {
            let needle = self.query.to_lowercase();
            record
                .search_fields()
                .into_iter()
                .chain(related.iter().map(String::as_str))
                .any(|field| field.to_lowercase().contains(&needle))
        };
        text_ok
            && self
                .categories
                .iter()
                .all(|(axis, value)| record.matches_category(*axis, value))
    }

    /// Records passing the filter, in store order.
    pub fn apply<'a>(&self, records: &'a [T]) -> Vec<&'a T> {
        self.apply_with(records, |_| Vec::new())
    }

    /// Like [`Filter::apply`], additionally searching text from `related`.
    pub fn apply_with<'a, F>(&self, records: &'a [T], related: F) -> Vec<&'a T>
    where
        F: Fn(&T) -> Vec<String>,
    {
        let matched: Vec<&T> = records
            .iter()
            .filter(|r| {
                if self.query.is_empty() {
                    self.matches(r, &[])
                } else {
                    self.matches(r, &related(r))
                }
            })
            .collect();
        tracing::debug!(
            query = %self.query,
            total = records.len(),
            matched = matched.len(),
            "filter applied"
        );
        matched
    }
}
