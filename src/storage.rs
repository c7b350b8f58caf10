//! The shared integer collection the domain commands operate on.
//!
//! One `NumberStore` instance is created at startup and passed by mutable
//! reference into every handler, so the dependency is visible and easy to
//! substitute in tests.

/// An ordered collection of integers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NumberStore {
    values: Vec<i64>,
}

impl NumberStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// All values joined by `separator`, in order.
    pub fn join(&self, separator: &str) -> String {
        self.values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn push(&mut self, value: i64) {
        self.values.push(value);
    }

    /// Remove and return the value at `index`, or `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<i64> {
        if index < self.values.len() {
            Some(self.values.remove(index))
        } else {
            None
        }
    }

    /// Remove every value in `[start, stop)`, clamped to the collection.
    ///
    /// An empty or inverted range removes nothing; this mirrors slice
    /// deletion semantics rather than erroring.
    pub fn remove_range(&mut self, start: usize, stop: usize) {
        let len = self.values.len();
        let start = start.min(len);
        let stop = stop.min(len).max(start);
        self.values.drain(start..stop);
    }

    /// First position holding `value`.
    pub fn position(&self, value: i64) -> Option<usize> {
        self.values.iter().position(|&v| v == value)
    }

    /// Insert `value` before `index`, clamped to the end of the collection.
    pub fn insert(&mut self, index: usize, value: i64) {
        let index = index.min(self.values.len());
        self.values.insert(index, value);
    }

    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    /// Drop duplicate values, keeping the first occurrence of each.
    pub fn dedup(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.values.retain(|v| seen.insert(*v));
    }

    pub fn extend(&mut self, values: impl IntoIterator<Item = i64>) {
        self.values.extend(values);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
