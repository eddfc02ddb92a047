mod occurrences;
mod rotation;

pub use occurrences::Occurrences;
pub use rotation::is_cyclic_shift;

use std::slice;

use crate::observer::{NoopObserver, ScanObserver};
use crate::prefix::PrefixTable;

/// Knuth-Morris-Pratt matcher for a single pattern.
///
/// The pattern and its [`PrefixTable`] are computed once and never change,
/// so one matcher can scan any number of texts, from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher<T> {
    pattern: Vec<T>,
    prefix: PrefixTable,
}

impl<T: PartialEq> Matcher<T> {
    /// Create a matcher, building the prefix table once.
    pub fn new(pattern: impl Into<Vec<T>>) -> Self {
        Self::new_observed(pattern, NoopObserver)
    }

    /// Create a matcher, reporting prefix-table construction to `observer`.
    pub fn new_observed<O: ScanObserver>(pattern: impl Into<Vec<T>>, observer: O) -> Self {
        let pattern = pattern.into();
        let prefix = PrefixTable::build_observed(&pattern, observer);
        Self { pattern, prefix }
    }

    pub fn pattern(&self) -> &[T] {
        &self.pattern
    }

    pub fn prefix_table(&self) -> &PrefixTable {
        &self.prefix
    }

    /// Pattern length
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// Lazily iterate over every start index of the pattern in `text`.
    pub fn find_iter<'m, 't>(
        &'m self,
        text: &'t [T],
    ) -> Occurrences<'m, T, slice::Iter<'t, T>, NoopObserver> {
        self.find_iter_observed(text, NoopObserver)
    }

    /// Like [`find_iter`](Self::find_iter), reporting every transition.
    pub fn find_iter_observed<'m, 't, O: ScanObserver>(
        &'m self,
        text: &'t [T],
        observer: O,
    ) -> Occurrences<'m, T, slice::Iter<'t, T>, O> {
        self.scan(text.iter(), observer)
    }

    /// Scan any sequence of borrowed symbols, e.g. a chained or filtered view
    /// that is never materialized as a slice.
    pub fn scan<'m, 't, I, O>(&'m self, text: I, observer: O) -> Occurrences<'m, T, I::IntoIter, O>
    where
        T: 't,
        I: IntoIterator<Item = &'t T>,
        O: ScanObserver,
    {
        Occurrences::new(
            &self.pattern,
            self.prefix.as_slice(),
            text.into_iter(),
            observer,
        )
    }

    /// All start indices of the pattern in `text`, overlapping ones included,
    /// in increasing order.
    pub fn search_all(&self, text: &[T]) -> Vec<usize> {
        self.search_all_observed(text, NoopObserver)
    }

    pub fn search_all_observed<O: ScanObserver>(&self, text: &[T], observer: O) -> Vec<usize> {
        if self.pattern.len() > text.len() {
            return Vec::new();
        }
        self.find_iter_observed(text, observer).collect()
    }

    /// Start index of the leftmost occurrence, stopping the scan there.
    pub fn search_first(&self, text: &[T]) -> Option<usize> {
        self.search_first_observed(text, NoopObserver)
    }

    pub fn search_first_observed<O: ScanObserver>(&self, text: &[T], observer: O) -> Option<usize> {
        if self.pattern.len() > text.len() {
            return None;
        }
        self.find_iter_observed(text, observer).next()
    }

    /// Number of occurrences, overlapping ones included
    pub fn count(&self, text: &[T]) -> usize {
        if self.pattern.len() > text.len() {
            return 0;
        }
        self.find_iter(text).count()
    }

    pub fn contains(&self, text: &[T]) -> bool {
        self.search_first(text).is_some()
    }
}

impl From<&str> for Matcher<u8> {
    fn from(pattern: &str) -> Self {
        Self::new(pattern.as_bytes())
    }
}

impl From<&str> for Matcher<char> {
    fn from(pattern: &str) -> Self {
        Self::new(pattern.chars().collect::<Vec<_>>())
    }
}
