use std::ops::Index;

use crate::observer::{NoopObserver, ScanObserver};
use crate::types::ScanEvent;

/// KMP failure function of a pattern.
///
/// Entry `i` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it. The table is index-aligned with the pattern,
/// so `table[0] == 0` and `table[i] <= i` always hold.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrefixTable {
    entries: Vec<usize>,
}

impl PrefixTable {
    /// Build the table for `pattern` in a single amortized linear pass.
    pub fn build<T: PartialEq>(pattern: &[T]) -> Self {
        Self::build_observed(pattern, NoopObserver)
    }

    /// Build the table, reporting every backtrack, extension and entry.
    pub fn build_observed<T, O>(pattern: &[T], mut observer: O) -> Self
    where
        T: PartialEq,
        O: ScanObserver,
    {
        let mut entries = vec![0; pattern.len()];
        if pattern.is_empty() {
            return Self { entries };
        }
        observer.on_event(ScanEvent::PrefixSet { index: 0, value: 0 });

        // Each backtrack strictly shrinks k and k grows by at most one per
        // index, so the inner loop runs fewer than pattern.len() times overall.
        let mut k = 0;
        for i in 1..pattern.len() {
            while k > 0 && pattern[k] != pattern[i] {
                let to = entries[k - 1];
                observer.on_event(ScanEvent::PrefixBacktrack {
                    index: i,
                    from: k,
                    to,
                });
                k = to;
            }
            if pattern[k] == pattern[i] {
                k += 1;
                observer.on_event(ScanEvent::PrefixExtend { index: i, len: k });
            }
            entries[i] = k;
            observer.on_event(ScanEvent::PrefixSet { index: i, value: k });
        }

        Self { entries }
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<usize> {
        self.entries.get(index).copied()
    }

    /// Length of the longest border of the whole pattern (0 when empty)
    pub fn longest_border(&self) -> usize {
        self.entries.last().copied().unwrap_or(0)
    }

    /// Shortest period of the pattern: the smallest `p > 0` with
    /// `pattern[i] == pattern[i + p]` wherever both sides exist.
    pub fn period(&self) -> usize {
        self.len() - self.longest_border()
    }
}

impl Index<usize> for PrefixTable {
    type Output = usize;

    fn index(&self, index: usize) -> &usize {
        &self.entries[index]
    }
}

impl AsRef<[usize]> for PrefixTable {
    fn as_ref(&self) -> &[usize] {
        &self.entries
    }
}
