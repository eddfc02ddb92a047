/// A single state transition of prefix-table construction or of a scan.
///
/// Positions are 0-based indices: `text_pos` into the scanned text,
/// `pattern_pos` and `index` into the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanEvent {
    /// Construction: mismatch at `index`, candidate border shrinks `from -> to`
    PrefixBacktrack { index: usize, from: usize, to: usize },
    /// Construction: candidate border at `index` grew to `len`
    PrefixExtend { index: usize, len: usize },
    /// Construction: `prefix[index] = value`
    PrefixSet { index: usize, value: usize },
    /// Scan: `text[text_pos]` is about to be compared with `pattern[pattern_pos]`
    Compare { text_pos: usize, pattern_pos: usize },
    /// Scan: mismatch at `text_pos`, matched length falls back `from -> to`
    Backtrack { text_pos: usize, from: usize, to: usize },
    /// Scan: `text[text_pos]` extended the matched length to `matched`
    Advance { text_pos: usize, matched: usize },
    /// Scan: a full occurrence starts at `start`
    Match { start: usize },
}

impl ScanEvent {
    /// Whether the event was produced while building the prefix table
    pub fn is_construction(&self) -> bool {
        matches!(
            self,
            ScanEvent::PrefixBacktrack { .. }
                | ScanEvent::PrefixExtend { .. }
                | ScanEvent::PrefixSet { .. }
        )
    }
}
