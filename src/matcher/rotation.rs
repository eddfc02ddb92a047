use super::Matcher;
use crate::observer::{NoopObserver, ScanObserver};

impl<T: PartialEq> Matcher<T> {
    /// If the pattern is `original` rotated left by `j` positions, return the
    /// smallest such `j`.
    ///
    /// A rotation of `original` is exactly a window of `original + original`
    /// starting before `original.len()`, so this is one scan of the doubled
    /// text. The doubled text is never allocated.
    pub fn cyclic_shift_of(&self, original: &[T]) -> Option<usize> {
        self.cyclic_shift_of_observed(original, NoopObserver)
    }

    pub fn cyclic_shift_of_observed<O: ScanObserver>(
        &self,
        original: &[T],
        observer: O,
    ) -> Option<usize> {
        let n = original.len();
        if self.len() != n {
            return None;
        }
        self.scan(original.iter().chain(original.iter()), observer)
            .next()
            .filter(|&j| j < n)
    }
}

/// Return `Some(j)` when `a` is `b` rotated left by `j` positions, with `j`
/// the smallest such shift, and `None` otherwise (including when the lengths
/// differ).
///
/// Two empty sequences report `None`: no shift `j < 0` exists.
pub fn is_cyclic_shift<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Option<usize> {
    if a.len() != b.len() {
        return None;
    }
    Matcher::new(a).cyclic_shift_of(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::EventLog;

    fn rotate_left(s: &[u8], k: usize) -> Vec<u8> {
        let mut v = s.to_vec();
        v.rotate_left(k);
        v
    }

    #[test]
    fn test_simple_shift() {
        assert_eq!(is_cyclic_shift(b"cdab", b"abcd"), Some(2));
        assert_eq!(is_cyclic_shift(b"bcdea", b"abcde"), Some(1));
    }

    #[test]
    fn test_identity_is_shift_zero() {
        assert_eq!(is_cyclic_shift(b"abcd", b"abcd"), Some(0));
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(is_cyclic_shift(b"ab", b"abc"), None);
        assert_eq!(is_cyclic_shift(b"abc", b"ab"), None);
    }

    #[test]
    fn test_not_a_rotation() {
        assert_eq!(is_cyclic_shift(b"abdc", b"abcd"), None);
        assert_eq!(is_cyclic_shift(b"aab", b"abb"), None);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(is_cyclic_shift::<u8>(b"", b""), None);
    }

    #[test]
    fn test_periodic_reports_smallest_shift() {
        // "abab" rotated by 2 is itself
        assert_eq!(is_cyclic_shift(b"abab", b"abab"), Some(0));
        assert_eq!(is_cyclic_shift(b"baba", b"abab"), Some(1));
        assert_eq!(is_cyclic_shift(b"aaaa", b"aaaa"), Some(0));

        let b = b"abcabcabc";
        for k in 0..b.len() {
            assert_eq!(is_cyclic_shift(&rotate_left(b, k), b), Some(k % 3));
        }
    }

    #[test]
    fn test_every_rotation_round_trips() {
        let b = b"kmp-rotation";
        for k in 0..b.len() {
            let a = rotate_left(b, k);
            assert_eq!(is_cyclic_shift(&a, b), Some(k), "shift {}", k);
        }
    }

    #[test]
    fn test_matcher_method_reuses_pattern() {
        let m = Matcher::<u8>::from("lohel");
        assert_eq!(m.cyclic_shift_of(b"hello"), Some(3));
        assert_eq!(m.cyclic_shift_of(b"world"), None);
        assert_eq!(m.cyclic_shift_of(b"hell"), None);
    }

    #[test]
    fn test_scan_stays_within_doubled_text() {
        let m = Matcher::<u8>::from("cab");
        let mut log = EventLog::new();
        assert_eq!(m.cyclic_shift_of_observed(b"abc", &mut log), Some(2));
        // the match completes at index 4 of "abcabc"
        assert!(log
            .events()
            .iter()
            .all(|e| !matches!(e, crate::types::ScanEvent::Compare { text_pos, .. } if *text_pos > 4)));
    }
}
