use std::iter::FusedIterator;

use crate::observer::ScanObserver;
use crate::types::ScanEvent;

/// Lazy iterator over the start indices of a pattern in a text.
///
/// Created by [`Matcher::find_iter`](super::Matcher::find_iter). Each call to
/// `next` resumes the scan where the previous occurrence left off, so the
/// whole iteration is linear in the text length. Overlapping occurrences are
/// all reported, in increasing order.
pub struct Occurrences<'m, T, I, O> {
    pattern: &'m [T],
    prefix: &'m [usize],
    text: I,
    /// Index of the next text symbol to read
    pos: usize,
    /// Pattern symbols matched ending just before `pos`
    matched: usize,
    done: bool,
    observer: O,
}

impl<'m, T, I, O> Occurrences<'m, T, I, O> {
    pub(super) fn new(pattern: &'m [T], prefix: &'m [usize], text: I, observer: O) -> Self {
        Self {
            pattern,
            prefix,
            text,
            pos: 0,
            matched: 0,
            done: false,
            observer,
        }
    }

    /// Number of text symbols consumed so far
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Give back the observer, e.g. to inspect what it recorded
    pub fn into_observer(self) -> O {
        self.observer
    }
}

impl<'m, 't, T, I, O> Occurrences<'m, T, I, O>
where
    T: PartialEq + 't,
    I: Iterator<Item = &'t T>,
    O: ScanObserver,
{
    /// The empty pattern occurs at every boundary, including the end of text.
    fn next_empty(&mut self) -> Option<usize> {
        let at = self.pos;
        if self.text.next().is_some() {
            self.pos += 1;
        } else {
            self.done = true;
        }
        self.observer.on_event(ScanEvent::Match { start: at });
        Some(at)
    }
}

impl<'m, 't, T, I, O> Iterator for Occurrences<'m, T, I, O>
where
    T: PartialEq + 't,
    I: Iterator<Item = &'t T>,
    O: ScanObserver,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.done {
            return None;
        }
        if self.pattern.is_empty() {
            return self.next_empty();
        }

        let len = self.pattern.len();
        let mut k = self.matched;

        for symbol in self.text.by_ref() {
            let i = self.pos;
            self.pos += 1;
            self.observer.on_event(ScanEvent::Compare {
                text_pos: i,
                pattern_pos: k,
            });

            while k > 0 && self.pattern[k] != *symbol {
                let to = self.prefix[k - 1];
                self.observer.on_event(ScanEvent::Backtrack {
                    text_pos: i,
                    from: k,
                    to,
                });
                k = to;
            }
            if self.pattern[k] == *symbol {
                k += 1;
                self.observer.on_event(ScanEvent::Advance {
                    text_pos: i,
                    matched: k,
                });
            }
            if k == len {
                // k == len implies i + 1 >= len
                let start = i + 1 - len;
                self.observer.on_event(ScanEvent::Match { start });
                self.matched = self.prefix[k - 1];
                return Some(start);
            }
        }

        self.matched = k;
        self.done = true;
        None
    }
}

impl<'m, 't, T, I, O> FusedIterator for Occurrences<'m, T, I, O>
where
    T: PartialEq + 't,
    I: Iterator<Item = &'t T>,
    O: ScanObserver,
{
}
