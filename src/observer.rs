//! Instrumentation hooks for construction and scanning.
//!
//! Every algorithm entry point has an `_observed` variant that reports each
//! state transition to a [`ScanObserver`]. The plain variants use
//! [`NoopObserver`], which compiles down to nothing.

use crate::types::ScanEvent;

/// Receives state transitions from the prefix-table builder and the scanner
pub trait ScanObserver {
    fn on_event(&mut self, event: ScanEvent);
}

impl<O: ScanObserver + ?Sized> ScanObserver for &mut O {
    fn on_event(&mut self, event: ScanEvent) {
        (**self).on_event(event);
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {
    #[inline]
    fn on_event(&mut self, _event: ScanEvent) {}
}

/// Observer that emits every event as a `tracing` trace event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ScanObserver for TracingObserver {
    fn on_event(&mut self, event: ScanEvent) {
        match event {
            ScanEvent::PrefixBacktrack { index, from, to } => {
                tracing::trace!(index, from, to, "prefix mismatch, backtracking");
            }
            ScanEvent::PrefixExtend { index, len } => {
                tracing::trace!(index, len, "prefix border extended");
            }
            ScanEvent::PrefixSet { index, value } => {
                tracing::trace!(index, value, "prefix entry set");
            }
            ScanEvent::Compare {
                text_pos,
                pattern_pos,
            } => {
                tracing::trace!(text_pos, pattern_pos, "checking");
            }
            ScanEvent::Backtrack { text_pos, from, to } => {
                tracing::trace!(text_pos, from, to, "mismatch, backtracking");
            }
            ScanEvent::Advance { text_pos, matched } => {
                tracing::trace!(text_pos, matched, "match extended");
            }
            ScanEvent::Match { start } => {
                tracing::trace!(start, "pattern found");
            }
        }
    }
}

/// Observer that records every event in order
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<ScanEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events, oldest first
    pub fn events(&self) -> &[ScanEvent] {
        &self.events
    }

    /// Number of backtracking steps recorded, construction and scan combined
    pub fn backtracks(&self) -> usize {
        self.events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    ScanEvent::Backtrack { .. } | ScanEvent::PrefixBacktrack { .. }
                )
            })
            .count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn into_events(self) -> Vec<ScanEvent> {
        self.events
    }
}

impl ScanObserver for EventLog {
    fn on_event(&mut self, event: ScanEvent) {
        self.events.push(event);
    }
}
