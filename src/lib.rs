//! KMP Engine - linear-time exact string matching for Rust
//!
//! This library implements the Knuth-Morris-Pratt algorithm:
//! - Prefix table (failure function) construction
//! - First-occurrence and all-occurrence search, overlapping matches included
//! - Lazy occurrence iteration over slices or any iterator of symbols
//! - Cyclic shift (rotation) detection via a scan of the doubled text
//! - Pluggable observers for step-by-step instrumentation
//!
//! Patterns and texts are sequences of any `T: PartialEq`; bytes and `char`s
//! are the common cases. Indices are positions in the sequence.
//!
//! # Example
//!
//! ```rust
//! use kmp_engine::{is_cyclic_shift, Matcher};
//!
//! let matcher = Matcher::<u8>::from("ab");
//! assert_eq!(matcher.search_all(b"ababab"), vec![0, 2, 4]);
//! assert_eq!(matcher.search_first(b"xxab"), Some(2));
//!
//! // Overlapping occurrences are all reported
//! let matcher = Matcher::<u8>::from("aaa");
//! assert_eq!(matcher.search_all(b"aaaa"), vec![0, 1]);
//!
//! // "cdab" is "abcd" rotated left by 2
//! assert_eq!(is_cyclic_shift(b"cdab", b"abcd"), Some(2));
//! assert_eq!(is_cyclic_shift(b"ab", b"abc"), None);
//! ```
//!
//! # Empty pattern
//!
//! An empty pattern occurs at every boundary of the text, from `0` to
//! `text.len()` inclusive:
//!
//! ```rust
//! use kmp_engine::Matcher;
//!
//! let matcher = Matcher::<u8>::new(Vec::new());
//! assert_eq!(matcher.search_all(b"abc"), vec![0, 1, 2, 3]);
//! ```
//!
//! # Instrumentation
//!
//! Every entry point has an `_observed` variant taking a [`ScanObserver`].
//! [`TracingObserver`] turns each step into a `tracing` trace event and
//! [`EventLog`] records the steps for inspection.

pub mod error;
pub mod matcher;
pub mod observer;
pub mod prefix;
pub mod session;
pub mod types;

// Re-export commonly used items
pub use error::{KmpError, Result};
pub use matcher::{is_cyclic_shift, Matcher, Occurrences};
pub use observer::{EventLog, NoopObserver, ScanObserver, TracingObserver};
pub use prefix::PrefixTable;
pub use session::{execute, interact, read_request, Mode, Outcome, Request, SessionOptions};
pub use types::ScanEvent;
