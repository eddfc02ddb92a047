//! Request/response layer around the matcher.
//!
//! A request is a mode selector plus a pattern line and a text line. The
//! session applies the input guards of the interactive tool, runs the
//! matching core and renders the answer as comma-joined indices, a shift
//! amount, or the `-1` sentinel.

use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{KmpError, Result};
use crate::matcher::Matcher;
use crate::observer::{NoopObserver, ScanObserver, TracingObserver};

/// What to compute for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `1`: every occurrence of the pattern in the text
    AllOccurrences,
    /// `2`: whether the pattern is a rotation of the text
    CyclicShift,
}

impl FromStr for Mode {
    type Err = KmpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(Mode::AllOccurrences),
            "2" => Ok(Mode::CyclicShift),
            other => Err(KmpError::InvalidMode(other.to_string())),
        }
    }
}

/// A parsed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub mode: Mode,
    pub pattern: String,
    pub text: String,
}

impl Request {
    pub fn new(mode: Mode, pattern: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            mode,
            pattern: pattern.into(),
            text: text.into(),
        }
    }
}

/// Answer to a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Start indices, possibly empty
    Occurrences(Vec<usize>),
    /// Rotation amount, `None` when the pattern is not a rotation of the text
    Shift(Option<usize>),
    /// Pattern or text was empty and the empty-input guard is on
    EmptyInput,
}

impl Outcome {
    /// Whether the answer carries no match
    pub fn is_not_found(&self) -> bool {
        match self {
            Outcome::Occurrences(found) => found.is_empty(),
            Outcome::Shift(shift) => shift.is_none(),
            Outcome::EmptyInput => true,
        }
    }

    /// Render the labelled line printed by the interactive tool
    pub fn report(&self) -> String {
        match self {
            Outcome::Occurrences(found) if !found.is_empty() => {
                format!("All occurrences: {}", self)
            }
            Outcome::Shift(_) => format!("Cyclic shift index: {}", self),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Occurrences(found) if !found.is_empty() => {
                for (i, index) in found.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", index)?;
                }
                Ok(())
            }
            Outcome::Shift(Some(shift)) => write!(f, "{}", shift),
            _ => f.write_str("-1"),
        }
    }
}

/// Session options.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Emit every construction and scan step as a `tracing` trace event
    pub trace: bool,
    /// Answer `-1` without matching when the pattern or the text is empty
    pub guard_empty_input: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            trace: false,
            guard_empty_input: true,
        }
    }
}

impl SessionOptions {
    /// Create new session options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable step tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Enable or disable the empty-input guard.
    pub fn with_empty_input_guard(mut self, guard: bool) -> Self {
        self.guard_empty_input = guard;
        self
    }
}

/// Run a request against the matching core.
///
/// Patterns and texts are matched byte-wise, so indices are byte offsets.
pub fn execute(request: &Request, options: &SessionOptions) -> Outcome {
    let pattern = request.pattern.as_bytes();
    let text = request.text.as_bytes();

    tracing::debug!(
        mode = ?request.mode,
        pattern_len = pattern.len(),
        text_len = text.len(),
        "executing request"
    );

    if options.guard_empty_input && (pattern.is_empty() || text.is_empty()) {
        return Outcome::EmptyInput;
    }

    if options.trace {
        run(request.mode, pattern, text, TracingObserver)
    } else {
        run(request.mode, pattern, text, NoopObserver)
    }
}

fn run<O: ScanObserver>(mode: Mode, pattern: &[u8], text: &[u8], mut observer: O) -> Outcome {
    match mode {
        Mode::AllOccurrences => {
            if pattern.len() > text.len() {
                return Outcome::Occurrences(Vec::new());
            }
            let matcher = Matcher::new_observed(pattern, &mut observer);
            Outcome::Occurrences(matcher.search_all_observed(text, &mut observer))
        }
        Mode::CyclicShift => {
            if pattern.len() != text.len() {
                return Outcome::Shift(None);
            }
            let matcher = Matcher::new_observed(pattern, &mut observer);
            Outcome::Shift(matcher.cyclic_shift_of_observed(text, &mut observer))
        }
    }
}

/// Read one line, without its line terminator.
fn read_line<R: BufRead>(input: &mut R, what: &'static str) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(KmpError::MissingInput(what));
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Read a request as three lines: mode, pattern, text.
pub fn read_request<R: BufRead>(input: &mut R) -> Result<Request> {
    let mode = read_line(input, "mode")?.parse()?;
    let pattern = read_line(input, "pattern")?;
    let text = read_line(input, "text")?;
    Ok(Request::new(mode, pattern, text))
}

/// Prompt for and answer one request, the way the interactive tool does.
///
/// Pattern and text are read before the mode is validated, so an empty input
/// answers `-1` even when the mode is invalid.
pub fn interact<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    options: &SessionOptions,
) -> Result<Outcome> {
    writeln!(output, "Choose mode:")?;
    writeln!(output, "1 - Find all occurrences of the pattern")?;
    writeln!(output, "2 - Check if the pattern is a cyclic shift of the text")?;
    write!(output, "Enter 1 or 2: ")?;
    output.flush()?;
    let mode = read_line(input, "mode")?;

    write!(output, "Enter the pattern: ")?;
    output.flush()?;
    let pattern = read_line(input, "pattern")?;

    write!(output, "Enter the text: ")?;
    output.flush()?;
    let text = read_line(input, "text")?;

    if options.guard_empty_input && (pattern.is_empty() || text.is_empty()) {
        writeln!(output, "{}", Outcome::EmptyInput)?;
        return Ok(Outcome::EmptyInput);
    }

    let mode: Mode = match mode.parse() {
        Ok(mode) => mode,
        Err(e) => {
            writeln!(output, "Invalid mode selected.")?;
            return Err(e);
        }
    };

    match mode {
        Mode::AllOccurrences => writeln!(output, "\n--- Searching for all occurrences ---")?,
        Mode::CyclicShift => writeln!(output, "\n--- Searching for cyclic shift index ---")?,
    }

    let outcome = execute(&Request::new(mode, pattern, text), options);
    writeln!(output, "{}", outcome.report())?;
    Ok(outcome)
}
