//! Colored terminal output utilities.

use std::time::Duration;

use console::{Style, Term};

/// Terminal output formatter.
///
/// All user-facing messages go to standard error so the rendered document
/// on standard output stays clean.
pub(crate) struct Output {
    term: Term,
    yellow: Style,
    red: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
        }
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.term.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print the elapsed rendering time.
    pub(crate) fn timing(&self, elapsed: Duration) {
        self.info(&timing_line(elapsed));
    }
}

/// Format the rendering time, in milliseconds under one second.
fn timing_line(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs_f64();
    if seconds < 1.0 {
        format!("Time spent on rendering: {:7.2} ms.", seconds * 1e3)
    } else {
        format!("Time spent on rendering: {seconds:6.3} s.")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_timing_line_milliseconds() {
        let line = timing_line(Duration::from_millis(5));
        assert_eq!(line, "Time spent on rendering:    5.00 ms.");
    }

    #[test]
    fn test_timing_line_seconds() {
        let line = timing_line(Duration::from_secs(2));
        assert_eq!(line, "Time spent on rendering:  2.000 s.");
    }

    #[test]
    fn test_timing_line_boundary() {
        let line = timing_line(Duration::from_millis(999));
        assert!(line.ends_with("ms."));
        let line = timing_line(Duration::from_millis(1000));
        assert!(line.ends_with("s."));
        assert!(!line.ends_with("ms."));
    }
}
