//! Styled status lines for the terminal.
//!
//! Everything goes to stderr so that stdout stays free for the CI log
//! parsers some pipelines hang off this tool.

use console::{Style, Term};

/// Writes status lines, colored when stderr is a terminal.
pub(crate) struct Output {
    term: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn styled(&self, style: &Style, msg: &str) {
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }

    /// Plain line, no color.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Green line for completed work.
    pub(crate) fn success(&self, msg: &str) {
        self.styled(&Style::new().green(), msg);
    }

    /// Yellow line for degraded-but-continuing conditions.
    pub(crate) fn warning(&self, msg: &str) {
        self.styled(&Style::new().yellow(), msg);
    }

    /// Red line for failures.
    pub(crate) fn error(&self, msg: &str) {
        self.styled(&Style::new().red(), msg);
    }

    /// Bold cyan line for banners such as the dry-run notice.
    pub(crate) fn highlight(&self, msg: &str) {
        self.styled(&Style::new().cyan().bold(), msg);
    }
}
