//! Styled status lines on stderr.

use console::{Style, Term};

/// Terminal output formatter.
///
/// Status lines go to stderr so `nav --json` keeps stdout machine-readable.
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

    fn line(&self, style: &Style, msg: &str) {
        // Nothing useful to do when stderr is gone
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }

    pub(crate) fn info(&self, msg: &str) {
        self.line(&Style::new(), msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.line(&Style::new().green(), msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.line(&Style::new().yellow(), msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(&Style::new().red().bold(), msg);
    }

    /// Current page in `nav` output.
    pub(crate) fn highlight(&self, msg: &str) {
        self.line(&Style::new().cyan().bold(), msg);
    }

    /// Inactive sidebar entries.
    pub(crate) fn muted(&self, msg: &str) {
        self.line(&Style::new().dim(), msg);
    }
}
