//! Terminal output formatting for the compo CLI.
//!
//! Cargo-style status lines with right-aligned coloured verbs. All status
//! output goes to stderr; stdout carries only results (expressions, layer
//! lists, JSON) so they can be piped.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::validation::{Diagnostic, ValidationResult};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
pub struct Printer {
    color: bool,
}

impl Printer {
    /// Colour when stderr is a terminal.
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// Never colour.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// e.g. "     Loading hero (42 layers)"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    /// Print one diagnostic with a coloured severity label.
    pub fn diagnostic(&self, d: &Diagnostic) {
        let color = if d.is_error() { RED } else { YELLOW };
        let label = self.paint(color, &d.severity.to_string());
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "  {}[{}]: {}", label, d.code, d.message);
        if let Some(help) = &d.help {
            let _ = writeln!(stderr, "    {} {}", self.dim("help:"), help);
        }
    }

    /// Print all diagnostics for one subject, then a summary line.
    pub fn validation(&self, subject: &str, result: &ValidationResult) {
        for d in result.iter() {
            self.diagnostic(d);
        }

        let errors = result.error_count();
        let warnings = result.warning_count();

        if errors > 0 {
            self.error(
                "Failed",
                &format!(
                    "{}: {}, {}",
                    subject,
                    plural(errors, "error", "errors"),
                    plural(warnings, "warning", "warnings")
                ),
            );
        } else if warnings > 0 {
            self.warning(
                "Checked",
                &format!("{} ({})", subject, plural(warnings, "warning", "warnings")),
            );
        } else {
            self.status("Checked", subject);
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}");
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pluralize a count: `plural(1, "layer", "layers")` → "1 layer".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(0, "layer", "layers"), "0 layers");
        assert_eq!(plural(1, "layer", "layers"), "1 layer");
        assert_eq!(plural(7, "composition", "compositions"), "7 compositions");
    }

    #[test]
    fn test_plain_printer_does_not_paint() {
        let printer = Printer::plain();
        assert_eq!(printer.bold("hero"), "hero");
        assert_eq!(printer.dim("hero"), "hero");
    }

    #[test]
    fn test_display_path_absolute() {
        let p = Path::new("/nonexistent/path/to/characters");
        assert_eq!(display_path(p), "/nonexistent/path/to/characters");
    }
}
