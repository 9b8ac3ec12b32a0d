//! The formatting collaborator seam.
//!
//! The pipeline hands every touched file through a [`Formatter`] before the
//! run completes. The built-in [`LightFormatter`] only normalizes whitespace;
//! a real pretty-printer can be swapped in at this seam.

/// Style-normalizing formatter. Implementations must be idempotent:
/// `format(format(x)) == format(x)`.
pub trait Formatter {
    fn format(&self, src: &str) -> String;
}

/// Whitespace normalizer: trims trailing whitespace, collapses blank-line
/// runs to one, drops leading blank lines, and guarantees exactly one
/// trailing newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightFormatter;

impl Formatter for LightFormatter {
    fn format(&self, src: &str) -> String {
        let mut lines: Vec<&str> = Vec::new();
        for line in src.lines() {
            let line = line.trim_end();
            if line.is_empty() && lines.last().is_none_or(|prev| prev.is_empty()) {
                continue;
            }
            lines.push(line);
        }
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            String::new()
        } else {
            format!("{}\n", lines.join("\n"))
        }
    }
}
