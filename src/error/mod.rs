//! Error types for the AST generator
//!
//! Every failure is an [`AstgenError`]: a [`ErrorKind`] category, a message,
//! and optional context (the file involved plus note/help lines) used when the
//! CLI renders a diagnostic.

mod conversions;

pub use conversions::OutputPathContext;

use colored::*;
use std::fmt;
use std::path::{Path, PathBuf};

/// Additional information attached to an error
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub path: Option<PathBuf>,
    pub note: Option<String>,
    pub help: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Main error type for the generator
#[derive(Debug, Clone)]
pub struct AstgenError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: ErrorContext,
}

impl AstgenError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::new(),
        }
    }

    /// Wrong number of command-line arguments
    pub fn usage(program: &str) -> Self {
        Self::new(
            ErrorKind::UsageError,
            format!("Usage: {} <output directory>", program),
        )
    }

    /// An output file could not be created, written, or flushed
    pub fn output_write(path: &Path, cause: impl fmt::Display) -> Self {
        Self::new(ErrorKind::OutputWriteError, cause.to_string())
            .with_path(path)
            .with_help("check that the output directory exists and is writable")
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.context.path = Some(path.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.context.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.context.path.as_deref()
    }
}

/// Categories of errors that can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UsageError,
    OutputWriteError,
    ManifestError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UsageError => "usage error",
            ErrorKind::OutputWriteError => "cannot write output",
            ErrorKind::ManifestError => "invalid grammar manifest",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for AstgenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context.path {
            Some(path) => write!(f, "{}: {}: {}", path.display(), self.kind, self.message)?,
            None => write!(f, "{}: {}", self.kind, self.message)?,
        }

        if let Some(note) = &self.context.note {
            write!(f, "\nnote: {}", note)?;
        }

        if let Some(help) = &self.context.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for AstgenError {}

/// Renders an error as a multi-line terminal diagnostic
pub struct ErrorFormatter<'a> {
    error: &'a AstgenError,
    use_color: bool,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new(error: &'a AstgenError) -> Self {
        Self {
            error,
            use_color: true,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn format(&self) -> String {
        let mut output = String::new();

        let label = if self.use_color {
            "error".red().bold().to_string()
        } else {
            "error".to_string()
        };
        let kind = if self.use_color {
            self.error.kind.to_string().bold().to_string()
        } else {
            self.error.kind.to_string()
        };
        output.push_str(&format!("{}: {}: {}", label, kind, self.error.message));

        if let Some(path) = &self.error.context.path {
            let arrow = if self.use_color {
                "-->".blue().bold().to_string()
            } else {
                "-->".to_string()
            };
            output.push_str(&format!("\n  {} {}", arrow, path.display()));
        }

        if let Some(note) = &self.error.context.note {
            let note_label = if self.use_color {
                "note".blue().bold()
            } else {
                "note".into()
            };
            output.push_str(&format!("\n{}: {}", note_label, note));
        }

        if let Some(help) = &self.error.context.help {
            let help_label = if self.use_color {
                "help".green().bold()
            } else {
                "help".into()
            };
            output.push_str(&format!("\n{}: {}", help_label, help));
        }

        output
    }
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, AstgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_path_and_help() {
        let error = AstgenError::output_write(Path::new("/nope/expr.go"), "No such file or directory");
        let text = error.to_string();
        assert!(text.starts_with("/nope/expr.go: cannot write output: No such file or directory"));
        assert!(text.contains("\nhelp: check that the output directory exists"));
    }

    #[test]
    fn usage_message_names_program() {
        let error = AstgenError::usage("generate_ast");
        assert_eq!(error.kind, ErrorKind::UsageError);
        assert_eq!(error.message, "Usage: generate_ast <output directory>");
        assert!(error.path().is_none());
    }

    #[test]
    fn formatter_without_color() {
        let error = AstgenError::new(ErrorKind::ManifestError, "grammar has no families")
            .with_note("at least one family is required");
        let output = ErrorFormatter::new(&error).with_color(false).format();
        assert_eq!(
            output,
            "error: invalid grammar manifest: grammar has no families\nnote: at least one family is required"
        );
    }

    #[test]
    fn formatter_shows_path_arrow() {
        let error = AstgenError::output_write(Path::new("out/stmt.go"), "permission denied");
        let output = ErrorFormatter::new(&error).with_color(false).format();
        assert!(output.contains("\n  --> out/stmt.go"));
        assert!(output.contains("help: "));
    }
}
