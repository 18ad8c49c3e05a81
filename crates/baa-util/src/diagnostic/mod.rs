//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Diagnostics are accumulated in a [`Handler`] during lexing and parsing
//! and rendered at the end of a run. A diagnostic carries a severity
//! [`Level`], a [`Category`] describing which subsystem produced it, a
//! source [`Span`], the message, and optionally a fix hint and a source
//! snippet for caret display.
//!
//! # Examples
//!
//! ```
//! use baa_util::{Category, DiagnosticBuilder, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected token")
//!     .category(Category::Syntax)
//!     .span(Span::DUMMY)
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;
mod render;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;
pub use render::render;

use std::cell::RefCell;
use std::fmt;

use crate::Span;

/// Diagnostic severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that invalidates the parse result.
    Error,
    /// A warning that does not prevent compilation.
    Warning,
    /// Additional information about another diagnostic.
    Note,
    /// A suggestion for fixing an issue.
    Hint,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Hint => write!(f, "hint"),
        }
    }
}

/// Which subsystem a diagnostic originated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// Lexical and syntax errors.
    Syntax,
    /// Type errors.
    Type,
    /// Semantic errors.
    Semantic,
    /// Control flow errors.
    Flow,
    /// Memory-related errors.
    Memory,
    /// System and I/O errors.
    System,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Syntax => write!(f, "syntax"),
            Category::Type => write!(f, "type"),
            Category::Semantic => write!(f, "semantic"),
            Category::Flow => write!(f, "flow"),
            Category::Memory => write!(f, "memory"),
            Category::System => write!(f, "system"),
        }
    }
}

/// A source line excerpt attached to a diagnostic for caret display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The full text of the offending line, without its terminator.
    pub line_text: String,
    /// Line number (1-based).
    pub line: u32,
    /// First column covered (1-based, inclusive, in code points).
    pub column_start: u32,
    /// Last column covered (exclusive).
    pub column_end: u32,
}

/// A diagnostic message with severity, category and location.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Severity level.
    pub level: Level,
    /// Originating subsystem.
    pub category: Category,
    /// Source location.
    pub span: Span,
    /// Main message.
    pub message: String,
    /// Optional stable code identifying the diagnostic.
    pub code: Option<DiagnosticCode>,
    /// Optional suggestion for fixing the issue.
    pub fix_hint: Option<String>,
    /// Optional source excerpt for caret display.
    pub snippet: Option<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic with no hint or snippet.
    pub fn new(level: Level, category: Category, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            category,
            span,
            message: message.into(),
            code: None,
            fix_hint: None,
            snippet: None,
        }
    }
}

/// Handler for collecting diagnostics during a parse run.
///
/// The store is append-only; `had_error` becomes true once any
/// [`Level::Error`] diagnostic is recorded and never resets.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new, empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// True once any error-level diagnostic has been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Number of warning-level diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Total number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Snapshot of all recorded diagnostics, in emission order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Drain the store, leaving it empty.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_handler() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert!(handler.is_empty());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn test_had_error_is_sticky() {
        let handler = Handler::new();
        handler.emit(Diagnostic::new(
            Level::Error,
            Category::Syntax,
            "bad token",
            Span::DUMMY,
        ));
        handler.emit(Diagnostic::new(
            Level::Warning,
            Category::Syntax,
            "odd spacing",
            Span::DUMMY,
        ));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.len(), 2);
    }

    #[test]
    fn test_warnings_do_not_set_had_error() {
        let handler = Handler::new();
        handler.emit(Diagnostic::new(
            Level::Warning,
            Category::Syntax,
            "integer literal widened",
            Span::DUMMY,
        ));
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_take_drains() {
        let handler = Handler::new();
        handler.emit(Diagnostic::new(
            Level::Note,
            Category::System,
            "note",
            Span::DUMMY,
        ));
        assert_eq!(handler.take().len(), 1);
        assert!(handler.is_empty());
    }

    #[test]
    fn test_level_display() {
        assert_eq!(Level::Error.to_string(), "error");
        assert_eq!(Level::Warning.to_string(), "warning");
        assert_eq!(Level::Note.to_string(), "note");
        assert_eq!(Level::Hint.to_string(), "hint");
    }
}
