//! Fluent construction of diagnostics.

use super::{Category, Diagnostic, DiagnosticCode, Handler, Level, SourceSnippet};
use crate::Span;

/// Builder for [`Diagnostic`] values.
///
/// The category defaults to [`Category::Syntax`], which is what both
/// frontend phases report; other subsystems override it.
///
/// # Examples
///
/// ```
/// use baa_util::{DiagnosticBuilder, Handler, Span};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("unterminated string literal")
///     .span(Span::DUMMY)
///     .fix_hint("add a closing '\"'")
///     .emit(&handler);
/// ```
#[derive(Debug)]
pub struct DiagnosticBuilder {
    diagnostic: Diagnostic,
}

impl DiagnosticBuilder {
    /// Start a diagnostic at the given level.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            diagnostic: Diagnostic::new(level, Category::Syntax, message, Span::DUMMY),
        }
    }

    /// Start an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Start a note diagnostic.
    pub fn note(message: impl Into<String>) -> Self {
        Self::new(Level::Note, message)
    }

    /// Start a hint diagnostic.
    pub fn hint(message: impl Into<String>) -> Self {
        Self::new(Level::Hint, message)
    }

    /// Set the category.
    pub fn category(mut self, category: Category) -> Self {
        self.diagnostic.category = category;
        self
    }

    /// Set the diagnostic code.
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.diagnostic.code = Some(code);
        self
    }

    /// Set the source span.
    pub fn span(mut self, span: Span) -> Self {
        self.diagnostic.span = span;
        self
    }

    /// Attach a fix suggestion.
    pub fn fix_hint(mut self, hint: impl Into<String>) -> Self {
        self.diagnostic.fix_hint = Some(hint.into());
        self
    }

    /// Attach a source excerpt for caret display.
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.diagnostic.snippet = Some(snippet);
        self
    }

    /// Finish building.
    pub fn build(self) -> Diagnostic {
        self.diagnostic
    }

    /// Finish building and record in the handler.
    pub fn emit(self, handler: &Handler) {
        handler.emit(self.diagnostic);
    }
}
