//! baa-util - Core Utilities and Foundation Types
//!
//! Shared infrastructure for the Baa compiler frontend:
//!
//! - [`span`] - source locations, spans, and the source map (including the
//!   UTF-16LE/UTF-8 source reader)
//! - [`diagnostic`] - structured error/warning reporting
//! - [`symbol`] - string interning for identifier names

pub mod diagnostic;
pub mod span;
pub mod symbol;

pub use diagnostic::{
    Category, Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use span::{FileId, SourceError, SourceFile, SourceLocation, SourceMap, Span};
pub use symbol::Symbol;
