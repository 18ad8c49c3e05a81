//! Plain-text rendering of diagnostics.
//!
//! The output format is one header line
//! `<file>:<line>:<column>: <severity>: <message>` followed, when a source
//! excerpt is available, by the offending line and a caret line marking the
//! covered columns, and finally a `hint:` line for the fix suggestion.

use std::fmt::Write;

use super::Diagnostic;
use crate::span::SourceMap;

/// Render a diagnostic against the given source map.
///
/// An attached snippet wins; otherwise the line is looked up through the
/// map. Spans from files the map does not know render without an excerpt.
pub fn render(diagnostic: &Diagnostic, map: &SourceMap) -> String {
    let mut out = String::new();
    let span = diagnostic.span;

    let severity = match diagnostic.code {
        Some(code) => format!("{}[{}]", diagnostic.level, code),
        None => diagnostic.level.to_string(),
    };
    let _ = write!(
        out,
        "{}:{}:{}: {}: {}",
        map.name(span.file),
        span.start.line,
        span.start.column,
        severity,
        diagnostic.message
    );

    let excerpt = diagnostic.snippet.clone().or_else(|| {
        if span.file.index() >= map.len() {
            return None;
        }
        let line_text = map.file(span.file).line_text(span.start.line)?;
        let column_end = if span.end.line == span.start.line && span.end.column > span.start.column
        {
            span.end.column
        } else {
            span.start.column + 1
        };
        Some(super::SourceSnippet {
            line_text: line_text.to_owned(),
            line: span.start.line,
            column_start: span.start.column,
            column_end,
        })
    });

    if let Some(snippet) = excerpt {
        let _ = write!(out, "\n{}", snippet.line_text);
        let pad = snippet.column_start.saturating_sub(1) as usize;
        let width = (snippet.column_end.saturating_sub(snippet.column_start)).max(1) as usize;
        let _ = write!(out, "\n{}{}", " ".repeat(pad), "^".repeat(width));
    }

    if let Some(hint) = &diagnostic.fix_hint {
        let _ = write!(out, "\nhint: {}", hint);
    }

    out
}
