//! baa-drv - Frontend Driver
//!
//! Orchestrates the frontend pipeline: read a source file, lex, parse, and
//! report diagnostics. The two tester binaries (`baa_lexer_tester`,
//! `baa_ast_tester`) sit on top of the [`Session`] type defined here.
//!
//! The pipeline is synchronous and per-file; parsing different files means
//! independent runs with no shared mutable state.

use std::path::Path;

use baa_lex::{Lexer, Token, TokenKind};
use baa_par::ast::Program;
use baa_par::Parser;
use baa_util::{diagnostic, FileId, Handler, SourceError, SourceMap};

/// One frontend run: the loaded sources and the diagnostics they produced.
#[derive(Default)]
pub struct Session {
    pub source_map: SourceMap,
    pub handler: Handler,
}

impl Session {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a file from disk (UTF-16LE with BOM, or UTF-8).
    pub fn load_file(&mut self, path: &Path) -> Result<FileId, SourceError> {
        let id = self.source_map.load_file(path)?;
        tracing::debug!(file = %self.source_map.name(id), "loaded source file");
        Ok(id)
    }

    /// Registers an in-memory source under a display name.
    pub fn add_source(&mut self, name: &str, src: &str) -> FileId {
        self.source_map.add_file(name.to_string(), src.to_string())
    }

    /// Lexes a loaded file into its complete token stream, including the
    /// final EOF token.
    pub fn tokenize(&self, file: FileId) -> Vec<Token> {
        let src = &self.source_map.file(file).src;
        let mut lexer = Lexer::new(src, file, &self.handler);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        tracing::debug!(tokens = tokens.len(), "lexing finished");
        tokens
    }

    /// Parses a loaded file into a program.
    ///
    /// A tree comes back even when diagnostics were reported; check
    /// [`Handler::has_errors`] before trusting it.
    pub fn parse(&self, file: FileId) -> Program {
        let src = &self.source_map.file(file).src;
        let lexer = Lexer::new(src, file, &self.handler);
        let mut parser = Parser::new(lexer, &self.handler);
        let program = parser
            .parse_program()
            .expect("parse_program always yields a tree");
        tracing::debug!(
            items = program.items.len(),
            errors = self.handler.error_count(),
            "parsing finished"
        );
        program
    }

    /// Renders every diagnostic to stderr in source order and returns the
    /// number of errors among them.
    pub fn report_diagnostics(&self) -> usize {
        for diag in self.handler.diagnostics() {
            eprintln!("{}", diagnostic::render(&diag, &self.source_map));
        }
        self.handler.error_count()
    }
}

/// Formats one token the way the lexer tester prints it.
pub fn format_token_line(index: usize, token: &Token) -> String {
    format!(
        "[{:03}] {:<14} (L{} C{} Len{}) '{}'",
        index,
        token.kind.name(),
        token.span.start.line,
        token.span.start.column,
        token.len(),
        printable_lexeme(&token.lexeme)
    )
}

/// Control characters would mangle the one-line-per-token output.
fn printable_lexeme(lexeme: &str) -> String {
    lexeme
        .chars()
        .map(|c| match c {
            '\n' => "\\n".to_string(),
            '\r' => "\\r".to_string(),
            '\t' => "\\t".to_string(),
            c if c.is_control() => format!("\\u{{{:04X}}}", c as u32),
            c => c.to_string(),
        })
        .collect()
}
