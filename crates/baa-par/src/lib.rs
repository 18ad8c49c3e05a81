//! baa-par - Parser (Syntactic Analyzer)
//!
//! A recursive-descent parser for declarations and statements with a Pratt
//! (binding-power) expression parser, producing the AST defined in
//! [`ast`]. The parser owns its lexer and pulls tokens on demand, filtering
//! whitespace, newlines and plain comments; doc comments are buffered and
//! attached to the next declaration.
//!
//! Error handling is panic-mode: on an unexpected token the parser records
//! one diagnostic, discards tokens until a synchronization point (a
//! statement-starting keyword, the `.` terminator, or a closing brace), and
//! resumes with the next statement. A parse that reported errors still
//! returns a partial [`Program`](ast::Program); callers must consult
//! [`Parser::had_error`] before trusting it.
//!
//! The statement terminator `.` doubles as the member-access operator. The
//! parser tells them apart by span adjacency: `س.ب` (dot glued between an
//! expression and an identifier) is member access, anything else ends the
//! statement.

pub mod ast;
pub mod printer;
pub mod walk;

mod edge_cases;
mod expr;
mod items;
mod stmt;
mod types;

use baa_lex::{Lexer, Token, TokenKind};
use baa_util::{Category, DiagnosticBuilder, DiagnosticCode, Handler, Span};

use ast::Program;

/// Recursive-descent parser over a [`Lexer`] it owns.
pub struct Parser<'a> {
    /// Token source; consumed as the parse advances.
    lexer: Lexer<'a>,

    /// Diagnostic sink shared with the lexer.
    handler: &'a Handler,

    /// The token under consideration.
    current: Token,

    /// One-token lookahead, filled only when peeked.
    lookahead: Option<Token>,

    /// The most recently consumed token.
    previous: Token,

    /// Doc comment text waiting to attach to the next declaration.
    pending_doc: Option<String>,

    /// True once any diagnostic of error severity was recorded.
    had_error: bool,

    /// True while discarding tokens after an error; suppresses cascading
    /// diagnostics until the next synchronization point.
    panic_mode: bool,
}

impl<'a> Parser<'a> {
    /// Creates a parser and primes it with the first token.
    pub fn new(lexer: Lexer<'a>, handler: &'a Handler) -> Self {
        let placeholder = Token::new(TokenKind::Unknown, "", Span::DUMMY);
        let mut parser = Self {
            lexer,
            handler,
            current: placeholder.clone(),
            lookahead: None,
            previous: placeholder,
            pending_doc: None,
            had_error: false,
            panic_mode: false,
        };
        parser.advance();
        parser
    }

    /// Parses a whole source file.
    ///
    /// Always returns a program, possibly partial, for error-containing
    /// input; the `Option` is reserved for unrecoverable failure.
    pub fn parse_program(&mut self) -> Option<Program> {
        let start_span = self.current.span;
        let mut items = Vec::new();

        while !self.at_eof() {
            match self.parse_statement() {
                Some(stmt) => items.push(stmt),
                None => self.synchronize(),
            }
        }

        let span = match (items.first(), items.last()) {
            (Some(first), Some(last)) => first.span().merge(last.span()),
            _ => start_span,
        };
        Some(Program { items, span })
    }

    /// True if any error diagnostic was emitted, by the parser or by the
    /// lexer it drives.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    // ========================================================================
    // TOKEN STREAM
    // ========================================================================

    /// Pulls the next significant token from the lexer: trivia is skipped,
    /// doc comments accumulate into the pending buffer, and `Error` tokens
    /// (already reported by the lexer) are skipped after setting the error
    /// flag.
    fn pull_token(&mut self) -> Token {
        loop {
            let token = self.lexer.next_token();
            match token.kind {
                kind if kind.is_trivia() => continue,
                TokenKind::DocComment => {
                    self.buffer_doc(&token.lexeme);
                    continue;
                },
                TokenKind::Error => {
                    self.had_error = true;
                    continue;
                },
                _ => return token,
            }
        }
    }

    /// Consumes the current token.
    pub(crate) fn advance(&mut self) {
        let next = match self.lookahead.take() {
            Some(token) => token,
            None => self.pull_token(),
        };
        self.previous = std::mem::replace(&mut self.current, next);
    }

    /// The token after `current`, without consuming anything.
    pub(crate) fn peek_next(&mut self) -> &Token {
        if self.lookahead.is_none() {
            let token = self.pull_token();
            self.lookahead = Some(token);
        }
        self.lookahead.as_ref().expect("lookahead just filled")
    }

    pub(crate) fn current(&self) -> &Token {
        &self.current
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.previous
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.current.kind == TokenKind::Eof
    }

    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current.kind == *kind
    }

    /// Consumes the current token if it matches.
    pub(crate) fn match_token(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the expected token or reports what was wanted.
    pub(crate) fn expect(&mut self, kind: &TokenKind, wanted: &str) -> Option<()> {
        if self.match_token(kind) {
            Some(())
        } else {
            self.error_at_current(
                DiagnosticCode::E_EXPECTED_TOKEN,
                format!("expected {}, found {}", wanted, self.current.kind.name()),
            );
            None
        }
    }

    /// Consumes the `.` statement terminator.
    pub(crate) fn expect_terminator(&mut self) -> Option<()> {
        self.expect(&TokenKind::Dot, "'.' to end the statement")
    }

    /// Consumes an identifier and returns its interned name.
    pub(crate) fn expect_identifier(&mut self, wanted: &str) -> Option<baa_util::Symbol> {
        if self.check(&TokenKind::Identifier) {
            let name = baa_util::Symbol::intern(&self.current.lexeme);
            self.advance();
            Some(name)
        } else {
            self.error_at_current(
                DiagnosticCode::E_EXPECTED_TOKEN,
                format!("expected {}, found {}", wanted, self.current.kind.name()),
            );
            None
        }
    }

    // ========================================================================
    // ERROR REPORTING AND RECOVERY
    // ========================================================================

    /// Reports an error at the current token unless already panicking.
    pub(crate) fn error_at_current(&mut self, code: DiagnosticCode, message: impl Into<String>) {
        let span = self.current.span;
        self.error_at(code, span, message);
    }

    /// Reports an error at a span unless already panicking.
    pub(crate) fn error_at(&mut self, code: DiagnosticCode, span: Span, message: impl Into<String>) {
        if self.panic_mode {
            return;
        }
        self.panic_mode = true;
        self.had_error = true;
        DiagnosticBuilder::error(message)
            .category(Category::Syntax)
            .code(code)
            .span(span)
            .emit(self.handler);
    }

    /// Reports a warning; warnings do not enter panic mode.
    pub(crate) fn warn_at(&mut self, code: DiagnosticCode, span: Span, message: impl Into<String>) {
        DiagnosticBuilder::warning(message)
            .category(Category::Syntax)
            .code(code)
            .span(span)
            .emit(self.handler);
    }

    /// Discards tokens until a likely statement boundary, then leaves
    /// panic mode.
    pub(crate) fn synchronize(&mut self) {
        self.panic_mode = false;

        while !self.at_eof() {
            match self.current.kind {
                // Past the end of the broken statement.
                TokenKind::Dot => {
                    self.advance();
                    return;
                },
                // The enclosing block closes here; let its parser see it.
                TokenKind::RBrace => return,
                ref kind if kind.starts_statement() => return,
                _ => self.advance(),
            }
        }
    }

    // ========================================================================
    // DOC COMMENTS
    // ========================================================================

    /// Strips comment markers and appends to the pending doc buffer.
    fn buffer_doc(&mut self, raw: &str) {
        let text = raw
            .strip_prefix("///")
            .or_else(|| {
                raw.strip_prefix("/**")
                    .map(|s| s.strip_suffix("*/").unwrap_or(s))
            })
            .unwrap_or(raw)
            .trim();

        match &mut self.pending_doc {
            Some(doc) => {
                doc.push('\n');
                doc.push_str(text);
            },
            None => self.pending_doc = Some(text.to_string()),
        }
    }

    /// Takes the buffered doc comment for the declaration being parsed.
    pub(crate) fn take_doc(&mut self) -> Option<String> {
        self.pending_doc.take()
    }

    /// Drops a doc comment that did not precede a declaration.
    pub(crate) fn discard_doc(&mut self) {
        self.pending_doc = None;
    }
}
