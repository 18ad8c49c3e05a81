//! Core lexer implementation.
//!
//! This module contains the main `Lexer` struct, token assembly, and the
//! leading dispatch on the first code point of each token.

use baa_util::{Category, DiagnosticBuilder, DiagnosticCode, FileId, Handler, SourceLocation, Span};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::unicode;

/// Pull-based lexer for Baa source code.
///
/// Each call to [`next_token`](Lexer::next_token) scans exactly one token.
/// Whitespace, newlines and comments are returned as tokens, never
/// discarded, so the concatenated lexemes of an error-free run reproduce
/// the source text exactly.
pub struct Lexer<'a> {
    /// Character cursor over the source buffer.
    pub(crate) cursor: Cursor<'a>,

    /// Diagnostic sink; every `Error` token also records a diagnostic.
    handler: &'a Handler,

    /// File the source buffer came from.
    file: FileId,

    /// Location where the in-progress token started.
    pub(crate) token_start: SourceLocation,

    /// Sticky flag, set on the first `Error` token.
    had_error: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer at the origin of `source`.
    pub fn new(source: &'a str, file: FileId, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            file,
            token_start: SourceLocation::ORIGIN,
            had_error: false,
        }
    }

    /// Scans and returns the next token.
    ///
    /// Always returns a token: end of input is [`TokenKind::Eof`] and
    /// lexical errors are [`TokenKind::Error`] tokens carrying their
    /// message, after which scanning resumes at a best-guess boundary.
    pub fn next_token(&mut self) -> Token {
        self.token_start = self.cursor.location();

        if self.cursor.is_at_end() {
            return Token::new(TokenKind::Eof, "", self.span_from_start());
        }

        let c = self.cursor.current_char();
        match c {
            ' ' | '\t' => self.lex_whitespace(),
            '\n' | '\r' => self.lex_newline(),
            '/' => self.lex_slash(),
            '"' => self.lex_string(),
            '\'' => self.lex_char(),
            'خ' if self.cursor.peek_char(1) == '"' => self.lex_raw_string(),
            '#' => self.lex_hash(),
            c if unicode::is_ident_start(c) => self.lex_identifier(),
            c if unicode::is_digit_either(c) => self.lex_number(),
            _ => self.lex_operator(),
        }
    }

    /// True once any `Error` token has been produced.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// The file id this lexer reports spans against.
    pub fn file(&self) -> FileId {
        self.file
    }

    /// A run of spaces and tabs collapses into one token.
    fn lex_whitespace(&mut self) -> Token {
        while matches!(self.cursor.current_char(), ' ' | '\t') {
            self.cursor.advance();
        }
        self.make_token(TokenKind::Whitespace)
    }

    /// One `\n`, `\r\n` or bare `\r`.
    fn lex_newline(&mut self) -> Token {
        if self.cursor.match_char('\r') {
            self.cursor.match_char('\n');
        } else {
            self.cursor.advance();
        }
        self.make_token(TokenKind::Newline)
    }

    /// Assembles a token whose lexeme is the source text scanned since
    /// `token_start`.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        let lexeme = self.cursor.slice_from(self.token_start.offset);
        Token::new(kind, lexeme, self.span_from_start())
    }

    /// Assembles an `Error` token, records the diagnostic, and sets the
    /// sticky error flag. The token's lexeme is the message itself.
    pub(crate) fn error_token(&mut self, code: DiagnosticCode, message: impl Into<String>) -> Token {
        let message = message.into();
        let span = self.span_from_start();
        self.had_error = true;
        DiagnosticBuilder::error(message.clone())
            .category(Category::Syntax)
            .code(code)
            .span(span)
            .emit(self.handler);
        Token::new(TokenKind::Error, message, span)
    }

    /// Records a warning against the current token region.
    pub(crate) fn warn(&mut self, code: DiagnosticCode, message: impl Into<String>) {
        DiagnosticBuilder::warning(message)
            .category(Category::Syntax)
            .code(code)
            .span(self.span_from_start())
            .emit(self.handler);
    }

    pub(crate) fn span_from_start(&self) -> Span {
        Span::new(self.file, self.token_start, self.cursor.location())
    }
}

/// Tokens until (and excluding) `Eof`.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_kinds(source: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        Lexer::new(source, FileId::DUMMY, &handler)
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_empty_source_is_eof_forever() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("", FileId::DUMMY, &handler);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert!(!lexer.had_error());
    }

    #[test]
    fn test_whitespace_run_collapses() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("  \t ", FileId::DUMMY, &handler);
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Whitespace);
        assert_eq!(token.lexeme, "  \t ");
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_newline_forms() {
        assert_eq!(
            lex_kinds("\n\r\n\r"),
            vec![TokenKind::Newline, TokenKind::Newline, TokenKind::Newline]
        );
        let handler = Handler::new();
        let mut lexer = Lexer::new("\r\n", FileId::DUMMY, &handler);
        assert_eq!(lexer.next_token().lexeme, "\r\n");
    }

    #[test]
    fn test_whitespace_is_not_swallowed() {
        assert_eq!(
            lex_kinds("س ص"),
            vec![
                TokenKind::Identifier,
                TokenKind::Whitespace,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_unknown_character() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("@", FileId::DUMMY, &handler);
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Error);
        assert!(token.lexeme.contains("unexpected character"));
        assert!(lexer.had_error());
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_span_monotonicity() {
        let handler = Handler::new();
        let lexer = Lexer::new("متغير س = ١٢٣.\n", FileId::DUMMY, &handler);
        let tokens: Vec<Token> = lexer.collect();
        for pair in tokens.windows(2) {
            assert!(pair[1].span.start.offset >= pair[0].span.end.offset);
        }
    }

    #[test]
    fn test_lexeme_fidelity() {
        let source = "دالة مربع(س: عدد_صحيح) {\n\tإرجع س * س.\n} // تم\n";
        let handler = Handler::new();
        let lexer = Lexer::new(source, FileId::DUMMY, &handler);
        let rebuilt: String = lexer.map(|t| t.lexeme).collect();
        assert_eq!(rebuilt, source);
        assert!(!handler.has_errors());
    }
}
