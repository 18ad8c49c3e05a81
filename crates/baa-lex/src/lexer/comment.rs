//! Comment lexing.
//!
//! Comments are tokens, not discarded input, so tooling downstream of the
//! lexer can reconstruct the source. `//` starts a line comment, `///` a
//! line doc comment, `/*` a block comment and `/**` a block doc comment.
//! Block comments do not nest: the first `*/` closes the comment, whatever
//! came before it.

use baa_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Dispatches on `/`: a comment, `/=`, or plain `/`.
    pub(crate) fn lex_slash(&mut self) -> Token {
        match self.cursor.peek_char(1) {
            '/' => self.lex_line_comment(),
            '*' => self.lex_block_comment(),
            '=' => {
                self.cursor.advance_n(2);
                self.make_token(TokenKind::SlashEqual)
            },
            _ => {
                self.cursor.advance();
                self.make_token(TokenKind::Slash)
            },
        }
    }

    /// `//` or `///` up to, and excluding, the line terminator.
    fn lex_line_comment(&mut self) -> Token {
        self.cursor.advance_n(2);
        let doc = self.cursor.current_char() == '/';

        while !self.cursor.is_at_end() && !matches!(self.cursor.current_char(), '\n' | '\r') {
            self.cursor.advance();
        }

        if doc {
            self.make_token(TokenKind::DocComment)
        } else {
            self.make_token(TokenKind::LineComment)
        }
    }

    /// `/* … */` or `/** … */`, terminated by the first `*/`.
    fn lex_block_comment(&mut self) -> Token {
        self.cursor.advance_n(2);
        // `/**/` is an empty plain comment; `/**` with more behind it is a
        // doc comment.
        let doc = self.cursor.current_char() == '*' && self.cursor.peek_char(1) != '/';

        loop {
            if self.cursor.is_at_end() {
                return self.error_token(DiagnosticCode::E_UNTERMINATED_COMMENT, "unterminated block comment");
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance_n(2);
                break;
            }
            self.cursor.advance();
        }

        if doc {
            self.make_token(TokenKind::DocComment)
        } else {
            self.make_token(TokenKind::BlockComment)
        }
    }
}
