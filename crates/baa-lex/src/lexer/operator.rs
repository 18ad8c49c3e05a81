//! Operator and delimiter lexing.
//!
//! Maximal munch: two-character operators win over their one-character
//! prefixes (`<=` before `<`, `++` before `+`). The Arabic comma `،`,
//! semicolon `؛` and question mark `؟` are accepted alongside their ASCII
//! forms. `#` fuses with a following `تضمين` into the import directive
//! token.

use baa_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator or delimiter; everything else lands on the
    /// unknown-character error path.
    pub(crate) fn lex_operator(&mut self) -> Token {
        let c = self.cursor.current_char();
        self.cursor.advance();

        let kind = match c {
            '+' => {
                if self.cursor.match_char('+') {
                    TokenKind::PlusPlus
                } else if self.cursor.match_char('=') {
                    TokenKind::PlusEqual
                } else {
                    TokenKind::Plus
                }
            },
            '-' => {
                if self.cursor.match_char('-') {
                    TokenKind::MinusMinus
                } else if self.cursor.match_char('=') {
                    TokenKind::MinusEqual
                } else if self.cursor.match_char('>') {
                    TokenKind::Arrow
                } else {
                    TokenKind::Minus
                }
            },
            '*' => {
                if self.cursor.match_char('=') {
                    TokenKind::StarEqual
                } else {
                    TokenKind::Star
                }
            },
            '%' => {
                if self.cursor.match_char('=') {
                    TokenKind::PercentEqual
                } else {
                    TokenKind::Percent
                }
            },
            '=' => {
                if self.cursor.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                }
            },
            '!' => {
                if self.cursor.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                }
            },
            '<' => {
                if self.cursor.match_char('=') {
                    TokenKind::LessEqual
                } else if self.cursor.match_char('<') {
                    TokenKind::ShiftLeft
                } else {
                    TokenKind::Less
                }
            },
            '>' => {
                if self.cursor.match_char('=') {
                    TokenKind::GreaterEqual
                } else if self.cursor.match_char('>') {
                    TokenKind::ShiftRight
                } else {
                    TokenKind::Greater
                }
            },
            '&' => {
                if self.cursor.match_char('&') {
                    TokenKind::AmpAmp
                } else {
                    TokenKind::Amp
                }
            },
            '|' => {
                if self.cursor.match_char('|') {
                    TokenKind::PipePipe
                } else {
                    TokenKind::Pipe
                }
            },
            '^' => TokenKind::Caret,
            '~' => TokenKind::Tilde,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ',' | '،' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            ';' | '؛' => TokenKind::Semicolon,
            '?' | '؟' => TokenKind::Question,
            '.' => TokenKind::Dot,
            '٭' => TokenKind::Star,
            _ => {
                return self.error_token(
                    DiagnosticCode::E_UNEXPECTED_CHAR,
                    format!("unexpected character '{}'", c),
                );
            },
        };

        self.make_token(kind)
    }

    /// Lexes `#`: fused with a following `تضمين` into the import
    /// directive, otherwise a bare hash.
    pub(crate) fn lex_hash(&mut self) -> Token {
        self.cursor.advance(); // '#'

        let word_start = self.cursor.position();
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        match self.cursor.slice_from(word_start) {
            "تضمين" => self.make_token(TokenKind::HashInclude),
            "" => self.make_token(TokenKind::Hash),
            directive => self.error_token(
                DiagnosticCode::E_UNKNOWN_DIRECTIVE,
                format!("unknown directive '#{}'", directive),
            ),
        }
    }
}
