//! String and character literal lexing.
//!
//! Four string flavors: `"…"` (single-line), `"""…"""` (multi-line,
//! newlines verbatim), and the raw forms `خ"…"` / `خ"""…"""` in which a
//! backslash is an ordinary character. Non-raw forms process the Latin
//! escape set (`\n \t \r \\ \" \' \0 \a \b \f \v`), the Arabic escape set
//! (`\س \م \ر \ص`), Unicode escapes `\يXXXX` (exactly four hex digits) and
//! byte escapes `\هـXX` (exactly two hex digits).
//!
//! The decoded value is stored in the token; the lexeme keeps the source
//! spelling.

use baa_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal starting at `"`.
    pub(crate) fn lex_string(&mut self) -> Token {
        self.lex_string_body(false)
    }

    /// Lexes a raw string literal starting at the `خ` prefix.
    pub(crate) fn lex_raw_string(&mut self) -> Token {
        self.cursor.advance(); // خ
        self.lex_string_body(true)
    }

    /// Common body for all four string flavors; the cursor sits on the
    /// opening quote.
    fn lex_string_body(&mut self, raw: bool) -> Token {
        let multiline = self.cursor.starts_with("\"\"\"");
        if multiline {
            self.cursor.advance_n(3);
        } else {
            self.cursor.advance();
        }

        let mut content = String::new();
        let mut first_error: Option<String> = None;

        loop {
            if self.cursor.is_at_end() {
                return self.error_token(
                    DiagnosticCode::E_UNTERMINATED_STRING,
                    "unterminated string literal",
                );
            }

            let c = self.cursor.current_char();

            if multiline {
                if self.cursor.starts_with("\"\"\"") {
                    self.cursor.advance_n(3);
                    break;
                }
            } else {
                if c == '"' {
                    self.cursor.advance();
                    break;
                }
                if c == '\n' || c == '\r' {
                    // The newline stays outside the token; scanning resumes
                    // there.
                    return self.error_token(
                        DiagnosticCode::E_UNTERMINATED_STRING,
                        "unterminated string literal",
                    );
                }
            }

            if c == '\\' && !raw {
                self.cursor.advance();
                match self.parse_escape() {
                    Ok(escaped) => content.push(escaped),
                    Err(message) => {
                        if first_error.is_none() {
                            first_error = Some(message);
                        }
                    },
                }
            } else {
                content.push(c);
                self.cursor.advance();
            }
        }

        match first_error {
            Some(message) => self.error_token(DiagnosticCode::E_INVALID_ESCAPE, message),
            None => self.make_token(TokenKind::StringLit(content)),
        }
    }

    /// Lexes a character literal starting at `'`. The literal must hold
    /// exactly one logical character after escape resolution.
    pub(crate) fn lex_char(&mut self) -> Token {
        self.cursor.advance(); // opening quote

        if self.cursor.is_at_end() {
            return self.error_token(
                DiagnosticCode::E_BAD_CHAR_LITERAL,
                "unterminated character literal",
            );
        }

        if self.cursor.current_char() == '\'' {
            self.cursor.advance();
            return self.error_token(DiagnosticCode::E_BAD_CHAR_LITERAL, "empty character literal");
        }
        if matches!(self.cursor.current_char(), '\n' | '\r') {
            return self.error_token(
                DiagnosticCode::E_BAD_CHAR_LITERAL,
                "unterminated character literal",
            );
        }

        let value = if self.cursor.current_char() == '\\' {
            self.cursor.advance();
            match self.parse_escape() {
                Ok(escaped) => escaped,
                Err(message) => {
                    self.recover_char_literal();
                    return self.error_token(DiagnosticCode::E_INVALID_ESCAPE, message);
                },
            }
        } else {
            let c = self.cursor.current_char();
            self.cursor.advance();
            c
        };

        if self.cursor.match_char('\'') {
            return self.make_token(TokenKind::CharLit(value));
        }

        if self.recover_char_literal() {
            self.error_token(
                DiagnosticCode::E_BAD_CHAR_LITERAL,
                "character literal may only contain one character",
            )
        } else {
            self.error_token(
                DiagnosticCode::E_BAD_CHAR_LITERAL,
                "unterminated character literal",
            )
        }
    }

    /// Skips to the end of a broken character literal. Returns true when a
    /// closing quote was found on the same line.
    fn recover_char_literal(&mut self) -> bool {
        while !self.cursor.is_at_end() && !matches!(self.cursor.current_char(), '\'' | '\n' | '\r')
        {
            self.cursor.advance();
        }
        self.cursor.match_char('\'')
    }

    /// Parses one escape sequence; the backslash is already consumed.
    fn parse_escape(&mut self) -> Result<char, String> {
        if self.cursor.is_at_end() {
            return Err("unterminated escape sequence".to_string());
        }

        let c = self.cursor.current_char();
        self.cursor.advance();

        match c {
            // Latin escapes
            'n' => Ok('\n'),
            't' => Ok('\t'),
            'r' => Ok('\r'),
            '\\' => Ok('\\'),
            '"' => Ok('"'),
            '\'' => Ok('\''),
            '0' => Ok('\0'),
            'a' => Ok('\x07'),
            'b' => Ok('\x08'),
            'f' => Ok('\x0C'),
            'v' => Ok('\x0B'),

            // Arabic escapes
            'س' => Ok('\n'),
            'م' => Ok('\t'),
            'ر' => Ok('\r'),
            'ص' => Ok('\0'),

            // \يXXXX - Unicode code point, exactly four hex digits
            'ي' => {
                let hex = self.take_hex_digits(4);
                if hex.len() != 4 {
                    return Err("Unicode escape '\\ي' requires four hex digits".to_string());
                }
                crate::unicode::parse_hex_codepoint(&hex)
                    .ok_or_else(|| format!("'\\ي{}' is not a valid code point", hex))
            },

            // \هـXX - byte value, exactly two hex digits; the escape name
            // is the two code points ه and ـ (tatweel)
            'ه' => {
                if !self.cursor.match_char('ـ') {
                    return Err("unknown escape sequence '\\ه'".to_string());
                }
                let hex = self.take_hex_digits(2);
                if hex.len() != 2 {
                    return Err("byte escape '\\هـ' requires two hex digits".to_string());
                }
                let byte = u8::from_str_radix(&hex, 16).expect("hex digits");
                Ok(byte as char)
            },

            _ => Err(format!("unknown escape sequence '\\{}'", c)),
        }
    }

    /// Consumes up to `max` ASCII hex digits.
    fn take_hex_digits(&mut self, max: usize) -> String {
        let mut hex = String::new();
        for _ in 0..max {
            let c = self.cursor.current_char();
            if c.is_ascii_hexdigit() {
                hex.push(c);
                self.cursor.advance();
            } else {
                break;
            }
        }
        hex
    }
}
