//! Number literal lexing.
//!
//! Five literal forms share this module: decimal integers, hex/binary/octal
//! integers, decimal floats, scientific notation, and hex floats. Decimal
//! forms accept digits from both alphabets (`123` / `١٢٣`) and either
//! decimal separator (`.` / `٫`); the prefixed bases are ASCII-only since
//! their prefixes are.
//!
//! Values are decoded here and stored in the token kind. An integer that
//! does not fit the signed 64-bit target becomes a float with a warning;
//! a float that lands on infinity is an error.

use baa_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::unicode::{decimal_digit_value, digit_value_in_base, is_digit_either, is_digit_in_base};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal. The current code point is a digit of
    /// either alphabet.
    pub(crate) fn lex_number(&mut self) -> Token {
        if self.cursor.current_char() == '0' {
            match self.cursor.peek_char(1) {
                'x' | 'X' => {
                    self.cursor.advance_n(2);
                    return self.lex_hex();
                },
                'b' | 'B' => {
                    self.cursor.advance_n(2);
                    return self.lex_radix(2);
                },
                'o' | 'O' => {
                    self.cursor.advance_n(2);
                    return self.lex_radix(8);
                },
                _ => {},
            }
        }
        self.lex_decimal()
    }

    /// Binary or octal integer, after the prefix has been consumed.
    fn lex_radix(&mut self, base: u32) -> Token {
        let digit_start = self.cursor.position();
        while is_digit_in_base(self.cursor.current_char(), base) {
            self.cursor.advance();
        }

        if self.cursor.position() == digit_start {
            return self.error_token(
                DiagnosticCode::E_INVALID_NUMBER,
                format!("no digits after base-{} prefix", base),
            );
        }

        let digits = self.cursor.slice_from(digit_start);
        match i64::from_str_radix(digits, base) {
            Ok(value) => self.make_token(TokenKind::IntLit(value)),
            Err(_) => {
                let value = digits
                    .chars()
                    .filter_map(|c| digit_value_in_base(c, base))
                    .fold(0.0f64, |acc, d| acc * base as f64 + d as f64);
                self.warn(
                    DiagnosticCode::W_INT_OVERFLOW,
                    "integer literal out of 64-bit range, value treated as float",
                );
                self.make_token(TokenKind::FloatLit(value))
            },
        }
    }

    /// Hexadecimal integer or hex float, after `0x` has been consumed.
    ///
    /// A `.` followed by hex digits turns the literal into a hex float,
    /// which then requires a binary exponent: `0x1.8p1` is 3.0.
    fn lex_hex(&mut self) -> Token {
        let digit_start = self.cursor.position();
        while self.cursor.current_char().is_ascii_hexdigit() {
            self.cursor.advance();
        }

        if self.cursor.position() == digit_start {
            return self.error_token(
                DiagnosticCode::E_INVALID_NUMBER,
                "no digits after base-16 prefix",
            );
        }

        let int_digits = self.cursor.slice_from(digit_start);

        let has_fraction = self.cursor.current_char() == '.'
            && self.cursor.peek_char(1).is_ascii_hexdigit();
        if !has_fraction {
            return match i64::from_str_radix(int_digits, 16) {
                Ok(value) => self.make_token(TokenKind::IntLit(value)),
                Err(_) => {
                    let value = int_digits
                        .chars()
                        .filter_map(|c| c.to_digit(16))
                        .fold(0.0f64, |acc, d| acc * 16.0 + d as f64);
                    self.warn(
                    DiagnosticCode::W_INT_OVERFLOW,
                    "integer literal out of 64-bit range, value treated as float",
                );
                    self.make_token(TokenKind::FloatLit(value))
                },
            };
        }

        let mut mantissa = int_digits
            .chars()
            .filter_map(|c| c.to_digit(16))
            .fold(0.0f64, |acc, d| acc * 16.0 + d as f64);

        self.cursor.advance(); // '.'
        let mut scale = 1.0 / 16.0;
        while let Some(d) = self.cursor.current_char().to_digit(16) {
            mantissa += d as f64 * scale;
            scale /= 16.0;
            self.cursor.advance();
        }

        if !matches!(self.cursor.current_char(), 'p' | 'P') {
            return self.error_token(
                DiagnosticCode::E_INVALID_NUMBER,
                "hex float requires a 'p' exponent",
            );
        }
        self.cursor.advance();

        let negative = match self.cursor.current_char() {
            '-' => {
                self.cursor.advance();
                true
            },
            '+' => {
                self.cursor.advance();
                false
            },
            _ => false,
        };

        let mut exponent = 0i32;
        let mut has_exp_digits = false;
        while let Some(d) = decimal_digit_value(self.cursor.current_char()) {
            has_exp_digits = true;
            exponent = exponent.saturating_mul(10).saturating_add(d as i32);
            self.cursor.advance();
        }
        if !has_exp_digits {
            return self.error_token(
                DiagnosticCode::E_INVALID_NUMBER,
                "no digits in hex float exponent",
            );
        }
        if negative {
            exponent = -exponent;
        }

        let value = mantissa * 2.0f64.powi(exponent);
        if !value.is_finite() {
            return self.error_token(
                DiagnosticCode::E_INVALID_NUMBER,
                "floating point literal is not representable",
            );
        }
        self.make_token(TokenKind::FloatLit(value))
    }

    /// Decimal integer, decimal float, or scientific notation, in either
    /// digit alphabet.
    fn lex_decimal(&mut self) -> Token {
        // Digits are normalized to ASCII as they are consumed so the final
        // value can be decoded with the standard parsers.
        let mut normalized = String::new();
        let mut is_float = false;

        self.eat_decimal_digits(&mut normalized);

        if matches!(self.cursor.current_char(), '.' | '٫')
            && is_digit_either(self.cursor.peek_char(1))
        {
            is_float = true;
            self.cursor.advance();
            normalized.push('.');
            self.eat_decimal_digits(&mut normalized);
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            is_float = true;
            self.cursor.advance();
            normalized.push('e');
            if matches!(self.cursor.current_char(), '+' | '-') {
                normalized.push(self.cursor.current_char());
                self.cursor.advance();
            }
            let before = normalized.len();
            self.eat_decimal_digits(&mut normalized);
            if normalized.len() == before {
                return self.error_token(
                    DiagnosticCode::E_INVALID_NUMBER,
                    "no digits in float exponent",
                );
            }
        }

        if is_float {
            match normalized.parse::<f64>() {
                Ok(value) if value.is_finite() => self.make_token(TokenKind::FloatLit(value)),
                _ => self.error_token(DiagnosticCode::E_INVALID_NUMBER, format!(
                    "floating point literal '{}' is not representable",
                    self.cursor.slice_from(self.token_start.offset)
                )),
            }
        } else {
            match normalized.parse::<i64>() {
                Ok(value) => self.make_token(TokenKind::IntLit(value)),
                Err(_) => match normalized.parse::<f64>() {
                    Ok(value) if value.is_finite() => {
                        self.warn(
                            DiagnosticCode::W_INT_OVERFLOW,
                            "integer literal out of 64-bit range, value treated as float",
                        );
                        self.make_token(TokenKind::FloatLit(value))
                    },
                    _ => self.error_token(DiagnosticCode::E_INVALID_NUMBER, format!(
                        "integer literal '{}' is not representable",
                        self.cursor.slice_from(self.token_start.offset)
                    )),
                },
            }
        }
    }

    /// Consumes a run of digits from either alphabet, appending their
    /// ASCII forms to `normalized`.
    fn eat_decimal_digits(&mut self, normalized: &mut String) {
        while let Some(d) = decimal_digit_value(self.cursor.current_char()) {
            normalized.push(char::from(b'0' + d as u8));
            self.cursor.advance();
        }
    }
}
