//! Diagnostic codes for identifying frontend errors and warnings.
//!
//! A [`DiagnosticCode`] uniquely names a diagnostic (`E1002`,
//! `W1001`) so users can look it up in documentation or suppress it.
//! Lexer diagnostics use the 1xxx range, parser diagnostics 2xxx.
//!
//! # Examples
//!
//! ```
//! use baa_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1002);
//! assert_eq!(code.as_str(), "E1002");
//! ```

/// A unique code identifying a diagnostic message.
///
/// Codes follow the format `{prefix}{number}` where `prefix` is "E" for
/// errors or "W" for warnings and `number` is zero-padded to four digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// "E" for errors, "W" for warnings.
    pub prefix: &'static str,
    /// The numeric identifier.
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code.
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// The code prefix.
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// The numeric identifier.
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// The full code string, e.g. `E1002`.
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERRORS (E1xxx)
    // =========================================================================

    /// E1001: a code point the lexer has no rule for
    pub const E_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: unterminated string literal
    pub const E_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: malformed numeric literal
    pub const E_INVALID_NUMBER: Self = Self::new("E", 1003);
    /// E1004: unterminated block comment
    pub const E_UNTERMINATED_COMMENT: Self = Self::new("E", 1004);
    /// E1005: unknown or malformed escape sequence
    pub const E_INVALID_ESCAPE: Self = Self::new("E", 1005);
    /// E1006: empty, overlong or unterminated character literal
    pub const E_BAD_CHAR_LITERAL: Self = Self::new("E", 1006);
    /// E1007: `#` followed by an unknown directive name
    pub const E_UNKNOWN_DIRECTIVE: Self = Self::new("E", 1007);

    // =========================================================================
    // PARSER ERRORS (E2xxx)
    // =========================================================================

    /// E2001: token that fits no production at this point
    pub const E_UNEXPECTED_TOKEN: Self = Self::new("E", 2001);
    /// E2002: a specific token was required and missing
    pub const E_EXPECTED_TOKEN: Self = Self::new("E", 2002);
    /// E2003: expression required
    pub const E_EXPECTED_EXPRESSION: Self = Self::new("E", 2003);
    /// E2004: type name required
    pub const E_EXPECTED_TYPE: Self = Self::new("E", 2004);
    /// E2005: declaration required after modifiers
    pub const E_EXPECTED_DECLARATION: Self = Self::new("E", 2005);

    // =========================================================================
    // WARNINGS (W1xxx lexer, W2xxx parser)
    // =========================================================================

    /// W1001: integer literal widened to float
    pub const W_INT_OVERFLOW: Self = Self::new("W", 1001);
    /// W2001: second `افتراضي` arm in one switch
    pub const W_DUPLICATE_DEFAULT: Self = Self::new("W", 2001);
    /// W2002: modifier repeated on one declaration
    pub const W_DUPLICATE_MODIFIER: Self = Self::new("W", 2002);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_pads_to_four_digits() {
        assert_eq!(DiagnosticCode::new("E", 1).as_str(), "E0001");
        assert_eq!(DiagnosticCode::new("W", 42).as_str(), "W0042");
        assert_eq!(DiagnosticCode::E_UNTERMINATED_STRING.as_str(), "E1002");
    }

    #[test]
    fn test_display_and_debug() {
        let code = DiagnosticCode::E_EXPECTED_TOKEN;
        assert_eq!(format!("{}", code), "E2002");
        assert_eq!(format!("{:?}", code), "DiagnosticCode(E2002)");
    }

    #[test]
    fn test_code_equality() {
        assert_eq!(
            DiagnosticCode::new("E", 1001),
            DiagnosticCode::E_UNEXPECTED_CHAR
        );
        assert_ne!(
            DiagnosticCode::E_UNEXPECTED_CHAR,
            DiagnosticCode::E_INVALID_NUMBER
        );
    }

    #[test]
    fn test_lexer_and_parser_ranges() {
        assert!(DiagnosticCode::E_UNKNOWN_DIRECTIVE.number() < 2000);
        assert!(DiagnosticCode::E_UNEXPECTED_TOKEN.number() >= 2000);
    }
}
