//! baa-lex - Lexical Analyzer for the Baa language.
//!
//! The lexer is a pull-based tokenizer over a shared, immutable source
//! buffer: each call to [`Lexer::next_token`] scans and returns exactly one
//! [`Token`]. End of input is a token ([`TokenKind::Eof`]), not the end of
//! the sequence, and lexical errors are tokens too ([`TokenKind::Error`]),
//! so a caller can always keep pulling.
//!
//! Baa's lexical surface freely mixes Unicode Arabic and ASCII:
//!
//! - keywords are Arabic words (`دالة`, `إذا`, `طالما`, `إرجع`)
//! - numeric literals may use either digit alphabet (`123` / `١٢٣`) and
//!   either decimal separator (`.` / `٫`), in five forms (decimal, hex,
//!   binary, octal, scientific, plus hex floats like `0x1.8p1`)
//! - strings come in four flavors (`"…"`, `"""…"""`, raw `خ"…"`, raw
//!   multi-line `خ"""…"""`) with Latin (`\n`) and Arabic (`\س`) escapes
//! - the statement terminator is `.`
//!
//! Whitespace, newlines and comments are emitted as ordinary tokens so the
//! token stream concatenates back to the original source; the parser
//! filters them. Block comments do not nest: the first `*/` closes the
//! comment.

pub mod cursor;
pub mod lexer;
pub mod token;
pub mod unicode;

mod edge_cases;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};
