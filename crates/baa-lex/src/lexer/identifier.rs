//! Identifier and keyword lexing.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::token::{Token, TokenKind};
use crate::unicode::is_ident_continue;
use crate::Lexer;

/// The closed keyword table. Boolean literals live here too: `صحيح` and
/// `خطأ` lex directly to `BoolLit` so the value is decoded at lexing time
/// like every other literal.
static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let mut map = FxHashMap::default();
    map.insert("دالة", TokenKind::Function);
    map.insert("إرجع", TokenKind::Return);
    map.insert("إذا", TokenKind::If);
    map.insert("وإلا", TokenKind::Else);
    map.insert("طالما", TokenKind::While);
    map.insert("لكل", TokenKind::For);
    map.insert("افعل", TokenKind::Do);
    map.insert("اختر", TokenKind::Switch);
    map.insert("حالة", TokenKind::Case);
    map.insert("افتراضي", TokenKind::Default);
    map.insert("توقف", TokenKind::Break);
    map.insert("استمر", TokenKind::Continue);
    map.insert("متغير", TokenKind::Var);
    map.insert("ثابت", TokenKind::Const);
    map.insert("ساكن", TokenKind::Static);
    map.insert("خارجي", TokenKind::Extern);
    map.insert("مضمن", TokenKind::Inline);
    map.insert("مقيد", TokenKind::Restrict);
    map.insert("تلقائي", TokenKind::Auto);
    map.insert("سجل", TokenKind::Register);
    map.insert("فارغ", TokenKind::Null);
    map.insert("صحيح", TokenKind::BoolLit(true));
    map.insert("خطأ", TokenKind::BoolLit(false));
    map.insert("عدد_صحيح", TokenKind::TypeInt);
    map.insert("عدد_حقيقي", TokenKind::TypeFloat);
    map.insert("حرف", TokenKind::TypeChar);
    map.insert("فراغ", TokenKind::TypeVoid);
    map.insert("منطقي", TokenKind::TypeBool);
    map.insert("نص", TokenKind::TypeString);
    map
});

/// Looks up a lexeme in the keyword table.
pub fn keyword_kind(lexeme: &str) -> Option<TokenKind> {
    KEYWORDS.get(lexeme).cloned()
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// The caller has verified the current code point is identifier-start;
    /// continuation accepts letters of both scripts, underscore, and
    /// digits of both alphabets.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let lexeme = self.cursor.slice_from(self.token_start.offset);
        match keyword_kind(lexeme) {
            Some(kind) => self.make_token(kind),
            None => self.make_token(TokenKind::Identifier),
        }
    }
}
