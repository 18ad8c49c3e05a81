//! AST node definitions.
//!
//! The tree is a family of closed sum types: each node kind has exactly one
//! payload struct, every payload carries its [`Span`], and children are
//! owned (`Box`/`Vec`) with no parent pointers, so dropping the root frees
//! the whole tree and a walker visits every node exactly once.
//!
//! Every expression payload carries a [`DeterminedType`]. Literals resolve
//! their type at construction; identifiers and compound expressions start
//! as [`DeterminedType::Unresolved`] and are filled in by a later pass.

use std::fmt;

use baa_util::{Span, Symbol};

/// AST root: the ordered top-level items of one source file.
#[derive(Debug, Clone)]
pub struct Program {
    pub items: Vec<Stmt>,
    pub span: Span,
}

// ============================================================================
// DECLARATIONS
// ============================================================================

/// A declaration, at top level or inside a block.
#[derive(Debug, Clone)]
pub enum Decl {
    /// Variable declaration
    ///
    /// Example: `متغير س: عدد_صحيح = ٥.`
    Var(VarDecl),

    /// Function definition
    ///
    /// Example: `دالة مربع(س: عدد_صحيح) -> عدد_صحيح { إرجع س * س. }`
    Function(FunctionDecl),
}

impl Decl {
    pub fn span(&self) -> Span {
        match self {
            Decl::Var(d) => d.span,
            Decl::Function(d) => d.span,
        }
    }

    /// Declared name.
    pub fn name(&self) -> Symbol {
        match self {
            Decl::Var(d) => d.name,
            Decl::Function(d) => d.name,
        }
    }
}

/// Variable declaration.
#[derive(Debug, Clone)]
pub struct VarDecl {
    pub name: Symbol,
    pub modifiers: Modifiers,
    /// Type annotation; omitted means inferred later.
    pub ty: Option<TypeExpr>,
    pub init: Option<Expr>,
    /// Documentation comment attached to this declaration.
    pub doc: Option<String>,
    pub span: Span,
}

/// Function definition.
#[derive(Debug, Clone)]
pub struct FunctionDecl {
    pub name: Symbol,
    pub modifiers: Modifiers,
    pub params: Vec<Param>,
    /// Return type; omitted means `فراغ`.
    pub ret: Option<TypeExpr>,
    pub body: Block,
    pub doc: Option<String>,
    pub span: Span,
}

/// Function parameter.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: Symbol,
    pub ty: TypeExpr,
    pub span: Span,
}

/// Declaration modifier bit-set.
///
/// Example: `ثابت ساكن متغير س = ١.` carries `CONST | STATIC`.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const CONST: Modifiers = Modifiers(1 << 0);
    pub const STATIC: Modifiers = Modifiers(1 << 1);
    pub const EXTERN: Modifiers = Modifiers(1 << 2);
    pub const INLINE: Modifiers = Modifiers(1 << 3);
    pub const RESTRICT: Modifiers = Modifiers(1 << 4);
    pub const AUTO: Modifiers = Modifiers(1 << 5);
    pub const REGISTER: Modifiers = Modifiers(1 << 6);

    pub const fn empty() -> Modifiers {
        Modifiers(0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Modifiers) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Modifiers) {
        self.0 |= other.0;
    }

    fn names(self) -> Vec<&'static str> {
        [
            (Modifiers::CONST, "const"),
            (Modifiers::STATIC, "static"),
            (Modifiers::EXTERN, "extern"),
            (Modifiers::INLINE, "inline"),
            (Modifiers::RESTRICT, "restrict"),
            (Modifiers::AUTO, "auto"),
            (Modifiers::REGISTER, "register"),
        ]
        .into_iter()
        .filter(|(m, _)| self.contains(*m))
        .map(|(_, name)| name)
        .collect()
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(" "))
    }
}

impl fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Modifiers({})", self.names().join(" | "))
    }
}

// ============================================================================
// TYPES
// ============================================================================

/// Syntactic type expression.
#[derive(Debug, Clone)]
pub enum TypeExpr {
    /// A primitive type by name.
    Primitive(PrimitiveType),

    /// Array of an element type, with an optional size expression.
    ///
    /// Example: `عدد_صحيح[١٠]`
    Array(ArrayType),
}

impl TypeExpr {
    pub fn span(&self) -> Span {
        match self {
            TypeExpr::Primitive(t) => t.span,
            TypeExpr::Array(t) => t.span,
        }
    }
}

/// A primitive type reference.
#[derive(Debug, Clone)]
pub struct PrimitiveType {
    pub kind: PrimitiveKind,
    pub span: Span,
}

/// The primitive types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// `عدد_صحيح`
    Int,
    /// `عدد_حقيقي`
    Float,
    /// `حرف`
    Char,
    /// `فراغ`
    Void,
    /// `منطقي`
    Bool,
    /// `نص`
    Text,
}

impl PrimitiveKind {
    /// Source-level name of the type.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Int => "عدد_صحيح",
            PrimitiveKind::Float => "عدد_حقيقي",
            PrimitiveKind::Char => "حرف",
            PrimitiveKind::Void => "فراغ",
            PrimitiveKind::Bool => "منطقي",
            PrimitiveKind::Text => "نص",
        }
    }
}

/// Array type: element type plus optional size.
#[derive(Debug, Clone)]
pub struct ArrayType {
    pub elem: Box<TypeExpr>,
    pub size: Option<Box<Expr>>,
    pub span: Span,
}

// ============================================================================
// STATEMENTS
// ============================================================================

/// Statement.
#[derive(Debug, Clone)]
pub enum Stmt {
    /// Declaration in statement position.
    Decl(Decl),

    /// Expression statement: expression then `.`.
    Expr(ExprStmt),

    /// Brace-delimited statement list.
    Block(Block),

    /// `إذا (شرط) جملة [وإلا جملة]`
    If(IfStmt),

    /// `طالما (شرط) جملة`
    While(WhileStmt),

    /// `افعل جملة طالما (شرط).`
    DoWhile(DoWhileStmt),

    /// `لكل (تهيئة. شرط. خطوة) جملة`
    For(ForStmt),

    /// `إرجع [قيمة].`
    Return(ReturnStmt),

    /// `توقف.`
    Break(BreakStmt),

    /// `استمر.`
    Continue(ContinueStmt),

    /// `اختر (قيمة) { حالة … }`
    Switch(SwitchStmt),

    /// `#تضمين <مسار>.`
    Import(ImportStmt),
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Decl(d) => d.span(),
            Stmt::Expr(s) => s.span,
            Stmt::Block(b) => b.span,
            Stmt::If(s) => s.span,
            Stmt::While(s) => s.span,
            Stmt::DoWhile(s) => s.span,
            Stmt::For(s) => s.span,
            Stmt::Return(s) => s.span,
            Stmt::Break(s) => s.span,
            Stmt::Continue(s) => s.span,
            Stmt::Switch(s) => s.span,
            Stmt::Import(s) => s.span,
        }
    }
}

/// Expression statement.
#[derive(Debug, Clone)]
pub struct ExprStmt {
    pub expr: Expr,
    pub span: Span,
}

/// Block statement. An empty block is legal.
#[derive(Debug, Clone)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

/// If statement; a dangling else binds to the nearest `إذا`.
#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
    pub span: Span,
}

/// While loop.
#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
    pub span: Span,
}

/// Do-while loop: the body runs before the first condition check.
#[derive(Debug, Clone)]
pub struct DoWhileStmt {
    pub body: Box<Stmt>,
    pub condition: Expr,
    pub span: Span,
}

/// For loop; each of the three header parts may be empty.
#[derive(Debug, Clone)]
pub struct ForStmt {
    pub init: Option<Box<Stmt>>,
    pub condition: Option<Expr>,
    pub step: Option<Expr>,
    pub body: Box<Stmt>,
    pub span: Span,
}

/// Return statement.
#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

/// Break statement.
#[derive(Debug, Clone)]
pub struct BreakStmt {
    pub span: Span,
}

/// Continue statement.
#[derive(Debug, Clone)]
pub struct ContinueStmt {
    pub span: Span,
}

/// Switch statement.
#[derive(Debug, Clone)]
pub struct SwitchStmt {
    pub subject: Expr,
    pub cases: Vec<SwitchCase>,
    pub default: Option<DefaultCase>,
    pub span: Span,
}

/// One `حالة` arm.
#[derive(Debug, Clone)]
pub struct SwitchCase {
    pub value: Expr,
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// The `افتراضي` arm.
#[derive(Debug, Clone)]
pub struct DefaultCase {
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// Import statement. The path is recorded, not resolved.
#[derive(Debug, Clone)]
pub struct ImportStmt {
    pub path: String,
    /// True for `<مسار>`, false for `"مسار"`.
    pub bracketed: bool,
    pub alias: Option<Symbol>,
    pub span: Span,
}

// ============================================================================
// EXPRESSIONS
// ============================================================================

/// Expression.
#[derive(Debug, Clone)]
pub enum Expr {
    /// Literal value
    Literal(LiteralExpr),

    /// Identifier reference
    Ident(IdentExpr),

    /// Binary operation
    Binary(BinaryExpr),

    /// Unary operation, prefix or postfix
    Unary(UnaryExpr),

    /// Assignment, plain or compound
    Assign(AssignExpr),

    /// Function call
    Call(CallExpr),

    /// Array indexing
    Index(IndexExpr),

    /// Member access
    Member(MemberExpr),

    /// Type cast: `(نوع) قيمة`
    Cast(CastExpr),

    /// Parenthesized expression, retained for round-trip printing
    Grouping(GroupingExpr),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Literal(e) => e.span,
            Expr::Ident(e) => e.span,
            Expr::Binary(e) => e.span,
            Expr::Unary(e) => e.span,
            Expr::Assign(e) => e.span,
            Expr::Call(e) => e.span,
            Expr::Index(e) => e.span,
            Expr::Member(e) => e.span,
            Expr::Cast(e) => e.span,
            Expr::Grouping(e) => e.span,
        }
    }

    /// The type annotation slot shared by every expression kind.
    pub fn determined_type(&self) -> &DeterminedType {
        match self {
            Expr::Literal(e) => &e.ty,
            Expr::Ident(e) => &e.ty,
            Expr::Binary(e) => &e.ty,
            Expr::Unary(e) => &e.ty,
            Expr::Assign(e) => &e.ty,
            Expr::Call(e) => &e.ty,
            Expr::Index(e) => &e.ty,
            Expr::Member(e) => &e.ty,
            Expr::Cast(e) => &e.ty,
            Expr::Grouping(e) => &e.ty,
        }
    }
}

/// Resolved-or-pending type of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeterminedType {
    /// Not yet known; filled by a later pass.
    #[default]
    Unresolved,
    /// Known at construction (literals, casts).
    Primitive(PrimitiveKind),
}

/// Literal expression.
#[derive(Debug, Clone)]
pub struct LiteralExpr {
    pub value: LiteralValue,
    pub ty: DeterminedType,
    pub span: Span,
}

impl LiteralExpr {
    /// Builds a literal; the type is determined by the value.
    pub fn new(value: LiteralValue, span: Span) -> Self {
        let ty = DeterminedType::Primitive(match value {
            LiteralValue::Int(_) => PrimitiveKind::Int,
            LiteralValue::Float(_) => PrimitiveKind::Float,
            LiteralValue::Bool(_) => PrimitiveKind::Bool,
            LiteralValue::Char(_) => PrimitiveKind::Char,
            LiteralValue::Str(_) => PrimitiveKind::Text,
            LiteralValue::Null => PrimitiveKind::Void,
        });
        Self { value, ty, span }
    }
}

/// Decoded literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Char(char),
    Str(String),
    /// `فارغ`
    Null,
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Int(v) => write!(f, "{}", v),
            LiteralValue::Float(v) => write!(f, "{}", v),
            LiteralValue::Bool(v) => write!(f, "{}", v),
            LiteralValue::Char(v) => write!(f, "{:?}", v),
            LiteralValue::Str(v) => write!(f, "{:?}", v),
            LiteralValue::Null => write!(f, "null"),
        }
    }
}

/// Identifier expression.
#[derive(Debug, Clone)]
pub struct IdentExpr {
    pub name: Symbol,
    pub ty: DeterminedType,
    pub span: Span,
}

/// Binary expression.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub ty: DeterminedType,
    pub span: Span,
}

/// Unary expression; `prefix` distinguishes `++س` from `س++`.
#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub prefix: bool,
    pub operand: Box<Expr>,
    pub ty: DeterminedType,
    pub span: Span,
}

/// Assignment; `op` is `None` for plain `=` and the arithmetic operator
/// for compound forms (`+=` carries [`BinaryOp::Add`]).
#[derive(Debug, Clone)]
pub struct AssignExpr {
    pub target: Box<Expr>,
    pub value: Box<Expr>,
    pub op: Option<BinaryOp>,
    pub ty: DeterminedType,
    pub span: Span,
}

/// Call expression.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub args: Vec<Arg>,
    pub ty: DeterminedType,
    pub span: Span,
}

/// A call argument, positional or named (`اسم: قيمة`).
#[derive(Debug, Clone)]
pub struct Arg {
    pub name: Option<Symbol>,
    pub value: Expr,
    pub span: Span,
}

/// Index expression.
#[derive(Debug, Clone)]
pub struct IndexExpr {
    pub array: Box<Expr>,
    pub index: Box<Expr>,
    pub ty: DeterminedType,
    pub span: Span,
}

/// Member access expression.
#[derive(Debug, Clone)]
pub struct MemberExpr {
    pub object: Box<Expr>,
    pub member: Symbol,
    pub ty: DeterminedType,
    pub span: Span,
}

/// Cast expression; the determined type is the target when primitive.
#[derive(Debug, Clone)]
pub struct CastExpr {
    pub operand: Box<Expr>,
    pub target: TypeExpr,
    pub ty: DeterminedType,
    pub span: Span,
}

/// Parenthesized expression.
#[derive(Debug, Clone)]
pub struct GroupingExpr {
    pub inner: Box<Expr>,
    pub ty: DeterminedType,
    pub span: Span,
}

// ============================================================================
// OPERATORS
// ============================================================================

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
}

impl BinaryOp {
    /// Source symbol of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
        }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-`
    Neg,
    /// `+`
    Plus,
    /// `!`
    Not,
    /// `~`
    BitNot,
    /// `++`
    Inc,
    /// `--`
    Dec,
}

impl UnaryOp {
    /// Source symbol of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Plus => "+",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
            UnaryOp::Inc => "++",
            UnaryOp::Dec => "--",
        }
    }
}
