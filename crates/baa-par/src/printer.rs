//! AST pretty-printer.
//!
//! Renders a tree as indented text, one node per line: the node kind, its
//! distinguishing attribute (operator symbol, literal value, name), and
//! its span as `line:col-line:col`. This is the output format of the AST
//! tester tool.

use std::fmt::Write;

use baa_util::Span;

use crate::ast::*;

/// Renders a whole program.
pub fn print_program(program: &Program) -> String {
    let mut printer = TreePrinter::default();
    printer.emit(0, format_args!("Program {}", span_text(program.span)));
    for item in &program.items {
        printer.stmt(1, item);
    }
    printer.out
}

fn span_text(span: Span) -> String {
    format!(
        "{}:{}-{}:{}",
        span.start.line, span.start.column, span.end.line, span.end.column
    )
}

#[derive(Default)]
struct TreePrinter {
    out: String,
}

impl TreePrinter {
    fn emit(&mut self, depth: usize, text: std::fmt::Arguments<'_>) {
        for _ in 0..depth {
            self.out.push_str("  ");
        }
        let _ = writeln!(self.out, "{}", text);
    }

    fn stmt(&mut self, depth: usize, stmt: &Stmt) {
        match stmt {
            Stmt::Decl(decl) => self.decl(depth, decl),
            Stmt::Expr(s) => {
                self.emit(depth, format_args!("ExprStmt {}", span_text(s.span)));
                self.expr(depth + 1, &s.expr);
            },
            Stmt::Block(block) => self.block(depth, block),
            Stmt::If(s) => {
                self.emit(depth, format_args!("If {}", span_text(s.span)));
                self.expr(depth + 1, &s.condition);
                self.stmt(depth + 1, &s.then_branch);
                if let Some(else_branch) = &s.else_branch {
                    self.emit(depth + 1, format_args!("Else"));
                    self.stmt(depth + 2, else_branch);
                }
            },
            Stmt::While(s) => {
                self.emit(depth, format_args!("While {}", span_text(s.span)));
                self.expr(depth + 1, &s.condition);
                self.stmt(depth + 1, &s.body);
            },
            Stmt::DoWhile(s) => {
                self.emit(depth, format_args!("DoWhile {}", span_text(s.span)));
                self.stmt(depth + 1, &s.body);
                self.expr(depth + 1, &s.condition);
            },
            Stmt::For(s) => {
                self.emit(depth, format_args!("For {}", span_text(s.span)));
                if let Some(init) = &s.init {
                    self.stmt(depth + 1, init);
                }
                if let Some(condition) = &s.condition {
                    self.expr(depth + 1, condition);
                }
                if let Some(step) = &s.step {
                    self.expr(depth + 1, step);
                }
                self.stmt(depth + 1, &s.body);
            },
            Stmt::Return(s) => {
                self.emit(depth, format_args!("Return {}", span_text(s.span)));
                if let Some(value) = &s.value {
                    self.expr(depth + 1, value);
                }
            },
            Stmt::Break(s) => {
                self.emit(depth, format_args!("Break {}", span_text(s.span)));
            },
            Stmt::Continue(s) => {
                self.emit(depth, format_args!("Continue {}", span_text(s.span)));
            },
            Stmt::Switch(s) => {
                self.emit(depth, format_args!("Switch {}", span_text(s.span)));
                self.expr(depth + 1, &s.subject);
                for case in &s.cases {
                    self.emit(depth + 1, format_args!("Case {}", span_text(case.span)));
                    self.expr(depth + 2, &case.value);
                    for stmt in &case.body {
                        self.stmt(depth + 2, stmt);
                    }
                }
                if let Some(default) = &s.default {
                    self.emit(
                        depth + 1,
                        format_args!("Default {}", span_text(default.span)),
                    );
                    for stmt in &default.body {
                        self.stmt(depth + 2, stmt);
                    }
                }
            },
            Stmt::Import(s) => {
                let path = if s.bracketed {
                    format!("<{}>", s.path)
                } else {
                    format!("\"{}\"", s.path)
                };
                match s.alias {
                    Some(alias) => self.emit(
                        depth,
                        format_args!("Import {} as {} {}", path, alias, span_text(s.span)),
                    ),
                    None => {
                        self.emit(depth, format_args!("Import {} {}", path, span_text(s.span)));
                    },
                }
            },
        }
    }

    fn decl(&mut self, depth: usize, decl: &Decl) {
        match decl {
            Decl::Var(d) => {
                if d.modifiers.is_empty() {
                    self.emit(
                        depth,
                        format_args!("VarDecl '{}' {}", d.name, span_text(d.span)),
                    );
                } else {
                    self.emit(
                        depth,
                        format_args!(
                            "VarDecl '{}' [{}] {}",
                            d.name,
                            d.modifiers,
                            span_text(d.span)
                        ),
                    );
                }
                if let Some(ty) = &d.ty {
                    self.type_expr(depth + 1, ty);
                }
                if let Some(init) = &d.init {
                    self.expr(depth + 1, init);
                }
            },
            Decl::Function(d) => {
                if d.modifiers.is_empty() {
                    self.emit(
                        depth,
                        format_args!("FunctionDecl '{}' {}", d.name, span_text(d.span)),
                    );
                } else {
                    self.emit(
                        depth,
                        format_args!(
                            "FunctionDecl '{}' [{}] {}",
                            d.name,
                            d.modifiers,
                            span_text(d.span)
                        ),
                    );
                }
                for param in &d.params {
                    self.emit(
                        depth + 1,
                        format_args!("Param '{}' {}", param.name, span_text(param.span)),
                    );
                    self.type_expr(depth + 2, &param.ty);
                }
                if let Some(ret) = &d.ret {
                    self.type_expr(depth + 1, ret);
                }
                self.block(depth + 1, &d.body);
            },
        }
    }

    fn block(&mut self, depth: usize, block: &Block) {
        self.emit(depth, format_args!("Block {}", span_text(block.span)));
        for stmt in &block.statements {
            self.stmt(depth + 1, stmt);
        }
    }

    fn expr(&mut self, depth: usize, expr: &Expr) {
        match expr {
            Expr::Literal(e) => {
                let kind = match e.ty {
                    DeterminedType::Primitive(kind) => kind.name(),
                    DeterminedType::Unresolved => "?",
                };
                self.emit(
                    depth,
                    format_args!("Literal {} {} {}", kind, e.value, span_text(e.span)),
                );
            },
            Expr::Ident(e) => {
                self.emit(
                    depth,
                    format_args!("Ident '{}' {}", e.name, span_text(e.span)),
                );
            },
            Expr::Binary(e) => {
                self.emit(
                    depth,
                    format_args!("Binary '{}' {}", e.op.symbol(), span_text(e.span)),
                );
                self.expr(depth + 1, &e.left);
                self.expr(depth + 1, &e.right);
            },
            Expr::Unary(e) => {
                let position = if e.prefix { "prefix" } else { "postfix" };
                self.emit(
                    depth,
                    format_args!(
                        "Unary '{}' {} {}",
                        e.op.symbol(),
                        position,
                        span_text(e.span)
                    ),
                );
                self.expr(depth + 1, &e.operand);
            },
            Expr::Assign(e) => {
                let symbol = match e.op {
                    Some(op) => format!("{}=", op.symbol()),
                    None => "=".to_string(),
                };
                self.emit(
                    depth,
                    format_args!("Assign '{}' {}", symbol, span_text(e.span)),
                );
                self.expr(depth + 1, &e.target);
                self.expr(depth + 1, &e.value);
            },
            Expr::Call(e) => {
                self.emit(
                    depth,
                    format_args!("Call ({} args) {}", e.args.len(), span_text(e.span)),
                );
                self.expr(depth + 1, &e.callee);
                for arg in &e.args {
                    match arg.name {
                        Some(name) => self.emit(
                            depth + 1,
                            format_args!("Arg '{}' {}", name, span_text(arg.span)),
                        ),
                        None => {
                            self.emit(depth + 1, format_args!("Arg {}", span_text(arg.span)));
                        },
                    }
                    self.expr(depth + 2, &arg.value);
                }
            },
            Expr::Index(e) => {
                self.emit(depth, format_args!("Index {}", span_text(e.span)));
                self.expr(depth + 1, &e.array);
                self.expr(depth + 1, &e.index);
            },
            Expr::Member(e) => {
                self.emit(
                    depth,
                    format_args!("Member '{}' {}", e.member, span_text(e.span)),
                );
                self.expr(depth + 1, &e.object);
            },
            Expr::Cast(e) => {
                self.emit(depth, format_args!("Cast {}", span_text(e.span)));
                self.type_expr(depth + 1, &e.target);
                self.expr(depth + 1, &e.operand);
            },
            Expr::Grouping(e) => {
                self.emit(depth, format_args!("Grouping {}", span_text(e.span)));
                self.expr(depth + 1, &e.inner);
            },
        }
    }

    fn type_expr(&mut self, depth: usize, ty: &TypeExpr) {
        match ty {
            TypeExpr::Primitive(t) => {
                self.emit(
                    depth,
                    format_args!("Type {} {}", t.kind.name(), span_text(t.span)),
                );
            },
            TypeExpr::Array(t) => {
                self.emit(depth, format_args!("ArrayType {}", span_text(t.span)));
                self.type_expr(depth + 1, &t.elem);
                if let Some(size) = &t.size {
                    self.expr(depth + 1, size);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::parse_clean;

    #[test]
    fn test_print_expression_statement() {
        let program = parse_clean("١٢٣.");
        let text = print_program(&program);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Program "));
        assert!(lines[1].starts_with("  ExprStmt "));
        assert!(lines[2].starts_with("    Literal عدد_صحيح 123 "));
    }

    #[test]
    fn test_print_function() {
        let program = parse_clean("دالة مربع(س: عدد_صحيح) { إرجع س * س. }");
        let text = print_program(&program);
        assert!(text.contains("FunctionDecl 'مربع'"));
        assert!(text.contains("Param 'س'"));
        assert!(text.contains("Type عدد_صحيح"));
        assert!(text.contains("Return"));
        assert!(text.contains("Binary '*'"));
    }

    #[test]
    fn test_print_indentation_reflects_depth() {
        let program = parse_clean("إذا (أ) { ب. }");
        let text = print_program(&program);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with("  If "));
        assert!(lines[2].starts_with("    Ident 'أ'"));
        assert!(lines[3].starts_with("    Block "));
        assert!(lines[4].starts_with("      ExprStmt "));
    }

    #[test]
    fn test_print_spans_are_one_based() {
        let program = parse_clean("س.");
        let text = print_program(&program);
        assert!(text.contains("Ident 'س' 1:1-1:2"));
    }

    #[test]
    fn test_print_modifiers_and_import() {
        let program = parse_clean("ثابت متغير حد = ١.\n#تضمين <رياضيات>.");
        let text = print_program(&program);
        assert!(text.contains("VarDecl 'حد' [const]"));
        assert!(text.contains("Import <رياضيات>"));
    }
}
