//! AST traversal.
//!
//! Consumers walk the tree through the [`Visitor`] trait: override the
//! node kinds of interest and call the matching `walk_*` function to
//! descend. The ownership tree has no cycles and no sharing, so a full
//! walk visits every node exactly once.

use crate::ast::*;

/// Read-only visitor over the AST.
///
/// Every method defaults to walking the node's children; the parent of a
/// node, when needed, is whatever frame the caller keeps on its own stack.
pub trait Visitor {
    fn visit_program(&mut self, program: &Program) {
        walk_program(self, program);
    }

    fn visit_stmt(&mut self, stmt: &Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_decl(&mut self, decl: &Decl) {
        walk_decl(self, decl);
    }

    fn visit_expr(&mut self, expr: &Expr) {
        walk_expr(self, expr);
    }

    fn visit_type(&mut self, ty: &TypeExpr) {
        walk_type(self, ty);
    }
}

/// Walks the top-level items in source order.
pub fn walk_program<V: Visitor + ?Sized>(visitor: &mut V, program: &Program) {
    for item in &program.items {
        visitor.visit_stmt(item);
    }
}

/// Walks the children of a statement.
pub fn walk_stmt<V: Visitor + ?Sized>(visitor: &mut V, stmt: &Stmt) {
    match stmt {
        Stmt::Decl(decl) => visitor.visit_decl(decl),
        Stmt::Expr(s) => visitor.visit_expr(&s.expr),
        Stmt::Block(block) => {
            for stmt in &block.statements {
                visitor.visit_stmt(stmt);
            }
        },
        Stmt::If(s) => {
            visitor.visit_expr(&s.condition);
            visitor.visit_stmt(&s.then_branch);
            if let Some(else_branch) = &s.else_branch {
                visitor.visit_stmt(else_branch);
            }
        },
        Stmt::While(s) => {
            visitor.visit_expr(&s.condition);
            visitor.visit_stmt(&s.body);
        },
        Stmt::DoWhile(s) => {
            visitor.visit_stmt(&s.body);
            visitor.visit_expr(&s.condition);
        },
        Stmt::For(s) => {
            if let Some(init) = &s.init {
                visitor.visit_stmt(init);
            }
            if let Some(condition) = &s.condition {
                visitor.visit_expr(condition);
            }
            if let Some(step) = &s.step {
                visitor.visit_expr(step);
            }
            visitor.visit_stmt(&s.body);
        },
        Stmt::Return(s) => {
            if let Some(value) = &s.value {
                visitor.visit_expr(value);
            }
        },
        Stmt::Break(_) | Stmt::Continue(_) | Stmt::Import(_) => {},
        Stmt::Switch(s) => {
            visitor.visit_expr(&s.subject);
            for case in &s.cases {
                visitor.visit_expr(&case.value);
                for stmt in &case.body {
                    visitor.visit_stmt(stmt);
                }
            }
            if let Some(default) = &s.default {
                for stmt in &default.body {
                    visitor.visit_stmt(stmt);
                }
            }
        },
    }
}

/// Walks the children of a declaration.
pub fn walk_decl<V: Visitor + ?Sized>(visitor: &mut V, decl: &Decl) {
    match decl {
        Decl::Var(decl) => {
            if let Some(ty) = &decl.ty {
                visitor.visit_type(ty);
            }
            if let Some(init) = &decl.init {
                visitor.visit_expr(init);
            }
        },
        Decl::Function(decl) => {
            for param in &decl.params {
                visitor.visit_type(&param.ty);
            }
            if let Some(ret) = &decl.ret {
                visitor.visit_type(ret);
            }
            for stmt in &decl.body.statements {
                visitor.visit_stmt(stmt);
            }
        },
    }
}

/// Walks the children of an expression.
pub fn walk_expr<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expr) {
    match expr {
        Expr::Literal(_) | Expr::Ident(_) => {},
        Expr::Binary(e) => {
            visitor.visit_expr(&e.left);
            visitor.visit_expr(&e.right);
        },
        Expr::Unary(e) => visitor.visit_expr(&e.operand),
        Expr::Assign(e) => {
            visitor.visit_expr(&e.target);
            visitor.visit_expr(&e.value);
        },
        Expr::Call(e) => {
            visitor.visit_expr(&e.callee);
            for arg in &e.args {
                visitor.visit_expr(&arg.value);
            }
        },
        Expr::Index(e) => {
            visitor.visit_expr(&e.array);
            visitor.visit_expr(&e.index);
        },
        Expr::Member(e) => visitor.visit_expr(&e.object),
        Expr::Cast(e) => {
            visitor.visit_type(&e.target);
            visitor.visit_expr(&e.operand);
        },
        Expr::Grouping(e) => visitor.visit_expr(&e.inner),
    }
}

/// Walks the children of a type expression.
pub fn walk_type<V: Visitor + ?Sized>(visitor: &mut V, ty: &TypeExpr) {
    match ty {
        TypeExpr::Primitive(_) => {},
        TypeExpr::Array(array) => {
            visitor.visit_type(&array.elem);
            if let Some(size) = &array.size {
                visitor.visit_expr(size);
            }
        },
    }
}
