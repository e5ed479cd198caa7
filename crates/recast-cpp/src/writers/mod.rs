//! Per-node-kind writers and dispatch.
//!
//! Dispatch is an exhaustive match over the closed node-kind enums: a new
//! grammar kind without a writer is a compile error here, while kinds
//! deliberately left untranslated sit in the `Unsupported` arms and fail
//! with a positioned diagnostic at translation time.
//!
//! Writer contract: on entry the context's cursor equals the node's start
//! offset; on success exactly the node's C++ text has been emitted and
//! the cursor sits at the node's end offset. Composite writers recurse,
//! transcribing the inter-child gaps.

mod declarations;
mod expressions;
mod statements;

use crate::context::Context;
use crate::error::Result;
use recast_ast::{CompilationUnit, Expr, ExprKind, Stmt, StmtKind};

pub use statements::write_block;

/// Dispatch a statement to its writer.
pub fn write_stmt(ctx: &mut Context, stmt: &Stmt) -> Result<()> {
    match &stmt.kind {
        StmtKind::Block(block) => statements::write_block(ctx, block),
        StmtKind::If(if_stmt) => statements::write_if(ctx, if_stmt, stmt.span),
        StmtKind::While(while_stmt) => statements::write_while(ctx, while_stmt, stmt.span),
        StmtKind::Return(ret) => statements::write_return(ctx, ret, stmt.span),
        StmtKind::Expr(expr) => statements::write_expr_stmt(ctx, expr, stmt.span),
        StmtKind::LocalVar(decl) => statements::write_local_var(ctx, decl, stmt.span),
        StmtKind::Unsupported(kind) => {
            Err(ctx.unsupported(format!("{kind} isn't supported")))
        }
    }
}

/// Dispatch an expression to its writer.
pub fn write_expr(ctx: &mut Context, expr: &Expr) -> Result<()> {
    match &expr.kind {
        ExprKind::IntLit
        | ExprKind::FloatLit
        | ExprKind::BoolLit(_)
        | ExprKind::CharLit
        | ExprKind::StringLit
        | ExprKind::Name(_) => {
            // identical spelling in C++; transcribed, comments and all
            ctx.copy_to(expr.span.end);
            Ok(())
        }
        ExprKind::NullLit => expressions::write_null(ctx, expr.span),
        ExprKind::FieldAccess { object, .. } => {
            expressions::write_field_access(ctx, object, expr.span)
        }
        ExprKind::MethodCall { receiver, args, .. } => {
            expressions::write_method_call(ctx, receiver.as_deref(), args, expr.span)
        }
        ExprKind::Index { object, index } => {
            expressions::write_index(ctx, object, index, expr.span)
        }
        ExprKind::Binary { op, lhs, rhs } => {
            expressions::write_binary(ctx, *op, lhs, rhs, expr.span)
        }
        ExprKind::Unary { operand } | ExprKind::Update { operand } => {
            expressions::write_unary(ctx, operand, expr.span)
        }
        ExprKind::Assign { target, value } => {
            expressions::write_assign(ctx, target, value, expr.span)
        }
        ExprKind::Paren(inner) => expressions::write_paren(ctx, inner, expr.span),
        ExprKind::Unsupported(kind) => {
            Err(ctx.unsupported(format!("{kind} isn't supported")))
        }
    }
}

/// Dispatch a whole compilation unit.
pub fn write_unit(ctx: &mut Context, unit: &CompilationUnit) -> Result<()> {
    declarations::write_unit(ctx, unit)
}
