use super::{write_expr, write_stmt};
use crate::context::Context;
use crate::error::Result;
use crate::types::translate_type;
use recast_ast::{Block, Expr, IfStmt, LocalVarDecl, ReturnStmt, TypeRef, VarDeclarator, WhileStmt};
use recast_common::Span;

/// Write a braced block, recursing on each statement and transcribing the
/// braces and inter-statement whitespace.
pub fn write_block(ctx: &mut Context, block: &Block) -> Result<()> {
    for stmt in &block.statements {
        ctx.copy_to(stmt.span.start);
        write_stmt(ctx, stmt)?;
    }
    ctx.copy_to(block.span.end);
    Ok(())
}

pub(super) fn write_if(ctx: &mut Context, if_stmt: &IfStmt, span: Span) -> Result<()> {
    ctx.copy_to(if_stmt.condition.span.start);
    write_expr(ctx, &if_stmt.condition)?;
    ctx.copy_to(if_stmt.then_branch.span.start);
    write_stmt(ctx, &if_stmt.then_branch)?;
    if let Some(else_branch) = &if_stmt.else_branch {
        // the else keyword rides along in the gap
        ctx.copy_to(else_branch.span.start);
        write_stmt(ctx, else_branch)?;
    }
    ctx.copy_to(span.end);
    Ok(())
}

pub(super) fn write_while(ctx: &mut Context, while_stmt: &WhileStmt, span: Span) -> Result<()> {
    ctx.copy_to(while_stmt.condition.span.start);
    write_expr(ctx, &while_stmt.condition)?;
    ctx.copy_to(while_stmt.body.span.start);
    write_stmt(ctx, &while_stmt.body)?;
    ctx.copy_to(span.end);
    Ok(())
}

pub(super) fn write_return(ctx: &mut Context, ret: &ReturnStmt, span: Span) -> Result<()> {
    if let Some(value) = &ret.value {
        ctx.copy_to(value.span.start);
        write_expr(ctx, value)?;
    }
    ctx.copy_to(span.end);
    Ok(())
}

pub(super) fn write_expr_stmt(ctx: &mut Context, expr: &Expr, span: Span) -> Result<()> {
    ctx.copy_to(expr.span.start);
    write_expr(ctx, expr)?;
    ctx.copy_to(span.end);
    Ok(())
}

pub(super) fn write_local_var(ctx: &mut Context, decl: &LocalVarDecl, span: Span) -> Result<()> {
    write_typed_declarators(ctx, &decl.ty, &decl.declarators, span.end)
}

/// Shared by local variable and field declarations: replace the type
/// token, then transcribe each declarator, recursing on initializers.
pub(super) fn write_typed_declarators(
    ctx: &mut Context,
    ty: &TypeRef,
    declarators: &[VarDeclarator],
    end: u32,
) -> Result<()> {
    ctx.copy_to(ty.span.start);
    let target = translate_type(ty, ctx)?;
    ctx.write(&target);
    ctx.skip_to(ty.span.end);

    for declarator in declarators {
        ctx.copy_to(declarator.name_span.end);
        if let Some(init) = &declarator.init {
            ctx.copy_to(init.span.start);
            write_expr(ctx, init)?;
        }
        ctx.copy_to(declarator.span.end);
    }

    ctx.copy_to(end);
    Ok(())
}
