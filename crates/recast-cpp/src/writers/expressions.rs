use super::write_expr;
use crate::context::Context;
use crate::error::Result;
use recast_ast::{BinOp, Expr};
use recast_common::Span;

pub(super) fn write_null(ctx: &mut Context, span: Span) -> Result<()> {
    ctx.copy_to(span.start);
    ctx.write("nullptr");
    ctx.skip_to(span.end);
    Ok(())
}

pub(super) fn write_field_access(ctx: &mut Context, object: &Expr, span: Span) -> Result<()> {
    write_expr(ctx, object)?;
    // ".field" is spelled the same in C++
    ctx.copy_to(span.end);
    Ok(())
}

pub(super) fn write_method_call(
    ctx: &mut Context,
    receiver: Option<&Expr>,
    args: &[Expr],
    span: Span,
) -> Result<()> {
    if let Some(receiver) = receiver {
        write_expr(ctx, receiver)?;
    }
    for arg in args {
        ctx.copy_to(arg.span.start);
        write_expr(ctx, arg)?;
    }
    ctx.copy_to(span.end);
    Ok(())
}

pub(super) fn write_index(
    ctx: &mut Context,
    object: &Expr,
    index: &Expr,
    span: Span,
) -> Result<()> {
    write_expr(ctx, object)?;
    ctx.copy_to(index.span.start);
    write_expr(ctx, index)?;
    ctx.copy_to(span.end);
    Ok(())
}

pub(super) fn write_binary(
    ctx: &mut Context,
    op: BinOp,
    lhs: &Expr,
    rhs: &Expr,
    span: Span,
) -> Result<()> {
    if op == BinOp::UnsignedShr {
        return Err(ctx.unsupported(">>> isn't supported; C++ has no unsigned right shift"));
    }
    write_expr(ctx, lhs)?;
    ctx.copy_to(rhs.span.start);
    write_expr(ctx, rhs)?;
    ctx.copy_to(span.end);
    Ok(())
}

/// Prefix and postfix forms both work out of span arithmetic: whichever
/// side the operator is on lands in a transcribed gap.
pub(super) fn write_unary(ctx: &mut Context, operand: &Expr, span: Span) -> Result<()> {
    ctx.copy_to(operand.span.start);
    write_expr(ctx, operand)?;
    ctx.copy_to(span.end);
    Ok(())
}

pub(super) fn write_assign(
    ctx: &mut Context,
    target: &Expr,
    value: &Expr,
    span: Span,
) -> Result<()> {
    write_expr(ctx, target)?;
    ctx.copy_to(value.span.start);
    write_expr(ctx, value)?;
    ctx.copy_to(span.end);
    Ok(())
}

pub(super) fn write_paren(ctx: &mut Context, inner: &Expr, span: Span) -> Result<()> {
    ctx.copy_to(inner.span.start);
    write_expr(ctx, inner)?;
    ctx.copy_to(span.end);
    Ok(())
}
