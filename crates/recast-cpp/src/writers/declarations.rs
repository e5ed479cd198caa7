use super::statements::{write_block, write_typed_declarators};
use crate::context::{Context, OutputKind};
use crate::error::Result;
use crate::types::translate_type;
use recast_ast::{ClassDecl, CompilationUnit, FieldDecl, Member, MemberKind, MethodDecl};
use recast_common::Span;

/// Write a whole compilation unit: package/import directives are consumed
/// without output, classes are translated in source order, and everything
/// in between (comments, blank lines) is transcribed.
pub(super) fn write_unit(ctx: &mut Context, unit: &CompilationUnit) -> Result<()> {
    enum Item<'a> {
        Directive(Span),
        Class(&'a ClassDecl),
    }

    let mut items: Vec<Item> = unit
        .directives
        .iter()
        .map(|&span| Item::Directive(span))
        .chain(unit.types.iter().map(Item::Class))
        .collect();
    items.sort_by_key(|item| match item {
        Item::Directive(span) => span.start,
        Item::Class(class) => class.span.start,
    });

    for item in items {
        match item {
            Item::Directive(span) => {
                ctx.copy_to(span.start);
                ctx.skip_to(span.end);
                ctx.skip_newline();
            }
            Item::Class(class) => {
                ctx.copy_to(class.span.start);
                write_class(ctx, class)?;
            }
        }
    }

    ctx.copy_to(unit.span.end);
    Ok(())
}

fn write_class(ctx: &mut Context, class: &ClassDecl) -> Result<()> {
    // TODO: emit access specifier sections from Java member modifiers
    if let Some(modifiers) = class.modifiers {
        ctx.skip_to(modifiers.end);
        ctx.skip_space_and_comments();
    }

    // "class Name {" reads the same in C++
    ctx.copy_to(class.body_span.start + 1);

    for member in &class.members {
        ctx.copy_to(member.span.start);
        write_member(ctx, member)?;
    }

    ctx.copy_to(class.body_span.end);
    ctx.write(";");
    Ok(())
}

fn write_member(ctx: &mut Context, member: &Member) -> Result<()> {
    match &member.kind {
        MemberKind::Method(method) => write_method(ctx, method, member.span),
        MemberKind::Field(field) => write_field(ctx, field, member.span),
        MemberKind::Unsupported(kind) => {
            Err(ctx.unsupported(format!("{kind} members aren't supported yet")))
        }
    }
}

fn write_method(ctx: &mut Context, method: &MethodDecl, span: Span) -> Result<()> {
    if let Some(modifiers) = method.modifiers {
        ctx.skip_to(modifiers.end);
        ctx.skip_space_and_comments();
    }

    ctx.copy_to(method.return_type.span.start);
    let return_type = translate_type(&method.return_type, ctx)?;
    ctx.write(&return_type);
    ctx.skip_to(method.return_type.span.end);

    ctx.copy_to(method.name_span.end);

    for param in &method.params {
        ctx.copy_to(param.ty.span.start);
        let param_type = translate_type(&param.ty, ctx)?;
        ctx.write(&param_type);
        ctx.skip_to(param.ty.span.end);
        ctx.copy_to(param.span.end);
    }
    ctx.copy_to(method.params_span.end);

    match (&method.body, ctx.output_kind()) {
        (Some(body), OutputKind::Header) => {
            // prototype only; the body stays in the source file
            ctx.write(";");
            ctx.skip_to(body.span.end);
        }
        (Some(body), OutputKind::Source) => {
            ctx.copy_to(body.span.start);
            write_block(ctx, body)?;
        }
        (None, _) => {}
    }

    ctx.copy_to(span.end);
    Ok(())
}

fn write_field(ctx: &mut Context, field: &FieldDecl, span: Span) -> Result<()> {
    if let Some(modifiers) = field.modifiers {
        ctx.skip_to(modifiers.end);
        ctx.skip_space_and_comments();
    }
    write_typed_declarators(ctx, &field.ty, &field.declarators, span.end)
}
