//! Format-preserving Java → C++ emission.
//!
//! The engine walks a parsed Java AST and emits C++ text, keeping the
//! original whitespace, line structure, and comments intact; only tokens
//! that differ between the languages are replaced. A translation either
//! returns the complete output or fails fast with a positioned
//! diagnostic; partial output is never returned.

mod context;
mod error;
mod profile;
mod transcribe;
mod types;
mod writer;
mod writers;

pub use context::{Context, OutputKind};
pub use error::{ErrorKind, Result, TranslateError};
pub use profile::CppProfile;
pub use types::translate_type;
pub use writer::TargetWriter;
pub use writers::{write_block, write_expr, write_stmt, write_unit};

use recast_ast::{Block, CompilationUnit, Stmt};
use recast_common::SourceFile;

/// Translate a single statement.
///
/// `source` must be the text the statement was parsed from; the original
/// formatting lives there, not in the AST.
pub fn translate_statement(
    stmt: &Stmt,
    source: &SourceFile,
    source_tab_stop: u32,
    profile: &CppProfile,
) -> Result<String> {
    let mut ctx = Context::new(source, source_tab_stop, profile, OutputKind::Source);
    ctx.set_position(stmt.span.start);
    write_stmt(&mut ctx, stmt)?;
    Ok(ctx.finish())
}

/// Translate a statement block (method-body granularity).
pub fn translate_block(
    block: &Block,
    source: &SourceFile,
    source_tab_stop: u32,
    profile: &CppProfile,
) -> Result<String> {
    let mut ctx = Context::new(source, source_tab_stop, profile, OutputKind::Source);
    ctx.set_position(block.span.start);
    write_block(&mut ctx, block)?;
    Ok(ctx.finish())
}

/// Translate a whole compilation unit, as a header or a source file.
pub fn translate_unit(
    unit: &CompilationUnit,
    source: &SourceFile,
    source_tab_stop: u32,
    profile: &CppProfile,
    output_kind: OutputKind,
) -> Result<String> {
    let mut ctx = Context::new(source, source_tab_stop, profile, output_kind);
    ctx.set_position(unit.span.start);
    write_unit(&mut ctx, unit)?;
    Ok(ctx.finish())
}
