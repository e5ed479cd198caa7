mod parser;
mod lower;

pub use parser::parse;
pub use lower::lower;

use miette::Result;
use recast_ast::CompilationUnit;
use recast_common::SourceFile;

/// Parse a Java source file into the translation AST.
pub fn parse_source(source: &SourceFile) -> Result<CompilationUnit> {
    let tree = parser::parse(&source.content)?;
    let unit = lower::lower(tree, source)?;
    Ok(unit)
}
