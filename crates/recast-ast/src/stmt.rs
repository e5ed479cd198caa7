use crate::expr::Expr;
use crate::types::TypeRef;
use recast_common::Span;
use smol_str::SmolStr;

/// A statement, with its span in the original source.
#[derive(Debug, Clone)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone)]
pub enum StmtKind {
    /// Braced block: { ... }
    Block(Block),

    /// if (cond) then else alternative
    If(IfStmt),

    /// while (cond) body
    While(WhileStmt),

    /// return; or return expr;
    Return(ReturnStmt),

    /// Expression statement: expr;
    Expr(Expr),

    /// Local variable declaration: int i = 3, j;
    LocalVar(LocalVarDecl),

    /// Statement syntax with no writer yet; the tree-sitter kind name is
    /// kept for the diagnostic
    Unsupported(SmolStr),
}

/// A braced statement block.
#[derive(Debug, Clone)]
pub struct Block {
    pub span: Span,
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
}

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
}

/// A local variable declaration statement. The span covers the whole
/// statement including the trailing semicolon.
#[derive(Debug, Clone)]
pub struct LocalVarDecl {
    pub ty: TypeRef,
    pub declarators: Vec<VarDeclarator>,
}

/// One declarator in a variable declaration: `name` or `name = init`.
#[derive(Debug, Clone)]
pub struct VarDeclarator {
    pub name: SmolStr,
    pub name_span: Span,
    pub init: Option<Expr>,
    pub span: Span,
}
