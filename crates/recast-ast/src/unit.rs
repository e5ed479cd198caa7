use crate::stmt::Block;
use crate::stmt::VarDeclarator;
use crate::types::TypeRef;
use recast_common::Span;
use smol_str::SmolStr;

/// A parsed compilation unit. The span covers the entire source text so
/// that leading comments are transcribed too.
#[derive(Debug, Clone)]
pub struct CompilationUnit {
    pub span: Span,
    /// Spans of package/import declarations, in source order. They have
    /// no C++ counterpart and are consumed without output.
    /// TODO: map java imports onto #include directives
    pub directives: Vec<Span>,
    pub types: Vec<ClassDecl>,
}

impl CompilationUnit {
    /// The body block of the first method of the first class, if any.
    /// Translation harnesses wrap snippets in a class/method shell and
    /// pull statements back out through this.
    pub fn first_method_block(&self) -> Option<&Block> {
        self.types.first()?.members.iter().find_map(|m| match &m.kind {
            MemberKind::Method(method) => method.body.as_ref(),
            _ => None,
        })
    }
}

/// A class declaration.
#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub name: SmolStr,
    pub span: Span,
    /// Span of the leading modifier list (public, final, ...), if present.
    pub modifiers: Option<Span>,
    /// Span of the class body including both braces.
    pub body_span: Span,
    pub members: Vec<Member>,
}

/// A class body member.
#[derive(Debug, Clone)]
pub struct Member {
    pub kind: MemberKind,
    pub span: Span,
}

impl Member {
    pub fn new(kind: MemberKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone)]
pub enum MemberKind {
    Method(MethodDecl),
    Field(FieldDecl),

    /// Member syntax with no writer yet (constructors, nested types, ...);
    /// the tree-sitter kind name is kept for the diagnostic
    Unsupported(SmolStr),
}

/// A method declaration.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub name: SmolStr,
    pub name_span: Span,
    pub modifiers: Option<Span>,
    pub return_type: TypeRef,
    pub params: Vec<Param>,
    /// Span of the formal parameter list including both parentheses.
    pub params_span: Span,
    /// None for abstract/native methods.
    pub body: Option<Block>,
}

/// A formal parameter.
#[derive(Debug, Clone)]
pub struct Param {
    pub ty: TypeRef,
    pub name: SmolStr,
    pub span: Span,
}

/// A field declaration.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub modifiers: Option<Span>,
    pub ty: TypeRef,
    pub declarators: Vec<VarDeclarator>,
}
