use miette::Result;
use recast_ast::{
    BinOp, Block, ClassDecl, CompilationUnit, Expr, ExprKind, FieldDecl, IfStmt, LocalVarDecl,
    Member, MemberKind, MethodDecl, Param, PrimitiveType, ReturnStmt, Stmt, StmtKind, TypeKind,
    TypeRef, VarDeclarator, WhileStmt,
};
use recast_common::{SourceFile, Span};
use smol_str::SmolStr;
use tree_sitter::{Node, Tree};

/// Lower a tree-sitter Tree to the translation AST.
///
/// Comments never become nodes here: they live in the gaps between node
/// spans and are reproduced by the transcriber, not the writers.
pub fn lower(tree: Tree, source: &SourceFile) -> Result<CompilationUnit> {
    let ctx = LoweringContext::new(source);
    ctx.lower_unit(tree.root_node())
}

struct LoweringContext<'a> {
    source: &'a SourceFile,
}

impl<'a> LoweringContext<'a> {
    fn new(source: &'a SourceFile) -> Self {
        Self { source }
    }

    fn span(&self, node: Node) -> Span {
        Span::new(node.start_byte() as u32, node.end_byte() as u32)
    }

    fn text(&self, node: Node) -> &str {
        node.utf8_text(self.source.content.as_bytes()).unwrap_or("")
    }

    fn is_comment(node: &Node) -> bool {
        matches!(node.kind(), "line_comment" | "block_comment")
    }

    /// Named children with comment extras filtered out.
    fn children<'tree>(&self, node: Node<'tree>) -> Vec<Node<'tree>> {
        node.named_children(&mut node.walk())
            .filter(|c| !Self::is_comment(c))
            .collect()
    }

    fn modifiers_span(&self, node: Node) -> Option<Span> {
        node.children(&mut node.walk())
            .find(|c| c.kind() == "modifiers")
            .map(|n| self.span(n))
    }

    fn lower_unit(&self, node: Node) -> Result<CompilationUnit> {
        let mut directives = vec![];
        let mut types = vec![];

        for child in self.children(node) {
            match child.kind() {
                "package_declaration" | "import_declaration" => {
                    directives.push(self.span(child));
                }
                "class_declaration" => {
                    types.push(self.lower_class(child)?);
                }
                // TODO: interface_declaration, enum_declaration
                _ => {}
            }
        }

        // The unit span covers the whole text so leading comments and the
        // trailing newline are transcribed.
        let span = Span::new(0, self.source.content.len() as u32);

        Ok(CompilationUnit {
            span,
            directives,
            types,
        })
    }

    fn lower_class(&self, node: Node) -> Result<ClassDecl> {
        let name = node
            .child_by_field_name("name")
            .map(|n| SmolStr::new(self.text(n)))
            .ok_or_else(|| miette::miette!("class declaration missing name"))?;

        let body = node
            .child_by_field_name("body")
            .ok_or_else(|| miette::miette!("class declaration missing body"))?;

        let mut members = vec![];
        for child in self.children(body) {
            members.push(self.lower_member(child)?);
        }

        Ok(ClassDecl {
            name,
            span: self.span(node),
            modifiers: self.modifiers_span(node),
            body_span: self.span(body),
            members,
        })
    }

    fn lower_member(&self, node: Node) -> Result<Member> {
        let span = self.span(node);

        let kind = match node.kind() {
            "method_declaration" => MemberKind::Method(self.lower_method(node)?),
            "field_declaration" => {
                let ty = node
                    .child_by_field_name("type")
                    .map(|n| self.lower_type(n))
                    .ok_or_else(|| miette::miette!("field declaration missing type"))?;
                let declarators = self.lower_declarators(node)?;
                MemberKind::Field(FieldDecl {
                    modifiers: self.modifiers_span(node),
                    ty,
                    declarators,
                })
            }
            kind => MemberKind::Unsupported(SmolStr::new(kind)),
        };

        Ok(Member::new(kind, span))
    }

    fn lower_method(&self, node: Node) -> Result<MethodDecl> {
        let name_node = node
            .child_by_field_name("name")
            .ok_or_else(|| miette::miette!("method declaration missing name"))?;

        let return_type = node
            .child_by_field_name("type")
            .map(|n| self.lower_type(n))
            .ok_or_else(|| miette::miette!("method declaration missing return type"))?;

        let params_node = node
            .child_by_field_name("parameters")
            .ok_or_else(|| miette::miette!("method declaration missing parameter list"))?;

        let mut params = vec![];
        for child in self.children(params_node) {
            if child.kind() == "formal_parameter" {
                params.push(self.lower_param(child)?);
            }
        }

        let body = node
            .child_by_field_name("body")
            .map(|b| self.lower_block(b))
            .transpose()?;

        Ok(MethodDecl {
            name: SmolStr::new(self.text(name_node)),
            name_span: self.span(name_node),
            modifiers: self.modifiers_span(node),
            return_type,
            params,
            params_span: self.span(params_node),
            body,
        })
    }

    fn lower_param(&self, node: Node) -> Result<Param> {
        let ty = node
            .child_by_field_name("type")
            .map(|n| self.lower_type(n))
            .ok_or_else(|| miette::miette!("parameter missing type"))?;

        let name = node
            .child_by_field_name("name")
            .map(|n| SmolStr::new(self.text(n)))
            .ok_or_else(|| miette::miette!("parameter missing name"))?;

        Ok(Param {
            ty,
            name,
            span: self.span(node),
        })
    }

    fn lower_block(&self, node: Node) -> Result<Block> {
        let mut statements = vec![];
        for child in self.children(node) {
            statements.push(self.lower_stmt(child)?);
        }

        Ok(Block {
            span: self.span(node),
            statements,
        })
    }

    fn lower_stmt(&self, node: Node) -> Result<Stmt> {
        let span = self.span(node);

        let kind = match node.kind() {
            "block" => StmtKind::Block(self.lower_block(node)?),

            "if_statement" => {
                let condition = node
                    .child_by_field_name("condition")
                    .map(|n| self.lower_expr(n))
                    .ok_or_else(|| miette::miette!("if statement missing condition"))??;

                let then_branch = node
                    .child_by_field_name("consequence")
                    .map(|n| self.lower_stmt(n))
                    .ok_or_else(|| miette::miette!("if statement missing consequence"))??;

                let else_branch = node
                    .child_by_field_name("alternative")
                    .map(|n| self.lower_stmt(n))
                    .transpose()?;

                StmtKind::If(IfStmt {
                    condition,
                    then_branch: Box::new(then_branch),
                    else_branch: else_branch.map(Box::new),
                })
            }

            "while_statement" => {
                let condition = node
                    .child_by_field_name("condition")
                    .map(|n| self.lower_expr(n))
                    .ok_or_else(|| miette::miette!("while statement missing condition"))??;

                let body = node
                    .child_by_field_name("body")
                    .map(|n| self.lower_stmt(n))
                    .ok_or_else(|| miette::miette!("while statement missing body"))??;

                StmtKind::While(WhileStmt {
                    condition,
                    body: Box::new(body),
                })
            }

            "return_statement" => {
                let value = self
                    .children(node)
                    .first()
                    .map(|n| self.lower_expr(*n))
                    .transpose()?;
                StmtKind::Return(ReturnStmt { value })
            }

            "expression_statement" => {
                let expr = self
                    .children(node)
                    .first()
                    .map(|n| self.lower_expr(*n))
                    .ok_or_else(|| miette::miette!("expression statement missing expression"))??;
                StmtKind::Expr(expr)
            }

            "local_variable_declaration" => {
                let ty = node
                    .child_by_field_name("type")
                    .map(|n| self.lower_type(n))
                    .ok_or_else(|| miette::miette!("variable declaration missing type"))?;
                let declarators = self.lower_declarators(node)?;
                StmtKind::LocalVar(LocalVarDecl { ty, declarators })
            }

            kind => StmtKind::Unsupported(SmolStr::new(kind)),
        };

        Ok(Stmt::new(kind, span))
    }

    fn lower_declarators(&self, node: Node) -> Result<Vec<VarDeclarator>> {
        let mut declarators = vec![];
        let mut cursor = node.walk();
        for child in node.children_by_field_name("declarator", &mut cursor) {
            let name_node = child
                .child_by_field_name("name")
                .ok_or_else(|| miette::miette!("variable declarator missing name"))?;

            let init = child
                .child_by_field_name("value")
                .map(|n| self.lower_expr(n))
                .transpose()?;

            declarators.push(VarDeclarator {
                name: SmolStr::new(self.text(name_node)),
                name_span: self.span(name_node),
                init,
                span: self.span(child),
            });
        }
        Ok(declarators)
    }

    fn lower_type(&self, node: Node) -> TypeRef {
        let span = self.span(node);

        let kind = match node.kind() {
            "void_type" => TypeKind::Void,
            "boolean_type" => TypeKind::Primitive(PrimitiveType::Boolean),
            "integral_type" | "floating_point_type" => {
                match PrimitiveType::from_keyword(self.text(node)) {
                    Some(p) => TypeKind::Primitive(p),
                    None => TypeKind::Unsupported(SmolStr::new(node.kind())),
                }
            }
            "type_identifier" => TypeKind::Named(SmolStr::new(self.text(node))),
            kind => TypeKind::Unsupported(SmolStr::new(kind)),
        };

        TypeRef::new(kind, span)
    }

    fn lower_expr(&self, node: Node) -> Result<Expr> {
        let span = self.span(node);

        let kind = match node.kind() {
            "decimal_integer_literal"
            | "hex_integer_literal"
            | "octal_integer_literal"
            | "binary_integer_literal" => ExprKind::IntLit,

            "decimal_floating_point_literal" | "hex_floating_point_literal" => ExprKind::FloatLit,

            "true" => ExprKind::BoolLit(true),
            "false" => ExprKind::BoolLit(false),
            "character_literal" => ExprKind::CharLit,
            "string_literal" => ExprKind::StringLit,
            "null_literal" => ExprKind::NullLit,

            "identifier" => ExprKind::Name(SmolStr::new(self.text(node))),

            "parenthesized_expression" => {
                let inner = self
                    .children(node)
                    .first()
                    .map(|n| self.lower_expr(*n))
                    .ok_or_else(|| miette::miette!("empty parenthesized expression"))??;
                ExprKind::Paren(Box::new(inner))
            }

            "binary_expression" => {
                let lhs = node
                    .child_by_field_name("left")
                    .map(|n| self.lower_expr(n))
                    .ok_or_else(|| miette::miette!("binary expression missing left operand"))??;
                let rhs = node
                    .child_by_field_name("right")
                    .map(|n| self.lower_expr(n))
                    .ok_or_else(|| miette::miette!("binary expression missing right operand"))??;
                let op = node
                    .child_by_field_name("operator")
                    .and_then(|n| BinOp::from_token(self.text(n)));

                match op {
                    Some(op) => ExprKind::Binary {
                        op,
                        lhs: Box::new(lhs),
                        rhs: Box::new(rhs),
                    },
                    None => ExprKind::Unsupported(SmolStr::new(node.kind())),
                }
            }

            "unary_expression" => {
                let operand = node
                    .child_by_field_name("operand")
                    .map(|n| self.lower_expr(n))
                    .ok_or_else(|| miette::miette!("unary expression missing operand"))??;
                ExprKind::Unary {
                    operand: Box::new(operand),
                }
            }

            "update_expression" => {
                let operand = self
                    .children(node)
                    .first()
                    .map(|n| self.lower_expr(*n))
                    .ok_or_else(|| miette::miette!("update expression missing operand"))??;
                ExprKind::Update {
                    operand: Box::new(operand),
                }
            }

            "assignment_expression" => {
                let op_text = node
                    .child_by_field_name("operator")
                    .map(|n| self.text(n).to_owned())
                    .unwrap_or_default();

                if op_text == ">>>=" {
                    // unsigned shift has no C++ spelling
                    ExprKind::Unsupported(SmolStr::new(node.kind()))
                } else {
                    let target = node
                        .child_by_field_name("left")
                        .map(|n| self.lower_expr(n))
                        .ok_or_else(|| miette::miette!("assignment missing target"))??;
                    let value = node
                        .child_by_field_name("right")
                        .map(|n| self.lower_expr(n))
                        .ok_or_else(|| miette::miette!("assignment missing value"))??;
                    ExprKind::Assign {
                        target: Box::new(target),
                        value: Box::new(value),
                    }
                }
            }

            "field_access" => {
                let object = node
                    .child_by_field_name("object")
                    .map(|n| self.lower_expr(n))
                    .ok_or_else(|| miette::miette!("field access missing object"))??;
                let field = node
                    .child_by_field_name("field")
                    .map(|n| SmolStr::new(self.text(n)))
                    .ok_or_else(|| miette::miette!("field access missing field"))?;
                ExprKind::FieldAccess {
                    object: Box::new(object),
                    field,
                }
            }

            "method_invocation" => {
                let receiver = node
                    .child_by_field_name("object")
                    .map(|n| self.lower_expr(n))
                    .transpose()?;
                let name = node
                    .child_by_field_name("name")
                    .map(|n| SmolStr::new(self.text(n)))
                    .ok_or_else(|| miette::miette!("method invocation missing name"))?;

                let mut args = vec![];
                if let Some(arg_list) = node.child_by_field_name("arguments") {
                    for child in self.children(arg_list) {
                        args.push(self.lower_expr(child)?);
                    }
                }

                ExprKind::MethodCall {
                    receiver: receiver.map(Box::new),
                    name,
                    args,
                }
            }

            "array_access" => {
                let object = node
                    .child_by_field_name("array")
                    .map(|n| self.lower_expr(n))
                    .ok_or_else(|| miette::miette!("array access missing array"))??;
                let index = node
                    .child_by_field_name("index")
                    .map(|n| self.lower_expr(n))
                    .ok_or_else(|| miette::miette!("array access missing index"))??;
                ExprKind::Index {
                    object: Box::new(object),
                    index: Box::new(index),
                }
            }

            kind => ExprKind::Unsupported(SmolStr::new(kind)),
        };

        Ok(Expr::new(kind, span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    fn lower_source(source: &str) -> CompilationUnit {
        let file = SourceFile::anonymous(source);
        let tree = parser::parse(&file.content).unwrap();
        lower(tree, &file).unwrap()
    }

    fn first_stmt(source: &str) -> Stmt {
        let java = format!("class T {{ void m() {{\n{source}\n}} }}");
        let unit = lower_source(&java);
        let block = unit.first_method_block().expect("method block");
        block.statements.first().expect("statement").clone()
    }

    #[test]
    fn test_lower_local_var() {
        let stmt = first_stmt("int i = 3;");
        let StmtKind::LocalVar(decl) = &stmt.kind else {
            panic!("expected local var, got {:?}", stmt.kind);
        };
        assert_eq!(decl.ty.kind, TypeKind::Primitive(PrimitiveType::Int));
        assert_eq!(decl.declarators.len(), 1);
        assert_eq!(decl.declarators[0].name, "i");
        assert!(decl.declarators[0].init.is_some());
    }

    #[test]
    fn test_lower_multi_declarator() {
        let stmt = first_stmt("char c = 25 , d = 25 ;");
        let StmtKind::LocalVar(decl) = &stmt.kind else {
            panic!("expected local var");
        };
        assert_eq!(decl.declarators.len(), 2);
        assert_eq!(decl.declarators[1].name, "d");
    }

    #[test]
    fn test_lower_if_else() {
        let stmt = first_stmt("if (b) return 5; else return 6;");
        let StmtKind::If(if_stmt) = &stmt.kind else {
            panic!("expected if");
        };
        assert!(matches!(if_stmt.condition.kind, ExprKind::Paren(_)));
        assert!(if_stmt.else_branch.is_some());
    }

    #[test]
    fn test_lower_unknown_statement_kind() {
        let stmt = first_stmt("synchronized (x) { }");
        assert!(matches!(stmt.kind, StmtKind::Unsupported(_)));
    }

    #[test]
    fn test_comments_are_not_statements() {
        let java = "class T { void m() {\n// leading\nint i = 3; /* trailing */\n} }";
        let unit = lower_source(java);
        let block = unit.first_method_block().unwrap();
        assert_eq!(block.statements.len(), 1);
    }

    #[test]
    fn test_lower_class_members() {
        let unit = lower_source("class Point { int x; int getX() { return x; } }");
        assert_eq!(unit.types.len(), 1);
        let class = &unit.types[0];
        assert_eq!(class.name, "Point");
        assert_eq!(class.members.len(), 2);
        assert!(matches!(class.members[0].kind, MemberKind::Field(_)));
        assert!(matches!(class.members[1].kind, MemberKind::Method(_)));
    }

    #[test]
    fn test_lower_package_and_import_directives() {
        let unit = lower_source("package demo;\nimport java.util.List;\nclass A { }");
        assert_eq!(unit.directives.len(), 2);
        assert_eq!(unit.types.len(), 1);
    }

    #[test]
    fn test_statement_spans_cover_semicolon() {
        let java = "class T { void m() {\nint i = 3;\n} }";
        let unit = lower_source(java);
        let stmt = &unit.first_method_block().unwrap().statements[0];
        let text = &java[stmt.span.start as usize..stmt.span.end as usize];
        assert_eq!(text, "int i = 3;");
    }
}
