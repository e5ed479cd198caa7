use recast_common::Span;
use smol_str::SmolStr;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    // Bitwise
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    UnsignedShr, // Java >>>, no C++ equivalent
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    // Logical
    And,
    Or,
}

impl BinOp {
    pub fn from_token(tok: &str) -> Option<Self> {
        match tok {
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            "*" => Some(BinOp::Mul),
            "/" => Some(BinOp::Div),
            "%" => Some(BinOp::Rem),
            "&" => Some(BinOp::BitAnd),
            "|" => Some(BinOp::BitOr),
            "^" => Some(BinOp::BitXor),
            "<<" => Some(BinOp::Shl),
            ">>" => Some(BinOp::Shr),
            ">>>" => Some(BinOp::UnsignedShr),
            "==" => Some(BinOp::Eq),
            "!=" => Some(BinOp::Ne),
            "<" => Some(BinOp::Lt),
            "<=" => Some(BinOp::Le),
            ">" => Some(BinOp::Gt),
            ">=" => Some(BinOp::Ge),
            "&&" => Some(BinOp::And),
            "||" => Some(BinOp::Or),
            _ => None,
        }
    }
}

/// An expression, with its span in the original source.
#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone)]
pub enum ExprKind {
    /// Integer literal (decimal, hex, octal, binary)
    IntLit,

    /// Floating point literal
    FloatLit,

    /// true / false
    BoolLit(bool),

    /// Character literal: 'a'
    CharLit,

    /// String literal: "abc"
    StringLit,

    /// null (becomes nullptr)
    NullLit,

    /// A plain name: variable or type reference
    Name(SmolStr),

    /// Field access: x.field
    FieldAccess {
        object: Box<Expr>,
        field: SmolStr,
    },

    /// Method invocation: x.f(a, b) or f(a, b)
    MethodCall {
        receiver: Option<Box<Expr>>,
        name: SmolStr,
        args: Vec<Expr>,
    },

    /// Array access: a[i]
    Index {
        object: Box<Expr>,
        index: Box<Expr>,
    },

    /// Binary operation: a + b
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },

    /// Prefix unary operation: -x, !x, ~x
    Unary {
        operand: Box<Expr>,
    },

    /// Increment/decrement, prefix or postfix: ++x, x--
    Update {
        operand: Box<Expr>,
    },

    /// Assignment: a = b, a += b, ... (the >>>= form is unsupported)
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
    },

    /// Parenthesized expression: ( e )
    Paren(Box<Expr>),

    /// Expression syntax with no writer yet; the tree-sitter kind name is
    /// kept for the diagnostic
    Unsupported(SmolStr),
}
