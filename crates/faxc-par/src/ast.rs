//! Typed AST produced by folding the parse tree.
//!
//! `ast_builder.py` folds its parse tree into a loosely-typed
//! `(kind, value, children)` triple; this crate gives each shape its own
//! variant instead, the way `ast.py`'s alternate typed-dataclass AST does.
//! Every leaf payload (names, operators, literals, raw array-dimension
//! text) is a [`Symbol`] rather than a `String` since it arrives
//! pre-interned off a parse-tree leaf and no arithmetic is ever performed
//! on it here — there is no semantic analysis in this crate.

use faxc_util::Symbol;

/// A simplified AST node. `Program` is always the root; everything else
/// nests underneath it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AstNode {
    /// The whole translation unit: one entry per external definition.
    /// `#include` directives fold away entirely — they carry no payload.
    Program(Vec<AstNode>),

    /// A struct/union tag declared with no trailing declarator
    /// (`struct Point { int x; int y; };`).
    TypeOnly(Box<AstNode>),

    /// A struct/union body used where a *type* is expected.
    StructType { name: Symbol, fields: Vec<AstNode> },
    UnionType { name: Symbol, fields: Vec<AstNode> },

    /// A basic type keyword or a previously-declared `TYPE_NAME`.
    Type(Symbol),
    /// Pointer depth: the number of consecutive `*` in a declarator.
    Ptr(u32),

    FuncDef {
        name: Symbol,
        ret_type: Box<AstNode>,
        ptr: Option<Box<AstNode>>,
        params: Vec<AstNode>,
        body: Box<AstNode>,
    },
    Param {
        name: Symbol,
        ty: Box<AstNode>,
        ptr: Option<Box<AstNode>>,
        array_dims: Vec<Symbol>,
    },

    /// A top-level `TypeSpec InitDeclList ;` with no enclosing function.
    GlobalDecl { ty: Box<AstNode>, decls: Vec<AstNode> },
    /// The same shape nested inside a function body, a struct body, or a
    /// `for` initializer.
    VarDecl { ty: Box<AstNode>, decls: Vec<AstNode> },
    /// One declarator out of a `GlobalDecl`/`VarDecl`'s comma list.
    Var {
        name: Symbol,
        ptr: Option<Box<AstNode>>,
        array_dims: Vec<Symbol>,
        init: Option<Box<AstNode>>,
    },

    Block(Vec<AstNode>),
    If {
        cond: Box<AstNode>,
        then_branch: Box<AstNode>,
        else_branch: Option<Box<AstNode>>,
    },
    While {
        cond: Box<AstNode>,
        body: Box<AstNode>,
    },
    For {
        init: Option<Box<AstNode>>,
        cond: Option<Box<AstNode>>,
        post: Option<Box<AstNode>>,
        body: Box<AstNode>,
    },
    Return(Option<Box<AstNode>>),
    Break,
    Continue,
    /// A local declaration used as a statement (`Stmt -> Decl`).
    DeclStmt(Box<AstNode>),
    ExprStmt(Box<AstNode>),
    /// A bare `;`.
    Empty,

    Assign { target: Box<AstNode>, value: Box<AstNode> },
    Binary { op: Symbol, left: Box<AstNode>, right: Box<AstNode> },
    Unary { op: Symbol, expr: Box<AstNode> },
    PostInc(Box<AstNode>),
    PostDec(Box<AstNode>),
    Call { callee: Box<AstNode>, args: Vec<AstNode> },
    Index { base: Box<AstNode>, index: Box<AstNode> },
    Member { base: Box<AstNode>, name: Symbol },
    Id(Symbol),
    Literal(Symbol),
    /// A brace-enclosed initializer list (`{1, 2, 3}`).
    InitList(Vec<AstNode>),
}
