//! Top-level item folding: the translation unit, external definitions,
//! and the declarator machinery they share with `Decl` (struct fields,
//! local declarations, `for`-loop declarators).
//!
//! Grounded in `ast_builder.py`'s `_ast_ExtDef`/`_ast_Decl` family, folded
//! here against this grammar's exact production shapes (see
//! `faxc-grammar/src/builtin.rs`) instead of against the original
//! tree-sitter-ish node shape.

use faxc_util::Symbol;

use crate::ast::AstNode;
use crate::stmt;
use crate::tree::{NodeId, ParseTree};
use crate::types::{self, nt};

/// Entry point: folds the whole parse tree into `AstNode::Program`.
pub fn build_program(tree: &ParseTree) -> AstNode {
    let root = tree.root;
    debug_assert_eq!(tree.symbol(root), nt("P"));
    let kids = tree.real_children(root);
    // kids = [ ExtList, EOF ]
    AstNode::Program(build_ext_list(tree, kids[0]))
}

fn build_ext_list(tree: &ParseTree, id: NodeId) -> Vec<AstNode> {
    debug_assert_eq!(tree.symbol(id), nt("ExtList"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return Vec::new(); // ε
    }
    // kids = [ ExtDef, ExtList ]
    let mut items = Vec::new();
    if let Some(item) = build_ext_def(tree, kids[0]) {
        items.push(item);
    }
    items.extend(build_ext_list(tree, kids[1]));
    items
}

fn build_ext_def(tree: &ParseTree, id: NodeId) -> Option<AstNode> {
    debug_assert_eq!(tree.symbol(id), nt("ExtDef"));
    let kids = tree.real_children(id);
    let inner = kids[0];
    let sym = tree.symbol(inner);
    if sym == nt("Preprocess") {
        None // `#include <...>` carries no AST payload
    } else if sym == nt("TypeSpec") {
        let type_node = types::build_type_spec(tree, inner);
        Some(build_ext_after_type_spec(tree, kids[1], type_node))
    } else {
        unreachable!("unexpected ExtDef alternative")
    }
}

fn build_ext_after_type_spec(tree: &ParseTree, id: NodeId, type_node: AstNode) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("ExtAfterTypeSpec"));
    let kids = tree.real_children(id);
    if kids.len() == 1 {
        // `;` alone: a type-only top-level declaration (a forward tag, or a
        // struct/union definition with no variable declared alongside it).
        return AstNode::TypeOnly(Box::new(type_node));
    }
    // kids = [ PtrOpt, ID, ExtAfterId ]
    let ptr = types::build_ptr_opt(tree, kids[0]);
    let name = tree.leaf_text(kids[1]).expect("declarator ID");
    build_ext_after_id(tree, kids[2], type_node, ptr, name)
}

fn build_ext_after_id(
    tree: &ParseTree,
    id: NodeId,
    type_node: AstNode,
    ptr: Option<Box<AstNode>>,
    name: Symbol,
) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("ExtAfterId"));
    let kids = tree.real_children(id);
    if tree.symbol(kids[0]) == faxc_util::symbol::DL_LPAREN {
        // kids = [ '(', ParamListOpt, ')', CompoundStmt ]
        let params = build_param_list_opt(tree, kids[1]);
        let body = stmt::build_compound_stmt(tree, kids[3]);
        AstNode::FuncDef {
            name,
            ret_type: Box::new(type_node),
            ptr,
            params,
            body: Box::new(body),
        }
    } else {
        // kids = [ VarDeclRest, ';' ]
        let decls = build_var_decl_rest(tree, kids[0], name, ptr);
        AstNode::GlobalDecl { ty: Box::new(type_node), decls }
    }
}

fn build_var_decl_rest(
    tree: &ParseTree,
    id: NodeId,
    name: Symbol,
    ptr: Option<Box<AstNode>>,
) -> Vec<AstNode> {
    debug_assert_eq!(tree.symbol(id), nt("VarDeclRest"));
    let kids = tree.real_children(id);
    // kids = [ ArraySuffixOpt, InitOpt, VarDeclMore ]
    let array_dims = types::build_array_suffix_opt(tree, kids[0]);
    let init = build_init_opt(tree, kids[1]);
    let mut decls = vec![AstNode::Var { name, ptr, array_dims, init }];
    decls.extend(build_var_decl_more(tree, kids[2]));
    decls
}

fn build_var_decl_more(tree: &ParseTree, id: NodeId) -> Vec<AstNode> {
    debug_assert_eq!(tree.symbol(id), nt("VarDeclMore"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return Vec::new(); // ε
    }
    // kids = [ ',', InitDecl, VarDeclMore ]
    let mut decls = vec![build_init_decl(tree, kids[1])];
    decls.extend(build_var_decl_more(tree, kids[2]));
    decls
}

/// Folds a `Decl` (`TypeSpec InitDeclList ;`) — used for struct fields and
/// for `Stmt`'s local-declaration alternative.
pub(crate) fn build_decl(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("Decl"));
    let kids = tree.real_children(id);
    let ty = types::build_type_spec(tree, kids[0]);
    let decls = build_init_decl_list(tree, kids[1]);
    AstNode::VarDecl { ty: Box::new(ty), decls }
}

/// Folds a `DeclForInit` (`TypeSpec InitDeclList`, no trailing `;` — the
/// surrounding `ForStmt` supplies that token itself).
pub(crate) fn build_decl_for_init(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("DeclForInit"));
    let kids = tree.real_children(id);
    let ty = types::build_type_spec(tree, kids[0]);
    let decls = build_init_decl_list(tree, kids[1]);
    AstNode::VarDecl { ty: Box::new(ty), decls }
}

fn build_init_decl_list(tree: &ParseTree, id: NodeId) -> Vec<AstNode> {
    debug_assert_eq!(tree.symbol(id), nt("InitDeclList"));
    let kids = tree.real_children(id);
    // kids = [ InitDecl, InitDeclListTail ]
    let mut decls = vec![build_init_decl(tree, kids[0])];
    decls.extend(build_init_decl_list_tail(tree, kids[1]));
    decls
}

fn build_init_decl_list_tail(tree: &ParseTree, id: NodeId) -> Vec<AstNode> {
    debug_assert_eq!(tree.symbol(id), nt("InitDeclListTail"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return Vec::new(); // ε
    }
    // kids = [ ',', InitDecl, InitDeclListTail ]
    let mut decls = vec![build_init_decl(tree, kids[1])];
    decls.extend(build_init_decl_list_tail(tree, kids[2]));
    decls
}

fn build_init_decl(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("InitDecl"));
    let kids = tree.real_children(id);
    // kids = [ PtrOpt, ID, ArraySuffixOpt, InitOpt ]
    let ptr = types::build_ptr_opt(tree, kids[0]);
    let name = tree.leaf_text(kids[1]).expect("declarator ID");
    let array_dims = types::build_array_suffix_opt(tree, kids[2]);
    let init = build_init_opt(tree, kids[3]);
    AstNode::Var { name, ptr, array_dims, init }
}

fn build_init_opt(tree: &ParseTree, id: NodeId) -> Option<Box<AstNode>> {
    debug_assert_eq!(tree.symbol(id), nt("InitOpt"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return None; // ε
    }
    // kids = [ '=', Initializer ]
    Some(Box::new(build_initializer(tree, kids[1])))
}

fn build_initializer(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("Initializer"));
    let kids = tree.real_children(id);
    if tree.symbol(kids[0]) == nt("Expr") {
        crate::expr::build_expr(tree, kids[0])
    } else {
        // kids = [ '{', InitListOpt, '}' ]
        AstNode::InitList(build_init_list_opt(tree, kids[1]))
    }
}

fn build_init_list_opt(tree: &ParseTree, id: NodeId) -> Vec<AstNode> {
    debug_assert_eq!(tree.symbol(id), nt("InitListOpt"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return Vec::new(); // ε
    }
    build_init_list(tree, kids[0])
}

fn build_init_list(tree: &ParseTree, id: NodeId) -> Vec<AstNode> {
    debug_assert_eq!(tree.symbol(id), nt("InitList"));
    let kids = tree.real_children(id);
    // kids = [ Initializer, InitListTail ]
    let mut items = vec![build_initializer(tree, kids[0])];
    items.extend(build_init_list_tail(tree, kids[1]));
    items
}

fn build_init_list_tail(tree: &ParseTree, id: NodeId) -> Vec<AstNode> {
    debug_assert_eq!(tree.symbol(id), nt("InitListTail"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return Vec::new(); // ε
    }
    // kids = [ ',', Initializer, InitListTail ]
    let mut items = vec![build_initializer(tree, kids[1])];
    items.extend(build_init_list_tail(tree, kids[2]));
    items
}

fn build_param_list_opt(tree: &ParseTree, id: NodeId) -> Vec<AstNode> {
    debug_assert_eq!(tree.symbol(id), nt("ParamListOpt"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return Vec::new(); // ε
    }
    build_param_list(tree, kids[0])
}

fn build_param_list(tree: &ParseTree, id: NodeId) -> Vec<AstNode> {
    debug_assert_eq!(tree.symbol(id), nt("ParamList"));
    let kids = tree.real_children(id);
    // kids = [ Param, ParamListTail ]
    let mut params = vec![build_param(tree, kids[0])];
    params.extend(build_param_list_tail(tree, kids[1]));
    params
}

fn build_param_list_tail(tree: &ParseTree, id: NodeId) -> Vec<AstNode> {
    debug_assert_eq!(tree.symbol(id), nt("ParamListTail"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return Vec::new(); // ε
    }
    // kids = [ ',', Param, ParamListTail ]
    let mut params = vec![build_param(tree, kids[1])];
    params.extend(build_param_list_tail(tree, kids[2]));
    params
}

fn build_param(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("Param"));
    let kids = tree.real_children(id);
    // kids = [ TypeSpec, PtrOpt, ID, ArraySuffixOpt ]
    let ty = types::build_type_spec(tree, kids[0]);
    let ptr = types::build_ptr_opt(tree, kids[1]);
    let name = tree.leaf_text(kids[2]).expect("parameter ID");
    let array_dims = types::build_array_suffix_opt(tree, kids[3]);
    AstNode::Param { name, ty: Box::new(ty), ptr, array_dims }
}
