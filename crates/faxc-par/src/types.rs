//! Declarator helpers shared by the item and statement simplifiers.
//!
//! `TypeSpec`/`PtrOpt`/`ArraySuffixOpt` recur in several places (plain
//! declarations, parameters, struct fields, `for`-loop declarators), so
//! their fold logic lives here once instead of being duplicated per
//! caller — mirrors `ast_builder.py`'s shared `_fold_type_spec`/`_fold_ptr`
//! helpers.

use faxc_util::Symbol;

use crate::ast::AstNode;
use crate::items;
use crate::tree::{NodeId, ParseTree};

pub(crate) fn nt(name: &str) -> Symbol {
    Symbol::intern_known(name)
}

/// Folds a `TypeSpec` node into `Type`/`StructType`/`UnionType`.
pub(crate) fn build_type_spec(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("TypeSpec"));
    let kids = tree.real_children(id);
    let inner = kids[0];
    let sym = tree.symbol(inner);
    if sym == nt("BasicType") {
        let basic_kids = tree.real_children(inner);
        AstNode::Type(tree.leaf_text(basic_kids[0]).expect("BasicType leaf"))
    } else if sym == nt("StructSpec") {
        build_struct_or_union(tree, inner, true)
    } else if sym == nt("UnionSpec") {
        build_struct_or_union(tree, inner, false)
    } else if sym == faxc_util::symbol::SYM_TYPE_NAME {
        AstNode::Type(tree.leaf_text(inner).expect("TYPE_NAME leaf"))
    } else {
        unreachable!("unexpected TypeSpec alternative")
    }
}

fn build_struct_or_union(tree: &ParseTree, id: NodeId, is_struct: bool) -> AstNode {
    // kids = [ 'struct'|'union', ID, StructBodyOpt ]
    let kids = tree.real_children(id);
    let name = tree.leaf_text(kids[1]).expect("struct/union tag ID");
    let fields = build_struct_body_opt(tree, kids[2]);
    if is_struct {
        AstNode::StructType { name, fields }
    } else {
        AstNode::UnionType { name, fields }
    }
}

fn build_struct_body_opt(tree: &ParseTree, id: NodeId) -> Vec<AstNode> {
    debug_assert_eq!(tree.symbol(id), nt("StructBodyOpt"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return Vec::new(); // ε: a bare tag reference, no field list here
    }
    // kids = [ '{', DeclListOpt, '}' ]
    build_decl_list_opt(tree, kids[1])
}

fn build_decl_list_opt(tree: &ParseTree, id: NodeId) -> Vec<AstNode> {
    debug_assert_eq!(tree.symbol(id), nt("DeclListOpt"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return Vec::new();
    }
    build_decl_list(tree, kids[0])
}

fn build_decl_list(tree: &ParseTree, id: NodeId) -> Vec<AstNode> {
    debug_assert_eq!(tree.symbol(id), nt("DeclList"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return Vec::new(); // ε
    }
    // kids = [ Decl, DeclList ]
    let mut decls = vec![items::build_decl(tree, kids[0])];
    decls.extend(build_decl_list(tree, kids[1]));
    decls
}

/// Counts the stars in a `PtrOpt` (`* PtrOpt | ε`).
pub(crate) fn count_ptr_opt(tree: &ParseTree, id: NodeId) -> u32 {
    debug_assert_eq!(tree.symbol(id), nt("PtrOpt"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return 0;
    }
    // kids = [ '*', PtrOpt ]
    1 + count_ptr_opt(tree, kids[1])
}

pub(crate) fn build_ptr_opt(tree: &ParseTree, id: NodeId) -> Option<Box<AstNode>> {
    let stars = count_ptr_opt(tree, id);
    if stars == 0 {
        None
    } else {
        Some(Box::new(AstNode::Ptr(stars)))
    }
}

/// Collects the `[ INT_CONST ]` dimensions of an `ArraySuffixOpt`.
pub(crate) fn build_array_suffix_opt(tree: &ParseTree, id: NodeId) -> Vec<Symbol> {
    debug_assert_eq!(tree.symbol(id), nt("ArraySuffixOpt"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return Vec::new();
    }
    // kids = [ '[', INT_CONST, ']', ArraySuffixOpt ]
    let mut dims = vec![tree.leaf_text(kids[1]).expect("array dimension INT_CONST")];
    dims.extend(build_array_suffix_opt(tree, kids[3]));
    dims
}
