//! Statement folding: blocks, `if`/`while`/`for`, `return`/`break`/
//! `continue`, and expression/declaration statements.
//!
//! Grounded in `ast_builder.py`'s `_ast_Stmt` family, folded here against
//! this grammar's exact production shapes.

use crate::ast::AstNode;
use crate::expr;
use crate::items;
use crate::tree::{NodeId, ParseTree};
use crate::types::nt;

pub(crate) fn build_stmt(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("Stmt"));
    let kids = tree.real_children(id);
    let inner = kids[0];
    let sym = tree.symbol(inner);
    if sym == nt("ExprStmt") {
        build_expr_stmt(tree, inner)
    } else if sym == nt("CompoundStmt") {
        build_compound_stmt(tree, inner)
    } else if sym == nt("IfStmt") {
        build_if_stmt(tree, inner)
    } else if sym == nt("WhileStmt") {
        build_while_stmt(tree, inner)
    } else if sym == nt("ForStmt") {
        build_for_stmt(tree, inner)
    } else if sym == nt("ReturnStmt") {
        build_return_stmt(tree, inner)
    } else if sym == nt("BreakStmt") {
        AstNode::Break
    } else if sym == nt("ContinueStmt") {
        AstNode::Continue
    } else if sym == nt("Decl") {
        AstNode::DeclStmt(Box::new(items::build_decl(tree, inner)))
    } else {
        unreachable!("unexpected Stmt alternative")
    }
}

pub(crate) fn build_compound_stmt(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("CompoundStmt"));
    let kids = tree.real_children(id);
    // kids = [ '{', StmtListOpt, '}' ]
    AstNode::Block(build_stmt_list_opt(tree, kids[1]))
}

fn build_stmt_list_opt(tree: &ParseTree, id: NodeId) -> Vec<AstNode> {
    debug_assert_eq!(tree.symbol(id), nt("StmtListOpt"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return Vec::new(); // ε
    }
    build_stmt_list(tree, kids[0])
}

fn build_stmt_list(tree: &ParseTree, id: NodeId) -> Vec<AstNode> {
    debug_assert_eq!(tree.symbol(id), nt("StmtList"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return Vec::new(); // ε
    }
    // kids = [ Stmt, StmtList ]
    let mut stmts = vec![build_stmt(tree, kids[0])];
    stmts.extend(build_stmt_list(tree, kids[1]));
    stmts
}

fn build_expr_stmt(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("ExprStmt"));
    let kids = tree.real_children(id);
    if kids.len() == 1 {
        return AstNode::Empty; // bare ';'
    }
    // kids = [ Expr, ';' ]
    AstNode::ExprStmt(Box::new(expr::build_expr(tree, kids[0])))
}

fn build_if_stmt(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("IfStmt"));
    let kids = tree.real_children(id);
    // kids = [ 'if', '(', Expr, ')', Stmt, ElseOpt ]
    let cond = expr::build_expr(tree, kids[2]);
    let then_branch = build_stmt(tree, kids[4]);
    let else_branch = build_else_opt(tree, kids[5]);
    AstNode::If {
        cond: Box::new(cond),
        then_branch: Box::new(then_branch),
        else_branch,
    }
}

fn build_else_opt(tree: &ParseTree, id: NodeId) -> Option<Box<AstNode>> {
    debug_assert_eq!(tree.symbol(id), nt("ElseOpt"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return None; // ε: dangling else binds to the nearest `if`,
                     // already resolved by this production's shape.
    }
    // kids = [ 'else', Stmt ]
    Some(Box::new(build_stmt(tree, kids[1])))
}

fn build_while_stmt(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("WhileStmt"));
    let kids = tree.real_children(id);
    // kids = [ 'while', '(', Expr, ')', Stmt ]
    let cond = expr::build_expr(tree, kids[2]);
    let body = build_stmt(tree, kids[4]);
    AstNode::While { cond: Box::new(cond), body: Box::new(body) }
}

fn build_for_stmt(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("ForStmt"));
    let kids = tree.real_children(id);
    // kids = [ 'for', '(', ForInitOpt, ';', ExprOpt, ';', ExprOpt, ')', Stmt ]
    let init = build_for_init_opt(tree, kids[2]);
    let cond = build_expr_opt(tree, kids[4]);
    let post = build_expr_opt(tree, kids[6]);
    let body = build_stmt(tree, kids[8]);
    AstNode::For { init, cond, post, body: Box::new(body) }
}

fn build_for_init_opt(tree: &ParseTree, id: NodeId) -> Option<Box<AstNode>> {
    debug_assert_eq!(tree.symbol(id), nt("ForInitOpt"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return None; // ε
    }
    let inner = kids[0];
    let sym = tree.symbol(inner);
    if sym == nt("DeclForInit") {
        Some(Box::new(items::build_decl_for_init(tree, inner)))
    } else if sym == nt("Expr") {
        Some(Box::new(expr::build_expr(tree, inner)))
    } else {
        unreachable!("unexpected ForInitOpt alternative")
    }
}

fn build_expr_opt(tree: &ParseTree, id: NodeId) -> Option<Box<AstNode>> {
    debug_assert_eq!(tree.symbol(id), nt("ExprOpt"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return None; // ε
    }
    Some(Box::new(expr::build_expr(tree, kids[0])))
}

fn build_return_stmt(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("ReturnStmt"));
    let kids = tree.real_children(id);
    // kids = [ 'return', ExprOpt, ';' ]
    AstNode::Return(build_expr_opt(tree, kids[1]))
}
