//! Expression folding: assignment down through primary, each left-factored
//! level in the grammar turned back into a left- (or right-, for
//! assignment) associative tree.
//!
//! Grounded in `ast_builder.py`'s `_ast_AssignExpr`/`_fold_tail`/
//! `_ast_PostfixExpr` family, folded here against this grammar's exact
//! `*Tail` production shapes (see `faxc-grammar/src/builtin.rs`) rather
//! than against a Pratt-parser precedence table — this grammar already
//! encodes precedence as grammar levels, so there is no operator table
//! to consult at fold time.

use faxc_util::Symbol;

use crate::ast::AstNode;
use crate::tree::{NodeId, ParseTree};
use crate::types::nt;

pub(crate) fn build_expr(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("Expr"));
    let kids = tree.real_children(id);
    // kids = [ AssignExpr ]
    build_assign_expr(tree, kids[0])
}

/// `AssignExpr -> OrExpr AssignTail`, `AssignTail -> '=' AssignExpr | ε`.
/// Right-associative: `a = b = c` nests the right operand, not the left.
fn build_assign_expr(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("AssignExpr"));
    let kids = tree.real_children(id);
    let target = build_or_expr(tree, kids[0]);
    let tail_kids = tree.real_children(kids[1]);
    if tail_kids.is_empty() {
        return target; // ε: no assignment, just the OrExpr's value
    }
    // tail_kids = [ '=', AssignExpr ]
    let value = build_assign_expr(tree, tail_kids[1]);
    AstNode::Assign { target: Box::new(target), value: Box::new(value) }
}

/// Folds a left-recursive `Head -> Operand HeadTail` / `HeadTail -> op
/// Operand HeadTail | ε` pair into a left-associative `Binary` chain.
/// `build_operand` folds one `Operand`; `HeadTail`'s first real child is
/// always the operator leaf.
fn fold_left_assoc(
    tree: &ParseTree,
    mut acc: AstNode,
    mut tail_id: NodeId,
    build_operand: impl Fn(&ParseTree, NodeId) -> AstNode,
) -> AstNode {
    loop {
        let tail_kids = tree.real_children(tail_id);
        if tail_kids.is_empty() {
            return acc; // ε
        }
        // tail_kids = [ op, Operand, HeadTail ]
        let op = tree.leaf_text(tail_kids[0]).expect("tail operator leaf");
        let rhs = build_operand(tree, tail_kids[1]);
        acc = AstNode::Binary { op, left: Box::new(acc), right: Box::new(rhs) };
        tail_id = tail_kids[2];
    }
}

fn build_or_expr(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("OrExpr"));
    let kids = tree.real_children(id);
    let first = build_and_expr(tree, kids[0]);
    fold_left_assoc(tree, first, kids[1], build_and_expr)
}

fn build_and_expr(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("AndExpr"));
    let kids = tree.real_children(id);
    let first = build_eq_expr(tree, kids[0]);
    fold_left_assoc(tree, first, kids[1], build_eq_expr)
}

fn build_eq_expr(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("EqExpr"));
    let kids = tree.real_children(id);
    let first = build_rel_expr(tree, kids[0]);
    fold_left_assoc(tree, first, kids[1], build_rel_expr)
}

fn build_rel_expr(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("RelExpr"));
    let kids = tree.real_children(id);
    let first = build_add_expr(tree, kids[0]);
    fold_left_assoc(tree, first, kids[1], build_add_expr)
}

fn build_add_expr(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("AddExpr"));
    let kids = tree.real_children(id);
    let first = build_mul_expr(tree, kids[0]);
    fold_left_assoc(tree, first, kids[1], build_mul_expr)
}

fn build_mul_expr(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("MulExpr"));
    let kids = tree.real_children(id);
    let first = build_unary_expr(tree, kids[0]);
    fold_left_assoc(tree, first, kids[1], build_unary_expr)
}

/// `UnaryExpr -> ('+' | '-' | '!') UnaryExpr | PostfixExpr`.
fn build_unary_expr(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("UnaryExpr"));
    let kids = tree.real_children(id);
    if kids.len() == 1 {
        return build_postfix_expr(tree, kids[0]);
    }
    // kids = [ op, UnaryExpr ]
    let op = tree.leaf_text(kids[0]).expect("unary operator leaf");
    let expr = build_unary_expr(tree, kids[1]);
    AstNode::Unary { op, expr: Box::new(expr) }
}

fn build_postfix_expr(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("PostfixExpr"));
    let kids = tree.real_children(id);
    // kids = [ Primary, PostfixTail ]
    let primary = build_primary(tree, kids[0]);
    build_postfix_tail(tree, kids[1], primary)
}

/// `PostfixTail -> '(' ArgListOpt ')' PostfixTail
///              |  '[' Expr ']' PostfixTail
///              |  '.' ID PostfixTail
///              |  '++' PostfixTail
///              |  '--' PostfixTail
///              |  ε`
/// Each alternative wraps `acc` and continues with the next tail, so a
/// chain like `a[i].b++` folds left to right as the source reads it.
fn build_postfix_tail(tree: &ParseTree, id: NodeId, acc: AstNode) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("PostfixTail"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return acc; // ε
    }
    let head_sym = tree.symbol(kids[0]);
    if head_sym == faxc_util::symbol::DL_LPAREN {
        // kids = [ '(', ArgListOpt, ')', PostfixTail ]
        let args = build_arg_list_opt(tree, kids[1]);
        let next = AstNode::Call { callee: Box::new(acc), args };
        build_postfix_tail(tree, kids[3], next)
    } else if head_sym == Symbol::intern_known("[") {
        // kids = [ '[', Expr, ']', PostfixTail ]
        let index = build_expr(tree, kids[1]);
        let next = AstNode::Index { base: Box::new(acc), index: Box::new(index) };
        build_postfix_tail(tree, kids[3], next)
    } else if head_sym == Symbol::intern_known(".") {
        // kids = [ '.', ID, PostfixTail ]
        let name = tree.leaf_text(kids[1]).expect("member ID");
        let next = AstNode::Member { base: Box::new(acc), name };
        build_postfix_tail(tree, kids[2], next)
    } else if head_sym == Symbol::intern_known("++") {
        // kids = [ '++', PostfixTail ]
        build_postfix_tail(tree, kids[1], AstNode::PostInc(Box::new(acc)))
    } else if head_sym == Symbol::intern_known("--") {
        // kids = [ '--', PostfixTail ]
        build_postfix_tail(tree, kids[1], AstNode::PostDec(Box::new(acc)))
    } else {
        unreachable!("unexpected PostfixTail alternative")
    }
}

/// `Primary -> ID | printf | CONSTANT | '(' Expr ')'`.
fn build_primary(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("Primary"));
    let kids = tree.real_children(id);
    let first_sym = tree.symbol(kids[0]);
    if first_sym == faxc_util::symbol::SYM_ID {
        AstNode::Id(tree.leaf_text(kids[0]).expect("ID leaf"))
    } else if first_sym == Symbol::intern_known("printf") {
        AstNode::Id(tree.leaf_text(kids[0]).expect("printf leaf"))
    } else if first_sym == nt("CONSTANT") {
        build_constant(tree, kids[0])
    } else if first_sym == faxc_util::symbol::DL_LPAREN {
        // kids = [ '(', Expr, ')' ]
        build_expr(tree, kids[1])
    } else {
        unreachable!("unexpected Primary alternative")
    }
}

fn build_constant(tree: &ParseTree, id: NodeId) -> AstNode {
    debug_assert_eq!(tree.symbol(id), nt("CONSTANT"));
    let kids = tree.real_children(id);
    AstNode::Literal(tree.leaf_text(kids[0]).expect("constant leaf"))
}

fn build_arg_list_opt(tree: &ParseTree, id: NodeId) -> Vec<AstNode> {
    debug_assert_eq!(tree.symbol(id), nt("ArgListOpt"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return Vec::new(); // ε
    }
    build_arg_list(tree, kids[0])
}

fn build_arg_list(tree: &ParseTree, id: NodeId) -> Vec<AstNode> {
    debug_assert_eq!(tree.symbol(id), nt("ArgList"));
    let kids = tree.real_children(id);
    // kids = [ Expr, ArgListTail ]
    let mut args = vec![build_expr(tree, kids[0])];
    args.extend(build_arg_list_tail(tree, kids[1]));
    args
}

fn build_arg_list_tail(tree: &ParseTree, id: NodeId) -> Vec<AstNode> {
    debug_assert_eq!(tree.symbol(id), nt("ArgListTail"));
    let kids = tree.real_children(id);
    if kids.is_empty() {
        return Vec::new(); // ε
    }
    // kids = [ ',', Expr, ArgListTail ]
    let mut args = vec![build_expr(tree, kids[1])];
    args.extend(build_arg_list_tail(tree, kids[2]));
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::build_program;
    use crate::parser::PredictiveParser;
    use faxc_grammar::build_c_subset_grammar;
    use faxc_lex::Lexer;
    use faxc_util::Handler;

    fn parse_expr_stmt(src: &str) -> AstNode {
        let full = format!("void f() {{ {} }}", src);
        let mut lex_handler = Handler::new();
        let mut lexer = Lexer::new(&full, &mut lex_handler);
        let mut tokens = Vec::new();
        loop {
            let tok = lexer.next_token();
            let span = lexer.token_span();
            let is_eof = tok.is_eof();
            tokens.push((tok, span));
            if is_eof {
                break;
            }
        }
        let grammar = build_c_subset_grammar();
        let mut handler = Handler::new();
        let mut parser = PredictiveParser::new(&grammar, tokens, &mut handler);
        let outcome = parser.parse().expect("parse should succeed");
        let ast = build_program(&outcome.tree);
        let AstNode::Program(items) = ast else { panic!("expected Program") };
        let AstNode::FuncDef { body, .. } = items.into_iter().next().expect("one FuncDef") else {
            panic!("expected FuncDef")
        };
        let AstNode::Block(mut stmts) = *body else { panic!("expected Block body") };
        let AstNode::ExprStmt(expr) = stmts.remove(0) else { panic!("expected ExprStmt") };
        *expr
    }

    #[test]
    fn additive_is_left_associative() {
        let ast = parse_expr_stmt("a + b;");
        match ast {
            AstNode::Binary { op, .. } => assert_eq!(op.as_str(), "+"),
            other => panic!("expected Binary, got {other:?}"),
        }
    }

    #[test]
    fn chained_additive_left_folds() {
        // a - b + c should fold as (a - b) + c, not a - (b + c).
        let ast = parse_expr_stmt("a - b + c;");
        match ast {
            AstNode::Binary { op, left, .. } => {
                assert_eq!(op.as_str(), "+");
                match *left {
                    AstNode::Binary { op, .. } => assert_eq!(op.as_str(), "-"),
                    other => panic!("expected nested Binary, got {other:?}"),
                }
            }
            other => panic!("expected Binary, got {other:?}"),
        }
    }

    #[test]
    fn assignment_is_right_associative() {
        // a = b = c should fold as a = (b = c).
        let ast = parse_expr_stmt("a = b = c;");
        match ast {
            AstNode::Assign { target, value } => {
                assert!(matches!(*target, AstNode::Id(_)));
                assert!(matches!(*value, AstNode::Assign { .. }));
            }
            other => panic!("expected Assign, got {other:?}"),
        }
    }

    #[test]
    fn postfix_chain_folds_left_to_right() {
        let ast = parse_expr_stmt("a[0].b++;");
        match ast {
            AstNode::PostInc(inner) => match *inner {
                AstNode::Member { base, .. } => {
                    assert!(matches!(*base, AstNode::Index { .. }));
                }
                other => panic!("expected Member, got {other:?}"),
            },
            other => panic!("expected PostInc, got {other:?}"),
        }
    }

    #[test]
    fn call_with_multiple_args() {
        let ast = parse_expr_stmt("f(1, 2, 3);");
        match ast {
            AstNode::Call { args, .. } => assert_eq!(args.len(), 3),
            other => panic!("expected Call, got {other:?}"),
        }
    }
}
