//! faxc-par - predictive (LL(1), table-driven) parser for the C subset.
//!
//! Unlike a recursive-descent or Pratt parser, this crate never recurses
//! per nonterminal: [`parser::PredictiveParser`] runs a single stack
//! machine driven by a predictive parse table built by `faxc-grammar`
//! from the grammar's FIRST/FOLLOW/SELECT sets. The stack machine
//! builds a concrete parse tree ([`tree::ParseTree`]) as it reduces,
//! records a step-by-step trace for diagnostics, and promotes struct
//! and union tag identifiers to `TYPE_NAME` the moment they're matched
//! so that later declarations using the same name parse as types.
//!
//! [`ast`] then folds that concrete parse tree — including its epsilon
//! leaves and left-factored tail nonterminals (`AddTail`, `PostfixTail`,
//! and friends) — down into the compact [`ast::AstNode`] enum that the
//! rest of a front end would consume.
//!
//! Grounded throughout in `original_source/service/parser.py` (the
//! stack-machine control flow) and `original_source/service/ast_builder.py`
//! (the tree-to-AST folding), reworked against a hand-written grammar
//! instead of a table loaded from a spreadsheet.

pub mod ast;
pub mod expr;
pub mod items;
pub mod stmt;
pub mod tree;
pub mod types;

pub mod parser;

#[cfg(test)]
mod edge_cases;

pub use ast::AstNode;
pub use items::build_program;
pub use parser::{
    ParseError, ParseOutcome, ParserConfig, PredictiveParser, Role, Trace, TraceAction, TraceEntry,
};
pub use tree::{NodeId, ParseTree, ParseTreeNode};
