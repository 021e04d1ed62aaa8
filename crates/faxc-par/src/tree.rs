//! Arena-backed parse tree.
//!
//! Nodes are owned by a single `IndexVec`, not individually boxed or
//! reference-counted (spec.md §9's re-architecture hint). A node's
//! `token` field is `Some` only for leaf (terminal) nodes; nonterminal
//! nodes accumulate `children` as the stack machine expands them.

use faxc_util::{IndexVec, Span, Symbol};

faxc_util::define_idx!(NodeId);

#[derive(Clone, Debug)]
pub struct ParseTreeNode {
    pub symbol: Symbol,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// The lexeme and span this node was matched against, for leaf nodes.
    pub token: Option<(Symbol, Span)>,
}

impl ParseTreeNode {
    pub fn is_leaf(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_epsilon(&self) -> bool {
        self.children.is_empty() && self.token.is_none()
    }
}

/// The arena plus its root, handed back by a successful parse.
pub struct ParseTree {
    pub nodes: IndexVec<NodeId, ParseTreeNode>,
    pub root: NodeId,
}

impl ParseTree {
    pub fn node(&self, id: NodeId) -> &ParseTreeNode {
        &self.nodes[id]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id].children
    }

    /// Non-epsilon children, in tree order — the shape most simplifier
    /// walks want (`ast_builder.py`'s `_kids`).
    pub fn real_children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes[id]
            .children
            .iter()
            .copied()
            .filter(|&c| !self.nodes[c].is_epsilon())
            .collect()
    }

    pub fn symbol(&self, id: NodeId) -> Symbol {
        self.nodes[id].symbol
    }

    /// The lexeme text of a leaf node, or `None` for a nonterminal node.
    pub fn leaf_text(&self, id: NodeId) -> Option<Symbol> {
        self.nodes[id].token.map(|(text, _)| text)
    }

    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.real_children(id).first().copied()
    }
}
