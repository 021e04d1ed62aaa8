//! Grammar representation: ordered [`Production`]s grouped by head,
//! partitioned into terminals/nonterminals once [`Grammar::finalize`] runs.
//!
//! Mirrors `grammer.py`'s `Grammar`/`Production` shape, but with interned
//! [`Symbol`]s instead of Python strings and an explicit insertion-order
//! record, since production order is load-bearing for this front end's
//! first-writer-wins table-conflict policy (spec.md §9).

use faxc_util::symbol::{SYM_EOF, SYM_EPSILON};
use faxc_util::{FxHashMap, FxHashSet, IndexVec, Symbol};

faxc_util::define_idx!(ProductionId);

/// One grammar rule: `head -> body`. An empty `body` is never stored —
/// [`Grammar::add`] rewrites it to `[EPSILON]` so every production has at
/// least one body symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Production {
    pub head: Symbol,
    pub body: Vec<Symbol>,
}

impl Production {
    pub fn is_epsilon(&self) -> bool {
        self.body.len() == 1 && self.body[0] == SYM_EPSILON
    }
}

/// A context-free grammar over interned symbols.
pub struct Grammar {
    pub start: Symbol,
    pub productions: IndexVec<ProductionId, Production>,
    pub nonterminals: FxHashSet<Symbol>,
    pub terminals: FxHashSet<Symbol>,
    prods_by_head: FxHashMap<Symbol, Vec<ProductionId>>,
    nonterminal_order: Vec<Symbol>,
    finalized: bool,
}

impl Grammar {
    pub fn new(start: Symbol) -> Self {
        Self {
            start,
            productions: IndexVec::new(),
            nonterminals: FxHashSet::default(),
            terminals: FxHashSet::default(),
            prods_by_head: FxHashMap::default(),
            nonterminal_order: Vec::new(),
            finalized: false,
        }
    }

    /// Adds `head -> body`, in insertion order. `body.is_empty()` is
    /// normalized to a single `[EPSILON]` symbol.
    pub fn add(&mut self, head: Symbol, body: Vec<Symbol>) -> ProductionId {
        let body = if body.is_empty() { vec![SYM_EPSILON] } else { body };
        let id = self.productions.push(Production { head, body });
        if !self.prods_by_head.contains_key(&head) {
            self.nonterminal_order.push(head);
        }
        self.prods_by_head.entry(head).or_default().push(id);
        self.finalized = false;
        id
    }

    /// Partitions every body symbol into terminals or nonterminals.
    /// A symbol is a nonterminal iff it appears as the head of at least
    /// one production; everything else (plus EOF) is a terminal. Must be
    /// called after all `add` calls and before any analysis is run.
    pub fn finalize(&mut self) {
        self.nonterminals = self.prods_by_head.keys().copied().collect();
        let mut terminals = FxHashSet::default();
        for production in self.productions.as_slice() {
            for &sym in &production.body {
                if sym == SYM_EPSILON {
                    continue;
                }
                if !self.nonterminals.contains(&sym) {
                    terminals.insert(sym);
                }
            }
        }
        terminals.insert(SYM_EOF);
        self.terminals = terminals;
        self.finalized = true;
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn is_nonterminal(&self, sym: Symbol) -> bool {
        self.nonterminals.contains(&sym)
    }

    pub fn is_terminal(&self, sym: Symbol) -> bool {
        self.terminals.contains(&sym)
    }

    /// Nonterminal heads in first-seen (insertion) order.
    pub fn heads(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.nonterminal_order.iter().copied()
    }

    /// Productions for `head`, in the order they were added.
    pub fn productions_for(&self, head: Symbol) -> impl Iterator<Item = (ProductionId, &Production)> {
        self.prods_by_head
            .get(&head)
            .into_iter()
            .flatten()
            .map(move |&id| (id, &self.productions[id]))
    }

    pub fn production(&self, id: ProductionId) -> &Production {
        &self.productions[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sym(s: &str) -> Symbol {
        Symbol::intern(s)
    }

    #[test]
    fn empty_body_becomes_epsilon() {
        let mut g = Grammar::new(sym("S"));
        let id = g.add(sym("S"), vec![]);
        assert!(g.production(id).is_epsilon());
    }

    #[test]
    fn finalize_partitions_terminals_and_nonterminals() {
        let mut g = Grammar::new(sym("S"));
        g.add(sym("S"), vec![sym("a"), sym("B")]);
        g.add(sym("B"), vec![sym("b")]);
        g.finalize();
        assert!(g.is_nonterminal(sym("S")));
        assert!(g.is_nonterminal(sym("B")));
        assert!(g.is_terminal(sym("a")));
        assert!(g.is_terminal(sym("b")));
        assert!(g.is_terminal(SYM_EOF));
    }

    #[test]
    fn heads_preserve_insertion_order() {
        let mut g = Grammar::new(sym("S"));
        g.add(sym("S"), vec![sym("B")]);
        g.add(sym("B"), vec![sym("b")]);
        g.add(sym("S"), vec![sym("a")]);
        let heads: Vec<_> = g.heads().collect();
        assert_eq!(heads, vec![sym("S"), sym("B")]);
    }
}
