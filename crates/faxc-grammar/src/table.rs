//! Predictive parse table construction.
//!
//! Direct port of `parse_table.py`'s `ParseTable.from_grammar`: iterate
//! every production's SELECT set and write `table[head][terminal] =
//! production`. When a cell is already occupied by a *different*
//! production, record a conflict and keep the production written first —
//! first-writer-wins, which is why grammar production insertion order is
//! load-bearing (spec.md §9).

use faxc_util::{FxHashMap, Symbol};

use crate::grammar::{Grammar, ProductionId};
use crate::sets::SelectSets;

/// One LL(1) conflict: two productions under the same head both claim
/// the same lookahead terminal. `kept` is the production the table
/// actually uses (the first one written); `rejected` lost.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conflict {
    pub head: Symbol,
    pub terminal: Symbol,
    pub kept: ProductionId,
    pub rejected: ProductionId,
}

/// `M[nonterminal][terminal] -> production`, built once from a finalized
/// grammar's SELECT sets.
pub struct ParseTable {
    table: FxHashMap<Symbol, FxHashMap<Symbol, ProductionId>>,
    pub conflicts: Vec<Conflict>,
}

impl ParseTable {
    pub fn get(&self, nonterminal: Symbol, terminal: Symbol) -> Option<ProductionId> {
        self.table.get(&nonterminal)?.get(&terminal).copied()
    }

    /// Builds the table from `grammar`'s SELECT sets, visiting
    /// productions in the grammar's insertion order. Conflicts are
    /// recorded (never fatal) — this front end always runs in permissive
    /// mode; a hard LL(1) rejection mode has no caller in this crate.
    pub fn from_grammar(grammar: &Grammar, select: &SelectSets) -> Self {
        let mut table: FxHashMap<Symbol, FxHashMap<Symbol, ProductionId>> = FxHashMap::default();
        let mut conflicts = Vec::new();

        for head in grammar.heads() {
            for (id, _production) in grammar.productions_for(head) {
                let Some(terminals) = select.0.get(&id) else { continue };
                let mut terms: Vec<Symbol> = terminals.iter().copied().collect();
                terms.sort_by_key(|s| s.as_str().to_string());
                for terminal in terms {
                    let row = table.entry(head).or_default();
                    match row.get(&terminal).copied() {
                        None => {
                            row.insert(terminal, id);
                        }
                        Some(existing) if existing != id => {
                            conflicts.push(Conflict {
                                head,
                                terminal,
                                kept: existing,
                                rejected: id,
                            });
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        if !conflicts.is_empty() {
            log::debug!("parse table built with {} LL(1) conflicts", conflicts.len());
        }
        ParseTable { table, conflicts }
    }

    /// A spreadsheet-shaped view of the table: header row is `[""] +`
    /// the terminals (in `terminal_order`), one row per nonterminal (in
    /// `grammar.heads()` order) with each cell rendered as
    /// `"{head} -> {body}"` (epsilon spelled out) or `""` when empty.
    /// This is a pure data shape — no xlsx/zip bytes are produced here.
    pub fn to_grid(&self, grammar: &Grammar, terminal_order: &[Symbol]) -> Vec<Vec<String>> {
        let mut header = vec![String::new()];
        header.extend(terminal_order.iter().map(|s| s.as_str().to_string()));

        let mut grid = vec![header];
        for head in grammar.heads() {
            let mut row = vec![head.as_str().to_string()];
            for &terminal in terminal_order {
                let cell = match self.get(head, terminal) {
                    Some(id) => render_production(grammar, id),
                    None => String::new(),
                };
                row.push(cell);
            }
            grid.push(row);
        }
        grid
    }
}

fn render_production(grammar: &Grammar, id: ProductionId) -> String {
    let production = grammar.production(id);
    let body: Vec<String> = production
        .body
        .iter()
        .map(|s| {
            if *s == faxc_util::symbol::SYM_EPSILON {
                "ε".to_string()
            } else {
                s.as_str().to_string()
            }
        })
        .collect();
    format!("{} -> {}", production.head.as_str(), body.join(" "))
}
