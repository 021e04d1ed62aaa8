//! FIRST/FOLLOW/SELECT set computation.
//!
//! Direct port of `first_follow.py`'s fixed-point algorithms onto
//! [`Grammar`], with `FxHashMap`/`FxHashSet` standing in for Python's
//! `dict`/`set`.

use faxc_util::symbol::{SYM_EOF, SYM_EPSILON};
use faxc_util::{FxHashMap, FxHashSet, Symbol};

use crate::grammar::{Grammar, ProductionId};

pub type SymbolSet = FxHashSet<Symbol>;

/// FIRST(A) for every nonterminal A.
pub struct FirstSets(pub FxHashMap<Symbol, SymbolSet>);

/// FOLLOW(A) for every nonterminal A.
pub struct FollowSets(pub FxHashMap<Symbol, SymbolSet>);

/// SELECT(p) for every production p, keyed by [`ProductionId`].
pub struct SelectSets(pub FxHashMap<ProductionId, SymbolSet>);

/// FIRST of a symbol sequence: walks left to right, accumulating
/// `FIRST(Xi) \ {epsilon}` until a non-nullable symbol is hit (or the
/// sequence is exhausted, in which case epsilon is included).
pub fn first_of_sequence(seq: &[Symbol], grammar: &Grammar, first: &FirstSets) -> SymbolSet {
    let mut result = SymbolSet::default();
    let mut nullable_prefix = true;

    for &sym in seq {
        if sym == SYM_EPSILON {
            continue;
        }
        if grammar.is_terminal(sym) {
            result.insert(sym);
            nullable_prefix = false;
            break;
        }
        let first_sym = first.0.get(&sym).cloned().unwrap_or_default();
        for &s in &first_sym {
            if s != SYM_EPSILON {
                result.insert(s);
            }
        }
        if !first_sym.contains(&SYM_EPSILON) {
            nullable_prefix = false;
            break;
        }
    }

    if nullable_prefix {
        result.insert(SYM_EPSILON);
    }
    result
}

/// Fixed-point computation of FIRST sets for every nonterminal.
pub fn compute_first_sets(grammar: &Grammar) -> FirstSets {
    let mut first: FxHashMap<Symbol, SymbolSet> =
        grammar.heads().map(|h| (h, SymbolSet::default())).collect();

    loop {
        let mut changed = false;
        for production in grammar.productions.as_slice() {
            let head = production.head;
            let mut nullable_prefix = true;
            let mut additions: Vec<Symbol> = Vec::new();

            for &sym in &production.body {
                if sym == SYM_EPSILON {
                    continue;
                }
                if grammar.is_terminal(sym) {
                    additions.push(sym);
                    nullable_prefix = false;
                    break;
                }
                let first_sym = first.get(&sym).cloned().unwrap_or_default();
                for &s in &first_sym {
                    if s != SYM_EPSILON {
                        additions.push(s);
                    }
                }
                if !first_sym.contains(&SYM_EPSILON) {
                    nullable_prefix = false;
                    break;
                }
            }
            if nullable_prefix {
                additions.push(SYM_EPSILON);
            }

            let set = first.entry(head).or_default();
            for sym in additions {
                if set.insert(sym) {
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }

    log::debug!("FIRST sets reached fixed point for {} nonterminals", first.len());
    FirstSets(first)
}

/// Fixed-point computation of FOLLOW sets for every nonterminal.
/// `FOLLOW(start)` is seeded with `{EOF}`.
pub fn compute_follow_sets(grammar: &Grammar, first: &FirstSets) -> FollowSets {
    let mut follow: FxHashMap<Symbol, SymbolSet> =
        grammar.heads().map(|h| (h, SymbolSet::default())).collect();
    follow.entry(grammar.start).or_default().insert(SYM_EOF);

    loop {
        let mut changed = false;
        for production in grammar.productions.as_slice() {
            let body = &production.body;
            for (i, &sym) in body.iter().enumerate() {
                if !grammar.is_nonterminal(sym) {
                    continue;
                }
                let beta = &body[i + 1..];
                let first_beta = first_of_sequence(beta, grammar, first);

                let mut additions: Vec<Symbol> = first_beta
                    .iter()
                    .copied()
                    .filter(|&s| s != SYM_EPSILON)
                    .collect();
                let beta_nullable = beta.is_empty() || first_beta.contains(&SYM_EPSILON);
                if beta_nullable {
                    if let Some(follow_head) = follow.get(&production.head).cloned() {
                        additions.extend(follow_head);
                    }
                }

                let set = follow.entry(sym).or_default();
                for s in additions {
                    if set.insert(s) {
                        changed = true;
                    }
                }
            }
        }
        if !changed {
            break;
        }
    }

    log::debug!("FOLLOW sets reached fixed point for {} nonterminals", follow.len());
    FollowSets(follow)
}

/// SELECT(p) = FIRST(body) \ {epsilon} ∪ (FOLLOW(head) if epsilon in FIRST(body)).
pub fn compute_select_sets(
    grammar: &Grammar,
    first: &FirstSets,
    follow: &FollowSets,
) -> SelectSets {
    let mut select = FxHashMap::default();
    for (id, production) in grammar.productions.iter_enumerated() {
        let first_body = first_of_sequence(&production.body, grammar, first);
        let mut set: SymbolSet = first_body.iter().copied().filter(|&s| s != SYM_EPSILON).collect();
        if first_body.contains(&SYM_EPSILON) {
            if let Some(follow_head) = follow.0.get(&production.head) {
                set.extend(follow_head.iter().copied());
            }
        }
        select.insert(id, set);
    }
    SelectSets(select)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Grammar;

    fn sym(s: &str) -> Symbol {
        Symbol::intern(s)
    }

    /// S -> A b
    /// A -> a
    /// A -> EPSILON
    fn nullable_grammar() -> Grammar {
        let mut g = Grammar::new(sym("S"));
        g.add(sym("S"), vec![sym("A"), sym("b")]);
        g.add(sym("A"), vec![sym("a")]);
        g.add(sym("A"), vec![]);
        g.finalize();
        g
    }

    #[test]
    fn first_of_nullable_nonterminal_includes_follow_set_contribution() {
        let g = nullable_grammar();
        let first = compute_first_sets(&g);
        assert!(first.0[&sym("A")].contains(&sym("a")));
        assert!(first.0[&sym("A")].contains(&SYM_EPSILON));
        assert!(first.0[&sym("S")].contains(&sym("a")));
        assert!(first.0[&sym("S")].contains(&sym("b")));
    }

    #[test]
    fn follow_of_nullable_a_includes_b() {
        let g = nullable_grammar();
        let first = compute_first_sets(&g);
        let follow = compute_follow_sets(&g, &first);
        assert!(follow.0[&sym("A")].contains(&sym("b")));
    }

    #[test]
    fn follow_of_start_includes_eof() {
        let g = nullable_grammar();
        let first = compute_first_sets(&g);
        let follow = compute_follow_sets(&g, &first);
        assert!(follow.0[&sym("S")].contains(&SYM_EOF));
    }

    #[test]
    fn select_set_of_epsilon_production_is_follow_of_head() {
        let g = nullable_grammar();
        let first = compute_first_sets(&g);
        let follow = compute_follow_sets(&g, &first);
        let select = compute_select_sets(&g, &first, &follow);
        let (eps_id, _) = g
            .productions_for(sym("A"))
            .find(|(_, p)| p.is_epsilon())
            .unwrap();
        assert_eq!(select.0[&eps_id], follow.0[&sym("A")]);
    }
}
