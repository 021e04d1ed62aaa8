//! faxc-grammar - grammar representation, FIRST/FOLLOW/SELECT analysis,
//! and predictive parse table construction for the C-subset front end.
//!
//! `faxc-par` consumes [`table::ParseTable`] built from
//! [`builtin::build_c_subset_grammar`]; nothing here depends on the
//! lexer or parser crates.

pub mod builtin;
pub mod grammar;
pub mod sets;
pub mod table;

pub use builtin::build_c_subset_grammar;
pub use grammar::{Grammar, Production, ProductionId};
pub use sets::{compute_first_sets, compute_follow_sets, compute_select_sets, FirstSets, FollowSets, SelectSets};
pub use table::{Conflict, ParseTable};
