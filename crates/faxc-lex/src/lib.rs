//! faxc-lex - longest-match lexer for the C-subset front end.
//!
//! Tokenizes source text into the terminal vocabulary consumed by
//! `faxc-grammar`/`faxc-par`: reserved words, identifiers, integer/float
//! constants (with radix), string/char constants, operators, and
//! delimiters. Identifier-vs-`TYPE_NAME` reclassification is not done
//! here — that is dynamic parser state, not a lexical property.

pub mod cursor;
pub mod lexer;
pub mod matchers;
pub mod token;

pub use lexer::Lexer;
pub use token::{Radix, Token};

#[cfg(test)]
mod edge_cases;
