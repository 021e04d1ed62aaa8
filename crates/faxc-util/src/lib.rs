//! faxc-util - core utilities shared by the lexer, grammar, and parser crates.
//!
//! Provides interned [`Symbol`]s, source [`Span`]s, the [`Diagnostic`]/[`Handler`]
//! reporting pipeline, [`IndexVec`] typed collections, and [`DefId`] allocation.
//! Nothing here is specific to C; the C-subset vocabulary lives in
//! [`symbol`]'s reserved-symbol table.

pub mod def_id;
pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use def_id::{DefId, DefIdGenerator};
pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SourceMapError, SymbolError};
pub use index_vec::{Idx, IndexVec};
pub use span::{FileId, SourceFile, SourceMap, Span};
pub use symbol::Symbol;

pub use rustc_hash::{FxHashMap, FxHashSet};
