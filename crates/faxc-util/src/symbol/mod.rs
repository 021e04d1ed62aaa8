//! Symbol module - String interning for efficient identifier handling.
//!
//! This module provides the [`Symbol`] type, which is a compact (4-byte) handle
//! to an interned string. Symbols enable O(1) string comparison and reduce memory
//! usage when the same string appears multiple times in the compiler.
//!
//! # Overview
//!
//! The symbol interning system is a core component of the front end, providing:
//!
//! - **Memory efficiency**: Each unique string is stored only once
//! - **Fast comparison**: Symbol comparison is O(1) via index comparison
//! - **Thread safety**: Safe to use across multiple threads concurrently
//! - **Stable handles**: Symbols remain valid for the program lifetime
//!
//! # Performance Characteristics
//!
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `Symbol::intern()` (hit) | O(1) | String already interned |
//! | `Symbol::intern()` (miss) | O(1) | New string allocation |
//! | `Symbol` comparison | O(1) | Index comparison only |
//! | `Symbol::as_str()` | O(n) | Linear search by index |
//! | `Symbol::eq_str()` | O(1) | Hash + pointer comparison |
//!
//! # Thread Safety
//!
//! The symbol interner is fully thread-safe (`Sync + Send`). Multiple threads
//! can intern strings concurrently without blocking each other, thanks to
//! DashMap's lock-free design.
//!
//! # Memory Model
//!
//! Interned strings are allocated on the heap with `'static` lifetime.
//! They are never deallocated, which is acceptable because:
//! 1. The compiler runs for a finite duration
//! 2. The total memory usage is bounded by source code size
//! 3. This avoids complex lifetime tracking
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```
//! use faxc_util::symbol::Symbol;
//!
//! let s1 = Symbol::intern("hello");
//! let s2 = Symbol::intern("hello");
//! let s3 = Symbol::intern("world");
//!
//! assert_eq!(s1, s2);  // Same symbol for same string
//! assert_ne!(s1, s3);  // Different strings get different symbols
//! ```
//!
//! Using known keywords:
//!
//! ```
//! use faxc_util::symbol::{Symbol, KW_IF, KW_WHILE};
//!
//! assert_eq!(KW_IF.as_str(), "if");
//! assert_eq!(KW_WHILE.as_str(), "while");
//! assert!(KW_IF.is_known());  // Pre-defined keyword
//! ```
//!
//! Thread-safe usage:
//!
//! ```
//! use faxc_util::symbol::Symbol;
//! use std::thread;
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|i| {
//!         thread::spawn(move || {
//!             Symbol::intern(&format!("thread_{}", i))
//!         })
//!     })
//!     .collect();
//!
//! let symbols: Vec<_> = handles.into_iter()
//!     .map(|h| h.join().unwrap())
//!     .collect();
//!
//! // All symbols are unique
//! assert_eq!(symbols.len(), 4);
//! ```
//!
//! # Statistics and Profiling
//!
//! The interner tracks hit/miss statistics for performance profiling:
//!
//! ```
//! use faxc_util::symbol::Symbol;
//!
//! let _ = Symbol::intern("test");
//! let _ = Symbol::intern("test");  // Hit
//!
//! let stats = Symbol::stats_struct();
//! println!("Hits: {}, Misses: {}", stats.hits, stats.misses);
//! ```

mod interner;

pub use interner::STRING_TABLE;

/// Statistics about the string interner for profiling
///
/// Provides insights into memory usage and efficiency of the interner.
///
/// # Fields
///
/// * `count` - Number of unique interned strings
/// * `capacity` - Hash map capacity (number of buckets)
/// * `collisions` - Number of hash collisions encountered
/// * `hits` - Number of times an already-interned string was requested
/// * `misses` - Number of times a new string was allocated
///
/// # Examples
///
/// ```
/// use faxc_util::symbol::{Symbol, InternerStats};
///
/// let stats = Symbol::stats_struct();
/// println!("Interned {} strings", stats.count);
/// println!("Hit rate: {:.2}%", stats.hit_rate() * 100.0);
/// println!("Load factor: {:.2}", stats.load_factor());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct InternerStats {
    /// Number of interned strings
    pub count: usize,
    /// Hash map capacity (number of buckets)
    pub capacity: usize,
    /// Number of hash collisions encountered
    pub collisions: usize,
    /// Number of cache hits (string already interned)
    pub hits: usize,
    /// Number of cache misses (new string allocation)
    pub misses: usize,
}

impl InternerStats {
    /// Create new stats with the given values
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats::new(100, 256, 5, 80, 20);
    /// assert_eq!(stats.count, 100);
    /// assert_eq!(stats.hits, 80);
    /// ```
    pub const fn new(
        count: usize,
        capacity: usize,
        collisions: usize,
        hits: usize,
        misses: usize,
    ) -> Self {
        Self {
            count,
            capacity,
            collisions,
            hits,
            misses,
        }
    }

    /// Calculate the load factor (count / capacity)
    ///
    /// Returns 0.0 if capacity is 0.
    ///
    /// A load factor above 0.75 indicates the hash map may need resizing.
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats::new(100, 200, 0, 0, 0);
    /// assert_eq!(stats.load_factor(), 0.5);
    /// ```
    pub fn load_factor(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.count as f64 / self.capacity as f64
        }
    }

    /// Check if the interner is getting full (load factor > 0.75)
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats::new(100, 200, 0, 0, 0);
    /// assert!(!stats.is_near_capacity());
    ///
    /// let stats = InternerStats::new(100, 120, 0, 0, 0);
    /// assert!(stats.is_near_capacity());
    /// ```
    pub fn is_near_capacity(&self) -> bool {
        self.load_factor() > 0.75
    }

    /// Calculate the hit rate (hits / (hits + misses))
    ///
    /// Returns 0.0 if no lookups have been performed.
    ///
    /// A high hit rate (>0.9) indicates good interning efficiency.
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats::new(100, 200, 0, 90, 10);
    /// assert_eq!(stats.hit_rate(), 0.9);
    /// ```
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Get total number of interning operations
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats::new(100, 200, 0, 90, 10);
    /// assert_eq!(stats.total_operations(), 100);
    /// ```
    pub fn total_operations(&self) -> usize {
        self.hits + self.misses
    }

    /// Get memory efficiency ratio (unique strings / total operations)
    ///
    /// Lower values indicate better deduplication.
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::InternerStats;
    ///
    /// let stats = InternerStats::new(10, 100, 0, 90, 10);
    /// assert_eq!(stats.memory_efficiency(), 0.1);  // 10 unique / 100 ops
    /// ```
    pub fn memory_efficiency(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.count as f64 / self.total_operations() as f64
        }
    }
}

/// Symbol - An interned string identifier
///
/// A Symbol is a compact (4-byte) handle to a string stored in a global
/// string table. This enables O(1) string comparison and reduces memory
/// usage when the same string appears multiple times.
///
/// # Size
///
/// `Symbol` is exactly 4 bytes (u32), making it very cache-friendly compared
/// to `String` which is 24 bytes plus heap allocation.
///
/// # Thread Safety
///
/// Symbols are safe to share across threads (`Sync + Send`). The underlying
/// string table uses DashMap for lock-free concurrent access.
///
/// # Lifetime
///
/// Interned strings have `'static` lifetime and are never deallocated.
/// This is safe because the string table lives for the program duration.
///
/// # Examples
///
/// ```
/// use faxc_util::symbol::Symbol;
///
/// let keyword = Symbol::intern("fn");
/// let name = Symbol::intern("main");
///
/// assert_eq!(keyword.as_str(), "fn");
/// assert_eq!(name.as_str(), "main");
/// assert_eq!(keyword, Symbol::intern("fn"));  // O(1) comparison
/// ```
///
/// # Performance Notes
///
/// - **Creation**: O(1) hash lookup/insert
/// - **Comparison**: O(1) index comparison
/// - **String retrieval**: O(n) linear search (avoid in hot paths)
/// - **Memory**: One allocation per unique string
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    /// Index into the global string table
    pub(crate) index: u32,
}

// ============================================================================
// KNOWN SYMBOLS (KEYWORDS AND BUILTINS)
// ============================================================================
//
/// Reserved symbol indices for known symbols (keywords, types, operators)
///
/// All symbols with index < this value are pre-defined at compile time
/// and correspond to language keywords, type names, and common operators.
const RESERVED_SYMBOLS_END: u32 = 512;

// ----------------------------------------------------------------------------
// C-subset keywords (c89/c90 reserved words recognized by the lexer)
// ----------------------------------------------------------------------------

/// Known symbol for the `auto` keyword
pub const KW_AUTO: Symbol = Symbol { index: 0 };
/// Known symbol for the `break` keyword
pub const KW_BREAK: Symbol = Symbol { index: 1 };
/// Known symbol for the `case` keyword
pub const KW_CASE: Symbol = Symbol { index: 2 };
/// Known symbol for the `char` keyword
pub const KW_CHAR: Symbol = Symbol { index: 3 };
/// Known symbol for the `const` keyword
pub const KW_CONST: Symbol = Symbol { index: 4 };
/// Known symbol for the `continue` keyword
pub const KW_CONTINUE: Symbol = Symbol { index: 5 };
/// Known symbol for the `default` keyword
pub const KW_DEFAULT: Symbol = Symbol { index: 6 };
/// Known symbol for the `do` keyword
pub const KW_DO: Symbol = Symbol { index: 7 };
/// Known symbol for the `double` keyword
pub const KW_DOUBLE: Symbol = Symbol { index: 8 };
/// Known symbol for the `else` keyword
pub const KW_ELSE: Symbol = Symbol { index: 9 };
/// Known symbol for the `enum` keyword
pub const KW_ENUM: Symbol = Symbol { index: 10 };
/// Known symbol for the `extern` keyword
pub const KW_EXTERN: Symbol = Symbol { index: 11 };
/// Known symbol for the `float` keyword
pub const KW_FLOAT: Symbol = Symbol { index: 12 };
/// Known symbol for the `for` keyword
pub const KW_FOR: Symbol = Symbol { index: 13 };
/// Known symbol for the `goto` keyword
pub const KW_GOTO: Symbol = Symbol { index: 14 };
/// Known symbol for the `if` keyword
pub const KW_IF: Symbol = Symbol { index: 15 };
/// Known symbol for the `int` keyword
pub const KW_INT: Symbol = Symbol { index: 16 };
/// Known symbol for the `long` keyword
pub const KW_LONG: Symbol = Symbol { index: 17 };
/// Known symbol for the `register` keyword
pub const KW_REGISTER: Symbol = Symbol { index: 18 };
/// Known symbol for the `return` keyword
pub const KW_RETURN: Symbol = Symbol { index: 19 };
/// Known symbol for the `short` keyword
pub const KW_SHORT: Symbol = Symbol { index: 20 };
/// Known symbol for the `signed` keyword
pub const KW_SIGNED: Symbol = Symbol { index: 21 };
/// Known symbol for the `sizeof` keyword
pub const KW_SIZEOF: Symbol = Symbol { index: 22 };
/// Known symbol for the `static` keyword
pub const KW_STATIC: Symbol = Symbol { index: 23 };
/// Known symbol for the `struct` keyword
pub const KW_STRUCT: Symbol = Symbol { index: 24 };
/// Known symbol for the `switch` keyword
pub const KW_SWITCH: Symbol = Symbol { index: 25 };
/// Known symbol for the `typedef` keyword
pub const KW_TYPEDEF: Symbol = Symbol { index: 26 };
/// Known symbol for the `union` keyword
pub const KW_UNION: Symbol = Symbol { index: 27 };
/// Known symbol for the `unsigned` keyword
pub const KW_UNSIGNED: Symbol = Symbol { index: 28 };
/// Known symbol for the `void` keyword
pub const KW_VOID: Symbol = Symbol { index: 29 };
/// Known symbol for the `volatile` keyword
pub const KW_VOLATILE: Symbol = Symbol { index: 30 };
/// Known symbol for the `while` keyword
pub const KW_WHILE: Symbol = Symbol { index: 31 };
/// Known symbol for the `printf` keyword
pub const KW_PRINTF: Symbol = Symbol { index: 32 };
/// Known symbol for the `include` keyword
pub const KW_INCLUDE: Symbol = Symbol { index: 33 };

// ----------------------------------------------------------------------------
// Terminal-class symbols (grammar terminal names bit-exact with table output)
// ----------------------------------------------------------------------------

/// Known symbol for the reserved `EOF` terminal
pub const SYM_EOF: Symbol = Symbol { index: 34 };
/// Known symbol for the distinguished `ε` (epsilon) body marker
pub const SYM_EPSILON: Symbol = Symbol { index: 35 };
/// Known symbol for the `ID` terminal (plain identifier)
pub const SYM_ID: Symbol = Symbol { index: 36 };
/// Known symbol for the `TYPE_NAME` terminal (promoted identifier)
pub const SYM_TYPE_NAME: Symbol = Symbol { index: 37 };
/// Known symbol for the `INT_CONST` terminal
pub const SYM_INT_CONST: Symbol = Symbol { index: 38 };
/// Known symbol for the `FLOAT_CONST` terminal
pub const SYM_FLOAT_CONST: Symbol = Symbol { index: 39 };
/// Known symbol for the `CHAR_CONST` terminal
pub const SYM_CHAR_CONST: Symbol = Symbol { index: 40 };
/// Known symbol for the `STRING_CONST` terminal
pub const SYM_STRING_CONST: Symbol = Symbol { index: 41 };

// ----------------------------------------------------------------------------
// Operator symbols used by the built-in grammar
// ----------------------------------------------------------------------------

/// Known symbol for `+`
pub const OP_PLUS: Symbol = Symbol { index: 42 };
/// Known symbol for `-`
pub const OP_MINUS: Symbol = Symbol { index: 43 };
/// Known symbol for `*`
pub const OP_STAR: Symbol = Symbol { index: 44 };
/// Known symbol for `/`
pub const OP_SLASH: Symbol = Symbol { index: 45 };
/// Known symbol for `%`
pub const OP_PERCENT: Symbol = Symbol { index: 46 };
/// Known symbol for `!`
pub const OP_BANG: Symbol = Symbol { index: 47 };
/// Known symbol for `=`
pub const OP_ASSIGN: Symbol = Symbol { index: 48 };
/// Known symbol for `==`
pub const OP_EQ: Symbol = Symbol { index: 49 };
/// Known symbol for `!=`
pub const OP_NE: Symbol = Symbol { index: 50 };
/// Known symbol for `<`
pub const OP_LT: Symbol = Symbol { index: 51 };
/// Known symbol for `<=`
pub const OP_LE: Symbol = Symbol { index: 52 };
/// Known symbol for `>`
pub const OP_GT: Symbol = Symbol { index: 53 };
/// Known symbol for `>=`
pub const OP_GE: Symbol = Symbol { index: 54 };
/// Known symbol for `&&`
pub const OP_ANDAND: Symbol = Symbol { index: 55 };
/// Known symbol for `||`
pub const OP_OROR: Symbol = Symbol { index: 56 };
/// Known symbol for `++`
pub const OP_INCR: Symbol = Symbol { index: 57 };
/// Known symbol for `--`
pub const OP_DECR: Symbol = Symbol { index: 58 };
/// Known symbol for `.`
pub const OP_DOT: Symbol = Symbol { index: 59 };

// ----------------------------------------------------------------------------
// Delimiter symbols used by the built-in grammar
// ----------------------------------------------------------------------------

/// Known symbol for `(`
pub const DL_LPAREN: Symbol = Symbol { index: 60 };
/// Known symbol for `)`
pub const DL_RPAREN: Symbol = Symbol { index: 61 };
/// Known symbol for `{`
pub const DL_LBRACE: Symbol = Symbol { index: 62 };
/// Known symbol for `}`
pub const DL_RBRACE: Symbol = Symbol { index: 63 };
/// Known symbol for `[`
pub const DL_LBRACKET: Symbol = Symbol { index: 64 };
/// Known symbol for `]`
pub const DL_RBRACKET: Symbol = Symbol { index: 65 };
/// Known symbol for `;`
pub const DL_SEMI: Symbol = Symbol { index: 66 };
/// Known symbol for `,`
pub const DL_COMMA: Symbol = Symbol { index: 67 };
/// Known symbol for `#`
pub const DL_HASH: Symbol = Symbol { index: 68 };

// ----------------------------------------------------------------------------
// Common identifiers and grammar start symbol
// ----------------------------------------------------------------------------

/// Known symbol for `main`
pub const ID_MAIN: Symbol = Symbol { index: 69 };
/// Known symbol for the grammar start nonterminal `P`
pub const NT_START: Symbol = Symbol { index: 70 };

impl Symbol {
    /// The maximum index value for a symbol
    pub const MAX_INDEX: u32 = u32::MAX;

    /// Intern a string, returning its symbol
    ///
    /// This function will:
    /// 1. Hash the string to check for existing entry
    /// 2. If found, return existing symbol (cache hit)
    /// 3. If not found, allocate new slot and return new symbol (cache miss)
    ///
    /// # Thread Safety
    ///
    /// This function is thread-safe. Multiple threads can intern strings
    /// concurrently using DashMap for lock-free access.
    ///
    /// # Performance
    ///
    /// - **Best case** (string already interned): O(1) hash lookup
    /// - **Worst case** (new unique string): O(1) hash insert + allocation
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::Symbol;
    ///
    /// let keyword = Symbol::intern("fn");
    /// let name = Symbol::intern("main");
    ///
    /// // Interning the same string returns the same symbol
    /// assert_eq!(Symbol::intern("fn"), keyword);
    /// ```
    #[inline]
    pub fn intern(string: &str) -> Self {
        STRING_TABLE.intern(string)
    }

    /// Get the string value associated with this symbol
    ///
    /// # Performance
    ///
    /// O(n) where n is the number of interned strings, as we need to
    /// search the DashMap by index. This is a trade-off for better
    /// concurrent write performance.
    ///
    /// For hot paths, consider caching the string reference or using
    /// [`Symbol::eq_str()`] for comparisons.
    ///
    /// # Panics
    ///
    /// Returns empty string if the symbol is invalid (e.g., created manually
    /// with an out-of-bounds index).
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello");
    /// assert_eq!(sym.as_str(), "hello");
    /// ```
    #[inline]
    pub fn as_str(&self) -> &'static str {
        STRING_TABLE.get(*self).unwrap_or("")
    }

    /// Check if the symbol's string is empty
    ///
    /// # Performance
    ///
    /// O(1) - checks if index corresponds to the empty string symbol.
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::Symbol;
    ///
    /// assert!(Symbol::intern("").is_empty());
    /// assert!(!Symbol::intern("hello").is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    /// Get the length of the symbol's string in bytes
    ///
    /// # Performance
    ///
    /// O(n) where n is the number of interned strings (requires lookup).
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::Symbol;
    ///
    /// assert_eq!(Symbol::intern("hello").len(), 5);
    /// assert_eq!(Symbol::intern("").len(), 0);
    /// assert_eq!(Symbol::intern("你好").len(), 6);  // UTF-8 bytes
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    /// Check if the symbol's string starts with a given prefix
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to check for
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello_world");
    /// assert!(sym.starts_with("hello"));
    /// assert!(!sym.starts_with("world"));
    /// ```
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.as_str().starts_with(prefix)
    }

    /// Check if the symbol's string ends with a given suffix
    ///
    /// # Arguments
    ///
    /// * `suffix` - The suffix to check for
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello_world");
    /// assert!(sym.ends_with("world"));
    /// assert!(!sym.ends_with("hello"));
    /// ```
    #[inline]
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.as_str().ends_with(suffix)
    }

    /// Compare the symbol's string with a `&str` without allocation
    ///
    /// This is more efficient than `symbol.as_str() == other` when you
    /// only need equality comparison, as it can short-circuit early.
    ///
    /// # Arguments
    ///
    /// * `other` - The string to compare against
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello");
    /// assert!(sym.eq_str("hello"));
    /// assert!(!sym.eq_str("world"));
    /// ```
    #[inline]
    pub fn eq_str(&self, other: &str) -> bool {
        self.as_str() == other
    }

    /// Returns true if this is a "known" symbol (predefined keywords)
    ///
    /// Known symbols are interned at compiler startup and have indices
    /// in a reserved range (0 to `RESERVED_SYMBOLS_END`).
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::{Symbol, KW_IF};
    ///
    /// assert!(KW_IF.is_known());
    /// assert!(!Symbol::intern("my_variable").is_known());
    /// ```
    #[inline]
    pub fn is_known(&self) -> bool {
        self.index < RESERVED_SYMBOLS_END
    }

    /// Get the raw index value
    ///
    /// Useful for serialization or debugging.
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("test");
    /// let index = sym.as_u32();
    /// ```
    #[inline]
    pub fn as_u32(&self) -> u32 {
        self.index
    }

    /// Create a symbol from a raw index
    ///
    /// # Safety
    ///
    /// The index must correspond to a valid entry in the string table.
    /// Creating a symbol with an invalid index leads to undefined behavior
    /// when calling `as_str()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("test");
    /// let index = sym.as_u32();
    /// let sym2 = unsafe { Symbol::from_u32_unchecked(index) };
    /// assert_eq!(sym, sym2);
    /// ```
    #[inline]
    pub unsafe fn from_u32_unchecked(index: u32) -> Self {
        Self { index }
    }

    /// Get statistics about the string interner for profiling
    ///
    /// Returns an `InternerStats` struct with detailed information about
    /// the interner's state, including count, capacity, collisions, hits,
    /// and misses.
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::Symbol;
    ///
    /// let stats = Symbol::stats_struct();
    /// println!("Interned {} strings", stats.count);
    /// println!("Hit rate: {:.2}%", stats.hit_rate() * 100.0);
    /// ```
    #[inline]
    pub fn stats_struct() -> InternerStats {
        STRING_TABLE.stats()
    }

    /// Get basic statistics about the string interner (legacy API)
    ///
    /// Returns a tuple of (number of interned strings, hash map capacity).
    /// For more detailed statistics, use [`Symbol::stats_struct`].
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::Symbol;
    ///
    /// let (count, capacity) = Symbol::stats();
    /// println!("Interned {} strings with capacity {}", count, capacity);
    /// ```
    #[inline]
    pub fn stats() -> (usize, usize) {
        let stats = STRING_TABLE.stats();
        (stats.count, stats.capacity)
    }

    /// Intern a known keyword, returning its predefined symbol
    ///
    /// This is a convenience method for interning common keywords.
    /// For known keywords, this returns the predefined constant symbol
    /// without hashing or allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::{Symbol, KW_IF};
    ///
    /// let if_sym = Symbol::intern_known("if");
    /// assert_eq!(if_sym, KW_IF);
    ///
    /// // Unknown keywords are interned normally
    /// let unknown = Symbol::intern_known("not_a_keyword");
    /// assert!(!unknown.is_known());
    /// ```
    #[inline]
    pub fn intern_known(string: &str) -> Self {
        match string {
            "auto" => KW_AUTO,
            "break" => KW_BREAK,
            "case" => KW_CASE,
            "char" => KW_CHAR,
            "const" => KW_CONST,
            "continue" => KW_CONTINUE,
            "default" => KW_DEFAULT,
            "do" => KW_DO,
            "double" => KW_DOUBLE,
            "else" => KW_ELSE,
            "enum" => KW_ENUM,
            "extern" => KW_EXTERN,
            "float" => KW_FLOAT,
            "for" => KW_FOR,
            "goto" => KW_GOTO,
            "if" => KW_IF,
            "int" => KW_INT,
            "long" => KW_LONG,
            "register" => KW_REGISTER,
            "return" => KW_RETURN,
            "short" => KW_SHORT,
            "signed" => KW_SIGNED,
            "sizeof" => KW_SIZEOF,
            "static" => KW_STATIC,
            "struct" => KW_STRUCT,
            "switch" => KW_SWITCH,
            "typedef" => KW_TYPEDEF,
            "union" => KW_UNION,
            "unsigned" => KW_UNSIGNED,
            "void" => KW_VOID,
            "volatile" => KW_VOLATILE,
            "while" => KW_WHILE,
            "printf" => KW_PRINTF,
            "include" => KW_INCLUDE,
            // Terminal-class names
            "EOF" => SYM_EOF,
            "ε" | "epsilon" => SYM_EPSILON,
            "ID" => SYM_ID,
            "TYPE_NAME" => SYM_TYPE_NAME,
            "INT_CONST" => SYM_INT_CONST,
            "FLOAT_CONST" => SYM_FLOAT_CONST,
            "CHAR_CONST" => SYM_CHAR_CONST,
            "STRING_CONST" => SYM_STRING_CONST,
            // Operators used by the built-in grammar
            "+" => OP_PLUS,
            "-" => OP_MINUS,
            "*" => OP_STAR,
            "/" => OP_SLASH,
            "%" => OP_PERCENT,
            "!" => OP_BANG,
            "=" => OP_ASSIGN,
            "==" => OP_EQ,
            "!=" => OP_NE,
            "<" => OP_LT,
            "<=" => OP_LE,
            ">" => OP_GT,
            ">=" => OP_GE,
            "&&" => OP_ANDAND,
            "||" => OP_OROR,
            "++" => OP_INCR,
            "--" => OP_DECR,
            "." => OP_DOT,
            // Delimiters used by the built-in grammar
            "(" => DL_LPAREN,
            ")" => DL_RPAREN,
            "{" => DL_LBRACE,
            "}" => DL_RBRACE,
            "[" => DL_LBRACKET,
            "]" => DL_RBRACKET,
            ";" => DL_SEMI,
            "," => DL_COMMA,
            "#" => DL_HASH,
            // Common identifiers / grammar start symbol
            "main" => ID_MAIN,
            "P" => NT_START,
            _ => Self::intern(string),
        }
    }

    /// Get the symbol for a basic C type keyword
    ///
    /// Returns the predefined symbol for `int`/`char`/`float`/`double`/`void`,
    /// or interns the string for anything else (e.g. a `TYPE_NAME`).
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::{Symbol, KW_INT, KW_VOID};
    ///
    /// assert_eq!(Symbol::intern_type("int"), KW_INT);
    /// assert_eq!(Symbol::intern_type("void"), KW_VOID);
    /// ```
    #[inline]
    pub fn intern_type(string: &str) -> Self {
        match string {
            "int" => KW_INT,
            "char" => KW_CHAR,
            "float" => KW_FLOAT,
            "double" => KW_DOUBLE,
            "void" => KW_VOID,
            _ => Self::intern(string),
        }
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

impl std::fmt::Debug for Symbol {
    /// Format the symbol for debugging, showing the actual string content
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello");
    /// assert_eq!(format!("{:?}", sym), "Symbol(hello)");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.as_str())
    }
}

impl std::fmt::Display for Symbol {
    /// Format the symbol for display, showing just the string content
    ///
    /// # Examples
    ///
    /// ```
    /// use faxc_util::symbol::Symbol;
    ///
    /// let sym = Symbol::intern("hello");
    /// assert_eq!(format!("{}", sym), "hello");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pretty-print a symbol with quotes for debugging
///
/// This trait provides optional pretty-printing with quotes to distinguish
/// symbols from regular strings in debug output.
///
/// # Examples
///
/// ```
/// use faxc_util::symbol::{Symbol, SymbolPretty};
///
/// let sym = Symbol::intern("hello");
/// assert_eq!(format!("{}", sym.pretty()), "\"hello\"");
/// ```
pub trait SymbolPretty {
    /// Get a pretty-printed version with quotes
    fn pretty(&self) -> SymbolPrettyDisplay<'_>;
}

impl SymbolPretty for Symbol {
    fn pretty(&self) -> SymbolPrettyDisplay<'_> {
        SymbolPrettyDisplay(self)
    }
}

/// Display wrapper for pretty-printing symbols with quotes
pub struct SymbolPrettyDisplay<'a>(&'a Symbol);

impl std::fmt::Display for SymbolPrettyDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\"", self.0.as_str())
    }
}

impl std::fmt::Debug for SymbolPrettyDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SymbolPretty(\"{}\")", self.0.as_str())
    }
}

// Ensure Symbol is thread-safe
static_assertions::assert_impl_all!(Symbol: Send, Sync);
