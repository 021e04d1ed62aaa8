//! Token model for the C-subset lexer.
//!
//! A [`Token`] carries its kind and lexeme only; line/column live on the
//! [`crate::lexer::Lexer`] that produced it (spec §3: `Token(kind, lexeme, line, col)`
//! is realized here as `(Token, Span)` pairs rather than stuffing position into
//! every variant).

use faxc_util::Symbol;

/// Numeric base a decimal/octal/hex integer literal was lexed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    Decimal,
    Octal,
    Hex,
}

/// A single lexical token.
///
/// `Reserved`/`Op`/`Delim` all carry the interned lexeme itself, since the
/// grammar's terminal names are the literal keyword/operator/delimiter text
/// (spec §6's naming convention) rather than a separate tag per symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A C-subset reserved word (`int`, `if`, `struct`, `printf`, ...).
    Reserved(Symbol),
    /// A plain identifier. Reclassified to `TYPE_NAME` by the parser, never
    /// by the lexer itself (spec §3's dynamic type-name set is parser state).
    Ident(Symbol),
    /// An integer literal together with the radix it was written in.
    IntConst { lexeme: Symbol, radix: Radix },
    /// A floating-point literal.
    FloatConst(Symbol),
    /// A character constant, including the quotes.
    CharConst(Symbol),
    /// A string constant, including the quotes.
    StringConst(Symbol),
    /// A multi- or single-character operator (`+`, `==`, `&&`, ...).
    Op(Symbol),
    /// A delimiter (`(`, `;`, `#`, ...).
    Delim(Symbol),
    /// A malformed lexeme (bad suffix, unterminated literal, unknown char).
    /// Carries the full consumed span of characters as its lexeme.
    Invalid(Symbol),
    /// End of input.
    Eof,
}

impl Token {
    /// The raw source text this token was lexed from, where applicable.
    /// Returns `None` for `Eof`.
    pub fn lexeme(&self) -> Option<Symbol> {
        match *self {
            Token::Reserved(s)
            | Token::Ident(s)
            | Token::IntConst { lexeme: s, .. }
            | Token::FloatConst(s)
            | Token::CharConst(s)
            | Token::StringConst(s)
            | Token::Op(s)
            | Token::Delim(s)
            | Token::Invalid(s) => Some(s),
            Token::Eof => None,
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Token::Invalid(_))
    }
}

/// The 35 C89/C90 reserved words this front end's lexer recognizes
/// (token.py's `KEYWORDS`, including `printf` and `include` as the original
/// does — both are ordinary reserved words to the lexer; `printf`'s special
/// grammar status is a parser/grammar concern, not a lexer one).
pub const KEYWORDS: &[&str] = &[
    "auto", "double", "int", "struct", "break", "else", "long", "switch", "case", "enum",
    "register", "typedef", "char", "extern", "return", "union", "const", "float", "short",
    "unsigned", "continue", "for", "signed", "void", "default", "goto", "sizeof", "volatile",
    "do", "if", "static", "while", "printf", "include",
];

pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}

/// Returns a `Token::Reserved` if `text` is a keyword, else a plain `Ident`.
pub fn classify_ident(text: &str) -> Token {
    if is_keyword(text) {
        Token::Reserved(Symbol::intern_known(text))
    } else {
        Token::Ident(Symbol::intern(text))
    }
}
