//! Core lexer implementation.
//!
//! `next_token` implements longest-match-wins tokenization: at every
//! position it collects every candidate lexeme (numeric literals, operators,
//! delimiters, identifiers/keywords, string/char literals) that could start
//! there, picks the longest, and breaks length ties by priority (numeric >
//! operator/delimiter > identifier). This is deliberately not a
//! per-character dispatch switch: C's grammar needs `0`, `0x1`, and `012` to
//! all be recognized at the same position before a winner is chosen.

use faxc_util::{DiagnosticBuilder, Handler, Span};

use crate::cursor::Cursor;
use crate::matchers::{self, DELIMITERS, OPERATORS};
use crate::token::{Radix, Token};

/// Lexer for the C-subset front end.
pub struct Lexer<'a> {
    pub cursor: Cursor<'a>,
    pub handler: &'a mut Handler,
    pub token_start: usize,
    token_start_line: u32,
    token_start_column: u32,
    pub bom_checked: bool,
}

/// Priority used to break length ties between candidates: higher wins.
/// Numeric literals outrank operators/delimiters, which outrank
/// identifiers/keywords (mirrors the original lexer's tie-break order;
/// in practice these families never share a common prefix so ties don't
/// arise in this grammar, but the ordering is kept explicit).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Priority {
    Ident = 1,
    OpOrDelim = 2,
    Numeric = 3,
}

enum Candidate {
    Float(usize),
    Hex(usize),
    Oct(usize),
    Dec(usize),
    Op(usize),
    Delim(usize),
    Ident(usize),
}

impl Candidate {
    fn len(&self) -> usize {
        match *self {
            Candidate::Float(n)
            | Candidate::Hex(n)
            | Candidate::Oct(n)
            | Candidate::Dec(n)
            | Candidate::Op(n)
            | Candidate::Delim(n)
            | Candidate::Ident(n) => n,
        }
    }

    fn priority(&self) -> Priority {
        match self {
            Candidate::Float(_) | Candidate::Hex(_) | Candidate::Oct(_) | Candidate::Dec(_) => {
                Priority::Numeric
            }
            Candidate::Op(_) | Candidate::Delim(_) => Priority::OpOrDelim,
            Candidate::Ident(_) => Priority::Ident,
        }
    }
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            bom_checked: false,
        }
    }

    /// Returns the next token, or `Token::Eof` at end of input.
    pub fn next_token(&mut self) -> Token {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.skip_whitespace_and_comments() {
            // An unterminated block comment consumed the rest of the
            // input; surface it as a lexical error rather than quietly
            // falling through to EOF (spec.md §4.2 step 1).
            let lexeme = self.cursor.slice_from(self.token_start);
            return Token::Invalid(faxc_util::Symbol::intern(lexeme));
        }

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Token::Eof;
        }

        let text = self.cursor.source();
        let pos = self.cursor.position();

        if matches!(self.cursor.current_char(), '"' | '\'') {
            return self.lex_string_or_char(text, pos);
        }

        if self.cursor.current_char() == '#' {
            self.cursor.advance_bytes(1);
            return Token::Delim(faxc_util::Symbol::intern("#"));
        }

        let mut best: Option<Candidate> = None;
        let mut consider = |c: Candidate, best: &mut Option<Candidate>| {
            if c.len() == 0 {
                return;
            }
            let replace = match best {
                None => true,
                Some(prev) => {
                    (c.len(), c.priority()) > (prev.len(), prev.priority())
                }
            };
            if replace {
                *best = Some(c);
            }
        };

        consider(Candidate::Float(matchers::match_float(text, pos)), &mut best);
        consider(Candidate::Hex(matchers::match_hex_int(text, pos)), &mut best);
        consider(Candidate::Oct(matchers::match_oct_int(text, pos)), &mut best);
        consider(Candidate::Dec(matchers::match_dec_int(text, pos)), &mut best);
        consider(
            Candidate::Op(matchers::match_longest(text, pos, OPERATORS)),
            &mut best,
        );
        consider(
            Candidate::Delim(matchers::match_longest(text, pos, DELIMITERS)),
            &mut best,
        );
        consider(
            Candidate::Ident(matchers::match_identifier(text, pos)),
            &mut best,
        );

        match best {
            None => {
                let bad = self.cursor.current_char();
                self.report_error(format!("unexpected character '{}'", bad));
                self.cursor.advance();
                Token::Invalid(faxc_util::Symbol::intern(&bad.to_string()))
            }
            Some(candidate) => self.finish_candidate(candidate, text, pos),
        }
    }

    fn finish_candidate(&mut self, candidate: Candidate, text: &str, pos: usize) -> Token {
        match candidate {
            Candidate::Dec(len) => self.finish_numeric(text, pos, len, Radix::Decimal),
            Candidate::Oct(len) => self.finish_octal(text, pos, len),
            Candidate::Hex(len) => self.finish_numeric(text, pos, len, Radix::Hex),
            Candidate::Float(len) => {
                let lexeme = &text[pos..pos + len];
                self.cursor.advance_bytes(len);
                if self.at_bad_suffix() {
                    self.consume_bad_suffix(lexeme.len())
                } else {
                    Token::FloatConst(faxc_util::Symbol::intern(lexeme))
                }
            }
            Candidate::Op(len) => {
                let lexeme = &text[pos..pos + len];
                let sym = faxc_util::Symbol::intern(lexeme);
                self.cursor.advance_bytes(len);
                Token::Op(sym)
            }
            Candidate::Delim(len) => {
                let lexeme = &text[pos..pos + len];
                let sym = faxc_util::Symbol::intern(lexeme);
                self.cursor.advance_bytes(len);
                Token::Delim(sym)
            }
            Candidate::Ident(len) => {
                let lexeme = &text[pos..pos + len];
                let token = crate::token::classify_ident(lexeme);
                self.cursor.advance_bytes(len);
                token
            }
        }
    }

    /// A `0` matched as a plain decimal digit is re-checked here: if `0x`/`0X`
    /// follows, hex wins; if `0`-`7` follows, octal wins; if `8`/`9` follows
    /// the whole run is a malformed numeric literal. This mirrors the
    /// original lexer's special-casing of a lone leading `0`.
    fn finish_octal(&mut self, text: &str, pos: usize, len: usize) -> Token {
        self.finish_numeric(text, pos, len, Radix::Octal)
    }

    fn finish_numeric(&mut self, text: &str, pos: usize, len: usize, radix: Radix) -> Token {
        let lexeme = &text[pos..pos + len];
        self.cursor.advance_bytes(len);

        if radix == Radix::Decimal && lexeme == "0" {
            let bytes = text.as_bytes();
            if matches!(bytes.get(pos + len), Some(b'8') | Some(b'9')) {
                return self.consume_bad_suffix(len);
            }
        }

        if self.at_bad_suffix() {
            return self.consume_bad_suffix(lexeme.len());
        }
        Token::IntConst {
            lexeme: faxc_util::Symbol::intern(lexeme),
            radix,
        }
    }

    /// True if the character immediately following the just-lexed numeric
    /// token is an identifier-continue character, meaning the numeral has
    /// an illegal trailing suffix (e.g. `123abc`, `0x5BT`).
    fn at_bad_suffix(&self) -> bool {
        matchers::is_id_continue(self.cursor.current_char())
    }

    /// Consumes the remaining identifier-continue run and reports the
    /// whole span (already-consumed prefix plus this run) as one invalid
    /// token, per the bad-suffix rule.
    fn consume_bad_suffix(&mut self, already_consumed: usize) -> Token {
        let start = self.cursor.position();
        while matchers::is_id_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let _ = already_consumed;
        let full = self.cursor.slice_from(self.token_start);
        self.report_error(format!("invalid numeric suffix in '{}'", full));
        let _ = start;
        Token::Invalid(faxc_util::Symbol::intern(full))
    }

    fn lex_string_or_char(&mut self, text: &str, pos: usize) -> Token {
        let (len, is_string, is_error) = matchers::match_string_or_char(text, pos);
        let lexeme = &text[pos..pos + len];
        self.cursor.advance_bytes(len);
        let sym = faxc_util::Symbol::intern(lexeme);
        if is_error {
            let kind = if is_string { "string" } else { "char" };
            self.report_error(format!("unterminated {} literal", kind));
            return Token::Invalid(sym);
        }
        if is_string {
            Token::StringConst(sym)
        } else {
            Token::CharConst(sym)
        }
    }

    pub fn report_error(&mut self, message: String) {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        DiagnosticBuilder::error(message).span(span).emit(self.handler);
    }

    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    pub fn token_start(&mut self) -> usize {
        self.token_start
    }

    /// The span covering the most recently returned token.
    pub fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token == Token::Eof {
            None
        } else {
            Some(token)
        }
    }
}
