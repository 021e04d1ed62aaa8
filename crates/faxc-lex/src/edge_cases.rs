//! Edge case tests for faxc-lex, concentrating on the longest-match and
//! bad-suffix rules that the per-character dispatch approach would get
//! wrong.

use crate::{Lexer, Token};
use faxc_util::{Handler, Symbol};

fn lex_all(source: &str) -> Vec<Token> {
    let mut handler = Handler::new();
    let mut lexer = Lexer::new(source, &mut handler);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        if token.is_eof() {
            break;
        }
        tokens.push(token);
    }
    tokens
}

#[test]
fn empty_source_has_no_tokens() {
    assert!(lex_all("").is_empty());
}

#[test]
fn single_char_identifier() {
    let t = lex_all("x");
    assert_eq!(t[0], Token::Ident(Symbol::intern("x")));
}

#[test]
fn long_identifier() {
    let name = "a".repeat(5000);
    let t = lex_all(&format!("int {};", name));
    assert!(t.contains(&Token::Ident(Symbol::intern(&name))));
}

#[test]
fn keywords_are_not_identifiers() {
    let t = lex_all("int if");
    assert_eq!(t[0], Token::Reserved(Symbol::intern_known("int")));
    assert_eq!(t[1], Token::Reserved(Symbol::intern_known("if")));
}

#[test]
fn case_sensitivity() {
    let t = lex_all("Int int");
    assert_eq!(t[0], Token::Ident(Symbol::intern("Int")));
    assert_eq!(t[1], Token::Reserved(Symbol::intern_known("int")));
}

#[test]
fn bad_suffix_on_decimal() {
    let t = lex_all("42xyz");
    assert_eq!(t, vec![Token::Invalid(Symbol::intern("42xyz"))]);
}

#[test]
fn bad_suffix_on_hex() {
    let t = lex_all("0x5BT");
    assert_eq!(t, vec![Token::Invalid(Symbol::intern("0x5BT"))]);
}

#[test]
fn bad_suffix_on_octal() {
    let t = lex_all("012t");
    assert_eq!(t, vec![Token::Invalid(Symbol::intern("012t"))]);
}

#[test]
fn leading_zero_followed_by_eight_is_invalid() {
    let t = lex_all("09");
    assert_eq!(t, vec![Token::Invalid(Symbol::intern("09"))]);
}

#[test]
fn bare_hex_prefix_has_no_digits() {
    let mut handler = Handler::new();
    let mut lexer = Lexer::new("0x", &mut handler);
    let tok = lexer.next_token();
    // "0x" alone: hex match needs >= 1 hex digit, so only "0" matches as
    // decimal, then 'x' is a fresh identifier-lexing position.
    assert_eq!(tok, Token::IntConst { lexeme: Symbol::intern("0"), radix: crate::Radix::Decimal });
    let next = lexer.next_token();
    assert_eq!(next, Token::Ident(Symbol::intern("x")));
}

#[test]
fn empty_string_literal() {
    let t = lex_all("\"\"");
    assert_eq!(t[0], Token::StringConst(Symbol::intern("\"\"")));
}

#[test]
fn all_operators_recognized() {
    let t = lex_all("+ - * / % == != < > <= >= && || ! = ++ -- .");
    assert!(t.contains(&Token::Op(Symbol::intern("+"))));
    assert!(t.contains(&Token::Op(Symbol::intern("=="))));
    assert!(t.contains(&Token::Op(Symbol::intern("++"))));
    assert!(t.contains(&Token::Op(Symbol::intern("."))));
}

#[test]
fn all_delimiters_recognized() {
    let t = lex_all("( ) { } [ ] , ; #");
    assert!(t.contains(&Token::Delim(Symbol::intern("("))));
    assert!(t.contains(&Token::Delim(Symbol::intern("#"))));
}

#[test]
fn nested_parens_count_correctly() {
    let t = lex_all("((()))");
    assert_eq!(
        t.iter().filter(|tok| **tok == Token::Delim(Symbol::intern("("))).count(),
        3
    );
}

#[test]
fn scientific_notation_floats() {
    let t = lex_all("1.0e10 1.5e-3");
    assert!(t.iter().all(|tok| matches!(tok, Token::FloatConst(_))));
}

#[test]
fn consecutive_plus_is_two_tokens() {
    // "+++" is "++" "+", not "+" "++", since both are candidates at
    // position 0 but "++" is longer.
    let t = lex_all("+++");
    assert_eq!(t, vec![Token::Op(Symbol::intern("++")), Token::Op(Symbol::intern("+"))]);
}

#[test]
fn whitespace_variations() {
    let t = lex_all("int\tx\n=\n1;");
    assert!(t.contains(&Token::Reserved(Symbol::intern_known("int"))));
    assert!(t.contains(&Token::IntConst { lexeme: Symbol::intern("1"), radix: crate::Radix::Decimal }));
}

#[test]
fn unterminated_string_reports_error_and_consumes_to_eol() {
    let mut handler = Handler::new();
    let mut lexer = Lexer::new("\"unterminated\nrest", &mut handler);
    let tok = lexer.next_token();
    assert!(tok.is_invalid());
    assert!(handler.has_errors());
}

#[test]
fn unterminated_char_reports_error() {
    let mut handler = Handler::new();
    let mut lexer = Lexer::new("'x", &mut handler);
    let tok = lexer.next_token();
    assert!(tok.is_invalid());
    assert!(handler.has_errors());
}

#[test]
fn unknown_character_is_reported_and_skipped() {
    let mut handler = Handler::new();
    let mut lexer = Lexer::new("@ int", &mut handler);
    let first = lexer.next_token();
    assert!(first.is_invalid());
    assert!(handler.has_errors());
    let second = lexer.next_token();
    assert_eq!(second, Token::Reserved(Symbol::intern_known("int")));
}

#[test]
fn include_directive_lexes_as_hash_then_keyword() {
    let t = lex_all("#include");
    assert_eq!(t[0], Token::Delim(Symbol::intern("#")));
    assert_eq!(t[1], Token::Reserved(Symbol::intern_known("include")));
}

#[test]
fn printf_is_a_reserved_word() {
    let t = lex_all("printf(x);");
    assert_eq!(t[0], Token::Reserved(Symbol::intern_known("printf")));
}
