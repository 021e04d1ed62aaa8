//! Edge-case and error-case tests for the predictive parser, exercising
//! whole translation units end to end (lex -> parse -> fold) rather than
//! single productions.

#[cfg(test)]
mod tests {
    use crate::ast::AstNode;
    use crate::items::build_program;
    use crate::parser::{ParseError, PredictiveParser};
    use faxc_grammar::build_c_subset_grammar;
    use faxc_lex::Lexer;
    use faxc_util::Handler;

    fn lex_all(source: &str) -> (Vec<(faxc_lex::Token, faxc_util::Span)>, Handler) {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new(source, &mut handler);
        let mut tokens = Vec::new();
        loop {
            let tok = lexer.next_token();
            let span = lexer.token_span();
            let is_eof = tok.is_eof();
            tokens.push((tok, span));
            if is_eof {
                break;
            }
        }
        (tokens, handler)
    }

    fn parse_ok(source: &str) -> AstNode {
        let (tokens, mut handler) = lex_all(source);
        assert!(!handler.has_errors(), "lexing {:?} produced errors", source);
        let grammar = build_c_subset_grammar();
        let mut parser = PredictiveParser::new(&grammar, tokens, &mut handler);
        let outcome = parser.parse().unwrap_or_else(|e| panic!("expected {:?} to parse, got {}", source, e));
        build_program(&outcome.tree)
    }

    fn parse_err(source: &str) -> ParseError {
        let (tokens, mut handler) = lex_all(source);
        let grammar = build_c_subset_grammar();
        let mut parser = PredictiveParser::new(&grammar, tokens, &mut handler);
        parser.parse().expect_err("expected a parse error")
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn empty_translation_unit() {
        let AstNode::Program(items) = parse_ok("") else { panic!("expected Program") };
        assert!(items.is_empty());
    }

    #[test]
    fn single_global_declaration() {
        let AstNode::Program(items) = parse_ok("int a;") else { panic!("expected Program") };
        assert_eq!(items.len(), 1);
        assert!(matches!(&items[0], AstNode::GlobalDecl { .. }));
    }

    #[test]
    fn empty_function_body() {
        let AstNode::Program(items) = parse_ok("void f() { }") else { panic!("expected Program") };
        let AstNode::FuncDef { body, .. } = &items[0] else { panic!("expected FuncDef") };
        let AstNode::Block(stmts) = body.as_ref() else { panic!("expected Block") };
        assert!(stmts.is_empty());
    }

    #[test]
    fn function_with_no_params() {
        let AstNode::Program(items) = parse_ok("int main() { return 0; }") else { panic!() };
        let AstNode::FuncDef { params, .. } = &items[0] else { panic!("expected FuncDef") };
        assert!(params.is_empty());
    }

    #[test]
    fn function_with_single_param() {
        let AstNode::Program(items) = parse_ok("int one(int x) { return x; }") else { panic!() };
        let AstNode::FuncDef { params, .. } = &items[0] else { panic!("expected FuncDef") };
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn deeply_nested_blocks() {
        let AstNode::Program(items) = parse_ok("void f() { {{{{ int x; }}}} }") else { panic!() };
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn multiple_declarations_in_one_statement() {
        let AstNode::Program(items) = parse_ok("void f() { int a, b, c; }") else { panic!() };
        let AstNode::FuncDef { body, .. } = &items[0] else { panic!() };
        let AstNode::Block(stmts) = body.as_ref() else { panic!() };
        let AstNode::DeclStmt(decl) = &stmts[0] else { panic!("expected DeclStmt") };
        let AstNode::VarDecl { decls, .. } = decl.as_ref() else { panic!() };
        assert_eq!(decls.len(), 3);
    }

    #[test]
    fn if_without_else() {
        let AstNode::Program(items) = parse_ok("void f() { if (1) { } }") else { panic!() };
        let AstNode::FuncDef { body, .. } = &items[0] else { panic!() };
        let AstNode::Block(stmts) = body.as_ref() else { panic!() };
        let AstNode::If { else_branch, .. } = &stmts[0] else { panic!("expected If") };
        assert!(else_branch.is_none());
    }

    #[test]
    fn if_with_else() {
        let AstNode::Program(items) = parse_ok("void f() { if (1) { } else { } }") else { panic!() };
        let AstNode::FuncDef { body, .. } = &items[0] else { panic!() };
        let AstNode::Block(stmts) = body.as_ref() else { panic!() };
        let AstNode::If { else_branch, .. } = &stmts[0] else { panic!("expected If") };
        assert!(else_branch.is_some());
    }

    #[test]
    fn dangling_else_binds_to_nearest_if() {
        // `if (a) if (b) c; else d;` -- the else must attach to the inner
        // `if (b)`, not the outer `if (a)` (spec.md §4.6/§8 S4).
        let AstNode::Program(items) =
            parse_ok("void f() { if (a) if (b) c(); else d(); }")
        else {
            panic!()
        };
        let AstNode::FuncDef { body, .. } = &items[0] else { panic!() };
        let AstNode::Block(stmts) = body.as_ref() else { panic!() };
        let AstNode::If { then_branch, else_branch: outer_else, .. } = &stmts[0] else {
            panic!("expected outer If")
        };
        assert!(outer_else.is_none(), "else must not attach to the outer if");
        let AstNode::If { else_branch: inner_else, .. } = then_branch.as_ref() else {
            panic!("expected inner If as the outer if's Then")
        };
        assert!(inner_else.is_some(), "else must attach to the inner if");
    }

    #[test]
    fn while_loop() {
        let AstNode::Program(items) = parse_ok("void f() { while (1) { } }") else { panic!() };
        let AstNode::FuncDef { body, .. } = &items[0] else { panic!() };
        let AstNode::Block(stmts) = body.as_ref() else { panic!() };
        assert!(matches!(stmts[0], AstNode::While { .. }));
    }

    #[test]
    fn for_loop_with_all_three_clauses() {
        let AstNode::Program(items) = parse_ok("void f() { for (int i = 0; i; i) { } }") else { panic!() };
        let AstNode::FuncDef { body, .. } = &items[0] else { panic!() };
        let AstNode::Block(stmts) = body.as_ref() else { panic!() };
        let AstNode::For { init, cond, post, .. } = &stmts[0] else { panic!("expected For") };
        assert!(init.is_some());
        assert!(cond.is_some());
        assert!(post.is_some());
    }

    #[test]
    fn for_loop_with_empty_clauses() {
        let AstNode::Program(items) = parse_ok("void f() { for (;;) { } }") else { panic!() };
        let AstNode::FuncDef { body, .. } = &items[0] else { panic!() };
        let AstNode::Block(stmts) = body.as_ref() else { panic!() };
        let AstNode::For { init, cond, post, .. } = &stmts[0] else { panic!("expected For") };
        assert!(init.is_none());
        assert!(cond.is_none());
        assert!(post.is_none());
    }

    #[test]
    fn break_and_continue() {
        let AstNode::Program(items) =
            parse_ok("void f() { while (1) { break; continue; } }")
        else {
            panic!()
        };
        let AstNode::FuncDef { body, .. } = &items[0] else { panic!() };
        let AstNode::Block(stmts) = body.as_ref() else { panic!() };
        let AstNode::While { body, .. } = &stmts[0] else { panic!("expected While") };
        let AstNode::Block(inner) = body.as_ref() else { panic!() };
        assert!(matches!(inner[0], AstNode::Break));
        assert!(matches!(inner[1], AstNode::Continue));
    }

    #[test]
    fn return_with_and_without_value() {
        let AstNode::Program(items) =
            parse_ok("int f() { return 1; } void g() { return; }")
        else {
            panic!()
        };
        let AstNode::FuncDef { body, .. } = &items[0] else { panic!() };
        let AstNode::Block(stmts) = body.as_ref() else { panic!() };
        assert!(matches!(&stmts[0], AstNode::Return(Some(_))));
        let AstNode::FuncDef { body, .. } = &items[1] else { panic!() };
        let AstNode::Block(stmts) = body.as_ref() else { panic!() };
        assert!(matches!(&stmts[0], AstNode::Return(None)));
    }

    #[test]
    fn struct_definition_with_no_declarator() {
        let AstNode::Program(items) = parse_ok("struct Point { int x; int y; };") else { panic!() };
        assert_eq!(items.len(), 1);
        let AstNode::TypeOnly(ty) = &items[0] else { panic!("expected TypeOnly") };
        assert!(matches!(ty.as_ref(), AstNode::StructType { .. }));
    }

    #[test]
    fn empty_struct_body() {
        let AstNode::Program(items) = parse_ok("struct Empty { };") else { panic!() };
        let AstNode::TypeOnly(ty) = &items[0] else { panic!("expected TypeOnly") };
        let AstNode::StructType { fields, .. } = ty.as_ref() else { panic!() };
        assert!(fields.is_empty());
    }

    #[test]
    fn union_definition() {
        let AstNode::Program(items) = parse_ok("union U { int i; float f; };") else { panic!() };
        let AstNode::TypeOnly(ty) = &items[0] else { panic!("expected TypeOnly") };
        assert!(matches!(ty.as_ref(), AstNode::UnionType { .. }));
    }

    #[test]
    fn function_call_with_args() {
        let AstNode::Program(items) = parse_ok("void f() { foo(); bar(1, 2); }") else { panic!() };
        let AstNode::FuncDef { body, .. } = &items[0] else { panic!() };
        let AstNode::Block(stmts) = body.as_ref() else { panic!() };
        assert_eq!(stmts.len(), 2);
    }

    #[test]
    fn nested_function_calls() {
        let AstNode::Program(items) = parse_ok("void f() { foo(bar(baz(1))); }") else { panic!() };
        let AstNode::FuncDef { body, .. } = &items[0] else { panic!() };
        let AstNode::Block(stmts) = body.as_ref() else { panic!() };
        let AstNode::ExprStmt(call) = &stmts[0] else { panic!("expected ExprStmt") };
        assert!(matches!(call.as_ref(), AstNode::Call { .. }));
    }

    #[test]
    fn all_constant_kinds() {
        let AstNode::Program(items) = parse_ok(
            "void f() { int a = 42; float b = 3.14; char c = 'x'; char* s = \"hi\"; }",
        ) else {
            panic!()
        };
        let AstNode::FuncDef { body, .. } = &items[0] else { panic!() };
        let AstNode::Block(stmts) = body.as_ref() else { panic!() };
        assert_eq!(stmts.len(), 4);
    }

    #[test]
    fn array_declarator() {
        let AstNode::Program(items) = parse_ok("int a[10];") else { panic!() };
        let AstNode::GlobalDecl { decls, .. } = &items[0] else { panic!("expected GlobalDecl") };
        let AstNode::Var { array_dims, .. } = &decls[0] else { panic!() };
        assert_eq!(array_dims.len(), 1);
    }

    #[test]
    fn pointer_declarator() {
        let AstNode::Program(items) = parse_ok("int* p;") else { panic!() };
        let AstNode::GlobalDecl { decls, .. } = &items[0] else { panic!("expected GlobalDecl") };
        let AstNode::Var { ptr, .. } = &decls[0] else { panic!() };
        assert!(matches!(ptr.as_deref(), Some(AstNode::Ptr(1))));
    }

    #[test]
    fn initializer_list() {
        let AstNode::Program(items) = parse_ok("int a[3] = { 1, 2, 3 };") else { panic!() };
        let AstNode::GlobalDecl { decls, .. } = &items[0] else { panic!("expected GlobalDecl") };
        let AstNode::Var { init, .. } = &decls[0] else { panic!() };
        let AstNode::InitList(items) = init.as_deref().unwrap() else { panic!("expected InitList") };
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn struct_tag_promoted_to_type_name() {
        let (tokens, mut handler) = lex_all("struct S { int x; }; S v;");
        let grammar = build_c_subset_grammar();
        let mut parser = PredictiveParser::new(&grammar, tokens, &mut handler);
        let outcome = parser.parse().expect("expected struct-then-use to parse");
        assert!(outcome.type_names.iter().any(|s| s.as_str() == "S"));
        let AstNode::Program(items) = build_program(&outcome.tree) else { panic!() };
        let AstNode::GlobalDecl { ty, .. } = &items[1] else { panic!("expected GlobalDecl") };
        assert!(matches!(ty.as_ref(), AstNode::Type(_)));
    }

    #[test]
    fn comments_are_skipped() {
        let AstNode::Program(items) =
            parse_ok("void f() { // line comment\n int x; /* block */ }")
        else {
            panic!()
        };
        assert_eq!(items.len(), 1);
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn missing_semicolon_is_rejected() {
        parse_err("void f() { int x int y }");
    }

    #[test]
    fn missing_closing_brace_is_rejected() {
        parse_err("void f() { int x;");
    }

    #[test]
    fn invalid_token_is_rejected() {
        parse_err("void f() { @ }");
    }

    #[test]
    fn incomplete_if_is_rejected() {
        parse_err("void f() { if (1) }");
    }

    #[test]
    fn incomplete_while_is_rejected() {
        parse_err("void f() { while (1) }");
    }

    #[test]
    fn incomplete_struct_is_rejected() {
        parse_err("struct Point { int x");
    }

    #[test]
    fn invalid_function_signature_is_rejected() {
        parse_err("int main( { }");
    }

    #[test]
    fn missing_function_body_is_rejected() {
        parse_err("int main()");
    }

    #[test]
    fn bad_suffix_numeric_is_rejected() {
        let err = parse_err("int x = 1x;");
        assert!(matches!(err, ParseError::Lexical { .. } | ParseError::TerminalMismatch { .. }));
    }
}
