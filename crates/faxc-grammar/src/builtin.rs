//! The built-in C-subset grammar.
//!
//! Transcribed production-by-production from `grammer.py`'s richer
//! variant (confirmed canonical by `ast_builder.py`'s `StructSpec`/
//! `UnionSpec` symmetry, `PtrOpt`, `TYPE_NAME`, and `Initializer`/
//! `InitList` handling) via repeated `Grammar::add` calls, in the fixed
//! insertion order the grammar's own first-writer-wins conflict policy
//! depends on. Do not reorder these calls — see `ParseTable::from_grammar`.

use faxc_util::Symbol;

use crate::grammar::Grammar;

/// Interns a nonterminal name. Nonterminals are plain identifiers, not
/// part of the reserved-symbol table (only the start symbol `"P"` is).
fn nt(name: &str) -> Symbol {
    Symbol::intern_known(name)
}

/// Interns a terminal literal (keyword, operator, delimiter, or one of
/// the special class names `ID`/`TYPE_NAME`/`INT_CONST`/...). All of
/// these are in the reserved-symbol table.
fn t(lexeme: &str) -> Symbol {
    Symbol::intern_known(lexeme)
}

pub fn build_c_subset_grammar() -> Grammar {
    let mut g = Grammar::new(nt("P"));

    // Program
    g.add(nt("P"), vec![nt("ExtList"), t("EOF")]);
    g.add(nt("ExtList"), vec![nt("ExtDef"), nt("ExtList")]);
    g.add(nt("ExtList"), vec![]);

    // External definitions
    g.add(nt("ExtDef"), vec![nt("Preprocess")]);
    g.add(nt("ExtDef"), vec![nt("TypeSpec"), nt("ExtAfterTypeSpec")]);
    g.add(
        nt("Preprocess"),
        vec![t("#"), t("include"), t("<"), nt("Header"), t(">")],
    );
    g.add(nt("Header"), vec![t("ID"), nt("HeaderRest")]);
    g.add(nt("HeaderRest"), vec![t("."), t("ID")]);
    g.add(nt("HeaderRest"), vec![]);

    // Types
    g.add(nt("TypeSpec"), vec![nt("BasicType")]);
    g.add(nt("TypeSpec"), vec![nt("StructSpec")]);
    g.add(nt("TypeSpec"), vec![nt("UnionSpec")]);
    g.add(nt("TypeSpec"), vec![t("TYPE_NAME")]);
    g.add(nt("BasicType"), vec![t("int")]);
    g.add(nt("BasicType"), vec![t("char")]);
    g.add(nt("BasicType"), vec![t("float")]);
    g.add(nt("BasicType"), vec![t("double")]);
    g.add(nt("BasicType"), vec![t("void")]);
    g.add(nt("StructSpec"), vec![t("struct"), t("ID"), nt("StructBodyOpt")]);
    g.add(nt("UnionSpec"), vec![t("union"), t("ID"), nt("StructBodyOpt")]);
    g.add(nt("StructBodyOpt"), vec![t("{"), nt("DeclListOpt"), t("}")]);
    g.add(nt("StructBodyOpt"), vec![]);
    g.add(nt("DeclListOpt"), vec![nt("DeclList")]);
    g.add(nt("DeclListOpt"), vec![]);
    g.add(nt("DeclList"), vec![nt("Decl"), nt("DeclList")]);
    g.add(nt("DeclList"), vec![]);

    // After-typespec left factoring
    g.add(nt("ExtAfterTypeSpec"), vec![nt("PtrOpt"), t("ID"), nt("ExtAfterId")]);
    g.add(nt("ExtAfterTypeSpec"), vec![t(";")]);
    g.add(
        nt("ExtAfterId"),
        vec![t("("), nt("ParamListOpt"), t(")"), nt("CompoundStmt")],
    );
    g.add(nt("ExtAfterId"), vec![nt("VarDeclRest"), t(";")]);
    g.add(
        nt("VarDeclRest"),
        vec![nt("ArraySuffixOpt"), nt("InitOpt"), nt("VarDeclMore")],
    );
    g.add(nt("VarDeclMore"), vec![t(","), nt("InitDecl"), nt("VarDeclMore")]);
    g.add(nt("VarDeclMore"), vec![]);

    // Pointers and declarators
    g.add(nt("PtrOpt"), vec![t("*"), nt("PtrOpt")]);
    g.add(nt("PtrOpt"), vec![]);
    g.add(nt("Decl"), vec![nt("TypeSpec"), nt("InitDeclList"), t(";")]);
    g.add(nt("InitDeclList"), vec![nt("InitDecl"), nt("InitDeclListTail")]);
    g.add(
        nt("InitDeclListTail"),
        vec![t(","), nt("InitDecl"), nt("InitDeclListTail")],
    );
    g.add(nt("InitDeclListTail"), vec![]);
    g.add(
        nt("InitDecl"),
        vec![nt("PtrOpt"), t("ID"), nt("ArraySuffixOpt"), nt("InitOpt")],
    );
    g.add(
        nt("ArraySuffixOpt"),
        vec![t("["), t("INT_CONST"), t("]"), nt("ArraySuffixOpt")],
    );
    g.add(nt("ArraySuffixOpt"), vec![]);
    g.add(nt("InitOpt"), vec![t("="), nt("Initializer")]);
    g.add(nt("InitOpt"), vec![]);

    // Initializers
    g.add(nt("Initializer"), vec![nt("Expr")]);
    g.add(nt("Initializer"), vec![t("{"), nt("InitListOpt"), t("}")]);
    g.add(nt("InitListOpt"), vec![nt("InitList")]);
    g.add(nt("InitListOpt"), vec![]);
    g.add(nt("InitList"), vec![nt("Initializer"), nt("InitListTail")]);
    g.add(
        nt("InitListTail"),
        vec![t(","), nt("Initializer"), nt("InitListTail")],
    );
    g.add(nt("InitListTail"), vec![]);

    // Functions
    g.add(nt("ParamListOpt"), vec![nt("ParamList")]);
    g.add(nt("ParamListOpt"), vec![]);
    g.add(nt("ParamList"), vec![nt("Param"), nt("ParamListTail")]);
    g.add(nt("ParamListTail"), vec![t(","), nt("Param"), nt("ParamListTail")]);
    g.add(nt("ParamListTail"), vec![]);
    g.add(
        nt("Param"),
        vec![nt("TypeSpec"), nt("PtrOpt"), t("ID"), nt("ArraySuffixOpt")],
    );

    // Statements
    g.add(nt("Stmt"), vec![nt("ExprStmt")]);
    g.add(nt("Stmt"), vec![nt("CompoundStmt")]);
    g.add(nt("Stmt"), vec![nt("IfStmt")]);
    g.add(nt("Stmt"), vec![nt("WhileStmt")]);
    g.add(nt("Stmt"), vec![nt("ForStmt")]);
    g.add(nt("Stmt"), vec![nt("ReturnStmt")]);
    g.add(nt("Stmt"), vec![nt("BreakStmt")]);
    g.add(nt("Stmt"), vec![nt("ContinueStmt")]);
    g.add(nt("Stmt"), vec![nt("Decl")]);
    g.add(nt("CompoundStmt"), vec![t("{"), nt("StmtListOpt"), t("}")]);
    g.add(nt("StmtListOpt"), vec![nt("StmtList")]);
    g.add(nt("StmtListOpt"), vec![]);
    g.add(nt("StmtList"), vec![nt("Stmt"), nt("StmtList")]);
    g.add(nt("StmtList"), vec![]);
    g.add(nt("ExprStmt"), vec![nt("Expr"), t(";")]);
    g.add(nt("ExprStmt"), vec![t(";")]);
    g.add(
        nt("IfStmt"),
        vec![t("if"), t("("), nt("Expr"), t(")"), nt("Stmt"), nt("ElseOpt")],
    );
    g.add(nt("ElseOpt"), vec![t("else"), nt("Stmt")]);
    g.add(nt("ElseOpt"), vec![]);
    g.add(
        nt("WhileStmt"),
        vec![t("while"), t("("), nt("Expr"), t(")"), nt("Stmt")],
    );
    g.add(
        nt("ForStmt"),
        vec![
            t("for"),
            t("("),
            nt("ForInitOpt"),
            t(";"),
            nt("ExprOpt"),
            t(";"),
            nt("ExprOpt"),
            t(")"),
            nt("Stmt"),
        ],
    );
    g.add(nt("ForInitOpt"), vec![nt("DeclForInit")]);
    g.add(nt("ForInitOpt"), vec![nt("Expr")]);
    g.add(nt("ForInitOpt"), vec![]);
    g.add(nt("DeclForInit"), vec![nt("TypeSpec"), nt("InitDeclList")]);
    g.add(nt("ExprOpt"), vec![nt("Expr")]);
    g.add(nt("ExprOpt"), vec![]);
    g.add(nt("ReturnStmt"), vec![t("return"), nt("ExprOpt"), t(";")]);
    g.add(nt("BreakStmt"), vec![t("break"), t(";")]);
    g.add(nt("ContinueStmt"), vec![t("continue"), t(";")]);

    // Expressions: assign (lowest) down to primary (highest), each level
    // a head + tail pair so the grammar stays free of left recursion.
    g.add(nt("Expr"), vec![nt("AssignExpr")]);
    g.add(nt("AssignExpr"), vec![nt("OrExpr"), nt("AssignTail")]);
    g.add(nt("AssignTail"), vec![t("="), nt("AssignExpr")]);
    g.add(nt("AssignTail"), vec![]);
    g.add(nt("OrExpr"), vec![nt("AndExpr"), nt("OrTail")]);
    g.add(nt("OrTail"), vec![t("||"), nt("AndExpr"), nt("OrTail")]);
    g.add(nt("OrTail"), vec![]);
    g.add(nt("AndExpr"), vec![nt("EqExpr"), nt("AndTail")]);
    g.add(nt("AndTail"), vec![t("&&"), nt("EqExpr"), nt("AndTail")]);
    g.add(nt("AndTail"), vec![]);
    g.add(nt("EqExpr"), vec![nt("RelExpr"), nt("EqTail")]);
    g.add(nt("EqTail"), vec![t("=="), nt("RelExpr"), nt("EqTail")]);
    g.add(nt("EqTail"), vec![t("!="), nt("RelExpr"), nt("EqTail")]);
    g.add(nt("EqTail"), vec![]);
    g.add(nt("RelExpr"), vec![nt("AddExpr"), nt("RelTail")]);
    g.add(nt("RelTail"), vec![t("<"), nt("AddExpr"), nt("RelTail")]);
    g.add(nt("RelTail"), vec![t(">"), nt("AddExpr"), nt("RelTail")]);
    g.add(nt("RelTail"), vec![t("<="), nt("AddExpr"), nt("RelTail")]);
    g.add(nt("RelTail"), vec![t(">="), nt("AddExpr"), nt("RelTail")]);
    g.add(nt("RelTail"), vec![]);
    g.add(nt("AddExpr"), vec![nt("MulExpr"), nt("AddTail")]);
    g.add(nt("AddTail"), vec![t("+"), nt("MulExpr"), nt("AddTail")]);
    g.add(nt("AddTail"), vec![t("-"), nt("MulExpr"), nt("AddTail")]);
    g.add(nt("AddTail"), vec![]);
    g.add(nt("MulExpr"), vec![nt("UnaryExpr"), nt("MulTail")]);
    g.add(nt("MulTail"), vec![t("*"), nt("UnaryExpr"), nt("MulTail")]);
    g.add(nt("MulTail"), vec![t("/"), nt("UnaryExpr"), nt("MulTail")]);
    g.add(nt("MulTail"), vec![t("%"), nt("UnaryExpr"), nt("MulTail")]);
    g.add(nt("MulTail"), vec![]);
    g.add(nt("UnaryExpr"), vec![t("+"), nt("UnaryExpr")]);
    g.add(nt("UnaryExpr"), vec![t("-"), nt("UnaryExpr")]);
    g.add(nt("UnaryExpr"), vec![t("!"), nt("UnaryExpr")]);
    g.add(nt("UnaryExpr"), vec![nt("PostfixExpr")]);
    g.add(nt("PostfixExpr"), vec![nt("Primary"), nt("PostfixTail")]);
    g.add(
        nt("PostfixTail"),
        vec![t("("), nt("ArgListOpt"), t(")"), nt("PostfixTail")],
    );
    g.add(nt("PostfixTail"), vec![t("["), nt("Expr"), t("]"), nt("PostfixTail")]);
    g.add(nt("PostfixTail"), vec![t("."), t("ID"), nt("PostfixTail")]);
    g.add(nt("PostfixTail"), vec![t("++"), nt("PostfixTail")]);
    g.add(nt("PostfixTail"), vec![t("--"), nt("PostfixTail")]);
    g.add(nt("PostfixTail"), vec![]);
    g.add(nt("Primary"), vec![t("ID")]);
    g.add(nt("Primary"), vec![t("printf")]);
    g.add(nt("Primary"), vec![nt("CONSTANT")]);
    g.add(nt("Primary"), vec![t("("), nt("Expr"), t(")")]);
    g.add(nt("ArgListOpt"), vec![nt("ArgList")]);
    g.add(nt("ArgListOpt"), vec![]);
    g.add(nt("ArgList"), vec![nt("Expr"), nt("ArgListTail")]);
    g.add(nt("ArgListTail"), vec![t(","), nt("Expr"), nt("ArgListTail")]);
    g.add(nt("ArgListTail"), vec![]);
    g.add(nt("CONSTANT"), vec![t("INT_CONST")]);
    g.add(nt("CONSTANT"), vec![t("FLOAT_CONST")]);
    g.add(nt("CONSTANT"), vec![t("CHAR_CONST")]);
    g.add(nt("CONSTANT"), vec![t("STRING_CONST")]);

    g.finalize();
    g
}
