//! The predictive (table-driven) parser: a stack machine that consumes
//! tokens under a [`ParseTable`] built from [`faxc_grammar`], builds a
//! parse tree synchronously with its reductions, captures a step-by-step
//! trace, and promotes struct/union tags to `TYPE_NAME` as it matches them.
//!
//! Grounded in `original_source/service/parser.py`'s `Parser.parse_tokens`
//! for the pop/match/predict control flow and trace-line format; extended
//! with tree construction, `TYPE_NAME` promotion, and a structured trace
//! record, none of which the reference implementation's bare accept/reject
//! parser has.

use faxc_grammar::{
    compute_first_sets, compute_follow_sets, compute_select_sets, Conflict, Grammar, ParseTable,
    ProductionId,
};
use faxc_lex::Token;
use faxc_util::diagnostic::{E_PARSER_EXPECTED_TOKEN, E_PARSER_STACK_UNDERFLOW, E_PARSER_TABLE_MISS};
use faxc_util::symbol::{SYM_EOF, SYM_EPSILON, SYM_ID, SYM_TYPE_NAME};
use faxc_util::{DiagnosticBuilder, FxHashSet, Handler, IndexVec, Span, Symbol};

use crate::tree::{NodeId, ParseTree, ParseTreeNode};

/// How many lookahead terminals a trace line previews of the remaining
/// input (spec.md §4.6: "up to 12 lookahead terminals").
const TRACE_LOOKAHEAD: usize = 12;

/// The role a stack entry plays when it is eventually matched. Only
/// `TagName` has an observable effect: matching it inserts the token's
/// lexeme into the dynamic `TYPE_NAME` set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    None,
    TagName,
}

struct StackEntry {
    symbol: Symbol,
    parent: Option<NodeId>,
    role: Role,
}

/// One structured trace record (spec.md §4.6's "parallel" structured
/// form); `to_line` renders the text form from the same data so both
/// views stay in sync.
#[derive(Clone, Debug)]
pub struct TraceEntry {
    pub step: usize,
    pub stack: Vec<Symbol>,
    pub input_preview: Vec<Symbol>,
    pub action: TraceAction,
}

#[derive(Clone, Debug)]
pub enum TraceAction {
    Init,
    Match(Symbol),
    Reduce(ProductionId),
    Accept,
}

impl TraceEntry {
    /// `"{step} | stack: [...] | input: ... | {action}"`, stack printed
    /// top-of-stack last per `parser.py`'s `stack[::-1]` rendering.
    pub fn to_line(&self, grammar: &Grammar) -> String {
        let stack = self
            .stack
            .iter()
            .map(|s| s.as_str().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let input = self
            .input_preview
            .iter()
            .map(|s| s.as_str().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let action = match &self.action {
            TraceAction::Init => "INIT".to_string(),
            TraceAction::Match(sym) => format!("match '{}'", sym.as_str()),
            TraceAction::Reduce(id) => {
                let production = grammar.production(*id);
                let body: Vec<String> = production
                    .body
                    .iter()
                    .map(|s| {
                        if *s == SYM_EPSILON {
                            "epsilon".to_string()
                        } else {
                            s.as_str().to_string()
                        }
                    })
                    .collect();
                format!("reduce {} -> {}", production.head.as_str(), body.join(" "))
            }
            TraceAction::Accept => "ACCEPT".to_string(),
        };
        format!("{:>4} | stack: [{}] | input: {} | {}", self.step, stack, input, action)
    }
}

#[derive(Clone, Debug, Default)]
pub struct Trace {
    pub entries: Vec<TraceEntry>,
}

impl Trace {
    pub fn to_lines(&self, grammar: &Grammar) -> Vec<String> {
        self.entries.iter().map(|e| e.to_line(grammar)).collect()
    }

    /// The last `n` lines, for diagnostic display on failure
    /// (spec.md §7: "in trace mode it also prints the last 25 trace
    /// lines").
    pub fn tail(&self, n: usize) -> &[TraceEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }
}

/// Parser construction-time options (spec.md §9's re-architecture hint;
/// SPEC_FULL.md §2.3: a small options struct, not environment/file
/// configuration).
#[derive(Clone, Debug)]
pub struct ParserConfig {
    /// Whether to construct the parse tree. Disabling this yields a
    /// lighter-weight accept/reject run (spec.md §4.6).
    pub build_tree: bool,
    /// Whether to append to the trace buffer at every step.
    pub capture_trace: bool,
    /// Identifiers already known as `TYPE_NAME`s before parsing starts.
    pub initial_type_names: FxHashSet<Symbol>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            build_tree: true,
            capture_trace: true,
            initial_type_names: FxHashSet::default(),
        }
    }
}

/// A parse error: a lexical failure short-circuited through
/// `token_to_symbol`, a terminal mismatch, a missing table entry, or the
/// stack-exhausted-before-EOF invariant violation (spec.md §4.7).
#[derive(Clone, Debug, thiserror::Error)]
pub enum ParseError {
    #[error("lexical error at {line}:{col}: {message}")]
    Lexical { message: String, line: u32, col: u32 },

    #[error("at {nonterminal}, no production for {terminal} (candidates: {})", candidates.join(", "))]
    TableMiss {
        nonterminal: Symbol,
        terminal: Symbol,
        candidates: Vec<String>,
        line: u32,
        col: u32,
    },

    #[error("expected {expected}, saw {found}")]
    TerminalMismatch { expected: Symbol, found: Symbol, line: u32, col: u32 },

    #[error("stack exhausted before input end")]
    StackUnderflow,
}

impl ParseError {
    pub fn line(&self) -> Option<u32> {
        match self {
            ParseError::Lexical { line, .. }
            | ParseError::TableMiss { line, .. }
            | ParseError::TerminalMismatch { line, .. } => Some(*line),
            ParseError::StackUnderflow => None,
        }
    }

    pub fn col(&self) -> Option<u32> {
        match self {
            ParseError::Lexical { col, .. }
            | ParseError::TableMiss { col, .. }
            | ParseError::TerminalMismatch { col, .. } => Some(*col),
            ParseError::StackUnderflow => None,
        }
    }
}

/// Everything a successful parse hands back: the tree, the trace, and
/// the record of which productions/table cells were exercised (spec.md
/// §4.6's "list of used productions and used table entries").
pub struct ParseOutcome {
    pub tree: ParseTree,
    pub trace: Trace,
    pub used_productions: Vec<ProductionId>,
    pub used_table_entries: Vec<(Symbol, Symbol, ProductionId)>,
    pub type_names: FxHashSet<Symbol>,
}

/// The table-driven parser itself.
pub struct PredictiveParser<'g, 'h> {
    grammar: &'g Grammar,
    table: ParseTable,
    tokens: Vec<(Token, Span)>,
    cursor: usize,
    handler: &'h mut Handler,
    config: ParserConfig,
}

impl<'g, 'h> PredictiveParser<'g, 'h> {
    /// Builds the predictive table from `grammar`'s SELECT sets and
    /// wraps `tokens` (already lexed, EOF-exclusive per spec.md §4.2 —
    /// this constructor appends its own EOF terminal at end of input).
    pub fn new(grammar: &'g Grammar, tokens: Vec<(Token, Span)>, handler: &'h mut Handler) -> Self {
        Self::with_config(grammar, tokens, handler, ParserConfig::default())
    }

    pub fn with_config(
        grammar: &'g Grammar,
        tokens: Vec<(Token, Span)>,
        handler: &'h mut Handler,
        config: ParserConfig,
    ) -> Self {
        let first = compute_first_sets(grammar);
        let follow = compute_follow_sets(grammar, &first);
        let select = compute_select_sets(grammar, &first, &follow);
        let table = ParseTable::from_grammar(grammar, &select);
        log::debug!(
            "predictive parser ready: {} tokens, {} table conflicts",
            tokens.len(),
            table.conflicts.len()
        );
        Self { grammar, table, tokens, cursor: 0, handler, config }
    }

    /// Grammar-table conflicts recorded while building the table
    /// (spec.md §4.5/§4.7 `GrammarConflict`, non-fatal).
    pub fn conflicts(&self) -> &[Conflict] {
        &self.table.conflicts
    }

    fn current(&self) -> Option<&(Token, Span)> {
        self.tokens.get(self.cursor)
    }

    /// Maps the current token to a grammar terminal (spec.md §4.6
    /// `token_to_symbol`). Identifiers already in `type_names` become
    /// `TYPE_NAME`; everything else uses the fixed class-name/lexeme
    /// convention of spec.md §6.
    fn token_to_symbol(&self, token: &Token, span: Span, type_names: &FxHashSet<Symbol>) -> Result<Symbol, ParseError> {
        match token {
            Token::Invalid(lexeme) => Err(ParseError::Lexical {
                message: format!("invalid token '{}'", lexeme.as_str()),
                line: span.line,
                col: span.column,
            }),
            Token::Eof => Ok(SYM_EOF),
            Token::Ident(lexeme) => {
                if type_names.contains(lexeme) {
                    Ok(SYM_TYPE_NAME)
                } else {
                    Ok(SYM_ID)
                }
            }
            Token::IntConst { .. } => Ok(faxc_util::symbol::SYM_INT_CONST),
            Token::FloatConst(_) => Ok(faxc_util::symbol::SYM_FLOAT_CONST),
            Token::CharConst(_) => Ok(faxc_util::symbol::SYM_CHAR_CONST),
            Token::StringConst(_) => Ok(faxc_util::symbol::SYM_STRING_CONST),
            Token::Reserved(lexeme) | Token::Op(lexeme) | Token::Delim(lexeme) => Ok(*lexeme),
        }
    }

    /// Runs the stack machine to completion (spec.md §4.6).
    pub fn parse(&mut self) -> Result<ParseOutcome, ParseError> {
        let mut nodes: IndexVec<NodeId, ParseTreeNode> = IndexVec::new();
        let mut root: Option<NodeId> = None;
        let mut type_names = std::mem::take(&mut self.config.initial_type_names);
        let mut trace = Trace::default();
        let mut used_productions = Vec::new();
        let mut used_table_entries = Vec::new();

        let mut stack: Vec<StackEntry> =
            vec![StackEntry { symbol: SYM_EOF, parent: None, role: Role::None }];
        stack.push(StackEntry { symbol: self.grammar.start, parent: None, role: Role::None });

        let mut step = 0usize;
        if self.config.capture_trace {
            trace.entries.push(TraceEntry {
                step,
                stack: stack.iter().map(|e| e.symbol).collect(),
                input_preview: self.lookahead_preview(&type_names),
                action: TraceAction::Init,
            });
        }

        loop {
            let Some(entry) = stack.pop() else {
                self.report_stack_underflow();
                return Err(ParseError::StackUnderflow);
            };
            log::trace!("step {}: pop {} (role {:?})", step, entry.symbol.as_str(), entry.role);

            let (current_token, current_span) = match self.current() {
                Some((t, s)) => (t.clone(), *s),
                None => (Token::Eof, self.tokens.last().map(|(_, s)| *s).unwrap_or(Span::DUMMY)),
            };
            let lookahead = self.token_to_symbol(&current_token, current_span, &type_names)?;

            if entry.symbol == SYM_EOF && lookahead == SYM_EOF {
                step += 1;
                log::debug!("parse accepted after {} steps", step);
                if self.config.capture_trace {
                    trace.entries.push(TraceEntry {
                        step,
                        stack: stack.iter().map(|e| e.symbol).collect(),
                        input_preview: self.lookahead_preview(&type_names),
                        action: TraceAction::Accept,
                    });
                }
                let root = root.ok_or(ParseError::StackUnderflow)?;
                return Ok(ParseOutcome { tree: ParseTree { nodes, root }, trace, used_productions, used_table_entries, type_names });
            }

            if self.grammar.is_terminal(entry.symbol) || entry.symbol == SYM_EOF {
                if entry.symbol != lookahead {
                    self.report_terminal_mismatch(entry.symbol, lookahead, current_span);
                    return Err(ParseError::TerminalMismatch {
                        expected: entry.symbol,
                        found: lookahead,
                        line: current_span.line,
                        col: current_span.column,
                    });
                }
                if entry.role == Role::TagName {
                    if let Some(lexeme) = current_token.lexeme() {
                        log::trace!("promoting '{}' to TYPE_NAME", lexeme.as_str());
                        type_names.insert(lexeme);
                    }
                }
                if self.config.build_tree {
                    if let Some(parent) = entry.parent {
                        let leaf = nodes.push(ParseTreeNode {
                            symbol: entry.symbol,
                            parent: Some(parent),
                            children: Vec::new(),
                            token: Some((current_token.lexeme().unwrap_or(entry.symbol), current_span)),
                        });
                        nodes[parent].children.push(leaf);
                    }
                }
                self.cursor += 1;
                step += 1;
                if self.config.capture_trace {
                    trace.entries.push(TraceEntry {
                        step,
                        stack: stack.iter().map(|e| e.symbol).collect(),
                        input_preview: self.lookahead_preview(&type_names),
                        action: TraceAction::Match(entry.symbol),
                    });
                }
                continue;
            }

            // Nonterminal: consult the predictive table.
            let Some(prod_id) = self.table.get(entry.symbol, lookahead) else {
                let candidates = self.candidates_for(entry.symbol);
                self.report_table_miss(entry.symbol, lookahead, &candidates, current_span);
                return Err(ParseError::TableMiss {
                    nonterminal: entry.symbol,
                    terminal: lookahead,
                    candidates,
                    line: current_span.line,
                    col: current_span.column,
                });
            };
            used_productions.push(prod_id);
            used_table_entries.push((entry.symbol, lookahead, prod_id));

            let node_id = if self.config.build_tree {
                let id = nodes.push(ParseTreeNode {
                    symbol: entry.symbol,
                    parent: entry.parent,
                    children: Vec::new(),
                    token: None,
                });
                if let Some(parent) = entry.parent {
                    nodes[parent].children.push(id);
                } else {
                    root = Some(id);
                }
                Some(id)
            } else {
                None
            };

            let production = self.grammar.production(prod_id);
            log::trace!(
                "step {}: reduce {} -> {:?}",
                step,
                production.head.as_str(),
                production.body.iter().map(|s| s.as_str()).collect::<Vec<_>>()
            );
            if production.is_epsilon() {
                if let (true, Some(id)) = (self.config.build_tree, node_id) {
                    let eps = nodes.push(ParseTreeNode {
                        symbol: SYM_EPSILON,
                        parent: Some(id),
                        children: Vec::new(),
                        token: None,
                    });
                    nodes[id].children.push(eps);
                }
            } else {
                let is_tag_head = entry.symbol == Symbol::intern_known("StructSpec")
                    || entry.symbol == Symbol::intern_known("UnionSpec");
                for (i, &sym) in production.body.iter().enumerate().rev() {
                    let role = if is_tag_head && sym == SYM_ID && i == 1 { Role::TagName } else { Role::None };
                    stack.push(StackEntry { symbol: sym, parent: node_id, role });
                }
            }

            step += 1;
            if self.config.capture_trace {
                trace.entries.push(TraceEntry {
                    step,
                    stack: stack.iter().map(|e| e.symbol).collect(),
                    input_preview: self.lookahead_preview(&type_names),
                    action: TraceAction::Reduce(prod_id),
                });
            }
        }
    }

    fn candidates_for(&self, nonterminal: Symbol) -> Vec<String> {
        let mut out: Vec<String> = self
            .grammar
            .terminals
            .iter()
            .filter(|&&terminal| self.table.get(nonterminal, terminal).is_some())
            .map(|s| s.as_str().to_string())
            .collect();
        out.sort();
        out.dedup();
        out
    }

    fn report_table_miss(&mut self, nonterminal: Symbol, terminal: Symbol, candidates: &[String], span: Span) {
        log::debug!(
            "table miss at {}/{}: candidates [{}]",
            nonterminal.as_str(),
            terminal.as_str(),
            candidates.join(", ")
        );
        DiagnosticBuilder::error(format!(
            "at {}, no production for {} (candidates: {})",
            nonterminal.as_str(),
            terminal.as_str(),
            candidates.join(", ")
        ))
        .code(E_PARSER_TABLE_MISS)
        .span(span)
        .emit(self.handler);
    }

    fn report_terminal_mismatch(&mut self, expected: Symbol, found: Symbol, span: Span) {
        log::debug!("terminal mismatch: expected {}, saw {}", expected.as_str(), found.as_str());
        DiagnosticBuilder::error(format!(
            "expected {}, saw {}",
            expected.as_str(),
            found.as_str()
        ))
        .code(E_PARSER_EXPECTED_TOKEN)
        .span(span)
        .emit(self.handler);
    }

    fn report_stack_underflow(&mut self) {
        log::debug!("parser stack exhausted before input end");
        DiagnosticBuilder::error("parser stack exhausted before input end")
            .code(E_PARSER_STACK_UNDERFLOW)
            .span(self.current().map(|(_, s)| *s).unwrap_or(Span::DUMMY))
            .emit(self.handler);
    }

    fn lookahead_preview(&self, type_names: &FxHashSet<Symbol>) -> Vec<Symbol> {
        self.tokens[self.cursor..]
            .iter()
            .take(TRACE_LOOKAHEAD)
            .filter_map(|(t, s)| self.token_to_symbol(t, *s, type_names).ok())
            .collect()
    }
}
