//! The generic code-emission framework (spec §4.1 "Emitter base").
//!
//! Everything here is target-agnostic: an indented text writer, a
//! documentation emitter, precedence-aware expression dispatch, and the
//! identifier-mangling hooks a backend overrides. The emitter never
//! inspects `Type` (spec §4.1 contract) — that's the typed layer's job
//! (`crate::typed`).

use std::collections::BTreeSet;
use std::fmt::Write as _;

use xlate_ast::{BinaryOp, CodeDoc, DocBlock, Expr, Inline, UnaryOp};

use crate::precedence::Priority;

/// How the documentation emitter wraps rendered text: a target with block
/// comments supplies `/**`/` * `/` */`; a target with only line comments
/// leaves `block_open`/`block_close` empty and uses `line_prefix` for
/// every line.
#[derive(Debug, Clone)]
pub struct CommentStyle {
    pub line_prefix: &'static str,
    pub block_open: &'static str,
    pub block_line_prefix: &'static str,
    pub block_close: &'static str,
}

impl CommentStyle {
    /// JSDoc-shaped block comments, the default for the one fully
    /// implemented backend (spec §4.3, the JS target).
    pub fn jsdoc() -> Self {
        CommentStyle {
            line_prefix: "// ",
            block_open: "/**",
            block_line_prefix: " * ",
            block_close: " */",
        }
    }
}

/// The indented text writer plus the helper/resource bookkeeping shared
/// by every backend (spec §4.1, §4.3.11).
pub struct Emitter {
    buf: String,
    indent: usize,
    at_line_start: bool,
    comment_style: CommentStyle,
    helpers: BTreeSet<&'static str>,
}

impl Emitter {
    pub fn new() -> Self {
        Emitter {
            buf: String::new(),
            indent: 0,
            at_line_start: true,
            comment_style: CommentStyle::jsdoc(),
            helpers: BTreeSet::new(),
        }
    }

    pub fn with_comment_style(mut self, style: CommentStyle) -> Self {
        self.comment_style = style;
        self
    }

    pub fn into_output(self) -> String {
        self.buf
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Truncates the buffer back to `len` bytes, used to capture a
    /// sub-expression's rendered text (e.g. a call argument) without
    /// losing helper registrations performed while rendering it, then
    /// reposition that text elsewhere (spec §4.1: expression emission
    /// composes rather than re-running the pass per sub-expression).
    pub fn truncate(&mut self, len: usize) {
        self.buf.truncate(len);
        self.at_line_start = self.buf.is_empty() || self.buf.ends_with('\n');
    }

    fn write_indent_if_needed(&mut self) {
        if self.at_line_start {
            for _ in 0..self.indent {
                self.buf.push_str("  ");
            }
            self.at_line_start = false;
        }
    }

    pub fn write_str(&mut self, s: &str) {
        self.write_indent_if_needed();
        self.buf.push_str(s);
    }

    pub fn write_char(&mut self, c: char) {
        self.write_indent_if_needed();
        self.buf.push(c);
    }

    pub fn newline(&mut self) {
        self.buf.push('\n');
        self.at_line_start = true;
    }

    pub fn writeln(&mut self, s: &str) {
        self.write_str(s);
        self.newline();
    }

    /// Emits `{`, a newline, and increases indentation by one level.
    pub fn open_block(&mut self) {
        self.write_str("{");
        self.newline();
        self.indent += 1;
    }

    /// Decreases indentation and emits `}` on its own line.
    pub fn close_block(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.writeln("}");
    }

    /// Decreases indentation and emits `} <trailing> ` on the same line,
    /// for `} else {` / `} while (...)` chains that continue the
    /// statement rather than ending it.
    pub fn close_block_continue(&mut self, trailing: &str) {
        self.indent = self.indent.saturating_sub(1);
        self.write_str("} ");
        if !trailing.is_empty() {
            self.write_str(trailing);
            self.write_str(" ");
        }
    }

    /// Emits a canonical counted-loop scaffold, e.g. `for (let i = 0; i <
    /// 4; i++) {` for `depth=1`, used by nested array-storage
    /// initialization (spec §4.1 "open_loop", §4.3.6). `induction_var_decl`
    /// is the keyword the target uses for a scoped loop variable (`let`
    /// for JS); `depth` selects the induction variable name from the
    /// conventional `i`, `j`, `k`, ... sequence to avoid collisions in
    /// nested loops.
    pub fn open_loop(&mut self, induction_var_decl: &str, depth: usize, limit: &str) {
        let var = induction_var_name(depth);
        write!(
            self.buf_with_indent(),
            "for ({induction_var_decl} {var} = 0; {var} < {limit}; {var}++) "
        )
        .expect("writing to an in-memory String cannot fail");
        self.open_block();
    }

    fn buf_with_indent(&mut self) -> &mut String {
        self.write_indent_if_needed();
        &mut self.buf
    }

    /// Registers a helper for emission at end-of-file, returning whether
    /// this is the first time it's been requested (spec §8 "Helper
    /// uniqueness": each helper registered and emitted at most once).
    pub fn register_helper(&mut self, name: &'static str) -> bool {
        self.helpers.insert(name)
    }

    /// Helper identifiers in lexicographic order, matching the emission
    /// order required by spec §4.3.11 and §8.
    pub fn registered_helpers(&self) -> impl Iterator<Item = &'static str> {
        self.helpers.iter().copied()
    }

    pub fn has_any_helpers(&self) -> bool {
        !self.helpers.is_empty()
    }

    // -- Documentation emitter (spec §4.1) ----------------------------

    pub fn write_doc(&mut self, doc: &CodeDoc) {
        if doc.is_empty() {
            return;
        }
        let style = self.comment_style.clone();
        if !style.block_open.is_empty() {
            self.writeln(style.block_open);
        }
        self.write_doc_paragraph(&style, &doc.summary);
        for block in &doc.blocks {
            match block {
                DocBlock::Paragraph(p) => self.write_doc_paragraph(&style, p),
                DocBlock::Bullets(items) => {
                    for item in items {
                        let prefix = format!("{}- ", style.block_line_prefix);
                        self.write_str(&prefix);
                        self.write_inline_runs(&item.runs);
                        self.newline();
                    }
                }
            }
        }
        if !style.block_close.is_empty() {
            self.writeln(style.block_close);
        }
    }

    fn write_doc_paragraph(&mut self, style: &CommentStyle, para: &xlate_ast::Paragraph) {
        if para.runs.is_empty() {
            return;
        }
        self.write_str(style.block_line_prefix);
        self.write_inline_runs(&para.runs);
        self.newline();
    }

    fn write_inline_runs(&mut self, runs: &[Inline]) {
        for run in runs {
            match run {
                Inline::Text(t) => self.write_str(t),
                Inline::Code(c) => {
                    self.write_char('`');
                    self.write_str(c);
                    self.write_char('`');
                }
            }
        }
    }

    // -- Literal emission (spec §4.1 "String/number literal emission")

    /// Spells code points inline up to `ascii_budget` of them; beyond that
    /// a backend is expected to have already decided to escape instead of
    /// calling this (the budget exists so a backend can choose a per-call
    /// threshold rather than a global one).
    pub fn write_quoted_string(&mut self, s: &str, quote: char, ascii_budget: usize) {
        self.write_char(quote);
        let mut spelled = 0usize;
        for c in s.chars() {
            match c {
                '\\' => self.write_str("\\\\"),
                '\n' => self.write_str("\\n"),
                '\r' => self.write_str("\\r"),
                '\t' => self.write_str("\\t"),
                c if c == quote => {
                    self.write_char('\\');
                    self.write_char(quote);
                }
                c if c.is_ascii_graphic() || c == ' ' => {
                    self.write_char(c);
                    spelled += 1;
                }
                c if spelled < ascii_budget => {
                    self.write_char(c);
                    spelled += 1;
                }
                c => {
                    write!(self.buf_with_indent(), "\\u{{{:x}}}", c as u32)
                        .expect("writing to an in-memory String cannot fail");
                }
            }
        }
        self.write_char(quote);
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Emitter::new()
    }
}

/// The conventional induction-variable naming scheme used by nested
/// counted loops (spec §4.3.6: "induction variables named by a
/// conventional scheme to avoid collisions").
pub fn induction_var_name(depth: usize) -> char {
    (b'i' + (depth as u8 % 18)) as char
}

/// The intrinsic priority of an expression node, independent of any
/// backend (spec §4.1: "Priorities form a total order ... see §3 of the
/// AST"). A backend's `expr_priority` for `BinaryOp` further refines
/// `binary_op_priority` below if a target's grammar groups operators
/// differently; the JS backend does not need to.
pub fn expr_priority(expr: &Expr) -> Priority {
    match expr {
        Expr::Literal { .. } | Expr::Symbol(_) | Expr::ArrayLiteral { .. } => Priority::Primary,
        Expr::Call { .. } | Expr::Index { .. } => Priority::Postfix,
        Expr::Unary { .. } => Priority::Unary,
        Expr::Conditional { .. } => Priority::Cond,
        Expr::Interpolated { .. } => Priority::Primary,
        Expr::Binary { op, .. } => binary_op_priority(*op),
    }
}

pub fn binary_op_priority(op: BinaryOp) -> Priority {
    use BinaryOp::*;
    match op {
        Assign | AddAssign | SubAssign | MulAssign | DivAssign | ModAssign | ShlAssign
        | ShrAssign | AndAssign | OrAssign | XorAssign => Priority::Assign,
        CondOr => Priority::CondOr,
        CondAnd => Priority::CondAnd,
        Or => Priority::Or,
        Xor => Priority::Xor,
        And => Priority::And,
        Eq | NotEq => Priority::Equality,
        Less | LessOrEq | Greater | GreaterOrEq => Priority::Rel,
        Shl | Shr => Priority::Shift,
        Add | Sub => Priority::Additive,
        Mul | Div | Mod => Priority::Mul,
    }
}

pub fn unary_op_priority(_op: UnaryOp) -> Priority {
    Priority::Unary
}
