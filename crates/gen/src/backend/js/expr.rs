//! Expression emission (spec §4.1 precedence dispatch, §4.3.1, §4.3.4,
//! §4.3.5, §4.3.7, §4.3.8, §4.3.9, §4.3.10, §4.3.14).

use xlate_ast::{BinaryOp, Expr, InterpolatedPart, Literal, SymbolRef, UnaryOp};

use crate::emitter::{binary_op_priority, expr_priority};
use crate::error::GenResult;
use crate::naming::NamePolicy;
use crate::precedence::Priority;
use crate::typed::type_code;

use super::bridges;
use super::collections::{self, Backing};
use super::control::base_method_call;
use super::names::JsNamePolicy;
use super::regexp;
use super::strings;
use super::JsBackend;

/// Binary operators for which `a op (b op c)` and `(a op b) op c` are not
/// interchangeable, so the right operand must be parenthesized whenever
/// its own priority isn't strictly greater than this operator's (spec
/// §8 "Parenthesization minimality" — minimal, not merely sufficient).
fn bump(p: Priority) -> Priority {
    use Priority::*;
    match p {
        Statement => Assign,
        Assign => Cond,
        Cond => CondOr,
        CondOr => CondAnd,
        CondAnd => Or,
        Or => Xor,
        Xor => And,
        And => Equality,
        Equality => Rel,
        Rel => Shift,
        Shift => Additive,
        Additive => Mul,
        Mul => Unary,
        Unary => Postfix,
        Postfix => Primary,
        Primary => Primary,
    }
}

fn is_non_associative(op: BinaryOp) -> bool {
    matches!(
        op,
        BinaryOp::Sub | BinaryOp::Div | BinaryOp::Mod | BinaryOp::Shl | BinaryOp::Shr
    )
}

fn binary_op_symbol(op: BinaryOp) -> &'static str {
    use BinaryOp::*;
    match op {
        Add | AddAssign => "+",
        Sub | SubAssign => "-",
        Mul | MulAssign => "*",
        Div | DivAssign => "/",
        Mod | ModAssign => "%",
        Shl | ShlAssign => "<<",
        Shr | ShrAssign => ">>", // overridden for unsigned left operands
        And | AndAssign => "&",
        Or | OrAssign => "|",
        Xor | XorAssign => "^",
        CondAnd => "&&",
        CondOr => "||",
        Eq => "===",
        NotEq => "!==",
        Less => "<",
        LessOrEq => "<=",
        Greater => ">",
        GreaterOrEq => ">=",
        Assign => "=",
    }
}

/// Strips a trailing `;` so a statement-shaped helper (one that already
/// reads as a complete JS statement, e.g. `collections::clear_stmt`) can
/// be spliced into the expression-call layer below without producing a
/// doubled `;;` once `Stmt::Expr` adds its own.
fn strip_trailing_semicolon(mut s: String) -> String {
    if s.ends_with(';') {
        s.pop();
    }
    s
}

/// Built-in method names this layer recognizes on a qualified receiver
/// (spec §4.3.4). `backing` is the receiver's container backing, when
/// known — derived by the caller from the callee symbol's resolved type
/// (spec §3: a trailing built-in member carries its receiver's `Type`,
/// not one of its own) — and picks between the `List`-shaped and
/// `Set`/`Dictionary`-shaped mapping for methods whose JS spelling
/// depends on it.
fn rewrite_builtin_call(
    qualifier: &str,
    receiver: &str,
    method: &str,
    args: &[String],
    backing: Option<Backing>,
) -> Option<(String, Option<&'static str>)> {
    let joined = args.join(", ");
    let (text, helper) = match (qualifier, method) {
        ("Console", "Write") => (bridges::console_write(&joined, false), None),
        ("Console", "WriteLine") => (bridges::console_write(&joined, false), None),
        ("Console", "Error") => (bridges::console_write(&joined, true), None),
        ("Environment", "GetEnvironmentVariable") => {
            let name = args.first()?.trim_matches('"');
            return Some((bridges::env_read(name), None));
        }
        ("UTF8", "GetByteCount") => (bridges::utf8_byte_count(&args[0]), None),
        ("UTF8", "GetBytes") => (bridges::utf8_get_bytes(&args[0], &args[1], &args[2]), None),
        ("UTF8", "GetString") => (bridges::utf8_get_string(&args[0], &args[1], &args[2]), None),
        ("Regex", "Escape") => (format!("regexEscape({})", args[0]), Some("regexEscape")),
        (_, "Add") => (collections::list_add(receiver, &args[0]), None),
        (_, "Insert") => (collections::list_insert(receiver, &args[0], &args[1]), None),
        (_, "RemoveAt") => (collections::list_remove_at(receiver, &args[0]), None),
        (_, "RemoveRange") => (collections::list_remove_range(receiver, &args[0], &args[1]), None),
        (_, "Contains") if backing == Some(Backing::Set) => {
            (collections::set_contains(receiver, &args[0]), None)
        }
        (_, "Contains") => (collections::list_contains(receiver, &args[0]), None),
        (_, "ContainsKey") => (collections::dict_contains_key(receiver, &args[0]), None),
        (_, "Remove") if backing == Some(Backing::Set) => {
            (collections::set_remove(receiver, &args[0]), None)
        }
        (_, "Remove") if backing == Some(Backing::PlainMapObject) => (
            strip_trailing_semicolon(collections::dict_remove_stmt(receiver, &args[0])),
            None,
        ),
        (_, "Peek") => (collections::stack_peek(receiver), None),
        (_, "Clear") => (
            strip_trailing_semicolon(collections::clear_stmt(
                receiver,
                backing.unwrap_or(Backing::DynamicArray),
            )),
            None,
        ),
        (_, "Sort") if args.is_empty() => (collections::sort_all(receiver), None),
        (_, "SortPart") => {
            let (text, helper) =
                collections::sort_part(receiver, &args[0], &args[1], backing.unwrap_or(Backing::DynamicArray));
            (text, helper)
        }
        (_, "CopyTo") => {
            let (text, helper) = collections::copy_to(receiver, &args[0], &args[1], &args[2], &args[3]);
            (text, Some(helper))
        }
        (_, "Fill") if args.len() == 1 => (collections::fill(receiver, &args[0]), None),
        (_, "Fill") => (collections::fill_range(receiver, &args[0], &args[1], &args[2]), None),
        _ => return None,
    };
    Some((text, helper))
}

/// A receiver-path qualifier: `this`/`base`/`prototype` pass through
/// untouched, everything else mangles as a member name (spec §4.3.1).
/// Shared between `emit_symbol` and call-receiver construction so a
/// `foo.Bar()` call and a bare `foo.Bar` reference mangle identically.
fn mangle_qualifier_segment(policy: &JsNamePolicy, seg: &str) -> String {
    if seg == "this" || seg == "base" || seg == "prototype" {
        seg.to_string()
    } else {
        policy.mangle_local(seg)
    }
}

/// Joins a receiver path's segments, each mangled as a qualifier (spec
/// §4.3.1), with `.`. Shared by a call's receiver (`items.Add(...)`) and
/// a bare property read on the same kind of path (`items.Count`).
fn mangle_receiver_path(policy: &JsNamePolicy, segments: &[String]) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(i, s)| {
            if i > 0 {
                format!(".{}", mangle_qualifier_segment(policy, s))
            } else {
                mangle_qualifier_segment(policy, s)
            }
        })
        .collect()
}

impl<'a> JsBackend<'a> {
    pub(crate) fn emit_expr_top(&mut self, expr: &Expr) -> GenResult<()> {
        self.emit_expr(expr, Priority::Statement)
    }

    /// Renders `expr` and returns its text without leaving it in the
    /// output buffer, for callers (like call-argument lists) that need
    /// to interpose their own separators. Helper registrations made
    /// while rendering still take effect (spec §8 "Helper uniqueness").
    pub(crate) fn capture_expr(&mut self, expr: &Expr, priority: Priority) -> GenResult<String> {
        let start = self.emitter_mut().as_str().len();
        self.emit_expr(expr, priority)?;
        let text = self.emitter_mut().as_str()[start..].to_string();
        self.emitter_mut().truncate(start);
        Ok(text)
    }

    pub(crate) fn emit_expr(&mut self, expr: &Expr, parent_priority: Priority) -> GenResult<()> {
        let my_priority = expr_priority(expr);
        let needs_parens = my_priority.needs_parens_under(parent_priority);
        if needs_parens {
            self.emitter_mut().write_str("(");
        }
        match expr {
            Expr::Literal { value, .. } => self.emit_literal(value),
            Expr::Symbol(sym) => self.emit_symbol(sym),
            Expr::Binary { op, left, right, ty } => self.emit_binary(*op, left, right, ty, my_priority)?,
            Expr::Unary {
                op,
                is_prefix,
                operand,
                ..
            } => self.emit_unary(*op, *is_prefix, operand, my_priority)?,
            Expr::Conditional {
                cond,
                on_true,
                on_false,
                ..
            } => {
                self.emit_expr(cond, Priority::CondOr)?;
                self.emitter_mut().write_str(" ? ");
                self.emit_expr(on_true, Priority::Assign)?;
                self.emitter_mut().write_str(" : ");
                self.emit_expr(on_false, Priority::Cond)?;
            }
            Expr::Call { callee, args, .. } => self.emit_call(callee, args)?,
            Expr::Index { collection, index, .. } => {
                self.emit_expr(collection, Priority::Postfix)?;
                self.emitter_mut().write_str("[");
                self.emit_expr(index, Priority::Assign)?;
                self.emitter_mut().write_str("]");
            }
            Expr::Interpolated { parts, .. } => self.emit_interpolated(parts)?,
            Expr::ArrayLiteral { elements, .. } => {
                self.emitter_mut().write_str("[");
                for (i, e) in elements.iter().enumerate() {
                    if i > 0 {
                        self.emitter_mut().write_str(", ");
                    }
                    self.emit_expr(e, Priority::Assign)?;
                }
                self.emitter_mut().write_str("]");
            }
        }
        if needs_parens {
            self.emitter_mut().write_str(")");
        }
        Ok(())
    }

    fn emit_literal(&mut self, value: &Literal) {
        match value {
            Literal::Int(i) => self.emitter_mut().write_str(&i.to_string()),
            Literal::Double(d) => {
                let text = if d.fract() == 0.0 && d.is_finite() {
                    format!("{d:.1}")
                } else {
                    d.to_string()
                };
                self.emitter_mut().write_str(&text);
            }
            Literal::Str(s) => self.emitter_mut().write_quoted_string(s, '"', usize::MAX),
            Literal::Char(c) => {
                let s = c.to_string();
                self.emitter_mut().write_quoted_string(&s, '"', usize::MAX);
            }
            Literal::Bool(b) => self.emitter_mut().write_str(if *b { "true" } else { "false" }),
            Literal::Null => self.emitter_mut().write_str("null"),
        }
    }

    /// A qualified symbol reference is joined verbatim except its final
    /// segment, which is mangled as a member name (spec §4.3.1: "types,
    /// classes ... verbatim; fields, locals, methods camelCase") — unless
    /// that final segment is a collection's `Count`/`Length` pseudo-
    /// property (spec §4.3.4 "Size access"), which has no JS field of its
    /// own and instead reads through `collections::size_access`.
    fn emit_symbol(&mut self, sym: &SymbolRef) {
        let policy = JsNamePolicy;
        let len = sym.path.len();
        if len >= 2 && matches!(sym.path[len - 1].as_str(), "Count" | "Length") {
            if let Some(backing) = collections::backing_for_type(&sym.ty) {
                let receiver = mangle_receiver_path(&policy, &sym.path[..len - 1]);
                self.emitter_mut()
                    .write_str(&collections::size_access(&receiver, backing));
                return;
            }
        }
        let mut out = String::new();
        for (i, seg) in sym.path.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            if i + 1 == len {
                out.push_str(&policy.mangle_local(seg));
            } else {
                out.push_str(&mangle_qualifier_segment(&policy, seg));
            }
        }
        self.emitter_mut().write_str(&out);
    }

    fn emit_binary(
        &mut self,
        op: BinaryOp,
        left: &Expr,
        right: &Expr,
        ty: &xlate_ast::Type,
        my_priority: Priority,
    ) -> GenResult<()> {
        if let Some(underlying) = op.underlying_arithmetic() {
            // `x op= y` decomposes to `x = (x op y) <coerce>` (spec
            // §4.3.5).
            self.emit_expr(left, Priority::Assign)?;
            self.emitter_mut().write_str(" = (");
            self.emit_expr(left, Priority::Statement)?;
            self.emitter_mut()
                .write_str(&format!(" {} ", binary_op_symbol(underlying)));
            self.emit_expr(right, bump(binary_op_priority(underlying)))?;
            self.emitter_mut().write_str(")");
            let code = type_code(ty, true);
            if let Some(suffix) = super::integers::arithmetic_coercion(underlying, code) {
                self.emitter_mut().write_str(&format!(" {suffix}"));
            }
            return Ok(());
        }

        let right_parent = if is_non_associative(op) {
            bump(my_priority)
        } else {
            my_priority
        };

        let left_code = type_code(left.ty(), true);

        if matches!(op, BinaryOp::Shr) {
            let operator = super::integers::shift_right_operator(matches!(left_code, Some(c) if c.is_unsigned()));
            self.emit_expr(left, my_priority)?;
            self.emitter_mut().write_str(&format!(" {operator} "));
            self.emit_expr(right, right_parent)?;
            return Ok(());
        }

        // A relational comparison of unsigned 32-bit operands reads the
        // bit pattern as a magnitude first, or a value with the top bit
        // set compares as negative (spec §8 scenario 1).
        if super::integers::comparison_needs_unsigned_coercion(op, left_code) {
            self.emitter_mut().write_str("(");
            self.emit_expr(left, Priority::Shift)?;
            self.emitter_mut().write_str(" >>> 0)");
            self.emitter_mut()
                .write_str(&format!(" {} ", binary_op_symbol(op)));
            self.emitter_mut().write_str("(");
            self.emit_expr(right, Priority::Shift)?;
            self.emitter_mut().write_str(" >>> 0)");
            return Ok(());
        }

        self.emit_expr(left, my_priority)?;
        self.emitter_mut()
            .write_str(&format!(" {} ", binary_op_symbol(op)));
        self.emit_expr(right, right_parent)?;

        if let Some(suffix) = super::integers::arithmetic_coercion(op, type_code(ty, true)) {
            self.emitter_mut().write_str(&format!(" {suffix}"));
        }
        Ok(())
    }

    fn emit_unary(
        &mut self,
        op: UnaryOp,
        is_prefix: bool,
        operand: &Expr,
        my_priority: Priority,
    ) -> GenResult<()> {
        let symbol = match op {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::BitwiseNot => "~",
            UnaryOp::Increment => "++",
            UnaryOp::Decrement => "--",
        };
        if is_prefix {
            self.emitter_mut().write_str(symbol);
            self.emit_expr(operand, my_priority)?;
        } else {
            self.emit_expr(operand, my_priority)?;
            self.emitter_mut().write_str(symbol);
        }
        Ok(())
    }

    fn emit_call(&mut self, callee: &Expr, args: &[Expr]) -> GenResult<()> {
        let mut arg_texts = Vec::with_capacity(args.len());
        for a in args {
            arg_texts.push(self.capture_expr(a, Priority::Assign)?);
        }

        if let Expr::Symbol(sym) = callee {
            if sym.path.first().map(String::as_str) == Some("base") {
                let class_name = self
                    .current_class_name()
                    .map(str::to_owned)
                    .unwrap_or_default();
                let method = JsNamePolicy.mangle_local(sym.path.last().unwrap());
                let text = base_method_call(&class_name, &method, &arg_texts);
                self.emitter_mut().write_str(&text);
                return Ok(());
            }
            if sym.path.len() >= 2 {
                let method = sym.path.last().unwrap();
                let receiver_segments = &sym.path[..sym.path.len() - 1];
                let policy = JsNamePolicy;
                let receiver = mangle_receiver_path(&policy, receiver_segments);
                // The raw (unmangled) last qualifier segment: static
                // namespace names like `Console`/`UTF8` are distinguished
                // from ordinary fields by matching on the source name
                // directly, since `mangle_type_name` already leaves them
                // untouched.
                let qualifier = receiver_segments.last().unwrap().as_str();
                // `sym.ty` carries the receiver's type, not a type of its
                // own, for a trailing built-in member like this one (see
                // `SymbolRef` doc comment).
                let backing = collections::backing_for_type(&sym.ty);
                if let Some((text, helper)) =
                    rewrite_builtin_call(qualifier, &receiver, method, &arg_texts, backing)
                {
                    if let Some(h) = helper {
                        self.emitter_mut().register_helper(h);
                    }
                    self.emitter_mut().write_str(&text);
                    return Ok(());
                }
                if matches!(method.as_str(), "IsMatch") {
                    self.emitter_mut()
                        .write_str(&regexp::is_match_compiled(&receiver, &arg_texts[0]));
                    return Ok(());
                }
                let mangled = policy.mangle_local(method);
                self.emitter_mut()
                    .write_str(&format!("{receiver}.{mangled}({})", arg_texts.join(", ")));
                return Ok(());
            }
        }

        self.emit_expr(callee, Priority::Postfix)?;
        self.emitter_mut()
            .write_str(&format!("({})", arg_texts.join(", ")));
        Ok(())
    }

    /// An interpolated string becomes a template literal; each `Arg` part
    /// gets its format/precision chain, then its width chain (spec
    /// §4.3.7, §8 scenario 3).
    fn emit_interpolated(&mut self, parts: &[InterpolatedPart]) -> GenResult<()> {
        self.emitter_mut().write_str("`");
        for part in parts {
            match part {
                InterpolatedPart::Literal(text) => {
                    let escaped = strings::escape_template_literal_text(text);
                    self.emitter_mut().write_str(&escaped);
                }
                InterpolatedPart::Arg {
                    expr,
                    width,
                    format,
                    precision,
                } => {
                    self.emitter_mut().write_str("${");
                    self.emit_expr(expr, Priority::Assign)?;
                    if let Some(f) = format {
                        self.emitter_mut().write_str(&strings::format_chain(*f, *precision));
                    }
                    if let Some(w) = width {
                        self.emitter_mut().write_str(&strings::width_chain(*w));
                    }
                    self.emitter_mut().write_str("}");
                }
            }
        }
        self.emitter_mut().write_str("`");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xlate_ast::{Numeric, Program, Type};

    fn backend(program: &Program) -> JsBackend<'_> {
        JsBackend::new(program, None)
    }

    #[test]
    fn integer_literal_is_spelled_plain() {
        let program = Program::new();
        let mut b = backend(&program);
        b.emit_expr_top(&Expr::Literal {
            value: Literal::Int(42),
            ty: Type::Numeric(Numeric::I32),
        })
        .unwrap();
        assert_eq!(b.emitter_mut().as_str(), "42");
    }

    #[test]
    fn double_literal_keeps_decimal_point() {
        let program = Program::new();
        let mut b = backend(&program);
        b.emit_expr_top(&Expr::Literal {
            value: Literal::Double(3.0),
            ty: Type::Numeric(Numeric::F64),
        })
        .unwrap();
        assert_eq!(b.emitter_mut().as_str(), "3.0");
    }

    #[test]
    fn nested_subtraction_parenthesizes_right_operand() {
        let program = Program::new();
        let mut b = backend(&program);
        let inner = Expr::Binary {
            op: BinaryOp::Sub,
            left: Box::new(Expr::Literal {
                value: Literal::Int(2),
                ty: Type::Numeric(Numeric::I32),
            }),
            right: Box::new(Expr::Literal {
                value: Literal::Int(3),
                ty: Type::Numeric(Numeric::I32),
            }),
            ty: Type::Numeric(Numeric::I32),
        };
        let outer = Expr::Binary {
            op: BinaryOp::Sub,
            left: Box::new(Expr::Literal {
                value: Literal::Int(1),
                ty: Type::Numeric(Numeric::I32),
            }),
            right: Box::new(inner),
            ty: Type::Numeric(Numeric::I32),
        };
        b.emit_expr_top(&outer).unwrap();
        assert_eq!(b.emitter_mut().as_str(), "1 - (2 - 3)");
    }

    #[test]
    fn conditional_matches_ternary_shape() {
        let program = Program::new();
        let mut b = backend(&program);
        let expr = Expr::Conditional {
            cond: Box::new(Expr::Literal {
                value: Literal::Bool(true),
                ty: Type::Bool,
            }),
            on_true: Box::new(Expr::Literal {
                value: Literal::Int(1),
                ty: Type::Numeric(Numeric::I32),
            }),
            on_false: Box::new(Expr::Literal {
                value: Literal::Int(2),
                ty: Type::Numeric(Numeric::I32),
            }),
            ty: Type::Numeric(Numeric::I32),
        };
        b.emit_expr_top(&expr).unwrap();
        assert_eq!(b.emitter_mut().as_str(), "true ? 1 : 2");
    }

    #[test]
    fn list_add_call_rewrites_to_push() {
        let program = Program::new();
        let mut b = backend(&program);
        let call = Expr::Call {
            callee: Box::new(Expr::Symbol(SymbolRef {
                path: vec!["this".into(), "items".into(), "Add".into()],
                ty: Type::Void,
            })),
            args: vec![Expr::Literal {
                value: Literal::Int(1),
                ty: Type::Numeric(Numeric::I32),
            }],
            ty: Type::Void,
        };
        b.emit_expr_top(&call).unwrap();
        assert_eq!(b.emitter_mut().as_str(), "this.items.push(1)");
    }

    fn symbol_call(receiver: &str, method: &str, receiver_ty: Type, args: Vec<Expr>) -> Expr {
        Expr::Call {
            callee: Box::new(Expr::Symbol(SymbolRef {
                path: vec!["this".into(), receiver.into(), method.into()],
                ty: receiver_ty,
            })),
            args,
            ty: Type::Void,
        }
    }

    #[test]
    fn contains_dispatches_to_has_for_a_set_and_includes_otherwise() {
        let program = Program::new();
        let arg = vec![Expr::Literal { value: Literal::Int(1), ty: Type::Numeric(Numeric::I32) }];

        let mut set_backend = backend(&program);
        let set_call = symbol_call("seen", "Contains", Type::HashSet(Box::new(Type::Numeric(Numeric::I32))), arg.clone());
        set_backend.emit_expr_top(&set_call).unwrap();
        assert_eq!(set_backend.emitter_mut().as_str(), "this.seen.has(1)");

        let mut list_backend = backend(&program);
        let list_call = symbol_call("items", "Contains", Type::List(Box::new(Type::Numeric(Numeric::I32))), arg);
        list_backend.emit_expr_top(&list_call).unwrap();
        assert_eq!(list_backend.emitter_mut().as_str(), "this.items.includes(1)");
    }

    #[test]
    fn remove_dispatches_to_delete_for_a_set_and_dict() {
        let program = Program::new();
        let arg = vec![Expr::Literal { value: Literal::Str("k".into()), ty: Type::String }];

        let mut set_backend = backend(&program);
        let set_call = symbol_call("seen", "Remove", Type::HashSet(Box::new(Type::String)), arg.clone());
        set_backend.emit_expr_top(&set_call).unwrap();
        assert_eq!(set_backend.emitter_mut().as_str(), "this.seen.delete(\"k\")");

        let mut dict_backend = backend(&program);
        let dict_call = symbol_call(
            "map",
            "Remove",
            Type::Dictionary(Box::new(Type::String), Box::new(Type::Numeric(Numeric::I32))),
            arg,
        );
        dict_backend.emit_expr_top(&dict_call).unwrap();
        assert_eq!(dict_backend.emitter_mut().as_str(), "delete this.map[\"k\"]");
    }

    #[test]
    fn clear_dispatches_per_backing() {
        let program = Program::new();

        let mut list_backend = backend(&program);
        let list_call = symbol_call("items", "Clear", Type::List(Box::new(Type::Numeric(Numeric::I32))), vec![]);
        list_backend.emit_expr_top(&list_call).unwrap();
        assert_eq!(list_backend.emitter_mut().as_str(), "this.items.length = 0");

        let mut set_backend = backend(&program);
        let set_call = symbol_call("seen", "Clear", Type::HashSet(Box::new(Type::String)), vec![]);
        set_backend.emit_expr_top(&set_call).unwrap();
        assert_eq!(set_backend.emitter_mut().as_str(), "this.seen.clear()");
    }

    #[test]
    fn sort_part_uses_the_list_helper_for_dynamic_array_backing() {
        let program = Program::new();
        let mut b = backend(&program);
        let args = vec![
            Expr::Literal { value: Literal::Int(0), ty: Type::Numeric(Numeric::I32) },
            Expr::Literal { value: Literal::Int(4), ty: Type::Numeric(Numeric::I32) },
        ];
        let call = symbol_call("items", "SortPart", Type::List(Box::new(Type::Numeric(Numeric::I32))), args);
        b.emit_expr_top(&call).unwrap();
        assert_eq!(b.emitter_mut().as_str(), "sortListPart(this.items, 0, 4)");
    }

    #[test]
    fn count_property_reads_through_size_access() {
        let program = Program::new();
        let mut b = backend(&program);
        let sym = Expr::Symbol(SymbolRef {
            path: vec!["this".into(), "items".into(), "Count".into()],
            ty: Type::List(Box::new(Type::Numeric(Numeric::I32))),
        });
        b.emit_expr_top(&sym).unwrap();
        assert_eq!(b.emitter_mut().as_str(), "this.items.length");

        let mut set_backend = backend(&program);
        let set_sym = Expr::Symbol(SymbolRef {
            path: vec!["this".into(), "seen".into(), "Count".into()],
            ty: Type::HashSet(Box::new(Type::String)),
        });
        set_backend.emit_expr_top(&set_sym).unwrap();
        assert_eq!(set_backend.emitter_mut().as_str(), "this.seen.size");
    }
}
