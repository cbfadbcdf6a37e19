//! `foreach` (spec §4.3.12), string `switch` (spec §4.3.13), and
//! base-method calls (spec §4.3.14).

use xlate_ast::Stmt;

/// How a two-iterand `foreach`'s dictionary key should be read back from
/// `Object.entries` (spec §4.3.12).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySort {
    Numeric,
    String,
}

pub fn foreach_one(var_name: &str, collection_expr: &str) -> String {
    format!("for (const {var_name} of {collection_expr}) ")
}

/// Two iterands over a dictionary: destructure from `Object.entries`; a
/// numeric key maps through `+e[0]`; a sorted dictionary chains `.sort`
/// using locale-compare for string keys or numeric diff for number keys
/// (spec §4.3.12, §8 scenario 5).
pub fn foreach_two_dict(
    key_var: &str,
    value_var: &str,
    dict_expr: &str,
    key_is_numeric: bool,
    sorted: Option<KeySort>,
) -> String {
    let mut pipeline = format!("Object.entries({dict_expr})");
    if key_is_numeric {
        pipeline.push_str(".map(e => [+e[0], e[1]])");
    }
    if let Some(sort) = sorted {
        let comparator = match sort {
            KeySort::Numeric => "(a, b) => a[0] - b[0]",
            KeySort::String => "(a, b) => a[0].localeCompare(b[0])",
        };
        pipeline.push_str(&format!(".sort({comparator})"));
    }
    format!("for (const [{key_var}, {value_var}] of {pipeline}) ")
}

/// `base.m(args)` has no `super` call to lean on once a class becomes a
/// constructor function plus a prototype chain, so it calls through the
/// prototype explicitly (spec §4.3.14).
pub fn base_method_call(class_name: &str, method_name: &str, args: &[String]) -> String {
    let mut call_args = vec!["this".to_string()];
    call_args.extend(args.iter().cloned());
    format!(
        "{class_name}.prototype.{method_name}.call({})",
        call_args.join(", ")
    )
}

/// Whether any of `switch`'s case/default bodies contains a `break` at
/// switch scope — i.e. one that, once the `switch` is rewritten to an
/// `if`/`else if`/`else` chain, would otherwise need to be recognized as
/// "exit the switch" rather than falling through to whatever loop
/// happens to enclose it (spec §4.3.13: "the backend emits a forward
/// label ... to simulate break-out-of-switch from within do-while").
/// Recurses into nested blocks and `if`/`else`, but not into nested
/// loops or switches, which consume their own `break`.
pub fn needs_break_label(bodies: &[&[Stmt]]) -> bool {
    bodies.iter().any(|body| body_has_switch_scope_break(body))
}

fn body_has_switch_scope_break(body: &[Stmt]) -> bool {
    body.iter().any(stmt_has_switch_scope_break)
}

fn stmt_has_switch_scope_break(stmt: &Stmt) -> bool {
    match stmt {
        Stmt::Break => true,
        Stmt::Block(inner) => body_has_switch_scope_break(inner),
        Stmt::If {
            then_branch,
            else_branch,
            ..
        } => {
            body_has_switch_scope_break(then_branch)
                || else_branch
                    .as_ref()
                    .is_some_and(|b| body_has_switch_scope_break(b))
        }
        // Loops and nested switches consume their own `break`.
        Stmt::While { .. }
        | Stmt::DoWhile { .. }
        | Stmt::For { .. }
        | Stmt::ForEach { .. }
        | Stmt::Switch { .. } => false,
        _ => false,
    }
}

/// A fresh, source-order-stable label name for the Nth string switch that
/// needs one (spec §4.3.13: `ciafterswitchN`).
pub fn after_switch_label(n: usize) -> String {
    format!("ciafterswitch{n}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use xlate_ast::{Expr, Literal, Type};

    #[test]
    fn foreach_two_dict_matches_scenario_5() {
        let text = foreach_two_dict("k", "v", "d", true, Some(KeySort::Numeric));
        assert_eq!(
            text,
            "for (const [k, v] of Object.entries(d).map(e => [+e[0], e[1]]).sort((a, b) => a[0] - b[0])) "
        );
    }

    #[test]
    fn base_method_call_threads_this_first() {
        let args = vec!["1".to_string(), "2".to_string()];
        assert_eq!(
            base_method_call("Foo", "baz", &args),
            "Foo.prototype.baz.call(this, 1, 2)"
        );
    }

    #[test]
    fn needs_break_label_true_for_direct_break_false_inside_nested_loop() {
        let direct = vec![Stmt::Break];
        assert!(needs_break_label(&[&direct]));

        let guarded = vec![Stmt::While {
            cond: Expr::Literal {
                value: Literal::Bool(true),
                ty: Type::Bool,
            },
            body: vec![Stmt::Break],
        }];
        assert!(!needs_break_label(&[&guarded]));
    }
}
