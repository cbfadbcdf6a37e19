//! Statement emission (spec §4.3.6 array storage, §4.3.12 foreach,
//! §4.3.13 string switch, §4.4 assert/lock/throw).

use xlate_ast::{ForEachVars, LocalVar, Stmt, SwitchCase, Type};

use crate::error::{GenError, GenResult};
use crate::naming::NamePolicy;
use crate::precedence::Priority;

use super::control::{self, KeySort};
use super::names::JsNamePolicy;
use super::JsBackend;

fn is_numeric_ty(ty: &Type) -> bool {
    matches!(ty, Type::Numeric(_) | Type::Range(_))
}

impl<'a> JsBackend<'a> {
    pub(crate) fn emit_block(&mut self, stmts: &[Stmt]) -> GenResult<()> {
        for s in stmts {
            self.emit_stmt(s)?;
        }
        Ok(())
    }

    /// Renders one statement's text without a trailing separator, for a
    /// `for (...)` header's init/advance clause.
    fn capture_stmt(&mut self, stmt: &Stmt) -> GenResult<String> {
        let start = self.emitter_mut().as_str().len();
        self.emit_stmt(stmt)?;
        let mut text = self.emitter_mut().as_str()[start..].to_string();
        self.emitter_mut().truncate(start);
        while text.ends_with('\n') {
            text.pop();
        }
        if text.ends_with(';') {
            text.pop();
        }
        Ok(text)
    }

    fn emit_stmt(&mut self, stmt: &Stmt) -> GenResult<()> {
        match stmt {
            Stmt::Block(inner) => {
                self.emitter_mut().open_block();
                self.emit_block(inner)?;
                self.emitter_mut().close_block();
            }
            Stmt::Local(local) => self.emit_local(local)?,
            Stmt::Const { name, value, .. } => {
                let mangled = self.mangle_method_const(name);
                self.emitter_mut().write_str(&format!("const {mangled} = "));
                self.emit_expr(value, Priority::Assign)?;
                self.emitter_mut().writeln(";");
            }
            Stmt::Assign { target, value } => {
                self.emit_expr(target, Priority::Assign)?;
                self.emitter_mut().write_str(" = ");
                self.emit_expr(value, Priority::Assign)?;
                self.emitter_mut().writeln(";");
            }
            Stmt::If {
                cond,
                then_branch,
                else_branch,
            } => self.emit_if(cond, then_branch, else_branch.as_deref())?,
            Stmt::While { cond, body } => self.emit_while(cond, body)?,
            Stmt::DoWhile { body, cond } => self.emit_do_while(body, cond)?,
            Stmt::For {
                init,
                cond,
                advance,
                body,
            } => self.emit_for(init.as_deref(), cond.as_ref(), advance.as_deref(), body)?,
            Stmt::ForEach {
                vars,
                collection,
                body,
            } => self.emit_foreach(vars, collection, body)?,
            Stmt::Switch {
                scrutinee,
                cases,
                default,
            } => self.emit_switch(scrutinee, cases, default.as_deref())?,
            Stmt::Break => {
                let target = self.current_break_target().map(str::to_owned);
                match target {
                    Some(label) => self.emitter_mut().writeln(&format!("break {label};")),
                    None => self.emitter_mut().writeln("break;"),
                }
            }
            Stmt::Continue => self.emitter_mut().writeln("continue;"),
            Stmt::Return(value) => match value {
                Some(e) => {
                    self.emitter_mut().write_str("return ");
                    self.emit_expr(e, Priority::Assign)?;
                    self.emitter_mut().writeln(";");
                }
                None => self.emitter_mut().writeln("return;"),
            },
            Stmt::Throw(e) => {
                self.emitter_mut().write_str("throw ");
                if matches!(e.ty(), Type::String) {
                    self.emitter_mut().write_str("new Error(");
                    self.emit_expr(e, Priority::Assign)?;
                    self.emitter_mut().write_str(")");
                } else {
                    self.emit_expr(e, Priority::Assign)?;
                }
                self.emitter_mut().writeln(";");
            }
            Stmt::Lock { .. } => {
                return Err(GenError::unsupported(
                    "lock statement (no synchronization primitive on a single-threaded target)",
                ));
            }
            Stmt::Assert { cond, message } => {
                self.emitter_mut().write_str("console.assert(");
                self.emit_expr(cond, Priority::Assign)?;
                if let Some(m) = message {
                    self.emitter_mut().write_str(", ");
                    self.emit_expr(m, Priority::Assign)?;
                }
                self.emitter_mut().writeln(");");
            }
            Stmt::Expr(e) => {
                self.emit_expr(e, Priority::Statement)?;
                self.emitter_mut().writeln(";");
            }
        }
        Ok(())
    }

    fn emit_local(&mut self, local: &LocalVar) -> GenResult<()> {
        let policy = JsNamePolicy;
        let name = policy.mangle_local(&local.name);
        if let Type::Array(elem, len) = &local.ty {
            return self.emit_array_storage_init(&format!("let {name}"), elem, &len.to_string(), 0);
        }
        self.emitter_mut().write_str(&format!("let {name}"));
        if let Some(init) = &local.init {
            self.emitter_mut().write_str(" = ");
            self.emit_expr(init, Priority::Assign)?;
        }
        self.emitter_mut().writeln(";");
        Ok(())
    }

    fn emit_if(&mut self, cond: &xlate_ast::Expr, then_branch: &[Stmt], else_branch: Option<&[Stmt]>) -> GenResult<()> {
        self.emitter_mut().write_str("if (");
        self.emit_expr(cond, Priority::Statement)?;
        self.emitter_mut().write_str(") ");
        self.emitter_mut().open_block();
        self.emit_block(then_branch)?;
        match else_branch {
            Some(else_body) => {
                self.emitter_mut().close_block_continue("else");
                self.emitter_mut().open_block();
                self.emit_block(else_body)?;
                self.emitter_mut().close_block();
            }
            None => self.emitter_mut().close_block(),
        }
        Ok(())
    }

    fn emit_while(&mut self, cond: &xlate_ast::Expr, body: &[Stmt]) -> GenResult<()> {
        self.emitter_mut().write_str("while (");
        self.emit_expr(cond, Priority::Statement)?;
        self.emitter_mut().write_str(") ");
        self.emitter_mut().open_block();
        self.push_break_target(None);
        self.emit_block(body)?;
        self.pop_break_target();
        self.emitter_mut().close_block();
        Ok(())
    }

    fn emit_do_while(&mut self, body: &[Stmt], cond: &xlate_ast::Expr) -> GenResult<()> {
        self.emitter_mut().write_str("do ");
        self.emitter_mut().open_block();
        self.push_break_target(None);
        self.emit_block(body)?;
        self.pop_break_target();
        let cond_text = self.capture_expr(cond, Priority::Statement)?;
        self.emitter_mut()
            .close_block_continue(&format!("while ({cond_text});"));
        self.emitter_mut().newline();
        Ok(())
    }

    fn emit_for(
        &mut self,
        init: Option<&Stmt>,
        cond: Option<&xlate_ast::Expr>,
        advance: Option<&Stmt>,
        body: &[Stmt],
    ) -> GenResult<()> {
        let init_text = match init {
            Some(s) => self.capture_stmt(s)?,
            None => String::new(),
        };
        let cond_text = match cond {
            Some(c) => self.capture_expr(c, Priority::Statement)?,
            None => String::new(),
        };
        let advance_text = match advance {
            Some(s) => self.capture_stmt(s)?,
            None => String::new(),
        };
        self.emitter_mut()
            .write_str(&format!("for ({init_text}; {cond_text}; {advance_text}) "));
        self.emitter_mut().open_block();
        self.push_break_target(None);
        self.emit_block(body)?;
        self.pop_break_target();
        self.emitter_mut().close_block();
        Ok(())
    }

    fn emit_foreach(&mut self, vars: &ForEachVars, collection: &xlate_ast::Expr, body: &[Stmt]) -> GenResult<()> {
        let policy = JsNamePolicy;
        let collection_text = self.capture_expr(collection, Priority::Postfix)?;
        let header = match vars {
            ForEachVars::One(local) => {
                let var = policy.mangle_local(&local.name);
                control::foreach_one(&var, &collection_text)
            }
            ForEachVars::Two(key, value) => {
                let key_var = policy.mangle_local(&key.name);
                let value_var = policy.mangle_local(&value.name);
                let key_is_numeric = is_numeric_ty(&key.ty);
                let sorted = match collection.ty() {
                    Type::SortedDictionary(..) => Some(if key_is_numeric {
                        KeySort::Numeric
                    } else {
                        KeySort::String
                    }),
                    _ => None,
                };
                control::foreach_two_dict(&key_var, &value_var, &collection_text, key_is_numeric, sorted)
            }
        };
        self.emitter_mut().write_str(&header);
        self.emitter_mut().open_block();
        self.push_break_target(None);
        self.emit_block(body)?;
        self.pop_break_target();
        self.emitter_mut().close_block();
        Ok(())
    }

    /// A numeric/enum switch lowers to a native JS `switch`; a string
    /// switch lowers to an `if`/`else if`/`else` chain wrapped in a
    /// labeled block when any case needs to break out of an enclosing
    /// loop (spec §4.3.13).
    fn emit_switch(&mut self, scrutinee: &xlate_ast::Expr, cases: &[SwitchCase], default: Option<&[Stmt]>) -> GenResult<()> {
        if matches!(scrutinee.ty(), Type::String) {
            self.emit_string_switch(scrutinee, cases, default)
        } else {
            self.emit_native_switch(scrutinee, cases, default)
        }
    }

    fn emit_native_switch(&mut self, scrutinee: &xlate_ast::Expr, cases: &[SwitchCase], default: Option<&[Stmt]>) -> GenResult<()> {
        self.emitter_mut().write_str("switch (");
        self.emit_expr(scrutinee, Priority::Statement)?;
        self.emitter_mut().write_str(") ");
        self.emitter_mut().open_block();
        self.push_break_target(None);
        for case in cases {
            for value in &case.values {
                let text = self.capture_expr(value, Priority::Statement)?;
                self.emitter_mut().writeln(&format!("case {text}:"));
            }
            self.emit_block(&case.body)?;
        }
        if let Some(default_body) = default {
            self.emitter_mut().writeln("default:");
            self.emit_block(default_body)?;
        }
        self.pop_break_target();
        self.emitter_mut().close_block();
        Ok(())
    }

    fn emit_string_switch(&mut self, scrutinee: &xlate_ast::Expr, cases: &[SwitchCase], default: Option<&[Stmt]>) -> GenResult<()> {
        let mut bodies: Vec<&[Stmt]> = cases.iter().map(|c| c.body.as_slice()).collect();
        if let Some(d) = default {
            bodies.push(d);
        }
        let needs_label = control::needs_break_label(&bodies);
        let label = if needs_label {
            Some(self.next_switch_label())
        } else {
            None
        };
        if let Some(l) = &label {
            self.emitter_mut().write_str(&format!("{l}: "));
            self.emitter_mut().open_block();
        }
        self.push_break_target(label.clone());

        let scrutinee_text = self.capture_expr(scrutinee, Priority::Equality)?;
        let mut case_texts: Vec<(String, &[Stmt])> = Vec::with_capacity(cases.len());
        for case in cases {
            let mut conds = Vec::with_capacity(case.values.len());
            for v in &case.values {
                let v_text = self.capture_expr(v, Priority::Equality)?;
                conds.push(format!("{scrutinee_text} === {v_text}"));
            }
            case_texts.push((conds.join(" || "), case.body.as_slice()));
        }

        let last = case_texts.len().saturating_sub(1);
        for (i, (cond_text, body)) in case_texts.iter().enumerate() {
            let keyword = if i == 0 { "if" } else { "else if" };
            self.emitter_mut()
                .write_str(&format!("{keyword} ({cond_text}) "));
            self.emitter_mut().open_block();
            self.emit_block(body)?;
            if i < last {
                self.emitter_mut().close_block_continue("");
            } else if default.is_some() {
                self.emitter_mut().close_block_continue("else");
                self.emitter_mut().open_block();
                self.emit_block(default.unwrap())?;
                self.emitter_mut().close_block();
            } else {
                self.emitter_mut().close_block();
            }
        }

        self.pop_break_target();
        if label.is_some() {
            self.emitter_mut().close_block();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xlate_ast::{Expr, Literal, Program};

    fn backend(program: &Program) -> JsBackend<'_> {
        JsBackend::new(program, None)
    }

    fn bool_lit(v: bool) -> Expr {
        Expr::Literal {
            value: Literal::Bool(v),
            ty: Type::Bool,
        }
    }

    #[test]
    fn if_else_chains_on_the_same_line() {
        let program = Program::new();
        let mut b = backend(&program);
        let stmt = Stmt::If {
            cond: bool_lit(true),
            then_branch: vec![Stmt::Break],
            else_branch: Some(vec![Stmt::Continue]),
        };
        b.emit_block(std::slice::from_ref(&stmt)).unwrap();
        let out = b.emitter_mut().as_str().to_string();
        assert!(out.contains("} else {"));
    }

    #[test]
    fn lock_statement_is_unsupported() {
        let program = Program::new();
        let mut b = backend(&program);
        let stmt = Stmt::Lock {
            guard: bool_lit(true),
            body: vec![],
        };
        let err = b.emit_block(std::slice::from_ref(&stmt)).unwrap_err();
        assert!(err.to_string().contains("lock"));
    }

    #[test]
    fn do_while_places_condition_after_closing_brace() {
        let program = Program::new();
        let mut b = backend(&program);
        let stmt = Stmt::DoWhile {
            body: vec![Stmt::Break],
            cond: bool_lit(false),
        };
        b.emit_block(std::slice::from_ref(&stmt)).unwrap();
        let out = b.emitter_mut().as_str().to_string();
        assert!(out.contains("} while (false);"));
    }

    #[test]
    fn string_switch_with_break_gets_a_label() {
        let program = Program::new();
        let mut b = backend(&program);
        let stmt = Stmt::Switch {
            scrutinee: Expr::Literal {
                value: Literal::Str("a".into()),
                ty: Type::String,
            },
            cases: vec![SwitchCase {
                values: vec![Expr::Literal {
                    value: Literal::Str("a".into()),
                    ty: Type::String,
                }],
                body: vec![Stmt::Break],
            }],
            default: None,
        };
        b.emit_block(std::slice::from_ref(&stmt)).unwrap();
        let out = b.emitter_mut().as_str().to_string();
        assert!(out.contains("ciafterswitch0: {"));
        assert!(out.contains("break ciafterswitch0;"));
    }

    #[test]
    fn numeric_switch_uses_native_switch() {
        let program = Program::new();
        let mut b = backend(&program);
        let stmt = Stmt::Switch {
            scrutinee: Expr::Literal {
                value: Literal::Int(1),
                ty: Type::Numeric(xlate_ast::Numeric::I32),
            },
            cases: vec![SwitchCase {
                values: vec![Expr::Literal {
                    value: Literal::Int(1),
                    ty: Type::Numeric(xlate_ast::Numeric::I32),
                }],
                body: vec![Stmt::Break],
            }],
            default: None,
        };
        b.emit_block(std::slice::from_ref(&stmt)).unwrap();
        let out = b.emitter_mut().as_str().to_string();
        assert!(out.contains("switch (1)"));
        assert!(out.contains("case 1:"));
    }
}
