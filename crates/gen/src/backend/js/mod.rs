//! The JS target backend (spec §4.3): the one fully implemented
//! backend, targeting a dynamically-typed, garbage-collected host with
//! no native unsigned or fixed-width integers.

pub mod bridges;
pub mod classes;
pub mod collections;
pub mod control;
pub mod expr;
pub mod helpers;
pub mod integers;
pub mod names;
pub mod regexp;
pub mod stmt;
pub mod strings;

use std::cell::Cell;

use xlate_ast::{ArenaId, ClassDecl, Program};

use crate::emitter::Emitter;
use crate::error::GenResult;
use crate::precedence::Priority;

/// One target backend instance, owned exclusively by one generation pass
/// (spec §5: "owned exclusively by one backend instance"). Holds exactly
/// the state Design Notes §9 allows: indentation (inside `Emitter`),
/// current-method context, helper registrations (inside `Emitter`), and
/// the output stream (`Emitter`'s buffer) — no process-wide singletons.
pub struct JsBackend<'a> {
    program: &'a Program,
    emitter: Emitter,
    #[allow(dead_code)]
    namespace: Option<String>,
    /// The enclosing method's mangled name, used to prefix in-method
    /// constants (spec §4.3.1: `METHOD_NAME_CONST`).
    current_method: Option<String>,
    /// The class currently being emitted, so a `base.m(...)` call (spec
    /// §4.3.14) knows which prototype chain to call through.
    current_class: Option<String>,
    /// Counter for `ciafterswitchN` labels (spec §4.3.13).
    switch_label_counter: usize,
    /// `Some(label)` when a `break` at the current nesting level should
    /// target a synthesized switch-exit label rather than an enclosing
    /// loop; pushed/popped as statement emission descends into loops and
    /// labeled switches.
    break_target_stack: Vec<Option<String>>,
    /// Fires the `ulong`-collapse warning (spec §9 Open Question) once
    /// per generator instance rather than once per occurrence.
    warned_64bit_once: Cell<bool>,
}

impl<'a> JsBackend<'a> {
    pub fn new(program: &'a Program, namespace: Option<&str>) -> Self {
        JsBackend {
            program,
            emitter: Emitter::new(),
            namespace: namespace.map(str::to_owned),
            current_method: None,
            current_class: None,
            switch_label_counter: 0,
            break_target_stack: Vec::new(),
            warned_64bit_once: Cell::new(false),
        }
    }

    pub fn class_name(&self, id: ArenaId<ClassDecl>) -> &str {
        &self.program.class(id).name
    }

    /// Logs the 64-bit fallback warning exactly once per instance (spec
    /// §9 Open Question; ambient logging per `SPEC_FULL.md` §4).
    pub(crate) fn warn_64bit_fallback_once(&self) {
        if !self.warned_64bit_once.replace(true) {
            tracing::warn!(
                "64-bit integer lowered to Float64; values above 2^53 lose precision, \
                 and `ulong` is treated identically to `uint` wherever bit 32+ would matter"
            );
        }
    }

    pub(crate) fn next_switch_label(&mut self) -> String {
        let label = control::after_switch_label(self.switch_label_counter);
        self.switch_label_counter += 1;
        label
    }

    pub(crate) fn push_break_target(&mut self, target: Option<String>) {
        self.break_target_stack.push(target);
    }

    pub(crate) fn pop_break_target(&mut self) {
        self.break_target_stack.pop();
    }

    pub(crate) fn current_break_target(&self) -> Option<&str> {
        self.break_target_stack.last().and_then(|t| t.as_deref())
    }

    pub(crate) fn current_class_name(&self) -> Option<&str> {
        self.current_class.as_deref()
    }

    pub(crate) fn set_current_class(&mut self, name: Option<String>) {
        self.current_class = name;
    }

    /// Writes `program` to a complete JS file (spec §6 "Output": first
    /// non-blank line `"use strict";`, top-level declarations in source
    /// order, then the helper/resource object when non-empty, trailing
    /// newline required).
    pub fn write(mut self, program: &Program) -> GenResult<String> {
        self.emitter.writeln("\"use strict\";");
        for top in &program.order {
            match *top {
                xlate_ast::TopLevel::Class(id) => {
                    tracing::debug!(class = %self.class_name(id), "emitting class");
                    classes::emit_class(&mut self, program.class(id))?;
                }
                xlate_ast::TopLevel::Enum(id) => {
                    let en = program.enum_decl(id);
                    tracing::debug!(enum_name = %en.name, "emitting enum");
                    classes::emit_enum(&mut self, en)?;
                }
            }
        }
        helpers::write_ci_object(&mut self.emitter, &program.resources);
        Ok(self.emitter.into_output())
    }

    pub(crate) fn emitter_mut(&mut self) -> &mut Emitter {
        &mut self.emitter
    }
}

/// A statement-position expression is never parenthesized (spec §4.1).
pub(crate) const STATEMENT_PRIORITY: Priority = Priority::Statement;
