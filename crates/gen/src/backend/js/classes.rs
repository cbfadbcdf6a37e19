//! Class and enum emission (spec §4.3.2, §4.3.3).

use xlate_ast::{ClassDecl, EnumDecl, Field, Method, Type, Visibility};

use crate::emitter::induction_var_name;
use crate::error::GenResult;
use crate::naming::{upper_snake, NamePolicy};
use crate::precedence::Priority;
use crate::typed::array_element_type;

use super::names::JsNamePolicy;
use super::JsBackend;

/// Public/non-private, per spec §4.3.2 step 4 ("public/non-private
/// constants") — admits `Internal` alongside `Public`; only `Private`
/// stays out of the emitted class attributes.
fn is_public(v: Visibility) -> bool {
    !matches!(v, Visibility::Private)
}

/// Finds the user-declared constructor: a method whose name matches the
/// class name, by the same convention the source language's resolver
/// already enforces.
fn find_constructor(class: &ClassDecl) -> Option<&Method> {
    class.methods.iter().find(|m| m.name == class.name)
}

impl<'a> JsBackend<'a> {
    /// Emits one class per spec §4.3.2, steps 1-5 in order.
    pub fn emit_class_impl(&mut self, class: &ClassDecl) -> GenResult<()> {
        let policy = JsNamePolicy;
        self.set_current_class(Some(class.name.clone()));

        // 1 + 2: zero-arg constructor assigning field initializers /
        // mandatory array storage, then the user constructor body.
        self.emitter_mut().write_str(&format!("function {}(", class.name));
        self.emitter_mut().write_str(") ");
        self.emitter_mut().open_block();
        for field in &class.fields {
            if field.is_static {
                continue;
            }
            self.emit_field_init(field)?;
        }
        if let Some(ctor) = find_constructor(class) {
            self.current_method = Some(policy.mangle_local(&class.name));
            self.emit_block(&ctor.body)?;
            self.current_method = None;
        }
        self.emitter_mut().close_block();

        // 3: base prototype chain.
        if let Some(base_id) = class.base {
            let base_name = self.class_name(base_id).to_string();
            self.emitter_mut()
                .writeln(&format!("{}.prototype = new {base_name}();", class.name));
        }

        // 4: public constants and all array constants as class attributes.
        for c in &class.consts {
            if !is_public(c.visibility) {
                continue;
            }
            self.emitter_mut().write_str(&format!("{}.{} = ", class.name, c.name));
            self.emit_expr(&c.value, Priority::Assign)?;
            self.emitter_mut().writeln(";");
        }
        for arr in &class.array_consts {
            self.emitter_mut()
                .write_str(&format!("{}.{} = ", class.name, arr.name));
            self.emit_array_literal(&arr.values)?;
            self.emitter_mut().writeln(";");
        }
        for field in &class.fields {
            if field.is_static {
                self.emit_static_field(class, field)?;
            }
        }

        // 5: each non-abstract method.
        for method in &class.methods {
            if method.is_abstract || method.name == class.name {
                continue;
            }
            self.emit_method(class, method)?;
        }
        self.set_current_class(None);
        Ok(())
    }

    fn emit_field_init(&mut self, field: &Field) -> GenResult<()> {
        let policy = JsNamePolicy;
        let name = policy.mangle_local(&field.name);
        let lvalue = format!("this.{name}");
        if let Type::Array(elem, len) = &field.ty {
            self.emit_array_storage_init(&lvalue, elem, &len.to_string(), 0)?;
            return Ok(());
        }
        if let Some(init) = &field.init {
            self.emitter_mut().write_str(&format!("{lvalue} = "));
            self.emit_expr(init, Priority::Assign)?;
            self.emitter_mut().writeln(";");
        }
        Ok(())
    }

    /// A static field, emitted as a class attribute assignment alongside
    /// static methods (spec §4.3.2 step 4) rather than as an instance
    /// field initializer — array-typed statics get the same counted-loop
    /// storage init as an instance array field, just targeting the class
    /// name instead of `this`.
    fn emit_static_field(&mut self, class: &ClassDecl, field: &Field) -> GenResult<()> {
        let policy = JsNamePolicy;
        let name = policy.mangle_local(&field.name);
        let lvalue = format!("{}.{name}", class.name);
        if let Type::Array(elem, len) = &field.ty {
            return self.emit_array_storage_init(&lvalue, elem, &len.to_string(), 0);
        }
        if let Some(init) = &field.init {
            self.emitter_mut().write_str(&format!("{lvalue} = "));
            self.emit_expr(init, Priority::Assign)?;
            self.emitter_mut().writeln(";");
        }
        Ok(())
    }

    /// `{e1, e2, ...}` written as a JS array literal (spec §4.3 aggregate
    /// initializers; used for `ArrayConst` values).
    fn emit_array_literal(&mut self, elements: &[xlate_ast::Expr]) -> GenResult<()> {
        self.emitter_mut().write_str("[");
        for (i, e) in elements.iter().enumerate() {
            if i > 0 {
                self.emitter_mut().write_str(", ");
            }
            self.emit_expr(e, Priority::Assign)?;
        }
        self.emitter_mut().write_str("]");
        Ok(())
    }

    /// Array storage initialization (spec §4.3.6), nesting one counted
    /// loop per `Array<Array<...>>` level.
    pub(crate) fn emit_array_storage_init(
        &mut self,
        lvalue: &str,
        elem_ty: &Type,
        len_expr: &str,
        depth: usize,
    ) -> GenResult<()> {
        match elem_ty {
            Type::Numeric(_) | Type::Range(_) => {
                if let Some(elem_name) = array_element_type(elem_ty) {
                    if matches!(elem_ty, Type::Numeric(xlate_ast::Numeric::I64)) {
                        self.warn_64bit_fallback_once();
                    }
                    self.emitter_mut()
                        .writeln(&format!("{lvalue} = new {elem_name}({len_expr});"));
                }
                Ok(())
            }
            Type::Class(class_id) => {
                let class_name = self.class_name(*class_id).to_string();
                self.emitter_mut()
                    .writeln(&format!("{lvalue} = new Array({len_expr}).fill(null);"));
                let var = induction_var_name(depth);
                self.emitter_mut().open_loop("let", depth, len_expr);
                self.emitter_mut()
                    .writeln(&format!("{lvalue}[{var}] = new {class_name}();"));
                self.emitter_mut().close_block();
                Ok(())
            }
            Type::Array(inner, inner_len) => {
                self.emitter_mut()
                    .writeln(&format!("{lvalue} = new Array({len_expr}).fill(null);"));
                let var = induction_var_name(depth);
                self.emitter_mut().open_loop("let", depth, len_expr);
                let nested_lvalue = format!("{lvalue}[{var}]");
                self.emit_array_storage_init(&nested_lvalue, inner, &inner_len.to_string(), depth + 1)?;
                self.emitter_mut().close_block();
                Ok(())
            }
            other => Err(crate::error::GenError::unsupported(format!(
                "array element type {other:?}"
            ))),
        }
    }

    fn emit_method(&mut self, class: &ClassDecl, method: &Method) -> GenResult<()> {
        let policy = JsNamePolicy;
        let method_name = policy.mangle_local(&method.name);
        let qualifier = if method.is_static {
            format!("{}.{}", class.name, method_name)
        } else {
            format!("{}.prototype.{}", class.name, method_name)
        };
        let params: Vec<String> = method
            .params
            .iter()
            .map(|p| policy.mangle_local(&p.name))
            .collect();
        self.emitter_mut()
            .write_str(&format!("{qualifier} = function({}) ", params.join(", ")));
        self.emitter_mut().open_block();
        self.current_method = Some(method_name);
        self.emit_block(&method.body)?;
        self.current_method = None;
        self.emitter_mut().close_block();
        self.emitter_mut().writeln(";");
        Ok(())
    }

    /// In-method constant name, prefixed `METHOD_NAME_` (spec §4.3.1).
    pub(crate) fn mangle_method_const(&self, const_name: &str) -> String {
        match &self.current_method {
            Some(method) => format!("{}_{}", upper_snake(method), upper_snake(const_name)),
            None => upper_snake(const_name),
        }
    }

    /// Enums emit a frozen object literal, UPPER_SNAKE keys in
    /// declaration order (spec §4.3.3).
    pub fn emit_enum_impl(&mut self, en: &EnumDecl) -> GenResult<()> {
        self.emitter_mut()
            .write_str(&format!("const {} = Object.freeze(", en.name));
        self.emitter_mut().open_block();
        for (i, (name, value)) in en.constants.iter().enumerate() {
            let suffix = if i + 1 == en.constants.len() { "" } else { "," };
            self.emitter_mut()
                .writeln(&format!("{}: {value}{suffix}", upper_snake(name)));
        }
        self.emitter_mut().close_block();
        self.emitter_mut().writeln(");");
        Ok(())
    }
}

pub fn emit_class(backend: &mut JsBackend<'_>, class: &ClassDecl) -> GenResult<()> {
    backend.emit_class_impl(class)
}

pub fn emit_enum(backend: &mut JsBackend<'_>, en: &EnumDecl) -> GenResult<()> {
    backend.emit_enum_impl(en)
}

#[cfg(test)]
mod tests {
    use super::*;
    use xlate_ast::{ArrayConst, ConstDecl, Expr, Literal, Program};

    fn empty_class(name: &str) -> ClassDecl {
        ClassDecl {
            name: name.to_string(),
            base: None,
            fields: Vec::new(),
            methods: Vec::new(),
            consts: Vec::new(),
            array_consts: Vec::new(),
        }
    }

    #[test]
    fn emits_constructor_then_prototype_then_method_per_scenario_2() {
        let mut program = Program::new();
        let base_id = program.add_class(empty_class("Bar"));
        let mut derived = empty_class("Foo");
        derived.base = Some(base_id);
        derived.methods.push(Method {
            name: "baz".into(),
            params: Vec::new(),
            return_ty: Type::Void,
            body: Vec::new(),
            visibility: Visibility::Public,
            is_static: false,
            is_abstract: false,
        });
        let foo_id = program.add_class(derived);

        let mut backend = JsBackend::new(&program, None);
        emit_class(&mut backend, program.class(foo_id)).unwrap();
        let out = backend.emitter_mut().as_str().to_string();

        let ctor_at = out.find("function Foo()").unwrap();
        let proto_at = out.find("Foo.prototype = new Bar();").unwrap();
        let method_at = out.find("Foo.prototype.baz = function()").unwrap();
        assert!(ctor_at < proto_at);
        assert!(proto_at < method_at);
    }

    #[test]
    fn public_const_becomes_class_attribute() {
        let mut program = Program::new();
        let mut class = empty_class("Foo");
        class.consts.push(ConstDecl {
            name: "MAX".into(),
            ty: Type::Numeric(xlate_ast::Numeric::I32),
            value: Expr::Literal {
                value: Literal::Int(42),
                ty: Type::Numeric(xlate_ast::Numeric::I32),
            },
            visibility: Visibility::Public,
        });
        let id = program.add_class(class);
        let mut backend = JsBackend::new(&program, None);
        emit_class(&mut backend, program.class(id)).unwrap();
        assert!(backend.emitter_mut().as_str().contains("Foo.MAX = 42;"));
    }

    #[test]
    fn internal_const_becomes_class_attribute_but_private_does_not() {
        let mut program = Program::new();
        let mut class = empty_class("Foo");
        class.consts.push(ConstDecl {
            name: "INTERNAL_MAX".into(),
            ty: Type::Numeric(xlate_ast::Numeric::I32),
            value: Expr::Literal {
                value: Literal::Int(7),
                ty: Type::Numeric(xlate_ast::Numeric::I32),
            },
            visibility: Visibility::Internal,
        });
        class.consts.push(ConstDecl {
            name: "HIDDEN".into(),
            ty: Type::Numeric(xlate_ast::Numeric::I32),
            value: Expr::Literal {
                value: Literal::Int(9),
                ty: Type::Numeric(xlate_ast::Numeric::I32),
            },
            visibility: Visibility::Private,
        });
        let id = program.add_class(class);
        let mut backend = JsBackend::new(&program, None);
        emit_class(&mut backend, program.class(id)).unwrap();
        let out = backend.emitter_mut().as_str().to_string();
        assert!(out.contains("Foo.INTERNAL_MAX = 7;"));
        assert!(!out.contains("HIDDEN"));
    }

    #[test]
    fn static_field_is_emitted_as_class_attribute_not_constructor_init() {
        let mut program = Program::new();
        let mut class = empty_class("Foo");
        class.fields.push(Field {
            name: "instances".into(),
            ty: Type::Numeric(xlate_ast::Numeric::I32),
            init: Some(Expr::Literal {
                value: Literal::Int(0),
                ty: Type::Numeric(xlate_ast::Numeric::I32),
            }),
            visibility: Visibility::Public,
            is_static: true,
        });
        let id = program.add_class(class);
        let mut backend = JsBackend::new(&program, None);
        emit_class(&mut backend, program.class(id)).unwrap();
        let out = backend.emitter_mut().as_str().to_string();
        let ctor_at = out.find("function Foo()").unwrap();
        let ctor_end = out.find("Foo.instances = 0;").unwrap();
        assert!(ctor_at < ctor_end);
        // Not assigned inside the constructor body via `this.`.
        assert!(!out.contains("this.instances"));
    }

    #[test]
    fn array_const_is_emitted_as_attribute() {
        let mut program = Program::new();
        let mut class = empty_class("Foo");
        class.array_consts.push(ArrayConst {
            name: "TABLE".into(),
            element_ty: Type::Numeric(xlate_ast::Numeric::I32),
            values: vec![
                Expr::Literal {
                    value: Literal::Int(1),
                    ty: Type::Numeric(xlate_ast::Numeric::I32),
                },
                Expr::Literal {
                    value: Literal::Int(2),
                    ty: Type::Numeric(xlate_ast::Numeric::I32),
                },
            ],
            visibility: Visibility::Public,
        });
        let id = program.add_class(class);
        let mut backend = JsBackend::new(&program, None);
        emit_class(&mut backend, program.class(id)).unwrap();
        assert!(backend.emitter_mut().as_str().contains("Foo.TABLE = [1, 2];"));
    }

    #[test]
    fn enum_emits_frozen_object_in_declaration_order() {
        let program = Program::new();
        let backend_program = program;
        let mut backend = JsBackend::new(&backend_program, None);
        let en = EnumDecl {
            name: "Color".into(),
            constants: vec![("red".into(), 0), ("green".into(), 1)],
        };
        emit_enum(&mut backend, &en).unwrap();
        let out = backend.emitter_mut().as_str().to_string();
        assert!(out.contains("const Color = Object.freeze({"));
        let red_at = out.find("RED: 0").unwrap();
        let green_at = out.find("GREEN: 1").unwrap();
        assert!(red_at < green_at);
    }
}
