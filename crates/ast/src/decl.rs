//! Top-level declarations (spec §3 "Top-level").

use crate::arena::{Arena, ArenaId};
use crate::expr::Expr;
use crate::resource::ResourceMap;
use crate::stmt::Stmt;
use crate::types::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Internal,
    Private,
}

#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: Type,
}

#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: Type,
    pub init: Option<Expr>,
    pub visibility: Visibility,
    pub is_static: bool,
}

#[derive(Debug, Clone)]
pub struct Method {
    pub name: String,
    pub params: Vec<Param>,
    pub return_ty: Type,
    pub body: Vec<Stmt>,
    pub visibility: Visibility,
    pub is_static: bool,
    pub is_abstract: bool,
}

#[derive(Debug, Clone)]
pub struct ConstDecl {
    pub name: String,
    pub ty: Type,
    pub value: Expr,
    pub visibility: Visibility,
}

/// An array-constant initializer owned by a class, e.g. a `static const
/// int[] Table = {1, 2, 3};` (spec §3 "Top-level").
#[derive(Debug, Clone)]
pub struct ArrayConst {
    pub name: String,
    pub element_ty: Type,
    pub values: Vec<Expr>,
    pub visibility: Visibility,
}

#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub name: String,
    /// Filled in lazily by the resolver once the base class's own arena
    /// slot exists (spec §3 "Lifecycle"; Design Notes "cyclic AST
    /// references").
    pub base: Option<ArenaId<ClassDecl>>,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
    pub consts: Vec<ConstDecl>,
    pub array_consts: Vec<ArrayConst>,
}

#[derive(Debug, Clone)]
pub struct EnumDecl {
    /// Constant name to integer value, in declaration order (spec §4.3.3:
    /// "a frozen object literal ... in declaration order").
    pub constants: Vec<(String, i64)>,
    pub name: String,
}

/// A top-level declaration slot, preserving the source order of classes
/// and enums interleaved (spec §3: "an ordered sequence of Enum and Class
/// declarations").
#[derive(Debug, Clone, Copy)]
pub enum TopLevel {
    Class(ArenaId<ClassDecl>),
    Enum(ArenaId<EnumDecl>),
}

/// The fully resolved program handed to a backend's entry point (spec §2
/// "Data flow", §6 "Inputs").
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub classes: Arena<ClassDecl>,
    pub enums: Arena<EnumDecl>,
    pub order: Vec<TopLevel>,
    pub resources: ResourceMap,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    pub fn add_class(&mut self, class: ClassDecl) -> ArenaId<ClassDecl> {
        let id = self.classes.push(class);
        self.order.push(TopLevel::Class(id));
        id
    }

    pub fn add_enum(&mut self, en: EnumDecl) -> ArenaId<EnumDecl> {
        let id = self.enums.push(en);
        self.order.push(TopLevel::Enum(id));
        id
    }

    pub fn class(&self, id: ArenaId<ClassDecl>) -> &ClassDecl {
        self.classes.get(id)
    }

    pub fn enum_decl(&self, id: ArenaId<EnumDecl>) -> &EnumDecl {
        self.enums.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_class_preserves_declaration_order_against_enums() {
        let mut program = Program::new();
        let enum_id = program.add_enum(EnumDecl {
            name: "Color".into(),
            constants: vec![("RED".into(), 0)],
        });
        let class_id = program.add_class(ClassDecl {
            name: "Foo".into(),
            base: None,
            fields: Vec::new(),
            methods: Vec::new(),
            consts: Vec::new(),
            array_consts: Vec::new(),
        });
        assert!(matches!(program.order[0], TopLevel::Enum(id) if id == enum_id));
        assert!(matches!(program.order[1], TopLevel::Class(id) if id == class_id));
    }

    #[test]
    fn base_class_resolves_through_arena_id() {
        let mut program = Program::new();
        let base_id = program.add_class(ClassDecl {
            name: "Bar".into(),
            base: None,
            fields: Vec::new(),
            methods: Vec::new(),
            consts: Vec::new(),
            array_consts: Vec::new(),
        });
        let derived_id = program.add_class(ClassDecl {
            name: "Foo".into(),
            base: Some(base_id),
            fields: Vec::new(),
            methods: Vec::new(),
            consts: Vec::new(),
            array_consts: Vec::new(),
        });
        let derived = program.class(derived_id);
        let base = program.class(derived.base.unwrap());
        assert_eq!(base.name, "Bar");
    }
}
