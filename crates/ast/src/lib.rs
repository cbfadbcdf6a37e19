//! Resolved AST data model for the xlate source-to-source translator.
//!
//! This crate is the data model code generation consumes (spec §2, stage
//! 1): typed nodes for expressions, statements, declarations and types,
//! plus the embedded-resource map and the documentation model. It is
//! produced by a parser and mutated only by a resolver; by the time a
//! `Program` reaches `xlate-gen` it is read-only (spec §3 "Lifecycle").
//!
//! # Modules
//!
//! - `arena`: index-based storage for symbols that reference each other
//!   cyclically (classes, methods).
//! - `types`: the `Type` variant, including the range type used to narrow
//!   numeric storage.
//! - `expr`: the expression sum type.
//! - `stmt`: the statement sum type.
//! - `decl`: top-level declarations (`Program`, `ClassDecl`, `EnumDecl`).
//! - `doc`: the structured doc-comment model rendered by the emitter
//!   base's documentation emitter.
//! - `resource`: the embedded binary resource map.

pub mod arena;
pub mod decl;
pub mod doc;
pub mod expr;
pub mod resource;
pub mod stmt;
pub mod types;

pub use arena::{Arena, ArenaId};
pub use decl::{ArrayConst, ClassDecl, ConstDecl, EnumDecl, Field, Method, Param, Program, TopLevel, Visibility};
pub use doc::{CodeDoc, DocBlock, Inline, Paragraph};
pub use expr::{BinaryOp, Expr, InterpolatedPart, Literal, SymbolRef, UnaryOp};
pub use resource::ResourceMap;
pub use stmt::{ForEachVars, LocalVar, Stmt, SwitchCase};
pub use types::{Numeric, RangeType, Type};
