//! Name mangling for the JS backend (spec §4.3.1 "Names").

use crate::naming::NamePolicy;

/// JS reserved words plus a handful of identifiers that would shadow
/// globals the generated code depends on (`Ci`, `arguments`).
pub const JS_RESERVED: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
    "do", "else", "export", "extends", "finally", "for", "function", "if", "import", "in",
    "instanceof", "new", "return", "super", "switch", "this", "throw", "try", "typeof", "var",
    "void", "while", "with", "yield", "let", "static", "await", "arguments", "eval", "Ci",
];

pub struct JsNamePolicy;

impl NamePolicy for JsNamePolicy {
    fn reserved_words(&self) -> &[&'static str] {
        JS_RESERVED
    }
}

/// Qualifies a member reference per spec §4.3.1: class-scoped constants
/// as `ClassName.CONSTANT`, static methods as `ClassName.method`,
/// instance methods as `ClassName.prototype.method`.
pub enum MemberQualifier {
    This,
    Static { class_name: String },
    Instance { class_name: String },
}

impl MemberQualifier {
    pub fn prefix(&self) -> String {
        match self {
            MemberQualifier::This => "this.".to_string(),
            MemberQualifier::Static { class_name } => format!("{class_name}."),
            MemberQualifier::Instance { class_name } => format!("{class_name}.prototype."),
        }
    }
}
