//! Identifier mangling hooks (spec §4.1 "Identifier mangling hooks",
//! §4.3.1 "Names").
//!
//! Case conversion is target-independent text transformation and lives
//! here as free functions. What's overridable per backend is the
//! *policy* — which casing a given kind of symbol gets, and which words
//! are reserved — captured by the [`NamePolicy`] trait so a backend can
//! override just the parts that differ from camelCase-with-keyword-
//! avoidance (spec §4.3.1) without re-implementing case conversion.

/// Converts a hyphen/underscore-separated or already-mixed-case source
/// identifier to camelCase.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for (i, c) in name.chars().enumerate() {
        if c == '_' || c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else if i == 0 {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

pub fn pascal_case(name: &str) -> String {
    let camel = camel_case(name);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// UPPER_SNAKE_CASE, used for in-method constants (spec §4.3.1: "prefixed
/// by `METHOD_NAME_`").
pub fn upper_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower_or_digit = false;
    for c in name.chars() {
        if c == '-' || c == '_' {
            out.push('_');
            prev_lower_or_digit = false;
            continue;
        }
        if c.is_uppercase() && prev_lower_or_digit {
            out.push('_');
        }
        out.extend(c.to_uppercase());
        prev_lower_or_digit = c.is_lowercase() || c.is_ascii_digit();
    }
    out
}

/// Appends `_` when `name` collides with a reserved word in the target,
/// per spec §4.1 "keyword-avoidance".
pub fn avoid_keyword(name: String, reserved: &[&str]) -> String {
    if reserved.contains(&name.as_str()) {
        format!("{name}_")
    } else {
        name
    }
}

/// Overridable policy for how a backend mangles each kind of symbol (spec
/// §4.1, §4.3.1). Default methods implement the common camelCase +
/// keyword-avoidance scheme; a backend overrides only what its target
/// needs to do differently.
pub trait NamePolicy {
    /// The target's reserved words, checked by `mangle_local`.
    fn reserved_words(&self) -> &[&'static str];

    /// Types, enums, classes, enum constants: verbatim name (spec
    /// §4.3.1).
    fn mangle_type_name(&self, name: &str) -> String {
        name.to_string()
    }

    /// Global, field, local, method names: camelCase with
    /// keyword-avoidance (spec §4.3.1).
    fn mangle_local(&self, name: &str) -> String {
        avoid_keyword(camel_case(name), self.reserved_words())
    }

    /// In-method constants: `METHOD_NAME_CONST` (spec §4.3.1).
    fn mangle_method_const(&self, method_name: &str, const_name: &str) -> String {
        format!("{}_{}", upper_snake(method_name), upper_snake(const_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_lowercases_first_segment() {
        assert_eq!(camel_case("my-field"), "myField");
        assert_eq!(camel_case("already_snake"), "alreadySnake");
        assert_eq!(camel_case("Simple"), "simple");
    }

    #[test]
    fn pascal_case_uppercases_first_letter() {
        assert_eq!(pascal_case("my-class"), "MyClass");
    }

    #[test]
    fn upper_snake_inserts_underscore_at_case_boundaries() {
        assert_eq!(upper_snake("maxValue"), "MAX_VALUE");
        assert_eq!(upper_snake("already-snake"), "ALREADY_SNAKE");
    }

    #[test]
    fn avoid_keyword_appends_underscore_on_collision() {
        assert_eq!(avoid_keyword("class".into(), &["class", "new"]), "class_");
        assert_eq!(avoid_keyword("value".into(), &["class", "new"]), "value");
    }
}
