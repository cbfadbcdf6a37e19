//! Regex lowering (spec §4.3.8).

/// Un-escapes the source language's `\\` and escapes `/` so a literal
/// pattern string can be spelled between `/`...`/` delimiters (spec
/// §4.3.8: "Pattern from a literal string").
pub fn literal_pattern_body(source_pattern: &str) -> String {
    let unescaped = source_pattern.replace("\\\\", "\\");
    unescaped.replace('/', "\\/")
}

/// `i`/`m`/`s` map to JS's own `i`/`m`/`s` flags unchanged (spec §4.3.8
/// "Flag bits map"); this function exists as the single place that
/// mapping is spelled out, even though it's currently the identity, so a
/// future flag that *doesn't* share JS's letter has one place to land.
pub fn map_flags(source_flags: &str) -> String {
    source_flags
        .chars()
        .filter(|c| matches!(c, 'i' | 'm' | 's'))
        .collect()
}

pub fn literal_regex(source_pattern: &str, source_flags: &str) -> String {
    format!("/{}/{}", literal_pattern_body(source_pattern), map_flags(source_flags))
}

pub fn dynamic_regex(expr_text: &str, source_flags: &str) -> String {
    format!("new RegExp({expr_text}, \"{}\")", map_flags(source_flags))
}

pub fn is_match_literal(subject_expr: &str, source_pattern: &str, source_flags: &str) -> String {
    format!("{}.test({subject_expr})", literal_regex(source_pattern, source_flags))
}

pub fn is_match_compiled(regex_expr: &str, subject_expr: &str) -> String {
    format!("{regex_expr}.test({subject_expr})")
}

/// `Match.Find` assigns into the match-result variable and tests it
/// against `null`, already parenthesized per spec §4.3.8 (the assignment
/// expression's own priority is lower than most parent contexts).
pub fn match_find(match_var: &str, subject_expr: &str, source_pattern: &str, source_flags: &str) -> String {
    format!(
        "({match_var} = {}.exec({subject_expr})) != null",
        literal_regex(source_pattern, source_flags)
    )
}

pub fn capture(match_var: &str, index_expr: &str) -> String {
    format!("{match_var}[{index_expr}]")
}

pub fn start(match_var: &str) -> String {
    format!("{match_var}.index")
}

pub fn end(match_var: &str) -> String {
    format!("{match_var}.index + {match_var}[0].length")
}

pub fn value(match_var: &str) -> String {
    format!("{match_var}[0]")
}

pub fn length(match_var: &str) -> String {
    format!("{match_var}[0].length")
}

/// The regex metacharacters `Regex.Escape` must backslash-escape (spec
/// §4.3.8: "escapes the regex metacharacters").
pub const REGEX_METACHARS: &str = "-/\\^$*+?.()|[]{}";
