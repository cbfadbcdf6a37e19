//! Interpolated-string formatting (spec §4.3.7).
//!
//! Each interpolated literal becomes a template literal; these functions
//! compute the chain of method calls a formatted `{arg, width, format,
//! precision}` part needs, in the fixed order width/format/precision
//! demand: format+precision first (they produce the string), then width
//! padding last (spec §8 scenario 3: `.toString(16).toUpperCase()
//! .padStart(2, "0").padStart(5)`).

/// The numeric-format method chain for `format` (`E`/`e`, `F`/`f`, `X`/`x`,
/// `D`/`d`) with an optional `precision` (spec §4.3.7).
pub fn format_chain(format: char, precision: Option<u32>) -> String {
    let upper = format.is_uppercase();
    let mut chain = match format.to_ascii_uppercase() {
        'E' => format!(".toExponential({})", precision.unwrap_or(6)),
        'F' => format!(".toFixed({})", precision.unwrap_or(6)),
        'X' => ".toString(16)".to_string(),
        'D' => ".toString()".to_string(),
        _ => ".toString()".to_string(),
    };
    if upper && matches!(format.to_ascii_uppercase(), 'E' | 'X') {
        chain.push_str(".toUpperCase()");
    }
    // Precision for D/d/X/x additionally zero-pads (spec §4.3.7); E/e and
    // F/f already encode precision as digits-after-decimal above.
    if matches!(format.to_ascii_uppercase(), 'D' | 'X') {
        if let Some(p) = precision {
            chain.push_str(&format!(".padStart({p}, \"0\")"));
        }
    }
    chain
}

/// The width-padding call: positive width pads the start, negative pads
/// the end (spec §4.3.7).
pub fn width_chain(width: i32) -> String {
    if width >= 0 {
        format!(".padStart({width})")
    } else {
        format!(".padEnd({})", -width)
    }
}

/// Escapes literal text inside a template literal: backtick and `${`
/// (spec §4.3.7 "Literal text inside the template escapes ` and ${").
pub fn escape_template_literal_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '`' => out.push_str("\\`"),
            '\\' => out.push_str("\\\\"),
            '$' if chars.peek() == Some(&'{') => out.push_str("\\${"),
            _ => out.push(c),
        }
    }
    out
}
