//! UTF-8, console, and environment bridges (spec §4.3.9, §4.3.10).

/// `UTF8.GetByteCount(s)` → encode via a `TextEncoder` and read `.length`
/// (spec §4.3.9).
pub fn utf8_byte_count(s_expr: &str) -> String {
    format!("new TextEncoder().encode({s_expr}).length")
}

/// `UTF8.GetBytes(s, buf, off)` → `encodeInto` into `buf.subarray(off)`,
/// or directly into `buf` when `off` is the literal `0` (spec §4.3.9).
pub fn utf8_get_bytes(s_expr: &str, buf_expr: &str, offset_expr: &str) -> String {
    if offset_expr == "0" {
        format!("new TextEncoder().encodeInto({s_expr}, {buf_expr})")
    } else {
        format!(
            "new TextEncoder().encodeInto({s_expr}, {buf_expr}.subarray({offset_expr}))"
        )
    }
}

/// `UTF8.GetString(buf, off, len)` → decode `buf.subarray(off, off+len)`
/// (spec §4.3.9).
pub fn utf8_get_string(buf_expr: &str, offset_expr: &str, len_expr: &str) -> String {
    format!(
        "new TextDecoder().decode({buf_expr}.subarray({offset_expr}, {offset_expr} + {len_expr}))"
    )
}

/// `Console.Write`/`Console.WriteLine` both map to `console.log`, or
/// `console.error` when the receiver is stderr (spec §4.3.10).
pub fn console_write(args_joined: &str, is_stderr: bool) -> String {
    let method = if is_stderr { "error" } else { "log" };
    format!("console.{method}({args_joined})")
}

/// Environment-variable reads use bracket indexing unless `name` is a
/// plain identifier, in which case dotted access is used (spec §4.3.10).
pub fn env_read(name: &str) -> String {
    if is_plain_identifier(name) {
        format!("process.env.{name}")
    } else {
        format!("process.env[\"{name}\"]")
    }
}

fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_write_picks_log_or_error() {
        assert_eq!(console_write("\"hi\"", false), "console.log(\"hi\")");
        assert_eq!(console_write("\"hi\"", true), "console.error(\"hi\")");
    }

    #[test]
    fn env_read_prefers_dotted_access_for_plain_identifiers() {
        assert_eq!(env_read("HOME"), "process.env.HOME");
        assert_eq!(env_read("MY-VAR"), "process.env[\"MY-VAR\"]");
    }

    #[test]
    fn utf8_get_bytes_skips_subarray_at_offset_zero() {
        assert_eq!(
            utf8_get_bytes("s", "buf", "0"),
            "new TextEncoder().encodeInto(s, buf)"
        );
        assert_eq!(
            utf8_get_bytes("s", "buf", "off"),
            "new TextEncoder().encodeInto(s, buf.subarray(off))"
        );
    }
}
