//! The helper library and resource object (spec §4.3.11, §8 "Helper
//! uniqueness", "Resource ordering").
//!
//! A helper is registered the first time a construct needs it
//! (`Emitter::register_helper`) and the whole set, plus every embedded
//! resource, is written once at end-of-file into a single `Ci` object —
//! helpers first in lexicographic order, then resources in sorted key
//! order (spec §8 scenario 6: resources are "positioned after all
//! helpers").

use xlate_ast::ResourceMap;

use crate::emitter::Emitter;

/// The JS source for a registered helper, as an object-method shorthand
/// body (no trailing comma — the caller adds one between entries).
pub fn helper_source(name: &str) -> &'static str {
    match name {
        "copyArray" => {
            "copyArray(src, srcOff, dst, dstOff, len) {\n    if (ArrayBuffer.isView(src) && ArrayBuffer.isView(dst)) {\n      dst.set(src.subarray(srcOff, srcOff + len), dstOff);\n    } else {\n      for (let i = 0; i < len; i++) dst[dstOff + i] = src[srcOff + i];\n    }\n  }"
        }
        "sortListPart" => {
            "sortListPart(list, off, len) {\n    const part = list.slice(off, off + len).sort((a, b) => a - b);\n    for (let i = 0; i < len; i++) list[off + i] = part[i];\n  }"
        }
        "regexEscape" => {
            "regexEscape(s) {\n    return s.replace(/[-/\\\\^$*+?.()|[\\]{}]/g, \"\\\\$&\");\n  }"
        }
        other => unreachable!("no helper source registered for '{other}'"),
    }
}

/// A byte array as a JS typed-array literal (spec §8 scenario 6: `new
/// Uint8Array([ ...bytes... ])`).
pub fn resource_literal(bytes: &[u8]) -> String {
    let items: Vec<String> = bytes.iter().map(u8::to_string).collect();
    format!("new Uint8Array([{}])", items.join(", "))
}

/// Writes the trailing `const Ci = { ... };` object, if there is anything
/// to put in it (spec §5: "written exactly once per program at
/// end-of-file"). No-op when both the helper set and the resource map are
/// empty.
pub fn write_ci_object(emitter: &mut Emitter, resources: &ResourceMap) {
    let helpers: Vec<&str> = emitter.registered_helpers().collect();
    if helpers.is_empty() && resources.is_empty() {
        return;
    }
    emitter.write_str("const Ci = ");
    emitter.open_block();
    let mut entries: Vec<String> = helpers.iter().map(|h| helper_source(h).to_string()).collect();
    for (name, bytes) in resources.sorted() {
        let mangled = ResourceMap::mangle_name(name);
        entries.push(format!("{mangled}: {}", resource_literal(bytes)));
    }
    for (i, entry) in entries.iter().enumerate() {
        let suffix = if i + 1 == entries.len() { "" } else { "," };
        for (j, line) in entry.split('\n').enumerate() {
            if j == 0 {
                emitter.write_str(line);
            } else {
                emitter.newline();
                emitter.write_str(line);
            }
        }
        emitter.writeln(suffix);
    }
    emitter.close_block();
    emitter.writeln(";");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_literal_matches_scenario_6_shape() {
        assert_eq!(resource_literal(&[1, 2, 3]), "new Uint8Array([1, 2, 3])");
    }

    #[test]
    fn write_ci_object_omits_itself_when_nothing_registered() {
        let mut emitter = Emitter::new();
        write_ci_object(&mut emitter, &ResourceMap::new());
        assert_eq!(emitter.into_output(), "");
    }

    #[test]
    fn write_ci_object_orders_helpers_lexicographically_then_resources() {
        let mut emitter = Emitter::new();
        emitter.register_helper("sortListPart");
        emitter.register_helper("copyArray");
        let mut resources = ResourceMap::new();
        resources.insert("data/tile.bin", vec![1, 2, 3]);
        write_ci_object(&mut emitter, &resources);
        let out = emitter.into_output();
        let copy_at = out.find("copyArray(").unwrap();
        let sort_at = out.find("sortListPart(").unwrap();
        let resource_at = out.find("data_tile_bin").unwrap();
        assert!(copy_at < sort_at);
        assert!(sort_at < resource_at);
    }
}
