//! Collection semantics (spec §4.3.4).
//!
//! Each function returns the emitted call text and, where the mapping
//! needs a runtime helper, that helper's registration name — the caller
//! registers it with `Emitter::register_helper` so it only gets emitted
//! once, in lexicographic order (spec §4.3.11, §8 "Helper uniqueness").

use xlate_ast::Type;

/// Whether a collection backs onto a JS typed array (`Array<T>`/
/// `ArrayPtr<T>` of numeric `T`) or a plain dynamic array/object (spec
/// §4.3.4 table).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backing {
    DynamicArray,
    TypedArray,
    Set,
    PlainMapObject,
}

/// Maps a receiver's resolved `Type` to its JS backing (spec §4.3.4
/// table). `None` for a type that isn't one of the container families —
/// a caller falls back to the generic method-call emission in that case.
pub fn backing_for_type(ty: &Type) -> Option<Backing> {
    match ty {
        Type::HashSet(_) => Some(Backing::Set),
        Type::Dictionary(_, _) | Type::SortedDictionary(_, _) => Some(Backing::PlainMapObject),
        Type::List(_) | Type::Stack(_) => Some(Backing::DynamicArray),
        Type::Array(elem, _) | Type::ArrayPtr(elem) => Some(if elem.is_numeric() {
            Backing::TypedArray
        } else {
            Backing::DynamicArray
        }),
        _ => None,
    }
}

pub fn size_access(receiver: &str, backing: Backing) -> String {
    match backing {
        Backing::Set => format!("{receiver}.size"),
        Backing::PlainMapObject => format!("Object.keys({receiver}).length"),
        Backing::DynamicArray | Backing::TypedArray => format!("{receiver}.length"),
    }
}

pub fn clear_stmt(receiver: &str, backing: Backing) -> String {
    match backing {
        Backing::DynamicArray => format!("{receiver}.length = 0;"),
        Backing::Set => format!("{receiver}.clear();"),
        Backing::PlainMapObject => format!(
            "for (const k of Object.keys({receiver})) delete {receiver}[k];"
        ),
        Backing::TypedArray => format!("{receiver}.fill(0);"),
    }
}

pub fn list_add(receiver: &str, value: &str) -> String {
    format!("{receiver}.push({value})")
}

pub fn list_insert(receiver: &str, index: &str, value: &str) -> String {
    format!("{receiver}.splice({index}, 0, {value})")
}

pub fn list_remove_at(receiver: &str, index: &str) -> String {
    format!("{receiver}.splice({index}, 1)")
}

pub fn list_remove_range(receiver: &str, index: &str, count: &str) -> String {
    format!("{receiver}.splice({index}, {count})")
}

pub fn list_contains(receiver: &str, value: &str) -> String {
    format!("{receiver}.includes({value})")
}

pub fn stack_peek(receiver: &str) -> String {
    format!("{receiver}.at(-1)")
}

pub fn set_contains(receiver: &str, value: &str) -> String {
    format!("{receiver}.has({value})")
}

pub fn set_remove(receiver: &str, value: &str) -> String {
    format!("{receiver}.delete({value})")
}

pub fn dict_contains_key(receiver: &str, key: &str) -> String {
    format!("{receiver}.hasOwnProperty({key})")
}

pub fn dict_remove_stmt(receiver: &str, key: &str) -> String {
    format!("delete {receiver}[{key}];")
}

pub fn sort_all(receiver: &str) -> String {
    format!("{receiver}.sort((a, b) => a - b)")
}

/// `list.SortPart(off, len)`: a `List` needs the `sortListPart` helper
/// (slice → sort → write back); a typed array can sort a `subarray` view
/// in place (spec §4.3.4).
pub fn sort_part(receiver: &str, offset: &str, len: &str, backing: Backing) -> (String, Option<&'static str>) {
    match backing {
        Backing::TypedArray => (
            format!("{receiver}.subarray({offset}, {offset} + {len}).sort()"),
            None,
        ),
        _ => (
            format!("sortListPart({receiver}, {offset}, {len})"),
            Some("sortListPart"),
        ),
    }
}

/// `Array.CopyTo(srcOff, dst, dstOff, len)`: the `copyArray` helper
/// prefers `set(subarray(...))` when both sides are typed arrays and
/// falls back to an index loop otherwise (spec §4.3.4).
pub fn copy_to(src: &str, src_off: &str, dst: &str, dst_off: &str, len: &str) -> (String, &'static str) {
    (
        format!("copyArray({src}, {src_off}, {dst}, {dst_off}, {len})"),
        "copyArray",
    )
}

pub fn fill(receiver: &str, value: &str) -> String {
    format!("{receiver}.fill({value})")
}

pub fn fill_range(receiver: &str, value: &str, offset: &str, len: &str) -> String {
    format!("{receiver}.fill({value}, {offset}, {offset} + {len})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use xlate_ast::Numeric;

    #[test]
    fn backing_for_type_distinguishes_set_from_list() {
        let list = Type::List(Box::new(Type::Numeric(Numeric::I32)));
        let set = Type::HashSet(Box::new(Type::String));
        let dict = Type::Dictionary(Box::new(Type::String), Box::new(Type::Numeric(Numeric::I32)));
        assert_eq!(backing_for_type(&list), Some(Backing::DynamicArray));
        assert_eq!(backing_for_type(&set), Some(Backing::Set));
        assert_eq!(backing_for_type(&dict), Some(Backing::PlainMapObject));
        assert_eq!(backing_for_type(&Type::Bool), None);
    }

    #[test]
    fn backing_for_type_picks_typed_array_for_numeric_elements() {
        let numeric_array = Type::Array(Box::new(Type::Numeric(Numeric::U8)), 4);
        let class_array = Type::Array(Box::new(Type::String), 4);
        assert_eq!(backing_for_type(&numeric_array), Some(Backing::TypedArray));
        assert_eq!(backing_for_type(&class_array), Some(Backing::DynamicArray));
    }

    #[test]
    fn size_access_matches_each_backing() {
        assert_eq!(size_access("xs", Backing::DynamicArray), "xs.length");
        assert_eq!(size_access("s", Backing::Set), "s.size");
        assert_eq!(
            size_access("d", Backing::PlainMapObject),
            "Object.keys(d).length"
        );
    }

    #[test]
    fn sort_part_picks_helper_for_non_typed_backing() {
        let (text, helper) = sort_part("xs", "0", "4", Backing::DynamicArray);
        assert_eq!(text, "sortListPart(xs, 0, 4)");
        assert_eq!(helper, Some("sortListPart"));

        let (text2, helper2) = sort_part("xs", "0", "4", Backing::TypedArray);
        assert_eq!(text2, "xs.subarray(0, 0 + 4).sort()");
        assert_eq!(helper2, None);
    }

    #[test]
    fn list_methods_map_to_native_array_methods() {
        assert_eq!(list_add("xs", "1"), "xs.push(1)");
        assert_eq!(list_insert("xs", "0", "1"), "xs.splice(0, 0, 1)");
        assert_eq!(list_remove_at("xs", "0"), "xs.splice(0, 1)");
        assert_eq!(stack_peek("xs"), "xs.at(-1)");
    }
}
