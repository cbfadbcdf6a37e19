//! The typed layer (spec §4.2): maps the input language's numeric types
//! to the closest target numeric type.

use xlate_ast::{Numeric, RangeType, Type};

/// A concrete fixed-width numeric tag, chosen from a `Type` by
/// [`type_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCode {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Single,
    Double,
}

impl TypeCode {
    pub fn is_unsigned(self) -> bool {
        matches!(
            self,
            TypeCode::UInt8 | TypeCode::UInt16 | TypeCode::UInt32 | TypeCode::UInt64
        )
    }

    pub fn is_narrower_than_32(self) -> bool {
        matches!(
            self,
            TypeCode::Int8 | TypeCode::UInt8 | TypeCode::Int16 | TypeCode::UInt16
        )
    }

    fn promote_to_32(self) -> TypeCode {
        match self {
            TypeCode::Int8 | TypeCode::Int16 => TypeCode::Int32,
            TypeCode::UInt8 | TypeCode::UInt16 => TypeCode::UInt32,
            other => other,
        }
    }
}

/// Picks the narrowest signed or unsigned tag covering `range`'s bounds:
/// fully non-negative bounds pick the smallest unsigned tag, otherwise
/// the smallest signed tag covering both `lo` and `hi` (spec §4.2).
fn narrowest_for_range(range: RangeType) -> TypeCode {
    if range.is_non_negative() {
        let hi = range.hi as u64;
        if hi <= u8::MAX as u64 {
            TypeCode::UInt8
        } else if hi <= u16::MAX as u64 {
            TypeCode::UInt16
        } else if hi <= u32::MAX as u64 {
            TypeCode::UInt32
        } else {
            TypeCode::UInt64
        }
    } else if range.lo >= i8::MIN as i64 && range.hi <= i8::MAX as i64 {
        TypeCode::Int8
    } else if range.lo >= i16::MIN as i64 && range.hi <= i16::MAX as i64 {
        TypeCode::Int16
    } else if range.lo >= i32::MIN as i64 && range.hi <= i32::MAX as i64 {
        TypeCode::Int32
    } else {
        TypeCode::Int64
    }
}

fn code_for_numeric(n: Numeric) -> TypeCode {
    match n {
        Numeric::I8 => TypeCode::Int8,
        Numeric::I16 => TypeCode::Int16,
        Numeric::I32 => TypeCode::Int32,
        Numeric::I64 => TypeCode::Int64,
        Numeric::U8 => TypeCode::UInt8,
        Numeric::U16 => TypeCode::UInt16,
        Numeric::U32 => TypeCode::UInt32,
        Numeric::F32 => TypeCode::Single,
        Numeric::F64 => TypeCode::Double,
    }
}

/// Chooses a concrete fixed-width tag for `ty` (spec §4.2 "type_code").
/// `promote=true` widens everything below `Int32` to `Int32` (or `UInt32`)
/// for arithmetic contexts.
pub fn type_code(ty: &Type, promote: bool) -> Option<TypeCode> {
    let code = match ty {
        Type::Range(range) => narrowest_for_range(*range),
        Type::Numeric(n) => code_for_numeric(*n),
        _ => return None,
    };
    Some(if promote { code.promote_to_32() } else { code })
}

/// The target's typed-array element name for a numeric `Type` (spec
/// §4.2 "array_element_type"). Returns `None` for non-numeric element
/// types, which a backend stores as a plain (non-typed) array instead.
///
/// On the JS target, which has no 64-bit integer type, `Int64`/`UInt64`
/// fall back to `Float64Array` with documented loss of precision above
/// 2^53 (spec §4.2 note).
pub fn array_element_type(ty: &Type) -> Option<&'static str> {
    let code = type_code(ty, false)?;
    Some(match code {
        TypeCode::Int8 => "Int8Array",
        TypeCode::UInt8 => "Uint8Array",
        TypeCode::Int16 => "Int16Array",
        TypeCode::UInt16 => "Uint16Array",
        TypeCode::Int32 => "Int32Array",
        TypeCode::UInt32 => "Uint32Array",
        TypeCode::Single => "Float32Array",
        TypeCode::Double | TypeCode::Int64 | TypeCode::UInt64 => "Float64Array",
    })
}

/// True when `ty` loses precision above 2^53 when represented as the JS
/// target's `Float64Array` (spec §4.2 note, §9 open question on
/// `ulong`).
pub fn is_lossy_64bit_fallback(ty: &Type) -> bool {
    matches!(type_code(ty, false), Some(TypeCode::Int64) | Some(TypeCode::UInt64))
}
