//! Integer semantics: the rewrite that matters (spec §4.3.5).
//!
//! The JS target has no fixed-width or unsigned integer type — every
//! number is an IEEE double. These functions decide what post-coercion
//! an operator needs to recover 32-bit integer semantics; the emitter
//! (`expr.rs`) is responsible for actually writing the coerced text.

use xlate_ast::BinaryOp;

use crate::typed::TypeCode;

/// The suffix appended after `*`, `/`, `%` to truncate the float result
/// back to a 32-bit integer (spec §4.3.5: "after *, /, % append ... to
/// recover the integer value").
///
/// Both signed and unsigned 32-bit operands use `| 0` here, not `>>> 0` —
/// `| 0` (`ToInt32`) is enough to truncate to 32 bits for *storage*; only
/// a later *comparison* of an unsigned value needs `>>> 0` to read the
/// bit pattern as a non-negative magnitude (spec §8 scenario 1, and see
/// [`comparison_coercion`] below).
pub fn arithmetic_coercion(op: BinaryOp, operand_code: Option<TypeCode>) -> Option<&'static str> {
    let code = operand_code?;
    if code.is_narrower_than_32() || matches!(code, TypeCode::Single | TypeCode::Double) {
        return None;
    }
    match op {
        BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => Some("| 0"),
        _ => None,
    }
}

/// `>>` lowers to `>>>` when the left operand is unsigned, `>>` otherwise
/// (spec §4.3.5).
pub fn shift_right_operator(left_is_unsigned_32: bool) -> &'static str {
    if left_is_unsigned_32 { ">>>" } else { ">>" }
}

/// Relational comparisons (`<`, `<=`, `>`, `>=`) of unsigned 32-bit values
/// must coerce both sides with `>>> 0` first, or a value whose top bit is
/// set would compare as negative (spec §4.3.5, §8 scenario 1).
pub fn comparison_needs_unsigned_coercion(op: BinaryOp, operand_code: Option<TypeCode>) -> bool {
    matches!(
        op,
        BinaryOp::Less | BinaryOp::LessOrEq | BinaryOp::Greater | BinaryOp::GreaterOrEq
    ) && matches!(operand_code, Some(code) if code.is_unsigned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_coercion_is_bitwise_or_zero_for_32_bit() {
        assert_eq!(
            arithmetic_coercion(BinaryOp::Mul, Some(TypeCode::UInt32)),
            Some("| 0")
        );
        assert_eq!(
            arithmetic_coercion(BinaryOp::Mul, Some(TypeCode::Int32)),
            Some("| 0")
        );
    }

    #[test]
    fn arithmetic_coercion_skips_floats_and_sub_32_bit() {
        assert_eq!(arithmetic_coercion(BinaryOp::Mul, Some(TypeCode::Double)), None);
        assert_eq!(arithmetic_coercion(BinaryOp::Mul, Some(TypeCode::UInt8)), None);
        assert_eq!(arithmetic_coercion(BinaryOp::Add, Some(TypeCode::UInt32)), None);
    }

    #[test]
    fn shift_right_picks_operator_by_signedness() {
        assert_eq!(shift_right_operator(true), ">>>");
        assert_eq!(shift_right_operator(false), ">>");
    }

    #[test]
    fn comparisons_of_unsigned_need_coercion_but_arithmetic_does_not() {
        assert!(comparison_needs_unsigned_coercion(
            BinaryOp::Less,
            Some(TypeCode::UInt32)
        ));
        assert!(!comparison_needs_unsigned_coercion(
            BinaryOp::Less,
            Some(TypeCode::Int32)
        ));
        assert!(!comparison_needs_unsigned_coercion(
            BinaryOp::Eq,
            Some(TypeCode::UInt32)
        ));
    }
}
