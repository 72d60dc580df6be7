use crate::{
    ast::BinaryOperator,
    error::ExecuteError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a bitwise operator or a shift between two integers.
///
/// Shifts check the evaluated count for negativity first and only then
/// reduce it modulo 32, so `x << -1` is an error even though `-1 % 32`
/// would be representable. `>>` is an arithmetic shift: the sign bit fills
/// in from the left.
///
/// # Errors
/// Returns [`ExecuteError::NegativeShiftCount`] when the right operand of
/// a shift is negative.
pub fn eval_bitwise(op: BinaryOperator,
                    lhs: &Value,
                    rhs: &Value,
                    line: usize,
                    column: usize)
                    -> EvalResult<Value> {
    use BinaryOperator::{BitAnd, BitOr, BitXor, ShiftLeft, ShiftRight};

    match (lhs, rhs) {
        (Value::Integer(a), Value::Integer(b)) => match op {
            BitAnd => Ok(Value::Integer(a & b)),
            BitOr => Ok(Value::Integer(a | b)),
            BitXor => Ok(Value::Integer(a ^ b)),
            ShiftLeft | ShiftRight => {
                if *b < 0 {
                    return Err(ExecuteError::NegativeShiftCount { count: *b,
                                                                  line,
                                                                  column }.into());
                }
                let count = b % 32;
                if op == ShiftLeft {
                    Ok(Value::Integer(a << count))
                } else {
                    Ok(Value::Integer(a >> count))
                }
            },
            _ => unreachable!(),
        },
        _ => unreachable!("operand types were checked at parse time"),
    }
}
