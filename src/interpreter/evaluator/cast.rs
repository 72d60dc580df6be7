use crate::{
    error::TypeError,
    interpreter::{evaluator::core::EvalResult, types::VariableType, value::Value},
};

/// Evaluates a cast of a value to a target type.
///
/// The matrix of allowed casts:
///
/// - every identity cast returns the value unchanged;
/// - `int` to `float` converts exactly;
/// - `float` to `int` truncates toward zero (saturating at the `i32`
///   range boundaries, with NaN mapping to zero);
/// - `char` to `int` widens the byte.
///
/// Everything else is a type error. The check happens here rather than at
/// parse time because only here is the operand's value, and with it the
/// precise variant, at hand.
///
/// # Errors
/// Returns [`TypeError::InvalidCast`] for a pair outside the matrix.
pub fn eval_cast(target: VariableType,
                 value: &Value,
                 line: usize,
                 column: usize)
                 -> EvalResult<Value> {
    if value.variable_type() == target {
        return Ok(value.clone());
    }

    match (value, target) {
        (Value::Integer(n), VariableType::Floating) => Ok(Value::Floating(f64::from(*n))),
        #[allow(clippy::cast_possible_truncation)]
        (Value::Floating(x), VariableType::Integer) => Ok(Value::Integer(*x as i32)),
        (Value::Character(c), VariableType::Integer) => Ok(Value::Integer(i32::from(*c))),
        _ => Err(TypeError::InvalidCast { from: value.variable_type(),
                                          to: target,
                                          line,
                                          column }.into()),
    }
}
