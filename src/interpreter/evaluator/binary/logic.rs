use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::core::{self, EvalResult},
        value::Value,
    },
};

/// Evaluates a logical operator with short-circuiting.
///
/// The left operand is always evaluated. When it decides the result on its
/// own (`false` for `&&`, `true` for `||`), the right operand is never
/// evaluated, so none of its effects are observed; any error it would have
/// raised does not happen.
///
/// # Errors
/// Propagates errors from whichever operands are actually evaluated.
pub fn eval_short_circuit(op: BinaryOperator, lhs: &Expr, rhs: &Expr) -> EvalResult<Value> {
    let lhs_value = boolean_operand(core::evaluate(lhs)?);

    match op {
        BinaryOperator::LogicalAnd => {
            if lhs_value {
                let rhs_value = boolean_operand(core::evaluate(rhs)?);
                Ok(Value::Boolean(lhs_value && rhs_value))
            } else {
                Ok(Value::Boolean(false))
            }
        },
        BinaryOperator::LogicalOr => {
            if lhs_value {
                Ok(Value::Boolean(true))
            } else {
                let rhs_value = boolean_operand(core::evaluate(rhs)?);
                Ok(Value::Boolean(lhs_value || rhs_value))
            }
        },
        _ => unreachable!("logic handler received a non-logical operator"),
    }
}

/// Extracts the boolean from a logical operand's value.
fn boolean_operand(value: Value) -> bool {
    match value {
        Value::Boolean(b) => b,
        _ => unreachable!("logical operand types were checked at parse time"),
    }
}
