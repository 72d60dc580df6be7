use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates an equality or relational comparison.
///
/// Numeric operands compare across the integer/floating divide by
/// promoting the integer side to `f64`; strings compare lexicographically,
/// characters by code point, and booleans support equality only (the
/// parser never builds an ordered comparison of booleans).
///
/// # Errors
/// Comparison itself cannot fail; the `Result` keeps the handler signature
/// uniform with the other operator classes.
pub fn eval_comparison(op: BinaryOperator, lhs: &Value, rhs: &Value) -> EvalResult<Value> {
    let outcome = match (lhs, rhs) {
        (Value::Integer(a), Value::Integer(b)) => compare(op, a, b),
        (Value::Integer(a), Value::Floating(b)) => compare(op, &f64::from(*a), b),
        (Value::Floating(a), Value::Integer(b)) => compare(op, a, &f64::from(*b)),
        (Value::Floating(a), Value::Floating(b)) => compare(op, a, b),
        (Value::Boolean(a), Value::Boolean(b)) => compare(op, a, b),
        (Value::String(a), Value::String(b)) => compare(op, a.as_str(), b.as_str()),
        (Value::Character(a), Value::Character(b)) => compare(op, a, b),
        _ => unreachable!("operand types were checked at parse time"),
    };
    Ok(Value::Boolean(outcome))
}

/// Applies one comparison operator to an ordered pair.
fn compare<T: PartialOrd + ?Sized>(op: BinaryOperator, lhs: &T, rhs: &T) -> bool {
    match op {
        BinaryOperator::Equal => lhs == rhs,
        BinaryOperator::NotEqual => lhs != rhs,
        BinaryOperator::Less => lhs < rhs,
        BinaryOperator::LessEqual => lhs <= rhs,
        BinaryOperator::Greater => lhs > rhs,
        BinaryOperator::GreaterEqual => lhs >= rhs,
        _ => unreachable!("comparison handler received a non-comparison operator"),
    }
}
