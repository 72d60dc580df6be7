use crate::{
    ast::UnaryOperator,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates a prefix operator on an already-evaluated operand.
///
/// Negating `i32::MIN` wraps, following the same convention as binary
/// integer arithmetic.
///
/// # Errors
/// Unary evaluation cannot fail; the `Result` keeps the handler signature
/// uniform with the other operator classes.
pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
    match (op, value) {
        (UnaryOperator::Negate, Value::Integer(n)) => Ok(Value::Integer(n.wrapping_neg())),
        (UnaryOperator::Negate, Value::Floating(x)) => Ok(Value::Floating(-x)),
        (UnaryOperator::LogicalNot, Value::Boolean(b)) => Ok(Value::Boolean(!b)),
        (UnaryOperator::BitNot, Value::Integer(n)) => Ok(Value::Integer(!n)),
        _ => unreachable!("operand types were checked at parse time"),
    }
}
