use crate::{
    ast::BinaryOperator,
    error::ExecuteError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Evaluates an arithmetic operation.
///
/// Integer pairs stay in 32-bit arithmetic, wrapping on overflow; any pair
/// involving a floating operand is computed in `f64`; `+` additionally
/// concatenates two strings. Division checks the evaluated right operand
/// for zero in both numeric domains before dividing.
///
/// The operator must be `Add`, `Subtract`, `Multiply`, or `Divide`; `%`
/// has its own handler because only the integer pair is legal for it.
///
/// # Errors
/// Returns [`ExecuteError::DivisionByZero`] when dividing by `0` or `0.0`.
pub fn eval_arithmetic(op: BinaryOperator,
                       lhs: &Value,
                       rhs: &Value,
                       line: usize,
                       column: usize)
                       -> EvalResult<Value> {
    use BinaryOperator::{Add, Divide, Multiply, Subtract};

    match (lhs, rhs) {
        (Value::Integer(a), Value::Integer(b)) => match op {
            Add => Ok(Value::Integer(a.wrapping_add(*b))),
            Subtract => Ok(Value::Integer(a.wrapping_sub(*b))),
            Multiply => Ok(Value::Integer(a.wrapping_mul(*b))),
            Divide => {
                if *b == 0 {
                    Err(ExecuteError::DivisionByZero { line, column }.into())
                } else {
                    Ok(Value::Integer(a.wrapping_div(*b)))
                }
            },
            _ => unreachable!(),
        },
        (Value::Integer(a), Value::Floating(b)) => {
            eval_floating(op, f64::from(*a), *b, line, column)
        },
        (Value::Floating(a), Value::Integer(b)) => {
            eval_floating(op, *a, f64::from(*b), line, column)
        },
        (Value::Floating(a), Value::Floating(b)) => eval_floating(op, *a, *b, line, column),
        (Value::String(a), Value::String(b)) => {
            debug_assert_eq!(op, Add);
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::String(joined))
        },
        _ => unreachable!("operand types were checked at parse time"),
    }
}

/// Evaluates `%` between two integers.
///
/// The result follows the sign convention of the machine remainder, and
/// the computation wraps like the other integer operators.
///
/// # Errors
/// Returns [`ExecuteError::DivisionByZero`] when the right operand is `0`.
pub fn eval_modulo(lhs: &Value, rhs: &Value, line: usize, column: usize) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Integer(a), Value::Integer(b)) => {
            if *b == 0 {
                Err(ExecuteError::DivisionByZero { line, column }.into())
            } else {
                Ok(Value::Integer(a.wrapping_rem(*b)))
            }
        },
        _ => unreachable!("operand types were checked at parse time"),
    }
}

/// Computes one arithmetic operation in the floating domain.
fn eval_floating(op: BinaryOperator,
                 lhs: f64,
                 rhs: f64,
                 line: usize,
                 column: usize)
                 -> EvalResult<Value> {
    use BinaryOperator::{Add, Divide, Multiply, Subtract};

    Ok(Value::Floating(match op {
                           Add => lhs + rhs,
                           Subtract => lhs - rhs,
                           Multiply => lhs * rhs,
                           Divide => {
                               if rhs == 0.0 {
                                   return Err(ExecuteError::DivisionByZero { line, column }.into());
                               }
                               lhs / rhs
                           },
                           _ => unreachable!(),
                       }))
}
