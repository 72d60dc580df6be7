use crate::{
    ast::{BinaryOperator, Expr},
    error::Error,
    interpreter::{
        evaluator::{array, binary, cast, unary},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// Evaluation can fail with an execute error (division by zero, negative
/// shift count, negative array size) or a type error (a cast the matrix
/// forbids), so the error side is the umbrella [`Error`].
pub type EvalResult<T> = Result<T, Error>;

/// The control-flow signal every statement execution produces.
///
/// `Normal` falls through to the next statement. `Broken` and `Continued`
/// unwind to the nearest enclosing loop, which absorbs them. `Returned`
/// unwinds all the way out, carrying the returned value alongside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteState {
    /// Execution fell through; continue with the next statement.
    Normal,
    /// A `break` is unwinding to the nearest loop.
    Broken,
    /// A `continue` is unwinding to the nearest loop.
    Continued,
    /// A `return` is unwinding out of the program.
    Returned,
}

/// Evaluates an expression and returns the resulting value.
///
/// This is the main entry point for expression evaluation. The evaluator
/// dispatches on the expression variant: literals return their value,
/// logical operators short-circuit before their right operand is touched,
/// and every other binary node evaluates both operands left to right
/// before dispatching on the pair of value variants.
///
/// The returned value's variant always equals the expression's static
/// type.
///
/// # Errors
/// Returns an execute error for division by zero, a negative shift count,
/// or a negative array dimension, and a type error for a forbidden cast.
pub fn evaluate(expr: &Expr) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value, .. } => Ok(value.clone()),
        Expr::Binary { op, lhs, rhs, line, column, .. } => match op {
            BinaryOperator::LogicalAnd | BinaryOperator::LogicalOr => {
                binary::logic::eval_short_circuit(*op, lhs, rhs)
            },
            _ => {
                let lhs_value = evaluate(lhs)?;
                let rhs_value = evaluate(rhs)?;
                binary::core::eval_binary(*op, &lhs_value, &rhs_value, *line, *column)
            },
        },
        Expr::Unary { op, operand, .. } => {
            let value = evaluate(operand)?;
            unary::eval_unary(*op, &value)
        },
        Expr::Cast { target, operand, line, column } => {
            let value = evaluate(operand)?;
            cast::eval_cast(*target, &value, *line, *column)
        },
        Expr::NewArray { element_type, dimensions, .. } => {
            array::eval_new_array(*element_type, dimensions)
        },
    }
}
