use std::rc::Rc;

use crate::{
    ast::Expr,
    error::ExecuteError,
    interpreter::{
        evaluator::core::{self, EvalResult},
        types::VariableType,
        value::Value,
    },
};

/// Builds the nested array produced by `new T[e1][e2]...[en]`.
///
/// The outer-to-inner dimensions are exactly the written sizes, and every
/// innermost element is the zero value of the element type. Each dimension
/// expression is evaluated when its level is built and must produce a
/// non-negative integer.
///
/// # Errors
/// Returns [`ExecuteError::NegativeArraySize`] when a dimension evaluates
/// to a negative size, and propagates any error from evaluating a
/// dimension expression.
pub fn eval_new_array(element_type: VariableType, dimensions: &[Expr]) -> EvalResult<Value> {
    debug_assert!(!dimensions.is_empty());
    build_level(element_type, 0, dimensions)
}

/// Builds one nesting level of the array.
fn build_level(element_type: VariableType,
               dimension: usize,
               dimensions: &[Expr])
               -> EvalResult<Value> {
    let size_expr = &dimensions[dimension];
    let size = match core::evaluate(size_expr)? {
        Value::Integer(n) => n,
        _ => unreachable!("dimension types were checked at parse time"),
    };
    if size < 0 {
        return Err(ExecuteError::NegativeArraySize { size,
                                                     line: size_expr.line(),
                                                     column: size_expr.column(), }.into());
    }
    let length = usize::try_from(size).unwrap_or(0);

    let mut elements = Vec::with_capacity(length);
    if dimension == dimensions.len() - 1 {
        for _ in 0..length {
            elements.push(Value::zero_of(element_type));
        }
    } else {
        for _ in 0..length {
            elements.push(build_level(element_type, dimension + 1, dimensions)?);
        }
    }
    Ok(Value::Array(Rc::new(elements)))
}
