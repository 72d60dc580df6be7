use crate::{
    ast::{Expr, Stmt},
    interpreter::{
        evaluator::core::{self, EvalResult, ExecuteState},
        value::Value,
    },
};

/// Executes a statement and returns its control-flow outcome.
///
/// Expression statements evaluate their expression and fall through.
/// Blocks run their children in order and stop at the first non-normal
/// state, forwarding it. Loops absorb `Broken` (finishing normally) and
/// `Continued` (moving on to the next iteration), and forward `Returned`
/// with its value.
///
/// # Errors
/// Propagates any error raised while evaluating contained expressions.
pub fn execute(stmt: &Stmt) -> EvalResult<(ExecuteState, Option<Value>)> {
    match stmt {
        Stmt::Expression { expr, .. } => {
            core::evaluate(expr)?;
            Ok((ExecuteState::Normal, None))
        },
        Stmt::Block { statements, .. } => {
            for statement in statements {
                let (state, value) = execute(statement)?;
                if state != ExecuteState::Normal {
                    return Ok((state, value));
                }
            }
            Ok((ExecuteState::Normal, None))
        },
        Stmt::For { init,
                    condition,
                    update,
                    body,
                    .. } => {
            core::evaluate(init)?;
            loop {
                if !condition_holds(condition)? {
                    return Ok((ExecuteState::Normal, None));
                }
                let (state, value) = execute(body)?;
                match state {
                    ExecuteState::Broken => return Ok((ExecuteState::Normal, None)),
                    ExecuteState::Returned => return Ok((ExecuteState::Returned, value)),
                    ExecuteState::Continued | ExecuteState::Normal => {
                        core::evaluate(update)?;
                    },
                }
            }
        },
        Stmt::While { condition, body, .. } => loop {
            if !condition_holds(condition)? {
                return Ok((ExecuteState::Normal, None));
            }
            let (state, value) = execute(body)?;
            match state {
                ExecuteState::Broken => return Ok((ExecuteState::Normal, None)),
                ExecuteState::Returned => return Ok((ExecuteState::Returned, value)),
                ExecuteState::Continued | ExecuteState::Normal => {},
            }
        },
        Stmt::Break { .. } => Ok((ExecuteState::Broken, None)),
        Stmt::Continue { .. } => Ok((ExecuteState::Continued, None)),
        Stmt::Return { expr, .. } => match expr {
            Some(expr) => {
                let value = core::evaluate(expr)?;
                Ok((ExecuteState::Returned, Some(value)))
            },
            None => Ok((ExecuteState::Returned, None)),
        },
    }
}

/// Evaluates a loop condition down to its boolean.
fn condition_holds(condition: &Expr) -> EvalResult<bool> {
    match core::evaluate(condition)? {
        Value::Boolean(b) => Ok(b),
        _ => unreachable!("loop conditions were checked boolean at parse time"),
    }
}
