use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{arithmetic, bitwise, comparison},
            core::EvalResult,
        },
        value::Value,
    },
};

/// Evaluates a binary operation between two already-evaluated values.
///
/// This function routes the operation to a specialized handler depending
/// on the operator class. The logical operators never arrive here: they
/// short-circuit in the expression dispatcher before their right operand
/// is evaluated.
///
/// Operand combinations outside the operator tables are unreachable
/// because the parser rejected them at construction.
///
/// # Errors
/// Returns an execute error for division by zero and negative shift
/// counts.
pub fn eval_binary(op: BinaryOperator,
                   lhs: &Value,
                   rhs: &Value,
                   line: usize,
                   column: usize)
                   -> EvalResult<Value> {
    use BinaryOperator::{
        Add, BitAnd, BitOr, BitXor, Divide, Equal, Greater, GreaterEqual, Less, LessEqual,
        LogicalAnd, LogicalOr, Modulo, Multiply, NotEqual, ShiftLeft, ShiftRight, Subtract,
    };

    match op {
        Add | Subtract | Multiply | Divide => {
            arithmetic::eval_arithmetic(op, lhs, rhs, line, column)
        },
        Modulo => arithmetic::eval_modulo(lhs, rhs, line, column),
        BitAnd | BitOr | BitXor | ShiftLeft | ShiftRight => {
            bitwise::eval_bitwise(op, lhs, rhs, line, column)
        },
        Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => {
            comparison::eval_comparison(op, lhs, rhs)
        },
        LogicalAnd | LogicalOr => unreachable!("logical operators short-circuit before dispatch"),
    }
}
