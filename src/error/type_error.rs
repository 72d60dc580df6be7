use crate::{
    ast::{BinaryOperator, UnaryOperator},
    interpreter::types::VariableType,
};

#[derive(Debug)]
/// Represents all errors raised when operand types violate the operator
/// rules of the language.
///
/// With one exception these are detected while the parser constructs the
/// syntax tree, so an ill-typed program never reaches evaluation. The
/// exception is [`TypeError::InvalidCast`]: the cast matrix is consulted at
/// evaluation time, after the operand's value is known.
pub enum TypeError {
    /// A binary operator was applied to an operand pair outside its table.
    InvalidBinaryOperands {
        /// The operator that was applied.
        operator: BinaryOperator,
        /// Static type of the left operand.
        lhs:      VariableType,
        /// Static type of the right operand.
        rhs:      VariableType,
        /// The source line where the error occurred.
        line:     usize,
        /// The column within that line.
        column:   usize,
    },
    /// A unary operator was applied to an operand it does not accept.
    InvalidUnaryOperand {
        /// The operator that was applied.
        operator: UnaryOperator,
        /// Static type of the operand.
        operand:  VariableType,
        /// The source line where the error occurred.
        line:     usize,
        /// The column within that line.
        column:   usize,
    },
    /// A cast between two types the cast matrix forbids.
    InvalidCast {
        /// The type being cast from.
        from:   VariableType,
        /// The type being cast to.
        to:     VariableType,
        /// The source line where the error occurred.
        line:   usize,
        /// The column within that line.
        column: usize,
    },
    /// A `for` or `while` condition whose static type is not boolean.
    NonBooleanCondition {
        /// Static type of the condition expression.
        found:  VariableType,
        /// The source line where the error occurred.
        line:   usize,
        /// The column within that line.
        column: usize,
    },
    /// An array dimension in `new` whose static type is not integer.
    NonIntegerArraySize {
        /// Static type of the dimension expression.
        found:  VariableType,
        /// The source line where the error occurred.
        line:   usize,
        /// The column within that line.
        column: usize,
    },
}

impl std::fmt::Display for TypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBinaryOperands { operator,
                                          lhs,
                                          rhs,
                                          line,
                                          column, } => {
                write!(f,
                       "line {line}, column {column}: invalid operator {operator} between {lhs} and {rhs}")
            },
            Self::InvalidUnaryOperand { operator,
                                        operand,
                                        line,
                                        column, } => {
                write!(f,
                       "line {line}, column {column}: invalid unary operator {operator} for {operand}")
            },
            Self::InvalidCast { from, to, line, column } => {
                write!(f, "line {line}, column {column}: cannot cast {from} to {to}")
            },
            Self::NonBooleanCondition { found, line, column } => {
                write!(f,
                       "line {line}, column {column}: loop condition must be boolean, found {found}")
            },
            Self::NonIntegerArraySize { found, line, column } => {
                write!(f,
                       "line {line}, column {column}: array size must be integer, found {found}")
            },
        }
    }
}

impl std::error::Error for TypeError {}
