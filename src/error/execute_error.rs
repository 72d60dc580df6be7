#[derive(Debug)]
/// Represents all errors that can only surface while a program runs.
pub enum ExecuteError {
    /// The right operand of `/` or `%` evaluated to zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line:   usize,
        /// The column within that line.
        column: usize,
    },
    /// The right operand of `<<` or `>>` evaluated to a negative count.
    NegativeShiftCount {
        /// The evaluated shift count.
        count:  i32,
        /// The source line where the error occurred.
        line:   usize,
        /// The column within that line.
        column: usize,
    },
    /// An array dimension in `new` evaluated to a negative size.
    NegativeArraySize {
        /// The evaluated dimension size.
        size:   i32,
        /// The source line where the error occurred.
        line:   usize,
        /// The column within that line.
        column: usize,
    },
    /// A `break` unwound past every enclosing loop.
    BreakOutsideLoop,
    /// A `continue` unwound past every enclosing loop.
    ContinueOutsideLoop,
}

impl std::fmt::Display for ExecuteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { line, column } => {
                write!(f, "line {line}, column {column}: division by zero")
            },
            Self::NegativeShiftCount { count, line, column } => {
                write!(f,
                       "line {line}, column {column}: right operand of shift expression is negative: {count}")
            },
            Self::NegativeArraySize { size, line, column } => {
                write!(f, "line {line}, column {column}: array size is negative: {size}")
            },
            Self::BreakOutsideLoop => write!(f, "'break' encountered outside of a loop"),
            Self::ContinueOutsideLoop => write!(f, "'continue' encountered outside of a loop"),
        }
    }
}

impl std::error::Error for ExecuteError {}
