/// Binary operator dispatch.
///
/// Routes an operator and its evaluated operands to the matching handler.
pub mod core;

/// Arithmetic operators: `+`, `-`, `*`, `/`, `%`, and string
/// concatenation.
pub mod arithmetic;

/// Equality and relational operators.
pub mod comparison;

/// Bitwise operators and shifts.
pub mod bitwise;

/// Short-circuiting logical operators.
pub mod logic;
