/// Core evaluation logic for expressions.
///
/// Contains the expression dispatcher, the execute-state enum, and the
/// result alias shared by every evaluation routine.
pub mod core;

/// Binary operator evaluation.
///
/// Implements evaluation for all binary operations, including arithmetic,
/// comparisons, bitwise operators, and the short-circuiting logical
/// operators.
pub mod binary;

/// Unary operator evaluation.
///
/// Handles the prefix operators: numeric negation, boolean negation, and
/// the bitwise complement.
pub mod unary;

/// Type cast evaluation.
///
/// Implements the cast matrix between the primitive types.
pub mod cast;

/// Array construction.
///
/// Builds the nested zero-filled arrays produced by `new`.
pub mod array;

/// Statement execution.
///
/// Runs statements and threads `break`, `continue`, and `return` through
/// enclosing constructs via execute states.
pub mod statement;
