/// The input module adapts byte streams for the lexer.
///
/// This module provides the position bookkeeping and the byte-level stream
/// adapter the lexer reads from. The adapter owns its stream, hands out one
/// byte at a time, and can rewind to the beginning so the same input can be
/// tokenized again.
///
/// # Responsibilities
/// - Wraps any seekable byte stream behind a single `get_character` call.
/// - Reports end of input idempotently.
/// - Tracks total characters, per-line characters, and line count.
pub mod input;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw byte stream and produces a stream of tokens, each
/// corresponding to a meaningful language element such as a number, string,
/// operator, delimiter, or keyword. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input byte stream into tokens with kind and source
///   location.
/// - Validates numeric literals with an explicit finite-state machine.
/// - Handles string escapes, character literals, and two-character
///   operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of expressions
/// and statements. Operand types are checked while each node is built, so an
/// ill-typed program is rejected before anything runs.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar and syntax, reporting errors with location info.
/// - Rejects ill-typed operator applications at construction time.
pub mod parser;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic and logical operations, and produces values. It is
/// the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles control flow (`for`, `while`, `break`, `continue`, `return`).
/// - Reports runtime errors such as division by zero or invalid casts.
pub mod evaluator;
/// The types module defines the static type system.
///
/// This module declares the type tag carried by every expression node and
/// the typing rules of every operator: which operand pairs are accepted and
/// what each accepted pair produces.
///
/// # Responsibilities
/// - Defines the `VariableType` tag and its printable names.
/// - Implements the operator typing matrix used at AST construction.
pub mod types;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types produced during evaluation:
/// integers, floating-point numbers, booleans, strings, characters, and
/// arrays. The order of the variants matches the type tags used throughout
/// the crate.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Provides zero values for array construction and display formatting.
pub mod value;
