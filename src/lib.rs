//! # keel
//!
//! keel is a small embeddable scripting language written in Rust. It is
//! statically typed over six primitive value kinds and runs source text
//! through a handwritten lexer, a recursive-descent parser that
//! type-checks while it builds the syntax tree, and a tree-walking
//! evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{Error, ExecuteError},
    interpreter::{
        evaluator::core::ExecuteState,
        lexer::{Lexer, TokenKind},
        parser::core::Parser,
        value::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums that represent the
/// syntactic structure of source code as a tree. Nodes are built through
/// checked constructors, so a tree that exists carries consistent static
/// types throughout.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source locations to nodes for error reporting.
/// - Rejects ill-typed operator applications at construction time.
pub mod ast;
/// Provides unified error types for every pipeline stage.
///
/// This module defines all errors that can be raised while lexing,
/// parsing, or evaluating code: one enum per error kind plus an umbrella
/// type that tags which kind occurred. Errors carry source positions and
/// render as `line L, column C: ...` messages.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (syntax, type, execute,
///   symbol).
/// - Attaches line and column information for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the input adapter, lexer, parser, type
/// system, value representation, and evaluator to provide a complete
/// pipeline for source code execution.
///
/// # Responsibilities
/// - Coordinates all core components: input, lexer, parser, evaluator.
/// - Exposes the pipeline stages individually for embedding hosts.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for literal conversion.
///
/// This module provides the checked conversions from literal lexemes to
/// runtime numbers used by the parser.
///
/// # Responsibilities
/// - Converts validated integer and floating lexemes to `i32` and `f64`.
/// - Reports out-of-range literals as positioned syntax errors.
pub mod util;

/// Parses and executes a whole script.
///
/// The source is tokenized, parsed into a program block, and executed.
/// A top-level `return` surfaces its value as `Some`; a program that runs
/// off its end yields `None`. A `break` or `continue` that unwinds past
/// every loop is a program error.
///
/// # Errors
/// Returns an error if tokenizing, parsing, or execution fails.
///
/// # Examples
/// ```
/// use keel::{interpreter::value::Value, run_script};
///
/// let result = run_script("return (1 + 2) * 3;").unwrap();
/// assert_eq!(result, Some(Value::Integer(9)));
///
/// // No top-level return: the script produces no value.
/// let result = run_script("1 + 2;").unwrap();
/// assert_eq!(result, None);
///
/// // Dividing by zero is an execute error.
/// assert!(run_script("return 1 / 0;").is_err());
/// ```
pub fn run_script(source: &str) -> Result<Option<Value>, Error> {
    let mut parser = Parser::new(Lexer::from_source(source))?;
    let program = parser.parse()?;

    match program.execute()? {
        (ExecuteState::Returned, value) => Ok(value),
        (ExecuteState::Broken, _) => Err(ExecuteError::BreakOutsideLoop.into()),
        (ExecuteState::Continued, _) => Err(ExecuteError::ContinueOutsideLoop.into()),
        (ExecuteState::Normal, _) => Ok(None),
    }
}

/// Parses and evaluates a single expression.
///
/// The whole input must be one expression; trailing tokens are a syntax
/// error.
///
/// # Errors
/// Returns an error if tokenizing, parsing, or evaluation fails.
///
/// # Examples
/// ```
/// use keel::{eval_expression, interpreter::value::Value};
///
/// assert_eq!(eval_expression("1 + 2.5").unwrap(), Value::Floating(3.5));
/// assert_eq!(eval_expression("\"foo\" + \"bar\"").unwrap(),
///            Value::String("foobar".to_string()));
///
/// // `1 + true` is rejected before anything is evaluated.
/// assert!(eval_expression("1 + true").is_err());
/// ```
pub fn eval_expression(source: &str) -> Result<Value, Error> {
    let mut parser = Parser::new(Lexer::from_source(source))?;
    let expr = parser.parse_expression()?;
    if parser.current_kind() != TokenKind::EndOfInput {
        return Err(parser.unexpected(TokenKind::EndOfInput.name()).into());
    }
    expr.evaluate()
}
