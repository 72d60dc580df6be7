use crate::error::SyntaxError;

/// Converts an integer literal lexeme to an `i32`.
///
/// The scanner has already validated the digit shape, so the only way this
/// can fail is the value not fitting 32 bits.
///
/// # Errors
/// Returns [`SyntaxError::LiteralTooLarge`] carrying the lexeme and its
/// position.
///
/// # Example
/// ```
/// use keel::util::num::parse_int_literal;
///
/// assert_eq!(parse_int_literal("123", 1, 3).unwrap(), 123);
/// assert!(parse_int_literal("2147483648", 1, 10).is_err());
/// ```
pub fn parse_int_literal(content: &str, line: usize, column: usize) -> Result<i32, SyntaxError> {
    content.parse().map_err(|_| {
                       SyntaxError::LiteralTooLarge { content: content.to_string(),
                                                      line,
                                                      column }
                   })
}

/// Converts a floating literal lexeme to an `f64`.
///
/// Every lexeme the scanner accepts is a valid `f64` literal; values
/// beyond the representable range round to infinity rather than failing.
/// The error path exists for signature symmetry with
/// [`parse_int_literal`] and as a guard against a scanner regression.
///
/// # Errors
/// Returns [`SyntaxError::LiteralTooLarge`] if the lexeme does not parse.
pub fn parse_float_literal(content: &str,
                           line: usize,
                           column: usize)
                           -> Result<f64, SyntaxError> {
    content.parse().map_err(|_| {
                       SyntaxError::LiteralTooLarge { content: content.to_string(),
                                                      line,
                                                      column }
                   })
}
