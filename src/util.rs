/// Numeric literal conversion helpers.
///
/// This module provides the conversions from validated literal lexemes to
/// their runtime representations. The scanner's state machine guarantees
/// the shape of each lexeme; what remains to check is range, and range
/// failures are reported as positioned syntax errors.
pub mod num;
