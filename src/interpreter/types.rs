use crate::{ast::BinaryOperator, interpreter::lexer::TokenKind};

/// The static type tag of an expression.
///
/// The discriminants are load-bearing: variants 0 through 4 line up with
/// the primitive variants of [`crate::interpreter::value::Value`], and
/// `Array` is 5. `Error` marks a combination the typing rules reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableType {
    /// Rejected by the typing rules.
    Error     = -1,
    /// 32-bit signed integer.
    Integer   = 0,
    /// Double-precision floating point.
    Floating  = 1,
    /// `true` or `false`.
    Boolean   = 2,
    /// A byte string.
    String    = 3,
    /// A single byte.
    Character = 4,
    /// A homogeneous sequence of values.
    Array     = 5,
}

impl VariableType {
    /// Returns the printable name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "int",
            Self::Floating => "double",
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Character => "char",
            Self::Array => "array",
            Self::Error => "unknown",
        }
    }

    /// Maps a primitive type keyword token to its type, or `Error` for any
    /// other token kind.
    #[must_use]
    pub const fn from_keyword(kind: TokenKind) -> Self {
        match kind {
            TokenKind::KeywordInt => Self::Integer,
            TokenKind::KeywordFloat => Self::Floating,
            TokenKind::KeywordBoolean => Self::Boolean,
            TokenKind::KeywordString => Self::String,
            TokenKind::KeywordChar => Self::Character,
            _ => Self::Error,
        }
    }

    /// Returns `true` for the numeric types.
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Self::Integer | Self::Floating)
    }
}

impl std::fmt::Display for VariableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Computes the promoted type of an arithmetic operand pair.
///
/// Two integers stay integer, any mix involving a floating operand becomes
/// floating, and every other pair is rejected.
///
/// # Example
/// ```
/// use keel::interpreter::types::{VariableType, arithmetic_promotion};
///
/// assert_eq!(arithmetic_promotion(VariableType::Integer, VariableType::Floating),
///            VariableType::Floating);
/// assert_eq!(arithmetic_promotion(VariableType::String, VariableType::Integer),
///            VariableType::Error);
/// ```
#[must_use]
pub const fn arithmetic_promotion(lhs: VariableType, rhs: VariableType) -> VariableType {
    match (lhs, rhs) {
        (VariableType::Integer, VariableType::Integer) => VariableType::Integer,
        (VariableType::Integer | VariableType::Floating,
         VariableType::Integer | VariableType::Floating) => VariableType::Floating,
        _ => VariableType::Error,
    }
}

/// Returns `true` when two types can be compared for equality or order.
///
/// Numeric types compare across the integer/floating divide; every other
/// type compares only with itself. Arrays never compare.
#[must_use]
pub const fn can_compare(lhs: VariableType, rhs: VariableType) -> bool {
    matches!((lhs, rhs),
             (VariableType::Integer | VariableType::Floating,
              VariableType::Integer | VariableType::Floating)
             | (VariableType::Boolean, VariableType::Boolean)
             | (VariableType::String, VariableType::String)
             | (VariableType::Character, VariableType::Character))
}

/// Computes the static type of a binary operator application, or
/// [`VariableType::Error`] when the operand pair is outside the operator's
/// table.
///
/// The full table:
///
/// - `+` accepts the arithmetic pairs plus string/string concatenation.
/// - `-`, `*`, `/` accept the arithmetic pairs.
/// - `%`, the bitwise operators, and the shifts accept only integer pairs.
/// - `&&` and `||` accept only boolean pairs.
/// - `==` and `!=` accept every comparable pair.
/// - `<`, `<=`, `>`, `>=` accept every comparable pair except booleans.
///
/// # Example
/// ```
/// use keel::{
///     ast::BinaryOperator,
///     interpreter::types::{VariableType, binary_expr_type},
/// };
///
/// assert_eq!(binary_expr_type(VariableType::Integer,
///                             BinaryOperator::Add,
///                             VariableType::Floating),
///            VariableType::Floating);
/// assert_eq!(binary_expr_type(VariableType::Integer,
///                             BinaryOperator::Add,
///                             VariableType::Boolean),
///            VariableType::Error);
/// ```
#[must_use]
pub const fn binary_expr_type(lhs: VariableType,
                              op: BinaryOperator,
                              rhs: VariableType)
                              -> VariableType {
    match op {
        BinaryOperator::Add => {
            if matches!((lhs, rhs), (VariableType::String, VariableType::String)) {
                VariableType::String
            } else {
                arithmetic_promotion(lhs, rhs)
            }
        },
        BinaryOperator::Subtract | BinaryOperator::Multiply | BinaryOperator::Divide => {
            arithmetic_promotion(lhs, rhs)
        },
        BinaryOperator::Modulo
        | BinaryOperator::BitAnd
        | BinaryOperator::BitOr
        | BinaryOperator::BitXor
        | BinaryOperator::ShiftLeft
        | BinaryOperator::ShiftRight => {
            if matches!((lhs, rhs), (VariableType::Integer, VariableType::Integer)) {
                VariableType::Integer
            } else {
                VariableType::Error
            }
        },
        BinaryOperator::LogicalAnd | BinaryOperator::LogicalOr => {
            if matches!((lhs, rhs), (VariableType::Boolean, VariableType::Boolean)) {
                VariableType::Boolean
            } else {
                VariableType::Error
            }
        },
        BinaryOperator::Equal | BinaryOperator::NotEqual => {
            if can_compare(lhs, rhs) {
                VariableType::Boolean
            } else {
                VariableType::Error
            }
        },
        BinaryOperator::Less
        | BinaryOperator::LessEqual
        | BinaryOperator::Greater
        | BinaryOperator::GreaterEqual => {
            if matches!((lhs, rhs), (VariableType::Boolean, VariableType::Boolean)) {
                VariableType::Error
            } else if can_compare(lhs, rhs) {
                VariableType::Boolean
            } else {
                VariableType::Error
            }
        },
    }
}
