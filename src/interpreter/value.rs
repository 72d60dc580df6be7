use std::rc::Rc;

use crate::interpreter::types::VariableType;

/// Represents a runtime value in the interpreter.
///
/// This enum models all the types a value can carry at runtime. The variant
/// order is load-bearing: the discriminant positions 0 through 5 match the
/// tags of [`VariableType`], and every expression's evaluated value has the
/// variant its static type promises.
///
/// Arrays are shared behind a reference count so that cloning a value is
/// cheap; the language exposes no mutation, so the sharing is unobservable.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 32-bit signed integer. Arithmetic wraps on overflow.
    Integer(i32),
    /// A double-precision floating-point number.
    Floating(f64),
    /// A boolean value, produced by literals, comparisons, and logical
    /// operators.
    Boolean(bool),
    /// A byte string.
    String(String),
    /// A single byte.
    Character(u8),
    /// A homogeneous sequence of values; nested arrays model extra
    /// dimensions.
    Array(Rc<Vec<Self>>),
}

impl Value {
    /// Returns the type tag matching this value's variant.
    ///
    /// # Example
    /// ```
    /// use keel::interpreter::{types::VariableType, value::Value};
    ///
    /// assert_eq!(Value::Integer(1).variable_type(), VariableType::Integer);
    /// assert_eq!(Value::Character(b'x').variable_type(), VariableType::Character);
    /// ```
    #[must_use]
    pub const fn variable_type(&self) -> VariableType {
        match self {
            Self::Integer(_) => VariableType::Integer,
            Self::Floating(_) => VariableType::Floating,
            Self::Boolean(_) => VariableType::Boolean,
            Self::String(_) => VariableType::String,
            Self::Character(_) => VariableType::Character,
            Self::Array(_) => VariableType::Array,
        }
    }

    /// Returns the zero value of a type: `0`, `0.0`, `false`, the empty
    /// string, the NUL character, or the empty array.
    ///
    /// Array construction fills its innermost elements with these.
    #[must_use]
    pub fn zero_of(ty: VariableType) -> Self {
        match ty {
            VariableType::Floating => Self::Floating(0.0),
            VariableType::Boolean => Self::Boolean(false),
            VariableType::String => Self::String(String::new()),
            VariableType::Character => Self::Character(b'\0'),
            VariableType::Array => Self::Array(Rc::new(Vec::new())),
            VariableType::Integer | VariableType::Error => Self::Integer(0),
        }
    }

    /// Returns `true` if the value is [`Integer`](Self::Integer).
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Floating`](Self::Floating).
    #[must_use]
    pub const fn is_floating(&self) -> bool {
        matches!(self, Self::Floating(..))
    }

    /// Returns `true` if the value is [`Array`](Self::Array).
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Floating(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Self::Character(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Floating(x) => write!(f, "{x}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Character(c) => write!(f, "{}", *c as char),
            Self::Array(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}
