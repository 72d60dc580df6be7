use crate::{
    error::{Error, TypeError},
    interpreter::{
        evaluator::{
            core::{self, ExecuteState},
            statement,
        },
        types::{self, VariableType},
        value::Value,
    },
};

/// All binary operators of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`: arithmetic addition, or string concatenation.
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `&&`, short-circuiting.
    LogicalAnd,
    /// `||`, short-circuiting.
    LogicalOr,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{symbol}")
    }
}

/// All prefix operators of the language.
///
/// Unary `+` never reaches the AST; the parser drops it and keeps the
/// operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `-`: numeric negation.
    Negate,
    /// `!`: boolean negation.
    LogicalNot,
    /// `~`: bitwise complement.
    BitNot,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Negate => "-",
            Self::LogicalNot => "!",
            Self::BitNot => "~",
        };
        write!(f, "{symbol}")
    }
}

/// An expression node of the abstract syntax tree.
///
/// Expressions are immutable once built, and every node knows its static
/// type. The constructors [`Expr::binary`], [`Expr::unary`], and
/// [`Expr::new_array`] validate operand types against the operator rules
/// and refuse to build an ill-typed node, so a tree that exists is a tree
/// that type-checked.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value:  Value,
        /// One-based source line.
        line:   usize,
        /// Column within that line.
        column: usize,
    },
    /// A binary operation.
    Binary {
        /// The operator.
        op:     BinaryOperator,
        /// Left operand.
        lhs:    Box<Self>,
        /// Right operand.
        rhs:    Box<Self>,
        /// Static type computed at construction.
        ty:     VariableType,
        /// One-based source line of the operator.
        line:   usize,
        /// Column within that line.
        column: usize,
    },
    /// A prefix operation.
    Unary {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
        /// Static type computed at construction.
        ty:      VariableType,
        /// One-based source line of the operator.
        line:    usize,
        /// Column within that line.
        column:  usize,
    },
    /// A cast `(T) expr`. The cast matrix is consulted at evaluation time;
    /// the node's static type is the target type.
    Cast {
        /// The type being cast to.
        target:  VariableType,
        /// The operand.
        operand: Box<Self>,
        /// One-based source line of the cast.
        line:    usize,
        /// Column within that line.
        column:  usize,
    },
    /// An array constructor `new T[e1][e2]...[en]`.
    NewArray {
        /// The primitive element type.
        element_type: VariableType,
        /// Outer-to-inner dimension expressions, each of integer type.
        dimensions:   Vec<Self>,
        /// One-based source line of the `new` keyword.
        line:         usize,
        /// Column within that line.
        column:       usize,
    },
}

impl Expr {
    /// Builds a binary node, validating the operand types against the
    /// operator table.
    ///
    /// # Errors
    /// Returns a [`TypeError`] when the operand pair is outside the
    /// operator's accepted combinations.
    ///
    /// # Example
    /// ```
    /// use keel::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{types::VariableType, value::Value},
    /// };
    ///
    /// let one = Expr::literal(Value::Integer(1), 1, 1);
    /// let half = Expr::literal(Value::Floating(0.5), 1, 5);
    /// let sum = Expr::binary(BinaryOperator::Add, one, half, 1, 3).unwrap();
    /// assert_eq!(sum.static_type(), VariableType::Floating);
    ///
    /// let yes = Expr::literal(Value::Boolean(true), 1, 1);
    /// let two = Expr::literal(Value::Integer(2), 1, 8);
    /// assert!(Expr::binary(BinaryOperator::Add, yes, two, 1, 6).is_err());
    /// ```
    pub fn binary(op: BinaryOperator,
                  lhs: Self,
                  rhs: Self,
                  line: usize,
                  column: usize)
                  -> Result<Self, TypeError> {
        let ty = types::binary_expr_type(lhs.static_type(), op, rhs.static_type());
        if ty == VariableType::Error {
            return Err(TypeError::InvalidBinaryOperands { operator: op,
                                                          lhs: lhs.static_type(),
                                                          rhs: rhs.static_type(),
                                                          line,
                                                          column });
        }
        Ok(Self::Binary { op,
                          lhs: Box::new(lhs),
                          rhs: Box::new(rhs),
                          ty,
                          line,
                          column })
    }

    /// Builds a unary node, validating the operand type.
    ///
    /// Negation accepts the numeric types and keeps the operand's type,
    /// boolean negation accepts booleans, and the bitwise complement
    /// accepts integers.
    ///
    /// # Errors
    /// Returns a [`TypeError`] when the operand type is not accepted.
    pub fn unary(op: UnaryOperator,
                 operand: Self,
                 line: usize,
                 column: usize)
                 -> Result<Self, TypeError> {
        let operand_type = operand.static_type();
        let ty = match op {
            UnaryOperator::Negate if operand_type.is_arithmetic() => operand_type,
            UnaryOperator::LogicalNot if operand_type == VariableType::Boolean => {
                VariableType::Boolean
            },
            UnaryOperator::BitNot if operand_type == VariableType::Integer => {
                VariableType::Integer
            },
            _ => {
                return Err(TypeError::InvalidUnaryOperand { operator: op,
                                                            operand: operand_type,
                                                            line,
                                                            column });
            },
        };
        Ok(Self::Unary { op,
                         operand: Box::new(operand),
                         ty,
                         line,
                         column })
    }

    /// Builds a literal node.
    #[must_use]
    pub const fn literal(value: Value, line: usize, column: usize) -> Self {
        Self::Literal { value, line, column }
    }

    /// Builds a cast node.
    ///
    /// Whether the cast is allowed depends on the operand's runtime
    /// variant, so the matrix check happens during evaluation; the node's
    /// static type is always the target type.
    #[must_use]
    pub fn cast(target: VariableType, operand: Self, line: usize, column: usize) -> Self {
        Self::Cast { target,
                     operand: Box::new(operand),
                     line,
                     column }
    }

    /// Builds an array constructor node.
    ///
    /// # Errors
    /// Returns a [`TypeError`] when any dimension expression is not of
    /// integer type.
    pub fn new_array(element_type: VariableType,
                     dimensions: Vec<Self>,
                     line: usize,
                     column: usize)
                     -> Result<Self, TypeError> {
        for dimension in &dimensions {
            if dimension.static_type() != VariableType::Integer {
                return Err(TypeError::NonIntegerArraySize { found: dimension.static_type(),
                                                            line: dimension.line(),
                                                            column: dimension.column(), });
            }
        }
        Ok(Self::NewArray { element_type,
                            dimensions,
                            line,
                            column })
    }

    /// Returns the static type this expression evaluates to.
    #[must_use]
    pub fn static_type(&self) -> VariableType {
        match self {
            Self::Literal { value, .. } => value.variable_type(),
            Self::Binary { ty, .. } | Self::Unary { ty, .. } => *ty,
            Self::Cast { target, .. } => *target,
            Self::NewArray { .. } => VariableType::Array,
        }
    }

    /// Returns the one-based source line of the node's defining token.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Binary { line, .. }
            | Self::Unary { line, .. }
            | Self::Cast { line, .. }
            | Self::NewArray { line, .. } => *line,
        }
    }

    /// Returns the column of the node's defining token.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Literal { column, .. }
            | Self::Binary { column, .. }
            | Self::Unary { column, .. }
            | Self::Cast { column, .. }
            | Self::NewArray { column, .. } => *column,
        }
    }

    /// Evaluates the expression and returns its value.
    ///
    /// The returned value's variant always matches
    /// [`static_type`](Self::static_type).
    ///
    /// # Errors
    /// Returns an execute error for division by zero, a negative shift
    /// count, or a negative array dimension, and a type error for a cast
    /// the matrix forbids.
    ///
    /// # Example
    /// ```
    /// use keel::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::value::Value,
    /// };
    ///
    /// let lhs = Expr::literal(Value::String("foo".to_string()), 1, 1);
    /// let rhs = Expr::literal(Value::String("bar".to_string()), 1, 9);
    /// let concat = Expr::binary(BinaryOperator::Add, lhs, rhs, 1, 7).unwrap();
    /// assert_eq!(concat.evaluate().unwrap(), Value::String("foobar".to_string()));
    /// ```
    pub fn evaluate(&self) -> Result<Value, Error> {
        core::evaluate(self)
    }
}

/// A statement node of the abstract syntax tree.
///
/// Statements do not produce values directly; executing one yields an
/// [`ExecuteState`] describing how control continues, paired with the value
/// carried by a `return`.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its effect.
    Expression {
        /// The expression.
        expr:   Expr,
        /// One-based source line.
        line:   usize,
        /// Column within that line.
        column: usize,
    },
    /// A brace-delimited statement list.
    Block {
        /// The statements, in source order.
        statements: Vec<Self>,
        /// One-based source line of the opening brace.
        line:       usize,
        /// Column within that line.
        column:     usize,
    },
    /// A `for (init; condition; update) body` loop.
    For {
        /// Evaluated once before the first condition check.
        init:      Box<Expr>,
        /// Boolean-typed loop condition.
        condition: Box<Expr>,
        /// Evaluated after each body run.
        update:    Box<Expr>,
        /// The loop body.
        body:      Box<Self>,
        /// One-based source line of the `for` keyword.
        line:      usize,
        /// Column within that line.
        column:    usize,
    },
    /// A `while (condition) body` loop.
    While {
        /// Boolean-typed loop condition.
        condition: Box<Expr>,
        /// The loop body.
        body:      Box<Self>,
        /// One-based source line of the `while` keyword.
        line:      usize,
        /// Column within that line.
        column:    usize,
    },
    /// `break;`
    Break {
        /// One-based source line.
        line:   usize,
        /// Column within that line.
        column: usize,
    },
    /// `continue;`
    Continue {
        /// One-based source line.
        line:   usize,
        /// Column within that line.
        column: usize,
    },
    /// `return;` or `return expr;`
    Return {
        /// The returned expression, if any.
        expr:   Option<Expr>,
        /// One-based source line.
        line:   usize,
        /// Column within that line.
        column: usize,
    },
}

impl Stmt {
    /// Builds a `for` loop, requiring a boolean condition.
    ///
    /// # Errors
    /// Returns a [`TypeError`] when the condition's static type is not
    /// boolean.
    pub fn for_loop(init: Expr,
                    condition: Expr,
                    update: Expr,
                    body: Self,
                    line: usize,
                    column: usize)
                    -> Result<Self, TypeError> {
        if condition.static_type() != VariableType::Boolean {
            return Err(TypeError::NonBooleanCondition { found: condition.static_type(),
                                                        line: condition.line(),
                                                        column: condition.column(), });
        }
        Ok(Self::For { init: Box::new(init),
                       condition: Box::new(condition),
                       update: Box::new(update),
                       body: Box::new(body),
                       line,
                       column })
    }

    /// Builds a `while` loop, requiring a boolean condition.
    ///
    /// # Errors
    /// Returns a [`TypeError`] when the condition's static type is not
    /// boolean.
    pub fn while_loop(condition: Expr,
                      body: Self,
                      line: usize,
                      column: usize)
                      -> Result<Self, TypeError> {
        if condition.static_type() != VariableType::Boolean {
            return Err(TypeError::NonBooleanCondition { found: condition.static_type(),
                                                        line: condition.line(),
                                                        column: condition.column(), });
        }
        Ok(Self::While { condition: Box::new(condition),
                         body: Box::new(body),
                         line,
                         column })
    }

    /// Executes the statement.
    ///
    /// The returned state tells the enclosing construct how to continue:
    /// `Normal` falls through, `Broken` and `Continued` unwind to the
    /// nearest loop, and `Returned` unwinds the whole program, carrying the
    /// returned value when one was given.
    ///
    /// # Errors
    /// Propagates any error produced while evaluating the contained
    /// expressions.
    ///
    /// # Example
    /// ```
    /// use keel::{
    ///     ast::Stmt,
    ///     interpreter::evaluator::core::ExecuteState,
    /// };
    ///
    /// let stmt = Stmt::Break { line: 1, column: 1 };
    /// assert_eq!(stmt.execute().unwrap(), (ExecuteState::Broken, None));
    /// ```
    pub fn execute(&self) -> Result<(ExecuteState, Option<Value>), Error> {
        statement::execute(self)
    }
}
