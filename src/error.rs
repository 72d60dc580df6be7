/// Syntax errors.
///
/// Defines all error types that can occur while scanning and parsing source
/// code, before any type checking or evaluation takes place. Syntax errors
/// include malformed literals, unknown characters, and unexpected tokens.
pub mod syntax_error;
/// Type errors.
///
/// Contains all error types raised when an operator, cast, or statement is
/// applied to operands of the wrong static type. Most type errors are raised
/// while the parser builds the syntax tree; forbidden casts are detected
/// during evaluation.
pub mod type_error;
/// Execute errors.
///
/// Contains all error types that can only be detected while a program runs,
/// such as division by zero or a negative array dimension.
pub mod execute_error;
/// Symbol errors.
///
/// Reserved for identifier resolution. The core does not host a symbol
/// table, so every identifier that reaches an expression position is
/// reported through this kind.
pub mod symbol_error;

pub use execute_error::ExecuteError;
pub use symbol_error::SymbolError;
pub use syntax_error::SyntaxError;
pub use type_error::TypeError;

#[derive(Debug)]
/// Any error the pipeline can produce, tagged by kind.
///
/// The four kinds mirror the four failure classes of the language: syntax
/// errors from the lexer and parser, type errors from AST construction and
/// casts, execute errors from evaluation, and symbol errors from identifier
/// resolution. All of them are fatal to the current operation; nothing is
/// retried internally.
pub enum Error {
    /// The input could not be tokenized or parsed.
    Syntax(SyntaxError),
    /// An operator, cast, or statement was applied to the wrong types.
    Type(TypeError),
    /// Evaluation failed at runtime.
    Execute(ExecuteError),
    /// An identifier could not be resolved.
    Symbol(SymbolError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "[syntax error] {e}"),
            Self::Type(e) => write!(f, "[type error] {e}"),
            Self::Execute(e) => write!(f, "[execute error] {e}"),
            Self::Symbol(e) => write!(f, "[symbol error] {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Type(e) => Some(e),
            Self::Execute(e) => Some(e),
            Self::Symbol(e) => Some(e),
        }
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<TypeError> for Error {
    fn from(e: TypeError) -> Self {
        Self::Type(e)
    }
}

impl From<ExecuteError> for Error {
    fn from(e: ExecuteError) -> Self {
        Self::Execute(e)
    }
}

impl From<SymbolError> for Error {
    fn from(e: SymbolError) -> Self {
        Self::Symbol(e)
    }
}
