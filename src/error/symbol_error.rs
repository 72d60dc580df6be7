#[derive(Debug)]
/// Represents errors of identifier resolution.
///
/// The core evaluates self-contained expressions and statements; names are
/// resolved by the embedding host. Until a host installs a resolver, any
/// identifier reaching an expression position is unresolvable.
pub enum SymbolError {
    /// An identifier was used where the core has no binding for it.
    UnresolvedIdentifier {
        /// The identifier as written in the source.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The column within that line.
        column: usize,
    },
}

impl std::fmt::Display for SymbolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnresolvedIdentifier { name, line, column } => {
                write!(f,
                       "line {line}, column {column}: cannot resolve identifier '{name}'")
            },
        }
    }
}

impl std::error::Error for SymbolError {}
