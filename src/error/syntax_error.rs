#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum SyntaxError {
    /// The lexer met a character that cannot start any token.
    UnknownToken {
        /// The source line where the error occurred.
        line:   usize,
        /// The column within that line.
        column: usize,
    },
    /// A character literal with nothing between the quotes (`''`).
    EmptyCharLiteral {
        /// The source line where the error occurred.
        line:   usize,
        /// The column within that line.
        column: usize,
    },
    /// A character literal holding more than one character (`'ab'`), or one
    /// that runs into the end of input.
    MultiCharacterLiteral {
        /// The source line where the error occurred.
        line:   usize,
        /// The column within that line.
        column: usize,
    },
    /// A string literal interrupted by a line break.
    StringAcrossLines {
        /// The source line where the error occurred.
        line:   usize,
        /// The column within that line.
        column: usize,
    },
    /// The input ended before the closing double quote of a string.
    UnterminatedString {
        /// The source line where the error occurred.
        line:   usize,
        /// The column within that line.
        column: usize,
    },
    /// A string literal used an escape sequence the language does not know.
    InvalidEscape {
        /// The character following the backslash.
        escape: char,
        /// The source line where the error occurred.
        line:   usize,
        /// The column within that line.
        column: usize,
    },
    /// The parser required one kind of token and found another.
    UnexpectedToken {
        /// Printable name of what was required.
        expected: String,
        /// Printable name of what was found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The column within that line.
        column:   usize,
    },
    /// An integer literal that does not fit a 32-bit signed integer.
    LiteralTooLarge {
        /// The literal as written in the source.
        content: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The column within that line.
        column:  usize,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownToken { line, column } => {
                write!(f, "line {line}, column {column}: unknown token")
            },
            Self::EmptyCharLiteral { line, column } => {
                write!(f, "line {line}, column {column}: empty char literal")
            },
            Self::MultiCharacterLiteral { line, column } => {
                write!(f, "line {line}, column {column}: multiple character literal")
            },
            Self::StringAcrossLines { line, column } => {
                write!(f, "line {line}, column {column}: invalid string literal")
            },
            Self::UnterminatedString { line, column } => {
                write!(f, "line {line}, column {column}: expect a double quotation")
            },
            Self::InvalidEscape { escape, line, column } => {
                write!(f,
                       "line {line}, column {column}: invalid escape character \\{escape}")
            },
            Self::UnexpectedToken { expected,
                                    found,
                                    line,
                                    column, } => {
                write!(f,
                       "line {line}, column {column}: expect '{expected}', found '{found}'")
            },
            Self::LiteralTooLarge { content, line, column } => {
                write!(f,
                       "line {line}, column {column}: integer literal '{content}' is out of range")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
