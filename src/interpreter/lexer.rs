use std::io::{Cursor, Read, Seek};

use crate::{
    error::SyntaxError,
    interpreter::input::{InputAdapter, Position},
};

/// Identifies every terminal of the language.
///
/// The lexer classifies each scanned lexeme as one of these kinds. Literal
/// content (the digits of a number, the body of a string) lives in the
/// owning [`Token`], not in the kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenKind {
    /// `int`
    KeywordInt,
    /// `float`
    KeywordFloat,
    /// `boolean`
    KeywordBoolean,
    /// `string`
    KeywordString,
    /// `char`
    KeywordChar,
    /// `function`
    KeywordFunction,
    /// `if`
    KeywordIf,
    /// `else`
    KeywordElse,
    /// `for`
    KeywordFor,
    /// `while`
    KeywordWhile,
    /// `continue`
    KeywordContinue,
    /// `break`
    KeywordBreak,
    /// `return`
    KeywordReturn,
    /// `new`
    KeywordNew,
    /// An integer literal such as `123`.
    LiteralInt,
    /// A floating literal such as `1.23` or `1.5e-2`.
    LiteralFloat,
    /// `true`
    LiteralTrue,
    /// `false`
    LiteralFalse,
    /// A double-quoted string literal.
    LiteralString,
    /// A single-quoted character literal.
    LiteralChar,
    /// A name that is not a keyword.
    Identifier,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `~`
    BitNot,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `\`
    Backslash,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `!`
    LogicalNot,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `=`
    Assign,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `(`
    LeftParenthesis,
    /// `)`
    RightParenthesis,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// End of the input stream.
    #[default]
    EndOfInput,
    /// A lexeme the scanner recognized as malformed.
    ParseError,
}

impl TokenKind {
    /// Returns the canonical printable name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::KeywordInt => "int",
            Self::KeywordFloat => "double",
            Self::KeywordBoolean => "boolean",
            Self::KeywordString => "string",
            Self::KeywordChar => "char",
            Self::KeywordFunction => "function",
            Self::KeywordIf => "if",
            Self::KeywordElse => "else",
            Self::KeywordFor => "for",
            Self::KeywordWhile => "while",
            Self::KeywordContinue => "continue",
            Self::KeywordBreak => "break",
            Self::KeywordReturn => "return",
            Self::KeywordNew => "new",
            Self::LiteralInt => "literal int",
            Self::LiteralFloat => "literal double",
            Self::LiteralTrue => "true",
            Self::LiteralFalse => "false",
            Self::LiteralString => "literal string",
            Self::LiteralChar => "literal char",
            Self::Identifier => "identifier",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::BitNot => "~",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::Backslash => "\\",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::LogicalNot => "!",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Assign => "=",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::EndOfInput => "<eof>",
            Self::ParseError => "<error>",
        }
    }

    /// Returns `true` for the five primitive type keywords.
    #[must_use]
    pub const fn is_type_keyword(self) -> bool {
        matches!(self,
                 Self::KeywordInt
                 | Self::KeywordFloat
                 | Self::KeywordBoolean
                 | Self::KeywordString
                 | Self::KeywordChar)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A minimal meaningful unit of source text.
///
/// `line` is one-based; `column` is the character count on that line at the
/// moment the token was emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Token {
    /// The lexeme, after escape expansion for string literals.
    pub content: String,
    /// The classification of the lexeme.
    pub kind:    TokenKind,
    /// One-based source line.
    pub line:    usize,
    /// Character count on the line at emission.
    pub column:  usize,
}

impl Token {
    /// Creates a token at the given scanner position.
    pub fn new(content: impl Into<String>, kind: TokenKind, position: &Position) -> Self {
        Self { content: content.into(),
               kind,
               line: position.lines_read + 1,
               column: position.chars_on_current_line, }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.content, self.kind)
    }
}

/// Maps an identifier lexeme to its keyword kind, if it is one.
fn keyword_kind(lexeme: &str) -> Option<TokenKind> {
    Some(match lexeme {
             "int" => TokenKind::KeywordInt,
             "float" => TokenKind::KeywordFloat,
             "boolean" => TokenKind::KeywordBoolean,
             "string" => TokenKind::KeywordString,
             "char" => TokenKind::KeywordChar,
             "function" => TokenKind::KeywordFunction,
             "if" => TokenKind::KeywordIf,
             "else" => TokenKind::KeywordElse,
             "for" => TokenKind::KeywordFor,
             "while" => TokenKind::KeywordWhile,
             "continue" => TokenKind::KeywordContinue,
             "break" => TokenKind::KeywordBreak,
             "return" => TokenKind::KeywordReturn,
             "new" => TokenKind::KeywordNew,
             _ => return None,
         })
}

/// Hand-written scanner producing a lazy sequence of tokens.
///
/// The scanner keeps one character of pushback, the accumulated lexeme, and
/// a [`Position`] that is updated on every read and unread. Numeric literals
/// are validated by an explicit finite-state machine; two-character
/// operators are disambiguated by a single peek.
///
/// # Example
/// ```
/// use keel::interpreter::lexer::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::from_source("1 + 2.5");
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::LiteralInt);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Plus);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::LiteralFloat);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
/// ```
#[derive(Debug)]
pub struct Lexer<R> {
    adapter:    InputAdapter<R>,
    position:   Position,
    next_unget: bool,
    current:    Option<u8>,
    lexeme:     String,
}

impl Lexer<Cursor<Vec<u8>>> {
    /// Creates a lexer over an in-memory source string.
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        Self::new(InputAdapter::new(Cursor::new(source.as_bytes().to_vec())))
    }
}

impl<R: Read + Seek> Lexer<R> {
    /// Creates a lexer reading from the given adapter.
    pub const fn new(adapter: InputAdapter<R>) -> Self {
        Self { adapter,
               position: Position { total_chars_read:      0,
                                    chars_on_current_line: 0,
                                    lines_read:            0, },
               next_unget: false,
               current: None,
               lexeme: String::new(), }
    }

    /// Returns the scanner position after the most recent read.
    #[must_use]
    pub const fn position(&self) -> &Position {
        &self.position
    }

    /// Rewinds the input to its beginning and resets all scanner state, so
    /// the token sequence can be reproduced from the start.
    ///
    /// # Errors
    /// Returns the underlying I/O error if the stream refuses to seek.
    pub fn rewind(&mut self) -> std::io::Result<()> {
        self.adapter.rewind()?;
        self.position = Position::default();
        self.next_unget = false;
        self.current = None;
        self.lexeme.clear();
        Ok(())
    }

    /// Scans and returns the next token.
    ///
    /// At end of input an [`TokenKind::EndOfInput`] token is returned, and
    /// keeps being returned on every further call.
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] for unknown characters and malformed
    /// string or character literals. Malformed *numeric* literals are
    /// reported in-band as [`TokenKind::ParseError`] tokens.
    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        self.skip_whitespace();

        match self.current {
            Some(b'+') => Ok(self.emit("+", TokenKind::Plus)),
            Some(b'-') => Ok(self.emit("-", TokenKind::Minus)),
            Some(b'*') => Ok(self.emit("*", TokenKind::Asterisk)),
            Some(b'/') => Ok(self.emit("/", TokenKind::Slash)),
            Some(b'%') => Ok(self.emit("%", TokenKind::Percent)),
            Some(b'^') => Ok(self.emit("^", TokenKind::BitXor)),
            Some(b'~') => Ok(self.emit("~", TokenKind::BitNot)),
            Some(b'&') => {
                if self.get() == Some(b'&') {
                    Ok(self.emit("&&", TokenKind::LogicalAnd))
                } else {
                    self.unget();
                    Ok(self.emit("&", TokenKind::BitAnd))
                }
            },
            Some(b'|') => {
                if self.get() == Some(b'|') {
                    Ok(self.emit("||", TokenKind::LogicalOr))
                } else {
                    self.unget();
                    Ok(self.emit("|", TokenKind::BitOr))
                }
            },
            Some(b'<') => match self.get() {
                Some(b'<') => Ok(self.emit("<<", TokenKind::ShiftLeft)),
                Some(b'=') => Ok(self.emit("<=", TokenKind::LessEqual)),
                _ => {
                    self.unget();
                    Ok(self.emit("<", TokenKind::Less))
                },
            },
            Some(b'>') => match self.get() {
                Some(b'>') => Ok(self.emit(">>", TokenKind::ShiftRight)),
                Some(b'=') => Ok(self.emit(">=", TokenKind::GreaterEqual)),
                _ => {
                    self.unget();
                    Ok(self.emit(">", TokenKind::Greater))
                },
            },
            Some(b'\\') => Ok(self.emit("\\", TokenKind::Backslash)),
            Some(b'!') => {
                if self.get() == Some(b'=') {
                    Ok(self.emit("!=", TokenKind::NotEqual))
                } else {
                    self.unget();
                    Ok(self.emit("!", TokenKind::LogicalNot))
                }
            },
            Some(b'=') => {
                if self.get() == Some(b'=') {
                    Ok(self.emit("==", TokenKind::Equal))
                } else {
                    self.unget();
                    Ok(self.emit("=", TokenKind::Assign))
                }
            },
            Some(b';') => Ok(self.emit(";", TokenKind::Semicolon)),
            Some(b':') => Ok(self.emit(":", TokenKind::Colon)),
            Some(b',') => Ok(self.emit(",", TokenKind::Comma)),
            Some(b'.') => Ok(self.emit(".", TokenKind::Dot)),
            Some(b'(') => Ok(self.emit("(", TokenKind::LeftParenthesis)),
            Some(b')') => Ok(self.emit(")", TokenKind::RightParenthesis)),
            Some(b'[') => Ok(self.emit("[", TokenKind::LeftBracket)),
            Some(b']') => Ok(self.emit("]", TokenKind::RightBracket)),
            Some(b'{') => Ok(self.emit("{", TokenKind::LeftBrace)),
            Some(b'}') => Ok(self.emit("}", TokenKind::RightBrace)),
            Some(b'\'') => self.scan_char_literal(),
            Some(b'"') => self.scan_string(),
            Some(b'0'..=b'9') => Ok(self.scan_number()),
            Some(b) if b.is_ascii_alphabetic() || b == b'_' => Ok(self.scan_identifier()),
            Some(_) => {
                let (line, column) = self.error_position();
                Err(SyntaxError::UnknownToken { line, column })
            },
            None => Ok(self.emit("eof", TokenKind::EndOfInput)),
        }
    }

    /// Scans the single character between two single quotes.
    ///
    /// Escape sequences are not recognized inside character literals; the
    /// literal holds exactly one byte.
    fn scan_char_literal(&mut self) -> Result<Token, SyntaxError> {
        let Some(byte) = self.get() else {
            let (line, column) = self.error_position();
            return Err(SyntaxError::MultiCharacterLiteral { line, column });
        };
        if byte == b'\'' {
            let (line, column) = self.error_position();
            return Err(SyntaxError::EmptyCharLiteral { line, column });
        }
        if self.get() != Some(b'\'') {
            let (line, column) = self.error_position();
            return Err(SyntaxError::MultiCharacterLiteral { line, column });
        }
        Ok(Token::new((byte as char).to_string(), TokenKind::LiteralChar, &self.position))
    }

    /// Scans a string literal and expands its escape sequences.
    ///
    /// The returned token's content keeps the surrounding double quotes;
    /// the parser strips them. Escape pairs are consumed whole while
    /// collecting, so an escaped backslash directly before the closing
    /// quote terminates the literal correctly.
    fn scan_string(&mut self) -> Result<Token, SyntaxError> {
        self.reset_lexeme();

        loop {
            match self.get() {
                None => {
                    let (line, column) = self.error_position();
                    return Err(SyntaxError::UnterminatedString { line, column });
                },
                Some(b'\n') => {
                    let (line, column) = self.error_position();
                    return Err(SyntaxError::StringAcrossLines { line, column });
                },
                Some(b'\\') => match self.get() {
                    None => {
                        let (line, column) = self.error_position();
                        return Err(SyntaxError::UnterminatedString { line, column });
                    },
                    Some(b'\n') => {
                        let (line, column) = self.error_position();
                        return Err(SyntaxError::StringAcrossLines { line, column });
                    },
                    Some(_) => {},
                },
                Some(b'"') => break,
                Some(_) => {},
            }
        }

        let mut expanded = String::with_capacity(self.lexeme.len());
        let mut bytes = self.lexeme.bytes();
        while let Some(byte) = bytes.next() {
            if byte == b'\\' {
                let Some(escape) = bytes.next() else { break };
                expanded.push(match escape {
                                  b't' => '\t',
                                  b'f' => '\u{000C}',
                                  b'r' => '\r',
                                  b'n' => '\n',
                                  b'b' => '\u{0008}',
                                  b'\\' => '\\',
                                  b'"' => '"',
                                  b'\'' => '\'',
                                  other => {
                                      let (line, column) = self.error_position();
                                      return Err(SyntaxError::InvalidEscape { escape:
                                                                                  other as char,
                                                                              line,
                                                                              column });
                                  },
                              });
            } else {
                expanded.push(byte as char);
            }
        }

        Ok(Token::new(expanded, TokenKind::LiteralString, &self.position))
    }

    /// Runs the numeric literal state machine.
    ///
    /// States 2 and 3 accept an integer, states 5 and 8 a floating literal.
    /// A literal immediately followed by a letter (`123a`) is emitted as a
    /// single [`TokenKind::ParseError`] token carrying the joined lexeme.
    fn scan_number(&mut self) -> Token {
        self.reset_lexeme();
        self.unget();

        let mut previous_state = -1i32;
        let mut state = 0i32;
        while state != -1 {
            self.get();
            previous_state = state;
            state = match (state, self.current) {
                (0, Some(b'0')) => 2,
                (0, Some(b'1'..=b'9')) | (3, Some(b'0'..=b'9')) => 3,
                (2 | 3, Some(b'.')) => 4,
                (3 | 5, Some(b'e' | b'E')) => 6,
                (4 | 5, Some(b'0'..=b'9')) => 5,
                (6, Some(b'+' | b'-')) => 7,
                (6 | 7 | 8, Some(b'0'..=b'9')) => 8,
                _ => -1,
            };
        }

        // A trailing letter glues onto the lexeme and poisons it: `123a`.
        if matches!(self.current, Some(b) if b.is_ascii_alphabetic()) {
            return Token::new(self.lexeme.clone(), TokenKind::ParseError, &self.position);
        }
        self.unget();

        match previous_state {
            2 | 3 => Token::new(self.lexeme.clone(), TokenKind::LiteralInt, &self.position),
            5 | 8 => Token::new(self.lexeme.clone(), TokenKind::LiteralFloat, &self.position),
            _ => Token::new("invalid number literal", TokenKind::ParseError, &self.position),
        }
    }

    /// Scans an identifier and classifies keywords and boolean literals.
    fn scan_identifier(&mut self) -> Token {
        self.reset_lexeme();
        while matches!(self.current, Some(b) if b.is_ascii_alphanumeric() || b == b'_') {
            self.get();
        }
        self.unget();

        if let Some(kind) = keyword_kind(&self.lexeme) {
            return Token::new(self.lexeme.clone(), kind, &self.position);
        }
        match self.lexeme.as_str() {
            "true" => Token::new(self.lexeme.clone(), TokenKind::LiteralTrue, &self.position),
            "false" => Token::new(self.lexeme.clone(), TokenKind::LiteralFalse, &self.position),
            _ => Token::new(self.lexeme.clone(), TokenKind::Identifier, &self.position),
        }
    }

    /// Reads the next character, honouring one pending pushback.
    fn get(&mut self) -> Option<u8> {
        self.position.total_chars_read += 1;
        self.position.chars_on_current_line += 1;

        if self.next_unget {
            self.next_unget = false;
        } else {
            self.current = self.adapter.get_character();
        }

        if let Some(byte) = self.current {
            self.lexeme.push(byte as char);
        }

        if self.current == Some(b'\n') {
            self.position.lines_read += 1;
            self.position.chars_on_current_line = 0;
        }

        self.current
    }

    /// Pushes the current character back and rewinds the position counters
    /// symmetrically. Ungetting across a newline rewinds the line count.
    fn unget(&mut self) {
        self.next_unget = true;

        self.position.total_chars_read = self.position.total_chars_read.saturating_sub(1);
        if self.position.chars_on_current_line == 0 {
            if self.position.lines_read > 0 {
                self.position.lines_read -= 1;
            }
        } else {
            self.position.chars_on_current_line -= 1;
        }

        if self.current.is_some() {
            self.lexeme.pop();
        }
    }

    /// Starts a fresh lexeme from the current character.
    fn reset_lexeme(&mut self) {
        self.lexeme.clear();
        if let Some(byte) = self.current {
            self.lexeme.push(byte as char);
        }
    }

    /// Advances until the current character is no longer whitespace.
    fn skip_whitespace(&mut self) {
        loop {
            self.get();
            if !matches!(self.current, Some(b' ' | b'\n' | b'\r' | b'\t')) {
                break;
            }
        }
    }

    /// Emits a token with explicit content at the current position.
    fn emit(&self, content: &str, kind: TokenKind) -> Token {
        Token::new(content, kind, &self.position)
    }

    /// Returns the 1-based line and the column for an error message.
    const fn error_position(&self) -> (usize, usize) {
        (self.position.lines_read + 1, self.position.chars_on_current_line)
    }
}
