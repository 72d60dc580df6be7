use std::io::{Read, Seek};

use crate::{
    error::{Error, SyntaxError},
    interpreter::{
        lexer::{Lexer, Token, TokenKind},
        parser::ring_buffer::RingBuffer,
    },
};

/// How many tokens the parser can see ahead.
///
/// Two is exactly enough to tell a cast `(int) x` from a parenthesized
/// expression `(1 + 2)` by peeking past the opening parenthesis.
pub const LOOK_AHEAD_COUNT: usize = 2;

/// Result type used by every grammar rule.
pub type ParseResult<T> = Result<T, Error>;

/// Recursive-descent parser over a two-token lookahead window.
///
/// The parser owns its lexer and pulls tokens into a fixed ring buffer of
/// [`LOOK_AHEAD_COUNT`] entries: consuming a token writes the next one from
/// the lexer into the slot it vacates, so the window is always full.
///
/// Operand types are checked while nodes are built (see
/// [`crate::ast::Expr`]); a tree this parser returns contains no ill-typed
/// operator application.
///
/// # Example
/// ```
/// use keel::interpreter::{lexer::Lexer, parser::core::Parser, types::VariableType};
///
/// let mut parser = Parser::new(Lexer::from_source("1 + 2 * 3")).unwrap();
/// let expr = parser.parse_expression().unwrap();
/// assert_eq!(expr.static_type(), VariableType::Integer);
/// ```
#[derive(Debug)]
pub struct Parser<R> {
    lexer:  Lexer<R>,
    buffer: RingBuffer<Token, LOOK_AHEAD_COUNT>,
}

impl<R: Read + Seek> Parser<R> {
    /// Creates a parser and fills its lookahead window from the lexer.
    ///
    /// # Errors
    /// Returns a [`SyntaxError`] if one of the first tokens is already
    /// malformed.
    pub fn new(lexer: Lexer<R>) -> Result<Self, SyntaxError> {
        let mut parser = Self { lexer,
                                buffer: RingBuffer::new() };
        for _ in 0..parser.buffer.capacity() {
            parser.get_token()?;
        }
        Ok(parser)
    }

    /// Returns the token at the front of the lookahead window.
    #[must_use]
    pub fn current_token(&self) -> &Token {
        self.buffer.get_next(0)
    }

    /// Returns the kind of the current token.
    #[must_use]
    pub fn current_kind(&self) -> TokenKind {
        self.buffer.get_next(0).kind
    }

    /// Returns the kind of the token `distance` steps ahead.
    #[must_use]
    pub fn next_kind(&self, distance: usize) -> TokenKind {
        self.buffer.get_next(distance).kind
    }

    /// Pulls one token from the lexer into the lookahead window.
    pub(crate) fn get_token(&mut self) -> Result<(), SyntaxError> {
        let token = self.lexer.next_token()?;
        self.buffer.put(token);
        Ok(())
    }

    /// Consumes the current token if it has the expected kind; fails with
    /// a positioned syntax error otherwise.
    ///
    /// The consumed token is returned so callers can keep its content and
    /// position.
    ///
    /// # Errors
    /// Returns [`SyntaxError::UnexpectedToken`] naming the expected and
    /// found kinds.
    pub fn expect(&mut self, kind: TokenKind) -> Result<Token, SyntaxError> {
        if self.current_kind() == kind {
            let token = self.current_token().clone();
            self.get_token()?;
            Ok(token)
        } else {
            Err(self.unexpected(kind.name()))
        }
    }

    /// Consumes the current token if its kind is any of `kinds`; fails
    /// with a syntax error naming `label` otherwise.
    ///
    /// # Errors
    /// Returns [`SyntaxError::UnexpectedToken`] with `label` as the
    /// expected description.
    pub fn expect_any(&mut self,
                      label: &str,
                      kinds: &[TokenKind])
                      -> Result<Token, SyntaxError> {
        for kind in kinds {
            if self.current_kind() == *kind {
                return self.expect(*kind);
            }
        }
        Err(self.unexpected(label))
    }

    /// Builds an unexpected-token error at the lexer's current position.
    pub(crate) fn unexpected(&self, expected: &str) -> SyntaxError {
        let position = self.lexer.position();
        SyntaxError::UnexpectedToken { expected: expected.to_string(),
                                       found:    self.current_kind().name().to_string(),
                                       line:     position.lines_read + 1,
                                       column:   position.chars_on_current_line + 1, }
    }
}
