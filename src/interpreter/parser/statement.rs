use std::io::{Read, Seek};

use crate::{
    ast::Stmt,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl<R: Read + Seek> Parser<R> {
    /// Parses a whole program.
    ///
    /// Grammar: `program := statement* end_of_input`
    ///
    /// The statements are wrapped in a single block so the caller executes
    /// one node. An empty input yields an empty block.
    ///
    /// # Errors
    /// Propagates syntax and type errors from the contained statements.
    ///
    /// # Example
    /// ```
    /// use keel::interpreter::{lexer::Lexer, parser::core::Parser};
    ///
    /// let mut parser = Parser::new(Lexer::from_source("1 + 2; return true;")).unwrap();
    /// let program = parser.parse().unwrap();
    /// assert!(matches!(program, keel::ast::Stmt::Block { .. }));
    /// ```
    pub fn parse(&mut self) -> ParseResult<Stmt> {
        let first = self.current_token().clone();
        let mut statements = Vec::new();
        while self.current_kind() != TokenKind::EndOfInput {
            statements.push(self.parse_statement()?);
        }
        Ok(Stmt::Block { statements,
                         line: first.line,
                         column: first.column })
    }

    /// Parses a single statement.
    ///
    /// Grammar:
    /// ```text
    ///     statement := block
    ///                | for_statement
    ///                | while_statement
    ///                | "break" ";"
    ///                | "continue" ";"
    ///                | "return" expression? ";"
    ///                | expression ";"
    /// ```
    /// # Errors
    /// Propagates syntax and type errors from the contained constructs.
    pub fn parse_statement(&mut self) -> ParseResult<Stmt> {
        match self.current_kind() {
            TokenKind::LeftBrace => self.parse_block(),
            TokenKind::KeywordFor => self.parse_for(),
            TokenKind::KeywordWhile => self.parse_while(),
            TokenKind::KeywordBreak => {
                let token = self.expect(TokenKind::KeywordBreak)?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Stmt::Break { line:   token.line,
                                 column: token.column, })
            },
            TokenKind::KeywordContinue => {
                let token = self.expect(TokenKind::KeywordContinue)?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Stmt::Continue { line:   token.line,
                                    column: token.column, })
            },
            TokenKind::KeywordReturn => {
                let token = self.expect(TokenKind::KeywordReturn)?;
                let expr = if self.current_kind() == TokenKind::Semicolon {
                    None
                } else {
                    Some(self.parse_expression()?)
                };
                self.expect(TokenKind::Semicolon)?;
                Ok(Stmt::Return { expr,
                                  line: token.line,
                                  column: token.column })
            },
            _ => {
                let token = self.current_token().clone();
                let expr = self.parse_expression()?;
                self.expect(TokenKind::Semicolon)?;
                Ok(Stmt::Expression { expr,
                                      line: token.line,
                                      column: token.column })
            },
        }
    }

    /// Parses a brace-delimited statement list.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// # Errors
    /// Returns a syntax error when the closing brace is missing.
    pub fn parse_block(&mut self) -> ParseResult<Stmt> {
        let brace = self.expect(TokenKind::LeftBrace)?;
        let mut statements = Vec::new();
        while self.current_kind() != TokenKind::RightBrace
              && self.current_kind() != TokenKind::EndOfInput
        {
            statements.push(self.parse_statement()?);
        }
        self.expect(TokenKind::RightBrace)?;
        Ok(Stmt::Block { statements,
                         line: brace.line,
                         column: brace.column })
    }

    /// Parses a `for` loop.
    ///
    /// Grammar:
    /// `for := "for" "(" expression ";" expression ";" expression ")" statement`
    ///
    /// The condition must be boolean-typed; the init and update parts are
    /// plain expressions evaluated for their effect.
    ///
    /// # Errors
    /// Propagates syntax errors, and a type error for a non-boolean
    /// condition.
    pub fn parse_for(&mut self) -> ParseResult<Stmt> {
        let keyword = self.expect(TokenKind::KeywordFor)?;
        self.expect(TokenKind::LeftParenthesis)?;
        let init = self.parse_expression()?;
        self.expect(TokenKind::Semicolon)?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::Semicolon)?;
        let update = self.parse_expression()?;
        self.expect(TokenKind::RightParenthesis)?;
        let body = self.parse_statement()?;

        Ok(Stmt::for_loop(init, condition, update, body, keyword.line, keyword.column)?)
    }

    /// Parses a `while` loop.
    ///
    /// Grammar: `while := "while" "(" expression ")" statement`
    ///
    /// # Errors
    /// Propagates syntax errors, and a type error for a non-boolean
    /// condition.
    pub fn parse_while(&mut self) -> ParseResult<Stmt> {
        let keyword = self.expect(TokenKind::KeywordWhile)?;
        self.expect(TokenKind::LeftParenthesis)?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::RightParenthesis)?;
        let body = self.parse_statement()?;

        Ok(Stmt::while_loop(condition, body, keyword.line, keyword.column)?)
    }
}
