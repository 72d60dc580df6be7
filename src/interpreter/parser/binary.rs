use std::io::{Read, Seek};

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{lexer::TokenKind, parser::core::{ParseResult, Parser}},
};

impl<R: Read + Seek> Parser<R> {
    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest precedence level, logical OR, and descends through the
    /// precedence hierarchy.
    ///
    /// Grammar: `expression := logical_or`
    ///
    /// # Errors
    /// Propagates syntax and type errors from the descended rules.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_logical_or()
    }

    /// Parses left-associative chains of `||`.
    ///
    /// Grammar: `logical_or := logical_and ("||" logical_and)*`
    ///
    /// # Errors
    /// Propagates syntax errors, and type errors for non-boolean operands.
    pub fn parse_logical_or(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_logical_and()?;
        while self.current_kind() == TokenKind::LogicalOr {
            let token = self.expect(TokenKind::LogicalOr)?;
            let rhs = self.parse_logical_and()?;
            lhs = Expr::binary(BinaryOperator::LogicalOr, lhs, rhs, token.line, token.column)?;
        }
        Ok(lhs)
    }

    /// Parses left-associative chains of `&&`.
    ///
    /// Grammar: `logical_and := bit_or ("&&" bit_or)*`
    ///
    /// # Errors
    /// Propagates syntax errors, and type errors for non-boolean operands.
    pub fn parse_logical_and(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_bit_or()?;
        while self.current_kind() == TokenKind::LogicalAnd {
            let token = self.expect(TokenKind::LogicalAnd)?;
            let rhs = self.parse_bit_or()?;
            lhs = Expr::binary(BinaryOperator::LogicalAnd, lhs, rhs, token.line, token.column)?;
        }
        Ok(lhs)
    }

    /// Parses left-associative chains of `|`.
    ///
    /// Grammar: `bit_or := bit_xor ("|" bit_xor)*`
    ///
    /// # Errors
    /// Propagates syntax errors, and type errors for non-integer operands.
    pub fn parse_bit_or(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_bit_xor()?;
        while self.current_kind() == TokenKind::BitOr {
            let token = self.expect(TokenKind::BitOr)?;
            let rhs = self.parse_bit_xor()?;
            lhs = Expr::binary(BinaryOperator::BitOr, lhs, rhs, token.line, token.column)?;
        }
        Ok(lhs)
    }

    /// Parses left-associative chains of `^`.
    ///
    /// Grammar: `bit_xor := bit_and ("^" bit_and)*`
    ///
    /// # Errors
    /// Propagates syntax errors, and type errors for non-integer operands.
    pub fn parse_bit_xor(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_bit_and()?;
        while self.current_kind() == TokenKind::BitXor {
            let token = self.expect(TokenKind::BitXor)?;
            let rhs = self.parse_bit_and()?;
            lhs = Expr::binary(BinaryOperator::BitXor, lhs, rhs, token.line, token.column)?;
        }
        Ok(lhs)
    }

    /// Parses left-associative chains of `&`.
    ///
    /// Grammar: `bit_and := equality ("&" equality)*`
    ///
    /// # Errors
    /// Propagates syntax errors, and type errors for non-integer operands.
    pub fn parse_bit_and(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_equality()?;
        while self.current_kind() == TokenKind::BitAnd {
            let token = self.expect(TokenKind::BitAnd)?;
            let rhs = self.parse_equality()?;
            lhs = Expr::binary(BinaryOperator::BitAnd, lhs, rhs, token.line, token.column)?;
        }
        Ok(lhs)
    }

    /// Parses left-associative chains of `==` and `!=`.
    ///
    /// Grammar: `equality := relational (("==" | "!=") relational)*`
    ///
    /// # Errors
    /// Propagates syntax errors, and type errors for incomparable operand
    /// pairs.
    pub fn parse_equality(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_relational()?;
        loop {
            let (kind, op) = match self.current_kind() {
                TokenKind::Equal => (TokenKind::Equal, BinaryOperator::Equal),
                TokenKind::NotEqual => (TokenKind::NotEqual, BinaryOperator::NotEqual),
                _ => break,
            };
            let token = self.expect(kind)?;
            let rhs = self.parse_relational()?;
            lhs = Expr::binary(op, lhs, rhs, token.line, token.column)?;
        }
        Ok(lhs)
    }

    /// Parses left-associative chains of `<`, `<=`, `>`, and `>=`.
    ///
    /// Grammar: `relational := shift (("<" | "<=" | ">" | ">=") shift)*`
    ///
    /// # Errors
    /// Propagates syntax errors, and type errors for incomparable operand
    /// pairs (booleans are not ordered).
    pub fn parse_relational(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_shift()?;
        loop {
            let (kind, op) = match self.current_kind() {
                TokenKind::Less => (TokenKind::Less, BinaryOperator::Less),
                TokenKind::LessEqual => (TokenKind::LessEqual, BinaryOperator::LessEqual),
                TokenKind::Greater => (TokenKind::Greater, BinaryOperator::Greater),
                TokenKind::GreaterEqual => {
                    (TokenKind::GreaterEqual, BinaryOperator::GreaterEqual)
                },
                _ => break,
            };
            let token = self.expect(kind)?;
            let rhs = self.parse_shift()?;
            lhs = Expr::binary(op, lhs, rhs, token.line, token.column)?;
        }
        Ok(lhs)
    }

    /// Parses left-associative chains of `<<` and `>>`.
    ///
    /// Grammar: `shift := additive (("<<" | ">>") additive)*`
    ///
    /// # Errors
    /// Propagates syntax errors, and type errors for non-integer operands.
    pub fn parse_shift(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_additive()?;
        loop {
            let (kind, op) = match self.current_kind() {
                TokenKind::ShiftLeft => (TokenKind::ShiftLeft, BinaryOperator::ShiftLeft),
                TokenKind::ShiftRight => (TokenKind::ShiftRight, BinaryOperator::ShiftRight),
                _ => break,
            };
            let token = self.expect(kind)?;
            let rhs = self.parse_additive()?;
            lhs = Expr::binary(op, lhs, rhs, token.line, token.column)?;
        }
        Ok(lhs)
    }

    /// Parses left-associative chains of `+` and `-`.
    ///
    /// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
    ///
    /// # Errors
    /// Propagates syntax errors, and type errors for operand pairs outside
    /// the arithmetic (or, for `+`, string) combinations.
    pub fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_multiplicative()?;
        loop {
            let (kind, op) = match self.current_kind() {
                TokenKind::Plus => (TokenKind::Plus, BinaryOperator::Add),
                TokenKind::Minus => (TokenKind::Minus, BinaryOperator::Subtract),
                _ => break,
            };
            let token = self.expect(kind)?;
            let rhs = self.parse_multiplicative()?;
            lhs = Expr::binary(op, lhs, rhs, token.line, token.column)?;
        }
        Ok(lhs)
    }

    /// Parses left-associative chains of `*`, `/`, and `%`.
    ///
    /// Grammar: `multiplicative := cast (("*" | "/" | "%") cast)*`
    ///
    /// # Errors
    /// Propagates syntax errors, and type errors for operand pairs outside
    /// the arithmetic (or, for `%`, integer) combinations.
    pub fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut lhs = self.parse_cast()?;
        loop {
            let (kind, op) = match self.current_kind() {
                TokenKind::Asterisk => (TokenKind::Asterisk, BinaryOperator::Multiply),
                TokenKind::Slash => (TokenKind::Slash, BinaryOperator::Divide),
                TokenKind::Percent => (TokenKind::Percent, BinaryOperator::Modulo),
                _ => break,
            };
            let token = self.expect(kind)?;
            let rhs = self.parse_cast()?;
            lhs = Expr::binary(op, lhs, rhs, token.line, token.column)?;
        }
        Ok(lhs)
    }
}
