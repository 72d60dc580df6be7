use std::io::{Read, Seek};

use crate::{
    ast::{Expr, UnaryOperator},
    error::SymbolError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
        types::VariableType,
        value::Value,
    },
    util::num::{parse_float_literal, parse_int_literal},
};

/// The five tokens that name a primitive type.
const TYPE_KEYWORDS: [TokenKind; 5] = [TokenKind::KeywordInt,
                                       TokenKind::KeywordFloat,
                                       TokenKind::KeywordBoolean,
                                       TokenKind::KeywordString,
                                       TokenKind::KeywordChar];

impl<R: Read + Seek> Parser<R> {
    /// Parses a cast or falls through to a unary expression.
    ///
    /// A cast looks like `(T) operand` where `T` is a primitive type
    /// keyword; the second lookahead token decides between a cast and a
    /// parenthesized expression. Casts nest: `(int) (float) x` parses as
    /// `(int) ((float) x)`.
    ///
    /// Grammar: `cast := "(" type_name ")" cast | unary`
    ///
    /// # Errors
    /// Propagates syntax and type errors from the operand.
    pub fn parse_cast(&mut self) -> ParseResult<Expr> {
        if self.current_kind() == TokenKind::LeftParenthesis
           && self.next_kind(1).is_type_keyword()
        {
            let paren = self.expect(TokenKind::LeftParenthesis)?;
            let type_kind = self.current_kind();
            self.expect_any("type name", &TYPE_KEYWORDS)?;
            self.expect(TokenKind::RightParenthesis)?;

            let operand = self.parse_cast()?;
            return Ok(Expr::cast(VariableType::from_keyword(type_kind),
                                 operand,
                                 paren.line,
                                 paren.column));
        }
        self.parse_unary()
    }

    /// Parses prefix operators and their operand.
    ///
    /// Unary `+` is a no-op that keeps parsing a unary operand; `-`, `~`,
    /// and `!` build checked unary nodes; `new` starts an array
    /// constructor.
    ///
    /// Grammar: `unary := ("+" | "-" | "~" | "!") unary | new | primary`
    ///
    /// # Errors
    /// Propagates syntax errors, and type errors when an operator does not
    /// accept its operand's type.
    pub fn parse_unary(&mut self) -> ParseResult<Expr> {
        match self.current_kind() {
            TokenKind::Plus => {
                self.expect(TokenKind::Plus)?;
                self.parse_unary()
            },
            TokenKind::Minus => {
                let token = self.expect(TokenKind::Minus)?;
                let operand = self.parse_unary()?;
                Ok(Expr::unary(UnaryOperator::Negate, operand, token.line, token.column)?)
            },
            TokenKind::BitNot => {
                let token = self.expect(TokenKind::BitNot)?;
                let operand = self.parse_unary()?;
                Ok(Expr::unary(UnaryOperator::BitNot, operand, token.line, token.column)?)
            },
            TokenKind::LogicalNot => {
                let token = self.expect(TokenKind::LogicalNot)?;
                let operand = self.parse_unary()?;
                Ok(Expr::unary(UnaryOperator::LogicalNot, operand, token.line, token.column)?)
            },
            TokenKind::KeywordNew => self.parse_new(),
            _ => self.parse_primary(),
        }
    }

    /// Parses an array constructor.
    ///
    /// Grammar: `new := "new" primitive_type ("[" expression "]")+`
    ///
    /// Dimensions are kept as expressions and evaluated when the node is;
    /// only their static integer type is enforced here.
    ///
    /// # Errors
    /// Returns a syntax error when no dimension follows the element type,
    /// and a type error when a dimension expression is not integer-typed.
    pub fn parse_new(&mut self) -> ParseResult<Expr> {
        let new_token = self.expect(TokenKind::KeywordNew)?;
        let type_kind = self.current_kind();
        self.expect_any("primitive types", &TYPE_KEYWORDS)?;
        let element_type = VariableType::from_keyword(type_kind);

        let mut dimensions = Vec::new();
        while self.current_kind() == TokenKind::LeftBracket {
            self.expect(TokenKind::LeftBracket)?;
            dimensions.push(self.parse_expression()?);
            self.expect(TokenKind::RightBracket)?;
        }
        if dimensions.is_empty() {
            return Err(self.unexpected(TokenKind::LeftBracket.name()).into());
        }

        Ok(Expr::new_array(element_type, dimensions, new_token.line, new_token.column)?)
    }

    /// Parses a primary (atomic) expression.
    ///
    /// Primary expressions are the six literal forms and parenthesized
    /// grouping. An identifier in this position is reported as a symbol
    /// error: the core carries no symbol table, so names cannot be
    /// resolved here.
    ///
    /// Grammar:
    /// ```text
    ///     primary := int_literal | float_literal | "true" | "false"
    ///              | string_literal | char_literal
    ///              | "(" expression ")"
    /// ```
    /// # Errors
    /// Returns a syntax error for any other token, including the scanner's
    /// in-band `ParseError` tokens, and a symbol error for identifiers.
    pub fn parse_primary(&mut self) -> ParseResult<Expr> {
        match self.current_kind() {
            TokenKind::LiteralInt => {
                let token = self.expect(TokenKind::LiteralInt)?;
                let value = parse_int_literal(&token.content, token.line, token.column)?;
                Ok(Expr::literal(Value::Integer(value), token.line, token.column))
            },
            TokenKind::LiteralFloat => {
                let token = self.expect(TokenKind::LiteralFloat)?;
                let value = parse_float_literal(&token.content, token.line, token.column)?;
                Ok(Expr::literal(Value::Floating(value), token.line, token.column))
            },
            TokenKind::LiteralTrue => {
                let token = self.expect(TokenKind::LiteralTrue)?;
                Ok(Expr::literal(Value::Boolean(true), token.line, token.column))
            },
            TokenKind::LiteralFalse => {
                let token = self.expect(TokenKind::LiteralFalse)?;
                Ok(Expr::literal(Value::Boolean(false), token.line, token.column))
            },
            TokenKind::LiteralString => {
                let token = self.expect(TokenKind::LiteralString)?;
                // The scanner keeps the surrounding quotes in the content.
                let body = token.content[1..token.content.len() - 1].to_string();
                Ok(Expr::literal(Value::String(body), token.line, token.column))
            },
            TokenKind::LiteralChar => {
                let token = self.expect(TokenKind::LiteralChar)?;
                let byte = token.content.as_bytes().first().copied().unwrap_or(b'\0');
                Ok(Expr::literal(Value::Character(byte), token.line, token.column))
            },
            TokenKind::LeftParenthesis => {
                self.expect(TokenKind::LeftParenthesis)?;
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RightParenthesis)?;
                Ok(expr)
            },
            TokenKind::Identifier => {
                let token = self.expect(TokenKind::Identifier)?;
                Err(SymbolError::UnresolvedIdentifier { name:   token.content,
                                                        line:   token.line,
                                                        column: token.column, }.into())
            },
            _ => Err(self.unexpected("expression").into()),
        }
    }
}
