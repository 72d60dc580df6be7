use keel::{
    error::SyntaxError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::from_source(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token().unwrap_or_else(|e| panic!("lexing failed: {e}"));
        let kind = token.kind;
        tokens.push(token);
        if kind == TokenKind::EndOfInput {
            break;
        }
    }
    tokens
}

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).into_iter().map(|token| token.kind).collect()
}

#[test]
fn single_character_tokens() {
    assert_eq!(kinds("+ - * / % ^ ~ \\ ; : , . ( ) [ ] { }"),
               vec![TokenKind::Plus,
                    TokenKind::Minus,
                    TokenKind::Asterisk,
                    TokenKind::Slash,
                    TokenKind::Percent,
                    TokenKind::BitXor,
                    TokenKind::BitNot,
                    TokenKind::Backslash,
                    TokenKind::Semicolon,
                    TokenKind::Colon,
                    TokenKind::Comma,
                    TokenKind::Dot,
                    TokenKind::LeftParenthesis,
                    TokenKind::RightParenthesis,
                    TokenKind::LeftBracket,
                    TokenKind::RightBracket,
                    TokenKind::LeftBrace,
                    TokenKind::RightBrace,
                    TokenKind::EndOfInput]);
}

#[test]
fn two_character_operators_take_the_long_form() {
    assert_eq!(kinds("&& || << <= >> >= == !="),
               vec![TokenKind::LogicalAnd,
                    TokenKind::LogicalOr,
                    TokenKind::ShiftLeft,
                    TokenKind::LessEqual,
                    TokenKind::ShiftRight,
                    TokenKind::GreaterEqual,
                    TokenKind::Equal,
                    TokenKind::NotEqual,
                    TokenKind::EndOfInput]);
}

#[test]
fn short_operators_when_no_long_form_follows() {
    assert_eq!(kinds("& | < > ! ="),
               vec![TokenKind::BitAnd,
                    TokenKind::BitOr,
                    TokenKind::Less,
                    TokenKind::Greater,
                    TokenKind::LogicalNot,
                    TokenKind::Assign,
                    TokenKind::EndOfInput]);
}

#[test]
fn adjacent_long_forms_split_correctly() {
    // `<<=` scans as `<<` followed by `=`.
    assert_eq!(kinds("<<="),
               vec![TokenKind::ShiftLeft, TokenKind::Assign, TokenKind::EndOfInput]);
}

#[test]
fn keywords_are_classified() {
    assert_eq!(kinds("int float boolean string char function if else for while continue break return new"),
               vec![TokenKind::KeywordInt,
                    TokenKind::KeywordFloat,
                    TokenKind::KeywordBoolean,
                    TokenKind::KeywordString,
                    TokenKind::KeywordChar,
                    TokenKind::KeywordFunction,
                    TokenKind::KeywordIf,
                    TokenKind::KeywordElse,
                    TokenKind::KeywordFor,
                    TokenKind::KeywordWhile,
                    TokenKind::KeywordContinue,
                    TokenKind::KeywordBreak,
                    TokenKind::KeywordReturn,
                    TokenKind::KeywordNew,
                    TokenKind::EndOfInput]);
}

#[test]
fn booleans_and_identifiers() {
    let tokens = tokenize("true false truthy _name name2");
    assert_eq!(tokens[0].kind, TokenKind::LiteralTrue);
    assert_eq!(tokens[1].kind, TokenKind::LiteralFalse);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].content, "truthy");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].content, "_name");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].content, "name2");
}

#[test]
fn integer_and_float_literals() {
    let tokens = tokenize("0 123 1.5 0.25 2e10 1.5e-2 9E+3");
    let expected = [("0", TokenKind::LiteralInt),
                    ("123", TokenKind::LiteralInt),
                    ("1.5", TokenKind::LiteralFloat),
                    ("0.25", TokenKind::LiteralFloat),
                    ("2e10", TokenKind::LiteralFloat),
                    ("1.5e-2", TokenKind::LiteralFloat),
                    ("9E+3", TokenKind::LiteralFloat)];
    for (token, (content, kind)) in tokens.iter().zip(expected) {
        assert_eq!(token.content, content);
        assert_eq!(token.kind, kind);
    }
}

#[test]
fn number_glued_to_letter_is_a_parse_error_token() {
    let tokens = tokenize("123a");
    assert_eq!(tokens[0].kind, TokenKind::ParseError);
    assert_eq!(tokens[0].content, "123a");
    assert_eq!(tokens[1].kind, TokenKind::EndOfInput);
}

#[test]
fn dangling_exponent_is_a_parse_error_token() {
    let tokens = tokenize("1e");
    assert_eq!(tokens[0].kind, TokenKind::ParseError);
}

#[test]
fn integer_then_dot_without_digits_splits() {
    // `1.` stops the machine after the dot: `1` then `.`.
    assert_eq!(kinds("1."),
               vec![TokenKind::ParseError, TokenKind::EndOfInput]);
    // `1.5.5` scans as a float, a dot, and an int.
    assert_eq!(kinds("1.5.5"),
               vec![TokenKind::LiteralFloat,
                    TokenKind::Dot,
                    TokenKind::LiteralInt,
                    TokenKind::EndOfInput]);
}

#[test]
fn leading_zero_terminates_the_integer() {
    // After `0` only a dot extends the literal, so `00` is two tokens.
    assert_eq!(kinds("00"),
               vec![TokenKind::LiteralInt, TokenKind::LiteralInt, TokenKind::EndOfInput]);
}

#[test]
fn char_literal_content() {
    let tokens = tokenize("'a' 'Z'");
    assert_eq!(tokens[0].kind, TokenKind::LiteralChar);
    assert_eq!(tokens[0].content, "a");
    assert_eq!(tokens[1].content, "Z");
}

#[test]
fn empty_char_literal_is_rejected() {
    let mut lexer = Lexer::from_source("''");
    assert!(matches!(lexer.next_token(), Err(SyntaxError::EmptyCharLiteral { .. })));
}

#[test]
fn multi_character_literal_is_rejected() {
    let mut lexer = Lexer::from_source("'ab'");
    assert!(matches!(lexer.next_token(), Err(SyntaxError::MultiCharacterLiteral { .. })));
}

#[test]
fn string_literal_keeps_quotes_and_expands_escapes() {
    let tokens = tokenize("\"foo\"");
    assert_eq!(tokens[0].kind, TokenKind::LiteralString);
    assert_eq!(tokens[0].content, "\"foo\"");

    let tokens = tokenize("\"a\\tb\\n\\\"c\\\"\"");
    assert_eq!(tokens[0].content, "\"a\tb\n\"c\"\"");
}

#[test]
fn escaped_backslash_before_closing_quote() {
    let tokens = tokenize("\"a\\\\\"");
    assert_eq!(tokens[0].kind, TokenKind::LiteralString);
    assert_eq!(tokens[0].content, "\"a\\\"");
}

#[test]
fn unterminated_string_is_rejected() {
    let mut lexer = Lexer::from_source("\"abc");
    assert!(matches!(lexer.next_token(), Err(SyntaxError::UnterminatedString { .. })));
}

#[test]
fn string_broken_by_newline_is_rejected() {
    let mut lexer = Lexer::from_source("\"ab\ncd\"");
    assert!(matches!(lexer.next_token(), Err(SyntaxError::StringAcrossLines { .. })));
}

#[test]
fn unknown_escape_is_rejected() {
    let mut lexer = Lexer::from_source("\"a\\qb\"");
    assert!(matches!(lexer.next_token(), Err(SyntaxError::InvalidEscape { escape: 'q', .. })));
}

#[test]
fn unknown_character_is_rejected() {
    let mut lexer = Lexer::from_source("@");
    assert!(matches!(lexer.next_token(), Err(SyntaxError::UnknownToken { .. })));
}

#[test]
fn end_of_input_is_idempotent() {
    let mut lexer = Lexer::from_source("1");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::LiteralInt);
    for _ in 0..3 {
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::EndOfInput);
    }
}

#[test]
fn rewind_reproduces_the_token_sequence() {
    let source = "for (1; 1 < 2; 3) { \"text\" + 'c'; }\nreturn 1.5e-2;";
    let mut lexer = Lexer::from_source(source);

    let mut first = Vec::new();
    loop {
        let token = lexer.next_token().unwrap();
        let kind = token.kind;
        first.push(token);
        if kind == TokenKind::EndOfInput {
            break;
        }
    }

    lexer.rewind().unwrap();

    let mut second = Vec::new();
    loop {
        let token = lexer.next_token().unwrap();
        let kind = token.kind;
        second.push(token);
        if kind == TokenKind::EndOfInput {
            break;
        }
    }

    assert_eq!(first, second);
}

#[test]
fn line_numbers_are_one_based_and_advance() {
    let tokens = tokenize("1\n2\n3");
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens[2].line, 3);
}

#[test]
fn position_tracks_total_characters() {
    let mut lexer = Lexer::from_source("12 34");
    lexer.next_token().unwrap();
    let after_first = lexer.position().total_chars_read;
    lexer.next_token().unwrap();
    assert!(lexer.position().total_chars_read > after_first);
}
