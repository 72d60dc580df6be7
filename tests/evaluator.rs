use keel::{
    ast::Expr,
    error::Error,
    eval_expression,
    interpreter::{
        lexer::Lexer,
        parser::core::Parser,
        types::VariableType,
        value::Value,
    },
    run_script,
};

fn eval(source: &str) -> Value {
    eval_expression(source).unwrap_or_else(|e| panic!("evaluating '{source}' failed: {e}"))
}

fn assert_execute_error(source: &str) {
    match eval_expression(source) {
        Err(Error::Execute(_)) => {},
        Err(e) => panic!("'{source}' failed with the wrong kind: {e}"),
        Ok(v) => panic!("'{source}' evaluated to {v} but must be an execute error"),
    }
}

#[test]
fn integer_arithmetic() {
    assert_eq!(eval("1 + 2"), Value::Integer(3));
    assert_eq!(eval("8 - 5"), Value::Integer(3));
    assert_eq!(eval("7 * 9"), Value::Integer(63));
    assert_eq!(eval("7 / 2"), Value::Integer(3));
    assert_eq!(eval("(0 - 7) / 2"), Value::Integer(-3));
    assert_eq!(eval("7 % 3"), Value::Integer(1));
    assert_eq!(eval("(0 - 7) % 3"), Value::Integer(-1));
}

#[test]
fn mixed_arithmetic_promotes_to_floating() {
    assert_eq!(eval("1 + 2.5"), Value::Floating(3.5));
    assert_eq!(eval("2.5 + 1"), Value::Floating(3.5));
    assert_eq!(eval("7.0 / 2"), Value::Floating(3.5));
    assert_eq!(eval("1.5 * 2"), Value::Floating(3.0));
    assert_eq!(eval("4 - 0.5"), Value::Floating(3.5));
}

#[test]
fn integer_arithmetic_wraps_on_overflow() {
    assert_eq!(eval("2147483647 + 1"), Value::Integer(i32::MIN));
    assert_eq!(eval("(0 - 2147483647 - 1) - 1"), Value::Integer(i32::MAX));
    assert_eq!(eval("65536 * 65536"), Value::Integer(0));
    // Negating the minimum wraps back onto itself.
    assert_eq!(eval("-(0 - 2147483647 - 1)"), Value::Integer(i32::MIN));
}

#[test]
fn division_by_zero_is_an_execute_error() {
    assert_execute_error("10 / 0");
    assert_execute_error("10 % 0");
    assert_execute_error("10.0 / 0.0");
    assert_execute_error("10 / (1 - 1)");
}

#[test]
fn string_concatenation_and_comparison() {
    assert_eq!(eval("\"foo\" + \"bar\""), Value::String("foobar".to_string()));
    assert_eq!(eval("\"\" + \"x\""), Value::String("x".to_string()));
    assert_eq!(eval("\"abc\" < \"abd\""), Value::Boolean(true));
    assert_eq!(eval("\"abc\" == \"abc\""), Value::Boolean(true));
    assert_eq!(eval("\"b\" >= \"a\""), Value::Boolean(true));
}

#[test]
fn character_comparison_uses_code_points() {
    assert_eq!(eval("'a' < 'b'"), Value::Boolean(true));
    assert_eq!(eval("'z' > 'a'"), Value::Boolean(true));
    assert_eq!(eval("'x' == 'x'"), Value::Boolean(true));
    assert_eq!(eval("'x' != 'y'"), Value::Boolean(true));
}

#[test]
fn numeric_comparison_crosses_the_type_divide() {
    assert_eq!(eval("1 == 1.0"), Value::Boolean(true));
    assert_eq!(eval("1 < 1.5"), Value::Boolean(true));
    assert_eq!(eval("2.5 > 2"), Value::Boolean(true));
    assert_eq!(eval("3 <= 3.0"), Value::Boolean(true));
    assert_eq!(eval("1 != 2"), Value::Boolean(true));
}

#[test]
fn bitwise_operators() {
    assert_eq!(eval("12 & 10"), Value::Integer(8));
    assert_eq!(eval("12 | 10"), Value::Integer(14));
    assert_eq!(eval("12 ^ 10"), Value::Integer(6));
    assert_eq!(eval("~0"), Value::Integer(-1));
    assert_eq!(eval("~5"), Value::Integer(-6));
}

#[test]
fn shifts_reduce_their_count_modulo_32() {
    assert_eq!(eval("1 << 4"), Value::Integer(16));
    assert_eq!(eval("1 << 32"), Value::Integer(1));
    assert_eq!(eval("1 << 33"), Value::Integer(2));
    assert_eq!(eval("16 >> 2"), Value::Integer(4));
    assert_eq!(eval("16 >> 34"), Value::Integer(4));
    // `>>` is arithmetic: the sign extends.
    assert_eq!(eval("(0 - 8) >> 1"), Value::Integer(-4));
}

#[test]
fn negative_shift_counts_are_execute_errors() {
    assert_execute_error("1 << (0 - 1)");
    assert_execute_error("1 >> (0 - 1)");
}

#[test]
fn unary_operators() {
    assert_eq!(eval("-5"), Value::Integer(-5));
    assert_eq!(eval("-2.5"), Value::Floating(-2.5));
    assert_eq!(eval("!true"), Value::Boolean(false));
    assert_eq!(eval("!false"), Value::Boolean(true));
    assert_eq!(eval("!(1 == 2)"), Value::Boolean(true));
}

#[test]
fn short_circuit_skips_the_right_operand() {
    assert_eq!(eval("false && (1 / 0 == 0)"), Value::Boolean(false));
    assert_eq!(eval("true || (1 / 0 == 0)"), Value::Boolean(true));
    // Without the short circuit the error surfaces.
    assert_execute_error("true && (1 / 0 == 0)");
    assert_execute_error("false || (1 / 0 == 0)");
}

#[test]
fn casts_follow_the_matrix() {
    assert_eq!(eval("(float) 3"), Value::Floating(3.0));
    assert_eq!(eval("(int) 3.9"), Value::Integer(3));
    assert_eq!(eval("(int) -3.9"), Value::Integer(-3));
    assert_eq!(eval("(int) 'A'"), Value::Integer(65));
    // Identity casts return the operand unchanged.
    assert_eq!(eval("(int) 7"), Value::Integer(7));
    assert_eq!(eval("(boolean) true"), Value::Boolean(true));
    assert_eq!(eval("(string) \"x\""), Value::String("x".to_string()));
    assert_eq!(eval("(char) 'x'"), Value::Character(b'x'));
}

#[test]
fn forbidden_casts_are_type_errors_at_evaluation() {
    for source in ["(int) true",
                   "(boolean) 1",
                   "(string) 1",
                   "(char) 65",
                   "(float) \"1.5\"",
                   "(int) \"1\"",
                   "(char) \"x\"",
                   "(boolean) \"true\""]
    {
        match eval_expression(source) {
            Err(Error::Type(_)) => {},
            Err(e) => panic!("'{source}' failed with the wrong kind: {e}"),
            Ok(v) => panic!("'{source}' evaluated to {v} but must be a type error"),
        }
    }
}

#[test]
fn int_float_casts_round_trip() {
    for value in [0, 1, -1, 4096, -4096, i32::MAX, i32::MIN] {
        let literal = Expr::literal(Value::Integer(value), 1, 1);
        let widened = Expr::cast(VariableType::Floating, literal, 1, 1);
        let back = Expr::cast(VariableType::Integer, widened, 1, 1);
        assert_eq!(back.evaluate().unwrap(), Value::Integer(value));
    }
}

#[test]
fn float_to_int_truncates_toward_zero() {
    for (source, expected) in [("2.75", 2), ("0.99", 0), ("(0.0 - 2.75)", -2), ("5.0", 5)] {
        assert_eq!(eval(&format!("(int) {source}")), Value::Integer(expected));
    }
}

#[test]
fn evaluated_values_match_static_types() {
    for source in ["1 + 2",
                   "1 + 2.5",
                   "\"a\" + \"b\"",
                   "1 < 2",
                   "true && false",
                   "-1.5",
                   "~7",
                   "(float) 1",
                   "new int[3]"]
    {
        let mut parser = Parser::new(Lexer::from_source(source)).unwrap();
        let expr = parser.parse_expression().unwrap();
        let value = expr.evaluate().unwrap();
        assert_eq!(value.variable_type(),
                   expr.static_type(),
                   "value/static type mismatch for '{source}'");
    }
}

#[test]
fn new_builds_nested_zero_filled_arrays() {
    let value = eval("new int[2][3]");
    let Value::Array(outer) = value else {
        panic!("expected an array");
    };
    assert_eq!(outer.len(), 2);
    for inner in outer.iter() {
        let Value::Array(elements) = inner else {
            panic!("expected a nested array");
        };
        assert_eq!(elements.len(), 3);
        for element in elements.iter() {
            assert_eq!(*element, Value::Integer(0));
        }
    }
}

#[test]
fn new_zero_values_per_type() {
    for (source, expected) in [("new float[1]", Value::Floating(0.0)),
                               ("new boolean[1]", Value::Boolean(false)),
                               ("new string[1]", Value::String(String::new())),
                               ("new char[1]", Value::Character(b'\0'))]
    {
        let Value::Array(elements) = eval(source) else {
            panic!("expected an array");
        };
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0], expected);
    }
}

#[test]
fn new_with_zero_and_computed_dimensions() {
    let Value::Array(elements) = eval("new int[0]") else {
        panic!("expected an array");
    };
    assert!(elements.is_empty());

    let Value::Array(elements) = eval("new int[1 + 1]") else {
        panic!("expected an array");
    };
    assert_eq!(elements.len(), 2);
}

#[test]
fn negative_array_dimension_is_an_execute_error() {
    assert_execute_error("new int[0 - 1]");
    assert_execute_error("new int[2][0 - 3]");
}

#[test]
fn statements_thread_control_flow() {
    assert_eq!(run_script("return 42;").unwrap(), Some(Value::Integer(42)));
    assert_eq!(run_script("return;").unwrap(), None);
    assert_eq!(run_script("1 + 1;").unwrap(), None);
    assert_eq!(run_script("").unwrap(), None);
}

#[test]
fn while_loops_absorb_break() {
    assert_eq!(run_script("while (true) { break; }").unwrap(), None);
    assert_eq!(run_script("while (true) break;").unwrap(), None);
    assert_eq!(run_script("while (false) { 1 / 0; }").unwrap(), None);
}

#[test]
fn loops_forward_return_with_its_value() {
    assert_eq!(run_script("while (true) { return 7; }").unwrap(),
               Some(Value::Integer(7)));
    assert_eq!(run_script("for (0; true; 0) { return \"out\"; }").unwrap(),
               Some(Value::String("out".to_string())));
    assert_eq!(run_script("while (true) { while (true) { break; } return 1; }").unwrap(),
               Some(Value::Integer(1)));
}

#[test]
fn for_loops_run_init_and_exit_on_false_conditions() {
    assert_eq!(run_script("for (1 + 1; false; 0) { 1 / 0; }").unwrap(), None);
    // The init expression runs exactly once, even when the body never does.
    match run_script("for (1 / 0; false; 0) { 1; }") {
        Err(Error::Execute(_)) => {},
        other => panic!("expected an execute error, got {other:?}"),
    }
}

#[test]
fn continue_reaches_the_update_expression() {
    // `continue` re-evaluates the update, so its error surfaces.
    match run_script("for (0; true; 1 / 0) { continue; }") {
        Err(Error::Execute(_)) => {},
        other => panic!("expected an execute error, got {other:?}"),
    }
    // `break` exits before the update is touched.
    assert_eq!(run_script("for (0; true; 1 / 0) { break; }").unwrap(), None);
}

#[test]
fn blocks_stop_at_the_first_unwinding_statement() {
    assert_eq!(run_script("{ { return 2; } 1 / 0; }").unwrap(), Some(Value::Integer(2)));
    assert_eq!(run_script("while (true) { break; 1 / 0; }").unwrap(), None);
}

#[test]
fn top_level_break_and_continue_are_program_errors() {
    match run_script("break;") {
        Err(Error::Execute(e)) => {
            assert!(e.to_string().contains("break"), "message was: {e}");
        },
        other => panic!("expected an execute error, got {other:?}"),
    }
    match run_script("continue;") {
        Err(Error::Execute(_)) => {},
        other => panic!("expected an execute error, got {other:?}"),
    }
}

#[test]
fn execute_error_messages_name_the_failure() {
    let message = eval_expression("10 / 0").unwrap_err().to_string();
    assert!(message.starts_with("[execute error]"), "message was: {message}");
    assert!(message.contains("division by zero"), "message was: {message}");

    let message = eval_expression("1 << (0 - 1)").unwrap_err().to_string();
    assert!(message.contains("negative"), "message was: {message}");
}
