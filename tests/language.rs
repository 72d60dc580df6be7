use keel::{error::Error, eval_expression, interpreter::value::Value, run_script};

fn assert_success(src: &str) {
    if let Err(e) = run_script(src) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run_script(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn assert_returns(src: &str, expected: Value) {
    match run_script(src) {
        Ok(Some(value)) => assert_eq!(value, expected),
        Ok(None) => panic!("Script returned no value: {src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

#[test]
fn arithmetic_promotion() {
    let value = eval_expression("1 + 2.5").unwrap();
    assert_eq!(value, Value::Floating(3.5));
    assert_returns("return 1 + 2.5;", Value::Floating(3.5));
}

#[test]
fn string_concatenation() {
    assert_returns("return \"foo\" + \"bar\";", Value::String("foobar".to_string()));
}

#[test]
fn short_circuit_hides_the_right_operand() {
    assert_returns("return false && (1 / 0 == 0);", Value::Boolean(false));
    assert_returns("return true || (1 / 0 == 0);", Value::Boolean(true));
}

#[test]
fn division_by_zero_fails() {
    assert_failure("return 10 / 0;");
    assert_failure("10 / 0;");
}

#[test]
fn ill_typed_operands_fail_before_running() {
    assert_failure("return 1 + true;");
    // The pipeline rejects the program even though the bad operator sits
    // behind a short circuit that would skip it at runtime.
    assert_failure("false && (1 + true == 2);");
}

#[test]
fn nested_new_builds_a_matrix_of_zeros() {
    let value = run_script("return new int[2][3];").unwrap().unwrap();
    let Value::Array(rows) = value else {
        panic!("expected an array");
    };
    assert_eq!(rows.len(), 2);
    for row in rows.iter() {
        let Value::Array(cells) = row else {
            panic!("expected a nested array");
        };
        assert_eq!(cells.len(), 3);
        assert!(cells.iter().all(|cell| *cell == Value::Integer(0)));
    }
}

#[test]
fn loops_terminate_through_break() {
    assert_success("while (true) { break; }");
    assert_success("for (0; 1 < 2; 0) { break; }");
    assert_returns("while (true) { return \"done\"; }", Value::String("done".to_string()));
}

#[test]
fn malformed_numbers_fail_the_whole_script() {
    assert_failure("return 123a;");
    assert_failure("return 1e;");
}

#[test]
fn statements_and_expressions_compose() {
    assert_returns("1 + 1;\n\"side\" + \"effect\";\nreturn (int) ((1 + 2.5) * 2.0);",
                   Value::Integer(7));
    assert_returns("{ { } }\nreturn ~(1 << 4) & 255;", Value::Integer(239));
}

#[test]
fn error_kinds_render_with_their_tag() {
    let message = run_script("return 1 / 0;").unwrap_err().to_string();
    assert!(message.starts_with("[execute error]"), "message was: {message}");

    let message = run_script("return 1 + true;").unwrap_err().to_string();
    assert!(message.starts_with("[type error]"), "message was: {message}");

    let message = run_script("return @;").unwrap_err().to_string();
    assert!(message.starts_with("[syntax error]"), "message was: {message}");

    match run_script("return name;") {
        Err(e @ Error::Symbol(_)) => {
            assert!(e.to_string().starts_with("[symbol error]"));
        },
        other => panic!("expected a symbol error, got {other:?}"),
    }
}
