use std::io::{self, Write};

use macaque::{
    RunOptions,
    error::ScriptError,
    interpreter::{executor::Interpreter, value::Value},
    run_script,
};

fn output_of(src: &str) -> String {
    let mut out = Vec::new();
    if let Err(e) = run_script(src, &mut out, RunOptions::default()) {
        panic!("Script failed: {e:?}");
    }
    String::from_utf8(out).expect("output is UTF-8")
}

fn failure_of(src: &str) -> (ScriptError, String) {
    let mut out = Vec::new();
    match run_script(src, &mut out, RunOptions::default()) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(mut errors) => {
            assert_eq!(errors.len(), 1, "a stopping run reports exactly one error");
            (errors.remove(0), String::from_utf8(out).expect("output is UTF-8"))
        },
    }
}

fn test_result(declaration: &str) -> String {
    output_of(&format!("var x = {declaration}\nif (x)"))
}

#[test]
fn integer_truthiness_is_at_least_one() {
    for n in [i64::MIN, -100, -1, 0, 1, 2, 42, i64::MAX] {
        let expected = if n >= 1 { "=> true\n" } else { "=> false\n" };
        assert_eq!(test_result(&n.to_string()), expected, "var x = {n}");
    }
}

#[test]
fn boolean_truthiness_is_the_value() {
    assert_eq!(test_result("true"), "=> true\n");
    assert_eq!(test_result("false"), "=> false\n");
}

#[test]
fn string_truthiness_is_false_only_for_length_two() {
    let cases = [("\"\"", true),
                 ("\"a\"", true),
                 ("\"ab\"", false),
                 ("'ok'", false),
                 ("\"abc\"", true),
                 ("'hello world'", true),
                 ("'éé'", false),
                 ("'12'", false)];

    for (literal, truthy) in cases {
        assert_eq!(test_result(literal), format!("=> {truthy}\n"), "var x = {literal}");
    }
}

#[test]
fn print_round_trips_each_type() {
    assert_eq!(output_of("var x = 5\nprint x"), "5\n");
    assert_eq!(output_of("var x = 'hello'\nprint x"), "hello\n");
    assert_eq!(output_of("var x = \"hello\"\nprint x"), "hello\n");
    assert_eq!(output_of("var x = true\nprint x"), "true\n");
    assert_eq!(output_of("var x = -17\nprint x"), "-17\n");
}

#[test]
fn print_rejoins_quoted_literals() {
    assert_eq!(output_of("print 'a b c'"), "a b c\n");
    assert_eq!(output_of("print \"a   b\""), "a b\n");
    assert_eq!(output_of("print 'it''s'"), "it''s\n");
}

#[test]
fn print_concatenates_without_separator() {
    assert_eq!(output_of("var a = 1\nvar b = two\nprint a b true"), "1twotrue\n");
    assert_eq!(output_of("var name = 'world'\nprint 'hello, ' name '!'"), "hello, world!\n");
}

#[test]
fn print_quoted_name_is_not_a_variable() {
    assert_eq!(output_of("var x = 5\nprint 'x'"), "x\n");
}

#[test]
fn print_unbound_word_is_literal() {
    assert_eq!(output_of("print hello"), "hello\n");
    assert_eq!(output_of("print 007"), "7\n");
}

#[test]
fn var_overwrites_with_any_type() {
    assert_eq!(output_of("var x = 1\nvar x = 'one'\nprint x\nif (x)"), "one\n=> true\n");
    assert_eq!(output_of("var x = 'no'\nvar x = 0\nif (x)"), "=> false\n");
}

#[test]
fn var_copies_the_current_value() {
    assert_eq!(output_of("var a = 3\nvar b = a\nvar a = 'z'\nprint b a"), "3z\n");
}

#[test]
fn var_groups_quotes_like_print() {
    assert_eq!(output_of("var x = 'a' 'b'\nprint x"), output_of("print 'a' 'b'"));
    assert_eq!(output_of("var x = 'a b   c'\nprint x"), "a b c\n");
    assert_eq!(output_of("var n = 3\nvar s = n ' apples'\nprint s\nif (s)"),
               "3 apples\n=> true\n");
}

#[test]
fn var_with_several_values_binds_a_string() {
    assert_eq!(output_of("var x = 1 2\nprint x\nif (x)"), "12\n=> false\n");
    assert_eq!(output_of("var s = hello world\nprint s"), "helloworld\n");
}

#[test]
fn var_rejects_unterminated_literal() {
    let (err, out) = failure_of("var x = 'oops\nprint x");

    assert!(matches!(err, ScriptError::MalformedStatement { line: 1, .. }));
    assert!(out.is_empty());
}

#[test]
fn integer_beyond_i64_is_a_string() {
    assert_eq!(output_of("var big = 99999999999999999999\nprint big\nif (big)"),
               "99999999999999999999\n=> true\n");
}

#[test]
fn booleans_are_lowercase_only() {
    assert_eq!(output_of("var b = True\nprint b\nif (b)"), "True\n=> true\n");
}

#[test]
fn if_of_undeclared_variable_is_an_error() {
    let (err, out) = failure_of("print start\nif (missing)");

    assert!(matches!(err, ScriptError::UnknownVariableType { ref name, line: 2 } if name == "missing"));
    assert_eq!(out, "start\n");
}

#[test]
fn constant_tests_are_pointless() {
    for src in ["if (true)", "if (false)", "if ()"] {
        let (err, out) = failure_of(src);
        assert!(matches!(err, ScriptError::PointlessTest { line: 1, .. }), "{src}: {err:?}");
        assert!(out.is_empty());
    }
}

#[test]
fn malformed_tests_are_rejected() {
    let (err, _) = failure_of("var x = 1\nif x");
    assert!(matches!(err, ScriptError::UnparenthesizedTest { line: 2, .. }));

    let (err, _) = failure_of("var x = 1\nif (x");
    assert!(matches!(err, ScriptError::MissingClosingParen { line: 2, .. }));

    let (err, _) = failure_of("var x = 1\nif ((x))");
    assert!(matches!(err, ScriptError::MissingClosingParen { line: 2, .. }));

    let (err, _) = failure_of("var x = 1\nif ( x )");
    assert!(matches!(err, ScriptError::MissingClosingParen { line: 2, .. }));
}

#[test]
fn short_statements_are_malformed() {
    for src in ["print", "var", "var x", "var x =", "var x 5", "if", "if (x) then"] {
        let (err, _) = failure_of(src);
        assert!(matches!(err, ScriptError::MalformedStatement { line: 1, .. }), "{src}: {err:?}");
    }
}

#[test]
fn unterminated_literal_is_malformed() {
    let (err, out) = failure_of("print 'oops\nprint 'after'");

    assert!(matches!(err, ScriptError::MalformedStatement { line: 1, .. }));
    assert!(out.is_empty());
}

#[test]
fn unknown_keyword_stops_the_run() {
    let (err, out) = failure_of("print 1\nloop forever\nprint 2");

    assert!(matches!(err, ScriptError::UnknownIdentifier { ref token, line: 2 } if token == "loop"));
    assert_eq!(out, "1\n");
    assert_eq!(err.to_string(), "line 2: unknown identifier loop");
}

#[test]
fn keywords_are_case_sensitive() {
    let (err, _) = failure_of("PRINT 1");
    assert!(matches!(err, ScriptError::UnknownIdentifier { .. }));
}

#[test]
fn blank_lines_are_skipped_but_counted() {
    assert_eq!(output_of("\n   \nprint a\n\t\nprint b\n"), "a\nb\n");

    let (err, _) = failure_of("\n\n   \nnope");
    assert_eq!(err.line(), 4);
}

#[test]
fn empty_program_prints_nothing() {
    assert_eq!(output_of(""), "");
    assert_eq!(output_of("\n"), "");
}

#[test]
fn windows_line_endings_are_accepted() {
    assert_eq!(output_of("var x = 1\r\nprint x\r\nif (x)\r\n"), "1\n=> true\n");
}

#[test]
fn keep_going_collects_every_error() {
    let mut out = Vec::new();
    let src = "print 1\nbogus\nif (nothing)\nprint 2\nif (true)";
    let errors = run_script(src, &mut out, RunOptions { keep_going: true }).unwrap_err();

    let lines: Vec<usize> = errors.iter().map(ScriptError::line).collect();
    assert_eq!(lines, [2, 3, 5]);
    assert_eq!(out, b"1\n2\n");
}

#[test]
fn keep_going_succeeds_on_clean_programs() {
    let mut out = Vec::new();

    assert!(run_script("print ok", &mut out, RunOptions { keep_going: true }).is_ok());
    assert_eq!(out, b"ok\n");
}

#[test]
fn sessions_do_not_share_variables() {
    let mut first = Interpreter::new(Vec::new());
    let mut second = Interpreter::new(Vec::new());

    first.run("var shared = 1").unwrap();

    assert_eq!(first.store().get("shared"), Some(&Value::Integer(1)));
    assert!(second.store().is_empty());
    assert!(matches!(second.run("if (shared)"), Err(ScriptError::UnknownVariableType { .. })));
}

#[test]
fn store_reflects_bindings_after_a_run() {
    let mut interpreter = Interpreter::new(Vec::new());
    interpreter.run("var b = true\nvar a = 'text'\nvar c = 3\nvar a = 4").unwrap();

    let store = interpreter.store();
    assert_eq!(store.names(), ["a", "b", "c"]);
    assert_eq!(store.get("a"), Some(&Value::Integer(4)));
    assert_eq!(store.get("b"), Some(&Value::Bool(true)));
    assert_eq!(store.len(), 3);
}

struct ClosedOutput;

impl Write for ClosedOutput {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "output closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn output_failure_stops_the_run() {
    let mut interpreter = Interpreter::new(ClosedOutput);
    let result = interpreter.run("var x = 1\nprint x\nvar y = 2");

    assert!(matches!(result, Err(ScriptError::Output { line: 2, .. })));
    assert_eq!(interpreter.store().get("y"), None);
}

#[test]
fn output_failure_stops_a_recovering_run() {
    let mut interpreter = Interpreter::new(ClosedOutput);
    let errors = interpreter.run_recovering("bogus\nvar x = 1\nif (x)\nvar y = 2\nprint y");

    assert_eq!(errors.len(), 2);
    assert!(matches!(errors[0], ScriptError::UnknownIdentifier { line: 1, .. }));
    assert!(matches!(errors[1], ScriptError::Output { line: 3, .. }));
    assert!(!errors[1].is_recoverable());
    assert_eq!(interpreter.store().get("x"), Some(&Value::Integer(1)));
    assert_eq!(interpreter.store().get("y"), None);
}

#[test]
fn output_failure_through_run_script() {
    let errors = run_script("print hi", ClosedOutput, RunOptions { keep_going: true }).unwrap_err();

    assert!(matches!(errors.as_slice(), [ScriptError::Output { line: 1, .. }]));
}
