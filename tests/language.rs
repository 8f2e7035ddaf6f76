use std::fs;

use cinder::{error::ErrorKind, get_result, interpreter::value::core::Value};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_script_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = get_result(&code, false) {
                panic!("Script example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No script examples found in book/src");
}

fn extract_script_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```cinder") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn eval(src: &str) -> Value {
    get_result(src, false).unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"))
}

fn assert_value(src: &str, expected: Value) {
    assert_eq!(eval(src), expected, "script: {src}");
}

fn assert_int(src: &str, expected: i64) {
    assert_value(src, Value::Int(expected));
}

fn assert_double(src: &str, expected: f64) {
    assert_value(src, Value::Double(expected));
}

fn assert_str(src: &str, expected: &str) {
    assert_value(src, Value::Str(expected.to_string()));
}

fn assert_text(src: &str, expected: &str) {
    assert_eq!(eval(src).to_string(), expected, "script: {src}");
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src, false) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str, kind: &ErrorKind) {
    match get_result(src, false) {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail"),
        Err(e) => assert_eq!(&e.kind, kind, "script: {src}"),
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_int("x = 1 + 2; x", 3);
    assert_int("1 + 2 * 3", 7);
    assert_int("(1 + 2) * 3", 9);
    assert_int("7 / 2", 3);
    assert_double("7 / 2.0", 3.5);
    assert_int("7 % 3", 1);
    assert_int("2 ^ 10", 1024);
    assert_int("3^2", 9);
    assert_int("2 ^ 3 ^ 2", 512);
    assert_double("2 ^ -1", 0.5);
    assert_int("-3 + 1", -2);
    assert_text("(3 + 2 * 2 - 4.7) * 3", "6.9");
}

#[test]
fn numeric_literals() {
    assert_int("0x1F + 1", 32);
    assert_double("1.5e1", 15.0);
    assert_double("25d-1", 2.5);
    assert_int("\"10\" * 2", 20);
}

#[test]
fn compound_assignments() {
    assert_int("x = 5; x += 3; x *= 2; x", 16);
    assert_int("x = 5; x -= 7; x", -2);
    assert_int("x = 9; x /= 2; x", 4);
    assert_int("a = b = 4; a + b", 8);
}

#[test]
fn increments() {
    assert_int("x = 5; y = x++; x * 10 + y", 65);
    assert_int("x = 5; ++x", 6);
    assert_int("x = 5; x--; x", 4);
    assert_int("x = 5; --x + x", 8);
}

#[test]
fn truth_values_and_logic() {
    assert_int("true", -1);
    assert_int("false", 0);
    assert_int("~true == false", -1);
    assert_int("!0", -1);
    assert_int("!5", 0);
    assert_int("2 && 3", -1);
    assert_int("0 || 0", 0);
    assert_int("6 & 3 | 8", 10);
    assert_int("1 + 2 == 3", -1);
    assert_int("1 < 2 && 2 < 3", -1);
    assert_int("2 >= 3", 0);
    assert_int("\"ab\" == \"ab\"", -1);
    assert_int("\"ab\" < \"b\"", -1);
    assert_int("2 == 2.0", -1);
}

#[test]
fn short_circuit_skips_side_effects() {
    assert_int("x = 0; 0 && (x = 1); x", 0);
    assert_int("x = 0; 1 || (x = 1); x", 0);
    assert_int("x = 0; 1 && (x = 1); x", 1);
}

#[test]
fn chained_ternaries_group_to_the_left() {
    assert_int("1 ? 2 : 0 ? 3 : 4", 3);
    assert_int("0 ? 2 : 0 ? 3 : 4", 4);
    assert_int("1 ? 0 : 5 ? 3 : 4", 4);
    assert_failure("1 ? 0 ? 1 : 2 : 3", &ErrorKind::SyntaxError);
}

#[test]
fn conditionals() {
    assert_int("1 ? 2 : 3", 2);
    assert_int("0 ? 2 : 3", 3);
    assert_int("0 ? 1 : 0 ? 2 : 3", 3);
    assert_int("1 ? (0 ? 1 : 2) : 3", 2);
    assert_int("x = 0 ? 2 : 3; x", 3);
    assert_int("if (1) 5 else 6", 5);
    assert_int("if (0) 5 else 6", 6);
    assert_value("if (0) 5", Value::Empty);
    assert_int("x = 1; if (0) x = 2; x", 1);
    assert_int("x = 1; if (1) x = 2 else x = 3; x", 2);
}

#[test]
fn strings() {
    assert_str("\"a\" + 1", "a1");
    assert_str("'it''s'", "it's");
    assert_str("\"say \"\"hi\"\"\"", "say \"hi\"");
    assert_str("\"x=\" + 1.5", "x=1.5");
    assert_int("len(\"hello\")", 5);
    assert_str("upper(\"abc\")", "ABC");
    assert_str("lower(\"ABC\")", "abc");
    assert_str("left(\"hello\", 2)", "he");
    assert_str("right(\"hello\", 3)", "llo");
    assert_str("mid(\"hello\", 1, 3)", "ell");
    assert_int("instr(\"hello\", \"l\")", 2);
    assert_str("string(3, \"ab\")", "aaa");
    assert_str("replace(\"a-b-c\", \"-\", \"+\")", "a+b+c");
    assert_str("chr(65) + asc(\"B\")", "A66");
    assert_str("hex(255)", "ff");
    assert_int("rgb(255, 0, 1)", 65_791);
}

#[test]
fn conversions() {
    assert_int("int(\"42\") + 1", 43);
    assert_int("int(2.5)", 3);
    assert_str("str(1.5)", "1.5");
    assert_text("dbl(1)", "1");
    assert_int("date(\"16.10.1974\") == #16.10.1974#", -1);
}

#[test]
fn math_builtins() {
    assert_double("sqrt(9)", 3.0);
    assert_int("abs(-4)", 4);
    assert_int("sgn(-0.5)", -1);
    assert_double("fract(2.5)", 0.5);
    assert_text("fract(2.7)", "0.7");
    assert_double("fract(-2.5)", -0.5);
    assert_int("min(3, 1, 2)", 1);
    assert_int("max(3, 1.5)", 3);
    assert_text("sin(pi() / 2)", "1");
    assert_int("x = rnd(); x >= 0 && x < 1", -1);
}

#[test]
fn dates() {
    assert_text("#16.10.1974# + 1", "17.10.1974");
    assert_text("#16.10.1974# - 1", "15.10.1974");
    assert_text("#17.10.1974# - #16.10.1974#", "1");
    assert_text("#10:30# + 0", "10:30");
    assert_text("#16.10.1974 10:30:15#", "16.10.1974 10:30:15");
    assert_int("day(#16.10.1974#)", 16);
    assert_int("month(#16.10.1974#)", 10);
    assert_int("year(#1.1.74#)", 1974);
    assert_int("year(#1.1.24#)", 2024);
    assert_int("hour(#16.10.1974 10:30#)", 10);
    assert_int("dayofweek(#16.10.1974#)", 3);
    assert_int("dayofyear(#1.2.2000#)", 32);
    assert_int("#16.10.1974# < #17.10.1974#", -1);
}

#[test]
fn midnight_on_the_epoch_day_prints_as_a_date() {
    assert_text("#00:00#", "01.01.1970");
    assert_str("str(#01.01.1970#)", "01.01.1970");
    assert_int("date(str(#00:00#)) == #00:00#", -1);
}

#[test]
fn references_and_indexing() {
    assert_int("x = 1; x[0] = 2; x", 2);
    assert_text("a = (1, 2, 3); a[1] = 9; a", "[1; 9; 3]");
    assert_int("a = (1, 2, 3); a[2]", 3);
    assert_int("a = (5); a", 5);
    assert_int("a = (1, 2, 3); size(a)", 3);
    assert_int("a = (1, 2); add(a, 3); size(a)", 3);
    assert_text("a = (1, 2, 3); remove(a, 0); a", "[2; 3]");
    assert_int("head(1, 2, 3)", 1);
    assert_int("size(tail(1, 2, 3))", 2);
    assert_int("a = ((1, 2), (3, 4)); a[1][0]", 3);
}

#[test]
fn cyclic_arrays_print_without_recursing() {
    assert_text("a = (1, 2); a[0] = a; \"\" + a", "[[...]; 2]");
    assert_text("a = (1, 2); b = (a, 3); a[0] = b; \"\" + a", "[[[...]; 3]; 2]");
    assert_text("a = (1, 2); b = (a, 3); c = (b, 4); a[0] = c; c", "[[[[...]; 2]; 3]; 4]");

    let nested = eval("a = 0; for (i = 0; i < 500; i++) a = (a, i); \"\" + a").to_string();
    assert!(nested.starts_with("[[[[") && nested.contains("[...]"));
    assert!(nested.ends_with("; 499]"));
}

#[test]
fn functions() {
    assert_int("f = sub(x, y) x * y; f(6, 7)", 42);
    assert_int("g = fn(x) x + 1; g(1)", 2);
    assert_int("h = => (x) x * 2; h(4)", 8);
    assert_int("sq = \\x x * x; sq(5)", 25);
    assert_int("f = sub @[0] + @[1]; f(3, 4)", 7);
    assert_int("f = sub(@) size(@); f(1, 2, 3)", 3);
    assert_int("f = sub() 7; f()", 7);
    assert_value("f = sub(x) x; f()", Value::Empty);
}

#[test]
fn closures_share_captured_variables() {
    assert_int("k = 10; f = sub(x) x + k; k = 20; f(1)", 21);
    assert_int("f = sub(x) x + later; later = 5; f(1)", 1);
    assert_int("n = 0; inc = sub() n += 1; inc(); inc(); n", 2);
    assert_int("make = sub(n) sub(x) x * n; twice = make(2); twice(21)", 42);
}

#[test]
fn recursion() {
    assert_int("fact = sub(n) n <= 1 ? 1 : n * fact(n - 1); fact(10)", 3_628_800);
    assert_int("fib = sub(n) n < 2 ? n : fib(n - 1) + fib(n - 2); fib(12)", 144);
}

#[test]
fn for_loops() {
    assert_int("s = 0; for (i = 1; i <= 10; i++) s += i; s", 55);
    assert_int("x = 1; for (;;) x = 2; x", 1);
    assert_int("for (i = 0; i < 3; i++) i * 10", 20);
    assert_value("for (i = 0; i < 0; i++) 1", Value::Empty);

    let area = eval("intr = sub(f, a, b, dx) for (my s = 0, my x = a; x < b; x += dx) s += f(x) * dx;\n\
                     intr(sub(x) x ^ 2, 0, 2, 0.01)").to_double()
                                                      .unwrap();
    assert!(area > 2.6 && area < 2.7, "integral was {area}");

    let area = eval("intr = sub(f, a, b, dx) {for(my s=0, my x=a; x<b; x+=dx) s+=f(x)*dx; s};\n\
                     intr(sub(x) x^2, 0, 2, 0.01)").to_double()
                                                  .unwrap();
    assert!(area > 2.6 && area < 2.7, "integral was {area}");
}

#[test]
fn blocks_and_scopes() {
    assert_int("x = 1; { my x = 2 }; x", 1);
    assert_int("x = 1; { x = 2 }; x", 2);
    assert_value("{ y = 5 }; y", Value::Empty);
    assert_int("{ 1; 2 }", 2);
    assert_value("{ }", Value::Empty);
}

#[test]
fn objects() {
    let point = "Point = object(x, y) { sum = sub() x + y; scale = sub(k) x * k };\n";
    assert_int(&format!("{point}p = new Point(2, 3); p.sum()"), 5);
    assert_int(&format!("{point}p = new Point(2, 3); p.x = 10; p.sum()"), 13);
    assert_int(&format!("{point}p = new Point(2, 3); p.scale(4)"), 8);
    assert_int(&format!("{point}p = new Point(1, 1); q = new Point(5, 5); p.sum() + q.sum()"),
               12);
    assert_int("Counter = object { n = 0; next = sub() n += 1 }; c = new Counter; c.next(); c.next()",
               2);
    assert_failure(&format!("{point}p = new Point(2, 3); p.nope"),
                   &ErrorKind::UnknownVariable { name: "nope".to_string() });
}

#[test]
fn list_combinators() {
    assert_text("map(sub(x) x * 2)(1, 2, 3)", "[2; 4; 6]");
    assert_int("fold(sub(a, b) a + b)(1, 2, 3, 4)", 10);
    assert_text("filter(sub(x) x > 1)(1, 2, 3)", "[2; 3]");
    assert_text("map(sqrt)(16, 9)", "[4; 3]");
}

#[test]
fn statement_separators_and_comments() {
    assert_int("1;;2", 2);
    assert_int("1;", 1);
    assert_int("{ 1; }", 1);
    assert_int("x = 1 // set x\nx + 1", 2);
    assert_value("", Value::Empty);
    assert_value("// nothing", Value::Empty);
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.cn").expect("missing file");
    assert_success(&script);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("x = 1 / 0", &ErrorKind::DivisionByZero);
    assert_failure("5 % 0", &ErrorKind::DivisionByZero);
    assert_failure("1.5 / 0.0", &ErrorKind::DivisionByZero);
}

#[test]
fn syntax_errors() {
    assert_failure("(1 + 2", &ErrorKind::MissingCharacter { expected: ')' });
    assert_failure("a = (1, 2; a", &ErrorKind::MissingCharacter { expected: ')' });
    assert_failure("{ 1", &ErrorKind::MissingCharacter { expected: '}' });
    assert_failure("\"abc", &ErrorKind::MissingCharacter { expected: '"' });
    assert_failure("#1.1.2000", &ErrorKind::MissingCharacter { expected: '#' });
    assert_failure("1 +", &ErrorKind::UnexpectedEndOfInput);
    assert_failure("1 2", &ErrorKind::SyntaxError);
    assert_failure("1e", &ErrorKind::SyntaxError);
    assert_failure("x = $", &ErrorKind::SyntaxError);
    assert_failure("#32.1.2000#", &ErrorKind::SyntaxError);
    assert_failure("f = sub(x)", &ErrorKind::SyntaxError);
    assert_failure("x := 1", &ErrorKind::SyntaxError);
    assert_failure("if (1) 2 else", &ErrorKind::UnexpectedEndOfInput);
    assert_failure("for (i = 0; i < 3", &ErrorKind::UnexpectedEndOfInput);
}

#[test]
fn type_errors() {
    assert_failure("x = 1; x(2)", &ErrorKind::TypeMismatch);
    assert_failure("5 = 3", &ErrorKind::TypeMismatch);
    assert_failure("true = 1", &ErrorKind::TypeMismatch);
    assert_failure("\"a\" - 1", &ErrorKind::TypeMismatch);
    assert_failure("new 5", &ErrorKind::TypeMismatch);
    assert_failure("#1.1.2000# < 5", &ErrorKind::TypeMismatch);
}

#[test]
fn argument_errors() {
    assert_failure("f = sub(x, y) x; f(1)", &ErrorKind::BadParameterCount);
    assert_failure("left(\"abc\")", &ErrorKind::BadParameterCount);
    assert_failure("left(\"abc\", 1, 2)", &ErrorKind::BadParameterCount);
    assert_failure("sin(1, 2)", &ErrorKind::BadParameterCount);
    assert_failure("a = (1, 2); a[2]", &ErrorKind::InvalidArgument);
    assert_failure("a = (1, 2); a[\"x\"]", &ErrorKind::InvalidArgument);
    assert_failure("sqrt(-1)", &ErrorKind::InvalidArgument);
    assert_failure("9223372036854775807 + 1", &ErrorKind::OutOfRange);
    assert_failure("99999999999999999999", &ErrorKind::OutOfRange);
    assert_failure("assert(1 == 2)", &ErrorKind::AssertionFailed);
}

#[test]
fn error_positions() {
    let err = get_result("x = 1;\ny = 1 / 0", false).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DivisionByZero);
    assert_eq!(err.line, 2);

    let err = get_result("x = (1 + 2", false).unwrap_err();
    assert_eq!(err.position, 10);
    assert_eq!(err.to_string(), "Error on line 1: Missing ')' character.");
}
