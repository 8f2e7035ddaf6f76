use std::{cell::RefCell, rc::Rc};

use cinder::{
    error::ErrorKind,
    get_result_with_limits,
    interpreter::{
        evaluator::core::{Engine, Limits},
        object::{core::Object, host::HostObject},
        value::core::Value,
    },
};

/// A host counter exposing `value`, `step(n)` and indexing by offset.
struct Counter {
    value: RefCell<i64>,
}

impl HostObject for Counter {
    fn call(&self, params: Value) -> Result<Value, ErrorKind> {
        let step = if params.is_empty() { 1 } else { params.to_int()? };
        *self.value.borrow_mut() += step;
        Ok(Value::Int(*self.value.borrow()))
    }

    fn item(&self, name: &str) -> Result<Value, ErrorKind> {
        match name {
            "value" => Ok(Value::Int(*self.value.borrow())),
            _ => Err(ErrorKind::UnknownVariable { name: name.to_string() }),
        }
    }

    fn index(&self, index: &Value) -> Result<Value, ErrorKind> {
        Ok(Value::Int(*self.value.borrow() + index.to_int()?))
    }

    fn describe(&self) -> String {
        format!("counter({})", self.value.borrow())
    }
}

/// A host object that records everything assigned to it.
#[derive(Default)]
struct Sink {
    received: Rc<RefCell<Vec<Value>>>,
}

impl HostObject for Sink {
    fn set(&self, value: Value) -> Result<Value, ErrorKind> {
        self.received.borrow_mut().push(value.clone());
        Ok(value)
    }
}

fn limited(max_depth: usize, max_iterations: Option<u64>) -> Limits {
    Limits { max_depth,
             max_iterations }
}

#[test]
fn host_scalars_are_assignable_variables() {
    let mut engine = Engine::new();
    engine.add("rate", Value::Int(3));
    engine.add("name", Value::from("cinder"));

    assert_eq!(engine.eval("rate * 14").unwrap(), Value::Int(42));
    assert_eq!(engine.eval("name + \"!\"").unwrap(), Value::from("cinder!"));

    engine.eval("rate = 5").unwrap();
    assert_eq!(engine.eval("rate").unwrap(), Value::Int(5));
}

#[test]
fn evaluations_do_not_share_script_variables() {
    let mut engine = Engine::new();
    assert_eq!(engine.eval("x = 7; x").unwrap(), Value::Int(7));
    assert_eq!(engine.eval("x").unwrap(), Value::Empty);
}

#[test]
fn host_objects_answer_the_object_protocol() {
    let mut engine = Engine::new();
    engine.add("counter", Object::host(Counter { value: RefCell::new(10) }));

    assert_eq!(engine.eval("counter()").unwrap(), Value::Int(11));
    assert_eq!(engine.eval("counter(4); counter.value").unwrap(), Value::Int(15));
    assert_eq!(engine.eval("counter[2]").unwrap(), Value::Int(17));
    assert_eq!(engine.eval("\"\" + counter").unwrap(), Value::from("counter(15)"));

    let err = engine.eval("counter.missing").unwrap_err();
    assert_eq!(err.kind,
               ErrorKind::UnknownVariable { name: "missing".to_string() });
}

#[test]
fn unsupported_host_operations_are_type_mismatches() {
    let mut engine = Engine::new();
    engine.add("counter", Object::host(Counter { value: RefCell::new(0) }));

    assert_eq!(engine.eval("new counter").unwrap_err().kind, ErrorKind::TypeMismatch);
    assert_eq!(engine.eval("counter = 1").unwrap_err().kind, ErrorKind::TypeMismatch);
}

#[test]
fn host_objects_receive_assignments() {
    let sink = Sink::default();
    let received = Rc::clone(&sink.received);

    let mut engine = Engine::new();
    engine.add("out", Object::host(sink));
    engine.eval("out = 1 + 1; out = \"done\"").unwrap();

    assert_eq!(*received.borrow(), vec![Value::Int(2), Value::from("done")]);
}

#[test]
fn functions_see_host_bindings() {
    let mut engine = Engine::new();
    engine.add("counter", Object::host(Counter { value: RefCell::new(0) }));
    let value = engine.eval("f = sub(x) counter(x) * 2; f(3)").unwrap();
    assert_eq!(value, Value::Int(6));
}

#[test]
fn iteration_limit_stops_runaway_loops() {
    let mut engine = Engine::with_limits(limited(64, Some(1000)));
    let err = engine.eval("for (i = 0; 1; i++) 0").unwrap_err();
    assert_eq!(err.kind, ErrorKind::IterationLimit);

    let value = engine.eval("s = 0; for (i = 0; i < 1000; i++) s += 1; s").unwrap();
    assert_eq!(value, Value::Int(1000));
}

#[test]
fn recursion_limit_stops_runaway_recursion() {
    let err = get_result_with_limits("f = sub(n) f(n + 1); f(0)", false, limited(8, None))
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::RecursionLimit);

    let err = get_result_with_limits("((((((((((1))))))))))", false, limited(8, None)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::RecursionLimit);

    let value = get_result_with_limits("((((1))))", false, limited(8, None)).unwrap();
    assert_eq!(value, Value::Int(1));
}

#[test]
fn default_recursion_limit_is_reported_not_overflowed() {
    let handle = std::thread::Builder::new().stack_size(64 * 1024 * 1024)
                                            .spawn(|| {
                                                Engine::new().eval("f = sub(n) f(n + 1); f(0)")
                                                             .unwrap_err()
                                                             .kind
                                            })
                                            .unwrap();
    assert_eq!(handle.join().unwrap(), ErrorKind::RecursionLimit);
}

#[test]
fn deeply_nested_expressions_hit_the_recursion_limit() {
    let scripts = [format!("{}1", "- ".repeat(100_000)),
                   format!("{}1", "! ".repeat(100_000)),
                   format!("{}1", "x = ".repeat(100_000)),
                   format!("{}2", "2 ^ ".repeat(100_000)),
                   format!("{}1", "if (1) ".repeat(100_000)),
                   format!("{}1", "sub(x) ".repeat(100_000)),
                   format!("{}0", "for (;;) ".repeat(100_000)),
                   format!("{}1", "object ".repeat(100_000))];
    for script in &scripts {
        let err = Engine::new().eval(script).unwrap_err();
        assert_eq!(err.kind, ErrorKind::RecursionLimit, "script starts {}", &script[..20]);
    }
}

#[test]
fn nesting_within_the_limit_still_evaluates() {
    let mut engine = Engine::new();
    let negated = format!("{}1", "- ".repeat(50));
    assert_eq!(engine.eval(&negated).unwrap(), Value::Int(1));
    let power = format!("{}1", "1 ^ ".repeat(40));
    assert_eq!(engine.eval(&power).unwrap(), Value::Int(1));

    let chained = format!("{}3", "1 ? 2 : ".repeat(10_000));
    assert_eq!(engine.eval(&chained).unwrap(), Value::Int(2));
}

#[test]
fn depth_is_released_after_an_error() {
    let mut engine = Engine::with_limits(limited(8, None));
    assert!(engine.eval("f = sub(n) f(n + 1); f(0)").is_err());
    assert_eq!(engine.eval("(((1)))").unwrap(), Value::Int(1));
}

#[test]
fn errors_carry_position_and_line() {
    let mut engine = Engine::new();

    let err = engine.eval("a = 1;\nb = 2;\nc = a / (b - 2)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::DivisionByZero);
    assert_eq!(err.line, 3);

    let err = engine.eval("x = 1 $ 2").unwrap_err();
    assert_eq!(err.kind, ErrorKind::SyntaxError);
    assert_eq!(err.position, 6);
    assert_eq!(err.line, 1);
}

#[test]
fn errors_inside_functions_surface_their_kind() {
    let mut engine = Engine::new();
    let err = engine.eval("f = sub(x) x / 0;\nf(1)").unwrap_err();
    assert_eq!(err.kind, ErrorKind::DivisionByZero);
    assert_eq!(err.line, 2);
}
