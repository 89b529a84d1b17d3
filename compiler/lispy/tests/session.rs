//! End-to-end behavior through `Session`.

use lispy::{Session, SessionError};
use lispy_eval::{NumberFormat, Value};
use pretty_assertions::assert_eq;

fn line(session: &Session, source: &str) -> String {
    match session.eval_line(source) {
        Ok(value) => session.render(&value),
        Err(err) => panic!("parse failed for {source:?}: {err}"),
    }
}

fn one(source: &str) -> String {
    line(&Session::default(), source)
}

fn run(session: &Session, source: &str) -> String {
    let mut out = Vec::new();
    if let Err(err) = session.run_source(source, &mut out) {
        panic!("run failed: {err}");
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[test]
fn arithmetic_fold() {
    assert_eq!(one("(+ 1 2 3)"), "6");
    assert_eq!(one("(- 5)"), "-5");
    assert_eq!(one("(/ 1 0)"), "Error: Division by zero");
}

#[test]
fn line_is_implicit_sexpr() {
    assert_eq!(one("+ 1 2"), "3");
    assert_eq!(one(""), "()");
    assert_eq!(one("5"), "5");
}

#[test]
fn list_head_tail() {
    assert_eq!(one("head {1 2 3}"), "{1}");
    assert_eq!(one("tail {1 2 3}"), "{2 3}");
    assert_eq!(one("head {}"), "Error: Function 'head' passed {}!");
}

#[test]
fn quote_eval_round_trip() {
    assert_eq!(one("eval (list + 2 (eval (list * 3 4)))"), one("(+ 2 (* 3 4))"));
    assert_eq!(one("eval {+ 2 (* 3 4)}"), "14");
    assert_eq!(one("eval {head (list 1 2)}"), "{1}");
}

#[test]
fn bindings_persist_across_lines() {
    let session = Session::default();
    assert_eq!(line(&session, "def {x} 5"), "()");
    assert_eq!(line(&session, "x"), "5");
    assert_eq!(line(&session, "def {f} (\\ {a} {def {y} a})"), "()");
    assert_eq!(line(&session, "f 7"), "()");
    assert_eq!(line(&session, "y"), "7");
}

#[test]
fn currying() {
    let session = Session::default();
    line(&session, "def {f} (\\ {a b} {+ a b})");
    assert_eq!(line(&session, "f 1"), "(\\ {b} {+ a b})");
    assert_eq!(line(&session, "(f 1) 2"), "3");
    let err = line(&session, "f 1 2 3");
    assert!(err.contains("too many arguments"), "{err}");
}

#[test]
fn user_defined_fun() {
    let session = Session::default();
    line(
        &session,
        "def {fun} (\\ {args body} {def (head args) (\\ (tail args) body)})",
    );
    line(&session, "fun {add-together x y} {+ x y}");
    assert_eq!(line(&session, "add-together 10 20"), "30");
}

#[test]
fn variadic_formals() {
    let session = Session::default();
    line(&session, "def {sum-all} (\\ {& xs} {eval (join {+ 0} xs)})");
    assert_eq!(line(&session, "sum-all 1 2 3 4"), "10");
}

#[test]
fn fixed_number_format() {
    let session = Session::new(NumberFormat::Fixed);
    assert_eq!(line(&session, "/ 7 2"), "3.50");
    assert_eq!(line(&session, "list 1 2"), "{1.00 2.00}");
}

#[test]
fn run_source_prints_each_result() {
    let session = Session::default();
    let source = "\
; a small program
(def {x} 2)
(* x 21)
(head {a b})
(undefined)
";
    assert_eq!(
        run(&session, source),
        "42\n{a}\nError: Unbound symbol 'undefined'\n"
    );
}

#[test]
fn run_source_reports_parse_errors() {
    let session = Session::default();
    let mut out = Vec::new();
    let result = session.run_source("(+ 1 2", &mut out);
    assert!(matches!(result, Err(SessionError::Parse(_))));
    assert!(out.is_empty());
}

#[test]
fn run_file_missing() {
    let session = Session::default();
    let mut out = Vec::new();
    let result = session.run_file(std::path::Path::new("/nonexistent/file.lspy"), &mut out);
    assert!(matches!(result, Err(SessionError::Read { .. })));
}

#[test]
fn env_listing_contains_builtins() {
    let session = Session::default();
    line(&session, "def {answer} 42");
    let bindings = session.bindings();
    assert!(bindings.iter().any(|(name, value)| name == "answer" && value == "42"));
    assert!(bindings.iter().any(|(name, value)| name == "head" && value == "<builtin>"));
}

#[test]
fn separate_sessions_do_not_share_bindings() {
    let first = Session::default();
    let second = Session::default();
    line(&first, "def {x} 1");
    assert_eq!(
        second.interpreter().eval(Value::symbol("x")),
        Value::error("Unbound symbol 'x'")
    );
}

#[test]
fn deeply_nested_input_round_trips() {
    let depth = 200_000;
    let session = Session::default();

    let quoted = format!("{}{}", "{".repeat(depth), "}".repeat(depth));
    assert_eq!(line(&session, &quoted), quoted);

    let nested = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(line(&session, &nested), "1");

    assert_eq!(line(&session, &format!("def {{deep}} {quoted}")), "()");
    assert_eq!(line(&session, "deep").len(), 2 * depth);
}

#[test]
fn deeply_nested_file_runs() {
    let depth = 200_000;
    let session = Session::default();
    let source = format!("{}{}\n(+ 1 1)\n", "{".repeat(depth), "}".repeat(depth));
    let output = run(&session, &source);
    assert!(output.ends_with("}\n2\n"));
    assert_eq!(output.len(), 2 * depth + 3);
}
