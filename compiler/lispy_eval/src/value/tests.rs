use super::*;
use crate::{Builtin, Closure, Environment, EvalResult, Scope};
use pretty_assertions::assert_eq;

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn qexpr(cells: Vec<Value>) -> Value {
    Value::QExpr(cells)
}

fn noop(_env: &Environment, _args: Vec<Value>) -> EvalResult {
    Ok(Value::sexpr())
}

#[test]
fn test_kind_names() {
    assert_eq!(num(1.0).kind().name(), "Number");
    assert_eq!(Value::symbol("x").kind().name(), "Symbol");
    assert_eq!(Value::error("boom").kind().name(), "Error");
    assert_eq!(Value::sexpr().kind().name(), "S-Expression");
    assert_eq!(Value::qexpr().kind().name(), "Q-Expression");
    let builtin = Value::from(Function::Builtin(Builtin::new("noop", noop)));
    assert_eq!(builtin.kind().to_string(), "Function");
}

#[test]
fn test_add_appends_in_order() {
    let list = Value::qexpr().add(num(1.0)).add(num(2.0)).add(num(3.0));
    assert_eq!(list, qexpr(vec![num(1.0), num(2.0), num(3.0)]));
    assert_eq!(list.len(), 3);
}

#[test]
fn test_add_ignores_non_lists() {
    assert_eq!(num(4.0).add(num(5.0)), num(4.0));
}

#[test]
fn test_pop_closes_gap() {
    let mut list = qexpr(vec![num(1.0), num(2.0), num(3.0)]);
    assert_eq!(list.pop(1), Some(num(2.0)));
    assert_eq!(list, qexpr(vec![num(1.0), num(3.0)]));
}

#[test]
fn test_pop_out_of_range() {
    let mut list = qexpr(vec![num(1.0)]);
    assert_eq!(list.pop(1), None);
    assert_eq!(Value::symbol("x").pop(0), None);
    assert_eq!(list.len(), 1);
}

#[test]
fn test_take_discards_rest() {
    let list = Value::SExpr(vec![Value::symbol("a"), Value::symbol("b")]);
    assert_eq!(list.take(1), Some(Value::symbol("b")));
}

#[test]
fn test_join_keeps_left_label() {
    let left = qexpr(vec![num(1.0)]);
    let right = Value::SExpr(vec![num(2.0), num(3.0)]);
    assert_eq!(left.join(right), qexpr(vec![num(1.0), num(2.0), num(3.0)]));
}

#[test]
fn test_join_with_empty() {
    let list = qexpr(vec![num(1.0)]);
    assert_eq!(list.clone().join(Value::qexpr()), list);
    assert_eq!(Value::qexpr().join(list.clone()), list);
}

#[test]
fn test_relabel() {
    let cells = vec![Value::symbol("+"), num(1.0)];
    assert_eq!(Value::QExpr(cells.clone()).into_sexpr(), Value::SExpr(cells.clone()));
    assert_eq!(Value::SExpr(cells.clone()).into_sexpr(), Value::SExpr(cells));
    assert_eq!(num(1.0).into_sexpr(), num(1.0));
}

#[test]
fn test_clone_is_deep() {
    let original = qexpr(vec![qexpr(vec![num(1.0)])]);
    let mut copy = original.clone();
    if let Value::QExpr(cells) = &mut copy {
        cells[0] = cells[0].clone().add(num(2.0));
    }
    assert_eq!(original, qexpr(vec![qexpr(vec![num(1.0)])]));
    assert_eq!(copy, qexpr(vec![qexpr(vec![num(1.0), num(2.0)])]));
}

#[test]
fn test_clone_copies_closure_bindings() {
    let mut scope = Scope::new();
    scope.define("a", num(1.0));
    let closure = Closure::with_scope(vec!["b".into()], vec![Value::symbol("a")], scope);
    let original = Value::from(Function::Lambda(Box::new(closure)));

    let mut copy = original.clone();
    if let Value::Function(Function::Lambda(closure)) = &mut copy {
        closure.scope.define("a", num(99.0));
    }

    let Value::Function(Function::Lambda(closure)) = &original else {
        panic!("expected a closure");
    };
    assert_eq!(closure.scope.get("a"), Some(num(1.0)));
    assert_ne!(original, copy);
}

#[test]
fn test_accessors() {
    assert_eq!(num(2.5).as_number(), Some(2.5));
    assert_eq!(Value::symbol("x").as_number(), None);
    assert!(Value::error("e").is_error());
    assert!(Value::sexpr().is_empty());
    assert_eq!(num(1.0).cells(), None);
}

fn nest(depth: usize) -> Value {
    let mut value = num(1.0);
    for _ in 0..depth {
        value = qexpr(vec![value]);
    }
    value
}

#[test]
fn test_deep_value_clone_compare_drop() {
    let deep = nest(200_000);
    let copy = deep.clone();
    assert!(deep == copy);
    drop(copy);
    drop(deep);
}

#[test]
fn test_into_cells_leaves_children_intact() {
    let list = qexpr(vec![nest(3), num(2.0)]);
    let cells = list.into_cells();
    assert_eq!(cells, Some(vec![nest(3), num(2.0)]));
}
