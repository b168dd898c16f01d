mod common;

use common::{build, decl, decl_with, kw, kwargs, vis};
use initbind::{InitError, Keyword, Value};

#[test]
fn binds_positionals_and_required_keyword() {
    let set = build(vec![
        decl_with("a", vis("reader")),
        decl("b"),
        decl_with("c", kw(Keyword::Required)),
    ]);

    let bound = set
        .bind(
            &[Value::Int(1), Value::Int(2)],
            &kwargs(&[("c", Value::Int(3))]),
        )
        .unwrap();

    assert_eq!(bound.len(), 3);
    assert_eq!(bound["a"], Value::Int(1));
    assert_eq!(bound["b"], Value::Int(2));
    assert_eq!(bound["c"], Value::Int(3));
}

#[test]
fn too_few_positionals_is_an_arity_error() {
    let set = build(vec![
        decl("a"),
        decl("b"),
        decl_with("c", kw(Keyword::Required)),
    ]);

    let err = set
        .bind(&[Value::Int(1)], &kwargs(&[("c", Value::Int(3))]))
        .unwrap_err();

    assert_eq!(
        err,
        InitError::ArityMismatch {
            given: 1,
            expected: 2
        }
    );
    assert_eq!(
        err.to_string(),
        "wrong number of arguments (given 1, expected 2)"
    );
}

#[test]
fn too_many_positionals_is_an_arity_error() {
    let set = build(vec![decl("a")]);
    let err = set
        .bind(&[Value::Int(1), Value::Int(2)], &kwargs(&[]))
        .unwrap_err();
    assert_eq!(
        err,
        InitError::ArityMismatch {
            given: 2,
            expected: 1
        }
    );
}

#[test]
fn all_missing_keywords_are_listed_in_declared_order() {
    let set = build(vec![
        decl("a"),
        decl_with("c", kw(Keyword::Required)),
        decl_with("d", kw(Keyword::Required)),
    ]);

    let err = set.bind(&[Value::Int(1)], &kwargs(&[])).unwrap_err();

    match &err {
        InitError::MissingKeywords { names } => {
            let names: Vec<&str> = names.iter().map(|n| n.as_ref()).collect();
            assert_eq!(names, vec!["c", "d"]);
        }
        other => panic!("expected MissingKeywords, got {:?}", other),
    }
    assert_eq!(err.to_string(), "missing keywords: c, d");
}

#[test]
fn all_unknown_keywords_are_listed_in_caller_order() {
    let set = build(vec![decl("a"), decl_with("c", kw(Keyword::Required))]);

    let err = set
        .bind(
            &[Value::Int(1)],
            &kwargs(&[
                ("z", Value::Int(9)),
                ("c", Value::Int(3)),
                ("d", Value::Int(4)),
            ]),
        )
        .unwrap_err();

    match &err {
        InitError::UnknownKeywords { names } => {
            let names: Vec<&str> = names.iter().map(|n| n.as_ref()).collect();
            assert_eq!(names, vec!["z", "d"]);
        }
        other => panic!("expected UnknownKeywords, got {:?}", other),
    }
    assert_eq!(err.to_string(), "unknown keywords: z, d");
}

#[test]
fn arity_wins_over_keyword_checks() {
    let set = build(vec![decl("a"), decl_with("c", kw(Keyword::Required))]);
    // Both checks would fail; only the arity error reports.
    let err = set.bind(&[], &kwargs(&[("d", Value::Int(4))])).unwrap_err();
    assert!(matches!(err, InitError::ArityMismatch { .. }));
}

#[test]
fn missing_wins_over_unknown() {
    let set = build(vec![decl_with("c", kw(Keyword::Required))]);
    let err = set.bind(&[], &kwargs(&[("d", Value::Int(4))])).unwrap_err();
    assert!(matches!(err, InitError::MissingKeywords { .. }));
}

#[test]
fn optional_keyword_falls_back_to_its_default() {
    let set = build(vec![decl_with("a", kw(Keyword::optional_with(3_i64)))]);

    let bound = set.bind(&[], &kwargs(&[])).unwrap();
    assert_eq!(bound["a"], Value::Int(3));

    let bound = set.bind(&[], &kwargs(&[("a", Value::Int(5))])).unwrap();
    assert_eq!(bound["a"], Value::Int(5));
}

#[test]
fn explicit_null_overrides_the_default() {
    let set = build(vec![decl_with("a", kw(Keyword::optional_with(3_i64)))]);

    let bound = set.bind(&[], &kwargs(&[("a", Value::Null)])).unwrap();
    assert_eq!(bound["a"], Value::Null);
    assert_ne!(bound["a"], Value::Int(3));
}

#[test]
fn optional_without_default_binds_the_uninitialized_sentinel() {
    let set = build(vec![decl_with("a", kw(Keyword::optional()))]);

    let bound = set.bind(&[], &kwargs(&[])).unwrap();
    assert!(bound["a"].is_uninitialized());
    // The sentinel is not null.
    assert_ne!(bound["a"], Value::Null);
}

#[test]
fn default_is_the_stored_value_not_reevaluated() {
    let set = build(vec![decl_with(
        "a",
        kw(Keyword::optional_with(vec![Value::Int(1), Value::Int(2)])),
    )]);

    let first = set.bind(&[], &kwargs(&[])).unwrap();
    let second = set.bind(&[], &kwargs(&[])).unwrap();
    assert_eq!(first["a"], second["a"]);
}

#[test]
fn bind_is_pure_and_idempotent() {
    let set = build(vec![
        decl("a"),
        decl_with("b", kw(Keyword::Required)),
        decl_with("c", kw(Keyword::optional_with("x"))),
    ]);
    let before = set.clone();
    let args = [Value::Int(1)];
    let kws = kwargs(&[("b", Value::Int(2))]);

    let first = set.bind(&args, &kws).unwrap();
    let second = set.bind(&args, &kws).unwrap();

    assert_eq!(first, second);
    assert_eq!(set, before);
}

#[test]
fn result_order_is_required_then_keyword_required_then_optional() {
    let set = build(vec![
        decl_with("opt", kw(Keyword::optional_with(0_i64))),
        decl_with("req_kw", kw(Keyword::Required)),
        decl("pos"),
    ]);

    let bound = set
        .bind(&[Value::Int(1)], &kwargs(&[("req_kw", Value::Int(2))]))
        .unwrap();

    let order: Vec<&str> = bound.keys().map(|n| n.as_ref()).collect();
    assert_eq!(order, vec!["pos", "req_kw", "opt"]);
}

#[test]
fn bound_attributes_expose_their_specs() {
    let set = build(vec![decl("a"), decl_with("b", kw(Keyword::Required))]);

    let bound = set
        .bind_attributes(&[Value::Str("v".into())], &kwargs(&[("b", Value::Bool(true))]))
        .unwrap();

    assert_eq!(bound.len(), 2);
    assert_eq!(bound[0].spec.name.as_ref(), "a");
    assert_eq!(bound[0].value, Value::Str("v".into()));
    assert_eq!(bound[1].spec.name.as_ref(), "b");
    assert_eq!(bound[1].value, Value::Bool(true));
}

#[test]
fn failed_bind_produces_no_bindings() {
    let set = build(vec![decl("a")]);
    assert!(set.bind(&[], &kwargs(&[])).is_err());
}
