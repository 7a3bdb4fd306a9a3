// Copyright (c) 2024 Weird Constructor <weirdconstructor@gmail.com>
// This is a part of vseq. See README.md and COPYING for details.

use vseq::*;

#[test]
fn check_scalar_coercion() {
    assert_eq!(Val::from("42").i(), 42);
    assert_eq!(Val::from("4.5").f(), 4.5);
    assert_eq!(Val::from("xyz").i(), 0);
    assert_eq!(Val::Int(7).f(), 7.0);
    assert_eq!(Val::Flt(7.9).i(), 7);
    assert_eq!(Val::Bol(true).i(), 1);
    assert_eq!(Val::None.i(), 0);

    assert_eq!(Val::Int(42).s(), "42");
    assert_eq!(Val::from("x").s_raw(), "x");
    assert_eq!(Val::Int(42).s_raw(), "");

    assert!(Val::from("x").b());
    assert!(!Val::from("").b());
    assert!(!Val::Int(0).b());
    assert!(Val::Flt(0.5).b());
    assert!(!Val::None.b());
}

#[test]
fn check_equality() {
    assert_eq!(Val::Int(1), Val::Flt(1.0));
    assert_eq!(Val::Flt(2.0), Val::Int(2));
    assert_ne!(Val::Int(1), Val::from("1"));
    assert_ne!(Val::None, Val::Int(0));
    assert_eq!(Val::from(vec![1, 2]), Val::from(vec![1, 2]));
}

#[test]
fn check_list_access() {
    let mut l = Val::lst();
    l.push(Val::Int(10)).push(Val::Int(20)).push(Val::Int(30));
    assert_eq!(l.len(), 3);
    assert_eq!(l.at(0).i(), 10);
    assert_eq!(l.at(-1).i(), 30);
    assert!(l.at(3).is_nil());
    assert!(l.at(-4).is_nil());

    // non lists have no elements
    assert!(Val::Int(1).at(0).is_nil());
}

#[test]
fn check_map_access() {
    let mut m = Val::map();
    m.set_key("a", Val::Int(1)).set_key("b", Val::from("two"));
    assert_eq!(m.get_key("a").i(), 1);
    assert_eq!(m.get_key("b").s(), "two");
    assert!(m.get_key("zz").is_nil());
    assert!(Val::Int(1).get_key("a").is_nil());
}

#[test]
fn check_dump() {
    assert_eq!(Val::from(vec![1, 2, 3]).s(), "[1,2,3]");
    assert_eq!(Val::None.s(), "$n");
    assert_eq!(Val::Bol(true).s(), "$true");

    let mut m = Val::map();
    m.set_key("b", Val::Int(2)).set_key("a", Val::Int(1));
    // map keys are dumped sorted
    assert_eq!(m.s(), "{a:1,b:2}");

    let mut l = Val::lst();
    l.push(Val::from("x")).push(m);
    assert_eq!(l.s(), "[x,{a:1,b:2}]");
}

#[test]
fn check_query() {
    let mut inner = Val::lst();
    inner.push(Val::Int(10)).push(Val::Int(20)).push(Val::Int(30));
    let mut sub = Val::map();
    sub.set_key("xs", inner).set_key("name", Val::from("deep"));
    let mut root = Val::map();
    root.set_key("sub", sub).set_key("top", Val::Int(1));

    assert_eq!(root.query("top").i(), 1);
    assert_eq!(root.query("sub.name").s(), "deep");
    assert_eq!(root.query("sub.xs.0").i(), 10);
    assert_eq!(root.query("sub.xs.-1").i(), 30);

    assert!(root.query("nope").is_nil());
    assert!(root.query("sub.xs.7").is_nil());
    assert!(root.query("sub.xs.abc").is_nil());
    assert!(root.query("top.deeper").is_nil());
}

#[test]
fn check_obj() {
    let o = Obj::from_val(Val::Int(5));
    assert!(!o.is_nil());
    assert_eq!(o.o(), Val::Int(5));
    assert_eq!(o.i(), 5);
    assert_eq!(o.f(), 5.0);
    assert_eq!(o.s(), "5");
    assert!(o.b());

    let n = Obj::none();
    assert!(n.is_nil());
    assert_eq!(n.o(), Val::None);
    assert_eq!(n.i(), 0);
    assert_eq!(n.s(), "$n");
    assert!(!n.b());
    assert_eq!(n.into_opt(), None);
}

#[cfg(feature = "serde")]
#[test]
fn check_json() {
    let v = Val::from_json("{\"xs\": [1, \"2\", 3.5], \"name\": \"n\"}").unwrap();
    assert_eq!(v.query("name").s(), "n");
    assert_eq!(v.query("xs.0").i(), 1);

    let xs = IntSeq::from_val(&v.query("xs").o());
    assert_eq!(xs.to_vec(), vec![1, 2, 3]);

    let fs = FltSeq::from_val(&v.query("xs").o());
    assert_eq!(fs.to_vec(), vec![1.0, 2.0, 3.5]);

    assert!(Val::from_json("{oops").is_err());

    // stable output: keys sorted
    assert_eq!(
        Val::from_json("{\"b\":2,\"a\":1}").unwrap().to_json(),
        "{\"a\":1,\"b\":2}"
    );

    let v = Val::from(serde_json::json!([1, null, true]));
    assert_eq!(v.s(), "[1,$n,$true]");
}
