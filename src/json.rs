// Copyright (c) 2024 Weird Constructor <weirdconstructor@gmail.com>
// This is a part of vseq. See README.md and COPYING for details.

/*!
JSON interop for [Val], available with the `serde` feature.

A parsed document becomes a [Val] tree, which feeds directly into
[crate::Seq::from_val] coercion and [Val::query] path lookups:

```
use vseq::{Val, IntSeq};
let v = Val::from_json("{\"xs\": [1, \"2\", 3.0]}").unwrap();
let xs = IntSeq::from_val(&v.query("xs").o());
assert_eq!(xs.to_vec(), vec![1, 2, 3]);
```
*/

use fnv::FnvHashMap;
use serde_json::{Number, Value};

use crate::error::Error;
use crate::val::Val;

impl From<&Value> for Val {
    fn from(v: &Value) -> Self {
        match v {
            Value::Null      => Val::None,
            Value::Bool(b)   => Val::Bol(*b),
            Value::Number(n) => {
                match n.as_i64() {
                    Some(i) => Val::Int(i),
                    None    => Val::Flt(n.as_f64().unwrap_or(0.0)),
                }
            },
            Value::String(s) => Val::Str(s.clone()),
            Value::Array(a)  => Val::Lst(a.iter().map(Val::from).collect()),
            Value::Object(o) => {
                let mut m: FnvHashMap<String, Val> = FnvHashMap::default();
                for (k, v) in o.iter() {
                    m.insert(k.clone(), Val::from(v));
                }
                Val::Map(m)
            },
        }
    }
}

impl From<Value> for Val {
    fn from(v: Value) -> Self {
        Val::from(&v)
    }
}

impl From<&Val> for Value {
    fn from(v: &Val) -> Self {
        match v {
            Val::None   => Value::Null,
            Val::Bol(b) => Value::Bool(*b),
            Val::Int(i) => Value::Number(Number::from(*i)),
            Val::Flt(f) => {
                match Number::from_f64(*f) {
                    Some(n) => Value::Number(n),
                    None    => Value::Null,
                }
            },
            Val::Str(s) => Value::String(s.clone()),
            Val::Lst(l) => Value::Array(l.iter().map(Value::from).collect()),
            Val::Map(m) => {
                let mut keys: Vec<&String> = m.keys().collect();
                keys.sort();
                let mut o = serde_json::Map::new();
                for k in keys {
                    o.insert(k.clone(), Value::from(&m[k]));
                }
                Value::Object(o)
            },
        }
    }
}

impl Val {
    /// Parses a JSON document into a [Val] tree.
    pub fn from_json(s: &str) -> Result<Val, Error> {
        let v: Value = serde_json::from_str(s)?;
        Ok(Val::from(&v))
    }

    /// Renders the value as JSON. Map keys come out sorted, so the output
    /// is stable.
    pub fn to_json(&self) -> String {
        Value::from(self).to_string()
    }
}
