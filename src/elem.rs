// Copyright (c) 2024 Weird Constructor <weirdconstructor@gmail.com>
// This is a part of vseq. See README.md and COPYING for details.

/*!
The [Elem] trait is the per type coercion and ordering capability a
[crate::Seq] is parameterized over. One implementation per element type
replaces runtime type inspection: `from_val` is the best effort converter
(`None` means the value does not coerce), `into_val` goes the other way for
element reads, and `cmp_elem`/`Key` supply ordering and the hashable
identity used for stable de-duplication.
*/

use std::cmp::Ordering;
use std::hash::Hash;

use crate::val::Val;

pub trait Elem: Clone + PartialEq {
    /// Hashable identity of a value, used to key the seen-set of
    /// `uniq`/`union`. Must agree with `PartialEq`.
    type Key: Hash + Eq;

    /// Best effort coercion from a variant value. `None` signals the value
    /// does not convert; callers decide whether to skip or to error.
    fn from_val(v: &Val) -> Option<Self>;

    /// Boxes the element back into a variant value for element reads.
    fn into_val(self) -> Val;

    /// Total order over elements, natural ordering of the type.
    fn cmp_elem(&self, other: &Self) -> Ordering;

    fn key(&self) -> Self::Key;

    /// Element type name for error messages.
    fn type_name() -> &'static str;
}

impl Elem for String {
    type Key = String;

    fn from_val(v: &Val) -> Option<Self> {
        match v {
            Val::Str(s) => Some(s.clone()),
            Val::Int(i) => Some(i.to_string()),
            Val::Flt(f) => Some(f.to_string()),
            Val::Bol(b) => Some(if *b { "true".to_string() } else { "false".to_string() }),
            _           => None,
        }
    }

    fn into_val(self) -> Val { Val::Str(self) }

    fn cmp_elem(&self, other: &Self) -> Ordering { self.cmp(other) }

    fn key(&self) -> String { self.clone() }

    fn type_name() -> &'static str { "string" }
}

impl Elem for i64 {
    type Key = i64;

    fn from_val(v: &Val) -> Option<Self> {
        match v {
            Val::Int(i) => Some(*i),
            Val::Flt(f) => Some(*f as i64),
            Val::Bol(b) => Some(if *b { 1 } else { 0 }),
            Val::Str(s) => s.parse::<i64>().ok(),
            _           => None,
        }
    }

    fn into_val(self) -> Val { Val::Int(self) }

    fn cmp_elem(&self, other: &Self) -> Ordering { self.cmp(other) }

    fn key(&self) -> i64 { *self }

    fn type_name() -> &'static str { "integer" }
}

impl Elem for f64 {
    // f64 is not Hash/Eq, the bit pattern is.
    type Key = u64;

    fn from_val(v: &Val) -> Option<Self> {
        match v {
            Val::Int(i) => Some(*i as f64),
            Val::Flt(f) => Some(*f),
            Val::Bol(b) => Some(if *b { 1.0 } else { 0.0 }),
            Val::Str(s) => s.parse::<f64>().ok(),
            _           => None,
        }
    }

    fn into_val(self) -> Val { Val::Flt(self) }

    fn cmp_elem(&self, other: &Self) -> Ordering { self.total_cmp(other) }

    fn key(&self) -> u64 { self.to_bits() }

    fn type_name() -> &'static str { "float" }
}

impl Elem for bool {
    type Key = bool;

    fn from_val(v: &Val) -> Option<Self> {
        match v {
            Val::Bol(b) => Some(*b),
            Val::Int(i) => Some(*i != 0),
            Val::Str(s) => match s.as_str() {
                "true"  | "1" => Some(true),
                "false" | "0" => Some(false),
                _             => None,
            },
            _ => None,
        }
    }

    fn into_val(self) -> Val { Val::Bol(self) }

    fn cmp_elem(&self, other: &Self) -> Ordering { self.cmp(other) }

    fn key(&self) -> bool { *self }

    fn type_name() -> &'static str { "bool" }
}

/// Rank for cross variant ordering of heterogeneous sequences.
fn val_rank(v: &Val) -> u8 {
    match v {
        Val::None   => 0,
        Val::Bol(_) => 1,
        Val::Int(_) => 2,
        Val::Flt(_) => 2,
        Val::Str(_) => 3,
        Val::Lst(_) => 4,
        Val::Map(_) => 5,
    }
}

// Unambiguous identity encoding of a value, agreeing with `PartialEq`:
// every nesting level is type tagged and strings are length prefixed, so
// distinct trees never collide ([1] vs ["1"]) while cross variant equal
// numbers (1 == 1.0) share one key.
fn val_key(v: &Val, out: &mut String) {
    match v {
        Val::None   => out.push('_'),
        Val::Bol(b) => out.push_str(if *b { "b:1" } else { "b:0" }),
        // Int and Flt share a key space because they compare equal
        // across variants (1 == 1.0).
        Val::Int(_) | Val::Flt(_) => {
            out.push_str("n:");
            out.push_str(&v.s());
        },
        Val::Str(s) => {
            out.push_str(&format!("s:{}:", s.len()));
            out.push_str(s);
        },
        Val::Lst(l) => {
            out.push_str("l:[");
            for (idx, x) in l.iter().enumerate() {
                if idx > 0 { out.push(','); }
                val_key(x, out);
            }
            out.push(']');
        },
        Val::Map(m) => {
            let mut keys: Vec<&String> = m.keys().collect();
            keys.sort();
            out.push_str("m:{");
            for (idx, k) in keys.iter().enumerate() {
                if idx > 0 { out.push(','); }
                out.push_str(&format!("{}:", k.len()));
                out.push_str(k);
                out.push('=');
                val_key(&m[*k], out);
            }
            out.push('}');
        },
    }
}

impl Elem for Val {
    // Heterogeneous values hash by a type tagged encoding that agrees
    // with equality for everything a Seq can hold.
    type Key = String;

    fn from_val(v: &Val) -> Option<Self> {
        Some(v.clone())
    }

    fn into_val(self) -> Val { self }

    fn cmp_elem(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Val::Int(a), Val::Int(b)) => a.cmp(b),
            (Val::Flt(a), Val::Flt(b)) => a.total_cmp(b),
            (Val::Int(a), Val::Flt(b)) => (*a as f64).total_cmp(b),
            (Val::Flt(a), Val::Int(b)) => a.total_cmp(&(*b as f64)),
            (Val::Str(a), Val::Str(b)) => a.cmp(b),
            (Val::Bol(a), Val::Bol(b)) => a.cmp(b),
            _ => {
                let r = val_rank(self).cmp(&val_rank(other));
                if r == Ordering::Equal { self.s().cmp(&other.s()) } else { r }
            },
        }
    }

    fn key(&self) -> String {
        let mut out = String::new();
        val_key(self, &mut out);
        out
    }

    fn type_name() -> &'static str { "value" }
}
