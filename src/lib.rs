// Copyright (c) 2024 Weird Constructor <weirdconstructor@gmail.com>
// This is a part of vseq. See README.md and COPYING for details.

/*!
vseq - Chainable Variant Sequences for Rust
===========================================

This crate provides an owned sequence type [Seq] with the ergonomics of a
dynamic language collection: Python style negative indexing, inclusive
range selection, chainable mutation, stable de-duplication and set
operations, plus a permissive coercion layer that admits loosely typed
values into homogeneous sequences on a best effort basis.

Here are some of its properties:

- One generic sequence implementation. The element specific behavior
  (coercion, ordering, de-duplication identity) lives in the [Elem]
  trait, with implementations for `String`, `i64`, `f64`, `bool` and the
  variant value [Val].
- Two operation families with the same range semantics: a copy producing
  one (`slice`, `sorted`, `uniq`, `union`, `select`, ...) that never
  touches the receiver, and an in place mutating one (`append`,
  `insert`, `drop_range`, `sort`, `uniq_m`, ...) that returns `&mut Self`
  for chaining.
- No panic path. Out of bounds reads return the absent [Obj], invalid
  mutations are no-ops; only the `*_e` variants report an [Error].
- Purely sequential and in memory. No I/O, no locking; share a sequence
  across threads only behind your own synchronization.

# Indexing And Ranges

A negative index counts from the end (`-1` is the last element). Ranges
are inclusive on both ends, so `(0, -1)` always means the whole
sequence. Out of range bounds are clamped back in; a range whose bounds
cross after normalization selects nothing.

```
use vseq::{StrSeq, vals};

let s = StrSeq::from_vals(&vals!["1", "2", "3"]);
assert_eq!(s.slice(1, -1).to_vec(), vec!["2".to_string(), "3".to_string()]);
assert_eq!(s.at(-1).s(), "3");
assert!(s.at(7).is_nil());
```

# Coercion

Construction and ingestion go through [Val], the dynamic value of this
crate. Values that do not coerce into the element type are silently
skipped; that is the documented policy for the bare API, not a bug. The
`*_e` variants surface the error instead.

```
use vseq::{IntSeq, vals};

let mut s = IntSeq::from_vals(&vals![1, "2", 3.0, "not a number"]);
assert_eq!(s.to_vec(), vec![1, 2, 3]);

assert!(s.set_e(9, 5).is_err());
s.set(9, 5); // bare variant swallows the error
assert_eq!(s.to_vec(), vec![1, 2, 3]);
```

# Chaining

Mutating operations return `&mut Self`:

```
use vseq::{IntSeq, vals};

let mut s = IntSeq::from_vals(&vals![3, 1, 2, 2]);
s.uniq_m().sort().reverse();
assert_eq!(s.to_vec(), vec![3, 2, 1]);
```

# JSON

With the `serde` feature enabled, [Val] converts from and to
`serde_json::Value`, and `Val::query` walks dotted paths through parsed
documents. See the [json] module.
*/

pub mod elem;
pub mod error;
#[cfg(feature = "serde")]
pub mod json;
pub mod seq;
pub mod val;

pub use elem::Elem;
pub use error::Error;
pub use seq::{FltSeq, IntSeq, Seq, StrSeq, ValSeq};
pub use val::{Obj, Val};
