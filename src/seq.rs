// Copyright (c) 2024 Weird Constructor <weirdconstructor@gmail.com>
// This is a part of vseq. See README.md and COPYING for details.

/*!
[Seq] is the indexable sequence at the heart of this crate: an owned,
ordered, homogeneous container with Python style negative indexing,
inclusive range selection and both a copy producing and an in place
mutating family of operations.

One generic implementation covers every element type; the per type
behavior (coercion, ordering, de-duplication identity) comes from the
[Elem] implementation of `T`.

Indexing rules, used by nearly every operation here:

- A negative index `i` counts from the end: `-1` is the last element,
  `-len` the first.
- Ranges `(i, j)` are inclusive on both ends, so `slice(0, -1)` selects
  the whole sequence. Bounds sticking out of the sequence are clamped
  back in; only when the normalized bounds become mutually exclusive is
  the result empty.
- Single element reads of a missing position return the absent [Obj]
  instead of faulting, and mutations at invalid positions are no-ops in
  the bare variants. Only the `*_e` variants report errors.
*/

use std::fmt;

use fnv::FnvHashSet;

use crate::elem::Elem;
use crate::error::Error;
use crate::val::{Obj, Val};

/// Sequence of strings.
pub type StrSeq = Seq<String>;
/// Sequence of integers.
pub type IntSeq = Seq<i64>;
/// Sequence of floats.
pub type FltSeq = Seq<f64>;
/// Heterogeneous sequence of variant values.
pub type ValSeq = Seq<Val>;

// i64::MIN has no positive counterpart; the count operations only ever
// compare the magnitude against the length, so clamping is safe.
fn saturating_abs(n: i64) -> i64 {
    n.checked_abs().unwrap_or(i64::MAX)
}

/// An owned, ordered sequence of `T` with chainable operations.
///
/// The copy family (`slice`, `sorted`, `uniq`, `union`, ...) takes `&self`
/// and returns a new independent sequence. The mutating family (`append`,
/// `drop_at`, `sort`, `uniq_m`, ...) takes `&mut self` and returns
/// `&mut Self` so calls chain.
///
/// ```
/// use vseq::{StrSeq, vals};
/// let s = StrSeq::from_vals(&vals!["1", "2", "3"]);
/// assert_eq!(s.slice(1, -1).to_vec(), vec!["2".to_string(), "3".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Seq<T: Elem> {
    v: Vec<T>,
}

impl<T: Elem> Default for Seq<T> {
    fn default() -> Self {
        Seq { v: Vec::new() }
    }
}

impl<T: Elem> Seq<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sequence from variant values, coercing each one to `T`.
    /// Values that do not coerce are silently skipped; this is the
    /// documented best effort ingestion policy, not an error path.
    pub fn from_vals(vals: &[Val]) -> Self {
        Seq { v: vals.iter().filter_map(|v| T::from_val(v)).collect() }
    }

    /// Builds a sequence from one arbitrary value: a list converts element
    /// wise (skipping incoercible elements), a scalar becomes a single
    /// element sequence, none becomes the empty sequence.
    pub fn from_val(v: &Val) -> Self {
        match v {
            Val::None   => Seq::new(),
            Val::Lst(l) => Seq::from_vals(l),
            _           => Seq { v: T::from_val(v).into_iter().collect() },
        }
    }

    pub fn len(&self) -> usize {
        self.v.len()
    }

    pub fn is_empty(&self) -> bool {
        self.v.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<T> {
        self.v.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.v
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.v.clone()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.v
    }

    // ---- index and range normalization ----

    fn norm_index(&self, i: i64) -> Option<usize> {
        let n = self.v.len() as i64;
        let i = if i < 0 { n + i } else { i };
        if i < 0 || i >= n { None } else { Some(i as usize) }
    }

    /// Normalizes the inclusive range `(i, j)` into a half open index pair.
    /// `None` means the selection is empty.
    fn norm_range(&self, i: i64, j: i64) -> Option<(usize, usize)> {
        let n = self.v.len() as i64;
        if n == 0 {
            return None;
        }

        let mut i = if i < 0 { n + i } else { i };
        let mut j = if j < 0 { n + j } else { j };
        if i < 0 { i = 0; }
        if j >= n { j = n - 1; }

        // inclusive end -> half open working bound
        let j = j + 1;
        if i > n || j < i {
            None
        } else {
            Some((i as usize, j as usize))
        }
    }

    // Insert positions differ from element positions: `i == len` is valid
    // and `-1` means "after the last element".
    fn norm_insert_index(&self, i: i64) -> Option<usize> {
        let n = self.v.len() as i64;
        let i = if i < 0 { n + i + 1 } else { i };
        if i < 0 || i > n { None } else { Some(i as usize) }
    }

    // ---- read family ----

    /// The element at `i`, negative indexes counting from the end. Out of
    /// bounds reads yield the absent [Obj].
    pub fn at(&self, i: i64) -> Obj {
        match self.norm_index(i) {
            Some(i) => Obj::from_val(self.v[i].clone().into_val()),
            None    => Obj::none(),
        }
    }

    pub fn first(&self) -> Obj {
        self.at(0)
    }

    pub fn last(&self) -> Obj {
        self.at(-1)
    }

    /// Copy of the first `|n|` elements. `n == 0` is the empty sequence.
    pub fn first_n(&self, n: i64) -> Self {
        if n == 0 {
            return Seq::new();
        }
        self.slice(0, saturating_abs(n) - 1)
    }

    /// Copy of the last `|n|` elements. `n == 0` is the empty sequence.
    pub fn last_n(&self, n: i64) -> Self {
        if n == 0 {
            return Seq::new();
        }
        self.slice(-saturating_abs(n), -1)
    }

    /// Copy of the inclusive range `(i, j)`. The returned sequence owns its
    /// own storage, mutating it never touches the receiver.
    pub fn slice(&self, i: i64, j: i64) -> Self {
        match self.norm_range(i, j) {
            Some((i, j)) => Seq { v: self.v[i..j].to_vec() },
            None         => Seq::new(),
        }
    }

    /// Position of the first element equal to `v` after coercion. `None`
    /// when absent or when `v` does not coerce to the element type.
    pub fn index_of(&self, v: &Val) -> Option<usize> {
        let want = T::from_val(v)?;
        self.v.iter().position(|x| *x == want)
    }

    pub fn contains(&self, v: &Val) -> bool {
        self.index_of(v).is_some()
    }

    /// Number of elements matching the predicate. This is the primitive
    /// `count` and `any_of` are defined in terms of.
    pub fn count_by<F>(&self, pred: F) -> usize
        where F: Fn(&T) -> bool {
        self.v.iter().filter(|x| pred(x)).count()
    }

    pub fn count(&self, v: &Val) -> usize {
        match T::from_val(v) {
            Some(want) => self.count_by(|x| *x == want),
            None       => 0,
        }
    }

    /// True when the sequence is non empty.
    pub fn any(&self) -> bool {
        !self.v.is_empty()
    }

    /// True when at least one of `vals` is contained. Values that do not
    /// coerce are skipped, as during construction.
    pub fn any_of(&self, vals: &[Val]) -> bool {
        vals.iter().any(|v| self.contains(v))
    }

    /// True when every one of `vals` is contained. A value that does not
    /// coerce cannot be contained, so it makes the answer false rather
    /// than producing a partial result.
    pub fn all_of(&self, vals: &[Val]) -> bool {
        vals.iter().all(|v| self.contains(v))
    }

    // ---- mutating family ----

    /// Appends an already typed element.
    pub fn push(&mut self, t: T) -> &mut Self {
        self.v.push(t);
        self
    }

    /// Coerces and appends one value; values that do not coerce are
    /// silently skipped.
    pub fn append(&mut self, v: impl Into<Val>) -> &mut Self {
        if let Some(t) = T::from_val(&v.into()) {
            self.v.push(t);
        }
        self
    }

    /// Coerces and appends each value, skipping the incoercible ones.
    pub fn append_all(&mut self, vals: &[Val]) -> &mut Self {
        for v in vals {
            if let Some(t) = T::from_val(v) {
                self.v.push(t);
            }
        }
        self
    }

    /// Copy of `self` with `other` appended.
    pub fn concat(&self, other: &Seq<T>) -> Self {
        let mut out = self.clone();
        out.concat_m(other);
        out
    }

    /// Appends all of `other` in place.
    pub fn concat_m(&mut self, other: &Seq<T>) -> &mut Self {
        self.v.extend(other.v.iter().cloned());
        self
    }

    /// Inserts before position `i`, shifting the rest right. `i == len`
    /// and `i == -1` both append. A list value splices all of its
    /// coercible elements at once, keeping their relative order; a scalar
    /// inserts one coerced element. Invalid positions and incoercible
    /// scalars are no-ops.
    pub fn insert(&mut self, i: i64, v: impl Into<Val>) -> &mut Self {
        let at = match self.norm_insert_index(i) {
            Some(at) => at,
            None     => return self,
        };

        match v.into() {
            Val::Lst(l) => {
                let items: Vec<T> = l.iter().filter_map(|x| T::from_val(x)).collect();
                self.v.splice(at..at, items);
            },
            v => {
                if let Some(t) = T::from_val(&v) {
                    self.v.insert(at, t);
                }
            },
        }
        self
    }

    /// Removes the inclusive range `(i, j)`. An empty normalized range is
    /// a no-op.
    pub fn drop_range(&mut self, i: i64, j: i64) -> &mut Self {
        if let Some((i, j)) = self.norm_range(i, j) {
            self.v.drain(i..j);
        }
        self
    }

    /// Removes the element at `i`; out of bounds is a no-op.
    pub fn drop_at(&mut self, i: i64) -> &mut Self {
        if let Some(i) = self.norm_index(i) {
            self.v.remove(i);
        }
        self
    }

    pub fn drop_first(&mut self) -> &mut Self {
        self.drop_at(0)
    }

    pub fn drop_first_n(&mut self, n: i64) -> &mut Self {
        if n == 0 {
            return self;
        }
        self.drop_range(0, saturating_abs(n) - 1)
    }

    pub fn drop_last(&mut self) -> &mut Self {
        self.drop_at(-1)
    }

    pub fn drop_last_n(&mut self, n: i64) -> &mut Self {
        if n == 0 {
            return self;
        }
        self.drop_range(-saturating_abs(n), -1)
    }

    /// Removes every element matching the predicate in one stable forward
    /// pass; survivors keep their relative order.
    pub fn drop_by<F>(&mut self, pred: F) -> &mut Self
        where F: Fn(&T) -> bool {
        self.v.retain(|x| !pred(x));
        self
    }

    /// Overwrites elements starting at `i`, swallowing all errors. See
    /// [Seq::set_e] for the reporting variant.
    pub fn set(&mut self, i: i64, v: impl Into<Val>) -> &mut Self {
        let _ = self.set_e(i, v);
        self
    }

    /// Overwrites elements starting at `i`. A scalar replaces one element,
    /// a list value replaces as many elements as fit between `i` and the
    /// end (the sequence is never resized). Reports out of bounds indexes
    /// and failed coercions; on error nothing is written.
    pub fn set_e(&mut self, i: i64, v: impl Into<Val>) -> Result<&mut Self, Error> {
        let at = self.norm_index(i).ok_or(Error::OutOfBounds {
            index: i,
            len:   self.v.len(),
        })?;

        match v.into() {
            Val::Lst(l) => {
                let room = self.v.len() - at;
                let mut items = Vec::new();
                for x in l.iter().take(room) {
                    items.push(T::from_val(x).ok_or(Error::Coerce {
                        want: T::type_name(),
                        got:  x.type_name(),
                    })?);
                }
                for (off, t) in items.into_iter().enumerate() {
                    self.v[at + off] = t;
                }
            },
            v => {
                self.v[at] = T::from_val(&v).ok_or(Error::Coerce {
                    want: T::type_name(),
                    got:  v.type_name(),
                })?;
            },
        }
        Ok(self)
    }

    /// Swaps two elements; a no-op when either index is out of bounds or
    /// the sequence has fewer than two elements.
    pub fn swap(&mut self, i: i64, j: i64) -> &mut Self {
        if self.v.len() < 2 {
            return self;
        }
        if let (Some(i), Some(j)) = (self.norm_index(i), self.norm_index(j)) {
            self.v.swap(i, j);
        }
        self
    }

    /// Reverses in place with the classic two pointer swap.
    pub fn reverse(&mut self) -> &mut Self {
        let mut i = 0;
        let mut j = self.v.len();
        while j > i + 1 {
            j -= 1;
            self.v.swap(i, j);
            i += 1;
        }
        self
    }

    /// Reversed copy.
    pub fn reversed(&self) -> Self {
        let mut out = self.clone();
        out.reverse();
        out
    }

    /// Sorts in place by the natural order of `T`. Not stable.
    pub fn sort(&mut self) -> &mut Self {
        self.v.sort_unstable_by(|a, b| a.cmp_elem(b));
        self
    }

    /// Sorted copy.
    pub fn sorted(&self) -> Self {
        let mut out = self.clone();
        out.sort();
        out
    }

    /// Sorts in place, descending. Not stable.
    pub fn sort_desc(&mut self) -> &mut Self {
        self.v.sort_unstable_by(|a, b| b.cmp_elem(a));
        self
    }

    /// Descending sorted copy.
    pub fn sorted_desc(&self) -> Self {
        let mut out = self.clone();
        out.sort_desc();
        out
    }

    // ---- remove and return family ----

    /// Removes the inclusive range `(i, j)` and returns it as a new
    /// sequence.
    pub fn take_range(&mut self, i: i64, j: i64) -> Self {
        match self.norm_range(i, j) {
            Some((i, j)) => Seq { v: self.v.drain(i..j).collect() },
            None         => Seq::new(),
        }
    }

    /// Removes and returns the element at `i`; the absent [Obj] when out
    /// of bounds.
    pub fn take_at(&mut self, i: i64) -> Obj {
        match self.norm_index(i) {
            Some(i) => Obj::from_val(self.v.remove(i).into_val()),
            None    => Obj::none(),
        }
    }

    /// Removes every element matching the predicate and returns the
    /// removed ones, both sides keeping their relative order.
    pub fn take_by<F>(&mut self, pred: F) -> Self
        where F: Fn(&T) -> bool {
        let mut taken = Vec::new();
        self.v.retain(|x| {
            if pred(x) {
                taken.push(x.clone());
                false
            } else {
                true
            }
        });
        Seq { v: taken }
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Obj {
        self.take_at(-1)
    }

    /// Removes the last `n` elements (clamped to the length) and returns
    /// them in their original order. `n == 0` returns the empty sequence
    /// without mutating.
    pub fn pop_n(&mut self, n: usize) -> Self {
        if n == 0 {
            return Seq::new();
        }
        let at = self.v.len().saturating_sub(n);
        Seq { v: self.v.split_off(at) }
    }

    /// Removes and returns the first element.
    pub fn shift(&mut self) -> Obj {
        self.take_at(0)
    }

    /// Removes the first `n` elements (clamped) and returns them. `n == 0`
    /// returns the empty sequence without mutating.
    pub fn shift_n(&mut self, n: usize) -> Self {
        if n == 0 {
            return Seq::new();
        }
        let n = n.min(self.v.len());
        Seq { v: self.v.drain(0..n).collect() }
    }

    // ---- set operations ----

    /// Copy of `self` with `other` appended and duplicates removed, first
    /// occurrence winning.
    pub fn union(&self, other: &Seq<T>) -> Self {
        self.concat(other).uniq()
    }

    /// In place union with `other`.
    pub fn union_m(&mut self, other: &Seq<T>) -> &mut Self {
        self.concat_m(other).uniq_m()
    }

    /// Copy with duplicates removed; the first occurrence of each distinct
    /// value is kept in place.
    pub fn uniq(&self) -> Self {
        let mut out = self.clone();
        out.uniq_m();
        out
    }

    /// Removes later duplicates in place, keeping first occurrences.
    pub fn uniq_m(&mut self) -> &mut Self {
        let mut seen: FnvHashSet<T::Key> = FnvHashSet::default();
        self.v.retain(|x| seen.insert(x.key()));
        self
    }

    // ---- projection ----

    /// New sequence of the elements matching the predicate, in order.
    pub fn select<F>(&self, pred: F) -> Self
        where F: Fn(&T) -> bool {
        Seq { v: self.v.iter().filter(|x| pred(x)).cloned().collect() }
    }

    /// Maps every element into a new sequence of a (possibly different)
    /// element type. An empty sequence maps to an empty sequence.
    pub fn map<U, F>(&self, f: F) -> Seq<U>
        where U: Elem, F: Fn(&T) -> U {
        Seq { v: self.v.iter().map(f).collect() }
    }

    /// Maps into a heterogeneous [ValSeq], for element producing closures
    /// whose result type varies.
    pub fn map_val<F>(&self, f: F) -> ValSeq
        where F: Fn(&T) -> Val {
        Seq { v: self.v.iter().map(f).collect() }
    }

    /// The whole sequence boxed back into one list [Val].
    pub fn to_val(&self) -> Val {
        Val::Lst(self.v.iter().map(|x| x.clone().into_val()).collect())
    }
}

impl<T: Elem> From<Vec<T>> for Seq<T> {
    fn from(v: Vec<T>) -> Self {
        Seq { v }
    }
}

impl<T: Elem> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Seq { v: iter.into_iter().collect() }
    }
}

impl<T: Elem> Extend<T> for Seq<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.v.extend(iter);
    }
}

impl<'a, T: Elem> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.v.iter()
    }
}

impl<T: Elem> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.v.into_iter()
    }
}

impl<T: Elem> fmt::Display for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_val().s())
    }
}

/// Builds a `Vec<Val>` from mixed literals, for feeding
/// [Seq::from_vals] and the membership operations.
///
/// ```
/// use vseq::{vals, IntSeq};
/// let s = IntSeq::from_vals(&vals![1, "2", 3.0, "nope"]);
/// assert_eq!(s.to_vec(), vec![1, 2, 3]);
/// ```
#[macro_export]
macro_rules! vals {
    ($($e:expr),* $(,)?) => {
        vec![$($crate::Val::from($e)),*]
    };
}
