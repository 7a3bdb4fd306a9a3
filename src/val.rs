// Copyright (c) 2024 Weird Constructor <weirdconstructor@gmail.com>
// This is a part of vseq. See README.md and COPYING for details.

/*!
The variant value type [Val] and the optional scalar wrapper [Obj].

`Val` is the loosely typed value that crosses the coercion boundary of this
crate. Anything a caller hands to a [crate::Seq] first becomes a `Val`, and
everything a single element read returns comes back as an [Obj] holding a
`Val`. The accessors `s()`, `i()`, `f()` and `b()` perform best effort
conversion and fall back to a zero value instead of failing.
*/

use std::fmt;

use fnv::FnvHashMap;

/// A dynamically typed value.
///
/// Scalars are stored inline, lists and maps own their backing storage.
/// Cloning a `Val` clones the whole tree, there is no sharing.
#[derive(Debug, Clone)]
pub enum Val {
    None,
    Bol(bool),
    Int(i64),
    Flt(f64),
    Str(String),
    Lst(Vec<Val>),
    Map(FnvHashMap<String, Val>),
}

impl Val {
    pub fn lst() -> Val {
        Val::Lst(Vec::new())
    }

    pub fn map() -> Val {
        Val::Map(FnvHashMap::default())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Val::None)
    }

    /// A short name for the carried type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Val::None   => "none",
            Val::Bol(_) => "bool",
            Val::Int(_) => "integer",
            Val::Flt(_) => "float",
            Val::Str(_) => "string",
            Val::Lst(_) => "list",
            Val::Map(_) => "map",
        }
    }

    /// Number of elements for lists and maps, string length for strings,
    /// 0 for none and 1 for the remaining scalars.
    pub fn len(&self) -> usize {
        match self {
            Val::None   => 0,
            Val::Str(s) => s.len(),
            Val::Lst(l) => l.len(),
            Val::Map(m) => m.len(),
            _           => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Truthiness in the usual dynamic language sense: none and zero values
    /// are false, non empty collections and strings are true.
    pub fn b(&self) -> bool {
        match self {
            Val::None   => false,
            Val::Bol(b) => *b,
            Val::Int(i) => *i != 0,
            Val::Flt(f) => *f != 0.0,
            Val::Str(s) => !s.is_empty(),
            Val::Lst(l) => !l.is_empty(),
            Val::Map(m) => !m.is_empty(),
        }
    }

    /// Best effort integer conversion. Strings are parsed, everything
    /// unparseable becomes 0.
    pub fn i(&self) -> i64 {
        match self {
            Val::None   => 0,
            Val::Bol(b) => if *b { 1 } else { 0 },
            Val::Int(i) => *i,
            Val::Flt(f) => *f as i64,
            Val::Str(s) => s.parse::<i64>().unwrap_or(0),
            Val::Lst(l) => l.len() as i64,
            Val::Map(m) => m.len() as i64,
        }
    }

    /// Best effort float conversion, mirrors [Val::i].
    pub fn f(&self) -> f64 {
        match self {
            Val::None   => 0.0,
            Val::Bol(b) => if *b { 1.0 } else { 0.0 },
            Val::Int(i) => *i as f64,
            Val::Flt(f) => *f,
            Val::Str(s) => s.parse::<f64>().unwrap_or(0.0),
            Val::Lst(l) => l.len() as f64,
            Val::Map(m) => m.len() as f64,
        }
    }

    /// The raw string content. Only strings carry one, everything else
    /// yields an empty string.
    pub fn s_raw(&self) -> String {
        match self {
            Val::Str(s) => s.clone(),
            _           => String::from(""),
        }
    }

    /// Readable rendering of the value. Lists and maps are dumped in
    /// bracket notation, map keys sorted for a stable output.
    pub fn s(&self) -> String {
        match self {
            Val::None   => String::from("$n"),
            Val::Bol(b) => if *b { String::from("$true") } else { String::from("$false") },
            Val::Int(i) => i.to_string(),
            Val::Flt(f) => f.to_string(),
            Val::Str(s) => s.clone(),
            Val::Lst(l) => Val::dump_lst(l),
            Val::Map(m) => Val::dump_map(m),
        }
    }

    fn dump_lst(l: &[Val]) -> String {
        let mut out = String::from("[");
        for (idx, v) in l.iter().enumerate() {
            if idx > 0 { out.push(','); }
            out.push_str(&v.s());
        }
        out.push(']');
        out
    }

    fn dump_map(m: &FnvHashMap<String, Val>) -> String {
        let mut keys: Vec<&String> = m.keys().collect();
        keys.sort();

        let mut out = String::from("{");
        for (idx, k) in keys.iter().enumerate() {
            if idx > 0 { out.push(','); }
            out.push_str(k);
            out.push(':');
            out.push_str(&m[*k].s());
        }
        out.push('}');
        out
    }

    /// Element access for list values, with negative indexing from the end.
    /// Anything that is not a list, or an index past either end, yields the
    /// absent [Obj].
    pub fn at(&self, i: i64) -> Obj {
        if let Val::Lst(l) = self {
            let n = l.len() as i64;
            let i = if i < 0 { n + i } else { i };
            if i >= 0 && i < n {
                return Obj::from_val(l[i as usize].clone());
            }
        }
        Obj::none()
    }

    /// Key access for map values. Non maps and missing keys yield the
    /// absent [Obj].
    pub fn get_key(&self, key: &str) -> Obj {
        if let Val::Map(m) = self {
            if let Some(v) = m.get(key) {
                return Obj::from_val(v.clone());
            }
        }
        Obj::none()
    }

    /// Inserts into a map value. A no-op on anything else.
    pub fn set_key(&mut self, key: &str, v: Val) -> &mut Self {
        if let Val::Map(m) = self {
            m.insert(key.to_string(), v);
        }
        self
    }

    /// Appends to a list value. A no-op on anything else.
    pub fn push(&mut self, v: Val) -> &mut Self {
        if let Val::Lst(l) = self {
            l.push(v);
        }
        self
    }

    /// Walks a dotted path through nested maps and lists.
    ///
    /// Each `.` separated segment resolves a map key, or a (possibly
    /// negative) list index when the current node is a list. A segment that
    /// does not resolve yields the absent [Obj].
    ///
    /// ```
    /// use vseq::Val;
    /// let mut m = Val::map();
    /// let mut inner = Val::lst();
    /// inner.push(Val::Int(10)).push(Val::Int(20));
    /// m.set_key("xs", inner);
    /// assert_eq!(m.query("xs.-1").i(), 20);
    /// assert!(m.query("xs.7").is_nil());
    /// ```
    pub fn query(&self, path: &str) -> Obj {
        let mut cur = self.clone();

        for seg in path.split('.') {
            let next =
                match &cur {
                    Val::Map(_) => cur.get_key(seg),
                    Val::Lst(_) => {
                        match seg.parse::<i64>() {
                            Ok(i)  => cur.at(i),
                            Err(_) => Obj::none(),
                        }
                    },
                    _ => Obj::none(),
                };

            if next.is_nil() {
                return Obj::none();
            }
            cur = next.o();
        }

        Obj::from_val(cur)
    }
}

impl PartialEq for Val {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Val::None,   Val::None)   => true,
            (Val::Bol(a), Val::Bol(b)) => a == b,
            (Val::Int(a), Val::Int(b)) => a == b,
            (Val::Flt(a), Val::Flt(b)) => a == b,
            (Val::Int(a), Val::Flt(b)) => (*a as f64) == *b,
            (Val::Flt(a), Val::Int(b)) => *a == (*b as f64),
            (Val::Str(a), Val::Str(b)) => a == b,
            (Val::Lst(a), Val::Lst(b)) => a == b,
            (Val::Map(a), Val::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Val {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.s())
    }
}

impl Default for Val {
    fn default() -> Self {
        Val::None
    }
}

impl From<bool> for Val { fn from(v: bool) -> Self { Val::Bol(v) } }
impl From<i64> for Val { fn from(v: i64) -> Self { Val::Int(v) } }
impl From<i32> for Val { fn from(v: i32) -> Self { Val::Int(v as i64) } }
impl From<u32> for Val { fn from(v: u32) -> Self { Val::Int(v as i64) } }
impl From<usize> for Val { fn from(v: usize) -> Self { Val::Int(v as i64) } }
impl From<f64> for Val { fn from(v: f64) -> Self { Val::Flt(v) } }
impl From<f32> for Val { fn from(v: f32) -> Self { Val::Flt(v as f64) } }
impl From<&str> for Val { fn from(v: &str) -> Self { Val::Str(v.to_string()) } }
impl From<String> for Val { fn from(v: String) -> Self { Val::Str(v) } }
impl From<FnvHashMap<String, Val>> for Val {
    fn from(v: FnvHashMap<String, Val>) -> Self { Val::Map(v) }
}

impl<T: Into<Val>> From<Vec<T>> for Val {
    fn from(v: Vec<T>) -> Self {
        Val::Lst(v.into_iter().map(|x| x.into()).collect())
    }
}

impl FromIterator<Val> for Val {
    fn from_iter<I: IntoIterator<Item = Val>>(iter: I) -> Self {
        Val::Lst(iter.into_iter().collect())
    }
}

/// The result of a single element read: either a carried [Val] or the
/// absent state. Out of bounds access returns this instead of an error,
/// so chained reads degrade to absence rather than faulting.
#[derive(Debug, Clone, PartialEq)]
pub struct Obj(Option<Val>);

impl Obj {
    pub fn none() -> Self {
        Obj(None)
    }

    pub fn from_val(v: Val) -> Self {
        Obj(Some(v))
    }

    /// True when there is no carried value.
    pub fn is_nil(&self) -> bool {
        self.0.is_none()
    }

    /// The raw carried value, [Val::None] when absent.
    pub fn o(&self) -> Val {
        self.0.clone().unwrap_or(Val::None)
    }

    pub fn into_opt(self) -> Option<Val> {
        self.0
    }

    pub fn s(&self) -> String {
        self.o().s()
    }

    pub fn i(&self) -> i64 {
        self.o().i()
    }

    pub fn f(&self) -> f64 {
        self.o().f()
    }

    pub fn b(&self) -> bool {
        self.o().b()
    }
}

impl From<Option<Val>> for Obj {
    fn from(v: Option<Val>) -> Self {
        Obj(v)
    }
}

impl fmt::Display for Obj {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.0 {
            Some(v) => write!(f, "{}", v),
            None    => write!(f, "$nil"),
        }
    }
}
