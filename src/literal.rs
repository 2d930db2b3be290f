//! Host-side pattern literals.
//!
//! [`Literal`] enumerates the shapes a pattern author can write: maps, lists,
//! sets, numbers, strings, booleans, predicates and null. Anything else is kept
//! as [`Literal::Unsupported`] so factories can reject it eagerly with the
//! offending type name.

use crate::actual::Actual;
use crate::predicate::Predicate;
use serde_json::{Number, Value};
use std::any::{Any, type_name};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Tries `$ty` and `Option` / `Vec` / `String`-keyed maps of it, returning
/// from the enclosing function on the first hit.
macro_rules! downcast_shapes {
    ($any:ident; $($ty:ty),* $(,)?) => {
        $(
            if let Some(v) = $any.downcast_ref::<$ty>() {
                return Literal::from(v.clone());
            }
            if let Some(v) = $any.downcast_ref::<Option<$ty>>() {
                return Literal::from(v.clone());
            }
            if let Some(v) = $any.downcast_ref::<Vec<$ty>>() {
                return Literal::from(v.clone());
            }
            if let Some(v) = $any.downcast_ref::<BTreeMap<String, $ty>>() {
                return Literal::from(v.clone());
            }
            if let Some(v) = $any.downcast_ref::<HashMap<String, $ty>>() {
                return Literal::from(v.clone());
            }
        )*
    };
}

macro_rules! downcast_sets {
    ($any:ident; $($ty:ty),* $(,)?) => {
        $(
            if let Some(v) = $any.downcast_ref::<BTreeSet<$ty>>() {
                return Literal::from(v.clone());
            }
            if let Some(v) = $any.downcast_ref::<HashSet<$ty>>() {
                return Literal::from(v.clone());
            }
        )*
    };
}

/// A pattern literal, before it is turned into an expectation tree.
#[derive(Clone, Debug)]
pub enum Literal {
    Map(BTreeMap<String, Literal>),
    List(Vec<Literal>),
    Set(Vec<Literal>),
    Number(Number),
    String(String),
    Boolean(bool),
    Predicate(Predicate),
    Null,
    /// A runtime shape outside the accepted set.
    Unsupported { type_name: String },
}

impl Literal {
    pub fn map<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Literal>,
    {
        Literal::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn list<V, I>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Literal>,
    {
        Literal::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a set literal. Structurally equal elements are kept once.
    pub fn set<V, I>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Literal>,
    {
        let mut unique: Vec<Literal> = Vec::new();
        for item in items.into_iter().map(Into::into) {
            if !unique.iter().any(|seen| seen.same_as(&item)) {
                unique.push(item);
            }
        }
        Literal::Set(unique)
    }

    pub fn predicate<F>(func: F) -> Self
    where
        F: Fn(&Actual) -> bool + Send + Sync + 'static,
    {
        Literal::Predicate(Predicate::new(func))
    }

    /// Marks a value of type `T` as an unsupported literal.
    pub fn unsupported<T: ?Sized>() -> Self {
        Literal::Unsupported {
            type_name: type_name::<T>().to_string(),
        }
    }

    /// Classifies a dynamically typed value by its runtime shape.
    ///
    /// Recognises `bool`, every primitive integer and float type, `String`,
    /// `&'static str`, `serde_json::Number`, `serde_json::Value`, `Predicate`
    /// and `Literal`, plus `Option`, `Vec` and `String`-keyed `BTreeMap` /
    /// `HashMap` of any of those. `BTreeSet` / `HashSet` of booleans, integers
    /// and strings become sets; `()` and `None` become null. Every other type
    /// becomes [`Literal::Unsupported`] naming `T`.
    pub fn from_any<T: Any>(value: T) -> Self {
        let any = &value as &dyn Any;
        if any.downcast_ref::<()>().is_some() {
            return Literal::Null;
        }
        downcast_shapes!(any;
            Literal, Predicate, Value, Number, bool, String, &'static str,
            i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64
        );
        downcast_sets!(any;
            bool, String, &'static str,
            i8, i16, i32, i64, isize, u8, u16, u32, u64, usize
        );
        Literal::unsupported::<T>()
    }

    /// Name of the literal's shape, used in diagnostics.
    pub fn shape(&self) -> &str {
        match self {
            Literal::Map(_) => "map",
            Literal::List(_) => "list",
            Literal::Set(_) => "set",
            Literal::Number(_) => "number",
            Literal::String(_) => "string",
            Literal::Boolean(_) => "boolean",
            Literal::Predicate(_) => "predicate",
            Literal::Null => "null",
            Literal::Unsupported { type_name } => type_name,
        }
    }

    /// Structural equality used for set de-duplication.
    ///
    /// Predicates are only equal to handles of the same callable; unsupported
    /// literals are never equal so each is reported.
    fn same_as(&self, other: &Literal) -> bool {
        match (self, other) {
            (Literal::Null, Literal::Null) => true,
            (Literal::Boolean(a), Literal::Boolean(b)) => a == b,
            (Literal::String(a), Literal::String(b)) => a == b,
            (Literal::Number(a), Literal::Number(b)) => a == b,
            (Literal::Predicate(a), Literal::Predicate(b)) => a.ptr_eq(b),
            (Literal::List(a), Literal::List(b)) | (Literal::Set(a), Literal::Set(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_as(y))
            }
            (Literal::Map(a), Literal::Map(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b)
                        .all(|((ka, va), (kb, vb))| ka == kb && va.same_as(vb))
            }
            _ => false,
        }
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

macro_rules! integer_literal {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Literal {
                fn from(value: $ty) -> Self {
                    Literal::Number(Number::from(value))
                }
            }
        )*
    };
}

integer_literal!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        match Number::from_f64(value) {
            Some(n) => Literal::Number(n),
            None => Literal::Unsupported {
                type_name: format!("non-finite f64 ({})", value),
            },
        }
    }
}

impl From<f32> for Literal {
    fn from(value: f32) -> Self {
        Literal::from(f64::from(value))
    }
}

impl From<Number> for Literal {
    fn from(value: Number) -> Self {
        Literal::Number(value)
    }
}

impl From<Predicate> for Literal {
    fn from(value: Predicate) -> Self {
        Literal::Predicate(value)
    }
}

impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Literal::Null,
        }
    }
}

impl<T: Into<Literal>> From<Vec<T>> for Literal {
    fn from(value: Vec<T>) -> Self {
        Literal::list(value)
    }
}

impl<T: Into<Literal>> From<BTreeSet<T>> for Literal {
    fn from(value: BTreeSet<T>) -> Self {
        Literal::set(value)
    }
}

impl<T: Into<Literal>, S> From<HashSet<T, S>> for Literal {
    fn from(value: HashSet<T, S>) -> Self {
        Literal::set(value)
    }
}

impl<K: Into<String>, V: Into<Literal>> From<BTreeMap<K, V>> for Literal {
    fn from(value: BTreeMap<K, V>) -> Self {
        Literal::map(value)
    }
}

impl<K: Into<String>, V: Into<Literal>, S> From<HashMap<K, V, S>> for Literal {
    fn from(value: HashMap<K, V, S>) -> Self {
        Literal::map(value)
    }
}

impl From<Value> for Literal {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Literal::Null,
            Value::Bool(b) => Literal::Boolean(b),
            Value::Number(n) => Literal::Number(n),
            Value::String(s) => Literal::String(s),
            Value::Array(items) => Literal::list(items),
            Value::Object(map) => Literal::map(map),
        }
    }
}

impl From<&Actual> for Literal {
    fn from(value: &Actual) -> Self {
        match value {
            Actual::Null => Literal::Null,
            Actual::Boolean(b) => Literal::Boolean(*b),
            Actual::Number(n) => Literal::Number(n.clone()),
            Actual::String(s) => Literal::String(s.clone()),
            Actual::Array(items) => Literal::List(items.iter().map(Literal::from).collect()),
            Actual::Object(map) => Literal::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), Literal::from(v)))
                    .collect(),
            ),
        }
    }
}
