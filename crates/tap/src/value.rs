// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural value model for assertion operands.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A captured failure, compared by kind and message rather than identity.
///
/// `Failure` deliberately does not implement [`std::error::Error`]: a
/// failure captured from the unit under test is an ordinary comparable
/// value, not an error condition for the harness. That choice is also
/// what permits the blanket `From<E: Error>` conversion below.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// Category of the failure, typically the error type's short name.
    pub kind: String,
    /// Human-readable failure text.
    pub message: String,
}

impl Failure {
    /// Create a failure from an explicit kind and message.
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl<E: std::error::Error> From<E> for Failure {
    fn from(error: E) -> Self {
        Self {
            kind: short_type_name::<E>().to_string(),
            message: error.to_string(),
        }
    }
}

/// Last path segment of a type name, with generic arguments stripped.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// A structural value compared by shape, not identity.
///
/// Serializes untagged, so object-mode consumers see plain JSON shapes.
/// Non-finite numbers follow serde_json's f64 behavior (serialized as
/// null); the TAP text path renders them explicitly via [`Display`].
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// An operand that was never supplied. Equal only to another absent
    /// operand.
    Absent,
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Seq(Vec<Value>),
    Map(BTreeMap<String, Value>),
    Failure(Failure),
}

impl Value {
    /// Build a sequence value from anything yielding values.
    pub fn seq<V: Into<Value>>(items: impl IntoIterator<Item = V>) -> Self {
        Value::Seq(items.into_iter().map(Into::into).collect())
    }

    /// Build a mapping value from key/value pairs.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Number of own entries of a mapping-like value; 0 for anything else.
pub fn count_keys(value: &Value) -> usize {
    match value {
        Value::Map(entries) => entries.len(),
        _ => 0,
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::Number(value as f64)
            }
        })*
    };
}

value_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32);

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Seq(value)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(value: BTreeMap<String, Value>) -> Self {
        Value::Map(value)
    }
}

impl From<Failure> for Value {
    fn from(value: Failure) -> Self {
        Value::Failure(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => f.write_str("absent"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => fmt_number(f, *n),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                f.write_str("}")
            }
            Value::Failure(failure) => write!(f, "{}", failure),
        }
    }
}

/// Render numbers the way diagnostics expect: integral values without a
/// trailing `.0`, non-finite values spelled out.
fn fmt_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n.fract() == 0.0 && n.abs() < 9.007_199_254_740_992e15 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{}", n)
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
