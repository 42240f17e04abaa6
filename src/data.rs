//! Data values, records and channel accessors.
//!
//! A [`Record`] is one datum of a series: a set of named fields. Geoms never
//! index records dynamically; each visual channel is resolved once into an
//! [`Accessor`] which is then evaluated per datum.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::scale::{Scale, ScaleMap};

/// A single field value: a number or a piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Numeric view of the value. Text is never coerced.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// Hashable identity used by discrete scales.
    pub fn key(&self) -> ValueKey {
        match self {
            Value::Number(n) => ValueKey::Number((*n + 0.0).to_bits()),
            Value::Text(s) => ValueKey::Text(s.clone()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// Hashable form of a [`Value`]; numbers compare by bit pattern with `-0 == 0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueKey {
    Number(u64),
    Text(String),
}

/// One datum: named fields.
pub type Record = BTreeMap<String, Value>;

/// Build a record from `(field, value)` pairs.
pub fn record<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Record
where
    K: Into<String>,
    V: Into<Value>,
{
    fields
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Format a number for path data and attributes.
///
/// Uses the shortest decimal form that round-trips; negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// A configured visual channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Channel {
    /// Read a datum field, optionally passing it through a named scale.
    Field {
        field: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        scale: Option<String>,
    },
    /// A constant for every datum.
    Constant(Value),
}

impl Channel {
    pub fn field(name: impl Into<String>) -> Self {
        Channel::Field {
            field: name.into(),
            scale: None,
        }
    }

    pub fn scaled(name: impl Into<String>, scale: impl Into<String>) -> Self {
        Channel::Field {
            field: name.into(),
            scale: Some(scale.into()),
        }
    }

    pub fn constant(value: impl Into<Value>) -> Self {
        Channel::Constant(value.into())
    }
}

type AccessorFn = dyn Fn(Option<&Record>, usize) -> Option<Value> + Send + Sync;

#[derive(Clone)]
enum Source {
    Constant(Value),
    Field(String),
    Scaled { field: String, scale: Arc<Scale> },
    Function(Arc<AccessorFn>),
}

/// A resolved channel, evaluated once per datum.
#[derive(Clone)]
pub struct Accessor {
    source: Source,
}

impl Accessor {
    pub fn constant(value: impl Into<Value>) -> Self {
        Accessor {
            source: Source::Constant(value.into()),
        }
    }

    pub fn field(name: impl Into<String>) -> Self {
        Accessor {
            source: Source::Field(name.into()),
        }
    }

    pub fn scaled(name: impl Into<String>, scale: Arc<Scale>) -> Self {
        Accessor {
            source: Source::Scaled {
                field: name.into(),
                scale,
            },
        }
    }

    /// Wrap a closure receiving the datum (if any) and its index.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Option<&Record>, usize) -> Option<Value> + Send + Sync + 'static,
    {
        Accessor {
            source: Source::Function(Arc::new(f)),
        }
    }

    /// Resolve a configured channel against the available scales.
    pub fn resolve(channel: &Channel, scales: &ScaleMap) -> PlotResult<Self> {
        match channel {
            Channel::Constant(value) => Ok(Accessor::constant(value.clone())),
            Channel::Field { field, scale: None } => Ok(Accessor::field(field.clone())),
            Channel::Field {
                field,
                scale: Some(name),
            } => {
                let scale = scales.get(name).ok_or_else(|| {
                    PlotError::InvalidConfig(format!(
                        "channel on field '{}' refers to unknown scale '{}'",
                        field, name
                    ))
                })?;
                Ok(Accessor::scaled(field.clone(), Arc::clone(scale)))
            }
        }
    }

    /// Evaluate for one datum.
    ///
    /// Returns `None` when the field is missing or the scale has no mapping
    /// for the field's value.
    pub fn get(&self, datum: Option<&Record>, index: usize) -> Option<Value> {
        match &self.source {
            Source::Constant(value) => Some(value.clone()),
            Source::Field(field) => datum.and_then(|d| d.get(field)).cloned(),
            Source::Scaled { field, scale } => datum
                .and_then(|d| d.get(field))
                .and_then(|v| scale.apply_value(v)),
            Source::Function(f) => f(datum, index),
        }
    }

    /// Numeric evaluation; text values yield `None`.
    pub fn number(&self, datum: Option<&Record>, index: usize) -> Option<f64> {
        self.get(datum, index).and_then(|v| v.as_f64())
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Source::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Source::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Source::Scaled { field, scale } => f
                .debug_struct("Scaled")
                .field("field", field)
                .field("scale", &scale.kind())
                .finish(),
            Source::Function(_) => f.write_str("Function"),
        }
    }
}
