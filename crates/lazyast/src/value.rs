//! Plain values: the eager, tree-shaped projection of a view.
//!
//! [`View::to_plain`](crate::View::to_plain) turns a lazily decoded view and
//! everything below it into a [`Value`]. Nodes become objects tagged with a
//! `"type"` key and carrying `"start"`/`"end"`; records become untagged
//! objects; sequences become arrays.

use alloc::{collections::BTreeMap, string::String, vec::Vec};
use core::fmt::{self, Write};

/// Object payload of a [`Value`]. Keys iterate in sorted order.
pub type Map = BTreeMap<String, Value>;
/// Array payload of a [`Value`].
pub type Array = Vec<Value>;

/// A decoded value with no ties to the buffer it came from.
///
/// # Examples
///
/// ```
/// use lazyast::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("type".to_string(), Value::from("EmptyStatement"));
/// map.insert("start".to_string(), Value::from(0.0));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), r#"{"start":0,"type":"EmptyStatement"}"#);
/// assert_eq!(v.type_tag(), Some("EmptyStatement"));
/// ```
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(untagged))]
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// An absent optional field.
    #[default]
    Null,
    /// A boolean field.
    Boolean(bool),
    /// Any numeric field. Offsets and `u32` fields are exact.
    Number(f64),
    /// A string field, or a fieldless enum in its source spelling.
    String(String),
    /// A sequence.
    Array(Array),
    /// A node or record.
    Object(Map),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(String::from(v))
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The string payload, if this is a [`String`](Value::String).
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The number payload, if this is a [`Number`](Value::Number).
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean payload, if this is a [`Boolean`](Value::Boolean).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The elements, if this is an [`Array`](Value::Array).
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The entries, if this is an [`Object`](Value::Object).
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` in an object.
    ///
    /// ```
    /// use lazyast::{Map, Value};
    ///
    /// let mut map = Map::new();
    /// map.insert("name".into(), Value::from("x"));
    /// let v = Value::Object(map);
    /// assert_eq!(v.get("name").and_then(Value::as_str), Some("x"));
    /// assert!(v.get("missing").is_none());
    /// assert!(Value::Null.get("name").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// The `"type"` tag of a node object.
    #[must_use]
    pub fn type_tag(&self) -> Option<&str> {
        self.get("type").and_then(Value::as_str)
    }
}

/// Writes `src` with JSON string escapes applied, without the surrounding
/// quotes.
pub(crate) fn write_escaped_string<W: Write>(src: &str, f: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{2028}' | '\u{2029}' => write!(f, "\\u{:04X}", c as u32)?,
            c if c.is_control() && c as u32 <= 0xFFFF => write!(f, "\\u{:04X}", c as u32)?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

/// JSON text, with keys in sorted order. Non-finite numbers print as `null`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) if !n.is_finite() => f.write_str("null"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => {
                f.write_char('"')?;
                write_escaped_string(s, f)?;
                f.write_char('"')
            }
            Value::Array(items) => {
                f.write_char('[')?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_char(']')
            }
            Value::Object(map) => {
                f.write_char('{')?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    f.write_char('"')?;
                    write_escaped_string(k, f)?;
                    write!(f, "\":{v}")?;
                }
                f.write_char('}')
            }
        }
    }
}
