// SPDX-License-Identifier: MIT

//! Attribute values and their categories

use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

/// The five scalar categories a condition can compare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Boolean,
    SignedInteger,
    UnsignedInteger,
    Float,
    Text,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Boolean => "bool",
            Category::SignedInteger => "int",
            Category::UnsignedInteger => "uint",
            Category::Float => "float",
            Category::Text => "string",
        };
        f.write_str(name)
    }
}

/// A scalar attribute value, widened to the canonical width of its category
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
}

impl AttributeValue {
    pub fn category(&self) -> Category {
        match self {
            AttributeValue::Bool(_) => Category::Boolean,
            AttributeValue::Int(_) => Category::SignedInteger,
            AttributeValue::Uint(_) => Category::UnsignedInteger,
            AttributeValue::Float(_) => Category::Float,
            AttributeValue::Text(_) => Category::Text,
        }
    }
}

/// What a context holds under a name
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    Scalar(AttributeValue),
    /// A value of some richer type, identified by its type name.
    /// Conditions on it always fail.
    Unsupported(String),
}

impl Attribute {
    pub fn unsupported(type_name: impl Into<String>) -> Self {
        Self::Unsupported(type_name.into())
    }

    /// Convert a JSON value. Scalars become attribute values, arrays and
    /// objects unsupported types; `null` is no value at all.
    pub fn from_json(value: JsonValue) -> Option<Self> {
        let attribute = match value {
            JsonValue::Null => return None,
            JsonValue::Bool(b) => Attribute::Scalar(AttributeValue::Bool(b)),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Attribute::Scalar(AttributeValue::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Attribute::Scalar(AttributeValue::Uint(u))
                } else {
                    n.as_f64()
                        .map(|f| Attribute::Scalar(AttributeValue::Float(f)))
                        .unwrap_or_else(|| Attribute::unsupported("number"))
                }
            }
            JsonValue::String(s) => Attribute::Scalar(AttributeValue::Text(s)),
            JsonValue::Array(_) => Attribute::unsupported("array"),
            JsonValue::Object(_) => Attribute::unsupported("object"),
        };
        Some(attribute)
    }

    /// Convert a YAML value, keeping `.inf`, `-.inf` and `.nan` as floats
    pub fn from_yaml(value: YamlValue) -> Option<Self> {
        let attribute = match value {
            YamlValue::Null => return None,
            YamlValue::Bool(b) => Attribute::Scalar(AttributeValue::Bool(b)),
            YamlValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Attribute::Scalar(AttributeValue::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Attribute::Scalar(AttributeValue::Uint(u))
                } else {
                    n.as_f64()
                        .map(|f| Attribute::Scalar(AttributeValue::Float(f)))
                        .unwrap_or_else(|| Attribute::unsupported("number"))
                }
            }
            YamlValue::String(s) => Attribute::Scalar(AttributeValue::Text(s)),
            YamlValue::Sequence(_) => Attribute::unsupported("array"),
            YamlValue::Mapping(_) => Attribute::unsupported("object"),
            YamlValue::Tagged(tagged) => {
                Attribute::unsupported(format!("tagged {}", tagged.tag))
            }
        };
        Some(attribute)
    }
}

macro_rules! widen {
    ($variant:ident, $wide:ty, $($narrow:ty),+) => {
        $(
            impl From<$narrow> for AttributeValue {
                fn from(v: $narrow) -> Self {
                    AttributeValue::$variant(<$wide>::from(v))
                }
            }
        )+
    };
}

widen!(Int, i64, i8, i16, i32, i64);
widen!(Uint, u64, u8, u16, u32, u64);
widen!(Float, f64, f32, f64);

// isize/usize have no lossless From into the 64-bit types
impl From<isize> for AttributeValue {
    fn from(v: isize) -> Self {
        AttributeValue::Int(v as i64)
    }
}

impl From<usize> for AttributeValue {
    fn from(v: usize) -> Self {
        AttributeValue::Uint(v as u64)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}
