//! Typed object values.
//!
//! The parser produces exactly these shapes: the literal types of the triple
//! grammar (boolean, integer, decimal, quoted string) plus a reference to
//! another subject. The same type backs the schema-flexible extension maps on
//! entities, so unrecognized predicates keep their typed objects.

use serde::{Deserialize, Serialize};

/// The object position of a fact.
///
/// # Examples
///
/// ```
/// use riftkb::Value;
///
/// let damage = Value::Float(35.0);
/// let name = Value::Str("Hate Spike".to_string());
/// let target = Value::Ref("Evelynn".to_string());
///
/// assert!(damage.is_number());
/// assert_eq!(name.as_str(), Some("Hate Spike"));
/// assert_eq!(target.as_ref_name(), Some("Evelynn"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// Decimal literal.
    Float(f64),
    /// Quoted string literal.
    Str(String),
    /// Reference to another subject, by local name.
    Ref(String),
}

impl Value {
    /// Returns true for boolean values.
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    /// Returns true for integer and decimal values.
    pub const fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Returns true for string values.
    pub const fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    /// Returns true for subject references.
    pub const fn is_ref(&self) -> bool {
        matches!(self, Self::Ref(_))
    }

    /// Boolean view.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Integer view; decimals do not coerce.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view; integers widen to `f64`.
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// String view.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Referenced subject name, for references.
    pub fn as_ref_name(&self) -> Option<&str> {
        match self {
            Self::Ref(v) => Some(v),
            _ => None,
        }
    }

    /// Human-readable type name for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "decimal",
            Self::Str(_) => "string",
            Self::Ref(_) => "reference",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(v) => write!(f, "{v:?}"),
            Self::Ref(v) => write!(f, "ref:{v}"),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(42).as_int(), Some(42));
        assert_eq!(Value::Int(42).as_float(), Some(42.0));
        assert_eq!(Value::Float(2.5).as_float(), Some(2.5));
        assert_eq!(Value::Str("hi".into()).as_str(), Some("hi"));
        assert_eq!(Value::Ref("Ashe".into()).as_ref_name(), Some("Ashe"));
    }

    #[test]
    fn test_value_type_mismatch() {
        let v = Value::Str("35".into());
        assert!(v.as_float().is_none());
        assert!(v.as_ref_name().is_none());
        assert!(!v.is_number());
    }

    #[test]
    fn test_value_type_names() {
        assert_eq!(Value::Int(1).type_name(), "integer");
        assert_eq!(Value::Float(1.0).type_name(), "decimal");
        assert_eq!(Value::Ref("x".into()).type_name(), "reference");
    }

    #[test]
    fn test_value_display() {
        assert_eq!(format!("{}", Value::Bool(false)), "false");
        assert_eq!(format!("{}", Value::Int(7)), "7");
        assert_eq!(format!("{}", Value::Str("hi".into())), "\"hi\"");
        assert_eq!(format!("{}", Value::Ref("Ashe".into())), "ref:Ashe");
    }

    #[test]
    fn test_value_serialization_round_trip() {
        let v = Value::Ref("Evelynn_Q".into());
        let json = serde_json::to_string(&v).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
