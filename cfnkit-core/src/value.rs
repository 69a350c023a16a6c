//! Value - Literal-or-intrinsic property values

use std::collections::BTreeMap;

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

use crate::intrinsic::Intrinsic;

/// A property value: either a literal of the declared type or an intrinsic
/// function that CloudFormation resolves at deploy time
///
/// Scalar literals are read the way CloudFormation reads them: `"1200"` and
/// `"true"` are accepted for numbers and booleans, and numbers or booleans
/// for strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value<T> {
    Intrinsic(Intrinsic),
    Literal(T),
}

/// A list property; the whole list may also be an intrinsic
/// (e.g. `!Split` or a `Ref` to a list parameter)
pub type List<T> = Value<Vec<Value<T>>>;

/// A string-keyed map property
pub type Map<T> = Value<BTreeMap<String, Value<T>>>;

/// Free-form JSON (policy documents, advanced options without a schema)
pub type Json = serde_json::Value;

impl<'de, T: DeserializeOwned> Deserialize<'de> for Value<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Json::deserialize(deserializer)?;
        if Intrinsic::looks_like_intrinsic(&json)
            && let Ok(intrinsic) = Intrinsic::deserialize(&json)
        {
            return Ok(Value::Intrinsic(intrinsic));
        }

        let err = match T::deserialize(&json) {
            Ok(literal) => return Ok(Value::Literal(literal)),
            Err(e) => e,
        };
        coerce_scalar(&json)
            .and_then(|coerced| T::deserialize(&coerced).ok())
            .map(Value::Literal)
            .ok_or_else(|| de::Error::custom(err))
    }
}

/// The other spelling of a scalar literal, if it has one
fn coerce_scalar(json: &Json) -> Option<Json> {
    match json {
        Json::String(s) => {
            let s = s.trim();
            if s.eq_ignore_ascii_case("true") {
                Some(Json::Bool(true))
            } else if s.eq_ignore_ascii_case("false") {
                Some(Json::Bool(false))
            } else {
                s.parse::<serde_json::Number>().ok().map(Json::Number)
            }
        }
        Json::Number(_) | Json::Bool(_) => Some(Json::String(json.to_string())),
        _ => None,
    }
}

impl<T> Value<T> {
    pub fn literal(&self) -> Option<&T> {
        match self {
            Value::Literal(v) => Some(v),
            Value::Intrinsic(_) => None,
        }
    }

    pub fn intrinsic(&self) -> Option<&Intrinsic> {
        match self {
            Value::Intrinsic(i) => Some(i),
            Value::Literal(_) => None,
        }
    }

    pub fn is_intrinsic(&self) -> bool {
        matches!(self, Value::Intrinsic(_))
    }

    pub fn into_literal(self) -> Option<T> {
        match self {
            Value::Literal(v) => Some(v),
            Value::Intrinsic(_) => None,
        }
    }

    /// Transform the literal, leaving intrinsics untouched
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Value<U> {
        match self {
            Value::Literal(v) => Value::Literal(f(v)),
            Value::Intrinsic(i) => Value::Intrinsic(i),
        }
    }
}

impl<T> Value<Vec<Value<T>>> {
    /// Build a literal list out of literal items
    pub fn from_literals(items: impl IntoIterator<Item = T>) -> Self {
        Value::Literal(items.into_iter().map(Value::Literal).collect())
    }
}

impl<T> From<Intrinsic> for Value<T> {
    fn from(value: Intrinsic) -> Self {
        Value::Intrinsic(value)
    }
}

impl From<&str> for Value<String> {
    fn from(value: &str) -> Self {
        Value::Literal(value.to_string())
    }
}

impl From<String> for Value<String> {
    fn from(value: String) -> Self {
        Value::Literal(value)
    }
}

impl From<bool> for Value<bool> {
    fn from(value: bool) -> Self {
        Value::Literal(value)
    }
}

impl From<i64> for Value<i64> {
    fn from(value: i64) -> Self {
        Value::Literal(value)
    }
}

impl From<f64> for Value<f64> {
    fn from(value: f64) -> Self {
        Value::Literal(value)
    }
}

impl<T> From<Vec<Value<T>>> for Value<Vec<Value<T>>> {
    fn from(value: Vec<Value<T>>) -> Self {
        Value::Literal(value)
    }
}

/// Resource tag shared by every taggable resource type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    #[serde(rename = "Key")]
    pub key: Value<String>,
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Value::Literal(key.into()),
            value: Value::Literal(value.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn literal_string() {
        let v: Value<String> = serde_json::from_value(json!("my-domain")).unwrap();
        assert_eq!(v.literal().map(String::as_str), Some("my-domain"));
        assert!(!v.is_intrinsic());
    }

    #[test]
    fn intrinsic_in_place_of_integer() {
        let v: Value<i64> = serde_json::from_value(json!({"Ref": "Port"})).unwrap();
        assert_eq!(v.intrinsic(), Some(&Intrinsic::reference("Port")));
    }

    #[test]
    fn wrong_literal_type_is_rejected() {
        let v: Result<Value<bool>, _> = serde_json::from_value(json!("yes"));
        assert!(v.is_err());
    }

    #[test]
    fn scalar_literals_are_coerced() {
        let v: Value<i64> = serde_json::from_value(json!("1200")).unwrap();
        assert_eq!(v, Value::Literal(1200));

        let v: Value<f64> = serde_json::from_value(json!(" 2.5 ")).unwrap();
        assert_eq!(v, Value::Literal(2.5));

        let v: Value<bool> = serde_json::from_value(json!("True")).unwrap();
        assert_eq!(v, Value::Literal(true));

        let v: Value<String> = serde_json::from_value(json!(2.15)).unwrap();
        assert_eq!(v, Value::Literal("2.15".to_string()));

        let v: Value<String> = serde_json::from_value(json!(false)).unwrap();
        assert_eq!(v, Value::Literal("false".to_string()));

        let v: Result<Value<i64>, _> = serde_json::from_value(json!("12 units"));
        assert!(v.is_err());
        let v: Result<Value<String>, _> = serde_json::from_value(json!(["a"]));
        assert!(v.is_err());
    }

    #[test]
    fn tag_value_may_be_a_number() {
        let tag: Tag =
            serde_json::from_value(json!({"Key": "cost-center", "Value": 4411})).unwrap();
        assert_eq!(tag, Tag::new("cost-center", "4411"));
    }

    #[test]
    fn whole_list_may_be_intrinsic() {
        let v: List<String> =
            serde_json::from_value(json!({"Fn::Split": [",", {"Ref": "Subnets"}]})).unwrap();
        assert!(v.is_intrinsic());

        let v: List<String> = serde_json::from_value(json!(["a", {"Ref": "B"}])).unwrap();
        let items = v.literal().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items[1].is_intrinsic());
    }

    #[test]
    fn map_keeps_intrinsics() {
        let v: Value<i64> = Value::Literal(2);
        assert_eq!(v.map(|n| n * 10), Value::Literal(20));

        let v: Value<i64> = Intrinsic::reference("Count").into();
        assert!(v.map(|n| n * 10).is_intrinsic());
    }

    #[test]
    fn tag_serializes_with_wire_names() {
        let tag = Tag::new("team", "storage");
        assert_eq!(
            serde_json::to_value(&tag).unwrap(),
            json!({"Key": "team", "Value": "storage"})
        );
    }

    #[test]
    fn from_literals_builds_list() {
        let list: List<String> = Value::from_literals(["a".to_string(), "b".to_string()]);
        assert_eq!(serde_json::to_value(&list).unwrap(), json!(["a", "b"]));
    }
}
