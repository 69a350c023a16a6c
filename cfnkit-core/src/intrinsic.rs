//! Intrinsic - CloudFormation template functions
//!
//! Intrinsics may appear wherever a literal value is expected. They are
//! carried as data in their long JSON form (`{"Fn::GetAtt": [...]}`) and are
//! never evaluated.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Function names recognised as intrinsic keys
pub const FUNCTION_NAMES: &[&str] = &[
    "Ref",
    "Condition",
    "Fn::And",
    "Fn::Base64",
    "Fn::Cidr",
    "Fn::Equals",
    "Fn::FindInMap",
    "Fn::GetAZs",
    "Fn::GetAtt",
    "Fn::If",
    "Fn::ImportValue",
    "Fn::Join",
    "Fn::Length",
    "Fn::Not",
    "Fn::Or",
    "Fn::Select",
    "Fn::Split",
    "Fn::Sub",
    "Fn::ToJsonString",
    "Fn::Transform",
];

/// A CloudFormation intrinsic function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Intrinsic {
    #[serde(rename = "Ref")]
    Ref(String),
    #[serde(rename = "Fn::GetAtt")]
    GetAtt(GetAtt),
    #[serde(rename = "Fn::Join")]
    Join(String, Expr),
    #[serde(rename = "Fn::Sub")]
    Sub(Sub),
    #[serde(rename = "Fn::If")]
    If(String, Expr, Expr),
    #[serde(rename = "Fn::Select")]
    Select(Expr, Expr),
    #[serde(rename = "Fn::Split")]
    Split(String, Expr),
    #[serde(rename = "Fn::FindInMap")]
    FindInMap(Expr, Expr, Expr),
    #[serde(rename = "Fn::ImportValue")]
    ImportValue(Expr),
    #[serde(rename = "Fn::Base64")]
    Base64(Expr),
    #[serde(rename = "Fn::GetAZs")]
    GetAZs(Expr),
    #[serde(rename = "Fn::Cidr")]
    Cidr(Expr, Expr, Expr),
    #[serde(rename = "Fn::Equals")]
    Equals(Expr, Expr),
    #[serde(rename = "Fn::And")]
    And(Vec<Expr>),
    #[serde(rename = "Fn::Or")]
    Or(Vec<Expr>),
    /// Takes a single-element list on the wire
    #[serde(rename = "Fn::Not")]
    Not(Vec<Expr>),
    #[serde(rename = "Condition")]
    Condition(String),
    #[serde(rename = "Fn::Length")]
    Length(Expr),
    #[serde(rename = "Fn::ToJsonString")]
    ToJsonString(Expr),
    /// Macro invocation (`{"Name": "AWS::Include", "Parameters": {..}}`),
    /// kept opaque
    #[serde(rename = "Fn::Transform")]
    Transform(Expr),
}

/// Any template expression: an intrinsic or a literal JSON value whose
/// children may themselves be intrinsics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expr {
    Intrinsic(Box<Intrinsic>),
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    List(Vec<Expr>),
    Map(BTreeMap<String, Expr>),
    Null,
}

/// `Fn::GetAtt` target
///
/// Accepts `["Resource", "Attribute"]` and the `"Resource.Attribute"` short
/// form on input. The attribute may contain further dots
/// (`Endpoint.Address`), so only the first dot separates the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GetAttRepr", into = "(String, String)")]
pub struct GetAtt {
    pub logical_id: String,
    pub attribute: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GetAttRepr {
    Pair(String, String),
    Dotted(String),
}

impl TryFrom<GetAttRepr> for GetAtt {
    type Error = String;

    fn try_from(repr: GetAttRepr) -> Result<Self, Self::Error> {
        match repr {
            GetAttRepr::Pair(logical_id, attribute) => Ok(GetAtt {
                logical_id,
                attribute,
            }),
            GetAttRepr::Dotted(s) => match s.split_once('.') {
                Some((id, attr)) if !id.is_empty() && !attr.is_empty() => Ok(GetAtt {
                    logical_id: id.to_string(),
                    attribute: attr.to_string(),
                }),
                _ => Err(format!(
                    "Invalid Fn::GetAtt '{}', expected LogicalId.Attribute",
                    s
                )),
            },
        }
    }
}

impl From<GetAtt> for (String, String) {
    fn from(value: GetAtt) -> Self {
        (value.logical_id, value.attribute)
    }
}

/// `Fn::Sub` body: a bare template string or a template with a variable map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sub {
    Template(String),
    WithVariables(String, BTreeMap<String, Expr>),
}

impl Sub {
    pub fn template(&self) -> &str {
        match self {
            Sub::Template(t) | Sub::WithVariables(t, _) => t,
        }
    }

    /// Names referenced by `${Name}` / `${Name.Attr}` placeholders that are
    /// not bound by the variable map. `${!Literal}` escapes are skipped.
    pub fn placeholders(&self) -> Vec<String> {
        static PLACEHOLDER: OnceLock<Option<Regex>> = OnceLock::new();
        let Some(re) = PLACEHOLDER
            .get_or_init(|| Regex::new(r"\$\{([^!}][^}]*)\}").ok())
            .as_ref()
        else {
            return Vec::new();
        };

        let bound: Vec<&str> = match self {
            Sub::Template(_) => Vec::new(),
            Sub::WithVariables(_, vars) => vars.keys().map(String::as_str).collect(),
        };

        let mut names = Vec::new();
        for cap in re.captures_iter(self.template()) {
            let raw = cap[1].trim();
            if bound.contains(&raw) {
                continue;
            }
            let name = raw.split('.').next().unwrap_or(raw).to_string();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

impl Intrinsic {
    /// Long-form function name (e.g., "Fn::GetAtt")
    pub fn function_name(&self) -> &'static str {
        match self {
            Intrinsic::Ref(_) => "Ref",
            Intrinsic::GetAtt(_) => "Fn::GetAtt",
            Intrinsic::Join(..) => "Fn::Join",
            Intrinsic::Sub(_) => "Fn::Sub",
            Intrinsic::If(..) => "Fn::If",
            Intrinsic::Select(..) => "Fn::Select",
            Intrinsic::Split(..) => "Fn::Split",
            Intrinsic::FindInMap(..) => "Fn::FindInMap",
            Intrinsic::ImportValue(_) => "Fn::ImportValue",
            Intrinsic::Base64(_) => "Fn::Base64",
            Intrinsic::GetAZs(_) => "Fn::GetAZs",
            Intrinsic::Cidr(..) => "Fn::Cidr",
            Intrinsic::Equals(..) => "Fn::Equals",
            Intrinsic::And(_) => "Fn::And",
            Intrinsic::Or(_) => "Fn::Or",
            Intrinsic::Not(_) => "Fn::Not",
            Intrinsic::Condition(_) => "Condition",
            Intrinsic::Length(_) => "Fn::Length",
            Intrinsic::ToJsonString(_) => "Fn::ToJsonString",
            Intrinsic::Transform(_) => "Fn::Transform",
        }
    }

    /// Returns true if `key` names an intrinsic function
    pub fn is_intrinsic_key(key: &str) -> bool {
        FUNCTION_NAMES.contains(&key)
    }

    /// Recognise an intrinsic in raw JSON: a single-key object whose key is
    /// a function name and whose body is well-formed
    pub fn from_json(value: &serde_json::Value) -> Option<Intrinsic> {
        let map = value.as_object()?;
        if map.len() != 1 {
            return None;
        }
        let (key, _) = map.iter().next()?;
        if !Self::is_intrinsic_key(key) {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    /// Returns true if the JSON value is shaped like an intrinsic call,
    /// well-formed or not
    pub fn looks_like_intrinsic(value: &serde_json::Value) -> bool {
        value
            .as_object()
            .filter(|map| map.len() == 1)
            .and_then(|map| map.keys().next())
            .is_some_and(|key| Self::is_intrinsic_key(key))
    }

    pub fn reference(logical_id: impl Into<String>) -> Self {
        Intrinsic::Ref(logical_id.into())
    }

    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Intrinsic::GetAtt(GetAtt {
            logical_id: logical_id.into(),
            attribute: attribute.into(),
        })
    }

    pub fn sub(template: impl Into<String>) -> Self {
        Intrinsic::Sub(Sub::Template(template.into()))
    }

    pub fn join(delimiter: impl Into<String>, parts: Vec<Expr>) -> Self {
        Intrinsic::Join(delimiter.into(), Expr::List(parts))
    }

    /// Direct argument expressions of this call
    fn arguments(&self) -> Vec<&Expr> {
        match self {
            Intrinsic::Ref(_) | Intrinsic::GetAtt(_) | Intrinsic::Condition(_) => Vec::new(),
            Intrinsic::Sub(Sub::Template(_)) => Vec::new(),
            Intrinsic::Sub(Sub::WithVariables(_, vars)) => vars.values().collect(),
            Intrinsic::Join(_, e)
            | Intrinsic::Split(_, e)
            | Intrinsic::ImportValue(e)
            | Intrinsic::Base64(e)
            | Intrinsic::GetAZs(e)
            | Intrinsic::Length(e)
            | Intrinsic::ToJsonString(e)
            | Intrinsic::Transform(e) => vec![e],
            Intrinsic::If(_, a, b) | Intrinsic::Select(a, b) | Intrinsic::Equals(a, b) => {
                vec![a, b]
            }
            Intrinsic::FindInMap(a, b, c) | Intrinsic::Cidr(a, b, c) => vec![a, b, c],
            Intrinsic::And(items) | Intrinsic::Or(items) | Intrinsic::Not(items) => {
                items.iter().collect()
            }
        }
    }

    /// Visit this intrinsic and every intrinsic nested in its arguments
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Intrinsic)) {
        f(self);
        for arg in self.arguments() {
            arg.walk_intrinsics(f);
        }
    }

    /// Logical ids named by `Ref`, `Fn::GetAtt` and `Fn::Sub` placeholders.
    /// Pseudo parameters (`AWS::Region`, ...) are not included.
    pub fn referenced_logical_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        let mut push = |id: &str| {
            if !id.starts_with("AWS::") && !ids.iter().any(|i| i == id) {
                ids.push(id.to_string());
            }
        };
        self.walk(&mut |intrinsic| match intrinsic {
            Intrinsic::Ref(id) => push(id),
            Intrinsic::GetAtt(target) => push(&target.logical_id),
            Intrinsic::Sub(sub) => {
                for name in sub.placeholders() {
                    push(&name);
                }
            }
            _ => {}
        });
        ids
    }

    /// Condition names used by `Fn::If` and `Condition`
    pub fn referenced_conditions(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        self.walk(&mut |intrinsic| {
            let name = match intrinsic {
                Intrinsic::If(name, _, _) | Intrinsic::Condition(name) => name,
                _ => return,
            };
            if !names.contains(name) {
                names.push(name.clone());
            }
        });
        names
    }
}

impl Expr {
    fn walk_intrinsics<'a>(&'a self, f: &mut impl FnMut(&'a Intrinsic)) {
        match self {
            Expr::Intrinsic(intrinsic) => intrinsic.walk(f),
            Expr::List(items) => {
                for item in items {
                    item.walk_intrinsics(f);
                }
            }
            Expr::Map(map) => {
                for value in map.values() {
                    value.walk_intrinsics(f);
                }
            }
            Expr::Bool(_) | Expr::Number(_) | Expr::String(_) | Expr::Null => {}
        }
    }
}

impl From<Intrinsic> for Expr {
    fn from(value: Intrinsic) -> Self {
        Expr::Intrinsic(Box::new(value))
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr::String(value.to_string())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Expr::String(value)
    }
}

/// Collect the outermost intrinsics found anywhere in a JSON document
pub fn find_in_json(value: &serde_json::Value) -> Vec<Intrinsic> {
    let mut found = Vec::new();
    collect(value, &mut found);
    found
}

fn collect(value: &serde_json::Value, found: &mut Vec<Intrinsic>) {
    if let Some(intrinsic) = Intrinsic::from_json(value) {
        found.push(intrinsic);
        return;
    }
    match value {
        serde_json::Value::Array(items) => {
            for item in items {
                collect(item, found);
            }
        }
        serde_json::Value::Object(map) => {
            for v in map.values() {
                collect(v, found);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ref_round_trips_in_long_form() {
        let v = json!({"Ref": "MyBucket"});
        let intrinsic: Intrinsic = serde_json::from_value(v.clone()).unwrap();
        assert_eq!(intrinsic, Intrinsic::reference("MyBucket"));
        assert_eq!(serde_json::to_value(&intrinsic).unwrap(), v);
    }

    #[test]
    fn get_att_accepts_dotted_form() {
        let intrinsic: Intrinsic =
            serde_json::from_value(json!({"Fn::GetAtt": "Db.Endpoint.Address"})).unwrap();
        assert_eq!(intrinsic, Intrinsic::get_att("Db", "Endpoint.Address"));
        // Always emitted as the array form
        assert_eq!(
            serde_json::to_value(&intrinsic).unwrap(),
            json!({"Fn::GetAtt": ["Db", "Endpoint.Address"]})
        );
    }

    #[test]
    fn get_att_rejects_missing_attribute() {
        let result: Result<Intrinsic, _> = serde_json::from_value(json!({"Fn::GetAtt": "Db"}));
        assert!(result.is_err());
    }

    #[test]
    fn join_with_nested_intrinsics() {
        let v = json!({"Fn::Join": ["", ["arn:aws:s3:::", {"Ref": "Bucket"}, "/*"]]});
        let intrinsic: Intrinsic = serde_json::from_value(v.clone()).unwrap();
        assert_eq!(intrinsic.function_name(), "Fn::Join");
        assert_eq!(intrinsic.referenced_logical_ids(), vec!["Bucket"]);
        assert_eq!(serde_json::to_value(&intrinsic).unwrap(), v);
    }

    #[test]
    fn sub_placeholders_skip_bound_pseudo_and_escaped() {
        let intrinsic: Intrinsic = serde_json::from_value(json!({
            "Fn::Sub": [
                "arn:${AWS::Partition}:logs:${AWS::Region}:${Group.Arn}/${Name}/${!Literal}",
                {"Name": {"Ref": "Prefix"}}
            ]
        }))
        .unwrap();
        assert_eq!(intrinsic.referenced_logical_ids(), vec!["Group", "Prefix"]);
    }

    #[test]
    fn conditions_found_in_nested_if() {
        let intrinsic: Intrinsic = serde_json::from_value(json!({
            "Fn::If": ["IsProd", {"Fn::If": ["UseKms", "a", "b"]}, {"Ref": "AWS::NoValue"}]
        }))
        .unwrap();
        assert_eq!(intrinsic.referenced_conditions(), vec!["IsProd", "UseKms"]);
        assert!(intrinsic.referenced_logical_ids().is_empty());
    }

    #[test]
    fn from_json_ignores_plain_objects() {
        assert!(Intrinsic::from_json(&json!({"Key": "Name", "Value": "x"})).is_none());
        assert!(Intrinsic::from_json(&json!({"Ref": "A", "Other": 1})).is_none());
        assert!(Intrinsic::from_json(&json!("Ref")).is_none());
        assert!(Intrinsic::looks_like_intrinsic(&json!({"Fn::GetAtt": 5})));
        assert!(Intrinsic::from_json(&json!({"Fn::GetAtt": 5})).is_none());
    }

    #[test]
    fn find_in_json_returns_outermost_calls() {
        let doc = json!({
            "Name": {"Ref": "Name"},
            "Nested": [{"Inner": {"Fn::ImportValue": {"Fn::Sub": "${Stack}-vpc"}}}],
            "Plain": "value"
        });
        let found = find_in_json(&doc);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn not_and_equals_parse() {
        let intrinsic: Intrinsic = serde_json::from_value(json!({
            "Fn::Not": [{"Fn::Equals": [{"Ref": "Env"}, "prod"]}]
        }))
        .unwrap();
        assert_eq!(intrinsic.referenced_logical_ids(), vec!["Env"]);
    }
}
