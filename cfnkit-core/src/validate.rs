//! Validate - Check a resource's properties against its provider schema
//!
//! Static types catch shape errors at compile time; this module enforces the
//! constraints they cannot express (required properties, enums, patterns,
//! bounds) on raw template JSON. Intrinsics are accepted anywhere a value is
//! expected and are not descended into.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, OnceLock, PoisonError};

use regex::Regex;
use serde_json::Map as JsonMap;
use thiserror::Error;

use crate::config::ValidationConfig;
use crate::intrinsic::Intrinsic;
use crate::schema::{PropertyKind, PropertySchema, ResourceSchema};
use crate::value::Json;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationErrorKind {
    #[error("required property '{name}' is missing")]
    MissingRequired { name: String },

    #[error("unknown property '{name}'")]
    UnknownProperty { name: String },

    #[error("'{name}' is read-only and cannot be set in a template")]
    ReadOnly { name: String },

    #[error("expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: &'static str },

    #[error("invalid value '{value}', expected one of: {}", allowed.join(", "))]
    InvalidEnum { value: String, allowed: Vec<String> },

    #[error("'{value}' does not match pattern {pattern}")]
    PatternMismatch { value: String, pattern: String },

    #[error("length {length} is shorter than minimum {min}")]
    TooShort { length: usize, min: u64 },

    #[error("length {length} exceeds maximum {max}")]
    TooLong { length: usize, max: u64 },

    #[error("{value} is less than minimum {min}")]
    BelowMinimum { value: f64, min: f64 },

    #[error("{value} is greater than maximum {max}")]
    AboveMaximum { value: f64, max: f64 },

    #[error("{count} items, expected at least {min}")]
    TooFewItems { count: usize, min: u64 },

    #[error("{count} items, expected at most {max}")]
    TooManyItems { count: usize, max: u64 },

    #[error("items must be unique")]
    DuplicateItems,

    #[error("expected {quantifier} of: {alternatives}")]
    NoBranchMatched {
        quantifier: &'static str,
        alternatives: String,
    },
}

/// A validation error with the dotted path of the offending value
/// (e.g., `Spec.Listeners[0].PortMapping.Port`)
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub path: String,
    pub kind: ValidationErrorKind,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.path, self.kind)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Result type for validation
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Validate a resource's `Properties` object
pub fn validate_properties(
    schema: &ResourceSchema,
    properties: &Json,
    config: &ValidationConfig,
) -> ValidationResult {
    log::debug!("Validating properties of {}", schema.type_name);

    let mut validator = Validator {
        schema,
        config,
        errors: Vec::new(),
    };
    let root = schema.root();
    let empty = JsonMap::new();

    match properties {
        Json::Null => validator.check_object("", "", &root, &empty),
        Json::Object(map) => validator.check_object("", "", &root, map),
        other => validator.push(
            "",
            ValidationErrorKind::TypeMismatch {
                expected: "Object".to_string(),
                got: json_type_name(other),
            },
        ),
    }

    log::trace!(
        "{}: {} validation error(s)",
        schema.type_name,
        validator.errors.len()
    );
    if validator.errors.is_empty() {
        Ok(())
    } else {
        Err(validator.errors)
    }
}

struct Validator<'a> {
    schema: &'a ResourceSchema,
    config: &'a ValidationConfig,
    errors: Vec<ValidationError>,
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

impl<'a> Validator<'a> {
    fn full(&self) -> bool {
        self.config.limit_reached(self.errors.len())
    }

    fn push(&mut self, path: &str, kind: ValidationErrorKind) {
        if !self.full() {
            self.errors.push(ValidationError {
                path: path.to_string(),
                kind,
            });
        }
    }

    /// `schema_path` tracks property names only (no list indices) so it can
    /// be matched against the schema's read-only pointers
    fn check_object(
        &mut self,
        path: &str,
        schema_path: &str,
        object: &PropertySchema,
        value: &JsonMap<String, Json>,
    ) {
        for name in &object.required {
            if !value.contains_key(name) && !self.schema.is_read_only(&join(schema_path, name)) {
                self.push(
                    &join(path, name),
                    ValidationErrorKind::MissingRequired { name: name.clone() },
                );
            }
        }

        self.check_branches(path, object, value);

        for (key, v) in value {
            if self.full() {
                return;
            }
            let child_path = join(path, key);
            let child_schema_path = join(schema_path, key);
            match object.properties.get(key) {
                Some(_) if self.config.report_read_only
                    && self.schema.is_read_only(&child_schema_path) =>
                {
                    self.push(
                        &child_path,
                        ValidationErrorKind::ReadOnly { name: key.clone() },
                    );
                }
                Some(prop) => self.check_value(&child_path, &child_schema_path, prop, v),
                None if self.config.deny_unknown_properties && object.denies_additional() => {
                    self.push(
                        &child_path,
                        ValidationErrorKind::UnknownProperty { name: key.clone() },
                    );
                }
                None => {}
            }
        }
    }

    /// `oneOf`/`anyOf` branches in provider schemas list alternative
    /// `required` sets
    fn check_branches(&mut self, path: &str, object: &PropertySchema, value: &JsonMap<String, Json>) {
        let check = |branches: &[PropertySchema]| -> Option<(usize, String)> {
            let constrained: Vec<&PropertySchema> = branches
                .iter()
                .filter(|b| !b.required.is_empty())
                .collect();
            if constrained.is_empty() {
                return None;
            }
            let satisfied = constrained
                .iter()
                .filter(|b| b.required.iter().all(|r| value.contains_key(r)))
                .count();
            let alternatives = constrained
                .iter()
                .map(|b| format!("[{}]", b.required.join(", ")))
                .collect::<Vec<_>>()
                .join(" | ");
            Some((satisfied, alternatives))
        };

        if let Some((satisfied, alternatives)) = check(&object.one_of)
            && satisfied != 1
        {
            self.push(
                path,
                ValidationErrorKind::NoBranchMatched {
                    quantifier: "exactly one",
                    alternatives,
                },
            );
        }
        if let Some((satisfied, alternatives)) = check(&object.any_of)
            && satisfied == 0
        {
            self.push(
                path,
                ValidationErrorKind::NoBranchMatched {
                    quantifier: "at least one",
                    alternatives,
                },
            );
        }
    }

    fn check_value(&mut self, path: &str, schema_path: &str, prop: &PropertySchema, value: &Json) {
        if self.full() || Intrinsic::looks_like_intrinsic(value) {
            return;
        }

        let schema = self.schema;
        let (kind, resolved) = match schema
            .property_kind(prop)
            .and_then(|kind| schema.resolve(prop).map(|(_, r)| (kind, r)))
        {
            Ok(pair) => pair,
            Err(e) => {
                log::warn!("{}: skipping {}: {}", schema.type_name, path, e);
                return;
            }
        };

        let mismatch = |expected: &str| ValidationErrorKind::TypeMismatch {
            expected: expected.to_string(),
            got: json_type_name(value),
        };

        match kind {
            PropertyKind::String => match value {
                Json::String(s) => self.check_string(path, resolved, s),
                // CloudFormation stringifies scalar literals
                Json::Number(_) | Json::Bool(_) => {
                    self.check_string(path, resolved, &value.to_string())
                }
                _ => self.push(path, mismatch("String")),
            },
            PropertyKind::Integer => match as_integer(value) {
                Some(n) => {
                    self.check_enum(path, resolved, value);
                    self.check_range(path, resolved, n as f64);
                }
                None => self.push(path, mismatch("Integer")),
            },
            PropertyKind::Number => match as_number(value) {
                Some(n) => {
                    self.check_enum(path, resolved, value);
                    self.check_range(path, resolved, n);
                }
                None => self.push(path, mismatch("Number")),
            },
            PropertyKind::Boolean => {
                if as_bool(value).is_none() {
                    self.push(path, mismatch("Boolean"));
                }
            }
            PropertyKind::Array(items) => match value {
                Json::Array(list) => {
                    self.check_items(path, resolved, list);
                    for (i, item) in list.iter().enumerate() {
                        self.check_value(&format!("{}[{}]", path, i), schema_path, items, item);
                    }
                }
                _ => self.push(path, mismatch("List")),
            },
            PropertyKind::Object { name, schema: object } => match value {
                Json::Object(map) => self.check_object(path, schema_path, object, map),
                _ => self.push(path, mismatch(name.unwrap_or("Object"))),
            },
            PropertyKind::Map(values) => match value {
                Json::Object(map) => {
                    for (key, v) in map {
                        self.check_value(&join(path, key), schema_path, values, v);
                    }
                }
                _ => self.push(path, mismatch("Map")),
            },
            PropertyKind::Json => {}
        }
    }

    fn check_string(&mut self, path: &str, prop: &PropertySchema, s: &str) {
        if let Some(allowed) = prop.enum_strings()
            && !allowed.iter().any(|a| a == s)
        {
            self.push(
                path,
                ValidationErrorKind::InvalidEnum {
                    value: s.to_string(),
                    allowed,
                },
            );
            return;
        }

        let length = s.chars().count();
        if let Some(min) = prop.min_length
            && (length as u64) < min
        {
            self.push(path, ValidationErrorKind::TooShort { length, min });
        }
        if let Some(max) = prop.max_length
            && (length as u64) > max
        {
            self.push(path, ValidationErrorKind::TooLong { length, max });
        }

        if self.config.check_patterns
            && let Some(pattern) = &prop.pattern
            && let Some(re) = compiled(pattern)
            && !re.is_match(s)
        {
            self.push(
                path,
                ValidationErrorKind::PatternMismatch {
                    value: s.to_string(),
                    pattern: pattern.clone(),
                },
            );
        }
    }

    fn check_enum(&mut self, path: &str, prop: &PropertySchema, value: &Json) {
        let Some(allowed) = prop.enum_strings() else {
            return;
        };
        let rendered = match value {
            Json::String(s) => s.clone(),
            other => other.to_string(),
        };
        if !allowed.contains(&rendered) {
            self.push(
                path,
                ValidationErrorKind::InvalidEnum {
                    value: rendered,
                    allowed,
                },
            );
        }
    }

    fn check_range(&mut self, path: &str, prop: &PropertySchema, value: f64) {
        if let Some(min) = prop.minimum
            && value < min
        {
            self.push(path, ValidationErrorKind::BelowMinimum { value, min });
        }
        if let Some(max) = prop.maximum
            && value > max
        {
            self.push(path, ValidationErrorKind::AboveMaximum { value, max });
        }
    }

    fn check_items(&mut self, path: &str, prop: &PropertySchema, items: &[Json]) {
        let count = items.len();
        if let Some(min) = prop.min_items
            && (count as u64) < min
        {
            self.push(path, ValidationErrorKind::TooFewItems { count, min });
        }
        if let Some(max) = prop.max_items
            && (count as u64) > max
        {
            self.push(path, ValidationErrorKind::TooManyItems { count, max });
        }
        if prop.unique_items
            && items
                .iter()
                .enumerate()
                .any(|(i, a)| items[i + 1..].contains(a))
        {
            self.push(path, ValidationErrorKind::DuplicateItems);
        }
    }
}

/// Compile a schema pattern once. Patterns the regex engine cannot handle
/// (look-around, backreferences) are skipped.
fn compiled(pattern: &str) -> Option<Regex> {
    static CACHE: OnceLock<Mutex<HashMap<String, Option<Regex>>>> = OnceLock::new();
    let mut cache = CACHE
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    cache
        .entry(pattern.to_string())
        .or_insert_with(|| match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                log::debug!("Skipping unsupported pattern {}: {}", pattern, e);
                None
            }
        })
        .clone()
}

fn as_integer(value: &Json) -> Option<i64> {
    match value {
        Json::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Json::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_number(value: &Json) -> Option<f64> {
    match value {
        Json::Number(n) => n.as_f64(),
        Json::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_bool(value: &Json) -> Option<bool> {
    match value {
        Json::Bool(b) => Some(*b),
        Json::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Json::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

fn json_type_name(value: &Json) -> &'static str {
    match value {
        Json::Null => "Null",
        Json::Bool(_) => "Boolean",
        Json::Number(_) => "Number",
        Json::String(_) => "String",
        Json::Array(_) => "List",
        Json::Object(_) => "Object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SCHEMA: &str = r##"{
        "typeName": "AWS::Test::Service",
        "definitions": {
            "PortMapping": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "Port": {"type": "integer", "minimum": 1, "maximum": 65535},
                    "Protocol": {"type": "string", "enum": ["http", "tcp", "grpc"]}
                },
                "required": ["Port", "Protocol"]
            },
            "Source": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "Bucket": {"type": "string"},
                    "Stream": {"type": "string"}
                },
                "oneOf": [{"required": ["Bucket"]}, {"required": ["Stream"]}]
            }
        },
        "properties": {
            "Name": {"type": "string", "minLength": 3, "maxLength": 8, "pattern": "^[a-z-]+$"},
            "Enabled": {"type": "boolean"},
            "Ports": {
                "type": "array",
                "minItems": 1,
                "maxItems": 3,
                "items": {"$ref": "#/definitions/PortMapping"}
            },
            "Zones": {"type": "array", "uniqueItems": true, "items": {"type": "string"}},
            "Labels": {"type": "object", "patternProperties": {".*": {"type": "string", "maxLength": 4}}},
            "Source": {"$ref": "#/definitions/Source"},
            "Policy": {"type": "object"},
            "Ratio": {"type": "number"},
            "Arn": {"type": "string"}
        },
        "required": ["Name", "Ports"],
        "readOnlyProperties": ["/properties/Arn"],
        "additionalProperties": false
    }"##;

    fn schema() -> ResourceSchema {
        ResourceSchema::from_json(SCHEMA).unwrap()
    }

    fn errors(properties: Json) -> Vec<ValidationError> {
        validate_properties(&schema(), &properties, &ValidationConfig::default())
            .err()
            .unwrap_or_default()
    }

    fn paths(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.path.as_str()).collect()
    }

    #[test]
    fn valid_properties_pass() {
        let result = validate_properties(
            &schema(),
            &json!({
                "Name": "web-app",
                "Enabled": "true",
                "Ports": [{"Port": "8080", "Protocol": "http"}],
                "Zones": ["a", "b"],
                "Labels": {"team": "core"},
                "Source": {"Bucket": "logs"},
                "Policy": {"Statement": []},
                "Ratio": 0.5
            }),
            &ValidationConfig::default(),
        );
        assert!(result.is_ok(), "{:?}", result);
    }

    #[test]
    fn missing_required_and_unknown() {
        let errs = errors(json!({"Extra": 1}));
        assert_eq!(paths(&errs), vec!["Name", "Ports", "Extra"]);
        assert!(matches!(
            errs[0].kind,
            ValidationErrorKind::MissingRequired { .. }
        ));
        assert!(matches!(
            errs[2].kind,
            ValidationErrorKind::UnknownProperty { .. }
        ));
    }

    #[test]
    fn unknown_allowed_by_config() {
        let config = ValidationConfig::default().allow_unknown_properties();
        let result = validate_properties(
            &schema(),
            &json!({"Name": "abc", "Ports": [{"Port": 1, "Protocol": "tcp"}], "Extra": 1}),
            &config,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn nested_errors_carry_indexed_paths() {
        let errs = errors(json!({
            "Name": "abc",
            "Ports": [
                {"Port": 80, "Protocol": "http"},
                {"Port": 70000, "Protocol": "udp"}
            ]
        }));
        assert_eq!(paths(&errs), vec!["Ports[1].Port", "Ports[1].Protocol"]);
        assert_eq!(
            errs[1].to_string(),
            "Ports[1].Protocol: invalid value 'udp', expected one of: http, tcp, grpc"
        );
    }

    #[test]
    fn string_constraints() {
        let errs = errors(json!({"Name": "AB", "Ports": [{"Port": 1, "Protocol": "tcp"}]}));
        assert!(matches!(errs[0].kind, ValidationErrorKind::TooShort { length: 2, min: 3 }));
        assert!(matches!(errs[1].kind, ValidationErrorKind::PatternMismatch { .. }));

        let config = ValidationConfig::default().without_patterns();
        let result = validate_properties(
            &schema(),
            &json!({"Name": "ABCD", "Ports": [{"Port": 1, "Protocol": "tcp"}]}),
            &config,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn scalar_literals_get_string_constraints() {
        let errs = errors(json!({
            "Name": 123456789,
            "Ports": [{"Port": 1, "Protocol": "tcp"}],
            "Labels": {"build": 12345}
        }));
        assert_eq!(paths(&errs), vec!["Labels.build", "Name", "Name"]);
        assert!(matches!(errs[0].kind, ValidationErrorKind::TooLong { length: 5, max: 4 }));
        assert!(matches!(errs[1].kind, ValidationErrorKind::TooLong { length: 9, max: 8 }));
        assert_eq!(
            errs[2].kind,
            ValidationErrorKind::PatternMismatch {
                value: "123456789".to_string(),
                pattern: "^[a-z-]+$".to_string(),
            }
        );

        // `true` reads as the string "true"
        let result = validate_properties(
            &schema(),
            &json!({"Name": true, "Ports": [{"Port": 1, "Protocol": "tcp"}]}),
            &ValidationConfig::default(),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn intrinsics_are_accepted_anywhere() {
        let result = validate_properties(
            &schema(),
            &json!({
                "Name": {"Fn::Sub": "${AWS::StackName}-svc"},
                "Enabled": {"Fn::If": ["IsProd", true, false]},
                "Ports": {"Ref": "PortList"},
                "Source": {"Fn::ImportValue": "shared-source"}
            }),
            &ValidationConfig::default(),
        );
        assert!(result.is_ok(), "{:?}", result);
    }

    #[test]
    fn list_constraints() {
        let errs = errors(json!({"Name": "abc", "Ports": [], "Zones": ["a", "a"]}));
        assert!(matches!(errs[0].kind, ValidationErrorKind::TooFewItems { count: 0, min: 1 }));
        assert!(matches!(errs[1].kind, ValidationErrorKind::DuplicateItems));
    }

    #[test]
    fn type_mismatches() {
        let errs = errors(json!({"Name": ["abc"], "Ports": "80", "Enabled": "maybe", "Ratio": "x"}));
        let expected: Vec<&str> = errs
            .iter()
            .map(|e| match &e.kind {
                ValidationErrorKind::TypeMismatch { expected, .. } => expected.as_str(),
                _ => "other",
            })
            .collect();
        assert_eq!(expected, vec!["Boolean", "String", "List", "Number"]);
    }

    #[test]
    fn one_of_requires_exactly_one_branch() {
        let base = json!({"Name": "abc", "Ports": [{"Port": 1, "Protocol": "tcp"}]});

        let mut both = base.clone();
        both["Source"] = json!({"Bucket": "b", "Stream": "s"});
        let errs = errors(both);
        assert_eq!(
            errs[0].to_string(),
            "Source: expected exactly one of: [Bucket] | [Stream]"
        );

        let mut neither = base;
        neither["Source"] = json!({});
        assert_eq!(errors(neither).len(), 1);
    }

    #[test]
    fn map_values_and_read_only() {
        let errs = errors(json!({
            "Name": "abc",
            "Ports": [{"Port": 1, "Protocol": "tcp"}],
            "Labels": {"team": "platform"},
            "Arn": "arn:aws:test"
        }));
        assert_eq!(paths(&errs), vec!["Arn", "Labels.team"]);
        assert!(matches!(errs[0].kind, ValidationErrorKind::ReadOnly { .. }));
    }

    #[test]
    fn max_errors_truncates() {
        let config = ValidationConfig::default().with_max_errors(1);
        let result = validate_properties(&schema(), &json!({"A": 1, "B": 2}), &config);
        assert_eq!(result.unwrap_err().len(), 1);
    }

    #[test]
    fn non_object_properties() {
        let errs = errors(json!([1, 2]));
        assert_eq!(errs[0].to_string(), "expected Object, got List");
    }

    #[test]
    fn unsupported_patterns_are_skipped() {
        assert!(compiled("^(?!aws:).*$").is_none());
        assert!(compiled("^[a-z]+$").is_some());
    }
}
