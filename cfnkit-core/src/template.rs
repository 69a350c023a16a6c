//! Template - Loading CloudFormation templates from JSON or YAML
//!
//! YAML templates may use the short-form function tags (`!Ref`, `!GetAtt`,
//! `!Sub`, ...). Those are rewritten to the long JSON form on load so the rest
//! of the crate only ever sees one representation.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::intrinsic::{self, Intrinsic};
use crate::resource::{Resource, ResourceAttributes, ResourceProperties};
use crate::value::Json;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON template: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML template: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown function tag '!{0}'")]
    UnknownTag(String),

    #[error("Unsupported mapping key: {0}")]
    UnsupportedKey(String),

    #[error("Number cannot be represented in JSON: {0}")]
    InvalidNumber(String),

    #[error("Resource type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("Invalid properties for {type_name}: {source}")]
    InvalidProperties {
        type_name: String,
        source: serde_json::Error,
    },
}

/// A problem with how template sections refer to each other
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("{location}: DependsOn names missing resource '{target}'")]
    DanglingDependsOn { location: String, target: String },

    #[error("{location}: '{target}' is neither a resource nor a parameter")]
    UnresolvedReference { location: String, target: String },

    #[error("{location}: condition '{condition}' is not defined")]
    UndefinedCondition { location: String, condition: String },
}

/// A resource entry as written in a template, before its properties are
/// bound to a typed declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateResource {
    #[serde(rename = "Type")]
    pub resource_type: String,
    #[serde(rename = "Properties", default, skip_serializing_if = "Json::is_null")]
    pub properties: Json,
    #[serde(flatten)]
    pub attributes: ResourceAttributes,
}

impl TemplateResource {
    /// Bind this entry to the typed declaration for its resource type
    pub fn typed<P: ResourceProperties>(&self) -> Result<Resource<P>, TemplateError> {
        if self.resource_type != P::TYPE_NAME {
            return Err(TemplateError::TypeMismatch {
                expected: P::TYPE_NAME.to_string(),
                actual: self.resource_type.clone(),
            });
        }
        let properties = match &self.properties {
            Json::Null => Json::Object(Default::default()),
            other => other.clone(),
        };
        let properties =
            serde_json::from_value(properties).map_err(|source| TemplateError::InvalidProperties {
                type_name: self.resource_type.clone(),
                source,
            })?;
        Ok(Resource {
            properties,
            attributes: self.attributes.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(
        rename = "AWSTemplateFormatVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub format_version: Option<String>,
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,
    #[serde(rename = "Transform", default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Json>,
    #[serde(rename = "Parameters", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, Json>,
    #[serde(rename = "Mappings", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mappings: BTreeMap<String, Json>,
    #[serde(rename = "Conditions", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub conditions: BTreeMap<String, Json>,
    #[serde(rename = "Resources", default)]
    pub resources: BTreeMap<String, TemplateResource>,
    #[serde(rename = "Outputs", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub outputs: BTreeMap<String, Json>,
}

impl Template {
    pub fn from_json_str(json: &str) -> Result<Self, TemplateError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, TemplateError> {
        let document: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        let json = yaml_to_json(document)?;
        Ok(serde_json::from_value(json)?)
    }

    /// Load a template from disk; `.json` files are parsed as JSON, anything
    /// else as YAML
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let content = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        log::debug!(
            "Loading {} template {}",
            if is_json { "JSON" } else { "YAML" },
            path.display()
        );
        let template = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };
        log::debug!("Loaded {} resources", template.resources.len());
        Ok(template)
    }

    pub fn to_json_string(&self) -> Result<String, TemplateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn resources_of_type<'a>(
        &'a self,
        type_name: &'a str,
    ) -> impl Iterator<Item = (&'a String, &'a TemplateResource)> + 'a {
        self.resources
            .iter()
            .filter(move |(_, r)| r.resource_type == type_name)
    }

    /// Check that `DependsOn`, `Ref`/`Fn::GetAtt` targets and condition names
    /// point at something the template defines
    pub fn structural_errors(&self) -> Vec<StructuralError> {
        let mut checker = ReferenceChecker {
            conditions: self.conditions.keys().map(String::as_str).collect(),
            targets: self
                .resources
                .keys()
                .chain(self.parameters.keys())
                .map(String::as_str)
                .collect(),
            errors: Vec::new(),
        };

        for (name, body) in &self.conditions {
            checker.check_intrinsics(&format!("Conditions.{}", name), body);
        }

        for (logical_id, resource) in &self.resources {
            let location = format!("Resources.{}", logical_id);
            for target in resource.attributes.dependencies() {
                if !self.resources.contains_key(target) {
                    checker.errors.push(StructuralError::DanglingDependsOn {
                        location: location.clone(),
                        target: target.clone(),
                    });
                }
            }
            if let Some(condition) = &resource.attributes.condition {
                checker.check_condition(&location, condition);
            }
            checker.check_intrinsics(&location, &resource.properties);
        }

        for (name, output) in &self.outputs {
            let location = format!("Outputs.{}", name);
            if let Some(condition) = output.get("Condition").and_then(Json::as_str) {
                checker.check_condition(&location, condition);
            }
            checker.check_intrinsics(&location, output);
        }

        checker.errors
    }
}

struct ReferenceChecker<'a> {
    conditions: BTreeSet<&'a str>,
    targets: BTreeSet<&'a str>,
    errors: Vec<StructuralError>,
}

impl ReferenceChecker<'_> {
    fn check_condition(&mut self, location: &str, name: &str) {
        if !self.conditions.contains(name) {
            self.errors.push(StructuralError::UndefinedCondition {
                location: location.to_string(),
                condition: name.to_string(),
            });
        }
    }

    fn check_intrinsics(&mut self, location: &str, value: &Json) {
        for found in intrinsic::find_in_json(value) {
            for target in found.referenced_logical_ids() {
                if !self.targets.contains(target.as_str()) {
                    self.errors.push(StructuralError::UnresolvedReference {
                        location: location.to_string(),
                        target,
                    });
                }
            }
            for name in found.referenced_conditions() {
                self.check_condition(location, &name);
            }
        }
    }
}

/// Convert a YAML document to JSON, expanding short-form function tags
fn yaml_to_json(value: serde_yaml::Value) -> Result<Json, TemplateError> {
    use serde_yaml::Value as Yaml;

    Ok(match value {
        Yaml::Null => Json::Null,
        Yaml::Bool(b) => Json::Bool(b),
        Yaml::Number(n) => yaml_number(&n)?,
        Yaml::String(s) => Json::String(s),
        Yaml::Sequence(items) => Json::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<_, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut object = serde_json::Map::new();
            for (key, value) in mapping {
                let key = match key {
                    Yaml::String(s) => s,
                    Yaml::Number(n) => n.to_string(),
                    Yaml::Bool(b) => b.to_string(),
                    other => return Err(TemplateError::UnsupportedKey(format!("{:?}", other))),
                };
                object.insert(key, yaml_to_json(value)?);
            }
            Json::Object(object)
        }
        Yaml::Tagged(tagged) => {
            let tag = tagged.tag.to_string();
            let name = tag.trim_start_matches('!');
            let function = match name {
                "Ref" | "Condition" => name.to_string(),
                other => format!("Fn::{}", other),
            };
            if !Intrinsic::is_intrinsic_key(&function) {
                return Err(TemplateError::UnknownTag(name.to_string()));
            }
            let body = match (function.as_str(), tagged.value) {
                // `!GetAtt Resource.Attribute`
                ("Fn::GetAtt", Yaml::String(dotted)) => match dotted.split_once('.') {
                    Some((resource, attribute)) => Json::Array(vec![
                        Json::String(resource.to_string()),
                        Json::String(attribute.to_string()),
                    ]),
                    None => Json::String(dotted),
                },
                (_, value) => yaml_to_json(value)?,
            };
            let mut object = serde_json::Map::new();
            object.insert(function, body);
            Json::Object(object)
        }
    })
}

fn yaml_number(n: &serde_yaml::Number) -> Result<Json, TemplateError> {
    if let Some(i) = n.as_i64() {
        Ok(Json::from(i))
    } else if let Some(u) = n.as_u64() {
        Ok(Json::from(u))
    } else {
        n.as_f64()
            .and_then(serde_json::Number::from_f64)
            .map(Json::Number)
            .ok_or_else(|| TemplateError::InvalidNumber(n.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use serde_json::json;
    use std::io::Write;

    const YAML: &str = r#"
AWSTemplateFormatVersion: "2010-09-09"
Description: Queue stack
Parameters:
  Env:
    Type: String
Conditions:
  IsProd: !Equals [!Ref Env, prod]
Resources:
  Queue:
    Type: AWS::SQS::Queue
    Condition: IsProd
    Properties:
      QueueName: !Sub "${Env}-jobs"
      DelaySeconds: 5
      RedrivePolicy:
        deadLetterTargetArn: !GetAtt DeadLetters.Arn
  DeadLetters:
    Type: AWS::SQS::Queue
    DependsOn: [Topic]
Outputs:
  QueueUrl:
    Value: !If [IsProd, !Ref Queue, !Ref "AWS::NoValue"]
"#;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct QueueProperties {
        #[serde(rename = "QueueName", default, skip_serializing_if = "Option::is_none")]
        queue_name: Option<Value<String>>,
        #[serde(rename = "DelaySeconds", default, skip_serializing_if = "Option::is_none")]
        delay_seconds: Option<Value<i64>>,
        #[serde(rename = "RedrivePolicy", default, skip_serializing_if = "Option::is_none")]
        redrive_policy: Option<Json>,
    }

    impl ResourceProperties for QueueProperties {
        const TYPE_NAME: &'static str = "AWS::SQS::Queue";
    }

    #[test]
    fn yaml_short_forms_become_long_form() {
        let template = Template::from_yaml_str(YAML).unwrap();
        assert_eq!(template.format_version.as_deref(), Some("2010-09-09"));
        assert_eq!(
            template.conditions["IsProd"],
            json!({"Fn::Equals": [{"Ref": "Env"}, "prod"]})
        );

        let queue = &template.resources["Queue"];
        assert_eq!(
            queue.properties,
            json!({
                "QueueName": {"Fn::Sub": "${Env}-jobs"},
                "DelaySeconds": 5,
                "RedrivePolicy": {"deadLetterTargetArn": {"Fn::GetAtt": ["DeadLetters", "Arn"]}}
            })
        );
        assert_eq!(queue.attributes.condition.as_deref(), Some("IsProd"));
        assert_eq!(
            template.outputs["QueueUrl"]["Value"],
            json!({"Fn::If": ["IsProd", {"Ref": "Queue"}, {"Ref": "AWS::NoValue"}]})
        );
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = Template::from_yaml_str("Resources: !Bogus x").unwrap_err();
        assert!(matches!(err, TemplateError::UnknownTag(ref t) if t == "Bogus"));
    }

    #[test]
    fn transform_tag_is_kept_as_long_form() {
        let template = Template::from_yaml_str(
            r#"
Resources:
  Queue:
    Type: AWS::SQS::Queue
    Properties:
      Policy: !Transform
        Name: AWS::Include
        Parameters:
          Location: s3://b/p.yaml
      Tags: !Transform
        Name: AWS::Include
        Parameters:
          Location: !Sub "s3://${Bucket}/tags.yaml"
"#,
        )
        .unwrap();

        let properties = &template.resources["Queue"].properties;
        assert_eq!(
            properties["Policy"],
            json!({"Fn::Transform": {
                "Name": "AWS::Include",
                "Parameters": {"Location": "s3://b/p.yaml"}
            }})
        );
        assert_eq!(
            properties["Tags"]["Fn::Transform"]["Parameters"]["Location"],
            json!({"Fn::Sub": "s3://${Bucket}/tags.yaml"})
        );
        let intrinsic = Intrinsic::from_json(&properties["Policy"]).unwrap();
        assert_eq!(intrinsic.function_name(), "Fn::Transform");

        // References inside the macro parameters are still checked
        let messages: Vec<String> = template
            .structural_errors()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            messages,
            vec!["Resources.Queue: 'Bucket' is neither a resource nor a parameter"]
        );
    }

    #[test]
    fn typed_binds_properties() {
        let template = Template::from_yaml_str(YAML).unwrap();
        let queue = template.resources["Queue"]
            .typed::<QueueProperties>()
            .unwrap();
        assert_eq!(queue.properties.delay_seconds, Some(Value::Literal(5)));
        assert!(queue.properties.queue_name.unwrap().is_intrinsic());
        assert_eq!(queue.attributes.condition.as_deref(), Some("IsProd"));

        // No Properties block at all
        let dead_letters = template.resources["DeadLetters"]
            .typed::<QueueProperties>()
            .unwrap();
        assert_eq!(dead_letters.attributes.dependencies(), ["Topic"]);
    }

    #[test]
    fn typed_rejects_other_resource_types() {
        let resource = TemplateResource {
            resource_type: "AWS::SNS::Topic".to_string(),
            properties: Json::Null,
            attributes: ResourceAttributes::default(),
        };
        assert!(matches!(
            resource.typed::<QueueProperties>(),
            Err(TemplateError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn structural_errors_report_dangling_names() {
        let template = Template::from_yaml_str(YAML).unwrap();
        let errors = template.structural_errors();
        assert_eq!(
            errors,
            vec![StructuralError::DanglingDependsOn {
                location: "Resources.DeadLetters".to_string(),
                target: "Topic".to_string(),
            }]
        );

        let template = Template::from_json_str(
            r#"{
                "Resources": {
                    "Bucket": {
                        "Type": "AWS::S3::Bucket",
                        "Condition": "Missing",
                        "Properties": {"BucketName": {"Fn::Sub": "${Prefix}-${AWS::Region}"}}
                    }
                },
                "Outputs": {"Arn": {"Value": {"Fn::GetAtt": "Nope.Arn"}}}
            }"#,
        )
        .unwrap();
        let messages: Vec<String> = template
            .structural_errors()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            messages,
            vec![
                "Resources.Bucket: condition 'Missing' is not defined",
                "Resources.Bucket: 'Prefix' is neither a resource nor a parameter",
                "Outputs.Arn: 'Nope' is neither a resource nor a parameter",
            ]
        );
    }

    #[test]
    fn load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("stack.json");
        std::fs::write(
            &json_path,
            r#"{"Resources": {"Q": {"Type": "AWS::SQS::Queue"}}}"#,
        )
        .unwrap();
        assert_eq!(Template::load(&json_path).unwrap().resources.len(), 1);

        let yaml_path = dir.path().join("stack.yaml");
        let mut file = std::fs::File::create(&yaml_path).unwrap();
        file.write_all(YAML.as_bytes()).unwrap();
        assert_eq!(Template::load(&yaml_path).unwrap().resources.len(), 2);

        let missing = dir.path().join("missing.yaml");
        assert!(matches!(
            Template::load(&missing),
            Err(TemplateError::Io { .. })
        ));
    }

    #[test]
    fn converts_to_canonical_json() {
        let template = Template::from_yaml_str(YAML).unwrap();
        let json = template.to_json_string().unwrap();
        let reparsed = Template::from_json_str(&json).unwrap();
        assert_eq!(reparsed, template);
        assert!(json.starts_with("{\n  \"AWSTemplateFormatVersion\""));
    }

    #[test]
    fn resources_of_type_filters() {
        let template = Template::from_yaml_str(YAML).unwrap();
        assert_eq!(template.resources_of_type("AWS::SQS::Queue").count(), 2);
        assert_eq!(template.resources_of_type("AWS::SNS::Topic").count(), 0);
    }
}
