//! Resource - Typed resources and the attributes every resource shares

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::{Json, Value};

/// Implemented by the generated properties struct of each resource type
pub trait ResourceProperties: Serialize + DeserializeOwned {
    /// CloudFormation type name (e.g., "AWS::FSx::FileSystem")
    const TYPE_NAME: &'static str;
}

/// What CloudFormation does with a resource when it leaves the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeletionPolicy {
    Delete,
    Retain,
    RetainExceptOnCreate,
    Snapshot,
}

/// `DependsOn`: a single logical id or a list of them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependsOn {
    One(String),
    Many(Vec<String>),
}

impl DependsOn {
    pub fn names(&self) -> &[String] {
        match self {
            DependsOn::One(name) => std::slice::from_ref(name),
            DependsOn::Many(names) => names,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreationPolicy {
    #[serde(
        rename = "AutoScalingCreationPolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_scaling_creation_policy: Option<AutoScalingCreationPolicy>,
    #[serde(
        rename = "ResourceSignal",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub resource_signal: Option<ResourceSignal>,
    #[serde(rename = "StartFleet", default, skip_serializing_if = "Option::is_none")]
    pub start_fleet: Option<Value<bool>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AutoScalingCreationPolicy {
    #[serde(
        rename = "MinSuccessfulInstancesPercent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub min_successful_instances_percent: Option<Value<i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceSignal {
    #[serde(rename = "Count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Value<i64>>,
    /// ISO 8601 duration (e.g., "PT15M")
    #[serde(rename = "Timeout", default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Value<String>>,
}

/// Common per-resource metadata that sits next to `Type` and `Properties`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceAttributes {
    #[serde(rename = "Condition", default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(rename = "DependsOn", default, skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<DependsOn>,
    #[serde(
        rename = "DeletionPolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub deletion_policy: Option<Value<DeletionPolicy>>,
    #[serde(
        rename = "UpdateReplacePolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub update_replace_policy: Option<Value<DeletionPolicy>>,
    #[serde(rename = "Metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Json>,
    #[serde(
        rename = "CreationPolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_policy: Option<CreationPolicy>,
    #[serde(
        rename = "UpdatePolicy",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub update_policy: Option<Json>,
}

impl ResourceAttributes {
    /// Logical ids listed in `DependsOn`
    pub fn dependencies(&self) -> &[String] {
        self.depends_on.as_ref().map(DependsOn::names).unwrap_or(&[])
    }
}

/// A typed resource: `{"Type": ..., "Properties": ..., <attributes>}`
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<P> {
    pub properties: P,
    pub attributes: ResourceAttributes,
}

impl<P: ResourceProperties> Resource<P> {
    pub fn new(properties: P) -> Self {
        Self {
            properties,
            attributes: ResourceAttributes::default(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        P::TYPE_NAME
    }

    pub fn with_attributes(mut self, attributes: ResourceAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn depends_on(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        self.attributes.depends_on = match names.len() {
            0 => None,
            1 => names.pop().map(DependsOn::One),
            _ => Some(DependsOn::Many(names)),
        };
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.attributes.condition = Some(condition.into());
        self
    }

    pub fn with_deletion_policy(mut self, policy: DeletionPolicy) -> Self {
        self.attributes.deletion_policy = Some(Value::Literal(policy));
        self
    }

    pub fn to_json(&self) -> serde_json::Result<Json> {
        serde_json::to_value(self)
    }
}

#[derive(Serialize)]
struct ResourceOut<'a, P> {
    #[serde(rename = "Type")]
    type_name: &'static str,
    #[serde(rename = "Properties")]
    properties: &'a P,
    #[serde(flatten)]
    attributes: &'a ResourceAttributes,
}

#[derive(Deserialize)]
struct ResourceIn<P> {
    #[serde(rename = "Type")]
    type_name: String,
    #[serde(rename = "Properties")]
    properties: P,
    #[serde(flatten)]
    attributes: ResourceAttributes,
}

impl<P: ResourceProperties> Serialize for Resource<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ResourceOut {
            type_name: P::TYPE_NAME,
            properties: &self.properties,
            attributes: &self.attributes,
        }
        .serialize(serializer)
    }
}

impl<'de, P: ResourceProperties> Deserialize<'de> for Resource<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = ResourceIn::<P>::deserialize(deserializer)?;
        if raw.type_name != P::TYPE_NAME {
            return Err(D::Error::custom(format!(
                "expected resource type {}, got {}",
                P::TYPE_NAME,
                raw.type_name
            )));
        }
        Ok(Resource {
            properties: raw.properties,
            attributes: raw.attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct QueueProperties {
        #[serde(rename = "QueueName")]
        queue_name: Value<String>,
    }

    impl ResourceProperties for QueueProperties {
        const TYPE_NAME: &'static str = "AWS::SQS::Queue";
    }

    fn queue() -> Resource<QueueProperties> {
        Resource::new(QueueProperties {
            queue_name: "jobs".into(),
        })
    }

    #[test]
    fn serializes_type_properties_and_attributes() {
        let resource = queue()
            .depends_on(["Topic"])
            .with_deletion_policy(DeletionPolicy::Retain);
        assert_eq!(
            resource.to_json().unwrap(),
            json!({
                "Type": "AWS::SQS::Queue",
                "Properties": {"QueueName": "jobs"},
                "DependsOn": "Topic",
                "DeletionPolicy": "Retain"
            })
        );
    }

    #[test]
    fn depends_on_many() {
        let resource = queue().depends_on(["A", "B"]);
        assert_eq!(resource.attributes.dependencies(), ["A", "B"]);
        let resource = queue().depends_on(Vec::<String>::new());
        assert!(resource.attributes.depends_on.is_none());
    }

    #[test]
    fn deserialize_checks_type_name() {
        let ok: Resource<QueueProperties> = serde_json::from_value(json!({
            "Type": "AWS::SQS::Queue",
            "Properties": {"QueueName": {"Fn::Sub": "${AWS::StackName}-jobs"}},
            "Condition": "CreateQueue",
            "UpdateReplacePolicy": "Snapshot"
        }))
        .unwrap();
        assert!(ok.properties.queue_name.is_intrinsic());
        assert_eq!(ok.attributes.condition.as_deref(), Some("CreateQueue"));
        assert_eq!(
            ok.attributes.update_replace_policy,
            Some(Value::Literal(DeletionPolicy::Snapshot))
        );

        let wrong: Result<Resource<QueueProperties>, _> = serde_json::from_value(json!({
            "Type": "AWS::SNS::Topic",
            "Properties": {"QueueName": "jobs"}
        }));
        let err = wrong.unwrap_err().to_string();
        assert!(err.contains("expected resource type AWS::SQS::Queue"));
    }

    #[test]
    fn creation_policy_round_trip() {
        let attrs: ResourceAttributes = serde_json::from_value(json!({
            "CreationPolicy": {"ResourceSignal": {"Count": 2, "Timeout": "PT15M"}}
        }))
        .unwrap();
        let signal = attrs.creation_policy.unwrap().resource_signal.unwrap();
        assert_eq!(signal.count, Some(Value::Literal(2)));
        assert_eq!(signal.timeout, Some(Value::Literal("PT15M".to_string())));
    }
}
