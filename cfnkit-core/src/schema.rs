//! Schema - AWS resource provider schema documents
//!
//! Each CloudFormation resource type publishes a JSON Schema document
//! describing its properties. This module deserializes that document and
//! answers the questions the generator, validator and docs need: what kind of
//! value a property holds, which properties are required, read-only or
//! create-only, and where `$ref` pointers lead.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to parse resource schema: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unresolved reference '{0}'")]
    UnresolvedReference(String),

    #[error("Invalid type name format: {0}")]
    InvalidTypeName(String),

    #[error("Unknown property '{path}' in {type_name}")]
    UnknownProperty { type_name: String, path: String },
}

/// Type can be a string or an array of strings in JSON Schema
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(String),
    Multiple(Vec<String>),
}

impl SchemaType {
    /// The single JSON type, or None when several are allowed
    pub fn as_single(&self) -> Option<&str> {
        match self {
            SchemaType::Single(s) => Some(s),
            SchemaType::Multiple(v) if v.len() == 1 => v.first().map(String::as_str),
            SchemaType::Multiple(_) => None,
        }
    }
}

/// `additionalProperties`: either a flag or a schema for extra values
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<PropertySchema>),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tagging {
    #[serde(default)]
    pub taggable: bool,
}

/// A property or definition schema
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub schema_type: Option<SchemaType>,
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    pub description: Option<String>,
    pub items: Option<Box<PropertySchema>>,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertySchema>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<serde_json::Value>>,
    pub pattern: Option<String>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
    #[serde(default)]
    pub unique_items: bool,
    pub insertion_order: Option<bool>,
    pub additional_properties: Option<AdditionalProperties>,
    #[serde(default)]
    pub pattern_properties: BTreeMap<String, PropertySchema>,
    #[serde(default)]
    pub one_of: Vec<PropertySchema>,
    #[serde(default)]
    pub any_of: Vec<PropertySchema>,
}

/// Schema used for array items that declare nothing
static ANY_SCHEMA: PropertySchema = PropertySchema {
    schema_type: None,
    reference: None,
    description: None,
    items: None,
    properties: BTreeMap::new(),
    required: Vec::new(),
    enum_values: None,
    pattern: None,
    min_length: None,
    max_length: None,
    minimum: None,
    maximum: None,
    min_items: None,
    max_items: None,
    unique_items: false,
    insertion_order: None,
    additional_properties: None,
    pattern_properties: BTreeMap::new(),
    one_of: Vec::new(),
    any_of: Vec::new(),
};

impl PropertySchema {
    /// Returns true if extra keys are forbidden on this object
    pub fn denies_additional(&self) -> bool {
        matches!(
            self.additional_properties,
            Some(AdditionalProperties::Allowed(false))
        )
    }

    /// Allowed enum values rendered as strings
    pub fn enum_strings(&self) -> Option<Vec<String>> {
        self.enum_values.as_ref().map(|values| {
            values
                .iter()
                .map(|v| match v {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect()
        })
    }

    /// Schema for the values of a map-shaped object
    fn map_values(&self) -> Option<&PropertySchema> {
        if let Some(first) = self.pattern_properties.values().next() {
            return Some(first);
        }
        match &self.additional_properties {
            Some(AdditionalProperties::Schema(schema)) => Some(schema),
            _ => None,
        }
    }
}

/// What a property holds once references are resolved
#[derive(Debug, Clone, Copy)]
pub enum PropertyKind<'a> {
    String,
    Integer,
    Number,
    Boolean,
    /// Array with its (unresolved) item schema
    Array(&'a PropertySchema),
    /// Object with declared properties; `name` is the definition name when
    /// reached through `$ref`
    Object {
        name: Option<&'a str>,
        schema: &'a PropertySchema,
    },
    /// String-keyed map with its (unresolved) value schema
    Map(&'a PropertySchema),
    /// Anything (free-form JSON, or several allowed types)
    Json,
}

/// A resource provider schema document
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSchema {
    pub type_name: String,
    pub description: Option<String>,
    pub source_url: Option<String>,
    pub documentation_url: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertySchema>,
    #[serde(default)]
    pub definitions: BTreeMap<String, PropertySchema>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub read_only_properties: Vec<String>,
    #[serde(default)]
    pub create_only_properties: Vec<String>,
    #[serde(default)]
    pub write_only_properties: Vec<String>,
    #[serde(default)]
    pub primary_identifier: Vec<String>,
    pub additional_properties: Option<bool>,
    pub tagging: Option<Tagging>,
    #[serde(default)]
    pub one_of: Vec<PropertySchema>,
    #[serde(default)]
    pub any_of: Vec<PropertySchema>,
}

/// Convert a dotted property path ("Spec.Listeners") to a JSON pointer
/// ("/properties/Spec/Listeners")
fn to_pointer(path: &str) -> String {
    let mut pointer = String::from("/properties");
    for segment in path.split('.') {
        pointer.push('/');
        pointer.push_str(segment);
    }
    pointer
}

impl ResourceSchema {
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema: ResourceSchema = serde_json::from_str(json)?;
        log::debug!(
            "Loaded schema {} ({} properties, {} definitions)",
            schema.type_name,
            schema.properties.len(),
            schema.definitions.len()
        );
        Ok(schema)
    }

    /// The root object as a property schema, so the root and nested
    /// objects can be walked the same way
    pub fn root(&self) -> PropertySchema {
        PropertySchema {
            description: self.description.clone(),
            properties: self.properties.clone(),
            required: self.required.clone(),
            additional_properties: self.additional_properties.map(AdditionalProperties::Allowed),
            one_of: self.one_of.clone(),
            any_of: self.any_of.clone(),
            ..Default::default()
        }
    }

    pub fn definition(&self, name: &str) -> Option<&PropertySchema> {
        self.definitions.get(name)
    }

    /// Follow `$ref` pointers to the schema that actually describes the value.
    /// Returns the definition name of the last hop, if any.
    pub fn resolve<'a>(
        &'a self,
        prop: &'a PropertySchema,
    ) -> Result<(Option<&'a str>, &'a PropertySchema), SchemaError> {
        let mut current = prop;
        let mut name = None;
        // Bounded to break reference cycles between aliases
        for _ in 0..16 {
            let Some(reference) = &current.reference else {
                return Ok((name, current));
            };
            let def_name = reference
                .strip_prefix("#/definitions/")
                .ok_or_else(|| SchemaError::UnresolvedReference(reference.clone()))?;
            let (key, def) = self
                .definitions
                .get_key_value(def_name)
                .ok_or_else(|| SchemaError::UnresolvedReference(reference.clone()))?;
            name = Some(key.as_str());
            current = def;
        }
        Err(SchemaError::UnresolvedReference(
            prop.reference.clone().unwrap_or_default(),
        ))
    }

    /// Classify a property after resolving references
    pub fn property_kind<'a>(
        &'a self,
        prop: &'a PropertySchema,
    ) -> Result<PropertyKind<'a>, SchemaError> {
        let (name, schema) = self.resolve(prop)?;

        let kind = match schema.schema_type.as_ref() {
            Some(t) => match t.as_single() {
                Some("string") => PropertyKind::String,
                Some("integer") => PropertyKind::Integer,
                Some("number") => PropertyKind::Number,
                Some("boolean") => PropertyKind::Boolean,
                Some("array") => {
                    PropertyKind::Array(schema.items.as_deref().unwrap_or(&ANY_SCHEMA))
                }
                Some("object") => object_kind(name, schema),
                _ => PropertyKind::Json,
            },
            None if !schema.properties.is_empty() => PropertyKind::Object { name, schema },
            None if schema.enum_values.is_some() || schema.pattern.is_some() => {
                PropertyKind::String
            }
            None => PropertyKind::Json,
        };
        Ok(kind)
    }

    /// Returns true if `path` (dotted) is listed in `readOnlyProperties`
    pub fn is_read_only(&self, path: &str) -> bool {
        self.read_only_properties.contains(&to_pointer(path))
    }

    pub fn is_create_only(&self, path: &str) -> bool {
        self.create_only_properties.contains(&to_pointer(path))
    }

    pub fn is_write_only(&self, path: &str) -> bool {
        self.write_only_properties.contains(&to_pointer(path))
    }

    /// Required on input; read-only properties are never required
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name) && !self.is_read_only(name)
    }

    pub fn is_taggable(&self) -> bool {
        self.tagging.as_ref().is_some_and(|t| t.taggable)
    }

    /// Walk a dotted path (`Spec.Listeners.PortMapping`) through definitions,
    /// array items and map values down to the leaf property schema.
    /// Returns the leaf schema and whether it is required by its parent.
    pub fn lookup(&self, path: &str) -> Result<(&PropertySchema, bool), SchemaError> {
        let unknown = || SchemaError::UnknownProperty {
            type_name: self.type_name.clone(),
            path: path.to_string(),
        };

        let mut segments = path.split('.').filter(|s| !s.is_empty());
        let first = segments.next().ok_or_else(unknown)?;
        let mut current = self.properties.get(first).ok_or_else(unknown)?;
        let mut required = self.is_required(first);

        for segment in segments {
            let container = self.container_of(current)?.ok_or_else(unknown)?;
            match container {
                Container::Object(schema) => {
                    current = schema.properties.get(segment).ok_or_else(unknown)?;
                    required = schema.required.iter().any(|r| r == segment);
                }
                Container::Map(values) => {
                    current = values;
                    required = false;
                }
            }
        }
        Ok((current, required))
    }

    /// The object or map a path segment descends into, looking through arrays
    fn container_of<'a>(
        &'a self,
        prop: &'a PropertySchema,
    ) -> Result<Option<Container<'a>>, SchemaError> {
        let mut kind = self.property_kind(prop)?;
        while let PropertyKind::Array(items) = kind {
            kind = self.property_kind(items)?;
        }
        Ok(match kind {
            PropertyKind::Object { schema, .. } => Some(Container::Object(schema)),
            PropertyKind::Map(values) => Some(Container::Map(values)),
            _ => None,
        })
    }
}

enum Container<'a> {
    Object(&'a PropertySchema),
    Map(&'a PropertySchema),
}

fn object_kind<'a>(name: Option<&'a str>, schema: &'a PropertySchema) -> PropertyKind<'a> {
    if !schema.properties.is_empty() {
        PropertyKind::Object { name, schema }
    } else if let Some(values) = schema.map_values() {
        PropertyKind::Map(values)
    } else {
        PropertyKind::Json
    }
}

/// Split "AWS::FSx::FileSystem" into ("FSx", "FileSystem"). The vendor
/// segment is usually `AWS` but other namespaces (`Alexa::ASK::Skill`) exist,
/// so any alphanumeric vendor is accepted.
pub fn split_type_name(type_name: &str) -> Result<(&str, &str), SchemaError> {
    let parts: Vec<&str> = type_name.split("::").collect();
    match parts.as_slice() {
        [vendor, service, resource]
            if [vendor, service, resource].iter().all(|segment| is_segment(segment)) =>
        {
            Ok((*service, *resource))
        }
        _ => Err(SchemaError::InvalidTypeName(type_name.to_string())),
    }
}

fn is_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r##"{
        "typeName": "AWS::Test::Widget",
        "description": "A widget",
        "definitions": {
            "Gear": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "Teeth": {"type": "integer", "minimum": 3},
                    "Mode": {"type": "string", "enum": ["FAST", "SLOW"]}
                },
                "required": ["Teeth"]
            },
            "Alias": {"$ref": "#/definitions/Gear"},
            "Labels": {
                "type": "object",
                "patternProperties": {"^.{1,64}$": {"type": "string"}}
            }
        },
        "properties": {
            "Name": {"type": "string"},
            "Gears": {"type": "array", "items": {"$ref": "#/definitions/Gear"}},
            "Main": {"$ref": "#/definitions/Alias"},
            "Labels": {"$ref": "#/definitions/Labels"},
            "Policy": {"type": ["object", "string"]},
            "Arn": {"type": "string"}
        },
        "required": ["Name", "Arn"],
        "readOnlyProperties": ["/properties/Arn"],
        "createOnlyProperties": ["/properties/Name"],
        "primaryIdentifier": ["/properties/Arn"],
        "additionalProperties": false,
        "tagging": {"taggable": false}
    }"##;

    fn schema() -> ResourceSchema {
        ResourceSchema::from_json(SCHEMA).unwrap()
    }

    #[test]
    fn required_excludes_read_only() {
        let s = schema();
        assert!(s.is_required("Name"));
        assert!(!s.is_required("Arn"));
        assert!(s.is_read_only("Arn"));
        assert!(s.is_create_only("Name"));
        assert!(!s.is_taggable());
    }

    #[test]
    fn resolves_chained_references() {
        let s = schema();
        let (name, def) = s.resolve(&s.properties["Main"]).unwrap();
        assert_eq!(name, Some("Gear"));
        assert!(def.properties.contains_key("Teeth"));
    }

    #[test]
    fn unknown_reference_is_an_error() {
        let s = schema();
        let prop = PropertySchema {
            reference: Some("#/definitions/Missing".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            s.resolve(&prop),
            Err(SchemaError::UnresolvedReference(_))
        ));
    }

    #[test]
    fn classifies_property_kinds() {
        let s = schema();
        assert!(matches!(
            s.property_kind(&s.properties["Name"]).unwrap(),
            PropertyKind::String
        ));
        assert!(matches!(
            s.property_kind(&s.properties["Gears"]).unwrap(),
            PropertyKind::Array(_)
        ));
        assert!(matches!(
            s.property_kind(&s.properties["Labels"]).unwrap(),
            PropertyKind::Map(_)
        ));
        assert!(matches!(
            s.property_kind(&s.properties["Policy"]).unwrap(),
            PropertyKind::Json
        ));
        match s.property_kind(&s.properties["Main"]).unwrap() {
            PropertyKind::Object { name, .. } => assert_eq!(name, Some("Gear")),
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn lookup_walks_through_arrays() {
        let s = schema();
        let (leaf, required) = s.lookup("Gears.Teeth").unwrap();
        assert_eq!(leaf.minimum, Some(3.0));
        assert!(required);

        let (leaf, required) = s.lookup("Main.Mode").unwrap();
        assert_eq!(leaf.enum_strings().unwrap(), vec!["FAST", "SLOW"]);
        assert!(!required);

        assert!(matches!(
            s.lookup("Gears.Missing"),
            Err(SchemaError::UnknownProperty { .. })
        ));
        assert!(s.lookup("Name.Inner").is_err());
    }

    #[test]
    fn root_carries_additional_properties_flag() {
        let root = schema().root();
        assert!(root.denies_additional());
        assert_eq!(root.required, vec!["Name", "Arn"]);
    }

    #[test]
    fn split_type_names() {
        assert_eq!(
            split_type_name("AWS::FSx::FileSystem").unwrap(),
            ("FSx", "FileSystem")
        );
        assert!(split_type_name("AWS::FSx").is_err());
        assert!(split_type_name("AWS::::X").is_err());
        assert!(split_type_name("::FSx::FileSystem").is_err());
        assert!(split_type_name("AWS::FSx::File System").is_err());
        assert_eq!(
            split_type_name("Alexa::ASK::Skill").unwrap(),
            ("ASK", "Skill")
        );
    }
}
