//! Rust declaration emitter
//!
//! Turns a resource provider schema into one serde struct per reachable
//! object definition plus the root `<Resource>Properties` struct.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result};
use cfnkit_core::docs::constraint_summary;
use cfnkit_core::schema::{PropertyKind, PropertySchema, ResourceSchema, split_type_name};
use heck::{ToPascalCase, ToSnakeCase};

/// Identifiers that need `r#` to be used as field names
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers
const RESERVED: &[&str] = &["crate", "self", "super"];

/// rustfmt's default line width
const MAX_WIDTH: usize = 100;

/// Definition name that maps to `cfnkit_core::value::Tag` when its shape
/// matches
const TAG_DEFINITION: &str = "Tag";

/// Element type inside `Value`, `List` or `Map`
#[derive(Debug, Clone, PartialEq)]
enum Inner {
    Scalar(&'static str),
    Definition(String),
    Json,
}

#[derive(Debug, Clone, PartialEq)]
enum FieldType {
    Value(Inner),
    List(Inner),
    Map(Inner),
    Json,
}

/// Module name for a type: AWS::FSx::FileSystem -> fsx_file_system
pub fn module_name(type_name: &str) -> Result<String> {
    let (service, resource) = split_type_name(type_name)?;
    Ok(format!(
        "{}_{}",
        service.to_lowercase(),
        resource.to_snake_case()
    ))
}

/// Root struct name: AWS::FSx::FileSystem -> FileSystemProperties
pub fn root_struct_name(type_name: &str) -> Result<String> {
    let (_, resource) = split_type_name(type_name)?;
    Ok(format!("{}Properties", resource.to_pascal_case()))
}

/// Rust field name for a wire name
pub fn field_name(wire: &str) -> String {
    let snake = wire.to_snake_case();
    if KEYWORDS.contains(&snake.as_str()) {
        format!("r#{}", snake)
    } else if RESERVED.contains(&snake.as_str()) {
        format!("{}_", snake)
    } else {
        snake
    }
}

fn struct_name(definition: &str) -> String {
    definition.to_pascal_case()
}

/// True when a `Tag` definition can be read as the core `Tag`: closed, with
/// exactly `Key` and `Value`, both required strings
fn is_core_tag(schema: &ResourceSchema, definition: &PropertySchema) -> bool {
    let required_string = |name: &str| {
        let is_string = |prop: &PropertySchema| {
            matches!(schema.property_kind(prop), Ok(PropertyKind::String))
        };
        definition.required.iter().any(|r| r == name)
            && definition.properties.get(name).is_some_and(is_string)
    };
    definition.denies_additional()
        && definition.properties.len() == 2
        && required_string("Key")
        && required_string("Value")
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

struct Generator<'a> {
    schema: &'a ResourceSchema,
    /// Dotted property paths at which each emitted definition appears
    paths: BTreeMap<String, BTreeSet<String>>,
    imports: BTreeSet<&'static str>,
    /// The schema's `Tag` definition is emitted as the core `Tag`
    core_tag: bool,
}

/// Generate the Rust module for a schema
pub fn generate(schema: &ResourceSchema, type_name: &str) -> Result<String> {
    let module = module_name(type_name)?;
    let root_name = root_struct_name(type_name)?;

    let mut generator = Generator {
        schema,
        paths: BTreeMap::new(),
        imports: BTreeSet::new(),
        core_tag: schema
            .definition(TAG_DEFINITION)
            .is_some_and(|tag| is_core_tag(schema, tag)),
    };
    if !generator.core_tag && schema.definition(TAG_DEFINITION).is_some() {
        log::debug!("{}: Tag definition is not a plain key/value pair", type_name);
    }
    generator
        .collect_paths(&schema.properties, "")
        .context("Failed to walk schema definitions")?;
    log::debug!(
        "{}: {} reachable definitions",
        type_name,
        generator.paths.len()
    );

    let mut body = String::new();
    let definitions: Vec<String> = generator
        .paths
        .keys()
        .filter(|name| !(generator.core_tag && name.as_str() == TAG_DEFINITION))
        .cloned()
        .collect();
    for name in &definitions {
        let Some(definition) = schema.definition(name) else {
            continue;
        };
        let paths: Vec<String> = generator.paths[name].iter().cloned().collect();
        let code = generator.emit_struct(
            &struct_name(name),
            Some(name),
            definition,
            &definition.required,
            &paths,
        )?;
        body.push_str(&code);
        body.push('\n');
    }

    let root = schema.root();
    let root_code = generator.emit_struct(
        &root_name,
        None,
        &root,
        &schema.required,
        &[String::new()],
    )?;
    body.push_str(&root_code);
    body.push_str(&format!(
        "\nimpl ResourceProperties for {} {{\n    const TYPE_NAME: &'static str = \"{}\";\n}}\n",
        root_name, type_name
    ));

    let mut code = format!(
        r#"//! {} typed declarations
//!
//! Auto-generated from CloudFormation schema: {}
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::resource::ResourceProperties;
"#,
        module, type_name
    );
    let imports: Vec<&str> = generator.imports.iter().copied().collect();
    match imports.as_slice() {
        [] => {}
        [single] => code.push_str(&format!("use cfnkit_core::value::{};\n", single)),
        many => code.push_str(&format!(
            "use cfnkit_core::value::{{{}}};\n",
            many.join(", ")
        )),
    }
    code.push_str("use serde::{Deserialize, Serialize};\n\n");
    code.push_str(&body);

    Ok(code)
}

impl<'a> Generator<'a> {
    /// Depth-first walk recording where each object definition is used.
    /// A definition's own fields are walked on its first visit only.
    fn collect_paths(
        &mut self,
        properties: &'a BTreeMap<String, PropertySchema>,
        prefix: &str,
    ) -> Result<()> {
        let schema = self.schema;
        for (name, prop) in properties {
            let path = join(prefix, name);
            if schema.is_read_only(&path) {
                continue;
            }
            let Some(definition) = self.referenced_definition(prop)? else {
                continue;
            };
            let paths = self.paths.entry(definition.to_string()).or_default();
            let first_visit = paths.is_empty();
            paths.insert(path.clone());
            if first_visit && let Some(def) = schema.definition(definition) {
                self.collect_paths(&def.properties, &path)?;
            }
        }
        Ok(())
    }

    /// The object definition a property holds, looking through lists and maps
    fn referenced_definition(&self, prop: &'a PropertySchema) -> Result<Option<&'a str>> {
        let schema = self.schema;
        let inner = match schema.property_kind(prop)? {
            PropertyKind::Array(items) | PropertyKind::Map(items) => schema.property_kind(items)?,
            kind => kind,
        };
        Ok(match inner {
            PropertyKind::Object {
                name: Some(name), ..
            } => Some(name),
            _ => None,
        })
    }

    fn inner(&self, prop: &PropertySchema) -> Result<Inner> {
        Ok(match self.schema.property_kind(prop)? {
            PropertyKind::String => Inner::Scalar("String"),
            PropertyKind::Integer => Inner::Scalar("i64"),
            PropertyKind::Number => Inner::Scalar("f64"),
            PropertyKind::Boolean => Inner::Scalar("bool"),
            PropertyKind::Object {
                name: Some(name), ..
            } => Inner::Definition(name.to_string()),
            PropertyKind::Object { name: None, .. }
            | PropertyKind::Array(_)
            | PropertyKind::Map(_)
            | PropertyKind::Json => Inner::Json,
        })
    }

    fn field_type(&self, prop: &PropertySchema) -> Result<FieldType> {
        Ok(match self.schema.property_kind(prop)? {
            PropertyKind::Array(items) => FieldType::List(self.inner(items)?),
            PropertyKind::Map(values) => FieldType::Map(self.inner(values)?),
            PropertyKind::Object { name: None, .. } | PropertyKind::Json => FieldType::Json,
            _ => FieldType::Value(self.inner(prop)?),
        })
    }

    fn render_inner(&mut self, inner: &Inner, owner: Option<&str>, boxed: bool) -> String {
        match inner {
            Inner::Scalar(s) => s.to_string(),
            Inner::Json => {
                self.imports.insert("Json");
                "Json".to_string()
            }
            Inner::Definition(name) => {
                if self.core_tag && name == TAG_DEFINITION {
                    self.imports.insert("Tag");
                }
                let rust_name = struct_name(name);
                if boxed && owner == Some(name.as_str()) {
                    format!("Box<{}>", rust_name)
                } else {
                    rust_name
                }
            }
        }
    }

    /// `owner` is the definition being emitted; a direct reference back to
    /// it is boxed
    fn render(&mut self, field_type: &FieldType, owner: Option<&str>) -> String {
        match field_type {
            FieldType::Value(inner) => {
                self.imports.insert("Value");
                format!("Value<{}>", self.render_inner(inner, owner, true))
            }
            FieldType::List(inner) => {
                self.imports.insert("List");
                format!("List<{}>", self.render_inner(inner, owner, false))
            }
            FieldType::Map(inner) => {
                self.imports.insert("Map");
                format!("Map<{}>", self.render_inner(inner, owner, false))
            }
            FieldType::Json => {
                self.imports.insert("Json");
                "Json".to_string()
            }
        }
    }

    fn emit_struct(
        &mut self,
        rust_name: &str,
        owner: Option<&str>,
        object: &PropertySchema,
        required: &[String],
        paths: &[String],
    ) -> Result<String> {
        let schema = self.schema;
        let mut fields = Vec::new();
        let mut has_required = false;
        for (wire, prop) in &object.properties {
            let field_paths: Vec<String> = paths.iter().map(|p| join(p, wire)).collect();
            if field_paths.iter().any(|p| schema.is_read_only(p)) {
                continue;
            }
            let is_required = required.iter().any(|r| r == wire);
            has_required |= is_required;
            let create_only = field_paths.iter().any(|p| schema.is_create_only(p));

            let (_, resolved) = schema.resolve(prop)?;
            let mut extra = constraint_summary(resolved);
            if create_only {
                extra.push("Update requires: Replacement".to_string());
            }
            let description = prop
                .description
                .as_deref()
                .or(resolved.description.as_deref());

            let field_type = self.field_type(prop)?;
            let ty = self.render(&field_type, owner);

            let mut code = doc_comment("    ", description, &extra);
            code.push_str(&serde_attribute(wire, !is_required));
            let ty = if is_required {
                ty
            } else {
                format!("Option<{}>", ty)
            };
            code.push_str(&format!("    pub {}: {},\n", field_name(wire), ty));
            fields.push(code);
        }

        let mut code = doc_comment("", object.description.as_deref(), &[]);
        if has_required {
            code.push_str("#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n");
        } else {
            code.push_str("#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]\n");
        }
        if object.denies_additional() {
            code.push_str("#[serde(deny_unknown_fields)]\n");
        }
        code.push_str(&format!("pub struct {} {{\n", rust_name));
        code.push_str(&fields.join("\n"));
        code.push_str("}\n");
        Ok(code)
    }
}

/// `///` lines for a description followed by extra paragraphs
fn doc_comment(indent: &str, text: Option<&str>, extra: &[String]) -> String {
    let mut lines: Vec<&str> = text
        .map(|t| t.lines().map(str::trim).collect())
        .unwrap_or_default();
    while lines.first().is_some_and(|l| l.is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    if !extra.is_empty() && !lines.is_empty() {
        lines.push("");
    }
    lines.extend(extra.iter().map(String::as_str));

    let mut code = String::new();
    for line in lines {
        if line.is_empty() {
            code.push_str(&format!("{}///\n", indent));
        } else {
            code.push_str(&format!("{}/// {}\n", indent, line));
        }
    }
    code
}

fn serde_attribute(wire: &str, optional: bool) -> String {
    if !optional {
        return format!("    #[serde(rename = \"{}\")]\n", wire);
    }
    let line = format!(
        "    #[serde(rename = \"{}\", default, skip_serializing_if = \"Option::is_none\")]",
        wire
    );
    if line.len() <= MAX_WIDTH {
        format!("{}\n", line)
    } else {
        format!(
            "    #[serde(\n        rename = \"{}\",\n        default,\n        skip_serializing_if = \"Option::is_none\"\n    )]\n",
            wire
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r##"{
        "typeName": "AWS::Test::VirtualRouter",
        "description": "Creates a virtual router.",
        "definitions": {
            "RouterSpec": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "Listeners": {"type": "array", "items": {"$ref": "#/definitions/Listener"}},
                    "Fallback": {"$ref": "#/definitions/RouterSpec"}
                },
                "required": ["Listeners"]
            },
            "Listener": {
                "type": "object",
                "description": "A listener.",
                "properties": {
                    "Port": {"type": "integer", "minimum": 1, "maximum": 65535},
                    "Type": {"type": "string", "enum": ["http", "tcp"]},
                    "Match": {"type": "boolean"}
                }
            },
            "Unused": {"type": "object", "properties": {"A": {"type": "string"}}},
            "Status": {"type": "object", "properties": {"Code": {"type": "string"}}},
            "Tag": {
                "type": "object",
                "additionalProperties": false,
                "properties": {"Key": {"type": "string"}, "Value": {"type": "string"}},
                "required": ["Key", "Value"]
            }
        },
        "properties": {
            "MeshName": {"type": "string", "description": "The mesh.", "minLength": 1},
            "Spec": {"$ref": "#/definitions/RouterSpec"},
            "Tags": {"type": "array", "items": {"$ref": "#/definitions/Tag"}},
            "Weights": {"type": "object", "patternProperties": {".+": {"type": "number"}}},
            "Policy": {"type": "object"},
            "AnExceptionallyLongPropertyNameThatForcesTheSerdeAttributeOntoLines": {"type": "string"},
            "Status": {"$ref": "#/definitions/Status"},
            "Arn": {"type": "string"}
        },
        "required": ["MeshName", "Spec"],
        "readOnlyProperties": ["/properties/Arn", "/properties/Status"],
        "createOnlyProperties": ["/properties/MeshName"],
        "additionalProperties": false
    }"##;

    fn generated() -> String {
        let schema = ResourceSchema::from_json(SCHEMA).unwrap();
        generate(&schema, &schema.type_name).unwrap()
    }

    #[test]
    fn names() {
        assert_eq!(
            module_name("AWS::OpenSearchService::Domain").unwrap(),
            "opensearchservice_domain"
        );
        assert_eq!(
            root_struct_name("AWS::DLM::LifecyclePolicy").unwrap(),
            "LifecyclePolicyProperties"
        );
        assert_eq!(field_name("Type"), "r#type");
        assert_eq!(field_name("Self"), "self_");
        assert_eq!(field_name("EBSOptions"), "ebs_options");
        assert!(module_name("FileSystem").is_err());
    }

    #[test]
    fn header_and_imports() {
        let code = generated();
        assert!(code.starts_with("//! test_virtual_router typed declarations\n"));
        assert!(code.contains("//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen\n"));
        assert!(code.contains("use cfnkit_core::value::{Json, List, Map, Tag, Value};\n"));
    }

    #[test]
    fn only_reachable_definitions_are_emitted() {
        let code = generated();
        assert!(code.contains("pub struct RouterSpec {"));
        assert!(code.contains("pub struct Listener {"));
        assert!(!code.contains("pub struct Unused"));
        // Only reachable through a read-only property
        assert!(!code.contains("pub struct Status"));
        // Shared core Tag
        assert!(!code.contains("pub struct Tag"));
        assert!(code.contains("pub tags: Option<List<Tag>>,"));
    }

    #[test]
    fn loose_tag_definition_gets_its_own_struct() {
        let schema = ResourceSchema::from_json(
            r##"{
            "typeName": "AWS::Test::Widget",
            "definitions": {
                "Tag": {
                    "type": "object",
                    "additionalProperties": false,
                    "properties": {
                        "Key": {"type": "string"},
                        "Value": {"type": "string"},
                        "Propagate": {"type": "boolean"}
                    },
                    "required": ["Key"]
                }
            },
            "properties": {
                "Tags": {"type": "array", "items": {"$ref": "#/definitions/Tag"}}
            }
        }"##,
        )
        .unwrap();
        let code = generate(&schema, &schema.type_name).unwrap();
        assert!(code.contains("use cfnkit_core::value::{List, Value};\n"));
        assert!(code.contains("#[serde(deny_unknown_fields)]\npub struct Tag {"));
        assert!(code.contains("    pub key: Value<String>,\n"));
        assert!(code.contains("    pub value: Option<Value<String>>,\n"));
        assert!(code.contains("    pub propagate: Option<Value<bool>>,\n"));
        assert!(code.contains("    pub tags: Option<List<Tag>>,\n"));

        let tag = |definition: &str| {
            let json = format!(
                r#"{{"typeName": "AWS::Test::Widget", "definitions": {{"Tag": {}}}}}"#,
                definition
            );
            let schema = ResourceSchema::from_json(&json).unwrap();
            is_core_tag(&schema, schema.definition(TAG_DEFINITION).unwrap())
        };
        let key_value = r#""Key": {"type": "string"}, "Value": {"type": "string"}"#;
        assert!(tag(&format!(
            r#"{{"type": "object", "additionalProperties": false,
                "properties": {{{}}}, "required": ["Value", "Key"]}}"#,
            key_value
        )));
        // Open to extra fields
        assert!(!tag(&format!(
            r#"{{"type": "object", "properties": {{{}}}, "required": ["Key", "Value"]}}"#,
            key_value
        )));
        // Non-string value
        assert!(!tag(
            r#"{"type": "object", "additionalProperties": false,
                "properties": {"Key": {"type": "string"}, "Value": {"type": "integer"}},
                "required": ["Key", "Value"]}"#
        ));
    }

    #[test]
    fn field_types() {
        let code = generated();
        assert!(code.contains("    pub listeners: List<Listener>,\n"));
        assert!(code.contains("    pub fallback: Option<Value<Box<RouterSpec>>>,\n"));
        assert!(code.contains("    pub port: Option<Value<i64>>,\n"));
        assert!(code.contains("    pub r#type: Option<Value<String>>,\n"));
        assert!(code.contains("    pub r#match: Option<Value<bool>>,\n"));
        assert!(code.contains("    pub weights: Option<Map<f64>>,\n"));
        assert!(code.contains("    pub policy: Option<Json>,\n"));
        assert!(!code.contains("pub arn"));
    }

    #[test]
    fn docs_carry_constraints_and_replacement() {
        let code = generated();
        assert!(code.contains(
            "    /// The mesh.\n    ///\n    /// Length: at least 1\n    /// Update requires: Replacement\n    #[serde(rename = \"MeshName\")]\n    pub mesh_name: Value<String>,\n"
        ));
        assert!(code.contains("    /// Allowed values: http | tcp\n"));
        assert!(code.contains("/// A listener.\n#[derive(Debug, Clone, Default, PartialEq"));
    }

    #[test]
    fn struct_attributes() {
        let code = generated();
        assert!(code.contains(
            "#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]\n#[serde(deny_unknown_fields)]\npub struct RouterSpec {"
        ));
        assert!(code.contains("pub struct VirtualRouterProperties {"));
        assert!(code.contains(
            "impl ResourceProperties for VirtualRouterProperties {\n    const TYPE_NAME: &'static str = \"AWS::Test::VirtualRouter\";\n}\n"
        ));
    }

    #[test]
    fn long_serde_attributes_wrap() {
        let code = generated();
        assert!(code.contains(
            "    #[serde(\n        rename = \"AnExceptionallyLongPropertyNameThatForcesTheSerdeAttributeOntoLines\",\n        default,\n"
        ));
        assert!(code.contains(
            "    #[serde(rename = \"Fallback\", default, skip_serializing_if = \"Option::is_none\")]\n"
        ));
    }

    #[test]
    fn doc_comment_trims_and_separates() {
        assert_eq!(
            doc_comment("  ", Some("\n  First\n\n  + item\n"), &["Items: at most 2".to_string()]),
            "  /// First\n  ///\n  /// + item\n  ///\n  /// Items: at most 2\n"
        );
        assert_eq!(doc_comment("", None, &[]), "");
    }
}
