//! Auto-generated CloudFormation resource declarations
//!
//! DO NOT EDIT the resource modules MANUALLY - regenerate with:
//!   cfnkit-codegen --file cfnkit-resources/schemas/<schema>.json \
//!     --output cfnkit-resources/src/generated/<module>.rs

use std::collections::BTreeMap;
use std::sync::OnceLock;

use cfnkit_core::resource::ResourceProperties;
use cfnkit_core::schema::ResourceSchema;
use cfnkit_core::template::{TemplateError, TemplateResource};

pub mod appmesh_virtual_node;
pub mod dlm_lifecycle_policy;
pub mod fsx_file_system;
pub mod logs_transformer;
pub mod opensearchservice_domain;

/// A supported resource type and the schema document it was generated from
#[derive(Debug, Clone, Copy)]
pub struct ResourceTypeConfig {
    /// CloudFormation type name (e.g., "AWS::FSx::FileSystem")
    pub type_name: &'static str,
    /// Generated module holding the declarations
    pub module_name: &'static str,
    /// The bundled resource provider schema
    pub schema_json: &'static str,
}

impl ResourceTypeConfig {
    /// The parsed schema for this type
    pub fn schema(&self) -> Option<&'static ResourceSchema> {
        schema(self.type_name)
    }
}

const CONFIGS: &[ResourceTypeConfig] = &[
    ResourceTypeConfig {
        type_name: "AWS::AppMesh::VirtualNode",
        module_name: "appmesh_virtual_node",
        schema_json: include_str!("../../schemas/aws-appmesh-virtualnode.json"),
    },
    ResourceTypeConfig {
        type_name: "AWS::DLM::LifecyclePolicy",
        module_name: "dlm_lifecycle_policy",
        schema_json: include_str!("../../schemas/aws-dlm-lifecyclepolicy.json"),
    },
    ResourceTypeConfig {
        type_name: "AWS::FSx::FileSystem",
        module_name: "fsx_file_system",
        schema_json: include_str!("../../schemas/aws-fsx-filesystem.json"),
    },
    ResourceTypeConfig {
        type_name: "AWS::Logs::Transformer",
        module_name: "logs_transformer",
        schema_json: include_str!("../../schemas/aws-logs-transformer.json"),
    },
    ResourceTypeConfig {
        type_name: "AWS::OpenSearchService::Domain",
        module_name: "opensearchservice_domain",
        schema_json: include_str!("../../schemas/aws-opensearchservice-domain.json"),
    },
];

/// Returns all supported resource types, sorted by type name
pub fn configs() -> &'static [ResourceTypeConfig] {
    CONFIGS
}

pub fn find(type_name: &str) -> Option<&'static ResourceTypeConfig> {
    CONFIGS.iter().find(|c| c.type_name == type_name)
}

/// Parsed schema for a supported type. Every bundled schema is parsed on
/// first use and kept for the life of the process.
pub fn schema(type_name: &str) -> Option<&'static ResourceSchema> {
    static SCHEMAS: OnceLock<BTreeMap<&'static str, ResourceSchema>> = OnceLock::new();
    SCHEMAS
        .get_or_init(|| {
            CONFIGS
                .iter()
                .filter_map(|config| match ResourceSchema::from_json(config.schema_json) {
                    Ok(schema) => Some((config.type_name, schema)),
                    Err(e) => {
                        log::error!("Bundled schema for {} is invalid: {}", config.type_name, e);
                        None
                    }
                })
                .collect()
        })
        .get(type_name)
}

fn bind<P: ResourceProperties>(resource: &TemplateResource) -> Option<Result<(), TemplateError>> {
    (resource.resource_type == P::TYPE_NAME).then(|| resource.typed::<P>().map(|_| ()))
}

/// Deserialize a template entry into the typed declaration for its type.
/// Returns None when the type is not supported.
pub fn check_binding(resource: &TemplateResource) -> Option<Result<(), TemplateError>> {
    bind::<appmesh_virtual_node::VirtualNodeProperties>(resource)
        .or_else(|| bind::<dlm_lifecycle_policy::LifecyclePolicyProperties>(resource))
        .or_else(|| bind::<fsx_file_system::FileSystemProperties>(resource))
        .or_else(|| bind::<logs_transformer::TransformerProperties>(resource))
        .or_else(|| bind::<opensearchservice_domain::DomainProperties>(resource))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bundled_schema_parses() {
        for config in configs() {
            let schema = config.schema().unwrap();
            assert_eq!(schema.type_name, config.type_name);
        }
    }

    #[test]
    fn configs_are_sorted_and_match_generated_types() {
        let names: Vec<&str> = configs().iter().map(|c| c.type_name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);

        assert_eq!(
            names,
            vec![
                appmesh_virtual_node::VirtualNodeProperties::TYPE_NAME,
                dlm_lifecycle_policy::LifecyclePolicyProperties::TYPE_NAME,
                fsx_file_system::FileSystemProperties::TYPE_NAME,
                logs_transformer::TransformerProperties::TYPE_NAME,
                opensearchservice_domain::DomainProperties::TYPE_NAME,
            ]
        );
    }

    #[test]
    fn find_by_type_name() {
        assert_eq!(
            find("AWS::FSx::FileSystem").unwrap().module_name,
            "fsx_file_system"
        );
        assert!(find("AWS::S3::Bucket").is_none());
        assert!(schema("AWS::S3::Bucket").is_none());
    }

    #[test]
    fn binding_dispatches_on_type() {
        let resource: TemplateResource = serde_json::from_value(serde_json::json!({
            "Type": "AWS::Logs::Transformer",
            "Properties": {
                "LogGroupIdentifier": "app-logs",
                "TransformerConfig": [{"ParseJSON": {}}]
            }
        }))
        .unwrap();
        assert!(matches!(check_binding(&resource), Some(Ok(()))));

        let resource: TemplateResource = serde_json::from_value(serde_json::json!({
            "Type": "AWS::Logs::Transformer",
            "Properties": {"LogGroupIdentifier": "app-logs"}
        }))
        .unwrap();
        assert!(matches!(
            check_binding(&resource),
            Some(Err(TemplateError::InvalidProperties { .. }))
        ));

        let resource: TemplateResource =
            serde_json::from_value(serde_json::json!({"Type": "AWS::S3::Bucket"})).unwrap();
        assert!(check_binding(&resource).is_none());
    }
}
