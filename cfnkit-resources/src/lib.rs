//! cfnkit Resources
//!
//! Typed declarations for CloudFormation resource types, generated from the
//! resource provider schemas bundled under `schemas/`.
//!
//! ## Module Structure
//!
//! - `generated` - One module per resource type plus the schema registry

pub mod generated;

// Re-export main types
pub use generated::appmesh_virtual_node::VirtualNodeProperties;
pub use generated::dlm_lifecycle_policy::LifecyclePolicyProperties;
pub use generated::fsx_file_system::FileSystemProperties;
pub use generated::logs_transformer::TransformerProperties;
pub use generated::opensearchservice_domain::DomainProperties;
pub use generated::{ResourceTypeConfig, check_binding, configs, find, schema};
