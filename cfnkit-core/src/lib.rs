//! cfnkit Core
//!
//! Building blocks for typed CloudFormation resource declarations.
//!
//! ## Module Structure
//!
//! - `intrinsic` - CloudFormation functions carried as data
//! - `value` - Literal-or-intrinsic property values and the shared `Tag`
//! - `resource` - Resource attributes and the typed `Resource<P>` wrapper
//! - `schema` - Resource provider schema documents
//! - `validate` - Constraint checks on raw property JSON
//! - `template` - Template loading (JSON and short-form YAML)
//! - `docs` - Markdown documentation for resource types and properties

pub mod config;
pub mod docs;
pub mod intrinsic;
pub mod resource;
pub mod schema;
pub mod template;
pub mod validate;
pub mod value;

// Re-export main types
pub use config::ValidationConfig;
pub use intrinsic::{Expr, GetAtt, Intrinsic, Sub};
pub use resource::{DeletionPolicy, DependsOn, Resource, ResourceAttributes, ResourceProperties};
pub use schema::{ResourceSchema, SchemaError};
pub use template::{StructuralError, Template, TemplateError, TemplateResource};
pub use validate::{ValidationError, ValidationErrorKind, validate_properties};
pub use value::{Json, List, Map, Tag, Value};
