//! cfnkit Codegen
//!
//! Emits the typed declarations in cfnkit-resources from CloudFormation
//! resource provider schemas. The `cfnkit-codegen` binary wraps this with
//! schema input (file, stdin, registry) and output handling.

pub mod generate;

pub use generate::{generate, module_name, root_struct_name};
