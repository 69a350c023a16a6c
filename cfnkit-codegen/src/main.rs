//! CloudFormation Schema to cfnkit Declaration Code Generator
//!
//! This tool generates the typed declarations in cfnkit-resources from AWS
//! CloudFormation resource provider schemas.
//!
//! Usage:
//!   # Generate from a bundled schema
//!   cfnkit-codegen --file cfnkit-resources/schemas/aws-fsx-filesystem.json \
//!     --output cfnkit-resources/src/generated/fsx_file_system.rs
//!
//!   # Generate from stdin (pipe from aws cli)
//!   aws cloudformation describe-type --type RESOURCE \
//!     --type-name AWS::FSx::FileSystem --query 'Schema' --output text | \
//!     cfnkit-codegen
//!
//!   # Fetch from the CloudFormation registry and keep a copy of the schema
//!   cfnkit-codegen --fetch --type-name AWS::FSx::FileSystem --region us-east-1 \
//!     --save-schema cfnkit-resources/schemas/aws-fsx-filesystem.json

use std::io::{self, Read};

use anyhow::{Context, Result, bail};
use aws_config::Region;
use aws_sdk_cloudformation::Client as CloudFormationClient;
use aws_sdk_cloudformation::types::RegistryType;
use cfnkit_codegen::generate;
use cfnkit_core::schema::ResourceSchema;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "cfnkit-codegen")]
#[command(about = "Generate cfnkit declarations from CloudFormation schemas")]
struct Args {
    /// CloudFormation type name (e.g., AWS::FSx::FileSystem); defaults to the
    /// schema's typeName
    #[arg(long)]
    type_name: Option<String>,

    /// Input file (reads from stdin if neither this nor --fetch is given)
    #[arg(long, conflicts_with = "fetch")]
    file: Option<String>,

    /// Read the schema from the CloudFormation registry (requires --type-name)
    #[arg(long, requires = "type_name")]
    fetch: bool,

    /// Region for --fetch (falls back to the default AWS configuration)
    #[arg(long, requires = "fetch")]
    region: Option<String>,

    /// Also write the schema document to this path
    #[arg(long)]
    save_schema: Option<String>,

    /// Output file (writes to stdout if not specified)
    #[arg(long, short)]
    output: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Read schema JSON
    let schema_json = if args.fetch {
        let Some(type_name) = &args.type_name else {
            bail!("--fetch requires --type-name");
        };
        fetch_schema(type_name, args.region.as_deref()).await?
    } else if let Some(file_path) = &args.file {
        std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    if let Some(path) = &args.save_schema {
        let document: serde_json::Value =
            serde_json::from_str(&schema_json).context("Schema is not valid JSON")?;
        let pretty = serde_json::to_string_pretty(&document)?;
        std::fs::write(path, pretty + "\n")
            .with_context(|| format!("Failed to write to: {}", path))?;
        eprintln!("Saved schema: {}", path);
    }

    // Parse schema
    let schema =
        ResourceSchema::from_json(&schema_json).context("Failed to parse CloudFormation schema")?;
    let type_name = args
        .type_name
        .clone()
        .unwrap_or_else(|| schema.type_name.clone());
    if type_name != schema.type_name {
        log::warn!(
            "Generating {} from a schema for {}",
            type_name,
            schema.type_name
        );
    }

    // Generate code
    let code = generate(&schema, &type_name)?;

    // Output
    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &code)
            .with_context(|| format!("Failed to write to: {}", output_path))?;
        eprintln!("Generated: {}", output_path);
    } else {
        print!("{}", code);
    }

    Ok(())
}

/// Read a resource type's schema with CloudFormation DescribeType
async fn fetch_schema(type_name: &str, region: Option<&str>) -> Result<String> {
    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = region {
        loader = loader.region(Region::new(region.to_string()));
    }
    let config = loader.load().await;
    let client = CloudFormationClient::new(&config);

    log::info!("Fetching schema for {}", type_name);
    let response = client
        .describe_type()
        .r#type(RegistryType::Resource)
        .type_name(type_name)
        .send()
        .await
        .with_context(|| format!("DescribeType failed for {}", type_name))?;

    match response.schema() {
        Some(schema) => Ok(schema.to_string()),
        None => bail!("No schema returned for {}", type_name),
    }
}
