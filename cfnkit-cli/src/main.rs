use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;

use cfnkit_core::ValidationConfig;
use cfnkit_core::docs;
use cfnkit_core::template::Template;
use cfnkit_core::validate::validate_properties;

#[derive(Parser)]
#[command(name = "cfnkit")]
#[command(about = "Typed CloudFormation resources and template checks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a template against the bundled resource schemas
    Validate {
        /// Path to a .json, .yaml or .yml template
        file: PathBuf,

        /// Accept properties the schema does not declare
        #[arg(long)]
        allow_unknown: bool,

        /// Skip `pattern` checks on string values
        #[arg(long)]
        no_patterns: bool,

        /// Stop after this many errors (0 = unlimited)
        #[arg(long, default_value_t = 0)]
        max_errors: usize,
    },
    /// Show documentation for a resource type or one of its properties
    Describe {
        /// Resource type (e.g., AWS::FSx::FileSystem)
        type_name: String,

        /// Dotted property path (e.g., LustreConfiguration.DeploymentType)
        #[arg(long, short)]
        property: Option<String>,
    },
    /// List supported resource types
    List,
    /// Rewrite a template as canonical JSON (expands YAML short-form tags)
    Convert {
        /// Path to a .json, .yaml or .yml template
        file: PathBuf,

        /// Output file (writes to stdout if not specified)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate {
            file,
            allow_unknown,
            no_patterns,
            max_errors,
        } => run_validate(
            &file,
            &validation_config(allow_unknown, no_patterns, max_errors),
        ),
        Commands::Describe {
            type_name,
            property,
        } => run_describe(&type_name, property.as_deref()),
        Commands::List => run_list(),
        Commands::Convert { file, output } => run_convert(&file, output.as_deref()),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "cfnkit", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn validation_config(
    allow_unknown: bool,
    no_patterns: bool,
    max_errors: usize,
) -> ValidationConfig {
    let mut config = ValidationConfig::default().with_max_errors(max_errors);
    if allow_unknown {
        config = config.allow_unknown_properties();
    }
    if no_patterns {
        config = config.without_patterns();
    }
    config
}

/// Findings for one template
#[derive(Debug, Default)]
struct Report {
    errors: Vec<String>,
    warnings: Vec<String>,
    /// Resources checked against a bundled schema
    checked: usize,
}

fn check_template(template: &Template, config: &ValidationConfig) -> Report {
    let mut report = Report {
        errors: template
            .structural_errors()
            .iter()
            .map(ToString::to_string)
            .collect(),
        ..Default::default()
    };

    for (logical_id, resource) in &template.resources {
        if config.limit_reached(report.errors.len()) {
            break;
        }
        let Some(schema) = cfnkit_resources::schema(&resource.resource_type) else {
            if resource.resource_type.starts_with("AWS::") {
                report.warnings.push(format!(
                    "Resources.{}: no schema for {}, properties not checked",
                    logical_id, resource.resource_type
                ));
            }
            continue;
        };
        report.checked += 1;
        log::debug!("Checking {} ({})", logical_id, resource.resource_type);

        match validate_properties(schema, &resource.properties, config) {
            Err(errors) => report.errors.extend(
                errors
                    .iter()
                    .map(|e| format!("Resources.{}: {}", logical_id, e)),
            ),
            // Typed structs reject unknown fields, so only bind under the
            // default rules
            Ok(()) if config.deny_unknown_properties => {
                if let Some(Err(e)) = cfnkit_resources::check_binding(resource) {
                    report
                        .errors
                        .push(format!("Resources.{}: {}", logical_id, e));
                }
            }
            Ok(()) => {}
        }
    }

    if config.max_errors != 0 {
        report.errors.truncate(config.max_errors);
    }
    report
}

fn run_validate(file: &Path, config: &ValidationConfig) -> Result<(), String> {
    let template = Template::load(file).map_err(|e| e.to_string())?;

    println!("{}", "Validating...".cyan());

    let report = check_template(&template, config);
    for warning in &report.warnings {
        eprintln!("{} {}", "Warning:".yellow().bold(), warning);
    }
    if !report.errors.is_empty() {
        return Err(format!(
            "{} problem(s) found:\n{}",
            report.errors.len(),
            report.errors.join("\n")
        ));
    }

    println!(
        "{}",
        format!(
            "✓ {} resources validated successfully ({} checked against schemas).",
            template.resources.len(),
            report.checked
        )
        .green()
        .bold()
    );
    for (logical_id, resource) in &template.resources {
        println!("  • {} ({})", logical_id, resource.resource_type);
    }

    Ok(())
}

fn run_describe(type_name: &str, property: Option<&str>) -> Result<(), String> {
    let schema = cfnkit_resources::schema(type_name).ok_or_else(|| {
        format!(
            "Unsupported resource type: {} (run `cfnkit list` for supported types)",
            type_name
        )
    })?;

    let doc = match property {
        Some(path) => docs::property_doc(schema, path).map_err(|e| e.to_string())?,
        None => docs::resource_doc(schema),
    };
    print!("{}", doc);
    Ok(())
}

fn run_list() -> Result<(), String> {
    for config in cfnkit_resources::configs() {
        let taggable = config.schema().is_some_and(|s| s.is_taggable());
        println!(
            "{:<34} {}{}",
            config.type_name.bold(),
            config.module_name,
            if taggable { " (taggable)" } else { "" }
        );
    }
    Ok(())
}

fn run_convert(file: &Path, output: Option<&Path>) -> Result<(), String> {
    let template = Template::load(file).map_err(|e| e.to_string())?;
    let json = template.to_json_string().map_err(|e| e.to_string())?;

    match output {
        Some(path) => {
            fs::write(path, json + "\n")
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            eprintln!("{} {}", "Converted:".green(), path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r#"
Resources:
  Scratch:
    Type: AWS::FSx::FileSystem
    DependsOn: Missing
    Properties:
      FileSystemType: LUSTRE
      StorageCapacity: 1200
      LustreConfiguration:
        DeploymentType: SCRATCH_2
        Throughput: 200
  Bucket:
    Type: AWS::S3::Bucket
  Waiter:
    Type: Custom::Waiter
    Properties:
      ServiceToken: !GetAtt Bucket.Arn
"#;

    fn template() -> Template {
        Template::from_yaml_str(TEMPLATE).unwrap()
    }

    #[test]
    fn reports_structural_and_schema_errors() {
        let report = check_template(&template(), &ValidationConfig::default());
        assert_eq!(
            report.errors,
            vec![
                "Resources.Scratch: DependsOn names missing resource 'Missing'",
                "Resources.Scratch: SubnetIds: required property 'SubnetIds' is missing",
                "Resources.Scratch: LustreConfiguration.Throughput: unknown property 'Throughput'",
            ]
        );
        assert_eq!(
            report.warnings,
            vec!["Resources.Bucket: no schema for AWS::S3::Bucket, properties not checked"]
        );
        assert_eq!(report.checked, 1);
    }

    #[test]
    fn flags_relax_checks() {
        let config = validation_config(true, false, 0);
        let report = check_template(&template(), &config);
        assert_eq!(report.errors.len(), 2);

        let config = validation_config(false, false, 1);
        let report = check_template(&template(), &config);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn typed_binding_runs_after_schema_checks() {
        let template = Template::from_yaml_str(
            r#"
Resources:
  Transformer:
    Type: AWS::Logs::Transformer
    Properties:
      LogGroupIdentifier: app-logs
      TransformerConfig:
        - ParseJSON: {}
        - TrimString:
            WithKeys: [message]
"#,
        )
        .unwrap();
        let report = check_template(&template, &ValidationConfig::default());
        assert!(report.errors.is_empty(), "{:?}", report.errors);
        assert_eq!(report.checked, 1);
    }

    #[test]
    fn quoted_and_bare_scalars_pass_both_layers() {
        let template = Template::from_yaml_str(
            r#"
Resources:
  Fs:
    Type: AWS::FSx::FileSystem
    Properties:
      FileSystemType: LUSTRE
      FileSystemTypeVersion: 2.15
      StorageCapacity: "1200"
      SubnetIds: [subnet-0a1b2c3d]
      LustreConfiguration:
        DeploymentType: PERSISTENT_2
        PerUnitStorageThroughput: "250"
        CopyTagsToBackups: "true"
      Tags:
        - Key: cost-center
          Value: 4411
"#,
        )
        .unwrap();
        let report = check_template(&template, &ValidationConfig::default());
        assert!(report.errors.is_empty(), "{:?}", report.errors);
        assert_eq!(report.checked, 1);
    }

    #[test]
    fn convert_writes_canonical_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("template.yaml");
        let output = dir.path().join("template.json");
        fs::write(&input, TEMPLATE).unwrap();

        run_convert(&input, Some(&output)).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(
            written["Resources"]["Waiter"]["Properties"]["ServiceToken"],
            serde_json::json!({"Fn::GetAtt": ["Bucket", "Arn"]})
        );
        // Reloading the JSON gives the same template
        assert_eq!(Template::load(&output).unwrap(), template());
    }

    #[test]
    fn describe_rejects_unknown_types() {
        assert!(run_describe("AWS::S3::Bucket", None).is_err());
        assert!(run_describe("AWS::FSx::FileSystem", Some("Nope")).is_err());
        assert!(
            run_describe(
                "AWS::FSx::FileSystem",
                Some("LustreConfiguration.DeploymentType")
            )
            .is_ok()
        );
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
