use std::path::PathBuf;

use cfnkit_codegen::{generate, module_name};

fn resources_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("cfnkit-resources")
}

#[test]
fn checked_in_declarations_match_their_schemas() {
    let configs = cfnkit_resources::configs();
    assert!(!configs.is_empty());

    for config in configs {
        assert_eq!(module_name(config.type_name).unwrap(), config.module_name);

        let schema = config.schema().unwrap();
        let expected = generate(schema, config.type_name).unwrap();

        let path = resources_dir()
            .join("src")
            .join("generated")
            .join(format!("{}.rs", config.module_name));
        let actual = std::fs::read_to_string(&path).unwrap();
        assert!(
            actual == expected,
            "{} is out of date with its schema; regenerate it with\n  \
             cfnkit-codegen --file cfnkit-resources/schemas/<schema>.json --output {}",
            path.display(),
            path.display()
        );
    }
}

#[test]
fn every_bundled_schema_is_registered() {
    let mut schema_files: Vec<String> = std::fs::read_dir(resources_dir().join("schemas"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".json"))
        .collect();
    schema_files.sort();
    assert_eq!(schema_files.len(), cfnkit_resources::configs().len());

    for name in schema_files {
        let text = std::fs::read_to_string(resources_dir().join("schemas").join(&name)).unwrap();
        assert!(
            cfnkit_resources::configs()
                .iter()
                .any(|config| config.schema_json == text),
            "{} is not bundled in the registry",
            name
        );
    }
}
