use std::path::PathBuf;

use cfnkit_core::intrinsic::Intrinsic;
use cfnkit_core::resource::{DeletionPolicy, Resource, ResourceProperties};
use cfnkit_core::template::{Template, TemplateError};
use cfnkit_core::validate::{ValidationErrorKind, validate_properties};
use cfnkit_core::value::{Tag, Value};
use cfnkit_core::{Json, ValidationConfig};
use cfnkit_resources::generated::dlm_lifecycle_policy::{
    CreateRule, PolicyDetails, RetainRule, Schedule,
};
use cfnkit_resources::generated::logs_transformer::{AddKeyEntry, AddKeys, ParseJson, Processor};
use cfnkit_resources::{
    DomainProperties, FileSystemProperties, LifecyclePolicyProperties, TransformerProperties,
    VirtualNodeProperties, check_binding, schema,
};
use serde_json::json;

fn fixture(name: &str) -> Template {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    Template::load(&path).unwrap()
}

fn validate<P: ResourceProperties>(properties: &Json) -> Vec<(String, ValidationErrorKind)> {
    let schema = schema(P::TYPE_NAME).unwrap();
    match validate_properties(schema, properties, &ValidationConfig::default()) {
        Ok(()) => Vec::new(),
        Err(errors) => {
            let mut found: Vec<_> = errors.into_iter().map(|e| (e.path, e.kind)).collect();
            found.sort_by(|a, b| a.0.cmp(&b.0));
            found
        }
    }
}

#[test]
fn fixtures_bind_and_validate() {
    for name in ["fsx-lustre.yaml", "opensearch-domain.json", "appmesh-node.yaml"] {
        let template = fixture(name);
        let structural = template.structural_errors();
        assert!(structural.is_empty(), "{}: {:?}", name, structural);

        let mut bound = 0;
        for (logical_id, resource) in &template.resources {
            let Some(result) = check_binding(resource) else {
                continue;
            };
            bound += 1;
            assert!(result.is_ok(), "{} {}: {:?}", name, logical_id, result);

            let schema = schema(&resource.resource_type).unwrap();
            let validated =
                validate_properties(schema, &resource.properties, &ValidationConfig::default());
            assert!(validated.is_ok(), "{} {}: {:?}", name, logical_id, validated);
        }
        assert_eq!(bound, 1, "{}", name);
    }
}

#[test]
fn lustre_file_system_from_yaml() {
    let template = fixture("fsx-lustre.yaml");
    let fs = template.resources["LustreFileSystem"]
        .typed::<FileSystemProperties>()
        .unwrap();

    assert_eq!(
        fs.attributes.deletion_policy,
        Some(Value::Literal(DeletionPolicy::Retain))
    );
    assert_eq!(fs.attributes.dependencies(), ["LustreSecurityGroup"]);

    let props = &fs.properties;
    assert_eq!(props.file_system_type, Value::Literal("LUSTRE".to_string()));
    assert_eq!(props.storage_capacity, Some(Value::Literal(1200)));
    assert_eq!(
        props.subnet_ids.literal().unwrap()[0],
        Value::Intrinsic(Intrinsic::Ref("SubnetId".to_string()))
    );
    match &props.security_group_ids.as_ref().unwrap().literal().unwrap()[0] {
        Value::Intrinsic(Intrinsic::GetAtt(target)) => {
            assert_eq!(target.logical_id, "LustreSecurityGroup");
            assert_eq!(target.attribute, "GroupId");
        }
        other => panic!("expected Fn::GetAtt, got {:?}", other),
    }

    let lustre = props
        .lustre_configuration
        .as_ref()
        .and_then(Value::literal)
        .unwrap();
    assert_eq!(lustre.deployment_type, Some("SCRATCH_2".into()));
    assert!(matches!(
        lustre.import_path,
        Some(Value::Intrinsic(Intrinsic::If(..)))
    ));
    assert!(lustre.per_unit_storage_throughput.is_none());

    let tags = props.tags.as_ref().unwrap().literal().unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[1], Value::Literal(Tag::new("team", "analytics")));
}

#[test]
fn scalars_are_read_the_way_cloudformation_reads_them() {
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
        PerUnitStorageThroughput: "250"
        CopyTagsToBackups: "TRUE"
      Tags:
        - Key: cost-center
          Value: 4411
"#,
    )
    .unwrap();
    let resource = &template.resources["Fs"];
    assert!(validate::<FileSystemProperties>(&resource.properties).is_empty());
    assert!(matches!(check_binding(resource), Some(Ok(()))));

    let props = resource.typed::<FileSystemProperties>().unwrap().properties;
    assert_eq!(props.file_system_type_version, Some("2.15".into()));
    assert_eq!(props.storage_capacity, Some(Value::Literal(1200)));
    let lustre = props.lustre_configuration.and_then(Value::into_literal).unwrap();
    assert_eq!(lustre.per_unit_storage_throughput, Some(Value::Literal(250)));
    assert_eq!(lustre.copy_tags_to_backups, Some(Value::Literal(true)));
    let tags = props.tags.and_then(Value::into_literal).unwrap();
    assert_eq!(tags[0], Value::Literal(Tag::new("cost-center", "4411")));

    // Canonical output keeps the declared types
    let json = serde_json::to_value(&props.storage_capacity).unwrap();
    assert_eq!(json, json!(1200));
}

#[test]
fn opensearch_maps_and_free_form_json() {
    let template = fixture("opensearch-domain.json");
    let domain = template.resources["SearchDomain"]
        .typed::<DomainProperties>()
        .unwrap();
    assert_eq!(
        domain.attributes.update_replace_policy,
        Some(Value::Literal(DeletionPolicy::Retain))
    );

    let props = &domain.properties;
    let options = props.advanced_options.as_ref().unwrap().literal().unwrap();
    assert_eq!(
        options["rest.action.multi.allow_explicit_index"],
        Value::Literal("true".to_string())
    );

    let logs = props
        .log_publishing_options
        .as_ref()
        .unwrap()
        .literal()
        .unwrap();
    let slow = logs["SEARCH_SLOW_LOGS"].literal().unwrap();
    assert_eq!(slow.enabled, Some(Value::Literal(true)));
    assert!(matches!(
        slow.cloud_watch_logs_log_group_arn,
        Some(Value::Intrinsic(Intrinsic::GetAtt(_)))
    ));

    let policy = props.access_policies.as_ref().unwrap();
    assert_eq!(policy["Version"], "2012-10-17");
    assert_eq!(policy["Statement"][0]["Action"], "es:*");

    let ebs = props.ebs_options.as_ref().and_then(Value::literal).unwrap();
    assert_eq!(ebs.volume_size, Some(Value::Literal(100)));
}

#[test]
fn opensearch_constraint_violations() {
    let template = fixture("opensearch-domain.json");
    let mut properties = template.resources["SearchDomain"].properties.clone();
    properties["DomainName"] = json!("Search_Prod");
    properties["EBSOptions"]["VolumeSize"] = json!(5);
    properties["ClusterConfig"]["InstanceCount"] = json!("three");
    properties["DomainArn"] = json!("arn:aws:es:us-east-1:123456789012:domain/search-prod");

    let errors = validate::<DomainProperties>(&properties);
    let paths: Vec<&str> = errors.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "ClusterConfig.InstanceCount",
            "DomainArn",
            "DomainName",
            "EBSOptions.VolumeSize",
        ]
    );
    assert!(matches!(
        errors[0].1,
        ValidationErrorKind::TypeMismatch { got: "String", .. }
    ));
    assert!(matches!(errors[1].1, ValidationErrorKind::ReadOnly { .. }));
    assert!(matches!(
        errors[2].1,
        ValidationErrorKind::PatternMismatch { .. }
    ));
    assert!(matches!(
        errors[3].1,
        ValidationErrorKind::BelowMinimum { min, .. } if min == 10.0
    ));
}

#[test]
fn virtual_node_nested_listeners() {
    let template = fixture("appmesh-node.yaml");
    let node = template.resources["OrdersNode"]
        .typed::<VirtualNodeProperties>()
        .unwrap();

    let spec = node.properties.spec.literal().unwrap();
    let listeners = spec.listeners.as_ref().unwrap().literal().unwrap();
    let listener = listeners[0].literal().unwrap();
    let port_mapping = listener.port_mapping.literal().unwrap();
    assert_eq!(port_mapping.port, Value::Literal(8080));
    assert_eq!(port_mapping.protocol, Value::Literal("http".to_string()));

    let health = listener
        .health_check
        .as_ref()
        .and_then(Value::literal)
        .unwrap();
    assert_eq!(health.interval_millis, Value::Literal(5000));

    let tls = listener.tls.as_ref().and_then(Value::literal).unwrap();
    assert_eq!(tls.mode, Value::Literal("STRICT".to_string()));
    let acm = tls
        .certificate
        .literal()
        .and_then(|c| c.acm.as_ref())
        .and_then(Value::literal)
        .unwrap();
    assert_eq!(
        acm.certificate_arn,
        Value::Intrinsic(Intrinsic::Ref("CertificateArn".to_string()))
    );
}

#[test]
fn virtual_node_typo_is_reported_by_both_layers() {
    let template = fixture("appmesh-node.yaml");
    let mut resource = template.resources["OrdersNode"].clone();
    let listener = &mut resource.properties["Spec"]["Listeners"][0];
    let port_mapping = listener["PortMapping"].take();
    listener["PortMaping"] = port_mapping;
    listener
        .as_object_mut()
        .unwrap()
        .remove("PortMapping");

    assert!(matches!(
        resource.typed::<VirtualNodeProperties>(),
        Err(TemplateError::InvalidProperties { .. })
    ));

    let errors = validate::<VirtualNodeProperties>(&resource.properties);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].0, "Spec.Listeners[0].PortMaping");
    assert!(matches!(
        errors[0].1,
        ValidationErrorKind::UnknownProperty { .. }
    ));
    assert_eq!(errors[1].0, "Spec.Listeners[0].PortMapping");
    assert!(matches!(
        errors[1].1,
        ValidationErrorKind::MissingRequired { .. }
    ));
}

#[test]
fn lifecycle_policy_built_in_code_validates() {
    let details = PolicyDetails {
        policy_type: Some("EBS_SNAPSHOT_MANAGEMENT".into()),
        resource_types: Some(Value::from_literals(["VOLUME".to_string()])),
        target_tags: Some(Value::from_literals([Tag::new("Backup", "daily")])),
        schedules: Some(Value::from_literals([Schedule {
            name: Some("Daily snapshots".into()),
            copy_tags: Some(Value::Literal(true)),
            create_rule: Some(Value::Literal(CreateRule {
                interval: Some(Value::Literal(24)),
                interval_unit: Some("HOURS".into()),
                times: Some(Value::from_literals(["03:00".to_string()])),
                ..Default::default()
            })),
            retain_rule: Some(Value::Literal(RetainRule {
                count: Some(Value::Literal(7)),
                ..Default::default()
            })),
            ..Default::default()
        }])),
        ..Default::default()
    };
    let policy = Resource::new(LifecyclePolicyProperties {
        description: Some("Daily EBS snapshots".into()),
        state: Some("ENABLED".into()),
        execution_role_arn: Some(Value::Intrinsic(Intrinsic::Ref(
            "LifecycleRoleArn".to_string(),
        ))),
        policy_details: Some(Value::Literal(details)),
        ..Default::default()
    })
    .with_deletion_policy(DeletionPolicy::Delete);

    let json = policy.to_json().unwrap();
    assert_eq!(json["Type"], "AWS::DLM::LifecyclePolicy");
    assert_eq!(json["DeletionPolicy"], "Delete");
    assert_eq!(
        json["Properties"]["PolicyDetails"]["Schedules"][0]["CreateRule"]["Times"],
        json!(["03:00"])
    );
    // Unset optional fields are left out
    assert!(json["Properties"].get("DefaultPolicy").is_none());
    assert!(validate::<LifecyclePolicyProperties>(&json["Properties"]).is_empty());

    let mut invalid = json["Properties"].clone();
    invalid["PolicyDetails"]["Schedules"][0]["CreateRule"]["Times"] = json!(["3am"]);
    invalid["PolicyDetails"]["Schedules"][0]["RetainRule"]["Count"] = json!(5000);
    let errors = validate::<LifecyclePolicyProperties>(&invalid);
    let paths: Vec<&str> = errors.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "PolicyDetails.Schedules[0].CreateRule.Times[0]",
            "PolicyDetails.Schedules[0].RetainRule.Count",
        ]
    );
}

#[test]
fn transformer_processor_limits() {
    let processor = Processor {
        parse_json: Some(Value::Literal(ParseJson::default())),
        ..Default::default()
    };
    let add_keys = Processor {
        add_keys: Some(Value::Literal(AddKeys {
            entries: Value::from_literals([AddKeyEntry {
                key: "env".into(),
                value: "prod".into(),
                overwrite_if_exists: None,
            }]),
        })),
        ..Default::default()
    };
    let transformer = TransformerProperties {
        log_group_identifier: "app-logs".into(),
        transformer_config: Value::from_literals([processor.clone(), add_keys]),
    };
    let properties = serde_json::to_value(&transformer).unwrap();
    assert_eq!(
        properties["TransformerConfig"],
        json!([{"ParseJSON": {}}, {"AddKeys": {"Entries": [{"Key": "env", "Value": "prod"}]}}])
    );
    assert!(validate::<TransformerProperties>(&properties).is_empty());

    let too_many = TransformerProperties {
        transformer_config: Value::from_literals(vec![processor; 21]),
        ..transformer
    };
    let errors = validate::<TransformerProperties>(&serde_json::to_value(&too_many).unwrap());
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].0, "TransformerConfig");
    assert!(errors.iter().any(|(_, kind)| matches!(
        kind,
        ValidationErrorKind::TooManyItems { count: 21, max: 20 }
    )));
    assert!(
        errors
            .iter()
            .any(|(_, kind)| matches!(kind, ValidationErrorKind::DuplicateItems))
    );
}
