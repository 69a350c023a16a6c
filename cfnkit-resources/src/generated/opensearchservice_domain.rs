//! opensearchservice_domain typed declarations
//!
//! Auto-generated from CloudFormation schema: AWS::OpenSearchService::Domain
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::resource::ResourceProperties;
use cfnkit_core::value::{Json, List, Map, Tag, Value};
use serde::{Deserialize, Serialize};

/// Specifies options for fine-grained access control.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdvancedSecurityOptionsInput {
    /// True to enable a 30-day migration period during which users can submit requests to the domain anonymously.
    #[serde(rename = "AnonymousAuthEnabled", default, skip_serializing_if = "Option::is_none")]
    pub anonymous_auth_enabled: Option<Value<bool>>,

    /// True to enable fine-grained access control.
    #[serde(rename = "Enabled", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Value<bool>>,

    /// True to enable the internal user database.
    #[serde(
        rename = "InternalUserDatabaseEnabled",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub internal_user_database_enabled: Option<Value<bool>>,

    #[serde(rename = "MasterUserOptions", default, skip_serializing_if = "Option::is_none")]
    pub master_user_options: Option<Value<MasterUserOptions>>,

    #[serde(rename = "SAMLOptions", default, skip_serializing_if = "Option::is_none")]
    pub saml_options: Option<Value<SamlOptions>>,
}

/// The cluster configuration for the OpenSearch Service domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClusterConfig {
    #[serde(rename = "ColdStorageOptions", default, skip_serializing_if = "Option::is_none")]
    pub cold_storage_options: Option<Value<ColdStorageOptions>>,

    /// The number of instances to use for the master node.
    #[serde(rename = "DedicatedMasterCount", default, skip_serializing_if = "Option::is_none")]
    pub dedicated_master_count: Option<Value<i64>>,

    /// Indicates whether to use a dedicated master node for the OpenSearch Service domain.
    #[serde(rename = "DedicatedMasterEnabled", default, skip_serializing_if = "Option::is_none")]
    pub dedicated_master_enabled: Option<Value<bool>>,

    /// The hardware configuration of the computer that hosts the dedicated master node, such as m3.medium.search.
    #[serde(rename = "DedicatedMasterType", default, skip_serializing_if = "Option::is_none")]
    pub dedicated_master_type: Option<Value<String>>,

    /// The number of data nodes (instances) to use in the OpenSearch Service domain.
    #[serde(rename = "InstanceCount", default, skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<Value<i64>>,

    /// The instance type for your data nodes, such as m3.medium.search.
    #[serde(rename = "InstanceType", default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<Value<String>>,

    /// Indicates whether Multi-AZ with Standby deployment option is enabled.
    #[serde(rename = "MultiAZWithStandbyEnabled", default, skip_serializing_if = "Option::is_none")]
    pub multi_az_with_standby_enabled: Option<Value<bool>>,

    /// List of node options for the domain.
    #[serde(rename = "NodeOptions", default, skip_serializing_if = "Option::is_none")]
    pub node_options: Option<List<NodeOption>>,

    /// The number of warm nodes in the cluster.
    #[serde(rename = "WarmCount", default, skip_serializing_if = "Option::is_none")]
    pub warm_count: Option<Value<i64>>,

    /// Whether to enable UltraWarm storage for the cluster.
    #[serde(rename = "WarmEnabled", default, skip_serializing_if = "Option::is_none")]
    pub warm_enabled: Option<Value<bool>>,

    /// The instance type for the cluster's warm nodes.
    #[serde(rename = "WarmType", default, skip_serializing_if = "Option::is_none")]
    pub warm_type: Option<Value<String>>,

    #[serde(rename = "ZoneAwarenessConfig", default, skip_serializing_if = "Option::is_none")]
    pub zone_awareness_config: Option<Value<ZoneAwarenessConfig>>,

    /// Indicates whether to enable zone awareness for the OpenSearch Service domain.
    #[serde(rename = "ZoneAwarenessEnabled", default, skip_serializing_if = "Option::is_none")]
    pub zone_awareness_enabled: Option<Value<bool>>,
}

/// Configures OpenSearch Service to use Amazon Cognito authentication for OpenSearch Dashboards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CognitoOptions {
    /// Whether to enable or disable Amazon Cognito authentication for OpenSearch Dashboards.
    #[serde(rename = "Enabled", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Value<bool>>,

    /// The Amazon Cognito identity pool ID that you want OpenSearch Service to use for OpenSearch Dashboards authentication.
    #[serde(rename = "IdentityPoolId", default, skip_serializing_if = "Option::is_none")]
    pub identity_pool_id: Option<Value<String>>,

    /// The AmazonOpenSearchServiceCognitoAccess role that allows OpenSearch Service to configure your user pool and identity pool.
    #[serde(rename = "RoleArn", default, skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<Value<String>>,

    /// The Amazon Cognito user pool ID that you want OpenSearch Service to use for OpenSearch Dashboards authentication.
    #[serde(rename = "UserPoolId", default, skip_serializing_if = "Option::is_none")]
    pub user_pool_id: Option<Value<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColdStorageOptions {
    #[serde(rename = "Enabled", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Value<bool>>,
}

/// Specifies additional options for the domain endpoint, such as whether to require HTTPS for all traffic or whether to use a custom endpoint rather than the default endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DomainEndpointOptions {
    /// The fully qualified URL for your custom endpoint.
    #[serde(rename = "CustomEndpoint", default, skip_serializing_if = "Option::is_none")]
    pub custom_endpoint: Option<Value<String>>,

    /// The AWS Certificate Manager ARN for your domain's SSL/TLS certificate.
    #[serde(
        rename = "CustomEndpointCertificateArn",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_endpoint_certificate_arn: Option<Value<String>>,

    /// True to enable a custom endpoint for the domain.
    #[serde(rename = "CustomEndpointEnabled", default, skip_serializing_if = "Option::is_none")]
    pub custom_endpoint_enabled: Option<Value<bool>>,

    /// True to require that all traffic to the domain arrive over HTTPS.
    #[serde(rename = "EnforceHTTPS", default, skip_serializing_if = "Option::is_none")]
    pub enforce_https: Option<Value<bool>>,

    /// The minimum TLS version required for traffic to the domain.
    ///
    /// Allowed values: Policy-Min-TLS-1-0-2019-07 | Policy-Min-TLS-1-2-2019-07 | Policy-Min-TLS-1-2-PFS-2023-10
    #[serde(rename = "TLSSecurityPolicy", default, skip_serializing_if = "Option::is_none")]
    pub tls_security_policy: Option<Value<String>>,
}

/// The configurations of Amazon Elastic Block Store (Amazon EBS) volumes that are attached to data nodes in the OpenSearch Service domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EbsOptions {
    /// Specifies whether Amazon EBS volumes are attached to data nodes in the OpenSearch Service domain.
    #[serde(rename = "EBSEnabled", default, skip_serializing_if = "Option::is_none")]
    pub ebs_enabled: Option<Value<bool>>,

    /// The number of I/O operations per second (IOPS) that the volume supports.
    #[serde(rename = "Iops", default, skip_serializing_if = "Option::is_none")]
    pub iops: Option<Value<i64>>,

    /// The throughput (in MiB/s) of the EBS volumes attached to data nodes.
    #[serde(rename = "Throughput", default, skip_serializing_if = "Option::is_none")]
    pub throughput: Option<Value<i64>>,

    /// The size (in GiB) of the EBS volume for each data node.
    ///
    /// Value: at least 10
    #[serde(rename = "VolumeSize", default, skip_serializing_if = "Option::is_none")]
    pub volume_size: Option<Value<i64>>,

    /// The EBS volume type to use with the OpenSearch Service domain.
    ///
    /// Allowed values: standard | gp2 | gp3 | io1
    #[serde(rename = "VolumeType", default, skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<Value<String>>,
}

/// Whether the domain should encrypt data at rest, and if so, the AWS KMS key to use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncryptionAtRestOptions {
    /// Specify true to enable encryption at rest.
    #[serde(rename = "Enabled", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Value<bool>>,

    /// The KMS key ID. Takes the form 1a2a3a4-1a2a-3a4a-5a6a-1a2a3a4a5a6a.
    #[serde(rename = "KmsKeyId", default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<Value<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Idp {
    /// The unique entity ID of the application in the SAML identity provider.
    ///
    /// Length: 8 to 512
    #[serde(rename = "EntityId")]
    pub entity_id: Value<String>,

    /// The metadata of the SAML application, in XML format.
    ///
    /// Length: 1 to 1048576
    #[serde(rename = "MetadataContent")]
    pub metadata_content: Value<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogPublishingOption {
    /// The Amazon Resource Name (ARN) of the CloudWatch Logs group to publish logs to.
    #[serde(rename = "CloudWatchLogsLogGroupArn", default, skip_serializing_if = "Option::is_none")]
    pub cloud_watch_logs_log_group_arn: Option<Value<String>>,

    /// If true, enables the publishing of logs to CloudWatch.
    #[serde(rename = "Enabled", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Value<bool>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MasterUserOptions {
    /// Amazon Resource Name (ARN) for the master user. The ARN can point to an IAM user or role.
    #[serde(rename = "MasterUserARN", default, skip_serializing_if = "Option::is_none")]
    pub master_user_arn: Option<Value<String>>,

    /// User name for the master user. Only specify if InternalUserDatabaseEnabled is true.
    #[serde(rename = "MasterUserName", default, skip_serializing_if = "Option::is_none")]
    pub master_user_name: Option<Value<String>>,

    /// Password for the master user. Only specify if InternalUserDatabaseEnabled is true.
    #[serde(rename = "MasterUserPassword", default, skip_serializing_if = "Option::is_none")]
    pub master_user_password: Option<Value<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeConfig {
    /// Value: at least 1
    #[serde(rename = "Count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Value<i64>>,

    #[serde(rename = "Enabled", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Value<bool>>,

    /// Allowed values: OpenSearch.m7g.large.search | OpenSearch.r7g.large.search | OpenSearch.c7g.large.search
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<Value<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeOption {
    #[serde(rename = "NodeConfig", default, skip_serializing_if = "Option::is_none")]
    pub node_config: Option<Value<NodeConfig>>,

    /// Allowed values: coordinator
    #[serde(rename = "NodeType", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<Value<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeToNodeEncryptionOptions {
    /// Specifies to enable or disable node-to-node encryption on the domain.
    #[serde(rename = "Enabled", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Value<bool>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OffPeakWindow {
    #[serde(rename = "WindowStartTime", default, skip_serializing_if = "Option::is_none")]
    pub window_start_time: Option<Value<WindowStartTime>>,
}

/// Options for a domain's off-peak window, during which OpenSearch Service can perform mandatory configuration changes on the domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OffPeakWindowOptions {
    #[serde(rename = "Enabled", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Value<bool>>,

    #[serde(rename = "OffPeakWindow", default, skip_serializing_if = "Option::is_none")]
    pub off_peak_window: Option<Value<OffPeakWindow>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamlOptions {
    /// True to enable SAML authentication for a domain.
    #[serde(rename = "Enabled", default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<Value<bool>>,

    #[serde(rename = "Idp", default, skip_serializing_if = "Option::is_none")]
    pub idp: Option<Value<Idp>>,

    /// The backend role that the SAML master user is mapped to.
    #[serde(rename = "MasterBackendRole", default, skip_serializing_if = "Option::is_none")]
    pub master_backend_role: Option<Value<String>>,

    /// The SAML master user name, which is stored in the domain's internal user database.
    #[serde(rename = "MasterUserName", default, skip_serializing_if = "Option::is_none")]
    pub master_user_name: Option<Value<String>>,

    /// Element of the SAML assertion to use for backend roles.
    #[serde(rename = "RolesKey", default, skip_serializing_if = "Option::is_none")]
    pub roles_key: Option<Value<String>>,

    /// The duration, in minutes, after which a user session becomes inactive.
    ///
    /// Value: 1 to 1440
    #[serde(rename = "SessionTimeoutMinutes", default, skip_serializing_if = "Option::is_none")]
    pub session_timeout_minutes: Option<Value<i64>>,

    /// Element of the SAML assertion to use for the user name.
    #[serde(rename = "SubjectKey", default, skip_serializing_if = "Option::is_none")]
    pub subject_key: Option<Value<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotOptions {
    /// The hour in UTC during which the service takes an automated daily snapshot of the indexes in the OpenSearch Service domain.
    ///
    /// Value: 0 to 23
    #[serde(
        rename = "AutomatedSnapshotStartHour",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub automated_snapshot_start_hour: Option<Value<i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SoftwareUpdateOptions {
    /// Specifies whether automatic service software updates are enabled for the domain.
    #[serde(rename = "AutoSoftwareUpdateEnabled", default, skip_serializing_if = "Option::is_none")]
    pub auto_software_update_enabled: Option<Value<bool>>,
}

/// The virtual private cloud (VPC) configuration for the OpenSearch Service domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VpcOptions {
    /// The list of security group IDs that are associated with the VPC endpoints for the domain.
    ///
    /// Items must be unique
    #[serde(rename = "SecurityGroupIds", default, skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<List<String>>,

    /// Provide one subnet ID for each Availability Zone that your domain uses.
    ///
    /// Items must be unique
    #[serde(rename = "SubnetIds", default, skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<List<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowStartTime {
    /// Value: 0 to 23
    #[serde(rename = "Hours")]
    pub hours: Value<i64>,

    /// Value: 0 to 59
    #[serde(rename = "Minutes")]
    pub minutes: Value<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZoneAwarenessConfig {
    /// If you enabled multiple Availability Zones (AZs), the number of AZs that you want the domain to use.
    #[serde(rename = "AvailabilityZoneCount", default, skip_serializing_if = "Option::is_none")]
    pub availability_zone_count: Option<Value<i64>>,
}

/// An example resource schema demonstrating some basic constructs and validation rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DomainProperties {
    /// An AWS Identity and Access Management (IAM) policy document that specifies who can access the OpenSearch Service domain and their permissions.
    #[serde(rename = "AccessPolicies", default, skip_serializing_if = "Option::is_none")]
    pub access_policies: Option<Json>,

    /// Additional options to specify for the OpenSearch Service domain.
    #[serde(rename = "AdvancedOptions", default, skip_serializing_if = "Option::is_none")]
    pub advanced_options: Option<Map<String>>,

    /// Specifies options for fine-grained access control.
    #[serde(rename = "AdvancedSecurityOptions", default, skip_serializing_if = "Option::is_none")]
    pub advanced_security_options: Option<Value<AdvancedSecurityOptionsInput>>,

    /// The cluster configuration for the OpenSearch Service domain.
    #[serde(rename = "ClusterConfig", default, skip_serializing_if = "Option::is_none")]
    pub cluster_config: Option<Value<ClusterConfig>>,

    /// Configures OpenSearch Service to use Amazon Cognito authentication for OpenSearch Dashboards.
    #[serde(rename = "CognitoOptions", default, skip_serializing_if = "Option::is_none")]
    pub cognito_options: Option<Value<CognitoOptions>>,

    /// Specifies additional options for the domain endpoint, such as whether to require HTTPS for all traffic or whether to use a custom endpoint rather than the default endpoint.
    #[serde(rename = "DomainEndpointOptions", default, skip_serializing_if = "Option::is_none")]
    pub domain_endpoint_options: Option<Value<DomainEndpointOptions>>,

    /// A name for the OpenSearch Service domain.
    ///
    /// Pattern: `^[a-z][a-z0-9\-]+$`
    /// Length: 3 to 28
    /// Update requires: Replacement
    #[serde(rename = "DomainName", default, skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<Value<String>>,

    /// The configurations of Amazon Elastic Block Store (Amazon EBS) volumes that are attached to data nodes in the OpenSearch Service domain.
    #[serde(rename = "EBSOptions", default, skip_serializing_if = "Option::is_none")]
    pub ebs_options: Option<Value<EbsOptions>>,

    /// Whether the domain should encrypt data at rest, and if so, the AWS KMS key to use.
    #[serde(rename = "EncryptionAtRestOptions", default, skip_serializing_if = "Option::is_none")]
    pub encryption_at_rest_options: Option<Value<EncryptionAtRestOptions>>,

    /// The version of OpenSearch to use, in the format OpenSearch_X.Y or Elasticsearch_X.Y.
    ///
    /// Pattern: `^Elasticsearch_[0-9]{1}\.[0-9]{1,2}$|^OpenSearch_[0-9]{1,2}\.[0-9]{1,2}$`
    #[serde(rename = "EngineVersion", default, skip_serializing_if = "Option::is_none")]
    pub engine_version: Option<Value<String>>,

    /// Choose either dual stack or IPv4 as your IP address type.
    ///
    /// Allowed values: ipv4 | dualstack
    #[serde(rename = "IPAddressType", default, skip_serializing_if = "Option::is_none")]
    pub ip_address_type: Option<Value<String>>,

    /// An object with one or more of the following keys: SEARCH_SLOW_LOGS, ES_APPLICATION_LOGS, INDEX_SLOW_LOGS, AUDIT_LOGS, depending on the types of logs you want to publish.
    #[serde(rename = "LogPublishingOptions", default, skip_serializing_if = "Option::is_none")]
    pub log_publishing_options: Option<Map<LogPublishingOption>>,

    #[serde(
        rename = "NodeToNodeEncryptionOptions",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub node_to_node_encryption_options: Option<Value<NodeToNodeEncryptionOptions>>,

    /// Options for a domain's off-peak window, during which OpenSearch Service can perform mandatory configuration changes on the domain.
    #[serde(rename = "OffPeakWindowOptions", default, skip_serializing_if = "Option::is_none")]
    pub off_peak_window_options: Option<Value<OffPeakWindowOptions>>,

    #[serde(rename = "SnapshotOptions", default, skip_serializing_if = "Option::is_none")]
    pub snapshot_options: Option<Value<SnapshotOptions>>,

    #[serde(rename = "SoftwareUpdateOptions", default, skip_serializing_if = "Option::is_none")]
    pub software_update_options: Option<Value<SoftwareUpdateOptions>>,

    /// An arbitrary set of tags (key-value pairs) for this Domain.
    ///
    /// Items must be unique
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<List<Tag>>,

    /// The virtual private cloud (VPC) configuration for the OpenSearch Service domain.
    #[serde(rename = "VPCOptions", default, skip_serializing_if = "Option::is_none")]
    pub vpc_options: Option<Value<VpcOptions>>,
}

impl ResourceProperties for DomainProperties {
    const TYPE_NAME: &'static str = "AWS::OpenSearchService::Domain";
}
