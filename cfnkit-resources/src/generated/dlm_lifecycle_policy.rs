//! dlm_lifecycle_policy typed declarations
//!
//! Auto-generated from CloudFormation schema: AWS::DLM::LifecyclePolicy
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::resource::ResourceProperties;
use cfnkit_core::value::{List, Tag, Value};
use serde::{Deserialize, Serialize};

/// [Event-based policies only] Specifies an action for an event-based policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Action {
    /// The rule for copying shared snapshots across Regions.
    ///
    /// Items: at most 3
    #[serde(rename = "CrossRegionCopy")]
    pub cross_region_copy: List<CrossRegionCopyAction>,

    /// A descriptive name for the action.
    ///
    /// Pattern: `^[0-9A-Za-z _-]+$`
    /// Length: 0 to 120
    #[serde(rename = "Name")]
    pub name: Value<String>,
}

/// [Custom snapshot policies only] Specifies information about the archive storage tier retention period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArchiveRetainRule {
    /// [Custom snapshot policies only] Describes the retention rule for archived snapshots.
    #[serde(rename = "RetentionArchiveTier")]
    pub retention_archive_tier: Value<RetentionArchiveTier>,
}

/// [Custom snapshot policies only] Specifies a snapshot archiving rule for a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArchiveRule {
    /// [Custom snapshot policies only] Specifies information about the archive storage tier retention period.
    #[serde(rename = "RetainRule")]
    pub retain_rule: Value<ArchiveRetainRule>,
}

/// Specifies when the policy should create snapshots or AMIs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateRule {
    /// The schedule, as a Cron expression.
    ///
    /// Pattern: `cron\([^\n]{11,100}\)`
    /// Length: 17 to 106
    #[serde(rename = "CronExpression", default, skip_serializing_if = "Option::is_none")]
    pub cron_expression: Option<Value<String>>,

    /// The interval between snapshots.
    ///
    /// Value: at least 1
    #[serde(rename = "Interval", default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<Value<i64>>,

    /// The interval unit.
    ///
    /// Allowed values: HOURS
    #[serde(rename = "IntervalUnit", default, skip_serializing_if = "Option::is_none")]
    pub interval_unit: Option<Value<String>>,

    /// Specifies the destination for snapshots created by the policy.
    ///
    /// Allowed values: CLOUD | OUTPOST_LOCAL | LOCAL_ZONE
    #[serde(rename = "Location", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Value<String>>,

    /// [Custom snapshot policies that target instances only] Specifies pre and/or post scripts for a snapshot lifecycle policy.
    ///
    /// Items: at most 1
    #[serde(rename = "Scripts", default, skip_serializing_if = "Option::is_none")]
    pub scripts: Option<List<Script>>,

    /// The time, in UTC, to start the operation. The supported format is hh:mm.
    ///
    /// Items: at most 1
    #[serde(rename = "Times", default, skip_serializing_if = "Option::is_none")]
    pub times: Option<List<String>>,
}

/// Specifies a rule for copying shared snapshots across Regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrossRegionCopyAction {
    /// Specifies the encryption settings for shared snapshots that are copied across Regions.
    #[serde(rename = "EncryptionConfiguration")]
    pub encryption_configuration: Value<EncryptionConfiguration>,

    /// Specifies a retention rule for cross-Region snapshot copies created by snapshot or event-based policies, or cross-Region AMI copies created by AMI policies.
    #[serde(rename = "RetainRule", default, skip_serializing_if = "Option::is_none")]
    pub retain_rule: Option<Value<CrossRegionCopyRetainRule>>,

    /// The target Region.
    ///
    /// Pattern: `^[\w:\-\/\*]+$`
    /// Length: 0 to 2048
    #[serde(rename = "Target")]
    pub target: Value<String>,
}

/// [AMI policies only] Specifies an AMI deprecation rule for cross-Region AMI copies created by an AMI policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrossRegionCopyDeprecateRule {
    /// The period after which to deprecate the cross-Region AMI copies.
    ///
    /// Value: at least 1
    #[serde(rename = "Interval")]
    pub interval: Value<i64>,

    /// The unit of time in which to measure the Interval.
    ///
    /// Allowed values: DAYS | WEEKS | MONTHS | YEARS
    #[serde(rename = "IntervalUnit")]
    pub interval_unit: Value<String>,
}

/// Specifies a retention rule for cross-Region snapshot copies created by snapshot or event-based policies, or cross-Region AMI copies created by AMI policies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrossRegionCopyRetainRule {
    /// The amount of time to retain a cross-Region snapshot or AMI copy.
    ///
    /// Value: at least 1
    #[serde(rename = "Interval")]
    pub interval: Value<i64>,

    /// The unit of time for time-based retention.
    ///
    /// Allowed values: DAYS | WEEKS | MONTHS | YEARS
    #[serde(rename = "IntervalUnit")]
    pub interval_unit: Value<String>,
}

/// Specifies a cross-Region copy rule for a snapshot and AMI policies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrossRegionCopyRule {
    /// The Amazon Resource Name (ARN) of the AWS KMS key to use for EBS encryption.
    ///
    /// Pattern: `^arn:aws(-[a-z]{1,3}){0,2}:kms:([a-z]+-){2,3}\d:\d+:key/.*$`
    /// Length: 0 to 2048
    #[serde(rename = "CmkArn", default, skip_serializing_if = "Option::is_none")]
    pub cmk_arn: Option<Value<String>>,

    /// Indicates whether to copy all user-defined tags from the source snapshot or AMI to the cross-Region copy.
    #[serde(rename = "CopyTags", default, skip_serializing_if = "Option::is_none")]
    pub copy_tags: Option<Value<bool>>,

    /// [AMI policies only] Specifies an AMI deprecation rule for cross-Region AMI copies created by an AMI policy.
    #[serde(rename = "DeprecateRule", default, skip_serializing_if = "Option::is_none")]
    pub deprecate_rule: Option<Value<CrossRegionCopyDeprecateRule>>,

    /// To encrypt a copy of an unencrypted snapshot if encryption by default is not enabled, enable encryption using this parameter.
    #[serde(rename = "Encrypted")]
    pub encrypted: Value<bool>,

    /// Specifies a retention rule for cross-Region snapshot copies created by snapshot or event-based policies, or cross-Region AMI copies created by AMI policies.
    #[serde(rename = "RetainRule", default, skip_serializing_if = "Option::is_none")]
    pub retain_rule: Option<Value<CrossRegionCopyRetainRule>>,

    /// The target Region or the Amazon Resource Name (ARN) of the target Outpost for the snapshot copies.
    ///
    /// Pattern: `^[\w:\-\/\*]+$`
    /// Length: 0 to 2048
    #[serde(rename = "Target", default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Value<String>>,

    /// Avoid using this parameter when creating new policies. Instead, use Target to specify a target Region or a target Outpost for snapshot copies.
    ///
    /// Pattern: `([a-z]+-){2,3}\d`
    /// Length: 0 to 16
    #[serde(rename = "TargetRegion", default, skip_serializing_if = "Option::is_none")]
    pub target_region: Option<Value<String>>,
}

/// [Default policies only] Specifies a destination Region for cross-Region copy actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrossRegionCopyTarget {
    /// The target Region, for example us-east-1.
    ///
    /// Pattern: `^[\w:\-\/\*]+$`
    /// Length: 0 to 16
    #[serde(rename = "TargetRegion", default, skip_serializing_if = "Option::is_none")]
    pub target_region: Option<Value<String>>,
}

/// [Custom AMI policies only] Specifies an AMI deprecation rule for AMIs created by an AMI lifecycle policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeprecateRule {
    /// If the schedule has a count-based retention rule, this parameter specifies the number of oldest AMIs to deprecate.
    ///
    /// Value: 1 to 1000
    #[serde(rename = "Count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Value<i64>>,

    /// If the schedule has an age-based retention rule, this parameter specifies the period after which to deprecate AMIs created by the schedule.
    ///
    /// Value: at least 1
    #[serde(rename = "Interval", default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<Value<i64>>,

    /// The unit of time in which to measure the Interval.
    ///
    /// Allowed values: DAYS | WEEKS | MONTHS | YEARS
    #[serde(rename = "IntervalUnit", default, skip_serializing_if = "Option::is_none")]
    pub interval_unit: Option<Value<String>>,
}

/// Specifies the encryption settings for shared snapshots that are copied across Regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncryptionConfiguration {
    /// The Amazon Resource Name (ARN) of the AWS KMS key to use for EBS encryption.
    ///
    /// Pattern: `^arn:aws(-[a-z]{1,3}){0,2}:kms:([a-z]+-){2,3}\d:\d+:key/.*$`
    /// Length: 0 to 2048
    #[serde(rename = "CmkArn", default, skip_serializing_if = "Option::is_none")]
    pub cmk_arn: Option<Value<String>>,

    /// To encrypt a copy of an unencrypted snapshot when encryption by default is not enabled, enable encryption using this parameter.
    #[serde(rename = "Encrypted")]
    pub encrypted: Value<bool>,
}

/// Specifies an event that activates an event-based policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventParameters {
    /// The snapshot description that can trigger the policy.
    ///
    /// Pattern: `^[\p{All}]*$`
    /// Length: 0 to 1000
    #[serde(rename = "DescriptionRegex", default, skip_serializing_if = "Option::is_none")]
    pub description_regex: Option<Value<String>>,

    /// The type of event. Currently, only snapshot sharing events are supported.
    ///
    /// Allowed values: shareSnapshot
    #[serde(rename = "EventType")]
    pub event_type: Value<String>,

    /// The IDs of the AWS accounts that can trigger policy by sharing snapshots with your account.
    ///
    /// Items: at most 50
    #[serde(rename = "SnapshotOwner")]
    pub snapshot_owner: List<String>,
}

/// [Event-based policies only] Specifies an event that activates an event-based policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventSource {
    /// Specifies an event that activates an event-based policy.
    #[serde(rename = "Parameters", default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value<EventParameters>>,

    /// The source of the event. Currently only managed CloudWatch Events rules are supported.
    ///
    /// Allowed values: MANAGED_CWE
    #[serde(rename = "Type")]
    pub r#type: Value<String>,
}

/// [Default policies only] Specifies exclusion parameters for volumes or instances for which you do not want to create snapshots or AMIs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Exclusions {
    /// [Default policies for EBS snapshots only] Indicates whether to exclude volumes that are attached to instances as the boot volume.
    #[serde(rename = "ExcludeBootVolumes", default, skip_serializing_if = "Option::is_none")]
    pub exclude_boot_volumes: Option<Value<bool>>,

    /// [Default policies for EBS-backed AMIs only] Specifies whether to exclude volumes that have specific tags.
    ///
    /// Items: at most 50
    #[serde(rename = "ExcludeTags", default, skip_serializing_if = "Option::is_none")]
    pub exclude_tags: Option<List<Tag>>,

    /// [Default policies for EBS snapshots only] Specifies the volume types to exclude.
    ///
    /// Items: at most 6
    #[serde(rename = "ExcludeVolumeTypes", default, skip_serializing_if = "Option::is_none")]
    pub exclude_volume_types: Option<List<String>>,
}

/// Specifies a rule for enabling fast snapshot restore for snapshots created by snapshot policies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FastRestoreRule {
    /// The Availability Zones in which to enable fast snapshot restore.
    ///
    /// Items: 1 to 10
    #[serde(rename = "AvailabilityZones", default, skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<List<String>>,

    /// The number of snapshots to be enabled with fast snapshot restore.
    ///
    /// Value: 0 to 1000
    #[serde(rename = "Count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Value<i64>>,

    /// The amount of time to enable fast snapshot restore.
    ///
    /// Value: at least 1
    #[serde(rename = "Interval", default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<Value<i64>>,

    /// The unit of time for enabling fast snapshot restore.
    ///
    /// Allowed values: DAYS | WEEKS | MONTHS | YEARS
    #[serde(rename = "IntervalUnit", default, skip_serializing_if = "Option::is_none")]
    pub interval_unit: Option<Value<String>>,
}

/// [Custom snapshot and AMI policies only] Specifies optional parameters for snapshot and AMI policies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameters {
    /// [Custom snapshot policies that target instances only] Indicates whether to exclude the root volume from multi-volume snapshot sets.
    #[serde(rename = "ExcludeBootVolume", default, skip_serializing_if = "Option::is_none")]
    pub exclude_boot_volume: Option<Value<bool>>,

    /// [Custom snapshot policies that target instances only] The tags used to identify data (non-root) volumes to exclude from multi-volume snapshot sets.
    ///
    /// Items: at most 50
    #[serde(rename = "ExcludeDataVolumeTags", default, skip_serializing_if = "Option::is_none")]
    pub exclude_data_volume_tags: Option<List<Tag>>,

    /// [Custom AMI policies only] Indicates whether targeted instances are rebooted when the lifecycle policy runs.
    #[serde(rename = "NoReboot", default, skip_serializing_if = "Option::is_none")]
    pub no_reboot: Option<Value<bool>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyDetails {
    /// [Event-based policies only] The actions to be performed when the event-based policy is activated.
    ///
    /// Items: exactly 1
    #[serde(rename = "Actions", default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<List<Action>>,

    /// [Default policies only] Indicates whether the policy should copy tags from the source resource to the snapshot or AMI.
    #[serde(rename = "CopyTags", default, skip_serializing_if = "Option::is_none")]
    pub copy_tags: Option<Value<bool>>,

    /// [Default policies only] Specifies how often the policy should run and create snapshots or AMIs, in days.
    ///
    /// Value: at least 1
    #[serde(rename = "CreateInterval", default, skip_serializing_if = "Option::is_none")]
    pub create_interval: Option<Value<i64>>,

    /// [Default policies only] Specifies destination Regions for snapshot or AMI copies.
    ///
    /// Items: at most 3
    #[serde(rename = "CrossRegionCopyTargets", default, skip_serializing_if = "Option::is_none")]
    pub cross_region_copy_targets: Option<List<CrossRegionCopyTarget>>,

    /// [Event-based policies only] Specifies an event that activates an event-based policy.
    #[serde(rename = "EventSource", default, skip_serializing_if = "Option::is_none")]
    pub event_source: Option<Value<EventSource>>,

    /// [Default policies only] Specifies exclusion parameters for volumes or instances for which you do not want to create snapshots or AMIs.
    #[serde(rename = "Exclusions", default, skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Value<Exclusions>>,

    /// [Default policies only] Defines what happens to the snapshots or AMIs created by the policy if source resources are deleted.
    #[serde(rename = "ExtendDeletion", default, skip_serializing_if = "Option::is_none")]
    pub extend_deletion: Option<Value<bool>>,

    /// [Custom snapshot and AMI policies only] Specifies optional parameters for snapshot and AMI policies.
    #[serde(rename = "Parameters", default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value<Parameters>>,

    /// The type of policy to create. Specify SIMPLIFIED to create a default policy, or STANDARD to create a custom policy.
    ///
    /// Allowed values: SIMPLIFIED | STANDARD
    #[serde(rename = "PolicyLanguage", default, skip_serializing_if = "Option::is_none")]
    pub policy_language: Option<Value<String>>,

    /// The type of policy to create.
    ///
    /// Allowed values: EBS_SNAPSHOT_MANAGEMENT | IMAGE_MANAGEMENT | EVENT_BASED_POLICY
    #[serde(rename = "PolicyType", default, skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<Value<String>>,

    /// [Custom snapshot and AMI policies only] The location of the resources to backup.
    #[serde(rename = "ResourceLocations", default, skip_serializing_if = "Option::is_none")]
    pub resource_locations: Option<List<String>>,

    /// [Default policies only] Specify the type of default policy to create.
    ///
    /// Allowed values: VOLUME | INSTANCE
    #[serde(rename = "ResourceType", default, skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<Value<String>>,

    /// [Custom snapshot policies only] The target resource type for snapshot and AMI lifecycle policies.
    #[serde(rename = "ResourceTypes", default, skip_serializing_if = "Option::is_none")]
    pub resource_types: Option<List<String>>,

    /// [Default policies only] Specifies how long the policy should retain snapshots or AMIs before deleting them, in days.
    ///
    /// Value: 2 to 14
    #[serde(rename = "RetainInterval", default, skip_serializing_if = "Option::is_none")]
    pub retain_interval: Option<Value<i64>>,

    /// [Custom snapshot and AMI policies only] The schedules of policy-defined actions for snapshot and AMI lifecycle policies.
    ///
    /// Items: 1 to 4
    #[serde(rename = "Schedules", default, skip_serializing_if = "Option::is_none")]
    pub schedules: Option<List<Schedule>>,

    /// [Custom snapshot and AMI policies only] The single tag that identifies targeted resources for this policy.
    ///
    /// Items: 1 to 50
    #[serde(rename = "TargetTags", default, skip_serializing_if = "Option::is_none")]
    pub target_tags: Option<List<Tag>>,
}

/// Specifies a retention rule for snapshots created by snapshot policies, or for AMIs created by AMI policies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetainRule {
    /// The number of snapshots to retain for each volume, up to a maximum of 1000.
    ///
    /// Value: 0 to 1000
    #[serde(rename = "Count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Value<i64>>,

    /// The amount of time to retain each snapshot.
    ///
    /// Value: at least 1
    #[serde(rename = "Interval", default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<Value<i64>>,

    /// The unit of time for time-based retention.
    ///
    /// Allowed values: DAYS | WEEKS | MONTHS | YEARS
    #[serde(rename = "IntervalUnit", default, skip_serializing_if = "Option::is_none")]
    pub interval_unit: Option<Value<String>>,
}

/// [Custom snapshot policies only] Describes the retention rule for archived snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RetentionArchiveTier {
    /// The maximum number of snapshots to retain in the archive storage tier for each volume.
    ///
    /// Value: 1 to 1000
    #[serde(rename = "Count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<Value<i64>>,

    /// Specifies the period of time to retain snapshots in the archive tier.
    ///
    /// Value: at least 1
    #[serde(rename = "Interval", default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<Value<i64>>,

    /// The unit of time in which to measure the Interval.
    ///
    /// Allowed values: DAYS | WEEKS | MONTHS | YEARS
    #[serde(rename = "IntervalUnit", default, skip_serializing_if = "Option::is_none")]
    pub interval_unit: Option<Value<String>>,
}

/// Specifies a schedule for a snapshot or AMI lifecycle policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schedule {
    /// [Custom snapshot policies only] Specifies a snapshot archiving rule for a schedule.
    #[serde(rename = "ArchiveRule", default, skip_serializing_if = "Option::is_none")]
    pub archive_rule: Option<Value<ArchiveRule>>,

    /// Copy all user-defined tags on a source volume to snapshots of the volume created by this policy.
    #[serde(rename = "CopyTags", default, skip_serializing_if = "Option::is_none")]
    pub copy_tags: Option<Value<bool>>,

    /// Specifies when the policy should create snapshots or AMIs.
    #[serde(rename = "CreateRule", default, skip_serializing_if = "Option::is_none")]
    pub create_rule: Option<Value<CreateRule>>,

    /// Specifies a rule for copying snapshots or AMIs across regions.
    ///
    /// Items: at most 3
    #[serde(rename = "CrossRegionCopyRules", default, skip_serializing_if = "Option::is_none")]
    pub cross_region_copy_rules: Option<List<CrossRegionCopyRule>>,

    /// [Custom AMI policies only] Specifies an AMI deprecation rule for AMIs created by an AMI lifecycle policy.
    #[serde(rename = "DeprecateRule", default, skip_serializing_if = "Option::is_none")]
    pub deprecate_rule: Option<Value<DeprecateRule>>,

    /// Specifies a rule for enabling fast snapshot restore for snapshots created by snapshot policies.
    #[serde(rename = "FastRestoreRule", default, skip_serializing_if = "Option::is_none")]
    pub fast_restore_rule: Option<Value<FastRestoreRule>>,

    /// The name of the schedule.
    ///
    /// Pattern: `^[0-9A-Za-z _-]+$`
    /// Length: 0 to 120
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value<String>>,

    /// Specifies a retention rule for snapshots created by snapshot policies, or for AMIs created by AMI policies.
    #[serde(rename = "RetainRule", default, skip_serializing_if = "Option::is_none")]
    pub retain_rule: Option<Value<RetainRule>>,

    /// Specifies a rule for sharing snapshots across AWS accounts.
    #[serde(rename = "ShareRules", default, skip_serializing_if = "Option::is_none")]
    pub share_rules: Option<List<ShareRule>>,

    /// The tags to apply to policy-created resources.
    ///
    /// Items: at most 45
    #[serde(rename = "TagsToAdd", default, skip_serializing_if = "Option::is_none")]
    pub tags_to_add: Option<List<Tag>>,

    /// The AMI-specific tags to apply to the resources that are created by the policy.
    ///
    /// Items: at most 45
    #[serde(rename = "VariableTags", default, skip_serializing_if = "Option::is_none")]
    pub variable_tags: Option<List<Tag>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Indicates whether Amazon Data Lifecycle Manager should default to crash-consistent snapshots if the pre script fails.
    #[serde(
        rename = "ExecuteOperationOnScriptFailure",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub execute_operation_on_script_failure: Option<Value<bool>>,

    /// The SSM document that includes the pre and/or post scripts to run.
    ///
    /// Pattern: `^([a-zA-Z0-9_\-.]{3,128}|[a-zA-Z0-9_\-.:/]{3,200}|[A-Z0-9_]+)$`
    /// Length: 0 to 200
    #[serde(rename = "ExecutionHandler", default, skip_serializing_if = "Option::is_none")]
    pub execution_handler: Option<Value<String>>,

    /// Indicates the service used to execute the pre and/or post scripts.
    ///
    /// Allowed values: AWS_SYSTEMS_MANAGER
    #[serde(rename = "ExecutionHandlerService", default, skip_serializing_if = "Option::is_none")]
    pub execution_handler_service: Option<Value<String>>,

    /// Specifies a timeout period, in seconds, after which Amazon Data Lifecycle Manager fails the script run attempt if it has not completed.
    ///
    /// Value: 10 to 120
    #[serde(rename = "ExecutionTimeout", default, skip_serializing_if = "Option::is_none")]
    pub execution_timeout: Option<Value<i64>>,

    /// Specifies the number of times Amazon Data Lifecycle Manager should retry scripts that fail.
    ///
    /// Value: 0 to 3
    #[serde(rename = "MaximumRetryCount", default, skip_serializing_if = "Option::is_none")]
    pub maximum_retry_count: Option<Value<i64>>,

    /// Indicate which scripts Amazon Data Lifecycle Manager should run on target instances.
    ///
    /// Items: 1 to 2
    #[serde(rename = "Stages", default, skip_serializing_if = "Option::is_none")]
    pub stages: Option<List<String>>,
}

/// Specifies a rule for sharing snapshots across AWS accounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShareRule {
    /// The IDs of the AWS accounts with which to share the snapshots.
    ///
    /// Items: at least 1
    #[serde(rename = "TargetAccounts", default, skip_serializing_if = "Option::is_none")]
    pub target_accounts: Option<List<String>>,

    /// The period after which snapshots that are shared with other AWS accounts are automatically unshared.
    ///
    /// Value: at least 1
    #[serde(rename = "UnshareInterval", default, skip_serializing_if = "Option::is_none")]
    pub unshare_interval: Option<Value<i64>>,

    /// The unit of time for the automatic unsharing interval.
    ///
    /// Allowed values: DAYS | WEEKS | MONTHS | YEARS
    #[serde(rename = "UnshareIntervalUnit", default, skip_serializing_if = "Option::is_none")]
    pub unshare_interval_unit: Option<Value<String>>,
}

/// Resource Type definition for AWS::DLM::LifecyclePolicy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LifecyclePolicyProperties {
    /// [Default policies only] Indicates whether the policy should copy tags from the source resource to the snapshot or AMI.
    #[serde(rename = "CopyTags", default, skip_serializing_if = "Option::is_none")]
    pub copy_tags: Option<Value<bool>>,

    /// [Default policies only] Specifies how often the policy should run and create snapshots or AMIs, in days.
    ///
    /// Value: at least 1
    #[serde(rename = "CreateInterval", default, skip_serializing_if = "Option::is_none")]
    pub create_interval: Option<Value<i64>>,

    /// [Default policies only] Specifies destination Regions for snapshot or AMI copies.
    ///
    /// Items: at most 3
    #[serde(rename = "CrossRegionCopyTargets", default, skip_serializing_if = "Option::is_none")]
    pub cross_region_copy_targets: Option<List<CrossRegionCopyTarget>>,

    /// [Default policies only] The type of default policy to create.
    ///
    /// Allowed values: VOLUME | INSTANCE
    /// Update requires: Replacement
    #[serde(rename = "DefaultPolicy", default, skip_serializing_if = "Option::is_none")]
    pub default_policy: Option<Value<String>>,

    /// A description of the lifecycle policy. The characters ^[0-9A-Za-z _-]+$ are supported.
    ///
    /// Pattern: `[0-9A-Za-z _-]+`
    /// Length: 0 to 500
    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Value<String>>,

    /// [Default policies only] Specifies exclusion parameters for volumes or instances for which you do not want to create snapshots or AMIs.
    #[serde(rename = "Exclusions", default, skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Value<Exclusions>>,

    /// The Amazon Resource Name (ARN) of the IAM role used to run the operations specified by the lifecycle policy.
    ///
    /// Pattern: `arn:aws(-[a-z]{1,3}){0,2}:iam::\d+:role/.*`
    /// Length: 0 to 2048
    #[serde(rename = "ExecutionRoleArn", default, skip_serializing_if = "Option::is_none")]
    pub execution_role_arn: Option<Value<String>>,

    /// [Default policies only] Defines what happens to the snapshots or AMIs created by the policy if source resources are deleted.
    #[serde(rename = "ExtendDeletion", default, skip_serializing_if = "Option::is_none")]
    pub extend_deletion: Option<Value<bool>>,

    #[serde(rename = "PolicyDetails", default, skip_serializing_if = "Option::is_none")]
    pub policy_details: Option<Value<PolicyDetails>>,

    /// [Default policies only] Specifies how long the policy should retain snapshots or AMIs before deleting them, in days.
    ///
    /// Value: 2 to 14
    #[serde(rename = "RetainInterval", default, skip_serializing_if = "Option::is_none")]
    pub retain_interval: Option<Value<i64>>,

    /// The activation state of the lifecycle policy.
    ///
    /// Allowed values: ENABLED | DISABLED | ERROR
    #[serde(rename = "State", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Value<String>>,

    /// The tags to apply to the lifecycle policy during creation.
    ///
    /// Items: at most 45
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<List<Tag>>,
}

impl ResourceProperties for LifecyclePolicyProperties {
    const TYPE_NAME: &'static str = "AWS::DLM::LifecyclePolicy";
}
