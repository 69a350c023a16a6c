//! fsx_file_system typed declarations
//!
//! Auto-generated from CloudFormation schema: AWS::FSx::FileSystem
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::resource::ResourceProperties;
use cfnkit_core::value::{List, Tag, Value};
use serde::{Deserialize, Serialize};

/// The configuration that Amazon FSx for Windows File Server uses to audit and log user accesses of files, folders, and file shares on the Amazon FSx for Windows File Server file system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditLogConfiguration {
    /// The Amazon Resource Name (ARN) for the destination of the audit logs.
    #[serde(rename = "AuditLogDestination", default, skip_serializing_if = "Option::is_none")]
    pub audit_log_destination: Option<Value<String>>,

    /// Sets which attempt type is logged by Amazon FSx for file and folder accesses.
    ///
    /// Allowed values: DISABLED | SUCCESS_ONLY | FAILURE_ONLY | SUCCESS_AND_FAILURE
    #[serde(rename = "FileAccessAuditLogLevel")]
    pub file_access_audit_log_level: Value<String>,

    /// Sets which attempt type is logged by Amazon FSx for file share accesses.
    ///
    /// Allowed values: DISABLED | SUCCESS_ONLY | FAILURE_ONLY | SUCCESS_AND_FAILURE
    #[serde(rename = "FileShareAccessAuditLogLevel")]
    pub file_share_access_audit_log_level: Value<String>,
}

/// Specifies who can mount an OpenZFS file system and the options available while mounting the file system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfiguration {
    /// A value that specifies who can mount the file system.
    ///
    /// Pattern: `^[ -~]{1,128}$`
    /// Length: 1 to 128
    #[serde(rename = "Clients")]
    pub clients: Value<String>,

    /// The options to use when mounting the file system.
    ///
    /// Items: 1 to 20
    #[serde(rename = "Options")]
    pub options: List<String>,
}

/// Specifies the optional provisioned SSD read cache on FSx for Lustre file systems that use the Intelligent-Tiering storage class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataReadCacheConfiguration {
    /// Required if SizingMode is set to USER_PROVISIONED. Specifies the size of the file system's SSD read cache, in gibibytes (GiB).
    #[serde(rename = "SizeGiB", default, skip_serializing_if = "Option::is_none")]
    pub size_gi_b: Option<Value<i64>>,

    /// Specifies how the provisioned SSD read cache is sized.
    ///
    /// Allowed values: NO_CACHE | USER_PROVISIONED | PROPORTIONAL_TO_THROUGHPUT_CAPACITY
    #[serde(rename = "SizingMode", default, skip_serializing_if = "Option::is_none")]
    pub sizing_mode: Option<Value<String>>,
}

/// The SSD IOPS (input/output operations per second) configuration for an Amazon FSx for NetApp ONTAP, Amazon FSx for Windows File Server, or FSx for OpenZFS file system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiskIopsConfiguration {
    /// The total number of SSD IOPS provisioned for the file system.
    ///
    /// Value: at least 0
    #[serde(rename = "Iops", default, skip_serializing_if = "Option::is_none")]
    pub iops: Option<Value<i64>>,

    /// Specifies whether the file system is using the AUTOMATIC setting of SSD IOPS of 3 IOPS per GB of storage capacity, or if it using a USER_PROVISIONED value.
    ///
    /// Allowed values: AUTOMATIC | USER_PROVISIONED
    #[serde(rename = "Mode", default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Value<String>>,
}

/// The Lustre configuration for the file system being created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LustreConfiguration {
    /// This parameter is not supported for file systems with a data repository association.
    ///
    /// Allowed values: NONE | NEW | NEW_CHANGED | NEW_CHANGED_DELETED
    #[serde(rename = "AutoImportPolicy", default, skip_serializing_if = "Option::is_none")]
    pub auto_import_policy: Option<Value<String>>,

    /// The number of days to retain automatic backups.
    ///
    /// Value: 0 to 90
    #[serde(
        rename = "AutomaticBackupRetentionDays",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub automatic_backup_retention_days: Option<Value<i64>>,

    /// If set to true, tags for the file system are copied to all automatic and user-initiated backups.
    #[serde(rename = "CopyTagsToBackups", default, skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_backups: Option<Value<bool>>,

    /// A recurring daily time, in the format HH:MM.
    ///
    /// Pattern: `^([01]\d|2[0-3]):?([0-5]\d)$`
    /// Length: exactly 5
    #[serde(
        rename = "DailyAutomaticBackupStartTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub daily_automatic_backup_start_time: Option<Value<String>>,

    /// Sets the data compression configuration for the file system.
    ///
    /// Allowed values: LZ4 | NONE
    #[serde(rename = "DataCompressionType", default, skip_serializing_if = "Option::is_none")]
    pub data_compression_type: Option<Value<String>>,

    /// Specifies the optional provisioned SSD read cache on FSx for Lustre file systems that use the Intelligent-Tiering storage class.
    #[serde(
        rename = "DataReadCacheConfiguration",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub data_read_cache_configuration: Option<Value<DataReadCacheConfiguration>>,

    /// Specifies the FSx for Lustre deployment type to use.
    ///
    /// Allowed values: SCRATCH_1 | SCRATCH_2 | PERSISTENT_1 | PERSISTENT_2
    /// Update requires: Replacement
    #[serde(rename = "DeploymentType", default, skip_serializing_if = "Option::is_none")]
    pub deployment_type: Option<Value<String>>,

    /// The type of drive cache used by PERSISTENT_1 file systems that are provisioned with HDD storage devices.
    ///
    /// Allowed values: NONE | READ
    /// Update requires: Replacement
    #[serde(rename = "DriveCacheType", default, skip_serializing_if = "Option::is_none")]
    pub drive_cache_type: Option<Value<String>>,

    /// (Optional) Specifies whether Elastic Fabric Adapter (EFA) and GPUDirect Storage (GDS) support is enabled for the Amazon FSx for Lustre file system.
    ///
    /// Update requires: Replacement
    #[serde(rename = "EfaEnabled", default, skip_serializing_if = "Option::is_none")]
    pub efa_enabled: Option<Value<bool>>,

    /// (Optional) Specifies the path in the Amazon S3 bucket where the root of your Amazon FSx file system is exported.
    ///
    /// Length: 3 to 4357
    /// Update requires: Replacement
    #[serde(rename = "ExportPath", default, skip_serializing_if = "Option::is_none")]
    pub export_path: Option<Value<String>>,

    /// (Optional) The path to the Amazon S3 bucket (including the optional prefix) that you're using as the data repository for your Amazon FSx for Lustre file system.
    ///
    /// Length: 3 to 4357
    /// Update requires: Replacement
    #[serde(rename = "ImportPath", default, skip_serializing_if = "Option::is_none")]
    pub import_path: Option<Value<String>>,

    /// (Optional) For files imported from a data repository, this value determines the stripe count and maximum amount of data per file (in MiB) stored on a single physical disk.
    ///
    /// Value: 1 to 512000
    /// Update requires: Replacement
    #[serde(rename = "ImportedFileChunkSize", default, skip_serializing_if = "Option::is_none")]
    pub imported_file_chunk_size: Option<Value<i64>>,

    /// The Lustre metadata performance configuration for the creation of an FSx for Lustre file system using a PERSISTENT_2 deployment type.
    #[serde(rename = "MetadataConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub metadata_configuration: Option<Value<MetadataConfiguration>>,

    /// Required with PERSISTENT_1 and PERSISTENT_2 deployment types, provisions the amount of read and write throughput for each 1 tebibyte (TiB) of file system storage capacity, in MB/s/TiB.
    #[serde(rename = "PerUnitStorageThroughput", default, skip_serializing_if = "Option::is_none")]
    pub per_unit_storage_throughput: Option<Value<i64>>,

    /// Specifies the throughput of an FSx for Lustre file system using the Intelligent-Tiering storage class, measured in megabytes per second (MBps).
    #[serde(rename = "ThroughputCapacity", default, skip_serializing_if = "Option::is_none")]
    pub throughput_capacity: Option<Value<i64>>,

    /// The preferred start time to perform weekly maintenance, formatted d:HH:MM in the UTC time zone.
    ///
    /// Pattern: `^[1-7]:([01]\d|2[0-3]):?([0-5]\d)$`
    /// Length: exactly 7
    #[serde(
        rename = "WeeklyMaintenanceStartTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub weekly_maintenance_start_time: Option<Value<String>>,
}

/// The Lustre metadata performance configuration for the creation of an FSx for Lustre file system using a PERSISTENT_2 deployment type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataConfiguration {
    /// The number of Metadata IOPS provisioned for the file system.
    ///
    /// Value: 1500 to 192000
    #[serde(rename = "Iops", default, skip_serializing_if = "Option::is_none")]
    pub iops: Option<Value<i64>>,

    /// The metadata configuration mode for provisioning Metadata IOPS for the file system.
    ///
    /// Allowed values: AUTOMATIC | USER_PROVISIONED
    #[serde(rename = "Mode", default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Value<String>>,
}

/// The configuration object for mounting a file system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NfsExport {
    /// A list of configuration objects that contain the client and options for mounting the OpenZFS file system.
    ///
    /// Items: at most 25
    #[serde(rename = "ClientConfigurations")]
    pub client_configurations: List<ClientConfiguration>,
}

/// The ONTAP configuration properties of the FSx for ONTAP file system that you are creating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OntapConfiguration {
    /// The number of days to retain automatic backups.
    ///
    /// Value: 0 to 90
    #[serde(
        rename = "AutomaticBackupRetentionDays",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub automatic_backup_retention_days: Option<Value<i64>>,

    /// A recurring daily time, in the format HH:MM.
    ///
    /// Pattern: `^([01]\d|2[0-3]):?([0-5]\d)$`
    /// Length: exactly 5
    #[serde(
        rename = "DailyAutomaticBackupStartTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub daily_automatic_backup_start_time: Option<Value<String>>,

    /// Specifies the FSx for ONTAP file system deployment type to use in creating the file system.
    ///
    /// Allowed values: MULTI_AZ_1 | SINGLE_AZ_1 | SINGLE_AZ_2 | MULTI_AZ_2
    /// Update requires: Replacement
    #[serde(rename = "DeploymentType")]
    pub deployment_type: Value<String>,

    /// The SSD IOPS (input/output operations per second) configuration for an Amazon FSx for NetApp ONTAP, Amazon FSx for Windows File Server, or FSx for OpenZFS file system.
    #[serde(rename = "DiskIopsConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub disk_iops_configuration: Option<Value<DiskIopsConfiguration>>,

    /// (Multi-AZ only) Specifies the IP address range in which the endpoints to access your file system will be created.
    ///
    /// Length: 9 to 17
    /// Update requires: Replacement
    #[serde(rename = "EndpointIpAddressRange", default, skip_serializing_if = "Option::is_none")]
    pub endpoint_ip_address_range: Option<Value<String>>,

    /// The ONTAP administrative password for the fsxadmin user with which you administer your file system using the NetApp ONTAP CLI and REST API.
    ///
    /// Pattern: `^[^\u0000\u0085\u2028\u2029\r\n]{8,50}$`
    /// Length: 8 to 50
    #[serde(rename = "FsxAdminPassword", default, skip_serializing_if = "Option::is_none")]
    pub fsx_admin_password: Option<Value<String>>,

    /// Specifies how many high-availability (HA) pairs of file servers will power your file system.
    ///
    /// Value: 1 to 12
    #[serde(rename = "HAPairs", default, skip_serializing_if = "Option::is_none")]
    pub ha_pairs: Option<Value<i64>>,

    /// Required when DeploymentType is set to MULTI_AZ_1 or MULTI_AZ_2. This specifies the subnet in which you want the preferred file server to be located.
    ///
    /// Update requires: Replacement
    #[serde(rename = "PreferredSubnetId", default, skip_serializing_if = "Option::is_none")]
    pub preferred_subnet_id: Option<Value<String>>,

    /// (Multi-AZ only) Specifies the route tables in which Amazon FSx creates the rules for routing traffic to the correct file server.
    ///
    /// Items: at most 50
    /// Items must be unique
    #[serde(rename = "RouteTableIds", default, skip_serializing_if = "Option::is_none")]
    pub route_table_ids: Option<List<String>>,

    /// Sets the throughput capacity for the file system that you're creating in megabytes per second (MBps).
    #[serde(rename = "ThroughputCapacity", default, skip_serializing_if = "Option::is_none")]
    pub throughput_capacity: Option<Value<i64>>,

    /// Use to choose the throughput capacity per HA pair, rather than the total throughput for the file system.
    ///
    /// Value: 128 to 6144
    #[serde(
        rename = "ThroughputCapacityPerHAPair",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub throughput_capacity_per_ha_pair: Option<Value<i64>>,

    /// The preferred start time to perform weekly maintenance, formatted d:HH:MM in the UTC time zone.
    ///
    /// Pattern: `^[1-7]:([01]\d|2[0-3]):?([0-5]\d)$`
    /// Length: exactly 7
    #[serde(
        rename = "WeeklyMaintenanceStartTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub weekly_maintenance_start_time: Option<Value<String>>,
}

/// The OpenZFS configuration for the file system that's being created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpenZfsConfiguration {
    /// The number of days to retain automatic backups.
    ///
    /// Value: 0 to 90
    #[serde(
        rename = "AutomaticBackupRetentionDays",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub automatic_backup_retention_days: Option<Value<i64>>,

    /// A Boolean value indicating whether tags for the file system should be copied to backups.
    #[serde(rename = "CopyTagsToBackups", default, skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_backups: Option<Value<bool>>,

    /// A Boolean value indicating whether tags for the file system should be copied to volumes.
    #[serde(rename = "CopyTagsToVolumes", default, skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_volumes: Option<Value<bool>>,

    /// A recurring daily time, in the format HH:MM.
    ///
    /// Pattern: `^([01]\d|2[0-3]):?([0-5]\d)$`
    /// Length: exactly 5
    #[serde(
        rename = "DailyAutomaticBackupStartTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub daily_automatic_backup_start_time: Option<Value<String>>,

    /// Specifies the file system deployment type.
    ///
    /// Allowed values: SINGLE_AZ_1 | SINGLE_AZ_2 | SINGLE_AZ_HA_1 | SINGLE_AZ_HA_2 | MULTI_AZ_1
    /// Update requires: Replacement
    #[serde(rename = "DeploymentType")]
    pub deployment_type: Value<String>,

    /// The SSD IOPS (input/output operations per second) configuration for an Amazon FSx for NetApp ONTAP, Amazon FSx for Windows File Server, or FSx for OpenZFS file system.
    #[serde(rename = "DiskIopsConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub disk_iops_configuration: Option<Value<DiskIopsConfiguration>>,

    /// (Multi-AZ only) Specifies the IP address range in which the endpoints to access your file system will be created.
    ///
    /// Length: 9 to 17
    #[serde(rename = "EndpointIpAddressRange", default, skip_serializing_if = "Option::is_none")]
    pub endpoint_ip_address_range: Option<Value<String>>,

    /// To delete a file system if there are child volumes present below the root volume, use the string DELETE_CHILD_VOLUMES_AND_SNAPSHOTS.
    ///
    /// Items: at most 1
    #[serde(rename = "Options", default, skip_serializing_if = "Option::is_none")]
    pub options: Option<List<String>>,

    /// Required when DeploymentType is set to MULTI_AZ_1. This specifies the subnet in which you want the preferred file server to be located.
    ///
    /// Update requires: Replacement
    #[serde(rename = "PreferredSubnetId", default, skip_serializing_if = "Option::is_none")]
    pub preferred_subnet_id: Option<Value<String>>,

    /// Specifies the optional provisioned SSD read cache on file systems that use the Intelligent-Tiering storage class.
    #[serde(rename = "ReadCacheConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub read_cache_configuration: Option<Value<ReadCacheConfiguration>>,

    /// The configuration Amazon FSx uses when creating the root value of the Amazon FSx for OpenZFS file system.
    #[serde(rename = "RootVolumeConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub root_volume_configuration: Option<Value<RootVolumeConfiguration>>,

    /// (Multi-AZ only) Specifies the route tables in which Amazon FSx creates the rules for routing traffic to the correct file server.
    ///
    /// Items: at most 50
    /// Items must be unique
    #[serde(rename = "RouteTableIds", default, skip_serializing_if = "Option::is_none")]
    pub route_table_ids: Option<List<String>>,

    /// Specifies the throughput of an Amazon FSx for OpenZFS file system, measured in megabytes per second (MBps).
    #[serde(rename = "ThroughputCapacity", default, skip_serializing_if = "Option::is_none")]
    pub throughput_capacity: Option<Value<i64>>,

    /// The preferred start time to perform weekly maintenance, formatted d:HH:MM in the UTC time zone.
    ///
    /// Pattern: `^[1-7]:([01]\d|2[0-3]):?([0-5]\d)$`
    /// Length: exactly 7
    #[serde(
        rename = "WeeklyMaintenanceStartTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub weekly_maintenance_start_time: Option<Value<String>>,
}

/// Specifies the optional provisioned SSD read cache on file systems that use the Intelligent-Tiering storage class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReadCacheConfiguration {
    /// Required if SizingMode is set to USER_PROVISIONED. Specifies the size of the file system's SSD read cache, in gibibytes (GiB).
    #[serde(rename = "SizeGiB", default, skip_serializing_if = "Option::is_none")]
    pub size_gi_b: Option<Value<i64>>,

    /// Specifies how the provisioned SSD read cache is sized.
    ///
    /// Allowed values: NO_CACHE | USER_PROVISIONED | PROPORTIONAL_TO_THROUGHPUT_CAPACITY
    #[serde(rename = "SizingMode", default, skip_serializing_if = "Option::is_none")]
    pub sizing_mode: Option<Value<String>>,
}

/// The configuration Amazon FSx uses when creating the root value of the Amazon FSx for OpenZFS file system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RootVolumeConfiguration {
    /// A Boolean value indicating whether tags for the volume should be copied to snapshots of the volume.
    #[serde(rename = "CopyTagsToSnapshots", default, skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_snapshots: Option<Value<bool>>,

    /// Specifies the method used to compress the data on the volume.
    ///
    /// Allowed values: NONE | ZSTD | LZ4
    /// Update requires: Replacement
    #[serde(rename = "DataCompressionType", default, skip_serializing_if = "Option::is_none")]
    pub data_compression_type: Option<Value<String>>,

    /// The configuration object for mounting a file system.
    ///
    /// Items: at most 1
    #[serde(rename = "NfsExports", default, skip_serializing_if = "Option::is_none")]
    pub nfs_exports: Option<List<NfsExport>>,

    /// A Boolean value indicating whether the volume is read-only.
    #[serde(rename = "ReadOnly", default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<Value<bool>>,

    /// Specifies the record size of an OpenZFS root volume, in kibibytes (KiB).
    ///
    /// Allowed values: 4 | 8 | 16 | 32 | 64 | 128 | 256 | 512 | 1024
    /// Update requires: Replacement
    #[serde(rename = "RecordSizeKiB", default, skip_serializing_if = "Option::is_none")]
    pub record_size_ki_b: Option<Value<i64>>,

    /// An object specifying how much storage users or groups can use on the volume.
    ///
    /// Items: at most 500
    #[serde(rename = "UserAndGroupQuotas", default, skip_serializing_if = "Option::is_none")]
    pub user_and_group_quotas: Option<List<UserAndGroupQuotasItem>>,
}

/// The configuration that Amazon FSx uses to join a FSx for Windows File Server file system or an FSx for ONTAP storage virtual machine (SVM) to a self-managed (including on-premises) Microsoft Active Directory (AD) directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelfManagedActiveDirectoryConfiguration {
    /// A list of up to three IP addresses of DNS servers or domain controllers in the self-managed AD directory.
    ///
    /// Items: 1 to 3
    #[serde(rename = "DnsIps", default, skip_serializing_if = "Option::is_none")]
    pub dns_ips: Option<List<String>>,

    /// The Amazon Resource Name (ARN) of the AWS Secrets Manager secret that contains the self-managed Active Directory domain join service account credentials.
    #[serde(
        rename = "DomainJoinServiceAccountSecret",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub domain_join_service_account_secret: Option<Value<String>>,

    /// The fully qualified domain name of the self-managed AD directory, such as corp.example.com.
    ///
    /// Length: 1 to 255
    #[serde(rename = "DomainName", default, skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<Value<String>>,

    /// (Optional) The name of the domain group whose members are granted administrative privileges for the file system.
    ///
    /// Length: 1 to 256
    #[serde(
        rename = "FileSystemAdministratorsGroup",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub file_system_administrators_group: Option<Value<String>>,

    /// (Optional) The fully qualified distinguished name of the organizational unit within your self-managed AD directory.
    ///
    /// Length: 1 to 2000
    #[serde(
        rename = "OrganizationalUnitDistinguishedName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub organizational_unit_distinguished_name: Option<Value<String>>,

    /// The password for the service account on your self-managed AD domain that Amazon FSx will use to join to your AD domain.
    ///
    /// Length: 1 to 256
    #[serde(rename = "Password", default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Value<String>>,

    /// The user name for the service account on your self-managed AD domain that Amazon FSx will use to join to your AD domain.
    ///
    /// Length: 1 to 256
    #[serde(rename = "UserName", default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<Value<String>>,
}

/// Used to configure quotas that define how much storage a user or group can use on an FSx for OpenZFS volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserAndGroupQuotasItem {
    /// The ID of the user or group that the quota applies to.
    ///
    /// Value: at least 0
    #[serde(rename = "Id")]
    pub id: Value<i64>,

    /// The user or group's storage quota, in gibibytes (GiB).
    ///
    /// Value: at least 0
    #[serde(rename = "StorageCapacityQuotaGiB")]
    pub storage_capacity_quota_gi_b: Value<i64>,

    /// Specifies whether the quota applies to a user or group.
    ///
    /// Allowed values: USER | GROUP
    #[serde(rename = "Type")]
    pub r#type: Value<String>,
}

/// The Microsoft Windows configuration for the file system that's being created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowsConfiguration {
    /// The ID for an existing AWS Managed Microsoft Active Directory (AD) instance that the file system should join when it's created.
    ///
    /// Pattern: `^d-[0-9a-f]{10}$`
    /// Length: exactly 12
    /// Update requires: Replacement
    #[serde(rename = "ActiveDirectoryId", default, skip_serializing_if = "Option::is_none")]
    pub active_directory_id: Option<Value<String>>,

    /// An array of one or more DNS alias names that you want to associate with the Amazon FSx file system.
    ///
    /// Items: at most 50
    #[serde(rename = "Aliases", default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<List<String>>,

    /// The configuration that Amazon FSx for Windows File Server uses to audit and log user accesses of files, folders, and file shares on the Amazon FSx for Windows File Server file system.
    #[serde(rename = "AuditLogConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub audit_log_configuration: Option<Value<AuditLogConfiguration>>,

    /// The number of days to retain automatic backups.
    ///
    /// Value: 0 to 90
    #[serde(
        rename = "AutomaticBackupRetentionDays",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub automatic_backup_retention_days: Option<Value<i64>>,

    /// A boolean flag indicating whether tags for the file system should be copied to backups.
    #[serde(rename = "CopyTagsToBackups", default, skip_serializing_if = "Option::is_none")]
    pub copy_tags_to_backups: Option<Value<bool>>,

    /// A recurring daily time, in the format HH:MM.
    ///
    /// Pattern: `^([01]\d|2[0-3]):?([0-5]\d)$`
    /// Length: exactly 5
    #[serde(
        rename = "DailyAutomaticBackupStartTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub daily_automatic_backup_start_time: Option<Value<String>>,

    /// Specifies the file system deployment type.
    ///
    /// Allowed values: MULTI_AZ_1 | SINGLE_AZ_1 | SINGLE_AZ_2
    /// Update requires: Replacement
    #[serde(rename = "DeploymentType", default, skip_serializing_if = "Option::is_none")]
    pub deployment_type: Option<Value<String>>,

    /// The SSD IOPS (input/output operations per second) configuration for an Amazon FSx for NetApp ONTAP, Amazon FSx for Windows File Server, or FSx for OpenZFS file system.
    #[serde(rename = "DiskIopsConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub disk_iops_configuration: Option<Value<DiskIopsConfiguration>>,

    /// Required when DeploymentType is set to MULTI_AZ_1. This specifies the subnet in which you want the preferred file server to be located.
    ///
    /// Update requires: Replacement
    #[serde(rename = "PreferredSubnetId", default, skip_serializing_if = "Option::is_none")]
    pub preferred_subnet_id: Option<Value<String>>,

    /// The configuration that Amazon FSx uses to join a FSx for Windows File Server file system or an FSx for ONTAP storage virtual machine (SVM) to a self-managed (including on-premises) Microsoft Active Directory (AD) directory.
    ///
    /// Update requires: Replacement
    #[serde(
        rename = "SelfManagedActiveDirectoryConfiguration",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub self_managed_active_directory_configuration: Option<Value<SelfManagedActiveDirectoryConfiguration>>,

    /// Sets the throughput capacity of an Amazon FSx file system, measured in megabytes per second (MB/s), in 2 to the nth increments, between 2^3 (8) and 2^11 (2048).
    ///
    /// Value: 8 to 12288
    #[serde(rename = "ThroughputCapacity")]
    pub throughput_capacity: Value<i64>,

    /// The preferred start time to perform weekly maintenance, formatted d:HH:MM in the UTC time zone, where d is the weekday number, from 1 through 7, beginning with Monday and ending with Sunday.
    ///
    /// Pattern: `^[1-7]:([01]\d|2[0-3]):?([0-5]\d)$`
    /// Length: exactly 7
    #[serde(
        rename = "WeeklyMaintenanceStartTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub weekly_maintenance_start_time: Option<Value<String>>,
}

/// Resource Type definition for AWS::FSx::FileSystem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSystemProperties {
    /// The ID of the file system backup that you are using to create a file system.
    ///
    /// Pattern: `^(backup-[0-9a-f]{8,})$`
    /// Length: 12 to 128
    /// Update requires: Replacement
    #[serde(rename = "BackupId", default, skip_serializing_if = "Option::is_none")]
    pub backup_id: Option<Value<String>>,

    /// The type of Amazon FSx file system, which can be LUSTRE, WINDOWS, ONTAP, or OPENZFS.
    ///
    /// Allowed values: LUSTRE | ONTAP | OPENZFS | WINDOWS
    /// Update requires: Replacement
    #[serde(rename = "FileSystemType")]
    pub file_system_type: Value<String>,

    /// For FSx for Lustre file systems, sets the Lustre version for the file system that you're creating.
    ///
    /// Pattern: `^[0-9](.[0-9]*)*$`
    /// Length: 1 to 20
    #[serde(rename = "FileSystemTypeVersion", default, skip_serializing_if = "Option::is_none")]
    pub file_system_type_version: Option<Value<String>>,

    /// The ID of the AWS Key Management Service (AWS KMS) key used to encrypt Amazon FSx file system data.
    ///
    /// Length: 1 to 2048
    /// Update requires: Replacement
    #[serde(rename = "KmsKeyId", default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<Value<String>>,

    /// The Lustre configuration for the file system being created.
    #[serde(rename = "LustreConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub lustre_configuration: Option<Value<LustreConfiguration>>,

    /// The network type of the file system.
    ///
    /// Allowed values: IPV4 | DUAL
    #[serde(rename = "NetworkType", default, skip_serializing_if = "Option::is_none")]
    pub network_type: Option<Value<String>>,

    /// The ONTAP configuration properties of the FSx for ONTAP file system that you are creating.
    #[serde(rename = "OntapConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub ontap_configuration: Option<Value<OntapConfiguration>>,

    /// The OpenZFS configuration for the file system that's being created.
    #[serde(rename = "OpenZFSConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub open_zfs_configuration: Option<Value<OpenZfsConfiguration>>,

    /// A list of IDs specifying the security groups to apply to all network interfaces created for file system access.
    ///
    /// Items: at most 50
    /// Update requires: Replacement
    #[serde(rename = "SecurityGroupIds", default, skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<List<String>>,

    /// Sets the storage capacity of the file system that you're creating, in gibibytes (GiB).
    ///
    /// Value: 0 to 2147483647
    #[serde(rename = "StorageCapacity", default, skip_serializing_if = "Option::is_none")]
    pub storage_capacity: Option<Value<i64>>,

    /// Sets the storage class for the file system that you're creating.
    ///
    /// Allowed values: SSD | HDD | INTELLIGENT_TIERING
    /// Update requires: Replacement
    #[serde(rename = "StorageType", default, skip_serializing_if = "Option::is_none")]
    pub storage_type: Option<Value<String>>,

    /// Specifies the IDs of the subnets that the file system will be accessible from.
    ///
    /// Items: at most 50
    /// Update requires: Replacement
    #[serde(rename = "SubnetIds")]
    pub subnet_ids: List<String>,

    /// The tags to associate with the file system.
    ///
    /// Items: at most 50
    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<List<Tag>>,

    /// The Microsoft Windows configuration for the file system that's being created.
    #[serde(rename = "WindowsConfiguration", default, skip_serializing_if = "Option::is_none")]
    pub windows_configuration: Option<Value<WindowsConfiguration>>,
}

impl ResourceProperties for FileSystemProperties {
    const TYPE_NAME: &'static str = "AWS::FSx::FileSystem";
}
