//! appmesh_virtual_node typed declarations
//!
//! Auto-generated from CloudFormation schema: AWS::AppMesh::VirtualNode
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::resource::ResourceProperties;
use cfnkit_core::value::{List, Tag, Value};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessLog {
    #[serde(rename = "File", default, skip_serializing_if = "Option::is_none")]
    pub file: Option<Value<FileAccessLog>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AwsCloudMapInstanceAttribute {
    #[serde(rename = "Key")]
    pub key: Value<String>,

    #[serde(rename = "Value")]
    pub value: Value<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AwsCloudMapServiceDiscovery {
    #[serde(rename = "Attributes", default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<List<AwsCloudMapInstanceAttribute>>,

    /// Allowed values: IPv6_PREFERRED | IPv4_PREFERRED | IPv4_ONLY | IPv6_ONLY
    #[serde(rename = "IpPreference", default, skip_serializing_if = "Option::is_none")]
    pub ip_preference: Option<Value<String>>,

    #[serde(rename = "NamespaceName")]
    pub namespace_name: Value<String>,

    #[serde(rename = "ServiceName")]
    pub service_name: Value<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Backend {
    #[serde(rename = "VirtualService", default, skip_serializing_if = "Option::is_none")]
    pub virtual_service: Option<Value<VirtualServiceBackend>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendDefaults {
    #[serde(rename = "ClientPolicy", default, skip_serializing_if = "Option::is_none")]
    pub client_policy: Option<Value<ClientPolicy>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientPolicy {
    #[serde(rename = "TLS", default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<Value<ClientPolicyTls>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientPolicyTls {
    #[serde(rename = "Certificate", default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<Value<ClientTlsCertificate>>,

    #[serde(rename = "Enforce", default, skip_serializing_if = "Option::is_none")]
    pub enforce: Option<Value<bool>>,

    #[serde(rename = "Ports", default, skip_serializing_if = "Option::is_none")]
    pub ports: Option<List<i64>>,

    #[serde(rename = "Validation")]
    pub validation: Value<TlsValidationContext>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientTlsCertificate {
    #[serde(rename = "File", default, skip_serializing_if = "Option::is_none")]
    pub file: Option<Value<ListenerTlsFileCertificate>>,

    #[serde(rename = "SDS", default, skip_serializing_if = "Option::is_none")]
    pub sds: Option<Value<ListenerTlsSdsCertificate>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DnsServiceDiscovery {
    #[serde(rename = "Hostname")]
    pub hostname: Value<String>,

    /// Allowed values: IPv6_PREFERRED | IPv4_PREFERRED | IPv4_ONLY | IPv6_ONLY
    #[serde(rename = "IpPreference", default, skip_serializing_if = "Option::is_none")]
    pub ip_preference: Option<Value<String>>,

    /// Allowed values: LOADBALANCER | ENDPOINTS
    #[serde(rename = "ResponseType", default, skip_serializing_if = "Option::is_none")]
    pub response_type: Option<Value<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Duration {
    /// Allowed values: s | ms
    #[serde(rename = "Unit")]
    pub unit: Value<String>,

    /// Value: at least 0
    #[serde(rename = "Value")]
    pub value: Value<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileAccessLog {
    #[serde(rename = "Format", default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Value<LoggingFormat>>,

    #[serde(rename = "Path")]
    pub path: Value<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrpcTimeout {
    #[serde(rename = "Idle", default, skip_serializing_if = "Option::is_none")]
    pub idle: Option<Value<Duration>>,

    #[serde(rename = "PerRequest", default, skip_serializing_if = "Option::is_none")]
    pub per_request: Option<Value<Duration>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthCheck {
    /// Value: 2 to 10
    #[serde(rename = "HealthyThreshold")]
    pub healthy_threshold: Value<i64>,

    /// Value: 5000 to 300000
    #[serde(rename = "IntervalMillis")]
    pub interval_millis: Value<i64>,

    #[serde(rename = "Path", default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Value<String>>,

    /// Value: 1 to 65535
    #[serde(rename = "Port", default, skip_serializing_if = "Option::is_none")]
    pub port: Option<Value<i64>>,

    /// Allowed values: http | tcp | http2 | grpc
    #[serde(rename = "Protocol")]
    pub protocol: Value<String>,

    /// Value: 2000 to 60000
    #[serde(rename = "TimeoutMillis")]
    pub timeout_millis: Value<i64>,

    /// Value: 2 to 10
    #[serde(rename = "UnhealthyThreshold")]
    pub unhealthy_threshold: Value<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpTimeout {
    #[serde(rename = "Idle", default, skip_serializing_if = "Option::is_none")]
    pub idle: Option<Value<Duration>>,

    #[serde(rename = "PerRequest", default, skip_serializing_if = "Option::is_none")]
    pub per_request: Option<Value<Duration>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JsonFormatRef {
    #[serde(rename = "Key")]
    pub key: Value<String>,

    #[serde(rename = "Value")]
    pub value: Value<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Listener {
    #[serde(rename = "ConnectionPool", default, skip_serializing_if = "Option::is_none")]
    pub connection_pool: Option<Value<VirtualNodeConnectionPool>>,

    #[serde(rename = "HealthCheck", default, skip_serializing_if = "Option::is_none")]
    pub health_check: Option<Value<HealthCheck>>,

    #[serde(rename = "OutlierDetection", default, skip_serializing_if = "Option::is_none")]
    pub outlier_detection: Option<Value<OutlierDetection>>,

    #[serde(rename = "PortMapping")]
    pub port_mapping: Value<PortMapping>,

    #[serde(rename = "TLS", default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<Value<ListenerTls>>,

    #[serde(rename = "Timeout", default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Value<ListenerTimeout>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListenerTimeout {
    #[serde(rename = "GRPC", default, skip_serializing_if = "Option::is_none")]
    pub grpc: Option<Value<GrpcTimeout>>,

    #[serde(rename = "HTTP", default, skip_serializing_if = "Option::is_none")]
    pub http: Option<Value<HttpTimeout>>,

    #[serde(rename = "HTTP2", default, skip_serializing_if = "Option::is_none")]
    pub http2: Option<Value<HttpTimeout>>,

    #[serde(rename = "TCP", default, skip_serializing_if = "Option::is_none")]
    pub tcp: Option<Value<TcpTimeout>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListenerTls {
    #[serde(rename = "Certificate")]
    pub certificate: Value<ListenerTlsCertificate>,

    /// Allowed values: STRICT | PERMISSIVE | DISABLED
    #[serde(rename = "Mode")]
    pub mode: Value<String>,

    #[serde(rename = "Validation", default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<Value<ListenerTlsValidationContext>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListenerTlsAcmCertificate {
    #[serde(rename = "CertificateArn")]
    pub certificate_arn: Value<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListenerTlsCertificate {
    #[serde(rename = "ACM", default, skip_serializing_if = "Option::is_none")]
    pub acm: Option<Value<ListenerTlsAcmCertificate>>,

    #[serde(rename = "File", default, skip_serializing_if = "Option::is_none")]
    pub file: Option<Value<ListenerTlsFileCertificate>>,

    #[serde(rename = "SDS", default, skip_serializing_if = "Option::is_none")]
    pub sds: Option<Value<ListenerTlsSdsCertificate>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListenerTlsFileCertificate {
    #[serde(rename = "CertificateChain")]
    pub certificate_chain: Value<String>,

    #[serde(rename = "PrivateKey")]
    pub private_key: Value<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListenerTlsSdsCertificate {
    #[serde(rename = "SecretName")]
    pub secret_name: Value<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListenerTlsValidationContext {
    #[serde(rename = "SubjectAlternativeNames", default, skip_serializing_if = "Option::is_none")]
    pub subject_alternative_names: Option<Value<SubjectAlternativeNames>>,

    #[serde(rename = "Trust")]
    pub trust: Value<ListenerTlsValidationContextTrust>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListenerTlsValidationContextTrust {
    #[serde(rename = "File", default, skip_serializing_if = "Option::is_none")]
    pub file: Option<Value<TlsValidationContextFileTrust>>,

    #[serde(rename = "SDS", default, skip_serializing_if = "Option::is_none")]
    pub sds: Option<Value<TlsValidationContextSdsTrust>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Logging {
    #[serde(rename = "AccessLog", default, skip_serializing_if = "Option::is_none")]
    pub access_log: Option<Value<AccessLog>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingFormat {
    #[serde(rename = "Json", default, skip_serializing_if = "Option::is_none")]
    pub json: Option<List<JsonFormatRef>>,

    #[serde(rename = "Text", default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Value<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutlierDetection {
    #[serde(rename = "BaseEjectionDuration")]
    pub base_ejection_duration: Value<Duration>,

    #[serde(rename = "Interval")]
    pub interval: Value<Duration>,

    /// Value: 0 to 100
    #[serde(rename = "MaxEjectionPercent")]
    pub max_ejection_percent: Value<i64>,

    /// Value: at least 1
    #[serde(rename = "MaxServerErrors")]
    pub max_server_errors: Value<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortMapping {
    /// Value: 1 to 65535
    #[serde(rename = "Port")]
    pub port: Value<i64>,

    /// Allowed values: http | tcp | http2 | grpc
    #[serde(rename = "Protocol")]
    pub protocol: Value<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceDiscovery {
    #[serde(rename = "AWSCloudMap", default, skip_serializing_if = "Option::is_none")]
    pub aws_cloud_map: Option<Value<AwsCloudMapServiceDiscovery>>,

    #[serde(rename = "DNS", default, skip_serializing_if = "Option::is_none")]
    pub dns: Option<Value<DnsServiceDiscovery>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubjectAlternativeNameMatchers {
    #[serde(rename = "Exact", default, skip_serializing_if = "Option::is_none")]
    pub exact: Option<List<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubjectAlternativeNames {
    #[serde(rename = "Match")]
    pub r#match: Value<SubjectAlternativeNameMatchers>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TcpTimeout {
    #[serde(rename = "Idle", default, skip_serializing_if = "Option::is_none")]
    pub idle: Option<Value<Duration>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TlsValidationContext {
    #[serde(rename = "SubjectAlternativeNames", default, skip_serializing_if = "Option::is_none")]
    pub subject_alternative_names: Option<Value<SubjectAlternativeNames>>,

    #[serde(rename = "Trust")]
    pub trust: Value<TlsValidationContextTrust>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TlsValidationContextAcmTrust {
    #[serde(rename = "CertificateAuthorityArns")]
    pub certificate_authority_arns: List<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TlsValidationContextFileTrust {
    #[serde(rename = "CertificateChain")]
    pub certificate_chain: Value<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TlsValidationContextSdsTrust {
    #[serde(rename = "SecretName")]
    pub secret_name: Value<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TlsValidationContextTrust {
    #[serde(rename = "ACM", default, skip_serializing_if = "Option::is_none")]
    pub acm: Option<Value<TlsValidationContextAcmTrust>>,

    #[serde(rename = "File", default, skip_serializing_if = "Option::is_none")]
    pub file: Option<Value<TlsValidationContextFileTrust>>,

    #[serde(rename = "SDS", default, skip_serializing_if = "Option::is_none")]
    pub sds: Option<Value<TlsValidationContextSdsTrust>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VirtualNodeConnectionPool {
    #[serde(rename = "GRPC", default, skip_serializing_if = "Option::is_none")]
    pub grpc: Option<Value<VirtualNodeGrpcConnectionPool>>,

    #[serde(rename = "HTTP", default, skip_serializing_if = "Option::is_none")]
    pub http: Option<Value<VirtualNodeHttpConnectionPool>>,

    #[serde(rename = "HTTP2", default, skip_serializing_if = "Option::is_none")]
    pub http2: Option<Value<VirtualNodeHttp2ConnectionPool>>,

    #[serde(rename = "TCP", default, skip_serializing_if = "Option::is_none")]
    pub tcp: Option<Value<VirtualNodeTcpConnectionPool>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VirtualNodeGrpcConnectionPool {
    /// Value: at least 1
    #[serde(rename = "MaxRequests")]
    pub max_requests: Value<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VirtualNodeHttp2ConnectionPool {
    /// Value: at least 1
    #[serde(rename = "MaxRequests")]
    pub max_requests: Value<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VirtualNodeHttpConnectionPool {
    /// Value: at least 1
    #[serde(rename = "MaxConnections")]
    pub max_connections: Value<i64>,

    /// Value: at least 1
    #[serde(rename = "MaxPendingRequests", default, skip_serializing_if = "Option::is_none")]
    pub max_pending_requests: Option<Value<i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VirtualNodeSpec {
    #[serde(rename = "BackendDefaults", default, skip_serializing_if = "Option::is_none")]
    pub backend_defaults: Option<Value<BackendDefaults>>,

    #[serde(rename = "Backends", default, skip_serializing_if = "Option::is_none")]
    pub backends: Option<List<Backend>>,

    #[serde(rename = "Listeners", default, skip_serializing_if = "Option::is_none")]
    pub listeners: Option<List<Listener>>,

    #[serde(rename = "Logging", default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<Value<Logging>>,

    #[serde(rename = "ServiceDiscovery", default, skip_serializing_if = "Option::is_none")]
    pub service_discovery: Option<Value<ServiceDiscovery>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VirtualNodeTcpConnectionPool {
    /// Value: at least 1
    #[serde(rename = "MaxConnections")]
    pub max_connections: Value<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VirtualServiceBackend {
    #[serde(rename = "ClientPolicy", default, skip_serializing_if = "Option::is_none")]
    pub client_policy: Option<Value<ClientPolicy>>,

    #[serde(rename = "VirtualServiceName")]
    pub virtual_service_name: Value<String>,
}

/// Resource Type definition for AWS::AppMesh::VirtualNode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VirtualNodeProperties {
    /// Update requires: Replacement
    #[serde(rename = "MeshName")]
    pub mesh_name: Value<String>,

    /// Update requires: Replacement
    #[serde(rename = "MeshOwner", default, skip_serializing_if = "Option::is_none")]
    pub mesh_owner: Option<Value<String>>,

    #[serde(rename = "Spec")]
    pub spec: Value<VirtualNodeSpec>,

    #[serde(rename = "Tags", default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<List<Tag>>,

    /// Update requires: Replacement
    #[serde(rename = "VirtualNodeName", default, skip_serializing_if = "Option::is_none")]
    pub virtual_node_name: Option<Value<String>>,
}

impl ResourceProperties for VirtualNodeProperties {
    const TYPE_NAME: &'static str = "AWS::AppMesh::VirtualNode";
}
