//! logs_transformer typed declarations
//!
//! Auto-generated from CloudFormation schema: AWS::Logs::Transformer
//!
//! DO NOT EDIT MANUALLY - regenerate with cfnkit-codegen

use cfnkit_core::resource::ResourceProperties;
use cfnkit_core::value::{List, Value};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddKeyEntry {
    /// The key of the new entry to be added to the log event
    ///
    /// Length: 1 to 128
    #[serde(rename = "Key")]
    pub key: Value<String>,

    /// Specifies whether to overwrite the value if the key already exists in the log event.
    #[serde(rename = "OverwriteIfExists", default, skip_serializing_if = "Option::is_none")]
    pub overwrite_if_exists: Option<Value<bool>>,

    /// The value of the new entry to be added to the log event
    ///
    /// Length: 1 to 256
    #[serde(rename = "Value")]
    pub value: Value<String>,
}

/// This processor adds new key-value pairs to the log event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddKeys {
    /// Items: 1 to 5
    /// Items must be unique
    #[serde(rename = "Entries")]
    pub entries: List<AddKeyEntry>,
}

/// This processor copies values within a log event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CopyValue {
    /// Items: 1 to 5
    /// Items must be unique
    #[serde(rename = "Entries")]
    pub entries: List<CopyValueEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CopyValueEntry {
    /// Specifies whether to overwrite the value if the destination key already exists.
    #[serde(rename = "OverwriteIfExists", default, skip_serializing_if = "Option::is_none")]
    pub overwrite_if_exists: Option<Value<bool>>,

    /// The key to copy.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Source")]
    pub source: Value<String>,

    /// The key of the field to copy the value to.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Target")]
    pub target: Value<String>,
}

/// The CSV processor parses comma-separated values (CSV) from the log events into columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Csv {
    /// An array of names to use for the columns in the transformed log event.
    ///
    /// Items: at most 100
    /// Items must be unique
    #[serde(rename = "Columns", default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<List<String>>,

    /// The character used to separate each column in the original comma-separated value log event.
    ///
    /// Length: at most 2
    #[serde(rename = "Delimiter", default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<Value<String>>,

    /// The character used as a text qualifier for a single column of data.
    ///
    /// Length: at most 1
    #[serde(rename = "QuoteCharacter", default, skip_serializing_if = "Option::is_none")]
    pub quote_character: Option<Value<String>>,

    /// The path to the field in the log event that has the comma separated values to be parsed.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value<String>>,
}

/// This processor converts a datetime string into a format that you specify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DateTimeConverter {
    /// The locale of the source field.
    ///
    /// Length: at least 1
    #[serde(rename = "Locale", default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<Value<String>>,

    /// A list of patterns to match against the source field.
    ///
    /// Items: 1 to 5
    /// Items must be unique
    #[serde(rename = "MatchPatterns")]
    pub match_patterns: List<String>,

    /// The key to apply the date conversion to.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Source")]
    pub source: Value<String>,

    /// The time zone of the source field.
    ///
    /// Length: at least 1
    #[serde(rename = "SourceTimezone", default, skip_serializing_if = "Option::is_none")]
    pub source_timezone: Option<Value<String>>,

    /// The JSON field to store the result in.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Target")]
    pub target: Value<String>,

    /// The datetime format to use for the converted data in the target field.
    ///
    /// Length: 1 to 64
    #[serde(rename = "TargetFormat", default, skip_serializing_if = "Option::is_none")]
    pub target_format: Option<Value<String>>,

    /// The time zone of the target field.
    ///
    /// Length: at least 1
    #[serde(rename = "TargetTimezone", default, skip_serializing_if = "Option::is_none")]
    pub target_timezone: Option<Value<String>>,
}

/// This processor deletes entries from a log event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteKeys {
    /// The list of keys to delete.
    ///
    /// Items: 1 to 5
    /// Items must be unique
    #[serde(rename = "WithKeys")]
    pub with_keys: List<String>,
}

/// This processor uses pattern matching to parse and structure unstructured data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Grok {
    /// The grok pattern to match against the log event.
    ///
    /// Length: 1 to 512
    #[serde(rename = "Match")]
    pub r#match: Value<String>,

    /// The path to the field in the log event that you want to parse.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value<String>>,
}

/// This processor takes a list of objects that contain key fields, and converts them into a map of target keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListToMap {
    /// A Boolean value to indicate whether the list will be flattened into single items.
    #[serde(rename = "Flatten", default, skip_serializing_if = "Option::is_none")]
    pub flatten: Option<Value<bool>>,

    /// If you set flatten to true, use flattenedElement to specify which element, first or last, to keep.
    ///
    /// Allowed values: first | last
    #[serde(rename = "FlattenedElement", default, skip_serializing_if = "Option::is_none")]
    pub flattened_element: Option<Value<String>>,

    /// The key of the field to be extracted as keys in the generated map.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Key")]
    pub key: Value<String>,

    /// The key in the log event that has a list of objects that will be converted to a map.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Source")]
    pub source: Value<String>,

    /// The key of the field that will hold the generated map.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Target", default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Value<String>>,

    /// If this is specified, the values that you specify in this parameter will be extracted from the source objects.
    ///
    /// Length: 1 to 128
    #[serde(rename = "ValueKey", default, skip_serializing_if = "Option::is_none")]
    pub value_key: Option<Value<String>>,
}

/// This processor converts a string to lowercase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LowerCaseString {
    /// The array caontaining the keys of the fields to convert to lowercase.
    ///
    /// Items: 1 to 10
    /// Items must be unique
    #[serde(rename = "WithKeys")]
    pub with_keys: List<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoveKeyEntry {
    /// Specifies whether to overwrite the value if the destination key already exists.
    #[serde(rename = "OverwriteIfExists", default, skip_serializing_if = "Option::is_none")]
    pub overwrite_if_exists: Option<Value<bool>>,

    /// The key to move.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Source")]
    pub source: Value<String>,

    /// The key to move to.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Target")]
    pub target: Value<String>,
}

/// This processor moves a key from one field to another. The original key is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoveKeys {
    /// Items: 1 to 5
    /// Items must be unique
    #[serde(rename = "Entries")]
    pub entries: List<MoveKeyEntry>,
}

/// This processor parses CloudFront vended logs, extract fields, and convert them into JSON format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseCloudfront {
    /// Omit this parameter and the whole log message will be processed by this processor.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value<String>>,
}

/// This processor parses log events that are in JSON format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseJson {
    /// The location to put the parsed key value pair into.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Destination", default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<Value<String>>,

    /// Path to the field in the log event that will be parsed.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value<String>>,
}

/// This processor parses a specified field in the original log event into key-value pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseKeyValue {
    /// The destination field to put the extracted key-value pairs into.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Destination", default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<Value<String>>,

    /// The field delimiter string that is used between key-value pairs in the original log events.
    ///
    /// Length: 1 to 128
    #[serde(rename = "FieldDelimiter", default, skip_serializing_if = "Option::is_none")]
    pub field_delimiter: Option<Value<String>>,

    /// If you want to add a prefix to all transformed keys, specify it here.
    ///
    /// Length: 1 to 128
    #[serde(rename = "KeyPrefix", default, skip_serializing_if = "Option::is_none")]
    pub key_prefix: Option<Value<String>>,

    /// The delimiter string to use between the key and value in each pair in the transformed log event.
    ///
    /// Length: 1 to 128
    #[serde(rename = "KeyValueDelimiter", default, skip_serializing_if = "Option::is_none")]
    pub key_value_delimiter: Option<Value<String>>,

    /// A value to insert into the value field in the result, when a key-value pair is not successfully split.
    ///
    /// Length: 1 to 128
    #[serde(rename = "NonMatchValue", default, skip_serializing_if = "Option::is_none")]
    pub non_match_value: Option<Value<String>>,

    /// Specifies whether to overwrite the value if the destination key already exists.
    #[serde(rename = "OverwriteIfExists", default, skip_serializing_if = "Option::is_none")]
    pub overwrite_if_exists: Option<Value<bool>>,

    /// Path to the field in the log event that will be parsed.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value<String>>,
}

/// This processor parses RDS for PostgreSQL vended logs, extract fields, and convert them into JSON format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParsePostgres {
    /// Omit this parameter and the whole log message will be processed by this processor.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value<String>>,
}

/// This processor parses Route 53 vended logs, extract fields, and convert them into JSON format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseRoute53 {
    /// Omit this parameter and the whole log message will be processed by this processor.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value<String>>,
}

/// This processor converts logs into Open Cybersecurity Schema Framework (OCSF) events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseToOcsf {
    /// Specify the service or process that produces the log events that will be converted with this processor.
    ///
    /// Allowed values: CloudTrail | Route53Resolver | VPCFlow | EKSAudit | AWSWAF
    #[serde(rename = "EventSource")]
    pub event_source: Value<String>,

    /// Specify which version of the OCSF schema to use for the transformed log events.
    ///
    /// Allowed values: V1.1 | V1.5
    #[serde(rename = "OcsfVersion")]
    pub ocsf_version: Value<String>,

    /// The path to the field in the log event that you want to parse.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value<String>>,
}

/// This processor parses Amazon VPC vended logs, extract fields, and convert them into JSON format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseVpc {
    /// Omit this parameter and the whole log message will be processed by this processor.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value<String>>,
}

/// This processor parses AWS WAF vended logs, extract fields, and convert them into JSON format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParseWaf {
    /// Omit this parameter and the whole log message will be processed by this processor.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value<String>>,
}

/// Individual processor configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Processor {
    /// This processor adds new key-value pairs to the log event.
    #[serde(rename = "AddKeys", default, skip_serializing_if = "Option::is_none")]
    pub add_keys: Option<Value<AddKeys>>,

    /// This processor copies values within a log event.
    #[serde(rename = "CopyValue", default, skip_serializing_if = "Option::is_none")]
    pub copy_value: Option<Value<CopyValue>>,

    /// The CSV processor parses comma-separated values (CSV) from the log events into columns.
    #[serde(rename = "Csv", default, skip_serializing_if = "Option::is_none")]
    pub csv: Option<Value<Csv>>,

    /// This processor converts a datetime string into a format that you specify.
    #[serde(rename = "DateTimeConverter", default, skip_serializing_if = "Option::is_none")]
    pub date_time_converter: Option<Value<DateTimeConverter>>,

    /// This processor deletes entries from a log event.
    #[serde(rename = "DeleteKeys", default, skip_serializing_if = "Option::is_none")]
    pub delete_keys: Option<Value<DeleteKeys>>,

    /// This processor uses pattern matching to parse and structure unstructured data.
    #[serde(rename = "Grok", default, skip_serializing_if = "Option::is_none")]
    pub grok: Option<Value<Grok>>,

    /// This processor takes a list of objects that contain key fields, and converts them into a map of target keys.
    #[serde(rename = "ListToMap", default, skip_serializing_if = "Option::is_none")]
    pub list_to_map: Option<Value<ListToMap>>,

    /// This processor converts a string to lowercase.
    #[serde(rename = "LowerCaseString", default, skip_serializing_if = "Option::is_none")]
    pub lower_case_string: Option<Value<LowerCaseString>>,

    /// This processor moves a key from one field to another. The original key is deleted.
    #[serde(rename = "MoveKeys", default, skip_serializing_if = "Option::is_none")]
    pub move_keys: Option<Value<MoveKeys>>,

    /// This processor parses CloudFront vended logs, extract fields, and convert them into JSON format.
    #[serde(rename = "ParseCloudfront", default, skip_serializing_if = "Option::is_none")]
    pub parse_cloudfront: Option<Value<ParseCloudfront>>,

    /// This processor parses log events that are in JSON format.
    #[serde(rename = "ParseJSON", default, skip_serializing_if = "Option::is_none")]
    pub parse_json: Option<Value<ParseJson>>,

    /// This processor parses a specified field in the original log event into key-value pairs.
    #[serde(rename = "ParseKeyValue", default, skip_serializing_if = "Option::is_none")]
    pub parse_key_value: Option<Value<ParseKeyValue>>,

    /// This processor parses RDS for PostgreSQL vended logs, extract fields, and convert them into JSON format.
    #[serde(rename = "ParsePostgres", default, skip_serializing_if = "Option::is_none")]
    pub parse_postgres: Option<Value<ParsePostgres>>,

    /// This processor parses Route 53 vended logs, extract fields, and convert them into JSON format.
    #[serde(rename = "ParseRoute53", default, skip_serializing_if = "Option::is_none")]
    pub parse_route53: Option<Value<ParseRoute53>>,

    /// This processor converts logs into Open Cybersecurity Schema Framework (OCSF) events.
    #[serde(rename = "ParseToOCSF", default, skip_serializing_if = "Option::is_none")]
    pub parse_to_ocsf: Option<Value<ParseToOcsf>>,

    /// This processor parses Amazon VPC vended logs, extract fields, and convert them into JSON format.
    #[serde(rename = "ParseVPC", default, skip_serializing_if = "Option::is_none")]
    pub parse_vpc: Option<Value<ParseVpc>>,

    /// This processor parses AWS WAF vended logs, extract fields, and convert them into JSON format.
    #[serde(rename = "ParseWAF", default, skip_serializing_if = "Option::is_none")]
    pub parse_waf: Option<Value<ParseWaf>>,

    /// This processor renames keys in a log event.
    #[serde(rename = "RenameKeys", default, skip_serializing_if = "Option::is_none")]
    pub rename_keys: Option<Value<RenameKeys>>,

    /// This processor splits a field into an array of strings using a delimiting character.
    #[serde(rename = "SplitString", default, skip_serializing_if = "Option::is_none")]
    pub split_string: Option<Value<SplitString>>,

    /// This processor matches a key's value against a regular expression and replaces all matches with a replacement string.
    #[serde(rename = "SubstituteString", default, skip_serializing_if = "Option::is_none")]
    pub substitute_string: Option<Value<SubstituteString>>,

    /// Use this processor to remove leading and trailing whitespace.
    #[serde(rename = "TrimString", default, skip_serializing_if = "Option::is_none")]
    pub trim_string: Option<Value<TrimString>>,

    /// Use this processor to convert a value type associated with the specified key to the specified type.
    #[serde(rename = "TypeConverter", default, skip_serializing_if = "Option::is_none")]
    pub type_converter: Option<Value<TypeConverter>>,

    /// This processor converts a string field to uppercase.
    #[serde(rename = "UpperCaseString", default, skip_serializing_if = "Option::is_none")]
    pub upper_case_string: Option<Value<UpperCaseString>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenameKeyEntry {
    /// The key to rename
    ///
    /// Length: 1 to 128
    #[serde(rename = "Key")]
    pub key: Value<String>,

    /// Specifies whether to overwrite the existing value if the destination key already exists.
    #[serde(rename = "OverwriteIfExists", default, skip_serializing_if = "Option::is_none")]
    pub overwrite_if_exists: Option<Value<bool>>,

    /// The string to use for the new key name
    ///
    /// Length: 1 to 128
    #[serde(rename = "RenameTo")]
    pub rename_to: Value<String>,
}

/// This processor renames keys in a log event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenameKeys {
    /// Items: 1 to 5
    /// Items must be unique
    #[serde(rename = "Entries")]
    pub entries: List<RenameKeyEntry>,
}

/// This processor splits a field into an array of strings using a delimiting character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitString {
    /// Items: 1 to 10
    /// Items must be unique
    #[serde(rename = "Entries")]
    pub entries: List<SplitStringEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitStringEntry {
    /// The separator characters to split the string entry on.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Delimiter")]
    pub delimiter: Value<String>,

    /// The key of the field to split.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Source")]
    pub source: Value<String>,
}

/// This processor matches a key's value against a regular expression and replaces all matches with a replacement string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubstituteString {
    /// Items: 1 to 10
    /// Items must be unique
    #[serde(rename = "Entries")]
    pub entries: List<SubstituteStringEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubstituteStringEntry {
    /// The regular expression string to be replaced.
    ///
    /// Length: 1 to 128
    #[serde(rename = "From")]
    pub from: Value<String>,

    /// The key to modify
    ///
    /// Length: 1 to 128
    #[serde(rename = "Source")]
    pub source: Value<String>,

    /// The string to be substituted for each match of from
    ///
    /// Length: 1 to 128
    #[serde(rename = "To")]
    pub to: Value<String>,
}

/// Use this processor to remove leading and trailing whitespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrimString {
    /// The array containing the keys of the fields to trim.
    ///
    /// Items: 1 to 10
    /// Items must be unique
    #[serde(rename = "WithKeys")]
    pub with_keys: List<String>,
}

/// Use this processor to convert a value type associated with the specified key to the specified type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeConverter {
    /// Items: 1 to 5
    /// Items must be unique
    #[serde(rename = "Entries")]
    pub entries: List<TypeConverterEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeConverterEntry {
    /// The key with the value that is to be converted to a different type.
    ///
    /// Length: 1 to 128
    #[serde(rename = "Key")]
    pub key: Value<String>,

    /// The type to convert the field value to.
    ///
    /// Allowed values: boolean | integer | double | string
    #[serde(rename = "Type")]
    pub r#type: Value<String>,
}

/// This processor converts a string field to uppercase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpperCaseString {
    /// The array of containing the keys of the field to convert to uppercase.
    ///
    /// Items: 1 to 10
    /// Items must be unique
    #[serde(rename = "WithKeys")]
    pub with_keys: List<String>,
}

/// Specifies a transformer on the log group to transform logs into consistent structured and information rich format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransformerProperties {
    /// Existing log group that you want to associate with this transformer.
    ///
    /// Pattern: `[\w#+=/:,.@-]*`
    /// Length: 1 to 2048
    /// Update requires: Replacement
    #[serde(rename = "LogGroupIdentifier")]
    pub log_group_identifier: Value<String>,

    /// List of processors in a transformer
    ///
    /// Items: 1 to 20
    /// Items must be unique
    #[serde(rename = "TransformerConfig")]
    pub transformer_config: List<Processor>,
}

impl ResourceProperties for TransformerProperties {
    const TYPE_NAME: &'static str = "AWS::Logs::Transformer";
}
