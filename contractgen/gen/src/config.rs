//! Generator configuration.
//!
//! [`GeneratorConfig`] is built once (from defaults or a TOML file) and then
//! passed by reference into every generator. It holds:
//!
//! - the type remap table (contract type name -> SDK type name)
//! - the special-case table (request name -> [`RequestStrategy`])
//! - the names of list types whose single element is not wrapped
//! - validation and pruning switches
//!
//! ## TOML format
//!
//! ```toml
//! strict = true
//! prune_unused_types = true
//! unwrapped_list_types = ["JobList"]
//!
//! [type_remap]
//! "com.spectralogic.s3.server.domain.JobsApiBean" = "com.spectralogic.s3.server.domain.JobList"
//!
//! [special_cases]
//! GetObjectRequest = "object-retrieval"
//! DeleteObjectsRequest = "delete-key-list"
//! ```
//!
//! A table present in the file replaces the built-in one entirely.
//!
//! ## Examples
//!
//! ```
//! use contractgen_gen::config::{GeneratorConfig, RequestStrategy};
//!
//! let config = GeneratorConfig::from_toml_str(r#"
//!     strict = false
//!     [special_cases]
//!     GetObjectRequest = "object-retrieval"
//! "#).unwrap();
//!
//! assert!(!config.strict);
//! assert_eq!(config.special_cases["GetObjectRequest"], RequestStrategy::ObjectRetrieval);
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use contractgen_define::RequestDescriptor;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::errors::GeneratorError;
use crate::naming::remove_path;

/// How a request's model differs from the base composition.
///
/// Everything not listed in the special-case table is [`RequestStrategy::Standard`].
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RequestStrategy {
    #[default]
    Standard,
    /// Object download: range header and checksum fields, binary response body.
    ObjectRetrieval,
    /// Object upload: content reader, checksum and header map.
    ObjectStore,
    /// Object metadata: response carries checksums taken from headers.
    ObjectMetadata,
    /// Name-list body plus a second constructor taking a decorated reader.
    MultiConstructor,
    RawReader,
    IdList,
    NameList,
    DeleteKeyList,
    PartsList,
    #[serde(rename = "string")]
    #[strum(serialize = "string")]
    StringBody,
    StructuredObjects,
}

/// Request body shapes. Each one overrides the payload constructor argument,
/// the struct field and the field assignment; nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PayloadKind {
    NoPayload,
    RawReader,
    IdList,
    NameList,
    DeleteKeyList,
    PartsList,
    StringBody,
    StructuredObjects,
}

impl RequestStrategy {
    /// The body shape this strategy builds on.
    pub fn payload(&self) -> PayloadKind {
        match self {
            RequestStrategy::Standard
            | RequestStrategy::ObjectRetrieval
            | RequestStrategy::ObjectMetadata => PayloadKind::NoPayload,
            RequestStrategy::ObjectStore | RequestStrategy::RawReader => PayloadKind::RawReader,
            RequestStrategy::IdList => PayloadKind::IdList,
            RequestStrategy::NameList | RequestStrategy::MultiConstructor => PayloadKind::NameList,
            RequestStrategy::DeleteKeyList => PayloadKind::DeleteKeyList,
            RequestStrategy::PartsList => PayloadKind::PartsList,
            RequestStrategy::StringBody => PayloadKind::StringBody,
            RequestStrategy::StructuredObjects => PayloadKind::StructuredObjects,
        }
    }
}

/// Configuration handed to every generator entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Contract type name -> SDK type name, applied once before generation.
    pub type_remap: BTreeMap<String, String>,
    /// Path-less request name -> strategy.
    pub special_cases: BTreeMap<String, RequestStrategy>,
    /// Path-less type names whose single element has no enclosing wrapper tag.
    pub unwrapped_list_types: BTreeSet<String>,
    /// Treat special-case validation failures as errors instead of warnings.
    pub strict: bool,
    /// Drop types no request references.
    pub prune_unused_types: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            type_remap: BTreeMap::from([(
                "com.spectralogic.s3.server.domain.JobsApiBean".to_string(),
                "com.spectralogic.s3.server.domain.JobList".to_string(),
            )]),
            special_cases: default_special_cases(),
            unwrapped_list_types: BTreeSet::from(["JobList".to_string()]),
            strict: true,
            prune_unused_types: true,
        }
    }
}

impl GeneratorConfig {
    /// A configuration with no remapping and no special cases.
    pub fn empty() -> Self {
        Self {
            type_remap: BTreeMap::new(),
            special_cases: BTreeMap::new(),
            unwrapped_list_types: BTreeSet::new(),
            strict: true,
            prune_unused_types: false,
        }
    }

    /// Parses a TOML document; missing fields take their defaults.
    ///
    /// ## Errors
    ///
    /// Returns `GeneratorError::ConfigError` if the document is not valid
    /// TOML or names an unknown strategy.
    pub fn from_toml_str(content: &str) -> Result<Self, GeneratorError> {
        toml::from_str(content).map_err(|e| GeneratorError::ConfigError(e.to_string()))
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, GeneratorError> {
        let content = fs::read_to_string(path).map_err(|e| {
            GeneratorError::ConfigError(format!("cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Looks up the strategy for a request by its path-less name.
    pub fn strategy_for(&self, request: &RequestDescriptor) -> RequestStrategy {
        self.special_cases
            .get(remove_path(&request.name))
            .copied()
            .unwrap_or_default()
    }

    /// True when `type_name` (path-less) is configured as a JobList-like type.
    pub fn is_unwrapped_list_type(&self, type_name: &str) -> bool {
        self.unwrapped_list_types.contains(remove_path(type_name))
    }

    /// Adds or replaces one special case.
    pub fn with_special_case(mut self, name: impl Into<String>, strategy: RequestStrategy) -> Self {
        self.special_cases.insert(name.into(), strategy);
        self
    }

    /// Marks a type as JobList-like.
    pub fn with_unwrapped_list_type(mut self, name: impl Into<String>) -> Self {
        self.unwrapped_list_types.insert(name.into());
        self
    }
}

/// The built-in special-case table for the storage contract.
fn default_special_cases() -> BTreeMap<String, RequestStrategy> {
    use RequestStrategy::*;

    let table: &[(&str, RequestStrategy)] = &[
        ("GetObjectRequest", ObjectRetrieval),
        ("PutObjectRequest", ObjectStore),
        ("HeadObjectRequest", ObjectMetadata),
        ("GetBulkJobSpectraS3Request", MultiConstructor),
        ("PutMultiPartUploadPartRequest", RawReader),
        ("CompleteMultiPartUploadRequest", PartsList),
        ("DeleteObjectsRequest", DeleteKeyList),
        ("PutBulkJobSpectraS3Request", StructuredObjects),
        ("GetBlobPersistenceSpectraS3Request", StringBody),
        ("ReplicatePutJobSpectraS3Request", StringBody),
        ("GetPhysicalPlacementForObjectsSpectraS3Request", NameList),
        ("GetPhysicalPlacementForObjectsWithFullDetailsSpectraS3Request", NameList),
        ("VerifyPhysicalPlacementForObjectsSpectraS3Request", NameList),
        ("VerifyPhysicalPlacementForObjectsWithFullDetailsSpectraS3Request", NameList),
        ("VerifyBulkJobSpectraS3Request", NameList),
        ("EjectStorageDomainBlobsSpectraS3Request", NameList),
        ("ClearSuspectBlobAzureTargetsSpectraS3Request", IdList),
        ("ClearSuspectBlobDs3TargetsSpectraS3Request", IdList),
        ("ClearSuspectBlobPoolsSpectraS3Request", IdList),
        ("ClearSuspectBlobS3TargetsSpectraS3Request", IdList),
        ("ClearSuspectBlobTapesSpectraS3Request", IdList),
        ("MarkSuspectBlobAzureTargetsAsDegradedSpectraS3Request", IdList),
        ("MarkSuspectBlobDs3TargetsAsDegradedSpectraS3Request", IdList),
        ("MarkSuspectBlobPoolsAsDegradedSpectraS3Request", IdList),
        ("MarkSuspectBlobS3TargetsAsDegradedSpectraS3Request", IdList),
        ("MarkSuspectBlobTapesAsDegradedSpectraS3Request", IdList),
    ];

    table
        .iter()
        .map(|(name, strategy)| (name.to_string(), *strategy))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::test_utils::make_request;

    #[test]
    fn strategy_names_round_trip() {
        for strategy in RequestStrategy::iter() {
            let name = strategy.to_string();
            assert_eq!(RequestStrategy::from_str(&name).unwrap(), strategy);
        }
        assert_eq!(RequestStrategy::StringBody.to_string(), "string");
        assert_eq!(RequestStrategy::DeleteKeyList.to_string(), "delete-key-list");
    }

    #[test]
    fn object_store_builds_on_raw_reader() {
        assert_eq!(RequestStrategy::ObjectStore.payload(), PayloadKind::RawReader);
        assert_eq!(RequestStrategy::MultiConstructor.payload(), PayloadKind::NameList);
        assert_eq!(RequestStrategy::ObjectRetrieval.payload(), PayloadKind::NoPayload);
        assert_eq!(RequestStrategy::IdList.payload(), PayloadKind::IdList);
    }

    #[test]
    fn default_config_contains_built_in_table() {
        let config = GeneratorConfig::default();
        assert!(config.strict);
        assert_eq!(
            config.special_cases.get("GetObjectRequest"),
            Some(&RequestStrategy::ObjectRetrieval)
        );
        assert!(config.is_unwrapped_list_type("com.example.JobList"));
    }

    #[test]
    fn strategy_lookup_ignores_package_path() {
        let config = GeneratorConfig::empty().with_special_case("GetObjectRequest", RequestStrategy::ObjectRetrieval);
        let request = make_request("com.example.GetObjectRequest");
        assert_eq!(config.strategy_for(&request), RequestStrategy::ObjectRetrieval);

        let other = make_request("com.example.GetBucketRequest");
        assert_eq!(config.strategy_for(&other), RequestStrategy::Standard);
    }

    #[test]
    fn toml_tables_replace_defaults() {
        let config = GeneratorConfig::from_toml_str(
            r#"
            unwrapped_list_types = ["Jobs"]

            [type_remap]
            "a.Old" = "a.New"

            [special_cases]
            DeleteObjectsRequest = "delete-key-list"
            "#,
        )
        .unwrap();

        assert_eq!(config.special_cases.len(), 1);
        assert_eq!(config.type_remap["a.Old"], "a.New");
        assert!(config.is_unwrapped_list_type("Jobs"));
        assert!(!config.is_unwrapped_list_type("JobList"));
        assert!(config.strict);
    }

    #[test]
    fn unknown_strategy_is_a_config_error() {
        let err = GeneratorConfig::from_toml_str(
            r#"
            [special_cases]
            GetObjectRequest = "teleport"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, GeneratorError::ConfigError(_)));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "prune_unused_types = false").unwrap();

        let config = GeneratorConfig::load(file.path()).unwrap();
        assert!(!config.prune_unused_types);
        assert!(!config.special_cases.is_empty());
    }
}
