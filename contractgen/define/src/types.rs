//! Closed enumerations used by contract descriptors.
//!
//! - [`HttpVerb`] - HTTP verb of a request
//! - [`Classification`] - top-level grouping that drives path construction
//! - [`Requirement`] - whether a bucket or object name is part of a request
//! - [`Action`] - what a vendor-extension request does to its resource
//! - [`ResourceType`] - singleton vs. non-singleton resource marker
//! - [`Operation`] - the `operation` selector sent as a query parameter

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// HTTP verbs a contract request may declare.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use contractgen_define::HttpVerb;
///
/// assert_eq!(HttpVerb::from_str("GET").unwrap(), HttpVerb::Get);
/// assert_eq!(HttpVerb::Delete.to_string(), "DELETE");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpVerb {
    Delete,
    Get,
    Head,
    Post,
    Put,
}

/// Top-level grouping of a request.
///
/// Generic-storage requests address buckets and objects directly
/// (`/bucket/object`), vendor-extension requests live under `/_rest_/`.
/// Internal requests exist in the contract but have no path rules.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Classification {
    #[serde(alias = "amazons3")]
    GenericStorage,
    #[serde(alias = "spectrads3")]
    VendorExtension,
    #[serde(alias = "spectrainternal")]
    Internal,
}

/// Whether a bucket or object name participates in a request.
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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Requirement {
    #[default]
    NotAllowed,
    Optional,
    Required,
}

/// Action a vendor-extension request performs on its resource.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    BulkDelete,
    BulkModify,
    Create,
    Delete,
    List,
    Modify,
    Show,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    Singleton,
    NonSingleton,
}

/// Operation selector carried in the `operation` query parameter.
///
/// ## Examples
///
/// ```
/// use contractgen_define::Operation;
///
/// assert_eq!(Operation::StartBulkGet.to_string(), "START_BULK_GET");
/// assert_eq!(Operation::StartBulkGet.query_value(), "start_bulk_get");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    Allocate,
    CancelEject,
    CancelFormat,
    CancelImport,
    CancelOnline,
    CancelVerify,
    Clean,
    CloseAggregatingJob,
    Compact,
    Deallocate,
    Eject,
    Format,
    GetPhysicalPlacement,
    Import,
    Inspect,
    MarkForCompaction,
    Online,
    PairBack,
    RegenerateSecretKey,
    StartBulkGet,
    StartBulkPut,
    StartBulkStage,
    StartBulkVerify,
    Verify,
    VerifyPhysicalPlacement,
    VerifySafeToStartBulkPut,
}

impl Operation {
    /// The lowercase form sent on the wire.
    pub fn query_value(&self) -> String {
        self.to_string().to_lowercase()
    }
}
