//! Resource kinds and their fixed classification tables.
//!
//! A resource is the noun a vendor-extension request acts upon. Path and
//! argument derivation depend on which of these groups a resource falls in:
//!
//! | Group | Generated argument |
//! |---|---|
//! | singleton | none (cannot be an argument) |
//! | notification registration | `notificationId` |
//! | name-bearing | `<resource>Name` |
//! | id-bearing | `<resource>Id` |
//! | anything else | camel-cased resource name |

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Every resource kind known to the contract.
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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Resource {
    ActiveJob,
    BeansRetriever,
    BlobPersistence,
    BlobStoreTask,
    Bucket,
    BucketAcl,
    CacheFilesystem,
    CacheState,
    CanceledJob,
    CapacitySummary,
    CompletedJob,
    DataPath,
    DataPathBackend,
    DataPersistenceRule,
    DataPolicy,
    DataPolicyAcl,
    DataReplicationRule,
    DegradedBucket,
    DegradedDataPersistenceRule,
    DegradedDataReplicationRule,
    Ds3Target,
    Ds3TargetReadPreference,
    Ds3TargetUserMapping,
    Folder,
    GenericDaoNotificationRegistration,
    Group,
    GroupMember,
    HeapDump,
    InstanceIdentifier,
    Job,
    JobChunk,
    JobCompletedNotificationRegistration,
    JobCreatedNotificationRegistration,
    Node,
    Object,
    ObjectCachedNotificationRegistration,
    ObjectLostNotificationRegistration,
    ObjectPersistedNotificationRegistration,
    Pool,
    PoolEnvironment,
    PoolFailure,
    PoolFailureNotificationRegistration,
    PoolPartition,
    StorageDomain,
    StorageDomainFailure,
    StorageDomainFailureNotificationRegistration,
    StorageDomainMember,
    SuspectBlobAzureTarget,
    SuspectBlobDs3Target,
    SuspectBlobPool,
    SuspectBlobS3Target,
    SuspectBlobTape,
    SystemFailure,
    SystemFailureNotificationRegistration,
    SystemHealth,
    SystemInformation,
    Tape,
    TapeDensityDirective,
    TapeDrive,
    TapeEnvironment,
    TapeFailure,
    TapeFailureNotificationRegistration,
    TapeLibrary,
    TapePartition,
    TapePartitionFailure,
    TapePartitionFailureNotificationRegistration,
    User,
}

impl Resource {
    /// Resources that exist exactly once per system and are never addressed by id.
    ///
    /// ## Examples
    ///
    /// ```
    /// use contractgen_define::Resource;
    ///
    /// assert!(Resource::SystemInformation.is_singleton());
    /// assert!(!Resource::Bucket.is_singleton());
    /// ```
    pub fn is_singleton(&self) -> bool {
        matches!(
            self,
            Resource::CapacitySummary
                | Resource::DataPath
                | Resource::DataPathBackend
                | Resource::PoolEnvironment
                | Resource::SystemHealth
                | Resource::SystemInformation
                | Resource::TapeEnvironment
        )
    }

    /// Notification registration resources, addressed by `notificationId`.
    pub fn is_notification(&self) -> bool {
        matches!(
            self,
            Resource::GenericDaoNotificationRegistration
                | Resource::JobCompletedNotificationRegistration
                | Resource::JobCreatedNotificationRegistration
                | Resource::ObjectCachedNotificationRegistration
                | Resource::ObjectLostNotificationRegistration
                | Resource::ObjectPersistedNotificationRegistration
                | Resource::PoolFailureNotificationRegistration
                | Resource::StorageDomainFailureNotificationRegistration
                | Resource::SystemFailureNotificationRegistration
                | Resource::TapeFailureNotificationRegistration
                | Resource::TapePartitionFailureNotificationRegistration
        )
    }

    /// Resources addressed by a name (`bucketName`, `objectName`).
    pub fn is_named(&self) -> bool {
        matches!(self, Resource::Bucket | Resource::Object)
    }

    /// Resources addressed by a UUID (`jobId`, `tapeId`, ...).
    pub fn is_id_bearing(&self) -> bool {
        matches!(
            self,
            Resource::ActiveJob
                | Resource::Job
                | Resource::JobChunk
                | Resource::Tape
                | Resource::TapeDrive
                | Resource::TapeLibrary
                | Resource::User
        )
    }

    /// Suspect-blob listings, cleared or marked in bulk by blob id.
    pub fn is_suspect_blob(&self) -> bool {
        matches!(
            self,
            Resource::SuspectBlobAzureTarget
                | Resource::SuspectBlobDs3Target
                | Resource::SuspectBlobPool
                | Resource::SuspectBlobS3Target
                | Resource::SuspectBlobTape
        )
    }

    /// Lowercase path segment used under `/_rest_/`.
    pub fn path_segment(&self) -> String {
        self.to_string().to_lowercase()
    }
}
