//! Request classification tables.
//!
//! Read-only predicates over a [`RequestDescriptor`], shared by path building,
//! client generation and special-case validation. None of them depends on a
//! target language.

use contractgen_define::{
    Action, Classification, HttpVerb, Operation, RequestDescriptor, Requirement, Resource,
};
use serde::Serialize;
use strum::Display;

use crate::config::RequestStrategy;

/// The operation a notification-registration request performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum NotificationVariant {
    Create,
    Delete,
    Get,
}

/// True when the bucket name is a path segment: either the request requires
/// a bucket, or it acts on the bucket resource itself.
pub fn has_bucket_name_in_path(request: &RequestDescriptor) -> bool {
    request.bucket_requirement == Requirement::Required
        || (request.resource == Some(Resource::Bucket) && request.include_in_path)
}

/// The notification variant of a notification-registration request, if any.
///
/// Modifying a registration re-registers it, so `MODIFY` and `BULK_MODIFY`
/// share the create variant.
///
/// ## Examples
///
/// ```
/// use contractgen_define::{Action, Resource};
/// use contractgen_gen::classification::{notification_variant, NotificationVariant};
/// # use contractgen_define::{Classification, RequestDescriptor, Requirement};
/// # let mut request = RequestDescriptor {
/// #     name: "GetJobCompletedNotificationRegistrationSpectraS3Request".to_string(),
/// #     http_verb: None, classification: Classification::VendorExtension,
/// #     bucket_requirement: Requirement::NotAllowed, object_requirement: Requirement::NotAllowed,
/// #     action: None, resource: None, resource_type: None, operation: None,
/// #     include_in_path: true, response_codes: vec![], optional_params: vec![], required_params: vec![],
/// # };
/// request.resource = Some(Resource::JobCompletedNotificationRegistration);
/// request.action = Some(Action::Show);
/// assert_eq!(notification_variant(&request), Some(NotificationVariant::Get));
///
/// request.resource = Some(Resource::Tape);
/// assert_eq!(notification_variant(&request), None);
/// ```
pub fn notification_variant(request: &RequestDescriptor) -> Option<NotificationVariant> {
    if !request.resource.is_some_and(|r| r.is_notification()) {
        return None;
    }
    match request.action? {
        Action::Create | Action::Modify | Action::BulkModify => Some(NotificationVariant::Create),
        Action::Delete => Some(NotificationVariant::Delete),
        Action::List | Action::Show => Some(NotificationVariant::Get),
        Action::BulkDelete => None,
    }
}

/// True for generic-storage GET requests that download an object body.
pub fn is_object_retrieval(request: &RequestDescriptor) -> bool {
    request.classification == Classification::GenericStorage
        && request.http_verb == Some(HttpVerb::Get)
        && request.requires_bucket()
        && request.requires_object()
        && request.find_param("UploadId").is_none()
}

/// True for generic-storage PUT requests that upload a whole object.
pub fn is_object_store(request: &RequestDescriptor) -> bool {
    request.classification == Classification::GenericStorage
        && request.http_verb == Some(HttpVerb::Put)
        && request.requires_bucket()
        && request.requires_object()
        && request.find_param("PartNumber").is_none()
}

/// True for multipart-upload part requests (raw body stream).
pub fn is_multipart_part(request: &RequestDescriptor) -> bool {
    request.classification == Classification::GenericStorage
        && request.http_verb == Some(HttpVerb::Put)
        && request.find_param("PartNumber").is_some()
        && request.find_param("UploadId").is_some()
}

/// True for the request completing a multipart upload (parts-list body).
pub fn is_complete_multipart(request: &RequestDescriptor) -> bool {
    request.classification == Classification::GenericStorage
        && request.http_verb == Some(HttpVerb::Post)
        && request.requires_bucket()
        && request.requires_object()
        && request.required_params.iter().any(|p| p.name == "UploadId")
}

/// True for the multi-object delete request (`<Delete>` key list body).
pub fn is_multi_object_delete(request: &RequestDescriptor) -> bool {
    request.http_verb == Some(HttpVerb::Post)
        && request.object_requirement == Requirement::NotAllowed
        && request
            .required_params
            .iter()
            .any(|p| p.name == "Delete" && p.is_void())
}

/// True for requests whose body names objects to locate or verify.
pub fn is_physical_placement(request: &RequestDescriptor) -> bool {
    matches!(
        request.operation,
        Some(
            Operation::GetPhysicalPlacement
                | Operation::VerifyPhysicalPlacement
                | Operation::StartBulkVerify
        )
    )
}

/// True for vendor bulk requests over suspect blobs; the body lists blob ids.
pub fn has_ids_payload(request: &RequestDescriptor) -> bool {
    request.classification == Classification::VendorExtension
        && matches!(request.action, Some(Action::BulkDelete | Action::BulkModify))
        && request.resource.is_some_and(|r| r.is_suspect_blob())
}

/// True for the blob persistence query, whose body is a raw string.
pub fn is_get_blob_persistence(request: &RequestDescriptor) -> bool {
    request.classification == Classification::VendorExtension
        && request.http_verb == Some(HttpVerb::Get)
        && request.resource == Some(Resource::BlobPersistence)
}

/// True for the replicated bulk put, whose body is the source job as a string.
pub fn is_replicate_put_job(request: &RequestDescriptor) -> bool {
    request.classification == Classification::VendorExtension
        && request.http_verb == Some(HttpVerb::Put)
        && request.operation == Some(Operation::StartBulkPut)
        && has_void_param(request, "Replicate")
}

/// True for requests sending a plain string body.
pub fn has_string_payload(request: &RequestDescriptor) -> bool {
    is_get_blob_persistence(request) || is_replicate_put_job(request)
}

/// True for the tape eject that names the blobs to eject in its body.
pub fn is_eject_storage_domain_blobs(request: &RequestDescriptor) -> bool {
    request.classification == Classification::VendorExtension
        && request.http_verb == Some(HttpVerb::Put)
        && request.operation == Some(Operation::Eject)
        && request.resource == Some(Resource::Tape)
        && has_void_param(request, "Blobs")
}

fn has_void_param(request: &RequestDescriptor, name: &str) -> bool {
    request
        .required_params
        .iter()
        .any(|p| p.name == name && p.is_void())
}

/// The strategy a request's shape calls for, or `Standard` when its shape
/// has no special handling signature.
///
/// Used to detect requests that need an entry in the special-case table.
pub fn suggested_strategy(request: &RequestDescriptor) -> RequestStrategy {
    if is_object_retrieval(request) {
        RequestStrategy::ObjectRetrieval
    } else if is_object_store(request) {
        RequestStrategy::ObjectStore
    } else if is_multipart_part(request) {
        RequestStrategy::RawReader
    } else if is_complete_multipart(request) {
        RequestStrategy::PartsList
    } else if is_multi_object_delete(request) {
        RequestStrategy::DeleteKeyList
    } else if has_ids_payload(request) {
        RequestStrategy::IdList
    } else if has_string_payload(request) {
        RequestStrategy::StringBody
    } else if is_eject_storage_domain_blobs(request) {
        RequestStrategy::NameList
    } else if request.operation == Some(Operation::StartBulkPut) {
        RequestStrategy::StructuredObjects
    } else if request.operation == Some(Operation::StartBulkGet) {
        RequestStrategy::MultiConstructor
    } else if is_physical_placement(request) {
        RequestStrategy::NameList
    } else {
        RequestStrategy::Standard
    }
}

#[cfg(test)]
mod tests {
    use contractgen_define::{ParamDescriptor, VOID_TYPE};

    use super::*;
    use crate::test_utils::{make_generic_request, make_vendor_request};

    #[test]
    fn bucket_in_path_from_requirement_or_resource() {
        let mut request = make_generic_request("GetBucketRequest", HttpVerb::Get);
        request.bucket_requirement = Requirement::Required;
        assert!(has_bucket_name_in_path(&request));

        let mut vendor = make_vendor_request("GetBucketSpectraS3Request", HttpVerb::Get, Some(Resource::Bucket));
        vendor.include_in_path = true;
        assert!(has_bucket_name_in_path(&vendor));

        vendor.include_in_path = false;
        assert!(!has_bucket_name_in_path(&vendor));
    }

    #[test]
    fn notification_variants_follow_action() {
        let mut request = make_vendor_request(
            "X",
            HttpVerb::Delete,
            Some(Resource::TapeFailureNotificationRegistration),
        );
        request.action = Some(Action::Delete);
        assert_eq!(notification_variant(&request), Some(NotificationVariant::Delete));
        request.action = Some(Action::Create);
        assert_eq!(notification_variant(&request), Some(NotificationVariant::Create));
        request.action = Some(Action::Modify);
        assert_eq!(notification_variant(&request), Some(NotificationVariant::Create));
        request.action = Some(Action::BulkModify);
        assert_eq!(notification_variant(&request), Some(NotificationVariant::Create));
        request.action = Some(Action::BulkDelete);
        assert_eq!(notification_variant(&request), None);
        request.action = None;
        assert_eq!(notification_variant(&request), None);
    }

    #[test]
    fn object_retrieval_excludes_multipart_listing() {
        let mut request = make_generic_request("GetObjectRequest", HttpVerb::Get);
        request.bucket_requirement = Requirement::Required;
        request.object_requirement = Requirement::Required;
        assert!(is_object_retrieval(&request));
        assert_eq!(suggested_strategy(&request), RequestStrategy::ObjectRetrieval);

        request
            .required_params
            .push(ParamDescriptor::new("UploadId", "java.util.UUID", false));
        assert!(!is_object_retrieval(&request));
    }

    #[test]
    fn multipart_signatures() {
        let mut part = make_generic_request("PutMultiPartUploadPartRequest", HttpVerb::Put);
        part.bucket_requirement = Requirement::Required;
        part.object_requirement = Requirement::Required;
        part.required_params = vec![
            ParamDescriptor::new("PartNumber", "int", false),
            ParamDescriptor::new("UploadId", "java.util.UUID", false),
        ];
        assert!(!is_object_store(&part));
        assert_eq!(suggested_strategy(&part), RequestStrategy::RawReader);

        let mut complete = make_generic_request("CompleteMultiPartUploadRequest", HttpVerb::Post);
        complete.bucket_requirement = Requirement::Required;
        complete.object_requirement = Requirement::Required;
        complete.required_params = vec![ParamDescriptor::new("UploadId", "java.util.UUID", false)];
        assert_eq!(suggested_strategy(&complete), RequestStrategy::PartsList);
    }

    #[test]
    fn multi_delete_needs_void_delete_param() {
        let mut request = make_generic_request("DeleteObjectsRequest", HttpVerb::Post);
        request.bucket_requirement = Requirement::Required;
        request.required_params = vec![ParamDescriptor::new("Delete", VOID_TYPE, false)];
        assert_eq!(suggested_strategy(&request), RequestStrategy::DeleteKeyList);

        request.required_params = vec![ParamDescriptor::new("Delete", "boolean", false)];
        assert_eq!(suggested_strategy(&request), RequestStrategy::Standard);
    }

    #[test]
    fn operations_drive_bulk_signatures() {
        let mut request = make_vendor_request("PutBulkJobSpectraS3Request", HttpVerb::Put, Some(Resource::Bucket));
        request.operation = Some(Operation::StartBulkPut);
        assert_eq!(suggested_strategy(&request), RequestStrategy::StructuredObjects);

        request.operation = Some(Operation::StartBulkGet);
        assert_eq!(suggested_strategy(&request), RequestStrategy::MultiConstructor);

        request.operation = Some(Operation::VerifyPhysicalPlacement);
        assert_eq!(suggested_strategy(&request), RequestStrategy::NameList);

        request.operation = Some(Operation::Eject);
        assert_eq!(suggested_strategy(&request), RequestStrategy::Standard);
    }

    #[test]
    fn suspect_blob_bulk_requests_carry_ids() {
        let mut request = make_vendor_request(
            "ClearSuspectBlobPoolsSpectraS3Request",
            HttpVerb::Delete,
            Some(Resource::SuspectBlobPool),
        );
        request.action = Some(Action::BulkDelete);
        assert!(has_ids_payload(&request));
        assert_eq!(suggested_strategy(&request), RequestStrategy::IdList);

        request.action = Some(Action::BulkModify);
        assert!(has_ids_payload(&request));

        request.action = Some(Action::List);
        assert!(!has_ids_payload(&request));
        assert_eq!(suggested_strategy(&request), RequestStrategy::Standard);
    }

    #[test]
    fn string_bodies_for_blob_persistence_and_replication() {
        let mut persistence = make_vendor_request(
            "GetBlobPersistenceSpectraS3Request",
            HttpVerb::Get,
            Some(Resource::BlobPersistence),
        );
        persistence.action = Some(Action::List);
        assert!(has_string_payload(&persistence));
        assert_eq!(suggested_strategy(&persistence), RequestStrategy::StringBody);

        let mut replicate = make_vendor_request(
            "ReplicatePutJobSpectraS3Request",
            HttpVerb::Put,
            Some(Resource::Bucket),
        );
        replicate.operation = Some(Operation::StartBulkPut);
        replicate.required_params = vec![
            ParamDescriptor::new("Operation", "com.x.RestOperationType", false),
            ParamDescriptor::new("Replicate", VOID_TYPE, false),
        ];
        assert!(is_replicate_put_job(&replicate));
        assert_eq!(suggested_strategy(&replicate), RequestStrategy::StringBody);

        replicate.required_params.pop();
        assert!(!has_string_payload(&replicate));
        assert_eq!(suggested_strategy(&replicate), RequestStrategy::StructuredObjects);
    }

    #[test]
    fn eject_with_blobs_lists_names() {
        let mut request = make_vendor_request(
            "EjectStorageDomainBlobsSpectraS3Request",
            HttpVerb::Put,
            Some(Resource::Tape),
        );
        request.action = Some(Action::BulkModify);
        request.operation = Some(Operation::Eject);
        request.required_params = vec![
            ParamDescriptor::new("Blobs", VOID_TYPE, false),
            ParamDescriptor::new("StorageDomainId", "java.util.UUID", false),
        ];
        assert!(is_eject_storage_domain_blobs(&request));
        assert_eq!(suggested_strategy(&request), RequestStrategy::NameList);

        // the whole-domain eject has no blob list
        request.required_params.remove(0);
        assert!(!is_eject_storage_domain_blobs(&request));
        assert_eq!(suggested_strategy(&request), RequestStrategy::Standard);
    }
}
