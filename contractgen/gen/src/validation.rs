//! Special-case table validation.
//!
//! The special-case table maps request names to request strategies. It is
//! checked against the live contract before generation so that a renamed or
//! newly added request cannot silently fall back to the standard strategy.
//!
//! ## Validation Checks
//!
//! - **Stale entries**: every `special_cases` key and every
//!   `unwrapped_list_types` entry must name something in the contract
//! - **Missing entries**: every request whose shape matches a special-handling
//!   signature (see [`suggested_strategy`]) must be listed
//!
//! A listed request may use a different strategy than the suggested one;
//! the table is authoritative once an entry exists.
//!
//! ## Examples
//!
//! ```
//! use contractgen_define::Contract;
//! use contractgen_gen::config::GeneratorConfig;
//! use contractgen_gen::validation::validate_special_cases;
//!
//! let contract = Contract::default();
//! assert!(validate_special_cases(&contract, &GeneratorConfig::empty()).is_ok());
//! assert!(validate_special_cases(&contract, &GeneratorConfig::default()).is_err());
//! ```

use std::collections::BTreeSet;

use contractgen_define::Contract;
use tracing::warn;

use crate::classification::suggested_strategy;
use crate::config::{GeneratorConfig, RequestStrategy};
use crate::errors::GeneratorError;
use crate::naming::remove_path;

/// Collects every special-case violation, in table order then request order.
pub fn find_special_case_violations(
    contract: &Contract,
    config: &GeneratorConfig,
) -> Vec<GeneratorError> {
    let request_names: BTreeSet<&str> = contract
        .requests
        .iter()
        .map(|r| remove_path(&r.name))
        .collect();
    let type_names: BTreeSet<&str> = contract.types.keys().map(|k| remove_path(k)).collect();

    let stale_requests = config
        .special_cases
        .keys()
        .filter(|name| !request_names.contains(name.as_str()));
    let stale_types = config
        .unwrapped_list_types
        .iter()
        .filter(|name| !type_names.contains(remove_path(name)));

    let mut violations: Vec<GeneratorError> = stale_requests
        .chain(stale_types)
        .map(|name| GeneratorError::UnknownSpecialCase { name: name.clone() })
        .collect();

    for request in &contract.requests {
        let name = remove_path(&request.name);
        let suggested = suggested_strategy(request);
        if suggested != RequestStrategy::Standard && !config.special_cases.contains_key(name) {
            violations.push(GeneratorError::UnlistedSpecialCase {
                name: name.to_string(),
                suggested,
            });
        }
    }

    violations
}

/// Validates the special-case table against the contract.
///
/// In strict mode the first violation is returned as an error. Otherwise
/// each violation is logged as a warning and generation proceeds.
///
/// ## Errors
///
/// - `GeneratorError::UnknownSpecialCase` for a table entry with no
///   matching request or type
/// - `GeneratorError::UnlistedSpecialCase` for a request needing special
///   handling that the table does not list
pub fn validate_special_cases(
    contract: &Contract,
    config: &GeneratorConfig,
) -> Result<(), GeneratorError> {
    let violations = find_special_case_violations(contract, config);

    if config.strict {
        return match violations.into_iter().next() {
            Some(first) => Err(first),
            None => Ok(()),
        };
    }

    for violation in &violations {
        warn!("{violation}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use contractgen_define::{Action, HttpVerb, Operation, ParamDescriptor, Requirement, Resource, VOID_TYPE};

    use super::*;
    use crate::test_utils::{make_generic_request, make_type, make_type_map, make_vendor_request};

    fn get_object() -> contractgen_define::RequestDescriptor {
        let mut request = make_generic_request("com.x.GetObjectRequest", HttpVerb::Get);
        request.bucket_requirement = Requirement::Required;
        request.object_requirement = Requirement::Required;
        request
    }

    #[test]
    fn listed_requests_pass() {
        let contract = Contract {
            requests: vec![get_object()],
            types: Default::default(),
        };
        let config = GeneratorConfig::empty().with_special_case("GetObjectRequest", RequestStrategy::ObjectRetrieval);
        assert!(validate_special_cases(&contract, &config).is_ok());
    }

    #[test]
    fn stale_entry_is_unknown() {
        let contract = Contract::default();
        let config = GeneratorConfig::empty().with_special_case("GoneRequest", RequestStrategy::IdList);

        let err = validate_special_cases(&contract, &config).unwrap_err();
        assert!(matches!(err, GeneratorError::UnknownSpecialCase { ref name } if name == "GoneRequest"));
    }

    #[test]
    fn unwrapped_list_type_must_exist() {
        let config = GeneratorConfig::empty().with_unwrapped_list_type("JobList");
        let missing = Contract::default();
        assert!(matches!(
            validate_special_cases(&missing, &config),
            Err(GeneratorError::UnknownSpecialCase { .. })
        ));

        let present = Contract {
            requests: vec![],
            types: make_type_map(vec![make_type("com.x.JobList", vec![])]),
        };
        assert!(validate_special_cases(&present, &config).is_ok());
    }

    #[test]
    fn unlisted_signature_suggests_strategy() {
        let mut bulk_get = make_vendor_request("com.x.GetBulkJobSpectraS3Request", HttpVerb::Put, Some(Resource::Bucket));
        bulk_get.operation = Some(Operation::StartBulkGet);
        let contract = Contract {
            requests: vec![bulk_get],
            types: Default::default(),
        };

        let err = validate_special_cases(&contract, &GeneratorConfig::empty()).unwrap_err();
        match err {
            GeneratorError::UnlistedSpecialCase { name, suggested } => {
                assert_eq!(name, "GetBulkJobSpectraS3Request");
                assert_eq!(suggested, RequestStrategy::MultiConstructor);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unlisted_body_shapes_are_reported() {
        let mut mark_suspect = make_vendor_request(
            "com.x.MarkSuspectBlobTapesSpectraS3Request",
            HttpVerb::Put,
            Some(Resource::SuspectBlobTape),
        );
        mark_suspect.action = Some(Action::BulkModify);

        let persistence = make_vendor_request(
            "com.x.GetBlobPersistenceSpectraS3Request",
            HttpVerb::Get,
            Some(Resource::BlobPersistence),
        );

        let mut eject_blobs = make_vendor_request(
            "com.x.EjectStorageDomainBlobsSpectraS3Request",
            HttpVerb::Put,
            Some(Resource::Tape),
        );
        eject_blobs.operation = Some(Operation::Eject);
        eject_blobs.required_params = vec![ParamDescriptor::new("Blobs", VOID_TYPE, false)];

        let contract = Contract {
            requests: vec![mark_suspect, persistence, eject_blobs],
            types: Default::default(),
        };

        let suggestions: Vec<(String, RequestStrategy)> =
            find_special_case_violations(&contract, &GeneratorConfig::empty())
                .into_iter()
                .map(|violation| match violation {
                    GeneratorError::UnlistedSpecialCase { name, suggested } => (name, suggested),
                    other => panic!("unexpected error: {other}"),
                })
                .collect();
        assert_eq!(
            suggestions,
            [
                ("MarkSuspectBlobTapesSpectraS3Request".to_string(), RequestStrategy::IdList),
                ("GetBlobPersistenceSpectraS3Request".to_string(), RequestStrategy::StringBody),
                ("EjectStorageDomainBlobsSpectraS3Request".to_string(), RequestStrategy::NameList),
            ]
        );

        let listed = GeneratorConfig::empty()
            .with_special_case("MarkSuspectBlobTapesSpectraS3Request", RequestStrategy::IdList)
            .with_special_case("GetBlobPersistenceSpectraS3Request", RequestStrategy::StringBody)
            .with_special_case("EjectStorageDomainBlobsSpectraS3Request", RequestStrategy::NameList);
        assert!(validate_special_cases(&contract, &listed).is_ok());
    }

    #[test]
    fn explicit_entry_overrides_suggestion() {
        let contract = Contract {
            requests: vec![get_object()],
            types: Default::default(),
        };
        let config = GeneratorConfig::empty().with_special_case("GetObjectRequest", RequestStrategy::Standard);
        assert!(validate_special_cases(&contract, &config).is_ok());
    }

    #[test]
    fn lenient_mode_collects_but_passes() {
        let contract = Contract {
            requests: vec![get_object()],
            types: Default::default(),
        };
        let mut config = GeneratorConfig::empty().with_special_case("GoneRequest", RequestStrategy::IdList);
        config.strict = false;

        assert!(validate_special_cases(&contract, &config).is_ok());
        let violations = find_special_case_violations(&contract, &config);
        assert_eq!(violations.len(), 2);
        assert!(matches!(violations[0], GeneratorError::UnknownSpecialCase { .. }));
        assert!(matches!(violations[1], GeneratorError::UnlistedSpecialCase { .. }));
    }
}
