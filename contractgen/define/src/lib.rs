//! Contractgen Definition Library
//!
//! Normalized API contract entities consumed by `contractgen-gen`. A contract
//! loader (outside this crate) produces these; the model generators only read
//! them.
//!
//! ## Core Types
//!
//! - [`Contract`] - ordered requests plus a name-keyed [`TypeMap`]
//! - [`RequestDescriptor`] - one request: verb, classification, resource, params, response codes
//! - [`ParamDescriptor`] - a query parameter (the `void` type marks presence-only flags)
//! - [`ResponseCodeDescriptor`] - an HTTP status and its payload types
//! - [`TypeDescriptor`] / [`ElementDescriptor`] - struct and enum types
//! - [`Resource`] - resource kinds with their fixed classification tables
//! - [`annotation`] - the XML-annotation reader
//!
//! ## Examples
//!
//! ```
//! use contractgen_define::prelude::*;
//!
//! let request = RequestDescriptor {
//!     name: "com.example.GetJobSpectraS3Request".to_string(),
//!     http_verb: Some(HttpVerb::Get),
//!     classification: Classification::VendorExtension,
//!     bucket_requirement: Requirement::NotAllowed,
//!     object_requirement: Requirement::NotAllowed,
//!     action: Some(Action::Show),
//!     resource: Some(Resource::Job),
//!     resource_type: Some(ResourceType::NonSingleton),
//!     operation: None,
//!     include_in_path: true,
//!     response_codes: vec![],
//!     optional_params: vec![],
//!     required_params: vec![],
//! };
//!
//! assert!(Resource::Job.is_id_bearing());
//! assert_eq!(request.resource, Some(Resource::Job));
//! ```

pub mod annotation;
pub mod contract;
pub mod error;
pub mod prelude;
pub mod request;
pub mod resource;
pub mod type_def;
pub mod types;

pub use annotation::{Annotation, AnnotationElement};
pub use contract::{Contract, TypeMap};
pub use error::ContractError;
pub use request::{
    NULL_TYPE, ParamDescriptor, RequestDescriptor, ResponseCodeDescriptor, ResponseTypeDescriptor,
    VOID_TYPE,
};
pub use resource::Resource;
pub use type_def::{ARRAY_TYPE, ElementDescriptor, EnumConstant, TypeDescriptor};
pub use types::{Action, Classification, HttpVerb, Operation, Requirement, ResourceType};
