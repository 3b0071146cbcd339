//! Request descriptors.
//!
//! A [`RequestDescriptor`] is one normalized request of the contract. It is
//! immutable input to the model generators: nothing downstream mutates it.

use serde::{Deserialize, Serialize};

use crate::resource::Resource;
use crate::types::{Action, Classification, HttpVerb, Operation, Requirement, ResourceType};

/// Sentinel contract type for presence-only parameters.
pub const VOID_TYPE: &str = "void";

/// Sentinel response type for codes that carry no body.
pub const NULL_TYPE: &str = "null";

/// One request declared by the contract.
///
/// ## Examples
///
/// ```
/// use contractgen_define::{Classification, HttpVerb, RequestDescriptor, Requirement};
///
/// let json = r#"{
///     "name": "com.example.GetBucketRequest",
///     "http_verb": "GET",
///     "classification": "amazons3",
///     "bucket_requirement": "REQUIRED"
/// }"#;
/// let request: RequestDescriptor = serde_json::from_str(json).unwrap();
///
/// assert_eq!(request.http_verb, Some(HttpVerb::Get));
/// assert_eq!(request.classification, Classification::GenericStorage);
/// assert_eq!(request.object_requirement, Requirement::NotAllowed);
/// assert!(request.required_params.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    /// Fully qualified request name; generators only use the text after the last `.`.
    pub name: String,
    #[serde(default)]
    pub http_verb: Option<HttpVerb>,
    pub classification: Classification,
    #[serde(default)]
    pub bucket_requirement: Requirement,
    #[serde(default)]
    pub object_requirement: Requirement,
    #[serde(default)]
    pub action: Option<Action>,
    #[serde(default)]
    pub resource: Option<Resource>,
    #[serde(default)]
    pub resource_type: Option<ResourceType>,
    #[serde(default)]
    pub operation: Option<Operation>,
    /// Whether the resource identifier is part of the URL path.
    #[serde(default)]
    pub include_in_path: bool,
    #[serde(default)]
    pub response_codes: Vec<ResponseCodeDescriptor>,
    #[serde(default)]
    pub optional_params: Vec<ParamDescriptor>,
    #[serde(default)]
    pub required_params: Vec<ParamDescriptor>,
}

impl RequestDescriptor {
    /// Returns a required or optional parameter by exact name.
    pub fn find_param(&self, name: &str) -> Option<&ParamDescriptor> {
        self.required_params
            .iter()
            .chain(self.optional_params.iter())
            .find(|p| p.name == name)
    }

    /// True when the bucket name is a required part of the request.
    pub fn requires_bucket(&self) -> bool {
        self.bucket_requirement == Requirement::Required
    }

    /// True when the object name is a required part of the request.
    pub fn requires_object(&self) -> bool {
        self.object_requirement == Requirement::Required
    }
}

/// A query parameter declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    pub name: String,
    /// Contract type name; [`VOID_TYPE`] marks a presence-only flag.
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub nullable: bool,
}

impl ParamDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            nullable,
        }
    }

    /// True for presence-only parameters (case-insensitive `void`).
    pub fn is_void(&self) -> bool {
        self.type_name.eq_ignore_ascii_case(VOID_TYPE)
    }
}

/// One HTTP status a request may answer with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseCodeDescriptor {
    pub code: u16,
    #[serde(default)]
    pub response_types: Vec<ResponseTypeDescriptor>,
}

impl ResponseCodeDescriptor {
    pub fn new(code: u16, response_types: Vec<ResponseTypeDescriptor>) -> Self {
        Self {
            code,
            response_types,
        }
    }
}

/// The payload type attached to a response code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTypeDescriptor {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub component_type: Option<String>,
}

impl ResponseTypeDescriptor {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            component_type: None,
        }
    }

    /// True when the code carries no body.
    pub fn is_null(&self) -> bool {
        self.type_name.eq_ignore_ascii_case(NULL_TYPE)
    }
}
