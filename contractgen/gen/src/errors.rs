//! Error types for the contract model generator.
//!
//! Apart from the I/O and configuration variants, every error here is a
//! contract or configuration defect found at generation time. None of them
//! is transient: a failing request or type aborts on the first error.

use contractgen_define::{Classification, ContractError, Resource};
use thiserror::Error;

use crate::config::RequestStrategy;

/// Errors that can occur during model generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Failed to parse the contract document
    #[error("Failed to parse contract: {0}")]
    ParseError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A model could not be rendered
    #[error("Failed to render '{0}'")]
    RenderError(String),

    /// Output directory does not exist
    #[error("Output directory does not exist: {0}")]
    OutputDirNotFound(String),

    /// The request's classification has no path rules.
    #[error("Request '{request}' has unsupported classification '{classification}'")]
    UnsupportedClassification {
        request: String,
        classification: Classification,
    },

    /// A singleton resource cannot be turned into a request argument.
    #[error("Cannot derive an argument from singleton resource '{resource}'")]
    SingletonResource { resource: Resource },

    /// The request declares no HTTP verb but one is needed.
    #[error("Request '{request}' has no HTTP verb")]
    MissingHttpVerb { request: String },

    /// Success codes resolve to more than one payload type.
    #[error("Request '{request}' has ambiguous response payload: {types:?}")]
    AmbiguousPayload { request: String, types: Vec<String> },

    /// Success codes resolve to no payload type where one is required.
    #[error("Request '{request}' has no response payload type")]
    NoPayloadFound { request: String },

    /// No non-error status codes are declared.
    #[error("Request '{request}' declares no success response codes")]
    EmptyResponseCodes { request: String },

    /// A response code lists no response type at all.
    #[error("Response code {code} of request '{request}' has no response type")]
    MissingResponseType { request: String, code: u16 },

    /// A payload type is referenced but not defined in the type map.
    #[error("Request '{request}' references undefined type '{type_name}'")]
    UnknownType { request: String, type_name: String },

    /// A type descriptor cannot produce a model.
    #[error("Malformed type descriptor '{type_name}': {reason}")]
    MalformedTypeDescriptor { type_name: String, reason: String },

    /// The special-case table names a request or type missing from the contract.
    #[error("Special case '{name}' does not exist in the contract")]
    UnknownSpecialCase { name: String },

    /// A request matches a special-handling signature but is not in the table.
    #[error(
        "Request '{name}' needs special handling but is not listed in special_cases. Suggestion: add `\"{name}\" = \"{suggested}\"`"
    )]
    UnlistedSpecialCase {
        name: String,
        suggested: RequestStrategy,
    },

    /// Annotation data on an element is inconsistent.
    #[error(transparent)]
    Contract(#[from] ContractError),
}
