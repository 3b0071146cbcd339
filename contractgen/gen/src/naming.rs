//! Name manipulation shared by every target.
//!
//! Contract names are fully qualified (`com.example.domain.Bucket`); generated
//! code only ever sees the segment after the last `.`.
//!
//! ## Examples
//!
//! ```
//! use contractgen_gen::naming::{remove_path, to_response_name, camel_to_underscore};
//!
//! assert_eq!(remove_path("com.example.GetBucketRequest"), "GetBucketRequest");
//! assert_eq!(to_response_name("com.example.GetBucketRequest"), "GetBucketResponse");
//! assert_eq!(camel_to_underscore("MaxKeys"), "max_keys");
//! ```

use heck::{ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

const REQUEST_SUFFIX: &str = "Request";
const RESPONSE_SUFFIX: &str = "Response";

/// Returns the text after the last `.`, or the whole name.
pub fn remove_path(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(_, last)| last)
}

/// Uppercases the first character.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercases the first character.
pub fn uncapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `MaxKeys` / `maxKeys` -> `max_keys`
pub fn camel_to_underscore(name: &str) -> String {
    name.to_snake_case()
}

/// `TAPE_PARTITION` -> `TapePartition`
pub fn underscore_to_camel(name: &str) -> String {
    name.to_upper_camel_case()
}

/// `TAPE_PARTITION` -> `tapePartition`
pub fn underscore_to_lower_camel(name: &str) -> String {
    name.to_lower_camel_case()
}

/// `JobChunkClientProcessingOrderGuarantee` -> `JOB_CHUNK_CLIENT_PROCESSING_ORDER_GUARANTEE`
pub fn camel_to_shouty(name: &str) -> String {
    name.to_shouty_snake_case()
}

/// Path-less request name with `Request` replaced by `Response`.
pub fn to_response_name(request_name: &str) -> String {
    let name = remove_path(request_name);
    match name.strip_suffix(REQUEST_SUFFIX) {
        Some(stem) => format!("{stem}{RESPONSE_SUFFIX}"),
        None => format!("{name}{RESPONSE_SUFFIX}"),
    }
}

/// Path-less request name without its `Request` suffix.
pub fn to_command_name(request_name: &str) -> String {
    let name = remove_path(request_name);
    name.strip_suffix(REQUEST_SUFFIX).unwrap_or(name).to_string()
}
