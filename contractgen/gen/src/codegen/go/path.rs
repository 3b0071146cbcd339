//! URL path expressions for Go requests.
//!
//! The path is emitted as a Go string expression referencing fields of the
//! request struct, e.g. `"/" + getObjectRequest.bucketName + "/" + getObjectRequest.objectName`.
//!
//! ## Examples
//!
//! ```
//! use contractgen_define::{Classification, RequestDescriptor, Requirement};
//! use contractgen_gen::codegen::go::path::build_path;
//! # let request = RequestDescriptor {
//! #     name: "com.x.GetObjectRequest".to_string(), http_verb: None,
//! #     classification: Classification::GenericStorage,
//! #     bucket_requirement: Requirement::Required, object_requirement: Requirement::Required,
//! #     action: None, resource: None, resource_type: None, operation: None, include_in_path: false,
//! #     response_codes: vec![], optional_params: vec![], required_params: vec![],
//! # };
//!
//! assert_eq!(
//!     build_path(&request).unwrap(),
//!     r#""/" + getObjectRequest.bucketName + "/" + getObjectRequest.objectName"#
//! );
//! ```

use contractgen_define::{Classification, RequestDescriptor, Resource};

use crate::classification::{NotificationVariant, has_bucket_name_in_path, notification_variant};
use crate::codegen::go::models::Arg;
use crate::errors::GeneratorError;
use crate::naming::{capitalize, remove_path, uncapitalize, underscore_to_lower_camel};

const VENDOR_PREFIX: &str = "/_rest_/";

/// Variable holding the request inside client methods.
pub const CLIENT_REQUEST_REF: &str = "request";

/// How path expressions refer to the request's fields.
struct FieldRef<'a> {
    receiver: &'a str,
    exported: bool,
}

impl FieldRef<'_> {
    fn field(&self, name: &str) -> String {
        if self.exported {
            format!("{}.{}", self.receiver, capitalize(name))
        } else {
            format!("{}.{name}", self.receiver)
        }
    }
}

/// Name of the struct variable inside generated methods.
pub fn receiver_name(request_name: &str) -> String {
    uncapitalize(remove_path(request_name))
}

/// True when the request's resource becomes a constructor argument.
pub fn is_resource_an_arg(request: &RequestDescriptor) -> bool {
    request
        .resource
        .is_some_and(|r| request.include_in_path && !r.is_singleton())
}

/// Derives the argument identifying a resource in the path.
///
/// ## Errors
///
/// Returns `GeneratorError::SingletonResource` for singleton resources,
/// which have nothing to identify.
pub fn resource_arg(resource: Resource) -> Result<Arg, GeneratorError> {
    if resource.is_singleton() {
        return Err(GeneratorError::SingletonResource { resource });
    }

    let name = if resource.is_notification() {
        "notificationId".to_string()
    } else if resource.is_named() {
        format!("{}Name", underscore_to_lower_camel(&resource.to_string()))
    } else if resource.is_id_bearing() {
        format!("{}Id", underscore_to_lower_camel(&resource.to_string()))
    } else {
        underscore_to_lower_camel(&resource.to_string())
    };
    Ok(Arg::new(name, "string"))
}

/// Builds the path expression for a request.
///
/// ## Errors
///
/// - `GeneratorError::UnsupportedClassification` for classifications without path rules
/// - `GeneratorError::SingletonResource` if a singleton resource would be an argument
pub fn build_path(request: &RequestDescriptor) -> Result<String, GeneratorError> {
    let receiver = receiver_name(&request.name);
    path_expression(
        request,
        &FieldRef {
            receiver: &receiver,
            exported: false,
        },
    )
}

/// Builds the path expression used by the client, which reads the exported
/// fields of its `request` argument (`request.BucketName`).
///
/// ## Errors
///
/// Same as [`build_path`].
pub fn build_client_path(request: &RequestDescriptor) -> Result<String, GeneratorError> {
    path_expression(
        request,
        &FieldRef {
            receiver: CLIENT_REQUEST_REF,
            exported: true,
        },
    )
}

fn path_expression(request: &RequestDescriptor, fields: &FieldRef) -> Result<String, GeneratorError> {
    match request.classification {
        Classification::GenericStorage => Ok(generic_storage_path(request, fields)),
        Classification::VendorExtension => vendor_extension_path(request, fields),
        other => Err(GeneratorError::UnsupportedClassification {
            request: request.name.clone(),
            classification: other,
        }),
    }
}

fn generic_storage_path(request: &RequestDescriptor, fields: &FieldRef) -> String {
    let mut path = String::from("\"/\"");
    if request.requires_bucket() {
        path.push_str(&format!(" + {}", fields.field("bucketName")));
    }
    if request.requires_object() {
        path.push_str(&format!(" + \"/\" + {}", fields.field("objectName")));
    }
    path
}

fn vendor_extension_path(
    request: &RequestDescriptor,
    fields: &FieldRef,
) -> Result<String, GeneratorError> {
    let Some(resource) = request.resource else {
        return Ok(format!("\"{VENDOR_PREFIX}\""));
    };

    let prefix = format!("\"{VENDOR_PREFIX}{}", resource.path_segment());

    let is_addressed_notification = request.include_in_path
        && matches!(
            notification_variant(request),
            Some(NotificationVariant::Delete | NotificationVariant::Get)
        );

    let path = if is_addressed_notification {
        format!("{prefix}/\" + {}", fields.field("notificationId"))
    } else if has_bucket_name_in_path(request) {
        format!("{prefix}/\" + {}", fields.field("bucketName"))
    } else if is_resource_an_arg(request) {
        let arg = resource_arg(resource)?;
        format!("{prefix}/\" + {}", fields.field(&arg.name))
    } else {
        format!("{prefix}\"")
    };
    Ok(path)
}
