//! Constructor arguments, struct fields, query parameters and with-setters.
//!
//! Every request struct is assembled from the same pieces:
//!
//! 1. Leading arguments, in fixed order: `bucketName` (bucket required),
//!    `objectName` (object required), the resource argument (resource in path,
//!    non-singleton).
//! 2. Required query parameters, minus `void` flags and the `Operation` selector.
//! 3. Optional query parameters, which never appear in the constructor; each
//!    gets exactly one with-setter and one struct field.
//!
//! Argument and field lists are deduplicated by name and sorted with
//! [`compare_field_names`](super::models::compare_field_names).

use contractgen_define::{ParamDescriptor, RequestDescriptor};
use serde::Serialize;
use strum::Display;

use crate::codegen::go::models::{Arg, Assignment, QueryParam, sort_and_dedup};
use crate::codegen::go::path::{CLIENT_REQUEST_REF, is_resource_an_arg, resource_arg};
use crate::codegen::go::types::{go_var_to_string, to_go_request_type, uses_strconv};
use crate::errors::GeneratorError;
use crate::naming::{camel_to_underscore, capitalize, remove_path, uncapitalize};

/// Name of the control parameter carrying the operation selector.
const OPERATION_PARAM: &str = "Operation";

/// Go's reserved word that cannot be used as a parameter name.
const TYPE_PARAM: &str = "Type";

/// Field/argument name for a parameter.
///
/// A parameter called `Type` is renamed after its contract type, since `type`
/// is reserved in Go.
///
/// ## Examples
///
/// ```
/// use contractgen_define::ParamDescriptor;
/// use contractgen_gen::codegen::go::params::go_param_name;
///
/// assert_eq!(go_param_name(&ParamDescriptor::new("MaxKeys", "int", false)), "maxKeys");
/// assert_eq!(go_param_name(&ParamDescriptor::new("Type", "com.x.TapeType", true)), "tapeType");
/// ```
pub fn go_param_name(param: &ParamDescriptor) -> String {
    if param.name == TYPE_PARAM {
        return uncapitalize(remove_path(&param.type_name));
    }
    uncapitalize(remove_path(&param.name))
}

fn is_operation(param: &ParamDescriptor) -> bool {
    param.name == OPERATION_PARAM
}

/// Required parameters that become constructor arguments.
fn constructor_params(request: &RequestDescriptor) -> impl Iterator<Item = &ParamDescriptor> {
    request
        .required_params
        .iter()
        .filter(|p| !p.is_void() && !is_operation(p))
}

fn leading_args(request: &RequestDescriptor) -> Result<Vec<Arg>, GeneratorError> {
    let mut args = Vec::new();
    if request.requires_bucket() {
        args.push(Arg::new("bucketName", "string"));
    }
    if request.requires_object() {
        args.push(Arg::new("objectName", "string"));
    }
    if is_resource_an_arg(request)
        && let Some(resource) = request.resource
    {
        args.push(resource_arg(resource)?);
    }
    Ok(args)
}

/// Constructor arguments, excluding any payload argument.
pub fn constructor_args(request: &RequestDescriptor) -> Result<Vec<Arg>, GeneratorError> {
    let mut args = leading_args(request)?;
    for param in constructor_params(request) {
        args.push(Arg::new(
            go_param_name(param),
            to_go_request_type(&param.type_name, param.nullable)?,
        ));
    }
    Ok(sort_and_dedup(args))
}

/// Struct fields, excluding payload and strategy-specific fields.
///
/// Optional `void` parameters become presence booleans; other optional
/// parameters keep their request type (pointer when nullable primitive).
pub fn struct_fields(request: &RequestDescriptor) -> Result<Vec<Arg>, GeneratorError> {
    let mut fields = constructor_args(request)?;
    for param in request.optional_params.iter().filter(|p| !is_operation(p)) {
        let go_type = if param.is_void() {
            "bool".to_string()
        } else {
            to_go_request_type(&param.type_name, param.nullable)?
        };
        fields.push(Arg::new(go_param_name(param), go_type));
    }
    Ok(sort_and_dedup(fields))
}

/// One simple assignment per constructor argument.
pub fn field_assignments(args: &[Arg]) -> Vec<Assignment> {
    args.iter().map(|a| Assignment::simple(&a.name)).collect()
}

/// Query parameters set by the constructor: the operation selector first,
/// then every required parameter except the selector itself.
///
/// Required `void` parameters are sent with an empty value.
pub fn query_params(request: &RequestDescriptor) -> Result<Vec<QueryParam>, GeneratorError> {
    let mut params = Vec::new();
    if let Some(operation) = request.operation {
        params.push(QueryParam::new(
            "operation",
            format!("\"{}\"", operation.query_value()),
        ));
    }
    params.extend(required_query_params(request, |name| name.to_string())?);
    Ok(params)
}

/// Required query parameters as the client sends them, reading the exported
/// fields of its `request` argument. The operation selector is left out.
pub fn client_query_params(request: &RequestDescriptor) -> Result<Vec<QueryParam>, GeneratorError> {
    required_query_params(request, client_field)
}

/// `maxKeys` -> `request.MaxKeys`
pub fn client_field(name: &str) -> String {
    format!("{CLIENT_REQUEST_REF}.{}", capitalize(name))
}

fn required_query_params(
    request: &RequestDescriptor,
    field_ref: impl Fn(&str) -> String,
) -> Result<Vec<QueryParam>, GeneratorError> {
    request
        .required_params
        .iter()
        .filter(|p| !is_operation(p))
        .map(|param| {
            let go_type = to_go_request_type(&param.type_name, param.nullable)?;
            Ok(QueryParam::new(
                camel_to_underscore(&param.name),
                go_var_to_string(&field_ref(&go_param_name(param)), &go_type),
            ))
        })
        .collect()
}

/// How a with-setter stores its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "kebab-case")]
pub enum SetterKind {
    /// `void` parameter: no argument, sets a presence flag.
    Presence,
    /// Non-nullable parameter passed by value.
    Value,
    /// Nullable parameter passed as pointer/optional type.
    Nullable,
}

/// A `With<Param>` method for one optional parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WithSetter {
    pub kind: SetterKind,
    /// Struct field the setter writes.
    pub field: Arg,
    pub query_key: String,
    /// Go expression producing the query value from the field.
    pub query_value: String,
    pub method_name: String,
    /// The Go parameter list of the setter.
    pub parameters: String,
    /// Value assigned to the field.
    pub assignment: String,
}

impl WithSetter {
    pub fn new(kind: SetterKind, field: Arg, query_key: String, query_value: String) -> Self {
        let (parameters, assignment) = match kind {
            SetterKind::Presence => (String::new(), "true".to_string()),
            SetterKind::Value | SetterKind::Nullable => (field.declaration(), field.name.clone()),
        };
        Self {
            kind,
            method_name: format!("With{}", capitalize(&field.name)),
            field,
            query_key,
            query_value,
            parameters,
            assignment,
        }
    }
}

/// One with-setter per optional parameter, in declaration order.
pub fn with_setters(request: &RequestDescriptor) -> Result<Vec<WithSetter>, GeneratorError> {
    request
        .optional_params
        .iter()
        .filter(|p| !is_operation(p))
        .map(with_setter)
        .collect()
}

fn with_setter(param: &ParamDescriptor) -> Result<WithSetter, GeneratorError> {
    let name = go_param_name(param);
    let query_key = camel_to_underscore(&param.name);

    if param.is_void() {
        return Ok(WithSetter::new(
            SetterKind::Presence,
            Arg::new(name, "bool"),
            query_key,
            "\"\"".to_string(),
        ));
    }

    let go_type = to_go_request_type(&param.type_name, param.nullable)?;
    let kind = if param.nullable {
        SetterKind::Nullable
    } else {
        SetterKind::Value
    };
    let query_value = go_var_to_string(&name, &go_type);
    Ok(WithSetter::new(kind, Arg::new(name, go_type), query_key, query_value))
}

/// True when any parameter needs `strconv` for its query value.
pub fn needs_strconv(request: &RequestDescriptor) -> bool {
    request
        .required_params
        .iter()
        .chain(request.optional_params.iter())
        .any(|p| uses_strconv(&p.type_name))
}
