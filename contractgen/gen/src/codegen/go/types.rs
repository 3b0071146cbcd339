//! Contract type -> Go type mapping.
//!
//! ## Examples
//!
//! ```
//! use contractgen_gen::codegen::go::types::{to_go_type, to_go_request_type, to_go_response_type};
//!
//! assert_eq!(to_go_type("java.lang.Integer").unwrap(), "int");
//! assert_eq!(to_go_request_type("java.lang.Integer", true).unwrap(), "*int");
//! assert_eq!(to_go_response_type("array", Some("com.x.Bucket"), false).unwrap(), "[]Bucket");
//! ```

use contractgen_define::ARRAY_TYPE;

use crate::errors::GeneratorError;
use crate::naming::{capitalize, remove_path};

const GO_PRIMITIVES: &[&str] = &["bool", "int", "string", "float64", "int64"];

/// Maps a contract type to its Go spelling. `void` maps to the empty string.
///
/// ## Errors
///
/// Returns `GeneratorError::MalformedTypeDescriptor` for an empty type name.
pub fn to_go_type(contract_type: &str) -> Result<String, GeneratorError> {
    if contract_type.is_empty() {
        return Err(GeneratorError::MalformedTypeDescriptor {
            type_name: contract_type.to_string(),
            reason: "contract type name is empty".to_string(),
        });
    }

    let name = remove_path(contract_type);
    let mapped = match name.to_lowercase().as_str() {
        "boolean" => "bool",
        "integer" | "int" => "int",
        "string" | "uuid" | "date" => "string",
        "double" => "float64",
        "long" => "int64",
        "void" => "",
        _ => name,
    };
    Ok(mapped.to_string())
}

/// True for Go's built-in scalar types used by the generated SDK.
pub fn is_go_primitive(go_type: &str) -> bool {
    GO_PRIMITIVES.contains(&go_type)
}

/// Type used for request fields and setter arguments: nullable primitives
/// become pointers.
pub fn to_go_request_type(contract_type: &str, nullable: bool) -> Result<String, GeneratorError> {
    let go_type = to_go_type(contract_type)?;
    if nullable && is_go_primitive(&go_type) {
        return Ok(format!("*{go_type}"));
    }
    Ok(go_type)
}

/// Type used for struct fields of response types: arrays become slices of
/// their component, nullable non-void types become pointers.
pub fn to_go_response_type(
    contract_type: &str,
    component_type: Option<&str>,
    nullable: bool,
) -> Result<String, GeneratorError> {
    if contract_type.eq_ignore_ascii_case(ARRAY_TYPE) {
        let component = component_type.ok_or_else(|| GeneratorError::MalformedTypeDescriptor {
            type_name: contract_type.to_string(),
            reason: "array type without a component type".to_string(),
        })?;
        return Ok(format!("[]{}", to_go_type(component)?));
    }

    let go_type = to_go_type(contract_type)?;
    if nullable && !go_type.is_empty() {
        return Ok(format!("*{go_type}"));
    }
    Ok(go_type)
}

/// True when a contract type needs `strconv` to be rendered as a query value.
pub fn uses_strconv(contract_type: &str) -> bool {
    matches!(
        remove_path(contract_type).to_lowercase().as_str(),
        "boolean" | "integer" | "int" | "double" | "long"
    )
}

/// Namespace used by parse helpers: `int` -> `Int`, `*int` -> `NullableInt`.
pub fn parser_namespace(go_type: &str) -> String {
    match go_type.strip_prefix('*') {
        Some(inner) => format!("Nullable{}", capitalize(inner)),
        None => capitalize(go_type),
    }
}

/// Go expression converting variable `name` of `go_type` to a string.
///
/// ## Examples
///
/// ```
/// use contractgen_gen::codegen::go::types::go_var_to_string;
///
/// assert_eq!(go_var_to_string("maxKeys", "int"), "strconv.Itoa(maxKeys)");
/// assert_eq!(go_var_to_string("maxKeys", "*int"), "strconv.Itoa(*maxKeys)");
/// assert_eq!(go_var_to_string("prefix", "string"), "prefix");
/// assert_eq!(go_var_to_string("state", "TapeState"), "state.String()");
/// ```
pub fn go_var_to_string(name: &str, go_type: &str) -> String {
    let (deref, base) = match go_type.strip_prefix('*') {
        Some(inner) => (format!("*{name}"), inner),
        None => (name.to_string(), go_type),
    };

    match base {
        "" => "\"\"".to_string(),
        "int" => format!("strconv.Itoa({deref})"),
        "bool" => format!("strconv.FormatBool({deref})"),
        "int64" => format!("strconv.FormatInt({deref}, 10)"),
        "float64" => format!("strconv.FormatFloat({deref}, 'f', -1, 64)"),
        "string" => deref,
        _ => format!("{name}.String()"),
    }
}

/// Go expression converting field `name` of `go_type` to a `*string`, as
/// the client passes optional query parameters. Value fields are passed by
/// address.
///
/// ## Examples
///
/// ```
/// use contractgen_gen::codegen::go::types::go_var_to_string_ptr;
///
/// assert_eq!(go_var_to_string_ptr("request.MaxKeys", "*int"), "networking.IntPtrToStrPtr(request.MaxKeys)");
/// assert_eq!(go_var_to_string_ptr("request.Prefix", "*string"), "request.Prefix");
/// assert_eq!(go_var_to_string_ptr("request.Type", "TapeType"), "networking.InterfaceToStrPtr(request.Type)");
/// ```
pub fn go_var_to_string_ptr(name: &str, go_type: &str) -> String {
    let (pointer, base) = match go_type.strip_prefix('*') {
        Some(inner) => (name.to_string(), inner),
        None => (format!("&{name}"), go_type),
    };

    match base {
        "int" => format!("networking.IntPtrToStrPtr({pointer})"),
        "int64" => format!("networking.Int64PtrToStrPtr({pointer})"),
        "bool" => format!("networking.BoolPtrToStrPtr({pointer})"),
        "float64" => format!("networking.Float64PtrToStrPtr({pointer})"),
        "string" => pointer,
        _ => format!("networking.InterfaceToStrPtr({name})"),
    }
}
