//! Go response models.
//!
//! Codes below [`ERROR_THRESHOLD`] are success codes. Together they must
//! resolve to at most one payload type; the payload shape then decides the
//! response struct and how each success code is parsed:
//!
//! | Payload | Struct content | Code with body | Code without body |
//! |---|---|---|---|
//! | empty | headers only | - | empty struct |
//! | text | `Content string` | read body as string | empty struct |
//! | typed | `<Type> T` (or `*T` with several success codes) | structured parse | empty struct |
//! | stream | `Content io.ReadCloser` | hand over the body | - |
//! | blob checksums | checksum type + map | read from headers | - |
//!
//! Every response keeps the raw `Headers http.Header` regardless of payload.

use std::collections::BTreeSet;

use contractgen_define::{RequestDescriptor, ResponseCodeDescriptor, TypeMap};
use serde::Serialize;
use strum::Display;

use crate::codegen::go::types::to_go_type;
use crate::config::RequestStrategy;
use crate::errors::GeneratorError;
use crate::naming::{remove_path, to_response_name};
use crate::render::TemplateId;

/// Status codes at or above this value are errors.
pub const ERROR_THRESHOLD: u16 = 300;

const STRING_TYPES: &[&str] = &["java.lang.String", "string"];
const DATA_ROOT: &str = "Data";

/// Shape of the response struct's payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ResponsePayload {
    Empty,
    Text,
    Stream,
    BlobChecksums,
    Typed {
        /// Struct field name: the path-less type name.
        field: String,
        go_type: String,
        xml_tag: String,
    },
}

impl ResponsePayload {
    /// Struct body lines for the payload, excluding headers.
    pub fn struct_fields(&self) -> Vec<String> {
        match self {
            ResponsePayload::Empty => vec![],
            ResponsePayload::Text => vec!["Content string".to_string()],
            ResponsePayload::Stream => vec!["Content io.ReadCloser".to_string()],
            ResponsePayload::BlobChecksums => vec![
                "BlobChecksumType ChecksumType".to_string(),
                "BlobChecksums map[int64]string".to_string(),
            ],
            ResponsePayload::Typed {
                field,
                go_type,
                xml_tag,
            } => vec![format!("{field} {go_type} `xml:\"{xml_tag}\"`")],
        }
    }
}

/// How a single status code is turned into a response value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "kebab-case")]
pub enum ParseStrategy {
    Empty,
    Text,
    Typed,
    Stream,
    BlobChecksums,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseCodeModel {
    pub code: u16,
    pub strategy: ParseStrategy,
    /// Go statements returning the parsed response.
    pub parsing_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseModel {
    pub name: String,
    pub payload: ResponsePayload,
    /// Payload struct body lines, excluding headers.
    pub struct_fields: Vec<String>,
    pub expected_codes: Vec<u16>,
    pub codes: Vec<ResponseCodeModel>,
    pub imports: BTreeSet<String>,
    pub template: TemplateId,
}

impl ResponseModel {
    /// The payload field's Go type, when the payload is typed.
    pub fn payload_type(&self) -> Option<&str> {
        match &self.payload {
            ResponsePayload::Typed { go_type, .. } => Some(go_type),
            _ => None,
        }
    }

    /// Comma-separated success codes, as passed to the status check.
    pub fn expected_codes_list(&self) -> String {
        self.expected_codes
            .iter()
            .map(u16::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn success_codes(request: &RequestDescriptor) -> Vec<&ResponseCodeDescriptor> {
    request
        .response_codes
        .iter()
        .filter(|c| c.code < ERROR_THRESHOLD)
        .collect()
}

fn is_string_type(type_name: &str) -> bool {
    STRING_TYPES.iter().any(|s| s.eq_ignore_ascii_case(type_name))
}

/// Distinct payload-bearing types of the success codes, in declaration order.
fn payload_types(request: &RequestDescriptor) -> Vec<&str> {
    let mut types: Vec<&str> = Vec::new();
    for code in success_codes(request) {
        if let Some(first) = code.response_types.first()
            && !first.is_null()
            && !first.type_name.is_empty()
            && !types.contains(&first.type_name.as_str())
        {
            types.push(&first.type_name);
        }
    }
    types
}

/// The single payload type of a request's success codes.
///
/// ## Errors
///
/// - `GeneratorError::NoPayloadFound` when no success code carries a body
/// - `GeneratorError::AmbiguousPayload` when success codes carry different types
pub fn payload_type(request: &RequestDescriptor) -> Result<String, GeneratorError> {
    match payload_types(request).as_slice() {
        [] => Err(GeneratorError::NoPayloadFound {
            request: request.name.clone(),
        }),
        [single] => Ok((*single).to_string()),
        many => Err(GeneratorError::AmbiguousPayload {
            request: request.name.clone(),
            types: many.iter().map(|t| t.to_string()).collect(),
        }),
    }
}

fn check_codes(request: &RequestDescriptor) -> Result<Vec<u16>, GeneratorError> {
    if let Some(code) = request
        .response_codes
        .iter()
        .find(|c| c.response_types.is_empty())
    {
        return Err(GeneratorError::MissingResponseType {
            request: request.name.clone(),
            code: code.code,
        });
    }

    let codes: Vec<u16> = success_codes(request).iter().map(|c| c.code).collect();
    if codes.is_empty() {
        return Err(GeneratorError::EmptyResponseCodes {
            request: request.name.clone(),
        });
    }
    Ok(codes)
}

/// XML root tag of a typed payload.
fn xml_tag(type_name: &str, type_map: &TypeMap) -> String {
    type_map
        .get(type_name)
        .and_then(|t| t.name_to_marshal.as_deref())
        .filter(|n| !n.is_empty() && *n != DATA_ROOT)
        .unwrap_or_else(|| remove_path(type_name))
        .to_string()
}

fn typed_payload(
    request: &RequestDescriptor,
    type_name: &str,
    success_count: usize,
    type_map: &TypeMap,
) -> Result<ResponsePayload, GeneratorError> {
    if !type_map.contains_key(type_name) {
        return Err(GeneratorError::UnknownType {
            request: request.name.clone(),
            type_name: type_name.to_string(),
        });
    }

    let go_type = to_go_type(type_name)?;
    let go_type = if success_count > 1 {
        format!("*{go_type}")
    } else {
        go_type
    };
    Ok(ResponsePayload::Typed {
        field: remove_path(type_name).to_string(),
        go_type,
        xml_tag: xml_tag(type_name, type_map),
    })
}

fn parsing_code(name: &str, strategy: ParseStrategy, payload: &ResponsePayload) -> String {
    match strategy {
        ParseStrategy::Empty => {
            format!("return &{name}{{Headers: webResponse.Header()}}, nil")
        }
        ParseStrategy::Text => format!(
            "content, err := getResponseBodyAsString(webResponse)\n\
             if err != nil {{\n\treturn nil, err\n}}\n\
             return &{name}{{Content: content, Headers: webResponse.Header()}}, nil"
        ),
        ParseStrategy::Stream => {
            format!("return &{name}{{Content: webResponse.Body(), Headers: webResponse.Header()}}, nil")
        }
        ParseStrategy::BlobChecksums => format!(
            "checksumType, err := getBlobChecksumType(webResponse.Header())\n\
             if err != nil {{\n\treturn nil, err\n}}\n\
             checksums, err := getBlobChecksumMap(webResponse.Header())\n\
             if err != nil {{\n\treturn nil, err\n}}\n\
             return &{name}{{BlobChecksumType: checksumType, BlobChecksums: checksums, Headers: webResponse.Header()}}, nil"
        ),
        ParseStrategy::Typed => {
            let (field, target) = match payload {
                ResponsePayload::Typed { field, go_type, .. } => match go_type.strip_prefix('*') {
                    Some(inner) => (field.as_str(), format!("body.{field} = &{inner}{{}}\n")),
                    None => (field.as_str(), String::new()),
                },
                _ => ("", String::new()),
            };
            let reference = if target.is_empty() {
                format!("&body.{field}")
            } else {
                format!("body.{field}")
            };
            format!(
                "var body {name}\n\
                 {target}if err := readResponseBody(webResponse, {reference}); err != nil {{\n\treturn nil, err\n}}\n\
                 body.Headers = webResponse.Header()\n\
                 return &body, nil"
            )
        }
    }
}

fn code_strategy(code: &ResponseCodeDescriptor, payload: &ResponsePayload) -> ParseStrategy {
    match payload {
        ResponsePayload::Stream => ParseStrategy::Stream,
        ResponsePayload::BlobChecksums => ParseStrategy::BlobChecksums,
        _ => match code.response_types.first() {
            Some(t) if t.is_null() => ParseStrategy::Empty,
            Some(t) if is_string_type(&t.type_name) => ParseStrategy::Text,
            Some(_) => ParseStrategy::Typed,
            None => ParseStrategy::Empty,
        },
    }
}

/// Generates the response model for one request.
///
/// ## Errors
///
/// - `GeneratorError::MissingResponseType` for a code listing no type
/// - `GeneratorError::EmptyResponseCodes` when no code is below the threshold
/// - `GeneratorError::AmbiguousPayload` when success codes carry different types
/// - `GeneratorError::UnknownType` when the payload type is not in the type map
pub fn generate_response(
    request: &RequestDescriptor,
    strategy: RequestStrategy,
    type_map: &TypeMap,
) -> Result<ResponseModel, GeneratorError> {
    let expected_codes = check_codes(request)?;
    let name = to_response_name(&request.name);

    let (payload, template) = match strategy {
        RequestStrategy::ObjectRetrieval => {
            (ResponsePayload::Stream, TemplateId::ObjectRetrievalResponse)
        }
        RequestStrategy::ObjectMetadata => {
            (ResponsePayload::BlobChecksums, TemplateId::ObjectMetadataResponse)
        }
        _ => {
            let payload = match payload_types(request).as_slice() {
                [] => ResponsePayload::Empty,
                [single] if is_string_type(single) => ResponsePayload::Text,
                [single] => typed_payload(request, single, expected_codes.len(), type_map)?,
                many => {
                    return Err(GeneratorError::AmbiguousPayload {
                        request: request.name.clone(),
                        types: many.iter().map(|t| t.to_string()).collect(),
                    });
                }
            };
            (payload, TemplateId::Response)
        }
    };

    let codes = success_codes(request)
        .into_iter()
        .map(|code| {
            let strategy = code_strategy(code, &payload);
            ResponseCodeModel {
                code: code.code,
                strategy,
                parsing_code: parsing_code(&name, strategy, &payload),
            }
        })
        .collect();

    let mut imports = BTreeSet::from(["net/http".to_string()]);
    if payload == ResponsePayload::Stream {
        imports.insert("io".to_string());
    }

    Ok(ResponseModel {
        name,
        struct_fields: payload.struct_fields(),
        payload,
        expected_codes,
        codes,
        imports,
        template,
    })
}
