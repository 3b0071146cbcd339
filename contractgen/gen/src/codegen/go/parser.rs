//! XML parser models for Go types.
//!
//! Every non-enum type gets a `<Type>Parser` describing how each element is
//! read from the response XML. Attributes and child nodes are handled in two
//! separate loops by the parser template, so the model keeps them apart.
//! Each element is classified exactly once:
//!
//! - attributes: primitive, string, nullable string, enum, nullable enum
//! - child nodes: wrapped list, unwrapped repeated element, enum,
//!   nullable enum, primitive, string, nested contract type
//!
//! JobList-like types are special: their single list element declares a
//! wrapper tag, but the XML repeats the entries directly under the root, so
//! it is always parsed as an unwrapped repeated element.

use std::collections::BTreeSet;

use contractgen_define::annotation::{has_wrapper_tag, is_attribute, wrapper_tag_name, xml_tag_name};
use contractgen_define::{ElementDescriptor, TypeDescriptor, TypeMap};
use serde::Serialize;

use crate::codegen::go::types::{parser_namespace, to_go_response_type, to_go_type};
use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::naming::{capitalize, remove_path, uncapitalize};
use crate::render::TemplateId;

/// How an XML attribute is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AttributeKind {
    Primitive { namespace: String },
    String,
    NullableString,
    Enum,
    NullableEnum,
}

/// How an XML child node is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ChildNodeKind {
    /// `<Wrapper><Child/>...</Wrapper>`: `xml_tag` is the wrapper, `child_tag` the entries.
    WrappedList { child_tag: String, child_type: String },
    /// `<Child/><Child/>...` directly under the parent.
    UnwrappedRepeated { child_type: String },
    Enum,
    NullableEnum,
    Primitive { namespace: String },
    String { namespace: String },
    NestedType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedAttribute {
    pub xml_tag: String,
    pub field: String,
    pub kind: AttributeKind,
    /// Go statement reading `attr.Value` into the model field.
    pub parsing_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedChildNode {
    pub xml_tag: String,
    pub field: String,
    pub kind: ChildNodeKind,
    /// Go statements reading `child` into the model field.
    pub parsing_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParserModel {
    pub name: String,
    /// Receiver variable inside the parse method.
    pub model_name: String,
    pub type_name: String,
    pub attributes: Vec<ParsedAttribute>,
    pub child_nodes: Vec<ParsedChildNode>,
    pub template: TemplateId,
}

impl ParsedAttribute {
    pub fn new(xml_tag: String, field: String, kind: AttributeKind, model_name: &str) -> Self {
        let parsing_code = Self::code_for(&kind, &format!("{model_name}.{field}"));
        Self {
            xml_tag,
            field,
            kind,
            parsing_code,
        }
    }

    fn code_for(kind: &AttributeKind, target: &str) -> String {
        match kind {
            AttributeKind::Primitive { namespace } => {
                format!("{target} = parse{namespace}FromString(attr.Value, aggErr)")
            }
            AttributeKind::String => format!("{target} = attr.Value"),
            AttributeKind::NullableString => {
                format!("{target} = parseNullableStringFromString(attr.Value)")
            }
            AttributeKind::Enum => format!("parseEnumFromString(attr.Value, &{target}, aggErr)"),
            AttributeKind::NullableEnum => {
                format!("parseNullableEnumFromString(attr.Value, {target}, aggErr)")
            }
        }
    }
}

impl ParsedChildNode {
    pub fn new(xml_tag: String, field: String, kind: ChildNodeKind, model_name: &str) -> Self {
        let parsing_code = Self::code_for(&kind, &format!("{model_name}.{field}"));
        Self {
            xml_tag,
            field,
            kind,
            parsing_code,
        }
    }

    fn code_for(kind: &ChildNodeKind, target: &str) -> String {
        match kind {
            ChildNodeKind::WrappedList {
                child_tag,
                child_type,
            } => format!("{target} = parse{child_type}Slice(\"{child_tag}\", child.Children, aggErr)"),
            ChildNodeKind::UnwrappedRepeated { child_type } => format!(
                "var model {child_type}\n\
                 model.parse(&child, aggErr)\n\
                 {target} = append({target}, model)"
            ),
            ChildNodeKind::Enum => format!("parseEnum(child.Content, &{target}, aggErr)"),
            ChildNodeKind::NullableEnum => {
                format!("parseNullableEnum(child.Content, {target}, aggErr)")
            }
            ChildNodeKind::Primitive { namespace } => {
                format!("{target} = parse{namespace}(child.Content, aggErr)")
            }
            ChildNodeKind::String { namespace } => {
                format!("{target} = parse{namespace}(child.Content)")
            }
            ChildNodeKind::NestedType => format!("{target}.parse(&child, aggErr)"),
        }
    }
}

/// Component types of every wrapped list in the contract. Their parsers
/// also get a `parse<Type>Slice` function.
pub fn types_parsed_as_slices(type_map: &TypeMap) -> BTreeSet<String> {
    type_map
        .values()
        .filter(|t| !t.is_enum())
        .flat_map(|t| t.elements.iter())
        .filter(|e| e.is_array() && has_wrapper_tag(&e.annotations))
        .filter_map(|e| e.component_type.clone())
        .collect()
}

fn is_numeric_or_bool(go_type: &str) -> bool {
    matches!(
        go_type.trim_start_matches('*'),
        "bool" | "int" | "int64" | "float64"
    )
}

fn is_enum_type(type_name: &str, type_map: &TypeMap) -> bool {
    type_map.get(type_name).is_some_and(TypeDescriptor::is_enum)
}

fn element_tag(element: &ElementDescriptor) -> Result<String, GeneratorError> {
    Ok(capitalize(&xml_tag_name(element)?))
}

fn to_attribute(
    element: &ElementDescriptor,
    model_name: &str,
) -> Result<ParsedAttribute, GeneratorError> {
    let go_type = to_go_response_type(
        &element.type_name,
        element.component_type.as_deref(),
        element.nullable,
    )?;

    let kind = match go_type.as_str() {
        t if is_numeric_or_bool(t) => AttributeKind::Primitive {
            namespace: parser_namespace(&go_type),
        },
        "string" => AttributeKind::String,
        "*string" => AttributeKind::NullableString,
        _ if element.nullable => AttributeKind::NullableEnum,
        _ => AttributeKind::Enum,
    };

    Ok(ParsedAttribute::new(
        element_tag(element)?,
        capitalize(&element.name),
        kind,
        model_name,
    ))
}

fn array_component(element: &ElementDescriptor) -> Result<&str, GeneratorError> {
    element
        .component_type
        .as_deref()
        .ok_or_else(|| GeneratorError::MalformedTypeDescriptor {
            type_name: element.name.clone(),
            reason: "array element without a component type".to_string(),
        })
}

fn to_child_node(
    element: &ElementDescriptor,
    type_map: &TypeMap,
    model_name: &str,
) -> Result<ParsedChildNode, GeneratorError> {
    let xml_tag = element_tag(element)?;
    let field = capitalize(&element.name);

    if has_wrapper_tag(&element.annotations) {
        let kind = ChildNodeKind::WrappedList {
            child_tag: xml_tag,
            child_type: remove_path(array_component(element)?).to_string(),
        };
        return Ok(ParsedChildNode::new(
            capitalize(&wrapper_tag_name(&element.annotations)),
            field,
            kind,
            model_name,
        ));
    }

    let kind = if element.is_array() {
        ChildNodeKind::UnwrappedRepeated {
            child_type: to_go_type(array_component(element)?)?,
        }
    } else if is_enum_type(&element.type_name, type_map) {
        if element.nullable {
            ChildNodeKind::NullableEnum
        } else {
            ChildNodeKind::Enum
        }
    } else {
        let go_type = to_go_response_type(&element.type_name, None, element.nullable)?;
        match go_type.as_str() {
            t if is_numeric_or_bool(t) => ChildNodeKind::Primitive {
                namespace: parser_namespace(&go_type),
            },
            "string" | "*string" => ChildNodeKind::String {
                namespace: parser_namespace(&go_type),
            },
            _ => ChildNodeKind::NestedType,
        }
    };

    Ok(ParsedChildNode::new(xml_tag, field, kind, model_name))
}

/// The JobList-like element: always an unwrapped repeat of its component.
fn to_unwrapped_child_node(
    element: &ElementDescriptor,
    model_name: &str,
) -> Result<ParsedChildNode, GeneratorError> {
    let kind = ChildNodeKind::UnwrappedRepeated {
        child_type: to_go_type(array_component(element)?)?,
    };
    Ok(ParsedChildNode::new(
        element_tag(element)?,
        capitalize(&element.name),
        kind,
        model_name,
    ))
}

/// Generates the parser model of a non-enum type.
///
/// `slice_types` is the result of [`types_parsed_as_slices`] for the whole
/// type map; it selects the slice-capable template.
///
/// ## Errors
///
/// - `GeneratorError::MalformedTypeDescriptor` for a JobList-like type
///   without exactly one element, or an array without a component type
/// - `GeneratorError::Contract` when an element declares conflicting XML names
pub fn generate_parser(
    type_def: &TypeDescriptor,
    type_map: &TypeMap,
    slice_types: &BTreeSet<String>,
    config: &GeneratorConfig,
) -> Result<ParserModel, GeneratorError> {
    let type_name = remove_path(&type_def.name).to_string();
    let model_name = uncapitalize(&type_name);
    let unwrapped = config.is_unwrapped_list_type(&type_def.name);

    if unwrapped && type_def.elements.len() != 1 {
        return Err(GeneratorError::MalformedTypeDescriptor {
            type_name: type_def.name.clone(),
            reason: format!(
                "expected exactly one element, found {}",
                type_def.elements.len()
            ),
        });
    }

    let (attribute_elements, child_elements): (Vec<_>, Vec<_>) = type_def
        .elements
        .iter()
        .partition(|e| is_attribute(&e.annotations));

    let attributes = attribute_elements
        .into_iter()
        .map(|e| to_attribute(e, &model_name))
        .collect::<Result<Vec<_>, _>>()?;

    let child_nodes = child_elements
        .into_iter()
        .map(|e| {
            if unwrapped {
                to_unwrapped_child_node(e, &model_name)
            } else {
                to_child_node(e, type_map, &model_name)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let template = if slice_types.contains(&type_def.name) {
        TemplateId::SliceTypeParser
    } else {
        TemplateId::TypeParser
    };

    Ok(ParserModel {
        name: format!("{type_name}Parser"),
        model_name,
        type_name,
        attributes,
        child_nodes,
        template,
    })
}
