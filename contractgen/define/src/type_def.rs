//! Type descriptors: the data types referenced by request payloads.

use serde::{Deserialize, Serialize};

use crate::annotation::Annotation;

/// Contract type name used for repeated elements.
pub const ARRAY_TYPE: &str = "array";

/// A named contract type: either a struct (elements) or an enum (constants).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    /// XML root name override.
    #[serde(default)]
    pub name_to_marshal: Option<String>,
    #[serde(default)]
    pub elements: Vec<ElementDescriptor>,
    #[serde(default)]
    pub enum_constants: Vec<EnumConstant>,
}

impl TypeDescriptor {
    pub fn is_enum(&self) -> bool {
        !self.enum_constants.is_empty()
    }
}

/// One field of a struct-like type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub component_type: Option<String>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub nullable: bool,
}

impl ElementDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            component_type: None,
            annotations: vec![],
            nullable: false,
        }
    }

    pub fn is_array(&self) -> bool {
        self.type_name.eq_ignore_ascii_case(ARRAY_TYPE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumConstant {
    pub name: String,
}

impl EnumConstant {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
