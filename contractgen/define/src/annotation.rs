//! XML marshalling annotations and the read-only helpers that interpret them.
//!
//! Elements carry annotations copied from the server's domain model. Two of
//! them matter for XML parsing:
//!
//! - `...MarshalXmlAsAttribute` marks an element as an XML attribute.
//! - `...CustomMarshaledName` renames the element (`Value`) and, for lists,
//!   names the wrapper tag (`CollectionValue`) and how it is rendered
//!   (`CollectionValueRenderingMode`).
//!
//! ## Examples
//!
//! ```
//! use contractgen_define::annotation::{Annotation, AnnotationElement, has_wrapper_tag, wrapper_tag_name};
//!
//! let annotations = vec![Annotation::new(
//!     "com.spectralogic.util.marshal.CustomMarshaledName",
//!     vec![
//!         AnnotationElement::new("CollectionValue", "Nodes"),
//!         AnnotationElement::new("CollectionValueRenderingMode", "SINGLE_BLOCK_FOR_ALL_ELEMENTS"),
//!         AnnotationElement::new("Value", "Node"),
//!     ],
//! )];
//!
//! assert!(has_wrapper_tag(&annotations));
//! assert_eq!(wrapper_tag_name(&annotations), "Nodes");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ContractError;
use crate::type_def::ElementDescriptor;

const ATTRIBUTE_ANNOTATION: &str = "MarshalXmlAsAttribute";
const MARSHALED_NAME_ANNOTATION: &str = "CustomMarshaledName";
const COLLECTION_VALUE: &str = "CollectionValue";
const RENDERING_MODE: &str = "CollectionValueRenderingMode";
const SINGLE_BLOCK: &str = "SINGLE_BLOCK_FOR_ALL_ELEMENTS";
const VALUE: &str = "Value";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
    #[serde(default)]
    pub elements: Vec<AnnotationElement>,
}

impl Annotation {
    pub fn new(name: impl Into<String>, elements: Vec<AnnotationElement>) -> Self {
        Self {
            name: name.into(),
            elements,
        }
    }

    fn is_marshaled_name(&self) -> bool {
        self.name.ends_with(MARSHALED_NAME_ANNOTATION)
    }

    fn element_value(&self, key: &str) -> Option<&str> {
        self.elements
            .iter()
            .find(|e| e.name == key)
            .map(|e| e.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationElement {
    pub name: String,
    pub value: String,
}

impl AnnotationElement {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// True when the element is marshalled as an XML attribute.
pub fn is_attribute(annotations: &[Annotation]) -> bool {
    annotations
        .iter()
        .any(|a| a.name.ends_with(ATTRIBUTE_ANNOTATION))
}

/// True when a list element is enclosed in a single named wrapper tag.
pub fn has_wrapper_tag(annotations: &[Annotation]) -> bool {
    annotations.iter().filter(|a| a.is_marshaled_name()).any(|a| {
        let has_collection = a
            .element_value(COLLECTION_VALUE)
            .is_some_and(|v| !v.is_empty());
        has_collection && a.element_value(RENDERING_MODE) == Some(SINGLE_BLOCK)
    })
}

/// The wrapper tag name, or an empty string when none is declared.
pub fn wrapper_tag_name(annotations: &[Annotation]) -> String {
    annotations
        .iter()
        .filter(|a| a.is_marshaled_name())
        .find_map(|a| a.element_value(COLLECTION_VALUE))
        .unwrap_or_default()
        .to_string()
}

/// The XML tag of an element: the marshalled name if one is declared,
/// otherwise the element name.
///
/// ## Errors
///
/// Returns [`ContractError::ConflictingXmlNames`] when more than one
/// annotation declares a marshalled name.
pub fn xml_tag_name(element: &ElementDescriptor) -> Result<String, ContractError> {
    let names: Vec<&str> = element
        .annotations
        .iter()
        .filter(|a| a.is_marshaled_name())
        .filter_map(|a| a.element_value(VALUE))
        .filter(|v| !v.is_empty())
        .collect();

    match names.as_slice() {
        [] => Ok(element.name.clone()),
        [name] => Ok((*name).to_string()),
        _ => Err(ContractError::ConflictingXmlNames {
            element: element.name.clone(),
            names: names.iter().map(|n| n.to_string()).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marshaled_name(collection: &str, mode: &str, value: &str) -> Annotation {
        Annotation::new(
            "com.spectralogic.util.marshal.CustomMarshaledName",
            vec![
                AnnotationElement::new(COLLECTION_VALUE, collection),
                AnnotationElement::new(RENDERING_MODE, mode),
                AnnotationElement::new(VALUE, value),
            ],
        )
    }

    fn sort_by() -> Annotation {
        Annotation::new(
            "com.spectralogic.util.bean.lang.SortBy",
            vec![
                AnnotationElement::new("Direction", "ASCENDING"),
                AnnotationElement::new(VALUE, "3"),
            ],
        )
    }

    #[test]
    fn attribute_annotation_is_detected() {
        let annotations = vec![Annotation::new(
            "com.spectralogic.util.marshal.MarshalXmlAsAttribute",
            vec![],
        )];
        assert!(is_attribute(&annotations));
        assert!(!is_attribute(&[]));
        assert!(!is_attribute(&[marshaled_name("", "UNDEFINED", "Error"), sort_by()]));
    }

    #[test]
    fn wrapper_requires_single_block_mode_and_collection_value() {
        assert!(has_wrapper_tag(&[marshaled_name("Nodes", SINGLE_BLOCK, "Node")]));
        assert!(!has_wrapper_tag(&[marshaled_name("", "UNDEFINED", "object")]));
        assert!(!has_wrapper_tag(&[marshaled_name("Nodes", "BLOCK_FOR_EVERY_ELEMENT", "Node")]));
        assert!(!has_wrapper_tag(&[]));
    }

    #[test]
    fn wrapper_tag_name_reads_collection_value() {
        let annotations = vec![marshaled_name("TestCollectionValue", "UNDEFINED", "Error"), sort_by()];
        assert_eq!(wrapper_tag_name(&annotations), "TestCollectionValue");
        assert_eq!(wrapper_tag_name(&[]), "");
    }

    #[test]
    fn xml_tag_name_prefers_marshaled_value() {
        let mut element = ElementDescriptor::new("error", "java.lang.String");
        assert_eq!(xml_tag_name(&element).unwrap(), "error");

        element.annotations = vec![marshaled_name("", "UNDEFINED", "Error"), sort_by()];
        assert_eq!(xml_tag_name(&element).unwrap(), "Error");
    }

    #[test]
    fn xml_tag_name_rejects_multiple_names() {
        let mut element = ElementDescriptor::new("error", "java.lang.String");
        element.annotations = vec![
            marshaled_name("", "UNDEFINED", "Error"),
            marshaled_name("", "UNDEFINED", "Failure"),
        ];

        let err = xml_tag_name(&element).unwrap_err();
        assert!(matches!(err, ContractError::ConflictingXmlNames { .. }));
    }
}
