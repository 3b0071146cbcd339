//! Shared test fixtures for contractgen-gen unit tests.

use contractgen_define::{
    Annotation, AnnotationElement, Classification, ElementDescriptor, EnumConstant, HttpVerb,
    RequestDescriptor, Requirement, Resource, ResponseCodeDescriptor, ResponseTypeDescriptor,
    TypeDescriptor, TypeMap,
};

/// Creates a generic-storage request with no verb, params or response codes.
pub fn make_request(name: &str) -> RequestDescriptor {
    RequestDescriptor {
        name: name.to_string(),
        http_verb: None,
        classification: Classification::GenericStorage,
        bucket_requirement: Requirement::NotAllowed,
        object_requirement: Requirement::NotAllowed,
        action: None,
        resource: None,
        resource_type: None,
        operation: None,
        include_in_path: false,
        response_codes: vec![],
        optional_params: vec![],
        required_params: vec![],
    }
}

pub fn make_generic_request(name: &str, verb: HttpVerb) -> RequestDescriptor {
    RequestDescriptor {
        http_verb: Some(verb),
        ..make_request(name)
    }
}

pub fn make_vendor_request(name: &str, verb: HttpVerb, resource: Option<Resource>) -> RequestDescriptor {
    RequestDescriptor {
        http_verb: Some(verb),
        classification: Classification::VendorExtension,
        resource,
        ..make_request(name)
    }
}

/// Creates a response code whose single response type is `type_name`.
pub fn make_code(code: u16, type_name: &str) -> ResponseCodeDescriptor {
    ResponseCodeDescriptor::new(code, vec![ResponseTypeDescriptor::new(type_name)])
}

/// Creates a struct-like type with the given elements.
pub fn make_type(name: &str, elements: Vec<ElementDescriptor>) -> TypeDescriptor {
    TypeDescriptor {
        name: name.to_string(),
        name_to_marshal: None,
        elements,
        enum_constants: vec![],
    }
}

pub fn make_enum(name: &str, constants: &[&str]) -> TypeDescriptor {
    TypeDescriptor {
        name: name.to_string(),
        name_to_marshal: None,
        elements: vec![],
        enum_constants: constants.iter().map(|c| EnumConstant::new(*c)).collect(),
    }
}

pub fn make_type_map(types: Vec<TypeDescriptor>) -> TypeMap {
    types.into_iter().map(|t| (t.name.clone(), t)).collect()
}

pub fn attribute_annotation() -> Annotation {
    Annotation::new("com.spectralogic.util.marshal.MarshalXmlAsAttribute", vec![])
}

/// A `CustomMarshaledName` annotation declaring a wrapped list.
pub fn wrapper_annotation(wrapper: &str, tag: &str) -> Annotation {
    Annotation::new(
        "com.spectralogic.util.marshal.CustomMarshaledName",
        vec![
            AnnotationElement::new("CollectionValue", wrapper),
            AnnotationElement::new("CollectionValueRenderingMode", "SINGLE_BLOCK_FOR_ALL_ELEMENTS"),
            AnnotationElement::new("Value", tag),
        ],
    )
}

pub fn make_array_element(name: &str, component: &str, annotations: Vec<Annotation>) -> ElementDescriptor {
    ElementDescriptor {
        component_type: Some(component.to_string()),
        annotations,
        ..ElementDescriptor::new(name, "array")
    }
}
