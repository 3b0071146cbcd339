//! Go struct and enum definitions for contract types.

use contractgen_define::TypeDescriptor;
use contractgen_define::annotation::xml_tag_name;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::codegen::go::types::{to_go_response_type, to_go_type};
use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::naming::{camel_to_shouty, capitalize, remove_path};
use crate::render::TemplateId;

/// One field of a generated Go struct.
///
/// Serializes with its rendered `declaration` alongside the parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructField {
    pub name: String,
    pub go_type: String,
    /// Explicit `xml:"..."` tag, only set where the default name would not match.
    pub xml_tag: Option<String>,
}

impl StructField {
    /// The field as it appears in the struct body.
    pub fn declaration(&self) -> String {
        match &self.xml_tag {
            Some(tag) => format!("{} {} `xml:\"{tag}\"`", self.name, self.go_type),
            None => format!("{} {}", self.name, self.go_type),
        }
    }
}

impl Serialize for StructField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("StructField", 4)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("go_type", &self.go_type)?;
        state.serialize_field("xml_tag", &self.xml_tag)?;
        state.serialize_field("declaration", &self.declaration())?;
        state.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeModel {
    pub name: String,
    /// Namespace for enum values, e.g. `TAPE_STATE_`.
    pub enum_prefix: String,
    pub enum_constants: Vec<String>,
    pub fields: Vec<StructField>,
    pub template: TemplateId,
}

impl TypeModel {
    pub fn is_enum(&self) -> bool {
        self.template == TemplateId::EnumType
    }
}

/// `TapeState` -> `TAPE_STATE_`
pub fn enum_prefix(name: &str) -> String {
    format!("{}_", camel_to_shouty(name))
}

/// Generates the Go definition of a contract type.
///
/// JobList-like types (see [`GeneratorConfig::unwrapped_list_types`]) hold
/// exactly one list element and tag it explicitly, since the XML has no
/// wrapper around the repeated entries.
///
/// ## Examples
///
/// ```
/// use contractgen_define::{ElementDescriptor, EnumConstant, TypeDescriptor};
/// use contractgen_gen::codegen::go::type_model::generate_type;
/// use contractgen_gen::config::GeneratorConfig;
///
/// let state = TypeDescriptor {
///     name: "com.x.TapeState".to_string(),
///     name_to_marshal: None,
///     elements: vec![],
///     enum_constants: vec![EnumConstant::new("Normal"), EnumConstant::new("Offline")],
/// };
/// let model = generate_type(&state, &GeneratorConfig::empty()).unwrap();
///
/// assert_eq!(model.enum_prefix, "TAPE_STATE_");
/// assert_eq!(model.enum_constants, vec!["NORMAL", "OFFLINE"]);
/// ```
///
/// ## Errors
///
/// - `GeneratorError::MalformedTypeDescriptor` for a JobList-like type
///   without exactly one element, or an element with an unmappable type
/// - `GeneratorError::Contract` when an element declares conflicting XML names
pub fn generate_type(
    type_def: &TypeDescriptor,
    config: &GeneratorConfig,
) -> Result<TypeModel, GeneratorError> {
    let name = remove_path(&type_def.name).to_string();

    let fields = if config.is_unwrapped_list_type(&type_def.name) {
        unwrapped_list_fields(type_def)?
    } else {
        type_def
            .elements
            .iter()
            .map(|e| {
                Ok(StructField {
                    name: capitalize(&e.name),
                    go_type: to_go_response_type(
                        &e.type_name,
                        e.component_type.as_deref(),
                        e.nullable,
                    )?,
                    xml_tag: None,
                })
            })
            .collect::<Result<Vec<_>, GeneratorError>>()?
    };

    let template = if type_def.is_enum() {
        TemplateId::EnumType
    } else {
        TemplateId::Type
    };

    Ok(TypeModel {
        enum_prefix: enum_prefix(&name),
        enum_constants: type_def
            .enum_constants
            .iter()
            .map(|c| c.name.to_uppercase())
            .collect(),
        fields,
        template,
        name,
    })
}

fn unwrapped_list_fields(type_def: &TypeDescriptor) -> Result<Vec<StructField>, GeneratorError> {
    let [element] = type_def.elements.as_slice() else {
        return Err(GeneratorError::MalformedTypeDescriptor {
            type_name: type_def.name.clone(),
            reason: format!(
                "expected exactly one element, found {}",
                type_def.elements.len()
            ),
        });
    };

    let go_type = match element.component_type.as_deref() {
        Some(component) if element.is_array() => format!("[]{}", to_go_type(component)?),
        _ => to_go_response_type(&element.type_name, None, element.nullable)?,
    };

    Ok(vec![StructField {
        name: capitalize(&element.name),
        go_type,
        xml_tag: Some(capitalize(&xml_tag_name(element)?)),
    }])
}

#[cfg(test)]
mod tests {
    use contractgen_define::ElementDescriptor;

    use super::*;
    use crate::test_utils::{make_array_element, make_enum, make_type, wrapper_annotation};

    #[test]
    fn struct_fields_are_capitalized() {
        let mut nullable = ElementDescriptor::new("lastCheckpoint", "java.lang.String");
        nullable.nullable = true;
        let type_def = make_type(
            "com.x.Tape",
            vec![
                ElementDescriptor::new("id", "java.util.UUID"),
                nullable,
                make_array_element("partitions", "com.x.TapePartition", vec![]),
            ],
        );

        let model = generate_type(&type_def, &GeneratorConfig::empty()).unwrap();
        assert_eq!(model.name, "Tape");
        assert_eq!(model.template, TemplateId::Type);
        assert!(!model.is_enum());

        let declarations: Vec<_> = model.fields.iter().map(StructField::declaration).collect();
        assert_eq!(
            declarations,
            ["Id string", "LastCheckpoint *string", "Partitions []TapePartition"]
        );
    }

    #[test]
    fn single_string_element() {
        let type_def = make_type("com.x.Owner", vec![ElementDescriptor::new("displayName", "java.lang.String")]);
        let model = generate_type(&type_def, &GeneratorConfig::empty()).unwrap();
        assert_eq!(model.fields.len(), 1);
        assert_eq!(model.fields[0].go_type, "string");
    }

    #[test]
    fn enums_use_enum_template() {
        let model = generate_type(
            &make_enum("com.x.JobChunkBlobStoreState", &["Pending", "in_progress"]),
            &GeneratorConfig::empty(),
        )
        .unwrap();
        assert!(model.is_enum());
        assert_eq!(model.enum_prefix, "JOB_CHUNK_BLOB_STORE_STATE_");
        assert_eq!(model.enum_constants, ["PENDING", "IN_PROGRESS"]);
        assert!(model.fields.is_empty());
    }

    #[test]
    fn job_list_tags_its_only_element() {
        let config = GeneratorConfig::empty().with_unwrapped_list_type("JobList");
        let type_def = make_type(
            "com.x.JobList",
            vec![make_array_element("jobs", "com.x.Job", vec![wrapper_annotation("Jobs", "job")])],
        );

        let model = generate_type(&type_def, &config).unwrap();
        assert_eq!(model.fields[0].declaration(), "Jobs []Job `xml:\"Job\"`");

        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(value["fields"][0]["declaration"], "Jobs []Job `xml:\"Job\"`");
        assert_eq!(value["fields"][0]["xml_tag"], "Job");
    }

    #[test]
    fn job_list_without_single_element_is_malformed() {
        let config = GeneratorConfig::empty().with_unwrapped_list_type("JobList");
        let empty = make_type("com.x.JobList", vec![]);
        let err = generate_type(&empty, &config).unwrap_err();
        assert!(matches!(err, GeneratorError::MalformedTypeDescriptor { .. }));

        let two = make_type(
            "com.x.JobList",
            vec![
                make_array_element("jobs", "com.x.Job", vec![]),
                ElementDescriptor::new("count", "int"),
            ],
        );
        assert!(generate_type(&two, &config).is_err());
    }

    #[test]
    fn array_without_component_is_malformed() {
        let type_def = make_type("com.x.Broken", vec![ElementDescriptor::new("items", "array")]);
        let err = generate_type(&type_def, &GeneratorConfig::empty()).unwrap_err();
        assert!(matches!(err, GeneratorError::MalformedTypeDescriptor { .. }));
    }
}
