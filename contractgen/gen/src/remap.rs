//! Contract type remapping.
//!
//! Some contract types are exposed under a different name in the SDK. The
//! remap table from [`GeneratorConfig::type_remap`] is applied once, before
//! validation and generation, to every type reference in the contract and to
//! the type definitions themselves.

use contractgen_define::{Contract, ElementDescriptor, TypeMap};
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::naming::remove_path;

/// Looks up a contract type name in the remap table, first by full name and
/// then by its path-less name.
fn lookup<'a>(config: &'a GeneratorConfig, type_name: &str) -> Option<&'a String> {
    config
        .type_remap
        .get(type_name)
        .or_else(|| config.type_remap.get(remove_path(type_name)))
}

/// The SDK name for a contract type; unknown names pass through unchanged.
///
/// ## Examples
///
/// ```
/// use contractgen_gen::config::GeneratorConfig;
/// use contractgen_gen::remap::remap_type_name;
///
/// let config = GeneratorConfig::default();
/// assert_eq!(
///     remap_type_name(&config, "com.spectralogic.s3.server.domain.JobsApiBean"),
///     "com.spectralogic.s3.server.domain.JobList"
/// );
/// assert_eq!(remap_type_name(&config, "com.x.Bucket"), "com.x.Bucket");
/// ```
pub fn remap_type_name(config: &GeneratorConfig, type_name: &str) -> String {
    lookup(config, type_name).map_or_else(|| type_name.to_string(), Clone::clone)
}

fn remap_in_place(config: &GeneratorConfig, type_name: &mut String) {
    if let Some(mapped) = lookup(config, type_name) {
        *type_name = mapped.clone();
    }
}

fn remap_optional(config: &GeneratorConfig, type_name: &mut Option<String>) {
    if let Some(name) = type_name {
        remap_in_place(config, name);
    }
}

fn remap_element(config: &GeneratorConfig, element: &mut ElementDescriptor) {
    remap_in_place(config, &mut element.type_name);
    remap_optional(config, &mut element.component_type);
}

fn remap_types(config: &GeneratorConfig, types: TypeMap) -> TypeMap {
    let mut remapped = TypeMap::new();
    let mut renamed = Vec::new();

    for (key, mut type_def) in types {
        type_def.elements.iter_mut().for_each(|e| remap_element(config, e));

        let new_name = remap_type_name(config, &key);
        if new_name == key {
            remapped.insert(key, type_def);
        } else {
            type_def.name = new_name.clone();
            renamed.push((key, new_name, type_def));
        }
    }

    for (old_name, new_name, type_def) in renamed {
        if remapped.contains_key(&new_name) {
            debug!(from = %old_name, to = %new_name, "remapped type already defined; keeping existing");
            continue;
        }
        debug!(from = %old_name, to = %new_name, "remapped type");
        remapped.insert(new_name, type_def);
    }
    remapped
}

/// Applies the remap table to the whole contract.
///
/// Request names are never remapped; parameter types, response types and
/// their component types are.
pub fn apply_type_remap(contract: Contract, config: &GeneratorConfig) -> Contract {
    if config.type_remap.is_empty() {
        return contract;
    }

    let Contract {
        mut requests,
        types,
    } = contract;

    for request in &mut requests {
        for param in request
            .required_params
            .iter_mut()
            .chain(request.optional_params.iter_mut())
        {
            remap_in_place(config, &mut param.type_name);
        }
        for response_type in request
            .response_codes
            .iter_mut()
            .flat_map(|c| c.response_types.iter_mut())
        {
            remap_in_place(config, &mut response_type.type_name);
            remap_optional(config, &mut response_type.component_type);
        }
    }

    Contract {
        requests,
        types: remap_types(config, types),
    }
}

#[cfg(test)]
mod tests {
    use contractgen_define::{HttpVerb, ParamDescriptor, ResponseCodeDescriptor, ResponseTypeDescriptor};

    use super::*;
    use crate::test_utils::{make_array_element, make_code, make_generic_request, make_type, make_type_map};

    fn config() -> GeneratorConfig {
        let mut config = GeneratorConfig::empty();
        config
            .type_remap
            .insert("com.x.JobsApiBean".to_string(), "com.x.JobList".to_string());
        config
            .type_remap
            .insert("LegacyState".to_string(), "com.x.State".to_string());
        config
    }

    #[test]
    fn remaps_every_reference() {
        let mut request = make_generic_request("com.x.GetJobsRequest", HttpVerb::Get);
        request.response_codes = vec![
            make_code(200, "com.x.JobsApiBean"),
            ResponseCodeDescriptor::new(
                201,
                vec![ResponseTypeDescriptor {
                    type_name: "array".to_string(),
                    component_type: Some("com.x.JobsApiBean".to_string()),
                }],
            ),
        ];
        request.optional_params = vec![ParamDescriptor::new("State", "com.old.LegacyState", true)];

        let contract = Contract {
            requests: vec![request],
            types: make_type_map(vec![
                make_type("com.x.JobsApiBean", vec![make_array_element("jobs", "com.x.Job", vec![])]),
                make_type("com.x.Holder", vec![make_array_element("states", "com.old.LegacyState", vec![])]),
            ]),
        };

        let remapped = apply_type_remap(contract, &config());
        let request = &remapped.requests[0];
        assert_eq!(request.name, "com.x.GetJobsRequest");
        assert_eq!(request.response_codes[0].response_types[0].type_name, "com.x.JobList");
        assert_eq!(
            request.response_codes[1].response_types[0].component_type.as_deref(),
            Some("com.x.JobList")
        );
        assert_eq!(request.optional_params[0].type_name, "com.x.State");

        assert!(remapped.types.contains_key("com.x.JobList"));
        assert!(!remapped.types.contains_key("com.x.JobsApiBean"));
        assert_eq!(remapped.types["com.x.JobList"].name, "com.x.JobList");
        assert_eq!(
            remapped.types["com.x.Holder"].elements[0].component_type.as_deref(),
            Some("com.x.State")
        );
    }

    #[test]
    fn existing_target_type_wins() {
        let contract = Contract {
            requests: vec![],
            types: make_type_map(vec![
                make_type("com.x.JobsApiBean", vec![]),
                make_type("com.x.JobList", vec![make_array_element("jobs", "com.x.Job", vec![])]),
            ]),
        };

        let remapped = apply_type_remap(contract, &config());
        assert_eq!(remapped.types.len(), 1);
        assert_eq!(remapped.types["com.x.JobList"].elements.len(), 1);
    }

    #[test]
    fn empty_table_is_identity() {
        let contract = Contract {
            requests: vec![make_generic_request("com.x.GetServiceRequest", HttpVerb::Get)],
            types: make_type_map(vec![make_type("com.x.JobsApiBean", vec![])]),
        };
        assert_eq!(apply_type_remap(contract.clone(), &GeneratorConfig::empty()), contract);
    }
}
