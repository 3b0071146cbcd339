//! Removal of types no request can reach.

use std::collections::BTreeSet;

use contractgen_define::{Contract, RequestDescriptor, TypeMap};
use tracing::debug;

fn request_type_refs(request: &RequestDescriptor) -> impl Iterator<Item = &str> {
    let params = request
        .required_params
        .iter()
        .chain(request.optional_params.iter())
        .map(|p| p.type_name.as_str());
    let responses = request
        .response_codes
        .iter()
        .flat_map(|c| c.response_types.iter())
        .flat_map(|t| std::iter::once(t.type_name.as_str()).chain(t.component_type.as_deref()));
    params.chain(responses)
}

/// Names of every type reachable from a request, following element types
/// and component types transitively.
pub fn used_types(requests: &[RequestDescriptor], types: &TypeMap) -> BTreeSet<String> {
    let mut used = BTreeSet::new();
    let mut pending: Vec<&str> = requests.iter().flat_map(request_type_refs).collect();

    while let Some(name) = pending.pop() {
        let Some(type_def) = types.get(name) else {
            continue;
        };
        if !used.insert(name.to_string()) {
            continue;
        }
        for element in &type_def.elements {
            pending.push(&element.type_name);
            pending.extend(element.component_type.as_deref());
        }
    }
    used
}

/// Drops every type [`used_types`] does not reach.
///
/// ## Examples
///
/// ```
/// use contractgen_define::{Contract, TypeDescriptor};
/// use contractgen_gen::prune::prune_unused_types;
///
/// let mut contract = Contract::default();
/// contract.types.insert("com.x.Orphan".to_string(), TypeDescriptor {
///     name: "com.x.Orphan".to_string(),
///     name_to_marshal: None,
///     elements: vec![],
///     enum_constants: vec![],
/// });
///
/// assert!(prune_unused_types(contract).types.is_empty());
/// ```
pub fn prune_unused_types(contract: Contract) -> Contract {
    let used = used_types(&contract.requests, &contract.types);
    let before = contract.types.len();

    let Contract { requests, types } = contract;
    let types: TypeMap = types
        .into_iter()
        .filter(|(name, _)| used.contains(name))
        .collect();

    debug!(removed = before - types.len(), kept = types.len(), "pruned unused types");
    Contract { requests, types }
}
