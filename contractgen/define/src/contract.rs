//! The normalized contract document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::request::RequestDescriptor;
use crate::type_def::TypeDescriptor;

/// Ordered requests plus a name-keyed type map.
///
/// Type keys are unique; a `BTreeMap` keeps iteration deterministic so that
/// generated output is stable across runs.
///
/// ## Examples
///
/// ```
/// use contractgen_define::Contract;
///
/// let contract: Contract = serde_json::from_str(r#"{"requests": [], "types": {}}"#).unwrap();
/// assert!(contract.requests.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    #[serde(default)]
    pub requests: Vec<RequestDescriptor>,
    #[serde(default)]
    pub types: BTreeMap<String, TypeDescriptor>,
}

/// Name-keyed type lookup shared by the type, parser and response generators.
pub type TypeMap = BTreeMap<String, TypeDescriptor>;
