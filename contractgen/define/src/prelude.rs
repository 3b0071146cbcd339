//! Convenient re-exports for building or inspecting contracts.
//!
//! ```
//! use contractgen_define::prelude::*;
//!
//! let param = ParamDescriptor::new("Force", VOID_TYPE, false);
//! assert!(param.is_void());
//! ```

pub use crate::annotation::{Annotation, AnnotationElement};
pub use crate::contract::{Contract, TypeMap};
pub use crate::error::ContractError;
pub use crate::request::{
    NULL_TYPE, ParamDescriptor, RequestDescriptor, ResponseCodeDescriptor, ResponseTypeDescriptor,
    VOID_TYPE,
};
pub use crate::resource::Resource;
pub use crate::type_def::{ARRAY_TYPE, ElementDescriptor, EnumConstant, TypeDescriptor};
pub use crate::types::{Action, Classification, HttpVerb, Operation, Requirement, ResourceType};
