//! Request body strategies for the Go target.
//!
//! Each [`PayloadKind`] overrides exactly three things of the base request
//! composition: the payload constructor argument, the struct field that holds
//! the body, and the assignment that fills it. Every body is stored in a
//! `content networking.ReaderWithSizeDecorator` field; the builders named in
//! the assignments live in the SDK's hand-written support code.
//!
//! | Kind | Constructor argument | Assignment |
//! |---|---|---|
//! | `NoPayload` | none | none |
//! | `RawReader` | `content networking.ReaderWithSizeDecorator` | `content` |
//! | `IdList` | `ids []string` | `buildIdListPayload(ids)` (`<Ids><Id>..`) |
//! | `NameList` | `objectNames []string` | `buildDs3ObjectStreamFromNames(objectNames)` (`<Objects><Object Name=".."/>`) |
//! | `DeleteKeyList` | `objectNames []string` | `buildDeleteObjectsPayload(objectNames)` (`<Delete><Object><Key>..`) |
//! | `PartsList` | `parts []Part` | `buildPartsListStream(parts)` (`<CompleteMultipartUpload><Part>..`) |
//! | `StringBody` | `payload string` | `buildStreamFromString(payload)` |
//! | `StructuredObjects` | `objects []Ds3PutObject` | `buildDs3PutObjectListStream(objects)` |

use serde::Serialize;

use crate::codegen::go::models::{Arg, Assignment};
use crate::config::PayloadKind;

pub const CONTENT_FIELD: &str = "content";
pub const READER_TYPE: &str = "networking.ReaderWithSizeDecorator";

/// The per-variant overrides of a request model.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PayloadDelta {
    pub constructor_arg: Option<Arg>,
    pub struct_field: Option<Arg>,
    pub assignment: Option<Assignment>,
}

impl PayloadDelta {
    fn built(arg_name: &str, arg_type: &str, builder: &str) -> Self {
        Self {
            constructor_arg: Some(Arg::new(arg_name, arg_type)),
            struct_field: Some(content_field()),
            assignment: Some(Assignment::valued(
                CONTENT_FIELD,
                format!("{builder}({arg_name})"),
            )),
        }
    }
}

/// `content networking.ReaderWithSizeDecorator`
pub fn content_field() -> Arg {
    Arg::new(CONTENT_FIELD, READER_TYPE)
}

/// Selects the overrides for a payload kind.
///
/// ## Examples
///
/// ```
/// use contractgen_gen::codegen::go::payload::payload_delta;
/// use contractgen_gen::config::PayloadKind;
///
/// let delta = payload_delta(PayloadKind::IdList);
/// assert_eq!(delta.constructor_arg.unwrap().declaration(), "ids []string");
/// assert_eq!(delta.assignment.unwrap().value, "buildIdListPayload(ids)");
///
/// assert!(payload_delta(PayloadKind::NoPayload).struct_field.is_none());
/// ```
pub fn payload_delta(kind: PayloadKind) -> PayloadDelta {
    match kind {
        PayloadKind::NoPayload => PayloadDelta::default(),
        PayloadKind::RawReader => PayloadDelta {
            constructor_arg: Some(content_field()),
            struct_field: Some(content_field()),
            assignment: Some(Assignment::simple(CONTENT_FIELD)),
        },
        PayloadKind::IdList => PayloadDelta::built("ids", "[]string", "buildIdListPayload"),
        PayloadKind::NameList => {
            PayloadDelta::built("objectNames", "[]string", "buildDs3ObjectStreamFromNames")
        }
        PayloadKind::DeleteKeyList => {
            PayloadDelta::built("objectNames", "[]string", "buildDeleteObjectsPayload")
        }
        PayloadKind::PartsList => PayloadDelta::built("parts", "[]Part", "buildPartsListStream"),
        PayloadKind::StringBody => PayloadDelta::built("payload", "string", "buildStreamFromString"),
        PayloadKind::StructuredObjects => {
            PayloadDelta::built("objects", "[]Ds3PutObject", "buildDs3PutObjectListStream")
        }
    }
}
