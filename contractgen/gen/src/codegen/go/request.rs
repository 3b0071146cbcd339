//! Go request models.
//!
//! [`generate_request`] composes one base model for every request: path,
//! constructor, fields, with-setters and imports. The request's
//! [`RequestStrategy`] then contributes a small delta on top of it:
//!
//! - the payload overrides of its [`PayloadKind`](crate::config::PayloadKind)
//! - a [`RequestProfile`] with extra fields, defaulted assignments, imports,
//!   an optional alternate constructor and the template to render with
//!
//! ## Examples
//!
//! ```
//! use contractgen_define::{Classification, HttpVerb, RequestDescriptor, Requirement};
//! use contractgen_gen::codegen::go::request::generate_request;
//! use contractgen_gen::config::RequestStrategy;
//! # let request = RequestDescriptor {
//! #     name: "com.x.GetObjectRequest".to_string(), http_verb: Some(HttpVerb::Get),
//! #     classification: Classification::GenericStorage,
//! #     bucket_requirement: Requirement::Required, object_requirement: Requirement::Required,
//! #     action: None, resource: None, resource_type: None, operation: None, include_in_path: false,
//! #     response_codes: vec![], optional_params: vec![], required_params: vec![],
//! # };
//!
//! let model = generate_request(&request, RequestStrategy::ObjectRetrieval).unwrap();
//! assert_eq!(model.name, "GetObjectRequest");
//! assert!(model.fields.iter().any(|f| f.name == "checksum"));
//! assert!(model.imports.contains("fmt"));
//! ```

use std::collections::BTreeSet;

use contractgen_define::{HttpVerb, RequestDescriptor};
use serde::Serialize;
use tracing::debug;

use crate::codegen::go::models::{Arg, Assignment, QueryParam, sort_and_dedup};
use crate::codegen::go::params::{
    WithSetter, constructor_args, field_assignments, needs_strconv, query_params, struct_fields,
    with_setters,
};
use crate::codegen::go::path::{build_path, receiver_name};
use crate::codegen::go::payload::{content_field, payload_delta};
use crate::config::RequestStrategy;
use crate::errors::GeneratorError;
use crate::naming::remove_path;
use crate::render::TemplateId;

/// A Go constructor: `New<Name>(args) *<Name>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constructor {
    pub function_name: String,
    pub args: Vec<Arg>,
    pub assignments: Vec<Assignment>,
    pub query_params: Vec<QueryParam>,
}

impl Constructor {
    /// The Go parameter list, e.g. `bucketName string, objectName string`.
    pub fn parameter_list(&self) -> String {
        self.args
            .iter()
            .map(Arg::declaration)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Everything the request template needs for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestModel {
    pub name: String,
    pub receiver: String,
    pub http_verb: HttpVerb,
    pub path: String,
    pub strategy: RequestStrategy,
    pub constructor: Constructor,
    pub alternate_constructor: Option<Constructor>,
    pub fields: Vec<Arg>,
    pub with_setters: Vec<WithSetter>,
    pub imports: BTreeSet<String>,
    pub template: TemplateId,
}

/// Strategy-specific additions to the base request.
#[derive(Debug, Clone, Default)]
struct RequestProfile {
    extra_fields: Vec<Arg>,
    defaulted: Vec<Assignment>,
    imports: &'static [&'static str],
    /// Suffix of an alternate constructor taking a decorated reader in place
    /// of the payload argument.
    alternate_suffix: Option<&'static str>,
    template: Option<TemplateId>,
}

pub const CHECKSUM_FIELD: &str = "checksum";
pub const RANGE_HEADER_FIELD: &str = "rangeHeader";
pub const HEADERS_FIELD: &str = "headers";

fn checksum_field() -> Arg {
    Arg::new(CHECKSUM_FIELD, "networking.Checksum")
}

fn none_checksum() -> Assignment {
    Assignment::valued(CHECKSUM_FIELD, "networking.NewNoneChecksum()")
}

fn profile(strategy: RequestStrategy) -> RequestProfile {
    match strategy {
        RequestStrategy::ObjectRetrieval => RequestProfile {
            extra_fields: vec![Arg::new(RANGE_HEADER_FIELD, "*rangeHeader"), checksum_field()],
            defaulted: vec![none_checksum()],
            imports: &["fmt"],
            template: Some(TemplateId::ObjectRetrievalRequest),
            ..Default::default()
        },
        RequestStrategy::ObjectStore => RequestProfile {
            extra_fields: vec![checksum_field(), Arg::new(HEADERS_FIELD, "*http.Header")],
            defaulted: vec![
                none_checksum(),
                Assignment::valued(HEADERS_FIELD, "&http.Header{}"),
            ],
            imports: &["net/http", "strings"],
            template: Some(TemplateId::ObjectStoreRequest),
            ..Default::default()
        },
        RequestStrategy::MultiConstructor => RequestProfile {
            alternate_suffix: Some("WithReader"),
            template: Some(TemplateId::MultiConstructorRequest),
            ..Default::default()
        },
        _ => RequestProfile::default(),
    }
}

/// Generates the request model for one request.
///
/// ## Errors
///
/// - `GeneratorError::MissingHttpVerb` when the request has no verb
/// - any path or parameter derivation error
pub fn generate_request(
    request: &RequestDescriptor,
    strategy: RequestStrategy,
) -> Result<RequestModel, GeneratorError> {
    let http_verb = request.http_verb.ok_or_else(|| GeneratorError::MissingHttpVerb {
        request: request.name.clone(),
    })?;

    let name = remove_path(&request.name).to_string();
    let profile = profile(strategy);
    let delta = payload_delta(strategy.payload());

    let base_args = constructor_args(request)?;
    let query = query_params(request)?;

    let mut args = base_args.clone();
    let mut assignments = field_assignments(&base_args);
    args.extend(delta.constructor_arg.clone());
    assignments.extend(delta.assignment.clone());
    assignments.extend(profile.defaulted.iter().cloned());

    let constructor = Constructor {
        function_name: format!("New{name}"),
        args,
        assignments,
        query_params: query.clone(),
    };

    let alternate_constructor = profile.alternate_suffix.map(|suffix| {
        let mut args = base_args.clone();
        args.push(content_field());
        let mut assignments = field_assignments(&args);
        assignments.extend(profile.defaulted.iter().cloned());
        Constructor {
            function_name: format!("New{name}{suffix}"),
            args,
            assignments,
            query_params: query.clone(),
        }
    });

    let mut fields = struct_fields(request)?;
    fields.extend(delta.struct_field);
    fields.extend(profile.extra_fields.iter().cloned());
    let fields = sort_and_dedup(fields);

    let mut imports: BTreeSet<String> = profile.imports.iter().map(|i| i.to_string()).collect();
    if needs_strconv(request) {
        imports.insert("strconv".to_string());
    }

    debug!(request = %name, %strategy, fields = fields.len(), "built request model");

    Ok(RequestModel {
        receiver: receiver_name(&request.name),
        path: build_path(request)?,
        http_verb,
        strategy,
        constructor,
        alternate_constructor,
        fields,
        with_setters: with_setters(request)?,
        imports,
        template: profile.template.unwrap_or(TemplateId::Request),
        name,
    })
}
