//! Client dispatch tables.
//!
//! The Go client is split into one file per HTTP verb. Each file lists the
//! commands sending requests with that verb; commands that must follow
//! temporary redirects are listed separately.
//!
//! Every command carries the calls it makes on the HTTP request builder,
//! between creating the builder and building the request:
//!
//! 1. verb and path
//! 2. required query parameters, then optional ones
//! 3. the operation selector
//! 4. body reader, checksum and headers, where the request has them

use contractgen_define::{HttpVerb, RequestDescriptor};
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::codegen::go::params::{SetterKind, client_field, client_query_params, with_setters};
use crate::codegen::go::path::build_client_path;
use crate::codegen::go::payload::CONTENT_FIELD;
use crate::codegen::go::request::{CHECKSUM_FIELD, HEADERS_FIELD, RANGE_HEADER_FIELD};
use crate::codegen::go::types::go_var_to_string_ptr;
use crate::config::{GeneratorConfig, PayloadKind, RequestStrategy};
use crate::errors::GeneratorError;
use crate::naming::{capitalize, remove_path, to_command_name, to_response_name};
use crate::render::TemplateId;

/// One call on the HTTP request builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildLine {
    HttpVerb { verb: HttpVerb },
    Path { path: String },
    QueryParam { key: String, value: String },
    /// `value` is a `*string` expression; nil leaves the parameter out.
    OptionalQueryParam { key: String, value: String },
    /// `field` is the exported presence flag.
    VoidOptionalQueryParam { key: String, field: String },
    Operation { value: String },
    Reader { field: String },
    Checksum { field: String },
    RangeHeader { field: String },
    Headers { field: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    /// Client method name, e.g. `GetBucket`.
    pub name: String,
    pub request_name: String,
    pub response_name: String,
    pub build_lines: Vec<BuildLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientModel {
    pub file_name: String,
    pub http_verb: HttpVerb,
    pub commands: Vec<Command>,
    pub redirect_commands: Vec<Command>,
    pub template: TemplateId,
}

/// `GET` -> `ds3Gets`
pub fn client_file_name(verb: HttpVerb) -> &'static str {
    match verb {
        HttpVerb::Delete => "ds3Deletes",
        HttpVerb::Get => "ds3Gets",
        HttpVerb::Head => "ds3Heads",
        HttpVerb::Post => "ds3Posts",
        HttpVerb::Put => "ds3Puts",
    }
}

/// Every GET except the raw object download follows redirects.
pub fn has_http_redirect(verb: HttpVerb, strategy: RequestStrategy) -> bool {
    verb == HttpVerb::Get && strategy != RequestStrategy::ObjectRetrieval
}

fn optional_query_lines(request: &RequestDescriptor) -> Result<Vec<BuildLine>, GeneratorError> {
    let lines = with_setters(request)?
        .into_iter()
        .map(|setter| match setter.kind {
            SetterKind::Presence => BuildLine::VoidOptionalQueryParam {
                key: setter.query_key,
                field: capitalize(&setter.field.name),
            },
            SetterKind::Value | SetterKind::Nullable => BuildLine::OptionalQueryParam {
                key: setter.query_key,
                value: go_var_to_string_ptr(&client_field(&setter.field.name), &setter.field.go_type),
            },
        })
        .collect();
    Ok(lines)
}

/// Body, checksum and header lines the strategy's request fields call for.
fn strategy_lines(strategy: RequestStrategy) -> Vec<BuildLine> {
    let mut lines = Vec::new();
    if strategy.payload() != PayloadKind::NoPayload {
        lines.push(BuildLine::Reader {
            field: client_field(CONTENT_FIELD),
        });
    }
    match strategy {
        RequestStrategy::ObjectRetrieval => {
            lines.push(BuildLine::Checksum {
                field: client_field(CHECKSUM_FIELD),
            });
            lines.push(BuildLine::RangeHeader {
                field: client_field(RANGE_HEADER_FIELD),
            });
        }
        RequestStrategy::ObjectStore => {
            lines.push(BuildLine::Checksum {
                field: client_field(CHECKSUM_FIELD),
            });
            lines.push(BuildLine::Headers {
                field: client_field(HEADERS_FIELD),
            });
        }
        _ => {}
    }
    lines
}

/// The builder calls of a command, in the order they are made.
///
/// ## Errors
///
/// - `GeneratorError::MissingHttpVerb` when the request has no verb
/// - any path or parameter derivation error
pub fn build_lines(
    request: &RequestDescriptor,
    strategy: RequestStrategy,
) -> Result<Vec<BuildLine>, GeneratorError> {
    let verb = request.http_verb.ok_or_else(|| GeneratorError::MissingHttpVerb {
        request: request.name.clone(),
    })?;

    let mut lines = vec![
        BuildLine::HttpVerb { verb },
        BuildLine::Path {
            path: build_client_path(request)?,
        },
    ];
    lines.extend(
        client_query_params(request)?
            .into_iter()
            .map(|p| BuildLine::QueryParam {
                key: p.key,
                value: p.value,
            }),
    );
    lines.extend(optional_query_lines(request)?);
    if let Some(operation) = request.operation {
        lines.push(BuildLine::Operation {
            value: operation.query_value(),
        });
    }
    lines.extend(strategy_lines(strategy));
    Ok(lines)
}

fn to_command(
    request: &RequestDescriptor,
    strategy: RequestStrategy,
) -> Result<Command, GeneratorError> {
    let build_lines = build_lines(request, strategy)?;
    debug!(request = %request.name, lines = build_lines.len(), "built client command");
    Ok(Command {
        name: to_command_name(&request.name),
        request_name: remove_path(&request.name).to_string(),
        response_name: to_response_name(&request.name),
        build_lines,
    })
}

/// Generates one client model per HTTP verb, in verb order. Files for verbs
/// no request uses are still produced, with no commands.
///
/// ## Errors
///
/// - `GeneratorError::MissingHttpVerb` for a request without a verb
/// - any path or parameter derivation error of a command
pub fn generate_clients(
    requests: &[RequestDescriptor],
    config: &GeneratorConfig,
) -> Result<Vec<ClientModel>, GeneratorError> {
    let mut by_verb = Vec::with_capacity(requests.len());
    for request in requests {
        let verb = request.http_verb.ok_or_else(|| GeneratorError::MissingHttpVerb {
            request: request.name.clone(),
        })?;
        let strategy = config.strategy_for(request);
        let redirect = has_http_redirect(verb, strategy);
        by_verb.push((verb, redirect, to_command(request, strategy)?));
    }

    let clients = HttpVerb::iter()
        .map(|verb| {
            let (redirect_commands, commands): (Vec<_>, Vec<_>) = by_verb
                .iter()
                .filter(|(v, _, _)| *v == verb)
                .map(|(_, redirect, command)| (*redirect, command.clone()))
                .partition(|(redirect, _)| *redirect);

            if commands.is_empty() && redirect_commands.is_empty() {
                info!(%verb, file = client_file_name(verb), "no commands for client file");
            }

            ClientModel {
                file_name: client_file_name(verb).to_string(),
                http_verb: verb,
                commands: commands.into_iter().map(|(_, c)| c).collect(),
                redirect_commands: redirect_commands.into_iter().map(|(_, c)| c).collect(),
                template: TemplateId::Client,
            }
        })
        .collect();

    Ok(clients)
}
