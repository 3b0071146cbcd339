//! The Go SDK target.
//!
//! ## Submodules
//!
//! - [`types`] - contract type to Go type mapping
//! - [`models`] - arguments, assignments, query params and field ordering
//! - [`path`] - URL path expressions
//! - [`params`] - constructor arguments, struct fields and with-setters
//! - [`payload`] - request body variants
//! - [`request`] / [`response`] - per-request models
//! - [`type_model`] / [`parser`] - per-type models
//! - [`client`] - per-verb client dispatch tables
//!
//! ## Output layout
//!
//! ```text
//! commands/getBucketRequest      request model
//! commands/getBucketResponse     response model
//! commands/bucket                type model
//! commands/bucketParser          parser model (non-enum types only)
//! ds3Gets                        client model, one per verb
//! ```

pub mod client;
pub mod models;
pub mod params;
pub mod parser;
pub mod path;
pub mod payload;
pub mod request;
pub mod response;
pub mod type_model;
pub mod types;

use contractgen_define::Contract;
use tracing::{debug, instrument};

use crate::codegen::TargetGenerator;
use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::naming::uncapitalize;
use crate::render::{GeneratedModel, RenderUnit};

const COMMANDS_DIR: &str = "commands";

fn command_path(name: &str) -> String {
    format!("{COMMANDS_DIR}/{}", uncapitalize(name))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GoTarget;

impl TargetGenerator for GoTarget {
    fn name(&self) -> &'static str {
        "go"
    }

    #[instrument(skip_all, fields(requests = contract.requests.len(), types = contract.types.len()))]
    fn generate(
        &self,
        contract: &Contract,
        config: &GeneratorConfig,
    ) -> Result<Vec<RenderUnit>, GeneratorError> {
        let mut units = Vec::new();

        for request in &contract.requests {
            let strategy = config.strategy_for(request);
            let request_model = request::generate_request(request, strategy)?;
            let response_model = response::generate_response(request, strategy, &contract.types)?;

            units.push(RenderUnit::new(
                command_path(&request_model.name),
                GeneratedModel::Request(request_model),
            ));
            units.push(RenderUnit::new(
                command_path(&response_model.name),
                GeneratedModel::Response(response_model),
            ));
        }

        for client in client::generate_clients(&contract.requests, config)? {
            units.push(RenderUnit::new(client.file_name.clone(), GeneratedModel::Client(client)));
        }

        let slice_types = parser::types_parsed_as_slices(&contract.types);
        for type_def in contract.types.values() {
            let type_model = type_model::generate_type(type_def, config)?;
            if !type_def.is_enum() {
                let parser_model =
                    parser::generate_parser(type_def, &contract.types, &slice_types, config)?;
                units.push(RenderUnit::new(
                    command_path(&parser_model.name),
                    GeneratedModel::Parser(parser_model),
                ));
            }
            units.push(RenderUnit::new(
                command_path(&type_model.name),
                GeneratedModel::Type(type_model),
            ));
        }

        debug!(units = units.len(), "generated go models");
        Ok(units)
    }
}
