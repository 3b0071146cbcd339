//! The seam between model generation and template rendering.
//!
//! Generators produce [`RenderUnit`]s: a model, the template it is meant for
//! and a relative output path. A [`Renderer`] turns a unit into text and
//! places the [`GENERATED_NOTICE`] in it. Real template engines live outside
//! this crate; [`JsonModelRenderer`] dumps the model itself, which is what
//! `--dry-run` and the tests inspect.
//!
//! ## Examples
//!
//! ```
//! use contractgen_gen::render::{GeneratedModel, JsonModelRenderer, RenderUnit, Renderer, TemplateId};
//! use contractgen_gen::codegen::go::client::generate_clients;
//! use contractgen_gen::config::GeneratorConfig;
//!
//! let client = generate_clients(&[], &GeneratorConfig::empty()).unwrap().remove(0);
//! let unit = RenderUnit::new("ds3Deletes", GeneratedModel::Client(client));
//! assert_eq!(unit.template(), TemplateId::Client);
//!
//! let text = JsonModelRenderer.render(&unit).unwrap();
//! assert!(text.contains("\"file_name\": \"ds3Deletes\""));
//! ```

use serde::Serialize;
use strum::{Display, EnumIter};

use crate::codegen::go::client::ClientModel;
use crate::codegen::go::parser::ParserModel;
use crate::codegen::go::request::RequestModel;
use crate::codegen::go::response::ResponseModel;
use crate::codegen::go::type_model::TypeModel;
use crate::errors::GeneratorError;

/// Notice carried by every rendered file. Source renderers emit it as a
/// leading comment; the JSON renderer as the `notice` field.
pub const GENERATED_NOTICE: &str =
    "This code was automatically generated by contractgen. Do not edit manually.";

/// The template a model is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TemplateId {
    Request,
    ObjectRetrievalRequest,
    ObjectStoreRequest,
    MultiConstructorRequest,
    Response,
    ObjectRetrievalResponse,
    ObjectMetadataResponse,
    Type,
    EnumType,
    TypeParser,
    SliceTypeParser,
    Client,
}

/// Any model a target generator produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GeneratedModel {
    Request(RequestModel),
    Response(ResponseModel),
    Type(TypeModel),
    Parser(ParserModel),
    Client(ClientModel),
}

impl GeneratedModel {
    pub fn template(&self) -> TemplateId {
        match self {
            GeneratedModel::Request(m) => m.template,
            GeneratedModel::Response(m) => m.template,
            GeneratedModel::Type(m) => m.template,
            GeneratedModel::Parser(m) => m.template,
            GeneratedModel::Client(m) => m.template,
        }
    }
}

/// One output file: a model plus where its rendering goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderUnit {
    /// Output path relative to the output root, without extension.
    pub path_stem: String,
    pub model: GeneratedModel,
}

impl RenderUnit {
    pub fn new(path_stem: impl Into<String>, model: GeneratedModel) -> Self {
        Self {
            path_stem: path_stem.into(),
            model,
        }
    }

    pub fn template(&self) -> TemplateId {
        self.model.template()
    }
}

/// Turns render units into file contents.
pub trait Renderer {
    /// Renders one unit with its template, [`GENERATED_NOTICE`] included.
    ///
    /// ## Errors
    ///
    /// Implementations return `GeneratorError::RenderError` when the
    /// template cannot be applied to the model.
    fn render(&self, unit: &RenderUnit) -> Result<String, GeneratorError>;

    /// File extension of rendered output, without the dot.
    fn extension(&self) -> &str;
}

/// Renders the model itself as pretty-printed JSON, tagged with its template
/// and the generated notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonModelRenderer;

#[derive(Serialize)]
struct JsonEnvelope<'a> {
    notice: &'static str,
    template: TemplateId,
    model: &'a GeneratedModel,
}

impl Renderer for JsonModelRenderer {
    fn render(&self, unit: &RenderUnit) -> Result<String, GeneratorError> {
        let envelope = JsonEnvelope {
            notice: GENERATED_NOTICE,
            template: unit.template(),
            model: &unit.model,
        };
        serde_json::to_string_pretty(&envelope)
            .map_err(|e| GeneratorError::RenderError(format!("{}: {}", unit.path_stem, e)))
    }

    fn extension(&self) -> &str {
        "json"
    }
}
