//! Contract model generator library.
//!
//! This crate turns a normalized API contract (see `contractgen-define`)
//! into the per-file models an SDK template layer renders. For the Go
//! target every contract yields:
//!
//! - A request model and a response model per request
//! - A type model per contract type, plus a parser model for non-enum types
//! - One client dispatch table per HTTP verb
//!
//! ## Modules
//!
//! - [`config`] - Remap and special-case tables, validation switches
//! - [`classification`] - Request shape predicates and strategy suggestions
//! - [`naming`] - Name case and path helpers
//! - [`remap`] / [`validation`] / [`prune`] - Contract preprocessing
//! - [`codegen`] - Per-target model generation
//! - [`render`] - Render units and the renderer seam
//! - [`output`] - Pipeline assembly and file writing
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```
//! use contractgen_define::Contract;
//! use contractgen_gen::codegen::GoTarget;
//! use contractgen_gen::config::GeneratorConfig;
//! use contractgen_gen::output::generate;
//!
//! let units = generate(Contract::default(), &GeneratorConfig::empty(), &GoTarget).unwrap();
//!
//! // An empty contract still yields the five client tables
//! assert_eq!(units.len(), 5);
//! assert_eq!(units[1].path_stem, "ds3Gets");
//! ```

pub mod classification;
pub mod codegen;
pub mod config;
pub mod errors;
pub mod naming;
pub mod output;
pub mod prune;
pub mod remap;
pub mod render;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_utils;
