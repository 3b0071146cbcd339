//! Target-language model generators.
//!
//! Each target turns the whole (remapped, validated) contract into render
//! units. Generation is pure: descriptors in, models out. Targets never
//! write files; see [`crate::output`] for that.
//!
//! ## Submodules
//!
//! - [`go`] - the Go SDK target

pub mod go;

use contractgen_define::Contract;

use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::render::RenderUnit;

pub use go::GoTarget;

/// A target language the generator can produce models for.
pub trait TargetGenerator {
    /// Short name used on the command line, e.g. `go`.
    fn name(&self) -> &'static str;

    /// Generates every render unit for the contract.
    ///
    /// ## Errors
    ///
    /// Fails on the first request or type that cannot be modelled.
    fn generate(
        &self,
        contract: &Contract,
        config: &GeneratorConfig,
    ) -> Result<Vec<RenderUnit>, GeneratorError>;
}
