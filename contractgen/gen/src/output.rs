//! The generation pipeline and file writing.
//!
//! ## Pipeline
//!
//! 1. [`apply_type_remap`] - rename contract types to their SDK names
//! 2. [`validate_special_cases`] - check the special-case table against the contract
//! 3. [`prune_unused_types`] - drop unreachable types (when configured)
//! 4. [`TargetGenerator::generate`] - build every model
//!
//! [`write_units`] then renders each unit and writes it below the output
//! root.
//!
//! ## Safety Guarantees
//!
//! - **Fail fast**: the first invalid request or type aborts the run before
//!   anything is written
//! - **Atomic writes**: each file is written to a temp file in the target
//!   directory and persisted over the final path

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use contractgen_define::Contract;
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

use crate::codegen::TargetGenerator;
use crate::config::GeneratorConfig;
use crate::errors::GeneratorError;
use crate::prune::prune_unused_types;
use crate::remap::apply_type_remap;
use crate::render::{RenderUnit, Renderer};
use crate::validation::validate_special_cases;

/// Runs the full pipeline for one target.
///
/// ## Errors
///
/// Returns the first validation or generation error.
#[instrument(skip_all, fields(target = target.name(), requests = contract.requests.len()))]
pub fn generate(
    contract: Contract,
    config: &GeneratorConfig,
    target: &dyn TargetGenerator,
) -> Result<Vec<RenderUnit>, GeneratorError> {
    let contract = apply_type_remap(contract, config);
    validate_special_cases(&contract, config)?;

    let contract = if config.prune_unused_types {
        prune_unused_types(contract)
    } else {
        contract
    };

    let units = target.generate(&contract, config)?;
    info!(units = units.len(), "generated models");
    Ok(units)
}

/// Writes content to a file atomically using a temp file in the same
/// directory, persisted over the target path.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if the parent directory cannot be
/// created, or the temp file cannot be written or persisted.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
        path: parent.display().to_string(),
        source: e,
    })?;

    let write_error = |source| GeneratorError::WriteError {
        path: path.display().to_string(),
        source,
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(write_error)?;
    temp.write_all(content.as_bytes()).map_err(write_error)?;
    temp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

/// Renders every unit and writes it below `output_dir`.
///
/// Files hold exactly what the renderer returns, generated notice included.
///
/// With `dry_run` nothing is written; the rendered text is printed to stdout
/// instead. Returns the target paths in unit order either way.
///
/// ## Errors
///
/// - `GeneratorError::OutputDirNotFound` when `output_dir` does not exist
/// - `GeneratorError::RenderError` / `GeneratorError::WriteError` on the
///   first unit that fails
#[instrument(skip(units, renderer), fields(count = units.len()))]
pub fn write_units(
    units: &[RenderUnit],
    renderer: &dyn Renderer,
    output_dir: &Path,
    dry_run: bool,
) -> Result<Vec<PathBuf>, GeneratorError> {
    if !dry_run && !output_dir.is_dir() {
        return Err(GeneratorError::OutputDirNotFound(
            output_dir.display().to_string(),
        ));
    }

    let mut written = Vec::with_capacity(units.len());
    for unit in units {
        let path = output_dir.join(format!("{}.{}", unit.path_stem, renderer.extension()));
        let content = renderer.render(unit)?;

        if dry_run {
            println!("=== {} ({}) ===\n{}\n", path.display(), unit.template(), content);
        } else {
            write_atomic(&path, &content)?;
            debug!(path = %path.display(), template = %unit.template(), "wrote file");
        }
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use contractgen_define::HttpVerb;
    use tempfile::TempDir;

    use super::*;
    use crate::codegen::GoTarget;
    use crate::config::RequestStrategy;
    use crate::render::{GENERATED_NOTICE, JsonModelRenderer};
    use crate::test_utils::{make_code, make_generic_request};

    fn service_contract() -> Contract {
        let mut request = make_generic_request("com.x.GetServiceRequest", HttpVerb::Get);
        request.response_codes = vec![make_code(200, "null")];
        Contract {
            requests: vec![request],
            types: Default::default(),
        }
    }

    #[test]
    fn write_atomic_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("commands").join("a.json");

        write_atomic(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");

        write_atomic(&path, "[]").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn missing_output_dir_is_reported() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let err = write_units(&[], &JsonModelRenderer, &missing, false).unwrap_err();
        assert!(matches!(err, GeneratorError::OutputDirNotFound(_)));
    }

    #[test]
    fn pipeline_writes_every_unit() {
        let dir = TempDir::new().unwrap();
        let units = generate(service_contract(), &GeneratorConfig::empty(), &GoTarget).unwrap();
        let paths = write_units(&units, &JsonModelRenderer, dir.path(), false).unwrap();

        assert_eq!(paths.len(), units.len());
        assert!(paths.iter().all(|p| p.exists()));

        let request = fs::read_to_string(dir.path().join("commands/getServiceRequest.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&request).unwrap();
        assert_eq!(value["notice"], GENERATED_NOTICE);
        assert_eq!(value["template"], "request");
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let units = generate(service_contract(), &GeneratorConfig::empty(), &GoTarget).unwrap();
        let paths = write_units(&units, &JsonModelRenderer, dir.path(), true).unwrap();

        assert!(!paths.is_empty());
        assert!(paths.iter().all(|p| !p.exists()));
    }

    #[test]
    fn validation_runs_before_generation() {
        let config = GeneratorConfig::empty().with_special_case("GoneRequest", RequestStrategy::IdList);
        let err = generate(service_contract(), &config, &GoTarget).unwrap_err();
        assert!(matches!(err, GeneratorError::UnknownSpecialCase { .. }));
    }
}
