//! End-to-end tests: generate models from the fixture contract and write them.
//!
//! These tests exercise the full pipeline from contract file to output tree,
//! using the JSON model renderer.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use contractgen_define::Contract;
use contractgen_gen::codegen::GoTarget;
use contractgen_gen::config::GeneratorConfig;
use contractgen_gen::output::{generate, write_units};
use contractgen_gen::render::{GENERATED_NOTICE, JsonModelRenderer};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn generate_into(dir: &Path) -> Vec<PathBuf> {
    let content = fs::read_to_string(fixture("contract.json")).expect("read contract fixture");
    let contract: Contract = serde_json::from_str(&content).expect("parse contract fixture");
    let config = GeneratorConfig::load(&fixture("config.toml")).expect("load config fixture");

    let units = generate(contract, &config, &GoTarget).expect("generation succeeds");
    write_units(&units, &JsonModelRenderer, dir, false).expect("write succeeds")
}

/// Reads a written file, which must be a JSON document carrying the notice.
fn read_model(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("read generated file");
    let value: serde_json::Value = serde_json::from_str(&content).expect("generated file is JSON");
    assert_eq!(value["notice"], GENERATED_NOTICE, "{}", path.display());
    value
}

#[test]
fn writes_command_and_client_tree() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let paths = generate_into(temp_dir.path());

    assert_eq!(paths.len(), 30);
    for path in &paths {
        assert!(path.exists(), "missing {}", path.display());
        assert!(path.starts_with(temp_dir.path()));
        read_model(path);
    }

    for client in ["ds3Deletes", "ds3Gets", "ds3Heads", "ds3Posts", "ds3Puts"] {
        assert!(temp_dir.path().join(format!("{client}.json")).is_file());
    }
    assert!(temp_dir.path().join("commands/getServiceRequest.json").is_file());
    assert!(temp_dir.path().join("commands/jobListParser.json").is_file());
}

#[test]
fn written_models_carry_their_template() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    generate_into(temp_dir.path());

    let request = read_model(&temp_dir.path().join("commands/getObjectRequest.json"));
    assert_eq!(request["template"], "object_retrieval_request");
    assert_eq!(request["model"]["name"], "GetObjectRequest");
    assert_eq!(request["model"]["http_verb"], "GET");

    let response = read_model(&temp_dir.path().join("commands/getServiceResponse.json"));
    assert_eq!(response["template"], "response");
    assert_eq!(response["model"]["payload"]["kind"], "typed");
    assert_eq!(response["model"]["payload"]["xml_tag"], "ListAllMyBucketsResult");

    let priority = read_model(&temp_dir.path().join("commands/blobStoreTaskPriority.json"));
    assert_eq!(priority["template"], "enum_type");
    assert_eq!(priority["model"]["enum_prefix"], "BLOB_STORE_TASK_PRIORITY_");
    assert_eq!(priority["model"]["enum_constants"][0], "CRITICAL");
}

#[test]
fn written_models_carry_template_values() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    generate_into(temp_dir.path());

    let puts = read_model(&temp_dir.path().join("ds3Puts.json"));
    let put_object = puts["model"]["commands"]
        .as_array()
        .expect("commands array")
        .iter()
        .find(|c| c["name"] == "PutObject")
        .expect("PutObject command");
    assert_eq!(put_object["build_lines"][0]["kind"], "http_verb");
    assert_eq!(put_object["build_lines"][0]["verb"], "PUT");

    let response = read_model(&temp_dir.path().join("commands/getBucketResponse.json"));
    assert!(response["model"]["struct_fields"][0].is_string());

    let parser = read_model(&temp_dir.path().join("commands/jobParser.json"));
    assert!(parser["model"]["attributes"][0]["parsing_code"].is_string());
}

#[test]
fn regeneration_overwrites_in_place() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let first = generate_into(temp_dir.path());
    let before = fs::read_to_string(&first[0]).expect("read first file");

    let second = generate_into(temp_dir.path());
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second[0]).expect("read again"), before);
}
