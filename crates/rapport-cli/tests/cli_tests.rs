//! Integration tests for the rapport CLI
//!
//! These tests drive the read → run → write cycle against a mock provider.

use clap::Parser;
use rapport_cli::{run_with_provider, Cli, CliError, Config};
use rapport_llm::MockProvider;
use rapport_pipeline::{records, PipelineError};
use std::fs;
use tempfile::TempDir;

const PEOPLE: &str = r#"[
  {
    "id": 1,
    "name": "Ian",
    "values": ["smart work", "faith"],
    "visions": ["youth", "new ways of working"],
    "vehicles": [{"title": "MTAC", "description": "Tech academy in Mauke"}]
  },
  {
    "id": 2,
    "name": "Henry",
    "values": ["health", "family"],
    "visions": ["shared leadership"],
    "vehicles": []
  },
  {
    "id": 3,
    "name": "Mere",
    "values": ["connection"],
    "visions": ["faithful service"],
    "vehicles": ["Community garden"]
  }
]"#;

fn explanation(n: usize) -> String {
    format!(r#"{{"reason": "reason {}", "potential": ["topic {}"]}}"#, n, n)
}

fn setup(corpus: &str) -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("people.json");
    let output = dir.path().join("recommendations.json");
    fs::write(&input, corpus).unwrap();
    (dir, input, output)
}

#[test]
fn test_requires_two_positional_arguments() {
    assert!(Cli::try_parse_from(["rapport"]).is_err());
    assert!(Cli::try_parse_from(["rapport", "people.json"]).is_err());
    assert!(Cli::try_parse_from(["rapport", "a.json", "b.json", "c.json"]).is_err());

    let cli = Cli::try_parse_from(["rapport", "a.json", "b.json"]).unwrap();
    assert_eq!(cli.input.to_str(), Some("a.json"));
    assert_eq!(cli.output.to_str(), Some("b.json"));
}

#[test]
fn test_verbosity_levels() {
    let cli = Cli::try_parse_from(["rapport", "a", "b"]).unwrap();
    assert_eq!(cli.log_level(), "info");
    let cli = Cli::try_parse_from(["rapport", "-vv", "a", "b"]).unwrap();
    assert_eq!(cli.log_level(), "trace");
}

#[tokio::test]
async fn test_writes_recommendations() {
    let (_dir, input, output) = setup(PEOPLE);
    let provider = MockProvider::scripted(["high", "low", "medium"]);
    for n in 1..=3 {
        provider.push_response(explanation(n));
    }

    run_with_provider(&input, &output, provider, Config::default())
        .await
        .unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let recs = records::from_json(&written).unwrap();
    let summary: Vec<_> = recs
        .iter()
        .map(|r| (r.person1_id, r.person2_id, r.ranking.value()))
        .collect();
    assert_eq!(summary, vec![(1, 2, 1.0), (1, 3, 0.0), (2, 3, 0.5)]);

    // Pretty-printed with two-space indentation
    assert!(written.starts_with("[\n  {\n    \"person1Id\": 1,"));
}

#[tokio::test]
async fn test_failure_writes_nothing() {
    let (_dir, input, output) = setup(PEOPLE);
    let provider = MockProvider::scripted(["high", "low", "medium", "not json"]);

    let result = run_with_provider(&input, &output, provider, Config::default()).await;

    assert!(matches!(
        result,
        Err(CliError::Pipeline(PipelineError::Generation(_)))
    ));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_invalid_corpus_is_rejected_before_llm() {
    let (_dir, input, output) = setup(r#"[{"id": 1, "name": "", "values": [], "visions": [], "vehicles": []}]"#);
    let provider = MockProvider::new("high");

    let result = run_with_provider(&input, &output, provider.clone(), Config::default()).await;

    assert!(matches!(
        result,
        Err(CliError::Pipeline(PipelineError::Validation(_)))
    ));
    assert_eq!(provider.call_count(), 0);
    assert!(!output.exists());
}

#[tokio::test]
async fn test_missing_input_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.json");
    let output = dir.path().join("out.json");

    let result = run_with_provider(&input, &output, MockProvider::default(), Config::default()).await;
    match result {
        Err(CliError::Io { path, .. }) => assert!(path.ends_with("missing.json")),
        other => panic!("Expected I/O error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_single_person_writes_empty_list() {
    let (_dir, input, output) = setup(
        r#"[{"id": 1, "name": "Solo", "values": [], "visions": [], "vehicles": []}]"#,
    );

    run_with_provider(&input, &output, MockProvider::default(), Config::default())
        .await
        .unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "[]");
}

#[test]
fn test_config_file_loading() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[pipeline]
top_k = 3

[ollama]
endpoint = "http://gpu-box:11434"
"#,
    )
    .unwrap();

    let config = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(config.pipeline.top_k, 3);
    assert_eq!(config.ollama.endpoint, "http://gpu-box:11434");
    assert_eq!(config.ollama.model, "llama3.2");

    let missing = dir.path().join("nope.toml");
    assert!(matches!(Config::load(Some(missing.as_path())), Err(CliError::Io { .. })));

    fs::write(&path, "top_k = [").unwrap();
    assert!(matches!(Config::load(Some(path.as_path())), Err(CliError::Toml(_))));
}
