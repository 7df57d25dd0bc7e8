// tests/unit_config.rs
use std::fs;
use std::path::Path;

use ranksweep_core::cli::RunArgs;
use ranksweep_core::config::{Config, GraphConfig};
use ranksweep_core::error::RankError;
use ranksweep_core::rank::{DanglingPolicy, RankParams, UpdateMode};

const FULL: &str = r#"
[params]
teleportation = 0.2
max_iteration = 12
tolerance = 1e-8
update = "snapshot"
dangling = "uniform"

[graph]
order = ["x", "y"]

[[graph.node]]
key = "x"
inputs = ["y"]
outputs = ["y"]

[[graph.node]]
key = "y"
inputs = ["x"]
outputs = ["x"]
"#;

#[test]
fn test_parse_full_file() {
    let c = Config::from_toml(FULL).unwrap();
    assert!((c.params.teleportation - 0.2).abs() < f64::EPSILON);
    assert_eq!(c.params.max_iteration, 12);
    assert_eq!(c.params.tolerance, Some(1e-8));
    assert_eq!(c.params.update, UpdateMode::Snapshot);
    assert_eq!(c.params.dangling, DanglingPolicy::Uniform);
    assert_eq!(c.graph.order, ["x", "y"]);
    assert_eq!(c.graph.nodes.len(), 2);

    let net = c.network().unwrap();
    assert_eq!(net.lookup("x").unwrap().outputs, ["y"]);
}

#[test]
fn test_empty_file_uses_defaults() {
    let c = Config::from_toml("").unwrap();
    assert_eq!(c.params, RankParams::default());
    assert_eq!(c.graph, GraphConfig::default());
    let net = c.network().unwrap();
    assert_eq!(net.order(), ["A", "B", "C"]);
}

#[test]
fn test_missing_inputs_default_to_empty() {
    let c = Config::from_toml(
        "[graph]\norder = [\"solo\"]\n[[graph.node]]\nkey = \"solo\"\noutputs = [\"solo\"]\n",
    )
    .unwrap();
    assert!(c.graph.nodes[0].inputs.is_empty());
}

#[test]
fn test_unknown_update_mode_is_parse_error() {
    let err = Config::from_toml("[params]\nupdate = \"sideways\"").unwrap_err();
    assert!(matches!(err, RankError::Parse(_)));
    assert!(err.is_config());
}

#[test]
fn test_duplicate_keys_rejected() {
    let toml = r#"
[graph]
order = ["a"]
[[graph.node]]
key = "a"
outputs = ["a"]
[[graph.node]]
key = "a"
outputs = ["a"]
"#;
    let err = Config::from_toml(toml).unwrap().network().unwrap_err();
    assert!(matches!(err, RankError::DuplicateKey(ref k) if k == "a"));
}

#[test]
fn test_undefined_reference_rejected() {
    let toml = r#"
[graph]
order = ["a"]
[[graph.node]]
key = "a"
inputs = ["b"]
outputs = ["a"]
"#;
    let err = Config::from_toml(toml).unwrap().network().unwrap_err();
    assert!(matches!(err, RankError::UndefinedReference { ref label, .. } if label == "b"));
}

#[test]
fn test_bad_teleportation_rejected() {
    let err = Config::from_toml("[params]\nteleportation = 1.0")
        .unwrap()
        .network()
        .unwrap_err();
    assert!(matches!(err, RankError::InvalidTeleportation(_)));
}

#[test]
fn test_save_then_load() {
    let d = tempfile::tempdir().unwrap();
    let path = d.path().join("ranksweep.toml");
    let mut c = Config::new();
    c.params.max_iteration = 7;
    c.params.update = UpdateMode::Snapshot;
    c.save(&path).unwrap();

    let loaded = Config::load(Some(path.as_path())).unwrap();
    assert_eq!(loaded.params, c.params);
    assert_eq!(loaded.graph, c.graph);
    assert_eq!(loaded.source.as_deref(), Some(path.as_path()));
    assert!(fs::read_to_string(&path).unwrap().contains("[[graph.node]]"));
}

#[test]
fn test_explicit_missing_file_is_io_error() {
    let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
    assert!(matches!(err, RankError::Io { .. }));
    assert!(!err.is_config());
}

#[test]
fn test_run_flags_override_file() {
    let mut params = Config::from_toml(FULL).unwrap().params;
    let args = RunArgs {
        teleportation: Some(0.3),
        max_iteration: Some(2),
        dangling: Some(DanglingPolicy::Fail),
        ..RunArgs::default()
    };
    args.apply(&mut params);
    assert!((params.teleportation - 0.3).abs() < f64::EPSILON);
    assert_eq!(params.max_iteration, 2);
    assert_eq!(params.dangling, DanglingPolicy::Fail);
    // Untouched flags keep file values.
    assert_eq!(params.update, UpdateMode::Snapshot);
    assert_eq!(params.tolerance, Some(1e-8));
}
