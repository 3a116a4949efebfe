use super::*;

use tempfile::{NamedTempFile, TempDir};

const SQUARE_GRAPH: &str = r#"{
  "nodes": [ { "x": 0, "y": 0 }, { "x": 1, "y": 0 }, { "x": 1, "y": 1 }, { "x": 0, "y": 1 } ],
  "edges": [ { "from": 0, "to": 1 }, { "from": 1, "to": 2 }, { "from": 2, "to": 3 }, { "from": 3, "to": 0 } ]
}"#;

fn create_graph_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SQUARE_GRAPH.as_bytes()).unwrap();
    file.flush().unwrap();

    file
}

fn run_dispatch_to_file(params: &[&str]) -> Result<serde_json::Value, GenericError> {
    let graph = create_graph_file();
    let out_dir = TempDir::new().unwrap();
    let out_path = out_dir.path().join("dispatch.json");
    let out_path = out_path.to_str().unwrap();
    let args = [&["dispatch", graph.path().to_str().unwrap()], params, &["--out-result", out_path]].concat();
    let matches = get_dispatch_app().try_get_matches_from(args).unwrap();

    run_dispatch(&matches, create_write_buffer)?;

    let text = std::fs::read_to_string(out_path).unwrap();
    Ok(serde_json::from_str(&text).unwrap())
}

#[test]
fn can_simulate_dispatch_from_given_starts() {
    let value = run_dispatch_to_file(&["--agents", "2", "--starts", "0,2", "--horizon", "10"]).unwrap();

    assert_eq!(value["horizon"].as_f64(), Some(10.));
    let visits = value["visits"].as_array().unwrap();
    assert!(visits.len() > 2);
    assert_eq!(visits[0]["agent"].as_u64(), Some(0));
    assert_eq!(visits[0]["node"].as_u64(), Some(0));
    assert_eq!(visits[1]["agent"].as_u64(), Some(1));
    assert_eq!(visits[1]["node"].as_u64(), Some(2));
    assert!(visits.iter().all(|visit| visit["time"].as_f64().unwrap() <= 10.));
    assert!(value["idleness"]["max"].as_f64().is_some());
}

#[test]
fn can_use_default_starts_and_horizon() {
    let value = run_dispatch_to_file(&["--agents", "2"]).unwrap();

    let visits = value["visits"].as_array().unwrap();
    assert_eq!(value["horizon"].as_f64(), Some(DEFAULT_HORIZON));
    assert_eq!(visits[1]["node"].as_u64(), Some(1));
}

#[test]
fn can_parse_starts() {
    assert_eq!(parse_starts("0, 3,2").unwrap(), vec![0, 3, 2]);
    assert!(parse_starts("0,x").is_err());
}

#[test]
fn can_return_error_for_invalid_input() {
    let cases = [
        (vec!["--agents", "2", "--starts", "0"], "expected 2 start nodes"),
        (vec!["--agents", "1", "--starts", "9"], "out of range"),
        (vec!["--agents", "1", "--horizon", "0"], "horizon must be positive"),
        (vec!["--agents", "5"], "exceeds amount of nodes"),
    ];

    for (params, expected) in cases {
        let err = run_dispatch_to_file(params.as_slice()).unwrap_err();

        assert!(err.to_string().contains(expected), "'{err}' does not contain '{expected}'");
    }
}
