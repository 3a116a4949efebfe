use super::*;

#[test]
fn can_display_patrol_errors() {
    assert_eq!(PatrolError::invalid_parameter("alpha must be positive").to_string(), "invalid parameter: alpha must be positive");
    assert_eq!(PatrolError::invalid_graph("graph has no nodes").to_string(), "invalid graph: graph has no nodes");
    assert_eq!(PatrolError::Unreachable { from: 0, to: 2 }.to_string(), "node 2 is unreachable from node 0");
    assert_eq!(PatrolError::NoValidSelection("zero sum".to_string()).to_string(), "no valid selection: zero sum");
}

#[test]
fn can_convert_patrol_error_to_generic() {
    let error: GenericError = PatrolError::Unreachable { from: 1, to: 3 }.into();

    assert_eq!(error.to_string(), "node 3 is unreachable from node 1");
}

#[test]
fn can_create_generic_error_from_strings() {
    assert_eq!(GenericError::from("first").to_string(), "first");
    assert_eq!(GenericError::from("second".to_string()).to_string(), "second");
}
