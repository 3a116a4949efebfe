#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};

/// Specifies the failure kinds which can be raised by route generation.
#[derive(Clone, Debug, PartialEq)]
pub enum PatrolError {
    /// A configuration value is out of its allowed range, raised before any computation starts.
    InvalidParameter(String),

    /// An input graph is malformed: wrong dimensions, negative or asymmetric weights, etc.
    InvalidGraph(String),

    /// There is no path between two nodes, patrolling is undefined on a disconnected graph.
    Unreachable {
        /// A start node of the failed search.
        from: usize,
        /// A goal node of the failed search.
        to: usize,
    },

    /// A probabilistic selection has no candidate with positive weight.
    NoValidSelection(String),
}

/// A type alias for result type with `PatrolError`.
pub type PatrolResult<T> = Result<T, PatrolError>;

impl PatrolError {
    /// Creates `InvalidParameter` error from given message.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Creates `InvalidGraph` error from given message.
    pub fn invalid_graph(msg: impl Into<String>) -> Self {
        Self::InvalidGraph(msg.into())
    }
}

impl Display for PatrolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            Self::InvalidGraph(msg) => write!(f, "invalid graph: {msg}"),
            Self::Unreachable { from, to } => write!(f, "node {to} is unreachable from node {from}"),
            Self::NoValidSelection(msg) => write!(f, "no valid selection: {msg}"),
        }
    }
}

impl std::error::Error for PatrolError {}

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<PatrolError> for GenericError {
    fn from(value: PatrolError) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}
