//! A crate contains helpers to run patrol route generation from the command line: a JSON
//! configuration of strategies and JSON models of the patrolled graph and generated routes.

#![warn(missing_docs)]

pub mod config;
pub mod format;
