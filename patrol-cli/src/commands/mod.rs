use clap::ArgMatches;

pub mod dispatch;
pub mod solve;

use patrol_cli::format::read_graph;
use patrol_core::prelude::*;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::str::FromStr;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, GenericError> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'").into())
}

fn create_file(path: &str, description: &str) -> Result<File, GenericError> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'").into())
}

fn parse_float_value<T: FromStr<Err = std::num::ParseFloatError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, GenericError> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| format!("cannot get float value, error: '{err}': '{arg_desc}'").into())
                .map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, GenericError> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>()
                .map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'").into())
                .map(Some)
        })
        .unwrap_or(Ok(None))
}

/// Reads the graph file and derives its complete graph.
fn read_complete_graph(path: &str) -> Result<CompleteGraph, GenericError> {
    let graph = read_graph(BufReader::new(open_file(path, "graph")?))?;

    Ok(build_complete_graph(&graph)?)
}
