#[cfg(test)]
#[path = "../../tests/unit/commands/dispatch_test.rs"]
mod dispatch_test;

use super::*;

use clap::{Arg, Command};
use patrol_cli::format::{create_dispatch_output, write_output};
use std::sync::Arc;

const GRAPH_ARG_NAME: &str = "GRAPH";
const AGENTS_ARG_NAME: &str = "agents";
const STARTS_ARG_NAME: &str = "starts";
const HORIZON_ARG_NAME: &str = "horizon";
const OUT_RESULT_ARG_NAME: &str = "out-result";

const DEFAULT_HORIZON: f64 = 100.;

pub fn get_dispatch_app() -> Command {
    Command::new("dispatch")
        .about("Simulates agents driven by the greedy idleness dispatcher")
        .arg(Arg::new(GRAPH_ARG_NAME).help("Sets the graph file to use").required(true).index(1))
        .arg(
            Arg::new(AGENTS_ARG_NAME)
                .help("Specifies amount of agents")
                .short('a')
                .long(AGENTS_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(STARTS_ARG_NAME)
                .help("Specifies comma separated start nodes, one per agent. Default is 0,1,..")
                .short('s')
                .long(STARTS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(HORIZON_ARG_NAME)
                .help("Specifies simulated time horizon")
                .short('t')
                .long(HORIZON_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_dispatch(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), GenericError> {
    let graph_path = matches.get_one::<String>(GRAPH_ARG_NAME).ok_or("graph path is not specified")?;
    let agents = parse_int_value::<usize>(matches, AGENTS_ARG_NAME, "agents")?.ok_or("agents are not specified")?;

    let horizon = parse_float_value::<f64>(matches, HORIZON_ARG_NAME, "horizon")?.unwrap_or(DEFAULT_HORIZON);
    let starts = match matches.get_one::<String>(STARTS_ARG_NAME) {
        Some(starts) => parse_starts(starts)?,
        None => (0..agents).collect(),
    };
    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));

    let graph = read_complete_graph(graph_path)?;
    let mut dispatcher = GreedyIdlenessDispatcher::new(Arc::new(graph.matrix().clone()), agents)?;

    let trace = simulate_dispatch(&graph, &mut dispatcher, starts.as_slice(), horizon)?;
    let output = create_dispatch_output(horizon, &trace);

    let mut writer = out_writer_func(out_result.transpose()?);

    write_output(&mut writer, &output)
}

fn parse_starts(starts: &str) -> Result<Vec<usize>, GenericError> {
    starts
        .split(',')
        .map(|start| {
            start
                .trim()
                .parse::<usize>()
                .map_err(|err| GenericError::from(format!("cannot parse start node '{start}': '{err}'")))
        })
        .collect()
}
