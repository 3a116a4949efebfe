#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use clap::{Arg, ArgAction, Command};
use patrol_cli::config::{Config, read_config};
use patrol_cli::format::{create_solution_output, write_output};

const GRAPH_ARG_NAME: &str = "GRAPH";
const STRATEGY_ARG_NAME: &str = "strategy";
const AGENTS_ARG_NAME: &str = "agents";
const CONFIG_ARG_NAME: &str = "config";
const RANDOM_SEED_NAME: &str = "seed";
const ITERATIONS_ARG_NAME: &str = "max-iterations";
const LOG_ARG_NAME: &str = "log";
const OUT_RESULT_ARG_NAME: &str = "out-result";

const LOG_EVERY: usize = 10;

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Generates cyclic patrol routes, one per agent")
        .arg(Arg::new(GRAPH_ARG_NAME).help("Sets the graph file to use").required(true).index(1))
        .arg(
            Arg::new(STRATEGY_ARG_NAME)
                .help("Specifies route generation strategy")
                .short('s')
                .long(STRATEGY_ARG_NAME)
                .required(false)
                .default_value("aco")
                .value_parser(["aco", "genetic", "cluster"]),
        )
        .arg(
            Arg::new(AGENTS_ARG_NAME)
                .help("Specifies amount of agents")
                .short('a')
                .long(AGENTS_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_NAME)
                .help("Specifies random seed to make a run repeatable")
                .long(RANDOM_SEED_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ITERATIONS_ARG_NAME)
                .help("Specifies max amount of iterations or generations")
                .short('n')
                .long(ITERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
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

pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), GenericError> {
    // required
    let graph_path = matches.get_one::<String>(GRAPH_ARG_NAME).ok_or("graph path is not specified")?;
    let agents = parse_int_value::<usize>(matches, AGENTS_ARG_NAME, "agents")?.ok_or("agents are not specified")?;

    // optional
    let strategy = matches.get_one::<String>(STRATEGY_ARG_NAME).map(String::as_str).unwrap_or("aco");
    let seed = parse_int_value::<u64>(matches, RANDOM_SEED_NAME, "random seed")?;
    let max_iterations = parse_int_value::<usize>(matches, ITERATIONS_ARG_NAME, "max iterations")?;
    let config = get_config(matches)?;
    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));

    let graph = read_complete_graph(graph_path)?;
    let environment = config.create_environment(seed);
    let solver = create_strategy(strategy, &config, max_iterations)?;

    let routes = solver.solve(&graph, agents, &environment)?;
    let report = evaluate_routes(&graph, &routes)?;
    let output = create_solution_output(solver.name(), &graph, routes, &report);

    let mut writer = out_writer_func(out_result.transpose()?);

    write_output(&mut writer, &output)
}

fn get_config(matches: &ArgMatches) -> Result<Config, GenericError> {
    let config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))?,
        None => Config::default(),
    };

    Ok(if matches.get_flag(LOG_ARG_NAME) { config.with_logging(LOG_EVERY) } else { config })
}

fn create_strategy(
    strategy: &str,
    config: &Config,
    max_iterations: Option<usize>,
) -> Result<Box<dyn RouteStrategy>, GenericError> {
    let mut aco = config.to_aco_config();
    let mut genetic = config.to_genetic_config();
    let mut cluster = config.to_cluster_config();

    if let Some(max_iterations) = max_iterations {
        aco.max_iterations = max_iterations;
        genetic.generations = max_iterations;
        cluster.genetic.generations = max_iterations;
    }

    let solver: Box<dyn RouteStrategy> = match strategy {
        "aco" => Box::new(AntColonyOptimizer::new(aco)?),
        "genetic" => Box::new(PatrolGeneticAlgorithm::new(genetic)?),
        "cluster" => Box::new(ClusterPartitioner::new(cluster)?),
        _ => return Err(format!("unknown strategy: '{strategy}'").into()),
    };

    Ok(solver)
}
