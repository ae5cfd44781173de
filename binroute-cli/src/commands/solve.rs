#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use binroute_cli::extensions::solve::config::{read_config, Config};
use binroute_cli::format::solution::RouteSolution;
use binroute_cli::{solve_route, SolvedRoute};
use clap::{Arg, ArgAction, Command};
use std::io::BufReader;

const REQUEST_ARG_NAME: &str = "REQUEST";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const GEO_JSON_ARG_NAME: &str = "geo-json";
const GENERATIONS_ARG_NAME: &str = "max-generations";
const STALL_ARG_NAME: &str = "max-stall";
const PARALLELISM_ARG_NAME: &str = "parallelism";
const RANDOM_SEED_NAME: &str = "seed";
const LOG_ARG_NAME: &str = "log";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Finds a short collection route from the depot through requested stops to the disposal site")
        .arg(Arg::new(REQUEST_ARG_NAME).help("Sets the route request file to use").required(true).index(1))
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to algorithm configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GEO_JSON_ARG_NAME)
                .help("Specifies path to route output in geo json format")
                .short('g')
                .long(GEO_JSON_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GENERATIONS_ARG_NAME)
                .help("Specifies maximum number of generations")
                .short('n')
                .long(GENERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(STALL_ARG_NAME)
                .help("Stops evolution when the best route is not improved during given number of generations")
                .long(STALL_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(PARALLELISM_ARG_NAME)
                .help("Specifies amount of threads used to evaluate routes")
                .short('p')
                .long(PARALLELISM_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .long(RANDOM_SEED_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
}

/// Runs solver commands.
pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    // required
    let request_path = matches.get_one::<String>(REQUEST_ARG_NAME).ok_or("request path is not specified")?;
    let request_file = open_file(request_path, "request")?;

    // optional
    let max_generations = parse_int_value::<usize>(matches, GENERATIONS_ARG_NAME, "max generations")?;
    let max_stall = parse_int_value::<usize>(matches, STALL_ARG_NAME, "max stall")?;
    let parallelism = parse_int_value::<usize>(matches, PARALLELISM_ARG_NAME, "parallelism")?;
    let seed = parse_int_value::<u64>(matches, RANDOM_SEED_NAME, "seed")?;
    let is_logging = matches.get_flag(LOG_ARG_NAME);

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let out_geojson = matches.get_one::<String>(GEO_JSON_ARG_NAME).map(|path| create_file(path, "geojson"));

    let mut config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))?,
        None => Config::default(),
    };

    if let Some(max_generations) = max_generations {
        config.termination_mut().max_generations = Some(max_generations);
    }

    if let Some(max_stall) = max_stall {
        config.termination_mut().max_stall = Some(max_stall);
    }

    if let Some(parallelism) = parallelism {
        config.environment_mut().parallelism = Some(parallelism);
    }

    if let Some(seed) = seed {
        config.environment_mut().seed = Some(seed);
    }

    if is_logging {
        config.enable_logging();
    }

    let SolvedRoute { problem, result, metrics } =
        solve_route(BufReader::new(request_file), &config).map_err(|err| err.to_json())?;

    if let Some(out_geojson) = out_geojson {
        result
            .write_geo_json(problem.as_ref(), BufWriter::new(out_geojson?))
            .map_err(|err| format!("cannot write geojson: '{err}'"))?;
    }

    let out_result = out_result.transpose()?;
    let writer = out_writer_func(out_result);

    match metrics {
        Some(metrics) => (result, metrics).write_json(writer),
        None => result.write_json(writer),
    }
    .map_err(|err| format!("cannot write result: '{err}'"))
}
