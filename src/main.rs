//! A command line interface to the road trip planner.

use std::fs::File;
use std::io::{self, BufReader};
use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::info;

use u_roadtrip::config::TripConfig;
use u_roadtrip::ingest::{check_coverage, load_distances_file, load_populations_file};
use u_roadtrip::logging::{init_logger, parse_level};
use u_roadtrip::report::ReportOptions;
use u_roadtrip::resolve::CityResolver;
use u_roadtrip::session::Session;
use u_roadtrip::{Error, Result};

const MILES_ARG_NAME: &str = "miles";
const POPULATION_ARG_NAME: &str = "population";
const CITY_ARG_NAME: &str = "city";
const CONFIG_ARG_NAME: &str = "config";
const DAYS_ARG_NAME: &str = "days";
const DISTANCE_CAP_ARG_NAME: &str = "distance-cap";
const SUMMARY_ARG_NAME: &str = "summary";
const JSON_ARG_NAME: &str = "json";
const LIMIT_ARG_NAME: &str = "limit";
const LOG_LEVEL_ARG_NAME: &str = "log-level";

fn get_app() -> Command {
    Command::new("u-roadtrip")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Plans closed multi-day road trips and ranks them by population covered")
        .arg(
            Arg::new(MILES_ARG_NAME)
                .help("CSV distance matrix: blank corner cell, city names in header and first column")
                .short('m')
                .long(MILES_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(POPULATION_ARG_NAME)
                .help("CSV with City and Population columns")
                .short('p')
                .long(POPULATION_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(CITY_ARG_NAME)
                .help("Start city; skips the interactive prompt")
                .short('c')
                .long(CITY_ARG_NAME),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("JSON file with day_cap and distance_cap")
                .long(CONFIG_ARG_NAME),
        )
        .arg(
            Arg::new(DAYS_ARG_NAME)
                .help("Number of driving days before returning")
                .short('d')
                .long(DAYS_ARG_NAME),
        )
        .arg(
            Arg::new(DISTANCE_CAP_ARG_NAME)
                .help("Maximum distance driven per day")
                .long(DISTANCE_CAP_ARG_NAME),
        )
        .arg(
            Arg::new(SUMMARY_ARG_NAME)
                .help("Print leg distances, total distance and day count for every tour")
                .short('s')
                .long(SUMMARY_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(JSON_ARG_NAME)
                .help("Print results as JSON")
                .long(JSON_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(LIMIT_ARG_NAME)
                .help("Print at most this many tours")
                .short('n')
                .long(LIMIT_ARG_NAME),
        )
        .arg(
            Arg::new(LOG_LEVEL_ARG_NAME)
                .help("Log level: off, error, warn, info, debug, trace")
                .long(LOG_LEVEL_ARG_NAME)
                .default_value("warn"),
        )
}

fn main() {
    let matches = get_app().get_matches();
    if let Err(err) = run(&matches) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    init_logger(parse_level(required(matches, LOG_LEVEL_ARG_NAME)?)?)?;

    let config = read_config(matches)?;
    let options = ReportOptions {
        summaries: matches.get_flag(SUMMARY_ARG_NAME),
        json: matches.get_flag(JSON_ARG_NAME),
        limit: parse_value::<usize>(matches, LIMIT_ARG_NAME, "tour limit")?,
    };

    let distances = load_distances_file(required(matches, MILES_ARG_NAME)?)?;
    let populations = load_populations_file(required(matches, POPULATION_ARG_NAME)?)?;
    check_coverage(&distances, &populations)?;
    info!(
        "loaded {} cities with distances, {} with populations",
        distances.size(),
        populations.len()
    );

    let resolver = CityResolver::new(populations.cities().iter().cloned());
    let session = Session {
        distances: &distances,
        populations: &populations,
        resolver: &resolver,
        config,
        options,
    };

    let stdout = io::stdout();
    let mut output = stdout.lock();
    match matches.get_one::<String>(CITY_ARG_NAME) {
        Some(typed) => {
            let city = resolver
                .best_match(typed)
                .ok_or_else(|| Error::invalid_input(format!("no city resembles '{typed}'")))?
                .city;
            info!("resolved '{typed}' to '{city}'");
            session.query(&city, &mut output)
        }
        None => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            session.run(&mut input, &mut output)
        }
    }
}

fn read_config(matches: &ArgMatches) -> Result<TripConfig> {
    let file = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => Some(BufReader::new(File::open(path)?)),
        None => None,
    };
    TripConfig::layered(
        file,
        parse_value::<usize>(matches, DAYS_ARG_NAME, "days")?,
        parse_value::<f64>(matches, DISTANCE_CAP_ARG_NAME, "distance cap")?,
    )
}

fn required<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a String> {
    matches
        .get_one::<String>(name)
        .ok_or_else(|| Error::invalid_input(format!("missing --{name}")))
}

fn parse_value<T>(matches: &ArgMatches, name: &str, description: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    matches
        .get_one::<String>(name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| {
                Error::invalid_input(format!("cannot parse {description} '{arg}': {err}"))
            })
        })
        .transpose()
}
