//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use crate::format::{Site, Sites};
use binroute_core::genetic::{DEFAULT_TOURNAMENT_SIZE, Selection};
use binroute_core::models::Problem;
use binroute_core::solver::{Builder, TelemetryMode};
use binroute_core::utils::{DefaultRandom, Environment, InfoLogger, Random};
use serde::Deserialize;
use std::collections::HashSet;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// An algorithm configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies evolution configuration.
    pub evolution: Option<EvolutionConfig>,
    /// Specifies algorithm termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
    /// Specifies environment configuration.
    pub environment: Option<EnvironmentConfig>,
    /// Specifies static locations.
    pub locations: Option<LocationsConfig>,
}

/// An evolution configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionConfig {
    /// Amount of individuals in every generation. Default is 100.
    pub population_size: Option<usize>,
    /// Probability of crossover. Default is 0.85.
    pub crossover_rate: Option<f64>,
    /// Probability of mutation. Default is 0.05.
    pub mutation_rate: Option<f64>,
    /// Amount of best individuals copied unchanged. Default is 2.
    pub elitism_count: Option<usize>,
    /// Parent selection. Default is tournament of 5.
    pub selection: Option<SelectionType>,
}

/// A parent selection configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum SelectionType {
    /// The fittest of sampled competitors wins.
    #[serde(rename(deserialize = "tournament"))]
    Tournament {
        /// Amount of competitors. Default is 5.
        size: Option<usize>,
    },
    /// Any individual is picked with the same probability.
    #[serde(rename(deserialize = "uniform"))]
    Uniform,
}

/// A termination configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Amount of generations. Default is 300.
    pub max_generations: Option<usize>,
    /// Amount of generations without improvement which stops evolution. Not used by default.
    pub max_stall: Option<usize>,
}

/// A telemetry configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TelemetryConfig {
    /// Logging configuration.
    pub logging: Option<LoggingConfig>,
    /// Metrics configuration.
    pub metrics: Option<MetricsConfig>,
}

/// A logging configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled.
    pub enabled: bool,
    /// Specifies how often best route is logged. Default is 100 (generations).
    pub log_best: Option<usize>,
}

/// A metrics configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsConfig {
    /// Specifies whether metrics collection is enabled.
    pub enabled: bool,
    /// Specifies how often best route is tracked. Default is 1 (every generation).
    pub track_best: Option<usize>,
}

/// An environment configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EnvironmentConfig {
    /// Random seed, unseeded generator is used when not set.
    pub seed: Option<u64>,
    /// Amount of threads used to evaluate routes. Default is rayon's global pool.
    pub parallelism: Option<usize>,
}

/// Static locations configuration. Missing parts fall back to defaults.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LocationsConfig {
    /// A depot.
    pub depot: Option<Site>,
    /// A disposal site.
    pub disposal: Option<Site>,
    /// Known collection points.
    pub catalog: Option<Vec<Site>>,
}

impl Config {
    /// Returns termination configuration, creating an empty one if needed.
    pub fn termination_mut(&mut self) -> &mut TerminationConfig {
        self.termination.get_or_insert_with(TerminationConfig::default)
    }

    /// Returns environment configuration, creating an empty one if needed.
    pub fn environment_mut(&mut self) -> &mut EnvironmentConfig {
        self.environment.get_or_insert_with(EnvironmentConfig::default)
    }

    /// Enables logging keeping other telemetry settings.
    pub fn enable_logging(&mut self) {
        let telemetry = self.telemetry.get_or_insert_with(TelemetryConfig::default);
        let log_best = telemetry.logging.as_ref().and_then(|logging| logging.log_best);

        telemetry.logging = Some(LoggingConfig { enabled: true, log_best });
    }
}

fn configure_from_evolution(builder: Builder, evolution_config: &Option<EvolutionConfig>) -> Result<Builder, String> {
    let Some(config) = evolution_config else {
        return Ok(builder);
    };

    let mut builder = builder;

    if let Some(population_size) = config.population_size {
        builder = builder.with_population_size(population_size);
    }

    if let Some(crossover_rate) = config.crossover_rate {
        builder = builder.with_crossover_rate(crossover_rate);
    }

    if let Some(mutation_rate) = config.mutation_rate {
        builder = builder.with_mutation_rate(mutation_rate);
    }

    if let Some(elitism_count) = config.elitism_count {
        builder = builder.with_elitism_count(elitism_count);
    }

    if let Some(selection) = &config.selection {
        builder = builder.with_selection(match selection {
            SelectionType::Tournament { size } => {
                Selection::Tournament { size: size.unwrap_or(DEFAULT_TOURNAMENT_SIZE) }
            }
            SelectionType::Uniform => Selection::Uniform,
        });
    }

    Ok(builder)
}

fn configure_from_termination(
    builder: Builder,
    termination_config: &Option<TerminationConfig>,
) -> Result<Builder, String> {
    let Some(config) = termination_config else {
        return Ok(builder);
    };

    let builder = match config.max_generations {
        Some(max_generations) => builder.with_max_generations(max_generations),
        None => builder,
    };

    Ok(builder.with_max_stall(config.max_stall))
}

fn configure_from_telemetry(
    builder: Builder,
    telemetry_config: &Option<TelemetryConfig>,
    logger: InfoLogger,
) -> Result<Builder, String> {
    const LOG_BEST: usize = 100;
    const TRACK_BEST: usize = 1;

    let logging = telemetry_config.as_ref().and_then(|t| t.logging.as_ref()).filter(|logging| logging.enabled);
    let metrics = telemetry_config.as_ref().and_then(|t| t.metrics.as_ref()).filter(|metrics| metrics.enabled);

    let telemetry_mode = match (logging, metrics) {
        (Some(logging), Some(metrics)) => TelemetryMode::All {
            logger,
            log_best: logging.log_best.unwrap_or(LOG_BEST),
            track_best: metrics.track_best.unwrap_or(TRACK_BEST),
        },
        (Some(logging), None) => {
            TelemetryMode::OnlyLogging { logger, log_best: logging.log_best.unwrap_or(LOG_BEST) }
        }
        (None, Some(metrics)) => TelemetryMode::OnlyMetrics { track_best: metrics.track_best.unwrap_or(TRACK_BEST) },
        (None, None) => TelemetryMode::None,
    };

    Ok(builder.with_telemetry(telemetry_mode))
}

fn create_environment(environment_config: &Option<EnvironmentConfig>) -> Environment {
    let seed = environment_config.as_ref().and_then(|config| config.seed);
    let parallelism = environment_config.as_ref().and_then(|config| config.parallelism);

    let random: Arc<dyn Random> = match seed {
        Some(seed) => Arc::new(DefaultRandom::new_with_seed(seed)),
        None => Arc::new(DefaultRandom::default()),
    };
    // stdout is reserved for the route response
    let logger: InfoLogger = Arc::new(|msg: &str| eprintln!("{msg}"));

    Environment::new(random, logger, parallelism)
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates a solver `Builder` from config file.
pub fn create_builder_from_config_file<R: Read>(problem: Arc<Problem>, reader: BufReader<R>) -> Result<Builder, String> {
    read_config(reader).and_then(|config| create_builder_from_config(problem, &config))
}

/// Creates a solver `Builder` from config.
pub fn create_builder_from_config(problem: Arc<Problem>, config: &Config) -> Result<Builder, String> {
    let environment = create_environment(&config.environment);
    let logger = environment.logger.clone();

    let mut builder = Builder::new(problem).with_environment(environment);

    builder = configure_from_telemetry(builder, &config.telemetry, logger)?;
    builder = configure_from_evolution(builder, &config.evolution)?;
    builder = configure_from_termination(builder, &config.termination)?;

    Ok(builder)
}

/// Creates static sites from config, missing parts are taken from defaults.
pub fn create_sites_from_config(config: &Config) -> Result<Sites, String> {
    let defaults = Sites::default();
    let locations = config.locations.clone().unwrap_or_default();

    let sites = Sites {
        depot: locations.depot.unwrap_or(defaults.depot),
        disposal: locations.disposal.unwrap_or(defaults.disposal),
        catalog: locations.catalog.unwrap_or(defaults.catalog),
    };

    validate_sites(&sites).map(|_| sites)
}

fn validate_sites(sites: &Sites) -> Result<(), String> {
    if sites.depot.name == sites.disposal.name {
        return Err(format!("depot and disposal site must have different names, got '{}'", sites.depot.name));
    }

    let all_sites = || [&sites.depot, &sites.disposal].into_iter().chain(sites.catalog.iter());

    if let Some(site) = all_sites().find(|site| !site.coordinate().is_valid()) {
        return Err(format!("invalid coordinate of location '{}': {}", site.name, site.coordinate()));
    }

    let mut names = HashSet::new();
    if let Some(site) = all_sites().find(|site| !names.insert(site.name.as_str())) {
        return Err(format!("location '{}' is defined more than once", site.name));
    }

    Ok(())
}
