//! A module which provides the logic to collect metrics about algorithm execution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use crate::models::OptimizationResult;
use crate::utils::{InfoLogger, Timer};
use serde::Serialize;

/// Encapsulates different measurements regarding algorithm evaluation.
#[derive(Clone, Debug, Default, Serialize)]
pub struct TelemetryMetrics {
    /// Algorithm duration in milliseconds.
    pub duration: usize,
    /// Total amount of generations.
    pub generations: usize,
    /// Speed: generations per second.
    pub speed: f64,
    /// Evolution progress.
    pub evolution: Vec<TelemetryGeneration>,
}

/// Represents information about generation.
#[derive(Clone, Debug, Serialize)]
pub struct TelemetryGeneration {
    /// Generation sequence number.
    pub number: usize,
    /// Time since evolution started in seconds.
    pub timestamp: f64,
    /// Best known total distance (unrounded) after this generation.
    pub best_distance: f64,
    /// True if this generation improved the best known route.
    pub is_improvement: bool,
}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best individual is logged.
        log_best: usize,
    },
    /// Only metrics collection.
    OnlyMetrics {
        /// Specifies how often best individual is tracked.
        track_best: usize,
    },
    /// Both logging and metrics collection.
    All {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best individual is logged.
        log_best: usize,
        /// Specifies how often best individual is tracked.
        track_best: usize,
    },
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    metrics: TelemetryMetrics,
    time: Timer,
    mode: TelemetryMode,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { time: Timer::start(), metrics: TelemetryMetrics::default(), mode }
    }

    /// Reports initial population.
    pub fn on_initial(&mut self, population_size: usize, stops: usize) {
        self.time = Timer::start();
        self.log(format!("created initial population of {population_size} routes over {stops} stops").as_str());
    }

    /// Reports generation statistics.
    pub fn on_generation(&mut self, generation: usize, best_distance: f64, generation_time: Timer, is_improved: bool) {
        self.metrics.generations = generation + 1;

        let (log_best, track_best) = match &self.mode {
            TelemetryMode::None => return,
            TelemetryMode::OnlyLogging { log_best, .. } => (Some(*log_best), None),
            TelemetryMode::OnlyMetrics { track_best } => (None, Some(*track_best)),
            TelemetryMode::All { log_best, track_best, .. } => (Some(*log_best), Some(*track_best)),
        };

        if log_best.is_some_and(|log_best| generation % log_best.max(1) == 0) {
            self.log(
                format!(
                    "[{}s] generation {} took {}ms, best distance: {:.3}km{}",
                    self.time.elapsed_secs(),
                    generation,
                    generation_time.elapsed_millis(),
                    best_distance,
                    if is_improved { " (improved)" } else { "" }
                )
                .as_str(),
            );
        }

        if track_best.is_some_and(|track_best| generation % track_best.max(1) == 0) {
            self.metrics.evolution.push(TelemetryGeneration {
                number: generation,
                timestamp: self.time.elapsed_secs_as_float(),
                best_distance,
                is_improvement: is_improved,
            });
        }
    }

    /// Reports final result.
    pub fn on_result(&mut self, result: &OptimizationResult) {
        let elapsed = self.time.elapsed_secs_as_float();
        let generations = self.metrics.generations;

        self.metrics.duration = self.time.elapsed_millis() as usize;
        self.metrics.speed = if elapsed > 0. { generations as f64 / elapsed } else { 0. };

        self.log(
            format!(
                "[{}s] total generations: {}, speed: {:.2} gen/sec, route of {} segments: {}km, {}min",
                self.time.elapsed_secs(),
                generations,
                self.metrics.speed,
                result.segments.len(),
                result.total_distance_km,
                result.estimated_total_minutes
            )
            .as_str(),
        );
    }

    /// Returns collected metrics if metrics collection is enabled.
    pub fn take_metrics(self) -> Option<TelemetryMetrics> {
        match &self.mode {
            TelemetryMode::OnlyMetrics { .. } | TelemetryMode::All { .. } => Some(self.metrics),
            _ => None,
        }
    }

    /// Writes log message if logging is enabled.
    pub fn log(&self, message: &str) {
        match &self.mode {
            TelemetryMode::OnlyLogging { logger, .. } | TelemetryMode::All { logger, .. } => (logger)(message),
            _ => {}
        }
    }
}
