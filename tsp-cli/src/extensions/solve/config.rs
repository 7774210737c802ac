//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;
use tsp_core::solver::{Builder, InfoLogger, TelemetryMode};
use tsp_core::utils::GenericResult;

/// An algorithm configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Specifies algorithm termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies search configuration.
    pub search: Option<SearchConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A termination configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max running time in seconds. Default is 59.
    pub max_time: Option<f64>,
    /// Max amount of completed attempts. Default is no limit.
    pub max_attempts: Option<usize>,
}

/// A search configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    /// Max amount of parallel workers. Default is number of cpus.
    pub max_workers: Option<usize>,
    /// Amount of closest neighbours considered by tour construction. Default is 3.
    pub candidates: Option<usize>,
    /// Randomization seed. Default is none.
    pub seed: Option<u64>,
}

/// A telemetry configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    /// Logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
}

/// Creates a default logger which writes messages to stderr.
pub fn create_default_logger() -> InfoLogger {
    Arc::new(|msg: &str| eprintln!("{msg}"))
}

fn configure_from_termination(mut builder: Builder, config: &Option<TerminationConfig>) -> Builder {
    if let Some(config) = config {
        builder = builder.with_max_time(config.max_time);

        if config.max_attempts.is_some() {
            builder = builder.with_max_attempts(config.max_attempts);
        }
    }

    builder
}

fn configure_from_search(mut builder: Builder, config: &Option<SearchConfig>) -> Builder {
    if let Some(config) = config {
        builder = builder.with_candidates_size(config.candidates);

        if config.max_workers.is_some() {
            builder = builder.with_max_workers(config.max_workers);
        }

        if config.seed.is_some() {
            builder = builder.with_seed(config.seed);
        }
    }

    builder
}

fn configure_from_telemetry(builder: Builder, config: &Option<TelemetryConfig>) -> Builder {
    match config.as_ref().and_then(|config| config.logging.as_ref()) {
        Some(LoggingConfig { enabled: true }) => {
            builder.with_telemetry(TelemetryMode::OnlyLogging { logger: create_default_logger() })
        }
        Some(LoggingConfig { enabled: false }) => builder.with_telemetry(TelemetryMode::None),
        None => builder,
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Applies settings present in config to the builder, settings absent in config stay untouched.
pub fn configure_builder_from_config(builder: Builder, config: &Config) -> Builder {
    let builder = configure_from_telemetry(builder, &config.telemetry);
    let builder = configure_from_search(builder, &config.search);

    configure_from_termination(builder, &config.termination)
}
