//! Scoring engine initialization
//!
//! Converts server configuration into a ready scoring engine. Tables come
//! from the configured YAML path when one is set, otherwise from the seed
//! tables compiled into the binary.

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use stride_core::{ScoringEngine, ScoringTables};
use tracing::info;

const SEED_TABLES: &str = include_str!("../data/tables.yaml");

/// Initialize the scoring engine from configuration
pub fn init_engine(config: &ServerConfig) -> Result<ScoringEngine> {
    let tables = match &config.tables {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| {
                format!("failed to read scoring tables from {}", path.display())
            })?;
            serde_yaml::from_str(&text).with_context(|| {
                format!("failed to parse scoring tables from {}", path.display())
            })?
        }
        None => default_tables()?,
    };

    info!(
        "Loaded scoring tables: {} coefficient sets, {} competition categories",
        tables.coefficient_count(),
        tables.competitions.len()
    );

    Ok(ScoringEngine::new(tables))
}

/// The embedded seed tables
pub fn default_tables() -> Result<ScoringTables> {
    serde_yaml::from_str(SEED_TABLES).context("failed to parse embedded scoring tables")
}
