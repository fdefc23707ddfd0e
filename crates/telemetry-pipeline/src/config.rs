// Copyright 2025-Present the telemetry-pipeline authors
// SPDX-License-Identifier: Apache-2.0

use std::env;

use crate::aggregator::DEFAULT_MAX_QUEUE_ITEMS;
use crate::error::PipelineError;
use crate::processor::{ProcessorChain, TelemetryProcessor};
use crate::stages::{ClientErrorInitializer, SuccessfulDependencyFilter};

/// Configuration for the telemetry post-processing pipeline.
///
/// Stage enablement is fixed at startup; there is no runtime reconfiguration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Whether successful outbound calls are suppressed before export.
    pub filter_successful_dependencies: bool,
    /// Whether 4xx inbound requests are reclassified as successful.
    pub override_client_errors: bool,
    /// Seconds between flushes of surviving events to the exporter.
    pub flush_interval_secs: u64,
    /// Maximum number of events buffered before oldest-first eviction.
    pub max_queue_items: usize,
    /// Log level (e.g., trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            filter_successful_dependencies: true,
            override_client_errors: true,
            flush_interval_secs: 3,
            max_queue_items: DEFAULT_MAX_QUEUE_ITEMS,
            log_level: "info".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, PipelineError> {
        let filter_successful_dependencies = env::var("TELEMETRY_FILTER_SUCCESSFUL_DEPENDENCIES")
            .map(|val| val.to_lowercase() != "false")
            .unwrap_or(true);
        let override_client_errors = env::var("TELEMETRY_OVERRIDE_CLIENT_ERRORS")
            .map(|val| val.to_lowercase() != "false")
            .unwrap_or(true);
        let flush_interval_secs = env::var("TELEMETRY_FLUSH_INTERVAL")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(3);
        let max_queue_items = env::var("TELEMETRY_MAX_QUEUE_ITEMS")
            .ok()
            .and_then(|val| val.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_QUEUE_ITEMS);
        let log_level = env::var("TELEMETRY_LOG_LEVEL")
            .map(|val| val.to_lowercase())
            .unwrap_or_else(|_| "info".to_string());

        let config = Self {
            filter_successful_dependencies,
            override_client_errors,
            flush_interval_secs,
            max_queue_items,
            log_level,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.flush_interval_secs == 0 {
            return Err(PipelineError::InvalidConfig(
                "Flush interval must be greater than 0".to_string(),
            ));
        }

        if self.max_queue_items == 0 {
            return Err(PipelineError::InvalidConfig(
                "Max queue items must be greater than 0".to_string(),
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.as_str()) {
            return Err(PipelineError::InvalidConfig(format!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.log_level
            )));
        }

        Ok(())
    }

    /// Assembles the enabled stages in their fixed order: dependency
    /// suppression first, then client-error reclassification.
    pub fn build_chain(&self) -> ProcessorChain {
        let mut stages: Vec<Box<dyn TelemetryProcessor>> = Vec::new();
        if self.filter_successful_dependencies {
            stages.push(Box::new(SuccessfulDependencyFilter));
        }
        if self.override_client_errors {
            stages.push(Box::new(ClientErrorInitializer));
        }
        ProcessorChain::new(stages)
    }
}
