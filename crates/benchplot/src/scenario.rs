//! Scenario records as produced by the benchmarking engine.
//!
//! Field names match the JSON the engine embeds into the report, so the
//! structs deserialize directly with serde. Scenarios are read-only snapshots;
//! nothing in this crate mutates them.
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ChartError;

/// Input name the engine uses for jobs that were run without an input.
pub const NO_INPUT: &str = "__no_input";

/// Aggregate statistics over one sample sequence.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    /// Iterations per second. Only present for run time statistics.
    #[serde(default)]
    pub ips: Option<f64>,
    #[serde(default)]
    pub std_dev_ips: Option<f64>,
    #[serde(default)]
    pub average: Option<f64>,
    #[serde(default)]
    pub std_dev: Option<f64>,
    #[serde(default)]
    pub std_dev_ratio: Option<f64>,
    #[serde(default)]
    pub median: Option<f64>,
    pub minimum: f64,
    pub maximum: f64,
    #[serde(default)]
    pub sample_size: Option<usize>,
}

/// One benchmarked job with its samples and derived statistics.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub job_name: Option<String>,
    #[serde(default)]
    pub input_name: Option<String>,
    pub run_times: Vec<f64>,
    #[serde(default)]
    pub memory_usages: Option<Vec<f64>>,
    pub run_time_statistics: Statistics,
    #[serde(default, deserialize_with = "measured_statistics")]
    pub memory_usage_statistics: Option<Statistics>,
}

/// Runs without memory measurement carry a statistics block whose bounds are null.
fn measured_statistics<'de, D>(deserializer: D) -> Result<Option<Statistics>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    let unmeasured = |v: &serde_json::Value, key: &str| v.get(key).map_or(true, serde_json::Value::is_null);
    match value {
        Some(v) if !v.is_null() && !unmeasured(&v, "minimum") && !unmeasured(&v, "maximum") => {
            Statistics::deserialize(v).map(Some).map_err(D::Error::custom)
        }
        _ => Ok(None),
    }
}

impl Scenario {
    /// Title suffix naming the input this scenario ran with, empty if none.
    pub fn input_suffix(&self) -> String {
        match self.input_name.as_deref() {
            Some(input) if input != NO_INPUT && !input.is_empty() => format!(" with input {}", input),
            _ => String::new(),
        }
    }

    /// Scenario name followed by the input suffix, used as chart title prefix.
    pub fn display_name(&self) -> String {
        format!("{}{}", self.name, self.input_suffix())
    }

    pub fn ips(&self) -> Result<f64, ChartError> {
        self.run_time_statistics.ips.ok_or_else(|| self.missing("run_time_statistics.ips"))
    }

    /// Standard deviation of ips; a missing value is drawn as a zero error bar.
    pub fn std_dev_ips(&self) -> f64 {
        self.run_time_statistics.std_dev_ips.unwrap_or(0.0)
    }

    pub fn memory_usages(&self) -> Result<&[f64], ChartError> {
        self.memory_usages
            .as_deref()
            .ok_or_else(|| self.missing("memory_usages"))
    }

    pub fn memory_usage_statistics(&self) -> Result<&Statistics, ChartError> {
        self.memory_usage_statistics
            .as_ref()
            .ok_or_else(|| self.missing("memory_usage_statistics"))
    }

    /// Whether any memory samples were recorded.
    pub fn has_memory_samples(&self) -> bool {
        self.memory_usages.as_ref().is_some_and(|samples| !samples.is_empty())
    }

    /// Whether the raw memory chart, which needs samples and bounds, can be drawn.
    pub fn has_memory_data(&self) -> bool {
        self.has_memory_samples() && self.memory_usage_statistics.is_some()
    }

    fn missing(&self, field: &'static str) -> ChartError {
        ChartError::MissingField {
            scenario: self.name.clone(),
            field,
        }
    }
}

/// The document handed over by the report generation step.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ScenarioSet {
    pub scenarios: Vec<Scenario>,
    /// Explicit ordering by scenario name, e.g. fastest first.
    #[serde(default)]
    pub sort_order: Option<Vec<String>>,
}

impl ScenarioSet {
    /// Scenarios in the order the charts should list them.
    pub fn ordered(&self) -> Result<Vec<&Scenario>, ChartError> {
        order_scenarios(&self.scenarios, self.sort_order.as_deref())
    }
}

/// Return scenarios in input order, or in exactly the order of `sort_order`.
///
/// Duplicate names are not collapsed. With a sort order, each entry picks the
/// first scenario of that name not already taken.
pub fn order_scenarios<'a>(
    scenarios: &'a [Scenario],
    sort_order: Option<&[String]>,
) -> Result<Vec<&'a Scenario>, ChartError> {
    let Some(order) = sort_order else {
        return Ok(scenarios.iter().collect());
    };

    let mut taken = vec![false; scenarios.len()];
    let mut ordered = Vec::with_capacity(order.len());
    for name in order {
        let idx = (0..scenarios.len())
            .find(|&i| !taken[i] && scenarios[i].name == *name)
            .ok_or_else(|| ChartError::UnknownScenario(name.clone()))?;
        taken[idx] = true;
        ordered.push(&scenarios[idx]);
    }
    log::trace!("Ordered {} scenarios by explicit sort order", ordered.len());
    Ok(ordered)
}

/// Read a scenario set from a JSON file.
pub fn load_scenario_set<P: AsRef<Path>>(path: P) -> Result<ScenarioSet> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read scenarios: {}", path.as_ref().display()))?;
    let set: ScenarioSet = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse scenarios: {}", path.as_ref().display()))?;
    log::debug!("Loaded {} scenarios from {}", set.scenarios.len(), path.as_ref().display());
    Ok(set)
}
