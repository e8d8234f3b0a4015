use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Titles used by the chart builders.
///
/// The values are fixed for a report; builders take the config by reference
/// rather than reading shared globals.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    pub run_time_axis_title: String,
    pub memory_axis_title: String,
    pub ips_axis_title: String,
    pub sample_axis_title: String,
    pub run_time_bucket_axis_title: String,
    pub memory_bucket_axis_title: String,
    pub occurrences_axis_title: String,
    pub ips_comparison_title: String,
    pub box_plot_title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            run_time_axis_title: "Run Time in microseconds".to_string(),
            memory_axis_title: "Memory Usage in bytes".to_string(),
            ips_axis_title: "Iterations per Second".to_string(),
            sample_axis_title: "Sample number".to_string(),
            run_time_bucket_axis_title: "Raw run time bucket".to_string(),
            memory_bucket_axis_title: "Raw memory usage bucket".to_string(),
            occurrences_axis_title: "Occurences in sample".to_string(),
            ips_comparison_title: "Iterations per Second".to_string(),
            box_plot_title: "Run Time Boxplot".to_string(),
        }
    }
}

/// Load a chart configuration from a JSON file. Missing keys fall back to the defaults.
pub fn load_chart_config<P: AsRef<Path>>(path: P) -> Result<ChartConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: ChartConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
