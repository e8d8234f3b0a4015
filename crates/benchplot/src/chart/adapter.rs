use crate::chart::{AxisLayout, Annotation, BarSeries, BoxSeries, Chart, ChartLayout, ErrorBars, HistogramSeries, Series};
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::scenario::{Scenario, Statistics};

pub const IPS_COMPARISON_CONTAINER: &str = "ips-comparison";
pub const BOX_PLOT_CONTAINER: &str = "box-plot";
pub const RAW_RUN_TIMES_CONTAINER: &str = "raw-run-times";
pub const RUN_TIME_HISTOGRAM_CONTAINER: &str = "sorted-run-times";
pub const RAW_MEMORY_CONTAINER: &str = "raw-memory-usages";
pub const MEMORY_HISTOGRAM_CONTAINER: &str = "sorted-memory-usages";

/// Lower bound of raw sample charts, relative to the sample minimum.
const RAW_RANGE_FLOOR: f64 = 0.9;

/// Bar series of iterations per second, one bar per scenario in the given order.
///
/// Error bars use the standard deviation of ips. Duplicate names are kept.
pub fn comparison_series<'a, I>(scenarios: I) -> Result<Series, ChartError>
where
    I: IntoIterator<Item = &'a Scenario>,
{
    let mut names = Vec::new();
    let mut ips = Vec::new();
    let mut errors = Vec::new();
    for scenario in scenarios {
        names.push(scenario.name.clone());
        ips.push(scenario.ips()?);
        errors.push(scenario.std_dev_ips());
    }

    if names.is_empty() {
        return Err(ChartError::EmptyScenarios);
    }

    Ok(Series::Bar(BarSeries {
        name: None,
        x: Some(names),
        y: ips,
        error_y: Some(ErrorBars::data(errors)),
    }))
}

/// One box series of raw run times per scenario.
pub fn box_series<'a, I>(scenarios: I) -> Vec<Series>
where
    I: IntoIterator<Item = &'a Scenario>,
{
    scenarios
        .into_iter()
        .map(|scenario| {
            Series::Box(BoxSeries {
                name: scenario.name.clone(),
                y: scenario.run_times.clone(),
            })
        })
        .collect()
}

/// Bar series of samples in measured order, to expose ordering artifacts.
pub fn raw_samples_series(samples: &[f64]) -> Series {
    Series::Bar(BarSeries {
        name: None,
        x: None,
        y: samples.to_vec(),
        error_y: None,
    })
}

pub fn histogram_series(samples: &[f64]) -> Series {
    Series::Histogram(HistogramSeries { x: samples.to_vec() })
}

/// Layout for raw sample charts.
///
/// The y axis starts at 90% of the minimum so that a few outliers do not
/// flatten normal variation; an annotation at that floor keeps the value visible.
pub fn raw_chart_layout(title: &str, axis_title: &str, statistics: &Statistics) -> ChartLayout {
    let floor = RAW_RANGE_FLOOR * statistics.minimum;
    ChartLayout::new(title)
        .y_axis(AxisLayout::new(axis_title).range(floor, statistics.maximum))
        .annotation(Annotation {
            x: 0.0,
            y: floor,
            text: format!("{}", floor.floor() as i64),
            showarrow: true,
        })
}

pub fn ips_comparison_chart<'a, I>(scenarios: I, config: &ChartConfig) -> Result<Chart, ChartError>
where
    I: IntoIterator<Item = &'a Scenario>,
{
    let series = comparison_series(scenarios)?;
    Ok(Chart {
        container: IPS_COMPARISON_CONTAINER.to_string(),
        series: vec![series],
        layout: ChartLayout::new(&config.ips_comparison_title)
            .y_axis(AxisLayout::new(&config.ips_axis_title)),
    })
}

pub fn comparison_box_plot<'a, I>(scenarios: I, config: &ChartConfig) -> Chart
where
    I: IntoIterator<Item = &'a Scenario>,
{
    Chart {
        container: BOX_PLOT_CONTAINER.to_string(),
        series: box_series(scenarios),
        layout: ChartLayout::new(&config.box_plot_title)
            .y_axis(AxisLayout::new(&config.run_time_axis_title)),
    }
}

pub fn raw_run_times_chart(scenario: &Scenario, config: &ChartConfig) -> Chart {
    let title = format!("{} Raw Run Times", scenario.display_name());
    let layout = raw_chart_layout(&title, &config.run_time_axis_title, &scenario.run_time_statistics)
        .x_axis(AxisLayout::new(&config.sample_axis_title));
    Chart {
        container: scenario_container(RAW_RUN_TIMES_CONTAINER, scenario),
        series: vec![raw_samples_series(&scenario.run_times)],
        layout,
    }
}

pub fn run_time_histogram(scenario: &Scenario, config: &ChartConfig) -> Chart {
    let title = format!("{} Run Times Histogram", scenario.display_name());
    Chart {
        container: scenario_container(RUN_TIME_HISTOGRAM_CONTAINER, scenario),
        series: vec![histogram_series(&scenario.run_times)],
        layout: ChartLayout::new(&title)
            .x_axis(AxisLayout::new(&config.run_time_bucket_axis_title))
            .y_axis(AxisLayout::new(&config.occurrences_axis_title)),
    }
}

pub fn raw_memory_usages_chart(scenario: &Scenario, config: &ChartConfig) -> Result<Chart, ChartError> {
    let samples = scenario.memory_usages()?;
    let statistics = scenario.memory_usage_statistics()?;
    let title = format!("{} Raw Memory Usages", scenario.display_name());
    let layout = raw_chart_layout(&title, &config.memory_axis_title, statistics)
        .x_axis(AxisLayout::new(&config.sample_axis_title));
    Ok(Chart {
        container: scenario_container(RAW_MEMORY_CONTAINER, scenario),
        series: vec![raw_samples_series(samples)],
        layout,
    })
}

pub fn memory_histogram(scenario: &Scenario, config: &ChartConfig) -> Result<Chart, ChartError> {
    let samples = scenario.memory_usages()?;
    let title = format!("{} Memory Usages Histogram", scenario.display_name());
    Ok(Chart {
        container: scenario_container(MEMORY_HISTOGRAM_CONTAINER, scenario),
        series: vec![histogram_series(samples)],
        layout: ChartLayout::new(&title)
            .x_axis(AxisLayout::new(&config.memory_bucket_axis_title))
            .y_axis(AxisLayout::new(&config.occurrences_axis_title)),
    })
}

/// Container id for a per-scenario chart, e.g. `raw-run-times-my-job`.
pub fn scenario_container(prefix: &str, scenario: &Scenario) -> String {
    format!("{}-{}", prefix, slug(&scenario.display_name()))
}

/// Lowercase alphanumerics, everything else collapsed into single dashes.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}
