//! HTML report assembly.
//!
//! [`build_report`] renders every chart for a scenario set through the Plotly
//! backend and lays the results out with `maud`: a comparison section when
//! there is more than one scenario, then one section per scenario with its
//! statistics panel and raw sample charts.
use std::collections::HashSet;

use maud::{html, Markup};

use crate::chart::{
    comparison_box_plot, ips_comparison_chart, memory_histogram, raw_memory_usages_chart,
    raw_run_times_chart, run_time_histogram, slug, Chart,
};
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::panel::InfoPanel;
use crate::render::PlotlyBackend;
use crate::scenario::{Scenario, ScenarioSet, Statistics};

pub mod report;

pub use report::{Report, ReportSection};

pub const SOFTWARE_NAME: &str = "benchplot";

pub fn build_report(set: &ScenarioSet, config: &ChartConfig, title: &str) -> Result<Report, ChartError> {
    let scenarios = set.ordered()?;
    if scenarios.is_empty() {
        return Err(ChartError::EmptyScenarios);
    }
    log::info!("Building report '{}' for {} scenarios", title, scenarios.len());

    let mut backend = PlotlyBackend::new();
    let mut report = Report::new(SOFTWARE_NAME, env!("CARGO_PKG_VERSION"), title);

    if scenarios.len() > 1 {
        let mut section = ReportSection::new("Comparison");
        section.add_content(comparison_table(&scenarios));
        let charts = [
            ips_comparison_chart(scenarios.iter().copied(), config)?,
            comparison_box_plot(scenarios.iter().copied(), config),
        ];
        for chart in &charts {
            draw(&mut backend, &mut section, chart)?;
        }
        report.add_section(section);
    } else {
        log::debug!("Single scenario, skipping comparison charts");
    }

    let mut seen = HashSet::new();
    for (idx, scenario) in scenarios.iter().enumerate() {
        let base = slug(&scenario.display_name());
        let key = unique_key(&mut seen, &base, idx);
        let suffix = &key[base.len()..];
        let unique = |chart: Chart| {
            let container = format!("{}{}", chart.container, suffix);
            chart.in_container(container)
        };

        let mut section = ReportSection::new(&scenario.display_name());
        let panel = InfoPanel::new(&format!("info-{}", key));
        section.add_content(info_panel(&panel, scenario));

        let mut charts = vec![
            unique(raw_run_times_chart(scenario, config)),
            unique(run_time_histogram(scenario, config)),
        ];
        if scenario.has_memory_data() {
            charts.push(unique(raw_memory_usages_chart(scenario, config)?));
        } else if scenario.has_memory_samples() {
            log::warn!(
                "No memory usage statistics for '{}', drawing the memory histogram only",
                scenario.name
            );
        } else {
            log::trace!("No memory data for '{}'", scenario.name);
        }
        if scenario.has_memory_samples() {
            charts.push(unique(memory_histogram(scenario, config)?));
        }
        for chart in &charts {
            draw(&mut backend, &mut section, chart)?;
        }
        report.add_section(section);
    }

    log::debug!("Rendered {} plots", backend.len());
    Ok(report)
}

/// Claim an id for a scenario's containers: the slug itself, or the slug with
/// a numeric suffix when that id is already taken, e.g. by a duplicate name.
fn unique_key(seen: &mut HashSet<String>, base: &str, idx: usize) -> String {
    let mut key = base.to_string();
    let mut n = idx;
    while !seen.insert(key.clone()) {
        key = format!("{}-{}", base, n);
        n += 1;
    }
    key
}

fn draw(backend: &mut PlotlyBackend, section: &mut ReportSection, chart: &Chart) -> Result<(), ChartError> {
    chart.render(backend);
    section.add_plot(backend, &chart.container)
}

fn comparison_table(scenarios: &[&Scenario]) -> Markup {
    let fastest = scenarios
        .iter()
        .filter_map(|s| s.run_time_statistics.ips)
        .fold(f64::NAN, f64::max);
    html! {
        table {
            tr { th { "Name" } th { "Iterations per second" } th { "Average" } th { "Deviation" } th { "Comparison" } }
            @for scenario in scenarios {
                @let stats = &scenario.run_time_statistics;
                tr {
                    td { (scenario.display_name()) }
                    td { (format_value(stats.ips)) }
                    td { (format_value(stats.average)) }
                    td { (format_percent(stats.std_dev_ratio)) }
                    td { (format_factor(fastest, stats.ips)) }
                }
            }
        }
    }
}

fn info_panel(panel: &InfoPanel, scenario: &Scenario) -> Markup {
    html! {
        button type="button" onclick={ "toggleInfoPanel('" (panel.id) "')" } { "Show statistics" }
        div id=(panel.id) class="info-panel" style=(panel.style()) {
            h3 { "Run time" }
            (statistics_table(&scenario.run_time_statistics))
            @if let Some(memory) = &scenario.memory_usage_statistics {
                h3 { "Memory usage" }
                (statistics_table(memory))
            }
        }
    }
}

fn statistics_table(stats: &Statistics) -> Markup {
    let rows = [
        ("Iterations per second", format_value(stats.ips)),
        ("Average", format_value(stats.average)),
        ("Deviation", format_percent(stats.std_dev_ratio)),
        ("Median", format_value(stats.median)),
        ("Minimum", format_value(Some(stats.minimum))),
        ("Maximum", format_value(Some(stats.maximum))),
        ("Sample size", stats.sample_size.map_or_else(|| "n/a".to_string(), |n| n.to_string())),
    ];
    html! {
        table {
            @for (label, value) in &rows {
                tr { th { (label) } td { (value) } }
            }
        }
    }
}

fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.2}", v))
}

/// How many times slower than the fastest scenario.
fn format_factor(fastest: f64, ips: Option<f64>) -> String {
    match ips {
        Some(ips) if ips > 0.0 && fastest.is_finite() => format!("{:.2}x", fastest / ips),
        _ => "n/a".to_string(),
    }
}

fn format_percent(ratio: Option<f64>) -> String {
    ratio.map_or_else(|| "n/a".to_string(), |r| format!("±{:.2}%", r * 100.0))
}
