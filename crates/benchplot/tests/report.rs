//! Integration tests for scenario loading, chart config and report assembly.

use std::io::Write;

use benchplot::config::{load_chart_config, ChartConfig};
use benchplot::error::ChartError;
use benchplot::report::build_report;
use benchplot::scenario::{load_scenario_set, order_scenarios, ScenarioSet};

const SCENARIOS_JSON: &str = r#"{
    "scenarios": [
        {
            "name": "flat_map",
            "input_name": "Small",
            "run_times": [12.0, 10.0, 11.0],
            "memory_usages": [640.0, 640.0, 648.0],
            "run_time_statistics": {
                "ips": 1000.0, "std_dev_ips": 50.0, "average": 11.0,
                "std_dev_ratio": 0.08, "median": 11.0,
                "minimum": 10.0, "maximum": 12.0, "sample_size": 3
            },
            "memory_usage_statistics": { "minimum": 640.0, "maximum": 648.0 }
        },
        {
            "name": "map.flatten",
            "input_name": "Small",
            "run_times": [22.0, 20.0, 21.0],
            "run_time_statistics": {
                "ips": 500.0, "std_dev_ips": 10.0,
                "minimum": 20.0, "maximum": 22.0
            }
        }
    ],
    "sort_order": ["map.flatten", "flat_map"]
}"#;

fn scenario_set() -> ScenarioSet {
    serde_json::from_str(SCENARIOS_JSON).expect("valid scenario json")
}

// ---------------------------------------------------------------------------
// Scenario data
// ---------------------------------------------------------------------------

#[test]
fn scenario_set_parses_engine_fields() {
    let set = scenario_set();
    assert_eq!(set.scenarios.len(), 2);
    let first = &set.scenarios[0];
    assert_eq!(first.run_time_statistics.ips, Some(1000.0));
    assert_eq!(first.memory_usages.as_deref(), Some(&[640.0, 640.0, 648.0][..]));
    assert!(first.has_memory_data());
    assert!(!set.scenarios[1].has_memory_data());
}

#[test]
fn scenario_missing_statistics_fails_to_parse() {
    let json = r#"{ "scenarios": [ { "name": "a", "run_times": [] } ] }"#;
    let err = serde_json::from_str::<ScenarioSet>(json).unwrap_err();
    assert!(err.to_string().contains("run_time_statistics"));
}

#[test]
fn ordered_follows_sort_order() {
    let set = scenario_set();
    let names: Vec<&str> = set.ordered().unwrap().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["map.flatten", "flat_map"]);
}

#[test]
fn ordered_without_sort_order_keeps_input_order() {
    let mut set = scenario_set();
    set.sort_order = None;
    let names: Vec<&str> = set.ordered().unwrap().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["flat_map", "map.flatten"]);
}

#[test]
fn sort_order_unknown_name_errors() {
    let set = scenario_set();
    let order = vec!["nope".to_string()];
    assert_eq!(
        order_scenarios(&set.scenarios, Some(&order)).unwrap_err(),
        ChartError::UnknownScenario("nope".to_string())
    );
}

#[test]
fn load_scenario_set_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SCENARIOS_JSON.as_bytes()).unwrap();
    let set = load_scenario_set(file.path()).unwrap();
    assert_eq!(set, scenario_set());
}

#[test]
fn load_scenario_set_missing_file_errors() {
    let err = load_scenario_set("/nonexistent/scenarios.json").unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to read scenarios"));
}

// ---------------------------------------------------------------------------
// ChartConfig
// ---------------------------------------------------------------------------

#[test]
fn chart_config_defaults() {
    let cfg = ChartConfig::default();
    assert_eq!(cfg.run_time_axis_title, "Run Time in microseconds");
    assert_eq!(cfg.ips_axis_title, "Iterations per Second");
    assert_eq!(cfg.occurrences_axis_title, "Occurences in sample");
}

#[test]
fn chart_config_partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "run_time_axis_title": "Run Time in nanoseconds" }}"#).unwrap();
    let cfg = load_chart_config(file.path()).unwrap();
    assert_eq!(cfg.run_time_axis_title, "Run Time in nanoseconds");
    assert_eq!(cfg.sample_axis_title, ChartConfig::default().sample_axis_title);
}

#[test]
fn chart_config_invalid_json_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();
    assert!(load_chart_config(file.path()).is_err());
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[test]
fn report_has_comparison_and_scenario_sections() {
    let report = build_report(&scenario_set(), &ChartConfig::default(), "My Benchmarks").unwrap();
    let titles: Vec<&str> = report.sections().iter().map(|s| s.title()).collect();
    assert_eq!(
        titles,
        vec!["Comparison", "map.flatten with input Small", "flat_map with input Small"]
    );
    // table + ips chart + box plot
    assert_eq!(report.sections()[0].len(), 3);
    // info panel + raw run times + histogram
    assert_eq!(report.sections()[1].len(), 3);
    // plus raw memory + memory histogram
    assert_eq!(report.sections()[2].len(), 5);
}

#[test]
fn report_html_contains_containers_and_toggle() {
    let report = build_report(&scenario_set(), &ChartConfig::default(), "My Benchmarks").unwrap();
    let html = report.to_html();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>My Benchmarks</title>"));
    assert!(html.contains(&format!("benchplot {}", env!("CARGO_PKG_VERSION"))));
    assert!(!html.contains("<img"));
    assert!(html.contains("ips-comparison"));
    assert!(html.contains("box-plot"));
    assert!(html.contains("raw-run-times-flat-map-with-input-small"));
    assert!(html.contains("sorted-memory-usages-flat-map-with-input-small"));
    assert!(!html.contains("raw-memory-usages-map-flatten"));
    assert!(html.contains("function toggleInfoPanel"));
    assert!(html.contains("id=\"info-map-flatten-with-input-small\""));
}

#[test]
fn single_scenario_report_skips_comparison() {
    let mut set = scenario_set();
    set.scenarios.truncate(1);
    set.sort_order = None;
    let report = build_report(&set, &ChartConfig::default(), "Single").unwrap();
    assert_eq!(report.sections().len(), 1);
    assert!(!report.to_html().contains("ips-comparison"));
}

#[test]
fn duplicate_names_get_distinct_containers() {
    let mut set = scenario_set();
    set.sort_order = None;
    let duplicate = set.scenarios[0].clone();
    set.scenarios.push(duplicate);
    let html = build_report(&set, &ChartConfig::default(), "Dupes").unwrap().to_html();
    assert!(html.contains("raw-run-times-flat-map-with-input-small"));
    assert!(html.contains("raw-run-times-flat-map-with-input-small-2"));
}

fn named_scenarios(names: &[&str]) -> ScenarioSet {
    let scenarios: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "name": name,
                "run_times": [10.0, 12.0],
                "run_time_statistics": { "ips": 1000.0, "minimum": 10.0, "maximum": 12.0 }
            })
        })
        .collect();
    serde_json::from_value(serde_json::json!({ "scenarios": scenarios })).unwrap()
}

#[test]
fn suffixed_ids_skip_names_already_in_use() {
    let set = named_scenarios(&["x", "x", "x-1"]);
    let html = build_report(&set, &ChartConfig::default(), "Ids").unwrap().to_html();

    assert_eq!(html.matches("id=\"info-x\"").count(), 1);
    assert_eq!(html.matches("id=\"info-x-1\"").count(), 1);
    assert_eq!(html.matches("id=\"info-x-1-2\"").count(), 1);

    // Each container id appears the same number of times (div + draw call).
    let per_chart = html.matches("\"raw-run-times-x\"").count();
    assert!(per_chart > 0);
    assert_eq!(html.matches("\"raw-run-times-x-1\"").count(), per_chart);
    assert_eq!(html.matches("\"raw-run-times-x-1-2\"").count(), per_chart);
}

// ---------------------------------------------------------------------------
// Memory data
// ---------------------------------------------------------------------------

#[test]
fn null_memory_statistics_parse_as_absent() {
    let json = r#"{
        "scenarios": [
            {
                "name": "no_memory",
                "run_times": [10.0, 12.0],
                "memory_usages": [],
                "run_time_statistics": { "ips": 1000.0, "minimum": 10.0, "maximum": 12.0 },
                "memory_usage_statistics": { "average": null, "minimum": null, "maximum": null }
            }
        ]
    }"#;
    let set: ScenarioSet = serde_json::from_str(json).unwrap();
    let scenario = &set.scenarios[0];
    assert!(scenario.memory_usage_statistics.is_none());
    assert!(!scenario.has_memory_samples());
    assert!(!scenario.has_memory_data());

    let html = build_report(&set, &ChartConfig::default(), "No memory").unwrap().to_html();
    assert!(html.contains("raw-run-times-no-memory"));
    assert!(!html.contains("raw-memory-usages"));
    assert!(!html.contains("sorted-memory-usages"));
}

#[test]
fn null_memory_statistics_set_parses_from_file() {
    let json = serde_json::json!({
        "scenarios": [{
            "name": "a",
            "run_times": [1.0],
            "run_time_statistics": { "ips": 1.0, "minimum": 1.0, "maximum": 1.0 },
            "memory_usage_statistics": { "minimum": null, "maximum": 4.0 }
        }]
    });
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.to_string().as_bytes()).unwrap();
    let set = load_scenario_set(file.path()).unwrap();
    assert!(set.scenarios[0].memory_usage_statistics.is_none());
}

#[test]
fn memory_samples_without_statistics_draw_histogram_only() {
    let mut set = scenario_set();
    set.sort_order = None;
    set.scenarios.truncate(1);
    set.scenarios[0].memory_usage_statistics = None;

    let report = build_report(&set, &ChartConfig::default(), "Histogram only").unwrap();
    // info panel + raw run times + run time histogram + memory histogram
    assert_eq!(report.sections()[0].len(), 4);
    let html = report.to_html();
    assert!(html.contains("sorted-memory-usages-flat-map-with-input-small"));
    assert!(!html.contains("raw-memory-usages-flat-map-with-input-small"));
}

#[test]
fn empty_report_errors() {
    let set = ScenarioSet::default();
    assert_eq!(
        build_report(&set, &ChartConfig::default(), "Empty").unwrap_err(),
        ChartError::EmptyScenarios
    );
}

#[test]
fn report_saves_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");
    let report = build_report(&scenario_set(), &ChartConfig::default(), "Saved").unwrap();
    report.save_to_file(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("Saved"));
}
