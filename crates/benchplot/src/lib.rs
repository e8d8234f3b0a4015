//! benchplot: interactive charts for benchmark results.
//!
//! This crate takes the statistics and raw samples produced by a benchmarking
//! engine and shapes them into chart series for the Plotly backend: an
//! iterations-per-second comparison, run time box plots, raw sample bar charts
//! and histograms for run time and memory. The [`report`] module assembles the
//! charts into a single HTML page.
pub mod chart;
pub mod config;
pub mod error;
pub mod panel;
pub mod render;
pub mod report;
pub mod scenario;
