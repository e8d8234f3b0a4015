//! Backend-facing chart types and the adapter that builds them.
//!
//! The structs serialize to the same JSON shape Plotly uses for traces and
//! layouts, which keeps the adapter independent of the plotting crate while
//! staying easy to inspect in tests.
use serde::{Deserialize, Serialize};

pub mod adapter;

pub use adapter::*;

/// One data trace handed to the plotting backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Series {
    Bar(BarSeries),
    Box(BoxSeries),
    Histogram(HistogramSeries),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BarSeries {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Category labels. Without them the backend numbers bars from 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<String>>,
    pub y: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_y: Option<ErrorBars>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BoxSeries {
    pub name: String,
    pub y: Vec<f64>,
}

/// Raw values only; binning is left to the backend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HistogramSeries {
    pub x: Vec<f64>,
}

/// Per-point error magnitudes drawn on the y axis.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBars {
    #[serde(rename = "type")]
    pub kind: String,
    pub array: Vec<f64>,
    pub visible: bool,
}

impl ErrorBars {
    pub fn data(array: Vec<f64>) -> Self {
        Self {
            kind: "data".to_string(),
            array,
            visible: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AxisLayout {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

impl AxisLayout {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            range: None,
        }
    }

    pub fn range(mut self, lower: f64, upper: f64) -> Self {
        self.range = Some([lower, upper]);
        self
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub showarrow: bool,
}

/// Chart level presentation metadata.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<AxisLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<AxisLayout>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl ChartLayout {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            xaxis: None,
            yaxis: None,
            annotations: Vec::new(),
        }
    }

    pub fn x_axis(mut self, axis: AxisLayout) -> Self {
        self.xaxis = Some(axis);
        self
    }

    pub fn y_axis(mut self, axis: AxisLayout) -> Self {
        self.yaxis = Some(axis);
        self
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A series/layout pair bound to the container it is drawn into.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Chart {
    pub container: String,
    pub series: Vec<Series>,
    pub layout: ChartLayout,
}

impl Chart {
    /// Same chart drawn into a different container.
    pub fn in_container(mut self, container: String) -> Self {
        self.container = container;
        self
    }
}
