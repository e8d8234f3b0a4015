//! Plotting backend seam.
//!
//! Charts are handed to a [`PlotBackend`] by container id. The Plotly backend
//! converts them into `plotly` traces and keeps one plot per container.
use plotly::common::{ErrorData, ErrorType};
use plotly::layout::{Annotation, Axis, Layout};
use plotly::{Bar, BoxPlot, Configuration, Histogram, Plot, Trace};
use serde::Serialize;

use crate::chart::{AxisLayout, BarSeries, Chart, ChartLayout, Series};
use crate::error::ChartError;

pub trait PlotBackend {
    /// Draw `series` with `layout` into `container`, replacing whatever was there.
    fn render(&mut self, container: &str, series: &[Series], layout: &ChartLayout);
}

impl Chart {
    pub fn render(&self, backend: &mut dyn PlotBackend) {
        backend.render(&self.container, &self.series, &self.layout);
    }
}

/// Fixed backend options: no vendor logo, no cloud upload button.
pub fn backend_configuration() -> Configuration {
    Configuration::new().display_logo(false).show_send_to_cloud(false)
}

#[derive(Default)]
pub struct PlotlyBackend {
    plots: Vec<(String, Plot)>,
}

impl PlotlyBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plot(&self, container: &str) -> Option<&Plot> {
        self.plots.iter().find(|(id, _)| id == container).map(|(_, plot)| plot)
    }

    /// Container ids in the order they were first rendered.
    pub fn containers(&self) -> Vec<&str> {
        self.plots.iter().map(|(id, _)| id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.plots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    /// HTML fragment (div + script) drawing the container's plot.
    pub fn to_inline_html(&self, container: &str) -> Result<String, ChartError> {
        self.plot(container)
            .map(|plot| plot.to_inline_html(Some(container)))
            .ok_or_else(|| ChartError::UnknownContainer(container.to_string()))
    }
}

impl PlotBackend for PlotlyBackend {
    fn render(&mut self, container: &str, series: &[Series], layout: &ChartLayout) {
        let mut plot = Plot::new();
        for s in series {
            plot.add_trace(to_trace(s));
        }
        plot.set_layout(to_layout(layout));
        plot.set_configuration(backend_configuration());

        match self.plots.iter_mut().find(|(id, _)| id == container) {
            Some((_, existing)) => {
                log::debug!("Replacing plot in container '{}'", container);
                *existing = plot;
            }
            None => {
                log::debug!("Rendering {} series into container '{}'", series.len(), container);
                self.plots.push((container.to_string(), plot));
            }
        }
    }
}

fn to_trace(series: &Series) -> Box<dyn Trace> {
    match series {
        Series::Bar(bar) => match &bar.x {
            Some(x) => bar_trace(Bar::new(x.clone(), bar.y.clone()), bar),
            None => {
                let sample_numbers: Vec<usize> = (0..bar.y.len()).collect();
                bar_trace(Bar::new(sample_numbers, bar.y.clone()), bar)
            }
        },
        Series::Box(b) => BoxPlot::<f64, f64>::new(b.y.clone()).name(b.name.as_str()),
        Series::Histogram(h) => Histogram::new(h.x.clone()),
    }
}

fn bar_trace<X>(trace: Box<Bar<X, f64>>, bar: &BarSeries) -> Box<dyn Trace>
where
    X: Serialize + Clone + 'static,
{
    let trace = match &bar.name {
        Some(name) => trace.name(name.as_str()),
        None => trace,
    };
    match &bar.error_y {
        Some(errors) => trace.error_y(
            ErrorData::new(ErrorType::Data)
                .array(errors.array.clone())
                .visible(errors.visible),
        ),
        None => trace,
    }
}

fn to_layout(layout: &ChartLayout) -> Layout {
    let mut plotly_layout = Layout::new().title(layout.title.as_str());
    if let Some(axis) = &layout.xaxis {
        plotly_layout = plotly_layout.x_axis(to_axis(axis));
    }
    if let Some(axis) = &layout.yaxis {
        plotly_layout = plotly_layout.y_axis(to_axis(axis));
    }
    if !layout.annotations.is_empty() {
        let annotations = layout
            .annotations
            .iter()
            .map(|a| {
                Annotation::new()
                    .x(a.x)
                    .y(a.y)
                    .text(a.text.as_str())
                    .show_arrow(a.showarrow)
            })
            .collect();
        plotly_layout = plotly_layout.annotations(annotations);
    }
    plotly_layout
}

fn to_axis(axis: &AxisLayout) -> Axis {
    let plotly_axis = Axis::new().title(axis.title.as_str());
    match axis.range {
        Some([lower, upper]) => plotly_axis.range(vec![lower, upper]),
        None => plotly_axis,
    }
}
