use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::chart::slug;
use crate::error::ChartError;
use crate::panel::TOGGLE_INFO_PANEL_SCRIPT;
use crate::render::PlotlyBackend;

const PLOTLY_JS_CDN: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

const REPORT_STYLE: &str = "
body { font-family: -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif; margin: 0; color: #222; }
header { background: #2c3e50; color: #fff; padding: 16px 32px; display: flex; align-items: center; gap: 16px; }
header .meta { font-size: 0.85em; opacity: 0.8; }
nav { padding: 8px 32px; border-bottom: 1px solid #ddd; }
nav a { margin-right: 16px; color: #2c3e50; }
section { padding: 16px 32px; }
table { border-collapse: collapse; margin: 8px 0; }
th, td { border: 1px solid #ddd; padding: 4px 12px; text-align: right; }
th:first-child, td:first-child { text-align: left; }
.info-panel { background: #f5f5f5; padding: 8px 16px; border-radius: 5px; }
.plot { margin: 16px 0; }
";

/// One titled block of the report holding content and plots.
#[derive(Debug, Clone)]
pub struct ReportSection {
    title: String,
    content: Vec<Markup>,
}

impl ReportSection {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Anchor id used by the navigation bar.
    pub fn id(&self) -> String {
        format!("section-{}", slug(&self.title))
    }

    pub fn add_content(&mut self, content: Markup) {
        self.content.push(content);
    }

    /// Embed the plot previously rendered into `container`.
    pub fn add_plot(&mut self, backend: &PlotlyBackend, container: &str) -> Result<(), ChartError> {
        let fragment = backend.to_inline_html(container)?;
        self.content.push(html! {
            div class="plot" { (PreEscaped(fragment)) }
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    fn render(&self) -> Markup {
        html! {
            section id=(self.id()) {
                h2 { (self.title) }
                @for block in &self.content {
                    (block)
                }
            }
        }
    }
}

/// A standalone HTML page of benchmark charts.
#[derive(Debug, Clone)]
pub struct Report {
    software_name: String,
    version: String,
    title: String,
    generated_at: String,
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(software_name: &str, version: &str, title: &str) -> Self {
        Self {
            software_name: software_name.to_string(),
            version: version.to_string(),
            title: title.to_string(),
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            sections: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn add_section(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    pub fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (self.title) }
                    script src=(PLOTLY_JS_CDN) {}
                    style { (PreEscaped(REPORT_STYLE)) }
                    script { (PreEscaped(TOGGLE_INFO_PANEL_SCRIPT)) }
                }
                body {
                    header {
                        div {
                            h1 { (self.title) }
                            div class="meta" {
                                (self.software_name) " " (self.version) " | generated " (self.generated_at)
                            }
                        }
                    }
                    nav {
                        @for section in &self.sections {
                            a href={ "#" (section.id()) } { (section.title) }
                        }
                    }
                    @for section in &self.sections {
                        (section.render())
                    }
                }
            }
        }
    }

    pub fn to_html(&self) -> String {
        self.render().into_string()
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(&path, self.to_html())
            .with_context(|| format!("Failed to write report: {}", path.as_ref().display()))?;
        log::info!("Report written to {}", path.as_ref().display());
        Ok(())
    }
}
