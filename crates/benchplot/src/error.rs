use std::error::Error;
use std::fmt;

/// Errors raised while shaping scenario data into charts.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A field the chart needs is absent from the scenario data.
    MissingField { scenario: String, field: &'static str },
    /// A sort order entry names a scenario that is not in the report.
    UnknownScenario(String),
    /// A comparison chart was requested for an empty scenario list.
    EmptyScenarios,
    /// No chart was rendered into the named container.
    UnknownContainer(String),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChartError::MissingField { scenario, field } => {
                write!(f, "Scenario '{}' is missing field `{}`", scenario, field)
            }
            ChartError::UnknownScenario(name) => {
                write!(f, "Sort order names unknown scenario '{}'", name)
            }
            ChartError::EmptyScenarios => write!(f, "At least one scenario is required"),
            ChartError::UnknownContainer(id) => write!(f, "No chart rendered into container '{}'", id),
        }
    }
}

impl Error for ChartError {}
