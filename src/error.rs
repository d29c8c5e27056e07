//! Error types returned by the simulator.

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimulationError>;

#[derive(Debug, Error)]
pub enum SimulationError {
    /// Non-positive, non-finite or malformed mass, time step or epsilon
    #[error("Invalid value for {parameter}: {value}")]
    InvalidParameter { parameter: &'static str, value: String },

    /// Two bodies share the same position, the gravitational force between them is undefined
    #[error("Bodies #{first} and #{second} are placed at the same position")]
    DegenerateConfiguration { first: usize, second: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Binary snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Time formatting error: {0}")]
    TimeFormat(#[from] time::error::Format),

    #[error("File does not exist: {0}")]
    MissingFile(String),
}

impl SimulationError {
    pub fn invalid(parameter: &'static str, value: impl ToString) -> Self {
        Self::InvalidParameter { parameter, value: value.to_string() }
    }
}

/// Accepts strictly positive finite values.
pub fn ensure_positive(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0. {
        Ok(value)
    } else {
        Err(SimulationError::invalid(parameter, value))
    }
}

/// Parses user supplied text (e.g. a time step typed in an entry box) as a strictly positive number.
pub fn parse_positive(parameter: &'static str, input: &str) -> Result<f64> {
    let value = input.trim().parse::<f64>().map_err(|_| SimulationError::invalid(parameter, input))?;
    ensure_positive(parameter, value)
}

pub fn ensure_finite(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SimulationError::invalid(parameter, value))
    }
}
