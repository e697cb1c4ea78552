use rand::Rng;
use std::path::PathBuf;

/// Common error type for the sweep printer and the area generator.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    #[error("i/o failure on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("csv failure in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("malformed record in {path}: data row {row} has {fields} fields, expected at least 6")]
    MalformedRecord {
        path: PathBuf,
        row: usize,
        fields: usize,
    },
    #[error("template {path} has {lines} lines, at least {required} are needed")]
    TemplateTooShort {
        path: PathBuf,
        lines: usize,
        required: usize,
    },
    #[error("probability {name} must lie in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },
    #[error("report output failed: {0}")]
    Output(#[from] std::io::Error),
}

impl ToolError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type ToolResult<T> = Result<T, ToolError>;

/// Source of independent yes/no draws.
///
/// Every `rand::Rng` is one; tests substitute scripted sequences.
pub trait Bernoulli {
    /// Returns `true` with probability `p`.
    fn draw(&mut self, p: f64) -> bool;
}

impl<R: Rng> Bernoulli for R {
    fn draw(&mut self, p: f64) -> bool {
        // uniform [0, 1) draw below p
        self.gen::<f64>() < p
    }
}

pub fn check_probability(name: &'static str, value: f64) -> ToolResult<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ToolError::InvalidProbability { name, value })
    }
}
