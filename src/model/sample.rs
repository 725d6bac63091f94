use std::fmt;

use crate::data::BenchmarkRun;
use crate::error::RunError;
use crate::float::Float;

/// One data point: parameter value and timings in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    pub n: i64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl Sample {
    /// Extracts a sample from `run`, using `parameter` as the x value.
    pub fn from_run(run: &BenchmarkRun, parameter: &str) -> Result<Sample, RunError> {
        Ok(Sample {
            n: run.parameter(parameter)?.as_integer(parameter)?,
            mean: run.mean.as_float("mean")?,
            min: run.min.as_float("min")?,
            max: run.max.as_float("max")?,
        })
    }
}

/// Formats as one data file row, without the trailing newline.
impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "\t{}\t{}\t{}\t{}",
            self.n,
            Float(self.mean),
            Float(self.min),
            Float(self.max)
        )
    }
}
