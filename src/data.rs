//! Typed view of a hyperfine `--export-json` file.

use std::fmt;
use std::fs::read_to_string;

use camino::Utf8Path;
use indexmap::IndexMap;

use crate::error::{ConvertError, RunError};

#[derive(Debug, Deserialize)]
pub struct HyperfineExport {
    pub results: Vec<BenchmarkRun>,
}

/// One benchmarked command line, as recorded by hyperfine.
///
/// hyperfine writes more than this (`stddev`, `median`, `times`, ...);
/// everything not listed here is ignored.
#[derive(Debug, Deserialize)]
pub struct BenchmarkRun {
    pub command: String,
    #[serde(default)]
    pub parameters: IndexMap<String, Scalar>,
    pub mean: Scalar,
    pub min: Scalar,
    pub max: Scalar,
}

impl BenchmarkRun {
    pub fn parameter(&self, name: &str) -> Result<&Scalar, RunError> {
        self.parameters
            .get(name)
            .ok_or_else(|| RunError::MissingParameter {
                name: name.to_string(),
            })
    }
}

/// A JSON value that is either a number or a string holding one.
///
/// hyperfine stores parameter values as strings, timings as numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(serde_json::Number),
    String(String),
}

impl Scalar {
    pub fn as_integer(&self, field: &str) -> Result<i64, RunError> {
        let value = match self {
            Scalar::Number(n) => n.as_i64(),
            Scalar::String(s) => s.trim().parse().ok(),
        };
        value.ok_or_else(|| RunError::NotAnInteger {
            field: field.to_string(),
            value: self.to_string(),
        })
    }

    pub fn as_float(&self, field: &str) -> Result<f64, RunError> {
        let value = match self {
            Scalar::Number(n) => n.as_f64(),
            Scalar::String(s) => s.trim().parse().ok(),
        };
        value.ok_or_else(|| RunError::NotANumber {
            field: field.to_string(),
            value: self.to_string(),
        })
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scalar::Number(n) => write!(f, "{n}"),
            Scalar::String(s) => write!(f, "{s}"),
        }
    }
}

pub fn parse(filename: &Utf8Path, data: &str) -> Result<HyperfineExport, ConvertError> {
    serde_json::from_str(data).map_err(|source| ConvertError::Json {
        path: filename.to_owned(),
        source,
    })
}

pub fn load(filename: &Utf8Path) -> Result<HyperfineExport, ConvertError> {
    let data = read_to_string(filename).map_err(|source| ConvertError::ReadInput {
        path: filename.to_owned(),
        source,
    })?;
    parse(filename, &data)
}
