//! Convert hyperfine `--export-json` results into gnuplot data files.
//!
//! Every benchmarked command gets its own `<command>.dat` file, holding one
//! tab-separated row per hyperfine parameter value, in input order.

#[macro_use]
extern crate derive_builder;

#[macro_use]
extern crate serde_derive;

pub mod convert;
pub mod dat;
pub mod data;
pub mod error;
pub mod float;
pub mod model;

pub use convert::{convert, Converter, ConverterBuilder, DatFile, DEFAULT_PARAMETER};
pub use error::{ConvertError, ErrorKind, RunError};
