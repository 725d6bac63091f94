//! Shortest round-trip float formatting in the style of Python's `repr`.
//!
//! Always keeps a decimal point in positional form (`1.0`, `100000.0`) and
//! switches to exponent notation with a sign and at least two exponent digits
//! when the decimal exponent is below -4 or above 15 (`9.5e-05`, `1e+16`).

use std::fmt;

/// Display wrapper for an `f64` data file value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Float(pub f64);

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_sign_negative() {
            f.write_str("-")?;
        }
        if value.is_infinite() {
            return f.write_str("inf");
        }

        // `{:e}` yields the shortest round-trip digits, e.g. "9.5e-5" or "1e16".
        let scientific = format!("{:e}", value.abs());
        let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
        let digits = mantissa.replace('.', "");

        // position of the decimal point relative to the start of `digits`
        let point = exponent + 1;

        if point <= -4 || point > 16 {
            let (first, rest) = digits.split_at(1);
            let sign = if exponent < 0 { '-' } else { '+' };
            if rest.is_empty() {
                write!(f, "{first}e{sign}{:02}", exponent.unsigned_abs())
            } else {
                write!(f, "{first}.{rest}e{sign}{:02}", exponent.unsigned_abs())
            }
        } else if point <= 0 {
            write!(f, "0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
        } else {
            let point = point as usize;
            if point >= digits.len() {
                write!(f, "{digits}{}.0", "0".repeat(point - digits.len()))
            } else {
                let (int, frac) = digits.split_at(point);
                write!(f, "{int}.{frac}")
            }
        }
    }
}
