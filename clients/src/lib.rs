//! Shared pieces of the `goodstein` command-line driver.
//!
//! The driver is a thin consumer of the [`goodstein`] crate: it parses the
//! starting value, merges configuration, loops the Goodstein step and writes
//! one line per decomposition. All I/O and diagnostics live here; the library
//! itself stays silent.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod report;

use anyhow::{Context, Result};
use goodstein::{decompose, DecomposeError, Decomposition};
use num_bigint::BigUint;

pub use config::{FileConfig, Overrides, Settings};
pub use report::{DecompositionRecord, OutputFormat, StepRecord};

/// Decomposes a command-line integer in base `base`.
///
/// Values that fit an `i64` go through [`decompose`]. Larger values are parsed
/// as arbitrary-precision; negative ones of any size report
/// [`DecomposeError::NegativeValue`], saturated to `i64::MIN` when they do
/// not fit.
///
/// # Errors
///
/// Returns an error if `text` is not an integer, if it is negative, or if
/// `base < 2`.
pub fn decompose_arg(base: i64, text: &str) -> Result<Decomposition> {
    let trimmed = text.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(decompose(base, n)?);
    }
    if let Some(magnitude) = trimmed.strip_prefix('-') {
        if magnitude.parse::<BigUint>().is_ok() {
            return Err(DecomposeError::NegativeValue { n: i64::MIN })
                .with_context(|| format!("`{text}` is negative"));
        }
    }
    let n: BigUint = trimmed
        .parse()
        .with_context(|| format!("`{text}` is not a non-negative integer"))?;
    let base = u64::try_from(base).map_err(|_| DecomposeError::BaseTooSmall { base })?;
    Ok(Decomposition::from_biguint(base, &n)?)
}
