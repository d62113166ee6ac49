//! Output records and their line formats.

use anyhow::Result;
use clap::ValueEnum;
use goodstein::{Decomposition, Step};
use serde::{Deserialize, Serialize};

use crate::config::Settings;

/// How each record is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, tab-separated.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// One line of `goodstein sequence`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// Position in the sequence.
    pub index: usize,
    /// Base of the decomposition.
    pub base: u64,
    /// Decimal value, absent when evaluation is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Rendered decomposition.
    pub decomposition: String,
}

impl StepRecord {
    /// Builds the record of one sequence step.
    #[must_use]
    pub fn new(step: &Step, settings: &Settings) -> Self {
        Self {
            index: step.index,
            base: step.base,
            value: settings
                .show_value
                .then(|| step.decomposition.evaluate().to_string()),
            decomposition: step.decomposition.render(settings.notation),
        }
    }

    /// Column names of the text format.
    #[must_use]
    pub fn header(settings: &Settings) -> String {
        if settings.show_value {
            "index\tbase\tvalue\tdecomposition".to_owned()
        } else {
            "index\tbase\tdecomposition".to_owned()
        }
    }

    /// Formats the record as one output line.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_line(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Json => serde_json::to_string(self)?,
            OutputFormat::Text => match &self.value {
                Some(value) => format!(
                    "{}\t{}\t{}\t{}",
                    self.index, self.base, value, self.decomposition
                ),
                None => format!("{}\t{}\t{}", self.index, self.base, self.decomposition),
            },
        })
    }
}

/// One line of `goodstein decompose`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecompositionRecord {
    /// The decomposed integer, in decimal.
    pub n: String,
    /// Base of the decomposition.
    pub base: u64,
    /// Rendered decomposition.
    pub decomposition: String,
}

impl DecompositionRecord {
    /// Builds the record of one decomposition.
    #[must_use]
    pub fn new(base: u64, d: &Decomposition, settings: &Settings) -> Self {
        Self {
            n: d.evaluate().to_string(),
            base,
            decomposition: d.render(settings.notation),
        }
    }

    /// Header line of the text format.
    #[must_use]
    pub fn header(base: u64) -> String {
        format!("hereditary base-{base} decompositions")
    }

    /// Formats the record as one output line.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_line(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Json => serde_json::to_string(self)?,
            OutputFormat::Text => format!("{} = {}", self.n, self.decomposition),
        })
    }
}
