//! Driver configuration: an optional TOML file, overridden by command-line flags.
//!
//! ```toml
//! notation = "latex"
//! header = true
//! show_value = false
//! max_steps = 100
//! format = "json"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use goodstein::Notation;
use serde::Deserialize;

use crate::report::OutputFormat;

/// Number of Goodstein steps printed when neither the file nor the flags say.
pub const DEFAULT_MAX_STEPS: usize = 32;

/// Contents of a configuration file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// `plain` or `latex`.
    pub notation: Option<String>,
    /// Print a header line before the output.
    pub header: Option<bool>,
    /// Evaluate and print the value of every decomposition.
    pub show_value: Option<bool>,
    /// Number of steps after the starting value.
    pub max_steps: Option<usize>,
    /// `text` or `json`.
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    /// Parses configuration text.
    ///
    /// # Errors
    ///
    /// Returns an error on invalid TOML or unknown keys.
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration")
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration: {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("In {}", path.display()))
    }
}

/// Values given on the command line. Unset fields defer to the file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    /// `--notation`
    pub notation: Option<Notation>,
    /// `--header`
    pub header: bool,
    /// `--no-value`
    pub no_value: bool,
    /// `--steps`
    pub max_steps: Option<usize>,
    /// `--format`
    pub format: Option<OutputFormat>,
}

/// Effective settings of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Notation of every rendering.
    pub notation: Notation,
    /// Whether a header line is printed.
    pub header: bool,
    /// Whether values are evaluated and printed.
    pub show_value: bool,
    /// Number of steps after the starting value.
    pub max_steps: usize,
    /// Output line format.
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            notation: Notation::Plain,
            header: false,
            show_value: true,
            max_steps: DEFAULT_MAX_STEPS,
            format: OutputFormat::Text,
        }
    }
}

impl Settings {
    /// Merges the file configuration under the command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file names an unknown notation.
    pub fn resolve(file: &FileConfig, overrides: &Overrides) -> Result<Self> {
        let defaults = Self::default();
        let notation = match (overrides.notation, file.notation.as_deref()) {
            (Some(notation), _) => notation,
            (None, Some(name)) => name.parse()?,
            (None, None) => defaults.notation,
        };
        Ok(Self {
            notation,
            header: overrides.header || file.header.unwrap_or(defaults.header),
            show_value: !overrides.no_value && file.show_value.unwrap_or(defaults.show_value),
            max_steps: overrides
                .max_steps
                .or(file.max_steps)
                .unwrap_or(defaults.max_steps),
            format: overrides.format.or(file.format).unwrap_or(defaults.format),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let file = FileConfig::parse("").unwrap();
        assert_eq!(file, FileConfig::default());
        let settings = Settings::resolve(&file, &Overrides::default()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn file_values_are_used() {
        let file = FileConfig::parse(
            "notation = \"latex\"\nheader = true\nshow_value = false\nmax_steps = 5\nformat = \"json\"\n",
        )
        .unwrap();
        let settings = Settings::resolve(&file, &Overrides::default()).unwrap();
        assert_eq!(
            settings,
            Settings {
                notation: Notation::Latex,
                header: true,
                show_value: false,
                max_steps: 5,
                format: OutputFormat::Json,
            }
        );
    }

    #[test]
    fn flags_override_file() {
        let file = FileConfig::parse("notation = \"latex\"\nmax_steps = 5\nformat = \"json\"\n").unwrap();
        let overrides = Overrides {
            notation: Some(Notation::Plain),
            no_value: true,
            max_steps: Some(9),
            format: Some(OutputFormat::Text),
            ..Overrides::default()
        };
        let settings = Settings::resolve(&file, &overrides).unwrap();
        assert_eq!(settings.notation, Notation::Plain);
        assert!(!settings.show_value);
        assert_eq!(settings.max_steps, 9);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::parse("colour = true\n").is_err());
    }

    #[test]
    fn unknown_notation_is_rejected() {
        let file = FileConfig::parse("notation = \"html\"\n").unwrap();
        assert!(Settings::resolve(&file, &Overrides::default()).is_err());
    }
}
