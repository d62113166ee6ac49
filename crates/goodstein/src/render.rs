//! Textual notations for decompositions.
//!
//! Both notations share one algorithm, parameterized by a [`RenderStyle`]:
//! terms are written most significant first and joined by `" + "`, and each
//! term takes the shortest of these forms:
//!
//! | Term | Rendering |
//! |------|-----------|
//! | `c × b ^ 0` | `c` |
//! | `1 × b ^ 1` | `b` |
//! | `c × b ^ 1` | `c * b` |
//! | `1 × b ^ e` | `b ^ (e)` |
//! | `c × b ^ e` | `c * b ^ (e)` |
//!
//! Exponents other than 0 and 1 are always grouped, so the rendering of a
//! normalized decomposition is unambiguous.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::decomposition::{Decomposition, Term};

/// Symbols used when rendering a decomposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle<'a> {
    /// Multiplication sign, padded with one space on each side.
    pub multiplication: &'a str,
    /// Opening group around exponents.
    pub left_group: &'a str,
    /// Closing group around exponents.
    pub right_group: &'a str,
}

impl RenderStyle<'static> {
    /// Plain text: `2 * 3 ^ (2) + 1`.
    pub const PLAIN: Self = Self {
        multiplication: "*",
        left_group: "(",
        right_group: ")",
    };

    /// LaTeX math mode: `2 \times 3 ^ {2} + 1`. Nothing is escaped.
    pub const LATEX: Self = Self {
        multiplication: "\\times",
        left_group: "{",
        right_group: "}",
    };
}

impl RenderStyle<'_> {
    /// Renders a whole decomposition; zero renders as `"0"`.
    #[must_use]
    pub fn render(&self, d: &Decomposition) -> String {
        let mut out = String::new();
        self.write_decomposition(d, &mut out);
        out
    }

    fn write_decomposition(&self, d: &Decomposition, out: &mut String) {
        if d.is_zero() {
            out.push('0');
            return;
        }
        for (i, t) in d.terms().iter().rev().enumerate() {
            if i > 0 {
                out.push_str(" + ");
            }
            self.write_term(t, out);
        }
    }

    fn write_term(&self, t: &Term, out: &mut String) {
        if t.is_zero() {
            out.push('0');
            return;
        }

        let exponent = t.exponent();
        if exponent.is_zero() {
            out.push_str(&t.coefficient().to_string());
            return;
        }

        if t.coefficient() != 1 {
            out.push_str(&t.coefficient().to_string());
            self.write_times(out);
        }
        out.push_str(&t.base().to_string());

        if !exponent.is_one() {
            out.push_str(" ^ ");
            out.push_str(self.left_group);
            self.write_decomposition(exponent, out);
            out.push_str(self.right_group);
        }
    }

    fn write_times(&self, out: &mut String) {
        out.push(' ');
        out.push_str(self.multiplication);
        out.push(' ');
    }
}

/// The two standard notations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `*`, `(` and `)`.
    #[default]
    Plain,
    /// `\times`, `{` and `}`.
    Latex,
}

impl Notation {
    /// The symbol set of this notation.
    #[must_use]
    pub const fn style(self) -> RenderStyle<'static> {
        match self {
            Self::Plain => RenderStyle::PLAIN,
            Self::Latex => RenderStyle::LATEX,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Latex => "latex",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown notation name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown notation `{0}`, expected `plain` or `latex`")]
pub struct ParseNotationError(pub String);

impl FromStr for Notation {
    type Err = ParseNotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(Self::Plain),
            "latex" | "tex" => Ok(Self::Latex),
            _ => Err(ParseNotationError(s.to_owned())),
        }
    }
}
