//! Lazy Goodstein sequences.
//!
//! ```text
//! G(3):  base 2   2 + 1
//!        base 3   3
//!        base 4   3
//!        base 5   2
//!        base 6   1
//!        base 7   0
//! ```
//!
//! The iterator performs one symbolic step per `next()` and stops after it has
//! produced zero. It makes no attempt to predict when that happens; for most
//! starting values it will not happen within the lifetime of the universe.

use std::iter::FusedIterator;

use crate::decomposition::{decompose, Decomposition};
use crate::error::DecomposeError;

/// One element of a Goodstein sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Position in the sequence, the starting value being 0.
    pub index: usize,
    /// Base the decomposition is written in.
    pub base: u64,
    /// The value at this step.
    pub decomposition: Decomposition,
}

/// Iterator over the Goodstein sequence of a starting decomposition.
#[derive(Debug, Clone)]
pub struct GoodsteinSequence {
    next: Option<Decomposition>,
    base: u64,
    index: usize,
}

impl GoodsteinSequence {
    /// Starts the sequence of `n` written in hereditary base `base`.
    ///
    /// # Errors
    ///
    /// Same as [`decompose`].
    ///
    /// # Example
    ///
    /// ```
    /// use goodstein::GoodsteinSequence;
    ///
    /// let values: Vec<u32> = GoodsteinSequence::new(2, 3)?
    ///     .map(|s| u32::try_from(s.decomposition.evaluate()).unwrap())
    ///     .collect();
    /// assert_eq!(values, [3, 3, 3, 2, 1, 0]);
    /// # Ok::<(), goodstein::DecomposeError>(())
    /// ```
    pub fn new(base: i64, n: i64) -> Result<Self, DecomposeError> {
        let start = decompose(base, n)?;
        // decompose rejected every base below 2
        Ok(Self::from_decomposition(base.unsigned_abs(), start))
    }

    /// Starts the sequence at an existing decomposition written in `base`.
    ///
    /// `base` is only consulted when `start` is zero, which carries none.
    #[must_use]
    pub fn from_decomposition(base: u64, start: Decomposition) -> Self {
        Self {
            base: start.base().unwrap_or(base),
            next: Some(start),
            index: 0,
        }
    }
}

impl Iterator for GoodsteinSequence {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let current = self.next.take()?;
        if !current.is_zero() {
            self.next = Some(current.goodstein_step());
        }
        let step = Step {
            index: self.index,
            base: self.base,
            decomposition: current,
        };
        self.index += 1;
        self.base = self.base.saturating_add(1);
        Some(step)
    }
}

impl FusedIterator for GoodsteinSequence {}
