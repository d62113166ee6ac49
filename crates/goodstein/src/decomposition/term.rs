//! A single `coefficient × base ^ exponent` summand.

use num_bigint::BigUint;
use num_traits::Pow;

use super::Decomposition;

/// One summand of a hereditary decomposition: `coefficient × base ^ exponent`.
///
/// The exponent is itself a [`Decomposition`], written in the same base, which
/// makes the whole structure a finite tree of terms.
///
/// Terms reachable through the public API always satisfy
/// `0 < coefficient < base`; a zero summand is represented by the absence of
/// a term rather than by a term with a zero coefficient.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term {
    pub(crate) coefficient: u64,
    pub(crate) base: u64,
    pub(crate) exponent: Decomposition,
}

impl Term {
    pub(crate) fn new(coefficient: u64, base: u64, exponent: Decomposition) -> Self {
        Self {
            coefficient,
            base,
            exponent,
        }
    }

    /// The digit multiplying the power of the base.
    #[inline]
    #[must_use]
    pub fn coefficient(&self) -> u64 {
        self.coefficient
    }

    /// The base this term is written in.
    #[inline]
    #[must_use]
    pub fn base(&self) -> u64 {
        self.base
    }

    /// The exponent of the base, itself a hereditary decomposition.
    #[inline]
    #[must_use]
    pub fn exponent(&self) -> &Decomposition {
        &self.exponent
    }

    /// Returns true if the term contributes nothing to the sum.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient == 0
    }

    /// Returns true if the term is exactly `1 × base ^ 0`.
    #[inline]
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.coefficient == 1 && self.exponent.is_zero()
    }

    /// Exact value of the term.
    #[must_use]
    pub fn evaluate(&self) -> BigUint {
        let power: BigUint = Pow::pow(BigUint::from(self.base), self.exponent.evaluate());
        power * self.coefficient
    }

    /// Copy of the term with its zero-coefficient sub-terms removed.
    pub(crate) fn cleaned(&self) -> Self {
        Self::new(self.coefficient, self.base, self.exponent.clean())
    }

    /// Copy of the term with every base in the tree raised by one.
    ///
    /// Bases start at most at `i64::MAX`, so saturation needs more steps than
    /// can ever run; it keeps `coefficient < base` regardless.
    pub(crate) fn with_next_base(&self) -> Self {
        Self::new(
            self.coefficient,
            self.base.saturating_add(1),
            self.exponent.increment_base(),
        )
    }
}
