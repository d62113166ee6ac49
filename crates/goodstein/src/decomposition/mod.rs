//! Hereditary base-b decompositions and their symbolic algebra.
//!
//! A [`Decomposition`] is a sum of [`Term`]s `c × b ^ e` stored from the least
//! to the most significant, where every exponent `e` is recursively written
//! in the same base `b`:
//!
//! ```text
//! 10 = 2^3 + 2^1          (plain base 2)
//!    = 2^(2^1 + 2^0) + 2  (hereditary base 2)
//! ```
//!
//! # Normal form
//!
//! Every value handed out by this module is normalized:
//!
//! - no term has a zero coefficient,
//! - every coefficient is strictly lower than its base,
//! - terms are stored by strictly increasing significance,
//! - zero is the empty sum.
//!
//! Under these rules the decomposition of a number in a given base is unique,
//! so structural equality (`==`) is value equality for a fixed base.
//!
//! # Pure transforms
//!
//! [`Decomposition::increment_base`] and [`Decomposition::decrement`] never
//! touch their receiver; they return fresh trees. Together they form one
//! Goodstein step ([`Decomposition::goodstein_step`]) without ever evaluating
//! the number, which is the only tractable way to follow a Goodstein sequence
//! once its values leave machine range.
//!
//! # Recursion depth
//!
//! All operations recurse along exponents. The depth is the hereditary tower
//! height ([`Decomposition::height`]), which stays in the tens for any value
//! whose decomposition fits in memory.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::DecomposeError;
use crate::render::{Notation, RenderStyle};

mod term;

pub use term::Term;

#[cfg(test)]
mod tests;

/// Returns the hereditary base-`base` decomposition of `n`.
///
/// # Errors
///
/// Returns [`DecomposeError::NegativeValue`] if `n < 0` and
/// [`DecomposeError::BaseTooSmall`] if `base < 2`. The value is checked first.
///
/// # Example
///
/// ```
/// use goodstein::decompose;
/// use num_bigint::BigUint;
///
/// let d = decompose(2, 10)?;
/// assert_eq!(d.to_string(), "2 ^ (2 + 1) + 2");
/// assert_eq!(d.evaluate(), BigUint::from(10u32));
/// # Ok::<(), goodstein::DecomposeError>(())
/// ```
pub fn decompose(base: i64, n: i64) -> Result<Decomposition, DecomposeError> {
    let n = u64::try_from(n).map_err(|_| DecomposeError::NegativeValue { n })?;
    let base = u64::try_from(base)
        .ok()
        .filter(|b| *b >= 2)
        .ok_or(DecomposeError::BaseTooSmall { base })?;
    Ok(Decomposition::raw(base, &BigUint::from(n)).clean())
}

/// A hereditary base-b decomposition, the sum of its [`Term`]s.
///
/// The default value is zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Decomposition {
    // least significant first
    terms: Vec<Term>,
}

impl Decomposition {
    /// The decomposition of zero, in any base.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Decomposes an arbitrary-precision `n` in base `base`.
    ///
    /// # Errors
    ///
    /// Returns [`DecomposeError::BaseTooSmall`] if `base < 2` and
    /// [`DecomposeError::BaseTooLarge`] if `base > i64::MAX`, the range
    /// [`decompose`] accepts.
    ///
    /// # Example
    ///
    /// ```
    /// use goodstein::Decomposition;
    /// use num_bigint::BigUint;
    ///
    /// let n = BigUint::from(2u32).pow(100);
    /// let d = Decomposition::from_biguint(2, &n)?;
    /// // 100 = 2^6 + 2^5 + 2^2
    /// assert_eq!(
    ///     d.to_string(),
    ///     "2 ^ (2 ^ (2 ^ (2) + 2) + 2 ^ (2 ^ (2) + 1) + 2 ^ (2))"
    /// );
    /// assert_eq!(d.evaluate(), n);
    /// # Ok::<(), goodstein::DecomposeError>(())
    /// ```
    pub fn from_biguint(base: u64, n: &BigUint) -> Result<Self, DecomposeError> {
        if base < 2 {
            return Err(DecomposeError::BaseTooSmall { base: base as i64 });
        }
        if i64::try_from(base).is_err() {
            return Err(DecomposeError::BaseTooLarge { base });
        }
        Ok(Self::raw(base, n).clean())
    }

    /// Digit-by-digit construction, place indices decomposed recursively.
    ///
    /// Zero digits are kept as zero-coefficient terms; callers clean.
    pub(crate) fn raw(base: u64, n: &BigUint) -> Self {
        let radix = BigUint::from(base);
        let mut terms = Vec::new();
        let mut rest = n.clone();
        let mut place: u64 = 0;
        while !rest.is_zero() {
            let digit = &rest % &radix;
            // zero has no digits
            let coefficient = digit.iter_u64_digits().next().unwrap_or(0);
            let exponent = Self::raw(base, &BigUint::from(place));
            terms.push(Term::new(coefficient, base, exponent));
            rest /= &radix;
            place += 1;
        }
        Self { terms }
    }

    /// Terms of the sum, least significant first.
    #[inline]
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Base of the outermost terms, `None` for zero.
    #[must_use]
    pub fn base(&self) -> Option<u64> {
        self.terms.first().map(Term::base)
    }

    /// Returns true if this is the decomposition of 0.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns true if this is the decomposition of 1.
    ///
    /// Only meaningful on a normalized decomposition.
    #[must_use]
    pub fn is_one(&self) -> bool {
        matches!(self.terms.as_slice(), [t] if t.is_one())
    }

    /// Nesting depth of the exponent tree: 0 for zero, 1 for a plain digit.
    #[must_use]
    pub fn height(&self) -> usize {
        self.terms
            .iter()
            .map(|t| 1 + t.exponent.height())
            .max()
            .unwrap_or(0)
    }

    /// Copy without zero-coefficient terms, at every depth.
    ///
    /// Idempotent: `d.clean().clean() == d.clean()`.
    #[must_use]
    pub fn clean(&self) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .filter(|t| !t.is_zero())
                .map(Term::cleaned)
                .collect(),
        }
    }

    /// Exact value of the decomposition.
    ///
    /// Values explode after a few Goodstein steps; this is meant for display
    /// and checks, the symbolic transforms never need it.
    #[must_use]
    pub fn evaluate(&self) -> BigUint {
        self.terms.iter().map(Term::evaluate).sum()
    }

    /// Copy with every base in the tree, exponents included, raised by one.
    ///
    /// Coefficients stay valid since they were already below the old base.
    ///
    /// # Example
    ///
    /// ```
    /// use goodstein::decompose;
    ///
    /// let d = decompose(2, 10)?;
    /// assert_eq!(d.increment_base().to_string(), "3 ^ (3 + 1) + 3");
    /// assert_eq!(d.to_string(), "2 ^ (2 + 1) + 2");
    /// # Ok::<(), goodstein::DecomposeError>(())
    /// ```
    #[must_use]
    pub fn increment_base(&self) -> Self {
        Self {
            terms: self.terms.iter().map(Term::with_next_base).collect(),
        }
    }

    /// Symbolically subtracts one.
    ///
    /// The least significant term `c × b ^ e` becomes `(c - 1) × b ^ e`
    /// preceded by the borrow `(b - 1) × b ^ (e - 1) + ... + (b - 1) × b ^ 0`,
    /// where each `e - k` comes from recursively decrementing `e`. Decrementing
    /// zero returns zero.
    ///
    /// # Example
    ///
    /// ```
    /// use goodstein::decompose;
    ///
    /// let d = decompose(3, 9)?;
    /// assert_eq!(d.to_string(), "3 ^ (2)");
    /// assert_eq!(d.decrement().to_string(), "2 * 3 + 2");
    /// assert!(decompose(3, 0)?.decrement().is_zero());
    /// # Ok::<(), goodstein::DecomposeError>(())
    /// ```
    #[must_use]
    pub fn decrement(&self) -> Self {
        let Some((lowest, higher)) = self.terms.split_first() else {
            return Self::zero();
        };

        let filler = lowest.base - 1;
        let mut terms = Vec::with_capacity(self.terms.len() + 1);
        let mut exponent = lowest.exponent.clone();
        while !exponent.is_zero() {
            exponent = exponent.decrement();
            terms.push(Term::new(filler, lowest.base, exponent.clone()));
        }
        // fillers were produced most significant first
        terms.reverse();

        terms.push(Term::new(
            lowest.coefficient.saturating_sub(1),
            lowest.base,
            lowest.exponent.clone(),
        ));
        terms.extend(higher.iter().cloned());

        Self { terms }.clean()
    }

    /// One Goodstein step: raise the base, then subtract one.
    #[must_use]
    pub fn goodstein_step(&self) -> Self {
        self.increment_base().decrement()
    }

    /// Renders the decomposition in one of the two standard notations.
    ///
    /// # Example
    ///
    /// ```
    /// use goodstein::{decompose, Notation};
    ///
    /// let d = decompose(2, 10)?;
    /// assert_eq!(d.render(Notation::Plain), "2 ^ (2 + 1) + 2");
    /// assert_eq!(d.render(Notation::Latex), "2 ^ {2 + 1} + 2");
    /// # Ok::<(), goodstein::DecomposeError>(())
    /// ```
    #[must_use]
    pub fn render(&self, notation: Notation) -> String {
        self.render_with(&notation.style())
    }

    /// Renders the decomposition with a custom set of symbols.
    #[must_use]
    pub fn render_with(&self, style: &RenderStyle<'_>) -> String {
        style.render(self)
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Notation::Plain))
    }
}
