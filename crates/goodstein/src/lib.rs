//! Hereditary base-b decompositions and symbolic Goodstein steps.
//!
//! The hereditary base-b notation of `n` writes `n` in base `b`, then writes
//! every exponent in base `b` again, recursively:
//!
//! ```text
//! 266 = 2^8 + 2^3 + 2
//!     = 2^(2^(2+1)) + 2^(2+1) + 2
//! ```
//!
//! A Goodstein step replaces every `b` in that tree with `b + 1` and then
//! subtracts one. The values involved outgrow any machine integer within a
//! handful of steps, so this crate keeps numbers as trees of terms and
//! performs both halves of the step symbolically.
//!
//! # Operations
//!
//! | Operation | Entry point |
//! |-----------|-------------|
//! | Construction | [`decompose`], [`Decomposition::from_biguint`] |
//! | Normalization | [`Decomposition::clean`] |
//! | Evaluation | [`Decomposition::evaluate`] |
//! | Rendering | [`Decomposition::render`], [`RenderStyle`] |
//! | Base increment | [`Decomposition::increment_base`] |
//! | Decrement | [`Decomposition::decrement`] |
//! | Sequence | [`GoodsteinSequence`] |
//!
//! # Example
//!
//! ```
//! use goodstein::{decompose, Notation};
//! use num_bigint::BigUint;
//!
//! let d = decompose(2, 10)?;
//! assert_eq!(d.render(Notation::Plain), "2 ^ (2 + 1) + 2");
//!
//! let next = d.increment_base().decrement();
//! assert_eq!(next.render(Notation::Latex), "3 ^ {3 + 1} + 2");
//! assert_eq!(next.evaluate(), BigUint::from(83u32));
//! # Ok::<(), goodstein::DecomposeError>(())
//! ```
//!
//! Every transform returns a new value and leaves its input untouched, and no
//! operation performs I/O or holds global state, so decompositions can be
//! shared freely between threads.

#![deny(missing_docs)]

mod decomposition;
mod error;

// Notations and the shared renderer
pub mod render;

// Lazy Goodstein sequences
pub mod sequence;

pub use decomposition::{decompose, Decomposition, Term};
pub use error::DecomposeError;
pub use render::{Notation, ParseNotationError, RenderStyle};
pub use sequence::{GoodsteinSequence, Step};
