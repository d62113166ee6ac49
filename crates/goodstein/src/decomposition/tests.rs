//! Tests for decomposition internals.

use num_bigint::BigUint;

use super::{decompose, Decomposition, Term};
use crate::error::DecomposeError;

fn raw(base: u64, n: u64) -> Decomposition {
    Decomposition::raw(base, &BigUint::from(n))
}

fn value(d: &Decomposition) -> u64 {
    u64::try_from(d.evaluate()).unwrap()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_raw_keeps_zero_digits() {
    // 4 = 1 * 2^2 + 0 * 2^1 + 0 * 2^0
    let d = raw(2, 4);
    let coefficients: Vec<u64> = d.terms().iter().map(Term::coefficient).collect();
    assert_eq!(coefficients, [0, 0, 1]);
    assert_eq!(value(&d), 4);
}

#[test]
fn test_raw_zero_is_empty() {
    assert!(raw(7, 0).is_zero());
}

#[test]
fn test_exponents_are_place_indices() {
    let d = raw(10, 1234);
    for (place, t) in d.terms().iter().enumerate() {
        assert_eq!(value(t.exponent()), place as u64);
        assert_eq!(t.base(), 10);
    }
}

#[test]
fn test_decompose_errors() {
    assert_eq!(
        decompose(2, -1),
        Err(DecomposeError::NegativeValue { n: -1 })
    );
    assert_eq!(decompose(1, 5), Err(DecomposeError::BaseTooSmall { base: 1 }));
    assert_eq!(decompose(0, 5), Err(DecomposeError::BaseTooSmall { base: 0 }));
    assert_eq!(
        decompose(-4, 5),
        Err(DecomposeError::BaseTooSmall { base: -4 })
    );
    // the value is checked before the base
    assert_eq!(
        decompose(1, -1),
        Err(DecomposeError::NegativeValue { n: -1 })
    );
}

#[test]
fn test_from_biguint_rejects_small_base() {
    assert_eq!(
        Decomposition::from_biguint(1, &BigUint::from(3u32)),
        Err(DecomposeError::BaseTooSmall { base: 1 })
    );
}

#[test]
fn test_from_biguint_rejects_huge_base() {
    assert_eq!(
        Decomposition::from_biguint(u64::MAX, &BigUint::from(5u32)),
        Err(DecomposeError::BaseTooLarge { base: u64::MAX })
    );
    assert_eq!(
        Decomposition::from_biguint(1 << 63, &BigUint::from(5u32)),
        Err(DecomposeError::BaseTooLarge { base: 1 << 63 })
    );
}

#[test]
fn test_largest_base_steps_without_overflow() {
    let base = i64::MAX as u64;
    let d = Decomposition::from_biguint(base, &BigUint::from(5u32)).unwrap();
    let next = d.goodstein_step();
    assert_eq!(next.base(), Some(base + 1));
    assert_eq!(next.terms()[0].coefficient(), 4);

    // saturates instead of wrapping past u64::MAX
    let top = Decomposition {
        terms: vec![Term::new(5, u64::MAX, Decomposition::zero())],
    };
    let raised = top.increment_base();
    assert_eq!(raised.base(), Some(u64::MAX));
    assert!(raised.terms()[0].coefficient() < raised.terms()[0].base());
}

#[test]
fn test_coefficients_below_base() {
    for base in 2..6 {
        for n in 0..200 {
            let d = decompose(base, n).unwrap();
            for t in d.terms() {
                assert!(t.coefficient() > 0);
                assert!(t.coefficient() < t.base());
            }
        }
    }
}

// ============================================================================
// Normalization
// ============================================================================

#[test]
fn test_clean_drops_zero_terms_at_every_depth() {
    // 16 = 2^4 and 4 = 2^2: zero digits at both levels
    let d = raw(2, 16).clean();
    assert_eq!(d.terms().len(), 1);
    assert_eq!(d.terms()[0].exponent().terms().len(), 1);
    assert_eq!(value(&d), 16);
}

#[test]
fn test_clean_is_idempotent_on_raw_trees() {
    for n in 0..300 {
        let once = raw(3, n).clean();
        assert_eq!(once.clean(), once);
    }
}

#[test]
fn test_clean_of_all_zero_terms_is_zero() {
    let d = Decomposition {
        terms: vec![
            Term::new(0, 2, Decomposition::zero()),
            Term::new(0, 2, raw(2, 1)),
        ],
    };
    assert!(d.clean().is_zero());
}

// ============================================================================
// Predicates
// ============================================================================

#[test]
fn test_is_one() {
    for base in 2..8 {
        assert!(decompose(base, 1).unwrap().is_one());
        assert!(!decompose(base, 0).unwrap().is_one());
        assert!(!decompose(base, 2).unwrap().is_one());
    }
}

#[test]
fn test_base_of_zero_is_none() {
    assert_eq!(Decomposition::zero().base(), None);
    assert_eq!(decompose(7, 50).unwrap().base(), Some(7));
}

#[test]
fn test_height() {
    assert_eq!(Decomposition::zero().height(), 0);
    assert_eq!(decompose(2, 1).unwrap().height(), 1);
    assert_eq!(decompose(2, 2).unwrap().height(), 2);
    // 16 = 2^(2^2) = 2^(2^(2^1))
    assert_eq!(decompose(2, 16).unwrap().height(), 4);
}

// ============================================================================
// Base increment
// ============================================================================

#[test]
fn test_increment_base_reaches_nested_exponents() {
    let d = decompose(2, 16).unwrap().increment_base();
    // 3^(3^3)
    assert_eq!(d.to_string(), "3 ^ (3 ^ (3))");
    assert_eq!(value(&d), 3u64.pow(27));
}

#[test]
fn test_increment_base_leaves_input_untouched() {
    let d = decompose(2, 10).unwrap();
    let before = d.clone();
    let _ = d.increment_base();
    assert_eq!(d, before);
}

#[test]
fn test_increment_base_of_zero() {
    assert!(Decomposition::zero().increment_base().is_zero());
}

// ============================================================================
// Decrement
// ============================================================================

#[test]
fn test_decrement_zero_is_zero() {
    for base in 2..10 {
        assert!(decompose(base, 0).unwrap().decrement().is_zero());
    }
}

#[test]
fn test_decrement_one_is_empty() {
    let d = decompose(3, 1).unwrap().decrement();
    assert!(d.is_zero());
    assert!(d.terms().is_empty());
}

#[test]
fn test_decrement_borrows_from_power() {
    // 2 = 2^1, 2 - 1 = 1 * 2^0
    let d = decompose(2, 2).unwrap().decrement();
    assert_eq!(d.terms().len(), 1);
    assert_eq!(d.terms()[0].coefficient(), 1);
    assert!(d.terms()[0].exponent().is_zero());
    assert_eq!(value(&d), 1);
}

#[test]
fn test_decrement_keeps_nonzero_coefficient() {
    // 6 = 2 * 3, 6 - 1 = 3 + 2
    let d = decompose(3, 6).unwrap().decrement();
    assert_eq!(d.to_string(), "3 + 2");
}

#[test]
fn test_decrement_fills_every_lower_place() {
    // 5^3 - 1 = 4 * 5^2 + 4 * 5 + 4
    let d = decompose(5, 125).unwrap().decrement();
    assert_eq!(d.to_string(), "4 * 5 ^ (2) + 4 * 5 + 4");
    assert_eq!(d, decompose(5, 124).unwrap());
}

#[test]
fn test_decrement_matches_direct_decomposition() {
    for base in 2..6 {
        for n in 1..500 {
            let d = decompose(base, n).unwrap().decrement();
            assert_eq!(d, decompose(base, n - 1).unwrap(), "base {base}, n {n}");
        }
    }
}

#[test]
fn test_decrement_leaves_input_untouched() {
    let d = decompose(2, 64).unwrap();
    let before = d.clone();
    let _ = d.decrement();
    assert_eq!(d, before);
}

// ============================================================================
// Goodstein step
// ============================================================================

#[test]
fn test_goodstein_step_of_ten() {
    let d = decompose(2, 10).unwrap();
    let next = d.goodstein_step();
    assert_eq!(next.to_string(), "3 ^ (3 + 1) + 2");
    assert_eq!(value(&next), 83);
}
