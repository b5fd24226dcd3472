use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::{Rational, Share, ShamirError, shamir_error::Result};

/// Calculate the lagrange basis coefficients for the lagrange polynomial
/// defined by the x coordinates xc at the value x.
///
/// The returned values satisfy:
///
/// ```text
///                ---     (x-xc[j])
///   values[i] =  | |   -------------
///              j != i  (xc[i]-xc[j])
/// ```
///
/// Fails with [`ShamirError::DegenerateSubset`] if two entries of `xc` are
/// equal.
pub fn lagrange_basis(xc: &[BigInt], x: &BigInt) -> Result<Vec<Rational>> {
    xc.iter()
        .enumerate()
        .map(|(i, xi)| {
            let mut numerator = BigInt::one();
            let mut denominator = BigInt::one();
            for (j, xj) in xc.iter().enumerate() {
                if i == j {
                    continue;
                }
                let difference = xi - xj;
                if difference.is_zero() {
                    return Err(ShamirError::DegenerateSubset);
                }
                numerator *= x - xj;
                denominator *= difference;
            }
            Rational::new(numerator, denominator)
        })
        .collect()
}

/// Evaluates the unique polynomial of degree `subset.len() - 1` passing
/// through the points of `subset` at the abscissa `x`.
pub fn value_at(subset: &[&Share], x: i64) -> Result<Rational> {
    let xc: Vec<BigInt> = subset.iter().map(|share| share.x_int()).collect();
    let basis = lagrange_basis(&xc, &BigInt::from(x))?;
    let value = subset
        .iter()
        .zip(basis)
        .fold(Rational::zero(), |sum, (share, li)| {
            &sum + &(&li * &Rational::from_integer(share.y_int()))
        });
    Ok(value)
}

/// Returns the constant term of the polynomial through the points of
/// `subset`, i.e. the shared secret.
pub fn value_at_zero(subset: &[&Share]) -> Result<Rational> {
    value_at(subset, 0)
}

#[cfg(test)]
mod tests {
    use num_bigint::{BigInt, BigUint};

    use super::{lagrange_basis, value_at, value_at_zero};
    use crate::{Rational, Share, ShamirError};

    // f(x) = 2x^2 - 3x + 5
    fn quadratic_shares() -> Vec<Share> {
        [(1, 4u32), (2, 7), (3, 14), (4, 25)]
            .into_iter()
            .map(|(x, y)| Share::new(x, y, format!("share-{}", x)))
            .collect()
    }

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().map(|&v| BigInt::from(v)).collect()
    }

    #[test]
    fn test_lagrange_basis_at_zero() {
        // For {1, 2, 3}: L_1(0) = 3, L_2(0) = -3, L_3(0) = 1.
        let basis = lagrange_basis(&ints(&[1, 2, 3]), &BigInt::from(0)).unwrap();
        assert_eq!(basis, vec![Rational::from(3i64), Rational::from(-3i64), Rational::one()]);
    }

    #[test]
    fn test_lagrange_basis_is_kronecker_delta() {
        let xc = ints(&[2, 5, 7, 11]);
        for (i, x) in xc.iter().enumerate() {
            let basis = lagrange_basis(&xc, x).unwrap();
            for (j, l) in basis.iter().enumerate() {
                let expected = if i == j { Rational::one() } else { Rational::zero() };
                assert_eq!(l, &expected);
            }
        }
    }

    #[test]
    fn test_value_at_zero() {
        let shares = quadratic_shares();
        let subset: Vec<&Share> = shares[..3].iter().collect();
        assert_eq!(value_at_zero(&subset).unwrap(), Rational::from(5i64));
    }

    #[test]
    fn test_order_invariance() {
        let shares = quadratic_shares();
        let expected = value_at_zero(&[&shares[0], &shares[1], &shares[3]]).unwrap();
        let permutations = [[1, 3, 0], [3, 0, 1], [0, 3, 1], [3, 1, 0]];
        for p in permutations {
            let subset: Vec<&Share> = p.iter().map(|&i| &shares[i]).collect();
            assert_eq!(value_at_zero(&subset).unwrap(), expected);
        }
        assert_eq!(expected, Rational::from(5i64));
    }

    #[test]
    fn test_value_at_predicts_other_shares() {
        let shares = quadratic_shares();
        let subset: Vec<&Share> = shares[1..].iter().collect();
        assert_eq!(value_at(&subset, 1).unwrap(), Rational::from(4i64));
        assert_eq!(value_at(&subset, 5).unwrap(), Rational::from(40i64));
        assert_eq!(value_at(&subset, -1).unwrap(), Rational::from(10i64));
    }

    #[test]
    fn test_fractional_result() {
        // The line through (1, 0) and (3, 1) crosses the y axis at -1/2.
        let a = Share::new(1, 0u32, "a");
        let b = Share::new(3, 1u32, "b");
        let secret = value_at_zero(&[&a, &b]).unwrap();
        assert_eq!(secret, Rational::new(-1, 2).unwrap());
        assert!(!secret.is_integer());
    }

    #[test]
    fn test_degenerate_subset() {
        let a = Share::new(2, 4u32, "a");
        let b = Share::new(2, 9u32, "b");
        let c = Share::new(3, 1u32, "c");
        assert_eq!(value_at_zero(&[&a, &b, &c]), Err(ShamirError::DegenerateSubset));
        assert_eq!(value_at(&[&c, &a, &b], 7), Err(ShamirError::DegenerateSubset));
    }

    #[test]
    fn test_large_values() {
        // f(x) = s + 3x with s = 2^200.
        let secret = BigUint::from(1u32) << 200;
        let shares: Vec<Share> = (1..=2)
            .map(|x| Share::new(x, &secret + BigUint::from(3 * x as u32), "big"))
            .collect();
        let subset: Vec<&Share> = shares.iter().collect();
        assert_eq!(
            value_at_zero(&subset).unwrap(),
            Rational::from_integer(BigInt::from(secret))
        );
    }
}
