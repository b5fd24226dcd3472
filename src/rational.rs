use std::{fmt, ops::{Add, Mul, Neg, Sub}};

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::{ShamirError, shamir_error::Result};

/// An exact fraction of arbitrary-precision integers.
///
/// Values are always kept in lowest terms with a positive denominator, so two
/// rationals are equal exactly when their numerators and denominators are.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    /// Creates the fraction `numerator / denominator` in canonical form.
    ///
    /// Fails with [`ShamirError::InvalidFraction`] if `denominator` is zero.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(ShamirError::InvalidFraction);
        }
        Ok(Self::reduced(numerator.into(), denominator))
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    pub fn one() -> Self {
        Self::from_integer(BigInt::one())
    }

    // Caller guarantees a non-zero denominator.
    fn reduced(numerator: BigInt, denominator: BigInt) -> Self {
        let divisor = numerator.gcd(&denominator);
        let (mut numerator, mut denominator) = (numerator / &divisor, denominator / &divisor);
        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }
        Self { numerator, denominator }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Returns the integer value, or `None` if the fraction is not integral.
    pub fn to_integer(&self) -> Option<&BigInt> {
        self.is_integer().then_some(&self.numerator)
    }

    /// Divides `self` by `divisor`.
    ///
    /// Fails with [`ShamirError::DivisionByZero`] if `divisor` is zero.
    pub fn divide(&self, divisor: &Rational) -> Result<Rational> {
        if divisor.is_zero() {
            return Err(ShamirError::DivisionByZero);
        }
        Ok(Self::reduced(
            &self.numerator * &divisor.denominator,
            &self.denominator * &divisor.numerator,
        ))
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        Rational::reduced(
            &self.numerator * &rhs.denominator + &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        Rational::reduced(
            &self.numerator * &rhs.denominator - &rhs.numerator * &self.denominator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        Rational::reduced(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        &self + &rhs
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        &self - &rhs
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        &self * &rhs
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::Rational;
    use crate::ShamirError;

    fn r(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    #[test]
    fn test_canonical_form() {
        let x = r(6, -4);
        assert_eq!(x.numerator(), &BigInt::from(-3));
        assert_eq!(x.denominator(), &BigInt::from(2));

        let y = r(-10, -5);
        assert!(y.is_integer());
        assert_eq!(y.to_integer(), Some(&BigInt::from(2)));

        let z = r(0, -7);
        assert_eq!(z, Rational::zero());
        assert_eq!(z.denominator(), &BigInt::from(1));

        assert_eq!(r(2, 4), r(-3, -6));
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(Rational::new(1, 0), Err(ShamirError::InvalidFraction));
        assert_eq!(Rational::new(0, 0), Err(ShamirError::InvalidFraction));
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(&r(1, 2) + &r(1, 3), r(5, 6));
        assert_eq!(&r(1, 2) - &r(1, 3), r(1, 6));
        assert_eq!(&r(2, 3) * &r(9, 4), r(3, 2));
        assert_eq!(r(2, 3).divide(&r(4, 9)).unwrap(), r(3, 2));
        assert_eq!(r(1, 3).divide(&r(-1, 3)).unwrap(), Rational::from(-1i64));
        assert_eq!(r(1, 4) + r(3, 4), Rational::one());
        assert_eq!(r(1, 4) - r(3, 4), r(-1, 2));
        assert_eq!(-r(1, 4), r(-1, 4));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(r(1, 2).divide(&Rational::zero()), Err(ShamirError::DivisionByZero));
    }

    #[test]
    fn test_large_values_stay_exact() {
        let big: BigInt = "340282366920938463463374607431768211457".parse().unwrap();
        let a = Rational::new(big.clone(), 3).unwrap();
        let b = &a * &Rational::from(3i64);
        assert!(b.is_integer());
        assert_eq!(b.to_integer(), Some(&big));
        assert!(!(&a - &Rational::from_integer(big.clone() / 3)).is_integer());
    }

    #[test]
    fn test_display() {
        assert_eq!(r(6, -4).to_string(), "-3/2");
        assert_eq!(r(10, 2).to_string(), "5");
    }
}
