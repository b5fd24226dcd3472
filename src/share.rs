use num_bigint::{BigInt, BigUint};

/// One point `(x, y)` of a shared polynomial, plus an opaque caller label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Share {
    x: i64,
    y: BigUint,
    label: String,
}

impl Share {
    pub fn new(x: i64, y: impl Into<BigUint>, label: impl Into<String>) -> Self {
        Self {
            x,
            y: y.into(),
            label: label.into(),
        }
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> &BigUint {
        &self.y
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The abscissa as a signed big integer, for exact arithmetic.
    pub(crate) fn x_int(&self) -> BigInt {
        BigInt::from(self.x)
    }

    pub(crate) fn y_int(&self) -> BigInt {
        BigInt::from(self.y.clone())
    }
}
