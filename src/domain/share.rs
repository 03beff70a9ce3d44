//! A single decoded share

use num_bigint::BigInt;

/// One point `(x, y)` on the secret polynomial
///
/// `x` is the share index and `y` the decoded share value. Both are unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Share {
    x: BigInt,
    y: BigInt,
}

impl Share {
    /// Creates a share from its index and value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use num_bigint::BigInt;
    /// use shareback::domain::Share;
    ///
    /// let share = Share::new(2, 7);
    /// assert_eq!(*share.x(), BigInt::from(2));
    /// assert_eq!(*share.y(), BigInt::from(7));
    /// ```
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    #[must_use]
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}
