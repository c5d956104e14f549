pub mod energy;

use std::{
    iter::Sum,
    ops::{Div, Mul},
};

use serde::{Deserialize, Serialize};

/// Physical quantity, dimensioned by the power and time exponents.
#[derive(
    Clone,
    Copy,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
)]
#[serde(transparent)]
pub struct Quantity<T, const POWER: isize, const TIME: isize>(pub T);

impl<const POWER: isize, const TIME: isize> Quantity<f64, POWER, TIME> {
    pub const ZERO: Self = Self(0.0);

    /// Round half away from zero to the nearest whole unit.
    #[must_use]
    pub fn round(self) -> Self {
        Self(self.0.round())
    }
}

impl<const POWER: isize, const TIME: isize> Default for Quantity<f64, POWER, TIME> {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Starts from positive zero, so an empty sum is `+0.0`.
impl<const POWER: isize, const TIME: isize> Sum for Quantity<f64, POWER, TIME> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |sum, value| sum + value)
    }
}

impl<T, const POWER: isize, const TIME: isize> Mul<T> for Quantity<T, POWER, TIME>
where
    T: Mul<T>,
{
    type Output = Quantity<T::Output, POWER, TIME>;

    fn mul(self, rhs: T) -> Self::Output {
        Quantity(self.0 * rhs)
    }
}

impl<T, const POWER: isize, const TIME: isize> Div<T> for Quantity<T, POWER, TIME>
where
    T: Div<T>,
{
    type Output = Quantity<T::Output, POWER, TIME>;

    fn div(self, rhs: T) -> Self::Output {
        Quantity(self.0 / rhs)
    }
}
