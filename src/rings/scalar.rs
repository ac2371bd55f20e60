use num_traits::{Inv, One, Zero};
use std::ops::{Add, Mul, Neg};

/// What the reduction engine needs from a matrix entry: zero test, negation,
/// multiplication, addition and a multiplicative inverse for nonzero values.
pub trait Scalar:  // Avoid repeating all the traits
    Clone
    + Zero
    + One
    + PartialEq
    + Neg<Output = Self>
    + Add<Output = Self>
    + Mul<Output = Self>
    + Inv<Output = Self>
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<T> Scalar for T where
    T: Clone
        + Zero
        + One
        + PartialEq
        + Neg<Output = T>
        + Add<Output = T>
        + Mul<Output = T>
        + Inv<Output = T>
        + std::fmt::Display
        + std::fmt::Debug
{
}
