//! Core traits for input checking
//!
//! Kept deliberately small: the engine only needs to know whether a number
//! can take part in arithmetic.

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is numerically valid (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

/// Index of the first invalid element, if any
pub fn first_invalid<T: Validatable>(values: &[T]) -> Option<usize> {
    values.iter().position(|v| !v.is_valid())
}
