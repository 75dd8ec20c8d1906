//! Core traits for convertible values
//!
//! A conversion never changes the shape of its input: a scalar comes back as
//! a scalar, a `Vec` of five wavelengths comes back as a `Vec` of five
//! frequencies. [`QuantityValue`] is the one abstraction that makes this hold
//! for every operation in the crate.

use core::convert::Infallible;

use alloc::vec::Vec;

/// Value that can be converted element-wise while keeping its shape
///
/// Arrays are rewritten in place, so a `Vec` keeps its allocation.
pub trait QuantityValue: Sized {
    /// Apply `f` to every element, stopping at the first error
    ///
    /// `f` receives the element position (`None` for scalars, `Some(i)` for
    /// the i-th array element) together with the element value.
    fn try_map_values<E, F>(self, f: F) -> Result<Self, E>
    where
        F: FnMut(Option<usize>, f64) -> Result<f64, E>;

    /// Number of scalar elements carried by the value
    fn element_count(&self) -> usize;

    /// Apply an infallible `f` to every element
    fn map_values<F>(self, mut f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        match self.try_map_values(|_, v| Ok::<_, Infallible>(f(v))) {
            Ok(mapped) => mapped,
            Err(never) => match never {},
        }
    }
}

impl QuantityValue for f64 {
    fn try_map_values<E, F>(self, mut f: F) -> Result<Self, E>
    where
        F: FnMut(Option<usize>, f64) -> Result<f64, E>,
    {
        f(None, self)
    }

    fn element_count(&self) -> usize {
        1
    }
}

impl QuantityValue for Vec<f64> {
    fn try_map_values<E, F>(mut self, f: F) -> Result<Self, E>
    where
        F: FnMut(Option<usize>, f64) -> Result<f64, E>,
    {
        map_slice(&mut self, f)?;
        Ok(self)
    }

    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<const N: usize> QuantityValue for [f64; N] {
    fn try_map_values<E, F>(mut self, f: F) -> Result<Self, E>
    where
        F: FnMut(Option<usize>, f64) -> Result<f64, E>,
    {
        map_slice(&mut self, f)?;
        Ok(self)
    }

    fn element_count(&self) -> usize {
        N
    }
}

fn map_slice<E, F>(values: &mut [f64], mut f: F) -> Result<(), E>
where
    F: FnMut(Option<usize>, f64) -> Result<f64, E>,
{
    for (i, value) in values.iter_mut().enumerate() {
        *value = f(Some(i), *value)?;
    }
    Ok(())
}
