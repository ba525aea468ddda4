use rand::distributions::uniform::{SampleBorrow, SampleUniform, UniformInt, UniformSampler};
use rand::prelude::Rng;

use crate::Time;

/// Uniform sampling of [`Time`] values by total minute count.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct UniformTime(UniformInt<i64>);

impl UniformSampler for UniformTime {
    type X = Time;
    /// Samples from `low..high`.
    ///
    /// # Panics
    ///
    /// If `low >= high`.
    fn new<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        UniformTime(UniformInt::<i64>::new(
            low.borrow().to_integer(),
            high.borrow().to_integer(),
        ))
    }
    /// Samples from `low..=high`.
    ///
    /// # Panics
    ///
    /// If `low > high`.
    fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        UniformTime(UniformInt::<i64>::new_inclusive(
            low.borrow().to_integer(),
            high.borrow().to_integer(),
        ))
    }
    // Both bounds are non-negative, so every sample is too.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
        Time::from_non_negative(self.0.sample(rng))
    }
}

impl SampleUniform for Time {
    type Sampler = UniformTime;
}
