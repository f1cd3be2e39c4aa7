//! Travel volume as a function of hop distance.

use crate::{TravelError, TravelResult};

/// Fraction of an origin's present roster that travels to one destination
/// `distance` hops away, per day.
///
/// Implementations must return a value in `[0, 1]` for every `distance >= 1`
/// and should be non-increasing in `distance`.  `Send + Sync` so a router can
/// be shared by batch runs on worker threads.
pub trait TravelKernel: Send + Sync {
    fn fraction(&self, distance: u32) -> f64;
}

impl<K: TravelKernel + ?Sized> TravelKernel for Box<K> {
    #[inline]
    fn fraction(&self, distance: u32) -> f64 {
        (**self).fraction(distance)
    }
}

/// `exp(-λ d)`: each extra hop divides travel by `e^λ`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ExponentialDecay {
    lambda: f64,
}

impl ExponentialDecay {
    pub fn new(lambda: f64) -> TravelResult<Self> {
        if lambda.is_finite() && lambda > 0.0 {
            Ok(Self { lambda })
        } else {
            Err(TravelError::InvalidDecay(lambda))
        }
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl TravelKernel for ExponentialDecay {
    #[inline]
    fn fraction(&self, distance: u32) -> f64 {
        (-self.lambda * distance as f64).exp()
    }
}

/// `floor(fraction × roster)`.
#[inline]
pub fn expected_travelers(fraction: f64, roster: usize) -> usize {
    (fraction * roster as f64).floor() as usize
}
