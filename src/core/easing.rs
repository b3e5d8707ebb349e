//! Easing curves for view tweens.

use std::f64::consts::PI;

/// Monotonic map from normalized elapsed time to normalized progress.
/// Implementations must satisfy `f(0) = 0` and `f(1) = 1`.
pub type Easing = fn(f64) -> f64;

/// Symmetric sine ease: zero velocity at both endpoints, `f(0.5) = 0.5`.
#[inline]
pub fn ease_in_out_sine(t: f64) -> f64 {
    0.5 - 0.5 * (PI * t).cos()
}

#[inline]
pub fn linear(t: f64) -> f64 {
    t
}
