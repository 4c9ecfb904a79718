//! Numeric element trait shared by every indicator.
//!
//! [`SeriesElement`] abstracts over `f32` and `f64` so the indicator engine can
//! run on either precision. Indicators never fail, so the conversions here
//! are infallible for the float types the trait is implemented for.
//!
//! # Example
//!
//! ```
//! use chart_ta::traits::SeriesElement;
//!
//! fn window_mean<T: SeriesElement>(window: &[T]) -> T {
//!     let sum = window.iter().fold(T::zero(), |acc, &x| acc + x);
//!     sum / T::from_len(window.len())
//! }
//!
//! assert!((window_mean(&[1.0_f64, 2.0, 3.0]) - 2.0).abs() < 1e-10);
//! ```

use num_traits::{Float, NumCast};

/// A trait for types that can be used as elements in a data series.
///
/// Requires `Float` for arithmetic and NaN/infinity handling, `NumCast` for
/// period conversions, and `Send + Sync` so indicator outputs can move across
/// threads (the adapter is invoked concurrently from many chart widgets).
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Converts a length or period to this type.
    ///
    /// Every `usize` is representable (possibly rounded) in `f32` and `f64`;
    /// the NaN fallback only exists for exotic `Float` implementations.
    #[inline]
    #[must_use]
    fn from_len(value: usize) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::nan)
    }

    /// Converts an `f64` parameter (a band multiplier, a threshold) to this type.
    #[inline]
    #[must_use]
    fn from_param(value: f64) -> Self {
        <Self as NumCast>::from(value).unwrap_or_else(Self::nan)
    }

    /// Widens this value to `f64` for the renderer-facing description.
    #[inline]
    #[must_use]
    fn to_f64_lossy(self) -> f64 {
        <f64 as NumCast>::from(self).unwrap_or(f64::NAN)
    }

    /// Returns the constant 2 as this type.
    ///
    /// Used for the EMA smoothing factor `k = 2 / (period + 1)`.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns the constant 100 as this type.
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        Self::from_len(100)
    }
}

impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}
