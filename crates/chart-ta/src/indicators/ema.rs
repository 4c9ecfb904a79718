//! Exponential Moving Average (EMA) indicator.
//!
//! The EMA weights recent observations more heavily than older ones and is
//! defined at every index of the input.
//!
//! # Formula
//!
//! ```text
//! k      = 2 / (period + 1)
//! EMA[0] = Price[0]
//! EMA[i] = (Price[i] - EMA[i-1]) * k + EMA[i-1]
//! ```
//!
//! The recurrence is seeded with the first observation rather than with an
//! SMA of the first `period` values, so there is no lookback gap: the output
//! has the same length as the input and aligns index-for-index with it.
//!
//! # Example
//!
//! ```
//! use chart_ta::indicators::ema::ema;
//!
//! let result = ema(&[10.0_f64, 20.0, 30.0], 2);
//! assert_eq!(result[0], 10.0);
//! assert!((result[1] - 16.667).abs() < 1e-3);
//! assert!((result[2] - 25.556).abs() < 1e-3);
//! ```

use crate::traits::SeriesElement;

/// Returns the number of EMA values produced for an input of `input_len`.
///
/// Zero for a zero period; otherwise the input length.
#[inline]
#[must_use]
pub const fn ema_output_len(input_len: usize, period: usize) -> usize {
    if period == 0 {
        0
    } else {
        input_len
    }
}

/// Returns the smoothing factor `k = 2 / (period + 1)`.
#[inline]
#[must_use]
pub fn ema_alpha<T: SeriesElement>(period: usize) -> T {
    T::two() / T::from_len(period.saturating_add(1))
}

/// Computes the Exponential Moving Average using `k = 2 / (period + 1)`.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `period` - The smoothing period
///
/// # Returns
///
/// A vector with one value per input element. Empty for empty input or a
/// zero period.
///
/// # Performance
///
/// - Time complexity: O(n)
/// - Space complexity: O(n) for the output vector
#[must_use = "this returns the EMA values, which should be used"]
pub fn ema<T: SeriesElement>(data: &[T], period: usize) -> Vec<T> {
    if period == 0 {
        return Vec::new();
    }
    ema_with_alpha(data, ema_alpha(period))
}

/// Computes the EMA recurrence with an explicit smoothing factor.
///
/// Seeds with `data[0]`; empty input yields an empty vector.
#[must_use = "this returns the EMA values, which should be used"]
pub fn ema_with_alpha<T: SeriesElement>(data: &[T], alpha: T) -> Vec<T> {
    let Some((&first, rest)) = data.split_first() else {
        return Vec::new();
    };

    let mut output = Vec::with_capacity(data.len());
    output.push(first);

    let mut prev = first;
    for &price in rest {
        prev = (price - prev) * alpha + prev;
        output.push(prev);
    }

    output
}

/// EMA configuration with a fluent builder API.
///
/// Defaults to a 20-period average.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ema {
    period: usize,
}

impl Default for Ema {
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl Ema {
    /// Creates an EMA configuration with the default period (20).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the smoothing period.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Returns the smoothing period.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Computes the EMA using the configured period.
    #[must_use]
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Vec<T> {
        ema(data, self.period)
    }
}
