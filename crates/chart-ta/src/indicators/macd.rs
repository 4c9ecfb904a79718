//! Moving Average Convergence Divergence (MACD) indicator.
//!
//! The MACD is a trend-following momentum indicator built from two EMAs:
//!
//! - **MACD Line**: fast EMA - slow EMA
//! - **Signal Line**: EMA of the MACD line
//! - **Histogram**: MACD line - signal line
//!
//! # Formula
//!
//! ```text
//! MACD Line[i]   = EMA(fast)[i] - EMA(slow)[i]
//! Signal Line    = EMA(MACD Line, signal)
//! Histogram[i]   = MACD Line[i] - Signal Line[i]
//! ```
//!
//! Because the EMA here is seeded with the first observation and defined at
//! every index, all three components have the full input length and align
//! index-for-index with the input. There is no lookback gap.
//!
//! # Example
//!
//! ```
//! use chart_ta::indicators::macd::macd;
//!
//! let data: Vec<f64> = (0..50).map(|i| 100.0 + (i as f64) * 0.5).collect();
//! let result = macd(&data, 12, 26, 9);
//!
//! assert_eq!(result.len(), 50);
//! assert_eq!(result.macd_line[0], 0.0); // both EMAs start at data[0]
//! for i in 0..result.len() {
//!     assert_eq!(result.histogram[i], result.macd_line[i] - result.signal_line[i]);
//! }
//! ```

use crate::indicators::ema::ema;
use crate::traits::SeriesElement;

/// Returns the number of values in each MACD component for an input of `input_len`.
///
/// Zero if any period is zero; otherwise the input length.
#[inline]
#[must_use]
pub const fn macd_output_len(
    input_len: usize,
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> usize {
    if fast_period == 0 || slow_period == 0 || signal_period == 0 {
        0
    } else {
        input_len
    }
}

/// The output of MACD calculation containing all three components.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdOutput<T> {
    /// The MACD line (fast EMA - slow EMA).
    pub macd_line: Vec<T>,

    /// The signal line (EMA of the MACD line).
    pub signal_line: Vec<T>,

    /// The histogram (MACD line - signal line).
    pub histogram: Vec<T>,
}

impl<T> MacdOutput<T> {
    /// Returns the length of the output vectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.macd_line.len()
    }

    /// Returns true if the output vectors are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.macd_line.is_empty()
    }
}

/// Computes the Moving Average Convergence Divergence.
///
/// # Arguments
///
/// * `data` - The input price series
/// * `fast_period` - The period for the fast EMA (typically 12)
/// * `slow_period` - The period for the slow EMA (typically 26)
/// * `signal_period` - The period for the signal EMA (typically 9)
///
/// # Returns
///
/// A [`MacdOutput`] whose components all have the input length, or are all
/// empty for empty input or a zero period. `fast_period >= slow_period` is
/// not rejected; the line simply changes sign.
///
/// # Performance
///
/// - Time complexity: O(n)
/// - Space complexity: O(n) for each output vector (3n total)
#[must_use = "this returns the MACD output, which should be used"]
pub fn macd<T: SeriesElement>(
    data: &[T],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> MacdOutput<T> {
    if macd_output_len(data.len(), fast_period, slow_period, signal_period) == 0 {
        return MacdOutput {
            macd_line: Vec::new(),
            signal_line: Vec::new(),
            histogram: Vec::new(),
        };
    }

    let fast_ema = ema(data, fast_period);
    let slow_ema = ema(data, slow_period);

    let macd_line: Vec<T> = fast_ema
        .iter()
        .zip(&slow_ema)
        .map(|(&fast, &slow)| fast - slow)
        .collect();

    let signal_line = ema(&macd_line, signal_period);

    let histogram = macd_line
        .iter()
        .zip(&signal_line)
        .map(|(&line, &signal)| line - signal)
        .collect();

    MacdOutput {
        macd_line,
        signal_line,
        histogram,
    }
}

/// MACD configuration with a fluent builder API.
///
/// Defaults to the standard (12, 26, 9) parameters.
///
/// ```
/// use chart_ta::indicators::macd::Macd;
///
/// let data: Vec<f64> = (0..40).map(|i| 20.0 + (i as f64 * 0.2).sin()).collect();
/// let out = Macd::new().fast_period(5).slow_period(13).signal_period(4).compute(&data);
/// assert_eq!(out.len(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    /// Creates a MACD configuration with standard parameters (12, 26, 9).
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl Macd {
    /// Creates a MACD configuration with standard parameters (12, 26, 9).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fast EMA period.
    #[must_use]
    pub const fn fast_period(mut self, period: usize) -> Self {
        self.fast_period = period;
        self
    }

    /// Sets the slow EMA period.
    #[must_use]
    pub const fn slow_period(mut self, period: usize) -> Self {
        self.slow_period = period;
        self
    }

    /// Sets the signal EMA period.
    #[must_use]
    pub const fn signal_period(mut self, period: usize) -> Self {
        self.signal_period = period;
        self
    }

    /// Returns the fast EMA period.
    #[must_use]
    pub const fn get_fast_period(&self) -> usize {
        self.fast_period
    }

    /// Returns the slow EMA period.
    #[must_use]
    pub const fn get_slow_period(&self) -> usize {
        self.slow_period
    }

    /// Returns the signal EMA period.
    #[must_use]
    pub const fn get_signal_period(&self) -> usize {
        self.signal_period
    }

    /// Computes MACD using the configured parameters.
    #[must_use]
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> MacdOutput<T> {
        macd(data, self.fast_period, self.slow_period, self.signal_period)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::utils::{approx_eq, EPSILON, LOOSE_EPSILON};

    #[test]
    fn test_macd_full_length() {
        let data: Vec<f64> = (0..50).map(|i| 100.0 + (i as f64) * 0.5).collect();
        let result = macd(&data, 12, 26, 9);
        assert_eq!(result.macd_line.len(), 50);
        assert_eq!(result.signal_line.len(), 50);
        assert_eq!(result.histogram.len(), 50);
    }

    #[test]
    fn test_macd_line_is_ema_difference() {
        let data: Vec<f64> = (0..30).map(|i| 10.0 + ((i * 3) % 7) as f64).collect();
        let result = macd(&data, 3, 6, 2);
        let fast = ema(&data, 3);
        let slow = ema(&data, 6);
        for i in 0..data.len() {
            assert!(approx_eq(result.macd_line[i], fast[i] - slow[i], EPSILON));
        }
        assert_eq!(result.signal_line, ema(&result.macd_line, 2));
    }

    #[test]
    fn test_macd_histogram_identity_exact() {
        let data: Vec<f64> = (0..80).map(|i| 50.0 + (i as f64 * 0.45).sin() * 4.0).collect();
        let result = macd(&data, 12, 26, 9);
        for i in 0..result.len() {
            assert_eq!(result.histogram[i], result.macd_line[i] - result.signal_line[i]);
        }
    }

    #[test]
    fn test_macd_starts_at_zero() {
        let data = vec![7.0_f64, 8.0, 9.0];
        let result = macd(&data, 12, 26, 9);
        assert_eq!(result.macd_line[0], 0.0);
        assert_eq!(result.signal_line[0], 0.0);
        assert_eq!(result.histogram[0], 0.0);
    }

    #[test]
    fn test_macd_uptrend_positive() {
        let data: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let result = macd(&data, 12, 26, 9);
        assert!(result.macd_line[1..].iter().all(|&v| v > 0.0));
    }

    #[test]
    fn test_macd_constant_input_is_flat() {
        let result = macd(&[42.0_f64; 40], 12, 26, 9);
        for i in 0..result.len() {
            assert!(approx_eq(result.macd_line[i], 0.0, LOOSE_EPSILON));
            assert!(approx_eq(result.histogram[i], 0.0, LOOSE_EPSILON));
        }
    }

    #[test]
    fn test_macd_empty_and_zero_periods() {
        let empty: Vec<f64> = vec![];
        assert!(macd(&empty, 12, 26, 9).is_empty());
        assert!(macd(&[1.0_f64, 2.0], 0, 26, 9).is_empty());
        assert!(macd(&[1.0_f64, 2.0], 12, 26, 0).is_empty());
    }

    #[test]
    fn test_macd_f32() {
        let data: Vec<f32> = (0..40).map(|i| 100.0 + i as f32 * 0.25).collect();
        let result = macd(&data, 12, 26, 9);
        assert_eq!(result.len(), 40);
    }

    #[test]
    fn test_macd_config() {
        let config = Macd::default();
        assert_eq!(config.get_fast_period(), 12);
        assert_eq!(config.get_slow_period(), 26);
        assert_eq!(config.get_signal_period(), 9);

        let data: Vec<f64> = (0..20).map(f64::from).collect();
        let custom = Macd::new().fast_period(2).slow_period(4).signal_period(3);
        assert_eq!(custom.compute(&data), macd(&data, 2, 4, 3));
    }

    #[test]
    fn test_macd_max_period() {
        let data = [1.0_f64, 2.0, 3.0];
        let result = macd(&data, 12, usize::MAX, 9);
        assert_eq!(result.len(), 3);
        let result = macd(&data, usize::MAX, usize::MAX, usize::MAX);
        assert!(result.histogram.iter().all(|v| v.is_finite()));
    }
}
