//! Simple Moving Average (SMA) indicator.
//!
//! The Simple Moving Average is the arithmetic mean of a trailing window of
//! fixed length.
//!
//! # Algorithm
//!
//! O(n) rolling sum:
//! 1. The sum of the first `period` elements seeds the window
//! 2. Each step adds the entering value and subtracts the leaving one
//!
//! # Output Alignment
//!
//! Only complete windows produce output, so the result is shorter than the
//! input: `output[j]` is the mean of the window ending at input index
//! `j + period - 1`.
//!
//! ```text
//! len(SMA) = max(0, n - period + 1)
//! ```
//!
//! A zero period or a period longer than the data yields an empty vector.
//!
//! # Example
//!
//! ```
//! use chart_ta::indicators::sma::sma;
//!
//! let result = sma(&[1.0_f64, 2.0, 3.0, 4.0, 5.0], 3);
//! assert_eq!(result, vec![2.0, 3.0, 4.0]);
//! ```

use crate::traits::SeriesElement;

/// Returns the number of SMA values produced for an input of `input_len`.
///
/// ```
/// use chart_ta::indicators::sma::sma_output_len;
///
/// assert_eq!(sma_output_len(5, 3), 3);
/// assert_eq!(sma_output_len(2, 3), 0);
/// assert_eq!(sma_output_len(5, 0), 0);
/// ```
#[inline]
#[must_use]
pub const fn sma_output_len(input_len: usize, period: usize) -> usize {
    if period == 0 || period > input_len {
        0
    } else {
        input_len - period + 1
    }
}

/// Returns the input index that `output[0]` of an SMA aligns with.
#[inline]
#[must_use]
pub const fn sma_offset(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Computes the Simple Moving Average of a data series.
///
/// # Arguments
///
/// * `data` - The input data series
/// * `period` - The number of values in each window
///
/// # Returns
///
/// A vector of `max(0, data.len() - period + 1)` means. Empty when the period
/// is zero or exceeds the data length.
///
/// # Performance
///
/// - Time complexity: O(n)
/// - Space complexity: O(n) for the output vector
#[must_use = "this returns the SMA values, which should be used"]
pub fn sma<T: SeriesElement>(data: &[T], period: usize) -> Vec<T> {
    let len = sma_output_len(data.len(), period);
    let mut output = Vec::with_capacity(len);
    if len == 0 {
        return output;
    }

    let period_t = T::from_len(period);
    let mut sum = data[..period].iter().fold(T::zero(), |acc, &x| acc + x);
    output.push(sum / period_t);

    for i in period..data.len() {
        sum = sum + data[i] - data[i - period];
        output.push(sum / period_t);
    }

    output
}

/// SMA configuration with a fluent builder API.
///
/// Defaults to a 20-period average.
///
/// ```
/// use chart_ta::indicators::sma::Sma;
///
/// let closes = [1.0_f64, 2.0, 3.0, 4.0];
/// assert_eq!(Sma::new().period(2).compute(&closes), vec![1.5, 2.5, 3.5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sma {
    period: usize,
}

impl Default for Sma {
    fn default() -> Self {
        Self { period: 20 }
    }
}

impl Sma {
    /// Creates an SMA configuration with the default period (20).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window length.
    #[must_use]
    pub const fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Returns the window length.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Computes the SMA using the configured period.
    #[must_use]
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Vec<T> {
        sma(data, self.period)
    }
}
