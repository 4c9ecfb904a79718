//! Relative Strength Index (RSI) indicator.
//!
//! The RSI is a momentum oscillator bounded to `[0, 100]`. Readings above 70
//! are conventionally read as overbought and readings below 30 as oversold.
//!
//! # Algorithm
//!
//! ```text
//! Change[i] = Price[i] - Price[i-1]            i = 1..n-1
//! Gain[j]   = max(Change[j+1], 0)              j = 0..n-2
//! Loss[j]   = max(-Change[j+1], 0)
//!
//! AvgGain   = mean(Gain[0..period])            (seed, no output)
//! AvgLoss   = mean(Loss[0..period])
//!
//! for j in period..len(Gain):
//!     AvgGain = (AvgGain * (period-1) + Gain[j]) / period
//!     AvgLoss = (AvgLoss * (period-1) + Loss[j]) / period
//!     RSI     = 100 - 100 / (1 + AvgGain / AvgLoss)
//! ```
//!
//! # Output Alignment
//!
//! The seed window emits nothing; the first value comes from the first
//! smoothing step. The output therefore has `len(Gain) - period` values,
//! `period + 1` fewer than the input, and `output[j]` aligns with input
//! index `j + period + 1`. Downstream charts depend on this alignment.
//!
//! # Boundary Conditions
//!
//! - **No losses** (`AvgLoss == 0`): RSI = 100. The ratio is infinite; the
//!   value is set explicitly instead of relying on float division, which also
//!   keeps a perfectly flat series at 100 rather than NaN.
//! - **No gains**: RSI = 0.
//!
//! # Example
//!
//! ```
//! use chart_ta::indicators::rsi::rsi;
//!
//! let rising: Vec<f64> = (0..20).map(f64::from).collect();
//! let result = rsi(&rising, 14);
//!
//! assert_eq!(result.len(), 20 - 14 - 1);
//! assert!(result.iter().all(|&v| v == 100.0));
//! ```

use crate::traits::SeriesElement;

/// Returns the number of RSI values produced for an input of `input_len`.
///
/// ```
/// use chart_ta::indicators::rsi::rsi_output_len;
///
/// assert_eq!(rsi_output_len(20, 14), 5);
/// assert_eq!(rsi_output_len(15, 14), 0);
/// ```
#[inline]
#[must_use]
pub const fn rsi_output_len(input_len: usize, period: usize) -> usize {
    if period == 0 {
        0
    } else {
        input_len.saturating_sub(1).saturating_sub(period)
    }
}

/// Returns the input index that `output[0]` of an RSI aligns with.
#[inline]
#[must_use]
pub const fn rsi_offset(period: usize) -> usize {
    period.saturating_add(1)
}

/// Computes the Relative Strength Index using Wilder's smoothing.
///
/// # Arguments
///
/// * `data` - The input price series
/// * `period` - The smoothing period (commonly 14)
///
/// # Returns
///
/// A vector of `max(0, data.len() - 1 - period)` values in `[0, 100]`.
/// Empty for a zero period or too little data.
///
/// # Performance
///
/// - Time complexity: O(n)
/// - Space complexity: O(n) for the gain/loss buffers and the output
#[must_use = "this returns the RSI values, which should be used"]
pub fn rsi<T: SeriesElement>(data: &[T], period: usize) -> Vec<T> {
    let len = rsi_output_len(data.len(), period);
    let mut output = Vec::with_capacity(len);
    if len == 0 {
        return output;
    }

    let (gains, losses): (Vec<T>, Vec<T>) = data
        .windows(2)
        .map(|pair| {
            let change = pair[1] - pair[0];
            (change.max(T::zero()), (-change).max(T::zero()))
        })
        .unzip();

    let period_t = T::from_len(period);
    let smoothing = T::from_len(period - 1);

    let mut avg_gain = gains[..period].iter().fold(T::zero(), |acc, &g| acc + g) / period_t;
    let mut avg_loss = losses[..period].iter().fold(T::zero(), |acc, &l| acc + l) / period_t;

    for j in period..gains.len() {
        avg_gain = (avg_gain * smoothing + gains[j]) / period_t;
        avg_loss = (avg_loss * smoothing + losses[j]) / period_t;
        output.push(rsi_value(avg_gain, avg_loss));
    }

    output
}

/// Maps smoothed averages to an RSI reading, normalizing the zero-loss case.
#[inline]
fn rsi_value<T: SeriesElement>(avg_gain: T, avg_loss: T) -> T {
    let hundred = T::hundred();
    if avg_loss == T::zero() {
        return hundred;
    }
    hundred - hundred / (T::one() + avg_gain / avg_loss)
}

/// RSI configuration with a fluent builder API.
///
/// Defaults to period 14.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    /// Creates an RSI configuration with the default period (14).
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

    /// Computes the RSI using the configured period.
    #[must_use]
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> Vec<T> {
        rsi(data, self.period)
    }
}
