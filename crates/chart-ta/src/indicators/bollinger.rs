//! Bollinger Bands indicator.
//!
//! Bollinger Bands wrap a moving average in an envelope scaled by the rolling
//! volatility of the same window:
//!
//! - **Middle Band**: Simple Moving Average (SMA) of the price
//! - **Upper Band**: Middle Band + (multiplier × standard deviation)
//! - **Lower Band**: Middle Band - (multiplier × standard deviation)
//!
//! # Population Standard Deviation
//!
//! The deviation of each window divides by `period`, not `period - 1`:
//!
//! ```text
//! σ = sqrt(Σ(x - mean)² / period)
//! ```
//!
//! # Output Alignment
//!
//! All three bands share the SMA's length (`max(0, n - period + 1)`) and its
//! alignment: `band[j]` describes the window ending at input index
//! `j + period - 1`.
//!
//! # Example
//!
//! ```
//! use chart_ta::indicators::bollinger::bollinger;
//!
//! let prices = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! let bands = bollinger(&prices, 8, 2.0);
//!
//! assert_eq!(bands.len(), 1);
//! assert!((bands.middle[0] - 5.0).abs() < 1e-10);
//! assert!((bands.upper[0] - 9.0).abs() < 1e-10); // σ = 2
//! assert!((bands.lower[0] - 1.0).abs() < 1e-10);
//! ```

use crate::indicators::sma::{sma, sma_offset, sma_output_len};
use crate::traits::SeriesElement;

/// Returns the number of values in each band for an input of `input_len`.
#[inline]
#[must_use]
pub const fn bollinger_output_len(input_len: usize, period: usize) -> usize {
    sma_output_len(input_len, period)
}

/// Returns the input index that `band[0]` aligns with.
#[inline]
#[must_use]
pub const fn bollinger_offset(period: usize) -> usize {
    sma_offset(period)
}

/// The three bands produced by [`bollinger`].
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerOutput<T> {
    /// The middle band (Simple Moving Average).
    pub middle: Vec<T>,

    /// The upper band (middle + multiplier × σ).
    pub upper: Vec<T>,

    /// The lower band (middle - multiplier × σ).
    pub lower: Vec<T>,
}

impl<T> BollingerOutput<T> {
    /// Returns the length of each band.
    #[must_use]
    pub fn len(&self) -> usize {
        self.middle.len()
    }

    /// Returns true if the bands are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.middle.is_empty()
    }
}

/// Computes Bollinger Bands.
///
/// # Arguments
///
/// * `data` - The input price series
/// * `period` - The window length for the SMA and the deviation
/// * `multiplier` - Width of the bands in standard deviations (conventionally 2)
///
/// # Returns
///
/// A [`BollingerOutput`] whose bands are empty when the period is zero or
/// exceeds the data length, or when `multiplier` is negative or not finite.
///
/// # Performance
///
/// - Time complexity: O(n × period); each window's deviation is taken
///   around its own mean, which keeps the variance non-negative
/// - Space complexity: O(n) per band
#[must_use = "this returns the Bollinger bands, which should be used"]
pub fn bollinger<T: SeriesElement>(data: &[T], period: usize, multiplier: T) -> BollingerOutput<T> {
    if !multiplier.is_finite() || multiplier < T::zero() {
        return BollingerOutput {
            middle: Vec::new(),
            upper: Vec::new(),
            lower: Vec::new(),
        };
    }

    let middle = sma(data, period);
    let len = middle.len();

    let mut upper = Vec::with_capacity(len);
    let mut lower = Vec::with_capacity(len);

    if len > 0 {
        let period_t = T::from_len(period);
        for (start, &mean) in middle.iter().enumerate() {
            let window = &data[start..start + period];
            let variance = window
                .iter()
                .fold(T::zero(), |acc, &x| acc + (x - mean) * (x - mean))
                / period_t;
            let width = multiplier * variance.sqrt();
            upper.push(mean + width);
            lower.push(mean - width);
        }
    }

    BollingerOutput {
        middle,
        upper,
        lower,
    }
}

/// Bollinger Bands configuration with a fluent builder API.
///
/// Defaults to period 20 and multiplier 2.0.
///
/// ```
/// use chart_ta::indicators::bollinger::Bollinger;
///
/// let prices: Vec<f64> = (0..30).map(|i| 100.0 + (i as f64 * 0.4).sin()).collect();
/// let bands = Bollinger::new().period(10).multiplier(2.5).compute(&prices);
/// assert_eq!(bands.len(), 21);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bollinger {
    period: usize,
    multiplier: f64,
}

impl Default for Bollinger {
    /// Creates a Bollinger Bands configuration with standard parameters (20, 2.0).
    fn default() -> Self {
        Self {
            period: 20,
            multiplier: 2.0,
        }
    }
}

impl Bollinger {
    /// Creates a new Bollinger Bands configuration with standard parameters (20, 2.0).
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

    /// Sets the band width in standard deviations.
    #[must_use]
    pub const fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Returns the window length.
    #[must_use]
    pub const fn get_period(&self) -> usize {
        self.period
    }

    /// Returns the band width multiplier.
    #[must_use]
    pub const fn get_multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Computes Bollinger Bands using the configured parameters.
    #[must_use]
    pub fn compute<T: SeriesElement>(&self, data: &[T]) -> BollingerOutput<T> {
        bollinger(data, self.period, T::from_param(self.multiplier))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::utils::{approx_eq, EPSILON};

    #[test]
    fn test_bollinger_population_stddev() {
        // mean 5, population σ 2 (sample σ would be ~2.138)
        let prices = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let bands = bollinger(&prices, 8, 2.0);
        assert!(approx_eq(bands.middle[0], 5.0, EPSILON));
        assert!(approx_eq(bands.upper[0], 9.0, EPSILON));
        assert!(approx_eq(bands.lower[0], 1.0, EPSILON));
    }

    #[test]
    fn test_bollinger_alignment_matches_sma() {
        let prices: Vec<f64> = (0..25).map(|i| 10.0 + (i % 4) as f64).collect();
        let bands = bollinger(&prices, 5, 2.0);
        assert_eq!(bands.len(), sma(&prices, 5).len());
        assert_eq!(bands.upper.len(), bands.len());
        assert_eq!(bands.lower.len(), bands.len());
        assert_eq!(bands.middle, sma(&prices, 5));
    }

    #[test]
    fn test_bollinger_ordering() {
        let prices: Vec<f64> = (0..60).map(|i| 50.0 + (i as f64 * 0.7).sin() * 5.0).collect();
        let bands = bollinger(&prices, 10, 2.0);
        for i in 0..bands.len() {
            assert!(bands.lower[i] <= bands.middle[i]);
            assert!(bands.middle[i] <= bands.upper[i]);
        }
    }

    #[test]
    fn test_bollinger_constant_input_collapses() {
        let bands = bollinger(&[3.0_f64; 10], 4, 2.0);
        for i in 0..bands.len() {
            assert!(approx_eq(bands.upper[i], 3.0, EPSILON));
            assert!(approx_eq(bands.lower[i], 3.0, EPSILON));
        }
    }

    #[test]
    fn test_bollinger_invalid_period_is_empty() {
        assert!(bollinger(&[1.0_f64, 2.0], 0, 2.0).is_empty());
        assert!(bollinger(&[1.0_f64, 2.0], 3, 2.0).is_empty());
    }

    #[test]
    fn test_bollinger_degenerate_multiplier_is_empty() {
        let prices = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!(bollinger(&prices, 4, -1.0).is_empty());
        assert!(bollinger(&prices, 4, f64::NAN).is_empty());
        assert!(bollinger(&prices, 4, f64::INFINITY).is_empty());
        let bands = bollinger(&prices, 4, -1.0);
        assert!(bands.upper.is_empty() && bands.lower.is_empty());
        assert_eq!(bollinger(&prices, 4, 0.0).upper, sma(&prices, 4));
    }

    #[test]
    fn test_bollinger_config() {
        let config = Bollinger::default();
        assert_eq!(config.get_period(), 20);
        assert!(approx_eq(config.get_multiplier(), 2.0, EPSILON));

        let prices = [2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let bands = Bollinger::new().period(8).multiplier(1.0).compute(&prices);
        assert!(approx_eq(bands.upper[0], 7.0, EPSILON));
    }

    #[test]
    fn test_bollinger_offset() {
        assert_eq!(bollinger_offset(20), 19);
        assert_eq!(bollinger_output_len(25, 20), 6);
    }
}
