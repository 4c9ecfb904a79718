//! Technical analysis indicators.
//!
//! Pure, stateless functions over flat numeric series. None of them mutate
//! their input and none of them fail: a zero period, empty input, or a period
//! longer than the data produces an empty output.
//!
//! # Indicators
//!
//! - [`sma`] - Simple Moving Average over complete windows only
//! - [`ema`] - Exponential Moving Average seeded by the first observation
//! - [`bollinger`] - SMA envelope of ± multiplier population standard deviations
//! - [`rsi`] - Relative Strength Index with Wilder smoothing
//! - [`macd`] - MACD line, signal line and histogram
//!
//! # Output Lengths and Alignment
//!
//! | Indicator | Output length | `output[0]` aligns with input index |
//! |---|---|---|
//! | SMA, Bollinger | `max(0, n - period + 1)` | `period - 1` |
//! | EMA, MACD | `n` | `0` |
//! | RSI | `max(0, n - 1 - period)` | `period + 1` |
//!
//! Each module exposes `*_output_len` (and `*_offset` where it is non-zero)
//! so callers can align outputs without recomputing them.
//!
//! # Example
//!
//! ```
//! use chart_ta::indicators::{ema, rsi, sma};
//!
//! let prices = vec![44.0_f64, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0];
//!
//! assert_eq!(sma(&prices, 5).len(), 6);
//! assert_eq!(ema(&prices, 5).len(), 10);
//! assert_eq!(rsi(&prices, 5).len(), 4);
//! ```

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod series;
pub mod sma;

pub use bollinger::{
    bollinger, bollinger_offset, bollinger_output_len, Bollinger, BollingerOutput,
};
pub use ema::{ema, ema_alpha, ema_output_len, ema_with_alpha, Ema};
pub use macd::{macd, macd_output_len, Macd, MacdOutput};
pub use rsi::{rsi, rsi_offset, rsi_output_len, Rsi};
pub use series::{IndicatorConfig, IndicatorKind, IndicatorSeries};
pub use sma::{sma, sma_offset, sma_output_len, Sma};
