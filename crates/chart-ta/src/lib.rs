//! chart-ta: technical indicators and chart-data shaping
//!
//! This crate turns raw market observations into derived indicator series
//! and renderer-agnostic chart descriptions.
//!
//! # Layers
//!
//! - [`indicators`]: SMA, EMA, Bollinger Bands, RSI and MACD over flat
//!   numeric series, generic over `f32` and `f64`
//! - [`adapter`]: maps typed observations and a chart [`Modality`] to a
//!   [`ChartSeriesDescription`]
//! - [`controller`]: holds one chart's state and drives a [`Renderer`] and an
//!   [`ExportSink`](controller::ExportSink)
//! - [`export`]: CSV and JSON serialization of descriptions
//! - [`batch`]: adapts many widgets at once, optionally in parallel
//!
//! # Quick Start
//!
//! ```
//! use chart_ta::prelude::*;
//!
//! let bars: Vec<OhlcBar> = (0..40)
//!     .map(|i| {
//!         let close = 100.0 + (i as f64 * 0.4).sin() * 2.0;
//!         OhlcBar::new(i * 60_000, close, close + 1.0, close - 1.0, close).with_volume(1_000.0)
//!     })
//!     .collect();
//!
//! let options = ChartOptions::default().indicator(IndicatorConfig::Ema { period: 10 });
//! let desc = adapt(Modality::Candlestick, &ChartData::Bars(bars), &options).unwrap();
//!
//! // candles, volume columns, EMA line
//! assert_eq!(desc.series.len(), 3);
//! assert_eq!(desc.axes.y[1].top_percent, 75.0);
//! ```
//!
//! # Error Handling
//!
//! Indicator functions never fail; degenerate input gives empty output:
//!
//! ```
//! use chart_ta::indicators::sma;
//!
//! assert!(sma(&[1.0_f64, 2.0], 10).is_empty());
//! assert!(sma(&[1.0_f64, 2.0], 0).is_empty());
//! ```
//!
//! The adapter and controller return [`Result`] for caller-contract
//! violations such as pairing a modality with the wrong kind of data.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![warn(clippy::needless_collect)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::useless_conversion)]
#![allow(clippy::module_name_repetitions)]

pub mod adapter;
pub mod batch;
pub mod controller;
pub mod error;
pub mod export;
pub mod indicators;
pub mod prelude;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use adapter::{adapt, ChartData, ChartOptions, ChartSeriesDescription, Modality};
pub use controller::{ChartController, ExportFormat, Renderer};
pub use error::{Error, Result};
pub use traits::SeriesElement;
pub use utils::{approx_eq, EPSILON, LOOSE_EPSILON};
