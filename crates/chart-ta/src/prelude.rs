//! Commonly used types and traits for convenient importing.
//!
//! ```
//! use chart_ta::prelude::*;
//!
//! let prices = vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//!
//! let sma_result = sma(&prices, 3);
//! let rsi_result = rsi(&prices, 5);
//! assert_eq!(sma_result.len(), 8);
//! assert_eq!(rsi_result.len(), 4);
//!
//! let desc = adapt(Modality::Rsi, &ChartData::Prices(prices), &ChartOptions::default()).unwrap();
//! assert!(!desc.is_no_data());
//! ```

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::SeriesElement;

// Indicator functions and configuration types
pub use crate::indicators::{
    bollinger, ema, ema_with_alpha, macd, rsi, sma, Bollinger, BollingerOutput,
    Ema, IndicatorConfig, IndicatorKind, IndicatorSeries, Macd, MacdOutput, Rsi, Sma,
};

// Alignment helpers
pub use crate::indicators::{
    bollinger_offset, bollinger_output_len, ema_output_len, macd_output_len, rsi_offset,
    rsi_output_len, sma_offset, sma_output_len,
};

// Data model
pub use crate::types::{HeatmapCell, OhlcBar, TreemapNode, VolumeProfileLevel};

// Adapter
pub use crate::adapter::{
    adapt, adapt_named, ChartData, ChartOptions, ChartSeriesDescription, Modality, PaneLayout,
};

// Controller and export
pub use crate::controller::{ChartController, ExportFormat, ExportSink, ExportSource, Renderer};
pub use crate::export::DataExporter;
