//! Batch adaptation for dashboards.
//!
//! A dashboard shows many widgets at once, each a `(modality, data)` pair
//! sharing one set of options. [`BatchAdapter`] adapts them together, using
//! Rayon when the `parallel` feature is enabled and the batch is large
//! enough to pay for the thread hand-off.
//!
//! # Feature Flag
//!
//! ```toml
//! [dependencies]
//! chart-ta = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! Without the feature every method runs sequentially with the same results.
//!
//! # Example
//!
//! ```
//! use chart_ta::adapter::{ChartData, ChartOptions, Modality};
//! use chart_ta::batch::{BatchAdapter, BatchRequest};
//!
//! let prices: Vec<f64> = (0..50).map(|i| 100.0 + (i % 7) as f64).collect();
//! let requests = vec![
//!     BatchRequest::new(Modality::Rsi, ChartData::Prices(prices.clone())),
//!     BatchRequest::new(Modality::Macd, ChartData::Prices(prices)),
//! ];
//!
//! let descriptions = BatchAdapter::new(ChartOptions::default())
//!     .try_adapt_all(&requests)
//!     .unwrap();
//! assert_eq!(descriptions.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::adapter::{adapt, ChartData, ChartOptions, ChartSeriesDescription, Modality};
use crate::error::Result;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One widget's request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Chart type to shape for.
    pub modality: Modality,
    /// The widget's observations.
    pub data: ChartData,
}

impl BatchRequest {
    /// Creates a request.
    #[must_use]
    pub const fn new(modality: Modality, data: ChartData) -> Self {
        Self { modality, data }
    }
}

/// Adapts many requests with shared options.
#[derive(Debug, Clone)]
pub struct BatchAdapter {
    options: ChartOptions,
    /// Minimum number of requests before work is spread across threads.
    min_parallel_threshold: usize,
}

impl Default for BatchAdapter {
    fn default() -> Self {
        Self::new(ChartOptions::default())
    }
}

impl BatchAdapter {
    /// Creates a batch adapter that applies `options` to every request.
    #[must_use]
    pub const fn new(options: ChartOptions) -> Self {
        Self {
            options,
            min_parallel_threshold: 16,
        }
    }

    /// Sets the minimum batch size for parallel processing.
    ///
    /// Smaller batches run sequentially to avoid thread overhead.
    #[must_use]
    pub fn min_parallel_threshold(mut self, threshold: usize) -> Self {
        self.min_parallel_threshold = threshold;
        self
    }

    /// The shared options.
    #[must_use]
    pub const fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Adapts every request, keeping each result separate.
    ///
    /// One widget's failure does not affect the others. Results are in
    /// request order.
    #[must_use]
    pub fn adapt_all(&self, requests: &[BatchRequest]) -> Vec<Result<ChartSeriesDescription>> {
        log::debug!("adapting batch of {} requests", requests.len());
        self.process(requests, |request| {
            adapt(request.modality, &request.data, &self.options)
        })
    }

    /// Adapts every request, failing on the first error.
    ///
    /// # Errors
    ///
    /// Returns the error of the earliest failing request.
    pub fn try_adapt_all(&self, requests: &[BatchRequest]) -> Result<Vec<ChartSeriesDescription>> {
        self.adapt_all(requests).into_iter().collect()
    }

    /// Runs `f` over every item, in parallel for large enough batches.
    #[cfg(feature = "parallel")]
    pub fn process<I, F, R>(&self, items: &[I], f: F) -> Vec<R>
    where
        I: Sync,
        F: Fn(&I) -> R + Send + Sync,
        R: Send,
    {
        if items.len() < self.min_parallel_threshold {
            items.iter().map(f).collect()
        } else {
            items.par_iter().map(f).collect()
        }
    }

    /// Sequential version when the parallel feature is disabled.
    #[cfg(not(feature = "parallel"))]
    pub fn process<I, F, R>(&self, items: &[I], f: F) -> Vec<R>
    where
        F: Fn(&I) -> R,
    {
        items.iter().map(f).collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::error::Error;
    use crate::indicators::sma;

    fn prices(n: usize) -> Vec<f64> {
        (0..n).map(|i| 50.0 + ((i * 7) % 11) as f64).collect()
    }

    #[test]
    fn test_adapt_all_keeps_order_and_failures() {
        let requests = vec![
            BatchRequest::new(Modality::Rsi, ChartData::Prices(prices(40))),
            BatchRequest::new(Modality::Heatmap, ChartData::Prices(prices(5))),
            BatchRequest::new(Modality::Macd, ChartData::Prices(prices(40))),
        ];
        let results = BatchAdapter::default().adapt_all(&requests);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().modality, Modality::Rsi);
        assert!(matches!(results[1], Err(Error::InputMismatch { .. })));
        assert_eq!(results[2].as_ref().unwrap().modality, Modality::Macd);
    }

    #[test]
    fn test_try_adapt_all_fails_fast() {
        let requests = vec![
            BatchRequest::new(Modality::Treemap, ChartData::Bars(Vec::new())),
            BatchRequest::new(Modality::Treemap, ChartData::Prices(vec![1.0])),
        ];
        assert!(BatchAdapter::default().try_adapt_all(&requests).is_err());
    }

    #[test]
    fn test_matches_individual_adapt() {
        let requests: Vec<BatchRequest> = (10..40)
            .map(|n| BatchRequest::new(Modality::Rsi, ChartData::Prices(prices(n))))
            .collect();
        let batch = BatchAdapter::default()
            .min_parallel_threshold(4)
            .try_adapt_all(&requests)
            .unwrap();
        for (request, desc) in requests.iter().zip(&batch) {
            let single = adapt(request.modality, &request.data, &ChartOptions::default()).unwrap();
            assert_eq!(&single, desc);
        }
    }

    #[test]
    fn test_process_indicator_series() {
        let series = vec![prices(10), prices(20)];
        let results = BatchAdapter::default().process(&series, |s| sma(s, 3));
        assert_eq!(results[0].len(), 8);
        assert_eq!(results[1].len(), 18);
    }
}
