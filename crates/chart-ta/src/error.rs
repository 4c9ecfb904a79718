//! Error types for chart-ta.
//!
//! Indicator functions never fail: degenerate input (empty data, a zero
//! period, a period longer than the data) yields an empty output. The errors
//! below cover the caller-contract violations and collaborator failures that
//! the adapter and controller surface.

use thiserror::Error;

use crate::adapter::Modality;
use crate::indicators::IndicatorKind;

/// The main error type for chart-ta operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A modality name outside the supported set was requested.
    #[error("unknown chart modality '{name}'")]
    UnknownModality {
        /// The name that failed to parse.
        name: String,
    },

    /// An indicator name outside the supported set was requested.
    #[error("unknown indicator '{name}'")]
    UnknownIndicator {
        /// The name that failed to parse.
        name: String,
    },

    /// An export format outside `png|pdf|svg|csv`, or one a sink cannot produce.
    #[error("unsupported export format '{format}'")]
    UnsupportedFormat {
        /// The requested format.
        format: String,
    },

    /// The supplied data does not match what the modality consumes.
    ///
    /// This is a programmer error: the caller paired a modality with the
    /// wrong kind of input.
    #[error("modality {modality} cannot consume {found} input")]
    InputMismatch {
        /// The requested modality.
        modality: Modality,
        /// The kind of input that was supplied.
        found: &'static str,
    },

    /// An indicator was requested on a modality that has nowhere to draw it.
    #[error("indicator {kind} is not supported on {modality} charts")]
    UnsupportedIndicator {
        /// The indicator kind.
        kind: IndicatorKind,
        /// The modality of the chart.
        modality: Modality,
    },

    /// An OHLC bar violates the price-range or timestamp-ordering invariants.
    #[error("invalid bar at index {index}: {reason}")]
    InvalidBar {
        /// Position of the offending bar in the input.
        index: usize,
        /// Which invariant failed.
        reason: &'static str,
    },

    /// The renderer rejected a description.
    #[error("render failed: {message}")]
    Render {
        /// Message reported by the renderer.
        message: String,
    },

    /// The export sink failed to produce the requested artifact.
    #[error("export to {format} failed: {message}")]
    Export {
        /// The requested format.
        format: String,
        /// Message reported by the sink.
        message: String,
    },

    /// Encoding a description as JSON or CSV failed.
    #[error("serialization failed: {message}")]
    Serialization {
        /// The underlying encoder message.
        message: String,
    },
}

/// Convenience type alias for Results using the chart-ta Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}
