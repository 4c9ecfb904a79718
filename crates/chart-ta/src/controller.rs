//! Stateful chart controller.
//!
//! [`ChartController`] owns one chart's modality, data, and options, plus the
//! last description and rendered artifact. Every mutation re-runs the pure
//! adapter and hands the result to a [`Renderer`]; exports go through an
//! [`ExportSink`].
//!
//! Mutations are all-or-nothing: if adapting or rendering fails, the
//! controller keeps its previous state.
//!
//! # Example
//!
//! ```
//! use chart_ta::adapter::{ChartData, ChartOptions, ChartSeriesDescription, Modality};
//! use chart_ta::controller::{ChartController, Renderer};
//! use chart_ta::export::DataExporter;
//! use chart_ta::indicators::IndicatorConfig;
//! use chart_ta::types::OhlcBar;
//! use chart_ta::Result;
//!
//! struct SeriesCounter;
//!
//! impl Renderer for SeriesCounter {
//!     type Artifact = usize;
//!
//!     fn render(&mut self, description: &ChartSeriesDescription) -> Result<usize> {
//!         Ok(description.series.len())
//!     }
//! }
//!
//! let bars: Vec<OhlcBar> = (0..30)
//!     .map(|i| OhlcBar::new(i * 60_000, 10.0, 11.0, 9.0, 10.0 + (i % 3) as f64 * 0.3))
//!     .collect();
//!
//! let mut chart = ChartController::new(
//!     Modality::Candlestick,
//!     ChartData::Bars(bars),
//!     ChartOptions::default(),
//!     SeriesCounter,
//!     DataExporter::new(),
//! )
//! .unwrap();
//!
//! chart.add_indicator(IndicatorConfig::Sma { period: 5 }).unwrap();
//! assert_eq!(*chart.artifact(), 2);
//! ```

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::adapter::{adapt, ChartData, ChartOptions, ChartSeriesDescription, Modality};
use crate::error::{Error, Result};
use crate::indicators::{IndicatorConfig, IndicatorKind};

/// Output formats an export can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Raster image of the rendered chart.
    Png,
    /// PDF document of the rendered chart.
    Pdf,
    /// Vector image of the rendered chart.
    Svg,
    /// The chart's data points.
    Csv,
}

impl ExportFormat {
    /// Returns the lowercase name, which is also the file extension.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Pdf => "pdf",
            Self::Svg => "svg",
            Self::Csv => "csv",
        }
    }

    /// Returns true for formats produced from the rendered artifact.
    #[must_use]
    pub const fn is_image(self) -> bool {
        !matches!(self, Self::Csv)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "pdf" => Ok(Self::Pdf),
            "svg" => Ok(Self::Svg),
            "csv" => Ok(Self::Csv),
            _ => Err(Error::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// What an export sink receives.
#[derive(Debug, Clone, Copy)]
pub enum ExportSource<'a, A> {
    /// The rendered artifact, for image formats.
    Rendered(&'a A),
    /// The chart description, for data formats.
    Data(&'a ChartSeriesDescription),
}

/// Turns a chart description into a drawable artifact.
///
/// Failures should be reported as [`Error::Render`].
pub trait Renderer {
    /// Whatever the renderer produces: a widget handle, a scene, an image.
    type Artifact: Sync;

    /// Renders `description`.
    ///
    /// # Errors
    ///
    /// Implementation-defined; the controller propagates it unchanged.
    fn render(&mut self, description: &ChartSeriesDescription) -> Result<Self::Artifact>;
}

/// Serializes a chart into bytes of a given format.
#[async_trait]
pub trait ExportSink<A: Sync>: Send + Sync {
    /// Exports `source` as `format`.
    ///
    /// # Errors
    ///
    /// Any failure; the controller reports it as [`Error::Export`].
    async fn export(&self, source: ExportSource<'_, A>, format: ExportFormat) -> Result<Vec<u8>>;
}

/// Holds one chart's state and keeps its rendering current.
pub struct ChartController<R: Renderer, S> {
    modality: Modality,
    data: ChartData,
    options: ChartOptions,
    description: ChartSeriesDescription,
    artifact: R::Artifact,
    renderer: R,
    sink: S,
}

impl<R, S> ChartController<R, S>
where
    R: Renderer,
    S: ExportSink<R::Artifact>,
{
    /// Creates a controller and renders the initial chart.
    ///
    /// # Errors
    ///
    /// Returns any adapter error (e.g. an overlay the modality cannot draw)
    /// or the renderer's error.
    pub fn new(
        modality: Modality,
        data: ChartData,
        options: ChartOptions,
        mut renderer: R,
        sink: S,
    ) -> Result<Self> {
        let (description, artifact) = Self::build(&mut renderer, modality, &data, &options)?;
        Ok(Self {
            modality,
            data,
            options,
            description,
            artifact,
            renderer,
            sink,
        })
    }

    /// Adds an indicator and re-renders.
    ///
    /// Returns `false` without re-rendering if an identical configuration is
    /// already present.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedIndicator`] if the modality cannot draw `config`,
    /// or the renderer's error.
    pub fn add_indicator(&mut self, config: IndicatorConfig) -> Result<bool> {
        if !self.modality.supports(config.kind()) {
            return Err(Error::UnsupportedIndicator {
                kind: config.kind(),
                modality: self.modality,
            });
        }
        if self.options.indicators.contains(&config) {
            log::debug!("{}: {} already present", self.modality, config.label());
            return Ok(false);
        }

        let mut options = self.options.clone();
        options.indicators.push(config);
        self.commit(None, Some(options))?;
        Ok(true)
    }

    /// Removes every indicator of `kind`, re-rendering if any were removed.
    ///
    /// Returns how many were removed.
    ///
    /// # Errors
    ///
    /// The renderer's error.
    pub fn remove_indicator(&mut self, kind: IndicatorKind) -> Result<usize> {
        let mut options = self.options.clone();
        options.indicators.retain(|config| config.kind() != kind);
        let removed = self.options.indicators.len() - options.indicators.len();
        if removed > 0 {
            self.commit(None, Some(options))?;
        }
        Ok(removed)
    }

    /// Replaces the chart data and re-renders.
    ///
    /// # Errors
    ///
    /// [`Error::InputMismatch`] if `data` is not what the modality consumes,
    /// or the renderer's error.
    pub fn update_data(&mut self, data: ChartData) -> Result<()> {
        self.commit(Some(data), None)
    }

    /// Exports the chart.
    ///
    /// Image formats hand the rendered artifact to the sink; `csv` hands it
    /// the current description.
    ///
    /// # Errors
    ///
    /// [`Error::Export`] carrying the sink's message. Failures are not
    /// retried.
    pub async fn export_chart(&self, format: ExportFormat) -> Result<Vec<u8>> {
        let source = if format.is_image() {
            ExportSource::Rendered(&self.artifact)
        } else {
            ExportSource::Data(&self.description)
        };

        match self.sink.export(source, format).await {
            Ok(bytes) => {
                log::debug!("{}: exported {} bytes as {format}", self.modality, bytes.len());
                Ok(bytes)
            }
            Err(err) => {
                log::warn!("{}: export to {format} failed: {err}", self.modality);
                Err(match err {
                    Error::Export { .. } => err,
                    other => Error::Export {
                        format: format.to_string(),
                        message: other.to_string(),
                    },
                })
            }
        }
    }

    /// The current description.
    #[must_use]
    pub const fn description(&self) -> &ChartSeriesDescription {
        &self.description
    }

    /// The artifact from the last successful render.
    #[must_use]
    pub const fn artifact(&self) -> &R::Artifact {
        &self.artifact
    }

    /// The chart's modality.
    #[must_use]
    pub const fn modality(&self) -> Modality {
        self.modality
    }

    /// The current data.
    #[must_use]
    pub const fn data(&self) -> &ChartData {
        &self.data
    }

    /// The current options, including the indicator list.
    #[must_use]
    pub const fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// The active indicators, in insertion order.
    #[must_use]
    pub fn indicators(&self) -> &[IndicatorConfig] {
        &self.options.indicators
    }

    fn commit(&mut self, data: Option<ChartData>, options: Option<ChartOptions>) -> Result<()> {
        let data_ref = data.as_ref().unwrap_or(&self.data);
        let options_ref = options.as_ref().unwrap_or(&self.options);
        let (description, artifact) =
            Self::build(&mut self.renderer, self.modality, data_ref, options_ref)?;

        if let Some(data) = data {
            self.data = data;
        }
        if let Some(options) = options {
            self.options = options;
        }
        self.description = description;
        self.artifact = artifact;
        Ok(())
    }

    fn build(
        renderer: &mut R,
        modality: Modality,
        data: &ChartData,
        options: &ChartOptions,
    ) -> Result<(ChartSeriesDescription, R::Artifact)> {
        let description = adapt(modality, data, options)?;
        let artifact = renderer.render(&description).map_err(|err| {
            log::warn!("{modality}: render failed: {err}");
            err
        })?;
        Ok((description, artifact))
    }
}

impl<R, S> fmt::Debug for ChartController<R, S>
where
    R: Renderer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartController")
            .field("modality", &self.modality)
            .field("observations", &self.data.len())
            .field("indicators", &self.options.indicators)
            .finish_non_exhaustive()
    }
}
