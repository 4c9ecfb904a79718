//! Integration tests for the public API.
//!
//! These tests drive the crate the way an application does: typed
//! observations in, chart descriptions and exports out.

#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]

mod common;

use chart_ta::adapter::{adapt_named, AxisKind, SeriesData, SeriesKind};
use chart_ta::batch::{BatchAdapter, BatchRequest};
use chart_ta::export::{to_json, to_json_pretty};
use chart_ta::prelude::*;
use chart_ta::types::validate_bars;

use common::{approx_eq, sample_bars, sample_cells, sample_levels, sample_nodes, sample_prices, EPSILON};

/// Keeps the description it was handed so tests can inspect what the
/// controller rendered.
#[derive(Default)]
struct SnapshotRenderer {
    renders: usize,
}

impl Renderer for SnapshotRenderer {
    type Artifact = String;

    fn render(&mut self, description: &ChartSeriesDescription) -> Result<String> {
        self.renders += 1;
        to_json(description)
    }
}

// ==================== Indicators ====================

#[test]
fn test_indicator_literals() {
    assert_eq!(sma(&[1.0_f64, 2.0, 3.0, 4.0, 5.0], 3), vec![2.0, 3.0, 4.0]);

    let e = ema(&[10.0_f64, 20.0, 30.0], 3);
    assert_eq!(e, vec![10.0, 15.0, 22.5]);
}

#[test]
fn test_indicator_alignment_helpers() {
    let prices = sample_prices();
    let n = prices.len();

    assert_eq!(sma(&prices, 5).len(), sma_output_len(n, 5));
    assert_eq!(sma_offset(5) + sma_output_len(n, 5), n);
    assert_eq!(ema(&prices, 5).len(), ema_output_len(n, 5));
    assert_eq!(rsi(&prices, 5).len(), rsi_output_len(n, 5));
    assert_eq!(rsi_offset(5) + rsi_output_len(n, 5), n);
    assert_eq!(bollinger(&prices, 5, 2.0).len(), bollinger_output_len(n, 5));
    assert_eq!(bollinger_offset(5), 4);
    assert_eq!(macd(&prices, 3, 6, 2).histogram.len(), macd_output_len(n, 3, 6, 2));
}

#[test]
fn test_config_builders_match_functions() {
    let prices = sample_prices();
    assert_eq!(Sma::new().period(4).compute(&prices), sma(&prices, 4));
    assert_eq!(Ema::new().period(4).compute(&prices), ema(&prices, 4));
    assert_eq!(Rsi::new().period(4).compute(&prices), rsi(&prices, 4));
    assert_eq!(
        Macd::new().fast_period(3).slow_period(6).signal_period(2).compute(&prices),
        macd(&prices, 3, 6, 2)
    );
    assert_eq!(
        Bollinger::new().period(5).multiplier(1.5).compute(&prices),
        bollinger(&prices, 5, 1.5)
    );
}

#[test]
fn test_f32_support() {
    let prices: Vec<f32> = sample_prices().into_iter().map(|p| p as f32).collect();
    assert_eq!(sma(&prices, 5).len(), 16);
    assert!(rsi(&prices, 14).iter().all(|v| (0.0..=100.0).contains(v)));
}

#[test]
fn test_degenerate_input_never_fails() {
    let empty: Vec<f64> = Vec::new();
    assert!(sma(&empty, 3).is_empty());
    assert!(ema(&empty, 3).is_empty());
    assert!(rsi(&empty, 3).is_empty());
    assert!(macd(&empty, 12, 26, 9).macd_line.is_empty());
    assert!(bollinger(&empty, 3, 2.0).is_empty());

    let short = vec![1.0_f64, 2.0];
    assert!(sma(&short, 5).is_empty());
    assert!(rsi(&short, 1).is_empty());
    assert!(ema(&short, 0).is_empty());
}

// ==================== Adapter ====================

#[test]
fn test_candlestick_end_to_end() {
    let bars = sample_bars();
    validate_bars(&bars).unwrap();

    let options = ChartOptions::new()
        .indicator(IndicatorConfig::Sma { period: 5 })
        .indicator(IndicatorConfig::Bollinger {
            period: 10,
            multiplier: 2.0,
        });
    let desc = adapt(Modality::Candlestick, &ChartData::Bars(bars.clone()), &options).unwrap();

    assert_eq!(desc.axes.x[0].kind, AxisKind::Datetime);
    assert_eq!(desc.series.len(), 2 + 1 + 3);

    let sma_line = desc.series_named("SMA(5)").unwrap();
    let SeriesData::Points(points) = &sma_line.data else {
        panic!("expected points");
    };
    assert_eq!(points.len(), bars.len() - 4);
    assert_eq!(points[0].0, bars[4].timestamp as f64);
    let expected = sma(&sample_prices(), 5);
    for (point, value) in points.iter().zip(&expected) {
        assert!(approx_eq(point.1, *value, EPSILON));
    }
}

#[test]
fn test_every_modality_by_name() {
    let options = ChartOptions::default();
    let cases = [
        ("candlestick", ChartData::Bars(sample_bars())),
        ("volume-profile", ChartData::VolumeProfile(sample_levels())),
        ("heatmap", ChartData::Heatmap(sample_cells())),
        ("treemap", ChartData::Treemap(sample_nodes())),
        ("rsi", ChartData::Prices(sample_prices())),
        ("macd", ChartData::Prices(sample_prices())),
    ];
    for (name, data) in &cases {
        let desc = adapt_named(name, data, &options).unwrap();
        assert_eq!(desc.modality.as_str(), *name);
        assert!(!desc.is_no_data());
        assert!(!desc.series.is_empty());
    }
}

#[test]
fn test_volume_profile_end_to_end() {
    let desc = adapt(
        Modality::VolumeProfile,
        &ChartData::VolumeProfile(sample_levels()),
        &ChartOptions::default(),
    )
    .unwrap();
    let axis = &desc.axes.x[0];
    assert!(axis.reversed);
    assert_eq!(axis.categories, vec![100.0, 100.5, 101.0, 101.5, 102.0]);
    assert_eq!(desc.series[0].kind, SeriesKind::Bar);
    assert_eq!(
        desc.series[1].data,
        SeriesData::Values(vec![-80.0, -85.0, -90.0, -95.0, -100.0])
    );
}

#[test]
fn test_treemap_color_defaults() {
    let desc = adapt(
        Modality::Treemap,
        &ChartData::Treemap(sample_nodes()),
        &ChartOptions::default(),
    )
    .unwrap();
    let SeriesData::Nodes(nodes) = &desc.series[0].data else {
        panic!("expected nodes");
    };
    assert_eq!(nodes.len(), 4);
    assert_eq!(nodes[3].name, "NVDA");
    assert_eq!(nodes[3].color_value, 25.0);
}

#[test]
fn test_unknown_modality() {
    let err = adapt_named("sankey", &ChartData::default(), &ChartOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "unknown chart modality 'sankey'");
}

#[test]
fn test_description_json_shape() {
    let desc = adapt(
        Modality::Rsi,
        &ChartData::Prices(sample_prices()),
        &ChartOptions::default(),
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&to_json_pretty(&desc).unwrap()).unwrap();
    assert_eq!(value["modality"], "rsi");
    assert_eq!(value["noData"], false);
    assert_eq!(value["axes"]["y"][0]["max"], 100.0);
    assert_eq!(value["axes"]["y"][0]["plotLines"][0]["value"], 70.0);
    assert_eq!(value["series"][0]["data"][0][0], 15.0);
}

// ==================== Controller ====================

#[tokio::test]
async fn test_controller_lifecycle() {
    let mut chart = ChartController::new(
        Modality::Candlestick,
        ChartData::Bars(sample_bars()),
        ChartOptions::default(),
        SnapshotRenderer::default(),
        DataExporter::new(),
    )
    .unwrap();

    chart.add_indicator(IndicatorConfig::Ema { period: 5 }).unwrap();
    assert!(chart.artifact().contains("EMA(5)"));

    let csv = String::from_utf8(chart.export_chart(ExportFormat::Csv).await.unwrap()).unwrap();
    assert!(csv.starts_with("series,x,y,"));
    assert_eq!(csv.lines().filter(|l| l.starts_with("EMA(5),")).count(), 20);

    let err = chart.export_chart(ExportFormat::Png).await.unwrap_err();
    assert!(matches!(err, Error::Export { ref format, .. } if format == "png"));

    assert_eq!(chart.remove_indicator(IndicatorKind::Ema).unwrap(), 1);
    assert!(!chart.artifact().contains("EMA(5)"));

    chart.update_data(ChartData::Bars(Vec::new())).unwrap();
    assert!(chart.description().is_no_data());
}

// ==================== Batch ====================

#[test]
fn test_batch_dashboard() {
    let requests = vec![
        BatchRequest::new(Modality::Candlestick, ChartData::Bars(sample_bars())),
        BatchRequest::new(Modality::Heatmap, ChartData::Heatmap(sample_cells())),
        BatchRequest::new(Modality::Rsi, ChartData::Prices(sample_prices())),
    ];
    let descriptions = BatchAdapter::default().try_adapt_all(&requests).unwrap();
    let modalities: Vec<Modality> = descriptions.iter().map(|d| d.modality).collect();
    assert_eq!(
        modalities,
        vec![Modality::Candlestick, Modality::Heatmap, Modality::Rsi]
    );
}

#[test]
fn test_batch_requests_from_json() {
    let requests: Vec<BatchRequest> = serde_json::from_str(
        r#"[
            {"modality": "macd", "data": {"type": "prices", "data": [1, 2, 3, 4]}},
            {"modality": "volume-profile", "data": {"type": "volume-profile", "data": []}}
        ]"#,
    )
    .unwrap();
    let results = BatchAdapter::default().adapt_all(&requests);
    assert!(!results[0].as_ref().unwrap().is_no_data());
    assert!(results[1].as_ref().unwrap().is_no_data());
}
