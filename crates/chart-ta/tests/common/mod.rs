//! Shared test utilities for chart-ta tests.

use chart_ta::types::{HeatmapCell, OhlcBar, TreemapNode, VolumeProfileLevel};

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Approximate equality check; two NaNs compare equal.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Twenty closing prices with both up and down moves.
#[allow(dead_code)]
pub fn sample_prices() -> Vec<f64> {
    vec![
        44.0, 44.5, 43.5, 44.5, 44.0, 43.0, 42.5, 43.5, 44.5, 45.0, 45.5, 44.5, 43.5, 44.0, 45.0,
        46.0, 46.5, 45.5, 44.5, 45.0,
    ]
}

/// One-minute bars around [`sample_prices`], with volume.
#[allow(dead_code)]
pub fn sample_bars() -> Vec<OhlcBar> {
    sample_prices()
        .into_iter()
        .enumerate()
        .map(|(i, close)| {
            let open = close - 0.25;
            OhlcBar::new(1_700_000_000_000 + i as i64 * 60_000, open, close + 1.0, open - 1.0, close)
                .with_volume(1_000.0 + 50.0 * i as f64)
        })
        .collect()
}

/// A 3x3 correlation grid listed in scrambled order.
#[allow(dead_code)]
pub fn sample_cells() -> Vec<HeatmapCell> {
    let mut cells = Vec::new();
    for &x in &[2.0, 0.0, 1.0] {
        for &y in &[1.0, 2.0, 0.0] {
            cells.push(HeatmapCell {
                x,
                y,
                value: if x == y { 1.0 } else { (x - y) / 4.0 },
                name: None,
            });
        }
    }
    cells
}

/// A two-level portfolio.
#[allow(dead_code)]
pub fn sample_nodes() -> Vec<TreemapNode> {
    let leaf = |name: &str, value: f64, change: Option<f64>| TreemapNode {
        name: name.to_string(),
        value,
        color_value: change,
        parent: Some("Tech".to_string()),
    };
    vec![
        TreemapNode {
            name: "Tech".to_string(),
            value: 0.0,
            color_value: None,
            parent: None,
        },
        leaf("AAPL", 40.0, Some(1.2)),
        leaf("MSFT", 35.0, Some(-0.4)),
        leaf("NVDA", 25.0, None),
    ]
}

/// Price levels in descending order.
#[allow(dead_code)]
pub fn sample_levels() -> Vec<VolumeProfileLevel> {
    (0..5)
        .rev()
        .map(|i| {
            let buy = 100.0 + 10.0 * i as f64;
            let sell = 80.0 + 5.0 * i as f64;
            VolumeProfileLevel {
                price: 100.0 + 0.5 * i as f64,
                volume: buy + sell,
                buy_volume: buy,
                sell_volume: sell,
            }
        })
        .collect()
}
