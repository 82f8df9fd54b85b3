use crate::extensions::ThemedWidget;
use crate::price_chart::PriceChart;
use crate::testutils::*;

use swarm_utils::candles::ChartPoint;

fn point(x: i64, close: f64) -> ChartPoint {
    ChartPoint {
        x,
        y: close,
        open: close - 1.0,
        high: close + 2.0,
        low: close - 2.0,
        close,
    }
}

fn series(base: f64) -> Vec<ChartPoint> {
    (0..5)
        .map(|i| point(1_700_000_000_000 + i * 60_000, base + i as f64))
        .collect()
}

// ============================================================================
// Placeholder states
// ============================================================================

#[test]
fn chart_renders_loading_placeholder() {
    let mut term = TestTerminal::new(40, 10);
    let mut chart = PriceChart::default();
    chart.set_loading();

    chart.render(term.area, &mut term.buffer, &TestTheme);

    assert_eq!(term.render_to_string(), "Loading prices...");
}

#[test]
fn chart_renders_empty_placeholder_after_empty_update() {
    let mut term = TestTerminal::new(40, 10);
    let mut chart = PriceChart::default();
    chart.update("ETH".to_string(), vec![]);

    chart.render(term.area, &mut term.buffer, &TestTheme);

    assert_eq!(term.render_to_string(), "No price data for this token.");
}

// ============================================================================
// Update semantics
// ============================================================================

#[test]
fn update_replaces_the_series_wholesale() {
    let mut chart = PriceChart::default();
    chart.update("ETH".to_string(), series(10.0));
    chart.update("BTC".to_string(), series(100.0));

    assert_eq!(chart.label(), Some("BTC"));
    assert_eq!(chart.points().len(), 5);
    assert!(chart.points().iter().all(|p| p.y >= 100.0));
}

#[test]
fn repeated_switches_leave_exactly_one_series() {
    let mut chart = PriceChart::default();
    for i in 0..10 {
        chart.update(format!("TOKEN{i}"), series(i as f64));
    }

    assert_eq!(chart.label(), Some("TOKEN9"));
    assert_eq!(chart.points().len(), 5);
    assert_eq!(chart.points()[0].y, 9.0);
}

#[test]
fn set_loading_discards_points() {
    let mut chart = PriceChart::default();
    chart.update("ETH".to_string(), series(10.0));
    chart.set_loading();

    assert!(chart.is_empty());
    assert!(chart.cursored().is_none());
}

#[test]
fn update_puts_cursor_on_newest_point() {
    let mut chart = PriceChart::default();
    chart.update("ETH".to_string(), series(10.0));

    assert_eq!(chart.cursored().unwrap().y, 14.0);
}

// ============================================================================
// Cursor movement
// ============================================================================

#[test]
fn cursor_moves_left_and_clamps() {
    let mut chart = PriceChart::default();
    chart.update("ETH".to_string(), series(10.0));

    for _ in 0..10 {
        chart.handle_event(&left());
    }
    assert_eq!(chart.cursored().unwrap().y, 10.0);
}

#[test]
fn cursor_moves_right_and_clamps() {
    let mut chart = PriceChart::default();
    chart.update("ETH".to_string(), series(10.0));

    chart.handle_event(&left());
    chart.handle_event(&right());
    chart.handle_event(&right());
    assert_eq!(chart.cursored().unwrap().y, 14.0);
}

#[test]
fn cursor_on_empty_chart_does_not_panic() {
    let mut chart = PriceChart::default();
    chart.handle_event(&left());
    chart.handle_event(&right());
    assert!(chart.cursored().is_none());
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn readout_shows_label_and_ohlc_of_cursored_point() {
    let mut term = TestTerminal::new(60, 10);
    let mut chart = PriceChart::default();
    chart.update("ETH".to_string(), vec![point(1_700_000_000_000, 11.0)]);

    chart.render(term.area, &mut term.buffer, &TestTheme);

    let rendered = term.render_to_string();
    let readout = rendered.lines().next().unwrap();
    assert!(readout.starts_with("ETH"));
    assert!(readout.contains("O 10.000"));
    assert!(readout.contains("H 13.000"));
    assert!(readout.contains("L 9.000"));
    assert!(readout.contains("C 11.000"));
}

#[test]
fn chart_renders_series_without_panic() {
    let mut term = TestTerminal::new(60, 20);
    let mut chart = PriceChart::default();
    chart.update("ETH".to_string(), series(10.0));

    chart.render(term.area, &mut term.buffer, &TestTheme);

    // The canvas draws Braille characters below the readout line.
    assert!(term.render_to_string().lines().count() > 1);
}

#[test]
fn chart_renders_single_point_without_panic() {
    let mut term = TestTerminal::new(60, 10);
    let mut chart = PriceChart::default();
    chart.update("ETH".to_string(), vec![point(1_700_000_000_000, 11.0)]);

    chart.render(term.area, &mut term.buffer, &TestTheme);
}

#[test]
fn chart_renders_flat_series_without_panic() {
    let mut term = TestTerminal::new(60, 10);
    let mut chart = PriceChart::default();
    chart.update(
        "USDC".to_string(),
        vec![point(1_700_000_000_000, 1.0), point(1_700_000_060_000, 1.0)],
    );

    chart.render(term.area, &mut term.buffer, &TestTheme);
}
