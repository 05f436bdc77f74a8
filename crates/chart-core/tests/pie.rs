// File: crates/chart-core/tests/pie.rs
// Purpose: Validate pie wedge angles, percentages, and path output.

use std::f64::consts::PI;

use chart_core::pie::build_pie;
use chart_core::{PieLayout, SeriesItem};

const EPS: f64 = 1e-9;

fn items(values: &[f64]) -> Vec<SeriesItem> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| SeriesItem::new(format!("s{i}"), v, "#336699"))
        .collect()
}

#[test]
fn slices_are_contiguous_and_cover_full_circle() {
    let series = items(&[12.0, 7.5, 30.0, 0.5, 19.0]);
    let slices = build_pie(&series, &PieLayout::default());

    assert_eq!(slices.len(), series.len());
    assert!((slices[0].start_angle - (-PI / 2.0)).abs() < EPS);
    for pair in slices.windows(2) {
        assert_eq!(pair[0].end_angle, pair[1].start_angle);
    }

    let sweep_sum: f64 = slices.iter().map(|s| s.end_angle - s.start_angle).sum();
    assert!((sweep_sum - 2.0 * PI).abs() < EPS, "sweeps sum to {sweep_sum}");
}

#[test]
fn thirty_seventy_split() {
    let slices = build_pie(&items(&[30.0, 70.0]), &PieLayout::default());

    assert!((slices[0].start_angle - (-PI / 2.0)).abs() < EPS);
    assert!((slices[0].end_angle - (-PI / 2.0 + 0.6 * PI)).abs() < EPS);
    assert_eq!(slices[0].pct, 30);
    assert_eq!(slices[1].pct, 70);
    assert!((slices[1].end_angle - 1.5 * PI).abs() < EPS);

    // 0.6*PI sweep takes the short arc; 1.4*PI needs the large one.
    assert!(slices[0].d.contains(" A 130 130 0 0 1 "));
    assert!(slices[1].d.contains(" A 130 130 0 1 1 "));
}

#[test]
fn even_split_uses_short_arcs() {
    let slices = build_pie(&items(&[50.0, 50.0]), &PieLayout::default());
    for s in &slices {
        assert!(s.d.contains(" A 130 130 0 0 1 "), "unexpected path: {}", s.d);
        assert_eq!(s.pct, 50);
    }
}

#[test]
fn single_item_takes_the_whole_circle() {
    let slices = build_pie(&items(&[42.0]), &PieLayout::default());
    assert_eq!(slices.len(), 1);
    let s = &slices[0];
    assert!((s.end_angle - s.start_angle - 2.0 * PI).abs() < EPS);
    assert_eq!(s.pct, 100);
    assert!(s.d.contains(" A 130 130 0 1 1 "));
}

#[test]
fn percentages_round_independently() {
    // Three equal thirds each round to 33; the sum is 99 by design of the
    // per-slice rounding rule.
    let slices = build_pie(&items(&[1.0, 1.0, 1.0]), &PieLayout::default());
    let pcts: Vec<u32> = slices.iter().map(|s| s.pct).collect();
    assert_eq!(pcts, vec![33, 33, 33]);
}

#[test]
fn wedge_path_is_anchored_at_the_center() {
    let layout = PieLayout::new(100.0, 80.0, 50.0);
    let slices = build_pie(&items(&[1.0, 3.0]), &layout);
    for s in &slices {
        assert!(s.d.starts_with("M 100 80 L "), "path: {}", s.d);
        assert!(s.d.ends_with('Z'), "path: {}", s.d);
    }
}

#[test]
fn label_anchor_sits_on_the_bisector() {
    let layout = PieLayout::default();
    let slices = build_pie(&items(&[25.0, 75.0]), &layout);
    let s = &slices[0];
    let mid = (s.start_angle + s.end_angle) / 2.0;
    let r = layout.radius * 0.65;
    assert!((s.label_x - (layout.cx + r * mid.cos())).abs() < EPS);
    assert!((s.label_y - (layout.cy + r * mid.sin())).abs() < EPS);
}

#[test]
fn slices_keep_source_indices_and_passthrough_fields() {
    let series = vec![
        SeriesItem::new("Offline", 30.0, "#e74c3c"),
        SeriesItem::new("Online", 70.0, "#3498db"),
    ];
    let slices = build_pie(&series, &PieLayout::default());
    assert_eq!(slices[0].idx, 0);
    assert_eq!(slices[1].idx, 1);
    assert_eq!(slices[1].name, "Online");
    assert_eq!(slices[1].color, "#3498db");
    assert_eq!(slices[1].value, 70.0);
}
