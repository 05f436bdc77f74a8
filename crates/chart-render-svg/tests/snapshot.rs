// File: crates/chart-render-svg/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic spec per chart kind to SVG text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot files.
// - Else, if a snapshot exists, compares text for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_core::{ChartKind, ChartSpec, SeriesItem};
use chart_render_svg::{render_svg, RenderOptions};

fn render_kind(kind: ChartKind) -> String {
    let spec = ChartSpec::new(
        kind,
        "Golden",
        vec![
            SeriesItem::new("Jan", 40.0, "#e74c3c"),
            SeriesItem::new("Feb", 65.0, "#3498db"),
            SeriesItem::new("Mar", 50.0, "#2ecc71"),
            SeriesItem::new("Apr", 80.0, "#f39c12"),
        ],
    );
    render_svg(&spec, &RenderOptions::default()).expect("golden spec renders")
}

#[test]
fn golden_documents_per_kind() {
    let snap_dir =
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let update = std::env::var("UPDATE_SNAPSHOTS")
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    for kind in ChartKind::ALL {
        let got = render_kind(kind);
        let snap_path = snap_dir.join(format!("{}.svg", kind.as_str()));

        if update {
            std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
            std::fs::write(&snap_path, &got).expect("write snapshot");
            eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), got.len());
            continue;
        }

        if snap_path.exists() {
            let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
            assert_eq!(got, want, "rendered SVG differs from {}", snap_path.display());
        } else {
            eprintln!(
                "[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.",
                snap_path.display()
            );
            // Skip without failing on first run
        }
    }
}
