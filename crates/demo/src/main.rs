// File: crates/demo/src/main.rs
// Summary: Demo loads name/value/color rows from CSV and renders all three chart kinds to SVGs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_core::{ChartKind, ChartSpec, SeriesItem};
use chart_render_svg::{render_to_svg_file, RenderOptions};

/// Colors cycled through when the CSV carries no `color` column.
const PALETTE: [&str; 6] = ["#e74c3c", "#3498db", "#2ecc71", "#f39c12", "#9b59b6", "#e67e22"];

fn main() -> Result<()> {
    // Accept an input CSV and output directory from the CLI; fall back to the
    // built-in sample datasets when no file is given.
    let input = std::env::args().nth(1);
    let out_dir = std::env::args()
        .nth(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/charts"));

    let specs: Vec<ChartSpec> = match input {
        Some(raw) => {
            let path = PathBuf::from(raw);
            println!("Using input file: {}", path.display());
            let series = load_series_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Loaded {} series items", series.len());
            if series.is_empty() {
                anyhow::bail!("no rows loaded — check headers/delimiter.");
            }
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Chart")
                .to_string();
            ChartKind::ALL
                .iter()
                .map(|&kind| {
                    ChartSpec::new(kind, format!("{stem} – {}", kind.as_str()), series.clone())
                })
                .collect()
        }
        None => {
            println!("No input CSV given; using built-in sample datasets");
            ChartKind::ALL.iter().map(|&k| chart_dioxus::sample_spec(k)).collect()
        }
    };

    let opts = RenderOptions::default();
    for spec in &specs {
        let out = out_dir.join(format!("{}.svg", spec.kind.as_str()));
        render_to_svg_file(spec, &opts, &out)
            .with_context(|| format!("failed to render '{}'", spec.title))?;
        println!(
            "Wrote {} ({} items, total {})",
            out.display(),
            spec.series.len(),
            spec.total_value()
        );
    }
    Ok(())
}

/// Load `name,value[,color]` rows. Header matching is case-insensitive and
/// the color column is optional; missing colors cycle through [`PALETTE`].
fn load_series_csv(path: &Path) -> Result<Vec<SeriesItem>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = rdr.headers()?.clone();
    let find = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let name_col = find("name").context("CSV is missing a 'name' column")?;
    let value_col = find("value").context("CSV is missing a 'value' column")?;
    let color_col = find("color");

    let mut out = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("bad record on data row {}", row + 1))?;
        let name = record.get(name_col).unwrap_or("").to_string();
        let value: f64 = record
            .get(value_col)
            .unwrap_or("")
            .parse()
            .with_context(|| format!("bad value on data row {}", row + 1))?;
        let color = color_col
            .and_then(|c| record.get(c))
            .filter(|c| !c.is_empty())
            .unwrap_or(PALETTE[row % PALETTE.len()])
            .to_string();
        out.push(SeriesItem::new(name, value, color));
    }
    Ok(out)
}
