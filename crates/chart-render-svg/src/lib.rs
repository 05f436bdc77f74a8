// File: crates/chart-render-svg/src/lib.rs
// Summary: Renders computed chart geometry into standalone SVG documents.

pub mod theme;

pub use theme::Theme;

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chart_core::{
    compute_geometry, ChartSpec, ColumnGeometry, Geometry, Layout, LineGeometry, PieSlice,
};

const FONT: &str = "font-family=\"sans-serif\"";

/// Rendering knobs for one SVG document. Layout constants are carried here
/// so the same spec can render at different sizes (tests use this).
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub layout: Layout,
    pub theme: Theme,
    /// Emit percentage / category / axis text labels.
    pub show_labels: bool,
    /// Series index to highlight; every shape carries a `data-idx` attribute
    /// so interactive hosts can map hover events back to this.
    pub highlight: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            theme: Theme::dark(),
            show_labels: true,
            highlight: None,
        }
    }
}

/// Render one spec to a complete SVG document, or `None` when the spec
/// yields no geometry (invalid or degenerate input: nothing to render).
pub fn render_svg(spec: &ChartSpec, opts: &RenderOptions) -> Option<String> {
    let doc = match compute_geometry(spec, &opts.layout)? {
        Geometry::Pie(slices) => pie_document(spec, &slices, opts),
        Geometry::Line(geo) => line_document(spec, &geo, opts),
        Geometry::Column(geo) => column_document(spec, &geo, opts),
    };
    Some(doc)
}

/// Render and write to `path`, creating parent directories. Unlike
/// [`render_svg`], a spec with nothing to render is an error here since the
/// caller asked for a file.
pub fn render_to_svg_file(
    spec: &ChartSpec,
    opts: &RenderOptions,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    let svg = render_svg(spec, opts)
        .ok_or_else(|| anyhow!("spec '{}' yields no geometry", spec.title))?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, svg).with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

// ---- documents ---------------------------------------------------------------

fn pie_document(spec: &ChartSpec, slices: &[PieSlice], opts: &RenderOptions) -> String {
    let pie = opts.layout.pie;
    let (w, h) = (pie.cx * 2.0, pie.cy * 2.0);
    let theme = &opts.theme;

    let mut svg = document_open(w, h, theme.background);
    title_text(&mut svg, &spec.title, w / 2.0, 22.0, theme.text);

    for s in slices {
        let _ = writeln!(
            svg,
            "  <path d=\"{}\" fill=\"{}\" data-idx=\"{}\"{}/>",
            s.d,
            xml_escape(&s.color),
            s.idx,
            shape_attrs(opts.highlight, s.idx, theme.text),
        );
    }
    if opts.show_labels {
        for s in slices {
            let _ = writeln!(
                svg,
                "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" fill=\"{}\" font-size=\"12\" {FONT}>{}%</text>",
                s.label_x, s.label_y, theme.text, s.pct,
            );
        }
    }
    total_text(&mut svg, spec, w / 2.0, h - 6.0, theme.muted);
    svg.push_str("</svg>\n");
    svg
}

fn line_document(spec: &ChartSpec, geo: &LineGeometry, opts: &RenderOptions) -> String {
    let frame = opts.layout.frame;
    let theme = &opts.theme;
    let mut svg = document_open(frame.width, frame.height, theme.background);
    title_text(&mut svg, &spec.title, frame.width / 2.0, 24.0, theme.text);
    grid_and_axis(&mut svg, &geo.labels, opts);

    // Area fill and connecting line take the first item's color; vertices
    // keep their own.
    let stroke = xml_escape(&geo.points[0].color);
    let _ = writeln!(
        svg,
        "  <path d=\"{}\" fill=\"{stroke}\" fill-opacity=\"0.15\"/>",
        geo.area_path,
    );
    let _ = writeln!(
        svg,
        "  <polyline points=\"{}\" fill=\"none\" stroke=\"{stroke}\" stroke-width=\"2\"/>",
        geo.polyline_points,
    );
    for p in &geo.points {
        let r = if opts.highlight == Some(p.idx) { 6.0 } else { 4.0 };
        let _ = writeln!(
            svg,
            "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{r}\" fill=\"{}\" data-idx=\"{}\"{}/>",
            p.x,
            p.y,
            xml_escape(&p.color),
            p.idx,
            shape_attrs(opts.highlight, p.idx, theme.text),
        );
    }
    if opts.show_labels {
        for p in &geo.points {
            let _ = writeln!(
                svg,
                "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" fill=\"{}\" font-size=\"11\" {FONT}>{}</text>",
                p.x,
                frame.baseline() + 16.0,
                theme.muted,
                xml_escape(&p.name),
            );
        }
    }
    total_text(&mut svg, spec, frame.width - frame.pad, frame.height - 8.0, theme.muted);
    svg.push_str("</svg>\n");
    svg
}

fn column_document(spec: &ChartSpec, geo: &ColumnGeometry, opts: &RenderOptions) -> String {
    let frame = opts.layout.frame;
    let theme = &opts.theme;
    let mut svg = document_open(frame.width, frame.height, theme.background);
    title_text(&mut svg, &spec.title, frame.width / 2.0, 24.0, theme.text);
    grid_and_axis(&mut svg, &geo.labels, opts);

    for b in &geo.bars {
        let _ = writeln!(
            svg,
            "  <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\" data-idx=\"{}\"{}/>",
            b.x,
            b.y,
            b.width,
            b.height,
            xml_escape(&b.color),
            b.idx,
            shape_attrs(opts.highlight, b.idx, theme.text),
        );
    }
    if opts.show_labels {
        for b in &geo.bars {
            let _ = writeln!(
                svg,
                "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" fill=\"{}\" font-size=\"11\" {FONT}>{}</text>",
                b.x + b.width / 2.0,
                frame.baseline() + 16.0,
                theme.muted,
                xml_escape(&b.name),
            );
        }
    }
    total_text(&mut svg, spec, frame.width - frame.pad, frame.height - 8.0, theme.muted);
    svg.push_str("</svg>\n");
    svg
}

// ---- shared fragments --------------------------------------------------------

fn document_open(w: f64, h: f64, background: &str) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
    );
    let _ = writeln!(svg, "  <rect width=\"{w}\" height=\"{h}\" fill=\"{background}\"/>");
    svg
}

fn title_text(svg: &mut String, title: &str, x: f64, y: f64, color: &str) {
    let _ = writeln!(
        svg,
        "  <text x=\"{x}\" y=\"{y}\" text-anchor=\"middle\" fill=\"{color}\" font-size=\"14\" font-weight=\"bold\" {FONT}>{}</text>",
        xml_escape(title),
    );
}

fn total_text(svg: &mut String, spec: &ChartSpec, x: f64, y: f64, color: &str) {
    let _ = writeln!(
        svg,
        "  <text x=\"{x}\" y=\"{y}\" text-anchor=\"middle\" fill=\"{color}\" font-size=\"11\" {FONT}>Total: {}</text>",
        spec.total_value(),
    );
}

/// Horizontal gridlines with their tick values down the left edge.
fn grid_and_axis(svg: &mut String, labels: &[chart_core::AxisLabel], opts: &RenderOptions) {
    let frame = opts.layout.frame;
    let theme = &opts.theme;
    for l in labels {
        let _ = writeln!(
            svg,
            "  <line x1=\"{}\" y1=\"{:.1}\" x2=\"{}\" y2=\"{:.1}\" stroke=\"{}\"/>",
            frame.pad,
            l.y,
            frame.width - frame.pad,
            l.y,
            theme.grid,
        );
        if opts.show_labels {
            let _ = writeln!(
                svg,
                "  <text x=\"{}\" y=\"{:.1}\" text-anchor=\"end\" fill=\"{}\" font-size=\"11\" {FONT}>{}</text>",
                frame.pad - 8.0,
                l.y + 4.0,
                theme.muted,
                l.value,
            );
        }
    }
}

/// Extra attributes for a hoverable shape. The highlighted shape gets an
/// outline; everything else dims while a highlight is active.
fn shape_attrs(highlight: Option<usize>, idx: usize, outline: &str) -> String {
    match highlight {
        Some(h) if h == idx => format!(" stroke=\"{outline}\" stroke-width=\"2\""),
        Some(_) => " opacity=\"0.45\"".to_string(),
        None => String::new(),
    }
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
