// File: crates/chart-dioxus/src/lib.rs
// Summary: Dioxus UI shell: chart kind selection, theme toggle, hover wiring.
// Notes:
// - This crate keeps UI deps behind the `desktop` feature, so the workspace
//   builds without fetching Dioxus unless explicitly enabled.
// - The shell owns the hover state and clears it on every kind switch; the
//   renderer receives the hovered index through RenderOptions.

use chart_core::{ChartKind, ChartSpec, SeriesItem};

/// Built-in sample dataset for one chart kind.
pub fn sample_spec(kind: ChartKind) -> ChartSpec {
    match kind {
        ChartKind::Line => ChartSpec::new(
            kind,
            "Sales Report – Line",
            vec![
                SeriesItem::new("Jan", 40.0, "#e74c3c"),
                SeriesItem::new("Feb", 65.0, "#e74c3c"),
                SeriesItem::new("Mar", 50.0, "#e74c3c"),
                SeriesItem::new("Apr", 80.0, "#e74c3c"),
                SeriesItem::new("May", 72.0, "#e74c3c"),
                SeriesItem::new("Jun", 90.0, "#e74c3c"),
            ],
        ),
        ChartKind::Column => ChartSpec::new(
            kind,
            "Sales Report – Column",
            vec![
                SeriesItem::new("Offline", 30.0, "#3498db"),
                SeriesItem::new("Online", 70.0, "#2ecc71"),
                SeriesItem::new("Mobile", 55.0, "#9b59b6"),
                SeriesItem::new("Retail", 45.0, "#e67e22"),
            ],
        ),
        ChartKind::Pie => ChartSpec::new(
            kind,
            "Sales Report – Pie",
            vec![
                SeriesItem::new("Offline", 30.0, "#e74c3c"),
                SeriesItem::new("Online", 70.0, "#3498db"),
                SeriesItem::new("Mobile", 45.0, "#2ecc71"),
                SeriesItem::new("Retail", 25.0, "#f39c12"),
            ],
        ),
    }
}

#[cfg(feature = "desktop")]
pub mod ui {
    use super::*;
    use chart_core::HoverState;
    use chart_render_svg::{render_svg, RenderOptions, Theme};
    use dioxus::prelude::*;

    /// Interactive chart panel: kind selector, theme toggle, legend rows that
    /// drive the hover highlight by series index, and a total readout.
    #[component]
    pub fn ChartPanel() -> Element {
        let mut selected = use_signal(|| ChartKind::Line);
        let mut dark = use_signal(|| true);
        let mut hover = use_signal(HoverState::new);

        let spec = sample_spec(*selected.read());
        let opts = RenderOptions {
            theme: if *dark.read() { Theme::dark() } else { Theme::light() },
            highlight: hover.read().hovered(),
            ..Default::default()
        };
        // An invalid spec renders nothing; the stale document is simply not
        // replaced.
        let svg = render_svg(&spec, &opts).unwrap_or_default();
        let total = spec.total_value();
        let series = spec.series.clone();

        rsx! {
            div {
                style: "font-family:sans-serif; padding:16px; display:flex; flex-direction:column; gap:12px;",
                div { style: "display:flex; gap:6px;",
                    for kind in ChartKind::ALL {
                        button {
                            onclick: move |_| {
                                // Clear before the switch so no stale index
                                // outlives the previous dataset.
                                hover.write().clear();
                                selected.set(kind);
                            },
                            "{kind.as_str()}"
                        }
                    }
                    button {
                        onclick: move |_| {
                            let d = *dark.read();
                            dark.set(!d);
                        },
                        if *dark.read() { "Light mode" } else { "Dark mode" }
                    }
                }
                div { dangerous_inner_html: "{svg}" }
                div { style: "display:flex; gap:16px;",
                    for (idx, item) in series.into_iter().enumerate() {
                        div {
                            style: format!(
                                "cursor:pointer; border-left:4px solid {}; padding-left:6px;",
                                item.color
                            ),
                            onmouseenter: move |_| hover.write().set(idx),
                            onmouseleave: move |_| hover.write().clear(),
                            "{item.name}: {item.value}"
                        }
                    }
                }
                p { "Total: {total}" }
            }
        }
    }

    /// Tiny demo launcher so consumers can quickly mount the component.
    pub fn run_demo_ui() -> Result<(), String> {
        #[component]
        fn App() -> Element {
            rsx! { super::ui::ChartPanel {} }
        }

        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = Vec::new();
        let globals: Vec<Box<dyn std::any::Any>> = Vec::new();
        dioxus_desktop::launch::launch(App, providers, globals);
        Ok(())
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui() -> Result<(), &'static str> {
    Err("chart-dioxus built without `desktop` feature; enable features to run UI demo")
}
