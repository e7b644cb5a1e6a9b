use std::path::Path;

mod app;
mod domain {
    pub mod entities {
        pub mod frame;
        pub mod inventory;
    }
}
mod infra {
    pub mod import {
        pub mod xlsx;
    }
}
mod platform {
    pub mod desktop {
        pub mod config;
        pub mod logging;
    }
}
mod ui {
    pub mod state {
        pub mod app_state;
    }
}
mod usecase {
    pub mod ports {
        pub mod workbook;
    }
    pub mod services {
        pub mod aggregate_service;
        pub mod dashboard_service;
        pub mod field_normalizer;
        pub mod header_locator;
        pub mod load_service;
    }
}


use crate::domain::entities::inventory::Category;
use crate::infra::import::xlsx::XlsxWorkbook;
use crate::platform::desktop::config::default_webview_data_dir;
use crate::usecase::services::load_service::{CategoryData, SheetLoader};

fn main() {
    platform::desktop::logging::init_tracing();

    let webview_data_dir =
        default_webview_data_dir().expect("should resolve and create WebView2 data directory");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new().with_title("Inventory Dashboard"),
                )
                .with_data_directory(webview_data_dir),
        )
        .launch(app::App);
}

/// Eagerly loads every category sheet from the workbook at `path`.
pub fn load_dashboard_data(path: &Path) -> Vec<CategoryData> {
    tracing::info!(path = %path.display(), "loading workbook");
    let source = XlsxWorkbook::new(path);
    SheetLoader::new(&source).load_all()
}

pub fn loaded_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Short sidebar note next to each category label.
pub fn category_status(loaded: &[CategoryData], category: Category) -> String {
    match loaded.iter().find(|data| data.category == category) {
        Some(data) if data.error.is_some() => "unavailable".to_string(),
        Some(data) if data.frame.is_empty() => "empty".to_string(),
        Some(data) => format!("{} rows", data.row_count()),
        None => "not loaded".to_string(),
    }
}

pub fn root_container_style() -> String {
    "height: 100vh; display: flex; flex-direction: row; overflow: hidden; font-family: sans-serif;"
        .to_string()
}

pub fn table_header_cell_style() -> String {
    "border: 1px solid #bbb; padding: 6px; background: #f2f2f2; position: sticky; top: 0; z-index: 1; text-align: left;"
        .to_string()
}

pub fn table_cell_style() -> String {
    "border: 1px solid #bbb; padding: 6px;".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColoring {
    Uniform,
    ByValue,
}

const UNIFORM_BAR_COLOR: &str = "#4c78a8";

/// Share of the widest bar, clamped to 0..=100.
pub fn bar_width_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// Light-to-dark blue ramp for value-encoded bars.
pub fn bar_color(value: f64, max: f64, coloring: BarColoring) -> String {
    match coloring {
        BarColoring::Uniform => UNIFORM_BAR_COLOR.to_string(),
        BarColoring::ByValue => {
            let t = bar_width_percent(value, max) / 100.0;
            let channel = |light: f64, dark: f64| (light + (dark - light) * t).round() as u8;
            format!(
                "rgb({}, {}, {})",
                channel(198.0, 8.0),
                channel(219.0, 48.0),
                channel(239.0, 107.0)
            )
        }
    }
}
