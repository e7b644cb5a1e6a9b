use dioxus::prelude::*;
use rfd::FileDialog;

use crate::domain::entities::frame::format_number;
use crate::domain::entities::inventory::{Category, InventoryRow, InventorySummary};
use crate::platform::desktop::config::AppConfig;
use crate::ui::state::app_state::AppState;
use crate::usecase::services::dashboard_service::{
    build_dashboard, display_quantity, BarDatum, DashboardView, RawDataView,
};
use crate::{
    bar_color, bar_width_percent, category_status, load_dashboard_data, loaded_timestamp,
    root_container_style, table_cell_style, table_header_cell_style, BarColoring,
};

const SIDEBAR_STYLE: &str = "width: 240px; flex-shrink: 0; padding: 16px; background: #f6f7f9; border-right: 1px solid #ddd; overflow-y: auto;";
const MAIN_STYLE: &str = "flex: 1; padding: 16px 24px; overflow-y: auto;";
const ERROR_STYLE: &str = "padding: 8px 12px; margin-bottom: 8px; border-radius: 6px; background: #fdecea; color: #8a1c1c;";
const WARNING_STYLE: &str = "padding: 8px 12px; margin-bottom: 8px; border-radius: 6px; background: #fff4e5; color: #7a4b00;";
const INFO_STYLE: &str = "padding: 8px 12px; margin-bottom: 8px; border-radius: 6px; background: #e8f1fd; color: #174a84;";
const BUTTON_STYLE: &str = "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer; margin-right: 6px;";

#[component]
fn Metric(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            style: "flex: 1; padding: 12px 16px; border: 1px solid #ddd; border-radius: 8px; background: #fff;",
            div { style: "font-size: 13px; color: #666;", "{label}" }
            div { style: "font-size: 28px; font-weight: 600;", "{value}" }
        }
    }
}

#[component]
fn KpiStrip(summary: InventorySummary) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 12px; margin-bottom: 16px;",
            Metric { label: "Total items", value: summary.total_items.to_string() }
            Metric { label: "Total stock", value: format_number(summary.stock_total) }
            Metric { label: "Total suggested", value: format_number(summary.suggested_total) }
        }
    }
}

#[component]
fn BarChart(title: &'static str, bars: Vec<BarDatum>, coloring: BarColoring) -> Element {
    let max = bars.iter().map(|bar| bar.value).fold(0.0_f64, f64::max);

    rsx! {
        div {
            style: "margin-bottom: 20px;",
            h3 { "{title}" }
            {bars.iter().map(|bar| {
                let width = bar_width_percent(bar.value, max);
                let color = bar_color(bar.value, max, coloring);
                let value = display_quantity(Some(bar.value));
                let label = bar.label.clone();
                rsx!(
                    div {
                        style: "display: flex; align-items: center; gap: 8px; margin: 3px 0;",
                        span { style: "width: 160px; flex-shrink: 0; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;", "{label}" }
                        div {
                            style: "flex: 1; background: #f0f0f0; border-radius: 4px;",
                            div { style: "width: {width}%; height: 18px; background: {color}; border-radius: 4px;" }
                        }
                        span { style: "width: 60px; text-align: right;", "{value}" }
                    }
                )
            })}
        }
    }
}

#[component]
fn CriticalItemsTable(rows: Vec<InventoryRow>) -> Element {
    let header_style = table_header_cell_style();
    let cell_style = table_cell_style();
    let lines: Vec<(String, String, String)> = rows
        .iter()
        .map(|row| {
            (
                row.product.clone(),
                display_quantity(row.stock),
                display_quantity(row.suggested),
            )
        })
        .collect();

    rsx! {
        h3 { "Critical items" }
        if lines.is_empty() {
            p { "No critical items found." }
        } else {
            table { style: "border-collapse: collapse; width: 100%; border: 1px solid #bbb; margin-bottom: 20px;",
                thead {
                    tr {
                        th { style: "{header_style}", "Product" }
                        th { style: "{header_style}", "Stock" }
                        th { style: "{header_style}", "Suggestion" }
                    }
                }
                tbody {
                    for (product, stock, suggested) in lines {
                        tr {
                            td { style: "{cell_style}", "{product}" }
                            td { style: "{cell_style}", "{stock}" }
                            td { style: "{cell_style}", "{suggested}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RawDataPanel(data: RawDataView) -> Element {
    let header_style = table_header_cell_style();
    let cell_style = table_cell_style();

    rsx! {
        details {
            summary { style: "cursor: pointer; font-weight: 600; margin: 8px 0;", "Raw data" }
            div { style: "overflow-x: auto;",
                table { style: "border-collapse: collapse; width: 100%; border: 1px solid #bbb;",
                    thead {
                        tr {
                            th { style: "{header_style}", "" }
                            for header in data.columns.clone() {
                                th { style: "{header_style}", "{header}" }
                            }
                        }
                    }
                    tbody {
                        for (idx, cells) in data.rows.clone() {
                            tr {
                                td { style: "{cell_style} color: #888;", "{idx}" }
                                for cell in cells {
                                    td { style: "{cell_style}", "{cell}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Dashboard(view: DashboardView) -> Element {
    match view {
        DashboardView::NoData { category } => {
            let label = category.label();
            rsx! {
                div { style: WARNING_STYLE, "No data found for category {label}." }
            }
        }
        DashboardView::Ready(panels) => {
            let panels = *panels;
            let title = panels.category.label();
            let stock_chart = match panels.stock_chart {
                Some(bars) => rsx! {
                    BarChart { title: "Stock by product", bars: bars, coloring: BarColoring::Uniform }
                },
                None => rsx! {
                    div { style: INFO_STYLE, "No stock values to chart." }
                },
            };
            let suggested_chart = match panels.suggested_chart {
                Some(bars) => rsx! {
                    BarChart { title: "Suggested purchase", bars: bars, coloring: BarColoring::ByValue }
                },
                None => rsx! {},
            };

            rsx! {
                h1 { "{title}" }
                KpiStrip { summary: panels.summary.clone() }
                {stock_chart}
                {suggested_chart}
                CriticalItemsTable { rows: panels.summary.critical_items }
                RawDataPanel { data: panels.raw_data }
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = AppConfig::default();
    let AppState {
        mut workbook_path,
        mut categories,
        mut selected,
        mut loaded_at,
    } = AppState::new(&config);

    let loaded = categories();
    let view = build_dashboard(&loaded, selected());
    let load_errors: Vec<String> = loaded.iter().filter_map(|data| data.error.clone()).collect();
    let entries: Vec<(Category, &'static str, String)> = Category::ALL
        .into_iter()
        .map(|category| {
            (
                category,
                category.label(),
                category_status(&loaded, category),
            )
        })
        .collect();
    let path_label = workbook_path().display().to_string();

    rsx! {
        div {
            style: root_container_style(),
            aside {
                style: SIDEBAR_STYLE,
                h2 { "Inventory Dashboard" }
                p { style: "color: #555; font-size: 14px;", "Stock levels and suggested purchases for each category of the workbook." }

                for (category, title, status) in entries {
                    label {
                        style: "display: flex; align-items: center; gap: 8px; padding: 6px 0; cursor: pointer;",
                        input {
                            r#type: "radio",
                            name: "category",
                            checked: selected() == category,
                            onchange: move |_| {
                                tracing::info!(category = title, "category selected");
                                selected.set(category);
                            },
                        }
                        span { "{title}" }
                        span { style: "color: #888; font-size: 12px;", "{status}" }
                    }
                }

                div {
                    style: "margin-top: 16px;",
                    button {
                        style: BUTTON_STYLE,
                        onclick: move |_| {
                            let path = workbook_path();
                            tracing::info!(path = %path.display(), "reloading workbook");
                            categories.set(load_dashboard_data(&path));
                            loaded_at.set(loaded_timestamp());
                        },
                        "Reload"
                    }
                    button {
                        style: BUTTON_STYLE,
                        onclick: move |_| {
                            let Some(file_path) = FileDialog::new()
                                .add_filter("Workbook", &["xlsx"])
                                .pick_file() else {
                                return;
                            };
                            tracing::info!(path = %file_path.display(), "opening workbook");
                            categories.set(load_dashboard_data(&file_path));
                            workbook_path.set(file_path);
                            loaded_at.set(loaded_timestamp());
                        },
                        "Open workbook"
                    }
                }

                p { style: "color: #888; font-size: 12px; word-break: break-all;", "{path_label}" }
                p { style: "color: #888; font-size: 12px;", "Loaded at {loaded_at}" }
            }

            main {
                style: MAIN_STYLE,
                for message in load_errors {
                    div { style: ERROR_STYLE, "{message}" }
                }
                Dashboard { view: view }
            }
        }
    }
}
