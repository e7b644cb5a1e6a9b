use std::cmp::Ordering;

use crate::domain::entities::inventory::{Category, InventoryRow, InventorySummary};
use crate::usecase::services::aggregate_service::summarize;
use crate::usecase::services::load_service::CategoryData;

pub const MISSING_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawDataView {
    pub columns: Vec<String>,
    pub rows: Vec<(usize, Vec<String>)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardPanels {
    pub category: Category,
    pub summary: InventorySummary,
    pub stock_chart: Option<Vec<BarDatum>>,
    pub suggested_chart: Option<Vec<BarDatum>>,
    pub raw_data: RawDataView,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardView {
    NoData { category: Category },
    Ready(Box<DashboardPanels>),
}

/// Present values only, highest first. Ties keep row order.
pub fn sorted_bars(
    rows: &[InventoryRow],
    value: impl Fn(&InventoryRow) -> Option<f64>,
) -> Option<Vec<BarDatum>> {
    let mut bars: Vec<BarDatum> = rows
        .iter()
        .filter_map(|row| {
            value(row).map(|v| BarDatum {
                label: row.product.clone(),
                value: v,
            })
        })
        .collect();
    if bars.is_empty() {
        return None;
    }
    bars.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
    Some(bars)
}

pub fn display_quantity(value: Option<f64>) -> String {
    value
        .map(crate::domain::entities::frame::format_number)
        .unwrap_or_else(|| MISSING_PLACEHOLDER.to_string())
}

/// Builds the view for one render pass. The selection is an input, so the
/// same data and category always give the same view.
pub fn build_dashboard(loaded: &[CategoryData], category: Category) -> DashboardView {
    let Some(data) = loaded.iter().find(|data| data.category == category) else {
        return DashboardView::NoData { category };
    };
    if data.frame.is_empty() {
        return DashboardView::NoData { category };
    }

    let rows = &data.inventory.rows;
    let raw_data = RawDataView {
        columns: data.frame.columns.clone(),
        rows: data
            .frame
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| (idx, row.iter().map(|cell| cell.to_text()).collect()))
            .collect(),
    };

    DashboardView::Ready(Box::new(DashboardPanels {
        category,
        summary: summarize(&data.inventory),
        stock_chart: sorted_bars(rows, |row| row.stock),
        suggested_chart: sorted_bars(rows, |row| row.suggested),
        raw_data,
    }))
}
