use std::collections::HashSet;

use crate::domain::entities::inventory::{InventoryFrame, InventoryRow, InventorySummary};

pub const CRITICAL_ITEMS_LIMIT: usize = 10;

/// Sum of present values truncated toward zero; 0 when nothing is present.
fn truncated_sum(values: impl Iterator<Item = Option<f64>>) -> f64 {
    values.flatten().sum::<f64>().trunc()
}

pub fn distinct_products(rows: &[InventoryRow]) -> usize {
    rows.iter()
        .map(|row| row.product.as_str())
        .filter(|product| !product.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

pub fn critical_items(rows: &[InventoryRow]) -> Vec<InventoryRow> {
    rows.iter()
        .filter(|row| row.is_critical())
        .take(CRITICAL_ITEMS_LIMIT)
        .cloned()
        .collect()
}

pub fn summarize(inventory: &InventoryFrame) -> InventorySummary {
    let rows = &inventory.rows;
    InventorySummary {
        total_items: distinct_products(rows),
        stock_total: truncated_sum(rows.iter().map(|row| row.stock)),
        suggested_total: truncated_sum(rows.iter().map(|row| row.suggested)),
        critical_items: critical_items(rows),
    }
}
