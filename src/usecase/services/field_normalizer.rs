use crate::domain::entities::frame::SheetFrame;
use crate::domain::entities::inventory::{InventoryFrame, InventoryRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalField {
    Product,
    Stock,
    Suggested,
}

/// Ordered keyword rules. "SUGESTÃO" is covered by "SUGEST" but listed so
/// both spellings stay visible in one rule.
const FIELD_RULES: [(CanonicalField, &[&str]); 3] = [
    (CanonicalField::Product, &["PRODUTO", "ITEM", "BEBIDA", "NOME"]),
    (CanonicalField::Stock, &["ESTOQUE"]),
    (CanonicalField::Suggested, &["SUGEST", "SUGESTÃO"]),
];

/// Column index chosen for each canonical field, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldMapping {
    pub product: Option<usize>,
    pub stock: Option<usize>,
    pub suggested: Option<usize>,
}

fn first_matching_column(columns: &[String], keywords: &[&str]) -> Option<usize> {
    columns.iter().position(|name| {
        let upper = name.to_uppercase();
        keywords.iter().any(|keyword| upper.contains(keyword))
    })
}

pub fn map_fields(columns: &[String]) -> FieldMapping {
    let mut mapping = FieldMapping::default();
    for (field, keywords) in FIELD_RULES {
        let found = first_matching_column(columns, keywords);
        match field {
            CanonicalField::Product => mapping.product = found,
            CanonicalField::Stock => mapping.stock = found,
            CanonicalField::Suggested => mapping.suggested = found,
        }
    }
    mapping
}

pub fn normalize_frame(frame: &SheetFrame) -> InventoryFrame {
    let mapping = map_fields(&frame.columns);

    let rows = frame
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let cell = |col: Option<usize>| col.and_then(|col| row.get(col));
            let product = mapping
                .product
                .map(|col| {
                    row.get(col)
                        .map(|value| value.to_text().trim().to_string())
                        .unwrap_or_default()
                })
                .unwrap_or_else(|| idx.to_string());
            InventoryRow {
                product,
                stock: cell(mapping.stock).and_then(|value| value.to_number()),
                suggested: cell(mapping.suggested).and_then(|value| value.to_number()),
            }
        })
        .collect();

    InventoryFrame { rows }
}
