#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Beverages,
    LoungeItems,
    Kitchen,
    BarDrinks,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Beverages,
        Category::LoungeItems,
        Category::Kitchen,
        Category::BarDrinks,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Beverages => "Beverages",
            Category::LoungeItems => "Lounge Items",
            Category::Kitchen => "Kitchen",
            Category::BarDrinks => "Bar Drinks",
        }
    }

    pub fn sheet_name(self) -> &'static str {
        match self {
            Category::Beverages => "BEBIDAS",
            Category::LoungeItems => "ITENS SALÃO",
            Category::Kitchen => "COZINHA",
            Category::BarDrinks => "BAR DRINKS",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRow {
    pub product: String,
    pub stock: Option<f64>,
    pub suggested: Option<f64>,
}

impl InventoryRow {
    /// Missing quantities count as zero here only.
    pub fn is_critical(&self) -> bool {
        self.stock.unwrap_or(0.0) <= self.suggested.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventoryFrame {
    pub rows: Vec<InventoryRow>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventorySummary {
    pub total_items: usize,
    pub stock_total: f64,
    pub suggested_total: f64,
    pub critical_items: Vec<InventoryRow>,
}
