use crate::domain::entities::frame::SheetFrame;
use crate::domain::entities::inventory::{Category, InventoryFrame};
use crate::usecase::ports::workbook::{SheetError, WorkbookSource};
use crate::usecase::services::field_normalizer::normalize_frame;
use crate::usecase::services::header_locator::{first_row_as_header, locate_header};

/// Everything the dashboard keeps for one category after a load.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryData {
    pub category: Category,
    pub frame: SheetFrame,
    pub inventory: InventoryFrame,
    pub error: Option<String>,
}

impl CategoryData {
    pub fn row_count(&self) -> usize {
        self.frame.rows.len()
    }
}

pub struct SheetLoader<'a> {
    source: &'a dyn WorkbookSource,
}

impl<'a> SheetLoader<'a> {
    pub fn new(source: &'a dyn WorkbookSource) -> Self {
        Self { source }
    }

    /// Reads a sheet, locating its header row or falling back to a second
    /// read with the first row as header.
    pub fn load_sheet(&self, sheet: &str) -> Result<SheetFrame, SheetError> {
        let raw = self.source.read_sheet(sheet)?;

        if let Some(frame) = locate_header(&raw) {
            tracing::debug!(sheet, columns = ?frame.columns, "header row located");
            return Ok(frame);
        }

        tracing::debug!(sheet, "no header marker, re-reading with first row as header");
        let reread = self.source.read_sheet(sheet)?;
        Ok(first_row_as_header(&reread))
    }

    pub fn load_category(&self, category: Category) -> CategoryData {
        let sheet = category.sheet_name();
        match self.load_sheet(sheet) {
            Ok(frame) => {
                let inventory = normalize_frame(&frame);
                tracing::info!(
                    sheet,
                    rows = frame.rows.len(),
                    columns = frame.columns.len(),
                    "sheet loaded"
                );
                CategoryData {
                    category,
                    frame,
                    inventory,
                    error: None,
                }
            }
            Err(err) => {
                tracing::error!(sheet, error = %err, "failed to load sheet");
                CategoryData {
                    category,
                    error: Some(format!("Error reading sheet {sheet}: {err}")),
                    ..CategoryData::default()
                }
            }
        }
    }

    /// Loads all categories sequentially. A failure stays local to its
    /// category.
    pub fn load_all(&self) -> Vec<CategoryData> {
        Category::ALL
            .into_iter()
            .map(|category| self.load_category(category))
            .collect()
    }
}
