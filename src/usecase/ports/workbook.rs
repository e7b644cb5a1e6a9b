use crate::domain::entities::frame::RawFrame;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    WorkbookUnavailable(String),
    SheetNotFound(String),
    Read(String),
}

impl std::fmt::Display for SheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetError::WorkbookUnavailable(message) => {
                write!(f, "workbook unavailable: {message}")
            }
            SheetError::SheetNotFound(sheet) => write!(f, "sheet not found: {sheet}"),
            SheetError::Read(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for SheetError {}

/// Read access to a category workbook. Every call opens the source afresh.
pub trait WorkbookSource {
    fn read_sheet(&self, sheet: &str) -> Result<RawFrame, SheetError>;
}
