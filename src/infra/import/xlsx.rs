use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calamine::{open_workbook, Data, ExcelDateTime, Range, Reader, Xlsx};
use chrono::Timelike;

use crate::domain::entities::frame::{CellValue, RawFrame};
use crate::usecase::ports::workbook::{SheetError, WorkbookSource};

pub fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::String(v) => CellValue::Text(v.to_string()),
        Data::Float(v) => CellValue::Number(*v),
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Bool(v) => CellValue::Bool(*v),
        Data::DateTime(v) => CellValue::Date(excel_date_text(v)),
        Data::DateTimeIso(v) => CellValue::Date(v.to_string()),
        Data::DurationIso(v) => CellValue::Date(v.to_string()),
        Data::Error(v) => CellValue::Text(format!("{v:?}")),
        Data::Empty => CellValue::Empty,
    }
}

/// Calendar dates render as `YYYY-MM-DD`, with the time only when it is not
/// midnight. Durations keep the raw serial.
fn excel_date_text(value: &ExcelDateTime) -> String {
    match value.as_datetime() {
        Some(datetime) if !value.is_duration() => {
            if datetime.num_seconds_from_midnight() == 0 {
                datetime.format("%Y-%m-%d").to_string()
            } else {
                datetime.format("%Y-%m-%d %H:%M:%S").to_string()
            }
        }
        _ => value.as_f64().to_string(),
    }
}

fn range_to_raw(range: &Range<Data>) -> RawFrame {
    RawFrame::new(
        range
            .rows()
            .map(|row| row.iter().map(cell_value).collect())
            .collect(),
    )
}

/// Opens the workbook read-only as `.xlsx` regardless of the file extension,
/// reads one sheet, and drops the handle.
/// `Ok(None)` means the workbook opened but has no such sheet.
pub fn read_xlsx_sheet(xlsx_path: &Path, sheet: &str) -> Result<Option<RawFrame>> {
    let mut workbook: Xlsx<_> = open_workbook(xlsx_path)
        .with_context(|| format!("failed to open xlsx: {}", xlsx_path.display()))?;

    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Ok(None);
    }

    let range = workbook
        .worksheet_range(sheet)
        .with_context(|| format!("failed to read sheet: {sheet}"))?;

    Ok(Some(range_to_raw(&range)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XlsxWorkbook {
    pub path: PathBuf,
}

impl XlsxWorkbook {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WorkbookSource for XlsxWorkbook {
    fn read_sheet(&self, sheet: &str) -> Result<RawFrame, SheetError> {
        if !self.path.is_file() {
            return Err(SheetError::WorkbookUnavailable(format!(
                "file not found: {}",
                self.path.display()
            )));
        }

        match read_xlsx_sheet(&self.path, sheet) {
            Ok(Some(raw)) => {
                tracing::debug!(sheet, rows = raw.rows.len(), "raw sheet read");
                Ok(raw)
            }
            Ok(None) => Err(SheetError::SheetNotFound(sheet.to_string())),
            Err(err) => Err(SheetError::Read(format!("{err:#}"))),
        }
    }
}
