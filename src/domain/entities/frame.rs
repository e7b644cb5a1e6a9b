use std::fmt;

/// A single worksheet cell, independent of the spreadsheet reader.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Date, time or duration cell, already rendered as text.
    Date(String),
}

impl CellValue {
    /// Blank cells and whitespace-only text both count as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) | CellValue::Date(text) => text.trim().is_empty(),
            CellValue::Number(_) | CellValue::Bool(_) => false,
        }
    }

    /// Numeric coercion; anything unparseable is `None`, never zero. Dates
    /// are never quantities.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            CellValue::Empty | CellValue::Date(_) => None,
            CellValue::Number(value) if value.is_finite() => Some(*value),
            CellValue::Number(_) => None,
            CellValue::Bool(value) => Some(if *value { 1.0 } else { 0.0 }),
            CellValue::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite()),
        }
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(text) | CellValue::Date(text) => write!(f, "{text}"),
            CellValue::Number(value) => write!(f, "{}", format_number(*value)),
            CellValue::Bool(value) => write!(f, "{value}"),
        }
    }
}

/// Integers print without a fractional part, everything else keeps up to six
/// decimals with trailing zeros removed. Values outside the `i64` range keep
/// the plain float form.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if value.abs() >= i64::MAX as f64 {
        return format!("{value}");
    }
    if value.fract().abs() < f64::EPSILON {
        format!("{}", value as i64)
    } else {
        let mut text = format!("{value:.6}");
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
        text
    }
}

/// Sheet contents as read, with no header assumption.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawFrame {
    pub rows: Vec<Vec<CellValue>>,
}

impl RawFrame {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }
}

/// A frame whose header row has been placed. Data rows are padded to the
/// column count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetFrame {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetFrame {
    /// Builds a frame from header cells and data rows, then drops rows and
    /// columns without any non-empty data cell.
    pub fn from_header(header: &[CellValue], data: &[Vec<CellValue>]) -> Self {
        let width = data
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(header.len()))
            .max()
            .unwrap_or(0);

        let columns: Vec<String> = (0..width)
            .map(|idx| {
                header
                    .get(idx)
                    .map(|cell| cell.to_text().trim().to_string())
                    .unwrap_or_default()
            })
            .collect();

        let rows: Vec<Vec<CellValue>> = data
            .iter()
            .filter(|row| row.iter().any(|cell| !cell.is_empty()))
            .map(|row| {
                let mut padded = row.clone();
                padded.resize(width, CellValue::Empty);
                padded
            })
            .collect();

        let keep: Vec<usize> = (0..width)
            .filter(|&col| rows.iter().any(|row| !row[col].is_empty()))
            .collect();

        Self {
            columns: keep.iter().map(|&col| columns[col].clone()).collect(),
            rows: rows
                .into_iter()
                .map(|row| keep.iter().map(|&col| row[col].clone()).collect())
                .collect(),
        }
    }

    /// True for the "not found" frame: no rows or no columns left.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }
}
