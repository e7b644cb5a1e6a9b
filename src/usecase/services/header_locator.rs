use crate::domain::entities::frame::{RawFrame, SheetFrame};

pub const HEADER_MARKER: &str = "ESTOQUE";

/// Index of the first row with a cell containing the marker, compared in
/// upper case.
pub fn find_header_row(raw: &RawFrame) -> Option<usize> {
    raw.rows.iter().position(|row| {
        row.iter()
            .any(|cell| cell.to_text().to_uppercase().contains(HEADER_MARKER))
    })
}

/// Promotes the marker row to column names. Rows above it are discarded.
pub fn locate_header(raw: &RawFrame) -> Option<SheetFrame> {
    let header_idx = find_header_row(raw)?;
    Some(SheetFrame::from_header(
        &raw.rows[header_idx],
        &raw.rows[header_idx + 1..],
    ))
}

/// Fallback used when no row carries the marker.
pub fn first_row_as_header(raw: &RawFrame) -> SheetFrame {
    match raw.rows.split_first() {
        Some((header, data)) => SheetFrame::from_header(header, data),
        None => SheetFrame::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::frame::CellValue;

    fn row(cells: &[&str]) -> Vec<CellValue> {
        cells
            .iter()
            .map(|c| {
                if c.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::Text(c.to_string())
                }
            })
            .collect()
    }

    #[test]
    fn marker_match_is_case_insensitive_substring() {
        let raw = RawFrame::new(vec![
            row(&["Relatório semanal", ""]),
            row(&["Produto", "estoque atual"]),
            row(&["Beer A", "10"]),
        ]);

        assert_eq!(find_header_row(&raw), Some(1));
    }

    #[test]
    fn earliest_qualifying_row_wins() {
        let raw = RawFrame::new(vec![
            row(&["Produto", "Estoque"]),
            row(&["Beer A", "10"]),
            row(&["Nome", "ESTOQUE MINIMO"]),
        ]);

        let frame = locate_header(&raw).expect("header should be found");

        assert_eq!(frame.columns, vec!["Produto", "Estoque"]);
        assert_eq!(frame.rows.len(), 2, "later marker row becomes data");
    }

    #[test]
    fn rows_above_header_are_discarded() {
        let raw = RawFrame::new(vec![
            row(&["Inventário", "Março"]),
            row(&["Produto", "Estoque"]),
            row(&["Beer A", "10"]),
        ]);

        let frame = locate_header(&raw).expect("header should be found");

        assert_eq!(frame.rows, vec![row(&["Beer A", "10"])]);
    }

    #[test]
    fn no_marker_returns_none() {
        let raw = RawFrame::new(vec![row(&["Produto", "Qtd"]), row(&["Beer A", "10"])]);

        assert!(locate_header(&raw).is_none());
    }

    #[test]
    fn first_row_fallback_handles_empty_input() {
        assert!(first_row_as_header(&RawFrame::default()).is_empty());

        let raw = RawFrame::new(vec![row(&["Produto", "Qtd"]), row(&["Beer A", "10"])]);
        let frame = first_row_as_header(&raw);
        assert_eq!(frame.columns, vec!["Produto", "Qtd"]);
        assert_eq!(frame.rows.len(), 1);
    }
}
