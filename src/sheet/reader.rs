use crate::config::ColumnLabels;
use crate::error::SheetError;
use crate::sheet::models::*;
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// Open a workbook and load the named worksheet.
///
/// Any format calamine detects from the extension is accepted (.xls, .xlsx,
/// .xlsb, .ods). Published UNECE revisions ship as .xls.
pub fn open_sheet<P: AsRef<Path>>(path: P, sheet_name: &str) -> Result<Range<Data>, SheetError> {
    let path = path.as_ref();
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| SheetError::Workbook(format!("{}: {}", path.display(), e)))?;

    let available = workbook.sheet_names();
    if !available.iter().any(|name| name == sheet_name) {
        return Err(SheetError::SheetNotFound {
            sheet: sheet_name.to_string(),
            available,
        });
    }

    workbook
        .worksheet_range(sheet_name)
        .map_err(|e| SheetError::Workbook(format!("{}: {}", sheet_name, e)))
}

/// Lazy iterator over the data rows of a unit sheet
pub struct UnitRows<I> {
    rows: I,
    columns: ColumnIndices,
}

/// Resolve the header row and return an iterator over the remaining rows.
///
/// Fails before any data row is read if one of the labels is absent.
pub fn unit_rows<'a, I>(mut rows: I, labels: &ColumnLabels) -> Result<UnitRows<I>, SheetError>
where
    I: Iterator<Item = &'a [Data]>,
{
    let header = rows.next().ok_or(SheetError::EmptySheet)?;
    let columns = resolve_columns(header, labels)?;
    tracing::debug!(?columns, "resolved unit columns");

    Ok(UnitRows { rows, columns })
}

impl<I> UnitRows<I> {
    pub fn columns(&self) -> ColumnIndices {
        self.columns
    }
}

impl<'a, I> Iterator for UnitRows<I>
where
    I: Iterator<Item = &'a [Data]>,
{
    type Item = UnitRow;

    fn next(&mut self) -> Option<UnitRow> {
        let row = self.rows.next()?;
        let cell = |idx: usize| row.get(idx).and_then(cell_text);

        Some(UnitRow {
            name: cell(self.columns.name).unwrap_or_default(),
            code: cell(self.columns.code),
            suffix: cell(self.columns.suffix),
        })
    }
}

fn resolve_columns(header: &[Data], labels: &ColumnLabels) -> Result<ColumnIndices, SheetError> {
    // A repeated label resolves to its last occurrence
    let find = |label: &str| {
        header
            .iter()
            .rposition(|cell| matches!(cell, Data::String(s) if s == label))
            .ok_or_else(|| SheetError::MissingColumn(label.to_string()))
    };

    Ok(ColumnIndices {
        name: find(&labels.name)?,
        code: find(&labels.code)?,
        suffix: find(&labels.suffix)?,
    })
}

/// Text of a cell, or None for empty and error cells
pub fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => Some(format!("{}", *f as i64)),
        other => Some(other.to_string()),
    }
}
