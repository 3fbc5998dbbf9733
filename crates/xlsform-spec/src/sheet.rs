use std::collections::{BTreeMap, BTreeSet};
use std::io;

use crate::error::{SourceFormatError, XlsFormError};

pub const SURVEY_SHEET: &str = "survey";
pub const CHOICES_SHEET: &str = "choices";
pub const SETTINGS_SHEET: &str = "settings";

/// Cells of one row keyed by column. Absent and blank cells are not stored.
pub type Row = BTreeMap<String, String>;

/// The cells of `row` that hold more than whitespace.
pub fn non_blank(row: &Row) -> Row {
    row.iter()
        .filter(|(_, cell)| !cell.trim().is_empty())
        .map(|(column, cell)| (column.clone(), cell.clone()))
        .collect()
}

/// A sheet: ordered columns over rows of text cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Builds a table from a header and positional records. Blank cells and
    /// cells past the header are dropped.
    pub fn from_records<H, R, C>(header: H, records: impl IntoIterator<Item = R>) -> Self
    where
        H: IntoIterator<Item = C>,
        R: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let columns: Vec<String> = header.into_iter().map(Into::into).collect();
        let rows = records
            .into_iter()
            .map(|record| {
                columns
                    .iter()
                    .zip(record)
                    .filter_map(|(column, cell)| {
                        let cell: String = cell.into();
                        (!cell.is_empty()).then(|| (column.clone(), cell))
                    })
                    .collect()
            })
            .collect();
        Self { columns, rows }
    }

    /// Builds a table from rows of ordered `(column, cell)` pairs.
    ///
    /// Columns appear in first-seen order; columns that never hold a cell are
    /// left out.
    pub fn shape(rows: impl IntoIterator<Item = Vec<(String, String)>>) -> Self {
        let mut columns = Vec::new();
        let mut seen = BTreeSet::new();
        let rows = rows
            .into_iter()
            .map(|cells| {
                let mut row = Row::new();
                for (column, cell) in cells {
                    if cell.is_empty() {
                        continue;
                    }
                    if seen.insert(column.clone()) {
                        columns.push(column.clone());
                    }
                    row.insert(column, cell);
                }
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Drops rows without any non-blank cell and columns blank in every row.
    pub fn compact(&self) -> Self {
        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(non_blank)
            .filter(|row| !row.is_empty())
            .collect();
        let columns = self
            .columns
            .iter()
            .filter(|column| rows.iter().any(|row| row.contains_key(column.as_str())))
            .cloned()
            .collect();
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Positional records in column order, absent cells as empty text.
    pub fn records(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        self.rows.iter().map(|row| {
            self.columns
                .iter()
                .map(|column| row.get(column).map(String::as_str).unwrap_or(""))
                .collect()
        })
    }
}

/// Reads named sheets. A sheet that does not exist is `Ok(None)`.
pub trait SheetReader {
    fn read_sheet(&self, name: &str) -> io::Result<Option<Table>>;
}

/// Writes named sheets, replacing any previous content.
pub trait SheetWriter {
    fn write_sheet(&mut self, name: &str, table: &Table) -> io::Result<()>;
}

/// The three sheets of a survey in tabular form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workbook {
    pub survey: Table,
    pub choices: Table,
    pub settings: Table,
}

impl Workbook {
    pub fn read_from(reader: &impl SheetReader) -> Result<Self, XlsFormError> {
        let read = |name: &str| -> Result<Table, XlsFormError> {
            reader.read_sheet(name)?.ok_or_else(|| {
                SourceFormatError::MissingSheet {
                    sheet: name.to_string(),
                }
                .into()
            })
        };
        Ok(Self {
            survey: read(SURVEY_SHEET)?,
            choices: read(CHOICES_SHEET)?,
            settings: read(SETTINGS_SHEET)?,
        })
    }

    pub fn write_to(&self, writer: &mut impl SheetWriter) -> Result<(), XlsFormError> {
        for (name, table) in self.sheets() {
            writer.write_sheet(name, table)?;
        }
        Ok(())
    }

    pub fn sheets(&self) -> [(&'static str, &Table); 3] {
        [
            (SURVEY_SHEET, &self.survey),
            (CHOICES_SHEET, &self.choices),
            (SETTINGS_SHEET, &self.settings),
        ]
    }
}

/// Sheets held in memory, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryWorkbook {
    sheets: BTreeMap<String, Table>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, table: Table) -> Option<Table> {
        self.sheets.insert(name.into(), table)
    }

    pub fn sheet(&self, name: &str) -> Option<&Table> {
        self.sheets.get(name)
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.keys().map(String::as_str)
    }
}

impl SheetReader for MemoryWorkbook {
    fn read_sheet(&self, name: &str) -> io::Result<Option<Table>> {
        Ok(self.sheets.get(name).cloned())
    }
}

impl SheetWriter for MemoryWorkbook {
    fn write_sheet(&mut self, name: &str, table: &Table) -> io::Result<()> {
        self.sheets.insert(name.to_string(), table.clone());
        Ok(())
    }
}
