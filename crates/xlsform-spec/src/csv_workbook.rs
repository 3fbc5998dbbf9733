use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use crate::sheet::{SheetReader, SheetWriter, Table};

/// A workbook stored as one `<sheet>.csv` file per sheet in a directory.
#[derive(Debug, Clone)]
pub struct CsvWorkbook {
    dir: PathBuf,
    delimiter: u8,
}

impl CsvWorkbook {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn sheet_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.csv"))
    }
}

impl SheetReader for CsvWorkbook {
    fn read_sheet(&self, name: &str) -> io::Result<Option<Table>> {
        let path = self.sheet_path(name);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(file);
        let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let mut records = Vec::new();
        for record in reader.records() {
            let record = record?;
            records.push(record.iter().map(str::to_string).collect::<Vec<_>>());
        }
        debug!(path = %path.display(), rows = records.len(), "read sheet");
        Ok(Some(Table::from_records(header, records)))
    }
}

impl SheetWriter for CsvWorkbook {
    fn write_sheet(&mut self, name: &str, table: &Table) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.sheet_path(name);
        if table.columns().is_empty() {
            return fs::write(&path, "");
        }

        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(&path)?;
        writer.write_record(table.columns())?;
        for record in table.records() {
            writer.write_record(record)?;
        }
        writer.flush()?;
        debug!(path = %path.display(), rows = table.len(), "wrote sheet");
        Ok(())
    }
}
