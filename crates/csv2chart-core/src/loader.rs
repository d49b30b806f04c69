// File: crates/csv2chart-core/src/loader.rs
// Summary: Reads delimited text into a Matrix, applies directives and classifies rows/columns.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::config::LoaderOptions;
use crate::directive::{split_directive, Overrides};
use crate::error::{Error, Result};
use crate::matrix::{clean, Matrix};
use crate::model::{ColumnKind, DataModel, DataVector};

/// Literal splitting: no quoting, no header record, ragged rows allowed.
fn reader_builder(separator: u8) -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true).quoting(false).delimiter(separator);
    builder
}

/// Trimmed fields of one record; trailing empty fields are dropped.
fn record_fields(record: &StringRecord) -> Vec<String> {
    let mut fields: Vec<String> = record.iter().map(|f| f.trim().to_string()).collect();
    while fields.last().is_some_and(String::is_empty) {
        fields.pop();
    }
    fields
}

/// Split one data line on the literal separator and trim every field.
/// Quotes are kept as-is; trailing empty fields are dropped.
pub fn parse_line(line: &str, separator: u8) -> Result<Vec<String>> {
    let mut rdr = reader_builder(separator).from_reader(line.as_bytes());
    let mut record = StringRecord::new();
    if !rdr.read_record(&mut record)? {
        return Ok(Vec::new());
    }
    Ok(record_fields(&record))
}

/// Line-oriented reader: blank lines are skipped, comment lines feed
/// directives into the returned [`Overrides`], every other line becomes a row.
pub struct TableLoader {
    options: LoaderOptions,
}

impl TableLoader {
    pub fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LoaderOptions { &self.options }

    /// Ingest in-memory text.
    pub fn ingest(&self, contents: &str) -> Result<(Matrix, Overrides)> {
        self.ingest_reader(contents.as_bytes())
    }

    /// Stream records from `reader` through a single CSV reader.
    /// Read failures and invalid UTF-8 surface as [`Error::Csv`].
    pub fn ingest_reader<R: Read>(&self, reader: R) -> Result<(Matrix, Overrides)> {
        let mut rdr = reader_builder(self.options.separator).from_reader(reader);
        let separator = char::from(self.options.separator).to_string();
        let comment = self.options.comment.as_str();

        let mut matrix = Matrix::new();
        let mut overrides = Overrides::new();
        let mut record = StringRecord::new();
        let mut y = 0;

        while rdr.read_record(&mut record)? {
            // Quoting is off, so joining the fields restores the raw line.
            let line = record.iter().collect::<Vec<_>>().join(separator.as_str());
            if line.trim().is_empty() {
                continue;
            }
            if line.starts_with(comment) {
                if let Some((name, value)) = split_directive(&line) {
                    overrides.set(name, value)?;
                }
                continue;
            }
            for (x, field) in record_fields(&record).into_iter().enumerate() {
                matrix.set(x, y, field);
            }
            y += 1;
        }
        Ok((matrix, overrides))
    }

    /// Open `path` and ingest it. The file is closed before this returns,
    /// on success and on error alike.
    pub fn load_matrix(&self, path: impl AsRef<Path>) -> Result<(Matrix, Overrides)> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
        let loaded = self.ingest_reader(file)?;
        tracing::info!(
            path = %path.display(),
            width = loaded.0.width(),
            height = loaded.0.height(),
            "loaded table"
        );
        Ok(loaded)
    }

    /// Load `path` and classify it into a [`DataModel`].
    pub fn load_model(&self, path: impl AsRef<Path>) -> Result<(DataModel, Overrides)> {
        let (matrix, overrides) = self.load_matrix(path)?;
        let model = build_model(&matrix, overrides.strip())?;
        Ok((model, overrides))
    }
}

impl Default for TableLoader {
    fn default() -> Self {
        Self::new(LoaderOptions::default())
    }
}

/// Number of leading rows without any numeric cell. The first row holding a
/// number anywhere starts the data region; with no such row, every row is a header.
pub fn detect_header_row_count(matrix: &Matrix, strip: bool) -> usize {
    let count = (0..matrix.height())
        .find(|&y| matrix.contains_numbers(0, y, matrix.width(), 1, strip))
        .unwrap_or(matrix.height());
    tracing::debug!(header_rows = count, height = matrix.height(), "detected header rows");
    count
}

/// A column is numeric when any of its data cells is a number.
pub fn classify_column(matrix: &Matrix, x: usize, header_row_count: usize, strip: bool) -> ColumnKind {
    let data_rows = matrix.height().saturating_sub(header_row_count);
    if matrix.contains_numbers(x, header_row_count, 1, data_rows, strip) {
        ColumnKind::Numeric
    } else {
        ColumnKind::Category
    }
}

/// Collect column `x` into header labels and data values.
/// Fails on the first missing cell instead of passing blanks downstream.
pub fn build_data_vector(matrix: &Matrix, x: usize, header_row_count: usize, strip: bool) -> Result<DataVector> {
    let cell = |y: usize| -> Result<String> {
        matrix
            .get(x, y)
            .map(|v| clean(v, strip).to_string())
            .ok_or(Error::MissingCell { column: x, row: y })
    };
    let header_rows = header_row_count.min(matrix.height());
    let headers = (0..header_rows).map(&cell).collect::<Result<Vec<_>>>()?;
    let values = (header_rows..matrix.height()).map(&cell).collect::<Result<Vec<_>>>()?;
    Ok(DataVector::new(headers, values))
}

/// Classify every column: numeric columns become value vectors, the first
/// category column becomes the model's category. Further category columns
/// are dropped.
pub fn build_model(matrix: &Matrix, strip: bool) -> Result<DataModel> {
    let header_row_count = detect_header_row_count(matrix, strip);
    let mut category = None;
    let mut values = Vec::new();

    for x in 0..matrix.width() {
        match classify_column(matrix, x, header_row_count, strip) {
            ColumnKind::Numeric => values.push(build_data_vector(matrix, x, header_row_count, strip)?),
            ColumnKind::Category if category.is_none() => {
                category = Some(build_data_vector(matrix, x, header_row_count, strip)?);
            }
            ColumnKind::Category => {
                tracing::debug!(column = x, "dropping additional category column");
            }
        }
    }
    Ok(DataModel::new(header_row_count, category, values))
}
