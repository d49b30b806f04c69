// File: crates/csv2chart-core/src/model.rs
// Summary: Column-oriented data model (one optional category vector plus numeric vectors).

/// Role of a column, inferred from its data cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Category,
    Numeric,
}

/// One column: a label per header row and a value per data row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataVector {
    pub headers: Vec<String>,
    pub values: Vec<String>,
}

impl DataVector {
    pub fn new(headers: Vec<String>, values: Vec<String>) -> Self {
        Self { headers, values }
    }

    /// Header labels joined with a space; empty when there are no header rows.
    pub fn label(&self) -> String {
        self.headers.join(" ")
    }
}

/// Classified table.
/// Only one category column is kept: the first non-numeric column from the left.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataModel {
    header_row_count: usize,
    category: Option<DataVector>,
    values: Vec<DataVector>,
}

impl DataModel {
    pub fn new(header_row_count: usize, category: Option<DataVector>, values: Vec<DataVector>) -> Self {
        Self { header_row_count, category, values }
    }

    pub fn header_row_count(&self) -> usize { self.header_row_count }
    pub fn category(&self) -> Option<&DataVector> { self.category.as_ref() }
    /// Numeric vectors in column order.
    pub fn values(&self) -> &[DataVector] { &self.values }

    pub fn data_row_count(&self) -> usize {
        self.category
            .iter()
            .chain(self.values.iter())
            .map(|v| v.values.len())
            .next()
            .unwrap_or(0)
    }
}
