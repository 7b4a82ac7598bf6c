//! Tabular input: typed columns, datasets and design-matrix assembly.
//!
//! Columns are declared as numeric or categorical up front. Missing cells are
//! `None` (or NaN for numeric columns, or a blank string for categorical
//! ones). Categorical columns are dummy-encoded before incomplete rows are
//! dropped, so the encoding sees every level present in the input.

mod design;
mod encoding;

pub use design::{assemble_design, DesignData};
pub use encoding::{categorical_levels, dummy_encode, DummyColumns};

/// Values of one column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// Numeric cells; `None` or NaN is missing.
    Numeric(Vec<Option<f64>>),
    /// Categorical cells; `None` or a blank string is missing.
    Categorical(Vec<Option<String>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(values) => values.len(),
            ColumnData::Categorical(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnData::Numeric(_))
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Numeric column with explicit missing cells.
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self::new(name, ColumnData::Numeric(values))
    }

    /// Numeric column from plain values; NaN marks a missing cell.
    pub fn from_f64(name: impl Into<String>, values: &[f64]) -> Self {
        let values = values
            .iter()
            .map(|&v| if v.is_nan() { None } else { Some(v) })
            .collect();
        Self::numeric(name, values)
    }

    /// Numeric column parsed from text cells.
    ///
    /// Cells are trimmed; empty or unparseable cells become missing.
    pub fn numeric_from_cells(name: impl Into<String>, cells: &[&str]) -> Self {
        let values = cells
            .iter()
            .map(|cell| {
                cell.trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|v| !v.is_nan())
            })
            .collect();
        Self::numeric(name, values)
    }

    /// Categorical column with explicit missing cells.
    pub fn categorical(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self::new(name, ColumnData::Categorical(values))
    }

    /// Categorical column from labels; blank labels are missing.
    pub fn categorical_from_strs(name: impl Into<String>, labels: &[&str]) -> Self {
        let values = labels
            .iter()
            .map(|label| {
                if label.trim().is_empty() {
                    None
                } else {
                    Some(label.to_string())
                }
            })
            .collect();
        Self::categorical(name, values)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether cell `i` is missing.
    pub fn is_missing(&self, i: usize) -> bool {
        match &self.data {
            ColumnData::Numeric(values) => values.get(i).map_or(true, |v| match v {
                Some(x) => x.is_nan(),
                None => true,
            }),
            ColumnData::Categorical(values) => values.get(i).map_or(true, |v| match v {
                Some(s) => s.trim().is_empty(),
                None => true,
            }),
        }
    }
}

/// An ordered collection of named columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column, replacing any existing column with the same name.
    pub fn push(&mut self, column: Column) {
        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
    }

    /// Builder-style `push`.
    pub fn with_column(mut self, column: Column) -> Self {
        self.push(column);
        self
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }
}

impl FromIterator<Column> for Dataset {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        let mut dataset = Dataset::new();
        for column in iter {
            dataset.push(column);
        }
        dataset
    }
}
