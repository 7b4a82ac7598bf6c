//! Dummy (treatment) encoding of categorical columns.

/// 0/1 indicator columns for the non-reference levels of one variable.
#[derive(Debug, Clone, PartialEq)]
pub struct DummyColumns {
    /// Column labels, `name[level]`.
    pub names: Vec<String>,
    /// All distinct levels in first-occurrence order; the first is the
    /// reference and has no column.
    pub levels: Vec<String>,
    /// One vector per non-reference level, NaN where the source is missing.
    pub columns: Vec<Vec<f64>>,
}

impl DummyColumns {
    /// Number of indicator columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Reference level, if any non-missing value was seen.
    pub fn reference(&self) -> Option<&str> {
        self.levels.first().map(String::as_str)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Distinct non-missing values in first-occurrence order.
pub fn categorical_levels(values: &[Option<String>]) -> Vec<String> {
    let mut levels: Vec<String> = Vec::new();
    for value in values.iter().filter_map(present) {
        if !levels.iter().any(|l| l == value) {
            levels.push(value.to_string());
        }
    }
    levels
}

/// Encode `values` as one indicator column per level except the first.
///
/// A variable with a single level yields no columns.
pub fn dummy_encode(name: &str, values: &[Option<String>]) -> DummyColumns {
    let levels = categorical_levels(values);

    let columns = levels
        .iter()
        .skip(1)
        .map(|level| {
            values
                .iter()
                .map(|v| match present(v) {
                    Some(s) if s == level => 1.0,
                    Some(_) => 0.0,
                    None => f64::NAN,
                })
                .collect()
        })
        .collect();

    let names = levels
        .iter()
        .skip(1)
        .map(|level| format!("{}[{}]", name, level))
        .collect();

    DummyColumns {
        names,
        levels,
        columns,
    }
}
