use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Categorical(Vec<String>),
    Numeric(Vec<f64>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Categorical(values) => values.len(),
            Column::Numeric(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Column::Categorical(_) => "categorical",
            Column::Numeric(_) => "numeric",
        }
    }
}

/// Named, ordered columns of equal length handed to a [`Regressor`](super::Regressor).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureFrame {
    columns: Vec<(String, Column)>,
}

impl FeatureFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Result<Self> {
        let name = name.into();

        if self.column(&name).is_some() {
            return Err(Error::model(format!("duplicate column '{name}'")));
        }
        if let Some((_, first)) = self.columns.first() {
            if first.len() != column.len() {
                return Err(Error::model(format!(
                    "column '{}' has {} rows, expected {}",
                    name,
                    column.len(),
                    first.len()
                )));
            }
        }

        self.columns.push((name, column));
        Ok(self)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(column_name, _)| column_name == name)
            .map(|(_, column)| column)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, |(_, column)| column.len())
    }
}
