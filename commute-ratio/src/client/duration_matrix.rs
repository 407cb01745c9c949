use super::DistanceMatrixError;

/// travel durations in seconds indexed `[origin][destination]`. cells with no
/// route hold 0.
#[derive(Clone, Debug, PartialEq)]
pub struct DurationMatrix {
    rows: Vec<Vec<f64>>,
}

impl DurationMatrix {
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// confirms there is one row per origin and one column per destination
    /// in every row.
    pub fn check_shape(
        &self,
        n_origins: usize,
        n_destinations: usize,
    ) -> Result<(), DistanceMatrixError> {
        if self.rows.len() != n_origins {
            return Err(DistanceMatrixError::MalformedResponseError(format!(
                "expected {n_origins} rows for {n_origins} origins, found {}",
                self.rows.len()
            )));
        }
        for (idx, row) in self.rows.iter().enumerate() {
            if row.len() != n_destinations {
                return Err(DistanceMatrixError::MalformedResponseError(format!(
                    "expected {n_destinations} elements in row {idx} for {n_destinations} destinations, found {}",
                    row.len()
                )));
            }
        }
        Ok(())
    }

    /// arithmetic mean of each row; an empty row averages to 0.
    pub fn row_means(&self) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| {
                if row.is_empty() {
                    0.0
                } else {
                    row.iter().sum::<f64>() / row.len() as f64
                }
            })
            .collect()
    }

    /// the first row, for single-origin requests
    pub fn into_first_row(self) -> Option<Vec<f64>> {
        self.rows.into_iter().next()
    }
}
