//! Per-block darkness values.

/// A `columns x rows` grid of darkness values in `[0, 1]`.
///
/// Cells are addressed `(column, row)`; storage is row-major so iteration
/// order matches the block scan. `0.0` is white, `1.0` is black.
#[derive(Debug, Clone, PartialEq)]
pub struct DarknessMatrix {
    columns: usize,
    rows: usize,
    values: Vec<f64>,
}

impl DarknessMatrix {
    /// Build a matrix from row-major values.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != columns * rows`.
    pub fn from_row_major(columns: usize, rows: usize, values: Vec<f64>) -> Self {
        assert_eq!(
            values.len(),
            columns * rows,
            "darkness matrix needs {} values for {}x{}",
            columns * rows,
            columns,
            rows
        );
        Self {
            columns,
            rows,
            values,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// True when the image was smaller than one block in either direction.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Darkness of the block at `(column, row)`, or `None` if out of range.
    pub fn get(&self, column: usize, row: usize) -> Option<f64> {
        if column < self.columns && row < self.rows {
            Some(self.values[row * self.columns + column])
        } else {
            None
        }
    }

    /// Iterate `(column, row, darkness)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let columns = self.columns.max(1);
        self.values
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i % columns, i / columns, v))
    }
}
