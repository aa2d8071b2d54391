//! Numeric tables.
//!
//! Tables are the boundary representation of containers: construction reads
//! one row per element and `as_numeric` writes one. Cells are `Option<f64>`,
//! where `None` is a missing cell.

use crate::GeometryError;

/// Dense row-major matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    nrow: usize,
    ncol: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Creates a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns an error if the length of `data` is not `nrow * ncol`.
    pub fn new(nrow: usize, ncol: usize, data: Vec<T>) -> Result<Self, GeometryError> {
        if data.len() != nrow * ncol {
            Err(GeometryError::SizeMismatch {
                expected: nrow * ncol,
                actual: data.len(),
            })
        }
        else {
            Ok(Matrix { nrow, ncol, data })
        }
    }

    /// Creates a matrix from rows of equal width.
    ///
    /// # Errors
    ///
    /// Returns an error if any row does not have `ncol` cells.
    pub fn from_rows<I, R>(ncol: usize, rows: I) -> Result<Self, GeometryError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut nrow = 0;
        let mut data = Vec::new();
        for row in rows {
            let start = data.len();
            data.extend(row);
            let width = data.len() - start;
            if width != ncol {
                return Err(GeometryError::SizeMismatch {
                    expected: ncol,
                    actual: width,
                });
            }
            nrow += 1;
        }
        Ok(Matrix { nrow, ncol, data })
    }

    pub fn from_fn<F>(nrow: usize, ncol: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(nrow * ncol);
        for i in 0..nrow {
            for j in 0..ncol {
                data.push(f(i, j));
            }
        }
        Matrix { nrow, ncol, data }
    }

    pub fn nrow(&self) -> usize {
        self.nrow
    }

    pub fn ncol(&self) -> usize {
        self.ncol
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if row < self.nrow && column < self.ncol {
            self.data.get((row * self.ncol) + column)
        }
        else {
            None
        }
    }

    /// Gets the cells of a row.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn row(&self, index: usize) -> &[T] {
        &self.data[(index * self.ncol)..((index + 1) * self.ncol)]
    }

    pub fn rows(&self) -> impl '_ + ExactSizeIterator<Item = &[T]> {
        (0..self.nrow).map(move |index| self.row(index))
    }

    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use crate::table::Matrix;
    use crate::GeometryError;

    #[test]
    fn collect_rows() {
        let matrix = Matrix::from_rows(2, vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();

        assert_eq!(3, matrix.nrow());
        assert_eq!(2, matrix.ncol());
        assert_eq!(&[3, 4], matrix.row(1));
        assert_eq!(Some(&6), matrix.get(2, 1));
        assert_eq!(None, matrix.get(3, 0));
        assert_eq!(vec![1, 2, 3, 4, 5, 6], matrix.into_vec());
    }

    #[test]
    fn reject_ragged_rows() {
        assert_eq!(
            Err(GeometryError::SizeMismatch {
                expected: 2,
                actual: 3,
            }),
            Matrix::from_rows(2, vec![vec![1, 2], vec![3, 4, 5]]),
        );
    }

    #[test]
    fn empty_columns() {
        let matrix = Matrix::<f64>::from_fn(3, 0, |_, _| 0.0);

        assert_eq!(3, matrix.rows().len());
        assert!(matrix.rows().all(|row| row.is_empty()));
    }
}
