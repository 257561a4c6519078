use crate::{
    error::MatrixError,
    interpreter::value::{
        matrix::{Matrix, MatrixResult, entry_count},
        rational::Rational,
    },
};

impl Matrix {
    /// Entrywise sum of two matrices of identical shape.
    ///
    /// # Errors
    /// `DimensionMismatch` unless both row and column counts agree.
    pub fn add(&self, other: &Self) -> MatrixResult<Self> {
        if self.rows != other.rows || self.columns != other.columns {
            return Err(self.mismatch("add", other));
        }

        let entries = self.entries
                          .iter()
                          .zip(&other.entries)
                          .map(|(a, b)| a.checked_add(*b).map(Rational::reduce))
                          .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows: self.rows,
                  columns: self.columns,
                  entries })
    }

    /// Multiplies every entry by `factor`.
    ///
    /// # Errors
    /// Only on fixed-width overflow.
    pub fn scale(&self, factor: Rational) -> MatrixResult<Self> {
        let mut scaled = self.clone();
        for row in 0..scaled.rows {
            scaled.scale_row_at(row, factor)?;
        }
        Ok(scaled)
    }

    /// Matrix product `self * other`.
    ///
    /// Each entry is accumulated over `k` from left to right, starting from
    /// zero.
    ///
    /// # Errors
    /// - `DimensionMismatch` unless `self.columns() == other.rows()`.
    /// - `TooLarge` if the product would exceed the entry limit.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::interpreter::value::{matrix::Matrix, rational::Rational};
    ///
    /// let r = Rational::from;
    /// let a = Matrix::from_rows(vec![vec![r(1), r(2)], vec![r(3), r(4)]]).unwrap();
    /// let b = Matrix::from_rows(vec![vec![r(5)], vec![r(6)]]).unwrap();
    ///
    /// let product = a.multiply(&b).unwrap();
    /// assert_eq!(product, Matrix::from_rows(vec![vec![r(17)], vec![r(39)]]).unwrap());
    /// assert!(b.multiply(&b).is_err());
    /// ```
    pub fn multiply(&self, other: &Self) -> MatrixResult<Self> {
        if self.columns != other.rows {
            return Err(self.mismatch("multiply", other));
        }

        let mut product = Self::zeros(self.rows, other.columns)?;
        for row in 0..self.rows {
            for column in 0..other.columns {
                let mut sum = Rational::ZERO;
                for k in 0..self.columns {
                    let term = self.at(row, k).checked_mul(other.at(k, column))?;
                    sum = sum.checked_add(term)?.reduce();
                }
                let index = product.index(row, column);
                product.entries[index] = sum;
            }
        }
        Ok(product)
    }

    /// Places the columns of `other` to the right of the columns of `self`.
    ///
    /// # Errors
    /// - `DimensionMismatch` unless both have the same number of rows.
    /// - `TooLarge` if the result would exceed the entry limit.
    pub fn augment(&self, other: &Self) -> MatrixResult<Self> {
        if self.rows != other.rows {
            return Err(self.mismatch("augment", other));
        }

        let columns = self.columns + other.columns;
        let mut entries = Vec::with_capacity(entry_count(self.rows, columns)?);
        for row in 0..self.rows {
            entries.extend((0..self.columns).map(|c| self.at(row, c)));
            entries.extend((0..other.columns).map(|c| other.at(row, c)));
        }

        Ok(Self { rows: self.rows,
                  columns,
                  entries })
    }

    /// Swaps the roles of rows and columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let entries = (0..self.columns).flat_map(|column| {
                                           (0..self.rows).map(move |row| self.at(row, column))
                                       })
                                       .collect();
        Self { rows: self.columns,
               columns: self.rows,
               entries }
    }

    /// Copies the 1-based inclusive column range `first..=last`.
    ///
    /// `last == first - 1` selects no columns.
    ///
    /// # Errors
    /// `OutOfBounds` if the range leaves the matrix.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::interpreter::value::matrix::Matrix;
    ///
    /// let a = Matrix::identity(2).unwrap();
    /// let b = Matrix::zeros(2, 1).unwrap();
    /// let joined = a.augment(&b).unwrap();
    ///
    /// assert_eq!(joined.column_slice(1, 2).unwrap(), a);
    /// assert_eq!(joined.column_slice(3, 3).unwrap(), b);
    /// ```
    pub fn column_slice(&self, first: usize, last: usize) -> MatrixResult<Self> {
        if first == 0 || last > self.columns || last + 1 < first {
            return Err(self.out_of_bounds(1, if first == 0 { first } else { last }));
        }

        let columns = last + 1 - first;
        let mut entries = Vec::with_capacity(self.rows * columns);
        for row in 0..self.rows {
            entries.extend((first - 1..last).map(|c| self.at(row, c)));
        }

        Ok(Self { rows: self.rows,
                  columns,
                  entries })
    }

    const fn mismatch(&self, operation: &'static str, other: &Self) -> MatrixError {
        MatrixError::DimensionMismatch { operation,
                                         left_rows: self.rows,
                                         left_columns: self.columns,
                                         right_rows: other.rows,
                                         right_columns: other.columns }
    }
}
