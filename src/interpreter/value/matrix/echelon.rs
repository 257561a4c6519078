use crate::{
    error::MatrixError,
    interpreter::value::{
        matrix::{Matrix, MatrixResult},
        rational::Rational,
    },
};

impl Matrix {
    /// Row echelon form.
    ///
    /// Works on a copy. A pivot cursor starts at the first row; each column is
    /// searched, from the cursor down, for a leading entry. When one is found
    /// it is swapped into the cursor row, that row is scaled so the entry
    /// becomes 1, every nonzero entry below it is eliminated, and the cursor
    /// advances. Columns without a leading entry are skipped.
    ///
    /// # Errors
    /// Only on fixed-width overflow.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::interpreter::value::{matrix::Matrix, rational::Rational};
    ///
    /// let r = Rational::from;
    /// let m = Matrix::from_rows(vec![vec![r(0), r(2)], vec![r(3), r(6)]]).unwrap();
    /// let expected = Matrix::from_rows(vec![vec![r(1), r(2)], vec![r(0), r(1)]]).unwrap();
    ///
    /// assert_eq!(m.row_echelon().unwrap(), expected);
    ///
    /// let zero = Matrix::zeros(2, 3).unwrap();
    /// assert_eq!(zero.row_echelon().unwrap(), zero);
    /// ```
    pub fn row_echelon(&self) -> MatrixResult<Self> {
        let mut matrix = self.clone();
        let mut cursor = 0;

        for column in 0..matrix.columns {
            if cursor == matrix.rows {
                break;
            }
            let Some(found) = (cursor..matrix.rows).find(|&row| matrix.leading_at(row, column))
            else {
                continue;
            };

            matrix.swap_rows_at(cursor, found);
            let pivot = matrix.at(cursor, column);
            matrix.scale_row_at(cursor, pivot.reciprocal()?)?;

            let pivot = matrix.at(cursor, column);
            for row in cursor + 1..matrix.rows {
                let entry = matrix.at(row, column);
                if !entry.is_zero() {
                    let factor = entry.checked_div(pivot)?.checked_neg()?;
                    matrix.add_scaled_row_at(cursor, factor, row)?;
                }
            }

            cursor += 1;
        }

        Ok(matrix)
    }

    /// Reduced row echelon form.
    ///
    /// Runs [`Matrix::row_echelon`], then visits every leading entry (columns
    /// left to right, rows top to bottom), scales it to 1 and clears every
    /// nonzero entry above it.
    ///
    /// # Errors
    /// Only on fixed-width overflow.
    pub fn reduced_row_echelon(&self) -> MatrixResult<Self> {
        let mut matrix = self.row_echelon()?;

        for column in 0..matrix.columns {
            for row in 0..matrix.rows {
                if !matrix.leading_at(row, column) {
                    continue;
                }

                let lead = matrix.at(row, column);
                matrix.scale_row_at(row, lead.reciprocal()?)?;

                let lead = matrix.at(row, column);
                for above in (0..row).rev() {
                    let entry = matrix.at(above, column);
                    if !entry.is_zero() {
                        let factor = entry.checked_div(lead)?.checked_neg()?;
                        matrix.add_scaled_row_at(row, factor, above)?;
                    }
                }
            }
        }

        Ok(matrix)
    }

    /// The inverse, through the reduced form of `[self | I]`.
    ///
    /// Every one of the first `n` columns of the reduced matrix must hold a
    /// leading entry equal to exactly 1; the right half is then the inverse.
    ///
    /// # Errors
    /// - `NotSquare` for non-square input.
    /// - `Singular` when the left half does not reduce to the identity.
    /// - `TooLarge` when `[self | I]` would exceed the entry limit.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::{
    ///     error::MatrixError,
    ///     interpreter::value::{matrix::Matrix, rational::Rational},
    /// };
    ///
    /// let r = Rational::from;
    /// let m = Matrix::from_rows(vec![vec![r(2), r(0)], vec![r(0), r(4)]]).unwrap();
    /// let inverse = m.inverse().unwrap();
    /// assert_eq!(inverse.get(2, 2), Rational::new(1, 4).ok());
    ///
    /// let singular = Matrix::from_rows(vec![vec![r(1), r(2)], vec![r(2), r(4)]]).unwrap();
    /// assert_eq!(singular.inverse(), Err(MatrixError::Singular));
    /// ```
    pub fn inverse(&self) -> MatrixResult<Self> {
        if self.rows != self.columns {
            return Err(MatrixError::NotSquare);
        }

        let size = self.rows;
        let reduced = self.augment(&Self::identity(size)?)?.reduced_row_echelon()?;

        for column in 0..size {
            let has_unit_lead = (0..size).any(|row| {
                                             reduced.leading_at(row, column)
                                             && reduced.at(row, column) == Rational::ONE
                                         });
            if !has_unit_lead {
                return Err(MatrixError::Singular);
            }
        }

        reduced.column_slice(size + 1, 2 * size)
    }
}
