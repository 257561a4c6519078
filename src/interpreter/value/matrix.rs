use std::fmt;

use crate::{
    error::MatrixError,
    interpreter::value::rational::{ArithmeticResult, Rational},
};

/// Entrywise and structural operations: add, scale, multiply, augment,
/// transpose and column slicing.
pub mod algebra;
/// Row reduction: row echelon form, reduced row echelon form and inversion.
pub mod echelon;

/// Result type of matrix algebra.
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Largest number of entries a single matrix may hold.
pub const MAX_ENTRIES: usize = 1 << 20;

/// A dense `rows x columns` matrix of fractions, stored row-major.
///
/// Rows and columns are 1-indexed in the public accessors. Every algebraic
/// operation returns a new matrix; only the elementary row operations mutate
/// in place.
///
/// ## Example
/// ```
/// use rowsmith::interpreter::value::{matrix::Matrix, rational::Rational};
///
/// let mut m = Matrix::zeros(2, 3).unwrap();
/// m.set(1, 3, Rational::from(7)).unwrap();
///
/// assert_eq!(m.get(1, 3), Some(Rational::from(7)));
/// assert_eq!(m.get(3, 1), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matrix {
    rows:    usize,
    columns: usize,
    entries: Vec<Rational>,
}

impl Matrix {
    /// A matrix filled with zeros.
    ///
    /// # Errors
    /// `TooLarge` if the shape holds more than [`MAX_ENTRIES`] entries.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::{error::MatrixError, interpreter::value::matrix::Matrix};
    ///
    /// assert_eq!(Matrix::zeros(2, 0).unwrap().rows(), 2);
    /// assert!(matches!(Matrix::zeros(usize::MAX, 2), Err(MatrixError::TooLarge { .. })));
    /// ```
    pub fn zeros(rows: usize, columns: usize) -> MatrixResult<Self> {
        let count = entry_count(rows, columns)?;
        Ok(Self { rows,
                  columns,
                  entries: vec![Rational::ZERO; count] })
    }

    /// A matrix from a row-major sequence of exactly `rows * columns` values.
    ///
    /// # Errors
    /// - `TooLarge` if the shape holds more than [`MAX_ENTRIES`] entries.
    /// - `EntryCount` if the sequence has the wrong length.
    pub fn from_values(rows: usize, columns: usize, values: Vec<Rational>) -> MatrixResult<Self> {
        let expected = entry_count(rows, columns)?;
        if values.len() != expected {
            return Err(MatrixError::EntryCount { expected,
                                                 found: values.len() });
        }
        Ok(Self { rows,
                  columns,
                  entries: values })
    }

    /// A matrix from a list of rows, all of the same length.
    ///
    /// # Errors
    /// `EntryCount` if the rows are ragged.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::interpreter::value::{matrix::Matrix, rational::Rational};
    ///
    /// let r = Rational::from;
    /// let m = Matrix::from_rows(vec![vec![r(1), r(2)], vec![r(3), r(4)]]).unwrap();
    /// assert_eq!((m.rows(), m.columns()), (2, 2));
    /// assert_eq!(m.get(2, 1), Some(r(3)));
    ///
    /// assert!(Matrix::from_rows(vec![vec![r(1)], vec![]]).is_err());
    /// ```
    pub fn from_rows(rows: Vec<Vec<Rational>>) -> MatrixResult<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();
        if let Some(ragged) = rows.iter().find(|row| row.len() != columns) {
            return Err(MatrixError::EntryCount { expected: columns,
                                                 found:    ragged.len(), });
        }
        let entries: Vec<Rational> = rows.into_iter().flatten().collect();
        Self::from_values(row_count, columns, entries)
    }

    /// The `size x size` identity matrix.
    ///
    /// # Errors
    /// `TooLarge` if `size * size` exceeds [`MAX_ENTRIES`].
    pub fn identity(size: usize) -> MatrixResult<Self> {
        let mut matrix = Self::zeros(size, size)?;
        for i in 0..size {
            matrix.entries[i * size + i] = Rational::ONE;
        }
        Ok(matrix)
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// All entries in row-major order.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::interpreter::value::{matrix::Matrix, rational::Rational};
    ///
    /// let m = Matrix::identity(2).unwrap().transpose();
    /// let ones = m.entries().iter().filter(|e| **e == Rational::ONE).count();
    /// assert_eq!((m.entries().len(), ones), (4, 2));
    /// ```
    #[must_use]
    pub fn entries(&self) -> &[Rational] {
        &self.entries
    }

    /// The same matrix with every entry in lowest terms.
    #[must_use]
    pub fn reduced(&self) -> Self {
        Self { rows:    self.rows,
               columns: self.columns,
               entries: self.entries.iter().map(|e| e.reduce()).collect(), }
    }

    /// The entry at 1-based `(row, column)`, or `None` outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<Rational> {
        self.check_position(row, column).ok()?;
        Some(self.at(row - 1, column - 1))
    }

    /// Replaces the entry at 1-based `(row, column)`.
    ///
    /// # Errors
    /// `OutOfBounds` outside the matrix.
    pub fn set(&mut self, row: usize, column: usize, value: Rational) -> MatrixResult<()> {
        self.check_position(row, column)?;
        let index = self.index(row - 1, column - 1);
        self.entries[index] = value;
        Ok(())
    }

    /// Swaps two 1-based rows. Elementary row operation.
    ///
    /// # Errors
    /// `OutOfBounds` if either row does not exist.
    pub fn swap_rows(&mut self, first: usize, second: usize) -> MatrixResult<()> {
        self.check_row(first)?;
        self.check_row(second)?;
        self.swap_rows_at(first - 1, second - 1);
        Ok(())
    }

    /// Multiplies a 1-based row by `factor`. Elementary row operation.
    ///
    /// Entries are reduced after the multiplication.
    ///
    /// # Errors
    /// `OutOfBounds` for a missing row, or an arithmetic failure.
    pub fn scale_row(&mut self, row: usize, factor: Rational) -> MatrixResult<()> {
        self.check_row(row)?;
        Ok(self.scale_row_at(row - 1, factor)?)
    }

    /// Adds `factor` times row `source` to row `target` (both 1-based).
    /// Elementary row operation.
    ///
    /// ## Example
    /// ```
    /// use rowsmith::interpreter::value::{matrix::Matrix, rational::Rational};
    ///
    /// let mut m = Matrix::identity(2).unwrap();
    /// m.add_scaled_row(1, Rational::from(-3), 2).unwrap();
    ///
    /// assert_eq!(m.get(2, 1), Some(Rational::from(-3)));
    /// assert_eq!(m.get(2, 2), Some(Rational::ONE));
    /// ```
    ///
    /// # Errors
    /// `OutOfBounds` for a missing row, or an arithmetic failure.
    pub fn add_scaled_row(&mut self,
                          source: usize,
                          factor: Rational,
                          target: usize)
                          -> MatrixResult<()> {
        self.check_row(source)?;
        self.check_row(target)?;
        Ok(self.add_scaled_row_at(source - 1, factor, target - 1)?)
    }

    /// True if `(row, column)` is nonzero and every entry to its left in the
    /// same row is zero. Positions outside the matrix are never leading.
    #[must_use]
    pub fn is_leading_entry(&self, row: usize, column: usize) -> bool {
        self.check_position(row, column).is_ok() && self.leading_at(row - 1, column - 1)
    }

    const fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    fn at(&self, row: usize, column: usize) -> Rational {
        self.entries[self.index(row, column)]
    }

    fn leading_at(&self, row: usize, column: usize) -> bool {
        !self.at(row, column).is_zero() && (0..column).all(|c| self.at(row, c).is_zero())
    }

    fn swap_rows_at(&mut self, first: usize, second: usize) {
        if first == second {
            return;
        }
        for column in 0..self.columns {
            let (a, b) = (self.index(first, column), self.index(second, column));
            self.entries.swap(a, b);
        }
    }

    fn scale_row_at(&mut self, row: usize, factor: Rational) -> ArithmeticResult<()> {
        for column in 0..self.columns {
            let index = self.index(row, column);
            self.entries[index] = self.entries[index].checked_mul(factor)?.reduce();
        }
        Ok(())
    }

    fn add_scaled_row_at(&mut self,
                         source: usize,
                         factor: Rational,
                         target: usize)
                         -> ArithmeticResult<()> {
        for column in 0..self.columns {
            let addend = self.at(source, column).checked_mul(factor)?;
            let index = self.index(target, column);
            self.entries[index] = self.entries[index].checked_add(addend)?.reduce();
        }
        Ok(())
    }

    fn check_row(&self, row: usize) -> MatrixResult<()> {
        if row == 0 || row > self.rows {
            return Err(self.out_of_bounds(row, 1));
        }
        Ok(())
    }

    fn check_position(&self, row: usize, column: usize) -> MatrixResult<()> {
        if row == 0 || row > self.rows || column == 0 || column > self.columns {
            return Err(self.out_of_bounds(row, column));
        }
        Ok(())
    }

    const fn out_of_bounds(&self, row: usize, column: usize) -> MatrixError {
        MatrixError::OutOfBounds { row,
                                   column,
                                   rows: self.rows,
                                   columns: self.columns }
    }
}

/// Number of entries of a `rows x columns` matrix, within [`MAX_ENTRIES`].
pub(crate) fn entry_count(rows: usize, columns: usize) -> MatrixResult<usize> {
    rows.checked_mul(columns)
        .filter(|&count| count <= MAX_ENTRIES)
        .ok_or(MatrixError::TooLarge { rows, columns })
}

/// Renders one row per line, columns padded to a common width.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows == 0 || self.columns == 0 {
            return write!(f, "[] ({}x{})", self.rows, self.columns);
        }

        let cells: Vec<String> = self.entries.iter().map(ToString::to_string).collect();
        let widths: Vec<usize> =
            (0..self.columns).map(|c| {
                                 (0..self.rows).map(|r| cells[self.index(r, c)].len())
                                               .max()
                                               .unwrap_or(0)
                             })
                             .collect();
        let inner = widths.iter().sum::<usize>() + 4 * (self.columns - 1);

        writeln!(f, "┌ {} ┐", " ".repeat(inner))?;
        for row in 0..self.rows {
            let line: Vec<String> = (0..self.columns).map(|c| {
                                                         format!("{:<width$}",
                                                                 cells[self.index(row, c)],
                                                                 width = widths[c])
                                                     })
                                                     .collect();
            writeln!(f, "│ {} │", line.join("    "))?;
        }
        write!(f, "└ {} ┘", " ".repeat(inner))
    }
}
