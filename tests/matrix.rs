use rowsmith::{
    error::{ArithmeticError, MatrixError},
    interpreter::value::{
        matrix::{MAX_ENTRIES, Matrix},
        rational::Rational,
    },
};
use rstest::rstest;

fn m(rows: &[&[i64]]) -> Matrix {
    Matrix::from_rows(rows.iter()
                          .map(|row| row.iter().copied().map(Rational::from).collect())
                          .collect()).unwrap()
}

fn r(n: i64, d: i64) -> Rational {
    Rational::new(n, d).unwrap()
}

#[rstest]
#[case(6, 8, 3, 4)]
#[case(-6, 8, -3, 4)]
#[case(6, -8, -3, 4)]
#[case(-6, -8, 3, 4)]
#[case(0, -5, 0, 1)]
#[case(7, 1, 7, 1)]
#[case(i64::MAX, i64::MAX, 1, 1)]
fn reduce_gives_lowest_terms(#[case] n: i64,
                             #[case] d: i64,
                             #[case] expected_n: i64,
                             #[case] expected_d: i64) {
    let reduced = r(n, d).reduce();
    assert_eq!((reduced.numerator(), reduced.denominator()), (expected_n, expected_d));

    let again = reduced.reduce();
    assert_eq!((again.numerator(), again.denominator()), (expected_n, expected_d));
}

#[test]
fn zero_denominator_is_an_error() {
    assert_eq!(Rational::new(1, 0), Err(ArithmeticError::DivisionByZero));
    assert_eq!(Rational::ZERO.reciprocal(), Err(ArithmeticError::DivisionByZero));
    assert_eq!(r(1, 2).checked_div(Rational::ZERO), Err(ArithmeticError::DivisionByZero));
}

#[test]
fn arithmetic_does_not_reduce() {
    let product = r(2, 3).checked_mul(r(3, 4)).unwrap();
    assert_eq!(product.to_string(), "6/12");
    assert_eq!(product.reduce().to_string(), "1/2");
    assert_eq!(product, r(1, 2));
}

#[rstest]
#[case(m(&[&[2, 6], &[1, 3]]))]
#[case(m(&[&[3, 6], &[1, 4]]))]
#[case(m(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 10]]))]
#[case(m(&[&[0, 0, 1], &[1, 2, 0]]))]
#[case(m(&[&[1, 2], &[2, 4], &[3, 6]]))]
#[case(Matrix::zeros(2, 4).unwrap())]
fn rref_is_idempotent(#[case] matrix: Matrix) {
    let once = matrix.reduced_row_echelon().unwrap();
    assert_eq!(once.reduced_row_echelon().unwrap(), once);
    assert_eq!(matrix.row_echelon().unwrap().reduced_row_echelon().unwrap(), once);
}

#[rstest]
#[case(m(&[&[3, 6], &[1, 4]]))]
#[case(m(&[&[0, 1], &[1, 0]]))]
#[case(m(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 10]]))]
#[case(m(&[&[2, 0, 0], &[0, -5, 0], &[0, 0, 7]]))]
fn inverse_of_inverse_is_original(#[case] matrix: Matrix) {
    let inverse = matrix.inverse().unwrap();
    assert_eq!(inverse.inverse().unwrap(), matrix);

    let size = matrix.rows();
    assert_eq!(matrix.multiply(&inverse).unwrap(), Matrix::identity(size).unwrap());
    assert_eq!(inverse.multiply(&matrix).unwrap(), Matrix::identity(size).unwrap());
}

#[test]
fn inverse_of_three_by_three() {
    let inverse = m(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 10]]).inverse().unwrap();
    let expected = Matrix::from_rows(vec![vec![r(-2, 3), r(-4, 3), r(1, 1)],
                                          vec![r(-2, 3), r(11, 3), r(-2, 1)],
                                          vec![r(1, 1), r(-2, 1), r(1, 1)]]).unwrap();
    assert_eq!(inverse, expected);
}

#[rstest]
#[case(m(&[&[1, 2], &[2, 4]]))]
#[case(m(&[&[2, 6], &[1, 3]]))]
#[case(Matrix::zeros(3, 3).unwrap())]
fn singular_matrices_have_no_inverse(#[case] matrix: Matrix) {
    assert_eq!(matrix.inverse(), Err(MatrixError::Singular));
}

#[test]
fn only_square_matrices_invert() {
    assert_eq!(Matrix::zeros(2, 3).unwrap().inverse(), Err(MatrixError::NotSquare));
}

#[rstest]
#[case(m(&[&[1, 2, 3], &[4, 5, 6]]))]
#[case(m(&[&[5], &[-1]]))]
#[case(m(&[&[0, 1], &[1, 0]]))]
fn identity_is_neutral(#[case] matrix: Matrix) {
    let left = Matrix::identity(matrix.rows()).unwrap();
    let right = Matrix::identity(matrix.columns()).unwrap();
    assert_eq!(left.multiply(&matrix).unwrap(), matrix);
    assert_eq!(matrix.multiply(&right).unwrap(), matrix);
}

#[test]
fn augment_then_slice_gives_back_the_parts() {
    let a = m(&[&[1, 2], &[3, 4], &[5, 6]]);
    let b = m(&[&[7], &[8], &[9]]);
    let joined = a.augment(&b).unwrap();

    assert_eq!(joined.columns(), 3);
    assert_eq!(joined.column_slice(1, a.columns()).unwrap(), a);
    assert_eq!(joined.column_slice(a.columns() + 1, joined.columns()).unwrap(), b);
}

#[test]
fn shape_checks() {
    let wide = Matrix::zeros(2, 3).unwrap();
    let tall = Matrix::zeros(3, 2).unwrap();

    assert!(matches!(wide.add(&tall),
                     Err(MatrixError::DimensionMismatch { operation: "add", .. })));
    assert!(matches!(wide.multiply(&wide),
                     Err(MatrixError::DimensionMismatch { operation: "multiply", .. })));
    assert!(matches!(wide.augment(&tall),
                     Err(MatrixError::DimensionMismatch { operation: "augment", .. })));
    assert_eq!(wide.multiply(&tall).unwrap(), Matrix::zeros(2, 2).unwrap());
    assert_eq!(wide.transpose(), tall);
}

#[test]
fn shapes_beyond_the_entry_limit_are_rejected() {
    assert!(matches!(Matrix::zeros(usize::MAX, 2), Err(MatrixError::TooLarge { .. })));
    assert!(matches!(Matrix::identity(usize::MAX), Err(MatrixError::TooLarge { .. })));
    assert!(matches!(Matrix::identity(MAX_ENTRIES), Err(MatrixError::TooLarge { .. })));
    assert_eq!(Matrix::zeros(MAX_ENTRIES, 1).unwrap().rows(), MAX_ENTRIES);

    let column = Matrix::zeros(1 << 11, 1).unwrap();
    let row = column.transpose();
    assert!(matches!(column.multiply(&row), Err(MatrixError::TooLarge { .. })));
    assert_eq!(row.multiply(&column).unwrap(), Matrix::zeros(1, 1).unwrap());

    let half = Matrix::zeros(1, MAX_ENTRIES / 2 + 1).unwrap();
    assert!(matches!(half.augment(&half), Err(MatrixError::TooLarge { .. })));
}

#[test]
fn multiplication_sums_over_the_shared_dimension() {
    let a = m(&[&[1, 2], &[3, 4]]);
    let b = m(&[&[5, 6], &[7, 8]]);
    assert_eq!(a.multiply(&b).unwrap(), m(&[&[19, 22], &[43, 50]]));
    assert_eq!(b.multiply(&a).unwrap(), m(&[&[23, 34], &[31, 46]]));
}

#[test]
fn row_echelon_places_leading_ones_in_a_staircase() {
    let echelon = m(&[&[0, 0, 2], &[0, 3, 6], &[1, 1, 1]]).row_echelon().unwrap();

    assert!(echelon.is_leading_entry(1, 1));
    assert!(echelon.is_leading_entry(2, 2));
    assert!(echelon.is_leading_entry(3, 3));
    for (row, column) in [(1, 1), (2, 2), (3, 3)] {
        assert_eq!(echelon.get(row, column), Some(Rational::ONE));
    }
    assert_eq!(echelon.get(2, 1), Some(Rational::ZERO));
    assert_eq!(echelon.get(3, 2), Some(Rational::ZERO));
}

#[test]
fn elementary_row_operations() {
    let mut matrix = m(&[&[1, 2], &[3, 4]]);

    matrix.swap_rows(1, 2).unwrap();
    assert_eq!(matrix, m(&[&[3, 4], &[1, 2]]));

    matrix.scale_row(2, r(1, 2)).unwrap();
    assert_eq!(matrix.get(2, 1), Some(r(1, 2)));

    matrix.add_scaled_row(2, Rational::from(-6), 1).unwrap();
    assert_eq!(matrix, Matrix::from_rows(vec![vec![r(0, 1), r(-2, 1)],
                                              vec![r(1, 2), r(1, 1)]]).unwrap());

    assert!(matches!(matrix.swap_rows(0, 1), Err(MatrixError::OutOfBounds { .. })));
    assert!(matches!(matrix.scale_row(3, Rational::ONE), Err(MatrixError::OutOfBounds { .. })));
    assert!(!matrix.is_leading_entry(5, 5));
}

#[test]
fn display_aligns_columns() {
    let rendered = m(&[&[1, -10], &[100, 2]]).to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|line| line.chars().count() == lines[0].chars().count()));
    assert_eq!(lines[1], "│ 1      -10 │");
    assert_eq!(lines[2], "│ 100    2   │");
    assert_eq!(Matrix::zeros(0, 0).unwrap().to_string(), "[] (0x0)");
}
