#![allow(non_snake_case)]

use crate::algebra::*;

fn test_matrix_3x4() -> Matrix<f64> {
    // A =
    //[ 11  13  17  14]
    //[ 16  18  14  10]
    //[ 21  24  13  10]
    Matrix::from(&[
        [11., 13., 17., 14.],
        [16., 18., 14., 10.],
        [21., 24., 13., 10.],
    ])
}

#[test]
fn test_nrows_ncols_is_square() {
    let A = test_matrix_3x4();
    assert_eq!(A.nrows(), 3);
    assert_eq!(A.ncols(), 4);
    assert_eq!(A.size(), (3, 4));
    assert!(!A.is_square());
    assert!(Matrix::<f64>::zeros((2, 2)).is_square());
}

#[test]
fn test_row_major_layout() {
    let A = test_matrix_3x4();
    assert_eq!(A.index_linear((0, 0)), 0);
    assert_eq!(A.index_linear((0, 3)), 3);
    assert_eq!(A.index_linear((1, 0)), 4);
    assert_eq!(A.index_linear((2, 3)), 11);
    assert_eq!(A.data()[6], 14.);
    assert_eq!(A[(1, 2)], 14.);
}

#[test]
fn test_get_set() {
    let mut A = test_matrix_3x4();
    assert_eq!(A.get((2, 1)), Ok(24.));
    A.set((2, 1), 0.).unwrap();
    assert_eq!(A[(2, 1)], 0.);

    assert_eq!(
        A.get((3, 0)),
        Err(IndexError::Matrix {
            row: 3,
            col: 0,
            nrows: 3,
            ncols: 4
        })
    );
    assert!(A.set((0, 4), 1.).is_err());
}

#[test]
#[should_panic]
fn test_index_out_of_range_panics() {
    let A = test_matrix_3x4();
    let _ = A[(0, 4)];
}

#[test]
fn test_row_col_are_copies() {
    let mut A = test_matrix_3x4();

    let mut r = A.row(1).unwrap();
    let c = A.col(3).unwrap();
    assert_eq!(r.as_slice(), &[16., 18., 14., 10.]);
    assert_eq!(c.as_slice(), &[14., 10., 10.]);

    r[0] = -1.;
    A[(0, 3)] = 0.;
    assert_eq!(A[(1, 0)], 16.);
    assert_eq!(c.as_slice(), &[14., 10., 10.]);

    assert!(A.row(3).is_err());
    assert!(A.col(4).is_err());
}

#[test]
fn test_argmin_row_major_ties() {
    // 10 appears at (1,3) and (2,3), row major scan picks (1,3)
    let A = test_matrix_3x4();
    assert_eq!(A.argmin(), Some((1, 3)));

    let B = Matrix::from(&[[0., -5.], [-5., -1.]]);
    assert_eq!(B.argmin(), Some((0, 1)));

    assert_eq!(Matrix::<f64>::zeros((0, 3)).argmin(), None);
    assert_eq!(Matrix::<f64>::zeros((2, 0)).argmin(), None);
}

#[test]
fn test_from_rows() {
    let rows = vec![vec![1., 2.], vec![3., 4.], vec![5., 6.]];
    let A = Matrix::from_rows(&rows).unwrap();
    assert_eq!(A.size(), (3, 2));
    assert_eq!(A[(2, 0)], 5.);

    let ragged = vec![vec![1., 2.], vec![3.]];
    assert_eq!(
        Matrix::from_rows(&ragged),
        Err(MatrixShapeError::IncompatibleDimension)
    );
}

#[test]
fn test_new_from_slice() {
    let A = Matrix::new_from_slice((2, 3), &[1., 2., 3., 4., 5., 6.]).unwrap();
    assert_eq!(A.row(1).unwrap().as_slice(), &[4., 5., 6.]);
    assert!(Matrix::new_from_slice((2, 2), &[1., 2., 3.]).is_err());
}

#[test]
fn test_clone_is_independent() {
    let A = test_matrix_3x4();
    let mut B = A.clone();
    B[(0, 0)] = -1.;
    assert_eq!(A[(0, 0)], 11.);
    assert_ne!(A, B);
}
