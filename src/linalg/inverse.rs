use std::array;

use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{Num, ToPrimitive};

use super::{
    Matrix2, Matrix3, determinant_2x2, nonsingular_determinant, to_real, to_real_vector,
    transpose,
};
use crate::error::{LinalgError, Result};

/// Determinant of the 2x2 minor left after deleting `row` and `col`.
///
/// The value is unsigned; `adjugate` applies the `(-1)^(i+j)` checkerboard.
pub fn cofactor<T: Num + Clone>(m: &Matrix3<T>, row: usize, col: usize) -> Result<T> {
    if row >= 3 || col >= 3 {
        return Err(LinalgError::IndexOutOfBounds { row, col });
    }
    Ok(determinant_2x2(&minor(m, row, col)))
}

/// Transpose of the signed cofactor matrix.
pub fn adjugate<T: Num + Clone>(m: &Matrix3<T>) -> Matrix3<T> {
    let cofactors: Matrix3<T> = array::from_fn(|i| {
        array::from_fn(|j| {
            let value = determinant_2x2(&minor(m, i, j));
            if (i + j) % 2 == 0 {
                value
            } else {
                T::zero() - value
            }
        })
    });
    transpose(&cofactors)
}

/// `adjugate(m) / det(m)` as floating point.
pub fn inverse_matrix<T>(m: &Matrix3<T>) -> Result<Matrix3<f64>>
where
    T: Num + Clone + ToPrimitive,
{
    let det = to_real(&nonsingular_determinant(m)?)?;
    let [r0, r1, r2] = adjugate(m);
    let scale = |row: &[T; 3]| -> Result<[f64; 3]> { Ok(to_real_vector(row)?.map(|v| v / det)) };
    Ok([scale(&r0)?, scale(&r1)?, scale(&r2)?])
}

/// Exact inverse over the rationals of an integer matrix.
pub fn inverse_matrix_exact<T: Integer + Clone>(m: &Matrix3<T>) -> Result<Matrix3<Ratio<T>>> {
    let det = nonsingular_determinant(m)?;
    Ok(adjugate(m).map(|row| row.map(|value| Ratio::new(value, det.clone()))))
}

fn minor<T: Clone>(m: &Matrix3<T>, row: usize, col: usize) -> Matrix2<T> {
    let rows = remaining(row);
    let cols = remaining(col);
    array::from_fn(|i| array::from_fn(|j| m[rows[i]][cols[j]].clone()))
}

fn remaining(skip: usize) -> [usize; 2] {
    match skip {
        0 => [1, 2],
        1 => [0, 2],
        _ => [0, 1],
    }
}
