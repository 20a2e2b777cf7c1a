use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{Num, ToPrimitive};

use super::{
    Matrix3, Vector3, determinant_3x3, inverse_matrix, matrix_vector_multiplication,
    nonsingular_determinant, to_real, to_real_vector,
};
use crate::error::{LinalgError, Result};

/// Copy of `m` with column `col` overwritten by `v`. `m` itself is never touched.
pub fn replace_column<T: Clone>(
    m: &Matrix3<T>,
    col: usize,
    v: &Vector3<T>,
) -> Result<Matrix3<T>> {
    if col >= 3 {
        return Err(LinalgError::ColumnOutOfBounds { col });
    }
    let mut replaced = m.clone();
    for (row, value) in replaced.iter_mut().zip(v) {
        row[col] = value.clone();
    }
    Ok(replaced)
}

/// Solve `a * x = b` by Cramer's rule: `x[k] = det(a_k) / det(a)` where `a_k` is `a` with
/// column `k` replaced by `b`.
pub fn cramer_solve<T>(a: &Matrix3<T>, b: &Vector3<T>) -> Result<Vector3<f64>>
where
    T: Num + Clone + ToPrimitive,
{
    let det = to_real(&nonsingular_determinant(a)?)?;
    let numerators = to_real_vector(&column_determinants(a, b)?)?;
    Ok(numerators.map(|value| value / det))
}

/// Cramer's rule over the rationals; no rounding anywhere.
pub fn cramer_solve_exact<T: Integer + Clone>(
    a: &Matrix3<T>,
    b: &Vector3<T>,
) -> Result<Vector3<Ratio<T>>> {
    let det = nonsingular_determinant(a)?;
    Ok(column_determinants(a, b)?.map(|value| Ratio::new(value, det.clone())))
}

/// Solve `a * x = b` as `inverse(a) * b`.
pub fn inversion_solve<T>(a: &Matrix3<T>, b: &Vector3<T>) -> Result<Vector3<f64>>
where
    T: Num + Clone + ToPrimitive,
{
    let inverse = inverse_matrix(a)?;
    Ok(matrix_vector_multiplication(&inverse, &to_real_vector(b)?))
}

/// `[det(a_0), det(a_1), det(a_2)]`, each `a_k` a fresh copy of `a`.
fn column_determinants<T: Num + Clone>(a: &Matrix3<T>, b: &Vector3<T>) -> Result<Vector3<T>> {
    Ok([
        determinant_3x3(&replace_column(a, 0, b)?),
        determinant_3x3(&replace_column(a, 1, b)?),
        determinant_3x3(&replace_column(a, 2, b)?),
    ])
}
