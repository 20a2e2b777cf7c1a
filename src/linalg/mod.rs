//! Fixed-size linear algebra over 3x3 matrices and length-3 vectors.
//!
//! Every routine is generic over the scalar so the same code serves arbitrary-precision
//! integers, floating results and exact rationals. Shapes are carried by array types:
//! inversion and cofactors only accept `Matrix3`, while `transpose` and
//! `matrix_vector_multiplication` work for any `R x C`.

mod cramer;
mod inverse;
mod ops;

use num_traits::{Num, ToPrimitive};

use crate::error::{LinalgError, Result};

pub use cramer::{cramer_solve, cramer_solve_exact, inversion_solve, replace_column};
pub use inverse::{adjugate, cofactor, inverse_matrix, inverse_matrix_exact};
pub use ops::{
    determinant_2x2, determinant_3x3, matrix_vector_multiplication, trace, transpose,
    vector_norm,
};

pub type Matrix2<T> = [[T; 2]; 2];
pub type Matrix3<T> = [[T; 3]; 3];
pub type Vector3<T> = [T; 3];

/// Determinant of `m`, or `SingularMatrix` when it is exactly zero.
fn nonsingular_determinant<T: Num + Clone>(m: &Matrix3<T>) -> Result<T> {
    let det = determinant_3x3(m);
    if det.is_zero() {
        Err(LinalgError::SingularMatrix)
    } else {
        Ok(det)
    }
}

fn to_real<T: ToPrimitive>(value: &T) -> Result<f64> {
    value
        .to_f64()
        .filter(|x| x.is_finite())
        .ok_or(LinalgError::Unrepresentable)
}

fn to_real_vector<T: ToPrimitive>(v: &Vector3<T>) -> Result<Vector3<f64>> {
    Ok([to_real(&v[0])?, to_real(&v[1])?, to_real(&v[2])?])
}
