use std::array;

use num_traits::{Num, ToPrimitive};

use super::{Matrix2, Matrix3};

/// First-row cofactor expansion. Exact for integer scalars.
pub fn determinant_3x3<T: Num + Clone>(m: &Matrix3<T>) -> T {
    let [[a11, a12, a13], [a21, a22, a23], [a31, a32, a33]] = m.clone();
    a11 * (a22.clone() * a33.clone() - a23.clone() * a32.clone())
        - a12 * (a21.clone() * a33 - a23 * a31.clone())
        + a13 * (a21 * a32 - a22 * a31)
}

pub fn determinant_2x2<T: Num + Clone>(m: &Matrix2<T>) -> T {
    let [[a, b], [c, d]] = m.clone();
    a * d - b * c
}

pub fn trace<T: Num + Clone>(m: &Matrix3<T>) -> T {
    m[0][0].clone() + m[1][1].clone() + m[2][2].clone()
}

/// Euclidean norm, always real-valued. An entry too large for `f64` makes the norm
/// infinite.
pub fn vector_norm<T: ToPrimitive>(v: &[T]) -> f64 {
    v.iter()
        .map(|x| x.to_f64().unwrap_or(f64::INFINITY))
        .map(|x| x * x)
        .sum::<f64>()
        .sqrt()
}

pub fn transpose<T: Clone, const R: usize, const C: usize>(m: &[[T; C]; R]) -> [[T; R]; C] {
    array::from_fn(|i| array::from_fn(|j| m[j][i].clone()))
}

/// Row-by-row dot product of `m` with `v`. The column count of `m` must equal the length
/// of `v`, which the array types enforce.
pub fn matrix_vector_multiplication<T: Num + Clone, const R: usize, const C: usize>(
    m: &[[T; C]; R],
    v: &[T; C],
) -> [T; R] {
    array::from_fn(|i| {
        m[i].iter()
            .zip(v)
            .fold(T::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
    })
}
