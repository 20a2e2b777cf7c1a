use super::matrix::{format_matrix, format_real_matrix, format_real_vector, format_vector};
use crate::report::{Solutions, Summary};
use crate::system::ParsedSystem;

/// The parsed coefficient matrix and constant vector, whatever their length.
pub fn system_lines(parsed: &ParsedSystem) -> Vec<String> {
    vec![
        format!("Matrix A: {}", format_matrix(&parsed.rows)),
        format!("Vector B: {}", format_vector(&parsed.constants)),
    ]
}

pub fn summary_lines(summary: &Summary) -> Vec<String> {
    vec![
        format!("Determinant of A: {}", summary.determinant),
        format!("Trace of A: {}", summary.trace),
        format!("Norm of B: {:?}", summary.norm),
        format!("Transpose of A: {}", format_matrix(&summary.transpose)),
        format!("A * B = {}", format_vector(&summary.product)),
    ]
}

pub fn solution_lines(solutions: &Solutions) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Solution using Cramer's rule: {}",
            format_real_vector(&solutions.cramer)
        ),
        format!("Inverse of A: {}", format_real_matrix(&solutions.inverse)),
        format!(
            "Solution using Matrix Inversion: {}",
            format_real_vector(&solutions.inversion)
        ),
    ];
    if let Some(exact) = &solutions.exact {
        lines.push(format!("Exact solution: {}", format_vector(exact)));
    }
    lines
}
