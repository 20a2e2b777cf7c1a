//! Rendering of matrices, vectors and report lines.

pub mod matrix;
pub mod report;

pub use matrix::{format_matrix, format_real_matrix, format_real_vector, format_vector};
pub use report::{solution_lines, summary_lines, system_lines};
