//! Parse a three-equation linear system in x, y and z from text and solve it two ways:
//! Cramer's rule and inversion through the adjugate.

pub mod error;
pub mod format;
pub mod linalg;
pub mod parser;
pub mod report;
pub mod system;

pub use error::{LinalgError, Result};
pub use linalg::{
    Matrix2, Matrix3, Vector3, adjugate, cofactor, cramer_solve, cramer_solve_exact,
    determinant_2x2, determinant_3x3, inverse_matrix, inverse_matrix_exact, inversion_solve,
    matrix_vector_multiplication, replace_column, trace, transpose, vector_norm,
};
pub use parser::{
    ParseDiagnostics, SkipReason, SkippedLine, parse_equation, parse_system,
    parse_system_from_file, parse_system_with_diagnostics,
};
pub use report::{ReportConfig, Solutions, Summary, write_report};
pub use system::{LinearSystem, ParsedSystem};

pub use num_bigint::BigInt;
pub use num_rational::BigRational;
