//! Evaluate every reported quantity in order and write them out.
//!
//! Quantities that do not depend on solving the system are computed first and written
//! before any solve is attempted, so a singular system still reports its determinant,
//! trace, norm, transpose and product before failing.

use std::io::Write;

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::error::Result;
use crate::format::{solution_lines, summary_lines, system_lines};
use crate::linalg::{
    Matrix3, Vector3, cramer_solve, cramer_solve_exact, determinant_3x3, inverse_matrix,
    inversion_solve, matrix_vector_multiplication, trace, transpose, vector_norm,
};
use crate::parser::ParseDiagnostics;
use crate::system::{LinearSystem, ParsedSystem};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportConfig {
    /// Warn about every non-blank line the parser skipped.
    pub strict: bool,
    /// Also solve over the rationals.
    pub exact: bool,
}

/// Quantities that are defined for singular systems too.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub determinant: BigInt,
    pub trace: BigInt,
    pub norm: f64,
    pub transpose: Matrix3<BigInt>,
    /// `A * B`.
    pub product: Vector3<BigInt>,
}

impl Summary {
    pub fn compute(system: &LinearSystem) -> Self {
        let summary = Self {
            determinant: determinant_3x3(&system.matrix),
            trace: trace(&system.matrix),
            norm: vector_norm(&system.constants),
            transpose: transpose(&system.matrix),
            product: matrix_vector_multiplication(&system.matrix, &system.constants),
        };
        tracing::debug!(
            determinant = %summary.determinant,
            trace = %summary.trace,
            "computed summary"
        );
        summary
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Solutions {
    pub cramer: Vector3<f64>,
    pub inverse: Matrix3<f64>,
    pub inversion: Vector3<f64>,
    pub exact: Option<Vector3<BigRational>>,
}

impl Solutions {
    /// Fails with `SingularMatrix` when the determinant is zero.
    pub fn compute(system: &LinearSystem, exact: bool) -> Result<Self> {
        let LinearSystem { matrix, constants } = system;
        let cramer = cramer_solve(matrix, constants)?;
        let inverse = inverse_matrix(matrix)?;
        let inversion = inversion_solve(matrix, constants)?;
        let exact = if exact {
            Some(cramer_solve_exact(matrix, constants)?)
        } else {
            None
        };
        tracing::debug!(?cramer, ?inversion, "solved system");
        Ok(Self {
            cramer,
            inverse,
            inversion,
            exact,
        })
    }
}

/// Write the full report for `parsed` to `out`.
///
/// Returns `Dimension` when the input did not hold exactly three equations and
/// `SingularMatrix` when it cannot be solved; in both cases every line computed up to
/// that point has already been written.
pub fn write_report<W: Write>(
    parsed: ParsedSystem,
    diagnostics: &ParseDiagnostics,
    config: &ReportConfig,
    out: &mut W,
) -> Result<()> {
    if config.strict {
        for skipped in diagnostics.reportable() {
            tracing::warn!(
                "line {} skipped ({}): {:?}",
                skipped.line_number,
                skipped.reason,
                skipped.text
            );
        }
    }

    write_lines(out, system_lines(&parsed))?;

    let system = LinearSystem::try_from(parsed)?;
    write_lines(out, summary_lines(&Summary::compute(&system)))?;
    out.flush()?;

    let solutions = Solutions::compute(&system, config.exact)?;
    write_lines(out, solution_lines(&solutions))?;
    out.flush()?;
    Ok(())
}

fn write_lines<W: Write>(out: &mut W, lines: Vec<String>) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
