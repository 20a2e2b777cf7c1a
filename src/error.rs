use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinalgError>;

#[derive(Debug, Error)]
pub enum LinalgError {
    #[error("singular matrix: determinant is zero, no unique solution exists")]
    SingularMatrix,
    #[error("dimension mismatch: expected {expected} equations, found {found}")]
    Dimension { expected: usize, found: usize },
    #[error("index out of bounds: ({row}, {col}) for a 3x3 matrix")]
    IndexOutOfBounds { row: usize, col: usize },
    #[error("column {col} is out of bounds for a 3x3 matrix")]
    ColumnOutOfBounds { col: usize },
    #[error("value is too large to represent as a 64-bit float")]
    Unrepresentable,
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
