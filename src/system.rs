//! Parsed equations and the fixed 3x3 system built from them.

use num_bigint::BigInt;

use crate::error::{LinalgError, Result};
use crate::linalg::{Matrix3, Vector3};

/// Coefficient rows and right-hand sides in file order. Both vectors always have the same
/// length, which may differ from three.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSystem {
    pub rows: Vec<[BigInt; 3]>,
    pub constants: Vec<BigInt>,
}

impl ParsedSystem {
    pub fn push(&mut self, row: [BigInt; 3], constant: BigInt) {
        self.rows.push(row);
        self.constants.push(constant);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// `matrix * [x, y, z] = constants`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearSystem {
    pub matrix: Matrix3<BigInt>,
    pub constants: Vector3<BigInt>,
}

impl LinearSystem {
    pub fn new(matrix: Matrix3<BigInt>, constants: Vector3<BigInt>) -> Self {
        Self { matrix, constants }
    }
}

impl TryFrom<ParsedSystem> for LinearSystem {
    type Error = LinalgError;

    fn try_from(parsed: ParsedSystem) -> Result<Self> {
        let found = parsed.len();
        let mismatch = || LinalgError::Dimension { expected: 3, found };
        let matrix: Matrix3<BigInt> = parsed.rows.try_into().map_err(|_| mismatch())?;
        let constants: Vector3<BigInt> = parsed.constants.try_into().map_err(|_| mismatch())?;
        Ok(Self { matrix, constants })
    }
}
