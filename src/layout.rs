use std::ops::Range;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::error::Error;

/// Vector width used when no explicit size is given.
pub const DEFAULT_VECTOR_SIZE: usize = 64;

/// Field values travel as `i128`/`u128`, so a single vector cannot
/// exceed 128 bits.
pub const MAX_VECTOR_SIZE: usize = 128;

/// Selector for one of the three sub-fields of a floating-offset number.
///
/// `A` is the signed mantissa, `B` the unsigned base, `C` the signed
/// root degree of the encoded value `A * B^(1/C)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize)]
pub enum Field {
    A,
    B,
    C,
}

/// Partition descriptor for a fixed-width bit vector.
///
/// Two layouts describe the same numeric type iff their
/// `(offset_a, offset_b, vector_size)` triples are equal; every other
/// field is derived from those three, so structural equality on the
/// whole struct is equivalent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLayout {
    offset_a: usize,
    offset_b: usize,
    vector_size: usize,
    a_extrema: (i128, i128),
    b_extrema: (u128, u128),
    c_extrema: (i128, i128),
}

impl FieldLayout {
    /// Build a layout where bits `[0, offset_a)` hold `A`,
    /// `[offset_a, offset_b)` hold `B`, and `[offset_b, vector_size)`
    /// hold `C`.
    pub fn new(offset_a: usize, offset_b: usize, vector_size: usize) -> Result<Self, Error> {
        if !(offset_a <= offset_b && offset_b <= vector_size && vector_size <= MAX_VECTOR_SIZE) {
            return Err(Error::BadOffsets {
                offset_a,
                offset_b,
                vector_size,
            });
        }
        Ok(Self {
            offset_a,
            offset_b,
            vector_size,
            a_extrema: signed_extrema(offset_a),
            b_extrema: unsigned_extrema(offset_b - offset_a),
            c_extrema: signed_extrema(vector_size - offset_b),
        })
    }

    pub fn with_default_size(offset_a: usize, offset_b: usize) -> Result<Self, Error> {
        Self::new(offset_a, offset_b, DEFAULT_VECTOR_SIZE)
    }

    pub fn vector_size(&self) -> usize {
        self.vector_size
    }

    pub fn len(&self, field: Field) -> usize {
        self.range(field).len()
    }

    /// Bit range of a sub-field within the vector, most-significant
    /// bit first.
    pub fn range(&self, field: Field) -> Range<usize> {
        match field {
            Field::A => 0..self.offset_a,
            Field::B => self.offset_a..self.offset_b,
            Field::C => self.offset_b..self.vector_size,
        }
    }

    /// `(min, max)` of the signed mantissa; `(1, 1)` when the field is
    /// zero bits wide.
    pub fn a_extrema(&self) -> (i128, i128) {
        self.a_extrema
    }

    pub fn b_extrema(&self) -> (u128, u128) {
        self.b_extrema
    }

    pub fn c_extrema(&self) -> (i128, i128) {
        self.c_extrema
    }

    /// Compact `offsetA:offsetB:size` rendering, used in mismatch errors.
    pub fn partition_string(&self) -> String {
        format!("{}:{}:{}", self.offset_a, self.offset_b, self.vector_size)
    }
}

// A zero-length field has no bits; its value is pinned to 1 so the
// product A * B^(1/C) stays well defined.
fn signed_extrema(len: usize) -> (i128, i128) {
    match len {
        0 => (1, 1),
        128 => (i128::MIN, i128::MAX),
        n => (-(1i128 << (n - 1)), (1i128 << (n - 1)) - 1),
    }
}

fn unsigned_extrema(len: usize) -> (u128, u128) {
    match len {
        0 => (1, 1),
        128 => (0, u128::MAX),
        n => (0, (1u128 << n) - 1),
    }
}
