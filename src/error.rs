use thiserror::Error;

use crate::layout::Field;

/// Failures raised by layout construction, encoding, and the gated
/// operators. All of these indicate misuse of the API by the caller;
/// none are transient or recoverable.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("bad offsets {offset_a}:{offset_b} for a {vector_size}-bit vector")]
    BadOffsets {
        offset_a: usize,
        offset_b: usize,
        vector_size: usize,
    },

    #[error("value does not fit the {field} field")]
    Overflow { field: Field },

    #[error("operands have different partitions ({left} vs {right})")]
    TypeMismatch { left: String, right: String },

    /// The operand divergence is not confined to a single sub-field, or
    /// the root degrees of two triples point in opposite directions.
    /// A permanent limitation of the encoding, not a placeholder.
    #[error("operation not supported for these operands")]
    Unimplemented,

    /// The root-degree field decoded to zero. `A * B^(1/0)` has no value.
    #[error("root degree is zero")]
    ZeroRootDegree,
}
