//! Floating-offset numbers: fixed-width values of the form `A * B^(1/C)`.
//!
//! A bit vector of configurable width is partitioned at two offsets into
//! a signed mantissa `A` (two's complement), an unsigned base `B`, and a
//! signed root degree `C` (two's complement). A field that receives zero
//! bits is pinned to the value `1`, which lets a single scheme cover
//! many shapes of number: giving every bit to `A` yields a plain signed
//! integer, every bit to `B` an unsigned integer, `C = -1` a rational
//! with numerator `A` and denominator `B`, and any other `C` a root.
//! `1 * 2^(1/-2)`, for example, is `1/sqrt(2)`.
//!
//! Partitions are types: numbers only interoperate when their layouts
//! are structurally equal, and arithmetic is further restricted to
//! operands whose divergence is confined to a single sub-field (see
//! [`Number::add`]). All arithmetic is carried out on the raw bits with
//! ripple-carry and shift-and-add primitives that wrap silently at the
//! vector width.
//!
//! ```
//! use floating_offset::NumberType;
//!
//! let x_type = NumberType::with_default_size("x", 32, 48)?;
//! let x0 = x_type.number(42, 1, 1)?;
//! let x1 = x_type.number(43, 1, 1)?;
//! assert_eq!(x0.equals(&x1)?, false);
//! assert_eq!(x0.add(&x1)?.triple().0, 85);
//! # Ok::<(), floating_offset::Error>(())
//! ```
//!
//! Independently of any encoding, [`CanonicalTriple`] reduces and
//! combines `(A, B, C)` triples algebraically:
//!
//! ```
//! use floating_offset::CanonicalTriple;
//!
//! let reduced = CanonicalTriple::new(1, 8u32, 3).normalize()?;
//! assert_eq!(reduced.to_string(), "2 * (1)^1/1");
//! # Ok::<(), floating_offset::Error>(())
//! ```

pub mod bits;
pub mod canonical;
mod codec;
pub mod error;
pub mod layout;
pub mod number;

pub use bits::BitVector;
pub use canonical::CanonicalTriple;
pub use error::Error;
pub use layout::{Field, FieldLayout, DEFAULT_VECTOR_SIZE, MAX_VECTOR_SIZE};
pub use number::{Number, NumberType};
