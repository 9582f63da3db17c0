mod ops;

use std::fmt;
use std::sync::Arc;

use num_traits::ToPrimitive;

use crate::bits::BitVector;
use crate::canonical::CanonicalTriple;
use crate::error::Error;
use crate::layout::{Field, FieldLayout, DEFAULT_VECTOR_SIZE};

/// A named floating-offset type: one partition of the bit vector.
///
/// The handle is cheap to clone; every number of the type shares the
/// underlying layout. Two types are interoperable iff their layouts are
/// structurally equal; the name is purely descriptive and never takes
/// part in compatibility checks.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberType {
    inner: Arc<TypeInner>,
}

#[derive(Debug, PartialEq)]
struct TypeInner {
    name: String,
    layout: FieldLayout,
}

impl NumberType {
    pub fn new(
        name: impl Into<String>,
        offset_a: usize,
        offset_b: usize,
        vector_size: usize,
    ) -> Result<Self, Error> {
        Ok(Self {
            inner: Arc::new(TypeInner {
                name: name.into(),
                layout: FieldLayout::new(offset_a, offset_b, vector_size)?,
            }),
        })
    }

    pub fn with_default_size(
        name: impl Into<String>,
        offset_a: usize,
        offset_b: usize,
    ) -> Result<Self, Error> {
        Self::new(name, offset_a, offset_b, DEFAULT_VECTOR_SIZE)
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn layout(&self) -> &FieldLayout {
        &self.inner.layout
    }

    /// Encode a value of this type. Fails with `Overflow` when a field
    /// value is outside its representable range.
    pub fn number(&self, a: i128, b: u128, c: i128) -> Result<Number, Error> {
        Ok(Number {
            ty: self.clone(),
            bits: self.layout().encode(a, b, c)?,
        })
    }

    /// The multiplicative unit `1 * 1^(1/1)` of this type.
    pub fn one(&self) -> Result<Number, Error> {
        self.number(1, 1, 1)
    }

    /// Re-encode a canonical triple, when it fits this layout.
    pub fn encode_triple(&self, triple: &CanonicalTriple) -> Result<Number, Error> {
        let a = triple
            .a
            .to_i128()
            .ok_or(Error::Overflow { field: Field::A })?;
        let b = triple
            .b
            .to_u128()
            .ok_or(Error::Overflow { field: Field::B })?;
        self.number(a, b, i128::from(triple.c))
    }
}

/// One encoded value. Immutable once constructed; every operator
/// allocates a fresh `Number`.
#[derive(Clone, Debug, PartialEq)]
pub struct Number {
    ty: NumberType,
    bits: BitVector,
}

impl Number {
    pub fn ty(&self) -> &NumberType {
        &self.ty
    }

    pub fn bits(&self) -> &BitVector {
        &self.bits
    }

    /// The raw `(a, b, c)` integers behind this number; zero-length
    /// fields read as `1`. This is the bridge into the canonicalizer.
    pub fn triple(&self) -> (i128, u128, i128) {
        self.ty.layout().decode_fields(&self.bits)
    }

    /// The decoded real value `A * B^(1/C)`.
    pub fn value(&self) -> Result<f64, Error> {
        self.ty.layout().value(&self.bits)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.value() {
            Ok(value) => write!(f, "{}", value),
            Err(_) => write!(f, "NaN"),
        }
    }
}
