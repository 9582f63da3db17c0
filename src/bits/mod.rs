mod add;
mod logic;
mod mul;
mod shift;
mod sub;

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Fixed-length bit vector, most-significant bit first.
///
/// All arithmetic primitives are pure: they take their operands by
/// reference and allocate a fresh vector for the result. Operands of a
/// binary primitive must have equal length.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitVector {
    bits: Vec<bool>,
}

impl BitVector {
    pub fn zero(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Big-endian vector holding the low `len` bits of `value`.
    pub fn from_u128(value: u128, len: usize) -> Self {
        assert!(len <= 128);
        let mut bits = vec![false; len];
        for i in 0..len {
            bits[len - 1 - i] = (value >> i) & 1 == 1;
        }
        Self { bits }
    }

    /// The vector read back as an unsigned integer.
    pub fn to_u128(&self) -> u128 {
        assert!(self.len() <= 128);
        self.bits
            .iter()
            .fold(0u128, |acc, &bit| (acc << 1) | bit as u128)
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|&bit| !bit)
    }

    pub fn bit(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Copy of the bits in `range`, as their own vector.
    pub fn slice(&self, range: Range<usize>) -> BitVector {
        Self {
            bits: self.bits[range].to_vec(),
        }
    }

    /// Overwrite the bits in `range` with `src`; lengths must agree.
    pub fn write(&mut self, range: Range<usize>, src: &BitVector) {
        assert_eq!(range.len(), src.len());
        self.bits[range].copy_from_slice(&src.bits);
    }

    /// Bits packed into bytes (left-padded to a byte boundary) and hex
    /// encoded. Diagnostic rendering only.
    pub fn to_hex(&self) -> String {
        let mut bytes = vec![0u8; (self.len() + 7) / 8];
        let pad = bytes.len() * 8 - self.len();
        for (i, &bit) in self.bits.iter().enumerate() {
            if bit {
                let pos = pad + i;
                bytes[pos / 8] |= 0x80 >> (pos % 8);
            }
        }
        hex::encode(bytes)
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}
