use crate::bits::BitVector;

impl BitVector {
    pub fn not(&self) -> BitVector {
        BitVector {
            bits: self.bits.iter().map(|&bit| !bit).collect(),
        }
    }

    pub fn and(&self, other: &BitVector) -> BitVector {
        self.zip_with(other, |x, y| x & y)
    }

    pub fn or(&self, other: &BitVector) -> BitVector {
        self.zip_with(other, |x, y| x | y)
    }

    pub fn xor(&self, other: &BitVector) -> BitVector {
        self.zip_with(other, |x, y| x ^ y)
    }

    fn zip_with(&self, other: &BitVector, op: fn(bool, bool) -> bool) -> BitVector {
        assert_eq!(self.len(), other.len());
        BitVector {
            bits: self
                .bits
                .iter()
                .zip(other.bits.iter())
                .map(|(&x, &y)| op(x, y))
                .collect(),
        }
    }
}
