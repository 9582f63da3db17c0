use crate::bits::BitVector;

impl BitVector {
    /// Shift-and-add multiplication. Fixed width: partial sums beyond
    /// the vector are truncated, so the product wraps modulo `2^n`.
    pub fn mul_unsigned(&self, other: &BitVector) -> BitVector {
        assert_eq!(self.len(), other.len());
        let mut result = BitVector::zero(self.len());
        let mut addend = self.clone();
        let mut multiplier = other.clone();
        while !multiplier.is_zero() {
            if multiplier.bit(multiplier.len() - 1) {
                result = result.ripple_add(&addend);
            }
            addend = addend.shift_left(1);
            multiplier = multiplier.shift_right(1);
        }
        result
    }

    /// Signed multiplication: strip the signs, multiply the magnitudes,
    /// negate the product if the operand signs differed.
    pub fn mul_signed(&self, other: &BitVector) -> BitVector {
        if self.is_empty() {
            return BitVector::zero(0);
        }
        let negative = self.bit(0) ^ other.bit(0);
        let x = if self.bit(0) { self.negate() } else { self.clone() };
        let y = if other.bit(0) {
            other.negate()
        } else {
            other.clone()
        };
        let product = x.mul_unsigned(&y);
        if negative {
            product.negate()
        } else {
            product
        }
    }
}
