use crate::bits::BitVector;

impl BitVector {
    /// Ripple-carry addition, least-significant bit first. The final
    /// carry out is dropped, so the sum wraps modulo `2^n`; there is no
    /// overflow flag.
    pub fn ripple_add(&self, other: &BitVector) -> BitVector {
        assert_eq!(self.len(), other.len());
        let mut result = BitVector::zero(self.len());
        let mut carry = false;
        for i in (0..self.len()).rev() {
            let (x, y) = (self.bits[i], other.bits[i]);
            result.bits[i] = x ^ y ^ carry;
            carry = (x & y) | (x & carry) | (y & carry);
        }
        result
    }

    /// Two's-complement negation: complement every bit, then add one.
    /// Folded into a single pass from the least-significant bit up:
    /// bits below and including the lowest set bit are kept, the rest
    /// are flipped.
    pub fn negate(&self) -> BitVector {
        let mut result = BitVector::zero(self.len());
        let mut carry = false;
        for i in (0..self.len()).rev() {
            result.bits[i] = self.bits[i] ^ carry;
            carry |= self.bits[i];
        }
        result
    }
}
