use crate::bits::BitVector;

impl BitVector {
    /// Unsigned subtraction with borrow propagation, least-significant
    /// bit first. The final borrow out is dropped, so the difference
    /// wraps modulo `2^n`.
    pub fn ripple_sub(&self, other: &BitVector) -> BitVector {
        assert_eq!(self.len(), other.len());
        let mut result = BitVector::zero(self.len());
        let mut borrow = 0i8;
        for i in (0..self.len()).rev() {
            let diff = self.bits[i] as i8 - other.bits[i] as i8 - borrow;
            if diff < 0 {
                result.bits[i] = (diff + 2) == 1;
                borrow = 1;
            } else {
                result.bits[i] = diff == 1;
                borrow = 0;
            }
        }
        result
    }
}
