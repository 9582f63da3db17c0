use crate::bits::BitVector;

impl BitVector {
    /// Logical left shift: bits falling off the most-significant end
    /// are dropped, zeros fill from the right.
    pub fn shift_left(&self, count: usize) -> BitVector {
        if count >= self.len() {
            return BitVector::zero(self.len());
        }
        let mut bits = self.bits[count..].to_vec();
        bits.resize(self.len(), false);
        BitVector { bits }
    }

    /// Logical right shift: zero-fill from the left, no sign extension.
    pub fn shift_right(&self, count: usize) -> BitVector {
        if count >= self.len() {
            return BitVector::zero(self.len());
        }
        let mut bits = vec![false; count];
        bits.extend_from_slice(&self.bits[..self.len() - count]);
        BitVector { bits }
    }
}

#[cfg(test)]
mod test {
    use crate::bits::BitVector;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_shifts_match_native() {
        let mut prng = ChaCha20Rng::seed_from_u64(0);
        for _ in 0..100 {
            let a: u64 = prng.gen();
            let count = prng.gen_range(0..64);
            let v = BitVector::from_u128(a as u128, 64);
            assert_eq!(v.shift_left(count).to_u128(), (a << count) as u128);
            assert_eq!(v.shift_right(count).to_u128(), (a >> count) as u128);
        }
    }

    #[test]
    fn test_shift_past_width_clears() {
        let v = BitVector::from_u128(u64::MAX as u128, 64);
        assert!(v.shift_left(64).is_zero());
        assert!(v.shift_right(200).is_zero());
    }
}
