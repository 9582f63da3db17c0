use strum::IntoEnumIterator;

use crate::bits::BitVector;
use crate::error::Error;
use crate::layout::Field;
use crate::number::Number;

/// Arithmetic is only defined when the operands agree everywhere except
/// (at most) one sub-field:
///
/// - A-mode: `B` and `C` are bit-identical; the signed operation runs
///   on the `A` bits alone and the shared bits are copied through.
/// - B-mode: `A` and `C` are bit-identical and `B` differs; the
///   unsigned operation runs on the `B` bits alone.
///
/// Any wider divergence (including a divergent root degree) fails with
/// `Unimplemented`.
impl Number {
    /// Bit-for-bit equality. Comparing across partitions is a type
    /// error, never `false`.
    pub fn equals(&self, other: &Number) -> Result<bool, Error> {
        self.check_same_type(other)?;
        Ok(self.bits == other.bits)
    }

    pub fn not(&self) -> Number {
        self.with_bits(self.bits.not())
    }

    pub fn and(&self, other: &Number) -> Result<Number, Error> {
        self.check_same_type(other)?;
        Ok(self.with_bits(self.bits.and(&other.bits)))
    }

    pub fn or(&self, other: &Number) -> Result<Number, Error> {
        self.check_same_type(other)?;
        Ok(self.with_bits(self.bits.or(&other.bits)))
    }

    pub fn xor(&self, other: &Number) -> Result<Number, Error> {
        self.check_same_type(other)?;
        Ok(self.with_bits(self.bits.xor(&other.bits)))
    }

    pub fn add(&self, other: &Number) -> Result<Number, Error> {
        self.field_op(other, |x, y| x.ripple_add(y), |x, y| x.ripple_add(y))
    }

    pub fn sub(&self, other: &Number) -> Result<Number, Error> {
        self.field_op(
            other,
            |x, y| x.ripple_add(&y.negate()),
            |x, y| x.ripple_sub(y),
        )
    }

    pub fn mul(&self, other: &Number) -> Result<Number, Error> {
        self.field_op(other, |x, y| x.mul_signed(y), |x, y| x.mul_unsigned(y))
    }

    fn with_bits(&self, bits: BitVector) -> Number {
        Number {
            ty: self.ty.clone(),
            bits,
        }
    }

    fn check_same_type(&self, other: &Number) -> Result<(), Error> {
        if self.ty.layout() == other.ty.layout() {
            Ok(())
        } else {
            Err(Error::TypeMismatch {
                left: self.ty.layout().partition_string(),
                right: other.ty.layout().partition_string(),
            })
        }
    }

    fn field_op(
        &self,
        other: &Number,
        signed: fn(&BitVector, &BitVector) -> BitVector,
        unsigned: fn(&BitVector, &BitVector) -> BitVector,
    ) -> Result<Number, Error> {
        self.check_same_type(other)?;
        let layout = self.ty.layout();

        let divergent: Vec<Field> = Field::iter()
            .filter(|&field| {
                let range = layout.range(field);
                self.bits.slice(range.clone()) != other.bits.slice(range)
            })
            .collect();

        // Bit-identical operands count as (degenerate) A-mode.
        let (field, op) = match divergent.as_slice() {
            [] | [Field::A] => (Field::A, signed),
            [Field::B] => (Field::B, unsigned),
            _ => return Err(Error::Unimplemented),
        };

        let range = layout.range(field);
        let result = op(
            &self.bits.slice(range.clone()),
            &other.bits.slice(range.clone()),
        );
        let mut bits = self.bits.clone();
        bits.write(range, &result);
        Ok(self.with_bits(bits))
    }
}

#[cfg(test)]
mod test {
    use crate::error::Error;
    use crate::number::NumberType;

    #[test]
    fn test_equals_across_types_is_a_type_error() {
        let x_type = NumberType::with_default_size("x", 32, 48).unwrap();
        let y_type = NumberType::with_default_size("y", 16, 32).unwrap();
        let x = x_type.number(42, 1, 1).unwrap();
        let y = y_type.number(42, 1, 1).unwrap();
        assert!(matches!(x.equals(&y), Err(Error::TypeMismatch { .. })));
        assert!(matches!(x.add(&y), Err(Error::TypeMismatch { .. })));
    }

    #[test]
    fn test_signed_add_on_a_field() {
        let long = NumberType::with_default_size("long", 64, 64).unwrap();
        let x = long.number(56, 1, 1).unwrap();
        let y = long.number(25, 1, 1).unwrap();
        assert_eq!(x.add(&y).unwrap().triple().0, 81);

        let neg = long.number(-100, 1, 1).unwrap();
        assert_eq!(x.add(&neg).unwrap().triple().0, -44);
        assert_eq!(x.sub(&y).unwrap().triple().0, 31);
        assert_eq!(y.sub(&x).unwrap().triple().0, -31);
        assert_eq!(x.mul(&neg).unwrap().triple().0, -5600);
    }

    #[test]
    fn test_add_wraps_at_the_boundary() {
        let long = NumberType::with_default_size("long", 64, 64).unwrap();
        let max = long.number(i64::MAX as i128, 1, 1).unwrap();
        let min = long.number(i64::MIN as i128, 1, 1).unwrap();
        let one = long.number(1, 1, 1).unwrap();
        let neg_one = long.number(-1, 1, 1).unwrap();
        assert_eq!(max.add(&one).unwrap().triple().0, i64::MIN as i128);
        assert_eq!(min.add(&neg_one).unwrap().triple().0, i64::MAX as i128);
    }

    #[test]
    fn test_unsigned_ops_on_b_field() {
        let ulong = NumberType::with_default_size("ulong", 0, 64).unwrap();
        let x = ulong.number(1, 56, 1).unwrap();
        let y = ulong.number(1, 25, 1).unwrap();
        assert_eq!(x.add(&y).unwrap().triple().1, 81);
        assert_eq!(x.sub(&y).unwrap().triple().1, 31);
        assert_eq!(x.mul(&y).unwrap().triple().1, 1400);

        let max = ulong.number(1, u64::MAX as u128, 1).unwrap();
        let one = ulong.number(1, 1, 1).unwrap();
        assert_eq!(max.add(&one).unwrap().triple().1, 0);
        assert_eq!(one.sub(&max).unwrap().triple().1, 2);
    }

    #[test]
    fn test_shared_fields_are_copied_through() {
        let mixed = NumberType::with_default_size("mixed", 12, 57).unwrap();
        let x = mixed.number(7, 99, -3).unwrap();
        let y = mixed.number(-2, 99, -3).unwrap();
        assert_eq!(x.add(&y).unwrap().triple(), (5, 99, -3));

        let p = mixed.number(7, 10, -3).unwrap();
        let q = mixed.number(7, 4, -3).unwrap();
        assert_eq!(p.mul(&q).unwrap().triple(), (7, 40, -3));
    }

    #[test]
    fn test_multi_field_divergence_is_unimplemented() {
        let mixed = NumberType::with_default_size("mixed", 12, 57).unwrap();
        let x = mixed.number(1, 2, 1).unwrap();
        let y = mixed.number(3, 4, 1).unwrap();
        assert_eq!(x.add(&y), Err(Error::Unimplemented));
        assert_eq!(x.sub(&y), Err(Error::Unimplemented));
        assert_eq!(x.mul(&y), Err(Error::Unimplemented));

        // a divergent root degree alone is just as unsupported
        let p = mixed.number(1, 2, 2).unwrap();
        let q = mixed.number(1, 2, 3).unwrap();
        assert_eq!(p.add(&q), Err(Error::Unimplemented));
    }

    #[test]
    fn test_identical_operands_use_a_mode() {
        let mixed = NumberType::with_default_size("mixed", 12, 57).unwrap();
        let x = mixed.number(21, 5, 2).unwrap();
        assert_eq!(x.add(&x).unwrap().triple(), (42, 5, 2));
    }

    #[test]
    fn test_bitwise_ops() {
        let ulong = NumberType::with_default_size("ulong", 0, 64).unwrap();
        let x = ulong.number(1, 0b1100, 1).unwrap();
        let y = ulong.number(1, 0b1010, 1).unwrap();
        assert_eq!(x.and(&y).unwrap().triple().1, 0b1000);
        assert_eq!(x.or(&y).unwrap().triple().1, 0b1110);
        assert_eq!(x.xor(&y).unwrap().triple().1, 0b0110);
        assert_eq!(x.not().triple().1, !0b1100u64 as u128);
    }
}
