use crate::bits::BitVector;
use crate::error::Error;
use crate::layout::{Field, FieldLayout};

impl FieldLayout {
    /// Encode an `(a, b, c)` triple into a bit vector. Each value is
    /// range-checked against its field's extrema and rejected with
    /// `Overflow` if it does not fit; nothing is masked. A zero-length
    /// field accepts only its pinned value `1` and contributes no bits.
    pub fn encode(&self, a: i128, b: u128, c: i128) -> Result<BitVector, Error> {
        check_signed(a, self.a_extrema(), Field::A)?;
        check_unsigned(b, self.b_extrema(), Field::B)?;
        check_signed(c, self.c_extrema(), Field::C)?;

        let mut bits = BitVector::zero(self.vector_size());
        write_field(&mut bits, self.range(Field::A), a as u128);
        write_field(&mut bits, self.range(Field::B), b);
        write_field(&mut bits, self.range(Field::C), c as u128);
        Ok(bits)
    }

    /// Read the raw `(a, b, c)` integers back out of a bit vector.
    /// `a` and `c` are sign-extended from two's complement; a
    /// zero-length field reads as `1`.
    pub fn decode_fields(&self, bits: &BitVector) -> (i128, u128, i128) {
        let a = read_signed(bits, self, Field::A);
        let b = read_unsigned(bits, self, Field::B);
        let c = read_signed(bits, self, Field::C);
        (a, b, c)
    }

    /// The real value `A * B^(1/C)`. A decoded root degree of zero has
    /// no value and is reported as an error, never as a raw
    /// floating-point fault.
    pub fn value(&self, bits: &BitVector) -> Result<f64, Error> {
        let (a, b, c) = self.decode_fields(bits);
        if c == 0 {
            return Err(Error::ZeroRootDegree);
        }
        Ok(a as f64 * (b as f64).powf(1.0 / c as f64))
    }
}

fn check_signed(value: i128, extrema: (i128, i128), field: Field) -> Result<(), Error> {
    if value < extrema.0 || value > extrema.1 {
        return Err(Error::Overflow { field });
    }
    Ok(())
}

fn check_unsigned(value: u128, extrema: (u128, u128), field: Field) -> Result<(), Error> {
    if value < extrema.0 || value > extrema.1 {
        return Err(Error::Overflow { field });
    }
    Ok(())
}

fn write_field(bits: &mut BitVector, range: std::ops::Range<usize>, raw: u128) {
    let len = range.len();
    bits.write(range, &BitVector::from_u128(raw, len));
}

fn read_unsigned(bits: &BitVector, layout: &FieldLayout, field: Field) -> u128 {
    let range = layout.range(field);
    if range.is_empty() {
        return 1;
    }
    bits.slice(range).to_u128()
}

fn read_signed(bits: &BitVector, layout: &FieldLayout, field: Field) -> i128 {
    let range = layout.range(field);
    let len = range.len();
    if len == 0 {
        return 1;
    }
    let raw = bits.slice(range).to_u128();
    if len < 128 && (raw >> (len - 1)) & 1 == 1 {
        (raw | (!0u128 << len)) as i128
    } else {
        raw as i128
    }
}
