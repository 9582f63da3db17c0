use std::fmt;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Pow, Zero};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::layout::Field;

/// The number-theoretic `(A, B, C)` behind a floating-offset value,
/// independent of any bit encoding. `A` is the signed mantissa, `B`
/// the unsigned base, `C` the signed root degree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalTriple {
    pub a: BigInt,
    pub b: BigUint,
    pub c: i64,
}

impl CanonicalTriple {
    pub fn new(a: impl Into<BigInt>, b: impl Into<BigUint>, c: i64) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            c,
        }
    }

    /// Reduce the triple to lowest terms: pull the largest `|C|`-th
    /// power out of `B` and fold it into `A` (or cancel it against `A`
    /// when the root degree is negative). A base of `1` ends up with
    /// the trivial root degree `1`.
    pub fn normalize(&self) -> Result<CanonicalTriple, Error> {
        if self.c == 0 {
            return Err(Error::ZeroRootDegree);
        }
        if self.c == 1 {
            return Ok(CanonicalTriple {
                a: &self.a * BigInt::from(self.b.clone()),
                b: BigUint::one(),
                c: 1,
            });
        }
        let negative = self.c < 0;
        let degree = u32::try_from(self.c.unsigned_abs())
            .map_err(|_| Error::Overflow { field: Field::C })?;

        // b == root^degree * residue, with root maximal
        let (root, residue) = extract_power_factor(&self.b, degree);

        let (a, b) = if negative {
            // a / root^(1/1): cancel what divides the mantissa, push
            // the rest back under the radical
            let g = self.a.gcd(&BigInt::from(root.clone()));
            let reduced = &root / g.magnitude();
            (&self.a / &g, Pow::pow(&reduced, degree) * &residue)
        } else {
            (&self.a * BigInt::from(root), residue)
        };

        let c = if b.is_one() {
            1
        } else if negative {
            -i64::from(degree)
        } else {
            i64::from(degree)
        };
        Ok(CanonicalTriple { a, b, c })
    }

    /// Product of two triples, normalized. Equal root degrees combine
    /// componentwise; degrees of the same sign are aligned on their
    /// lcm. Opposite signs would need nested radicals and fail with
    /// `Unimplemented`.
    pub fn multiply(&self, other: &CanonicalTriple) -> Result<CanonicalTriple, Error> {
        if self.c == 0 || other.c == 0 {
            return Err(Error::ZeroRootDegree);
        }
        let raw = if self.c == other.c {
            CanonicalTriple {
                a: &self.a * &other.a,
                b: &self.b * &other.b,
                c: self.c,
            }
        } else if (self.c < 0) == (other.c < 0) {
            let c1 = self.c.unsigned_abs() as u128;
            let c2 = other.c.unsigned_abs() as u128;
            let degree = c1.lcm(&c2);
            let e1 = u32::try_from(degree / c1).map_err(|_| Error::Overflow { field: Field::C })?;
            let e2 = u32::try_from(degree / c2).map_err(|_| Error::Overflow { field: Field::C })?;
            let c = i64::try_from(degree).map_err(|_| Error::Overflow { field: Field::C })?;
            CanonicalTriple {
                a: &self.a * &other.a,
                b: Pow::pow(&self.b, e1) * Pow::pow(&other.b, e2),
                c: if self.c < 0 { -c } else { c },
            }
        } else {
            return Err(Error::Unimplemented);
        };
        raw.normalize()
    }
}

impl fmt::Display for CanonicalTriple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} * ({})^1/{}", self.a, self.b, self.c)
    }
}

/// Split `b` as `root^degree * residue` with `root` as large as
/// possible. `degree` must be nonzero.
fn extract_power_factor(b: &BigUint, degree: u32) -> (BigUint, BigUint) {
    let mut residue = b.clone();
    let mut root = BigUint::one();
    if residue.is_zero() {
        return (root, residue);
    }
    let mut divisor = BigUint::from(2u32);
    loop {
        let power = Pow::pow(&divisor, degree);
        if power > residue {
            break;
        }
        if (&residue % &power).is_zero() {
            residue /= &power;
            root *= &divisor;
        } else {
            divisor += 1u32;
        }
    }
    (root, residue)
}

#[cfg(test)]
mod test {
    use super::CanonicalTriple;
    use crate::error::Error;

    fn triple(a: i64, b: u64, c: i64) -> CanonicalTriple {
        CanonicalTriple::new(a, b, c)
    }

    #[test]
    fn test_normalize_extracts_perfect_roots() {
        assert_eq!(triple(1, 8, 3).normalize().unwrap(), triple(2, 1, 1));
        assert_eq!(triple(1, 72, 2).normalize().unwrap(), triple(6, 2, 2));
        assert_eq!(triple(3, 64, 2).normalize().unwrap(), triple(24, 1, 1));
    }

    #[test]
    fn test_normalize_leaves_rootless_bases_alone() {
        assert_eq!(triple(1, 5, 3).normalize().unwrap(), triple(1, 5, 3));
        assert_eq!(triple(-2, 200, 6).normalize().unwrap(), triple(-2, 200, 6));
    }

    #[test]
    fn test_normalize_trivial_root() {
        assert_eq!(triple(3, 4, 1).normalize().unwrap(), triple(12, 1, 1));
    }

    #[test]
    fn test_normalize_negative_degree_cancels_into_mantissa() {
        // 6 * 8^(-1/3) = 6 / 2 = 3
        assert_eq!(triple(6, 8, -3).normalize().unwrap(), triple(3, 1, 1));
        // 2 * 4^(-1/2) = 1
        assert_eq!(triple(2, 4, -2).normalize().unwrap(), triple(1, 1, 1));
        // 1/2 stays a rational: 1 * 2^(1/-1)
        assert_eq!(triple(1, 2, -1).normalize().unwrap(), triple(1, 2, -1));
        // 2 * 8^(-1/3) = 2 / 2 = 1
        assert_eq!(triple(2, 8, -3).normalize().unwrap(), triple(1, 1, 1));
        // nothing cancels against A = 3, so the root goes back under the radical
        assert_eq!(triple(3, 8, -3).normalize().unwrap(), triple(3, 8, -3));
    }

    #[test]
    fn test_normalize_zero_degree() {
        assert_eq!(triple(1, 2, 0).normalize(), Err(Error::ZeroRootDegree));
    }

    #[test]
    fn test_multiply_aligns_degrees_on_lcm() {
        // 5^(1/3) * 2^(1/2): lcm(3,2) = 6, 5^2 * 2^3 = 200
        let product = triple(1, 5, 3).multiply(&triple(1, 2, 2)).unwrap();
        assert_eq!(product, triple(1, 200, 6));
    }

    #[test]
    fn test_multiply_equal_degrees() {
        let product = triple(2, 3, 5).multiply(&triple(4, 7, 5)).unwrap();
        assert_eq!(product, triple(8, 21, 5));
    }

    #[test]
    fn test_multiply_normalizes_the_result() {
        // sqrt(2) * sqrt(2) = 2
        let product = triple(1, 2, 2).multiply(&triple(1, 2, 2)).unwrap();
        assert_eq!(product, triple(2, 1, 1));
    }

    #[test]
    fn test_multiply_mixed_signs_is_unimplemented() {
        assert_eq!(
            triple(1, 2, 2).multiply(&triple(1, 2, -2)),
            Err(Error::Unimplemented)
        );
    }

    #[test]
    fn test_display_is_canonical_form() {
        assert_eq!(triple(2, 1, 1).to_string(), "2 * (1)^1/1");
        assert_eq!(triple(1, 200, 6).to_string(), "1 * (200)^1/6");
        assert_eq!(triple(-3, 5, -2).to_string(), "-3 * (5)^1/-2");
    }
}
