//! Polynomial arithmetic over GF(2^8)
//!
//! Polynomials are dense coefficient sequences indexed by ascending power:
//! index 0 is the constant term. Reading past the stored length yields the
//! zero element, so callers never need bounds checks to treat a short array
//! as a longer polynomial with zero high-order coefficients.
//!
//! Coefficients live in a `SmallVec`: everything the decoder manipulates is
//! at most `2t + 1` coefficients long and stays inline.

use crate::error::{Result, RsError};
use crate::gf::Gf8;
use smallvec::SmallVec;

type Coeffs = SmallVec<[Gf8; 16]>;

/// A polynomial over GF(2^8), constant term first.
#[derive(Debug, Clone, Default)]
pub struct Poly {
    coeffs: Coeffs,
}

impl Poly {
    /// The zero polynomial of the given stored length
    pub fn zeros(len: usize) -> Self {
        Self {
            coeffs: SmallVec::from_elem(Gf8::ZERO, len),
        }
    }

    /// The constant polynomial 1
    pub fn one() -> Self {
        Self {
            coeffs: SmallVec::from_slice(&[Gf8::ONE]),
        }
    }

    pub fn from_coeffs(coeffs: impl IntoIterator<Item = Gf8>) -> Self {
        Self {
            coeffs: coeffs.into_iter().collect(),
        }
    }

    /// Build a polynomial of the given length with `f(i)` as coefficient `i`
    pub fn from_fn(len: usize, f: impl Fn(usize) -> Gf8) -> Self {
        Self {
            coeffs: (0..len).map(f).collect(),
        }
    }

    /// Stored length, which may exceed `degree() + 1`
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Coefficient at `index`; positions past the stored length are zero
    pub fn coeff(&self, index: usize) -> Gf8 {
        self.coeffs.get(index).copied().unwrap_or(Gf8::ZERO)
    }

    pub fn set(&mut self, index: usize, value: Gf8) {
        self.coeffs[index] = value;
    }

    /// Highest index holding a nonzero coefficient; 0 for the zero polynomial
    pub fn degree(&self) -> usize {
        self.coeffs
            .iter()
            .rposition(|c| !c.is_zero())
            .unwrap_or(0)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }

    /// Polynomial addition: elementwise XOR after zero-padding the shorter
    /// operand. Subtraction is the same operation in characteristic 2.
    pub fn add(&self, rhs: &Poly) -> Poly {
        let len = self.len().max(rhs.len());
        Poly::from_fn(len, |i| self.coeff(i) + rhs.coeff(i))
    }

    /// Convolution product
    pub fn mul(&self, rhs: &Poly) -> Poly {
        if self.is_empty() || rhs.is_empty() {
            return Poly::default();
        }

        let mut product = Poly::zeros(self.len() + rhs.len() - 1);
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                product.coeffs[i + j] += a * b;
            }
        }
        product
    }

    /// Long division by `divisor`, highest degree downward.
    ///
    /// The returned [`Division`] holds a buffer of length `degree() + 1`
    /// with the quotient in its upper positions and the remainder in the
    /// lower `degree(divisor)` positions. Dividing by the zero polynomial
    /// fails with [`RsError::DivisionByZero`].
    pub fn div(&self, divisor: &Poly) -> Result<Division> {
        let d1 = self.degree();
        let d2 = divisor.degree();
        let lead = divisor.coeff(d2);
        if lead.is_zero() {
            return Err(RsError::DivisionByZero);
        }

        let mut buf = Poly::from_fn(d1 + 1, |i| self.coeff(i));
        if d1 >= d2 {
            for step in 0..=(d1 - d2) {
                let idx = d1 - step;
                let q = buf.coeffs[idx] / lead;
                buf.coeffs[idx] = q;
                for k in 0..d2 {
                    buf.coeffs[idx - 1 - k] += q * divisor.coeff(d2 - 1 - k);
                }
            }
        }

        Ok(Division {
            combined: buf,
            split: d2,
        })
    }

    /// Evaluate at α^exponent: `Σ coeff[i] · α^(exponent·i)`
    pub fn eval_at_alpha_pow(&self, exponent: usize) -> Gf8 {
        let mut acc = Gf8::ZERO;
        for (i, &c) in self.coeffs.iter().enumerate() {
            acc += c * Gf8::alpha_pow(exponent * i);
        }
        acc
    }
}

// Equality ignores trailing zero coefficients
impl PartialEq for Poly {
    fn eq(&self, other: &Self) -> bool {
        let len = self.len().max(other.len());
        (0..len).all(|i| self.coeff(i) == other.coeff(i))
    }
}

impl Eq for Poly {}

/// Result of [`Poly::div`]: one buffer carrying quotient and remainder.
#[derive(Debug, Clone)]
pub struct Division {
    combined: Poly,
    split: usize,
}

impl Division {
    /// The quotient, taken from the upper positions of the buffer
    pub fn quotient(&self) -> Poly {
        Poly::from_coeffs(
            self.combined
                .coeffs
                .iter()
                .copied()
                .skip(self.split),
        )
    }

    /// The remainder: the lower `degree(divisor)` positions
    pub fn remainder(&self) -> Poly {
        Poly::from_coeffs(
            self.combined
                .coeffs
                .iter()
                .copied()
                .take(self.split),
        )
    }

    pub fn combined(&self) -> &Poly {
        &self.combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(values: &[u8]) -> Poly {
        Poly::from_coeffs(values.iter().map(|&v| Gf8::new(v)))
    }

    #[test]
    fn test_degree() {
        assert_eq!(Poly::default().degree(), 0);
        assert_eq!(Poly::zeros(5).degree(), 0);
        assert_eq!(poly(&[1]).degree(), 0);
        assert_eq!(poly(&[0, 0, 7, 0, 0]).degree(), 2);
        assert_eq!(poly(&[1, 2, 3]).degree(), 2);
    }

    #[test]
    fn test_missing_coefficients_read_as_zero() {
        let p = poly(&[1, 2]);
        assert_eq!(p.coeff(0).value(), 1);
        assert_eq!(p.coeff(5), Gf8::ZERO);
        assert_eq!(Poly::default().coeff(0), Gf8::ZERO);
    }

    #[test]
    fn test_add_is_sub() {
        let a = poly(&[1, 2, 3]);
        let b = poly(&[5, 6]);
        let sum = a.add(&b);
        assert_eq!(sum.coeff(0).value(), 1 ^ 5);
        assert_eq!(sum.coeff(1).value(), 2 ^ 6);
        assert_eq!(sum.coeff(2).value(), 3);

        // adding a polynomial to itself cancels
        assert!(a.add(&a).is_zero());
    }

    #[test]
    fn test_mul_binomials() {
        // (x + 1)(x + 2) = x^2 + 3x + 2 over GF(2^8)
        let a = poly(&[1, 1]);
        let b = poly(&[2, 1]);
        let product = a.mul(&b);
        assert_eq!(product.coeff(0).value(), 2);
        assert_eq!(product.coeff(1).value(), 3);
        assert_eq!(product.coeff(2).value(), 1);
    }

    #[test]
    fn test_div_exact() {
        // (x + 1)^2 = x^2 + 1 in characteristic 2; dividing back is exact
        let square = poly(&[1, 0, 1]);
        let binomial = poly(&[1, 1]);
        let division = square.div(&binomial).unwrap();
        assert_eq!(division.quotient(), binomial);
        assert!(division.remainder().is_zero());
    }

    #[test]
    fn test_div_round_trip() {
        let dividend = poly(&[7, 0, 150, 31, 2, 88]);
        let divisor = poly(&[3, 1, 9]);
        let division = dividend.div(&divisor).unwrap();
        let rebuilt = division.quotient().mul(&divisor).add(&division.remainder());
        assert_eq!(rebuilt, dividend);
    }

    #[test]
    fn test_div_short_dividend() {
        // dividend degree below divisor degree: empty quotient, dividend
        // carried through as remainder
        let dividend = poly(&[9, 4]);
        let divisor = poly(&[1, 1, 1]);
        let division = dividend.div(&divisor).unwrap();
        assert!(division.quotient().is_zero());
        assert_eq!(division.remainder(), dividend);
    }

    #[test]
    fn test_div_by_zero_polynomial() {
        let dividend = poly(&[1, 2, 3]);
        assert_eq!(
            dividend.div(&Poly::zeros(4)).unwrap_err(),
            RsError::DivisionByZero
        );
    }

    #[test]
    fn test_eval() {
        // p(x) = 1 + x evaluated at alpha^0 = 1 gives 1 + 1 = 0
        let p = poly(&[1, 1]);
        assert_eq!(p.eval_at_alpha_pow(0), Gf8::ZERO);

        // p(x) = 3 + x at alpha^1: 3 + 2 = 1
        let p = poly(&[3, 1]);
        assert_eq!(p.eval_at_alpha_pow(1).value(), 1);

        // constant polynomial ignores the evaluation point
        let p = poly(&[42]);
        assert_eq!(p.eval_at_alpha_pow(77).value(), 42);
    }
}
