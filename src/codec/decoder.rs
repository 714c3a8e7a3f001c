//! Decode pipeline: syndromes, key-equation solver, error location and
//! magnitude recovery.
//!
//! The pipeline is strictly linear (syndrome computation, extended
//! Euclidean solve, brute-force root search, Forney magnitudes, correction)
//! and every stage runs at most once per decode. A failure at any stage
//! aborts the rest; there are no retries and no partial results.

use super::RsCodec;
use crate::error::{DecodeFailure, Result, RsError};
use crate::gf::Gf8;
use crate::poly::Poly;
use log::debug;

/// One located error: the coefficient index in the internal (reversed)
/// codeword polynomial, together with its locator element α^position.
struct ErrorLocation {
    position: usize,
    element: Gf8,
}

impl RsCodec {
    /// Decode one received codeword, correcting up to
    /// [`correction_capacity`](Self::correction_capacity) symbol errors.
    ///
    /// Returns the corrected data portion, or [`RsError::Uncorrectable`]
    /// when the error pattern exceeds the code's capacity. An error pattern
    /// whose syndrome is accidentally all-zero is indistinguishable from a
    /// clean codeword and passes through unchanged.
    pub fn decode(&self, codeword: &[u8]) -> Result<Vec<u8>> {
        if codeword.len() != self.codeword_len {
            return Err(RsError::InputLength {
                expected: self.codeword_len,
                actual: codeword.len(),
            });
        }

        let received = self.bytes_to_poly(codeword);

        let syndromes = self.syndromes(&received);
        if syndromes.is_zero() {
            return Ok(codeword[..self.data_len()].to_vec());
        }

        let (locator, evaluator) = self.solve_key_equation(&syndromes)?;
        let locations = self.find_error_locations(&locator)?;
        let error_poly = self.error_magnitudes(&locator, &evaluator, &locations)?;

        // Field subtraction is XOR, so adding the error polynomial removes it
        let corrected = received.add(&error_poly);

        let mut data = vec![0u8; self.data_len()];
        for (i, byte) in data.iter_mut().enumerate() {
            *byte = corrected.coeff(self.codeword_len - 1 - i).value();
        }
        Ok(data)
    }

    /// Evaluate the received polynomial at α^j for each j in
    /// `[0, parity_len)`. All-zero means no detectable error.
    fn syndromes(&self, received: &Poly) -> Poly {
        Poly::from_fn(self.parity_len, |j| received.eval_at_alpha_pow(j))
    }

    /// Extended-Euclidean key-equation solver.
    ///
    /// Runs the classic recurrence on `(z^2t, S(z))` while accumulating the
    /// cofactor sequence `V`, stopping the first time `deg(V) <= t` and
    /// `deg(A) <= t - 1`. Both outputs are normalized by V's constant term,
    /// forcing the locator's constant term to 1.
    fn solve_key_equation(&self, syndromes: &Poly) -> Result<(Poly, Poly)> {
        let t = self.correction_capacity();

        let mut a_prev2 = Poly::zeros(2 * t + 1);
        a_prev2.set(2 * t, Gf8::ONE);
        let mut a_prev1 = syndromes.clone();

        let mut v_prev2 = Poly::zeros(1);
        let mut v_prev1 = Poly::one();

        for step in 1..=2 * t {
            let quotient = a_prev2.div(&a_prev1)?.quotient();
            let a = a_prev2.add(&quotient.mul(&a_prev1));
            let v = v_prev2.add(&v_prev1.mul(&quotient));

            if v.degree() <= t && a.degree() <= t - 1 {
                let v0 = v.coeff(0);
                if v0.is_zero() {
                    return Err(RsError::DivisionByZero);
                }
                let locator = Poly::from_fn(t + 1, |i| v.coeff(i) / v0);
                let evaluator = Poly::from_fn(t, |i| a.coeff(i) / v0);
                debug!(
                    "key equation solved at step {}: locator degree {}",
                    step,
                    locator.degree()
                );
                return Ok((locator, evaluator));
            }

            a_prev2 = a_prev1;
            a_prev1 = a;
            v_prev2 = v_prev1;
            v_prev1 = v;
        }

        debug!("key-equation solver made no progress within 2t steps");
        Err(RsError::Uncorrectable(DecodeFailure::SolverStalled))
    }

    /// Brute-force root search over all nonzero field elements.
    ///
    /// A zero of the locator at α^a marks an error at coefficient
    /// `(255 - a) mod 255`, the exponent of the inverse root. The search
    /// stops early once `deg(locator)` roots are found; fewer roots than
    /// the degree means more errors occurred than the code can correct.
    fn find_error_locations(&self, locator: &Poly) -> Result<Vec<ErrorLocation>> {
        let needed = locator.degree();
        if needed == 0 {
            debug!("degenerate locator polynomial with nonzero syndromes");
            return Err(RsError::Uncorrectable(DecodeFailure::TooFewRoots));
        }

        let mut locations = Vec::with_capacity(needed);
        for a in 0..255 {
            if locator.eval_at_alpha_pow(a).is_zero() {
                let position = (255 - a) % 255;
                locations.push(ErrorLocation {
                    position,
                    element: Gf8::alpha_pow(position),
                });
                if locations.len() == needed {
                    return Ok(locations);
                }
            }
        }

        debug!(
            "found {} locator roots, needed {}",
            locations.len(),
            needed
        );
        Err(RsError::Uncorrectable(DecodeFailure::TooFewRoots))
    }

    /// Forney-style error magnitudes.
    ///
    /// The locator's formal derivative in characteristic 2 keeps only the
    /// odd-power terms. For each error position `e` both the derivative and
    /// the evaluator are taken at the inverse root α^((255 - e) mod 255);
    /// the magnitude is `evaluator / derivative · α^e`, stored at
    /// coefficient `e` of a sparse error polynomial.
    fn error_magnitudes(
        &self,
        locator: &Poly,
        evaluator: &Poly,
        locations: &[ErrorLocation],
    ) -> Result<Poly> {
        let derivative = Poly::from_fn(locator.degree(), |i| {
            if (i + 1) % 2 == 1 {
                locator.coeff(i + 1)
            } else {
                Gf8::ZERO
            }
        });

        let mut error_poly = Poly::zeros(self.codeword_len);
        for location in locations {
            if location.position >= self.codeword_len {
                debug!(
                    "locator root maps to position {} beyond codeword length {}",
                    location.position, self.codeword_len
                );
                return Err(RsError::Uncorrectable(DecodeFailure::LocatorOutOfRange));
            }

            let inverse_exp = (255 - location.position) % 255;
            let denominator = derivative.eval_at_alpha_pow(inverse_exp);
            let numerator = evaluator.eval_at_alpha_pow(inverse_exp);
            let magnitude = numerator
                .checked_div(denominator)
                .ok_or(RsError::Uncorrectable(DecodeFailure::ZeroDerivative))?
                * location.element;

            error_poly.set(location.position, magnitude);
        }

        Ok(error_poly)
    }
}
