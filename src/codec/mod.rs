//! Reed-Solomon block codec over GF(2^8)
//!
//! ## Overview
//!
//! Systematic code: a codeword of `codeword_len` byte symbols carries
//! `codeword_len - parity_len` data symbols followed by `parity_len` parity
//! symbols, and up to `parity_len / 2` corrupted symbols can be corrected.
//!
//! Internally a codeword is a polynomial with the symbol order reversed:
//! the first codeword byte is the highest-degree coefficient and the last
//! byte is the constant term. Encoding and decoding both apply the same
//! mapping, so the reversal never leaks through the byte-level API.

mod decoder;

use crate::error::{Result, RsError};
use crate::gf::Gf8;
use crate::poly::Poly;
use log::debug;

/// A Reed-Solomon codec for one fixed choice of codeword and parity length.
///
/// Immutable once constructed; encode and decode take `&self`, so one
/// instance can be shared across threads.
#[derive(Debug)]
pub struct RsCodec {
    codeword_len: usize,
    parity_len: usize,
    generator: Poly,
}

impl RsCodec {
    /// Create a codec for `codeword_len`-byte codewords with `parity_len`
    /// parity symbols.
    ///
    /// `parity_len` must be even (it is twice the correction capacity) and
    /// `0 < parity_len < codeword_len <= 255`; the length cap comes from the
    /// 255 nonzero elements of GF(2^8).
    pub fn new(codeword_len: usize, parity_len: usize) -> Result<Self> {
        if parity_len == 0
            || parity_len % 2 != 0
            || parity_len >= codeword_len
            || codeword_len > 255
        {
            return Err(RsError::InvalidParameters);
        }

        let generator = build_generator(parity_len);
        debug!(
            "rs codec ({}, {}): t = {}, generator degree {}",
            codeword_len,
            codeword_len - parity_len,
            parity_len / 2,
            generator.degree()
        );

        Ok(Self {
            codeword_len,
            parity_len,
            generator,
        })
    }

    /// Total codeword length in bytes
    pub fn codeword_len(&self) -> usize {
        self.codeword_len
    }

    /// Number of parity symbols per codeword
    pub fn parity_len(&self) -> usize {
        self.parity_len
    }

    /// Number of data bytes per codeword
    pub fn data_len(&self) -> usize {
        self.codeword_len - self.parity_len
    }

    /// Maximum number of correctable symbol errors
    pub fn correction_capacity(&self) -> usize {
        self.parity_len / 2
    }

    /// Systematically encode one data block.
    ///
    /// The input must be exactly [`data_len`](Self::data_len) bytes. The
    /// output starts with the input unchanged, followed by `parity_len`
    /// parity bytes: the remainder of the data polynomial (shifted up by
    /// `parity_len` positions) divided by the generator polynomial.
    pub fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() != self.data_len() {
            return Err(RsError::InputLength {
                expected: self.data_len(),
                actual: data.len(),
            });
        }

        // Data bytes occupy the high coefficients; the low parity_len
        // coefficients stay zero, which is the multiplication by
        // x^parity_len.
        let mut message = Poly::zeros(self.codeword_len);
        for (i, &byte) in data.iter().enumerate() {
            message.set(self.codeword_len - 1 - i, Gf8::new(byte));
        }

        let remainder = message.div(&self.generator)?.remainder();

        let mut codeword = vec![0u8; self.codeword_len];
        codeword[..data.len()].copy_from_slice(data);
        for c in 0..self.parity_len {
            codeword[self.codeword_len - 1 - c] = remainder.coeff(c).value();
        }

        Ok(codeword)
    }

    /// Convert a byte block into the reversed internal polynomial
    fn bytes_to_poly(&self, bytes: &[u8]) -> Poly {
        let mut poly = Poly::zeros(self.codeword_len);
        for (i, &byte) in bytes.iter().enumerate() {
            poly.set(self.codeword_len - 1 - i, Gf8::new(byte));
        }
        poly
    }
}

/// Build the generator polynomial `g(x) = Π (x + α^n)` for
/// `n = 0 .. parity_len - 1` by incremental multiplication.
///
/// The product of monic binomials is monic, so the leading coefficient is
/// always the field unit.
fn build_generator(parity_len: usize) -> Poly {
    let mut generator = Poly::from_coeffs([Gf8::ONE, Gf8::ONE]);
    for n in 1..parity_len {
        let binomial = Poly::from_coeffs([Gf8::alpha_pow(n), Gf8::ONE]);
        generator = binomial.mul(&generator);
    }
    generator
}
