//! Property-based tests for the GF(2^8) codec
//!
//! Uses proptest to validate the field axioms, the polynomial division
//! round-trip, and error correction up to capacity with randomly generated
//! inputs.

use proptest::collection::vec;
use proptest::prelude::*;
use rsfec::{Gf8, Poly, RsCodec};

fn poly_from(values: &[u8]) -> Poly {
    Poly::from_coeffs(values.iter().map(|&v| Gf8::new(v)))
}

proptest! {
    /// Every nonzero element divided by itself is the field unit
    #[test]
    fn prop_self_division_yields_unit(a in 1u8..=255) {
        let a = Gf8::new(a);
        prop_assert_eq!(a / a, Gf8::ONE);
    }

    /// Characteristic 2: every element is its own additive inverse
    #[test]
    fn prop_element_cancels_itself(a in any::<u8>()) {
        let a = Gf8::new(a);
        prop_assert_eq!(a + a, Gf8::ZERO);
    }

    /// Multiplication by zero annihilates
    #[test]
    fn prop_mul_by_zero(a in any::<u8>()) {
        let a = Gf8::new(a);
        prop_assert_eq!(a * Gf8::ZERO, Gf8::ZERO);
    }

    /// Multiplication distributes over addition
    #[test]
    fn prop_distributivity(a in any::<u8>(), b in any::<u8>(), c in any::<u8>()) {
        let (a, b, c) = (Gf8::new(a), Gf8::new(b), Gf8::new(c));
        prop_assert_eq!(a * (b + c), a * b + a * c);
    }

    /// Division undoes multiplication for nonzero divisors
    #[test]
    fn prop_div_undoes_mul(a in any::<u8>(), b in 1u8..=255) {
        let a = Gf8::new(a);
        let b = Gf8::new(b);
        prop_assert_eq!(a * b / b, a);
    }

    /// quotient * divisor + remainder reconstructs the dividend
    #[test]
    fn prop_poly_division_round_trip(
        dividend in vec(any::<u8>(), 1..24),
        divisor in vec(any::<u8>(), 1..8),
    ) {
        prop_assume!(divisor.iter().any(|&c| c != 0));

        let dividend = poly_from(&dividend);
        let divisor = poly_from(&divisor);
        let division = dividend.div(&divisor).unwrap();
        let rebuilt = division
            .quotient()
            .mul(&divisor)
            .add(&division.remainder());
        prop_assert_eq!(rebuilt, dividend);
    }

    /// Encoding then decoding an uncorrupted block is the identity
    #[test]
    fn prop_clean_round_trip(data in vec(any::<u8>(), 11)) {
        let codec = RsCodec::new(15, 4).unwrap();
        let codeword = codec.encode(&data).unwrap();
        prop_assert_eq!(codec.decode(&codeword).unwrap(), data);
    }

    /// Up to t errors at arbitrary positions with arbitrary nonzero deltas
    /// are always corrected
    #[test]
    fn prop_decode_corrects_up_to_capacity(
        data in vec(any::<u8>(), 11),
        first in 0usize..15,
        second in 0usize..15,
        delta1 in 1u8..=255,
        delta2 in 1u8..=255,
    ) {
        let codec = RsCodec::new(15, 4).unwrap();
        let mut codeword = codec.encode(&data).unwrap();

        // One error when the positions collide, two otherwise
        codeword[first] ^= delta1;
        if second != first {
            codeword[second] ^= delta2;
        }

        prop_assert_eq!(codec.decode(&codeword).unwrap(), data);
    }
}
