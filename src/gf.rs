//! Galois Field GF(2^8) arithmetic for Reed-Solomon coding
//!
//! This module implements 8-bit Galois Field arithmetic using the primitive
//! polynomial 0x11D (x⁸ + x⁴ + x³ + x² + 1). The polynomial's root α = 2
//! generates all 255 nonzero field elements as successive powers, which is
//! what makes the log/antilog table representation possible.
//!
//! Tables are built once on first use and shared process-wide; they are pure
//! functions of the fixed polynomial and never change afterwards.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};
use std::sync::OnceLock;

/// Primitive polynomial p(x) = 1 + x² + x³ + x⁴ + x⁸
const GF_GENERATOR: u32 = 0x11D;

/// Multiplicative order of the field: number of nonzero elements
const GF_ORDER: usize = 255;

/// Sentinel stored in the log table for the zero element, which has no
/// logarithm. Valid logarithms are 0..=254, so 255 never collides.
const NO_LOG: u8 = 255;

/// Precomputed logarithm and antilogarithm tables.
///
/// The antilog table is stored doubled so a sum (or offset difference) of
/// two logarithms indexes directly without a modulo.
pub struct GfTables {
    log: [u8; 256],
    exp: [u8; 512],
}

impl GfTables {
    fn new() -> Self {
        let mut tables = GfTables {
            log: [NO_LOG; 256],
            exp: [0; 512],
        };
        tables.build();
        tables
    }

    /// Build both tables by repeated multiplication by α with
    /// polynomial reduction on overflow.
    fn build(&mut self) {
        let mut value = 1u32;

        for i in 0..GF_ORDER {
            self.exp[i] = value as u8;
            self.log[value as usize] = i as u8;

            value <<= 1;
            if value & 0x100 != 0 {
                value ^= GF_GENERATOR;
            }
        }

        // Duplicate so log sums up to 509 index without wrapping
        for i in GF_ORDER..2 * GF_ORDER {
            self.exp[i] = self.exp[i - GF_ORDER];
        }

        self.log[0] = NO_LOG;
    }
}

/// Get the process-wide table instance
pub fn gf_tables() -> &'static GfTables {
    static TABLES: OnceLock<GfTables> = OnceLock::new();
    TABLES.get_or_init(GfTables::new)
}

/// An element of GF(2^8).
///
/// Holds only the raw value; the logarithm is always derived from the shared
/// tables on demand. The zero element is an ordinary value, not a sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gf8 {
    value: u8,
}

impl Gf8 {
    /// The additive identity
    pub const ZERO: Gf8 = Gf8 { value: 0 };
    /// The multiplicative identity (α⁰)
    pub const ONE: Gf8 = Gf8 { value: 1 };

    pub fn new(value: u8) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Construct α^exponent, reducing the exponent mod 255
    pub fn alpha_pow(exponent: usize) -> Self {
        Self::new(gf_tables().exp[exponent % GF_ORDER])
    }

    /// Discrete logarithm, `None` for the zero element
    pub fn log(&self) -> Option<u8> {
        if self.value == 0 {
            None
        } else {
            Some(gf_tables().log[self.value as usize])
        }
    }

    /// Division that reports a zero divisor instead of panicking.
    /// Decode paths use this where a zero divisor is reachable from
    /// corrupt input.
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.value == 0 {
            return None;
        }
        if self.value == 0 {
            return Some(Self::ZERO);
        }

        let tables = gf_tables();
        let log_a = tables.log[self.value as usize] as usize;
        let log_b = tables.log[rhs.value as usize] as usize;
        Some(Self::new(tables.exp[log_a + GF_ORDER - log_b]))
    }
}

// Addition is XOR: the field has characteristic 2
impl Add for Gf8 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value ^ rhs.value)
    }
}

impl AddAssign for Gf8 {
    fn add_assign(&mut self, rhs: Self) {
        self.value ^= rhs.value;
    }
}

// Subtraction is identical to addition
impl Sub for Gf8 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.value ^ rhs.value)
    }
}

impl SubAssign for Gf8 {
    fn sub_assign(&mut self, rhs: Self) {
        self.value ^= rhs.value;
    }
}

impl Mul for Gf8 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        if self.value == 0 || rhs.value == 0 {
            return Self::ZERO;
        }

        let tables = gf_tables();
        let log_sum = tables.log[self.value as usize] as usize
            + tables.log[rhs.value as usize] as usize;
        Self::new(tables.exp[log_sum])
    }
}

impl MulAssign for Gf8 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for Gf8 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Some(result) => result,
            None => panic!("Division by zero in Galois field"),
        }
    }
}

impl DivAssign for Gf8 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl From<u8> for Gf8 {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Gf8> for u8 {
    fn from(element: Gf8) -> Self {
        element.value
    }
}

impl std::fmt::Display for Gf8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
