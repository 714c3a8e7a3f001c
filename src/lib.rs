//! Reed-Solomon forward error correction over GF(2^8).
//!
//! Systematic block codec: [`RsCodec::encode`] appends `parity_len` parity
//! symbols to a fixed-size data block, and [`RsCodec::decode`] detects and
//! corrects up to `parity_len / 2` corrupted symbols anywhere in the
//! codeword, data and parity alike.
//!
//! ```
//! use rsfec::RsCodec;
//!
//! # fn main() -> Result<(), rsfec::RsError> {
//! let codec = RsCodec::new(9, 4)?;
//! let mut codeword = codec.encode(b"ABCDE")?;
//!
//! // Corrupt two symbols; t = 4 / 2 = 2, so both are corrected.
//! codeword[1] ^= 0x55;
//! codeword[7] ^= 0x0F;
//! assert_eq!(codec.decode(&codeword)?, b"ABCDE");
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod error;
pub mod gf;
pub mod poly;

pub use codec::RsCodec;
pub use error::{DecodeFailure, Result, RsError};
pub use gf::Gf8;
pub use poly::Poly;
