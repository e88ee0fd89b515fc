//! Steganographic codec for hiding an arbitrary payload in the LSBs of a
//! WAV file's PCM samples.
//!
//! ## Technical overview
//!
//! A plaintext payload is optionally encrypted ([`cipher`]), optionally
//! error-correction encoded ([`ecc`]), framed with a small fixed header
//! ([`frame`]) describing the transforms used, converted to a bit stream
//! ([`bits`]), and overlaid onto the low-order bits of a strided selection
//! of PCM sample bytes ([`lsb`]) inside a RIFF/WAVE container ([`container`]).
//! [`pipeline`] composes these into the two user-facing operations.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use stegowav::cipher::{EncTag, HashTag, FixedCredentials};
//! use stegowav::ecc::EcTag;
//! use stegowav::container::WavFile;
//! use stegowav::pipeline::{self, EmbedOptions, ExtractOptions};
//!
//! # fn run() -> stegowav::errors::Result<()> {
//! let bytes = std::fs::read("carrier.wav")?;
//! let mut wav = WavFile::parse(&bytes)?;
//! let creds = FixedCredentials::new("swordfish");
//!
//! pipeline::embed(&mut wav, b"hidden message", &EmbedOptions {
//!     lsb: 1,
//!     stride: 1,
//!     ec_tag: EcTag::None,
//!     ec_param: 0,
//!     enc_tag: EncTag::None,
//!     hash_tag: HashTag::None,
//!     repeat_data: false,
//!     credentials: &creds,
//! })?;
//!
//! let recovered = pipeline::extract(&wav, &ExtractOptions {
//!     lsb: 1,
//!     stride: 1,
//!     strict: false,
//!     credentials: &creds,
//! })?;
//! assert_eq!(recovered, b"hidden message");
//! # Ok(()) }
//! ```

pub mod bits;
pub mod byteorder;
pub mod cipher;
pub mod container;
pub mod ecc;
pub mod errors;
pub mod frame;
pub mod lsb;
pub mod pipeline;
