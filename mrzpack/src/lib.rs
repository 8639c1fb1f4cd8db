//! # mrzpack
//!
//! Core traits for encoding and decoding disclosed travel-document data
//! carried in zero-knowledge proof public inputs.
//!
//! ## Overview
//!
//! The conversion pattern flows like this:
//! ```text
//! proof JSON → PublicInputs → RawDisclosedData (69 bytes) → DisclosedData
//! ```
//!
//! Each step uses the `Decoder` trait to convert from one type to the next,
//! and the `Encoder` trait to convert in the reverse direction. The last
//! step depends on a reference year and is done by `disclosure::Codec`.
//!
//! ## Type Safety
//!
//! The traits use marker traits (`DecodableFrom` and `EncodableTo`) so that
//! only explicitly declared conversions exist.
//!
//! ## Example
//!
//! ```ignore
//! use mrzpack::decoder::Decoder;
//! use mrzpack::encoder::Encoder;
//! use inputs::PublicInputs;
//! use disclosure::RawDisclosedData;
//!
//! let inputs: PublicInputs = proof_json.as_str().decode()?;
//! let raw: RawDisclosedData = inputs.decode()?;
//! let entries: PublicInputs = raw.encode()?;
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
