//! Decoder trait for type-safe conversions.
//!
//! The `Decoder` trait converts a source type `T` into a destination type
//! `D`. Every layer of mrzpack uses it to move one step closer to the typed
//! record:
//!
//! ```text
//! &str (proof JSON) → PublicInputs → RawDisclosedData
//! ```
//!
//! # Design Pattern
//!
//! Two traits work together:
//!
//! 1. `Decoder<T, D>` - Performs the actual conversion
//! 2. `DecodableFrom<T>` - Marker trait constraining valid conversions
//!
//! Only pairs that are explicitly marked can be converted.
//!
//! # Implementation Guide
//!
//! ```no_run
//! use mrzpack::decoder::{Decoder, DecodableFrom};
//!
//! struct Bytes(Vec<u8>);
//! struct Text(String);
//!
//! #[derive(Debug)]
//! struct MyError;
//!
//! impl DecodableFrom<Bytes> for Text {}
//!
//! impl Decoder<Bytes, Text> for Bytes {
//!     type Error = MyError;
//!
//!     fn decode(&self) -> Result<Text, Self::Error> {
//!         String::from_utf8(self.0.clone()).map(Text).map_err(|_| MyError)
//!     }
//! }
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// Implemented by the source type `T`. The destination type must implement
/// `DecodableFrom<T>`.
///
/// # Examples
///
/// ```ignore
/// use mrzpack::decoder::Decoder;
/// use inputs::PublicInputs;
///
/// let inputs: PublicInputs = r#"["0x01", "0x02"]"#.decode().unwrap();
/// ```
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the conversion fails. The specific error
    /// conditions depend on the implementing type.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// It has no methods. Implement it for each valid (source, destination)
/// pair:
///
/// ```no_run
/// use mrzpack::decoder::DecodableFrom;
///
/// struct Source;
/// struct Dest;
///
/// impl DecodableFrom<Source> for Dest {}
/// ```
pub trait DecodableFrom<T> {}
