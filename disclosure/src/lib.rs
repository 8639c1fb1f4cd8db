//! Disclosed travel-document fields in zero-knowledge proof public inputs.
//!
//! A disclosure proof exposes selected fields of a passport or ID card
//! (countries, document type and number, dates, name, gender) as a block of
//! 69 bytes inside its public inputs, one byte per input. This crate reads
//! that block into a [`DisclosedData`] record and builds it back from typed
//! values.
//!
//! ```
//! use chrono::NaiveDate;
//! use disclosure::{Codec, DisclosureFields, FieldId, ReferenceYear};
//! use inputs::PublicInputs;
//!
//! let codec = Codec::new(ReferenceYear::new(2025));
//! let fields = DisclosureFields::new()
//!     .with(FieldId::IssuingCountry, "USA")
//!     .with(FieldId::DateOfBirth, NaiveDate::from_ymd_opt(1990, 5, 1).unwrap())
//!     .with(FieldId::Name, "DOE<<JANE");
//!
//! let mut public_inputs = PublicInputs::from_bytes(&[0; 93]);
//! codec.encode_into(&fields, &mut public_inputs).unwrap();
//!
//! let data = codec.decode(&public_inputs).unwrap();
//! assert_eq!("USA", data.issuing_country);
//! assert_eq!(NaiveDate::from_ymd_opt(1990, 5, 1), data.date_of_birth);
//! assert_eq!("DOE  JANE", data.name);
//! ```

#![forbid(unsafe_code)]

mod codec;
pub mod date;
pub mod error;
pub mod layout;
mod mask;
pub mod mrz;
mod raw;
mod record;
pub mod text;
mod value;

pub use codec::Codec;
pub use date::ReferenceYear;
pub use layout::{FieldId, FieldKind, FieldSpec, Layout, LayoutVersion};
pub use mask::DiscloseMask;
pub use mrz::MrzFormat;
pub use raw::RawDisclosedData;
pub use record::{DisclosedData, DocumentKind};
pub use value::{DisclosureFields, FieldValue, OversizePolicy};
