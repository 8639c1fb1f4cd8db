//! Field positions in the machine-readable zone (MRZ).
//!
//! The disclose circuit selects fields from the MRZ it was given, not from
//! the record it outputs. Its mask therefore follows the MRZ positions of
//! the document format:
//!
//! ```text
//! passport (TD3, 88): type(0..2) country(2..5) name(5..44) number(44..53)
//!                     nationality(54..57) birth(57..63) gender(64..65)
//!                     expiry(65..71)
//! id card  (TD1, 90): type(0..2) country(2..5) number(5..14) birth(30..36)
//!                     gender(37..38) expiry(38..44) nationality(45..48)
//!                     name(60..90)
//! ```

use std::fmt::{Display, Formatter};
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::layout::FieldId;

/// Length of the circuit's MRZ input. A passport MRZ is padded to it.
pub const MRZ_INPUT_LEN: usize = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MrzFormat {
    /// Two lines of 44 characters
    #[default]
    Passport,
    /// Three lines of 30 characters
    IdCard,
}

impl MrzFormat {
    /// Number of MRZ characters for this format.
    pub fn mrz_len(self) -> usize {
        match self {
            MrzFormat::Passport => 88,
            MrzFormat::IdCard => 90,
        }
    }

    pub fn field_range(self, id: FieldId) -> Range<usize> {
        match (self, id) {
            (_, FieldId::DocumentType) => 0..2,
            (_, FieldId::IssuingCountry) => 2..5,
            (MrzFormat::Passport, FieldId::Name) => 5..44,
            (MrzFormat::Passport, FieldId::DocumentNumber) => 44..53,
            (MrzFormat::Passport, FieldId::Nationality) => 54..57,
            (MrzFormat::Passport, FieldId::DateOfBirth) => 57..63,
            (MrzFormat::Passport, FieldId::Gender) => 64..65,
            (MrzFormat::Passport, FieldId::DateOfExpiry) => 65..71,
            (MrzFormat::IdCard, FieldId::DocumentNumber) => 5..14,
            (MrzFormat::IdCard, FieldId::DateOfBirth) => 30..36,
            (MrzFormat::IdCard, FieldId::Gender) => 37..38,
            (MrzFormat::IdCard, FieldId::DateOfExpiry) => 38..44,
            (MrzFormat::IdCard, FieldId::Nationality) => 45..48,
            (MrzFormat::IdCard, FieldId::Name) => 60..90,
        }
    }
}

impl Display for MrzFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MrzFormat::Passport => write!(f, "passport"),
            MrzFormat::IdCard => write!(f, "id_card"),
        }
    }
}

impl FromStr for MrzFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "passport" | "td3" => Ok(MrzFormat::Passport),
            "id_card" | "td1" => Ok(MrzFormat::IdCard),
            _ => Err(Error::UnknownMrzFormat(s.to_string())),
        }
    }
}
