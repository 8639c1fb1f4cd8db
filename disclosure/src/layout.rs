//! Layout of the disclosed-data block inside the public inputs.
//!
//! The proof circuit reserves a fixed window of its public inputs for the
//! disclosed fields. Offsets and widths are tied to the circuit and change
//! only together with it, so each circuit layout gets its own versioned
//! descriptor.
//!
//! ```text
//! public inputs: | 0..3 | 3 ........................ 93 | 93.. |
//!                         | raw record (69) | unused (21) |
//! raw record:    country(3) nationality(3) type(2) number(9)
//!                expiry(6) birth(6) name(39) gender(1)
//! ```

use std::fmt::{Display, Formatter};
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    IssuingCountry,
    Nationality,
    DocumentType,
    DocumentNumber,
    DateOfExpiry,
    DateOfBirth,
    Name,
    Gender,
}

/// How the bytes of a field are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Six ASCII digits, `YYMMDD`
    Date,
}

impl FieldId {
    pub const ALL: [FieldId; 8] = [
        FieldId::IssuingCountry,
        FieldId::Nationality,
        FieldId::DocumentType,
        FieldId::DocumentNumber,
        FieldId::DateOfExpiry,
        FieldId::DateOfBirth,
        FieldId::Name,
        FieldId::Gender,
    ];

    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::DateOfExpiry | FieldId::DateOfBirth => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::IssuingCountry => "issuing_country",
            FieldId::Nationality => "nationality",
            FieldId::DocumentType => "document_type",
            FieldId::DocumentNumber => "document_number",
            FieldId::DateOfExpiry => "date_of_expiry",
            FieldId::DateOfBirth => "date_of_birth",
            FieldId::Name => "name",
            FieldId::Gender => "gender",
        }
    }
}

impl Display for FieldId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = Error;

    /// Accepts the snake_case name, with `-` allowed in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        FieldId::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub width: usize,
}

impl FieldSpec {
    pub const fn new(id: FieldId, width: usize) -> Self {
        FieldSpec { id, width }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutVersion {
    V1,
}

impl LayoutVersion {
    pub fn number(self) -> u8 {
        match self {
            LayoutVersion::V1 => 1,
        }
    }
}

impl Display for LayoutVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.number())
    }
}

impl TryFrom<u8> for LayoutVersion {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(LayoutVersion::V1),
            _ => Err(Error::UnknownLayoutVersion(value)),
        }
    }
}

/// Position and shape of the disclosed-data block.
#[derive(Debug, PartialEq, Eq)]
pub struct Layout {
    version: LayoutVersion,
    offset: usize,
    window: usize,
    fields: &'static [FieldSpec],
}

static LAYOUT_V1: Layout = Layout {
    version: LayoutVersion::V1,
    offset: 3,
    window: 90,
    fields: &[
        FieldSpec::new(FieldId::IssuingCountry, 3),
        FieldSpec::new(FieldId::Nationality, 3),
        FieldSpec::new(FieldId::DocumentType, 2),
        FieldSpec::new(FieldId::DocumentNumber, 9),
        FieldSpec::new(FieldId::DateOfExpiry, 6),
        FieldSpec::new(FieldId::DateOfBirth, 6),
        FieldSpec::new(FieldId::Name, 39),
        FieldSpec::new(FieldId::Gender, 1),
    ],
};

impl Layout {
    pub fn v1() -> &'static Layout {
        &LAYOUT_V1
    }

    pub fn for_version(version: LayoutVersion) -> &'static Layout {
        match version {
            LayoutVersion::V1 => &LAYOUT_V1,
        }
    }

    pub fn version(&self) -> LayoutVersion {
        self.version
    }

    /// Index of the first public input of the window.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of public inputs in the window. The raw record occupies the
    /// start of it.
    pub fn window_len(&self) -> usize {
        self.window
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn input_range(&self) -> Range<usize> {
        self.offset..self.offset + self.window
    }

    pub fn min_inputs(&self) -> usize {
        self.offset + self.window
    }

    pub fn raw_width(&self) -> usize {
        self.fields.iter().map(|spec| spec.width).sum()
    }

    /// Each field with its byte range inside the raw record, in order.
    pub fn ranges(&self) -> impl Iterator<Item = (&'static FieldSpec, Range<usize>)> {
        self.fields.iter().scan(0, |start, spec| {
            let range = *start..*start + spec.width;
            *start = range.end;
            Some((spec, range))
        })
    }

    pub fn field_range(&self, id: FieldId) -> Result<Range<usize>, Error> {
        self.ranges()
            .find(|(spec, _)| spec.id == id)
            .map(|(_, range)| range)
            .ok_or(Error::FieldNotInLayout(id))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_v1_shape() {
        let layout = Layout::v1();
        assert_eq!(69, layout.raw_width());
        assert_eq!(93, layout.min_inputs());
        assert_eq!(3..93, layout.input_range());
        assert!(layout.raw_width() <= layout.window_len());
        let ids: Vec<FieldId> = layout.fields().iter().map(|spec| spec.id).collect();
        assert_eq!(FieldId::ALL.to_vec(), ids);
    }

    #[rstest(id, expected,
        case(FieldId::IssuingCountry, 0..3),
        case(FieldId::Nationality, 3..6),
        case(FieldId::DocumentType, 6..8),
        case(FieldId::DocumentNumber, 8..17),
        case(FieldId::DateOfExpiry, 17..23),
        case(FieldId::DateOfBirth, 23..29),
        case(FieldId::Name, 29..68),
        case(FieldId::Gender, 68..69),
    )]
    fn test_v1_field_range(id: FieldId, expected: Range<usize>) {
        assert_eq!(expected, Layout::v1().field_range(id).unwrap());
    }

    #[rstest(input, expected,
        case("name", FieldId::Name),
        case("date-of-birth", FieldId::DateOfBirth),
        case("Issuing_Country", FieldId::IssuingCountry),
    )]
    fn test_field_id_from_str(input: &str, expected: FieldId) {
        assert_eq!(expected, input.parse::<FieldId>().unwrap());
    }

    #[test]
    fn test_field_id_from_str_unknown() {
        assert!(matches!("surname".parse::<FieldId>(), Err(Error::UnknownField(_))));
    }

    #[rstest(input, ok, case(1, true), case(0, false), case(2, false))]
    fn test_layout_version_from_number(input: u8, ok: bool) {
        let version = LayoutVersion::try_from(input);
        assert_eq!(ok, version.is_ok());
        if let Ok(version) = version {
            assert_eq!(Layout::v1(), Layout::for_version(version));
        }
    }
}
