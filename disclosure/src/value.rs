//! Values supplied to the encoder.

use std::borrow::Cow;
use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::date::format_date;
use crate::error::Error;
use crate::layout::FieldId;
use crate::record::DisclosedData;

/// A field value before it is laid out in its slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Copied as-is
    Bytes(Vec<u8>),
    /// UTF-8 bytes of the string
    Text(String),
    /// `YYMMDD`
    Date(NaiveDate),
}

impl FieldValue {
    pub fn to_bytes(&self) -> Cow<'_, [u8]> {
        match self {
            FieldValue::Bytes(bytes) => Cow::Borrowed(bytes),
            FieldValue::Text(text) => Cow::Borrowed(text.as_bytes()),
            FieldValue::Date(date) => Cow::Owned(format_date(*date)),
        }
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(bytes: Vec<u8>) -> Self {
        FieldValue::Bytes(bytes)
    }
}

impl From<&[u8]> for FieldValue {
    fn from(bytes: &[u8]) -> Self {
        FieldValue::Bytes(bytes.to_vec())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(date: NaiveDate) -> Self {
        FieldValue::Date(date)
    }
}

/// What to do with a value longer than its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OversizePolicy {
    /// Fail with [`Error::FieldTooLong`]
    #[default]
    Reject,
    /// Keep the first `width` bytes
    Truncate,
}

/// Lays `bytes` out in a slot of `width` bytes, padding with nulls.
pub(crate) fn fit(
    field: FieldId,
    bytes: &[u8],
    width: usize,
    policy: OversizePolicy,
) -> Result<Vec<u8>, Error> {
    if bytes.len() > width {
        match policy {
            OversizePolicy::Reject => {
                return Err(Error::FieldTooLong {
                    field,
                    width,
                    actual: bytes.len(),
                });
            }
            OversizePolicy::Truncate => {
                tracing::warn!(%field, width, actual = bytes.len(), "truncating oversized field");
            }
        }
    }
    let mut slot = vec![0u8; width];
    let len = bytes.len().min(width);
    slot[..len].copy_from_slice(&bytes[..len]);
    Ok(slot)
}

/// The values to encode, keyed by field. Fields left out are encoded as
/// null bytes, which reads back as "not disclosed".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisclosureFields {
    values: BTreeMap<FieldId, FieldValue>,
}

impl DisclosureFields {
    pub fn new() -> Self {
        DisclosureFields::default()
    }

    pub fn with(mut self, id: FieldId, value: impl Into<FieldValue>) -> Self {
        self.set(id, value);
        self
    }

    pub fn set(&mut self, id: FieldId, value: impl Into<FieldValue>) {
        self.values.insert(id, value.into());
    }

    pub fn get(&self, id: FieldId) -> Option<&FieldValue> {
        self.values.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &FieldValue)> {
        self.values.iter().map(|(id, value)| (*id, value))
    }
}

impl From<&DisclosedData> for DisclosureFields {
    fn from(record: &DisclosedData) -> Self {
        let mut fields = DisclosureFields::new()
            .with(FieldId::IssuingCountry, record.issuing_country.as_str())
            .with(FieldId::Nationality, record.nationality.as_str())
            .with(FieldId::DocumentType, record.document_type.as_str())
            .with(FieldId::DocumentNumber, record.document_number.as_str())
            .with(FieldId::Name, record.name.as_str())
            .with(FieldId::Gender, record.gender.as_str());
        if let Some(date) = record.date_of_expiry {
            fields.set(FieldId::DateOfExpiry, date);
        }
        if let Some(date) = record.date_of_birth {
            fields.set(FieldId::DateOfBirth, date);
        }
        fields
    }
}
