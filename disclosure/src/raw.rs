use inputs::PublicInputs;
use mrzpack::decoder::{DecodableFrom, Decoder};
use mrzpack::encoder::{EncodableTo, Encoder};

use crate::error::Error;
use crate::layout::{FieldId, Layout};

/// The disclosed-data block as bytes, exactly `layout.raw_width()` long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDisclosedData {
    layout: &'static Layout,
    bytes: Vec<u8>,
}

impl RawDisclosedData {
    pub fn new(layout: &'static Layout, bytes: Vec<u8>) -> Result<Self, Error> {
        if bytes.len() != layout.raw_width() {
            return Err(Error::RawLength {
                expected: layout.raw_width(),
                actual: bytes.len(),
            });
        }
        Ok(RawDisclosedData { layout, bytes })
    }

    /// All null bytes: nothing disclosed.
    pub fn empty(layout: &'static Layout) -> Self {
        RawDisclosedData {
            layout,
            bytes: vec![0; layout.raw_width()],
        }
    }

    /// Reads the layout's window out of `inputs`.
    ///
    /// Every entry of the window must be a byte, including the ones past the
    /// raw record.
    pub fn from_public_inputs(
        layout: &'static Layout,
        inputs: &PublicInputs,
    ) -> Result<Self, Error> {
        let mut window = inputs.window(layout.input_range())?;
        window.truncate(layout.raw_width());
        RawDisclosedData::new(layout, window)
    }

    pub fn layout(&self) -> &'static Layout {
        self.layout
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn field(&self, id: FieldId) -> Result<&[u8], Error> {
        let range = self.layout.field_range(id)?;
        Ok(&self.bytes[range])
    }

    pub(crate) fn field_mut(&mut self, id: FieldId) -> Result<&mut [u8], Error> {
        let range = self.layout.field_range(id)?;
        Ok(&mut self.bytes[range])
    }

    /// Writes the record into `inputs` at the layout offset.
    pub fn splice_into(&self, inputs: &mut PublicInputs) -> Result<(), Error> {
        inputs.require_len(self.layout.min_inputs())?;
        inputs.splice(self.layout.offset(), &self.bytes)?;
        Ok(())
    }
}

impl AsRef<[u8]> for RawDisclosedData {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl DecodableFrom<PublicInputs> for RawDisclosedData {}

impl Decoder<PublicInputs, RawDisclosedData> for PublicInputs {
    type Error = Error;

    /// Reads the block with the v1 layout.
    fn decode(&self) -> Result<RawDisclosedData, Self::Error> {
        RawDisclosedData::from_public_inputs(Layout::v1(), self)
    }
}

impl EncodableTo<RawDisclosedData> for PublicInputs {}

impl Encoder<RawDisclosedData, PublicInputs> for RawDisclosedData {
    type Error = Error;

    /// One field-element entry per byte, ready to splice.
    fn encode(&self) -> Result<PublicInputs, Self::Error> {
        Ok(PublicInputs::from_bytes(&self.bytes))
    }
}
