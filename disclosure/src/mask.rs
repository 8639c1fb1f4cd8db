//! Selective disclosure.
//!
//! A prover reveals only some fields. The disclose circuit takes a 0/1 mask
//! over the MRZ and zeroes every character whose entry is 0, so undisclosed
//! fields reach the verifier as null bytes and decode as empty.
//!
//! The same selection is used on both sides: [`DiscloseMask::circuit_input`]
//! builds the MRZ mask for the prover, and [`DiscloseMask::apply`] zeroes the
//! undisclosed fields of an already encoded record.

use std::collections::BTreeSet;

use crate::error::Error;
use crate::layout::{FieldId, Layout};
use crate::mrz::{MRZ_INPUT_LEN, MrzFormat};
use crate::raw::RawDisclosedData;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscloseMask {
    layout: &'static Layout,
    fields: BTreeSet<FieldId>,
}

impl DiscloseMask {
    /// Discloses nothing.
    pub fn none(layout: &'static Layout) -> Self {
        DiscloseMask {
            layout,
            fields: BTreeSet::new(),
        }
    }

    /// Discloses every field of the layout.
    pub fn all(layout: &'static Layout) -> Self {
        DiscloseMask {
            layout,
            fields: layout.fields().iter().map(|spec| spec.id).collect(),
        }
    }

    pub fn for_fields(layout: &'static Layout, fields: &[FieldId]) -> Result<Self, Error> {
        let mut mask = DiscloseMask::none(layout);
        for field in fields {
            mask.disclose(*field)?;
        }
        Ok(mask)
    }

    pub fn disclose(&mut self, field: FieldId) -> Result<(), Error> {
        self.layout.field_range(field)?;
        self.fields.insert(field);
        Ok(())
    }

    pub fn is_disclosed(&self, field: FieldId) -> bool {
        self.fields.contains(&field)
    }

    pub fn disclosed_fields(&self) -> Vec<FieldId> {
        self.fields.iter().copied().collect()
    }

    /// The mask as circuit input: one 0 or 1 per MRZ character, padded to
    /// [`MRZ_INPUT_LEN`] entries.
    pub fn circuit_input(&self, format: MrzFormat) -> Vec<u8> {
        let mut mask = vec![0u8; MRZ_INPUT_LEN];
        for field in &self.fields {
            mask[format.field_range(*field)].fill(1);
        }
        mask
    }

    /// Zeroes every field of `raw` that the mask does not disclose.
    pub fn apply(&self, raw: &RawDisclosedData) -> Result<RawDisclosedData, Error> {
        if raw.layout() != self.layout {
            return Err(Error::LayoutMismatch {
                expected: self.layout.version(),
                actual: raw.layout().version(),
            });
        }
        let mut masked = raw.clone();
        for spec in self.layout.fields() {
            if !self.is_disclosed(spec.id) {
                masked.field_mut(spec.id)?.fill(0);
            }
        }
        Ok(masked)
    }
}
