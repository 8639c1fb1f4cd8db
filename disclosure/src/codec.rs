use chrono::NaiveDate;
use inputs::PublicInputs;
use mrzpack::encoder::{EncodableTo, Encoder};

use crate::date::{ReferenceYear, parse_date};
use crate::error::Error;
use crate::layout::{FieldId, Layout};
use crate::raw::RawDisclosedData;
use crate::record::DisclosedData;
use crate::text::strip_filler;
use crate::value::{DisclosureFields, OversizePolicy, fit};

/// Converts between public inputs, raw records and typed records.
///
/// A codec is bound to one layout, one reference year for resolving
/// two-digit years, and one policy for oversized values. It holds no other
/// state and can be shared freely between threads.
///
/// ```
/// use disclosure::{Codec, DisclosureFields, FieldId, ReferenceYear};
///
/// let codec = Codec::new(ReferenceYear::new(2025));
/// let raw = codec
///     .encode(&DisclosureFields::new().with(FieldId::Nationality, "USA"))
///     .unwrap();
/// assert_eq!(69, raw.as_bytes().len());
///
/// let data = codec.decode_raw(&raw).unwrap();
/// assert_eq!("USA", data.nationality);
/// assert_eq!(None, data.date_of_birth);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    layout: &'static Layout,
    reference_year: ReferenceYear,
    policy: OversizePolicy,
}

impl Codec {
    /// A codec for the v1 layout that rejects oversized values.
    pub fn new(reference_year: ReferenceYear) -> Self {
        Codec {
            layout: Layout::v1(),
            reference_year,
            policy: OversizePolicy::default(),
        }
    }

    pub fn with_layout(mut self, layout: &'static Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_policy(mut self, policy: OversizePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn layout(&self) -> &'static Layout {
        self.layout
    }

    pub fn reference_year(&self) -> ReferenceYear {
        self.reference_year
    }

    pub fn policy(&self) -> OversizePolicy {
        self.policy
    }

    /// Decodes the disclosed fields out of a proof's public inputs.
    pub fn decode(&self, inputs: &PublicInputs) -> Result<DisclosedData, Error> {
        let raw = RawDisclosedData::from_public_inputs(self.layout, inputs)?;
        self.decode_raw(&raw)
    }

    pub fn decode_raw(&self, raw: &RawDisclosedData) -> Result<DisclosedData, Error> {
        let text = |id: FieldId| -> Result<String, Error> {
            let bytes = raw.field(id)?;
            let text = std::str::from_utf8(bytes).map_err(|_| Error::InvalidText { field: id })?;
            Ok(strip_filler(text))
        };
        let date = |id: FieldId| -> Result<Option<NaiveDate>, Error> {
            parse_date(&text(id)?, self.reference_year).map_err(|e| Error::Field {
                field: id,
                source: Box::new(e),
            })
        };

        let data = DisclosedData {
            issuing_country: text(FieldId::IssuingCountry)?,
            nationality: text(FieldId::Nationality)?,
            document_type: text(FieldId::DocumentType)?,
            document_number: text(FieldId::DocumentNumber)?,
            date_of_expiry: date(FieldId::DateOfExpiry)?,
            date_of_birth: date(FieldId::DateOfBirth)?,
            name: text(FieldId::Name)?,
            gender: text(FieldId::Gender)?,
        };
        tracing::debug!(
            layout = %raw.layout().version(),
            reference_year = self.reference_year.year(),
            "decoded disclosed data"
        );
        Ok(data)
    }

    /// Lays the values out in a raw record. Fields without a value are
    /// left as null bytes.
    pub fn encode(&self, fields: &DisclosureFields) -> Result<RawDisclosedData, Error> {
        encode_fields(self.layout, self.policy, fields)
    }

    pub fn encode_record(&self, record: &DisclosedData) -> Result<RawDisclosedData, Error> {
        self.encode(&DisclosureFields::from(record))
    }

    /// Encodes the values and writes them into `inputs` at the layout offset.
    pub fn encode_into(
        &self,
        fields: &DisclosureFields,
        inputs: &mut PublicInputs,
    ) -> Result<(), Error> {
        self.encode(fields)?.splice_into(inputs)
    }
}

fn encode_fields(
    layout: &'static Layout,
    policy: OversizePolicy,
    fields: &DisclosureFields,
) -> Result<RawDisclosedData, Error> {
    let mut raw = RawDisclosedData::empty(layout);
    for (id, value) in fields.iter() {
        let slot = raw.field_mut(id)?;
        let bytes = fit(id, &value.to_bytes(), slot.len(), policy)?;
        slot.copy_from_slice(&bytes);
    }
    tracing::debug!(
        layout = %layout.version(),
        fields = fields.iter().count(),
        "encoded disclosed data"
    );
    Ok(raw)
}

impl EncodableTo<DisclosedData> for RawDisclosedData {}

impl Encoder<DisclosedData, RawDisclosedData> for DisclosedData {
    type Error = Error;

    /// Encodes with the v1 layout, rejecting oversized values. Encoding does
    /// not depend on a reference year.
    fn encode(&self) -> Result<RawDisclosedData, Self::Error> {
        encode_fields(Layout::v1(), OversizePolicy::Reject, &DisclosureFields::from(self))
    }
}

#[cfg(test)]
mod tests {
    use inputs::PublicInput;
    use rstest::rstest;

    use super::*;
    use crate::value::FieldValue;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn codec() -> Codec {
        Codec::new(ReferenceYear::new(2025))
    }

    fn jane_doe_fields() -> DisclosureFields {
        DisclosureFields::new()
            .with(FieldId::IssuingCountry, "USA")
            .with(FieldId::Nationality, "USA")
            .with(FieldId::DocumentType, "P<")
            .with(FieldId::DocumentNumber, "123456789")
            .with(FieldId::DateOfExpiry, ymd(2030, 5, 1))
            .with(FieldId::DateOfBirth, ymd(1990, 5, 1))
            .with(FieldId::Name, format!("DOE<<JANE{}", "<".repeat(30)))
            .with(FieldId::Gender, "F")
    }

    /// Public inputs as a prover would emit them: three leading inputs, the
    /// 90-entry window, then a trailing input.
    fn proof_inputs(raw: &RawDisclosedData) -> PublicInputs {
        let mut entries = vec![PublicInput::from("0x2a"); 94];
        for entry in entries.iter_mut().skip(3).take(90) {
            *entry = PublicInput::from_byte(0);
        }
        let mut inputs = PublicInputs::new(entries);
        raw.splice_into(&mut inputs).unwrap();
        inputs
    }

    #[test]
    fn test_end_to_end() {
        let raw = codec().encode(&jane_doe_fields()).unwrap();
        assert_eq!(69, raw.as_bytes().len());
        assert_eq!(b"USAUSAP<123456789300501900501DOE<<JANE", &raw.as_bytes()[..38]);

        let data = codec().decode(&proof_inputs(&raw)).unwrap();
        assert_eq!(
            DisclosedData {
                issuing_country: "USA".to_string(),
                nationality: "USA".to_string(),
                document_type: "P".to_string(),
                document_number: "123456789".to_string(),
                date_of_expiry: Some(ymd(2030, 5, 1)),
                date_of_birth: Some(ymd(1990, 5, 1)),
                name: "DOE  JANE".to_string(),
                gender: "F".to_string(),
            },
            data
        );
        assert_eq!("DOE", data.surname());
        assert_eq!("JANE", data.given_names());
    }

    #[test]
    fn test_record_round_trip() {
        let record = DisclosedData {
            issuing_country: "D".to_string(),
            nationality: "NLD".to_string(),
            document_type: "ID".to_string(),
            document_number: "SPECI2014".to_string(),
            date_of_expiry: Some(ymd(2031, 8, 2)),
            date_of_birth: Some(ymd(1965, 3, 10)),
            name: "DE BRUIJN  WILLEKE LISELOTTE".to_string(),
            gender: "F".to_string(),
        };
        let raw = codec().encode_record(&record).unwrap();
        assert_eq!(record, codec().decode_raw(&raw).unwrap());

        let raw_from_trait: RawDisclosedData = record.encode().unwrap();
        assert_eq!(raw, raw_from_trait);
    }

    #[test]
    fn test_name_with_internal_filler() {
        let fields =
            DisclosureFields::new().with(FieldId::Name, "SMITH<<JOHN<<<<<<<<<<<<<<<<<<<<<<<<<<<<");
        let raw = codec().encode(&fields).unwrap();
        assert_eq!("SMITH  JOHN", codec().decode_raw(&raw).unwrap().name);
    }

    #[rstest(expiry, birth, expected_expiry, expected_birth,
        case("300501", "900501", ymd(2030, 5, 1), ymd(1990, 5, 1)),
        case("350101", "360101", ymd(2035, 1, 1), ymd(1936, 1, 1)),
        case("260101", "400101", ymd(2026, 1, 1), ymd(1940, 1, 1)),
        case("000101", "991231", ymd(2000, 1, 1), ymd(1999, 12, 31)),
    )]
    fn test_decode_dates(
        expiry: &str,
        birth: &str,
        expected_expiry: NaiveDate,
        expected_birth: NaiveDate,
    ) {
        let fields = DisclosureFields::new()
            .with(FieldId::DateOfExpiry, expiry)
            .with(FieldId::DateOfBirth, birth);
        let data = codec().decode_raw(&codec().encode(&fields).unwrap()).unwrap();
        assert_eq!(Some(expected_expiry), data.date_of_expiry);
        assert_eq!(Some(expected_birth), data.date_of_birth);
    }

    #[test]
    fn test_decode_depends_on_reference_year() {
        let fields = DisclosureFields::new().with(FieldId::DateOfBirth, "300101");
        let raw = codec().encode(&fields).unwrap();
        let in_2025 = Codec::new(ReferenceYear::new(2025)).decode_raw(&raw).unwrap();
        let in_2015 = Codec::new(ReferenceYear::new(2015)).decode_raw(&raw).unwrap();
        assert_eq!(Some(ymd(2030, 1, 1)), in_2025.date_of_birth);
        assert_eq!(Some(ymd(1930, 1, 1)), in_2015.date_of_birth);
    }

    #[test]
    fn test_decode_chevron_padded_date_field() {
        let fields = DisclosureFields::new().with(FieldId::DateOfExpiry, "<<<<<<");
        let data = codec().decode_raw(&codec().encode(&fields).unwrap()).unwrap();
        assert_eq!(None, data.date_of_expiry);
    }

    #[rstest(text, case("30AB01"), case("3005"), case("301301"), case("30<501"))]
    fn test_decode_invalid_date_reports_field(text: &str) {
        let fields = DisclosureFields::new().with(FieldId::DateOfBirth, text);
        let err = codec().decode_raw(&codec().encode(&fields).unwrap()).unwrap_err();
        assert!(matches!(err, Error::Field { field: FieldId::DateOfBirth, .. }), "{err:?}");
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let fields = DisclosureFields::new().with(FieldId::Name, vec![0xff, 0xfe]);
        let err = codec().decode_raw(&codec().encode(&fields).unwrap()).unwrap_err();
        assert!(matches!(err, Error::InvalidText { field: FieldId::Name }));
    }

    #[test]
    fn test_decode_needs_93_inputs() {
        let raw = codec().encode(&jane_doe_fields()).unwrap();
        let mut bytes = vec![0u8; 3];
        bytes.extend_from_slice(raw.as_bytes());
        bytes.resize(93, 0);

        assert!(codec().decode(&PublicInputs::from_bytes(&bytes)).is_ok());
        let err = codec().decode(&PublicInputs::from_bytes(&bytes[..92])).unwrap_err();
        assert!(matches!(err, Error::PublicInputs(_)));
    }

    #[rstest(policy, ok,
        case(OversizePolicy::Reject, false),
        case(OversizePolicy::Truncate, true),
    )]
    fn test_oversize_policy(policy: OversizePolicy, ok: bool) {
        let fields = DisclosureFields::new().with(FieldId::IssuingCountry, "USAX");
        let result = codec().with_policy(policy).encode(&fields);
        assert_eq!(ok, result.is_ok());
        match result {
            Ok(raw) => assert_eq!(b"USA", raw.field(FieldId::IssuingCountry).unwrap()),
            Err(err) => assert!(matches!(
                err,
                Error::FieldTooLong { field: FieldId::IssuingCountry, width: 3, actual: 4 }
            )),
        }
    }

    #[rstest(fields,
        case(DisclosureFields::new()),
        case(jane_doe_fields()),
        case(DisclosureFields::new().with(FieldId::Name, FieldValue::Bytes(vec![b'A'; 39]))),
        case(DisclosureFields::new().with(FieldId::Gender, "")),
    )]
    fn test_encode_is_fixed_width(fields: DisclosureFields) {
        assert_eq!(69, codec().encode(&fields).unwrap().as_bytes().len());
    }

    #[test]
    fn test_encode_pads_with_nulls() {
        let raw = codec()
            .encode(&DisclosureFields::new().with(FieldId::DocumentType, "P"))
            .unwrap();
        assert_eq!(&[b'P', 0], raw.field(FieldId::DocumentType).unwrap());
    }

    #[test]
    fn test_encode_into_public_inputs() {
        let mut inputs = PublicInputs::from_bytes(&[0x11; 100]);
        codec().encode_into(&jane_doe_fields(), &mut inputs).unwrap();
        let data = codec().decode(&inputs).unwrap();
        assert_eq!("123456789", data.document_number);
        let bytes: Vec<u8> =
            mrzpack::decoder::Decoder::<PublicInputs, Vec<u8>>::decode(&inputs).unwrap();
        assert_eq!(&[0x11; 3], &bytes[..3]);
        assert_eq!(&[0x11; 28], &bytes[72..]);
    }

    #[test]
    fn test_codec_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Codec>();
        assert_send_sync::<DisclosedData>();
        assert_send_sync::<RawDisclosedData>();
    }
}
