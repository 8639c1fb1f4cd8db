use chrono::NaiveDate;
use clap::Args;
use disclosure::{Codec, DiscloseMask, DisclosureFields, FieldId, OversizePolicy, ReferenceYear};
use inputs::{ProofDocument, PublicInputs};
use mrzpack::decoder::Decoder;
use mrzpack::encoder::Encoder;

use crate::error::Result;
use crate::utils::{format_hex_dump, layout, read_text};

#[derive(Args)]
pub(crate) struct Config {
    /// Issuing country (3-letter code)
    #[arg(long)]
    issuing_country: Option<String>,

    /// Nationality (3-letter code)
    #[arg(long)]
    nationality: Option<String>,

    /// Document type, e.g. `P<`
    #[arg(long)]
    document_type: Option<String>,

    #[arg(long)]
    document_number: Option<String>,

    /// Date of expiry (YYYY-MM-DD)
    #[arg(long)]
    date_of_expiry: Option<NaiveDate>,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    date_of_birth: Option<NaiveDate>,

    /// Name in MRZ form, e.g. `DOE<<JANE`
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    gender: Option<String>,

    /// Truncate values longer than their field instead of failing
    #[arg(long)]
    truncate: bool,

    /// Disclose only these fields (comma separated). The others are zeroed
    #[arg(long, value_delimiter = ',')]
    disclose: Vec<FieldId>,

    /// Proof JSON file to splice the record into. The updated document is
    /// printed
    #[arg(long)]
    splice: Option<String>,

    /// Output as hexadecimal dump instead of public-input entries
    #[arg(long, conflicts_with = "splice")]
    hex: bool,

    /// Public-input layout version
    #[arg(long, default_value_t = 1)]
    layout_version: u8,
}

impl Config {
    fn fields(&self) -> DisclosureFields {
        let mut fields = DisclosureFields::new();
        let texts = [
            (FieldId::IssuingCountry, &self.issuing_country),
            (FieldId::Nationality, &self.nationality),
            (FieldId::DocumentType, &self.document_type),
            (FieldId::DocumentNumber, &self.document_number),
            (FieldId::Name, &self.name),
            (FieldId::Gender, &self.gender),
        ];
        for (id, value) in texts {
            if let Some(value) = value {
                fields.set(id, value.as_str());
            }
        }
        let dates = [
            (FieldId::DateOfExpiry, self.date_of_expiry),
            (FieldId::DateOfBirth, self.date_of_birth),
        ];
        for (id, value) in dates {
            if let Some(date) = value {
                fields.set(id, date);
            }
        }
        fields
    }

    fn policy(&self) -> OversizePolicy {
        if self.truncate {
            OversizePolicy::Truncate
        } else {
            OversizePolicy::Reject
        }
    }
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let layout = layout(config.layout_version)?;

    // Encoding does not resolve two-digit years.
    let codec = Codec::new(ReferenceYear::current())
        .with_layout(layout)
        .with_policy(config.policy());
    let mut raw = codec.encode(&config.fields())?;

    if !config.disclose.is_empty() {
        let mask = DiscloseMask::for_fields(layout, &config.disclose)?;
        raw = mask.apply(&raw)?;
        tracing::debug!(fields = ?mask.disclosed_fields(), "applied disclose mask");
    }

    if let Some(path) = config.splice.as_deref() {
        let contents = read_text(Some(path))?;
        let mut document: ProofDocument = contents.decode()?;
        raw.splice_into(document.public_inputs_mut())?;
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else if config.hex {
        print!("{}", format_hex_dump(raw.as_bytes()));
    } else {
        let entries: PublicInputs = raw.encode()?;
        println!("{}", serde_json::to_string_pretty(&entries)?);
    }

    Ok(())
}
