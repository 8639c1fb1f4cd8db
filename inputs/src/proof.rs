//! Proof JSON documents.
//!
//! Two shapes are accepted: a bare array of public inputs, or a proof object
//! `{ "publicInputs": [...], "proof": ... }`. Keys other than `publicInputs`
//! are kept as-is so a document can be written back after splicing.

use mrzpack::decoder::{DecodableFrom, Decoder};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::PublicInputs;
use crate::error::Error;

const PUBLIC_INPUTS_KEY: &str = "publicInputs";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofData {
    #[serde(rename = "publicInputs")]
    pub public_inputs: PublicInputs,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProofDocument {
    Proof(ProofData),
    Bare(PublicInputs),
}

impl ProofDocument {
    pub fn public_inputs(&self) -> &PublicInputs {
        match self {
            ProofDocument::Proof(proof) => &proof.public_inputs,
            ProofDocument::Bare(inputs) => inputs,
        }
    }

    pub fn public_inputs_mut(&mut self) -> &mut PublicInputs {
        match self {
            ProofDocument::Proof(proof) => &mut proof.public_inputs,
            ProofDocument::Bare(inputs) => inputs,
        }
    }

    pub fn into_public_inputs(self) -> PublicInputs {
        match self {
            ProofDocument::Proof(proof) => proof.public_inputs,
            ProofDocument::Bare(inputs) => inputs,
        }
    }
}

fn parse_document(text: &str) -> Result<ProofDocument, Error> {
    let value: Value = serde_json::from_str(text)?;
    if value.is_array() {
        return Ok(ProofDocument::Bare(serde_json::from_value(value)?));
    }
    if value.get(PUBLIC_INPUTS_KEY).is_some() {
        return Ok(ProofDocument::Proof(serde_json::from_value(value)?));
    }
    Err(Error::MissingPublicInputs)
}

impl DecodableFrom<&str> for ProofDocument {}

impl Decoder<&str, ProofDocument> for &str {
    type Error = Error;

    fn decode(&self) -> Result<ProofDocument, Self::Error> {
        parse_document(self)
    }
}

impl DecodableFrom<String> for ProofDocument {}

impl Decoder<String, ProofDocument> for String {
    type Error = Error;

    fn decode(&self) -> Result<ProofDocument, Self::Error> {
        parse_document(self)
    }
}

impl DecodableFrom<&str> for PublicInputs {}

impl Decoder<&str, PublicInputs> for &str {
    type Error = Error;

    fn decode(&self) -> Result<PublicInputs, Self::Error> {
        parse_document(self).map(ProofDocument::into_public_inputs)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::PublicInput;

    #[rstest(input, expected_len,
        case(r#"["0x01", "0x02", 3]"#, 3),
        case(r#"{"publicInputs": ["0x01", "0x02"], "proof": "0xdeadbeef"}"#, 2),
        case(r#"{"publicInputs": []}"#, 0),
    )]
    fn test_decode_public_inputs(input: &str, expected_len: usize) {
        let inputs: PublicInputs = input.decode().unwrap();
        assert_eq!(expected_len, inputs.len());
    }

    #[rstest(input,
        case(r#"{"proof": "0x00"}"#),
        case(r#""0x01""#),
        case("42"),
    )]
    fn test_decode_missing_public_inputs(input: &str) {
        let result: Result<PublicInputs, Error> = input.decode();
        assert!(matches!(result, Err(Error::MissingPublicInputs)));
    }

    #[test]
    fn test_decode_invalid_json() {
        let result: Result<ProofDocument, Error> = "[0x01".decode();
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_document_keeps_other_keys() {
        let text =
            r#"{"publicInputs": ["0x01"], "proof": "0xdeadbeef", "vkeyHash": "0x02"}"#.to_string();
        let mut document: ProofDocument = text.decode().unwrap();
        *document.public_inputs_mut() = PublicInputs::new(vec![PublicInput::Integer(7)]);

        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(serde_json::json!([7]), value["publicInputs"]);
        assert_eq!("0xdeadbeef", value["proof"]);
        assert_eq!("0x02", value["vkeyHash"]);
    }

    #[test]
    fn test_bare_document_serializes_as_array() {
        let document: ProofDocument = r#"["0x01"]"#.decode().unwrap();
        assert!(matches!(document, ProofDocument::Bare(_)));
        assert_eq!(r#"["0x01"]"#, serde_json::to_string(&document).unwrap());
    }
}
