use std::fmt::{Display, Formatter};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Separator between the primary and secondary identifier of a name once
/// `<<` has been decoded.
const NAME_SEPARATOR: &str = "  ";

/// The decoded disclosure record.
///
/// String fields hold no filler or null characters. An empty string or a
/// `None` date means the field was not disclosed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisclosedData {
    pub issuing_country: String,
    pub nationality: String,
    pub document_type: String,
    pub document_number: String,
    pub date_of_expiry: Option<NaiveDate>,
    pub date_of_birth: Option<NaiveDate>,
    pub name: String,
    pub gender: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Passport,
    IdCard,
    Other,
    Undisclosed,
}

impl DocumentKind {
    /// Classifies an MRZ document code by its first letter.
    pub fn from_code(code: &str) -> Self {
        match code.chars().next() {
            None => DocumentKind::Undisclosed,
            Some('P') => DocumentKind::Passport,
            Some('I' | 'A' | 'C') => DocumentKind::IdCard,
            Some(_) => DocumentKind::Other,
        }
    }
}

impl Display for DocumentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Passport => write!(f, "passport"),
            DocumentKind::IdCard => write!(f, "id card"),
            DocumentKind::Other => write!(f, "other"),
            DocumentKind::Undisclosed => write!(f, "not disclosed"),
        }
    }
}

impl DisclosedData {
    /// Primary identifier: the part of the name before the first `<<`.
    pub fn surname(&self) -> &str {
        match self.name.split_once(NAME_SEPARATOR) {
            Some((surname, _)) => surname.trim(),
            None => self.name.trim(),
        }
    }

    /// Secondary identifier: the part of the name after the first `<<`.
    pub fn given_names(&self) -> &str {
        match self.name.split_once(NAME_SEPARATOR) {
            Some((_, given_names)) => given_names.trim(),
            None => "",
        }
    }

    pub fn document_kind(&self) -> DocumentKind {
        DocumentKind::from_code(&self.document_type)
    }
}

fn or_undisclosed(value: &str) -> &str {
    if value.is_empty() { "(not disclosed)" } else { value }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "(not disclosed)".to_string(), |d| d.format("%Y-%m-%d").to_string())
}

impl Display for DisclosedData {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Disclosed Data:")?;
        writeln!(f, "    Issuing Country: {}", or_undisclosed(&self.issuing_country))?;
        writeln!(f, "    Nationality: {}", or_undisclosed(&self.nationality))?;
        if self.document_type.is_empty() {
            writeln!(f, "    Document Type: (not disclosed)")?;
        } else {
            writeln!(f, "    Document Type: {} ({})", self.document_type, self.document_kind())?;
        }
        writeln!(f, "    Document Number: {}", or_undisclosed(&self.document_number))?;
        writeln!(f, "    Date of Expiry: {}", format_date(self.date_of_expiry))?;
        writeln!(f, "    Date of Birth: {}", format_date(self.date_of_birth))?;
        writeln!(f, "    Name: {}", or_undisclosed(&self.name))?;
        if !self.name.is_empty() {
            writeln!(f, "        Surname: {}", self.surname())?;
            writeln!(f, "        Given Names: {}", self.given_names())?;
        }
        write!(f, "    Gender: {}", or_undisclosed(&self.gender))
    }
}
