//! Personal-data category enumeration

use serde::{Deserialize, Serialize};

/// Closed enumeration of the regulated personal-data categories detected
/// by the built-in rules. UK-centric by design: the suite this library
/// serves handles HMRC and UK banking identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PiiCategory {
    /// National Insurance number (two-letter prefix, six digits, suffix letter)
    NiNumber,
    /// Employer PAYE reference (`nnn/Xnnnnnn`)
    PayeReference,
    /// Email address
    Email,
    /// UK phone number
    Phone,
    /// UK postcode
    Postcode,
    /// Payment card number (13-19 digits, optionally grouped)
    CardNumber,
    /// UK sort code (three 2-digit groups)
    SortCode,
    /// UK bank account number (8 digits)
    BankAccount,
    /// Date of birth (d/m/y or y/m/d with `/`, `-` or `.` separators)
    DateOfBirth,
    /// IPv4 address
    IpAddress,
    /// Unique Taxpayer Reference (10 digits)
    Utr,
    /// GB VAT registration number
    VatNumber,
    /// Bearer/access token
    AccessToken,
    /// Generic `key=value`-shaped secret
    SecretToken,
}

impl PiiCategory {
    /// Human-readable label for audit output and tests
    pub fn label(&self) -> &'static str {
        match self {
            Self::NiNumber => "NI_NUMBER",
            Self::PayeReference => "PAYE_REFERENCE",
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::Postcode => "POSTCODE",
            Self::CardNumber => "CARD_NUMBER",
            Self::SortCode => "SORT_CODE",
            Self::BankAccount => "BANK_ACCOUNT",
            Self::DateOfBirth => "DATE_OF_BIRTH",
            Self::IpAddress => "IP_ADDRESS",
            Self::Utr => "UTR",
            Self::VatNumber => "VAT_NUMBER",
            Self::AccessToken => "ACCESS_TOKEN",
            Self::SecretToken => "SECRET_TOKEN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_unique() {
        let all = [
            PiiCategory::NiNumber,
            PiiCategory::PayeReference,
            PiiCategory::Email,
            PiiCategory::Phone,
            PiiCategory::Postcode,
            PiiCategory::CardNumber,
            PiiCategory::SortCode,
            PiiCategory::BankAccount,
            PiiCategory::DateOfBirth,
            PiiCategory::IpAddress,
            PiiCategory::Utr,
            PiiCategory::VatNumber,
            PiiCategory::AccessToken,
            PiiCategory::SecretToken,
        ];
        let mut labels: Vec<&str> = all.iter().map(|c| c.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), all.len());
    }

    #[test]
    fn test_serde_screaming_snake_case() {
        let json = serde_json::to_string(&PiiCategory::NiNumber).unwrap();
        assert_eq!(json, "\"NI_NUMBER\"");
    }
}
