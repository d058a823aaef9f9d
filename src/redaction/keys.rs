//! Sensitive-key classification
//!
//! A context key whose name merely suggests credentials or account data
//! triggers whole-value redaction before any pattern scanning happens.
//! Key names are a stronger signal than value content: `{"password":
//! "correct horse"}` must never be partially disclosed even though the
//! value matches no pattern.

/// Substring vocabulary tested against lower-cased key names. Stored
/// lower-cased so camelCase spellings (`apiKey`, `niNumber`) fire after
/// normalization.
const SENSITIVE_KEY_VOCABULARY: &[&str] = &[
    "password",
    "secret",
    "token",
    "apikey",
    "api_key",
    "accesstoken",
    "access_token",
    "refreshtoken",
    "refresh_token",
    "credential",
    "authorization",
    "auth",
    "ninumber",
    "ni_number",
    "nationalinsurance",
    "national_insurance",
    "bankaccount",
    "bank_account",
    "sortcode",
    "sort_code",
    "cardnumber",
    "card_number",
    "cvv",
    "cvc",
    "pin",
    "ssn",
    "socialsecurity",
];

/// Whether a context key name demands whole-value redaction.
pub fn is_sensitive_key(key: &str) -> bool {
    let lowered = key.to_lowercase();
    SENSITIVE_KEY_VOCABULARY
        .iter()
        .any(|entry| lowered.contains(entry))
}
