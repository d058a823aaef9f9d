//! Per-category masking table
//!
//! Each function produces a partially-disclosed replacement for a matched
//! span. The contract is exact: tests pin every transformation
//! bit-for-bit. Any structural assumption that does not hold for a given
//! match (no `@` in an email, no 4-digit year in a date) falls back to
//! full redaction rather than leaking.

use crate::redaction::category::PiiCategory;
use crate::redaction::{REDACTED, REDACTED_TOKEN};

/// Mask a matched span according to its category.
///
/// The masked output always contains non-digit filler characters, which is
/// what keeps already-masked text from re-triggering a later numeric rule.
pub fn mask_value(category: PiiCategory, matched: &str) -> String {
    match category {
        PiiCategory::NiNumber => keep_edges(matched, 2, 1, "****"),
        PiiCategory::PayeReference => mask_paye(matched),
        PiiCategory::Email => mask_email(matched),
        PiiCategory::Phone => keep_last_digits(matched, 4, "***"),
        PiiCategory::Postcode => mask_postcode(matched),
        PiiCategory::CardNumber => keep_last_digits(matched, 4, "****"),
        PiiCategory::SortCode => "**-**-**".to_string(),
        PiiCategory::BankAccount => keep_last_digits(matched, 4, "****"),
        PiiCategory::DateOfBirth => mask_date_of_birth(matched),
        PiiCategory::IpAddress => mask_ip(matched),
        PiiCategory::Utr | PiiCategory::VatNumber => keep_edges(matched, 3, 2, "****"),
        PiiCategory::AccessToken | PiiCategory::SecretToken => REDACTED_TOKEN.to_string(),
    }
}

/// Keep `head` leading and `tail` trailing characters, filler in between.
fn keep_edges(matched: &str, head: usize, tail: usize, filler: &str) -> String {
    let chars: Vec<char> = matched.chars().collect();
    if chars.len() <= head + tail {
        return REDACTED.to_string();
    }
    let prefix: String = chars[..head].iter().collect();
    let suffix: String = chars[chars.len() - tail..].iter().collect();
    format!("{prefix}{filler}{suffix}")
}

/// Keep the last `n` digits of the match (non-digits stripped), prefixed
/// with filler.
fn keep_last_digits(matched: &str, n: usize, filler: &str) -> String {
    let digits: Vec<char> = matched.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < n {
        return REDACTED.to_string();
    }
    let suffix: String = digits[digits.len() - n..].iter().collect();
    format!("{filler}{suffix}")
}

/// Keep everything up to and including the `/`, plus the last two
/// characters: `123/A56789` becomes `123/***89`.
fn mask_paye(matched: &str) -> String {
    match matched.find('/') {
        Some(slash) if matched.len() >= slash + 4 => {
            let prefix = &matched[..=slash];
            let suffix = &matched[matched.len() - 2..];
            format!("{prefix}***{suffix}")
        }
        _ => REDACTED.to_string(),
    }
}

/// Keep the first and last character of the local part (or redact it
/// entirely when two characters or fewer) plus the full domain.
fn mask_email(matched: &str) -> String {
    match matched.split_once('@') {
        Some((local, domain)) => {
            let chars: Vec<char> = local.chars().collect();
            if chars.len() <= 2 {
                format!("***@{domain}")
            } else {
                let first = chars[0];
                let last = chars[chars.len() - 1];
                format!("{first}***{last}@{domain}")
            }
        }
        None => REDACTED.to_string(),
    }
}

/// Keep the outward code (text before the first space): `SW1A 1AA`
/// becomes `SW1A ***`.
fn mask_postcode(matched: &str) -> String {
    match matched.split_whitespace().next() {
        Some(outward) if outward.len() < matched.len() => format!("{outward} ***"),
        _ => REDACTED.to_string(),
    }
}

/// Keep a 4-digit year when one is present: `12/04/1990` becomes
/// `1990-**-**`. Dates with 2-digit years carry no safe portion and are
/// fully redacted.
fn mask_date_of_birth(matched: &str) -> String {
    let year = matched
        .split(['/', '-', '.'])
        .find(|part| part.len() == 4 && part.chars().all(|c| c.is_ascii_digit()));

    match year {
        Some(year) => format!("{year}-**-**"),
        None => REDACTED.to_string(),
    }
}

/// Keep the first two octets: `192.168.1.100` becomes `192.168.xxx.xxx`.
fn mask_ip(matched: &str) -> String {
    let octets: Vec<&str> = matched.split('.').collect();
    if octets.len() == 4 {
        format!("{}.{}.xxx.xxx", octets[0], octets[1])
    } else {
        REDACTED.to_string()
    }
}
