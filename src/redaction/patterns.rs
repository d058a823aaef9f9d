//! Ordered detection-rule registry
//!
//! Rules are held in an explicit `Vec` so the execution order is enforced
//! by construction, never by map iteration order. The order matters:
//! several categories are syntactic subsets of others (an 8-digit bank
//! account is a substring shape of a 16-digit card number), so the more
//! specific and longer formats run first and consume their digits before
//! a broader numeric rule can partially match a fragment.

use crate::domain::errors::CloakError;
use crate::domain::result::Result;
use crate::redaction::category::PiiCategory;
use anyhow::Context;
use std::ops::Range;
use std::sync::Arc;

/// National Insurance number: two-letter prefix, six digits, suffix letter.
const NI_NUMBER: &str = r"(?i)\b[A-Z]{2}\d{6}[A-D]\b";

/// Employer PAYE reference: three-digit office code, `/`, letters, digits.
const PAYE_REFERENCE: &str = r"\b\d{3}/[A-Z]{1,2}\d{3,8}\b";

/// Email address. The local-part class includes `*` so already-masked
/// addresses match as a whole and re-mask to themselves instead of being
/// chewed into a shorter local part.
const EMAIL: &str = r"\b[A-Za-z0-9._%+*-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// UK phone number: `+44` or leading `0`, then 8-11 further digits with
/// optional space/dash grouping. The minimum of nine total digits keeps
/// 8-digit account numbers with a leading zero out of reach.
const PHONE: &str = r"(?:\+44\s?|\b0)\d{2,4}[\s-]?\d{3,4}[\s-]?\d{3,4}\b";

/// UK postcode, outward and inward parts separated by whitespace.
const POSTCODE: &str = r"(?i)\b[A-Z]{1,2}\d[A-Z\d]?\s+\d[A-Z]{2}\b";

/// Payment card number: either 13-19 contiguous digits or four-digit
/// groups. Group separators are required in the grouped alternative so a
/// sort code sitting next to an account number is not swallowed as one
/// giant card.
const CARD_NUMBER: &str = r"\b(?:\d{4}[ -]\d{4}[ -]\d{4}[ -]\d{1,7}|\d{13,19})\b";

/// UK sort code: three 2-digit groups.
const SORT_CODE: &str = r"\b\d{2}[- ]\d{2}[- ]\d{2}\b";

/// UK bank account number: exactly eight digits.
const BANK_ACCOUNT: &str = r"\b\d{8}\b";

/// Date of birth: `d/m/y` or `y/m/d` with `/`, `-` or `.` separators.
/// The lookbehind and lookahead stop the dotted form from matching
/// interior fragments of an IPv4 address, which runs later in the order.
const DATE_OF_BIRTH: &str =
    r"(?<!\d\.)\b(?:\d{4}[/.\-]\d{1,2}[/.\-]\d{1,2}|\d{1,2}[/.\-]\d{1,2}[/.\-]\d{2,4})\b(?!\.\d)";

/// IPv4 address.
const IP_ADDRESS: &str = r"\b(?:\d{1,3}\.){3}\d{1,3}\b";

/// Unique Taxpayer Reference: exactly ten digits.
const UTR: &str = r"\b\d{10}\b";

/// GB VAT registration number.
const VAT_NUMBER: &str = r"(?i)\bGB\s?\d{9}(?:\s?\d{3})?\b";

/// Bearer-shaped access token.
const ACCESS_TOKEN: &str = r"\bBearer\s+[A-Za-z0-9\-._~+/]+=*";

/// Generic `key=value`-shaped secret. Keywords are matched lower-case
/// only: the replacement literal `[REDACTED_TOKEN]` is upper-case, so a
/// second pass over masked output finds nothing.
const SECRET_TOKEN: &str =
    r"\b[A-Za-z0-9_]*(?:token|key|secret|password|credential)[A-Za-z0-9_]*\s*[=:]\s*[^\s,;]+";

/// Compiled matcher for one rule
///
/// Most rules compile to a plain [`regex::Regex`]. Rules that need
/// lookaround (only date-of-birth today) use [`fancy_regex::Regex`]; both
/// engines sit behind [`DetectionRule::spans`].
#[derive(Debug)]
enum RuleMatcher {
    Plain(regex::Regex),
    Lookaround(fancy_regex::Regex),
}

/// A named detection rule: one category, one compiled matcher
#[derive(Debug)]
pub struct DetectionRule {
    category: PiiCategory,
    matcher: RuleMatcher,
}

impl DetectionRule {
    fn plain(category: PiiCategory, pattern: &str) -> anyhow::Result<Self> {
        let regex = regex::Regex::new(pattern)
            .with_context(|| format!("Invalid regex for {}: {pattern}", category.label()))?;
        Ok(Self {
            category,
            matcher: RuleMatcher::Plain(regex),
        })
    }

    fn lookaround(category: PiiCategory, pattern: &str) -> anyhow::Result<Self> {
        let regex = fancy_regex::Regex::new(pattern)
            .with_context(|| format!("Invalid regex for {}: {pattern}", category.label()))?;
        Ok(Self {
            category,
            matcher: RuleMatcher::Lookaround(regex),
        })
    }

    /// Category this rule detects
    pub fn category(&self) -> PiiCategory {
        self.category
    }

    /// All non-overlapping match spans in `text`, in order.
    ///
    /// Never fails: a runtime error from the backtracking engine makes the
    /// affected match a no-op rather than surfacing to the caller.
    pub fn spans(&self, text: &str) -> Vec<Range<usize>> {
        match &self.matcher {
            RuleMatcher::Plain(re) => re.find_iter(text).map(|m| m.range()).collect(),
            RuleMatcher::Lookaround(re) => re
                .find_iter(text)
                .flatten()
                .map(|m| m.range())
                .collect(),
        }
    }
}

/// Ordered, immutable registry of the built-in detection rules
///
/// Constructed once and shared read-only; safe for concurrent readers.
#[derive(Debug)]
pub struct PatternRegistry {
    rules: Vec<DetectionRule>,
}

impl PatternRegistry {
    /// Compile the built-in rule set in its fixed execution order.
    ///
    /// # Errors
    ///
    /// Returns [`CloakError::Pattern`] if any built-in pattern fails to
    /// compile, which indicates a programming mistake rather than a
    /// runtime condition.
    pub fn built_in() -> Result<Self> {
        let rules = Self::compile().map_err(pattern_error)?;
        Ok(Self { rules })
    }

    fn compile() -> anyhow::Result<Vec<DetectionRule>> {
        Ok(vec![
            DetectionRule::plain(PiiCategory::NiNumber, NI_NUMBER)?,
            DetectionRule::plain(PiiCategory::PayeReference, PAYE_REFERENCE)?,
            DetectionRule::plain(PiiCategory::Email, EMAIL)?,
            DetectionRule::plain(PiiCategory::Phone, PHONE)?,
            DetectionRule::plain(PiiCategory::Postcode, POSTCODE)?,
            DetectionRule::plain(PiiCategory::CardNumber, CARD_NUMBER)?,
            DetectionRule::plain(PiiCategory::SortCode, SORT_CODE)?,
            DetectionRule::plain(PiiCategory::BankAccount, BANK_ACCOUNT)?,
            DetectionRule::lookaround(PiiCategory::DateOfBirth, DATE_OF_BIRTH)?,
            DetectionRule::plain(PiiCategory::IpAddress, IP_ADDRESS)?,
            DetectionRule::plain(PiiCategory::Utr, UTR)?,
            DetectionRule::plain(PiiCategory::VatNumber, VAT_NUMBER)?,
            DetectionRule::plain(PiiCategory::AccessToken, ACCESS_TOKEN)?,
            DetectionRule::plain(PiiCategory::SecretToken, SECRET_TOKEN)?,
        ])
    }

    /// Rules in execution order
    pub fn rules(&self) -> &[DetectionRule] {
        &self.rules
    }

    /// Process-wide shared registry used by the ad-hoc helpers and by
    /// loggers that don't carry their own.
    pub fn shared() -> Arc<PatternRegistry> {
        lazy_static::lazy_static! {
            static ref SHARED: Arc<PatternRegistry> = Arc::new(
                PatternRegistry::built_in().expect("built-in detection rules must compile"),
            );
        }
        Arc::clone(&SHARED)
    }
}

/// Flatten an internal compile failure chain into the domain error.
fn pattern_error(err: anyhow::Error) -> CloakError {
    CloakError::Pattern(format!("{err:#}"))
}
