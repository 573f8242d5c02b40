//! Raw values: what the user is considered to have typed.
//!
//! Normalization is the acceptance boundary of the whole engine. Invalid
//! characters and over-length input are silently dropped here, never rejected
//! with an error; the formatter and offset mapper only ever see values that
//! already satisfy the policy's invariants.

use crate::policy::MaskPolicy;

/// The logical, unformatted character sequence behind a masked field.
///
/// Always produced by [`RawValue::normalize`], so the content is guaranteed to
/// be within the policy's alphabet and length cap (ASCII, one byte per
/// character). For [`MaskPolicy::CheckedIdentifier`] the content is canonical:
/// body digits, then the hyphen if one was typed, then the check character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawValue {
    text: String,
}

impl RawValue {
    /// The empty raw value every field starts from.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Filters `input` down to the policy's raw alphabet and caps its length.
    ///
    /// This is total: any string is accepted, anything outside the alphabet is
    /// dropped. Rendered display text normalizes back to the raw value it was
    /// rendered from, because separators are never part of an alphabet.
    #[must_use]
    pub fn normalize(policy: &MaskPolicy, input: &str) -> Self {
        match policy {
            MaskPolicy::GroupedDigits(_) | MaskPolicy::SplitDate => {
                let mut digits: String =
                    input.chars().filter(char::is_ascii_digit).collect();
                if let Some(max) = policy.max_raw_digits() {
                    // ASCII only, so byte truncation is character truncation.
                    digits.truncate(max);
                }
                Self { text: digits }
            }
            MaskPolicy::CheckedIdentifier => Self {
                text: IdentifierParts::parse(input).into_raw(),
            },
        }
    }

    /// The raw characters, in typed order.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of raw characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the user has typed nothing that survived normalization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<RawValue> for String {
    fn from(raw: RawValue) -> Self {
        raw.text
    }
}

/// Parsed components of a [`MaskPolicy::CheckedIdentifier`] raw value.
///
/// `has_hyphen` records that the user typed a hyphen; it is independent of
/// whether a check character is present. The check character is only
/// meaningful alongside a non-empty body, but it is retained here either way;
/// suppressing the degenerate rendering is the formatter's job, not the
/// parser's.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentifierParts {
    body: String,
    has_hyphen: bool,
    check_char: Option<char>,
}

impl IdentifierParts {
    /// Scans `input`, keeping digits, one hyphen, and one check character.
    ///
    /// The hyphen delimits body from check character: a digit typed after the
    /// hyphen becomes the check character, and nothing is accepted after the
    /// check character (it is trailing by construction). `K`/`k` is a check
    /// character wherever it appears first, and is uppercased on acceptance.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut parts = Self::default();
        for ch in input.chars() {
            match ch {
                '0'..='9' => {
                    if parts.check_char.is_some() {
                        continue;
                    }
                    if parts.has_hyphen {
                        parts.check_char = Some(ch);
                    } else {
                        parts.body.push(ch);
                    }
                }
                '-' => {
                    if !parts.has_hyphen && parts.check_char.is_none() {
                        parts.has_hyphen = true;
                    }
                }
                'K' | 'k' => {
                    if parts.check_char.is_none() {
                        parts.check_char = Some('K');
                    }
                }
                _ => {}
            }
        }
        parts
    }

    /// The digit run before the hyphen.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether the user typed a hyphen.
    #[must_use]
    pub const fn has_hyphen(&self) -> bool {
        self.has_hyphen
    }

    /// The check character, uppercased, if one was typed.
    #[must_use]
    pub const fn check_char(&self) -> Option<char> {
        self.check_char
    }

    /// Reassembles the canonical raw string: body, hyphen, check character.
    fn into_raw(self) -> String {
        let mut raw = self.body;
        if self.has_hyphen {
            raw.push('-');
        }
        if let Some(check) = self.check_char {
            raw.push(check);
        }
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::{IdentifierParts, RawValue};
    use crate::policy::{GroupConfig, MaskPolicy};

    #[test]
    fn card_normalization_filters_and_truncates() {
        let policy = MaskPolicy::card_number();
        let raw = RawValue::normalize(&policy, "4111 1111 1111 1111 999");
        assert_eq!(raw.as_str(), "4111111111111111");
        assert_eq!(raw.len(), 16);

        let raw = RawValue::normalize(&policy, "41x1");
        assert_eq!(raw.as_str(), "411");
    }

    #[test]
    fn custom_group_config_caps_digits() {
        let policy = MaskPolicy::GroupedDigits(GroupConfig::new(4, 19));
        let raw = RawValue::normalize(&policy, &"7".repeat(25));
        assert_eq!(raw.len(), 19);
    }

    #[test]
    fn date_normalization_keeps_at_most_four_digits() {
        let policy = MaskPolicy::expiry_date();
        assert_eq!(RawValue::normalize(&policy, "12/25").as_str(), "1225");
        assert_eq!(RawValue::normalize(&policy, "122534").as_str(), "1225");
        assert_eq!(RawValue::normalize(&policy, "ab").as_str(), "");
    }

    #[test]
    fn identifier_normalization_is_canonical() {
        let policy = MaskPolicy::identifier();
        let raw = RawValue::normalize(&policy, "12.345.678-5");
        assert_eq!(raw.as_str(), "12345678-5");
    }

    #[test]
    fn identifier_hyphen_delimits_the_check_digit() {
        let parts = IdentifierParts::parse("12345678-5");
        assert_eq!(parts.body(), "12345678");
        assert!(parts.has_hyphen());
        assert_eq!(parts.check_char(), Some('5'));

        // Digits after the check character are dropped, as is a second hyphen.
        let parts = IdentifierParts::parse("12345678-59-1");
        assert_eq!(parts.body(), "12345678");
        assert_eq!(parts.check_char(), Some('5'));
    }

    #[test]
    fn identifier_k_is_a_check_character_without_a_hyphen() {
        let parts = IdentifierParts::parse("12345678K");
        assert_eq!(parts.body(), "12345678");
        assert!(!parts.has_hyphen());
        assert_eq!(parts.check_char(), Some('K'));
    }

    #[test]
    fn identifier_lowercase_k_is_uppercased_on_acceptance() {
        let policy = MaskPolicy::identifier();
        assert_eq!(RawValue::normalize(&policy, "9876k").as_str(), "9876K");
    }

    #[test]
    fn identifier_degenerate_inputs_survive_as_raw_facts() {
        let parts = IdentifierParts::parse("-");
        assert_eq!(parts.body(), "");
        assert!(parts.has_hyphen());
        assert_eq!(parts.check_char(), None);

        let parts = IdentifierParts::parse("K");
        assert_eq!(parts.body(), "");
        assert!(!parts.has_hyphen());
        assert_eq!(parts.check_char(), Some('K'));
    }

    #[test]
    fn identifier_normalization_is_idempotent() {
        let policy = MaskPolicy::identifier();
        let once = RawValue::normalize(&policy, "1-2345xK");
        let twice = RawValue::normalize(&policy, once.as_str());
        assert_eq!(once, twice);
    }
}
