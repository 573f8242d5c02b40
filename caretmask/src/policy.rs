//! Format policies for live input masks.
//!
//! A policy is a pure value describing one masking behavior: which characters
//! survive into the raw value, how many of them, and where separators go when
//! the raw value is rendered. Policies hold no runtime state and are safely
//! shared across any number of fields.

/// Raw index the expiry slash is inserted after.
const DATE_SPLIT_INDEX: usize = 2;

/// Maximum digits accepted by [`MaskPolicy::SplitDate`] (MMYY).
const DATE_MAX_DIGITS: usize = 4;

/// Identifier bodies group in threes, thousands-style.
const IDENTIFIER_GROUP: usize = 3;

/// Digit grouping parameters for [`MaskPolicy::GroupedDigits`].
///
/// The defaults describe a 16-digit payment card grouped in fours. Group size
/// and digit cap are adjustable so longer PANs (19 digits) keep working; the
/// boundary math never hard-codes either number.
///
/// Use [`GroupConfig::card`] or [`GroupConfig::new`] to create instances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupConfig {
    /// Digits per group. Never zero.
    group_size: usize,
    /// Raw digits retained before normalization truncates.
    max_digits: usize,
}

impl GroupConfig {
    /// Constructs a configuration with an explicit group size and digit cap.
    ///
    /// A `group_size` of zero is treated as one.
    #[must_use]
    pub fn new(group_size: usize, max_digits: usize) -> Self {
        Self {
            group_size: group_size.max(1),
            max_digits,
        }
    }

    /// Standard payment-card grouping: four groups of four, 16 digits.
    #[must_use]
    pub const fn card() -> Self {
        Self {
            group_size: 4,
            max_digits: 16,
        }
    }

    /// Uses a specific group size.
    #[must_use]
    pub fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size.max(1);
        self
    }

    /// Uses a specific digit cap.
    #[must_use]
    pub fn with_max_digits(mut self, max_digits: usize) -> Self {
        self.max_digits = max_digits;
        self
    }

    /// Digits per rendered group.
    #[must_use]
    pub const fn group_size(&self) -> usize {
        self.group_size
    }

    /// Maximum raw digits retained by normalization.
    #[must_use]
    pub const fn max_digits(&self) -> usize {
        self.max_digits
    }
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self::card()
    }
}

/// Where a cursor sitting exactly on a group boundary lands after a reformat.
///
/// Grouped digits and the identifier append separators the user "types
/// through", so the caret belongs after them; the expiry slash belongs to the
/// digits that follow it, so the caret stays before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SeparatorAffinity {
    /// Caret stays before the separator.
    Before,
    /// Caret moves past the separator.
    After,
}

/// One masking behavior: accepted alphabet, length cap, separator placement.
///
/// The three variants cover the storefront's masked fields:
///
/// - [`MaskPolicy::GroupedDigits`]: payment card numbers (`4111 1111 1111 1111`)
/// - [`MaskPolicy::SplitDate`]: card expiry dates (`12/25`)
/// - [`MaskPolicy::CheckedIdentifier`]: national-ID style identifiers with a
///   checksum character (`12.345.678-5`)
///
/// Policy selection is static per field; there is no runtime switching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MaskPolicy {
    /// Digits rendered in fixed-size groups separated by spaces.
    GroupedDigits(GroupConfig),
    /// Up to four digits split by a slash after the second (MM/YY).
    SplitDate,
    /// Digit body grouped in threes from the right with dots, plus an optional
    /// hyphen and a single check character (digit or `K`).
    CheckedIdentifier,
}

impl MaskPolicy {
    /// Policy for a payment card number field.
    #[must_use]
    pub const fn card_number() -> Self {
        Self::GroupedDigits(GroupConfig::card())
    }

    /// Policy for a card expiry field.
    #[must_use]
    pub const fn expiry_date() -> Self {
        Self::SplitDate
    }

    /// Policy for a checked-identifier field.
    #[must_use]
    pub const fn identifier() -> Self {
        Self::CheckedIdentifier
    }

    /// Whether `ch` belongs to this policy's raw alphabet.
    ///
    /// This is a pure alphabet test. Positional rules (a single hyphen, a
    /// single trailing check character) are enforced by normalization, not
    /// here. The same predicate strips separators out of rendered text: no
    /// separator is ever part of an alphabet.
    #[must_use]
    pub fn accepts_char(&self, ch: char) -> bool {
        match self {
            Self::GroupedDigits(_) | Self::SplitDate => ch.is_ascii_digit(),
            Self::CheckedIdentifier => ch.is_ascii_digit() || ch == '-' || ch == 'K' || ch == 'k',
        }
    }

    /// Maximum number of raw digits, or `None` when unbounded.
    ///
    /// The identifier body has no practical cap; the hyphen and check
    /// character are bounded by normalization (one each) rather than by a
    /// digit count.
    #[must_use]
    pub fn max_raw_digits(&self) -> Option<usize> {
        match self {
            Self::GroupedDigits(config) => Some(config.max_digits()),
            Self::SplitDate => Some(DATE_MAX_DIGITS),
            Self::CheckedIdentifier => None,
        }
    }

    /// Normalizes arbitrary text and renders it through this policy.
    ///
    /// Convenience for callers that only need the display string (stored
    /// values on review screens, the `Masked` derive). Live fields go through
    /// [`MaskedField::apply`](crate::MaskedField::apply) instead to get the
    /// remapped cursor as well.
    #[must_use]
    pub fn format(&self, text: &str) -> String {
        let raw = crate::mask::RawValue::normalize(self, text);
        crate::mask::render(self, &raw)
    }

    /// Separator character inserted at group boundaries.
    pub(crate) fn separator(&self) -> char {
        match self {
            Self::GroupedDigits(_) => ' ',
            Self::SplitDate => '/',
            Self::CheckedIdentifier => '.',
        }
    }

    /// Caret behavior at a boundary shared by all of this policy's separators.
    pub(crate) fn affinity(&self) -> SeparatorAffinity {
        match self {
            Self::SplitDate => SeparatorAffinity::Before,
            Self::GroupedDigits(_) | Self::CheckedIdentifier => SeparatorAffinity::After,
        }
    }

    /// Raw indices after which a separator is inserted, ascending.
    ///
    /// `digit_count` is the length of the digit run being grouped: the whole
    /// raw value for grouped digits and dates, the body alone for the
    /// identifier (its hyphen placement is a rendering concern, handled by the
    /// layout walk).
    pub(crate) fn group_boundaries(&self, digit_count: usize) -> Vec<usize> {
        match self {
            Self::GroupedDigits(config) => {
                let group = config.group_size();
                (1..)
                    .map(|n| n * group)
                    .take_while(|&boundary| boundary < digit_count)
                    .collect()
            }
            Self::SplitDate => {
                if digit_count > DATE_SPLIT_INDEX {
                    vec![DATE_SPLIT_INDEX]
                } else {
                    Vec::new()
                }
            }
            Self::CheckedIdentifier => {
                // Anchored to the right: walk back in threes, then flip to
                // ascending order.
                let mut boundaries = Vec::new();
                let mut boundary = digit_count;
                while boundary > IDENTIFIER_GROUP {
                    boundary -= IDENTIFIER_GROUP;
                    boundaries.push(boundary);
                }
                boundaries.reverse();
                boundaries
            }
        }
    }
}
