//! The masked field: the composition root consumed by UI collaborators.
//!
//! A host text field calls [`MaskedField::apply`] on every keystroke with its
//! current text and caret. The field normalizes the text, re-renders it, and
//! returns the corrected display string together with the caret position that
//! keeps the caret anchored to the same logical character. The host must
//! re-set both atomically to avoid visible cursor jumps.

use super::layout::DisplayLayout;
use super::raw::RawValue;
use crate::policy::MaskPolicy;

/// The corrected text and caret a host field should show after an edit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditOutcome {
    /// The rendered, separator-decorated text.
    pub display: String,
    /// Caret position in display coordinates (characters).
    pub cursor: usize,
}

/// One masked input field owning its raw value.
///
/// The policy is fixed for the lifetime of the field; each UI field
/// constructs its own instance and is the only mutator. Everything here is a
/// plain synchronous computation, so a field can live on whichever thread its
/// UI events arrive on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskedField {
    policy: MaskPolicy,
    raw: RawValue,
}

impl MaskedField {
    /// An empty field using `policy`.
    #[must_use]
    pub const fn new(policy: MaskPolicy) -> Self {
        Self {
            policy,
            raw: RawValue::empty(),
        }
    }

    /// A field preloaded with a stored value (e.g. editing a saved profile).
    #[must_use]
    pub fn with_value(policy: MaskPolicy, text: &str) -> Self {
        let raw = RawValue::normalize(&policy, text);
        Self { policy, raw }
    }

    /// An empty payment card number field.
    #[must_use]
    pub const fn card_number() -> Self {
        Self::new(MaskPolicy::card_number())
    }

    /// An empty card expiry field.
    #[must_use]
    pub const fn expiry_date() -> Self {
        Self::new(MaskPolicy::expiry_date())
    }

    /// An empty checked-identifier field.
    #[must_use]
    pub const fn identifier() -> Self {
        Self::new(MaskPolicy::identifier())
    }

    /// The policy this field formats with.
    #[must_use]
    pub const fn policy(&self) -> &MaskPolicy {
        &self.policy
    }

    /// The current raw value: what the form submits.
    #[must_use]
    pub fn raw(&self) -> &str {
        self.raw.as_str()
    }

    /// The current rendered text.
    #[must_use]
    pub fn display(&self) -> String {
        super::layout::render(&self.policy, &self.raw)
    }

    /// Discards the field's value.
    pub fn clear(&mut self) {
        self.raw = RawValue::empty();
    }

    /// Accepts a host edit and returns the corrected display text and caret.
    ///
    /// `display_text` is the host field's content after the edit (raw
    /// characters mixed with whatever separators were already rendered);
    /// `display_cursor` is the host caret, in characters. The caret is
    /// recovered by counting accepted characters before it (stripping
    /// separators with the policy alphabet), then mapped through the fresh
    /// offset table, so it stays anchored to the same logical character while
    /// separators shift underneath it.
    ///
    /// Never fails: invalid characters and over-length input are dropped by
    /// normalization, and out-of-range carets clamp.
    pub fn apply(&mut self, display_text: &str, display_cursor: usize) -> EditOutcome {
        let raw = RawValue::normalize(&self.policy, display_text);
        let raw_cursor = display_text
            .chars()
            .take(display_cursor)
            .filter(|ch| self.policy.accepts_char(*ch))
            .count()
            .min(raw.len());

        let (display, offsets) = DisplayLayout::compute(&self.policy, &raw).into_parts();
        let cursor = offsets.raw_to_display(raw_cursor);
        self.raw = raw;
        EditOutcome { display, cursor }
    }
}

/// String-like field values the `Masked` derive can render.
///
/// `String` and `Option<String>` are the expected field types; a `None`
/// renders as the empty string, the same as an untouched field.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `MaskedValue`",
    label = "this field cannot be rendered through a mask policy",
    note = "`#[masked(...)]` is for string-like fields such as `String` or `Option<String>`"
)]
pub trait MaskedValue {
    /// Normalizes and renders the value through `policy`.
    #[must_use]
    fn render_masked(&self, policy: &MaskPolicy) -> String;
}

impl MaskedValue for String {
    fn render_masked(&self, policy: &MaskPolicy) -> String {
        policy.format(self)
    }
}

impl MaskedValue for &str {
    fn render_masked(&self, policy: &MaskPolicy) -> String {
        policy.format(self)
    }
}

impl MaskedValue for std::borrow::Cow<'_, str> {
    fn render_masked(&self, policy: &MaskPolicy) -> String {
        policy.format(self.as_ref())
    }
}

impl<T> MaskedValue for Option<T>
where
    T: MaskedValue,
{
    fn render_masked(&self, policy: &MaskPolicy) -> String {
        self.as_ref()
            .map(|value| value.render_masked(policy))
            .unwrap_or_default()
    }
}

/// A field rendered by [`MaskedRecord::rendered_fields`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedField {
    /// The struct field name.
    pub name: &'static str,
    /// The field's value rendered through its policy.
    pub display: String,
}

/// A form-like struct whose masked fields can be rendered for display.
///
/// Implemented by `#[derive(Masked)]`: each field annotated with
/// `#[masked(...)]` is rendered through its statically chosen policy, in
/// declaration order. Review screens use this to show stored raw values
/// (a saved card number, an identifier) with their separators restored.
pub trait MaskedRecord {
    /// Renders every masked field, in declaration order.
    fn rendered_fields(&self) -> Vec<RenderedField>;
}
