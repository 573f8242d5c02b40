//! Masking machinery: raw values, layout, and the field composition root.
//!
//! This module ties the pieces together:
//!
//! - **`raw`**: Acceptance layer - what the user typed (`RawValue`,
//!   `IdentifierParts`)
//! - **`layout`**: Derivation layer - how it renders and where the caret maps
//!   (`DisplayLayout`, `OffsetMap`)
//! - **`field`**: Application layer - the per-field entrypoint (`MaskedField`)
//!
//! Policies live in `crate::policy`.

mod field;
mod layout;
mod raw;

pub use field::{EditOutcome, MaskedField, MaskedRecord, MaskedValue, RenderedField};
pub use layout::{render, DisplayLayout, OffsetMap};
pub use raw::{IdentifierParts, RawValue};
