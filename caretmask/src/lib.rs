//! Cursor-stable live input masking.
//!
//! This crate separates:
//! - **Policy**: how a raw value decomposes into parts and where separators go.
//! - **Layout**: the rendered display string and the raw/display offset map.
//!
//! A host text field owns nothing but its text and caret; on every keystroke
//! it hands both to [`MaskedField::apply`] and re-sets them from the returned
//! [`EditOutcome`]. Three fixed policies cover the masked fields of the
//! storefront forms:
//!
//! - [`MaskPolicy::GroupedDigits`]: card numbers, `4111 1111 1111 1111`
//! - [`MaskPolicy::SplitDate`]: card expiry, `12/25`
//! - [`MaskPolicy::CheckedIdentifier`]: checked identifiers, `12.345.678-5`
//!
//! Key rules:
//! - Masking cannot fail. Characters outside a policy's alphabet and input
//!   past its length cap are silently dropped at the acceptance boundary,
//!   never rejected with an error. Validation ("invalid card number") belongs
//!   to the surrounding form, operating on the final raw value.
//! - Offset maps are non-decreasing and clamped, and round-trip:
//!   `display_to_raw(raw_to_display(i)) == i` for every raw index of any
//!   value whose characters render.
//! - Policies are stateless values, safely shared across fields and threads.
//!
//! What this crate does:
//! - defines the three [`MaskPolicy`] variants and their acceptance rules
//! - renders raw values and computes bidirectional caret mappings
//! - provides the [`MaskedField`] entrypoint UI collaborators drive
//!
//! What it does not do:
//! - validate values, persist anything, or perform I/O
//! - locale-aware or runtime-configurable formatting
//!
//! The `Masked` derive macro lives in `caretmask-derive` and renders annotated
//! form-struct fields through their statically chosen policies.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub use caretmask_derive::Masked;

// Module declarations
pub mod mask;
mod policy;

// Re-exports
pub use mask::{
    render, DisplayLayout, EditOutcome, IdentifierParts, MaskedField, MaskedRecord, MaskedValue,
    OffsetMap, RawValue, RenderedField,
};
pub use policy::{GroupConfig, MaskPolicy};
