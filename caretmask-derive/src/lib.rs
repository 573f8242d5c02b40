//! Derive macro for `caretmask`.
//!
//! This crate generates the rendering code behind `#[derive(Masked)]`. It:
//! - reads `#[masked(...)]` field attributes
//! - emits a `MaskedRecord` implementation routing each annotated field
//!   through `MaskedValue::render_masked`
//!
//! It does **not** define policies or formatting rules. Those live in the main
//! `caretmask` crate and are applied at runtime.

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
    clippy::get_unwrap,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::redundant_pub_crate
)]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, parse_quote, spanned::Spanned, Data, DeriveInput, Fields, Result};

mod record;
use record::parse_masked_fields;

/// Derives `caretmask::MaskedRecord` for structs with named fields.
///
/// # Field Attributes
///
/// - **No annotation**: The field is not a masked input and is ignored.
///
/// - `#[masked(card_number)]` / `#[masked(expiry_date)]` /
///   `#[masked(identifier)]`: Renders the field through the named policy in
///   `rendered_fields()`. Policy selection is static: it is part of the type,
///   never switched at runtime.
///
/// Annotated fields must implement `caretmask::MaskedValue` (`String` and
/// `Option<String>` do; `None` renders as the empty string).
///
/// Enums, unions, and tuple structs are rejected at compile time.
///
/// # Generated Impl
///
/// `MaskedRecord::rendered_fields()` returns one `RenderedField` per
/// annotated field, in declaration order, each holding the field name and the
/// value rendered through its policy. Unannotated fields do not appear.
#[proc_macro_derive(Masked, attributes(masked))]
pub fn derive_masked(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the caretmask crate root.
///
/// Handles crate renaming (e.g., `my_mask = { package = "caretmask", ... }`)
/// and internal usage (when the derive is used inside caretmask itself).
fn crate_root() -> TokenStream {
    match crate_name("caretmask") {
        Ok(FoundCrate::Itself) => quote! { crate },
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Err(_) => quote! { ::caretmask },
    }
}

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        ..
    } = input;

    let root = crate_root();

    let fields = match &data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => parse_masked_fields(fields)?,
            Fields::Unnamed(fields) => {
                return Err(syn::Error::new(
                    fields.span(),
                    "`Masked` requires named fields; tuple structs are not supported",
                ));
            }
            Fields::Unit => Vec::new(),
        },
        Data::Enum(data) => {
            return Err(syn::Error::new(
                data.enum_token.span(),
                "`Masked` cannot be derived for enums",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(
                data.union_token.span(),
                "`Masked` cannot be derived for unions",
            ));
        }
    };

    // Bound every annotated field type so generic form structs work and
    // misuse on non-string fields points at MaskedValue's guidance.
    let mut generics = generics;
    {
        let where_clause = generics.make_where_clause();
        for field in &fields {
            let ty = &field.ty;
            where_clause
                .predicates
                .push(parse_quote!(#ty: #root::MaskedValue));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let entries = fields.iter().map(|field| {
        let name = field.ident.to_string();
        let member = &field.ident;
        let policy = field.policy.expr(&root);
        quote! {
            #root::RenderedField {
                name: #name,
                display: #root::MaskedValue::render_masked(&self.#member, &#policy),
            }
        }
    });

    Ok(quote! {
        impl #impl_generics #root::MaskedRecord for #ident #ty_generics #where_clause {
            fn rendered_fields(&self) -> ::std::vec::Vec<#root::RenderedField> {
                ::std::vec![ #(#entries),* ]
            }
        }
    })
}
