//! Field-level `#[masked(...)]` attribute parsing.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Attribute, Ident, Meta, Result, Type};

/// The policy named by a `#[masked(...)]` attribute.
pub(crate) enum FieldPolicy {
    CardNumber,
    ExpiryDate,
    Identifier,
}

impl FieldPolicy {
    /// Constructor expression for the policy, rooted at the caretmask crate.
    pub(crate) fn expr(&self, root: &TokenStream) -> TokenStream {
        match self {
            Self::CardNumber => quote! { #root::MaskPolicy::card_number() },
            Self::ExpiryDate => quote! { #root::MaskPolicy::expiry_date() },
            Self::Identifier => quote! { #root::MaskPolicy::identifier() },
        }
    }
}

/// One field annotated with `#[masked(...)]`.
pub(crate) struct MaskedField {
    pub(crate) ident: Ident,
    pub(crate) ty: Type,
    pub(crate) policy: FieldPolicy,
}

/// Collects the annotated fields of a named-field struct, in declaration
/// order. Unannotated fields are ignored.
pub(crate) fn parse_masked_fields(fields: &syn::FieldsNamed) -> Result<Vec<MaskedField>> {
    let mut masked = Vec::new();
    for field in &fields.named {
        let Some(policy) = parse_field_policy(&field.attrs)? else {
            continue;
        };
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new(field.span(), "named field should have an identifier"))?;
        masked.push(MaskedField {
            ident,
            ty: field.ty.clone(),
            policy,
        });
    }
    Ok(masked)
}

fn parse_field_policy(attrs: &[Attribute]) -> Result<Option<FieldPolicy>> {
    let mut found = None;
    for attr in attrs {
        if !attr.path().is_ident("masked") {
            continue;
        }
        if found.is_some() {
            return Err(syn::Error::new(
                attr.span(),
                "duplicate `#[masked]` attribute",
            ));
        }
        let Meta::List(_) = &attr.meta else {
            return Err(syn::Error::new(
                attr.span(),
                "missing policy: use `#[masked(card_number)]`, `#[masked(expiry_date)]`, \
or `#[masked(identifier)]`",
            ));
        };
        let name: Ident = attr.parse_args()?;
        let policy = match name.to_string().as_str() {
            "card_number" => FieldPolicy::CardNumber,
            "expiry_date" => FieldPolicy::ExpiryDate,
            "identifier" => FieldPolicy::Identifier,
            other => {
                return Err(syn::Error::new(
                    name.span(),
                    format!(
                        "unknown mask policy `{other}`; expected one of `card_number`, \
`expiry_date`, `identifier`"
                    ),
                ));
            }
        };
        found = Some(policy);
    }
    Ok(found)
}
