//! Derive macro implementation used by `measure-core`.
//!
//! `measure-derive` is an implementation detail of this workspace. The `Quantity` derive expands in terms of
//! `crate::Quantity`, `crate::Units` and the restriction types at the crate root, so it is intended to be used by
//! `measure-core` (or by crates that expose an identical crate-root API). Downstream crates implement
//! `measure_core::Quantity` by hand.
//!
//! # Generated impls
//!
//! For a quantity marker type `MyQuantity`, the derive implements `crate::Quantity for MyQuantity`.
//!
//! # Attributes
//!
//! The derive reads a required `#[quantity(...)]` attribute:
//!
//! - `name = "current"`: built-in display name; the name key becomes `quantity.<name>`
//! - `family = Family::DIMENSIONLESS.current(1)`: const expression for the dimensional family
//! - `canonical = AMPERES`: const expression for the canonical (SI) units
//! - `units = UNITS` (optional): const expression for every unit of the quantity, empty when omitted
//! - `restriction = NonNegative` (optional): restriction policy type as written at the use site, `Unrestricted` when
//!   omitted

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token, Type,
};

/// Derive `crate::Quantity` from a `#[quantity(...)]` attribute.
///
/// The attribute must provide `name`, `family` and `canonical`; `units` and `restriction` are optional.
///
/// This macro is intended for use by `measure-core`.
#[proc_macro_derive(Quantity, attributes(quantity))]
pub fn derive_quantity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_quantity_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_quantity_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "#[derive(Quantity)] does not support generic quantity types",
        ));
    }

    let attr = parse_quantity_attribute(&input.attrs, name)?;

    let display_name = &attr.name;
    let name_key = LitStr::new(&format!("quantity.{}", attr.name.value()), attr.name.span());
    let family = &attr.family;
    let canonical = &attr.canonical;
    let restriction = match &attr.restriction {
        Some(ty) => quote! { #ty },
        None => quote! { crate::Unrestricted },
    };
    let units = attr.units.as_ref().map(|units| {
        quote! { const UNITS: &'static [crate::Units<Self>] = #units; }
    });

    let expanded = quote! {
        impl crate::Quantity for #name {
            const NAME: &'static str = #display_name;
            const NAME_KEY: &'static str = #name_key;
            const FAMILY: crate::Family = #family;
            const CANONICAL: crate::Units<Self> = #canonical;
            #units
            type Restriction = #restriction;
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[quantity(...)]` attribute.
struct QuantityAttribute {
    name: LitStr,
    family: Expr,
    canonical: Expr,
    units: Option<Expr>,
    restriction: Option<Type>,
}

/// Raw key/value pairs; required keys are checked once the target ident is known.
struct RawQuantityAttribute {
    name: Option<LitStr>,
    family: Option<Expr>,
    canonical: Option<Expr>,
    units: Option<Expr>,
    restriction: Option<Type>,
}

impl Parse for RawQuantityAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut raw = RawQuantityAttribute {
            name: None,
            family: None,
            canonical: None,
            units: None,
            restriction: None,
        };

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => raw.name = Some(input.parse()?),
                "family" => raw.family = Some(input.parse()?),
                "canonical" => raw.canonical = Some(input.parse()?),
                "units" => raw.units = Some(input.parse()?),
                "restriction" => raw.restriction = Some(input.parse()?),
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(raw)
    }
}

fn parse_quantity_attribute(attrs: &[Attribute], target: &Ident) -> syn::Result<QuantityAttribute> {
    let attr = attrs
        .iter()
        .find(|a| a.path().is_ident("quantity"))
        .ok_or_else(|| {
            syn::Error::new(
                target.span(),
                "missing #[quantity(name = \"...\", family = ..., canonical = ...)] attribute",
            )
        })?;

    let raw: RawQuantityAttribute = attr.parse_args()?;
    let missing = |field: &str| {
        syn::Error::new_spanned(attr, format!("missing `{}` in #[quantity(...)]", field))
    };

    Ok(QuantityAttribute {
        name: raw.name.ok_or_else(|| missing("name"))?,
        family: raw.family.ok_or_else(|| missing("family"))?,
        canonical: raw.canonical.ok_or_else(|| missing("canonical"))?,
        units: raw.units,
        restriction: raw.restriction,
    })
}
