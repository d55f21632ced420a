//! Derive macro implementation used by `unitsafe-core`.
//!
//! `unitsafe-derive` is an implementation detail of this workspace. The `Kind` derive expands in terms of
//! `crate::Kind`, `crate::Unit` and `crate::SIDimensions`, so it is intended to be used by `unitsafe-core` (or by
//! crates that expose an identical crate-root API).
//!
//! Most users should depend on `unitsafe` instead and use the predefined kinds.
//!
//! # Generated impls
//!
//! For a kind marker type `MyKind`, the derive implements:
//!
//! - `crate::Kind for MyKind` (name, dimension vector, nature, standard unit, unit list)
//! - exactly one of `crate::RelativeKind`, `crate::RelativeKind + crate::RelativeWithAbsolute`, or
//!   `crate::AbsoluteKind`, depending on the nature attributes
//! - `core::fmt::Display for MyKind` (formats as the kind name)
//!
//! # Attributes
//!
//! The derive reads a required `#[kind(...)]` attribute:
//!
//! - `name = "Length"`: human readable kind name
//! - `dimensions = SIDimensions::LENGTH`: constant SI-dimension vector of the kind
//! - `standard = METER`: the standard (SI) unit constant of the kind
//! - `units = [METER, KILOMETER]`: every unit of the kind, the standard unit included
//! - `absolute = Position` (optional): this relative kind has the given absolute counterpart
//! - `relative = Length` (optional): this kind is absolute and the given kind is its relative counterpart

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, ExprArray, Ident, LitStr, Token, Type,
};

/// Derive `crate::Kind`, the nature traits and a `Display` impl for a kind marker type.
///
/// The derive must be paired with a `#[kind(...)]` attribute providing `name`, `dimensions`, `standard` and
/// `units`, and optionally one of `absolute` or `relative`.
///
/// This macro is intended for use by `unitsafe-core`.
#[proc_macro_derive(Kind, attributes(kind))]
pub fn derive_kind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_kind_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_kind_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let attr = parse_kind_attribute(&input.attrs, name)?;

    let kind_name = &attr.name;
    let dimensions = &attr.dimensions;
    let standard = &attr.standard;
    let units = &attr.units;

    let (nature, nature_impls) = match (&attr.absolute, &attr.relative) {
        (Some(_), Some(_)) => {
            return Err(syn::Error::new(
                name.span(),
                "a kind cannot declare both `absolute` and `relative` counterparts",
            ));
        }
        (Some(absolute), None) => (
            quote! {
                crate::KindNature::RelativeWithAbsolute {
                    absolute: <#absolute as crate::Kind>::NAME,
                }
            },
            quote! {
                impl crate::RelativeKind for #name {}

                impl crate::RelativeWithAbsolute for #name {
                    type Absolute = #absolute;
                }
            },
        ),
        (None, Some(relative)) => (
            quote! {
                crate::KindNature::Absolute {
                    relative: <#relative as crate::Kind>::NAME,
                }
            },
            quote! {
                impl crate::AbsoluteKind for #name {
                    type Relative = #relative;
                }
            },
        ),
        (None, None) => (
            quote! { crate::KindNature::Relative },
            quote! {
                impl crate::RelativeKind for #name {}
            },
        ),
    };

    let expanded = quote! {
        impl crate::Kind for #name {
            const NAME: &'static str = #kind_name;
            const DIMENSIONS: crate::SIDimensions = #dimensions;
            const NATURE: crate::KindNature = #nature;
            const STANDARD: crate::Unit<Self> = #standard;
            const UNITS: &'static [crate::Unit<Self>] = &#units;
        }

        #nature_impls

        impl ::core::fmt::Display for #name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<#name as crate::Kind>::NAME)
            }
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[kind(...)]` attribute.
struct KindAttribute {
    name: LitStr,
    dimensions: Expr,
    standard: Expr,
    units: ExprArray,
    absolute: Option<Type>,
    relative: Option<Type>,
}

impl Parse for KindAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut name: Option<LitStr> = None;
        let mut dimensions: Option<Expr> = None;
        let mut standard: Option<Expr> = None;
        let mut units: Option<ExprArray> = None;
        let mut absolute: Option<Type> = None;
        let mut relative: Option<Type> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "name" => name = Some(input.parse()?),
                "dimensions" => dimensions = Some(input.parse()?),
                "standard" => standard = Some(input.parse()?),
                "units" => units = Some(input.parse()?),
                "absolute" => absolute = Some(input.parse()?),
                "relative" => relative = Some(input.parse()?),
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let missing = |field: &str| {
            syn::Error::new(
                input.span(),
                format!("missing required attribute `{}`", field),
            )
        };

        Ok(KindAttribute {
            name: name.ok_or_else(|| missing("name"))?,
            dimensions: dimensions.ok_or_else(|| missing("dimensions"))?,
            standard: standard.ok_or_else(|| missing("standard"))?,
            units: units.ok_or_else(|| missing("units"))?,
            absolute,
            relative,
        })
    }
}

fn parse_kind_attribute(attrs: &[Attribute], name: &Ident) -> syn::Result<KindAttribute> {
    for attr in attrs {
        if attr.path().is_ident("kind") {
            return attr.parse_args::<KindAttribute>();
        }
    }

    Err(syn::Error::new(
        name.span(),
        "missing #[kind(...)] attribute",
    ))
}
