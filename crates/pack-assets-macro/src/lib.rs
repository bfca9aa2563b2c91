//! Procedural macros generating nested resource declarations.
//!
//! `color_resources!` and `image_resources!` take a flat list of dotted
//! asset paths and expand to grouping modules plus `const` handle bindings
//! mirroring the shared-prefix structure:
//!
//! ```ignore
//! pack_assets::color_resources! {
//!     Vegetable.carrot,
//!     Vegetable.orange,
//!     carrotFill,
//! }
//! ```
//!
//! expands to
//!
//! ```ignore
//! pub const carrotFill: ::pack_assets::ColorResource =
//!     ::pack_assets::ColorResource::named("carrotFill");
//! pub mod Vegetable {
//!     pub const carrot: ::pack_assets::ColorResource =
//!         ::pack_assets::ColorResource::named("Vegetable.carrot");
//!     pub const orange: ::pack_assets::ColorResource =
//!         ::pack_assets::ColorResource::named("Vegetable.orange");
//! }
//! ```
//!
//! The pipeline is parse ([`parse`]) → tree ([`tree`]) → emit ([`emit`]),
//! pure and per-invocation: nothing is shared across expansions, and a
//! malformed input aborts the whole invocation with one diagnostic instead
//! of producing partial output.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::Ident;

use proc_macro_crate::{FoundCrate, crate_name};

mod emit;
mod parse;
mod tree;

use emit::ResourceKind;
use parse::ResourcesInput;
use tree::NamespaceNode;

/// Resolve the path of the runtime crate as seen from the expansion site.
fn runtime_crate_path() -> TokenStream2 {
    match crate_name("pack-assets") {
        Ok(FoundCrate::Itself) => quote!(::pack_assets),
        Ok(FoundCrate::Name(name)) => {
            let ident = Ident::new(&name, Span::call_site());
            quote!(::#ident)
        }
        Err(_) => quote!(::pack_assets),
    }
}

fn expand(kind: ResourceKind, input: TokenStream2, krate: &TokenStream2) -> syn::Result<TokenStream2> {
    let input: ResourcesInput = syn::parse2(input)?;
    let tree = NamespaceNode::build(&input.paths);
    Ok(emit::emit(&tree, input.access, kind, krate))
}

fn expand_or_error(kind: ResourceKind, input: TokenStream) -> TokenStream {
    let krate = runtime_crate_path();
    match expand(kind, input.into(), &krate) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Declare nested color resource bindings from dotted paths.
///
/// Accepted shapes (all equivalent):
///
/// ```ignore
/// color_resources! { Vegetable.carrot, carrotFill }            // public (default)
/// color_resources! { package: Vegetable.carrot, carrotFill }   // pub(crate)
/// color_resources!(package: [Vegetable.carrot, carrotFill]);   // list literal
/// ```
#[proc_macro]
pub fn color_resources(input: TokenStream) -> TokenStream {
    expand_or_error(ResourceKind::Color, input)
}

/// Declare nested image resource bindings from dotted paths.
///
/// Same shapes as [`color_resources!`], constructing `ImageResource` handles.
#[proc_macro]
pub fn image_resources(input: TokenStream) -> TokenStream {
    expand_or_error(ResourceKind::Image, input)
}
