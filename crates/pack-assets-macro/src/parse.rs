//! Input normalization and dotted-path parsing.
//!
//! Every accepted invocation shape reduces to the same two logical inputs,
//! an access level and an ordered list of dotted paths:
//!
//! ```ignore
//! color_resources! { Vegetable.carrot, carrotFill }            // default access
//! color_resources! { package: Vegetable.carrot, carrotFill }   // explicit access
//! color_resources!([Vegetable.carrot, carrotFill])             // list literal
//! color_resources!(package: [Vegetable.carrot, carrotFill])
//! ```
//!
//! Anything outside these shapes is a hard compile error.

use syn::parse::{Parse, ParseStream};
use syn::{Ident, Result, Token, bracketed, token};

/// Visibility applied uniformly to every declaration of one invocation.
///
/// There is no per-path or per-namespace override; the token given at the
/// top of the invocation is threaded into every generated item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AccessLevel {
    /// `pub(crate)` — visible inside the defining crate only.
    Package,
    /// `pub` — visible to downstream crates. The default.
    #[default]
    Public,
}

impl AccessLevel {
    fn from_ident(ident: &Ident) -> Result<Self> {
        if ident == "package" {
            Ok(Self::Package)
        } else if ident == "public" {
            Ok(Self::Public)
        } else {
            Err(syn::Error::new(
                ident.span(),
                format!("cannot parse access level `{ident}`: expected `public` or `package`"),
            ))
        }
    }
}

/// One parsed dotted identifier chain, segments in declared order.
///
/// Always non-empty; `Ident` parsing guarantees no segment is empty.
#[derive(Clone, Debug)]
pub struct ResourcePath {
    segments: Vec<Ident>,
}

impl ResourcePath {
    /// All segments but the last.
    pub fn namespace_segments(&self) -> &[Ident] {
        &self.segments[..self.segments.len() - 1]
    }

    /// Terminal segment, the name of the binding to generate.
    pub fn leaf(&self) -> &Ident {
        // Invariant: segments is non-empty (enforced by Parse).
        &self.segments[self.segments.len() - 1]
    }

    /// Full dot-joined path, e.g. `"Vegetable.carrot"`.
    pub fn dotted(&self) -> String {
        self.segments
            .iter()
            .map(Ident::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl Parse for ResourcePath {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut segments = Vec::new();
        loop {
            if !input.peek(Ident) {
                return Err(input.error("cannot find resource: expected a dotted identifier chain"));
            }
            segments.push(input.parse::<Ident>()?);
            if input.peek(Token![.]) {
                input.parse::<Token![.]>()?;
            } else {
                break;
            }
        }
        Ok(Self { segments })
    }
}

/// Fully normalized macro input: one access level plus the declared paths.
#[derive(Debug)]
pub struct ResourcesInput {
    pub access: AccessLevel,
    pub paths: Vec<ResourcePath>,
}

impl Parse for ResourcesInput {
    fn parse(input: ParseStream) -> Result<Self> {
        // A leading `ident :` is the access-level position. Dotted paths can
        // never contain `:`, so this lookahead is unambiguous.
        let access = if input.peek(Ident) && input.peek2(Token![:]) {
            let ident: Ident = input.parse()?;
            input.parse::<Token![:]>()?;
            AccessLevel::from_ident(&ident)?
        } else {
            AccessLevel::default()
        };

        let paths = if input.peek(token::Bracket) {
            let content;
            bracketed!(content in input);
            let paths = parse_path_list(&content)?;
            if !input.is_empty() {
                return Err(input.error("unexpected tokens after resource list"));
            }
            paths
        } else {
            parse_path_list(input)?
        };

        Ok(Self { access, paths })
    }
}

/// Parse a comma-separated path list, consuming the whole stream.
///
/// Empty input is a valid empty list. A trailing comma is allowed. Any
/// element that is not a dotted identifier chain aborts the whole parse
/// with a diagnostic spanned at the offending tokens.
fn parse_path_list(input: ParseStream) -> Result<Vec<ResourcePath>> {
    let mut paths = Vec::new();
    while !input.is_empty() {
        paths.push(input.parse::<ResourcePath>()?);
        if input.is_empty() {
            break;
        }
        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        } else {
            return Err(input.error("cannot find resource: expected `,` between resource paths"));
        }
    }
    Ok(paths)
}
