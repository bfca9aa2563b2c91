//! Declaration emission.
//!
//! Walks the namespace tree depth-first and renders, per node, first the
//! sorted leaf bindings and then the sorted child namespaces. Sorting at
//! every level makes the output a pure function of the input set: permuting
//! the declared paths yields byte-identical generated code, which keeps
//! checked-in expansions diff-stable.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use crate::parse::AccessLevel;
use crate::tree::NamespaceNode;

/// Which handle type a leaf binding constructs.
///
/// Purely a formatting parameter; it never influences parsing or tree shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceKind {
    Color,
    Image,
}

impl ResourceKind {
    fn type_ident(self) -> Ident {
        let name = match self {
            Self::Color => "ColorResource",
            Self::Image => "ImageResource",
        };
        Ident::new(name, Span::call_site())
    }
}

fn visibility(access: AccessLevel) -> TokenStream {
    match access {
        AccessLevel::Package => quote!(pub(crate)),
        AccessLevel::Public => quote!(pub),
    }
}

/// Render the full expansion for `tree`.
///
/// `krate` is the path of the runtime crate the generated bindings refer to,
/// e.g. `::pack_assets`.
pub fn emit(
    tree: &NamespaceNode,
    access: AccessLevel,
    kind: ResourceKind,
    krate: &TokenStream,
) -> TokenStream {
    let decls = emit_namespace_body(tree, &[], access, kind, krate);
    quote! { #(#decls)* }
}

/// Render every declaration for `node`, reached via `path_segments`.
///
/// Leaves first (sorted by name), then one nested module per child (sorted
/// by segment name), each carrying the same access level.
fn emit_namespace_body(
    node: &NamespaceNode,
    path_segments: &[String],
    access: AccessLevel,
    kind: ResourceKind,
    krate: &TokenStream,
) -> Vec<TokenStream> {
    let vis = visibility(access);
    let ty = kind.type_ident();
    let mut decls = Vec::new();

    let mut leaves: Vec<&Ident> = node.leaves.iter().collect();
    leaves.sort_by_key(|leaf| leaf.to_string());

    for leaf in leaves {
        let mut full_path = path_segments.join(".");
        if !full_path.is_empty() {
            full_path.push('.');
        }
        full_path.push_str(&leaf.to_string());

        let path_lit = syn::LitStr::new(&full_path, leaf.span());
        decls.push(quote! {
            #[allow(non_upper_case_globals)]
            #vis const #leaf: #krate::#ty = #krate::#ty::named(#path_lit);
        });
    }

    for (name, child) in &node.children {
        let mut child_segments = path_segments.to_vec();
        child_segments.push(name.clone());
        let body = emit_namespace_body(child, &child_segments, access, kind, krate);

        // Reuse the user's ident so the module keeps its source span.
        let mod_ident = match child.segment() {
            Some(ident) => ident.clone(),
            None => Ident::new(name, Span::call_site()),
        };
        decls.push(quote! {
            #[allow(non_snake_case)]
            #vis mod #mod_ident {
                #(#body)*
            }
        });
    }

    decls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ResourcePath;

    fn expand(access: AccessLevel, kind: ResourceKind, srcs: &[&str]) -> TokenStream {
        let paths: Vec<ResourcePath> = srcs.iter().map(|s| syn::parse_str(s).unwrap()).collect();
        let tree = NamespaceNode::build(&paths);
        emit(&tree, access, kind, &quote!(::pack_assets))
    }

    #[test]
    fn single_flat_binding() {
        let out = expand(AccessLevel::Public, ResourceKind::Color, &["carrotFill"]);
        let expected = quote! {
            #[allow(non_upper_case_globals)]
            pub const carrotFill: ::pack_assets::ColorResource =
                ::pack_assets::ColorResource::named("carrotFill");
        };
        assert_eq!(out.to_string(), expected.to_string());
    }

    #[test]
    fn shared_prefix_nests_under_one_module() {
        let out = expand(
            AccessLevel::Public,
            ResourceKind::Color,
            &["Vegetable.carrot", "Vegetable.orange", "carrotFill"],
        );
        let expected = quote! {
            #[allow(non_upper_case_globals)]
            pub const carrotFill: ::pack_assets::ColorResource =
                ::pack_assets::ColorResource::named("carrotFill");
            #[allow(non_snake_case)]
            pub mod Vegetable {
                #[allow(non_upper_case_globals)]
                pub const carrot: ::pack_assets::ColorResource =
                    ::pack_assets::ColorResource::named("Vegetable.carrot");
                #[allow(non_upper_case_globals)]
                pub const orange: ::pack_assets::ColorResource =
                    ::pack_assets::ColorResource::named("Vegetable.orange");
            }
        };
        assert_eq!(out.to_string(), expected.to_string());
    }

    #[test]
    fn output_is_invariant_under_input_permutation() {
        let sorted = expand(
            AccessLevel::Public,
            ResourceKind::Image,
            &["A.x", "A.y", "B.z", "flat"],
        );
        let shuffled = expand(
            AccessLevel::Public,
            ResourceKind::Image,
            &["flat", "B.z", "A.y", "A.x"],
        );
        assert_eq!(sorted.to_string(), shuffled.to_string());
    }

    #[test]
    fn n_paths_produce_n_bindings() {
        let out = expand(
            AccessLevel::Public,
            ResourceKind::Color,
            &["A.x", "A.x", "A.y", "B.z", "flat"],
        );
        // Duplicates are counted, not deduplicated.
        assert_eq!(out.to_string().matches("const").count(), 5);
    }

    #[test]
    fn round_trip_full_paths() {
        let inputs = ["Food.Vegetable.carrot", "Food.Fruit.apple", "plain"];
        let out = expand(AccessLevel::Public, ResourceKind::Color, &inputs).to_string();
        for input in inputs {
            assert!(out.contains(&format!("\"{input}\"")), "missing {input}");
        }
    }

    #[test]
    fn package_access_propagates_everywhere() {
        let out = expand(
            AccessLevel::Package,
            ResourceKind::Color,
            &["Vegetable.carrot", "carrotFill"],
        )
        .to_string();
        assert!(out.contains("pub (crate) const"));
        assert!(out.contains("pub (crate) mod"));
        // `pub` only ever appears as part of `pub (crate)`.
        assert_eq!(out.matches("pub").count(), out.matches("pub (crate)").count());
    }

    #[test]
    fn image_kind_selects_image_constructor() {
        let out = expand(AccessLevel::Public, ResourceKind::Image, &["icon"]).to_string();
        assert!(out.contains("ImageResource :: named"));
        assert!(!out.contains("ColorResource"));
    }

    #[test]
    fn empty_tree_emits_nothing() {
        let out = expand(AccessLevel::Public, ResourceKind::Color, &[]);
        assert!(out.is_empty());
    }

    #[test]
    fn sibling_namespaces_stay_separate() {
        let out = expand(
            AccessLevel::Public,
            ResourceKind::Color,
            &["Fruit.red", "Vegetable.red"],
        )
        .to_string();
        assert!(out.contains("pub mod Fruit"));
        assert!(out.contains("pub mod Vegetable"));
        assert!(out.contains("\"Fruit.red\""));
        assert!(out.contains("\"Vegetable.red\""));
    }
}
