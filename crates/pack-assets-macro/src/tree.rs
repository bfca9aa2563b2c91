//! Namespace tree construction.
//!
//! Folds the parsed paths into one tree whose internal nodes are namespace
//! segments and whose leaves are terminal resource names. Paths sharing a
//! prefix merge into a single chain of nodes.

use std::collections::BTreeMap;

use syn::Ident;

use crate::parse::ResourcePath;

/// One node of the namespace tree.
///
/// `children` is keyed by segment name; `BTreeMap` iteration order is the
/// lexicographic order the emitter requires. `leaves` keeps declaration
/// order, the emitter sorts before rendering.
#[derive(Default)]
pub struct NamespaceNode {
    pub children: BTreeMap<String, NamespaceNode>,
    pub leaves: Vec<Ident>,
    /// Segment ident as first written by the user; None for the root.
    segment: Option<Ident>,
}

impl NamespaceNode {
    fn with_segment(segment: Ident) -> Self {
        Self {
            segment: Some(segment),
            ..Self::default()
        }
    }

    /// The ident this node was first declared with, span included.
    pub fn segment(&self) -> Option<&Ident> {
        self.segment.as_ref()
    }

    /// Fold `paths` into a single tree rooted at the returned node.
    ///
    /// Each node is reachable from the root by exactly one segment sequence;
    /// repeated segments reuse the node created on first reference (keeping
    /// the first occurrence's ident). Duplicate leaves in one scope are kept,
    /// not rejected — the host compile rejects the resulting duplicate
    /// bindings if they matter.
    pub fn build(paths: &[ResourcePath]) -> Self {
        let mut root = Self::default();
        for path in paths {
            let mut node = &mut root;
            for segment in path.namespace_segments() {
                node = node
                    .children
                    .entry(segment.to_string())
                    .or_insert_with(|| Self::with_segment(segment.clone()));
            }
            node.leaves.push(path.leaf().clone());
        }
        root
    }

    /// Total number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
            + self
                .children
                .values()
                .map(NamespaceNode::leaf_count)
                .sum::<usize>()
    }
}
