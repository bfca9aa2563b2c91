//! # Nested Resource Declarations (pack-assets)
//!
//! Turns a flat list of dotted asset names into nested, namespaced bindings
//! at compile time. Shared prefixes become grouping modules; terminal
//! segments become `const` resource handles.
//!
//! ## Design
//!
//! ```ignore
//! use pack_assets::color_resources;
//!
//! color_resources! {
//!     Vegetable.carrot,
//!     Vegetable.orange,
//!     carrotFill,
//! }
//!
//! // Expands to:
//! pub const carrotFill: ColorResource = ColorResource::named("carrotFill");
//! pub mod Vegetable {
//!     pub const carrot: ColorResource = ColorResource::named("Vegetable.carrot");
//!     pub const orange: ColorResource = ColorResource::named("Vegetable.orange");
//! }
//! ```
//!
//! Declarations are sorted at every nesting level, so the expansion is a pure
//! function of the input *set*: reordering the invocation never changes the
//! generated code.
//!
//! ## Access levels
//!
//! One access level per invocation, applied to every generated item:
//!
//! ```ignore
//! color_resources! { package: Vegetable.carrot }   // pub(crate) items
//! color_resources! { public: Vegetable.carrot }    // pub items (the default)
//! ```
//!
//! The macros never check that a name exists in any asset catalog; they are a
//! purely syntactic transformation. Mapping a handle's name to real asset
//! data is the embedder's concern (see [`ColorResource`] / [`ImageResource`]).

pub mod resource;

pub use resource::{ColorResource, ImageResource, ResourceKind};

pub use pack_assets_macro::{color_resources, image_resources};
