//! Resource handle types referenced by generated bindings.
//!
//! The macros expand every dotted path into a `const` of one of these types;
//! the handle only carries the full catalog name. Resolving that name against
//! an actual asset store is deliberately left to the embedding application.

use core::fmt;

/// Category of a named asset.
///
/// Selects which handle type the macros construct; it has no effect on
/// parsing or on the shape of the generated namespaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A named color asset.
    Color,
    /// A named image asset.
    Image,
}

impl ResourceKind {
    /// Lowercase tag, e.g. for diagnostics or serialized manifests.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle to a named color asset.
///
/// Produced by [`color_resources!`](crate::color_resources); holds the full
/// dot-separated catalog name (`"Vegetable.carrot"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorResource {
    name: &'static str,
}

impl ColorResource {
    /// Construct a handle for the given catalog name.
    pub const fn named(name: &'static str) -> Self {
        Self { name }
    }

    /// Full dot-separated catalog name.
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Terminal segment of the catalog name.
    pub fn leaf(self) -> &'static str {
        match self.name.rsplit('.').next() {
            Some(leaf) => leaf,
            None => self.name,
        }
    }

    /// Kind tag for this handle.
    pub const fn kind(self) -> ResourceKind {
        ResourceKind::Color
    }
}

impl fmt::Display for ColorResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Handle to a named image asset.
///
/// Produced by [`image_resources!`](crate::image_resources); identical to
/// [`ColorResource`] apart from the kind tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageResource {
    name: &'static str,
}

impl ImageResource {
    /// Construct a handle for the given catalog name.
    pub const fn named(name: &'static str) -> Self {
        Self { name }
    }

    /// Full dot-separated catalog name.
    pub const fn name(self) -> &'static str {
        self.name
    }

    /// Terminal segment of the catalog name.
    pub fn leaf(self) -> &'static str {
        match self.name.rsplit('.').next() {
            Some(leaf) => leaf,
            None => self.name,
        }
    }

    /// Kind tag for this handle.
    pub const fn kind(self) -> ResourceKind {
        ResourceKind::Image
    }
}

impl fmt::Display for ImageResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
