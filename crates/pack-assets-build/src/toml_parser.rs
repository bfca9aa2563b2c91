//! TOML manifest parser for assets.toml.

use serde::Deserialize;
use std::path::Path;

/// Access level applied to every generated declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    /// `pub` items (default)
    #[default]
    Public,
    /// `pub(crate)` items
    Package,
}

impl Access {
    /// Token to splice into the macro invocation prefix.
    pub fn token(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Package => "package",
        }
    }
}

/// Parsed assets manifest.
#[derive(Debug, Clone)]
pub struct AssetsConfig {
    /// Access level for all generated declarations
    pub access: Access,
    /// Dotted color asset paths, sorted
    colors: Vec<String>,
    /// Dotted image asset paths, sorted
    images: Vec<String>,
}

/// Raw TOML structure.
#[derive(Debug, Deserialize)]
struct RawAssetsConfig {
    /// Optional access level: "public" (default) or "package"
    access: Option<String>,
    /// Color asset section
    colors: Option<RawPaths>,
    /// Image asset section
    images: Option<RawPaths>,
}

#[derive(Debug, Deserialize)]
struct RawPaths {
    /// List of dot-separated paths
    paths: Vec<String>,
}

impl AssetsConfig {
    /// Parse from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AssetsConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            AssetsConfigError::Io(format!("Failed to read {}: {}", path.as_ref().display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, AssetsConfigError> {
        let raw: RawAssetsConfig =
            toml::from_str(content).map_err(|e| AssetsConfigError::Parse(e.to_string()))?;

        let access = match raw.access.as_deref() {
            None | Some("public") => Access::Public,
            Some("package") => Access::Package,
            Some(other) => {
                return Err(AssetsConfigError::Validation(format!(
                    "Invalid access value '{}': expected 'public' or 'package'",
                    other
                )));
            }
        };

        let colors = Self::validate_paths(raw.colors.map(|p| p.paths).unwrap_or_default())?;
        let images = Self::validate_paths(raw.images.map(|p| p.paths).unwrap_or_default())?;

        Ok(Self {
            access,
            colors,
            images,
        })
    }

    /// Color paths, sorted.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Image paths, sorted.
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Total number of declared paths.
    pub fn len(&self) -> usize {
        self.colors.len() + self.images.len()
    }

    /// Check if no paths are declared.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.images.is_empty()
    }

    /// Validate every path and return them sorted.
    ///
    /// Each segment must be a valid Rust identifier; the macros would reject
    /// anything else anyway, but failing here gives a manifest-level message
    /// instead of a compile error inside generated code.
    fn validate_paths(paths: Vec<String>) -> Result<Vec<String>, AssetsConfigError> {
        for path in &paths {
            if path.is_empty() {
                return Err(AssetsConfigError::Validation("Empty path not allowed".into()));
            }
            if path.starts_with('.') || path.ends_with('.') {
                return Err(AssetsConfigError::Validation(format!(
                    "Invalid path '{}': cannot start or end with '.'",
                    path
                )));
            }
            if path.contains("..") {
                return Err(AssetsConfigError::Validation(format!(
                    "Invalid path '{}': contains '..'",
                    path
                )));
            }

            for seg in path.split('.') {
                let mut chars = seg.chars();
                if let Some(first) = chars.next() {
                    if !first.is_alphabetic() && first != '_' {
                        return Err(AssetsConfigError::Validation(format!(
                            "Invalid path '{}': segment '{}' must start with letter or underscore",
                            path, seg
                        )));
                    }
                }
                for c in chars {
                    if !c.is_alphanumeric() && c != '_' {
                        return Err(AssetsConfigError::Validation(format!(
                            "Invalid path '{}': segment '{}' contains invalid character '{}'",
                            path, seg, c
                        )));
                    }
                }
            }
        }

        // Sort for deterministic, diff-stable output
        let mut paths = paths;
        paths.sort();
        Ok(paths)
    }
}

/// Errors during manifest parsing.
#[derive(Debug)]
pub enum AssetsConfigError {
    /// IO error
    Io(String),
    /// TOML parse error
    Parse(String),
    /// Validation error
    Validation(String),
}

impl std::fmt::Display for AssetsConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for AssetsConfigError {}
