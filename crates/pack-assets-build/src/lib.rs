//! Build-time utilities for pack-assets.
//!
//! Reads an `assets.toml` manifest and writes a Rust source file containing
//! `color_resources!` / `image_resources!` invocations, so a crate can keep
//! its asset names in one declarative file instead of macro call sites.
//!
//! # Usage in build.rs
//!
//! ```ignore
//! // build.rs
//! fn main() {
//!     pack_assets_build::generate("assets.toml", "src/generated_assets.rs")
//!         .expect("Failed to generate asset declarations");
//! }
//! ```
//!
//! # Manifest format
//!
//! ```toml
//! # Optional, defaults to "public"; "package" generates pub(crate) items.
//! access = "package"
//!
//! [colors]
//! paths = ["Vegetable.carrot", "Vegetable.orange", "carrotFill"]
//!
//! [images]
//! paths = ["Icons.save", "Icons.load"]
//! ```
//!
//! Paths are validated and sorted before rendering, so regenerating from an
//! unchanged manifest always produces byte-identical output.

mod toml_parser;

pub use toml_parser::{Access, AssetsConfig, AssetsConfigError};

use std::path::Path;

/// Main entry point for build.rs integration.
///
/// Reads `assets.toml` and writes the generated declarations to
/// `output_path`, emitting `cargo:rerun-if-changed` for the manifest.
///
/// # Errors
///
/// Returns an error if the manifest cannot be read, parsed, or validated,
/// or if the output file cannot be written.
pub fn generate(
    config_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<(), GenerateError> {
    let config_path = config_path.as_ref();

    let config = AssetsConfig::from_file(config_path)?;
    let code = render(&config);
    std::fs::write(output_path.as_ref(), code)?;

    println!("cargo:rerun-if-changed={}", config_path.display());

    Ok(())
}

/// Render the macro invocations for a parsed manifest.
pub fn render(config: &AssetsConfig) -> String {
    let mut out = String::new();
    out.push_str("// Generated by pack-assets-build. Do not edit.\n");

    render_section(&mut out, "color_resources", config.access, config.colors());
    render_section(&mut out, "image_resources", config.access, config.images());

    out
}

fn render_section(out: &mut String, macro_name: &str, access: Access, paths: &[String]) {
    if paths.is_empty() {
        return;
    }

    out.push('\n');
    out.push_str(&format!("pack_assets::{}! {{\n", macro_name));
    out.push_str(&format!("    {}:\n", access.token()));
    for path in paths {
        out.push_str(&format!("    {},\n", path));
    }
    out.push_str("}\n");
}

/// Errors that can occur during generation.
#[derive(Debug)]
pub enum GenerateError {
    /// Failed to parse assets.toml
    ConfigError(AssetsConfigError),
    /// IO error
    Io(std::io::Error),
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigError(e) => write!(f, "Config error: {}", e),
            Self::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<AssetsConfigError> for GenerateError {
    fn from(e: AssetsConfigError) -> Self {
        Self::ConfigError(e)
    }
}

impl From<std::io::Error> for GenerateError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_skips_empty_sections() {
        let config = AssetsConfig::from_toml("[colors]\npaths = [\"a.b\"]").unwrap();
        let code = render(&config);

        assert!(code.contains("color_resources!"));
        assert!(!code.contains("image_resources!"));
    }

    #[test]
    fn render_includes_access_prefix_and_paths() {
        let toml = r#"
access = "package"

[images]
paths = ["Icons.save", "Icons.load"]
"#;
        let config = AssetsConfig::from_toml(toml).unwrap();
        let code = render(&config);

        assert!(code.contains("pack_assets::image_resources! {"));
        assert!(code.contains("    package:"));
        // Sorted manifest order
        let load = code.find("Icons.load,").unwrap();
        let save = code.find("Icons.save,").unwrap();
        assert!(load < save);
    }

    #[test]
    fn render_is_deterministic() {
        let a = AssetsConfig::from_toml("[colors]\npaths = [\"x.b\", \"x.a\"]").unwrap();
        let b = AssetsConfig::from_toml("[colors]\npaths = [\"x.a\", \"x.b\"]").unwrap();
        assert_eq!(render(&a), render(&b));
    }
}
