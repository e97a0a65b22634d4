//! Package metadata lookup for production version resolution.
//!
//! The resolution root may carry a package descriptor holding the release
//! version: a `Cargo.toml` with a `[package].version` field, or a
//! `package.json` with a top-level `"version"` field for polyglot trees.
//! A missing or unreadable descriptor degrades to [DEFAULT_VERSION]; only a
//! malformed version string is surfaced, and only when the caller demands a
//! parsed semantic version.

use crate::error::{EnvError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Version substituted when no package descriptor is found.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Rust package descriptor consulted first.
pub const MANIFEST_FILE: &str = "Cargo.toml";

/// Node-style package descriptor consulted as a fallback.
pub const PACKAGE_FILE: &str = "package.json";

#[derive(Debug, Deserialize)]
struct Manifest {
    package: Option<ManifestPackage>,
}

#[derive(Debug, Deserialize)]
struct ManifestPackage {
    version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PackageJson {
    version: Option<String>,
}

/// Read the package version string from the descriptor in `root`.
///
/// Tries `Cargo.toml` first, then `package.json`. Absent, unreadable, or
/// unparseable descriptors all yield [DEFAULT_VERSION]; this function never
/// fails.
///
/// # Arguments
/// * `root` - Directory holding the package descriptor
pub fn read_package_version(root: &Path) -> String {
    if let Some(version) = manifest_version(&root.join(MANIFEST_FILE)) {
        return version;
    }

    if let Some(version) = package_json_version(&root.join(PACKAGE_FILE)) {
        return version;
    }

    DEFAULT_VERSION.to_string()
}

fn manifest_version(path: &Path) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let manifest: Manifest = toml::from_str(&contents).ok()?;
    manifest.package?.version
}

fn package_json_version(path: &Path) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let pkg: PackageJson = serde_json::from_str(&contents).ok()?;
    pkg.version
}

/// Parse a package version string as a full semantic version.
///
/// Accepts the complete semver grammar, including prerelease and build
/// metadata (`1.2.3-rc.1+build.5`).
///
/// # Returns
/// * `Ok(semver::Version)` - Parsed version
/// * `Err(EnvError::Version)` - Malformed string; the error names the value
pub fn parse_semver(value: &str) -> Result<semver::Version> {
    semver::Version::parse(value).map_err(|e| {
        EnvError::version(format!("Malformed package version '{}': {}", value, e))
    })
}
