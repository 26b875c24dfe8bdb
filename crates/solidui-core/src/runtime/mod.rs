//! Package manager detection and dependency installation
//!
//! This module provides:
//! - Package manager detection (lockfiles, package.json, user agent)
//! - The `Installer` seam and its subprocess-backed implementation

pub mod installer;
pub mod package_manager;

pub use installer::{Installer, PackageManagerInstaller};
pub use package_manager::PackageManager;
