//! Config model, validation and path resolution
//!
//! This module provides:
//! - `RawConfig`, the record persisted as `ui.config.json`
//! - `ResolvedConfig`, the same record with absolute paths attached
//! - Import alias lookup through tsconfig/jsconfig path mappings

pub mod raw;
pub mod resolve;
pub mod tsconfig;

pub use raw::{
    AliasConfig, RawConfig, TailwindConfig, DEFAULT_COMPONENTS, DEFAULT_CSS_FILE,
    DEFAULT_TAILWIND_PREFIX, DEFAULT_UTILS,
};
pub use resolve::{resolve_config_paths, PathKey, ResolvedConfig, ResolvedPaths};
pub use tsconfig::PathMappings;
