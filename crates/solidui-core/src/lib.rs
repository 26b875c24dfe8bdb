//! Solid UI Core - Shared library for the `init` command
//!
//! This library provides the functionality behind `solidui-cli init`: collecting
//! the user's preferences, writing `ui.config.json`, scaffolding the CSS entry
//! point and utils module, and installing the runtime dependencies.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Config model and validation, alias resolution,
//!   template rendering, package manager detection
//! - **Layer 2: Workflow Orchestration** - `Prompter`/`collect_config` and
//!   `ProjectInitializer`, driven through the `Progress` and `Installer` traits
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based front-end (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use solidui_core::{Answers, ProjectInitializer, PackageManagerInstaller, Silent};
//!
//! let raw = Answers::default().into_config(product.schema_url())?;
//! let installer = PackageManagerInstaller::from_env(product.package_manager_env());
//! let init = ProjectInitializer::new(&product, cwd, &installer, &Silent);
//! init.initialize(&raw).await?;
//! ```

pub mod collector;
pub mod config;
pub mod error;
pub mod product;
pub mod project;
pub mod runtime;
pub mod style;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use collector::{collect_config, Answers, Collection, Prompter};
pub use config::{resolve_config_paths, RawConfig, ResolvedConfig};
pub use error::{FieldError, InitError, ValidationError};
pub use product::ProductConfig;
pub use project::{validate_working_dir, ProjectInitializer, Progress, Silent};
pub use runtime::{Installer, PackageManager, PackageManagerInstaller};

#[cfg(feature = "tui")]
pub use tui::{handle_error, run};
