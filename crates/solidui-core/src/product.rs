//! Product configuration trait for CLI binaries
//!
//! This trait defines the interface a binary implements to configure the
//! init workflow: identity, schema URL, config file name and the runtime
//! dependencies installed into the project.

/// Configuration trait for the CLI product
///
/// The binary implements this trait to define:
/// - Product identity (name)
/// - The `$schema` URL written into the config file
/// - The config file name
/// - Runtime dependencies installed after scaffolding
/// - The environment variable that forces a package manager
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Schema identifier written as `$schema` in the config file
    fn schema_url(&self) -> &'static str;

    /// File name of the persisted config, relative to the working directory
    fn config_file_name(&self) -> &'static str {
        "ui.config.json"
    }

    /// Packages added to the project after scaffolding
    fn dependencies(&self) -> &'static [&'static str];

    /// Environment variable name for overriding package manager detection
    fn package_manager_env(&self) -> &'static str;
}
