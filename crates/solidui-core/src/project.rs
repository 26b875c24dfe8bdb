//! Project initialization workflow
//!
//! `ProjectInitializer` turns a validated `RawConfig` into files on disk and
//! installed dependencies. Progress is reported through the `Progress` trait so
//! the same workflow drives the cliclack spinner and headless callers.

use crate::config::{resolve_config_paths, RawConfig, ResolvedConfig};
use crate::error::InitError;
use crate::product::ProductConfig;
use crate::runtime::Installer;
use crate::templates::{scaffold_directories, write_project_files};
use anyhow::Result;
use std::future::Future;
use std::path::{Path, PathBuf};

/// Start/stop notifications around each phase
pub trait Progress {
    fn start(&self, message: &str);
    fn stop(&self, message: &str);
    fn fail(&self, message: &str);
}

/// Progress sink that discards every message
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Progress for Silent {
    fn start(&self, _message: &str) {}
    fn stop(&self, _message: &str) {}
    fn fail(&self, _message: &str) {}
}

/// Resolve `dir` against the process cwd and make sure it is an existing directory
pub fn validate_working_dir(dir: &Path) -> Result<PathBuf, InitError> {
    let path = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(dir)
    };

    if !path.exists() {
        return Err(InitError::MissingDirectory(path));
    }
    if !path.is_dir() {
        return Err(InitError::NotADirectory(path));
    }

    Ok(path)
}

/// Runs the init phases against one working directory
pub struct ProjectInitializer<'a, I, P> {
    cwd: PathBuf,
    config_file_name: &'a str,
    dependencies: &'a [&'a str],
    installer: &'a I,
    progress: &'a P,
}

impl<'a, I: Installer, P: Progress> ProjectInitializer<'a, I, P> {
    pub fn new<C: ProductConfig>(
        product: &C,
        cwd: PathBuf,
        installer: &'a I,
        progress: &'a P,
    ) -> Self {
        Self {
            cwd,
            config_file_name: product.config_file_name(),
            dependencies: product.dependencies(),
            installer,
            progress,
        }
    }

    /// Path of the persisted config file
    pub fn config_path(&self) -> PathBuf {
        self.cwd.join(self.config_file_name)
    }

    /// Write the config, scaffold the project and install dependencies.
    ///
    /// A failing phase aborts the rest; files already written stay in place.
    pub async fn initialize(&self, raw: &RawConfig) -> Result<ResolvedConfig> {
        let config_path = self.config_path();
        self.phase(
            &format!("Creating {}...", self.config_file_name),
            &format!("{} created.", self.config_file_name),
            &format!("Failed to create {}", self.config_file_name),
            raw.write_to(&config_path),
        )
        .await?;

        let config = self
            .phase(
                "Initializing project...",
                "Project initialized.",
                "Failed to initialize project",
                self.scaffold(raw),
            )
            .await?;

        self.phase(
            "Installing dependencies...",
            "Dependencies installed.",
            "Failed to install dependencies",
            self.installer.install(&self.cwd, self.dependencies),
        )
        .await?;

        Ok(config)
    }

    async fn scaffold(&self, raw: &RawConfig) -> Result<ResolvedConfig> {
        let config = resolve_config_paths(&self.cwd, raw).await?;
        scaffold_directories(&config).await?;
        write_project_files(&config).await?;
        Ok(config)
    }

    async fn phase<T>(
        &self,
        start: &str,
        done: &str,
        failed: &str,
        work: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        self.progress.start(start);
        match work.await {
            Ok(value) => {
                self.progress.stop(done);
                Ok(value)
            }
            Err(e) => {
                self.progress.fail(failed);
                Err(e)
            }
        }
    }
}
