//! Dependency installation through the project's package manager

use super::package_manager::{self, PackageManager};
use crate::error::InitError;
use anyhow::Result;
use std::ffi::OsStr;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Installs packages into a project
pub trait Installer {
    fn install(&self, cwd: &Path, packages: &[&str]) -> impl Future<Output = Result<()>>;
}

/// Installer that shells out to the detected package manager
#[derive(Debug, Clone, Default)]
pub struct PackageManagerInstaller {
    /// Manager name forcing detection (e.g. from an environment variable)
    override_value: Option<String>,
    /// Executable run in place of the manager's own command
    program: Option<PathBuf>,
}

impl PackageManagerInstaller {
    pub fn new(override_value: Option<String>) -> Self {
        Self {
            override_value,
            program: None,
        }
    }

    /// Read the override from `env_var`, ignoring empty values
    pub fn from_env(env_var: &str) -> Self {
        let value = std::env::var(env_var).ok().filter(|v| !v.trim().is_empty());
        Self::new(value)
    }

    /// Run `program` instead of the detected manager's executable
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = Some(program.into());
        self
    }

    /// Package manager that `install` would use for `cwd`
    pub async fn detect(&self, cwd: &Path) -> PackageManager {
        let user_agent = std::env::var("npm_config_user_agent").ok();
        package_manager::detect(cwd, self.override_value.as_deref(), user_agent.as_deref()).await
    }

    fn program(&self, manager: PackageManager) -> &OsStr {
        match &self.program {
            Some(path) => path.as_os_str(),
            None => OsStr::new(manager.command()),
        }
    }
}

impl Installer for PackageManagerInstaller {
    /// Run `<pm> add <packages>` in `cwd` and wait for it without a timeout
    async fn install(&self, cwd: &Path, packages: &[&str]) -> Result<()> {
        let manager = self.detect(cwd).await;
        let program = self.program(manager);
        let args = manager.install_args(packages);

        let output = TokioCommand::new(program)
            .args(&args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| InitError::Install {
                manager: manager.to_string(),
                message: format!("could not run `{}`: {}", Path::new(program).display(), e),
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr.trim();
        let message = match output.status.code() {
            Some(code) if detail.is_empty() => format!("exited with code {}", code),
            Some(code) => format!("exited with code {}\n{}", code, detail),
            None if detail.is_empty() => "terminated by signal".to_string(),
            None => format!("terminated by signal\n{}", detail),
        };

        Err(InitError::Install {
            manager: manager.to_string(),
            message,
        }
        .into())
    }
}
