//! Package manager detection for Node.js projects

use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tokio::fs;

/// Lockfiles and the manager that writes them, in order of precedence
const LOCKFILES: &[(&str, PackageManager)] = &[
    ("bun.lockb", PackageManager::Bun),
    ("bun.lock", PackageManager::Bun),
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("package-lock.json", PackageManager::Npm),
    ("npm-shrinkwrap.json", PackageManager::Npm),
    ("deno.lock", PackageManager::Deno),
];

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
    Deno,
}

impl PackageManager {
    /// Executable name
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
            PackageManager::Deno => "deno",
        }
    }

    /// Parse a manager name, tolerating a trailing `@version` (`pnpm@9.1.0`)
    pub fn parse(value: &str) -> Option<Self> {
        let name = value.trim().split('@').next().unwrap_or_default();
        match name.to_lowercase().as_str() {
            "npm" => Some(PackageManager::Npm),
            "yarn" => Some(PackageManager::Yarn),
            "pnpm" => Some(PackageManager::Pnpm),
            "bun" => Some(PackageManager::Bun),
            "deno" => Some(PackageManager::Deno),
            _ => None,
        }
    }

    /// Arguments for adding `packages`; Deno needs `--npm` right after the subcommand
    pub fn install_args(&self, packages: &[&str]) -> Vec<String> {
        let mut args = vec!["add".to_string()];
        if *self == PackageManager::Deno {
            args.push("--npm".to_string());
        }
        args.extend(packages.iter().map(|p| p.to_string()));
        args
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson {
    package_manager: Option<String>,
}

/// Detect the package manager for `cwd`.
///
/// Order: explicit override, `packageManager` in `package.json`, a lockfile in
/// `cwd` or any ancestor, the `npm_config_user_agent` of the invoking manager,
/// then npm.
pub async fn detect(
    cwd: &Path,
    override_value: Option<&str>,
    user_agent: Option<&str>,
) -> PackageManager {
    if let Some(manager) = override_value.and_then(PackageManager::parse) {
        return manager;
    }
    if let Some(manager) = from_package_json(cwd).await {
        return manager;
    }
    if let Some(manager) = from_lockfile(cwd).await {
        return manager;
    }
    user_agent
        .and_then(from_user_agent)
        .unwrap_or(PackageManager::Npm)
}

async fn from_package_json(cwd: &Path) -> Option<PackageManager> {
    let content = fs::read_to_string(cwd.join("package.json")).await.ok()?;
    let package: PackageJson = serde_json::from_str(&content).ok()?;
    package.package_manager.as_deref().and_then(PackageManager::parse)
}

async fn from_lockfile(cwd: &Path) -> Option<PackageManager> {
    for dir in cwd.ancestors() {
        for (file, manager) in LOCKFILES {
            if fs::try_exists(dir.join(file)).await.unwrap_or(false) {
                return Some(*manager);
            }
        }
    }
    None
}

/// `pnpm/9.1.0 npm/? node/v20.11.0 linux x64` -> pnpm
fn from_user_agent(user_agent: &str) -> Option<PackageManager> {
    let first = user_agent.split_whitespace().next()?;
    PackageManager::parse(first.split('/').next()?)
}
