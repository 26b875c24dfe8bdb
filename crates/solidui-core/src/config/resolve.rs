//! Resolution of a `RawConfig` into absolute filesystem paths

use super::raw::RawConfig;
use super::tsconfig::{resolve_alias, PathMappings};
use anyhow::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// Logical targets that map to a location on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKey {
    TailwindCss,
    Utils,
    Components,
}

impl PathKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PathKey::TailwindCss => "tailwindCss",
            PathKey::Utils => "utils",
            PathKey::Components => "components",
        }
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Absolute paths for every logical target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub tailwind_css: PathBuf,
    /// Utils module path without its extension
    pub utils: PathBuf,
    pub components: PathBuf,
}

impl ResolvedPaths {
    pub fn get(&self, key: PathKey) -> &Path {
        match key {
            PathKey::TailwindCss => &self.tailwind_css,
            PathKey::Utils => &self.utils,
            PathKey::Components => &self.components,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PathKey, &Path)> {
        [PathKey::TailwindCss, PathKey::Utils, PathKey::Components]
            .into_iter()
            .map(move |key| (key, self.get(key)))
    }
}

/// A `RawConfig` paired with its resolved paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub raw: RawConfig,
    pub resolved_paths: ResolvedPaths,
}

impl ResolvedConfig {
    /// File extension of the generated utils module
    pub fn utils_extension(&self) -> &'static str {
        if self.raw.tsx {
            "ts"
        } else {
            "js"
        }
    }

    /// Full path of the utils module, extension included
    pub fn utils_file(&self) -> PathBuf {
        let mut name = self.resolved_paths.utils.clone().into_os_string();
        name.push(".");
        name.push(self.utils_extension());
        PathBuf::from(name)
    }
}

/// Resolve every configured location relative to `cwd`
pub async fn resolve_config_paths(cwd: &Path, raw: &RawConfig) -> Result<ResolvedConfig> {
    let mappings = PathMappings::load(cwd).await?;

    let resolved_paths = ResolvedPaths {
        tailwind_css: cwd.join(&raw.tailwind.css),
        utils: resolve_alias(cwd, mappings.as_ref(), &raw.aliases.utils),
        components: resolve_alias(cwd, mappings.as_ref(), &raw.aliases.components),
    };

    Ok(ResolvedConfig {
        raw: raw.clone(),
        resolved_paths,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::raw::{AliasConfig, TailwindConfig};

    fn raw(tsx: bool) -> RawConfig {
        RawConfig {
            schema: "https://solid-ui.com/schema.json".to_string(),
            tsx,
            tailwind: TailwindConfig {
                css: "src/app.css".to_string(),
                prefix: String::new(),
            },
            aliases: AliasConfig {
                components: "~/components/ui".to_string(),
                utils: "~/lib/utils".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_resolves_without_tsconfig() {
        let dir = tempfile::tempdir().unwrap();
        let config = resolve_config_paths(dir.path(), &raw(true)).await.unwrap();
        let paths = &config.resolved_paths;

        assert_eq!(paths.tailwind_css, dir.path().join("src/app.css"));
        assert_eq!(paths.utils, dir.path().join("src/lib/utils"));
        assert_eq!(paths.components, dir.path().join("src/components/ui"));
        assert_eq!(config.utils_file(), dir.path().join("src/lib/utils.ts"));
    }

    #[tokio::test]
    async fn test_resolves_through_tsconfig_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("tsconfig.json"),
            r#"{
                // SolidStart layout
                "compilerOptions": { "paths": { "~/*": ["./app/*"] } }
            }"#,
        )
        .unwrap();

        let config = resolve_config_paths(dir.path(), &raw(false)).await.unwrap();
        assert_eq!(config.resolved_paths.utils, dir.path().join("app/lib/utils"));
        assert_eq!(config.utils_file(), dir.path().join("app/lib/utils.js"));
    }

    #[tokio::test]
    async fn test_iter_covers_every_key() {
        let dir = tempfile::tempdir().unwrap();
        let config = resolve_config_paths(dir.path(), &raw(true)).await.unwrap();
        let keys: Vec<&str> = config
            .resolved_paths
            .iter()
            .map(|(key, _)| key.as_str())
            .collect();
        assert_eq!(keys, vec!["tailwindCss", "utils", "components"]);
    }
}
