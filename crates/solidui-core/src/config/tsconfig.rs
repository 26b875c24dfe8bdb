//! TypeScript path-mapping lookup for import aliases

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Config files consulted for `compilerOptions.paths`, in order
const CONFIG_FILES: &[&str] = &["tsconfig.json", "jsconfig.json"];

/// Mapping used when the project has no config file or no matching pattern
const BUILTIN_ALIASES: &[(&str, &str)] = &[("~/", "src/"), ("@/", "src/")];

/// Upper bound on `extends` hops, so a cycle cannot loop forever
const MAX_EXTENDS_DEPTH: usize = 8;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TsConfigFile {
    extends: Option<String>,
    #[serde(default)]
    compiler_options: CompilerOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CompilerOptions {
    base_url: Option<String>,
    paths: Option<BTreeMap<String, Vec<String>>>,
}

/// Path mappings loaded from a project's tsconfig/jsconfig
#[derive(Debug, Clone, Default)]
pub struct PathMappings {
    /// Directory the mapping targets are relative to
    base_dir: PathBuf,
    paths: BTreeMap<String, Vec<String>>,
}

impl PathMappings {
    /// Load mappings from `dir`, returning `None` when no config file exists
    pub async fn load(dir: &Path) -> Result<Option<Self>> {
        for name in CONFIG_FILES {
            let path = dir.join(name);
            if !fs::try_exists(&path).await.unwrap_or(false) {
                continue;
            }
            return Self::load_file(&path).await.map(Some);
        }
        Ok(None)
    }

    /// Load a config file and the files it `extends`.
    ///
    /// Options set closer to the starting file win. Only path-like `extends`
    /// values are followed; package names (`@tsconfig/...`) are not resolved.
    async fn load_file(path: &Path) -> Result<Self> {
        let mut layers = Vec::new();
        let mut next = Some(path.to_path_buf());

        while let Some(path) = next.take() {
            if layers.len() == MAX_EXTENDS_DEPTH {
                anyhow::bail!("Too many nested `extends` in {}", path.display());
            }
            let content = fs::read_to_string(&path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let file = parse_file(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            let dir = path.parent().unwrap_or(Path::new("")).to_path_buf();
            next = file
                .extends
                .as_deref()
                .and_then(|extends| extends_path(&dir, extends));
            layers.push((dir, file.compiler_options));
        }

        Ok(Self::merge(layers))
    }

    /// Parse a single tsconfig located in `dir`, without following `extends`
    pub fn parse(dir: &Path, content: &str) -> Result<Self> {
        let file = parse_file(content)?;
        Ok(Self::merge(vec![(dir.to_path_buf(), file.compiler_options)]))
    }

    /// Fold config layers, nearest first, into one mapping.
    ///
    /// `baseUrl` is relative to the file that sets it; without a `baseUrl`,
    /// targets are relative to the file that sets `paths`.
    fn merge(layers: Vec<(PathBuf, CompilerOptions)>) -> Self {
        let mut base_url: Option<PathBuf> = None;
        let mut paths: Option<(PathBuf, BTreeMap<String, Vec<String>>)> = None;
        let root = layers.first().map(|(dir, _)| dir.clone()).unwrap_or_default();

        for (dir, options) in layers {
            if base_url.is_none() {
                base_url = options.base_url.map(|base| dir.join(base));
            }
            if paths.is_none() {
                paths = options.paths.map(|p| (dir, p));
            }
        }

        let (paths_dir, paths) = paths.unwrap_or((root, BTreeMap::new()));
        Self {
            base_dir: base_url.unwrap_or(paths_dir),
            paths,
        }
    }

    /// Resolve `alias` through the `paths` patterns.
    ///
    /// An exact pattern wins; otherwise the wildcard pattern with the longest
    /// prefix is used, and its first target receives the captured text.
    pub fn resolve(&self, alias: &str) -> Option<PathBuf> {
        if let Some(targets) = self.paths.get(alias) {
            if !alias.contains('*') {
                return targets.first().map(|t| normalize(&self.base_dir.join(t)));
            }
        }

        let mut best: Option<(&str, &str, &Vec<String>)> = None;
        for (pattern, targets) in &self.paths {
            let Some((prefix, suffix)) = pattern.split_once('*') else {
                continue;
            };
            if alias.len() < prefix.len() + suffix.len()
                || !alias.starts_with(prefix)
                || !alias.ends_with(suffix)
            {
                continue;
            }
            if best.map_or(true, |(p, _, _)| prefix.len() > p.len()) {
                best = Some((prefix, suffix, targets));
            }
        }

        let (prefix, suffix, targets) = best?;
        let captured = &alias[prefix.len()..alias.len() - suffix.len()];
        let target = targets.first()?.replacen('*', captured, 1);
        Some(normalize(&self.base_dir.join(target)))
    }
}

/// Resolve an import alias to an absolute path under `cwd`.
///
/// Order: project path mappings, then the built-in `~/` and `@/` mapping to
/// `src/`, then the alias taken as a path relative to `cwd`.
pub fn resolve_alias(cwd: &Path, mappings: Option<&PathMappings>, alias: &str) -> PathBuf {
    if let Some(path) = mappings.and_then(|m| m.resolve(alias)) {
        return path;
    }
    for (prefix, target) in BUILTIN_ALIASES {
        if let Some(rest) = alias.strip_prefix(prefix) {
            return normalize(&cwd.join(target).join(rest));
        }
    }
    normalize(&cwd.join(alias))
}

fn parse_file(content: &str) -> Result<TsConfigFile> {
    Ok(serde_json::from_str(&strip_jsonc(content))?)
}

/// Location of an `extends` target, or `None` for a package specifier
fn extends_path(dir: &Path, extends: &str) -> Option<PathBuf> {
    let target = Path::new(extends);
    if !(extends.starts_with('.') || target.is_absolute()) {
        return None;
    }
    let mut path = dir.join(target).into_os_string();
    if !extends.ends_with(".json") {
        path.push(".json");
    }
    Some(normalize(Path::new(&path)))
}

/// Drop `.` components and fold `..` into the preceding component
fn normalize(path: &Path) -> PathBuf {
    use std::path::Component;

    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Strip `//` and `/* */` comments plus trailing commas so tsconfig text parses as JSON
fn strip_jsonc(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    let mut in_string = false;

    while i < chars.len() {
        let c = chars[i];
        if in_string {
            out.push(c);
            if c == '\\' && i + 1 < chars.len() {
                out.push(chars[i + 1]);
                i += 2;
                continue;
            }
            if c == '"' {
                in_string = false;
            }
            i += 1;
            continue;
        }

        match (c, chars.get(i + 1)) {
            ('"', _) => {
                in_string = true;
                out.push(c);
                i += 1;
            }
            ('/', Some('/')) => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            ('/', Some('*')) => {
                i += 2;
                while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
                    i += 1;
                }
                i += 2;
            }
            (',', _) => {
                let next = chars[i + 1..].iter().find(|ch| !ch.is_whitespace());
                if !matches!(next, Some('}') | Some(']')) {
                    out.push(c);
                }
                i += 1;
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_jsonc_comments_and_trailing_commas() {
        let input = r#"{
            // line comment
            "a": "http://example.com", /* block */
            "b": [1, 2,],
        }"#;
        let value: serde_json::Value = serde_json::from_str(&strip_jsonc(input)).unwrap();
        assert_eq!(value["a"], "http://example.com");
        assert_eq!(value["b"], serde_json::json!([1, 2]));
    }

    #[test]
    fn test_wildcard_mapping_with_base_url() {
        let dir = Path::new("/project");
        let mappings = PathMappings::parse(
            dir,
            r#"{ "compilerOptions": { "baseUrl": ".", "paths": { "~/*": ["./src/*"] } } }"#,
        )
        .unwrap();
        assert_eq!(
            mappings.resolve("~/lib/utils"),
            Some(PathBuf::from("/project/src/lib/utils"))
        );
        assert_eq!(mappings.resolve("react"), None);
    }

    #[test]
    fn test_longest_prefix_wins() {
        let dir = Path::new("/project");
        let mappings = PathMappings::parse(
            dir,
            r#"{ "compilerOptions": { "paths": {
                "@/*": ["./src/*"],
                "@/ui/*": ["./packages/ui/*"]
            } } }"#,
        )
        .unwrap();
        assert_eq!(
            mappings.resolve("@/ui/button"),
            Some(PathBuf::from("/project/packages/ui/button"))
        );
        assert_eq!(
            mappings.resolve("@/lib/utils"),
            Some(PathBuf::from("/project/src/lib/utils"))
        );
    }

    #[test]
    fn test_exact_mapping() {
        let dir = Path::new("/project");
        let mappings = PathMappings::parse(
            dir,
            r#"{ "compilerOptions": { "baseUrl": "app", "paths": { "utils": ["./shared/utils"] } } }"#,
        )
        .unwrap();
        assert_eq!(
            mappings.resolve("utils"),
            Some(PathBuf::from("/project/app/shared/utils"))
        );
    }

    #[test]
    fn test_builtin_fallback_and_relative() {
        let cwd = Path::new("/project");
        assert_eq!(
            resolve_alias(cwd, None, "~/components/ui"),
            PathBuf::from("/project/src/components/ui")
        );
        assert_eq!(
            resolve_alias(cwd, None, "@/lib/utils"),
            PathBuf::from("/project/src/lib/utils")
        );
        assert_eq!(
            resolve_alias(cwd, None, "./lib/utils"),
            PathBuf::from("/project/lib/utils")
        );
    }

    #[tokio::test]
    async fn test_load_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(PathMappings::load(dir.path()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_malformed_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("tsconfig.json"), "{ not json").unwrap();
        let err = PathMappings::load(dir.path()).await.unwrap_err();
        assert!(err.to_string().contains("tsconfig.json"));
    }

    #[tokio::test]
    async fn test_load_prefers_tsconfig_over_jsconfig() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("tsconfig.json"),
            r#"{ "compilerOptions": { "paths": { "~/*": ["./app/*"] } } }"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("jsconfig.json"),
            r#"{ "compilerOptions": { "paths": { "~/*": ["./other/*"] } } }"#,
        )
        .unwrap();
        let mappings = PathMappings::load(dir.path()).await.unwrap().unwrap();
        assert_eq!(
            mappings.resolve("~/lib/utils"),
            Some(dir.path().join("app/lib/utils"))
        );
    }

    #[tokio::test]
    async fn test_paths_inherited_through_extends() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("config")).unwrap();
        std::fs::write(
            dir.path().join("config/tsconfig.base.json"),
            r#"{ "compilerOptions": { "baseUrl": "..", "paths": { "~/*": ["./app/*"] } } }"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("tsconfig.json"),
            r#"{
                "extends": "./config/tsconfig.base",
                "compilerOptions": { "strict": true }
            }"#,
        )
        .unwrap();

        let mappings = PathMappings::load(dir.path()).await.unwrap().unwrap();
        assert_eq!(
            mappings.resolve("~/lib/utils"),
            Some(dir.path().join("app/lib/utils"))
        );
    }

    #[tokio::test]
    async fn test_nearest_paths_override_extended_ones() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("base.json"),
            r#"{ "compilerOptions": { "paths": { "~/*": ["./base/*"] } } }"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("tsconfig.json"),
            r#"{ "extends": "./base.json", "compilerOptions": { "paths": { "~/*": ["./src/*"] } } }"#,
        )
        .unwrap();

        let mappings = PathMappings::load(dir.path()).await.unwrap().unwrap();
        assert_eq!(
            mappings.resolve("~/lib/utils"),
            Some(dir.path().join("src/lib/utils"))
        );
    }

    #[tokio::test]
    async fn test_package_extends_is_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("tsconfig.json"),
            r#"{ "extends": "@tsconfig/strictest/tsconfig.json" }"#,
        )
        .unwrap();

        let mappings = PathMappings::load(dir.path()).await.unwrap().unwrap();
        assert_eq!(mappings.resolve("~/lib/utils"), None);
    }

    #[tokio::test]
    async fn test_extends_cycle_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.json"), r#"{ "extends": "./tsconfig.json" }"#).unwrap();
        std::fs::write(dir.path().join("tsconfig.json"), r#"{ "extends": "./a.json" }"#).unwrap();

        let err = PathMappings::load(dir.path()).await.unwrap_err();
        assert!(err.to_string().contains("extends"));
    }

    #[tokio::test]
    async fn test_missing_extends_target_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("tsconfig.json"),
            r#"{ "extends": "./missing.json" }"#,
        )
        .unwrap();

        let err = PathMappings::load(dir.path()).await.unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
