//! Directory scaffolding and template writing for a resolved config

use super::{render_tailwind_css, utils_template};
use crate::config::{PathKey, ResolvedConfig};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Directory that must exist before writing to `path`.
///
/// A path with an extension is a file and yields its parent; anything else is
/// a directory. For the utils key a trailing `utils` segment is dropped, since
/// the module file itself is written as `<path>.ts`/`<path>.js`.
pub fn target_directory(key: PathKey, path: &Path) -> PathBuf {
    let dir = if path.extension().is_some() {
        path.parent().unwrap_or(path)
    } else {
        path
    };

    if key == PathKey::Utils && path.ends_with("utils") && dir.ends_with("utils") {
        if let Some(parent) = dir.parent() {
            return parent.to_path_buf();
        }
    }

    dir.to_path_buf()
}

/// Create every directory the resolved paths need; existing ones are left alone
pub async fn scaffold_directories(config: &ResolvedConfig) -> Result<Vec<PathBuf>> {
    let mut created = Vec::new();

    for (key, path) in config.resolved_paths.iter() {
        let dir = target_directory(key, path);
        if fs::try_exists(&dir).await.unwrap_or(false) {
            continue;
        }
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        created.push(dir);
    }

    Ok(created)
}

/// Write the CSS entry point and the utils module, returning the written paths
pub async fn write_project_files(config: &ResolvedConfig) -> Result<Vec<PathBuf>> {
    let css_path = config.resolved_paths.tailwind_css.clone();
    let css = render_tailwind_css(&config.raw.tailwind.prefix);
    fs::write(&css_path, css)
        .await
        .with_context(|| format!("Failed to write file: {}", css_path.display()))?;

    let utils_path = config.utils_file();
    fs::write(&utils_path, utils_template(config.raw.tsx))
        .await
        .with_context(|| format!("Failed to write file: {}", utils_path.display()))?;

    Ok(vec![css_path, utils_path])
}
