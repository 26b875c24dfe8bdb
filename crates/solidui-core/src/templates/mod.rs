//! Bundled file templates and the code that writes them into a project
//!
//! This module provides:
//! - The CSS entry point and utils module templates
//! - Directory scaffolding for resolved config paths
//! - Writing the rendered templates to disk

pub mod writer;

pub use writer::{scaffold_directories, target_directory, write_project_files};

/// Placeholder in the CSS template replaced by the prefix directive
const PREFIX_PLACEHOLDER: &str = "<%- prefix %>";

/// Global CSS entry point
pub const TAILWIND_CSS: &str = include_str!("../../templates/tailwind.css");

/// Utils module for TypeScript projects
pub const UTILS: &str = include_str!("../../templates/utils.ts");

/// Utils module for JavaScript projects
pub const UTILS_JS: &str = include_str!("../../templates/utils.js");

/// Render the CSS template, emitting ` prefix(<value>)` only for a non-empty prefix
pub fn render_tailwind_css(prefix: &str) -> String {
    let directive = if prefix.is_empty() {
        String::new()
    } else {
        format!(" prefix({})", prefix)
    };
    TAILWIND_CSS.replacen(PREFIX_PLACEHOLDER, &directive, 1)
}

/// Pick the utils template for the typing mode
pub fn utils_template(tsx: bool) -> &'static str {
    if tsx {
        UTILS
    } else {
        UTILS_JS
    }
}
