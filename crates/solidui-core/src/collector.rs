//! Collection of user preferences into a validated `RawConfig`

use crate::config::{
    AliasConfig, RawConfig, TailwindConfig, DEFAULT_COMPONENTS, DEFAULT_CSS_FILE,
    DEFAULT_TAILWIND_PREFIX, DEFAULT_UTILS,
};
use crate::error::ValidationError;
use crate::style::{highlight, subtle};
use anyhow::Result;
use std::io;

/// Source of prompt answers.
///
/// A prompt the user cancels returns an error of kind
/// [`io::ErrorKind::Interrupted`].
pub trait Prompter {
    fn confirm(&mut self, message: &str, initial: bool) -> io::Result<bool>;

    /// Text input pre-filled with `initial`; `required = false` accepts an empty answer
    fn text(&mut self, message: &str, initial: &str, required: bool) -> io::Result<String>;
}

/// The five prompt answers, before mapping into a `RawConfig`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub typescript: bool,
    pub css_file: String,
    pub tailwind_prefix: String,
    pub components: String,
    pub utils: String,
}

impl Default for Answers {
    fn default() -> Self {
        Self {
            typescript: true,
            css_file: DEFAULT_CSS_FILE.to_string(),
            tailwind_prefix: DEFAULT_TAILWIND_PREFIX.to_string(),
            components: DEFAULT_COMPONENTS.to_string(),
            utils: DEFAULT_UTILS.to_string(),
        }
    }
}

impl Answers {
    /// Map the answers onto the config shape and validate it
    pub fn into_config(self, schema_url: &str) -> Result<RawConfig, ValidationError> {
        let config = RawConfig {
            schema: schema_url.to_string(),
            tsx: self.typescript,
            tailwind: TailwindConfig {
                css: self.css_file,
                prefix: self.tailwind_prefix,
            },
            aliases: AliasConfig {
                components: self.components,
                utils: self.utils,
            },
        };
        config.validate()?;
        Ok(config)
    }
}

/// Outcome of the collection stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection {
    Collected(RawConfig),
    Cancelled,
}

/// `Ok(None)` when the user cancelled the prompt
fn answer<T>(result: io::Result<T>) -> io::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e),
    }
}

/// Ask the five questions in order, stopping at the first cancellation
pub fn collect_config<P: Prompter>(prompter: &mut P, schema_url: &str) -> Result<Collection> {
    let defaults = Answers::default();

    let Some(typescript) = answer(prompter.confirm(
        &format!(
            "Would you like to use {} (recommended)?",
            highlight("Typescript")
        ),
        defaults.typescript,
    ))?
    else {
        return Ok(Collection::Cancelled);
    };

    let Some(css_file) = answer(prompter.text(
        &format!(
            "Where is your {} file? {}",
            highlight("global CSS"),
            subtle("(this file will be overwritten)")
        ),
        &defaults.css_file,
        true,
    ))?
    else {
        return Ok(Collection::Cancelled);
    };

    let Some(tailwind_prefix) = answer(prompter.text(
        &format!(
            "Are you using a custom {}? (Leave blank if not)",
            highlight("tailwind prefix eg. tw-")
        ),
        &defaults.tailwind_prefix,
        false,
    ))?
    else {
        return Ok(Collection::Cancelled);
    };

    let Some(components) = answer(prompter.text(
        &format!("Configure the import alias for {}:", highlight("components")),
        &defaults.components,
        true,
    ))?
    else {
        return Ok(Collection::Cancelled);
    };

    let Some(utils) = answer(prompter.text(
        &format!("Configure the import alias for {}:", highlight("utils")),
        &defaults.utils,
        true,
    ))?
    else {
        return Ok(Collection::Cancelled);
    };

    let answers = Answers {
        typescript,
        css_file,
        tailwind_prefix,
        components,
        utils,
    };
    Ok(Collection::Collected(answers.into_config(schema_url)?))
}
