//! Charm-style CLI prompts using cliclack

use crate::collector::{collect_config, Answers, Collection, Prompter};
use crate::error::{InitError, ValidationError};
use crate::product::ProductConfig;
use crate::project::{validate_working_dir, ProjectInitializer, Progress};
use crate::runtime::PackageManagerInstaller;
use crate::style::{headline, highlight};
use anyhow::Result;
use std::cell::RefCell;
use std::io;
use std::path::PathBuf;

/// CLI arguments for the init command
#[derive(Debug, Clone)]
pub struct InitArgs {
    /// Working directory of the project
    pub cwd: PathBuf,

    /// Accept every default without prompting (non-interactive mode)
    pub yes: bool,
}

impl Default for InitArgs {
    fn default() -> Self {
        Self {
            cwd: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            yes: false,
        }
    }
}

/// Prompter backed by cliclack inputs
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn confirm(&mut self, message: &str, initial: bool) -> io::Result<bool> {
        cliclack::confirm(message).initial_value(initial).interact()
    }

    fn text(&mut self, message: &str, initial: &str, required: bool) -> io::Result<String> {
        cliclack::input(message)
            .default_input(initial)
            .required(required)
            .interact()
    }
}

/// One cliclack spinner per phase
#[derive(Default)]
pub struct Spinner {
    current: RefCell<Option<cliclack::ProgressBar>>,
}

impl Progress for Spinner {
    fn start(&self, message: &str) {
        let spinner = cliclack::spinner();
        spinner.start(message);
        *self.current.borrow_mut() = Some(spinner);
    }

    fn stop(&self, message: &str) {
        if let Some(spinner) = self.current.borrow_mut().take() {
            spinner.stop(message);
        }
    }

    fn fail(&self, message: &str) {
        if let Some(spinner) = self.current.borrow_mut().take() {
            spinner.error(message);
        }
    }
}

/// Run the init command with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: InitArgs, cli_version: &str) -> Result<()> {
    // Step 1: Validate the working directory before asking anything
    let cwd = validate_working_dir(&args.cwd)?;

    cliclack::intro(headline(&format!(" {} - {} ", config.name(), cli_version)))?;

    // Step 2: Collect preferences
    let raw = if args.yes {
        cliclack::log::info("Using default configuration (--yes mode)")?;
        Answers::default().into_config(config.schema_url())?
    } else {
        match collect_config(&mut CliclackPrompter, config.schema_url())? {
            Collection::Collected(raw) => raw,
            Collection::Cancelled => {
                cliclack::outro_cancel("Cancelled.")?;
                return Ok(());
            }
        }
    };

    // Step 3: Write config, scaffold files, install dependencies
    let installer = PackageManagerInstaller::from_env(config.package_manager_env());
    let spinner = Spinner::default();
    let initializer = ProjectInitializer::new(config, cwd, &installer, &spinner);
    let resolved = initializer.initialize(&raw).await?;

    cliclack::log::remark(format!(
        "Utils module written to {}",
        resolved.utils_file().display()
    ))?;

    cliclack::outro(format!(
        "{} Project initialization completed. You may now add components.",
        highlight("Success!")
    ))?;

    Ok(())
}

/// Central error reporter: prints the error; the caller exits non-zero
pub fn handle_error(err: &anyhow::Error) {
    let message = match validation_error(err) {
        Some(validation) => {
            let fields: Vec<String> = validation
                .errors
                .iter()
                .map(|e| format!("  - {}", e))
                .collect();
            format!("{}\n{}", validation, fields.join("\n"))
        }
        None => format!("{:#}", err),
    };

    if cliclack::log::error(&message).is_err() {
        eprintln!("Error: {}", message);
    }
}

fn validation_error(err: &anyhow::Error) -> Option<&ValidationError> {
    err.downcast_ref::<ValidationError>()
        .or_else(|| match err.downcast_ref::<InitError>() {
            Some(InitError::Validation(validation)) => Some(validation),
            _ => None,
        })
}
