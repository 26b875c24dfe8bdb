//! solidui-cli - Project initialization for solid-ui components

use clap::{Parser, Subcommand};
use solidui_core::tui::InitArgs;
use solidui_core::ProductConfig;
use std::path::PathBuf;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Packages every initialized project depends on
const PROJECT_DEPENDENCIES: &[&str] = &[
    "tailwindcss-animate",
    "class-variance-authority",
    "clsx",
    "tailwind-merge",
];

/// solid-ui product configuration
#[derive(Clone)]
pub struct SolidUiConfig;

impl ProductConfig for SolidUiConfig {
    fn name(&self) -> &'static str {
        env!("CARGO_PKG_NAME")
    }

    fn schema_url(&self) -> &'static str {
        "https://solid-ui.com/schema.json"
    }

    fn dependencies(&self) -> &'static [&'static str] {
        PROJECT_DEPENDENCIES
    }

    fn package_manager_env(&self) -> &'static str {
        "SOLIDUI_PACKAGE_MANAGER"
    }
}

#[derive(Parser, Debug)]
#[command(name = "solidui-cli")]
#[command(about = "CLI for adding solid-ui components to your project")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize your project and install dependencies
    Init(CliInitArgs),
}

#[derive(Parser, Debug)]
pub struct CliInitArgs {
    /// The working directory (defaults to the current directory)
    #[arg(short, long)]
    pub cwd: Option<PathBuf>,

    /// Accept the default answers (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliInitArgs> for InitArgs {
    fn from(args: CliInitArgs) -> Self {
        let defaults = InitArgs::default();
        InitArgs {
            cwd: args.cwd.unwrap_or(defaults.cwd),
            yes: args.yes,
        }
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = SolidUiConfig;

    let result = match args.command {
        Command::Init(init_args) => {
            solidui_core::run(&config, init_args.into(), CLI_VERSION).await
        }
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        solidui_core::handle_error(&e);
        std::process::exit(1);
    }
}
