//! create-react-tailwind - Scaffold a React project with Tailwind CSS

use anyhow::Result;
use clap::{ArgAction, Parser};
use scaffold_core::tui::CreateArgs;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "create-react-tailwind")]
#[command(about = "CLI for scaffolding React projects with Tailwind CSS")]
#[command(version, disable_version_flag = true)]
pub struct Args {
    /// Name of the project directory to create
    pub project_name: Option<String>,

    /// Skip prompts and use defaults (TypeScript, npm); requires a project name
    #[arg(short, long)]
    pub yes: bool,

    /// Skip the package manager and Node.js check
    #[arg(long = "skip-check")]
    pub skip_check: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: (),
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            project_name: args.project_name,
            yes: args.yes,
            skip_check: args.skip_check,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
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
    let result = scaffold_core::run(args.into(), CLI_VERSION).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
