//! Charm-style CLI prompts using cliclack

use crate::config::{validate_project_name, GenerationConfig, DEFAULT_PROJECT_NAME};
use crate::generate::{materialize, prepare_directory};
use crate::package_manager::PackageManager;
use crate::runtime::check;
use crate::runtime::SystemRunner;
use anyhow::{Context, Result};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Name of the project directory to create
    pub project_name: Option<String>,

    /// Skip prompts when a project name is given
    pub yes: bool,

    /// Skip the package manager / Node.js check
    pub skip_check: bool,
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(format!("create-react-tailwind v{}", cli_version))?;

    // Step 1: Resolve name, language and package manager
    let config = resolve_config(&args)?;

    // Step 2: Check the toolchain before touching the disk
    if args.skip_check {
        cliclack::log::info("Skipping toolchain check")?;
    } else {
        check_toolchain(config.package_manager)?;
    }

    // Step 3: Prepare the target directory
    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;
    prepare_directory(&cwd, &config.project_name).await?;

    // Step 4: Generate the project
    let project_dir = materialize(&config, &cwd, &SystemRunner, |step| {
        let _ = cliclack::log::step(step);
    })
    .await?;

    cliclack::log::success(format!("Project created in {}", project_dir.display()))?;

    // Step 5: Show next steps
    print_next_steps(&config)?;

    Ok(())
}

fn resolve_config(args: &CreateArgs) -> Result<GenerationConfig> {
    if let (Some(name), true) = (&args.project_name, args.yes) {
        if let Err(reason) = validate_project_name(name) {
            anyhow::bail!("Invalid project name '{}': {}", name, reason);
        }
        let config = GenerationConfig::with_defaults(name.clone());
        cliclack::log::info(format!(
            "Using defaults: TypeScript, {}",
            config.package_manager
        ))?;
        return Ok(config);
    }

    let default_name = args
        .project_name
        .as_deref()
        .unwrap_or(DEFAULT_PROJECT_NAME);

    let project_name: String = cliclack::input("Project name")
        .placeholder(default_name)
        .default_input(default_name)
        .validate(|input: &String| validate_project_name(input))
        .interact()?;

    let use_typescript: bool = cliclack::confirm("Use TypeScript?")
        .initial_value(true)
        .interact()?;

    let mut select = cliclack::select("Select a package manager");
    for pm in PackageManager::ALL {
        select = select.item(pm, pm.display_name(), "");
    }
    let package_manager: PackageManager = select
        .initial_value(PackageManager::default())
        .interact()?;

    Ok(GenerationConfig {
        project_name,
        use_typescript,
        package_manager,
    })
}

fn check_toolchain(pm: PackageManager) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking toolchain...");

    match check::check_toolchain(pm) {
        Ok(runtimes) => {
            let runtime_info: Vec<String> = runtimes
                .iter()
                .map(|r| {
                    if r.available {
                        format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown"))
                    } else {
                        format!("{} (not installed)", r.name)
                    }
                })
                .collect();
            spinner.stop(format!("Detected: {}", runtime_info.join(", ")));

            let node_warning = runtimes
                .iter()
                .find(|r| r.name == "Node.js")
                .and_then(|r| r.version.as_deref())
                .and_then(check::node_version_warning);
            if let Some(warning) = node_warning {
                cliclack::log::warning(warning)?;
            }
            Ok(())
        }
        Err(e) => {
            spinner.stop("Missing toolchain");
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Please install {} and try again.", pm);
        }
    }
}

fn print_next_steps(config: &GenerationConfig) -> Result<()> {
    let steps = config.next_steps();

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
