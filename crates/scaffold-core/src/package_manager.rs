//! Package manager command families (npm, yarn, pnpm)
//!
//! Each manager maps to one [`CommandSet`] holding the argument templates for
//! the four commands the scaffolder needs. Templates are token lists; tokens
//! equal to a placeholder are replaced by zero or more bound values.

use crate::runtime::command::Invocation;
use std::fmt;

const NAME: &str = "{name}";
const TEMPLATE: &str = "{template}";
const PACKAGES: &str = "{packages}";
const SCRIPT: &str = "{script}";

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
}

/// Command templates for one package manager
#[derive(Debug)]
pub struct CommandSet {
    /// Binary name looked up on PATH
    pub program: &'static str,
    /// Non-interactive `create vite` invocation
    pub create: &'static [&'static str],
    /// Install everything listed in package.json
    pub install: &'static [&'static str],
    /// Add packages to dependencies
    pub add: &'static [&'static str],
    /// Run a package.json script
    pub run: &'static [&'static str],
}

static NPM: CommandSet = CommandSet {
    program: "npm",
    // npm forwards flags to the initializer only after `--`
    create: &["create", "vite@latest", NAME, "--", "--template", TEMPLATE],
    install: &["install"],
    add: &["install", PACKAGES],
    run: &["run", SCRIPT],
};

static YARN: CommandSet = CommandSet {
    program: "yarn",
    create: &["create", "vite", NAME, "--template", TEMPLATE],
    install: &["install"],
    add: &["add", PACKAGES],
    run: &[SCRIPT],
};

static PNPM: CommandSet = CommandSet {
    program: "pnpm",
    create: &["create", "vite", NAME, "--template", TEMPLATE],
    install: &["install"],
    add: &["add", PACKAGES],
    run: &[SCRIPT],
};

impl PackageManager {
    /// All managers, in the order they are offered to the user
    pub const ALL: [PackageManager; 3] = [Self::Npm, Self::Yarn, Self::Pnpm];

    pub fn display_name(&self) -> &'static str {
        self.commands().program
    }

    pub fn commands(&self) -> &'static CommandSet {
        match self {
            PackageManager::Npm => &NPM,
            PackageManager::Yarn => &YARN,
            PackageManager::Pnpm => &PNPM,
        }
    }

    /// `create vite` for the React template matching the variant
    pub fn create(&self, project_name: &str, use_typescript: bool) -> Invocation {
        let template = if use_typescript { "react-ts" } else { "react" };
        self.commands().expand(
            self.commands().create,
            &[(NAME, &[project_name]), (TEMPLATE, &[template])],
        )
    }

    pub fn install(&self) -> Invocation {
        self.commands().expand(self.commands().install, &[])
    }

    pub fn add(&self, packages: &[&str]) -> Invocation {
        self.commands()
            .expand(self.commands().add, &[(PACKAGES, packages)])
    }

    pub fn run_script(&self, script: &str) -> Invocation {
        self.commands()
            .expand(self.commands().run, &[(SCRIPT, &[script])])
    }
}

impl CommandSet {
    fn expand(&self, template: &[&str], bindings: &[(&str, &[&str])]) -> Invocation {
        let mut args = Vec::new();
        for token in template {
            match bindings.iter().find(|(placeholder, _)| placeholder == token) {
                Some((_, values)) => args.extend(values.iter().map(|v| v.to_string())),
                None => args.push(token.to_string()),
            }
        }
        Invocation::new(self.program, args)
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_npm_create_separates_initializer_flags() {
        let cmd = PackageManager::Npm.create("demo-app", true);
        assert_eq!(
            cmd.to_string(),
            "npm create vite@latest demo-app -- --template react-ts"
        );
    }

    #[test]
    fn test_yarn_and_pnpm_create_untyped() {
        assert_eq!(
            PackageManager::Yarn.create("demo", false).to_string(),
            "yarn create vite demo --template react"
        );
        assert_eq!(
            PackageManager::Pnpm.create("demo", false).to_string(),
            "pnpm create vite demo --template react"
        );
    }

    #[test]
    fn test_add_expands_all_packages() {
        let packages = ["tailwindcss", "@tailwindcss/postcss", "postcss"];
        assert_eq!(
            PackageManager::Npm.add(&packages).args,
            vec!["install", "tailwindcss", "@tailwindcss/postcss", "postcss"]
        );
        assert_eq!(
            PackageManager::Yarn.add(&packages).to_string(),
            "yarn add tailwindcss @tailwindcss/postcss postcss"
        );
    }

    #[test]
    fn test_install_has_no_arguments_beyond_subcommand() {
        for pm in PackageManager::ALL {
            assert_eq!(pm.install().args, vec!["install"]);
        }
    }

    #[test]
    fn test_dev_script() {
        assert_eq!(PackageManager::Npm.run_script("dev").to_string(), "npm run dev");
        assert_eq!(PackageManager::Yarn.run_script("dev").to_string(), "yarn dev");
        assert_eq!(PackageManager::Pnpm.run_script("dev").to_string(), "pnpm dev");
    }

    #[test]
    fn test_default_is_npm() {
        assert_eq!(PackageManager::default(), PackageManager::Npm);
        assert_eq!(PackageManager::ALL[0], PackageManager::default());
    }
}
