use clap::{Parser, Subcommand};
use docs_scaffold::config::{self, ScaffoldConfig};
use docs_scaffold::materialize::{self, MaterializeOptions};
use docs_scaffold::{audit, output};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "docs-scaffold")]
#[command(about = "Materialize a documentation-site directory tree from an outline")]
#[command(long_about = "\
Materialize a documentation-site directory tree from an outline

The outline lives in scaffold.toml. Categories become directories with a
_category_.json; pages become markdown files with front matter.

  [tree.introduction]              # docs/introduction/
  label = \"Introduction\"           #   _category_.json label
  position = 1                     #   _category_.json position

  [tree.introduction.items]
  \"overview.md\" = \"Overview\"       # docs/introduction/overview.md

Existing pages are never overwritten. Category metadata is rewritten on
every run. Below the top level, positions follow declaration order.

Run 'docs-scaffold gen-config' to generate a documented scaffold.toml.")]
#[command(version)]
struct Cli {
    /// Outline config file
    #[arg(long, default_value = "scaffold.toml", global = true)]
    config: PathBuf,

    /// Docs root directory (overrides docs_root from the config)
    #[arg(long, env = "DOCS_SCAFFOLD_ROOT", global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create missing directories and pages, refresh category metadata
    Build {
        /// Create the docs root if it does not exist
        #[arg(long)]
        create_root: bool,
    },
    /// Show what build would do without writing anything
    Plan {
        /// Plan as if --create-root were given
        #[arg(long)]
        create_root: bool,
    },
    /// Validate the outline and list pages on disk it no longer declares
    Check,
    /// Print a stock scaffold.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Build { create_root } => {
            let (config, root) = load(cli)?;
            let tree = config.build_tree()?;
            println!("{}", output::format_target(&root));
            let options = MaterializeOptions {
                create_root,
                dry_run: false,
            };
            let summary = materialize::materialize(&root, &tree, options, |event| {
                output::print_event(event, false)
            })?;
            output::print_summary(&summary);
            println!("\n[SUCCESS] Docs scaffolding complete. Missing files created.");
        }
        Command::Plan { create_root } => {
            let (config, root) = load(cli)?;
            let tree = config.build_tree()?;
            println!("{}", output::format_target(&root));
            let options = MaterializeOptions {
                create_root,
                dry_run: true,
            };
            let summary = materialize::materialize(&root, &tree, options, |event| {
                output::print_event(event, true)
            })?;
            output::print_summary(&summary);
            println!("\nPlan only; nothing was written.");
        }
        Command::Check => {
            let (config, root) = load(cli)?;
            println!("==> Checking {}", cli.config.display());
            let tree = config.build_tree()?;
            output::print_tree(&tree);
            let orphans = audit::find_orphans(&root, &tree)?;
            output::print_orphans(&orphans);
            println!("==> Outline is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the config and resolve the docs root.
///
/// `--root` / `DOCS_SCAFFOLD_ROOT` wins; otherwise `docs_root` is resolved
/// against the config file's directory.
fn load(cli: &Cli) -> Result<(ScaffoldConfig, PathBuf), config::ConfigError> {
    let config = config::load_config(&cli.config)?;
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => {
            let config_dir = cli.config.parent().unwrap_or(Path::new(""));
            config.resolve_root(config_dir)
        }
    };
    Ok((config, root))
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn build_flags_parse() {
        let cli = Cli::parse_from([
            "docs-scaffold",
            "--config",
            "site/scaffold.toml",
            "build",
            "--create-root",
        ]);
        assert_eq!(cli.config, PathBuf::from("site/scaffold.toml"));
        assert!(matches!(cli.command, Command::Build { create_root: true }));
    }

    #[test]
    fn root_flag_is_global() {
        let cli = Cli::parse_from(["docs-scaffold", "check", "--root", "/tmp/docs"]);
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/docs")));
    }
}
