//! Toolprompt — tool-use instruction renderer.
//!
//! Usage:
//!   toolprompt render --tools tools.json     Render instructions to stdout
//!   toolprompt check --tools t.json --golden g.md
//!                                            Compare against a golden file
//!   toolprompt platforms                     List known platform tokens
//!   toolprompt init                          Write a default config

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::info;

use toolprompt::config::{self, ToolpromptConfig};
use toolprompt::render::golden::golden_diff;
use toolprompt::tools;
use toolprompt::InstructionRenderer;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "toolprompt")]
#[command(version = "0.1.0")]
#[command(about = "Render tool-use instructions for chat-based AI agents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to toolprompt home directory (default: ~/.toolprompt).
    #[arg(long)]
    home: Option<String>,

    /// Config file (default: <home>/toolprompt.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the instruction document.
    Render {
        /// Tool catalog (JSON).
        #[arg(long)]
        tools: PathBuf,

        /// Host identifier used to pick platform fragments.
        #[arg(long)]
        host: Option<String>,

        /// Write to this file instead of stdout.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Render and compare with a golden file.
    Check {
        /// Tool catalog (JSON).
        #[arg(long)]
        tools: PathBuf,

        /// Expected document.
        #[arg(long)]
        golden: PathBuf,

        /// Host identifier used to pick platform fragments.
        #[arg(long)]
        host: Option<String>,
    },

    /// List registered platform tokens.
    Platforms {
        /// Highlight the tokens matching this host.
        #[arg(long)]
        host: Option<String>,
    },

    /// Write a default config file.
    Init,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr, so rendered output stays clean)
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let home_dir = cli
        .home
        .as_deref()
        .map(|h| PathBuf::from(shellexpand::tilde(h).into_owned()))
        .unwrap_or_else(config::default_home_dir);
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| home_dir.join("toolprompt.toml"));

    match cli.command {
        Commands::Render {
            tools,
            host,
            output,
        } => cmd_render(&config_path, &tools, host, output.as_deref()),
        Commands::Check {
            tools,
            golden,
            host,
        } => cmd_check(&config_path, &tools, &golden, host),
        Commands::Platforms { host } => cmd_platforms(&config_path, host),
        Commands::Init => cmd_init(&config_path),
    }
}

// ---------------------------------------------------------------------------
// Command implementations
// ---------------------------------------------------------------------------

fn cmd_render(
    config_path: &Path,
    tools_path: &Path,
    host: Option<String>,
    output: Option<&Path>,
) -> Result<()> {
    let cfg = load(config_path)?;
    let document = render(&cfg, tools_path, host)?;

    match output {
        Some(path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} chars to {}", document.len(), path.display());
        }
        None => print!("{}", document),
    }
    Ok(())
}

fn cmd_check(
    config_path: &Path,
    tools_path: &Path,
    golden_path: &Path,
    host: Option<String>,
) -> Result<()> {
    let cfg = load(config_path)?;
    let document = render(&cfg, tools_path, host)?;
    let expected = std::fs::read_to_string(golden_path)
        .with_context(|| format!("Failed to read golden file {}", golden_path.display()))?;

    match golden_diff(&expected, &document) {
        None => {
            println!("{} {} matches", "ok".green().bold(), golden_path.display());
            Ok(())
        }
        Some(diff) => {
            println!("{}", diff);
            eprintln!(
                "{} rendered output differs from {}",
                "Error:".red().bold(),
                golden_path.display()
            );
            std::process::exit(1);
        }
    }
}

fn cmd_platforms(config_path: &Path, host: Option<String>) -> Result<()> {
    let cfg = load(config_path)?;
    let registry = cfg.platform_registry();
    let host = host.unwrap_or_else(|| cfg.host.clone());
    let matching = registry.matching_tokens(&host);

    println!();
    println!("{}", "=== Platforms ===".bold());
    println!();
    for entry in registry.entries() {
        if matching.contains(&entry.token.as_str()) {
            println!("  {} {}", "*".green().bold(), entry.token.green());
        } else {
            println!("    {}", entry.token);
        }
    }
    if registry.is_empty() {
        println!("    {}", "(none)".dimmed());
    }
    println!();
    Ok(())
}

fn cmd_init(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!(
            "{} Config already exists at {}",
            ">>>".yellow().bold(),
            config_path.display()
        );
        return Ok(());
    }

    config::save_config(&ToolpromptConfig::default(), config_path)?;
    println!(
        "{} Wrote default config to {}",
        ">>>".green().bold(),
        config_path.display()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load(config_path: &Path) -> Result<ToolpromptConfig> {
    config::load_config(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))
}

/// Load the catalog and render it with the config's platforms and
/// instructions. The command-line host overrides the configured one.
fn render(cfg: &ToolpromptConfig, tools_path: &Path, host: Option<String>) -> Result<String> {
    let tool_list = tools::load_tools(tools_path)?;
    let instructions = cfg.custom_instructions()?;
    let host = host.unwrap_or_else(|| cfg.host.clone());

    let renderer = InstructionRenderer::new(cfg.platform_registry());
    Ok(renderer.render(&tool_list, &instructions, &host))
}
