use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use glossgen::glossary::{load_glossary, DuplicatePolicy, Glossary};
use glossgen::output;
use glossgen::site::{build_site, check_glossary, SiteOptions};
use glossgen::utils::AppConfig;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "glossgen")]
#[command(about = "Turn a plain-text glossary into cross-linked HTML pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the index page and one page per term
    Build {
        /// Glossary file (prompted for when omitted)
        input: Option<PathBuf>,

        /// Destination folder (prompted for when omitted)
        dest: Option<PathBuf>,

        /// Do not show progress or a summary
        #[arg(short, long)]
        quiet: bool,

        #[command(flatten)]
        settings: SettingsArgs,
    },
    /// Validate a glossary and report on its cross references
    Check {
        /// Glossary file
        input: PathBuf,

        #[command(flatten)]
        settings: SettingsArgs,
    },
    /// Print the terms in index order
    Terms {
        /// Glossary file
        input: PathBuf,

        #[command(flatten)]
        settings: SettingsArgs,
    },
}

/// Options layered over the config file
#[derive(Args)]
struct SettingsArgs {
    /// Config file (default: <config dir>/glossgen/config.json if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Characters that separate words in definitions
    #[arg(long)]
    separators: Option<String>,

    /// Title of the index page
    #[arg(long)]
    title: Option<String>,

    /// Keep the last definition of a repeated term instead of failing
    #[arg(long)]
    allow_duplicates: bool,
}

impl SettingsArgs {
    fn resolve(self) -> Result<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref())?;
        if let Some(separators) = self.separators {
            config.separators = separators;
        }
        if let Some(title) = self.title {
            config.index_title = title;
        }
        if self.allow_duplicates {
            config.duplicates = DuplicatePolicy::LastWriteWins;
        }
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Ask for a value on stdin when it was not given on the command line
fn prompt_path(question: &str) -> Result<PathBuf> {
    print!("{question}: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("Failed to read from stdin")?;

    let answer = answer.trim();
    if answer.is_empty() {
        bail!("No answer given for '{question}'");
    }
    Ok(PathBuf::from(answer))
}

fn load(input: &Path, config: &AppConfig) -> Result<Glossary> {
    load_glossary(input, config.duplicates)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let color = !cli.no_color;

    match cli.command {
        Commands::Build {
            input,
            dest,
            quiet,
            settings,
        } => {
            let config = settings.resolve()?;
            let input = match input {
                Some(path) => path,
                None => prompt_path("Glossary file")?,
            };
            let dest = match dest {
                Some(path) => path,
                None => prompt_path("Destination folder")?,
            };

            let glossary = load(&input, &config)?;
            let options = SiteOptions::from_config(&config, quiet);
            let summary = build_site(&glossary, &config.separator_set(), &dest, &options)?;

            if !quiet {
                output::print_build_summary(&summary, color)?;
            }
        }
        Commands::Check { input, settings } => {
            let config = settings.resolve()?;
            let glossary = load(&input, &config)?;
            let report = check_glossary(&glossary, &config.separator_set());
            output::print_check_report(&report, color)?;
        }
        Commands::Terms { input, settings } => {
            let config = settings.resolve()?;
            let glossary = load(&input, &config)?;
            output::print_terms(&glossary.sorted_terms())?;
        }
    }

    Ok(())
}
