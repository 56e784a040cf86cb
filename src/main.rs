// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{LevelFilter, Level, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use slokwai::app_config::{self, Config, LogLevel};
use slokwai::app_controller::{Controller, HtmlOptions};
use slokwai::render::HtmlVariant;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// CLI Wrapper for HtmlVariant to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliHtmlVariant {
    /// Grouped messages in collapsible chapters
    Chat,
    /// One message per verse, principal speaker hidden until clicked
    Reveal,
}

impl From<CliHtmlVariant> for HtmlVariant {
    fn from(cli_variant: CliHtmlVariant) -> Self {
        match cli_variant {
            CliHtmlVariant::Chat => HtmlVariant::Chat,
            CliHtmlVariant::Reveal => HtmlVariant::Reveal,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add the speaker detected from each verse's opening phrase
    AddSpeaker {
        /// Overwrite stored speakers that differ from the detected one
        #[arg(long)]
        fix_mismatches: bool,
    },

    /// Recompute every speaker by carry-forward in verse order
    RecomputeSpeakers,

    /// Rewrite records that lack a trailing newline
    FixNewlines,

    /// Render the corpus as a chat-style HTML page
    RenderHtml(RenderHtmlArgs),

    /// Render the corpus as a Markdown list
    RenderMd {
        /// Output file (defaults to the configured path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate shell completions for slokwai
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct RenderHtmlArgs {
    /// Page layout
    #[arg(long, value_enum, default_value = "chat")]
    variant: CliHtmlVariant,

    /// Hide the principal speaker's text until clicked
    #[arg(long)]
    conceal: bool,

    /// Output file (defaults to the configured path)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// slokwai - verse corpus annotation and rendering
///
/// Annotates a directory of verse records with speakers and renders the
/// commentary as static HTML and Markdown documents.
#[derive(Parser, Debug)]
#[command(name = "slokwai")]
#[command(version)]
#[command(about = "Annotate and render a verse corpus")]
#[command(long_about = "slokwai annotates verse records with their speaker and renders the corpus.

EXAMPLES:
    slokwai add-speaker                        # Insert missing speakers, report conflicts
    slokwai add-speaker --fix-mismatches       # Also correct conflicting speakers
    slokwai recompute-speakers                 # Carry speakers forward in verse order
    slokwai --slok-dir data/slok render-html   # Grouped chat page
    slokwai render-html --variant reveal       # Ungrouped page with hidden answers
    slokwai render-md -o gita.md               # Markdown list
    slokwai completions bash > slokwai.bash    # Generate bash completions

CONFIGURATION:
    Settings are read from slokwai.json in the install root when present.
    Relative default and configured paths resolve against the install root,
    which is the executable's directory unless --home or SLOKWAI_HOME is set.
    Paths given on the command line are used as is.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Directory containing the verse records
    #[arg(short, long, global = true)]
    slok_dir: Option<PathBuf>,

    /// Configuration file path (defaults to slokwai.json in the install root)
    #[arg(short, long = "config", global = true)]
    config_path: Option<PathBuf>,

    /// Install root for the corpus, outputs and config file
    #[arg(long, global = true, env = "SLOKWAI_HOME")]
    home: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI color for log level
    fn decoration_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌ ", "1;31"),
            Level::Warn => ("🚧 ", "1;33"),
            Level::Info => ("", "1;32"),
            Level::Debug => ("🔍 ", "1;36"),
            Level::Trace => ("📋 ", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::decoration_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {}{}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Info until the configuration is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(level) = cli.log_level {
        log::set_max_level(LogLevel::from(level).to_level_filter());
    }

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "slokwai", &mut std::io::stdout());
        return Ok(());
    }

    let home = match cli.home {
        Some(home) => home,
        None => app_config::install_root()?,
    };
    let config_path = cli
        .config_path
        .unwrap_or_else(|| home.join(app_config::DEFAULT_CONFIG_FILE));

    let mut config = Config::load_or_default(&config_path)?;
    config.resolve_relative_to(&home);
    if let Some(slok_dir) = cli.slok_dir {
        config.slok_dir = slok_dir;
    }
    match cli.log_level {
        Some(level) => config.log_level = level.into(),
        None => log::set_max_level(config.log_level.to_level_filter()),
    }

    let controller = Controller::with_config(config)?;

    match cli.command {
        Commands::AddSpeaker { fix_mismatches } => {
            controller.add_speakers(fix_mismatches)?;
        }
        Commands::RecomputeSpeakers => {
            controller.recompute_speakers()?;
        }
        Commands::FixNewlines => {
            controller.fix_newlines()?;
        }
        Commands::RenderHtml(args) => {
            let options = HtmlOptions {
                variant: args.variant.into(),
                conceal_principal: args.conceal,
                output: args.output,
            };
            controller.render_html(&options)?;
        }
        Commands::RenderMd { output } => {
            controller.render_markdown(output.as_deref())?;
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}
