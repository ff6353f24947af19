// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod alignment;
mod app_config;
mod app_controller;
mod collaborators;
mod errors;
mod file_utils;
mod language_utils;
mod lesson;
mod segmenter;
mod translit;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a Kannada lesson from Japanese text (default command)
    Learn(LearnArgs),

    /// Generate shell completions for kavaja
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct LearnArgs {
    /// Japanese text to build a lesson from
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read the input text from a file instead
    #[arg(short, long, conflicts_with = "text")]
    input_file: Option<PathBuf>,

    /// Output directory for lesson artifacts
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing lesson artifacts
    #[arg(short, long)]
    force_overwrite: bool,

    /// Source language code (e.g. 'ja')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g. 'kn')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// kavaja - Learn Kannada via Japanese
///
/// Translates Japanese text to Kannada, renders it in Latin script and
/// English phonetics, synthesizes audio, and builds word-level flashcards.
#[derive(Parser, Debug)]
#[command(name = "kavaja")]
#[command(version = "0.1.0")]
#[command(about = "Japanese to Kannada learning lessons with audio flashcards")]
#[command(long_about = "kavaja translates Japanese text to Kannada and builds a learning lesson:
the translation, its Latin transliteration (ISO 15919), English phonetics
(ITRANS), sentence audio, and word-level flashcards with per-word audio.

EXAMPLES:
    kavaja \"私は学生です\"                   # Build a lesson in ./lesson
    kavaja -o ./out \"私は学生です\"          # Choose the output directory
    kavaja -i input.txt                     # Read the input from a file
    kavaja -f \"私は学生です\"                # Overwrite an existing lesson
    kavaja --log-level debug \"こんにちは\"   # Verbose pipeline logging
    kavaja completions bash > kavaja.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Japanese text to build a lesson from
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read the input text from a file instead
    #[arg(short, long, conflicts_with = "text")]
    input_file: Option<PathBuf>,

    /// Output directory for lesson artifacts
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing lesson artifacts
    #[arg(short, long)]
    force_overwrite: bool,

    /// Source language code (e.g. 'ja')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g. 'kn')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
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
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
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
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "kavaja", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Learn(args)) => run_learn(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let learn_args = LearnArgs {
                text: cli.text,
                input_file: cli.input_file,
                output_dir: cli.output_dir,
                force_overwrite: cli.force_overwrite,
                source_language: cli.source_language,
                target_language: cli.target_language,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_learn(learn_args).await
        }
    }
}

async fn run_learn(options: LearnArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(to_level_filter(cmd_log_level.clone().into()));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(source_lang) = &options.source_language {
        config.source_language = source_lang.clone();
    }

    if let Some(target_lang) = &options.target_language {
        config.target_language = target_lang.clone();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(to_level_filter(config.log_level.clone()));
    }

    // Resolve the input text: positional argument or input file
    let text = match (&options.text, &options.input_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => file_utils::FileManager::read_to_string(path)?,
        (None, None) => {
            return Err(anyhow!("TEXT or --input-file is required"));
        }
    };

    let output_dir = options
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.directory));

    // Create controller and build the lesson
    let controller = Controller::with_config(config)?;
    if let Some(built) = controller
        .run(&text, output_dir, options.force_overwrite)
        .await?
    {
        print!("{}", built.render());
    }

    Ok(())
}

fn to_level_filter(level: app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
