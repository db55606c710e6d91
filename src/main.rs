// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::Path;

use signspeak::app_config::{Config, LogLevel};
use signspeak::preferences::ColorScheme;
use signspeak::translation::{Language, TranslationRecord};
use signspeak::Controller;

/// CLI wrapper for Language to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLanguage {
    Fr,
    En,
}

impl From<CliLanguage> for Language {
    fn from(cli_language: CliLanguage) -> Self {
        match cli_language {
            CliLanguage::Fr => Language::Fr,
            CliLanguage::En => Language::En,
        }
    }
}

/// CLI wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
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

fn level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

/// CLI wrapper for ColorScheme to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliColorScheme {
    Light,
    Dark,
}

impl From<CliColorScheme> for ColorScheme {
    fn from(cli_scheme: CliColorScheme) -> Self {
        match cli_scheme {
            CliColorScheme::Light => ColorScheme::Light,
            CliColorScheme::Dark => ColorScheme::Dark,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a phrase into its gesture description
    Translate {
        /// Phrase to translate
        #[arg(value_name = "TEXT")]
        text: String,

        /// Language the phrase is in (config default when omitted)
        #[arg(short, long, value_enum)]
        language: Option<CliLanguage>,
    },

    /// Manage the translation history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Log in with an email/password pair
    Login {
        /// Account email
        email: String,
        /// Account password
        password: String,
    },

    /// Register a new account and log in
    Register {
        /// Account email
        email: String,
        /// Account password
        password: String,
        /// Display name
        name: String,
    },

    /// Log out, clearing the persisted session
    Logout,

    /// Show the current session, if any
    Whoami,

    /// Manage the color scheme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Generate shell completions for signspeak
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
enum HistoryAction {
    /// List recorded translations, most recent first
    List,
    /// Remove one record by id
    Remove {
        /// Record id to remove
        id: String,
    },
    /// Delete the whole history
    Clear,
}

#[derive(Subcommand, Debug)]
enum ThemeAction {
    /// Show the current color scheme
    Get,
    /// Set the color scheme
    Set {
        /// Scheme to persist
        #[arg(value_enum)]
        scheme: CliColorScheme,
    },
    /// Flip between light and dark
    Toggle,
}

/// signspeak - phrase to sign-language gesture translation
///
/// Translates short phrases into gesture descriptions using a built-in
/// lexicon, keeps a bounded local history, and manages a mock login session.
#[derive(Parser, Debug)]
#[command(name = "signspeak")]
#[command(version = "1.0.0")]
#[command(about = "Phrase to sign-language gesture translation")]
#[command(long_about = "signspeak translates short phrases into sign-language gesture \
descriptions using a built-in lexicon and keeps the 5 most recent translations locally.

EXAMPLES:
    signspeak translate bonjour              # Translate using the config default language
    signspeak translate hello -l en          # Translate an English phrase
    signspeak history list                   # Show the recorded translations
    signspeak login test@test.com password   # Start a mock session
    signspeak theme toggle                   # Flip the persisted color scheme
    signspeak completions bash > signspeak.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
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

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
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
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
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

    // Completions need no config or storage
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "signspeak", &mut std::io::stdout());
        return Ok(());
    }

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        let level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&level));
    }

    // Load or create configuration
    let config = load_or_create_config(&cli.config_path)?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let controller = Controller::new(config).await?;

    run_command(&controller, cli.command).await
}

/// Load the config file, creating a default one on first run
fn load_or_create_config(config_path: &str) -> Result<Config> {
    if Path::new(config_path).exists() {
        Config::from_file(config_path)
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        config
            .save(config_path)
            .context("Failed to write default config")?;

        Ok(config)
    }
}

async fn run_command(controller: &Controller, command: Commands) -> Result<()> {
    match command {
        Commands::Translate { text, language } => {
            match controller.translate(&text, language.map(Into::into)).await? {
                Some(record) => print_record(&record),
                None => println!("Nothing to translate: input is empty."),
            }
        }

        Commands::History { action } => match action {
            HistoryAction::List => {
                let records = controller.history().list().await;
                if records.is_empty() {
                    println!("History is empty.");
                } else {
                    for record in &records {
                        print_history_line(record);
                    }
                }
            }
            HistoryAction::Remove { id } => {
                controller.history().remove(&id).await?;
                println!("Removed {} (if it existed).", id);
            }
            HistoryAction::Clear => {
                controller.history().clear().await?;
                println!("History cleared.");
            }
        },

        Commands::Login { email, password } => {
            if controller.session().login(&email, &password).await? {
                println!("Logged in as {}.", email);
            } else {
                println!("Login failed: unknown email or wrong password.");
            }
        }

        Commands::Register { email, password, name } => {
            if controller.session().register(&email, &password, &name).await? {
                println!("Registered and logged in as {}.", email);
            } else {
                println!("Registration failed: email already in use.");
            }
        }

        Commands::Logout => {
            controller.session().logout().await?;
            println!("Logged out.");
        }

        Commands::Whoami => match controller.session().current_user().await {
            Some(user) => println!("{} <{}>", user.display_name, user.email),
            None => println!("Not logged in."),
        },

        Commands::Theme { action } => match action {
            ThemeAction::Get => {
                println!("{}", controller.preferences().color_scheme().await);
            }
            ThemeAction::Set { scheme } => {
                let scheme: ColorScheme = scheme.into();
                controller.preferences().set_color_scheme(scheme).await?;
                println!("Color scheme set to {}.", scheme);
            }
            ThemeAction::Toggle => {
                let scheme = controller.preferences().toggle_color_scheme().await?;
                println!("Color scheme set to {}.", scheme);
            }
        },

        Commands::Completions { .. } => unreachable!("handled before config load"),
    }

    Ok(())
}

fn print_record(record: &TranslationRecord) {
    println!("{}  {}", record.result.emoji, record.result.description);
    if let Some(gestures) = &record.result.gestures {
        for (i, step) in gestures.iter().enumerate() {
            println!("  {}. {}", i + 1, step);
        }
    }
}

fn print_history_line(record: &TranslationRecord) {
    let when = chrono::DateTime::from_timestamp_millis(record.created_at)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| record.created_at.to_string());

    println!(
        "[{}] {} \"{}\" ({}) -> {} {}",
        when,
        &record.id[..8.min(record.id.len())],
        record.input_text,
        record.language,
        record.result.emoji,
        record.result.description
    );
}
