// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::session::PlayerSession;
use crate::timecode::parse_timecode;

mod app_config;
mod block_parser;
mod errors;
mod file_utils;
mod format_reader;
mod language_utils;
mod payload;
mod session;
mod synchronizer;
mod timecode;
mod track;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Merge two subtitle files into one bilingual SRT (default command)
    #[command(alias = "merge")]
    Merge(MergeArgs),

    /// Print the two display lines for a playback position
    Display(DisplayArgs),

    /// Generate shell completions for dualsub
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct MergeArgs {
    /// Primary-language subtitle file (drives the merge)
    #[arg(value_name = "PRIMARY")]
    primary: PathBuf,

    /// Secondary-language subtitle file
    #[arg(value_name = "SECONDARY")]
    secondary: PathBuf,

    /// Output path (default: <primary stem>.dual.srt next to the primary)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Tolerance window for matching cues across tracks, in milliseconds
    #[arg(short, long)]
    tolerance_ms: Option<u64>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct DisplayArgs {
    /// Primary-language subtitle file
    #[arg(value_name = "PRIMARY")]
    primary: PathBuf,

    /// Secondary-language subtitle file
    #[arg(value_name = "SECONDARY")]
    secondary: PathBuf,

    /// Playback position as a timecode (e.g. '00:01:23,500' or '01:23.5')
    #[arg(long)]
    at: String,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// dualsub - Bilingual subtitle merge and synchronization
///
/// Parses SRT and WebVTT subtitle files, merges two language tracks into
/// one bilingual cue stream under a time-tolerance window, and resolves
/// the active cues for a playback position.
#[derive(Parser, Debug)]
#[command(name = "dualsub")]
#[command(version = "1.0.0")]
#[command(about = "Bilingual subtitle merge and synchronization tool")]
#[command(long_about = "dualsub parses SRT and WebVTT subtitle files and merges two language
tracks into one bilingual cue stream.

EXAMPLES:
    dualsub movie.ru.srt movie.en.vtt           # Merge into movie.ru.dual.srt
    dualsub -o out.srt movie.ru.srt movie.en.srt
    dualsub -t 500 movie.ru.srt movie.en.srt    # Wider tolerance window
    dualsub display movie.ru.srt movie.en.srt --at 00:01:23,500
    dualsub completions bash > dualsub.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Primary-language subtitle file (drives the merge)
    #[arg(value_name = "PRIMARY")]
    primary: Option<PathBuf>,

    /// Secondary-language subtitle file
    #[arg(value_name = "SECONDARY")]
    secondary: Option<PathBuf>,

    /// Output path (default: <primary stem>.dual.srt next to the primary)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Tolerance window for matching cues across tracks, in milliseconds
    #[arg(short, long)]
    tolerance_ms: Option<u64>,

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
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "dualsub", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Merge(args)) => run_merge(args),
        Some(Commands::Display(args)) => run_display(args),
        None => {
            // Default behavior - use top-level args as an implicit merge
            let primary = cli
                .primary
                .ok_or_else(|| anyhow!("PRIMARY and SECONDARY are required when no subcommand is specified"))?;
            let secondary = cli
                .secondary
                .ok_or_else(|| anyhow!("SECONDARY is required when no subcommand is specified"))?;

            run_merge(MergeArgs {
                primary,
                secondary,
                output: cli.output,
                tolerance_ms: cli.tolerance_ms,
                config_path: cli.config_path,
                log_level: cli.log_level,
            })
        }
    }
}

/// Load the configuration, creating a default file when missing, and apply
/// a command-line log level override.
fn load_config(config_path: &str, log_level: &Option<CliLogLevel>) -> Result<Config> {
    if let Some(cmd_log_level) = log_level {
        log::set_max_level(cmd_log_level.clone().into());
    }

    let config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        config.save_to_file(config_path)?;
        config
    };

    // Without a CLI override, the config file decides the log level
    if log_level.is_none() {
        let filter = match config.log_level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        };
        log::set_max_level(filter);
    }

    Ok(config)
}

fn read_track_from_file(path: &Path) -> Result<track::Track> {
    let raw = FileManager::read_subtitle_file(path)?;
    let hint = FileManager::extension_hint(path);
    let parsed = format_reader::read_track(&raw, &hint);
    if parsed.is_empty() {
        warn!("No subtitles found in {}", path.display());
    }
    Ok(parsed)
}

fn run_merge(options: MergeArgs) -> Result<()> {
    let mut config = load_config(&options.config_path, &options.log_level)?;

    if let Some(tolerance_ms) = options.tolerance_ms {
        config.sync.tolerance_ms = tolerance_ms;
    }

    let primary = read_track_from_file(&options.primary)?;
    let secondary = read_track_from_file(&options.secondary)?;

    info!(
        "Merging {} primary cue(s) with {} secondary cue(s), tolerance {} ms",
        primary.len(),
        secondary.len(),
        config.sync.tolerance_ms
    );

    let merged = synchronizer::merge(&primary, &secondary, config.sync.tolerance_ms);
    let matched = merged.iter().filter(|cue| cue.has_secondary()).count();

    let output_path = options
        .output
        .unwrap_or_else(|| FileManager::merged_output_path(&options.primary));
    FileManager::write_merged_srt(&output_path, &merged)
        .with_context(|| format!("Failed to write merged subtitles to {}", output_path.display()))?;

    info!(
        "Wrote {} merged cue(s) ({} with a secondary line) to {}",
        merged.len(),
        matched,
        output_path.display()
    );

    Ok(())
}

fn run_display(options: DisplayArgs) -> Result<()> {
    let config = load_config(&options.config_path, &options.log_level)?;

    let time_ms = parse_timecode(&options.at)
        .ok_or_else(|| anyhow!("Invalid timecode: {}", options.at))?;

    let session = PlayerSession::new(&config);
    session.install(session::TrackSlot::Primary, read_track_from_file(&options.primary)?);
    session.install(session::TrackSlot::Secondary, read_track_from_file(&options.secondary)?);

    let (first, second) = session.display_lines(time_ms);
    println!("{}", first);
    println!("{}", second);

    Ok(())
}
