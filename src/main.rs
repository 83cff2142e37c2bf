// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use launchgate::app_config::{self, Config};
use launchgate::app_controller::Controller;
use launchgate::submission::HttpSubmitter;
use launchgate::template::{self, TRAINING_TEMPLATE};

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
    /// Validate a configuration file or every configuration file in a directory
    Validate {
        /// Configuration file or directory to validate
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,
    },

    /// Validate a configuration file and submit it as a training job
    Submit {
        /// Configuration file to submit
        #[arg(value_name = "CONFIG_FILE")]
        input_file: PathBuf,

        /// Id of the initiating user (must be in the team access list)
        #[arg(short, long)]
        user: String,

        /// Id of the target project
        #[arg(short, long)]
        project: String,
    },

    /// Print the reference training configuration, or write it to a file
    Template {
        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Force overwrite of an existing output file
        #[arg(short, long)]
        force_overwrite: bool,
    },

    /// Generate shell completions for launchgate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// launchgate - Training configuration gate
///
/// Checks training job configurations for the required sections before
/// submitting them to the orchestration server.
#[derive(Parser, Debug)]
#[command(name = "launchgate")]
#[command(version)]
#[command(about = "Validate and submit training job configurations")]
#[command(long_about = "launchgate checks YAML or pretty-printed JSON training configurations for the
sections the orchestrator requires, then submits them as training jobs.

EXAMPLES:
    launchgate validate train.yaml                      # Validate one file
    launchgate validate configs/                        # Validate every .yaml/.yml/.json file
    launchgate submit train.yaml -u u1 -p p1            # Validate and submit
    launchgate template -o train.yaml                   # Write the reference template
    launchgate completions bash > launchgate.bash       # Generate bash completions

REQUIRED KEYS:
    model, train (with data), sweeper (with study_name)

CONFIGURATION:
    Configuration is stored in launchgate.json by default. It holds the upload
    endpoint and the registered users and projects. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "launchgate.json")]
    config_path: String,

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
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and emoji for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "❌ "),
            Level::Warn => ("1;33", "🚧 "),
            Level::Info => ("1;32", " "),
            Level::Debug => ("1;36", "🔍 "),
            Level::Trace => ("1;35", "📋 "),
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
            let (color, emoji) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger with everything enabled; the effective level is
    // applied through set_max_level once the config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(cmd_log_level) = &cli.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "launchgate", &mut std::io::stdout());
            Ok(())
        }
        Commands::Template { output: None, .. } => {
            print!("{}", TRAINING_TEMPLATE);
            Ok(())
        }
        Commands::Template { output: Some(output), force_overwrite } => {
            template::write_template(&output, force_overwrite)
        }
        Commands::Validate { input_path } => {
            let controller = load_controller(&cli.config_path, &cli.log_level)?;
            let summary = controller.validate_path(&input_path).await?;

            for outcome in &summary.outcomes {
                println!("{}", outcome.render());
            }

            if summary.all_accepted() {
                Ok(())
            } else {
                Err(anyhow!(
                    "{} of {} configuration file(s) rejected",
                    summary.rejected_count(),
                    summary.outcomes.len()
                ))
            }
        }
        Commands::Submit { input_file, user, project } => {
            let controller = load_controller(&cli.config_path, &cli.log_level)?;
            let submitter = HttpSubmitter::from_config(&controller.config().submission)?;

            let receipt = controller.submit(&input_file, &user, &project, &submitter).await?;
            if let Some(message) = &receipt.message {
                info!("{}", message);
            }
            println!("{}", receipt.id);
            Ok(())
        }
    }
}

// Load or create configuration, then build the controller
fn load_controller(config_path: &str, cli_log_level: &Option<CliLogLevel>) -> Result<Controller> {
    let mut config = Config::load_or_create(config_path)?;

    match cli_log_level {
        // Command line level wins over the config file
        Some(level) => config.log_level = level.clone().into(),
        None => log::set_max_level(config.log_level.to_level_filter()),
    }

    Controller::with_config(config)
}
