use crate::commands;
use crate::log_debug;
use crate::providers::Provider;
use crate::ui;
use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, crate_version};
use colored::Colorize;

const LOG_FILE: &str = "flowdoc-debug.log";

/// CLI structure defining the available commands and global arguments
#[derive(Parser)]
#[command(
    author,
    version = crate_version!(),
    about = "Flowdoc: AI-powered workflow documentation generator",
    long_about = "Flowdoc analyzes n8n workflow exports and produces structured Markdown documentation using your choice of LLM provider.",
    disable_version_flag = true,
    after_help = get_dynamic_help(),
    styles = get_styles(),
)]
pub struct Cli {
    /// Subcommands available for the CLI
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log debug messages to a file
    #[arg(
        short = 'l',
        long = "log",
        global = true,
        help = "Log debug messages to a file"
    )]
    pub log: bool,

    /// Specify a custom log file path
    #[arg(
        long = "log-file",
        global = true,
        help = "Specify a custom log file path"
    )]
    pub log_file: Option<String>,

    /// Suppress non-essential output (spinners, status messages, etc.)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress non-essential output"
    )]
    pub quiet: bool,

    /// Display the version
    #[arg(
        short = 'v',
        long = "version",
        global = true,
        help = "Display the version"
    )]
    pub version: bool,
}

/// Enumeration of available subcommands
#[derive(Subcommand)]
#[command(subcommand_negates_reqs = true)]
#[command(subcommand_precedence_over_arg = true)]
pub enum Commands {
    /// Analyze a workflow export and generate documentation
    #[command(
        about = "Generate documentation for a workflow using AI",
        long_about = "Read an n8n workflow export (JSON) and generate structured Markdown documentation using the selected LLM provider.",
        after_help = get_dynamic_help()
    )]
    Analyze {
        /// Path to the workflow JSON file ('-' reads from stdin)
        #[arg(help = "Path to the workflow JSON file ('-' reads from stdin)")]
        file: String,

        /// LLM provider to use
        #[arg(
            short,
            long,
            default_value = "openai",
            help = "LLM provider to use (openai, deepseek, claude, grok, gemini)"
        )]
        provider: String,

        /// Output language for the documentation
        #[arg(
            short = 'L',
            long,
            help = "Output language for the documentation (e.g. 'French (FR)', 'spanish', 'pt-br')"
        )]
        language: Option<String>,

        /// Free-text notes about the workflow, included in the analysis
        #[arg(short, long, help = "Free-text notes about the workflow")]
        details: Option<String>,

        /// Path to a file containing a custom system prompt
        #[arg(
            long,
            help = "Path to a file containing a custom system prompt (bypasses the language catalog)"
        )]
        prompt_file: Option<String>,

        /// Write the generated Markdown to a file instead of stdout
        #[arg(short, long, help = "Write the generated Markdown to a file")]
        output: Option<String>,
    },

    /// Search the local workflow catalog
    #[command(
        about = "Search the local workflow catalog",
        long_about = "Keyword search over a local SQLite workflow catalog, with intent-aware filtering and suggestions."
    )]
    Search {
        /// Free-text search query
        #[arg(help = "Free-text search query")]
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = 5, help = "Maximum number of results")]
        limit: usize,

        /// Path to the workflow catalog database
        #[arg(
            long,
            default_value = "workflows.db",
            help = "Path to the workflow catalog database"
        )]
        db: String,
    },

    /// List supported LLM providers and their configuration status
    #[command(about = "List supported LLM providers and their configuration status")]
    Providers,

    /// List supported output languages
    #[command(about = "List supported output languages")]
    Languages,
}

/// Define custom styles for Clap
fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default().bold())
        .usage(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Green.on_default().bold())
        .placeholder(AnsiColor::Yellow.on_default())
        .valid(AnsiColor::Blue.on_default().bold())
        .invalid(AnsiColor::Red.on_default().bold())
        .error(AnsiColor::Red.on_default().bold())
}

/// Parse the command-line arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Generate dynamic help including available LLM providers
fn get_dynamic_help() -> String {
    let providers_list = Provider::all_names()
        .iter()
        .map(|p| format!("{}", p.bold()))
        .collect::<Vec<_>>()
        .join(" • ");

    format!("\nAvailable LLM Providers: {providers_list}")
}

/// Main function to parse arguments and handle the command
pub async fn main() -> anyhow::Result<()> {
    let cli = parse_args();

    if cli.version {
        ui::print_version(crate_version!());
        return Ok(());
    }

    if cli.log {
        crate::logger::enable_logging();
        let log_file = cli.log_file.as_deref().unwrap_or(LOG_FILE);
        crate::logger::set_log_file(log_file)?;
        log_debug!("Debug logging enabled, writing to {}", log_file);
    } else {
        crate::logger::disable_logging();
    }

    // Set quiet mode in the UI module
    if cli.quiet {
        crate::ui::set_quiet_mode(true);
    }

    if let Some(command) = cli.command {
        handle_command(command).await
    } else {
        // If no subcommand is provided, print the help
        let _ = Cli::parse_from(["flowdoc", "--help"]);
        Ok(())
    }
}

/// Handle the command based on parsed arguments
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Analyze {
            file,
            provider,
            language,
            details,
            prompt_file,
            output,
        } => {
            log_debug!(
                "Handling 'analyze' command with file: {}, provider: {}, language: {:?}",
                file,
                provider,
                language
            );
            commands::handle_analyze_command(
                &file,
                &provider,
                language,
                details,
                prompt_file,
                output,
            )
            .await
        }
        Commands::Search { query, limit, db } => {
            log_debug!(
                "Handling 'search' command with query: {}, limit: {}, db: {}",
                query,
                limit,
                db
            );
            commands::handle_search_command(&query, limit, &db)
        }
        Commands::Providers => commands::handle_providers_command(),
        Commands::Languages => commands::handle_languages_command(),
    }
}
