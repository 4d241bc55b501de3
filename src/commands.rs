use crate::assistant::WorkflowAssistant;
use crate::config::Config;
use crate::llm::{AnalysisRequest, analyze};
use crate::log_debug;
use crate::prompts::CATALOG;
use crate::providers::Provider;
use crate::ui;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Read;
use std::path::Path;

/// Handle the 'analyze' command
pub async fn handle_analyze_command(
    file: &str,
    provider: &str,
    language: Option<String>,
    details: Option<String>,
    prompt_file: Option<String>,
    output: Option<String>,
) -> Result<()> {
    let provider: Provider = provider.parse()?;

    let document = read_document(file)?;
    log_debug!("Read workflow document ({} bytes)", document.len());

    let custom_prompt = match prompt_file {
        Some(path) => Some(
            std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read prompt file: {path}"))?,
        ),
        None => None,
    };

    let config = Config::from_env();
    let request = AnalysisRequest {
        provider,
        document,
        details,
        language,
        custom_prompt,
    };

    let spinner = ui::create_spinner(&format!("Analyzing workflow with {provider}..."));
    let result = analyze(&config, &request).await;
    spinner.finish_and_clear();

    let result = result?;

    match output {
        Some(path) => {
            std::fs::write(&path, &result.markdown)
                .with_context(|| format!("Failed to write output file: {path}"))?;
            ui::print_success(&format!("Documentation written to {path}"));
        }
        None => {
            println!("{}", result.markdown);
        }
    }

    Ok(())
}

/// Read the workflow document from a path, or stdin for '-'
fn read_document(file: &str) -> Result<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read workflow from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read workflow file: {file}"))
    }
}

/// Handle the 'search' command
pub fn handle_search_command(query: &str, limit: usize, db: &str) -> Result<()> {
    let assistant = WorkflowAssistant::open(Path::new(db))
        .with_context(|| format!("Failed to open workflow catalog: {db}"))?;

    let answer = assistant.query(query, limit)?;

    ui::print_bordered_content(&answer.response);

    if !answer.workflows.is_empty() {
        ui::print_newline();
        for workflow in &answer.workflows {
            let status = if workflow.active {
                "active".green()
            } else {
                "inactive".yellow()
            };
            ui::print_message(&format!(
                "  {} [{}] {} nodes, {} trigger ({})",
                workflow.name.bold(),
                status,
                workflow.node_count,
                workflow.trigger_type,
                workflow.complexity
            ));
        }
    }

    if !answer.suggestions.is_empty() {
        ui::print_newline();
        ui::print_info("You might also try:");
        for suggestion in &answer.suggestions {
            ui::print_message(&format!("  • {suggestion}"));
        }
    }

    ui::print_newline();
    ui::print_message(&format!(
        "{} {:.0}%",
        "Confidence:".dimmed(),
        answer.confidence * 100.0
    ));

    Ok(())
}

/// Handle the 'providers' command
pub fn handle_providers_command() -> Result<()> {
    let config = Config::from_env();

    ui::print_info("Supported LLM providers:");
    ui::print_newline();

    for (provider, configured) in config.available_providers() {
        let status = if configured {
            "configured".green().bold()
        } else {
            "no API key".yellow()
        };
        let key_hint = provider.api_key_envs().join(" or ");
        ui::print_message(&format!(
            "  {:10} [{status}]  model: {}  ({key_hint})",
            provider.name().bold(),
            config.effective_model(provider)
        ));
    }

    Ok(())
}

/// Handle the 'languages' command
pub fn handle_languages_command() -> Result<()> {
    ui::print_info("Supported output languages:");
    ui::print_newline();

    for entry in CATALOG {
        ui::print_message(&format!(
            "  {:20} aliases: {}",
            entry.language.bold(),
            entry.aliases.join(", ")
        ));
    }

    ui::print_newline();
    ui::print_message(
        "Other languages are accepted; the documentation prompt falls back to English \
         with an explicit translation directive.",
    );

    Ok(())
}
