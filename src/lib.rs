//! Flowdoc - AI-powered workflow documentation generator
//!
//! This library analyzes n8n workflow exports with an LLM provider of your
//! choice and produces structured Markdown documentation. It also ships a
//! small keyword-search assistant over a local workflow catalog.

#![allow(clippy::uninlined_format_args)] // Style preference
#![allow(clippy::items_after_statements)] // Locally-scoped use statements are fine

pub mod assistant;
pub mod cli;
pub mod commands;
pub mod config;
pub mod llm;
pub mod logger;
pub mod prompts;
pub mod providers;
pub mod ui;

// Re-export important structs and functions for easier testing
pub use config::Config;
pub use llm::{AnalysisRequest, AnalysisResult, AnalyzeError, analyze};
pub use prompts::resolve_system_prompt;
pub use providers::{Provider, ProviderError};
