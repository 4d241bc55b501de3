//! Workflow discovery assistant.
//!
//! Keyword search over the local workflow catalog: extracts recognizable
//! terms from a free-text query, narrows by detected intent, and builds a
//! short natural-language answer with suggestions and a confidence score.

use crate::log_debug;
use rusqlite::{Connection, params_from_iter};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Known automation vocabulary, grouped by category. Matching a term adds it
/// as a search keyword.
const AUTOMATION_TERMS: &[(&str, &[&str])] = &[
    ("email", &["email", "gmail", "mail"]),
    (
        "social",
        &["twitter", "facebook", "instagram", "linkedin", "social"],
    ),
    ("data", &["data", "database", "spreadsheet", "csv", "excel"]),
    ("ai", &["ai", "openai", "chatgpt", "artificial", "intelligence"]),
    (
        "notification",
        &["notification", "alert", "slack", "telegram", "discord"],
    ),
    (
        "automation",
        &["automation", "workflow", "process", "automate"],
    ),
    ("integration", &["integration", "connect", "sync", "api"]),
];

/// Service names matched verbatim in queries
const KNOWN_SERVICES: &[&str] = &[
    "slack",
    "telegram",
    "openai",
    "google",
    "microsoft",
    "shopify",
    "airtable",
];

/// Detected intent behind a search query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Automation,
    Integration,
    Manual,
    Ai,
    General,
}

/// A workflow row from the local catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowSummary {
    pub name: String,
    pub description: String,
    pub trigger_type: String,
    pub complexity: String,
    pub node_count: i64,
    pub active: bool,
    pub integrations: Vec<String>,
    pub tags: Vec<String>,
}

/// Result of one assistant query
#[derive(Debug, Clone, Serialize)]
pub struct AssistantResponse {
    pub response: String,
    pub workflows: Vec<WorkflowSummary>,
    pub suggestions: Vec<String>,
    pub confidence: f64,
}

/// Search errors surface the underlying database failure
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("workflow database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Read-only search assistant over the workflow catalog
pub struct WorkflowAssistant {
    conn: Connection,
}

impl WorkflowAssistant {
    /// Opens the catalog database at the given path.
    pub fn open(db_path: &Path) -> Result<Self, AssistantError> {
        let conn = Connection::open(db_path)?;
        Ok(Self { conn })
    }

    /// Wraps an existing connection (used by tests with scratch databases).
    pub fn with_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Answers a free-text query: search, summary, suggestions, confidence.
    pub fn query(&self, message: &str, limit: usize) -> Result<AssistantResponse, AssistantError> {
        let workflows = self.search(message, limit)?;
        let response = generate_response(&workflows);
        let suggestions = suggestions_for(message);
        let confidence = confidence_for(message, &workflows);

        Ok(AssistantResponse {
            response,
            workflows,
            suggestions,
            confidence,
        })
    }

    /// Keyword search with intent-based trigger filtering. Keywords bind as
    /// LIKE parameters; active workflows sort first, then larger ones.
    pub fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<WorkflowSummary>, AssistantError> {
        let keywords = extract_keywords(query);
        let intent = detect_intent(query);
        log_debug!(
            "Workflow search: {} keywords, intent {:?}",
            keywords.len(),
            intent
        );

        // Nothing recognizable in the query means nothing to match
        if keywords.is_empty() {
            return Ok(Vec::new());
        }

        let mut predicates = Vec::new();
        let mut params: Vec<String> = Vec::new();
        for keyword in &keywords {
            predicates.push("(name LIKE ? OR description LIKE ?)");
            let pattern = format!("%{keyword}%");
            params.push(pattern.clone());
            params.push(pattern);
        }
        let keyword_clause = predicates.join(" OR ");

        let intent_clause = match intent {
            Intent::Automation => " AND trigger_type IN ('Scheduled', 'Complex')",
            Intent::Integration => " AND trigger_type = 'Webhook'",
            Intent::Manual => " AND trigger_type = 'Manual'",
            Intent::Ai | Intent::General => "",
        };

        let sql = format!(
            "SELECT name, description, trigger_type, complexity, node_count, active, \
                    integrations, tags \
             FROM workflows \
             WHERE ({keyword_clause}){intent_clause} \
             ORDER BY CASE WHEN active = 1 THEN 1 ELSE 2 END, node_count DESC \
             LIMIT {limit}"
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(params.iter()), |row| {
            let integrations: String = row.get(6)?;
            let tags: String = row.get(7)?;
            Ok(WorkflowSummary {
                name: row.get(0)?,
                description: row.get(1)?,
                trigger_type: row.get(2)?,
                complexity: row.get(3)?,
                node_count: row.get(4)?,
                active: row.get::<_, i64>(5)? != 0,
                integrations: parse_json_list(&integrations),
                tags: parse_json_list(&tags),
            })
        })?;

        let mut workflows = Vec::new();
        for row in rows {
            workflows.push(row?);
        }
        Ok(workflows)
    }
}

/// JSON-array columns default to empty on null or malformed content
fn parse_json_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    serde_json::from_str(raw).unwrap_or_default()
}

/// Extracts recognized terms and service names from a query.
pub fn extract_keywords(query: &str) -> Vec<String> {
    let query_lower = query.to_lowercase();
    let mut keywords = Vec::new();

    for (_, terms) in AUTOMATION_TERMS {
        for term in *terms {
            if query_lower.contains(term) && !keywords.iter().any(|k| k == term) {
                keywords.push((*term).to_string());
            }
        }
    }

    for service in KNOWN_SERVICES {
        if query_lower.contains(service) && !keywords.iter().any(|k| k == service) {
            keywords.push((*service).to_string());
        }
    }

    keywords
}

/// Classifies the query intent from characteristic phrasing.
pub fn detect_intent(query: &str) -> Intent {
    let query_lower = query.to_lowercase();
    let contains_any =
        |words: &[&str]| words.iter().any(|word| query_lower.contains(word));

    if contains_any(&["automate", "schedule", "recurring", "daily", "weekly"]) {
        Intent::Automation
    } else if contains_any(&["connect", "integrate", "sync", "webhook"]) {
        Intent::Integration
    } else if contains_any(&["manual", "trigger", "button", "click"]) {
        Intent::Manual
    } else if contains_any(&["ai", "chat", "assistant", "intelligent"]) {
        Intent::Ai
    } else {
        Intent::General
    }
}

/// Builds the natural-language answer for a set of matches.
fn generate_response(workflows: &[WorkflowSummary]) -> String {
    if workflows.is_empty() {
        return "I couldn't find any workflows matching your request. Try searching for \
                specific services like 'Slack', 'OpenAI', or 'Email automation'."
            .to_string();
    }

    let mut parts = Vec::new();

    if let [workflow] = workflows {
        parts.push(format!("I found a perfect match: **{}**", workflow.name));
        parts.push(format!(
            "This is a {} workflow that {}",
            workflow.trigger_type.to_lowercase(),
            workflow.description.to_lowercase()
        ));
    } else {
        parts.push(format!("I found {} relevant workflows:", workflows.len()));
        for (i, workflow) in workflows.iter().take(3).enumerate() {
            parts.push(format!(
                "{}. **{}** - {}",
                i + 1,
                workflow.name,
                workflow.description
            ));
        }
    }

    let mut common_integrations: Vec<&str> = Vec::new();
    for workflow in workflows {
        for integration in &workflow.integrations {
            if !common_integrations.contains(&integration.as_str()) {
                common_integrations.push(integration);
            }
        }
    }
    common_integrations.truncate(3);
    if !common_integrations.is_empty() {
        parts.push(format!(
            "\nThese workflows commonly use: {}",
            common_integrations.join(", ")
        ));
    }

    if let Some(most_common_trigger) = most_common_trigger(workflows) {
        parts.push(format!(
            "Most are {} triggered workflows.",
            most_common_trigger.to_lowercase()
        ));
    }

    parts.join("\n")
}

fn most_common_trigger(workflows: &[WorkflowSummary]) -> Option<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for workflow in workflows {
        match counts
            .iter_mut()
            .find(|(t, _)| *t == workflow.trigger_type)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((&workflow.trigger_type, 1)),
        }
    }
    counts
        .into_iter()
        .max_by_key(|(_, count)| *count)
        .map(|(trigger, _)| trigger.to_string())
}

/// Up to three follow-up suggestions keyed off the query wording.
pub fn suggestions_for(query: &str) -> Vec<String> {
    let query_lower = query.to_lowercase();

    let suggestions: &[&str] = if query_lower.contains("email") {
        &[
            "Email automation workflows",
            "Gmail integration examples",
            "Email notification systems",
        ]
    } else if query_lower.contains("ai") || query_lower.contains("openai") {
        &[
            "AI-powered workflows",
            "OpenAI integration examples",
            "Chatbot automation",
        ]
    } else if query_lower.contains("social") {
        &[
            "Social media automation",
            "Twitter integration workflows",
            "LinkedIn automation",
        ]
    } else {
        &[
            "Popular automation patterns",
            "Webhook-triggered workflows",
            "Scheduled automation examples",
        ]
    };

    suggestions.iter().take(3).map(|s| (*s).to_string()).collect()
}

/// Confidence in `[0, 1]`: match count scaled to five, boosted when query
/// words appear in a result name.
pub fn confidence_for(query: &str, workflows: &[WorkflowSummary]) -> f64 {
    if workflows.is_empty() {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let mut confidence = (workflows.len() as f64 / 5.0).min(1.0);

    let query_lower = query.to_lowercase();
    let exact_match = workflows.iter().any(|workflow| {
        let name_lower = workflow.name.to_lowercase();
        query_lower.split_whitespace().any(|word| name_lower.contains(word))
    });
    if exact_match {
        confidence += 0.2;
    }

    confidence.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_keywords_finds_terms_and_services() {
        let keywords = extract_keywords("Automate Slack alerts from Gmail");
        assert!(keywords.contains(&"slack".to_string()));
        assert!(keywords.contains(&"gmail".to_string()));
        assert!(keywords.contains(&"alert".to_string()));
        assert!(keywords.contains(&"automate".to_string()));
    }

    #[test]
    fn test_extract_keywords_deduplicates() {
        let keywords = extract_keywords("slack slack slack");
        assert_eq!(
            keywords.iter().filter(|k| *k == "slack").count(),
            1
        );
    }

    #[test]
    fn test_detect_intent() {
        assert_eq!(detect_intent("automate my daily report"), Intent::Automation);
        assert_eq!(detect_intent("connect shopify to sheets"), Intent::Integration);
        assert_eq!(detect_intent("run on button click"), Intent::Manual);
        assert_eq!(detect_intent("an intelligent helper"), Intent::Ai);
        assert_eq!(detect_intent("something else entirely"), Intent::General);
    }

    #[test]
    fn test_suggestions_cap_at_three() {
        assert_eq!(suggestions_for("email stuff").len(), 3);
        assert_eq!(suggestions_for("anything").len(), 3);
    }

    #[test]
    fn test_confidence_empty_is_zero() {
        assert!((confidence_for("query", &[]) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_json_list_tolerates_garbage() {
        assert_eq!(parse_json_list(""), Vec::<String>::new());
        assert_eq!(parse_json_list("not json"), Vec::<String>::new());
        assert_eq!(parse_json_list(r#"["a","b"]"#), vec!["a", "b"]);
    }
}
