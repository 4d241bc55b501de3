use flowdoc::assistant::{Intent, WorkflowAssistant, detect_intent};
use rusqlite::Connection;

fn seeded_assistant() -> WorkflowAssistant {
    let conn = Connection::open_in_memory().expect("in-memory database");
    conn.execute_batch(
        "CREATE TABLE workflows (
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            trigger_type TEXT NOT NULL,
            complexity TEXT NOT NULL,
            node_count INTEGER NOT NULL,
            active INTEGER NOT NULL,
            integrations TEXT NOT NULL,
            tags TEXT NOT NULL
        );
        INSERT INTO workflows VALUES
            ('Slack Alert Pipeline', 'Sends Slack alerts for new orders',
             'Webhook', 'medium', 8, 1, '[\"Slack\",\"Shopify\"]', '[\"alerts\"]'),
            ('Daily Email Digest', 'Emails a daily summary spreadsheet',
             'Scheduled', 'low', 4, 1, '[\"Gmail\",\"Google Sheets\"]', '[]'),
            ('Legacy Email Sync', 'Syncs email attachments to a database',
             'Scheduled', 'high', 15, 0, '[\"Gmail\"]', '[\"legacy\"]'),
            ('Manual Export', 'Exports data on button click',
             'Manual', 'low', 3, 1, '[]', '[]');",
    )
    .expect("seed data");
    WorkflowAssistant::with_connection(conn)
}

#[test]
fn search_matches_name_and_description() {
    let assistant = seeded_assistant();
    let results = assistant.search("slack notifications", 5).expect("search");
    assert!(results.iter().any(|w| w.name == "Slack Alert Pipeline"));
}

#[test]
fn active_workflows_sort_before_inactive() {
    let assistant = seeded_assistant();
    let results = assistant.search("email", 5).expect("search");
    assert!(results.len() >= 2);
    let first_inactive = results.iter().position(|w| !w.active);
    let last_active = results.iter().rposition(|w| w.active);
    if let (Some(inactive), Some(active)) = (first_inactive, last_active) {
        assert!(active < inactive, "active results must come first");
    }
}

#[test]
fn automation_intent_filters_to_scheduled_triggers() {
    let assistant = seeded_assistant();
    // "automate" + "email" detects Automation intent
    let results = assistant.search("automate email daily", 5).expect("search");
    assert!(!results.is_empty());
    assert!(
        results
            .iter()
            .all(|w| w.trigger_type == "Scheduled" || w.trigger_type == "Complex")
    );
}

#[test]
fn integration_intent_filters_to_webhooks() {
    let assistant = seeded_assistant();
    let results = assistant.search("connect slack", 5).expect("search");
    assert!(results.iter().all(|w| w.trigger_type == "Webhook"));
}

#[test]
fn limit_is_respected() {
    let assistant = seeded_assistant();
    let results = assistant.search("email", 1).expect("search");
    assert_eq!(results.len(), 1);
}

#[test]
fn integrations_column_deserializes() {
    let assistant = seeded_assistant();
    let results = assistant.search("slack", 5).expect("search");
    let slack = results
        .iter()
        .find(|w| w.name == "Slack Alert Pipeline")
        .expect("seeded row");
    assert_eq!(slack.integrations, vec!["Slack", "Shopify"]);
}

#[test]
fn query_builds_answer_with_suggestions_and_confidence() {
    let assistant = seeded_assistant();
    let answer = assistant.query("slack alerts", 5).expect("query");
    assert!(!answer.response.is_empty());
    assert!(!answer.workflows.is_empty());
    assert_eq!(answer.suggestions.len(), 3);
    assert!(answer.confidence > 0.0 && answer.confidence <= 1.0);
}

#[test]
fn no_match_gives_guidance_and_zero_confidence() {
    let assistant = seeded_assistant();
    let answer = assistant.query("xyzzy plugh", 5).expect("query");
    assert!(answer.workflows.is_empty());
    assert!(answer.response.contains("couldn't find any workflows"));
    assert!((answer.confidence - 0.0).abs() < f64::EPSILON);
}

#[test]
fn open_works_against_a_database_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("workflows.db");
    let conn = Connection::open(&path).expect("create database");
    conn.execute_batch(
        "CREATE TABLE workflows (
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            trigger_type TEXT NOT NULL,
            complexity TEXT NOT NULL,
            node_count INTEGER NOT NULL,
            active INTEGER NOT NULL,
            integrations TEXT NOT NULL,
            tags TEXT NOT NULL
        );
        INSERT INTO workflows VALUES
            ('Slack Notifier', 'Posts to Slack', 'Webhook', 'low', 2, 1, '[]', '[]');",
    )
    .expect("seed data");
    drop(conn);

    let assistant = WorkflowAssistant::open(&path).expect("open");
    let results = assistant.search("slack", 5).expect("search");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Slack Notifier");
}

#[test]
fn intent_detection_matches_phrasing() {
    assert_eq!(detect_intent("schedule a weekly report"), Intent::Automation);
    assert_eq!(detect_intent("sync two systems"), Intent::Integration);
    assert_eq!(detect_intent("run it manually"), Intent::Manual);
    assert_eq!(detect_intent("a chat assistant"), Intent::Ai);
    assert_eq!(detect_intent("anything"), Intent::General);
}
