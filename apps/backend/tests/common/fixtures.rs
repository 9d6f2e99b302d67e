//! Test fixtures and factory functions for creating test data.

use serde_json::json;

/// Repository URL configured by `TestContext::with_library`.
pub const LIBRARY_URL: &str = "https://example.com/me/notes.git";

/// Checkout directory name derived from `LIBRARY_URL`.
pub const LIBRARY_NAME: &str = "notes";

/// Two small vocabulary tables under separate headings.
pub const VOCAB_MD: &str = "\
# Spanish verbs

| Word | Meaning | Note |
|------|:-------:|------|
| comer | to eat | regular |
| vivir | to live | regular |

Some prose between the tables.

## Japanese

| Kanji | Reading | Meaning |
|---|---|---|
| 水 | みず | water |
";

/// Generate a markdown table with `rows` arithmetic questions.
pub fn arithmetic_md(title: &str, rows: usize) -> String {
    let body: String = (1..=rows)
        .map(|i| format!("| {}+{} | {} |\n", i, i, i + i))
        .collect();
    format!("# {}\n\n| Q | A |\n|---|---|\n{}", title, body)
}

/// Create an open file request body.
pub fn open_file_request(file: &str) -> serde_json::Value {
    json!({ "file": file })
}

/// Create a start quiz request body.
pub fn start_quiz_request(table: Option<&str>, query: &str, answer: &str) -> serde_json::Value {
    json!({
        "table": table,
        "query_column": query,
        "answer_column": answer
    })
}

/// Create an answer request body.
pub fn answer_request(answer: &str) -> serde_json::Value {
    json!({ "answer": answer })
}

/// Create an update settings request body.
pub fn update_settings_request(
    repository_url: Option<&str>,
    query_columns: Option<&str>,
    answer_columns: Option<&str>,
) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    if let Some(url) = repository_url {
        obj.insert("repository_url".to_string(), json!(url));
    }
    if let Some(columns) = query_columns {
        obj.insert("query_columns".to_string(), json!(columns));
    }
    if let Some(columns) = answer_columns {
        obj.insert("answer_columns".to_string(), json!(columns));
    }
    serde_json::Value::Object(obj)
}
